//! Default data loaded at startup and restored by a reset.

use enrollhub_auth::Role;
use enrollhub_core::{CourseId, StudentId};

use crate::{Enrollment, Student, User};

const ENROLLMENTS: &[(&str, &str)] = &[
    ("650610001", "261207"),
    ("650610001", "261497"),
    ("650610002", "261207"),
    ("650610002", "261497"),
    ("650610003", "269101"),
    ("650610003", "261497"),
];

// (studentId, firstName, lastName, program, courses)
const STUDENTS: &[(&str, &str, &str, &str, &[&str])] = &[
    ("650610001", "Matt", "Damon", "CPE", &["261207", "261497"]),
    ("650610002", "Cillian", "Murphy", "CPE", &["261207", "261497"]),
    ("650610003", "Emily", "Blunt", "ISNE", &["269101", "261497"]),
];

// (username, studentId, role)
const USERS: &[(&str, Option<&str>, Role)] = &[
    ("user1@abc.com", None, Role::Admin),
    ("user2@abc.com", None, Role::Admin),
    ("user4@abc.com", Some("650610001"), Role::Student),
    ("user5@abc.com", Some("650610002"), Role::Student),
    ("user6@abc.com", Some("650610003"), Role::Student),
];

pub fn enrollments() -> Vec<Enrollment> {
    ENROLLMENTS
        .iter()
        .filter_map(|(s, c)| {
            Some(Enrollment::new(
                StudentId::parse(*s).ok()?,
                CourseId::parse(*c).ok()?,
            ))
        })
        .collect()
}

pub fn students() -> Vec<Student> {
    STUDENTS
        .iter()
        .filter_map(|(id, first, last, program, courses)| {
            Some(Student {
                student_id: StudentId::parse(*id).ok()?,
                first_name: first.to_string(),
                last_name: last.to_string(),
                program: program.to_string(),
                courses: courses
                    .iter()
                    .map(|c| CourseId::parse(*c))
                    .collect::<Result<_, _>>()
                    .ok()?,
            })
        })
        .collect()
}

pub fn users() -> Vec<User> {
    USERS
        .iter()
        .filter_map(|(username, student_id, role)| {
            let student_id = match student_id {
                Some(s) => Some(StudentId::parse(*s).ok()?),
                None => None,
            };
            Some(User {
                username: username.to_string(),
                student_id,
                role: *role,
            })
        })
        .collect()
}
