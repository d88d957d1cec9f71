use std::collections::HashMap;
use std::sync::Arc;

use enrollhub_core::{Entity, StudentId};
use enrollhub_enrollments::{Student, User, seed};

/// Read-only lookup of user accounts and student records.
pub trait Directory: Send + Sync {
    fn find_user(&self, username: &str) -> Option<User>;
    fn find_student(&self, student_id: &StudentId) -> Option<Student>;
}

impl<S> Directory for Arc<S>
where
    S: Directory + ?Sized,
{
    fn find_user(&self, username: &str) -> Option<User> {
        (**self).find_user(username)
    }

    fn find_student(&self, student_id: &StudentId) -> Option<Student> {
        (**self).find_student(student_id)
    }
}

/// In-memory directory. Never mutated after construction, so no lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    users: HashMap<String, User>,
    students: HashMap<StudentId, Student>,
}

impl InMemoryDirectory {
    pub fn new(
        users: impl IntoIterator<Item = User>,
        students: impl IntoIterator<Item = Student>,
    ) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id().clone(), u)).collect(),
            students: students.into_iter().map(|s| (s.id().clone(), s)).collect(),
        }
    }

    /// Directory loaded with the default accounts and student records.
    pub fn seeded() -> Self {
        Self::new(seed::users(), seed::students())
    }
}

impl Directory for InMemoryDirectory {
    fn find_user(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }

    fn find_student(&self, student_id: &StudentId) -> Option<Student> {
        self.students.get(student_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enrollhub_auth::Role;

    #[test]
    fn seeded_directory_knows_default_accounts() {
        let dir = InMemoryDirectory::seeded();

        let admin = dir.find_user("user1@abc.com").unwrap();
        assert_eq!(admin.role, Role::Admin);

        let student = dir.find_user("user4@abc.com").unwrap();
        let id = student.student_id.unwrap();
        assert_eq!(dir.find_student(&id).unwrap().first_name, "Matt");
    }

    #[test]
    fn unknown_entries_are_none() {
        let dir = InMemoryDirectory::seeded();
        assert!(dir.find_user("nobody@abc.com").is_none());
        assert!(dir.find_student(&StudentId::parse("99999999").unwrap()).is_none());
    }
}
