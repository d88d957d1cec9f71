//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are validated on construction (including deserialization), so
//! any `StudentId`/`CourseId` in hand is known to be well-formed.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a student: 8 to 10 ASCII digits (e.g. `65070001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId(String);

/// Identifier of a course: 3 to 10 ASCII digits or uppercase letters
/// (e.g. `CS101`, `261207`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseId(String);

impl StudentId {
    pub const MIN_LEN: usize = 8;
    pub const MAX_LEN: usize = 10;

    fn check(s: &str) -> DomainResult<()> {
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&s.len()) {
            return Err(DomainError::invalid_id(format!(
                "StudentId: must contain {} to {} characters",
                Self::MIN_LEN,
                Self::MAX_LEN
            )));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_id("StudentId: must contain digits only"));
        }
        Ok(())
    }
}

impl CourseId {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 10;

    fn check(s: &str) -> DomainResult<()> {
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&s.len()) {
            return Err(DomainError::invalid_id(format!(
                "CourseId: must contain {} to {} characters",
                Self::MIN_LEN,
                Self::MAX_LEN
            )));
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
        {
            return Err(DomainError::invalid_id(
                "CourseId: must contain digits or uppercase letters only",
            ));
        }
        Ok(())
    }
}

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            /// Validate and wrap an identifier.
            pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                Self::check(&value)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

impl_string_newtype!(StudentId);
impl_string_newtype!(CourseId);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_well_formed_ids() {
        assert_eq!(StudentId::parse("65070001").unwrap().as_str(), "65070001");
        assert_eq!(StudentId::parse("650610001").unwrap().as_str(), "650610001");
        assert_eq!(CourseId::parse("CS101").unwrap().as_str(), "CS101");
        assert_eq!(CourseId::parse("261207").unwrap().as_str(), "261207");
    }

    #[test]
    fn rejects_malformed_student_ids() {
        for bad in ["", "1234567", "12345678901", "6507000A", " 65070001"] {
            assert!(
                matches!(StudentId::parse(bad), Err(DomainError::InvalidId(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn rejects_malformed_course_ids() {
        for bad in ["", "CS", "cs101", "CS-101", "ABCDEFGHIJK"] {
            assert!(
                matches!(CourseId::parse(bad), Err(DomainError::InvalidId(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn deserialization_validates() {
        let ok: StudentId = serde_json::from_str("\"65070001\"").unwrap();
        assert_eq!(ok.to_string(), "65070001");

        assert!(serde_json::from_str::<StudentId>("\"abc\"").is_err());
        assert!(serde_json::from_str::<CourseId>("\"cs101\"").is_err());
    }

    proptest! {
        /// Property: any digit string within the length bounds is a valid student id.
        #[test]
        fn digit_strings_in_range_are_student_ids(s in "[0-9]{8,10}") {
            prop_assert!(StudentId::parse(s.clone()).is_ok());
            let id = StudentId::parse(s.clone()).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Property: course ids never contain lowercase letters.
        #[test]
        fn lowercase_course_ids_are_rejected(s in "[a-z][A-Z0-9]{2,9}") {
            prop_assert!(CourseId::parse(s).is_err());
        }
    }
}
