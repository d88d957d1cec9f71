//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. An
/// enrollment is one: the pair `(student, course)` *is* the record, and two
/// records with the same pair are the same enrollment.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Grade {
///     course: CourseId,
///     letter: char,
/// }
///
/// impl ValueObject for Grade {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
