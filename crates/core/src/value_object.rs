//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two value
/// objects with the same attribute values are interchangeable. To "modify"
/// one, construct a new one. This is the counterpart of [`crate::Entity`],
/// which compares by identifier.
///
/// The bounds are the minimum a value needs to behave like one: cheap to
/// copy around, structurally comparable, printable in tests and logs.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
