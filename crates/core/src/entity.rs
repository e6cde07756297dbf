//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities are compared by identity, not by attribute values: two instances
/// carrying the same identifier are the same entity even when the rest of
/// their state differs.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
