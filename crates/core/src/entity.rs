//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A `Person` keeps its identity while its age, job and spouse change.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
