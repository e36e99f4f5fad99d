//! Entity trait: records addressed by a stable identifier.

/// Entity with a strongly-typed identifier.
///
/// Snapshot stores index entities by `Id`, so ids must be hashable and unique
/// within a snapshot.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
