//! Read-only snapshot storage abstractions.

pub mod snapshot_store;

pub use snapshot_store::{InMemorySnapshotStore, SnapshotStore};
