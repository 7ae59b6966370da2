//! Durable snapshot persistence for the profile store.

mod snapshot;

pub use snapshot::SnapshotStore;
