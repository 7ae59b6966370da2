//! In-memory mapping from author identifier to profile aggregate.

use super::ProfileAggregate;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Process-lifetime cache of per-author aggregates. Populated lazily
/// (bootstrap on first sight of an author), mutated in place on every
/// scoring call, persisted as a whole by the snapshot store.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: HashMap<String, ProfileAggregate>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from a loaded snapshot.
    pub fn from_map(profiles: HashMap<String, ProfileAggregate>) -> Self {
        Self { profiles }
    }

    pub fn get(&self, author_id: &str) -> Option<&ProfileAggregate> {
        self.profiles.get(author_id)
    }

    /// Mutable access to an author's aggregate, inserting the result of
    /// `make` on first sight. A failing `make` leaves the store untouched.
    pub fn get_or_try_insert<E>(
        &mut self,
        author_id: &str,
        make: impl FnOnce() -> Result<ProfileAggregate, E>,
    ) -> Result<&mut ProfileAggregate, E> {
        match self.profiles.entry(author_id.to_string()) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(v) => Ok(v.insert(make()?)),
        }
    }

    pub fn contains(&self, author_id: &str) -> bool {
        self.profiles.contains_key(author_id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Whole mapping, for snapshot flushes.
    pub fn as_map(&self) -> &HashMap<String, ProfileAggregate> {
        &self.profiles
    }
}
