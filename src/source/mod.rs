//! Sources of entity state.
//!
//! Machines never store state themselves. Before dispatching, a caller
//! fetches the entity, reads its current state and derives a machine at
//! that state. How the entity is stored or locked is up to the source.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

pub mod error;

pub use error::SourceError;

/// An entity that carries a current state.
pub trait Stateful<S> {
    fn current_state(&self) -> S;
}

/// Anything entities can be fetched from by identifier.
pub trait StateSource<K: ?Sized> {
    type Entity;
    type Error;

    fn fetch(&self, id: &K) -> Result<Self::Entity, Self::Error>;
}

/// In-memory state source; `fetch` hands out clones.
#[derive(Clone, Debug)]
pub struct MemoryStateSource<K, T> {
    entities: HashMap<K, T>,
}

impl<K: Eq + Hash, T> MemoryStateSource<K, T> {
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
        }
    }

    /// Store `entity` under `id`, returning the entity it replaced.
    pub fn insert(&mut self, id: K, entity: T) -> Option<T> {
        self.entities.insert(id, entity)
    }

    pub fn with(mut self, id: K, entity: T) -> Self {
        self.entities.insert(id, entity);
        self
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<K: Eq + Hash, T> Default for MemoryStateSource<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> StateSource<K> for MemoryStateSource<K, T>
where
    K: Eq + Hash + Debug,
    T: Clone,
{
    type Entity = T;
    type Error = SourceError;

    fn fetch(&self, id: &K) -> Result<T, SourceError> {
        self.entities
            .get(id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                id: format!("{id:?}"),
            })
    }
}
