//! Dense per-kind component storage
//!
//! Each kind is stored in a slotmap secondary map keyed by the entity's slot
//! key. Lookups are O(1) and a stale key never reaches another entity's data.

use super::entity::EntityKey;
use slotmap::SecondaryMap;

/// Storage for one component kind
pub struct ComponentStorage<T> {
    data: SecondaryMap<EntityKey, T>,
}

impl<T> ComponentStorage<T> {
    /// Create empty storage
    pub fn new() -> Self {
        Self { data: SecondaryMap::new() }
    }

    /// Attach, replacing any previous component for the entity
    pub(super) fn insert(&mut self, key: EntityKey, component: T) -> Option<T> {
        self.data.insert(key, component)
    }

    /// Detach
    pub(super) fn remove(&mut self, key: EntityKey) -> Option<T> {
        self.data.remove(key)
    }

    pub(super) fn get(&self, key: EntityKey) -> Option<&T> {
        self.data.get(key)
    }

    pub(super) fn get_mut(&mut self, key: EntityKey) -> Option<&mut T> {
        self.data.get_mut(key)
    }

    /// Number of stored components, including those of dead entities not yet erased
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no component of this kind is stored
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}
