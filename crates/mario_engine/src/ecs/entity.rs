//! Entity implementation
//!
//! An entity is an id, a tag and an alive flag; its components live in the
//! manager's per-kind storage. Callers only ever hold an [`EntityHandle`].

use super::component::ComponentMask;

slotmap::new_key_type! {
    /// Generational slot key addressing an entity record and its components
    pub struct EntityKey;
}

/// Numeric entity identifier, unique for the lifetime of its manager
pub type EntityId = u64;

/// Entity handle
///
/// Pairs the monotonic id with a generational slot key. Once the entity is
/// erased at a sync point the key goes stale and component access through the
/// handle panics instead of aliasing a newer entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityHandle {
    key: EntityKey,
    id: EntityId,
}

impl EntityHandle {
    pub(super) fn new(key: EntityKey, id: EntityId) -> Self {
        Self { key, id }
    }

    /// Get the entity ID
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub(super) fn key(&self) -> EntityKey {
        self.key
    }
}

/// Where an entity is in its create, commit, erase cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Lifecycle {
    /// Created this frame, not yet query-visible
    Pending,
    /// Committed to the live set
    Live,
}

/// Per-entity bookkeeping owned by the manager
#[derive(Debug, Clone)]
pub(super) struct EntityRecord {
    pub(super) id: EntityId,
    pub(super) tag: String,
    pub(super) alive: bool,
    pub(super) lifecycle: Lifecycle,
    pub(super) mask: ComponentMask,
}

impl EntityRecord {
    pub(super) fn new(id: EntityId, tag: String) -> Self {
        Self {
            id,
            tag,
            alive: true,
            lifecycle: Lifecycle::Pending,
            mask: ComponentMask::empty(),
        }
    }

    /// Visible to queries: committed and not destroyed
    pub(super) fn is_visible(&self) -> bool {
        self.alive && self.lifecycle == Lifecycle::Live
    }
}
