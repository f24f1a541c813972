//! Entity manager
//!
//! Owns every entity record, the component store, the committed live list
//! and the tag index. Structural changes are two-phase: `add_entity` and
//! `destroy` only stage work, and [`EntityManager::update`] is the single
//! sync point where the live list and tag index change. Component
//! attach/detach is not deferred.
//!
//! Query results are owned snapshots in creation order. Systems can spawn
//! or destroy entities while walking a result without affecting it.

use super::component::{Component, ComponentKind, ComponentMask, ComponentSet, ComponentStore};
use super::components::Transform;
use super::entity::{EntityHandle, EntityId, EntityKey, EntityRecord, Lifecycle};
use serde::Serialize;
use slotmap::SlotMap;
use std::collections::HashMap;

/// Outcome of one sync point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncReport {
    /// Entities committed to the live set
    pub added: usize,
    /// Entities erased
    pub removed: usize,
}

/// Inspector row describing one entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitySummary {
    /// Entity id
    pub id: EntityId,
    /// Entity tag
    pub tag: String,
    /// Alive flag
    pub alive: bool,
    /// Attached component kinds
    pub components: Vec<ComponentKind>,
    /// Transform position, if any
    pub position: Option<(f32, f32)>,
}

/// Entity manager
pub struct EntityManager {
    records: SlotMap<EntityKey, EntityRecord>,
    components: ComponentStore,
    live: Vec<EntityHandle>,
    pending_add: Vec<EntityHandle>,
    pending_remove: Vec<EntityHandle>,
    by_tag: HashMap<String, Vec<EntityHandle>>,
    next_id: EntityId,
}

#[cold]
#[track_caller]
fn stale_handle(handle: EntityHandle) -> ! {
    panic!(
        "entity {} was erased at a previous sync point; its handle is stale",
        handle.id()
    )
}

impl EntityManager {
    /// Create an empty manager; ids start at 0
    pub fn new() -> Self {
        Self {
            records: SlotMap::with_key(),
            components: ComponentStore::default(),
            live: Vec::new(),
            pending_add: Vec::new(),
            pending_remove: Vec::new(),
            by_tag: HashMap::new(),
            next_id: 0,
        }
    }

    /// Create an entity tagged `tag`
    ///
    /// The handle is usable at once (components can be attached), but the
    /// entity stays out of every query until the next [`update`](Self::update).
    pub fn add_entity(&mut self, tag: impl Into<String>) -> EntityHandle {
        let id = self.next_id;
        self.next_id += 1;

        let tag = tag.into();
        log::trace!("Adding entity {} ({})", id, tag);

        let key = self.records.insert(EntityRecord::new(id, tag));
        let handle = EntityHandle::new(key, id);
        self.pending_add.push(handle);
        handle
    }

    /// Mark an entity dead
    ///
    /// It leaves every query immediately and is erased at the next sync.
    /// Destroying a dead or already erased entity does nothing.
    pub fn destroy(&mut self, handle: EntityHandle) {
        let Some(record) = self.records.get_mut(handle.key()) else {
            return;
        };
        if !record.alive {
            return;
        }

        record.alive = false;
        log::trace!("Destroying entity {} ({})", record.id, record.tag);
        self.pending_remove.push(handle);
    }

    /// Apply deferred structural changes
    ///
    /// Commits pending entities to the live list and tag index in creation
    /// order, then erases every dead entity with all of its components.
    /// Call exactly once per frame, after the gameplay systems.
    pub fn update(&mut self) -> SyncReport {
        let added = self.pending_add.len();
        for handle in std::mem::take(&mut self.pending_add) {
            if let Some(record) = self.records.get_mut(handle.key()) {
                record.lifecycle = Lifecycle::Live;
                self.live.push(handle);
                self.by_tag.entry(record.tag.clone()).or_default().push(handle);
            }
        }

        let removed = self.pending_remove.len();
        if removed > 0 {
            for handle in std::mem::take(&mut self.pending_remove) {
                self.records.remove(handle.key());
                self.components.remove_all(handle.key());
            }

            let records = &self.records;
            self.live.retain(|h| records.contains_key(h.key()));
            self.by_tag.retain(|_, handles| {
                handles.retain(|h| records.contains_key(h.key()));
                !handles.is_empty()
            });
        }

        if added > 0 || removed > 0 {
            log::trace!("Entity sync: {} added, {} removed, {} live", added, removed, self.live.len());
        }
        SyncReport { added, removed }
    }

    fn record(&self, handle: EntityHandle) -> &EntityRecord {
        match self.records.get(handle.key()) {
            Some(record) => record,
            None => stale_handle(handle),
        }
    }

    fn record_mut(&mut self, handle: EntityHandle) -> &mut EntityRecord {
        match self.records.get_mut(handle.key()) {
            Some(record) => record,
            None => stale_handle(handle),
        }
    }

    // Component access

    /// Attach a component, replacing and returning any previous one of the same kind
    pub fn add<T: Component>(&mut self, handle: EntityHandle, component: T) -> Option<T> {
        self.record_mut(handle).mask.insert(T::KIND.mask());
        T::storage_mut(&mut self.components).insert(handle.key(), component)
    }

    /// Detach a component
    pub fn remove<T: Component>(&mut self, handle: EntityHandle) -> Option<T> {
        self.record_mut(handle).mask.remove(T::KIND.mask());
        T::storage_mut(&mut self.components).remove(handle.key())
    }

    /// Whether the entity carries a component of kind `T`
    pub fn has<T: Component>(&self, handle: EntityHandle) -> bool {
        self.record(handle).mask.contains(T::KIND.mask())
    }

    /// Borrow a component
    pub fn get<T: Component>(&self, handle: EntityHandle) -> Option<&T> {
        self.record(handle);
        T::storage(&self.components).get(handle.key())
    }

    /// Borrow a component mutably
    pub fn get_mut<T: Component>(&mut self, handle: EntityHandle) -> Option<&mut T> {
        self.record(handle);
        T::storage_mut(&mut self.components).get_mut(handle.key())
    }

    /// Read-only view of an entity
    pub fn entity(&self, handle: EntityHandle) -> EntityRef<'_> {
        self.record(handle);
        EntityRef { manager: self, handle }
    }

    /// Mutable view of an entity
    pub fn entity_mut(&mut self, handle: EntityHandle) -> EntityMut<'_> {
        self.record(handle);
        EntityMut { manager: self, handle }
    }

    // Entity observers

    /// Whether the entity exists and has not been destroyed
    ///
    /// Returns `false` for erased entities rather than panicking.
    pub fn is_alive(&self, handle: EntityHandle) -> bool {
        self.records.get(handle.key()).is_some_and(|r| r.alive)
    }

    /// Whether the entity has not been erased yet (it may be dead)
    pub fn contains(&self, handle: EntityHandle) -> bool {
        self.records.contains_key(handle.key())
    }

    /// Id of an entity, panicking on a stale handle like every other accessor
    pub fn id(&self, handle: EntityHandle) -> EntityId {
        self.record(handle).id
    }

    /// Tag of an entity
    pub fn tag(&self, handle: EntityHandle) -> &str {
        &self.record(handle).tag
    }

    /// Kinds attached to an entity
    pub fn component_kinds(&self, handle: EntityHandle) -> Vec<ComponentKind> {
        ComponentKind::from_mask(self.record(handle).mask)
    }

    // Queries

    /// Live entities carrying every kind in `S`, in creation order
    ///
    /// `S` is a component type or a tuple of component types.
    pub fn query<S: ComponentSet>(&self) -> Vec<EntityHandle> {
        self.filter_handles(&self.live, S::mask(), ComponentMask::empty())
    }

    /// Live entities tagged `tag`, in creation order
    ///
    /// Unknown tags yield an empty result.
    pub fn query_by_tag(&self, tag: &str) -> Vec<EntityHandle> {
        self.filter_handles(self.tagged_handles(tag), ComponentMask::empty(), ComponentMask::empty())
    }

    /// Live entities tagged `tag` that also carry every kind in `S`
    pub fn query_tagged<S: ComponentSet>(&self, tag: &str) -> Vec<EntityHandle> {
        self.filter_handles(self.tagged_handles(tag), S::mask(), ComponentMask::empty())
    }

    /// Every live entity, in creation order
    pub fn all(&self) -> Vec<EntityHandle> {
        self.filter_handles(&self.live, ComponentMask::empty(), ComponentMask::empty())
    }

    pub(super) fn tagged_handles(&self, tag: &str) -> &[EntityHandle] {
        self.by_tag.get(tag).map_or(&[] as &[EntityHandle], Vec::as_slice)
    }

    pub(super) fn live_handles(&self) -> &[EntityHandle] {
        &self.live
    }

    pub(super) fn filter_handles(
        &self,
        handles: &[EntityHandle],
        required: ComponentMask,
        excluded: ComponentMask,
    ) -> Vec<EntityHandle> {
        handles
            .iter()
            .copied()
            .filter(|h| {
                self.records.get(h.key()).is_some_and(|r| {
                    r.is_visible() && r.mask.contains(required) && !r.mask.intersects(excluded)
                })
            })
            .collect()
    }

    // Bookkeeping

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.live
            .iter()
            .filter(|h| self.records.get(h.key()).is_some_and(EntityRecord::is_visible))
            .count()
    }

    /// Whether there is no live entity
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entities created since the last sync
    pub fn pending_len(&self) -> usize {
        self.pending_add.len()
    }

    /// Total number of ids handed out so far
    pub fn total_created(&self) -> u64 {
        self.next_id
    }

    /// Tags in the index with their entity counts, sorted by tag
    pub fn tags(&self) -> Vec<(&str, usize)> {
        let mut tags: Vec<(&str, usize)> = self
            .by_tag
            .iter()
            .map(|(tag, handles)| (tag.as_str(), handles.len()))
            .collect();
        tags.sort_unstable();
        tags
    }

    /// Inspector rows for every committed entity, including dead ones awaiting erasure
    pub fn snapshot(&self) -> Vec<EntitySummary> {
        self.live
            .iter()
            .filter_map(|&h| {
                let record = self.records.get(h.key())?;
                Some(EntitySummary {
                    id: record.id,
                    tag: record.tag.clone(),
                    alive: record.alive,
                    components: ComponentKind::from_mask(record.mask),
                    position: self.get::<Transform>(h).map(|t| (t.pos.x, t.pos.y)),
                })
            })
            .collect()
    }
}

impl Default for EntityManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of one entity
pub struct EntityRef<'a> {
    manager: &'a EntityManager,
    handle: EntityHandle,
}

impl<'a> EntityRef<'a> {
    /// Entity handle
    pub fn handle(&self) -> EntityHandle {
        self.handle
    }

    /// Entity id
    pub fn id(&self) -> EntityId {
        self.handle.id()
    }

    /// Entity tag
    pub fn tag(&self) -> &'a str {
        self.manager.tag(self.handle)
    }

    /// Alive flag
    pub fn is_alive(&self) -> bool {
        self.manager.is_alive(self.handle)
    }

    /// Whether a component of kind `T` is attached
    pub fn has<T: Component>(&self) -> bool {
        self.manager.has::<T>(self.handle)
    }

    /// Borrow a component
    pub fn get<T: Component>(&self) -> Option<&'a T> {
        self.manager.get::<T>(self.handle)
    }

    /// Attached component kinds
    pub fn components(&self) -> Vec<ComponentKind> {
        self.manager.component_kinds(self.handle)
    }
}

/// Mutable view of one entity
pub struct EntityMut<'a> {
    manager: &'a mut EntityManager,
    handle: EntityHandle,
}

impl EntityMut<'_> {
    /// Entity handle
    pub fn handle(&self) -> EntityHandle {
        self.handle
    }

    /// Entity id
    pub fn id(&self) -> EntityId {
        self.handle.id()
    }

    /// Entity tag
    pub fn tag(&self) -> &str {
        self.manager.tag(self.handle)
    }

    /// Alive flag
    pub fn is_alive(&self) -> bool {
        self.manager.is_alive(self.handle)
    }

    /// Whether a component of kind `T` is attached
    pub fn has<T: Component>(&self) -> bool {
        self.manager.has::<T>(self.handle)
    }

    /// Borrow a component
    pub fn get<T: Component>(&self) -> Option<&T> {
        self.manager.get::<T>(self.handle)
    }

    /// Borrow a component mutably
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.manager.get_mut::<T>(self.handle)
    }

    /// Attach a component, replacing any previous one of the same kind
    pub fn add<T: Component>(&mut self, component: T) -> &mut Self {
        self.manager.add(self.handle, component);
        self
    }

    /// Builder pattern: Attach a component
    pub fn with<T: Component>(mut self, component: T) -> Self {
        self.add(component);
        self
    }

    /// Detach a component
    pub fn remove<T: Component>(&mut self) -> Option<T> {
        self.manager.remove::<T>(self.handle)
    }

    /// Mark the entity dead
    pub fn destroy(&mut self) {
        self.manager.destroy(self.handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{Gravity, Input, LifeSpan};
    use crate::foundation::math::Vec2;
    use approx::assert_relative_eq;

    fn ids(handles: &[EntityHandle]) -> Vec<EntityId> {
        handles.iter().map(EntityHandle::id).collect()
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut manager = EntityManager::new();
        let a = manager.add_entity("tile");
        let b = manager.add_entity("tile");
        manager.destroy(a);
        manager.update();
        let c = manager.add_entity("tile");

        assert_eq!((a.id(), b.id(), c.id()), (0, 1, 2));
        assert_eq!(manager.total_created(), 3);
    }

    #[test]
    fn test_pending_entities_hidden_until_sync() {
        let mut manager = EntityManager::new();
        let player = manager.add_entity("player");
        manager.add(player, Transform::new(Vec2::zeros()));

        assert!(manager.all().is_empty());
        assert!(manager.query::<Transform>().is_empty());
        assert!(manager.query_by_tag("player").is_empty());
        assert_eq!(manager.pending_len(), 1);

        let report = manager.update();
        assert_eq!(report, SyncReport { added: 1, removed: 0 });
        assert_eq!(manager.all(), vec![player]);
        assert_eq!(manager.query::<Transform>(), vec![player]);
        assert_eq!(manager.query_by_tag("player"), vec![player]);
    }

    #[test]
    fn test_destroyed_entities_hidden_before_erasure() {
        let mut manager = EntityManager::new();
        let a = manager.add_entity("enemy");
        let b = manager.add_entity("enemy");
        manager.update();

        manager.destroy(a);
        assert_eq!(manager.all(), vec![b]);
        assert_eq!(manager.query_by_tag("enemy"), vec![b]);
        assert!(manager.contains(a));
        assert!(!manager.is_alive(a));

        let report = manager.update();
        assert_eq!(report.removed, 1);
        assert!(!manager.contains(a));
        assert_eq!(manager.all(), vec![b]);
    }

    #[test]
    fn test_add_and_destroy_same_frame() {
        let mut manager = EntityManager::new();
        let ghost = manager.add_entity("ghost");
        manager.destroy(ghost);

        assert!(manager.all().is_empty());
        manager.update();
        assert!(manager.all().is_empty());
        assert!(manager.query_by_tag("ghost").is_empty());
        assert!(manager.tags().is_empty());
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut manager = EntityManager::new();
        let a = manager.add_entity("bullet");
        let b = manager.add_entity("bullet");
        manager.update();

        manager.destroy(a);
        manager.destroy(a);
        let report = manager.update();
        assert_eq!(report.removed, 1);
        assert_eq!(manager.all(), vec![b]);

        // Erased handles are ignored too
        manager.destroy(a);
        assert_eq!(manager.update(), SyncReport::default());
    }

    #[test]
    fn test_creation_order_is_preserved() {
        let mut manager = EntityManager::new();
        let handles: Vec<_> = (0..5)
            .map(|i| manager.add_entity(if i % 2 == 0 { "even" } else { "odd" }))
            .collect();
        manager.update();

        assert_eq!(manager.all(), handles);
        assert_eq!(ids(&manager.query_by_tag("even")), vec![0, 2, 4]);
        assert_eq!(ids(&manager.query_by_tag("odd")), vec![1, 3]);
    }

    #[test]
    fn test_tag_index_matches_live_set() {
        let mut manager = EntityManager::new();
        let tags = ["tile", "dec", "player", "tile", "bullet", "dec", "tile"];
        let handles: Vec<_> = tags.iter().map(|t| manager.add_entity(*t)).collect();
        manager.update();

        manager.destroy(handles[0]);
        manager.destroy(handles[4]);
        manager.add_entity("coin");
        manager.update();

        let all = manager.all();
        for (tag, count) in manager.tags() {
            let expected: Vec<_> = all.iter().copied().filter(|&h| manager.tag(h) == tag).collect();
            assert_eq!(manager.query_by_tag(tag), expected);
            assert_eq!(count, expected.len());
        }
        let indexed: usize = manager.tags().iter().map(|(_, n)| n).sum();
        assert_eq!(indexed, all.len());
        assert!(manager.query_by_tag("bullet").is_empty());
    }

    #[test]
    fn test_unknown_tag_is_empty() {
        let manager = EntityManager::new();
        assert!(manager.query_by_tag("nothing").is_empty());
    }

    #[test]
    fn test_attach_detach_is_immediate() {
        let mut manager = EntityManager::new();
        let e = manager.add_entity("player");

        assert!(!manager.has::<Gravity>(e));
        assert!(manager.get::<Gravity>(e).is_none());

        manager.add(e, Gravity::new(0.75));
        assert!(manager.has::<Gravity>(e));
        assert_relative_eq!(manager.get::<Gravity>(e).unwrap().gravity, 0.75);

        let removed = manager.remove::<Gravity>(e);
        assert_eq!(removed, Some(Gravity::new(0.75)));
        assert!(!manager.has::<Gravity>(e));
        assert!(manager.remove::<Gravity>(e).is_none());
    }

    #[test]
    fn test_add_replaces_existing_component() {
        let mut manager = EntityManager::new();
        let e = manager.add_entity("player");

        assert!(manager.add(e, Gravity::new(1.0)).is_none());
        assert_eq!(manager.add(e, Gravity::new(2.0)), Some(Gravity::new(1.0)));
        assert_relative_eq!(manager.get::<Gravity>(e).unwrap().gravity, 2.0);
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut manager = EntityManager::new();
        let e = manager.add_entity("player");
        manager.add(e, Transform::new(Vec2::new(1.0, 2.0)));

        if let Some(transform) = manager.get_mut::<Transform>(e) {
            transform.velocity = Vec2::new(3.0, 0.0);
            transform.step();
        }
        assert_relative_eq!(manager.get::<Transform>(e).unwrap().pos, Vec2::new(4.0, 2.0));
    }

    #[test]
    fn test_multi_kind_and_tag_queries() {
        let mut manager = EntityManager::new();
        let player = manager.add_entity("player");
        manager.add(player, Transform::default());
        manager.add(player, Input::new());
        let statue = manager.add_entity("player");
        manager.add(statue, Transform::default());
        let tile = manager.add_entity("tile");
        manager.add(tile, Transform::default());
        manager.update();

        assert_eq!(manager.query::<(Transform, Input)>(), vec![player]);
        assert_eq!(manager.query::<Transform>(), vec![player, statue, tile]);
        assert_eq!(manager.query_tagged::<Input>("player"), vec![player]);
        assert!(manager.query_tagged::<Input>("tile").is_empty());
    }

    #[test]
    fn test_query_snapshot_unaffected_by_spawn() {
        let mut manager = EntityManager::new();
        for _ in 0..3 {
            let e = manager.add_entity("player");
            manager.add(e, Input::new());
            manager.add(e, Transform::default());
        }
        manager.update();

        let snapshot = manager.query::<Input>();
        let before = snapshot.clone();
        let mut visited = 0;
        for &e in &snapshot {
            let pos = manager.get::<Transform>(e).map_or(Vec2::zeros(), |t| t.pos);
            let bullet = manager.add_entity("bullet");
            manager.add(bullet, Transform::new(pos));
            manager.add(bullet, Input::new());
            visited += 1;
        }

        assert_eq!(visited, 3);
        assert_eq!(snapshot, before);
        assert_eq!(manager.query::<Input>().len(), 3);

        manager.update();
        assert_eq!(manager.query::<Input>().len(), 6);
    }

    #[test]
    fn test_erase_drops_components() {
        let mut manager = EntityManager::new();
        let e = manager.add_entity("bullet");
        manager.add(e, LifeSpan::new(10, 0));
        manager.update();

        manager.destroy(e);
        // Still readable until the sync point
        assert!(manager.get::<LifeSpan>(e).is_some());
        manager.update();
        assert!(!manager.contains(e));
        assert!(manager.query::<LifeSpan>().is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_erase() {
        let mut manager = EntityManager::new();
        let a = manager.add_entity("tile");
        manager.update();
        manager.destroy(a);
        manager.update();
        let b = manager.add_entity("tile");

        assert_eq!(manager.id(b), 1);
        assert_eq!(manager.id(b), b.id());
    }

    #[test]
    #[should_panic(expected = "stale")]
    fn test_stale_handle_access_panics() {
        let mut manager = EntityManager::new();
        let e = manager.add_entity("bullet");
        manager.add(e, Transform::default());
        manager.update();
        manager.destroy(e);
        manager.update();

        let _ = manager.get::<Transform>(e);
    }

    #[test]
    fn test_stale_handle_does_not_alias_new_entity() {
        let mut manager = EntityManager::new();
        let old = manager.add_entity("bullet");
        manager.update();
        manager.destroy(old);
        manager.update();

        let new = manager.add_entity("bullet");
        manager.update();
        assert_ne!(old, new);
        assert!(!manager.is_alive(old));
        assert!(manager.is_alive(new));
    }

    #[test]
    fn test_entity_views() {
        let mut manager = EntityManager::new();
        let e = manager.add_entity("player");
        manager
            .entity_mut(e)
            .with(Transform::new(Vec2::new(2.0, 3.0)))
            .with(Input::new())
            .with(Gravity::new(1.0));

        {
            let mut view = manager.entity_mut(e);
            view.remove::<Gravity>();
            if let Some(input) = view.get_mut::<Input>() {
                input.left = true;
            }
        }

        let view = manager.entity(e);
        assert_eq!(view.id(), 0);
        assert_eq!(view.tag(), "player");
        assert!(view.is_alive());
        assert!(view.get::<Input>().unwrap().left);
        assert_eq!(view.components(), vec![ComponentKind::Transform, ComponentKind::Input]);

        manager.entity_mut(e).destroy();
        assert!(!manager.entity(e).is_alive());
    }

    #[test]
    fn test_snapshot_rows() {
        let mut manager = EntityManager::new();
        let e = manager.add_entity("tile");
        manager.add(e, Transform::new(Vec2::new(32.0, 688.0)));
        manager.add_entity("dec");
        manager.update();

        let rows = manager.snapshot();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tag, "tile");
        assert_eq!(rows[0].position, Some((32.0, 688.0)));
        assert_eq!(rows[1].components, Vec::<ComponentKind>::new());
    }
}
