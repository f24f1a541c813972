//! Query builder for filtered entity iteration
//!
//! Combines required kinds, excluded kinds and an optional tag into one
//! filter. Results follow the manager's creation order and never include
//! pending or dead entities.

use super::component::{ComponentMask, ComponentSet};
use super::entity::EntityHandle;
use super::manager::EntityManager;

/// Entity filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    required: ComponentMask,
    excluded: ComponentMask,
    tag: Option<String>,
}

impl Query {
    /// Create a query matching every live entity
    pub fn new() -> Self {
        Self {
            required: ComponentMask::empty(),
            excluded: ComponentMask::empty(),
            tag: None,
        }
    }

    /// Require every kind in `S`
    pub fn with<S: ComponentSet>(mut self) -> Self {
        self.required |= S::mask();
        self
    }

    /// Reject entities carrying any kind in `S`
    pub fn without<S: ComponentSet>(mut self) -> Self {
        self.excluded |= S::mask();
        self
    }

    /// Require a raw set of kinds
    pub fn with_mask(mut self, mask: ComponentMask) -> Self {
        self.required |= mask;
        self
    }

    /// Restrict to one tag
    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Required kinds
    pub fn required(&self) -> ComponentMask {
        self.required
    }

    /// Evaluate against `manager`
    pub fn run(&self, manager: &EntityManager) -> Vec<EntityHandle> {
        manager.run_query(self)
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityManager {
    /// Live entities matching `query`, in creation order
    pub fn run_query(&self, query: &Query) -> Vec<EntityHandle> {
        let candidates = match &query.tag {
            Some(tag) => self.tagged_handles(tag),
            None => self.live_handles(),
        };
        self.filter_handles(candidates, query.required, query.excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{BoundingBox, Input, LifeSpan, Transform};
    use crate::foundation::math::Vec2;

    fn populated() -> (EntityManager, Vec<EntityHandle>) {
        let mut manager = EntityManager::new();
        let player = manager.add_entity("player");
        manager.add(player, Transform::default());
        manager.add(player, Input::new());
        manager.add(player, BoundingBox::new(Vec2::new(48.0, 64.0)));

        let tile = manager.add_entity("tile");
        manager.add(tile, Transform::default());
        manager.add(tile, BoundingBox::new(Vec2::new(64.0, 64.0)));

        let debris = manager.add_entity("tile");
        manager.add(debris, Transform::default());
        manager.add(debris, LifeSpan::new(15, 0));

        manager.update();
        (manager, vec![player, tile, debris])
    }

    #[test]
    fn test_empty_query_matches_all() {
        let (manager, handles) = populated();
        assert_eq!(Query::new().run(&manager), handles);
    }

    #[test]
    fn test_required_kinds() {
        let (manager, handles) = populated();
        let query = Query::new().with::<(Transform, BoundingBox)>();
        assert_eq!(query.run(&manager), vec![handles[0], handles[1]]);
    }

    #[test]
    fn test_raw_mask_matches_typed_set() {
        let (manager, handles) = populated();
        let mask = <(Transform, BoundingBox)>::mask();
        let query = Query::new().with_mask(mask);

        assert_eq!(query.required(), Query::new().with::<(Transform, BoundingBox)>().required());
        assert_eq!(query.run(&manager), vec![handles[0], handles[1]]);
    }

    #[test]
    fn test_excluded_kinds() {
        let (manager, handles) = populated();
        let query = Query::new().with::<Transform>().without::<Input>();
        assert_eq!(query.run(&manager), vec![handles[1], handles[2]]);
    }

    #[test]
    fn test_tag_and_kind() {
        let (manager, handles) = populated();
        let query = Query::new().tagged("tile").with::<BoundingBox>();
        assert_eq!(query.run(&manager), vec![handles[1]]);

        let nobody = Query::new().tagged("player").with::<LifeSpan>();
        assert!(nobody.run(&manager).is_empty());
    }

    #[test]
    fn test_dead_entities_excluded() {
        let (mut manager, handles) = populated();
        manager.destroy(handles[1]);
        let query = Query::new().tagged("tile");
        assert_eq!(query.run(&manager), vec![handles[2]]);
    }
}
