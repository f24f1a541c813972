//! Entity-Component implementation
//!
//! Entities are handles into an [`EntityManager`]; their data lives in
//! per-kind component storage. Creation and destruction are deferred to the
//! manager's sync point so systems can iterate safely while spawning and
//! destroying.

pub mod entity;
pub mod component;
pub mod components;
pub mod storage;
pub mod manager;
pub mod query;
pub mod systems;

pub use entity::{EntityHandle, EntityId};
pub use component::{Component, ComponentKind, ComponentMask, ComponentSet};
pub use manager::{EntityManager, EntityMut, EntityRef, EntitySummary, SyncReport};
pub use query::Query;
