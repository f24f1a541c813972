//! ECS Components module
//!
//! The closed set of component kinds an entity can carry. Every kind is a
//! plain data record; presence on an entity is the only signal systems use.

pub mod transform;
pub mod bounding;
pub mod gravity;
pub mod input;
pub mod jump;
pub mod lifespan;
pub mod animation;
pub mod sound;
pub mod state;

pub use transform::Transform;
pub use bounding::{BoundingBox, BoundingConvex};
pub use gravity::Gravity;
pub use input::Input;
pub use jump::Jump;
pub use lifespan::LifeSpan;
pub use animation::Animation;
pub use sound::Sound;
pub use state::State;
