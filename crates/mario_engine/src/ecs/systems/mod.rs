//! ECS Systems module
//!
//! Scene-independent systems. Each runs once per frame over a query
//! snapshot and leaves structural changes to the manager's sync point.

pub mod movement;
pub mod lifespan;
pub mod animation;
pub mod sound;

pub use movement::MovementSystem;
pub use lifespan::LifespanSystem;
pub use animation::AnimationSystem;
pub use sound::SoundSystem;
