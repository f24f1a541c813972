//! Input intent component
//!
//! Scenes translate actions into these flags; movement systems read them.

/// Directional, jump and shoot intent of a controllable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input {
    /// Jump held
    pub up: bool,
    /// Down held
    pub down: bool,
    /// Left held
    pub left: bool,
    /// Right held
    pub right: bool,
    /// Shoot held
    pub shoot: bool,
    /// Shoot is re-armed; cleared when a shot fires so one press fires once
    pub can_shoot: bool,
    /// Jump is re-armed; cleared on take-off, set again on landing
    pub can_jump: bool,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            shoot: false,
            can_shoot: true,
            can_jump: true,
        }
    }
}

impl Input {
    /// Create an input component with nothing held and both actions armed
    pub fn new() -> Self {
        Self::default()
    }
}
