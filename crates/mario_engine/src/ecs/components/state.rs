//! Named state component
//!
//! `change_animation` is raised only on the frame the state changes, so
//! animation code reacts to transitions rather than to every frame.

/// Default state label
pub const DEFAULT_STATE: &str = "idle";

/// Named state with transition tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Current state label
    pub state: String,

    /// Label before the last transition
    pub previous_state: String,

    /// The last call to [`State::transition_to`] changed the state
    pub change_animation: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_STATE)
    }
}

impl State {
    /// Create a state component in `state`
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            previous_state: DEFAULT_STATE.to_string(),
            change_animation: false,
        }
    }

    /// Move to `new_state`, flagging whether this was a transition
    pub fn transition_to(&mut self, new_state: &str) {
        if self.state == new_state {
            self.change_animation = false;
        } else {
            self.previous_state = std::mem::replace(&mut self.state, new_state.to_string());
            self.change_animation = true;
        }
    }

    /// Whether the current state is `name`
    pub fn is(&self, name: &str) -> bool {
        self.state == name
    }
}
