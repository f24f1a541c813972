//! Named actions and key bindings

use super::{InputEvent, KeyCode};
use std::collections::HashMap;
use std::fmt;

/// Whether an action begins (key down) or ends (key up)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionPhase {
    /// Key pressed
    Start,
    /// Key released
    End,
}

impl fmt::Display for ActionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "START",
            Self::End => "END",
        })
    }
}

/// A named gameplay action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Action name, e.g. "JUMP"
    pub name: String,
    /// Start or end
    pub phase: ActionPhase,
}

impl Action {
    /// Create an action
    pub fn new(name: impl Into<String>, phase: ActionPhase) -> Self {
        Self {
            name: name.into(),
            phase,
        }
    }

    /// Shorthand for a starting action
    pub fn start(name: impl Into<String>) -> Self {
        Self::new(name, ActionPhase::Start)
    }

    /// Shorthand for an ending action
    pub fn end(name: impl Into<String>) -> Self {
        Self::new(name, ActionPhase::End)
    }

    /// Whether this is the start of `name`
    pub fn is_start(&self, name: &str) -> bool {
        self.phase == ActionPhase::Start && self.name == name
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.phase)
    }
}

/// Key to action-name bindings of one scene
#[derive(Debug, Clone, Default)]
pub struct ActionMap {
    bindings: HashMap<KeyCode, String>,
}

impl ActionMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `action`, replacing an earlier binding
    pub fn register(&mut self, key: KeyCode, action: impl Into<String>) {
        self.bindings.insert(key, action.into());
    }

    /// Action bound to `key`
    pub fn get(&self, key: KeyCode) -> Option<&str> {
        self.bindings.get(&key).map(String::as_str)
    }

    /// Translate a key event; other events and unbound keys give `None`
    pub fn translate(&self, event: &InputEvent) -> Option<Action> {
        let (key, phase) = match *event {
            InputEvent::KeyPressed(key) => (key, ActionPhase::Start),
            InputEvent::KeyReleased(key) => (key, ActionPhase::End),
            InputEvent::Closed => return None,
        };
        self.get(key).map(|name| Action::new(name, phase))
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no key is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_press_and_release() {
        let mut map = ActionMap::new();
        map.register(KeyCode::Up, "JUMP");
        map.register(KeyCode::W, "JUMP");

        assert_eq!(map.translate(&InputEvent::KeyPressed(KeyCode::W)), Some(Action::start("JUMP")));
        assert_eq!(map.translate(&InputEvent::KeyReleased(KeyCode::Up)), Some(Action::end("JUMP")));
        assert_eq!(map.translate(&InputEvent::KeyPressed(KeyCode::Space)), None);
        assert_eq!(map.translate(&InputEvent::Closed), None);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Action::start("SHOOT").to_string(), "SHOOT START");
        assert_eq!(ActionPhase::End.to_string(), "END");
    }
}
