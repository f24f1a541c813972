//! Input handling
//!
//! Raw device events come from an [`InputDriver`]. Scenes translate key
//! events into named [`Action`]s through their [`ActionMap`]; the engine
//! itself attaches no meaning to keys.

pub mod action;
pub mod scripted;

pub use action::{Action, ActionMap, ActionPhase};
pub use scripted::ScriptedInput;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Input errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// Key name not recognised
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Malformed scripted input entry
    #[error("Invalid input script entry: {0}")]
    InvalidScript(String),
}

macro_rules! key_codes {
    ($($(#[$doc:meta])* $variant:ident),* $(,)?) => {
        /// Key codes
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum KeyCode {
            $($(#[$doc])* $variant,)*
        }

        impl KeyCode {
            /// Key name as written in scripts and configs
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }
        }

        impl FromStr for KeyCode {
            type Err = InputError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case(stringify!($variant)) {
                        return Ok(Self::$variant);
                    }
                )*
                Err(InputError::UnknownKey(s.to_string()))
            }
        }
    };
}

key_codes! {
    /// A key
    A,
    /// C key
    C,
    /// D key
    D,
    /// G key
    G,
    /// P key
    P,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw device or window event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Key went down
    KeyPressed(KeyCode),
    /// Key went up
    KeyReleased(KeyCode),
    /// The window was closed
    Closed,
}

/// Source of input events, polled once per frame
pub trait InputDriver {
    /// Events that occurred since the previous poll
    fn poll(&mut self, frame: u64) -> Vec<InputEvent>;
}

/// Driver that never produces events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputDriver for NoInput {
    fn poll(&mut self, _frame: u64) -> Vec<InputEvent> {
        Vec::new()
    }
}
