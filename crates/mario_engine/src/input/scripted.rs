//! Scripted input
//!
//! Replays key events at fixed frames. Entries are written
//! `FRAME:press|release:KEY`, e.g. `30:press:Right`.

use super::{InputDriver, InputError, InputEvent, KeyCode};
use std::collections::VecDeque;

/// Input driver replaying timed events
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<(u64, InputEvent)>,
}

impl ScriptedInput {
    /// Create from `(frame, event)` pairs; order does not matter
    pub fn new(mut events: Vec<(u64, InputEvent)>) -> Self {
        events.sort_by_key(|(frame, _)| *frame);
        Self { events: events.into() }
    }

    /// Parse script entries
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self, InputError> {
        let events = entries
            .iter()
            .map(|entry| parse_entry(entry.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(events))
    }

    /// Events not yet delivered
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

fn parse_entry(entry: &str) -> Result<(u64, InputEvent), InputError> {
    let invalid = || InputError::InvalidScript(entry.to_string());

    let mut parts = entry.trim().splitn(3, ':');
    let (Some(frame), Some(kind), Some(key)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let frame: u64 = frame.parse().map_err(|_| invalid())?;
    let key: KeyCode = key.parse()?;
    let event = match kind.to_ascii_lowercase().as_str() {
        "press" => InputEvent::KeyPressed(key),
        "release" => InputEvent::KeyReleased(key),
        _ => return Err(invalid()),
    };
    Ok((frame, event))
}

impl InputDriver for ScriptedInput {
    fn poll(&mut self, frame: u64) -> Vec<InputEvent> {
        let mut due = Vec::new();
        while let Some(&(at, event)) = self.events.front() {
            if at > frame {
                break;
            }
            due.push(event);
            self.events.pop_front();
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_replay() {
        let mut input = ScriptedInput::parse(&["10:release:Right", "2:press:Right", "2:press:space"]).unwrap();
        assert_eq!(input.remaining(), 3);

        assert!(input.poll(1).is_empty());
        assert_eq!(
            input.poll(2),
            vec![InputEvent::KeyPressed(KeyCode::Right), InputEvent::KeyPressed(KeyCode::Space)]
        );
        assert!(input.poll(9).is_empty());
        assert_eq!(input.poll(15), vec![InputEvent::KeyReleased(KeyCode::Right)]);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_invalid_entries() {
        assert!(matches!(ScriptedInput::parse(&["x:press:Up"]), Err(InputError::InvalidScript(_))));
        assert!(matches!(ScriptedInput::parse(&["3:hold:Up"]), Err(InputError::InvalidScript(_))));
        assert!(matches!(ScriptedInput::parse(&["3:press"]), Err(InputError::InvalidScript(_))));
        assert_eq!(
            ScriptedInput::parse(&["3:press:Tab"]).unwrap_err(),
            InputError::UnknownKey("Tab".to_string())
        );
    }
}
