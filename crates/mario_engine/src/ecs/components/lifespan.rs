//! LifeSpan component
//!
//! Tracks entity lifetime in frames for automatic destruction.

/// Frame-based lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeSpan {
    /// Total number of frames the entity may live
    pub lifespan: u64,

    /// Frame at which the entity was created
    pub frame_created: u64,
}

impl LifeSpan {
    /// Create a new lifespan component
    pub fn new(lifespan: u64, frame_created: u64) -> Self {
        Self {
            lifespan,
            frame_created,
        }
    }

    /// Frames elapsed since creation
    pub fn age(&self, current_frame: u64) -> u64 {
        current_frame.saturating_sub(self.frame_created)
    }

    /// Check if this entity's lifetime has expired
    pub fn is_expired(&self, current_frame: u64) -> bool {
        self.age(current_frame) >= self.lifespan
    }

    /// Frames left before expiry
    pub fn remaining(&self, current_frame: u64) -> u64 {
        self.lifespan.saturating_sub(self.age(current_frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifespan_not_expired() {
        let lifespan = LifeSpan::new(60, 0);
        assert!(!lifespan.is_expired(59));
    }

    #[test]
    fn test_lifespan_expired() {
        let lifespan = LifeSpan::new(60, 0);
        assert!(lifespan.is_expired(60));
        assert!(lifespan.is_expired(61));
    }

    #[test]
    fn test_remaining_frames() {
        let lifespan = LifeSpan::new(30, 10);
        assert_eq!(lifespan.remaining(15), 25);
        assert_eq!(lifespan.remaining(100), 0);
    }

    #[test]
    fn test_created_in_future_is_not_expired() {
        let lifespan = LifeSpan::new(5, 10);
        assert_eq!(lifespan.age(3), 0);
        assert!(!lifespan.is_expired(3));
    }
}
