//! Progress Utilities
//!
//! Clamped percentage arithmetic for goal progress.

/// Apply a signed step to a progress value, clamped to 0..=100
pub fn step(current: u8, delta: i16) -> u8 {
    (current as i16 + delta).clamp(0, 100) as u8
}

/// Completion convention for card-originated progress writes
pub fn completed_for(progress: u8) -> bool {
    progress == 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_within_range() {
        assert_eq!(step(50, 10), 60);
        assert_eq!(step(50, -10), 40);
    }

    #[test]
    fn test_step_saturates_at_bounds() {
        assert_eq!(step(95, 10), 100);
        assert_eq!(step(100, 10), 100);
        assert_eq!(step(5, -10), 0);
        assert_eq!(step(0, -10), 0);
    }

    #[test]
    fn test_completed_only_at_hundred() {
        assert!(completed_for(100));
        assert!(!completed_for(99));
        assert!(!completed_for(0));
        // Reaching 100 by a clamped overshoot still completes
        assert!(completed_for(step(95, 10)));
    }
}
