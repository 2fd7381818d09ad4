//! Frontend Models
//!
//! Goal data structures shared across the board.

use serde::{Deserialize, Serialize};

/// A trackable objective with title, progress percentage, and optional memo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: u32,
    pub text: String,
    /// Percentage in 0..=100
    pub progress: u8,
    pub completed: bool,
    pub memo: Option<String>,
}

/// Partial update to a goal
///
/// `None` fields are left untouched. `memo` is doubly optional so a write
/// can distinguish "unchanged" (`None`) from "cleared" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalUpdate {
    pub text: Option<String>,
    pub progress: Option<u8>,
    pub completed: Option<bool>,
    pub memo: Option<Option<String>>,
}

impl Goal {
    /// Merge a partial update into this goal
    pub fn apply(&mut self, update: GoalUpdate) {
        if let Some(text) = update.text {
            self.text = text;
        }
        if let Some(progress) = update.progress {
            self.progress = progress;
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
        if let Some(memo) = update.memo {
            self.memo = memo;
        }
    }
}

/// Cosmetic CSS class tokens for a card accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    /// Accent text (titles, percent label)
    pub primary: &'static str,
    /// Tinted surface (action cluster, progress track)
    pub light: &'static str,
    /// Progress bar fill
    pub bg: &'static str,
    /// Card and cluster borders
    pub border: &'static str,
}

impl ColorTheme {
    pub const INDIGO: ColorTheme = ColorTheme {
        primary: "accent-indigo",
        light: "surface-indigo",
        bg: "fill-indigo",
        border: "edge-indigo",
    };

    pub const TEAL: ColorTheme = ColorTheme {
        primary: "accent-teal",
        light: "surface-teal",
        bg: "fill-teal",
        border: "edge-teal",
    };
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::INDIGO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal() -> Goal {
        Goal {
            id: 7,
            text: "Learn woodworking".to_string(),
            progress: 50,
            completed: false,
            memo: None,
        }
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut g = goal();
        g.apply(GoalUpdate {
            progress: Some(60),
            ..Default::default()
        });
        assert_eq!(g.progress, 60);
        assert_eq!(g.text, "Learn woodworking");
        assert!(!g.completed);

        g.apply(GoalUpdate {
            text: Some("Build a bookshelf".to_string()),
            completed: Some(true),
            ..Default::default()
        });
        assert_eq!(g.text, "Build a bookshelf");
        assert_eq!(g.progress, 60);
        assert!(g.completed);
    }

    #[test]
    fn apply_sets_and_clears_memo() {
        let mut g = goal();

        g.apply(GoalUpdate {
            memo: Some(Some("start with the base".to_string())),
            ..Default::default()
        });
        assert_eq!(g.memo.as_deref(), Some("start with the base"));

        // Absent memo field leaves it alone
        g.apply(GoalUpdate::default());
        assert_eq!(g.memo.as_deref(), Some("start with the base"));

        g.apply(GoalUpdate {
            memo: Some(None),
            ..Default::default()
        });
        assert_eq!(g.memo, None);
    }
}
