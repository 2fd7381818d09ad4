//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Goals are owned
//! here; cards only read snapshots and request mutations through callbacks.

use leptos::prelude::*;
use reactive_stores::Store;
use serde::Deserialize;

use crate::models::{Goal, GoalUpdate};
use crate::progress;

/// Which goal column a card lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalLevel {
    LongTerm,
    Monthly,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Long-term goal column
    pub long_term: Vec<Goal>,
    /// Monthly goal column
    pub monthly: Vec<Goal>,
    /// Today's focus entries, fed by copy-to-today
    pub today: Vec<String>,
    /// Next goal id to hand out
    pub next_id: u32,
}

/// Demo goals shipped with the app
const SEED_GOALS: &str = r#"{
  "long_term": [
    { "text": "Run a half marathon", "progress": 40, "memo": "Sign up for the October race." },
    { "text": "Read 24 books", "progress": 100 }
  ],
  "monthly": [
    { "text": "Ship the onboarding revamp", "progress": 70 },
    { "text": "Write two blog posts" }
  ]
}"#;

#[derive(Debug, Deserialize)]
struct SeedDoc {
    #[serde(default)]
    long_term: Vec<SeedGoal>,
    #[serde(default)]
    monthly: Vec<SeedGoal>,
}

#[derive(Debug, Deserialize)]
struct SeedGoal {
    text: String,
    #[serde(default)]
    progress: u8,
    #[serde(default)]
    memo: Option<String>,
}

impl AppState {
    /// Initial state parsed from the embedded seed document
    ///
    /// A malformed seed degrades to an empty board instead of panicking.
    pub fn seeded() -> Self {
        let doc: SeedDoc = match serde_json::from_str(SEED_GOALS) {
            Ok(doc) => doc,
            Err(err) => {
                web_sys::console::warn_1(&format!("[STORE] Seed parse failed: {}", err).into());
                return Self::default();
            }
        };

        let mut next_id = 1u32;
        let mut build = |seeds: Vec<SeedGoal>| {
            seeds
                .into_iter()
                .map(|seed| {
                    let id = next_id;
                    next_id += 1;
                    let progress = seed.progress.min(100);
                    Goal {
                        id,
                        text: seed.text,
                        progress,
                        completed: progress::completed_for(progress),
                        memo: seed.memo,
                    }
                })
                .collect::<Vec<_>>()
        };

        let long_term = build(doc.long_term);
        let monthly = build(doc.monthly);

        Self {
            long_term,
            monthly,
            today: Vec::new(),
            next_id,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a partial update to a goal in the given column
pub fn store_apply_update(store: &AppStore, level: GoalLevel, id: u32, update: GoalUpdate) {
    match level {
        GoalLevel::LongTerm => apply_in(&mut store.long_term().write(), id, update),
        GoalLevel::Monthly => apply_in(&mut store.monthly().write(), id, update),
    }
}

/// Remove a goal from the given column by ID
pub fn store_remove_goal(store: &AppStore, level: GoalLevel, id: u32) {
    match level {
        GoalLevel::LongTerm => store.long_term().write().retain(|g| g.id != id),
        GoalLevel::Monthly => store.monthly().write().retain(|g| g.id != id),
    }
}

/// Add a fresh goal with the given title to a column
pub fn store_add_goal(store: &AppStore, level: GoalLevel, text: String) {
    let id = store.next_id().get_untracked();
    store.next_id().set(id + 1);
    let goal = Goal {
        id,
        text,
        progress: 0,
        completed: false,
        memo: None,
    };
    match level {
        GoalLevel::LongTerm => store.long_term().write().push(goal),
        GoalLevel::Monthly => store.monthly().write().push(goal),
    }
}

/// Append an entry to today's focus list
pub fn store_push_today(store: &AppStore, entry: String) {
    store.today().write().push(entry);
}

fn apply_in(goals: &mut Vec<Goal>, id: u32, update: GoalUpdate) {
    if let Some(goal) = goals.iter_mut().find(|g| g.id == id) {
        goal.apply(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_document_parses() {
        let doc: SeedDoc = serde_json::from_str(SEED_GOALS).expect("embedded seed should parse");
        assert!(!doc.long_term.is_empty());
        assert!(!doc.monthly.is_empty());
        assert!(doc
            .long_term
            .iter()
            .chain(doc.monthly.iter())
            .all(|g| g.progress <= 100));
    }

    #[test]
    fn test_seeded_state_ids_and_completion() {
        let state = AppState::seeded();

        let all: Vec<&Goal> = state.long_term.iter().chain(state.monthly.iter()).collect();
        assert!(!all.is_empty());

        // IDs are unique and next_id is past all of them
        for (i, a) in all.iter().enumerate() {
            assert!(a.id < state.next_id);
            for b in &all[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }

        // Completion convention holds for seeded goals
        for goal in &all {
            assert_eq!(goal.completed, goal.progress == 100);
        }
    }
}
