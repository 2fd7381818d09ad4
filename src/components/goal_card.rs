//! Goal Card Component
//!
//! Interactive card for a single goal: editable title, clamped progress
//! meter, optional memo area, and parent-delegated actions. Local state is
//! limited to the memo toggle and its draft buffer; every durable mutation
//! goes through `on_update` / `on_delete` as a partial update.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{DeleteConfirmButton, EditableText};
use crate::models::{ColorTheme, Goal, GoalUpdate};
use crate::progress;

/// Step applied by the −/+ controls
const PROGRESS_STEP: i16 = 10;

/// Card for a single goal
///
/// The promote, copy-to-today and AI buttons render only when their
/// callback prop is supplied.
#[component]
pub fn GoalCard(
    goal: Goal,
    #[prop(optional)] theme: ColorTheme,
    #[prop(into)] on_update: Callback<(u32, GoalUpdate)>,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(optional, into)] on_promote_up: Option<Callback<String>>,
    #[prop(optional, into)] on_copy_to_today: Option<Callback<String>>,
    #[prop(optional, into)] on_ai_action: Option<Callback<Goal>>,
) -> impl IntoView {
    let (show_memo, set_show_memo) = signal(false);
    let memo_ref = NodeRef::<leptos::html::Textarea>::new();

    let id = goal.id;
    let completed = goal.completed;
    let current = goal.progress;
    let has_memo = goal.memo.is_some();
    let title = goal.text.clone();
    let promote_text = goal.text.clone();
    let focus_text = format!("[Focus] {}", goal.text);

    // Memo edits buffer locally and save on blur, so typing does not
    // churn the parent store on every keystroke
    let (memo_draft, set_memo_draft) = signal(goal.memo.clone().unwrap_or_default());
    let save_memo = move || {
        let content = memo_draft.get_untracked();
        let memo = if content.is_empty() { None } else { Some(content) };
        on_update.run((
            id,
            GoalUpdate {
                memo: Some(memo),
                ..Default::default()
            },
        ));
    };

    // Progress writes carry the completion convention: done at exactly 100
    let step_progress = move |delta: i16| {
        let next = progress::step(current, delta);
        on_update.run((
            id,
            GoalUpdate {
                progress: Some(next),
                completed: Some(progress::completed_for(next)),
                ..Default::default()
            },
        ));
    };

    // Focus the memo textarea when it opens
    Effect::new(move |_| {
        if show_memo.get() {
            if let Some(area) = memo_ref.get() {
                let _ = area.focus();
            }
        }
    });

    view! {
        <div class=format!("goal-card {}", theme.border)>
            // First row: title and delete
            <div class="goal-card-header">
                <EditableText
                    value=title
                    strikethrough=completed
                    class=format!("goal-title {}", theme.primary)
                    on_save=move |text: String| {
                        on_update.run((id, GoalUpdate { text: Some(text), ..Default::default() }));
                    }
                />
                <DeleteConfirmButton
                    button_class="goal-delete-btn"
                    on_confirm=move |_| on_delete.run(id)
                />
            </div>

            // Second row: action cluster and progress meter
            <div class="goal-card-toolbar">
                <div class=format!("goal-actions {} {}", theme.light, theme.border)>
                    {on_promote_up.map(|cb| view! {
                        <button
                            class="action-btn"
                            title="Promote to a higher-level goal"
                            on:click=move |_| cb.run(promote_text.clone())
                        >
                            "↑"
                        </button>
                    })}
                    {on_copy_to_today.map(|cb| view! {
                        <button
                            class="action-btn"
                            title="Copy to today's tasks"
                            on:click=move |_| cb.run(focus_text.clone())
                        >
                            "↓"
                        </button>
                    })}
                    <button
                        class="action-btn memo-btn"
                        class:has-memo=move || has_memo
                        class:open=move || show_memo.get()
                        title="Memo"
                        on:click=move |_| set_show_memo.update(|open| *open = !*open)
                    >
                        "✎"
                    </button>
                    {on_ai_action.map(|cb| {
                        let snapshot = goal.clone();
                        view! {
                            <span class="action-divider"></span>
                            <button
                                class="action-btn"
                                title="Break down with AI"
                                on:click=move |_| cb.run(snapshot.clone())
                            >
                                "✦"
                            </button>
                        }
                    })}
                </div>

                <div class="goal-progress">
                    <div class=format!("progress-track {}", theme.light)>
                        <div
                            class=if completed {
                                "progress-fill done".to_string()
                            } else {
                                format!("progress-fill {}", theme.bg)
                            }
                            style=format!("width: {}%;", current)
                        ></div>
                    </div>
                    <div class=format!("progress-controls {} {}", theme.light, theme.border)>
                        <button class="step-btn" on:click=move |_| step_progress(-PROGRESS_STEP)>
                            "−"
                        </button>
                        <span class=format!("progress-label {}", theme.primary)>
                            {format!("{}%", current)}
                        </span>
                        <button class="step-btn" on:click=move |_| step_progress(PROGRESS_STEP)>
                            "+"
                        </button>
                    </div>
                </div>
            </div>

            // Memo area, only while toggled open
            <Show when=move || show_memo.get()>
                <div class="goal-memo">
                    <textarea
                        class=format!("memo-textarea {} {}", theme.light, theme.border)
                        node_ref=memo_ref
                        placeholder="Notes for this goal..."
                        prop:value=move || memo_draft.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_memo_draft.set(area.value());
                        }
                        on:blur=move |_| save_memo()
                    ></textarea>
                </div>
            </Show>
        </div>
    }
}
