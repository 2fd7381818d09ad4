//! Delete Confirm Button Component
//!
//! Two-stage inline delete: a × button arms the confirmation, then
//! ✓ runs the delete callback or ✗ backs out.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `on_confirm` - Callback to execute when the user confirms deletion
/// * `button_class` - Optional CSS class for the arming button (defaults to "delete-btn")
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(optional, into)] button_class: String,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    let class = if button_class.is_empty() {
        "delete-btn".to_string()
    } else {
        button_class
    };

    view! {
        <Show when=move || !armed.get()>
            <button
                class=class.clone()
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_armed.set(true);
                }
            >
                "×"
            </button>
        </Show>
        <Show when=move || armed.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
