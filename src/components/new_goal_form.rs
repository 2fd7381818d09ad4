//! New Goal Form Component
//!
//! Inline form for adding a goal to a column.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Text input plus submit button; hands the trimmed title to `on_create`
#[component]
pub fn NewGoalForm(
    #[prop(into)] placeholder: String,
    #[prop(into)] on_create: Callback<String>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let entry = text.get().trim().to_string();
        if entry.is_empty() {
            return;
        }
        on_create.run(entry);
        set_text.set(String::new());
    };

    view! {
        <form class="new-goal-form" on:submit=submit>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_text.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
