//! Editable Text Component
//!
//! Inline text that switches to an input on click. Enter or blur saves,
//! Escape cancels.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Inline-editable text span
///
/// Saves through `on_save` with the trimmed input; empty input is discarded.
#[component]
pub fn EditableText(
    value: String,
    #[prop(into)] on_save: Callback<String>,
    /// Strike the text through (completed goals)
    #[prop(optional)]
    strikethrough: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the input once it mounts in edit mode
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let save = move || {
        // Escape already left edit mode; the trailing blur must not save
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        let text = draft.get_untracked().trim().to_string();
        if !text.is_empty() {
            on_save.run(text);
        }
    };

    let span_class = {
        let mut c = String::from("editable-text");
        if !class.is_empty() {
            c.push(' ');
            c.push_str(&class);
        }
        if strikethrough {
            c.push_str(" completed");
        }
        c
    };

    view! {
        {move || if editing.get() {
            view! {
                <input
                    type="text"
                    class="editable-text-input"
                    node_ref=input_ref
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_draft.set(input.value());
                    }
                    on:blur=move |_| save()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        match ev.key().as_str() {
                            "Enter" => {
                                ev.prevent_default();
                                save();
                            }
                            "Escape" => set_editing.set(false),
                            _ => {}
                        }
                    }
                />
            }.into_any()
        } else {
            let current = value.clone();
            view! {
                <span
                    class=span_class.clone()
                    on:click=move |_| {
                        set_draft.set(current.clone());
                        set_editing.set(true);
                    }
                >
                    {value.clone()}
                </span>
            }.into_any()
        }}
    }
}
