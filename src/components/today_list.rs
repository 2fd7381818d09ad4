//! Today List Component
//!
//! Sidebar listing the entries copied in from goal cards.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Today's focus list, read straight from the store
#[component]
pub fn TodayList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <aside class="today-column">
            <h2>"Today"</h2>
            <ul class="today-list">
                {move || store.today().get().into_iter().map(|entry| view! {
                    <li class="today-entry">{entry}</li>
                }).collect_view()}
            </ul>
            <Show when=move || store.today().get().is_empty()>
                <p class="today-empty">"Nothing copied over yet."</p>
            </Show>
        </aside>
    }
}
