//! Goal Board App
//!
//! Two goal columns plus today's focus list. The store owns every goal;
//! cards delegate mutations here through callbacks.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{GoalCard, NewGoalForm, TodayList};
use crate::models::{ColorTheme, Goal, GoalUpdate};
use crate::store::{
    store_add_goal, store_apply_update, store_push_today, store_remove_goal, AppState,
    AppStateStoreFields, GoalLevel,
};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::seeded());
    provide_context(store);

    let on_update_long = Callback::new(move |(id, update): (u32, GoalUpdate)| {
        store_apply_update(&store, GoalLevel::LongTerm, id, update);
    });
    let on_update_monthly = Callback::new(move |(id, update): (u32, GoalUpdate)| {
        store_apply_update(&store, GoalLevel::Monthly, id, update);
    });
    let on_delete_long =
        Callback::new(move |id: u32| store_remove_goal(&store, GoalLevel::LongTerm, id));
    let on_delete_monthly =
        Callback::new(move |id: u32| store_remove_goal(&store, GoalLevel::Monthly, id));

    // Monthly goals promote into the long-term column as a copy
    let on_promote = Callback::new(move |text: String| {
        web_sys::console::log_1(&format!("[APP] Promoting '{}' to long-term", text).into());
        store_add_goal(&store, GoalLevel::LongTerm, text);
    });
    let on_copy_to_today = Callback::new(move |entry: String| store_push_today(&store, entry));

    // Breakdown itself is external; the host only records the request
    let on_ai_action = Callback::new(move |goal: Goal| {
        web_sys::console::log_1(
            &format!("[APP] AI breakdown requested for goal #{} '{}'", goal.id, goal.text).into(),
        );
    });

    view! {
        <div class="app-layout">
            <section class="goal-column">
                <h2>"Long-term"</h2>
                <NewGoalForm
                    placeholder="Add a long-term goal..."
                    on_create=Callback::new(move |text: String| {
                        store_add_goal(&store, GoalLevel::LongTerm, text)
                    })
                />
                {move || store.long_term().get().into_iter().map(|goal| view! {
                    <GoalCard
                        goal=goal
                        on_update=on_update_long
                        on_delete=on_delete_long
                        on_copy_to_today=on_copy_to_today
                        on_ai_action=on_ai_action
                    />
                }).collect_view()}
            </section>

            <section class="goal-column">
                <h2>"Monthly"</h2>
                <NewGoalForm
                    placeholder="Add a monthly goal..."
                    on_create=Callback::new(move |text: String| {
                        store_add_goal(&store, GoalLevel::Monthly, text)
                    })
                />
                {move || store.monthly().get().into_iter().map(|goal| view! {
                    <GoalCard
                        goal=goal
                        theme=ColorTheme::TEAL
                        on_update=on_update_monthly
                        on_delete=on_delete_monthly
                        on_promote_up=on_promote
                        on_copy_to_today=on_copy_to_today
                        on_ai_action=on_ai_action
                    />
                }).collect_view()}
            </section>

            <TodayList />
        </div>
        <p class="goal-count">
            {move || {
                let total = store.long_term().get().len() + store.monthly().get().len();
                format!("{} goals", total)
            }}
        </p>
    }
}
