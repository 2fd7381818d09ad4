//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod editable_text;
mod goal_card;
mod new_goal_form;
mod today_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use editable_text::EditableText;
pub use goal_card::GoalCard;
pub use new_goal_form::NewGoalForm;
pub use today_list::TodayList;
