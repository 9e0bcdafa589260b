//! UI Components
//!
//! Reusable Leptos components for the entry page and the dashboard.

pub mod chart;
pub mod nav;
pub mod text_field;
pub mod workout_form;
pub mod workout_list;

pub use chart::CaloriesChart;
pub use nav::Nav;
pub use text_field::TextField;
pub use workout_form::WorkoutEntry;
pub use workout_list::WorkoutList;
