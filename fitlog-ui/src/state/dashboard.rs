//! Dashboard State
//!
//! Reactive state behind the dashboard page. [`DashboardState`] is the
//! browser's [`DashboardView`]: the core flow writes into these signals and
//! the components re-render from them.

use fitlog::dashboard::{ADDED, ADDED_MESSAGE_MS};
use fitlog::{Dashboard, DashboardView, WeeklyCalories, Workout, WorkoutForm};
use leptos::*;

use crate::api::GlooApiClient;
use crate::state::session::BrowserSessions;

/// Dashboard flow as wired in the browser
pub type UiDashboard = Dashboard<GlooApiClient, BrowserSessions>;

/// Signals shared by the dashboard components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Latest fetched list, replaced wholesale on every reload
    pub workouts: RwSignal<Vec<Workout>>,
    /// Latest chart data; `None` until the first reload finishes
    pub chart: RwSignal<Option<WeeklyCalories>>,
    /// Message under the add form
    pub add_message: RwSignal<Option<String>>,
    pub date: RwSignal<String>,
    pub kind: RwSignal<String>,
    pub duration: RwSignal<String>,
    pub calories: RwSignal<String>,
}

/// Create the dashboard state and provide it to the component tree
pub fn provide_dashboard_state() -> DashboardState {
    let state = DashboardState {
        workouts: create_rw_signal(Vec::new()),
        chart: create_rw_signal(None),
        add_message: create_rw_signal(None),
        date: create_rw_signal(String::new()),
        kind: create_rw_signal(String::new()),
        duration: create_rw_signal(String::new()),
        calories: create_rw_signal(String::new()),
    };

    provide_context(state);
    state
}

impl DashboardState {
    /// Snapshot of the add form inputs
    pub fn form(&self) -> WorkoutForm {
        WorkoutForm {
            date: self.date.get_untracked(),
            kind: self.kind.get_untracked(),
            duration: self.duration.get_untracked(),
            calories: self.calories.get_untracked(),
        }
    }
}

/// Drop the confirmation if it is still showing.
///
/// Runs from a timer that can outlive the dashboard page, so a disposed
/// signal is skipped; a later error message is left alone.
fn clear_added(message: RwSignal<Option<String>>) {
    message.try_update(|current| {
        if current.as_deref() == Some(ADDED) {
            *current = None;
        }
    });
}

impl DashboardView for DashboardState {
    fn render_workouts(&mut self, workouts: &[Workout]) {
        self.workouts.set(workouts.to_vec());
    }

    fn render_chart(&mut self, chart: &WeeklyCalories) {
        self.chart.set(Some(chart.clone()));
    }

    fn show_added(&mut self) {
        self.add_message.set(Some(ADDED.to_string()));

        let message = self.add_message;
        gloo_timers::callback::Timeout::new(ADDED_MESSAGE_MS, move || clear_added(message))
            .forget();
    }

    fn show_add_error(&mut self, message: &str) {
        self.add_message.set(Some(message.to_string()));
    }

    fn clear_workout_inputs(&mut self) {
        self.kind.set(String::new());
        self.duration.set(String::new());
        self.calories.set(String::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_added_only_clears_confirmation() {
        let runtime = create_runtime();

        let message = create_rw_signal(Some(ADDED.to_string()));
        clear_added(message);
        assert_eq!(message.get_untracked(), None);

        let error = create_rw_signal(Some("Failed to add".to_string()));
        clear_added(error);
        assert_eq!(error.get_untracked().as_deref(), Some("Failed to add"));

        runtime.dispose();
    }

    #[test]
    fn test_clear_added_after_page_disposed() {
        let runtime = create_runtime();

        let message = create_rw_signal(Some(ADDED.to_string()));
        message.dispose();
        clear_added(message);

        runtime.dispose();
    }
}
