//! Workout Entry Component
//!
//! Form for logging a new workout.

use leptos::*;

use crate::components::TextField;
use crate::state::DashboardState;

/// Add-workout form; the page owns the submit
#[component]
pub fn WorkoutEntry(on_add: Callback<()>) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="space-y-4">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <TextField label="Date" input_type="date" value=state.date />
                <TextField label="Type" value=state.kind />
                <TextField label="Duration (min)" input_type="number" value=state.duration />
                <TextField label="Calories" input_type="number" value=state.calories />
            </div>

            <div class="flex items-center space-x-4">
                <button
                    on:click=move |_| on_add.call(())
                    class="bg-primary-600 hover:bg-primary-700 rounded-lg px-6 py-2 font-semibold transition-colors"
                >
                    "Add"
                </button>
                <span class="text-sm text-gray-300">
                    {move || state.add_message.get().unwrap_or_default()}
                </span>
            </div>
        </div>
    }
}
