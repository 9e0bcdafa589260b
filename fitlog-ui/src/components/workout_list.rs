//! Workout List Component

use leptos::*;

use crate::state::DashboardState;

/// One row per workout, in server order
#[component]
pub fn WorkoutList(on_delete: Callback<String>) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <ul class="divide-y divide-gray-700">
            <For
                each=move || state.workouts.get().into_iter().enumerate()
                key=|(index, workout)| (*index, workout.id.clone(), workout.summary())
                children=move |(_, workout)| {
                    let id = workout.id.clone();
                    view! {
                        <li class="flex items-center justify-between py-3">
                            <span>{workout.summary()}</span>
                            <button
                                on:click=move |_| on_delete.call(id.clone())
                                class="text-sm text-red-400 hover:text-red-300 px-3 py-1 rounded-lg hover:bg-gray-700 transition-colors"
                            >
                                "Delete"
                            </button>
                        </li>
                    }
                }
            />
        </ul>
        <Show when=move || state.workouts.with(Vec::is_empty)>
            <p class="text-gray-500 text-sm py-3">"No workouts yet."</p>
        </Show>
    }
}
