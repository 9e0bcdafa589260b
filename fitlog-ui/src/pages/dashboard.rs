//! Dashboard Page
//!
//! Protected view: workout list, add form, weekly calories chart and logout.
//! The session guard runs once when the page loads; without a session the
//! page redirects to the entry view before any request is made.

use std::rc::Rc;

use fitlog::{Dashboard, Route};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use crate::api::GlooApiClient;
use crate::components::{CaloriesChart, Nav, WorkoutEntry, WorkoutList};
use crate::state::dashboard::provide_dashboard_state;
use crate::state::{browser_sessions, UiDashboard};

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    match Dashboard::open(GlooApiClient::default(), browser_sessions()) {
        Ok(dashboard) => view! { <SignedIn dashboard=Rc::new(dashboard) /> }.into_view(),
        Err(route) => {
            tracing::info!("No session, redirecting to {}", route.path());
            let navigate = use_navigate();
            create_effect(move |_| {
                navigate(
                    route.path(),
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            });
            ().into_view()
        }
    }
}

#[component]
fn SignedIn(dashboard: Rc<UiDashboard>) -> impl IntoView {
    let state = provide_dashboard_state();
    let navigate = use_navigate();
    let name = dashboard.display_name().to_string();

    // Initial load
    {
        let dashboard = dashboard.clone();
        spawn_local(async move {
            let mut view = state;
            dashboard.reload(&mut view).await;
        });
    }

    let on_add = {
        let dashboard = dashboard.clone();
        Callback::new(move |_: ()| {
            let dashboard = dashboard.clone();
            spawn_local(async move {
                let mut view = state;
                let form = view.form();
                dashboard.add_workout(&form, &mut view).await;
            });
        })
    };

    let on_delete = {
        let dashboard = dashboard.clone();
        Callback::new(move |id: String| {
            let dashboard = dashboard.clone();
            spawn_local(async move {
                let mut view = state;
                dashboard.delete_workout(&id, &mut view).await;
            });
        })
    };

    let on_logout = Callback::new(move |_: ()| {
        let route = dashboard.logout().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to clear session");
            Route::Entry
        });
        navigate(route.path(), Default::default());
    });

    view! {
        <div class="space-y-8">
            <Nav name=name on_logout=on_logout />

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Add Workout"</h2>
                <WorkoutEntry on_add=on_add />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Workouts"</h2>
                <WorkoutList on_delete=on_delete />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Calories (last 7 days)"</h2>
                <CaloriesChart />
            </section>
        </div>
    }
}
