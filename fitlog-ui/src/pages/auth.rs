//! Entry Page
//!
//! Public view with the registration and login forms. Each form has its own
//! message area; a successful attempt navigates to the dashboard.

use fitlog::{AuthFlow, AuthOutcome, LoginForm, RegisterForm, Route};
use leptos::*;
use leptos_router::use_navigate;

use crate::api::GlooApiClient;
use crate::components::TextField;
use crate::state::browser_sessions;

fn auth_flow() -> AuthFlow<GlooApiClient, crate::state::BrowserSessions> {
    AuthFlow::new(GlooApiClient::default(), browser_sessions())
}

/// Entry page component
#[component]
pub fn AuthPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto space-y-8">
            <div class="text-center">
                <h1 class="text-3xl font-bold">"Fitlog"</h1>
                <p class="text-gray-400 mt-1">"Log workouts, watch the calories add up"</p>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Register"</h2>
                    <RegisterPanel />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Login"</h2>
                    <LoginPanel />
                </section>
            </div>
        </div>
    }
}

#[component]
fn RegisterPanel() -> impl IntoView {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let message = create_rw_signal(None::<String>);
    let navigate = use_navigate();

    let on_click = move |_| {
        let form = RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        spawn_local(async move {
            match auth_flow().register(&form).await {
                AuthOutcome::Authenticated(_) => {
                    navigate(Route::Dashboard.path(), Default::default());
                }
                AuthOutcome::Failed(text) => message.set(Some(text)),
            }
        });
    };

    view! {
        <div class="space-y-4">
            <TextField label="Name" value=name />
            <TextField label="Email" input_type="email" value=email />
            <TextField label="Password" input_type="password" value=password />

            <button
                on:click=on_click
                class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3 font-semibold transition-colors"
            >
                "Register"
            </button>

            <FormMessage message=message />
        </div>
    }
}

#[component]
fn LoginPanel() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let message = create_rw_signal(None::<String>);
    let navigate = use_navigate();

    let on_click = move |_| {
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        spawn_local(async move {
            match auth_flow().login(&form).await {
                AuthOutcome::Authenticated(_) => {
                    navigate(Route::Dashboard.path(), Default::default());
                }
                AuthOutcome::Failed(text) => message.set(Some(text)),
            }
        });
    };

    view! {
        <div class="space-y-4">
            <TextField label="Email" input_type="email" value=email />
            <TextField label="Password" input_type="password" value=password />

            <button
                on:click=on_click
                class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3 font-semibold transition-colors"
            >
                "Login"
            </button>

            <FormMessage message=message />
        </div>
    }
}

/// Per-form message area
#[component]
fn FormMessage(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <p class="text-sm text-red-400 min-h-[1.25rem]">
            {move || message.get().unwrap_or_default()}
        </p>
    }
}
