//! Navigation Component
//!
//! Dashboard header with the signed-in user and a logout button.

use leptos::*;

/// Navigation header component
#[component]
pub fn Nav(name: String, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700 rounded-xl mb-8">
            <div class="px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🏋️"</span>
                        <span class="text-xl font-bold text-white">"Fitlog"</span>
                    </div>

                    <div class="flex items-center space-x-4">
                        <span class="text-gray-300">"Hi, " {name}</span>
                        <button
                            on:click=move |_| on_logout.call(())
                            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
