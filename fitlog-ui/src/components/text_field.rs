use leptos::*;

/// Labelled input bound to a string signal
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm font-medium text-gray-400 mb-1">{label}</span>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 text-white focus:outline-none focus:border-primary-500"
            />
        </label>
    }
}
