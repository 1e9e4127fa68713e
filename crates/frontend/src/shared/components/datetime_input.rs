use leptos::prelude::*;

/// Native `datetime-local` picker bound to a string signal
///
/// The signal holds `YYYY-MM-DDTHH:MM[:SS]`; empty means unset.
#[component]
pub fn DateTimeInput(
    value: RwSignal<String>,
    #[prop(optional)] style: Option<String>,
) -> impl IntoView {
    let default_style = "padding: 6px 8px; border: 1px solid var(--color-border); border-radius: 4px; font-size: 0.875rem; width: 190px;";
    let final_style = style.unwrap_or_else(|| default_style.to_string());

    view! {
        <input
            type="datetime-local"
            step="1"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
            style=final_style
        />
    }
}
