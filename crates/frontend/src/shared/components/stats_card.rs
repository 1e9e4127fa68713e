use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Card of the statistics dashboard: titled header and a table area that
/// shows a spinner over the content while `loading` is up
#[component]
pub fn StatsCard(
    icon_name: &'static str,
    title: &'static str,
    loading: RwSignal<bool>,
    /// Right side of the header: a pager or a short summary
    header_extra: AnyView,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="stats-card">
            <div class="stats-card__header">
                <div class="stats-card__title">
                    {icon(icon_name)}
                    <h2>{title}</h2>
                </div>
                {header_extra}
            </div>

            <div class="table-wrapper">
                <Show when=move || loading.get()>
                    <div class="table-wrapper__overlay">
                        <Spinner />
                    </div>
                </Show>
                {children()}
            </div>
        </div>
    }
}
