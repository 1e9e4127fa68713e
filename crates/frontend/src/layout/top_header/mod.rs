//! TopHeader component - application top bar.
//!
//! Application title on the left, theme toggle on the right.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Sales Dashboard"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__section">{move || ctx.active.get().title()}</span>
                <ThemeToggle mode=ctx.theme />
            </div>
        </div>
    }
}
