use crate::layout::global_context::{AppGlobalContext, MenuKey};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="main-nav-bar">
            <ul>
                {MenuKey::ALL.into_iter().map(|key| {
                    view! {
                        <li
                            class:active=move || ctx.active.get() == key
                            data-menu-key=key.key()
                            on:click=move |_| ctx.select(key)
                        >
                            {icon(key.icon())}
                            <span>{key.title()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
