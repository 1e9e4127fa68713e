//! Application Shell - корневой layout приложения
//!
//! `MainLayout` - Shell + Navbar + страница активного раздела меню

use crate::dashboards::SalesStatsDashboard;
use crate::domain::a001_order::ui::list::OrderList;
use crate::layout::global_context::{AppGlobalContext, MenuKey};
use crate::layout::left::Navbar;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <Shell
            left=|| view! { <Navbar /> }.into_any()
            center=move || {
                view! {
                    {move || match ctx.active.get() {
                        MenuKey::OrderList => view! { <OrderList /> }.into_any(),
                        MenuKey::SalesStats => view! { <SalesStatsDashboard /> }.into_any(),
                    }}
                }.into_any()
            }
        />
    }
}
