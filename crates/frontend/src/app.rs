use crate::app_shell::MainLayout;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::ApiConfig;
use crate::shared::notify::Notifications;
use crate::shared::theme::apply_theme_attr;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Notifier is created inside the context before the list controllers.
    let ctx = AppGlobalContext::new(ApiConfig::from_document());
    provide_context(ctx);

    let thaw_theme = RwSignal::new(ctx.theme.get_untracked().thaw_theme());
    Effect::new(move |_| {
        let mode = ctx.theme.get();
        thaw_theme.set(mode.thaw_theme());
        apply_theme_attr(mode);
    });

    ctx.orders.load();

    view! {
        <ConfigProvider theme=thaw_theme>
            <MainLayout />
            <Notifications notifier=ctx.notifier />
        </ConfigProvider>
    }
}
