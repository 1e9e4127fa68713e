use super::period::period_from_inputs;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_product_sales::ui::list::ProductSalesList;
use crate::projections::p901_shop_sales::ui::list::ShopSalesList;
use crate::projections::p902_region_orders::ui::list::RegionOrdersList;
use crate::projections::p903_hourly_orders::ui::list::HourlyOrdersList;
use crate::shared::components::datetime_input::DateTimeInput;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use contracts::shared::period::StatsPeriod;
use leptos::prelude::*;
use thaw::*;

/// Sales statistics for one period
///
/// Products and shops page on their own; regions and hours come back
/// whole. Refresh reloads all four.
#[component]
pub fn SalesStatsDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let any_loading = Signal::derive(move || {
        ctx.products.loading.get()
            || ctx.shops.loading.get()
            || ctx.regions.loading.get()
            || ctx.hourly.loading.get()
    });

    let start_input = RwSignal::new(String::new());
    let end_input = RwSignal::new(String::new());

    let apply_period = move || {
        let (period, ignored) =
            period_from_inputs(&start_input.get_untracked(), &end_input.get_untracked());
        if !ignored.is_empty() {
            ctx.notifier
                .warning(format!("Ignored invalid values: {}", ignored.join(", ")));
        }
        ctx.apply_stats_period(period);
    };

    let reset_period = move || {
        start_input.set(String::new());
        end_input.set(String::new());
        ctx.apply_stats_period(StatsPeriod::default());
    };

    view! {
        <PageFrame page_id="d400_sales_stats--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("bar-chart")}
                    <h1 class="page__title">"Sales statistics"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctx.load_stats()
                        disabled=any_loading
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="stats-period">
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"From:"</Label>
                    <DateTimeInput value=start_input />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"To:"</Label>
                    <DateTimeInput value=end_input />
                </Flex>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| apply_period()
                    disabled=any_loading
                >
                    "Apply"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| reset_period()
                    disabled=any_loading
                >
                    "All time"
                </Button>
            </div>

            <div class="page__content d400-grid">
                <ProductSalesList />
                <ShopSalesList />
                <RegionOrdersList />
                <HourlyOrdersList />
            </div>
        </PageFrame>
    }
}
