use crate::layout::global_context::AppGlobalContext;
use crate::projections::p902_region_orders::ranked;
use crate::shared::components::stats_card::StatsCard;
use crate::shared::components::table::format_count;
use contracts::projections::p902_region_orders::dto::OrderStatDto;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RegionOrdersList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let regions = ctx.regions;
    let data = regions.data;
    let loading = regions.loading;

    view! {
        <StatsCard
            icon_name="map-pin"
            title="Orders by region"
            loading=loading
            header_extra=view! {
                <span class="stats-card__hint">
                    {move || format!("{} regions", data.with(|rows| rows.len()))}
                </span>
            }.into_any()
        >
            <Table attr:id="p902-region-orders-table" attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=160.0>"Province"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=100.0>"Orders"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || data.with(|rows| ranked(rows).into_iter().enumerate().collect::<Vec<_>>())
                        key=|(index, row)| (*index, row.province.clone(), row.order_count)
                        children=move |(_, row): (usize, OrderStatDto)| view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout truncate=true>
                                        {row.province.clone().unwrap_or_else(|| "Unknown".to_string())}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell class="text-right">{format_count(row.order_count)}</TableCell>
                            </TableRow>
                        }
                    />
                </TableBody>
            </Table>

            <Show when=move || !loading.get() && data.with(|rows| rows.is_empty())>
                <div class="table-wrapper__empty">"No orders in this period"</div>
            </Show>
        </StatsCard>
    }
}
