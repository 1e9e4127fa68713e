use crate::layout::global_context::AppGlobalContext;
use crate::projections::p903_hourly_orders::{bar_percent, hour_label};
use crate::shared::components::stats_card::StatsCard;
use crate::shared::components::table::format_count;
use leptos::prelude::*;
use thaw::*;

/// One row per hour of the day with a bar scaled to the busiest hour
#[component]
pub fn HourlyOrdersList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let hourly = ctx.hourly;
    let data = hourly.data;
    let loading = hourly.loading;

    view! {
        <StatsCard
            icon_name="clock"
            title="Orders by hour"
            loading=loading
            header_extra=view! {
                <span class="stats-card__hint">
                    {move || format!("{} orders", format_count(Some(data.with(|d| d.total()))))}
                </span>
            }.into_any()
        >
            <Table attr:id="p903-hourly-orders-table" attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=80.0>"Hour"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=80.0>"Orders"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=200.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || data.with(|d| {
                            let max = d.max_count();
                            d.by_hour()
                                .into_iter()
                                .map(|(hour, count)| (hour, count, bar_percent(count, max)))
                                .collect::<Vec<_>>()
                        })
                        key=|row| *row
                        children=move |(hour, count, percent): (u32, i64, u32)| view! {
                            <TableRow>
                                <TableCell>{hour_label(hour)}</TableCell>
                                <TableCell class="text-right">{format_count(Some(count))}</TableCell>
                                <TableCell>
                                    <div class="hour-bar">
                                        <div
                                            class="hour-bar__fill"
                                            style=format!("width: {}%;", percent)
                                        ></div>
                                    </div>
                                </TableCell>
                            </TableRow>
                        }
                    />
                </TableBody>
            </Table>
        </StatsCard>
    }
}
