use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stats_card::StatsCard;
use crate::shared::components::table::{format_count, TableCellAmount};
use contracts::projections::p901_shop_sales::dto::ShopSalesDto;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ShopSalesList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let shops = ctx.shops;
    let state = shops.state;
    let loading = shops.loading;

    view! {
        <StatsCard
            icon_name="bar-chart"
            title="Shop sales"
            loading=loading
            header_extra=view! {
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.pagination.page))
                    total_pages=Signal::derive(move || state.with(|s| s.pagination.page_count()))
                    total_count=Signal::derive(move || state.with(|s| s.pagination.item_count))
                    page_size=Signal::derive(move || state.with(|s| s.pagination.page_size))
                    on_page_change=Callback::new(move |page| shops.go_to_page(page))
                    on_page_size_change=Callback::new(move |size| shops.change_page_size(size))
                    disabled=Signal::derive(move || loading.get())
                />
            }.into_any()
        >
            <Table attr:id="p901-shop-sales-table" attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=100.0>"Shop ID"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=120.0>"Revenue"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=100.0>"Orders"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || state.with(|s| s.rows.clone())
                        key=|row| row.shop_id
                        children=move |row: ShopSalesDto| view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>{row.shop_id}</TableCellLayout>
                                </TableCell>
                                <TableCellAmount value=row.total_amount />
                                <TableCell class="text-right">{format_count(row.order_count)}</TableCell>
                            </TableRow>
                        }
                    />
                </TableBody>
            </Table>
        </StatsCard>
    }
}
