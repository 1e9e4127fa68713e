use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stats_card::StatsCard;
use crate::shared::components::table::{format_count, TableCellAmount};
use contracts::projections::p900_product_sales::dto::ProductSalesDto;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductSalesList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let products = ctx.products;
    let state = products.state;
    let loading = products.loading;

    view! {
        <StatsCard
            icon_name="products"
            title="Product sales"
            loading=loading
            header_extra=view! {
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.pagination.page))
                    total_pages=Signal::derive(move || state.with(|s| s.pagination.page_count()))
                    total_count=Signal::derive(move || state.with(|s| s.pagination.item_count))
                    page_size=Signal::derive(move || state.with(|s| s.pagination.page_size))
                    on_page_change=Callback::new(move |page| products.go_to_page(page))
                    on_page_size_change=Callback::new(move |size| products.change_page_size(size))
                    disabled=Signal::derive(move || loading.get())
                />
            }.into_any()
        >
            <Table attr:id="p900-product-sales-table" attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=100.0>"Product ID"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=240.0>"Product"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=100.0>"Sold"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=120.0>"Revenue"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || state.with(|s| s.rows.clone())
                        key=|row| row.spu_id
                        children=move |row: ProductSalesDto| view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>{row.spu_id}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>
                                        {row.spu_name.clone().unwrap_or_else(|| "—".to_string())}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell class="text-right">{format_count(row.total_sold)}</TableCell>
                                <TableCellAmount value=row.total_amount />
                            </TableRow>
                        }
                    />
                </TableBody>
            </Table>
        </StatsCard>
    }
}
