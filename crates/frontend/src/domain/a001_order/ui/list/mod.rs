pub mod state;

use self::state::{create_form, FilterDraft};
use super::details::OrderItemsDialog;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::datetime_input::DateTimeInput;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{format_id, TableCellAmount};
use crate::shared::components::ui::{Badge, OrderStatusTag, PaymentTag};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a001_order::dto::OrderDto;
use contracts::domain::a001_order::filter::{OrderSortField, SortDirection};
use contracts::enums::order_status::{OrderStatus, Tone};
use leptos::prelude::*;
use thaw::*;

const TABLE_ID: &str = "a001-order-table";

#[component]
pub fn OrderList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let orders = ctx.orders;
    let notifier = ctx.notifier;
    let state = orders.state;
    let loading = orders.loading;

    let form = create_form(&state.with_untracked(|s| s.filter.clone()));
    let is_filter_expanded = RwSignal::new(false);
    let items_open = RwSignal::new(false);
    let selected_order = RwSignal::new(None::<i64>);

    let active_filters_count = Signal::derive(move || state.with(|s| s.filter.active_count()));

    let apply_filter = move || {
        let (filter, ignored) = form.draft().to_filter();
        if !ignored.is_empty() {
            notifier.warning(format!("Ignored invalid values: {}", ignored.join(", ")));
        }
        orders.apply_filter(filter);
    };

    let reset_filter = move || {
        form.load(FilterDraft::default());
        orders.reset_filter();
    };

    let open_items = move |order_id: i64| {
        selected_order.set(Some(order_id));
        items_open.set(true);
    };

    view! {
        <PageFrame page_id="a001_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("orders")}
                    <h1 class="page__title">"Orders"</h1>
                    <Badge tone=Tone::Info>
                        {move || state.with(|s| s.pagination.item_count.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| orders.refresh()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=active_filters_count
                    pagination_controls=view! {
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.pagination.page))
                            total_pages=Signal::derive(move || state.with(|s| s.pagination.page_count()))
                            total_count=Signal::derive(move || state.with(|s| s.pagination.item_count))
                            page_size=Signal::derive(move || state.with(|s| s.pagination.page_size))
                            on_page_change=Callback::new(move |page| orders.go_to_page(page))
                            on_page_size_change=Callback::new(move |size| orders.change_page_size(size))
                            disabled=Signal::derive(move || loading.get())
                        />
                    }.into_any()
                >
                        <Flex gap=FlexGap::Small align=FlexAlign::End style="flex-wrap: wrap;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Shop name:"</Label>
                                <Input value=form.shop_name placeholder="Contains..." />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Status:"</Label>
                                <Select value=form.status>
                                    <option value="">"Any"</option>
                                    {OrderStatus::ALL
                                        .iter()
                                        .filter_map(|status| {
                                            status.code().map(|code| view! {
                                                <option value=code.to_string()>{status.label()}</option>
                                            })
                                        })
                                        .collect_view()}
                                </Select>
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Payment:"</Label>
                                <Select value=form.is_payed>
                                    <option value="">"Any"</option>
                                    <option value="true">"Paid"</option>
                                    <option value="false">"Unpaid"</option>
                                </Select>
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Total, ¥:"</Label>
                                <Flex gap=FlexGap::Small>
                                    <Input value=form.min_total placeholder="Min" attr:style="width: 110px;" />
                                    <Input value=form.max_total placeholder="Max" attr:style="width: 110px;" />
                                </Flex>
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Created:"</Label>
                                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                    <DateTimeInput value=form.start_time />
                                    <span>"—"</span>
                                    <DateTimeInput value=form.end_time />
                                </Flex>
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Sort by:"</Label>
                                <Flex gap=FlexGap::Small>
                                    <Select value=form.sort_field>
                                        {OrderSortField::ALL
                                            .iter()
                                            .map(|field| view! {
                                                <option value=field.code()>{field.label()}</option>
                                            })
                                            .collect_view()}
                                    </Select>
                                    <Select value=form.sort_direction>
                                        {[SortDirection::Desc, SortDirection::Asc]
                                            .iter()
                                            .map(|dir| view! {
                                                <option value=dir.code()>{dir.label()}</option>
                                            })
                                            .collect_view()}
                                    </Select>
                                </Flex>
                            </Flex>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| apply_filter()
                                disabled=Signal::derive(move || loading.get())
                            >
                                "Search"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| reset_filter()
                                disabled=Signal::derive(move || loading.get())
                            >
                                "Reset"
                            </Button>
                        </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Show when=move || loading.get()>
                        <div class="table-wrapper__overlay">
                            <Spinner />
                        </div>
                    </Show>

                    <Table attr:id=TABLE_ID attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=110.0>"Order"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"User"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Shop"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Total"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Payment"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Created"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.rows.clone())
                                key=|row| row.order_id
                                children=move |row: OrderDto| {
                                    let order_id = row.order_id;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        title="Show items"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_items(order_id);
                                                        }
                                                    >
                                                        {order_id}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_id(row.user_id)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {row.shop_name.clone().unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCellAmount value=row.total />
                                            <TableCell>
                                                <TableCellLayout>
                                                    <PaymentTag is_payed=row.is_payed />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <OrderStatusTag code=row.status />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_datetime(row.create_time.as_deref())}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || state.with(|s| s.rows.is_empty()) && !loading.get()>
                        <div class="table-wrapper__empty">"No orders"</div>
                    </Show>
                </div>
            </div>

            <OrderItemsDialog open=items_open order_id=selected_order />
        </PageFrame>
    }
}
