use crate::domain::a001_order::api::fetch_order_items;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::table::{amount_text, format_count, format_id};
use crate::shared::paged_list::LoadingGuard;
use contracts::domain::a001_order::dto::OrderItemDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Line items of the selected order
///
/// Loads whenever `order_id` is set. A reply to anything but the latest
/// request is dropped and leaves the spinner alone.
#[component]
pub fn OrderItemsDialog(open: RwSignal<bool>, order_id: RwSignal<Option<i64>>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let items = RwSignal::new(Vec::<OrderItemDto>::new());
    let loading = RwSignal::new(false);
    // bumped per request; only the latest one may settle the dialog
    let latest = StoredValue::new(0_u64);

    Effect::new(move |_| {
        let Some(id) = order_id.get() else {
            return;
        };
        items.set(Vec::new());

        let api = ctx.api.get_value();
        let notifier = ctx.notifier;
        latest.update_value(|n| *n += 1);
        let ticket = latest.get_value();
        let guard = LoadingGuard::acquire(loading);
        spawn_local(async move {
            let result = fetch_order_items(&api, id).await;
            if latest.try_get_value() != Some(ticket) {
                // a newer request owns the spinner and the rows
                log::debug!("dropping items reply for order {}", id);
                guard.disarm();
                return;
            }
            match result {
                Ok(rows) => {
                    let _ = items.try_set(rows);
                }
                Err(e) => {
                    let message = format!("Failed to load items of order {}: {}", id, e);
                    log::error!("{}", message);
                    notifier.error(message);
                }
            }
            drop(guard);
        });
    });

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || match order_id.get() {
                            Some(id) => format!("Order {}", id),
                            None => "Order".to_string(),
                        }}
                    </DialogTitle>
                    <DialogContent>
                        <Show
                            when=move || !loading.get()
                            fallback=|| view! { <Spinner /> }
                        >
                            <Show
                                when=move || items.with(|i| !i.is_empty())
                                fallback=|| view! { <div class="table-wrapper__empty">"No items"</div> }
                            >
                                <Table attr:style="width: 100%;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>"SPU"</TableHeaderCell>
                                            <TableHeaderCell>"Product"</TableHeaderCell>
                                            <TableHeaderCell>"SKU"</TableHeaderCell>
                                            <TableHeaderCell>"Qty"</TableHeaderCell>
                                            <TableHeaderCell>"Price"</TableHeaderCell>
                                            <TableHeaderCell>"Amount"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        <For
                                            each=move || items.get()
                                            key=|item| item.order_item_id
                                            children=move |item: OrderItemDto| view! {
                                                <TableRow>
                                                    <TableCell>{format_id(item.spu_id)}</TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {item.spu_name.clone().unwrap_or_default()}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {item.sku_name.clone().unwrap_or_else(|| format_id(item.sku_id))}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell class="text-right">
                                                        {format_count(item.count.map(i64::from))}
                                                    </TableCell>
                                                    <TableCell class="text-right">{amount_text(item.price)}</TableCell>
                                                    <TableCell class="text-right">
                                                        {amount_text(item.spu_total_amount)}
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        />
                                    </TableBody>
                                </Table>
                            </Show>
                        </Show>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            "Close"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
