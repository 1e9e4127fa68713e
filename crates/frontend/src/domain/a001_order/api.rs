use crate::shared::api_utils::{fetch_json, ApiConfig, FetchError};
use crate::shared::paged_list::ListResource;
use contracts::domain::a001_order::dto::{OrderDto, OrderItemDto};
use contracts::domain::a001_order::filter::OrderListFilter;

/// `GET /order/list`
pub struct OrderListResource;

impl ListResource for OrderListResource {
    type Row = OrderDto;
    type Filter = OrderListFilter;

    const KEY: &'static str = "orders";
    const ENDPOINT: &'static str = "/order/list";
    const FAILURE_MESSAGE: &'static str = "Failed to load orders";

    fn filter_pairs(filter: &OrderListFilter) -> Vec<(&'static str, String)> {
        filter.query_pairs()
    }
}

pub fn order_items_path(order_id: i64) -> String {
    format!("/order/{}/items", order_id)
}

/// Line items of one order
pub async fn fetch_order_items(
    api: &ApiConfig,
    order_id: i64,
) -> Result<Vec<OrderItemDto>, FetchError> {
    let url = api.url(&order_items_path(order_id), &[]);
    log::debug!("orders: GET {}", url);
    fetch_json(&url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::paged_list::{apply_outcome, list_query, ResourceState};
    use contracts::domain::a001_order::filter::{OrderSortField, SortDirection};

    fn orders_url(state: &ResourceState<OrderListResource>) -> String {
        ApiConfig::default().url(
            OrderListResource::ENDPOINT,
            &list_query::<OrderListResource>(state),
        )
    }

    #[test]
    fn test_default_query() {
        let state = ResourceState::<OrderListResource>::default();
        assert_eq!(
            orders_url(&state),
            "/order/list?page=1&size=10&sortField=createTime&sortDirection=desc"
        );
    }

    #[test]
    fn test_filtered_query_on_second_page() {
        let mut state = ResourceState::<OrderListResource>::default();
        state.apply_filter(OrderListFilter {
            status: Some(2),
            is_payed: Some(true),
            min_total: Some(12.5),
            sort_field: OrderSortField::Total,
            sort_direction: SortDirection::Asc,
            ..Default::default()
        });
        state.go_to_page(2);

        assert_eq!(
            orders_url(&state),
            "/order/list?page=2&size=10&sortField=total&sortDirection=asc&status=2&isPayed=true&minTotal=1250"
        );
    }

    #[test]
    fn test_spring_page_fills_state() {
        let raw = r#"{
            "content": [
                {"orderId": 9001, "userId": 7, "shopName": "Tea & Co", "total": 1250,
                 "isPayed": true, "status": 4, "createTime": "2024-03-15T14:02:26"}
            ],
            "pageable": {"pageNumber": 2, "pageSize": 10},
            "totalElements": 25,
            "totalPages": 3,
            "size": 10,
            "number": 2,
            "first": false,
            "last": true
        }"#;
        let page = serde_json::from_str(raw).unwrap();

        let mut state = ResourceState::<OrderListResource>::default();
        let message = apply_outcome::<OrderListResource>(&mut state, Ok(page));

        assert_eq!(message, None);
        assert_eq!(state.pagination.page, 3);
        assert_eq!(state.pagination.page_count(), 3);
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.rows[0].order_id, 9001);
        assert_eq!(state.rows[0].status, Some(4));
    }

    #[test]
    fn test_order_items_path() {
        assert_eq!(order_items_path(42), "/order/42/items");
    }
}
