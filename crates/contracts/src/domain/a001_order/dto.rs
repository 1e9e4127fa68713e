use serde::{Deserialize, Serialize};

/// Строка списка заказов (`GET /order/list`)
///
/// Суммы в минорных единицах. Даты приходят строкой `2024-03-15T14:02:26`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub order_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub shop_id: Option<i64>,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub is_payed: Option<bool>,
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default)]
    pub all_count: Option<i32>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub pay_time: Option<String>,
}

/// Позиция заказа (`GET /order/{orderId}/items`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub order_item_id: i64,
    #[serde(default)]
    pub spu_id: Option<i64>,
    #[serde(default)]
    pub sku_id: Option<i64>,
    #[serde(default)]
    pub spu_name: Option<String>,
    #[serde(default)]
    pub sku_name: Option<String>,
    #[serde(default)]
    pub count: Option<i32>,
    /// Цена за единицу
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub spu_total_amount: Option<i64>,
    #[serde(default)]
    pub pic: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_order_row_with_nested_address() {
        let raw = r#"{
            "orderId": 1001,
            "userId": 7,
            "shopId": 3,
            "shopName": "Tea House",
            "total": 12345,
            "isPayed": true,
            "status": 2,
            "allCount": 4,
            "createTime": "2024-03-15T14:02:26",
            "payTime": null,
            "orderAddr": {"province": "Zhejiang"}
        }"#;
        let order: OrderDto = serde_json::from_str(raw).unwrap();
        assert_eq!(order.order_id, 1001);
        assert_eq!(order.shop_name.as_deref(), Some("Tea House"));
        assert_eq!(order.total, Some(12345));
        assert_eq!(order.is_payed, Some(true));
        assert_eq!(order.pay_time, None);
    }

    #[test]
    fn sparse_order_row_still_decodes() {
        let order: OrderDto = serde_json::from_str(r#"{"orderId": 5}"#).unwrap();
        assert_eq!(order.status, None);
        assert_eq!(order.total, None);
    }

    #[test]
    fn decodes_order_item() {
        let raw = r#"{
            "orderItemId": 9,
            "spuId": 11,
            "spuName": "Green tea",
            "skuName": "250g",
            "count": 2,
            "price": 1500,
            "spuTotalAmount": 3000
        }"#;
        let item: OrderItemDto = serde_json::from_str(raw).unwrap();
        assert_eq!(item.count, Some(2));
        assert_eq!(item.spu_total_amount, Some(3000));
        assert_eq!(item.pic, None);
    }
}
