use serde::{Deserialize, Serialize};

/// Продажи по магазину, `GET /order/stats/shops`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopSalesDto {
    pub shop_id: i64,
    /// Сумма продаж в минорных единицах
    #[serde(default)]
    pub total_amount: Option<i64>,
    #[serde(default)]
    pub order_count: Option<i64>,
}
