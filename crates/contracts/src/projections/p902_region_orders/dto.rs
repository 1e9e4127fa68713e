use serde::{Deserialize, Serialize};

/// Заказы по провинции доставки, `GET /order/stats/regions`
///
/// Ответ не постраничный: весь список целиком.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatDto {
    /// `None` для заказов без адреса
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub order_count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_region_list() {
        let raw = r#"[
            {"province": "Zhejiang", "orderCount": 120},
            {"province": null, "orderCount": 3},
            {}
        ]"#;
        let rows: Vec<OrderStatDto> = serde_json::from_str(raw).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].province.as_deref(), Some("Zhejiang"));
        assert_eq!(rows[0].order_count, Some(120));
        assert_eq!(rows[1].province, None);
        assert_eq!(rows[2].order_count, None);
    }
}
