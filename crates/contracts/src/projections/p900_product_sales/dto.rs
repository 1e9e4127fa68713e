use serde::{Deserialize, Serialize};

/// Продажи по товару (SPU), `GET /order/stats/products`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSalesDto {
    pub spu_id: i64,
    #[serde(default)]
    pub spu_name: Option<String>,
    #[serde(default)]
    pub total_sold: Option<i64>,
    /// Сумма продаж в минорных единицах
    #[serde(default)]
    pub total_amount: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::page::Page;

    #[test]
    fn decodes_product_sales_page() {
        let raw = r#"{
            "content": [
                {"spuId": 1, "spuName": "Green tea", "totalSold": 40, "totalAmount": 60000},
                {"spuId": 2, "spuName": null, "totalSold": 3, "totalAmount": 900}
            ],
            "totalElements": 2,
            "totalPages": 1,
            "size": 10,
            "number": 0
        }"#;
        let page: Page<ProductSalesDto> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[0].total_amount, Some(60000));
        assert_eq!(page.content[1].spu_name, None);
    }
}
