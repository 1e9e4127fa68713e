pub mod ui;

use crate::shared::report::ReportResource;
use contracts::projections::p902_region_orders::dto::OrderStatDto;

/// `GET /order/stats/regions`: order count per delivery province
pub struct RegionOrdersResource;

impl ReportResource for RegionOrdersResource {
    type Data = Vec<OrderStatDto>;

    const KEY: &'static str = "regions";
    const ENDPOINT: &'static str = "/order/stats/regions";
    const FAILURE_MESSAGE: &'static str = "Failed to load orders by region";
}

/// Rows sorted by order count, largest first; ties keep the server order
pub fn ranked(rows: &[OrderStatDto]) -> Vec<OrderStatDto> {
    let mut rows = rows.to_vec();
    rows.sort_by(|a, b| b.order_count.unwrap_or(0).cmp(&a.order_count.unwrap_or(0)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::ApiConfig;
    use crate::shared::report::report_url;
    use contracts::shared::period::StatsPeriod;

    fn row(province: Option<&str>, count: Option<i64>) -> OrderStatDto {
        OrderStatDto {
            province: province.map(str::to_string),
            order_count: count,
        }
    }

    #[test]
    fn test_default_url() {
        let url = report_url::<RegionOrdersResource>(&ApiConfig::default(), &StatsPeriod::default());
        assert_eq!(url, "/order/stats/regions");
    }

    #[test]
    fn test_ranked_by_count() {
        let rows = vec![
            row(Some("Anhui"), Some(3)),
            row(None, None),
            row(Some("Zhejiang"), Some(40)),
            row(Some("Hubei"), Some(3)),
        ];
        let names: Vec<_> = ranked(&rows).into_iter().map(|r| r.province).collect();
        assert_eq!(
            names,
            vec![
                Some("Zhejiang".to_string()),
                Some("Anhui".to_string()),
                Some("Hubei".to_string()),
                None,
            ]
        );
    }
}
