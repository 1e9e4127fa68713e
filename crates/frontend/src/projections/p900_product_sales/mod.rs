pub mod ui;

use crate::shared::paged_list::ListResource;
use contracts::projections::p900_product_sales::dto::ProductSalesDto;
use contracts::shared::period::StatsPeriod;

/// `GET /order/stats/products`: products ranked by units sold
pub struct ProductSalesResource;

impl ListResource for ProductSalesResource {
    type Row = ProductSalesDto;
    type Filter = StatsPeriod;

    const KEY: &'static str = "products";
    const ENDPOINT: &'static str = "/order/stats/products";
    const FAILURE_MESSAGE: &'static str = "Failed to load product sales";

    fn filter_pairs(period: &StatsPeriod) -> Vec<(&'static str, String)> {
        period.query_pairs()
    }
}
