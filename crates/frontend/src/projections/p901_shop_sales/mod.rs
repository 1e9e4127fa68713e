pub mod ui;

use crate::shared::paged_list::ListResource;
use contracts::projections::p901_shop_sales::dto::ShopSalesDto;
use contracts::shared::period::StatsPeriod;

/// `GET /order/stats/shops`
pub struct ShopSalesResource;

impl ListResource for ShopSalesResource {
    type Row = ShopSalesDto;
    type Filter = StatsPeriod;

    const KEY: &'static str = "shops";
    const ENDPOINT: &'static str = "/order/stats/shops";
    const FAILURE_MESSAGE: &'static str = "Failed to load shop sales";

    fn filter_pairs(period: &StatsPeriod) -> Vec<(&'static str, String)> {
        period.query_pairs()
    }
}
