pub mod ui;

use crate::shared::report::ReportResource;
use contracts::projections::p903_hourly_orders::dto::HourlyOrdersDto;

/// `GET /order/stats/hourly`: order count per hour of creation
pub struct HourlyOrdersResource;

impl ReportResource for HourlyOrdersResource {
    type Data = HourlyOrdersDto;

    const KEY: &'static str = "hourly";
    const ENDPOINT: &'static str = "/order/stats/hourly";
    const FAILURE_MESSAGE: &'static str = "Failed to load orders by hour";
}

/// `"09:00"`
pub fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// Bar width in percent of the busiest hour
pub fn bar_percent(count: i64, max: i64) -> u32 {
    if max <= 0 || count <= 0 {
        return 0;
    }
    ((count.min(max) * 100) / max) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_label() {
        assert_eq!(hour_label(0), "00:00");
        assert_eq!(hour_label(9), "09:00");
        assert_eq!(hour_label(23), "23:00");
    }

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(0, 0), 0);
        assert_eq!(bar_percent(5, 0), 0);
        assert_eq!(bar_percent(10, 40), 25);
        assert_eq!(bar_percent(40, 40), 100);
        assert_eq!(bar_percent(-1, 40), 0);
    }
}
