use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Формат дат в query-параметрах `startTime`/`endTime`
pub const QUERY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Пары `startTime`/`endTime`, только для заданных границ
pub fn time_range_pairs(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(start) = start {
        pairs.push(("startTime", start.format(QUERY_DATETIME_FORMAT).to_string()));
    }
    if let Some(end) = end {
        pairs.push(("endTime", end.format(QUERY_DATETIME_FORMAT).to_string()));
    }
    pairs
}

/// Период, за который считается статистика (`/order/stats/*`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsPeriod {
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

impl StatsPeriod {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        time_range_pairs(self.start_time, self.end_time)
    }
}
