use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const HOURS_PER_DAY: u32 = 24;

/// Число заказов по часу создания, `GET /order/stats/hourly`
///
/// На проводе это объект `{"0": 12, "13": 40}`: ключ это час (0..23),
/// часы без заказов в ответе отсутствуют.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct HourlyOrdersDto(pub BTreeMap<u32, i64>);

impl HourlyOrdersDto {
    /// Все 24 часа по порядку, пропущенные часы с нулём
    ///
    /// Ключи вне 0..23 отбрасываются.
    pub fn by_hour(&self) -> Vec<(u32, i64)> {
        (0..HOURS_PER_DAY)
            .map(|hour| (hour, self.0.get(&hour).copied().unwrap_or(0)))
            .collect()
    }

    pub fn max_count(&self) -> i64 {
        self.0
            .iter()
            .filter(|(hour, _)| **hour < HOURS_PER_DAY)
            .map(|(_, count)| *count)
            .max()
            .unwrap_or(0)
    }

    pub fn total(&self) -> i64 {
        self.by_hour().iter().map(|(_, count)| count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_string_keys() {
        let dto: HourlyOrdersDto = serde_json::from_str(r#"{"0": 5, "13": 40, "23": 1}"#).unwrap();
        assert_eq!(dto.0.get(&13), Some(&40));
        assert_eq!(dto.0.len(), 3);
    }

    #[test]
    fn by_hour_fills_missing_hours() {
        let dto: HourlyOrdersDto = serde_json::from_str(r#"{"2": 7, "30": 99}"#).unwrap();
        let hours = dto.by_hour();
        assert_eq!(hours.len(), 24);
        assert_eq!(hours[0], (0, 0));
        assert_eq!(hours[2], (2, 7));
        assert_eq!(hours[23], (23, 0));
        assert_eq!(dto.max_count(), 7);
        assert_eq!(dto.total(), 7);
    }

    #[test]
    fn empty_map() {
        let dto: HourlyOrdersDto = serde_json::from_str("{}").unwrap();
        assert_eq!(dto.max_count(), 0);
        assert_eq!(dto.total(), 0);
    }
}
