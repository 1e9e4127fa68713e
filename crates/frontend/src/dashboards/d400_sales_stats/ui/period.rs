use crate::shared::date_utils::parse_datetime_local;
use contracts::shared::period::StatsPeriod;

/// Builds the period from the two `datetime-local` inputs
///
/// Blank inputs are open bounds. Unparseable ones are dropped and named in
/// the second value.
pub fn period_from_inputs(start: &str, end: &str) -> (StatsPeriod, Vec<&'static str>) {
    let mut ignored = Vec::new();
    let mut bound = |value: &str, label: &'static str| {
        if value.trim().is_empty() {
            return None;
        }
        let parsed = parse_datetime_local(value);
        if parsed.is_none() {
            ignored.push(label);
        }
        parsed
    };

    let start_time = bound(start, "From");
    let end_time = bound(end, "To");
    (StatsPeriod { start_time, end_time }, ignored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_blank_inputs_mean_all_time() {
        let (period, ignored) = period_from_inputs("", "  ");
        assert_eq!(period, StatsPeriod::default());
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_both_bounds() {
        let (period, ignored) = period_from_inputs("2024-02-01T00:00", "2024-02-29T23:59:59");
        assert!(ignored.is_empty());
        assert_eq!(
            period.start_time,
            NaiveDate::from_ymd_opt(2024, 2, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert_eq!(
            period.end_time,
            NaiveDate::from_ymd_opt(2024, 2, 29).and_then(|d| d.and_hms_opt(23, 59, 59))
        );
    }

    #[test]
    fn test_invalid_bound_is_dropped() {
        let (period, ignored) = period_from_inputs("yesterday", "2024-02-29T23:59");
        assert_eq!(period.start_time, None);
        assert!(period.end_time.is_some());
        assert_eq!(ignored, vec!["From"]);
    }
}
