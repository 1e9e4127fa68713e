//! Денежные суммы: на проводе всегда целые минорные единицы (фэни/копейки),
//! в основные единицы переводятся только для отображения и ввода фильтров.

/// Переводит сумму в основных единицах в минорные, с округлением
pub fn to_minor_units(major: f64) -> i64 {
    (major * 100.0).round() as i64
}

/// Проверяет, что сумма после перевода в минорные единицы помещается в `i64`
///
/// `to_minor_units` за пределами диапазона молча насыщается, поэтому ввод
/// фильтра проверяется этой функцией заранее.
pub fn fits_minor_units(major: f64) -> bool {
    let minor = (major * 100.0).round();
    minor.is_finite() && minor >= i64::MIN as f64 && minor < i64::MAX as f64
}

/// Форматирует минорные единицы как основные с двумя знаками после точки
///
/// Без плавающей точки: `123456` -> `"1234.56"`, `-5` -> `"-0.05"`.
pub fn format_minor_units(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// То же, но пустая сумма показывается как ноль
pub fn format_amount(minor: Option<i64>) -> String {
    format_minor_units(minor.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_minor_units() {
        assert_eq!(to_minor_units(12.34), 1234);
        assert_eq!(to_minor_units(0.0), 0);
        assert_eq!(to_minor_units(100.0), 10000);
        // 19.99 * 100 = 1998.9999999999998
        assert_eq!(to_minor_units(19.99), 1999);
        assert_eq!(to_minor_units(-3.5), -350);
    }

    #[test]
    fn test_fits_minor_units() {
        assert!(fits_minor_units(0.0));
        assert!(fits_minor_units(-12.5));
        assert!(fits_minor_units(90_000_000_000_000_000.0));
        assert!(!fits_minor_units(1e300));
        assert!(!fits_minor_units(-1e300));
        assert!(!fits_minor_units(f64::NAN));
    }

    #[test]
    fn test_format_minor_units() {
        assert_eq!(format_minor_units(123456), "1234.56");
        assert_eq!(format_minor_units(100), "1.00");
        assert_eq!(format_minor_units(7), "0.07");
        assert_eq!(format_minor_units(0), "0.00");
        assert_eq!(format_minor_units(-5), "-0.05");
        assert_eq!(format_minor_units(-1250), "-12.50");
    }

    #[test]
    fn formatted_amount_matches_division_by_hundred() {
        for minor in [0_i64, 1, 99, 100, 101, 4999, 123456, 987654321] {
            let expected = format!("{:.2}", minor as f64 / 100.0);
            assert_eq!(format_minor_units(minor), expected, "minor = {}", minor);
        }
    }

    #[test]
    fn missing_amount_is_zero() {
        assert_eq!(format_amount(None), "0.00");
        assert_eq!(format_amount(Some(250)), "2.50");
    }
}
