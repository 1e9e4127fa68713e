//! Утилиты форматирования чисел для таблиц

/// Вставляет разделитель тысяч (пробел) в целую часть
///
/// # Примеры
///
/// ```rust,ignore
/// assert_eq!(group_thousands("1234567"), "1 234 567");
/// ```
pub fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(' ');
        }
        result.push(c);
    }
    format!("{}{}", sign, result)
}

/// Счётчики (продано штук, число заказов); пустое значение показывается как 0
pub fn format_count(value: Option<i64>) -> String {
    group_thousands(&value.unwrap_or(0).to_string())
}

/// Идентификаторы без группировки, пустое значение как прочерк
pub fn format_id(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1 000");
        assert_eq!(group_thousands("1234567"), "1 234 567");
        assert_eq!(group_thousands("-1234"), "-1 234");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(12500)), "12 500");
        assert_eq!(format_count(None), "0");
    }

    #[test]
    fn test_format_id() {
        assert_eq!(format_id(Some(100234)), "100234");
        assert_eq!(format_id(None), "—");
    }
}
