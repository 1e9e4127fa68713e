//! Ячейка таблицы для сумм в минимальных единицах (фэнь)
//!
//! ```rust,ignore
//! <TableCellAmount value=row.total />
//! ```

use contracts::shared::money::format_amount;
use leptos::prelude::*;
use thaw::*;

pub const CURRENCY_SIGN: &str = "¥";

/// Текст ячейки: `¥12.50`; пустая сумма показывается как `¥0.00`
pub fn amount_text(value: Option<i64>) -> String {
    format!("{}{}", CURRENCY_SIGN, format_amount(value))
}

/// Выравнивается по правому краю
#[component]
pub fn TableCellAmount(value: Option<i64>) -> impl IntoView {
    view! {
        <TableCell class="text-right">
            <span class="amount">{amount_text(value)}</span>
        </TableCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_text() {
        assert_eq!(amount_text(Some(1250)), "¥12.50");
        assert_eq!(amount_text(Some(0)), "¥0.00");
        assert_eq!(amount_text(None), "¥0.00");
    }
}
