use serde::{Deserialize, Serialize};

/// Цветовая категория тега в таблице
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Info,
    Warning,
    Success,
    Error,
    Neutral,
}

impl Tone {
    /// Суффикс CSS-класса `badge--*`
    pub fn css_suffix(&self) -> &'static str {
        match self {
            Tone::Info => "primary",
            Tone::Warning => "warning",
            Tone::Success => "success",
            Tone::Error => "error",
            Tone::Neutral => "neutral",
        }
    }
}

/// Статус заказа
///
/// Коды приходят из API числом. Всё, чего нет в таблице (в том числе 4 и
/// отсутствующий статус), отображается как `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    PendingPayment,
    AwaitingShipment,
    Shipped,
    Completed,
    Failed,
    Unknown,
}

impl OrderStatus {
    /// Статусы, которые можно выбрать в фильтре
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::PendingPayment,
        OrderStatus::AwaitingShipment,
        OrderStatus::Shipped,
        OrderStatus::Completed,
        OrderStatus::Failed,
    ];

    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(1) => OrderStatus::PendingPayment,
            Some(2) => OrderStatus::AwaitingShipment,
            Some(3) => OrderStatus::Shipped,
            Some(5) => OrderStatus::Completed,
            Some(6) => OrderStatus::Failed,
            _ => OrderStatus::Unknown,
        }
    }

    /// Код для API, у `Unknown` его нет
    pub fn code(&self) -> Option<i32> {
        match self {
            OrderStatus::PendingPayment => Some(1),
            OrderStatus::AwaitingShipment => Some(2),
            OrderStatus::Shipped => Some(3),
            OrderStatus::Completed => Some(5),
            OrderStatus::Failed => Some(6),
            OrderStatus::Unknown => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::PendingPayment => "Pending payment",
            OrderStatus::AwaitingShipment => "Awaiting shipment",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Completed => "Completed",
            OrderStatus::Failed => "Failed",
            OrderStatus::Unknown => "Unknown",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            OrderStatus::PendingPayment => Tone::Info,
            OrderStatus::AwaitingShipment => Tone::Warning,
            OrderStatus::Shipped => Tone::Success,
            OrderStatus::Completed => Tone::Success,
            OrderStatus::Failed => Tone::Error,
            OrderStatus::Unknown => Tone::Neutral,
        }
    }
}

/// Признак оплаты заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentState {
    Paid,
    Unpaid,
}

impl PaymentState {
    pub fn from_flag(is_payed: Option<bool>) -> Self {
        if is_payed.unwrap_or(false) {
            PaymentState::Paid
        } else {
            PaymentState::Unpaid
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentState::Paid => "Paid",
            PaymentState::Unpaid => "Unpaid",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            PaymentState::Paid => Tone::Success,
            PaymentState::Unpaid => Tone::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_statuses() {
        assert_eq!(OrderStatus::from_code(Some(1)), OrderStatus::PendingPayment);
        assert_eq!(OrderStatus::from_code(Some(2)), OrderStatus::AwaitingShipment);
        assert_eq!(OrderStatus::from_code(Some(3)), OrderStatus::Shipped);
        assert_eq!(OrderStatus::from_code(Some(5)), OrderStatus::Completed);
        assert_eq!(OrderStatus::from_code(Some(6)), OrderStatus::Failed);
    }

    #[test]
    fn code_four_is_unknown() {
        let status = OrderStatus::from_code(Some(4));
        assert_eq!(status, OrderStatus::Unknown);
        assert_eq!(status.tone(), Tone::Neutral);
        assert_eq!(status.label(), "Unknown");
    }

    #[test]
    fn absent_or_out_of_range_codes_are_unknown() {
        for code in [None, Some(0), Some(-1), Some(7), Some(i32::MAX)] {
            assert_eq!(OrderStatus::from_code(code), OrderStatus::Unknown);
        }
    }

    #[test]
    fn selectable_statuses_round_trip_through_code() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_code(status.code()), status);
        }
        assert_eq!(OrderStatus::Unknown.code(), None);
    }

    #[test]
    fn payment_flag_tags() {
        assert_eq!(PaymentState::from_flag(Some(true)).tone(), Tone::Success);
        assert_eq!(PaymentState::from_flag(Some(false)).label(), "Unpaid");
        assert_eq!(PaymentState::from_flag(None), PaymentState::Unpaid);
    }
}
