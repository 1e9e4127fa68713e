use contracts::enums::order_status::{OrderStatus, PaymentState, Tone};
use leptos::prelude::*;

pub fn badge_class(tone: Tone) -> String {
    format!("badge badge--{}", tone.css_suffix())
}

/// Badge component with a colour tone
#[component]
pub fn Badge(
    #[prop(optional)]
    tone: Option<Tone>,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=badge_class(tone.unwrap_or(Tone::Neutral))>
            {children()}
        </span>
    }
}

/// Order status tag; unknown codes fall back to a neutral "Unknown"
#[component]
pub fn OrderStatusTag(code: Option<i32>) -> impl IntoView {
    let status = OrderStatus::from_code(code);
    view! {
        <Badge tone=status.tone()>{status.label()}</Badge>
    }
}

#[component]
pub fn PaymentTag(is_payed: Option<bool>) -> impl IntoView {
    let payment = PaymentState::from_flag(is_payed);
    view! {
        <Badge tone=payment.tone()>{payment.label()}</Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class_for_unknown_status() {
        let status = OrderStatus::from_code(Some(4));
        assert_eq!(badge_class(status.tone()), "badge badge--neutral");
    }

    #[test]
    fn test_badge_class_for_payment() {
        assert_eq!(
            badge_class(PaymentState::from_flag(Some(true)).tone()),
            "badge badge--success"
        );
    }
}
