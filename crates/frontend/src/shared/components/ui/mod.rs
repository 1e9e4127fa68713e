pub mod badge;

pub use badge::{Badge, OrderStatusTag, PaymentTag};
