pub mod money;
pub mod page;
pub mod period;
