pub mod datetime_input;
pub mod filter_panel;
pub mod pagination_controls;
pub mod stats_card;
pub mod table;
pub mod ui;
