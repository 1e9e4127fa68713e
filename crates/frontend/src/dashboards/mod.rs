pub mod d400_sales_stats;

pub use d400_sales_stats::ui::SalesStatsDashboard;
