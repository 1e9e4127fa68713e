pub mod dashboard;
pub mod period;

pub use dashboard::SalesStatsDashboard;
