//! Analytics components
//!
//! Pure functions over immutable history. Each component takes its
//! inputs by value or reference and returns a result; nothing in here
//! touches storage or the clock, which keeps the whole pipeline
//! deterministic given `(history, now)`.

mod consumption;
mod cost;
mod dashboard;
mod menu;
pub(crate) mod quantity;
mod restock;
mod trend;

pub use consumption::ConsumptionEstimator;
pub use cost::CostAnalyzer;
pub use dashboard::DashboardAggregator;
pub use menu::{top_quartile_threshold, MenuAdvisor};
pub use restock::RestockPredictor;
pub use trend::{TrendAnalysis, TrendClassifier};
