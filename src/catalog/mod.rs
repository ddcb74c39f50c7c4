// Static reference data for the non-incident screens
//
// Dashboard metrics, runbook solutions, and settings entries are fixed
// tables with no backend behind them.

pub mod dashboard;
pub mod settings;
pub mod solutions;

pub use dashboard::{InsightKind, Metric, Trend};
pub use settings::SettingsTab;
pub use solutions::{filter_solutions, Category, Solution};
