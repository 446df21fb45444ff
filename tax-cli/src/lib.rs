pub mod config;
pub mod csv_loader;
pub mod logging;
pub mod models;
pub mod report;

pub use config::{AppConfig, ConfigError};
pub use models::IncomeFormModel;
pub use report::EstimateReport;
