pub mod catalog;
pub mod survival_log;

pub use catalog::EcsItemCatalog;
pub use survival_log::{LogEntry, SurvivalLog};
