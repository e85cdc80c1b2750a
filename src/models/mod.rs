pub mod catalog;
pub mod estimate;
pub mod usage;

pub use estimate::{DailyUsageForm, FixedReductionEstimate, SavingsEstimate};
pub use usage::{PrimaryService, RawAmount, UsageForm, UsageProfile};
