//! Fixed 40% reduction used by the embedded demo calculator.

use crate::models::FixedReductionEstimate;

/// Share of the current cost that remains after optimization.
pub const RETAINED_SHARE: f64 = 0.6;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

pub fn estimate(current_daily: f64) -> FixedReductionEstimate {
    let optimized_daily = current_daily * RETAINED_SHARE;
    let daily_savings = current_daily - optimized_daily;
    let monthly_savings = daily_savings * DAYS_PER_MONTH;
    let yearly_savings = monthly_savings * MONTHS_PER_YEAR;

    FixedReductionEstimate {
        current_daily,
        optimized_daily,
        daily_savings,
        monthly_savings,
        yearly_savings,
    }
}

/// Optimized counterpart of an arbitrary cost figure.
pub fn optimized(cost: f64) -> f64 {
    cost * RETAINED_SHARE
}
