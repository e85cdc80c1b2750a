pub mod fixed;
pub mod variable;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{
    usage::coerce, DailyUsageForm, FixedReductionEstimate, SavingsEstimate, UsageForm,
    UsageProfile,
};

/// The two savings presets. They disagree on purpose and are kept separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Estimator {
    VariableFactorEstimate,
    FixedReductionEstimate,
}

impl Estimator {
    pub fn name(&self) -> &'static str {
        match self {
            Self::VariableFactorEstimate => "variable_factor",
            Self::FixedReductionEstimate => "fixed_reduction",
        }
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Run the variable-factor preset on a raw calculator form.
pub fn estimate_form(form: &UsageForm) -> SavingsEstimate {
    let profile = UsageProfile::from_form(form);
    crate::metrics::record_estimate(Estimator::VariableFactorEstimate.name());
    variable::estimate(&profile)
}

/// Run the fixed-reduction preset on a raw daily form.
pub fn estimate_daily_form(form: &DailyUsageForm) -> FixedReductionEstimate {
    let current = coerce(form.current_cost.as_ref());
    crate::metrics::record_estimate(Estimator::FixedReductionEstimate.name());
    fixed::estimate(current)
}
