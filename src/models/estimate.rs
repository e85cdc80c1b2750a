use serde::{Deserialize, Serialize};

use super::usage::RawAmount;

/// Projected monthly savings from the variable-factor calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsEstimate {
    pub potential_savings: f64,
    pub optimized_cost: f64,
    pub savings_percentage: f64,
}

impl SavingsEstimate {
    pub fn yearly_savings(&self) -> f64 {
        self.potential_savings * 12.0
    }

    /// The results view only renders figures when there is something to save.
    pub fn has_estimate(&self) -> bool {
        self.potential_savings > 0.0
    }
}

/// Daily, monthly and yearly figures from the fixed 40% reduction calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedReductionEstimate {
    pub current_daily: f64,
    pub optimized_daily: f64,
    pub daily_savings: f64,
    pub monthly_savings: f64,
    pub yearly_savings: f64,
}

/// Raw form of the daily-cost calculator.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyUsageForm {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub tokens_per_day: Option<RawAmount>,
    #[serde(default)]
    pub calls_per_day: Option<RawAmount>,
    #[serde(default)]
    pub current_cost: Option<RawAmount>,
}

impl DailyUsageForm {
    pub fn is_ready(&self) -> bool {
        let has_model = self
            .model
            .as_deref()
            .is_some_and(|model| !model.trim().is_empty());
        let has_cost = self
            .current_cost
            .as_ref()
            .is_some_and(|cost| !cost.is_blank());
        has_model && has_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_savings_estimate_yearly() {
        let estimate = SavingsEstimate {
            potential_savings: 2000.0,
            optimized_cost: 3000.0,
            savings_percentage: 40.0,
        };
        assert_eq!(estimate.yearly_savings(), 24000.0);
        assert!(estimate.has_estimate());
        assert!(!SavingsEstimate::default().has_estimate());
    }

    #[test]
    fn test_daily_form_readiness() {
        let form: DailyUsageForm =
            serde_json::from_str(r#"{"model": "gpt-4", "currentCost": "25.00"}"#).unwrap();
        assert!(form.is_ready());

        let missing_cost: DailyUsageForm =
            serde_json::from_str(r#"{"model": "gpt-4", "currentCost": ""}"#).unwrap();
        assert!(!missing_cost.is_ready());
    }

    #[test]
    fn test_estimate_serializes_camel_case() {
        let json = serde_json::to_value(SavingsEstimate::default()).unwrap();
        assert!(json.get("potentialSavings").is_some());
        assert!(json.get("optimizedCost").is_some());
        assert!(json.get("savingsPercentage").is_some());
    }
}
