use axum::Json;
use serde::Serialize;

use crate::{
    estimator,
    models::{
        catalog::{self, ModelPricing},
        DailyUsageForm, FixedReductionEstimate, SavingsEstimate, UsageForm,
    },
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    #[serde(flatten)]
    pub estimate: SavingsEstimate,
    pub yearly_savings: f64,
    pub has_estimate: bool,
    pub strategies: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedEstimateResponse {
    #[serde(flatten)]
    pub estimate: FixedReductionEstimate,
    pub model: Option<&'static ModelPricing>,
    pub recommendations: &'static [&'static str],
}

/// Handle POST /v1/estimate (variable-factor calculator)
///
/// Inputs are coerced, never rejected: a missing spend simply yields zeros.
pub async fn handle_estimate(Json(form): Json<UsageForm>) -> Json<EstimateResponse> {
    if !form.is_ready() {
        tracing::debug!("Estimate requested with incomplete form");
    }

    let estimate = estimator::estimate_form(&form);

    tracing::info!(
        service = form.primary_service.as_deref().unwrap_or(""),
        potential_savings = estimate.potential_savings,
        savings_percentage = estimate.savings_percentage,
        "Computed savings estimate"
    );

    Json(EstimateResponse {
        yearly_savings: estimate.yearly_savings(),
        has_estimate: estimate.has_estimate(),
        estimate,
        strategies: &catalog::VARIABLE_FACTOR_STRATEGIES,
    })
}

/// Handle POST /v1/estimate/fixed (daily demo calculator)
pub async fn handle_fixed_estimate(Json(form): Json<DailyUsageForm>) -> Json<FixedEstimateResponse> {
    let estimate = estimator::estimate_daily_form(&form);
    let model = form.model.as_deref().and_then(catalog::lookup);

    tracing::info!(
        model = form.model.as_deref().unwrap_or(""),
        daily_savings = estimate.daily_savings,
        "Computed fixed-reduction estimate"
    );

    Json(FixedEstimateResponse {
        estimate,
        model,
        recommendations: &catalog::FIXED_REDUCTION_RECOMMENDATIONS,
    })
}
