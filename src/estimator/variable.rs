//! Variable-factor savings estimate used by the full cost calculator page.
//!
//! The estimate starts from a 25% base reduction, swaps in a provider-specific
//! rate when the primary service is one of the big three, and adds volume
//! bonuses for high call counts. Both volume bonuses apply above 100k calls.

use crate::models::{PrimaryService, SavingsEstimate, UsageProfile};

pub const BASE_FACTOR: f64 = 0.25;
pub const HIGH_VOLUME_CALLS: f64 = 100_000.0;
pub const HIGH_VOLUME_BONUS: f64 = 0.10;
pub const MEDIUM_VOLUME_CALLS: f64 = 50_000.0;
pub const MEDIUM_VOLUME_BONUS: f64 = 0.05;

/// Reduction rate for a declared primary service, before volume bonuses.
pub fn service_factor(service: Option<PrimaryService>) -> f64 {
    match service {
        Some(PrimaryService::OpenAiGpt4) => 0.35,
        Some(PrimaryService::AnthropicClaude) => 0.30,
        Some(PrimaryService::GoogleGemini) => 0.40,
        Some(PrimaryService::OpenAiGpt3) | Some(PrimaryService::Other) | None => BASE_FACTOR,
    }
}

/// Full reduction rate including the stacked volume bonuses.
pub fn optimization_factor(service: Option<PrimaryService>, calls_per_month: f64) -> f64 {
    let mut factor = service_factor(service);

    if calls_per_month > HIGH_VOLUME_CALLS {
        factor += HIGH_VOLUME_BONUS;
    }
    if calls_per_month > MEDIUM_VOLUME_CALLS {
        factor += MEDIUM_VOLUME_BONUS;
    }

    factor
}

/// Compute the monthly estimate. Never fails; a zero spend yields all zeros.
pub fn estimate(profile: &UsageProfile) -> SavingsEstimate {
    let spend = profile.monthly_spend;
    let factor = optimization_factor(profile.primary_service, profile.calls_per_month);

    let raw_savings = spend * factor;
    let potential_savings = raw_savings.round();
    let optimized_cost = spend.round() - potential_savings;

    let savings_percentage = if spend > 0.0 {
        (raw_savings / spend * 100.0).round()
    } else {
        0.0
    };

    tracing::debug!(
        monthly_spend = spend,
        service = ?profile.primary_service,
        calls_per_month = profile.calls_per_month,
        factor = factor,
        potential_savings = potential_savings,
        "Computed variable-factor estimate"
    );

    SavingsEstimate {
        potential_savings,
        optimized_cost,
        savings_percentage,
    }
}
