use ai_cost_advisor::{
    estimator::{self, fixed},
    models::{
        catalog::{self, FIXED_REDUCTION_RECOMMENDATIONS, VARIABLE_FACTOR_STRATEGIES},
        DailyUsageForm, FixedReductionEstimate, RawAmount, SavingsEstimate, UsageForm,
        UsageProfile,
    },
};
use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use serde_json::json;
use tracing::debug;

fn raw(value: Option<String>) -> Option<RawAmount> {
    value.map(RawAmount::Text)
}

fn dollars(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Run the variable-factor calculator from command-line inputs.
pub fn variable(
    monthly_spend: Option<String>,
    service: Option<String>,
    calls: Option<String>,
    tokens: Option<String>,
    json: bool,
) -> Result<()> {
    let form = UsageForm {
        monthly_spend: raw(monthly_spend),
        primary_service: service,
        calls_per_month: raw(calls),
        avg_tokens_per_call: raw(tokens),
    };

    if !form.is_ready() {
        anyhow::bail!("Both --monthly-spend and --service are required");
    }

    let profile = UsageProfile::from_form(&form);
    debug!(?profile, "Running variable-factor estimate");
    let estimate = estimator::estimate_form(&form);

    if json {
        let body = json!({
            "estimate": estimate,
            "yearlySavings": estimate.yearly_savings(),
            "strategies": VARIABLE_FACTOR_STRATEGIES,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    print_variable(&profile, &estimate);
    Ok(())
}

fn print_variable(profile: &UsageProfile, estimate: &SavingsEstimate) {
    let service = profile
        .primary_service
        .map(|s| s.display_name())
        .unwrap_or("Unknown");

    println!("{}", "Savings Estimate".bold());
    println!("  {}: {}", "Service".cyan(), service);
    println!("  {}: {}", "Monthly Spend".cyan(), dollars(profile.monthly_spend));
    println!("  {}: {}", "Calls / Month".cyan(), profile.calls_per_month);
    println!();

    if !estimate.has_estimate() {
        println!("{}", "No savings to report for these inputs.".yellow());
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        "Potential Monthly Savings".to_string(),
        dollars(estimate.potential_savings),
    ]);
    table.add_row(vec![
        "Optimized Monthly Cost".to_string(),
        dollars(estimate.optimized_cost),
    ]);
    table.add_row(vec![
        "Savings Percentage".to_string(),
        format!("{}%", estimate.savings_percentage),
    ]);
    table.add_row(vec![
        "Annual Savings".to_string(),
        dollars(estimate.yearly_savings()),
    ]);
    println!("{table}");
    println!();

    println!("{}", "Optimization strategies:".bold());
    for strategy in VARIABLE_FACTOR_STRATEGIES {
        println!("  {} {}", "✓".green(), strategy);
    }
}

/// Run the fixed-reduction calculator from command-line inputs.
pub fn fixed(daily_cost: Option<String>, model: Option<String>, json: bool) -> Result<()> {
    let form = DailyUsageForm {
        model: model.or_else(|| Some(catalog::DEMO_MODELS[0].id.to_string())),
        current_cost: raw(daily_cost),
        ..Default::default()
    };

    if !form.is_ready() {
        anyhow::bail!("--daily-cost is required");
    }

    let model_id = form.model.clone().unwrap_or_default();
    let estimate = estimator::estimate_daily_form(&form);

    if json {
        let body = json!({
            "estimate": estimate,
            "model": catalog::lookup(&model_id),
            "recommendations": FIXED_REDUCTION_RECOMMENDATIONS,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    print_fixed(&model_id, &estimate);
    Ok(())
}

fn print_fixed(model_id: &str, estimate: &FixedReductionEstimate) {
    let model_name = catalog::lookup(model_id)
        .map(|m| m.name.to_string())
        .unwrap_or_else(|| model_id.to_string());

    println!("{}", "Cost Optimization Analysis".bold());
    println!("  {}: {}", "Model".cyan(), model_name);
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["", "Daily", "Monthly", "Yearly"]);
    table.add_row(vec![
        "Current".to_string(),
        dollars(estimate.current_daily),
        dollars(estimate.current_daily * fixed::DAYS_PER_MONTH),
        dollars(estimate.current_daily * fixed::DAYS_PER_MONTH * fixed::MONTHS_PER_YEAR),
    ]);
    table.add_row(vec![
        "Optimized".to_string(),
        dollars(estimate.optimized_daily),
        dollars(estimate.optimized_daily * fixed::DAYS_PER_MONTH),
        dollars(estimate.optimized_daily * fixed::DAYS_PER_MONTH * fixed::MONTHS_PER_YEAR),
    ]);
    table.add_row(vec![
        "Savings".to_string(),
        dollars(estimate.daily_savings),
        dollars(estimate.monthly_savings),
        dollars(estimate.yearly_savings),
    ]);
    println!("{table}");
    println!();

    println!("{}", "Recommendations:".bold());
    for recommendation in FIXED_REDUCTION_RECOMMENDATIONS {
        println!("  {} {}", "•".green(), recommendation);
    }
}
