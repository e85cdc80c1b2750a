use ai_cost_advisor::{
    connections::ServiceKind,
    estimator::variable,
    models::{catalog::DEMO_MODELS, PrimaryService},
};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

/// Print the primary services with their base factors, the connectable
/// services and the demo model price list.
pub fn execute() {
    println!("{}", "Primary services".bold());
    let mut services = Table::new();
    services
        .load_preset(UTF8_FULL)
        .set_header(vec!["ID", "Name", "Base reduction"]);
    for service in PrimaryService::ALL {
        services.add_row(vec![
            service.as_str().to_string(),
            service.display_name().to_string(),
            format!("{:.0}%", variable::service_factor(Some(service)) * 100.0),
        ]);
    }
    println!("{services}");
    println!();

    println!("{}", "Connectable services".bold());
    for kind in ServiceKind::ALL {
        println!("  {} ({})", kind.display_name(), kind.id().dimmed());
    }
    println!();

    println!("{}", "Demo models (per 1K tokens)".bold());
    let mut models = Table::new();
    models
        .load_preset(UTF8_FULL)
        .set_header(vec!["ID", "Name", "Input", "Output"]);
    for model in DEMO_MODELS.iter() {
        models.add_row(vec![
            model.id.to_string(),
            model.name.to_string(),
            format!("${}", model.input),
            format!("${}", model.output),
        ]);
    }
    println!("{models}");
}
