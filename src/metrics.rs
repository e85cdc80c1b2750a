use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Install the Prometheus recorder and register metric descriptions.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "advisor_estimates_total",
        "Total number of savings estimates computed"
    );
    describe_counter!(
        "advisor_chat_requests_total",
        "Total number of advisor chat requests"
    );
    describe_histogram!(
        "advisor_chat_duration_seconds",
        "Advisor chat round-trip duration in seconds"
    );
    describe_counter!(
        "advisor_connections_total",
        "Service connect and disconnect actions"
    );
    describe_counter!(
        "advisor_contact_submissions_total",
        "Total number of contact form submissions"
    );
    describe_counter!("advisor_errors_total", "Total number of errors");
    describe_gauge!(
        "advisor_info",
        "Service version and build information"
    );

    gauge!("advisor_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a computed estimate
pub fn record_estimate(variant: &str) {
    counter!("advisor_estimates_total", "variant" => variant.to_string()).increment(1);
}

/// Record an advisor chat round-trip
pub fn record_chat(outcome: &str, duration: Duration) {
    counter!("advisor_chat_requests_total", "outcome" => outcome.to_string()).increment(1);
    histogram!("advisor_chat_duration_seconds").record(duration.as_secs_f64());
}

/// Record a connect/disconnect action
pub fn record_connection(service: &str, action: &str) {
    counter!(
        "advisor_connections_total",
        "service" => service.to_string(),
        "action" => action.to_string(),
    )
    .increment(1);
}

pub fn record_contact_submission() {
    counter!("advisor_contact_submissions_total").increment(1);
}

/// Record an error
pub fn record_error(error_type: &str) {
    counter!("advisor_errors_total", "type" => error_type.to_string()).increment(1);
}
