//! Account dashboard and the demo analytics datasets.

use serde::Serialize;

use crate::{
    connections::ServiceConnection,
    estimator::fixed,
    profile::Profile,
};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    pub monthly_spend: f64,
    pub potential_savings: f64,
    pub connected_services: usize,
    pub optimization_score: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GettingStartedStep {
    pub step: u8,
    pub title: &'static str,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDashboard {
    pub user_id: String,
    pub greeting: String,
    pub metrics: KeyMetrics,
    pub connections: Vec<ServiceConnection>,
    pub getting_started: Vec<GettingStartedStep>,
}

impl AccountDashboard {
    /// New accounts have no tracked spend yet, so spend figures stay at zero.
    pub fn build(profile: &Profile, connections: Vec<ServiceConnection>) -> Self {
        let connected = connections.iter().filter(|c| c.connected).count();

        let getting_started = vec![
            GettingStartedStep {
                step: 1,
                title: "Connect your AI services",
                completed: connected > 0,
            },
            GettingStartedStep {
                step: 2,
                title: "Explore the demo dashboard",
                completed: false,
            },
            GettingStartedStep {
                step: 3,
                title: "Calculate your potential savings",
                completed: false,
            },
        ];

        Self {
            user_id: profile.id.clone(),
            greeting: format!("Welcome back, {}!", profile.greeting_name()),
            metrics: KeyMetrics {
                monthly_spend: 0.0,
                potential_savings: 0.0,
                connected_services: connected,
                optimization_score: 0.0,
            },
            connections,
            getting_started,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CostTrendPoint {
    pub month: &'static str,
    pub cost: f64,
    pub savings: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ServiceUsage {
    pub service: &'static str,
    /// Share of calls, in percent
    pub usage: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct OptimizationPoint {
    pub month: &'static str,
    pub current: f64,
    pub optimized: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DemoSummary {
    pub monthly_spend: f64,
    pub total_savings: f64,
    pub api_calls: u64,
    pub cost_per_call: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoDashboard {
    pub summary: DemoSummary,
    pub cost_trend: Vec<CostTrendPoint>,
    pub usage_by_service: Vec<ServiceUsage>,
    pub optimization_trend: Vec<OptimizationPoint>,
}

pub const DEMO_API_CALLS: u64 = 45_231;

pub const COST_TREND: [CostTrendPoint; 6] = [
    CostTrendPoint { month: "Jan", cost: 2400.0, savings: 800.0 },
    CostTrendPoint { month: "Feb", cost: 1398.0, savings: 1200.0 },
    CostTrendPoint { month: "Mar", cost: 9800.0, savings: 600.0 },
    CostTrendPoint { month: "Apr", cost: 3908.0, savings: 1400.0 },
    CostTrendPoint { month: "May", cost: 4800.0, savings: 1800.0 },
    CostTrendPoint { month: "Jun", cost: 3800.0, savings: 2200.0 },
];

pub const USAGE_BY_SERVICE: [ServiceUsage; 4] = [
    ServiceUsage { service: "OpenAI GPT-4", usage: 45.0, cost: 1200.0 },
    ServiceUsage { service: "Anthropic Claude", usage: 30.0, cost: 890.0 },
    ServiceUsage { service: "Google Gemini", usage: 20.0, cost: 560.0 },
    ServiceUsage { service: "Other APIs", usage: 5.0, cost: 150.0 },
];

/// Monthly spend before optimization for the live demo chart.
pub const DEMO_MONTHLY_COSTS: [(&str, f64); 6] = [
    ("Jan", 1200.0),
    ("Feb", 1350.0),
    ("Mar", 1180.0),
    ("Apr", 1420.0),
    ("May", 1380.0),
    ("Jun", 1500.0),
];

pub fn demo_dashboard() -> DemoDashboard {
    let latest = COST_TREND[COST_TREND.len() - 1];

    let optimization_trend = DEMO_MONTHLY_COSTS
        .iter()
        .map(|&(month, current)| OptimizationPoint {
            month,
            current,
            optimized: fixed::optimized(current).round(),
        })
        .collect();

    DemoDashboard {
        summary: DemoSummary {
            monthly_spend: latest.cost,
            total_savings: latest.savings,
            api_calls: DEMO_API_CALLS,
            cost_per_call: latest.cost / DEMO_API_CALLS as f64,
        },
        cost_trend: COST_TREND.to_vec(),
        usage_by_service: USAGE_BY_SERVICE.to_vec(),
        optimization_trend,
    }
}
