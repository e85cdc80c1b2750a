use serde::Serialize;

/// Per-1K-token list prices for a model offered in the daily calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPricing {
    pub id: &'static str,
    pub name: &'static str,
    pub input: f64,
    pub output: f64,
}

pub const DEMO_MODELS: [ModelPricing; 4] = [
    ModelPricing {
        id: "gpt-4",
        name: "GPT-4",
        input: 0.03,
        output: 0.06,
    },
    ModelPricing {
        id: "gpt-3.5",
        name: "GPT-3.5 Turbo",
        input: 0.002,
        output: 0.002,
    },
    ModelPricing {
        id: "claude-3",
        name: "Claude-3 Sonnet",
        input: 0.015,
        output: 0.075,
    },
    ModelPricing {
        id: "gemini",
        name: "Gemini Pro",
        input: 0.0007,
        output: 0.0021,
    },
];

pub fn lookup(id: &str) -> Option<&'static ModelPricing> {
    DEMO_MODELS.iter().find(|model| model.id == id)
}

pub const VARIABLE_FACTOR_STRATEGIES: [&str; 4] = [
    "Model selection optimization",
    "Request batching and caching",
    "Token usage optimization",
    "Smart routing between providers",
];

pub const FIXED_REDUCTION_RECOMMENDATIONS: [&str; 4] = [
    "Switch to GPT-3.5 Turbo for routine tasks (90% quality, 93% cost reduction)",
    "Implement request batching to reduce API call frequency",
    "Use prompt compression techniques to reduce token usage",
    "Cache frequently requested responses",
];
