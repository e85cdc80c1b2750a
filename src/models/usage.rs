use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-entered amount as it arrives from a form: either a JSON number or
/// the raw text of an input field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// Coerce to a non-negative finite amount. Anything unusable becomes 0.
    pub fn to_amount(&self) -> f64 {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_leading_number(s).unwrap_or(0.0),
        };
        sanitize(value)
    }

    /// True when the field was left empty.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(s) => s.trim().is_empty(),
        }
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Coerce an optional form field, treating a missing field as 0.
pub fn coerce(field: Option<&RawAmount>) -> f64 {
    field.map(RawAmount::to_amount).unwrap_or(0.0)
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Lenient float reader: skips leading whitespace and takes the longest
/// numeric prefix, so "12.5 USD" reads as 12.5 and "abc" reads as nothing.
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// The provider a user spends most on, as picked in the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimaryService {
    #[serde(rename = "openai-gpt4")]
    OpenAiGpt4,
    #[serde(rename = "openai-gpt3")]
    OpenAiGpt3,
    AnthropicClaude,
    GoogleGemini,
    Other,
}

impl PrimaryService {
    pub const ALL: [PrimaryService; 5] = [
        Self::OpenAiGpt4,
        Self::OpenAiGpt3,
        Self::AnthropicClaude,
        Self::GoogleGemini,
        Self::Other,
    ];

    /// Map a form identifier to a service. Unknown identifiers are `Other`.
    pub fn parse(id: &str) -> Self {
        match id.trim() {
            "openai-gpt4" => Self::OpenAiGpt4,
            "openai-gpt3" => Self::OpenAiGpt3,
            "anthropic-claude" => Self::AnthropicClaude,
            "google-gemini" => Self::GoogleGemini,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAiGpt4 => "openai-gpt4",
            Self::OpenAiGpt3 => "openai-gpt3",
            Self::AnthropicClaude => "anthropic-claude",
            Self::GoogleGemini => "google-gemini",
            Self::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAiGpt4 => "OpenAI GPT-4",
            Self::OpenAiGpt3 => "OpenAI GPT-3.5",
            Self::AnthropicClaude => "Anthropic Claude",
            Self::GoogleGemini => "Google Gemini",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for PrimaryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw calculator form as submitted. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageForm {
    #[serde(default)]
    pub monthly_spend: Option<RawAmount>,
    #[serde(default)]
    pub primary_service: Option<String>,
    #[serde(default)]
    pub calls_per_month: Option<RawAmount>,
    #[serde(default, alias = "avgTokens")]
    pub avg_tokens_per_call: Option<RawAmount>,
}

impl UsageForm {
    /// Whether the calculate action is available: spend and service are both filled in.
    pub fn is_ready(&self) -> bool {
        let has_spend = self
            .monthly_spend
            .as_ref()
            .is_some_and(|amount| !amount.is_blank());
        let has_service = self
            .primary_service
            .as_deref()
            .is_some_and(|service| !service.trim().is_empty());
        has_spend && has_service
    }
}

/// Self-reported AI usage after coercion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageProfile {
    pub monthly_spend: f64,
    pub primary_service: Option<PrimaryService>,
    pub calls_per_month: f64,
    /// Collected by the form but not used by any estimate.
    pub avg_tokens_per_call: f64,
}

impl UsageProfile {
    pub fn from_form(form: &UsageForm) -> Self {
        let primary_service = form
            .primary_service
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(PrimaryService::parse);

        Self {
            monthly_spend: coerce(form.monthly_spend.as_ref()),
            primary_service,
            calls_per_month: coerce(form.calls_per_month.as_ref()),
            avg_tokens_per_call: coerce(form.avg_tokens_per_call.as_ref()),
        }
    }
}
