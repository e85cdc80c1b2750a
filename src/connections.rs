//! Per-user connections to AI providers whose spend should be tracked.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{error::AppError, logging::SensitiveValue, metrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    #[serde(rename = "openai")]
    OpenAi,
    Anthropic,
    AwsBedrock,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [Self::OpenAi, Self::Anthropic, Self::AwsBedrock];

    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "openai" => Some(Self::OpenAi),
            "anthropic" => Some(Self::Anthropic),
            "aws-bedrock" => Some(Self::AwsBedrock),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::AwsBedrock => "aws-bedrock",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Anthropic => "Anthropic",
            Self::AwsBedrock => "AWS Bedrock",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Credentials submitted with a connect request. Only validated, never kept.
#[derive(Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Credentials {
    ApiKey {
        api_key: String,
    },
    Aws {
        access_key: String,
        secret_key: String,
        region: String,
    },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey { api_key } => f
                .debug_struct("ApiKey")
                .field("api_key", &SensitiveValue::new(api_key).to_string())
                .finish(),
            Self::Aws { access_key, region, .. } => f
                .debug_struct("Aws")
                .field("access_key", &SensitiveValue::new(access_key).to_string())
                .field("secret_key", &"***")
                .field("region", region)
                .finish(),
        }
    }
}

impl Credentials {
    fn validate_for(&self, kind: ServiceKind) -> Result<(), AppError> {
        match (kind, self) {
            (ServiceKind::OpenAi | ServiceKind::Anthropic, Self::ApiKey { api_key }) => {
                if api_key.trim().is_empty() {
                    return Err(AppError::InvalidCredentials(format!(
                        "{} API key cannot be empty",
                        kind.display_name()
                    )));
                }
                Ok(())
            }
            (
                ServiceKind::AwsBedrock,
                Self::Aws {
                    access_key,
                    secret_key,
                    region,
                },
            ) => {
                if access_key.is_empty() || secret_key.is_empty() || region.is_empty() {
                    return Err(AppError::InvalidCredentials(
                        "AWS access key, secret key and region are all required".to_string(),
                    ));
                }
                Ok(())
            }
            _ => Err(AppError::InvalidCredentials(format!(
                "credential type does not match service {}",
                kind
            ))),
        }
    }

    fn log_hint(&self) -> String {
        match self {
            Self::ApiKey { api_key } => SensitiveValue::new(api_key.trim()).to_string(),
            Self::Aws { access_key, .. } => SensitiveValue::new(access_key).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConnection {
    pub id: String,
    pub display_name: String,
    pub connected: bool,
}

/// Connected services per user, in the order they were connected.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    users: DashMap<String, Vec<ServiceKind>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect a service. Reconnecting an already connected service moves it
    /// to the end of the connection order.
    pub fn connect(
        &self,
        user_id: &str,
        kind: ServiceKind,
        credentials: &Credentials,
    ) -> Result<ServiceConnection, AppError> {
        credentials.validate_for(kind)?;

        let mut services = self.users.entry(user_id.to_string()).or_default();
        services.retain(|s| *s != kind);
        services.push(kind);
        drop(services);

        tracing::info!(
            user_id = %user_id,
            service = %kind,
            credential = %credentials.log_hint(),
            "Service connected"
        );
        metrics::record_connection(kind.id(), "connect");

        Ok(ServiceConnection {
            id: kind.id().to_string(),
            display_name: kind.display_name().to_string(),
            connected: true,
        })
    }

    /// Disconnect a service. Returns whether it was connected.
    pub fn disconnect(&self, user_id: &str, kind: ServiceKind) -> bool {
        let removed = match self.users.get_mut(user_id) {
            Some(mut services) => {
                let before = services.len();
                services.retain(|s| *s != kind);
                services.len() != before
            }
            None => false,
        };

        if removed {
            tracing::info!(user_id = %user_id, service = %kind, "Service disconnected");
            metrics::record_connection(kind.id(), "disconnect");
        }
        removed
    }

    pub fn is_connected(&self, user_id: &str, kind: ServiceKind) -> bool {
        self.users
            .get(user_id)
            .is_some_and(|services| services.contains(&kind))
    }

    /// Connected service ids in connection order.
    pub fn connected(&self, user_id: &str) -> Vec<ServiceKind> {
        self.users
            .get(user_id)
            .map(|services| services.value().clone())
            .unwrap_or_default()
    }

    /// Every known service with its connection flag.
    pub fn list(&self, user_id: &str) -> Vec<ServiceConnection> {
        let connected = self.connected(user_id);
        ServiceKind::ALL
            .iter()
            .map(|kind| ServiceConnection {
                id: kind.id().to_string(),
                display_name: kind.display_name().to_string(),
                connected: connected.contains(kind),
            })
            .collect()
    }
}
