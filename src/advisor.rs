//! Client and session state for the hosted "AI advisor" chat agent.
//!
//! Each session allows a single outstanding message. Failures are never
//! retried: they are logged and answered with a fixed fallback text.

use dashmap::DashMap;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::{config::AdvisorConfig, error::AppError, metrics};

/// Sessions untouched for this long are dropped on the next `ask`.
pub const DEFAULT_SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

pub const FALLBACK_MESSAGE: &str =
    "Sorry, I'm having trouble connecting right now. Please try again later.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorRequest {
    pub user_id: String,
    pub agent_id: String,
    pub session_id: String,
    pub message: String,
}

/// The agent answers with either `message` or `response`.
#[derive(Debug, Deserialize)]
struct AdvisorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    response: Option<String>,
}

impl AdvisorResponse {
    fn into_text(self) -> Option<String> {
        self.message.or(self.response)
    }
}

#[derive(Debug, Clone)]
pub struct AdvisorClient {
    http: Client,
    endpoint: String,
    agent_id: String,
    api_key: String,
    timeout: Duration,
}

impl AdvisorClient {
    /// Build a client from configuration. Fails when the advisor is disabled.
    pub fn from_config(http: Client, config: &AdvisorConfig) -> Result<Self, AppError> {
        if !config.enabled {
            return Err(AppError::AdvisorDisabled);
        }

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            agent_id: config.agent_id.clone(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        })
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    pub async fn send(&self, request: &AdvisorRequest) -> Result<String, AppError> {
        let mut builder = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(request);

        if !self.api_key.is_empty() {
            builder = builder.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::UpstreamError {
                status,
                message: error_text,
            });
        }

        let body: AdvisorResponse = response.json().await?;
        body.into_text().ok_or_else(|| AppError::UpstreamError {
            status: reqwest::StatusCode::BAD_GATEWAY,
            message: "advisor response contained neither message nor response".to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub session_id: String,
    pub reply: String,
    /// True when the reply is the fixed fallback text
    pub fallback: bool,
}

#[derive(Debug)]
struct SessionState {
    user_id: String,
    history: Vec<ChatMessage>,
    in_flight: bool,
    last_active: Instant,
}

/// Chat sessions keyed by session id. Idle sessions expire.
#[derive(Debug)]
pub struct AdvisorSessions {
    sessions: DashMap<String, SessionState>,
    idle_timeout: Duration,
}

impl Default for AdvisorSessions {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_SESSION_IDLE_TIMEOUT)
    }
}

/// Clears the in-flight flag even if the request future is dropped.
struct InFlightGuard<'a> {
    sessions: &'a DashMap<String, SessionState>,
    session_id: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if let Some(mut state) = self.sessions.get_mut(&self.session_id) {
            state.in_flight = false;
            state.last_active = Instant::now();
        }
    }
}

impl AdvisorSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout,
        }
    }

    /// Drop sessions idle for longer than the timeout. Sessions with a
    /// message in flight are kept. Returns how many were removed.
    pub fn prune_idle(&self) -> usize {
        let before = self.sessions.len();
        let timeout = self.idle_timeout;
        self.sessions
            .retain(|_, state| state.in_flight || state.last_active.elapsed() < timeout);
        let removed = before.saturating_sub(self.sessions.len());

        if removed > 0 {
            tracing::debug!(removed, remaining = self.sessions.len(), "Pruned idle advisor sessions");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Send one user message and record both sides of the exchange.
    pub async fn ask(
        &self,
        client: &AdvisorClient,
        user_id: &str,
        session_id: Option<String>,
        message: &str,
    ) -> Result<ChatReply, AppError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::InvalidInput("message cannot be empty".to_string()));
        }

        self.prune_idle();

        let session_id = session_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        {
            let mut state = self
                .sessions
                .entry(session_id.clone())
                .or_insert_with(|| SessionState {
                    user_id: user_id.to_string(),
                    history: Vec::new(),
                    in_flight: false,
                    last_active: Instant::now(),
                });

            if state.user_id != user_id {
                return Err(AppError::NotFound(format!("session {}", session_id)));
            }
            if state.in_flight {
                return Err(AppError::AdvisorBusy(format!(
                    "a message is already in flight for session {}",
                    session_id
                )));
            }

            state.in_flight = true;
            state.last_active = Instant::now();
            state.history.push(ChatMessage {
                role: ChatRole::User,
                content: message.to_string(),
            });
        }
        let _guard = InFlightGuard {
            sessions: &self.sessions,
            session_id: session_id.clone(),
        };

        let request = AdvisorRequest {
            user_id: user_id.to_string(),
            agent_id: client.agent_id().to_string(),
            session_id: session_id.clone(),
            message: message.to_string(),
        };

        let start = Instant::now();
        let (reply, fallback) = match client.send(&request).await {
            Ok(text) => {
                metrics::record_chat("success", start.elapsed());
                tracing::info!(
                    session_id = %session_id,
                    duration_ms = start.elapsed().as_millis(),
                    "Advisor replied"
                );
                (text, false)
            }
            Err(e) => {
                metrics::record_chat("failure", start.elapsed());
                tracing::error!(
                    session_id = %session_id,
                    error = %e,
                    "Advisor request failed"
                );
                (FALLBACK_MESSAGE.to_string(), true)
            }
        };

        if let Some(mut state) = self.sessions.get_mut(&session_id) {
            state.history.push(ChatMessage {
                role: ChatRole::Assistant,
                content: reply.clone(),
            });
        }

        Ok(ChatReply {
            session_id,
            reply,
            fallback,
        })
    }

    pub fn history(&self, session_id: &str) -> Option<Vec<ChatMessage>> {
        self.sessions
            .get(session_id)
            .map(|state| state.value().history.clone())
    }

    pub fn is_in_flight(&self, session_id: &str) -> bool {
        self.sessions
            .get(session_id)
            .is_some_and(|state| state.in_flight)
    }
}
