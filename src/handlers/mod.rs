pub mod advisor;
pub mod catalog;
pub mod connections;
pub mod contact;
pub mod dashboard;
pub mod estimate;
pub mod health;
pub mod metrics_handler;

use arc_swap::ArcSwap;
use std::{sync::Arc, time::Duration};

use crate::{
    advisor::AdvisorSessions,
    config::Config,
    connections::ConnectionRegistry,
    profile::{InMemoryProfileStore, ProfileStore},
};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ArcSwap<Config>>,
    pub http_client: reqwest::Client,
    pub connections: Arc<ConnectionRegistry>,
    pub sessions: Arc<AdvisorSessions>,
    pub profiles: Arc<dyn ProfileStore>,
}

impl AppState {
    /// Build state with an in-memory profile store seeded from configuration.
    pub fn new(config: Arc<ArcSwap<Config>>) -> Self {
        let profiles = InMemoryProfileStore::with_profiles(config.load().profiles.clone());
        Self::with_profile_store(config, Arc::new(profiles))
    }

    pub fn with_profile_store(
        config: Arc<ArcSwap<Config>>,
        profiles: Arc<dyn ProfileStore>,
    ) -> Self {
        let idle_timeout = Duration::from_secs(config.load().advisor.session_idle_seconds);
        Self {
            config,
            http_client: reqwest::Client::new(),
            connections: Arc::new(ConnectionRegistry::new()),
            sessions: Arc::new(AdvisorSessions::with_idle_timeout(idle_timeout)),
            profiles,
        }
    }
}
