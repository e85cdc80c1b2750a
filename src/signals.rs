use arc_swap::ArcSwap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use crate::{
    config::{self, Config},
    profile::ProfileStore,
};

/// Shutdown signal types
#[derive(Debug, Clone, Copy)]
pub enum ShutdownSignal {
    /// Graceful shutdown (drain connections, clean up)
    Graceful,
}

/// Setup signal handlers for the server
///
/// Returns a broadcast sender for shutdown signals and a join handle for the signal task
///
/// Handles:
/// - SIGTERM/SIGINT: Graceful shutdown
/// - SIGHUP: Configuration reload
#[cfg(unix)]
pub fn setup_signal_handlers(
    config: Arc<ArcSwap<Config>>,
    config_path: PathBuf,
    profiles: Arc<dyn ProfileStore>,
) -> std::io::Result<(
    broadcast::Sender<ShutdownSignal>,
    tokio::task::JoinHandle<()>,
)> {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sighup = signal(SignalKind::hangup())?;

    let handle = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = sigterm.recv() => {
                    info!("SIGTERM received, initiating graceful shutdown");
                    let _ = tx_clone.send(ShutdownSignal::Graceful);
                    break;
                }
                _ = sigint.recv() => {
                    info!("SIGINT received, initiating graceful shutdown");
                    let _ = tx_clone.send(ShutdownSignal::Graceful);
                    break;
                }
                _ = sighup.recv() => {
                    info!("SIGHUP received, reloading configuration");
                    match reload_config(&config, &config_path, profiles.as_ref()).await {
                        Ok(()) => info!("Configuration reloaded successfully"),
                        Err(e) => error!("Failed to reload configuration: {}", e),
                    }
                }
            }
        }
    });

    Ok((shutdown_tx, handle))
}

/// Non-unix platforms only get Ctrl-C shutdown; reload is unavailable.
#[cfg(not(unix))]
pub fn setup_signal_handlers(
    _config: Arc<ArcSwap<Config>>,
    _config_path: PathBuf,
    _profiles: Arc<dyn ProfileStore>,
) -> std::io::Result<(
    broadcast::Sender<ShutdownSignal>,
    tokio::task::JoinHandle<()>,
)> {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, initiating graceful shutdown");
            let _ = tx_clone.send(ShutdownSignal::Graceful);
        }
    });

    Ok((shutdown_tx, handle))
}

/// Re-read the configuration file and swap it in atomically.
///
/// Advisor connection settings apply to the next request and `[[profiles]]`
/// are upserted into the profile store; profiles dropped from the file stay
/// until restart. The listen address, the metrics route and the session idle
/// timeout are fixed when the server starts, so changes to them are only
/// reported.
pub async fn reload_config(
    config: &ArcSwap<Config>,
    path: &std::path::Path,
    profiles: &dyn ProfileStore,
) -> anyhow::Result<()> {
    let new_config = config::load_config(path)?;

    let restart_only = restart_only_changes(&config.load(), &new_config);
    for field in restart_only {
        tracing::warn!(field, "Setting changed but requires a restart; ignored until then");
    }

    let seeded = new_config.profiles.clone();
    config.store(Arc::new(new_config));

    for profile in seeded {
        profiles.upsert(profile).await?;
    }

    Ok(())
}

/// Names of settings that differ between `old` and `new` but are only read at startup.
pub fn restart_only_changes(old: &Config, new: &Config) -> Vec<&'static str> {
    let mut changed = Vec::new();

    if old.server.host != new.server.host || old.server.port != new.server.port {
        changed.push("server address");
    }
    if old.metrics.enabled != new.metrics.enabled {
        changed.push("metrics.enabled");
    }
    if old.metrics.endpoint != new.metrics.endpoint {
        changed.push("metrics.endpoint");
    }
    if old.advisor.session_idle_seconds != new.advisor.session_idle_seconds {
        changed.push("advisor.session_idle_seconds");
    }

    changed
}
