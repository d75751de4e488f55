//! Configuration file watcher for hot reload.
//!
//! # Design Decisions
//! - The parent directory is watched, not the file, so saves that rename a
//!   new file over the config keep triggering reloads
//! - Events are filtered down to the config file name
//! - Once the receiving side is dropped, further changes are ignored

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::DispatchConfig;

/// Watches one config file and publishes every valid new version.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<DispatchConfig>,
}

impl ConfigWatcher {
    /// Create a watcher for `path` and the receiver its reloads arrive on.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<DispatchConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let watcher = Self {
            path: path.to_path_buf(),
            update_tx,
        };
        (watcher, update_rx)
    }

    /// Start watching on notify's background thread.
    ///
    /// The returned watcher must be kept alive for updates to flow.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let file_name = self
            .path
            .file_name()
            .map(OsStr::to_os_string)
            .ok_or_else(|| {
                notify::Error::generic("config path has no file name").add_path(self.path.clone())
            })?;
        let directory = watched_directory(&self.path);

        let tx = self.update_tx;
        let path = self.path.clone();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if tx.is_closed() || !is_config_event(&event, &file_name) {
                        return;
                    }
                    reload(&path, &tx);
                }
                Err(e) => tracing::error!(error = %e, "Config watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&directory, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, directory = ?directory, "Config watcher started");
        Ok(watcher)
    }
}

fn watched_directory(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Whether `event` created or changed the file called `file_name`.
fn is_config_event(event: &Event, file_name: &OsString) -> bool {
    (event.kind.is_modify() || event.kind.is_create())
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name.as_os_str()))
}

fn reload(path: &Path, tx: &mpsc::UnboundedSender<DispatchConfig>) {
    tracing::info!(path = ?path, "Config file change detected, reloading");
    match load_config(path) {
        Ok(config) => {
            if tx.send(config).is_err() {
                tracing::warn!("Config receiver dropped; ignoring further changes");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to reload config. Keeping current configuration.");
        }
    }
}
