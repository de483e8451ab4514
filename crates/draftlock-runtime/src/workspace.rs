use crate::config::Config;
use crate::controller::LockController;
use crate::ticker::LockTicker;
use crate::Result;
use draftlock_store::DocumentStore;
use draftlock_types::epoch_ms_now;
use std::path::{Path, PathBuf};

/// Facade over one data directory: config + store, with the controller and
/// ticker hanging off it.
pub struct Draftlock {
    data_dir: PathBuf,
    config: Config,
    store: DocumentStore,
}

impl Draftlock {
    /// Open (or initialize) the workspace at `data_dir`.
    ///
    /// A missing config file is written with defaults; a store with no
    /// documents is bootstrapped with a blank active document, so after open
    /// there is always an active document.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let config_path = data_dir.join("config.toml");
        let config = if config_path.exists() {
            Config::load_from(&config_path)?
        } else {
            let config = Config::default();
            config.save_to(&config_path)?;
            config
        };

        let mut store = DocumentStore::open(&data_dir)?;
        store.ensure_first_document(epoch_ms_now(), config.lock_duration_ms)?;

        Ok(Self {
            data_dir,
            config,
            store,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Session-local config override (e.g. `watch --interval-ms`); never
    /// written back to disk.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DocumentStore {
        &mut self.store
    }

    pub fn controller(&mut self) -> LockController<'_> {
        LockController::new(&mut self.store, &self.config)
    }

    /// Hand the store to a dedicated ticker thread for a watch surface.
    /// Consumes the workspace: at most one ticker is ever live against it.
    pub fn into_ticker(self) -> std::io::Result<LockTicker> {
        LockTicker::spawn(self.store, self.config)
    }
}
