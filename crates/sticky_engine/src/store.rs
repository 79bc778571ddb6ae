use std::fs;
use std::io;
use std::path::PathBuf;

use sticky_core::{parse_settings, render_settings, PersistedSettings};
use sticky_logging::{sticky_debug, sticky_error, sticky_info, sticky_warn};
use thiserror::Error;

use crate::persist::{AtomicFileWriter, PersistError};

pub const APP_DIR_NAME: &str = "StickyMiniWeb";
pub const SETTINGS_FILENAME: &str = "settings.txt";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no per-user data directory on this platform")]
    NoDataDir,
    #[error("failed to read settings from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Write(#[from] PersistError),
}

/// Per-user application data directory, e.g. `%APPDATA%\StickyMiniWeb`.
pub fn default_data_dir() -> Result<PathBuf, StoreError> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(StoreError::NoDataDir)
}

/// Flat-file settings persistence. Read once at open, written once at close.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILENAME)
    }

    /// Fail-soft load: any problem yields defaults for whatever could not be read.
    pub fn load(&self) -> PersistedSettings {
        match self.try_load() {
            Ok(Some(settings)) => {
                sticky_info!("Loaded settings from {:?}", self.path());
                settings
            }
            Ok(None) => {
                sticky_debug!("No settings at {:?}; using defaults", self.path());
                PersistedSettings::default()
            }
            Err(err) => {
                sticky_warn!("{}; using defaults", err);
                PersistedSettings::default()
            }
        }
    }

    /// `Ok(None)` when no settings file exists yet.
    pub fn try_load(&self) -> Result<Option<PersistedSettings>, StoreError> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(parse_settings(&text))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    /// Fail-soft save: errors are logged and swallowed.
    pub fn save(&self, settings: &PersistedSettings) {
        match self.try_save(settings) {
            Ok(path) => sticky_info!("Saved settings to {:?}", path),
            Err(err) => sticky_error!("Failed to save settings to {:?}: {}", self.dir, err),
        }
    }

    pub fn try_save(&self, settings: &PersistedSettings) -> Result<PathBuf, StoreError> {
        let writer = AtomicFileWriter::new(self.dir.clone());
        Ok(writer.write(SETTINGS_FILENAME, &render_settings(settings))?)
    }
}
