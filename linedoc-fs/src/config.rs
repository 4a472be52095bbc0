//! Store configuration.
//!
//! Settings come from the environment: `LINEDOC_BASE_DIR` names the directory
//! the store owns, `LINEDOC_CREATE_MODE` (`update` or `replace`) decides
//! whether an existing directory is kept or wiped on startup. Programmatic
//! construction via [`StoreConfig::new`] bypasses the environment entirely.

use std::path::PathBuf;
use std::str::FromStr;

use linedoc_core::error::{StoreError, StoreResult};

/// Environment variable naming the base directory.
pub const ENV_BASE_DIR: &str = "LINEDOC_BASE_DIR";

/// Environment variable selecting the [`CreateMode`].
pub const ENV_CREATE_MODE: &str = "LINEDOC_CREATE_MODE";

/// How the base directory is treated when the store opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CreateMode {
    /// Keep whatever is already on disk (safe for process restarts).
    #[default]
    Update,
    /// Wipe the base directory and start from an empty store.
    Replace,
}

impl FromStr for CreateMode {
    type Err = StoreError;

    fn from_str(s: &str) -> StoreResult<Self> {
        match s {
            "update" => Ok(CreateMode::Update),
            "replace" => Ok(CreateMode::Replace),
            other => Err(StoreError::Validation(format!(
                "Invalid create mode '{other}', expected 'update' or 'replace'."
            ))),
        }
    }
}

/// Configuration for opening an [`FsStore`](crate::FsStore).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory the store exclusively owns for its lifetime.
    pub base_dir: PathBuf,
    /// Startup behavior for an already populated base directory.
    pub create_mode: CreateMode,
}

impl StoreConfig {
    /// Creates a config with the default [`CreateMode::Update`].
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            create_mode: CreateMode::default(),
        }
    }

    /// Sets the create mode.
    pub fn with_create_mode(mut self, mode: CreateMode) -> Self {
        self.create_mode = mode;
        self
    }

    /// Loads the configuration from environment variables.
    ///
    /// `LINEDOC_BASE_DIR` is required; `LINEDOC_CREATE_MODE` defaults to
    /// `update` when unset.
    pub fn from_env() -> StoreResult<Self> {
        let base_dir = std::env::var(ENV_BASE_DIR).map_err(|_| {
            StoreError::Validation(format!("Environment variable {ENV_BASE_DIR} is not set."))
        })?;

        let create_mode = match std::env::var(ENV_CREATE_MODE) {
            Ok(val) => val.parse()?,
            Err(_) => CreateMode::default(),
        };

        Ok(Self {
            base_dir: PathBuf::from(base_dir),
            create_mode,
        })
    }
}
