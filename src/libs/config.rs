//! Configuration for the roster application.
//!
//! Everything that the original tool kept as process-wide constants lives
//! here: the minimum working age, the ordered gender enumeration, the
//! validation patterns, the file locations and the composition of the
//! synthetic dataset. A [`Config`] is built once at startup and then passed
//! by reference; nothing mutates it afterwards.
//!
//! ## Sources
//!
//! 1. Built-in defaults ([`Config::default`])
//! 2. An optional JSON file (`--config <path>`), any subset of keys
//! 3. Command-line overrides (`--db`, `--time-log`, `--seed`)
//!
//! ```json
//! {
//!     "min_age": 18,
//!     "db_file": "staff.sqlite",
//!     "dataset": { "generic_count": 1000, "seed": 42 }
//! }
//! ```

use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Store file name used when nothing else is configured.
pub const DB_FILE_NAME: &str = "list_of_employees.sqlite";

/// Timing log file name used when nothing else is configured.
pub const TIME_LOG_FILE_NAME: &str = "time.txt";

/// Minimum working age, in whole years.
pub const MIN_AGE: u32 = 16;

/// Three lowercase tokens, the first one optionally hyphenated.
pub const FULL_NAME_PATTERN: &str = r"^[a-z]+(?:-[a-z]+)?(?: [a-z]+){2}$";

pub const DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";

/// Maximum stored length of `full_name`, in characters.
pub const FULL_NAME_MAX_LEN: usize = 100;

/// Maximum stored length of `gender`, in characters.
pub const GENDER_MAX_LEN: usize = 10;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum age, in years, a person must have reached to be stored.
    pub min_age: u32,
    /// Accepted genders. Order matters: the filtered query uses position 0.
    pub genders: Vec<String>,
    pub full_name_pattern: String,
    pub date_pattern: String,
    pub db_file: PathBuf,
    pub time_log_file: PathBuf,
    pub dataset: DatasetConfig,
}

/// Composition of the synthetic dataset produced by command `4`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Records with random surnames and genders.
    pub generic_count: usize,
    /// Records appended after the generic block with a forced surname
    /// letter and the first configured gender.
    pub forced_count: usize,
    pub forced_letter: char,
    /// Earliest birth date a generated record can get.
    pub oldest_birth_date: NaiveDate,
    /// Per-record cap on rejected candidates. `None` retries forever.
    pub max_attempts: Option<u64>,
    /// Fixed RNG seed for reproducible datasets.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_age: MIN_AGE,
            genders: vec!["male".to_string(), "female".to_string()],
            full_name_pattern: FULL_NAME_PATTERN.to_string(),
            date_pattern: DATE_PATTERN.to_string(),
            db_file: PathBuf::from(DB_FILE_NAME),
            time_log_file: PathBuf::from(TIME_LOG_FILE_NAME),
            dataset: DatasetConfig::default(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            generic_count: 1_000_000,
            forced_count: 100,
            forced_letter: 'F',
            oldest_birth_date: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap_or_default(),
            max_attempts: None,
            seed: None,
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// Without a path the built-in defaults are returned. With a path, the
    /// JSON file is read and merged over the defaults key by key.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or if the result does not
    /// pass [`Config::check`].
    pub fn read(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            None => Self::default(),
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|_| msg_error_anyhow!(Message::ConfigReadError(path.display().to_string())))?;
                let config: Config =
                    serde_json::from_str(&content).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))?;
                tracing::debug!(path = %path.display(), "configuration file parsed");
                config
            }
        };
        config.check()?;

        Ok(config)
    }

    /// Rejects configurations the rest of the application cannot work with.
    pub fn check(&self) -> Result<()> {
        if self.genders.is_empty() {
            msg_bail_anyhow!(Message::ConfigNoGenders);
        }
        for pattern in [&self.full_name_pattern, &self.date_pattern] {
            if regex::Regex::new(pattern).is_err() {
                msg_bail_anyhow!(Message::ConfigBadPattern(pattern.clone()));
            }
        }

        Ok(())
    }

    /// Gender used by the filtered query: whatever occupies position 0.
    pub fn primary_gender(&self) -> &str {
        self.genders.first().map(String::as_str).unwrap_or_default()
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, db_file: Option<PathBuf>, time_log_file: Option<PathBuf>, seed: Option<u64>) -> Self {
        if let Some(db_file) = db_file {
            self.db_file = db_file;
        }
        if let Some(time_log_file) = time_log_file {
            self.time_log_file = time_log_file;
        }
        if seed.is_some() {
            self.dataset.seed = seed;
        }
        self
    }
}
