//! Application configuration
//!
//! Holds the fee schedule, the currency label printed next to fees, and the
//! movies and customers the desk starts with. Every section is optional;
//! missing values fall back to the built-in defaults.
//!
//! Config is read from `--config <PATH>` when given, otherwise from
//! [`paths::global_config`] when that file exists.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::{FeeSchedule, MovieKind};
use crate::core::services::{Catalog, CustomerRegistry, RentalDesk};
use crate::paths;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentalConfig {
    /// Label printed in front of fee amounts
    pub currency: String,
    /// Fee schedule applied on return
    pub fees: FeeSchedule,
    /// Data the desk starts with
    pub seed: SeedConfig,
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            fees: FeeSchedule::STANDARD,
            seed: SeedConfig::default(),
        }
    }
}

fn default_currency() -> String {
    "RM".to_string()
}

/// Movies and customers loaded at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Registered customer names
    pub customers: Vec<String>,
    /// Catalog entries, in order
    pub movies: Vec<SeedMovie>,
}

/// A catalog entry in the seed data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedMovie {
    /// Movie title
    pub title: String,
    /// Rental kind
    pub kind: MovieKind,
}

impl SeedMovie {
    fn new(title: &str, kind: MovieKind) -> Self {
        Self {
            title: title.to_string(),
            kind,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        use MovieKind::{Digital, Physical};

        Self {
            customers: ["Alice", "Bob", "Charlie", "Jack", "Kim"]
                .into_iter()
                .map(String::from)
                .collect(),
            movies: vec![
                SeedMovie::new("Inception", Digital),
                SeedMovie::new("Dark Knight", Physical),
                SeedMovie::new("Interstellar", Digital),
                SeedMovie::new("Tenet", Physical),
                SeedMovie::new("Oppenheimer", Digital),
                SeedMovie::new("Spideman", Physical),
                SeedMovie::new("Avengers Infinity war", Digital),
                SeedMovie::new("Harry Potter and The Half blood Prince", Physical),
                SeedMovie::new("Spiderman No Way Home", Digital),
                SeedMovie::new("Superman 1978", Physical),
                SeedMovie::new("Transformers one", Digital),
                SeedMovie::new("The Social Network", Physical),
            ],
        }
    }
}

impl RentalConfig {
    /// Load config from `path`, or from the user config file, or use defaults
    ///
    /// An explicit `path` must exist. The user config file is only read when
    /// present.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let global = paths::global_config();
        if global.exists() {
            Self::from_file(&global)
        } else {
            log::debug!("no config at {}, using defaults", global.display());
            Ok(Self::default())
        }
    }

    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::debug!(
            "loaded config from {}: {} movie(s), {} customer(s)",
            path.display(),
            config.seed.movies.len(),
            config.seed.customers.len()
        );
        Ok(config)
    }

    /// Parse and validate config from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.fees.validate().map_err(anyhow::Error::msg)?;
        Ok(config)
    }

    /// Build a desk holding the seed movies and customers
    #[must_use]
    pub fn build_desk(&self) -> RentalDesk {
        let catalog: Catalog =
            self.seed.movies.iter().map(|m| (m.title.clone(), m.kind)).collect();
        let customers: CustomerRegistry = self.seed.customers.iter().cloned().collect();
        RentalDesk::with_parts(catalog, customers, self.fees)
    }
}

/// Format an amount with a currency label, e.g. `RM 9.00`
#[must_use]
pub fn format_amount(currency: &str, amount: f64) -> String {
    if currency.is_empty() {
        format!("{amount:.2}")
    } else {
        format!("{currency} {amount:.2}")
    }
}
