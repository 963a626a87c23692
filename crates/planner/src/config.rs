//! # Planner Configuration Module
//!
//! Loads planner settings from environment variables, with defaults for
//! everything.
//!
//! ## Environment Variables
//!
//! - `REHEARSAL_DATA_DIR`: Directory holding the CSV tables (default: ".")
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `REHEARSAL_STRATEGY`: `seeded` or `sweep` (default: "seeded")
//! - `REHEARSAL_MERGE_OVERLAPS`: Merge overlapping slots of one musician before
//!   resolving (default: false)

use std::env;
use std::path::PathBuf;

use eyre::{Result, WrapErr};
use rehearsal_core::ResolveStrategy;
use tracing::Level;

/// Configuration for a planning session
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use rehearsal_planner::config::PlannerConfig;
///
/// fn example() -> Result<()> {
///     let config = PlannerConfig::from_env()?;
///     println!("Reading tables from {}", config.data_dir.display());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Directory holding musiciens.csv, disponibilites.csv and morceaux.csv
    pub data_dir: PathBuf,

    /// Log level for the application
    pub log_level: Level,

    /// Intersection strategy used by the resolver
    pub strategy: ResolveStrategy,

    /// Merge overlapping intervals of a musician before resolving
    pub merge_overlaps: bool,
}

/// Resolver settings carried by a planner session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    pub strategy: ResolveStrategy,
    pub merge_overlaps: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            log_level: Level::INFO,
            strategy: ResolveStrategy::default(),
            merge_overlaps: false,
        }
    }
}

impl PlannerConfig {
    /// Creates a new PlannerConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `REHEARSAL_STRATEGY` names an unknown strategy
    /// - `REHEARSAL_MERGE_OVERLAPS` is not a boolean
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`PlannerConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = lookup("REHEARSAL_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let strategy: ResolveStrategy = match lookup("REHEARSAL_STRATEGY") {
            Some(value) => value
                .parse()
                .wrap_err("Invalid REHEARSAL_STRATEGY value")?,
            None => ResolveStrategy::default(),
        };

        let merge_overlaps = match lookup("REHEARSAL_MERGE_OVERLAPS") {
            Some(value) => parse_bool(&value)
                .ok_or_else(|| eyre::eyre!("Invalid REHEARSAL_MERGE_OVERLAPS value: {value}"))?,
            None => false,
        };

        Ok(Self {
            data_dir,
            log_level,
            strategy,
            merge_overlaps,
        })
    }

    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            strategy: self.strategy,
            merge_overlaps: self.merge_overlaps,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
