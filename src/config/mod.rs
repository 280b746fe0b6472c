//! Configuration APIs for dynseq
//!
//! Tunable behavior is collected into configuration structs implementing the
//! [`Config`] trait, which provides validation, environment initialization,
//! presets and JSON file persistence.
//!
//! # Environment Initialization
//!
//! ```rust
//! use dynseq::config::{Config, GrowthConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads DYNSEQ_GROWTH_* variables, falling back to defaults
//! let config = GrowthConfig::from_env()?;
//! assert!(config.validate().is_ok());
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod growth;


pub use growth::GrowthConfig;

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `DYNSEQ_{COMPONENT}_{FIELD}`,
    /// e.g. `DYNSEQ_GROWTH_THRESHOLD=512`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix("DYNSEQ_")
    }

    /// Initialize configuration from environment variables with a custom prefix.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset favoring throughput over memory usage.
    fn performance_preset() -> Self;

    /// Preset favoring a small memory footprint.
    fn memory_preset() -> Self;

    /// Preset favoring few, predictable reallocations.
    fn realtime_preset() -> Self;

    /// Balanced preset; the defaults.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse an environment variable, falling back to `default` when it is unset
/// or does not parse.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
