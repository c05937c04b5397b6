//! TOML configuration for taskprune.
//!
//! Configuration is layered: built-in defaults, then the user file
//! (`~/.taskprune/config.toml`), then the project file
//! (`./.taskprune/config.toml`). CLI flags are applied on top by the binary.

pub mod errors;
pub mod loading;
pub mod types;
pub mod validation;

pub use errors::ConfigError;
pub use loading::{load_from_path, load_hierarchy, merge_configs};
pub use types::{AwsConfig, PruneConfig, TaskPruneConfig};
pub use validation::validate_config;
