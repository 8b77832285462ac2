//! Loader configuration
//!
//! Two ways in:
//!
//! ```rust,ignore
//! use codegraph_structure::config::LoaderConfig;
//!
//! // Programmatic
//! let config = LoaderConfig::default().nest_member_types(true).parallel_parse(true);
//!
//! // Versioned YAML document
//! let config = LoaderConfig::from_yaml("loader.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod loader_config;

pub use error::{ConfigError, ConfigResult};
pub use io::ConfigExportV1;
pub use loader_config::LoaderConfig;
