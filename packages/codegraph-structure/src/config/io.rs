//! Configuration I/O
//!
//! YAML schema types. Loading and saving live on
//! [`LoaderConfig`](super::LoaderConfig).

use serde::{Deserialize, Serialize};

use super::loader_config::LoaderConfig;

/// YAML Schema v1
///
/// ```yaml
/// version: 1
/// loader:
///   nest_member_types: true
///   parallel_parse: false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version. Optional here so a missing field gets its own error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// Loader options; omitted section means defaults
    #[serde(default)]
    pub loader: LoaderConfig,
}

/// Versions `from_yaml` accepts
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

pub const CURRENT_VERSION: u32 = 1;
