//! Loader options

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, CURRENT_VERSION, SUPPORTED_VERSIONS};
use crate::shared::constants::DEFAULT_VOID_MARKER;

/// Options for [`ProgramLoader`](crate::features::loading::ProgramLoader)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Attach nested and local types to their enclosing type instead of the package
    pub nest_member_types: bool,

    /// Parse files on the rayon pool before building the model in file order
    pub parallel_parse: bool,

    /// Accept syntax trees that contain error or missing nodes
    pub allow_syntax_errors: bool,

    /// Return type for which no `return` variable is synthesized
    pub void_marker: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            nest_member_types: false,
            parallel_parse: false,
            allow_syntax_errors: false,
            void_marker: DEFAULT_VOID_MARKER.to_string(),
        }
    }
}

impl LoaderConfig {
    pub fn nest_member_types(mut self, value: bool) -> Self {
        self.nest_member_types = value;
        self
    }

    pub fn parallel_parse(mut self, value: bool) -> Self {
        self.parallel_parse = value;
        self
    }

    pub fn allow_syntax_errors(mut self, value: bool) -> Self {
        self.allow_syntax_errors = value;
        self
    }

    pub fn void_marker(mut self, value: impl Into<String>) -> Self {
        self.void_marker = value.into();
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.void_marker.trim().is_empty() {
            return Err(ConfigError::Validation(
                "loader.void_marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from YAML file (v1 schema)
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from a YAML document (v1 schema)
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        export.loader.validate()?;
        Ok(export.loader)
    }

    /// Export as a v1 YAML document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(CURRENT_VERSION),
            loader: self.clone(),
        };
        Ok(serde_yaml::to_string(&export)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = LoaderConfig::default();
        assert!(!config.nest_member_types);
        assert!(!config.parallel_parse);
        assert!(!config.allow_syntax_errors);
        assert_eq!(config.void_marker, "void");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = LoaderConfig::default()
            .nest_member_types(true)
            .parallel_parse(true)
            .allow_syntax_errors(true)
            .void_marker("Unit");
        assert!(config.nest_member_types);
        assert!(config.parallel_parse);
        assert!(config.allow_syntax_errors);
        assert_eq!(config.void_marker, "Unit");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = LoaderConfig::default().nest_member_types(true);

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("nest_member_types: true"));

        let loaded = LoaderConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_yaml_loading_from_file() {
        let yaml_content = r#"
version: 1
loader:
  parallel_parse: true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = LoaderConfig::from_yaml(temp_file.path()).unwrap();
        assert!(config.parallel_parse);
        // Unspecified fields keep their defaults
        assert_eq!(config.void_marker, "void");
    }

    #[test]
    fn test_yaml_missing_loader_section() {
        let config = LoaderConfig::from_yaml_str("version: 1\n").unwrap();
        assert_eq!(config, LoaderConfig::default());
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = LoaderConfig::from_yaml_str("loader:\n  parallel_parse: true\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = LoaderConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_yaml_unknown_field_rejected() {
        let result = LoaderConfig::from_yaml_str("version: 1\nloader:\n  fast_mode: true\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_empty_void_marker_rejected() {
        let result = LoaderConfig::from_yaml_str("version: 1\nloader:\n  void_marker: \"\"\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = LoaderConfig::from_yaml("/nonexistent/loader.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
