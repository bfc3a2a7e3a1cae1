use crate::error::{LinkSourceError, Result};
use crate::filter::{FormatFilter, SUPPORTED_FORMATS};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration shared by all page kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// File extensions treated as downloadable distributions
    #[serde(default = "default_supported_formats")]
    pub supported_formats: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            supported_formats: default_supported_formats(),
        }
    }
}

/// Default value for supported_formats
fn default_supported_formats() -> Vec<String> {
    SUPPORTED_FORMATS.iter().map(|s| s.to_string()).collect()
}

impl SourceConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Extensions must be non-empty and start with a dot
    pub fn validate(&self) -> Result<()> {
        if self.supported_formats.is_empty() {
            return Err(LinkSourceError::Config(
                "supported_formats must not be empty".to_string(),
            ));
        }
        if let Some(bad) = self.supported_formats.iter().find(|f| !f.starts_with('.')) {
            return Err(LinkSourceError::Config(format!(
                "format {bad:?} must start with '.'"
            )));
        }
        Ok(())
    }

    /// Build the format filter described by this configuration
    pub fn format_filter(&self) -> FormatFilter {
        FormatFilter::new(self.supported_formats.iter().cloned())
    }
}
