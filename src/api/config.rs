use serde::{Deserialize, Serialize};

use crate::core::OVERRIDE_ONLY_DESCRIPTION;
use crate::error::{DatasetError, DatasetResult};

use super::RefreshOptions;

/// Registry configuration.
///
/// Serializable so hosts can keep it next to their dataset files; every field
/// has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_override_only_description")]
    pub override_only_description: String,
    #[serde(default)]
    pub refresh_options: RefreshOptions,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            override_only_description: default_override_only_description(),
            refresh_options: RefreshOptions::default(),
        }
    }
}

impl DatasetConfig {
    #[must_use]
    pub fn with_override_only_description(mut self, description: impl Into<String>) -> Self {
        self.override_only_description = description.into();
        self
    }

    #[must_use]
    pub fn with_refresh_options(mut self, refresh_options: RefreshOptions) -> Self {
        self.refresh_options = refresh_options;
        self
    }

    pub fn from_json_str(input: &str) -> DatasetResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DatasetError::InvalidData(format!("failed to parse dataset config: {e}")))
    }
}

fn default_override_only_description() -> String {
    OVERRIDE_ONLY_DESCRIPTION.to_owned()
}
