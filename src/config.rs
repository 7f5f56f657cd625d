//! Figure configuration
//! Title, axis labels, legend and draw order, optionally read from a JSON file.

use crate::data::GroupOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_TITLE: &str = "Ticks per process vs Time";
pub const DEFAULT_X_LABEL: &str = "Global Ticks";
pub const DEFAULT_Y_LABEL: &str = "Process Ticks";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// How the figure is labelled and in which order curves are drawn.
///
/// Every field is optional in the JSON form; missing fields take the
/// defaults below. A `null` title removes the title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub show_legend: bool,
    pub order: GroupOrder,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            title: Some(DEFAULT_TITLE.to_string()),
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            show_legend: true,
            order: GroupOrder::Ascending,
        }
    }
}

impl FigureConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded figure config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config: FigureConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FigureConfig::default());
    }

    #[test]
    fn test_null_title_disables_title() {
        let config: FigureConfig =
            serde_json::from_str(r#"{"title": null, "show_legend": false}"#).unwrap();
        assert_eq!(config.title, None);
        assert!(!config.show_legend);
        assert_eq!(config.x_label, DEFAULT_X_LABEL);
    }

    #[test]
    fn test_order_forms() {
        let config: FigureConfig =
            serde_json::from_str(r#"{"order": {"shuffled": {"seed": 9}}}"#).unwrap();
        assert_eq!(config.order, GroupOrder::Shuffled { seed: Some(9) });

        let config: FigureConfig = serde_json::from_str(r#"{"order": "ascending"}"#).unwrap();
        assert_eq!(config.order, GroupOrder::Ascending);

        let config: FigureConfig =
            serde_json::from_str(r#"{"order": {"shuffled": {}}}"#).unwrap();
        assert_eq!(config.order, GroupOrder::Shuffled { seed: None });
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.json");
        std::fs::write(&path, r#"{"x_label": "Time"}"#).unwrap();

        let config = FigureConfig::from_json_file(&path).unwrap();
        assert_eq!(config.x_label, "Time");
        assert_eq!(config.title.as_deref(), Some(DEFAULT_TITLE));
    }

    #[test]
    fn test_bad_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            FigureConfig::from_json_file(&path),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            FigureConfig::from_json_file(&dir.path().join("nope.json")),
            Err(ConfigError::Io { .. })
        ));
    }
}
