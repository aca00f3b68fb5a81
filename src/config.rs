//! Export configuration

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// GPT-2 checkpoint sizes published by OpenAI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelSize {
    #[serde(rename = "124M")]
    Small,
    #[serde(rename = "355M")]
    Medium,
    #[serde(rename = "774M")]
    Large,
    #[serde(rename = "1558M")]
    Xl,
}

impl ModelSize {
    pub const ALL: [ModelSize; 4] = [
        ModelSize::Small,
        ModelSize::Medium,
        ModelSize::Large,
        ModelSize::Xl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSize::Small => "124M",
            ModelSize::Medium => "355M",
            ModelSize::Large => "774M",
            ModelSize::Xl => "1558M",
        }
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ModelSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| Error::UnknownModelSize(s.to_string()))
    }
}

/// Everything one export run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Which checkpoint to fetch
    pub model_size: ModelSize,

    /// Cache directory; files land in `<models_dir>/<model_size>/`
    pub models_dir: PathBuf,

    /// Destination of the JSON artifact. Its parent directory must exist.
    pub output_path: PathBuf,

    /// Write `{"settings": .., "params": ..}` instead of the bare parameters
    #[serde(default)]
    pub include_settings: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(ModelSize::Small, ".")
    }
}

impl ExportConfig {
    /// Config with the conventional output path
    /// `<models_dir>/<size>/params-<size>.json`.
    pub fn new(model_size: ModelSize, models_dir: impl Into<PathBuf>) -> Self {
        let models_dir = models_dir.into();
        let output_path = default_output_path(model_size, &models_dir);
        Self {
            model_size,
            models_dir,
            output_path,
            include_settings: false,
        }
    }

    /// Load a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: ExportConfig = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Directory holding the downloaded files for this model size.
    pub fn model_dir(&self) -> PathBuf {
        self.models_dir.join(self.model_size.as_str())
    }

    pub fn validate(&self) -> Result<()> {
        if self.models_dir.as_os_str().is_empty() {
            return Err(Error::Config("models_dir must not be empty".into()));
        }
        if self.output_path.file_name().is_none() {
            return Err(Error::Config(format!(
                "output_path {} does not name a file",
                self.output_path.display()
            )));
        }
        if self.output_path.is_dir() {
            return Err(Error::Config(format!(
                "output_path {} is a directory",
                self.output_path.display()
            )));
        }
        Ok(())
    }
}

pub fn default_output_path(model_size: ModelSize, models_dir: &Path) -> PathBuf {
    models_dir.join(model_size.as_str()).join(format!(
        "params-{}.json",
        model_size.as_str().to_lowercase()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_size() {
        assert_eq!("355M".parse::<ModelSize>().unwrap(), ModelSize::Medium);
        assert_eq!("1558M".parse::<ModelSize>().unwrap(), ModelSize::Xl);
        assert!(matches!(
            "7B".parse::<ModelSize>(),
            Err(Error::UnknownModelSize(s)) if s == "7B"
        ));
        assert!("124m".parse::<ModelSize>().is_err());
    }

    #[test]
    fn test_default_output_path() {
        let config = ExportConfig::new(ModelSize::Small, ".");
        assert_eq!(config.output_path, PathBuf::from("./124M/params-124m.json"));

        let config = ExportConfig::new(ModelSize::Medium, "gpt2");
        assert_eq!(config.output_path, PathBuf::from("gpt2/355M/params-355m.json"));
        assert_eq!(config.model_dir(), PathBuf::from("gpt2/355M"));
    }

    #[test]
    fn test_validate() {
        assert!(ExportConfig::default().validate().is_ok());

        let mut config = ExportConfig::default();
        config.models_dir = PathBuf::new();
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = ExportConfig::default();
        config.output_path = PathBuf::from("/");
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_config_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        std::fs::write(
            &path,
            r#"{"model_size": "774M", "models_dir": "gpt2", "output_path": "out.json"}"#,
        )
        .unwrap();

        let config = ExportConfig::from_file(&path).unwrap();
        assert_eq!(config.model_size, ModelSize::Large);
        assert_eq!(config.models_dir, PathBuf::from("gpt2"));
        assert_eq!(config.output_path, PathBuf::from("out.json"));
        assert!(!config.include_settings);
    }
}
