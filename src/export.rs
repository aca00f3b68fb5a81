//! Writes a checkpoint's parameters to a JSON file.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;
use tracing::info;

use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::loader::CheckpointLoader;
use crate::params::{Checkpoint, ParamDict, Settings};

/// Output layout when settings are persisted too.
#[derive(Serialize)]
struct WithSettings<'a> {
    settings: &'a Settings,
    params: &'a ParamDict,
}

/// Print the summary of `checkpoint` to `out`.
pub fn print_summary(checkpoint: &Checkpoint, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Settings: {}",
        serde_json::to_string(&checkpoint.settings)?
    )?;
    writeln!(out, "Parameter dictionary keys: {}", checkpoint.params)?;

    let wte = checkpoint
        .params
        .get("wte")
        .ok_or_else(|| Error::MissingTensor("wte".into()))?
        .as_array()
        .ok_or_else(|| Error::NotAnArray("wte".into()))?;
    writeln!(out, "{}", wte)?;
    writeln!(
        out,
        "Token embedding weight tensor dimensions: {:?}",
        wte.shape()
    )?;
    Ok(())
}

/// Serialize `checkpoint` as configured. The file is created or truncated;
/// its parent directory is never created.
pub fn write_json(checkpoint: &Checkpoint, config: &ExportConfig) -> Result<()> {
    let file = File::create(&config.output_path)?;
    let mut writer = BufWriter::new(file);
    if config.include_settings {
        let doc = WithSettings {
            settings: &checkpoint.settings,
            params: &checkpoint.params,
        };
        serde_json::to_writer(&mut writer, &doc)?;
    } else {
        serde_json::to_writer(&mut writer, &checkpoint.params)?;
    }
    writer.flush()?;
    Ok(())
}

/// Load, summarize and save one checkpoint.
pub async fn export<L: CheckpointLoader>(
    config: &ExportConfig,
    loader: &L,
    out: &mut impl Write,
) -> Result<()> {
    config.validate()?;
    info!(
        "Exporting {} from {} to {}",
        config.model_size,
        config.models_dir.display(),
        config.output_path.display()
    );

    let checkpoint = loader.load(config.model_size, &config.models_dir).await?;
    print_summary(&checkpoint, out)?;
    write_json(&checkpoint, config)?;

    writeln!(out, "Parameters saved to {}", config.output_path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelSize;
    use crate::params::Param;
    use ndarray::array;
    use serde_json::{json, Value};
    use std::path::Path;

    struct StubLoader(Checkpoint);

    impl CheckpointLoader for StubLoader {
        async fn load(&self, _: ModelSize, _: &Path) -> Result<Checkpoint> {
            Ok(self.0.clone())
        }
    }

    fn stub() -> StubLoader {
        let mut settings = Settings::new();
        settings.insert("n_layer".into(), json!(12));
        let mut params = ParamDict::new();
        params.insert("wte", array![[1.0f32, 2.0], [3.0, 4.0]].into_dyn());
        StubLoader(Checkpoint { settings, params })
    }

    fn config_in(dir: &Path) -> ExportConfig {
        let mut config = ExportConfig::new(ModelSize::Small, dir);
        config.output_path = dir.join("params-124m.json");
        config
    }

    #[tokio::test]
    async fn test_export_writes_params() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut out = Vec::new();

        export(&config, &stub(), &mut out).await.unwrap();

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&config.output_path).unwrap()).unwrap();
        assert_eq!(written, json!({"wte": [[1.0, 2.0], [3.0, 4.0]]}));

        let printed = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines[0], r#"Settings: {"n_layer":12}"#);
        assert_eq!(lines[1], r#"Parameter dictionary keys: ["wte"]"#);
        assert!(printed.contains("Token embedding weight tensor dimensions: [2, 2]"));
        assert_eq!(
            lines.last().unwrap(),
            &format!("Parameters saved to {}", config.output_path.display())
        );
    }

    #[tokio::test]
    async fn test_export_with_settings() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.include_settings = true;

        export(&config, &stub(), &mut std::io::sink()).await.unwrap();

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&config.output_path).unwrap()).unwrap();
        assert_eq!(
            written,
            json!({
                "settings": {"n_layer": 12},
                "params": {"wte": [[1.0, 2.0], [3.0, 4.0]]}
            })
        );
    }

    #[tokio::test]
    async fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(&config.output_path, "x".repeat(4096)).unwrap();

        export(&config, &stub(), &mut std::io::sink()).await.unwrap();

        let written = std::fs::read_to_string(&config.output_path).unwrap();
        assert_eq!(written, r#"{"wte":[[1.0,2.0],[3.0,4.0]]}"#);
    }

    #[tokio::test]
    async fn test_missing_parent_directory_fails_before_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.output_path = dir.path().join("missing").join("params.json");
        let mut out = Vec::new();

        let err = export(&config, &stub(), &mut out).await.unwrap_err();

        assert!(matches!(err, Error::Io(_)));
        assert!(!dir.path().join("missing").exists());
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Settings:"));
        assert!(!printed.contains("Parameters saved to"));
    }

    #[tokio::test]
    async fn test_missing_wte_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut loader = stub();
        loader.0.params = ParamDict::new();
        loader.0.params.insert("wpe", json!(1));

        let err = export(&config, &loader, &mut std::io::sink()).await.unwrap_err();

        assert!(matches!(err, Error::MissingTensor(name) if name == "wte"));
        assert!(!config.output_path.exists());
    }

    #[tokio::test]
    async fn test_non_finite_value_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut loader = stub();
        loader
            .0
            .params
            .insert("wpe", Param::Array(array![f32::NAN].into_dyn()));
        let mut out = Vec::new();

        let err = export(&config, &loader, &mut out).await.unwrap_err();

        assert!(matches!(err, Error::Json(_)));
        assert!(!String::from_utf8(out).unwrap().contains("Parameters saved to"));
    }
}
