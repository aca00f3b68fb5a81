//! Sources of GPT-2 checkpoints.

use std::path::Path;

use tracing::info;

use crate::bundle::{latest_checkpoint, BundleReader};
use crate::config::ModelSize;
use crate::download::download_gpt2_files;
use crate::error::{Error, Result};
use crate::params::{load_params, Checkpoint, Settings};

/// Produces the settings and parameters for a model size.
#[allow(async_fn_in_trait)]
pub trait CheckpointLoader {
    async fn load(&self, model_size: ModelSize, models_dir: &Path) -> Result<Checkpoint>;
}

/// Downloads the OpenAI release into `models_dir` and decodes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gpt2Loader;

impl Gpt2Loader {
    /// Decode an already downloaded checkpoint directory.
    pub fn load_local(model_dir: &Path) -> Result<Checkpoint> {
        let settings_path = model_dir.join("hparams.json");
        let settings: Settings = serde_json::from_str(&std::fs::read_to_string(&settings_path)?)
            .map_err(|err| {
                Error::Config(format!("{} is not a JSON object: {}", settings_path.display(), err))
            })?;

        let prefix = latest_checkpoint(model_dir)?;
        info!("Reading checkpoint {}", prefix.display());
        let reader = BundleReader::open(&prefix)?;
        let params = load_params(&reader, &settings)?;

        Ok(Checkpoint { settings, params })
    }
}

impl CheckpointLoader for Gpt2Loader {
    async fn load(&self, model_size: ModelSize, models_dir: &Path) -> Result<Checkpoint> {
        let model_dir = download_gpt2_files(model_size, models_dir).await?;
        Gpt2Loader::load_local(&model_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::fixture::{write_checkpoint, FixtureTensor};
    use crate::params::Param;
    use serde_json::json;

    fn write_model_dir(dir: &Path, n_layer: usize) {
        std::fs::write(
            dir.join("hparams.json"),
            json!({"n_vocab": 3, "n_ctx": 2, "n_embd": 2, "n_head": 1, "n_layer": n_layer})
                .to_string(),
        )
        .unwrap();
        write_checkpoint(
            dir,
            &[
                FixtureTensor::f32s(
                    "model/h0/attn/c_attn/w",
                    &[1, 2, 6],
                    &(0..12).map(|v| v as f32).collect::<Vec<_>>(),
                ),
                FixtureTensor::f32s("model/h0/ln_1/g", &[2], &[1.0, 1.0]),
                FixtureTensor::f32s("model/ln_f/b", &[2], &[0.0, 0.0]),
                FixtureTensor::f32s("model/ln_f/g", &[2], &[1.0, 1.0]),
                FixtureTensor::f32s("model/wpe", &[2, 2], &[0.1, 0.2, 0.3, 0.4]),
                FixtureTensor::f32s("model/wte", &[3, 2], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
            ],
        );
    }

    #[test]
    fn test_load_local() {
        let dir = tempfile::tempdir().unwrap();
        write_model_dir(dir.path(), 2);

        let checkpoint = Gpt2Loader::load_local(dir.path()).unwrap();
        assert_eq!(checkpoint.settings["n_layer"], json!(2));
        assert_eq!(
            checkpoint.params.keys().collect::<Vec<_>>(),
            vec!["blocks", "b", "g", "wpe", "wte"]
        );
        assert_eq!(checkpoint.params.get("wte").unwrap().as_array().unwrap().shape(), &[3, 2]);

        let Some(Param::List(blocks)) = checkpoint.params.get("blocks") else {
            panic!("blocks is not a list");
        };
        // n_layer pre-allocates the second, empty block
        assert_eq!(blocks.len(), 2);
        let Param::Map(block) = &blocks[0] else {
            panic!("block is not a dictionary");
        };
        let Some(Param::Map(attn)) = block.get("attn") else {
            panic!("attn missing");
        };
        let Some(Param::Map(c_attn)) = attn.get("c_attn") else {
            panic!("c_attn missing");
        };
        assert_eq!(c_attn.get("w").unwrap().as_array().unwrap().shape(), &[2, 6]);
        assert_eq!(blocks[1], Param::Map(Default::default()));
    }

    #[test]
    fn test_settings_keep_file_order() {
        let dir = tempfile::tempdir().unwrap();
        write_model_dir(dir.path(), 1);
        // Not alphabetical, so a sorted map would reorder it
        std::fs::write(
            dir.path().join("hparams.json"),
            r#"{"n_vocab": 3, "n_ctx": 2, "n_embd": 2, "n_head": 1, "n_layer": 1}"#,
        )
        .unwrap();

        let checkpoint = Gpt2Loader::load_local(dir.path()).unwrap();
        assert_eq!(
            checkpoint.settings.keys().collect::<Vec<_>>(),
            vec!["n_vocab", "n_ctx", "n_embd", "n_head", "n_layer"]
        );
    }

    #[test]
    fn test_load_local_without_hparams() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(Gpt2Loader::load_local(dir.path()), Err(Error::Io(_))));
    }

    #[test]
    fn test_load_local_with_bad_hparams() {
        let dir = tempfile::tempdir().unwrap();
        write_model_dir(dir.path(), 1);
        std::fs::write(dir.path().join("hparams.json"), "[1, 2]").unwrap();
        assert!(matches!(Gpt2Loader::load_local(dir.path()), Err(Error::Config(_))));
    }
}
