//! Fetching the released checkpoint files over HTTP.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use indicatif::ProgressStyle;
use reqwest::{Client, Response};
use tracing::{info, warn};

use crate::config::ModelSize;
use crate::error::{Error, Result};

pub const BASE_URL: &str = "https://openaipublic.blob.core.windows.net/gpt-2/models";
pub const BACKUP_BASE_URL: &str = "https://f001.backblazeb2.com/file/LLMs-from-scratch/gpt2";

/// Files making up one released checkpoint.
pub const FILENAMES: [&str; 7] = [
    "checkpoint",
    "encoder.json",
    "hparams.json",
    "model.ckpt.data-00000-of-00001",
    "model.ckpt.index",
    "model.ckpt.meta",
    "vocab.bpe",
];

pub fn file_url(base_url: &str, model_size: ModelSize, filename: &str) -> String {
    format!("{}/{}/{}", base_url, model_size, filename)
}

/// Downloads checkpoint files from a primary host with a mirror fallback.
#[derive(Debug, Clone)]
pub struct Downloader {
    pub base_url: String,
    pub backup_url: String,
    client: Client,
}

impl Default for Downloader {
    fn default() -> Self {
        Downloader::new(BASE_URL, BACKUP_BASE_URL)
    }
}

impl Downloader {
    pub fn new(base_url: impl Into<String>, backup_url: impl Into<String>) -> Self {
        Downloader {
            base_url: base_url.into(),
            backup_url: backup_url.into(),
            client: Client::new(),
        }
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    async fn fetch(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response)
    }

    /// GET `filename` from the primary host, falling back to the mirror.
    async fn fetch_with_fallback(&self, model_size: ModelSize, filename: &str) -> Result<Response> {
        let url = file_url(&self.base_url, model_size, filename);
        let primary_err = match self.fetch(&url).await {
            Ok(response) => return Ok(response),
            Err(err) => err,
        };
        warn!("Primary URL {} failed ({}), trying backup", url, primary_err);

        let backup_url = file_url(&self.backup_url, model_size, filename);
        self.fetch(&backup_url)
            .await
            .map_err(|backup_err| Error::Download {
                file: filename.to_string(),
                reason: format!(
                    "{} failed: {}; {} failed: {}",
                    url, primary_err, backup_url, backup_err
                ),
            })
    }

    async fn download_file(
        &self,
        model_size: ModelSize,
        filename: &str,
        model_dir: &Path,
    ) -> Result<()> {
        let mut response = self.fetch_with_fallback(model_size, filename).await?;
        let content_length = response.content_length();

        let path = model_dir.join(filename);
        if is_up_to_date(&path, content_length) {
            info!("File already exists and is up-to-date: {}", path.display());
            return Ok(());
        }

        let mut file = File::create(&path)?;
        let mut downloaded = 0;

        let pb = indicatif::ProgressBar::new(content_length.unwrap_or(0));
        pb.set_style(ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")?
            .progress_chars("#>-"));
        let msg = format!("Fetching {}", filename);
        pb.set_message(msg);

        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk)?;
            downloaded += chunk.len() as u64;
            pb.set_position(downloaded);
        }
        file.flush()?;

        pb.finish_with_message(format!("Downloaded {}", filename));
        Ok(())
    }

    /// Fetch every checkpoint file for `model_size` into
    /// `<models_dir>/<model_size>/`, returning that directory.
    pub async fn download_gpt2_files(
        &self,
        model_size: ModelSize,
        models_dir: &Path,
    ) -> Result<PathBuf> {
        let model_dir = models_dir.join(model_size.as_str());
        fs::create_dir_all(&model_dir)?;

        for filename in FILENAMES {
            self.download_file(model_size, filename, &model_dir).await?;
        }

        info!("All files for {} are in {}", model_size, model_dir.display());
        Ok(model_dir)
    }
}

/// [`Downloader::download_gpt2_files`] against the public hosts.
pub async fn download_gpt2_files(model_size: ModelSize, models_dir: &Path) -> Result<PathBuf> {
    Downloader::default()
        .download_gpt2_files(model_size, models_dir)
        .await
}

/// Whether a local file already holds the whole remote body.
pub fn is_up_to_date(path: &Path, content_length: Option<u64>) -> bool {
    match (fs::metadata(path), content_length) {
        (Ok(meta), Some(len)) => meta.is_file() && meta.len() == len,
        _ => false,
    }
}
