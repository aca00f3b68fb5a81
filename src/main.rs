use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gpt2_params::config::default_output_path;
use gpt2_params::{export, reshape, ExportConfig, Gpt2Loader, ModelSize};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download a GPT-2 checkpoint and save its parameters as JSON
    Export(ExportArgs),
    /// Print a split/reshape walkthrough of a nine element vector
    ReshapeDemo,
}

#[derive(Args)]
struct ExportArgs {
    #[arg(long, default_value = "124M")]
    model_size: ModelSize,
    #[arg(long, default_value = ".")]
    models_dir: PathBuf,
    /// Defaults to <models-dir>/<model-size>/params-<model-size>.json
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long)]
    include_settings: bool,

    /// Read the whole export configuration from a JSON file instead
    #[arg(long, conflicts_with_all = ["model_size", "models_dir", "output", "include_settings"])]
    config: Option<PathBuf>,
}

impl ExportArgs {
    fn into_config(self) -> Result<ExportConfig> {
        if let Some(path) = self.config {
            return ExportConfig::from_file(&path)
                .with_context(|| format!("reading config {}", path.display()));
        }
        let output_path = self
            .output
            .unwrap_or_else(|| default_output_path(self.model_size, &self.models_dir));
        Ok(ExportConfig {
            model_size: self.model_size,
            models_dir: self.models_dir,
            output_path,
            include_settings: self.include_settings,
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gpt2_params=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Export(args) => {
            let config = args.into_config()?;
            export(&config, &Gpt2Loader, &mut stdout)
                .await
                .with_context(|| format!("exporting GPT-2 {}", config.model_size))?;
        }
        Command::ReshapeDemo => reshape::run_demo(&mut stdout)?,
    }

    Ok(())
}
