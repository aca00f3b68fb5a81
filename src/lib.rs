//! Download OpenAI's GPT-2 checkpoints and re-serialize their parameters as
//! JSON.

pub mod bundle;
pub mod config;
pub mod crc;
pub mod download;
pub mod error;
pub mod export;
pub mod loader;
pub mod params;
pub mod protomodels;
pub mod reshape;
pub mod table;
pub mod utils;

pub use config::{ExportConfig, ModelSize};
pub use error::{Error, Result};
pub use export::export;
pub use loader::{CheckpointLoader, Gpt2Loader};
pub use params::{Checkpoint, Param, ParamDict, Settings};
