use thiserror::Error;

use super::config::ConfigError;
use super::extractor::ExtractionError;
use crate::core::io::dssp::DsspError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Failed to read DSSP output: {0}")]
    Dssp(#[from] DsspError),
}
