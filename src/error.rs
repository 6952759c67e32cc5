//! Error handling for the snaketoga launcher
//! Alejandro Gonzales-Irribarren, 2025
//!
//! Every failure the launcher itself can produce is fatal and maps
//! to one of the variants below; a non-zero exit of a successfully
//! started snakemake run is not an error and its code is propagated
//! untouched.

use thiserror::Error;

use std::path::PathBuf;

/// error handling for the launcher
#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("TOGA not found in {}! Please download it!", .0.display())]
    DependencyNotFound(PathBuf),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("Failed to launch {0}")]
    Launch(String),
}
