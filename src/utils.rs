//! Utility helpers for the snaketoga launcher
//! Alejandro Gonzales-Irribarren, 2025
//!
//! Path validation, path absolutization and the two pieces of the
//! run-naming scheme [random token + timestamp] live here.

use rand::Rng;

use std::path::{Path, PathBuf};

use crate::consts::{CHARSET, TIMESTAMP_FMT, TOKEN_LEN};
use crate::error::LauncherError;

/// argument validation
pub fn validate(arg: &PathBuf) -> Result<(), LauncherError> {
    if !arg.exists() {
        return Err(LauncherError::InvalidInput(format!(
            "ERROR: {:?} does not exist",
            arg
        )));
    }

    if !arg.is_file() {
        return Err(LauncherError::InvalidInput(format!(
            "ERROR: {:?} is not a file",
            arg
        )));
    }

    match std::fs::metadata(arg) {
        Ok(metadata) if metadata.len() == 0 => Err(LauncherError::InvalidInput(format!(
            "ERROR: file {:?} is empty",
            arg
        ))),
        Ok(_) => Ok(()),
        Err(e) => Err(LauncherError::IoError(e)),
    }
}

/// absolutize a path without resolving symlinks or touching the disk
pub fn absolutize(path: &Path) -> Result<PathBuf, LauncherError> {
    Ok(std::path::absolute(path)?)
}

/// sample a short random token to tell runs apart, e.g. "qXk"
pub fn random_token() -> String {
    let mut rng = rand::thread_rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// current local time formatted for config file names
pub fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FMT).to_string()
}

/// folder of the running executable, the default place to look for TOGA
pub fn default_exedir() -> Result<PathBuf, LauncherError> {
    let exe = std::env::current_exe()?;

    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Err(LauncherError::InvalidInput(
            "ERROR: cannot resolve the folder of the running executable".to_string(),
        )),
    }
}
