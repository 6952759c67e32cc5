//! Command-line interface for the snaketoga launcher
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This module defines every flag the launcher accepts and the
//! up-front validation that runs before any file is written. The
//! reference preset selector is a proper enum; path-typed arguments
//! are checked for existence and content, and the three custom-mode
//! files are only demanded when the custom preset is selected.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::path::PathBuf;

use crate::consts::DEFAULT_THREADS;
use crate::error::LauncherError;
use crate::utils::validate;

#[derive(Debug, Parser)]
#[command(
    name = "snaketoga",
    about = "Config generator and launcher for the TOGA annotation pipeline",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[arg(
        short = 'r',
        long = "reference",
        required = false,
        value_enum,
        value_name = "MODE",
        default_value_t = RefMode::Human,
        help = "Reference preset [human -> hg38, mouse -> mm10, custom -> own files]"
    )]
    pub reference: RefMode,

    #[arg(
        long = "reference-genome",
        visible_alias = "rg",
        required = true,
        value_name = "PATH",
        help = "Path to the softmasked reference genome [.fa]"
    )]
    pub reference_genome: PathBuf,

    #[arg(
        short = 'a',
        long = "annotation",
        required = false,
        value_name = "PATH",
        help = "Reference annotation in BED12 format [required with -r custom]"
    )]
    pub annotation: Option<PathBuf>,

    #[arg(
        short = 'i',
        long = "isoforms",
        required = false,
        value_name = "PATH",
        help = "Transcript-to-gene isoform table [required with -r custom]"
    )]
    pub isoforms: Option<PathBuf>,

    #[arg(
        long = "u12",
        required = false,
        value_name = "PATH",
        help = "U12 splice site table [required with -r custom]"
    )]
    pub u12: Option<PathBuf>,

    #[arg(
        short = 'g',
        long = "genome",
        required = true,
        value_name = "PATH",
        help = "Path to the softmasked genome to annotate [.fa]"
    )]
    pub genome: PathBuf,

    #[arg(
        short = 'p',
        long = "prefix",
        required = false,
        value_name = "VALUE",
        help = "Prefix of the run [default: genome file stem + random token]"
    )]
    pub prefix: Option<String>,

    #[arg(
        short = 'o',
        long = "outdir",
        required = true,
        value_name = "PATH",
        help = "Output directory [created if missing]"
    )]
    pub outdir: PathBuf,

    #[arg(
        short = 't',
        long = "threads",
        help = "Number of cores handed to snakemake",
        value_name = "THREADS",
        default_value_t = DEFAULT_THREADS
    )]
    pub threads: usize,

    #[arg(
        short = 'd',
        long = "dry-run",
        help = "Plan the workflow without executing it [snakemake -n]",
        value_name = "FLAG",
        default_value = "false"
    )]
    pub dry_run: bool,

    #[arg(
        short = 'e',
        long = "exedir",
        required = false,
        value_name = "PATH",
        help = "Folder holding the TOGA installation [default: the executable's folder]"
    )]
    pub exedir: Option<PathBuf>,
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }

    /// validate every argument before any config is assembled
    pub fn check(&self) -> Result<(), LauncherError> {
        validate(&self.reference_genome)?;
        validate(&self.genome)?;

        if self.threads == 0 {
            let err = "ERROR: --threads must be greater than 0".to_string();
            return Err(LauncherError::InvalidInput(err));
        }

        if self.reference == RefMode::Custom {
            for (flag, value) in [
                ("--annotation", &self.annotation),
                ("--isoforms", &self.isoforms),
                ("--u12", &self.u12),
            ] {
                match value {
                    Some(path) => validate(path)?,
                    None => {
                        return Err(LauncherError::InvalidInput(format!(
                            "ERROR: {} is required when --reference is custom",
                            flag
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

/// reference species preset selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefMode {
    Human,
    Mouse,
    Custom,
}

impl fmt::Display for RefMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefMode::Human => write!(f, "human"),
            RefMode::Mouse => write!(f, "mouse"),
            RefMode::Custom => write!(f, "custom"),
        }
    }
}
