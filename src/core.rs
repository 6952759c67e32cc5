//! Core module of the snaketoga launcher
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This module owns the whole run: it locates the TOGA installation,
//! resolves the reference preset, derives a run prefix, persists the
//! run settings as a JSON config and finally hands everything to
//! snakemake, blocking until the workflow exits.
//!
//! The launcher itself never touches genomic data; every path it
//! collects is validated and forwarded untouched.

use serde::{Deserialize, Serialize};

use std::path::{Path, PathBuf};

use crate::cli::{Args, RefMode};
use crate::consts::*;
use crate::error::LauncherError;
use crate::utils::{absolutize, default_exedir, random_token, timestamp, validate};

/// Full description of a single TOGA run.
///
/// Assembled once from the CLI, serialized once into the config file
/// that snakemake consumes and never mutated afterwards. Field order
/// is the order the keys appear in the written JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSettings {
    pub reference_genome: PathBuf,
    pub annotation: PathBuf,
    pub u12: PathBuf,
    pub isoforms: PathBuf,
    pub genome: PathBuf,
    pub outdir: PathBuf,
    pub threads: usize,
    pub prefix: String,
    pub mode: RefMode,
    pub execution_folder: PathBuf,
    pub dry: bool,
    pub config_file: PathBuf,
}

/// Run the launcher end to end and return snakemake's exit code.
///
/// # Arguments
///
/// * `args` - validated command-line arguments
///
/// # Example
///
/// ```rust, no_run
/// use snaketoga::cli::Args;
/// use snaketoga::core::run;
///
/// let args = Args::from(std::env::args().skip(1).collect());
/// let code = run(&args).unwrap();
/// ```
pub fn run(args: &Args) -> Result<i32, LauncherError> {
    let exedir = match &args.exedir {
        Some(dir) => absolutize(dir)?,
        None => default_exedir()?,
    };

    log::info!(
        "INFO: using TOGA installation at {}",
        exedir.join(TOGA_DIR).display()
    );

    let settings = assemble(args, &exedir)?;
    make_config(&settings)?;

    launch(&settings)
}

/// Build the run settings from the CLI arguments.
///
/// Resolves the reference preset against the TOGA installation under
/// `exedir`, derives the run prefix, absolutizes every path and
/// creates the output and config directories. The config file itself
/// is not written here.
pub fn assemble(args: &Args, exedir: &Path) -> Result<RunSettings, LauncherError> {
    let toga = locate_toga(exedir)?;
    let (annotation, isoforms, u12) = resolve_reference(args.reference, &toga, args)?;

    let prefix = derive_prefix(&args.genome, args.prefix.as_deref());

    let outdir = absolutize(&args.outdir)?;
    std::fs::create_dir_all(&outdir)?;

    let config_dir = exedir.join(CONFIG_DIR);
    std::fs::create_dir_all(&config_dir)?;
    let config_file = config_dir.join(config_file_name(&prefix));

    Ok(RunSettings {
        reference_genome: absolutize(&args.reference_genome)?,
        annotation: absolutize(&annotation)?,
        u12: absolutize(&u12)?,
        isoforms: absolutize(&isoforms)?,
        genome: absolutize(&args.genome)?,
        outdir,
        threads: args.threads,
        prefix,
        mode: args.reference,
        execution_folder: exedir.to_path_buf(),
        dry: args.dry_run,
        config_file,
    })
}

/// check that the TOGA directory exists inside the execution folder
pub fn locate_toga(exedir: &Path) -> Result<PathBuf, LauncherError> {
    let toga = exedir.join(TOGA_DIR);

    if !toga.is_dir() {
        return Err(LauncherError::DependencyNotFound(toga));
    }

    Ok(toga)
}

/// Resolve the annotation/isoforms/U12 trio for the selected preset.
///
/// Preset modes always point at the files bundled with the TOGA
/// installation and ignore any user-supplied trio; custom mode takes
/// the CLI values. Every resolved file is validated so a gutted
/// installation fails here instead of minutes into the workflow.
pub fn resolve_reference(
    mode: RefMode,
    toga: &Path,
    args: &Args,
) -> Result<(PathBuf, PathBuf, PathBuf), LauncherError> {
    let supply = toga.join(SUPPLY_DIR);

    let (annotation, isoforms, u12) = match mode {
        RefMode::Human => (
            supply.join(HG38_ANNOTATION),
            supply.join(HG38_ISOFORMS),
            supply.join(HG38_U12),
        ),
        RefMode::Mouse => (
            supply.join(MM10_ANNOTATION),
            supply.join(MM10_ISOFORMS),
            supply.join(MM10_U12),
        ),
        RefMode::Custom => {
            let get = |flag: &str, value: &Option<PathBuf>| {
                value.clone().ok_or_else(|| {
                    LauncherError::InvalidInput(format!(
                        "ERROR: {} is required when --reference is custom",
                        flag
                    ))
                })
            };

            (
                get("--annotation", &args.annotation)?,
                get("--isoforms", &args.isoforms)?,
                get("--u12", &args.u12)?,
            )
        }
    };

    validate(&annotation)?;
    validate(&isoforms)?;
    validate(&u12)?;

    Ok((annotation, isoforms, u12))
}

/// derive the run prefix: non-empty user choice verbatim, else genome stem + token
pub fn derive_prefix(genome: &Path, prefix: Option<&str>) -> String {
    match prefix {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => {
            let stem = genome
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "run".to_string());

            format!("{}_{}", stem, random_token())
        }
    }
}

/// name the config file after the prefix and a full-precision timestamp
pub fn config_file_name(prefix: &str) -> String {
    format!("config_{}_{}.json", prefix, timestamp())
}

/// serialize the settings into their config file
pub fn make_config(settings: &RunSettings) -> Result<(), LauncherError> {
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(&settings.config_file, json)?;

    log::info!(
        "SUCCESS: config created at {}",
        settings.config_file.display()
    );

    Ok(())
}

/// Build the snakemake argument list for a run.
///
/// Pure function so the exact token sequence stays testable; `-n` is
/// appended only for dry runs.
pub fn build_command(settings: &RunSettings) -> Vec<String> {
    let exedir = &settings.execution_folder;

    let mut command = vec![
        "--snakefile".to_string(),
        exedir.join(SNAKEFILE).to_string_lossy().to_string(),
        "--configfile".to_string(),
        settings.config_file.to_string_lossy().to_string(),
        "--cores".to_string(),
        settings.threads.to_string(),
        "--use-conda".to_string(),
        "--conda-frontend".to_string(),
        CONDA_FRONTEND.to_string(),
        "--conda-prefix".to_string(),
        exedir.join(CONFIG_DIR).to_string_lossy().to_string(),
    ];

    if settings.dry {
        command.push("-n".to_string());
    }

    command
}

/// launch snakemake and block until the workflow exits
pub fn launch(settings: &RunSettings) -> Result<i32, LauncherError> {
    spawn_engine(SNAKEMAKE, settings)
}

fn spawn_engine(program: &str, settings: &RunSettings) -> Result<i32, LauncherError> {
    let command = build_command(settings);

    log::info!("INFO: {} {}", program, command.join(" "));

    let status = std::process::Command::new(program)
        .args(&command)
        .status()
        .map_err(|e| LauncherError::Launch(format!("{}: {}", program, e)))?;

    Ok(status.code().unwrap_or(1))
}
