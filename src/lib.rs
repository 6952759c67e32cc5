//! snaketoga: config generator and launcher for the TOGA annotation pipeline
//! Alejandro Gonzales-Irribarren, 2025
//!
//! TOGA [Tool to infer Orthologs from Genome Alignments] ships as a
//! snakemake workflow with a pile of per-run knobs. This crate collects
//! those knobs from the command line, resolves the reference preset
//! bundled with the installation, writes the run settings as a JSON
//! config and hands it to snakemake, blocking until the workflow exits
//! and propagating its exit code.
//!
//! In short, the launcher is a thin shell around three steps: validate
//! what the user typed, persist a config snakemake can consume and
//! spawn the engine. All genomic heavy lifting stays inside TOGA.

pub mod cli;
pub mod consts;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::cli::{Args, RefMode};
pub use crate::core::{run, RunSettings};
pub use crate::error::LauncherError;
