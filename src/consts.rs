//! Constants for the snaketoga launcher
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This module holds every fixed name the launcher depends on:
//! the layout of a TOGA installation, the bundled reference preset
//! files, the snakemake invocation pieces and the run-naming scheme.

// defaults
pub const DEFAULT_THREADS: usize = 8;

// workflow engine
pub const SNAKEMAKE: &str = "snakemake";
pub const SNAKEFILE: &str = "workflow/snakefile";
pub const CONDA_FRONTEND: &str = "conda";

// TOGA installation layout [relative to the execution folder]
pub const TOGA_DIR: &str = "TOGA";
pub const SUPPLY_DIR: &str = "supply";
pub const CONFIG_DIR: &str = "config";

// hg38 preset
pub const HG38_ANNOTATION: &str = "hg38.v35.for_toga.bed";
pub const HG38_ISOFORMS: &str = "hg38.v35.for_toga.isoforms.tsv";
pub const HG38_U12: &str = "hg38.U12sites.tsv";

// mm10 preset
pub const MM10_ANNOTATION: &str = "mm10.v25.for_toga.bed";
pub const MM10_ISOFORMS: &str = "mm10.v25.for_toga.isoforms.tsv";
pub const MM10_U12: &str = "mm10.U12sites.tsv";

// run naming
pub const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const TOKEN_LEN: usize = 3;
pub const TIMESTAMP_FMT: &str = "%d_%m_%Y_%H_%M_%S_%f";
