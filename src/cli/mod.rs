pub mod explain;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

use crate::types::Severity;

#[derive(Parser, Debug)]
#[command(name = "quaylint", version, about = "Static analysis for Dockerfiles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lint a Dockerfile
    Check {
        /// Path to the Dockerfile
        dockerfile: PathBuf,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Companion ignore file (defaults to the .dockerignore next to
        /// the Dockerfile)
        #[arg(short, long)]
        ignore_file: Option<PathBuf>,

        /// Minimum severity that causes a non-zero exit code
        #[arg(long, default_value = "critical")]
        fail_on: Severity,
    },
    /// Create a default .quaylintrc.toml
    Init,
    /// Explain what a rule checks and why it matters (omit the code to list all)
    Explain {
        /// Rule code (e.g., DL001, DL005)
        rule: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
