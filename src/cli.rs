use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ytscript")]
#[command(about = "Download YouTube video transcripts to clean text files.")]
pub struct Args {
    /// Path to config TOML (defaults to ./config.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download transcripts for one or more video links
    Download(DownloadCmd),
    /// Print the effective default config as TOML and exit
    PrintDefaultConfig,
}

#[derive(Debug, Parser)]
pub struct DownloadCmd {
    /// Video links; prompts for a comma-separated list when omitted
    pub links: Vec<String>,

    /// Caption language code for every video (skips the per-video prompt)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output folder (overrides the configured one)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
