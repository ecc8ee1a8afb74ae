use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod error;
mod link;
mod model;
mod pipeline;
mod prompt;
mod sanitize;
mod service;
mod title;
mod writer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = cli::Args::parse();

    let cfg = config::Config::load(args.config.as_deref())?;
    config::init_tracing(&cfg.logging, args.log_level.as_deref())?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "ytscript starting");

    match args.command {
        cli::Command::Download(cmd) => pipeline::run_download(cmd, &cfg).await,
        cli::Command::PrintDefaultConfig => {
            let s = cfg.to_toml_pretty()?;
            print!("{s}");
            Ok(())
        }
    }
}
