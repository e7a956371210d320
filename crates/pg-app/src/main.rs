use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod escape;
pub mod generate;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Dispatcher la commande
    match cli.command {
        cli::Command::Gen(ref args) => generate::run(args),
        cli::Command::Escape(ref args) => escape::run(args),
    }
}
