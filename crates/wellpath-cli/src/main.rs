use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Command};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // stdout carries command output, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Command::ParseLab { input } => commands::parse_lab(&input),
        Command::Intake { input } => commands::intake(&input),
        Command::Context { payload, copy } => commands::context(&payload, copy.as_deref()),
        Command::RenderLab { input, out } => commands::render_lab(&input, &out),
        Command::Export {
            payload,
            out,
            copy,
            template,
        } => commands::export(&payload, &out, copy.as_deref(), template.as_deref()),
    }
}
