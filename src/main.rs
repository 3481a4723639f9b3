use anyhow::{Context, Result};
use clap::Parser;
use qwrap::cli::Cli;
use qwrap::commands::handle_command;
use qwrap::config::Config;

fn main() -> Result<()> {
	// Load configuration
	let config = Config::load().context("Failed to load configuration")?;
	config.validate().context("Invalid configuration")?;

	let cli = Cli::parse();
	handle_command(&config, cli.command)
}
