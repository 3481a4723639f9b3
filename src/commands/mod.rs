mod config;
mod date;
mod wrap;

use anyhow::Result;
pub use config::handle_config;
pub use date::handle_date;
pub use wrap::handle_wrap;

use crate::{cli::Commands, config::Config};

/// Dispatches CLI commands to their respective handlers
pub fn handle_command(config: &Config, cmd: Commands) -> Result<()> {
	match cmd {
		Commands::Wrap { text, width, file, separated } => {
			handle_wrap(config, text, width, file, separated)
		}
		Commands::Date { dates, json } => handle_date(&dates, json),
		Commands::Config { show } => handle_config(show),
	}
}
