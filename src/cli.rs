//! Command-line interface for qwrap.
//!
//! Provides CLI commands for wrapping text and checking dates:
//! - wrap: Wrap text to a maximum line width, hyphenating overlong words
//! - date: Check date strings against the DD/MM/YYYY format
//! - config: Generate or show the configuration file

use clap::{Parser, Subcommand};

/// Main CLI structure parsed by clap.
#[derive(Parser)]
#[command(name = "qwrap")]
#[command(about = "A quick text wrapping and date checking tool", long_about = None)]
pub struct Cli {
	#[command(subcommand)]
	pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
	/// Wrap text to a maximum line width
	Wrap {
		/// Text to wrap (reads stdin when omitted)
		text: Option<String>,
		/// Maximum characters per line (defaults to wrap.line_length)
		#[arg(short, long)]
		width: Option<usize>,
		/// Read input from a file instead of the argument or stdin
		#[arg(short, long)]
		file: Option<String>,
		/// Frame the output with separator lines
		#[arg(short, long)]
		separated: bool,
	},
	/// Check date strings for DD/MM/YYYY validity
	Date {
		/// Date strings to check (reads stdin lines when omitted)
		dates: Vec<String>,
		/// Print results as JSON (good for piping to jq)
		#[arg(short, long)]
		json: bool,
	},
	/// Generate or show configuration
	Config {
		/// Show current configuration instead of generating
		#[arg(short, long)]
		show: bool,
	},
}
