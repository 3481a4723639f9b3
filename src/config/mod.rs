mod output;
mod wrap;

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
pub use output::OutputConfig;
use serde::{Deserialize, Serialize};
pub use wrap::WrapConfig;

/// Configuration for the qwrap application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
	#[serde(default)]
	pub wrap:   WrapConfig,
	#[serde(default)]
	pub output: OutputConfig,
}

impl Config {
	/// Loads configuration from the default config file path.
	/// Auto-generates config with defaults on first run.
	pub fn load() -> Result<Self> {
		let config_path = Self::get_config_path()?;

		if !config_path.exists() {
			let config = Self::default();
			config.save()?;
			return Ok(config);
		}

		let config_str = fs::read_to_string(&config_path).context("Failed to read config file")?;

		let config: Self = toml::from_str(&config_str).context("Failed to parse config file")?;
		config.validate()?;
		Ok(config)
	}

	/// Saves the configuration to the default config file path with inline
	/// comments.
	pub fn save(&self) -> Result<()> {
		let config_path = Self::get_config_path()?;

		// Ensure parent directory exists
		if let Some(parent) = config_path.parent() {
			fs::create_dir_all(parent).context("Failed to create config directory")?;
		}

		let config_with_comments = self.to_toml_with_comments();

		fs::write(&config_path, config_with_comments).context("Failed to write config file")?;

		Ok(())
	}

	/// Generates TOML string with helpful inline comments for each field
	fn to_toml_with_comments(&self) -> String {
		format!(
			r#"# qwrap configuration file
# Edit this file to customize qwrap's behavior

[wrap]
# Maximum number of characters per output line
line_length = {line_length}

[output]
# Character repeated to build separator lines around framed output
separator = "{separator}"
"#,
			line_length = self.wrap.line_length,
			separator = self.output.separator,
		)
	}

	/// Returns the platform-specific configuration file path following XDG spec.
	/// Priority order:
	/// 1. $XDG_CONFIG_HOME/qwrap/config.toml
	/// 2. ~/.config/qwrap/config.toml (Unix)
	/// 3. ~/Library/Application Support/qwrap/config.toml (macOS fallback)
	/// 4. %APPDATA%\qwrap\config.toml (Windows)
	pub fn get_config_path() -> Result<PathBuf> {
		let config_dir = if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
			// Use XDG_CONFIG_HOME if set
			PathBuf::from(xdg_config)
		} else if cfg!(target_os = "macos") {
			// On macOS, prefer ~/.config but fall back to Application Support
			let home = dirs::home_dir().context("Failed to get home directory")?;
			let xdg_path = home.join(".config");
			if xdg_path.exists() {
				xdg_path
			} else {
				dirs::config_dir().unwrap_or_else(|| home.join("Library/Application Support"))
			}
		} else {
			// On other platforms, use standard config dir
			dirs::config_dir().context("Failed to get config directory")?
		};

		Ok(config_dir.join("qwrap").join("config.toml"))
	}

	/// Validates the configuration values.
	pub fn validate(&self) -> Result<()> {
		if self.wrap.line_length == 0 {
			anyhow::bail!("wrap.line_length must be at least 1");
		}

		if !self.output.separator.is_ascii_graphic() {
			anyhow::bail!("output.separator must be a printable ASCII character");
		}

		Ok(())
	}
}
