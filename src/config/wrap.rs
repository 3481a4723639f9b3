use serde::{Deserialize, Serialize};

/// Wrapping-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrapConfig {
	/// Maximum number of characters per output line
	#[serde(default = "default_line_length")]
	pub line_length: usize,
}

const fn default_line_length() -> usize { 80 }

impl Default for WrapConfig {
	fn default() -> Self {
		Self {
			line_length: default_line_length(),
		}
	}
}
