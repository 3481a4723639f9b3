use serde::{Deserialize, Serialize};

/// Output-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
	/// Character repeated to build separator lines around framed output
	#[serde(default = "default_separator")]
	pub separator: char,
}

const fn default_separator() -> char { '=' }

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			separator: default_separator(),
		}
	}
}
