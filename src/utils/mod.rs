//! Shared utility functions used across CLI commands.

mod date;
mod interaction;
mod wrapping;

pub use date::is_valid_date_string;
pub use interaction::confirm;
pub use wrapping::wrap_string;
