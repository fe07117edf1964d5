//! CLI command handlers. Each command is in its own file for clarity.

mod extract;
mod formats;
mod run;

pub use extract::run_extract;
pub use formats::run_formats;
pub use run::run_batch;
