//! Command handlers.

pub mod generate;

use crate::cli::Cli;

/// Dispatch parsed arguments to the generator.
///
/// # Errors
///
/// Returns an error string if generation fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    generate::run(cli)
}
