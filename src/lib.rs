//! Expands BazelCI task matrices and renders the presubmit configuration.
//!
//! Base [`task::Task`]s are crossed with a [`matrix::Matrix`]; each dimension
//! specializes the copy through a [`rules::Rule`]; [`render`] writes the
//! result with a fixed field order so the file diffs cleanly.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod expand;
pub mod matrix;
pub mod plan;
pub mod ports;
pub mod render;
pub mod rules;
pub mod task;

use clap::Parser;

pub use error::GenError;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or generation fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args)
        .map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}
