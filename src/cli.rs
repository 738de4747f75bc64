//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Default location of the generated presubmit file.
pub const DEFAULT_OUTPUT: &str = ".bazelci/presubmit.yml";

/// Top-level CLI parser for `bazelci-gen`.
#[derive(Debug, Parser)]
#[command(
    name = "bazelci-gen",
    version,
    about = "Expand the CI task matrix and write the BazelCI presubmit file"
)]
pub struct Cli {
    /// The path to the output yml file.
    #[arg(
        long = "yml-output",
        alias = "yml_output",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT
    )]
    pub yml_output: PathBuf,

    /// Load tasks and matrices from a YAML plan instead of the built-in plan.
    #[arg(long, value_name = "PATH")]
    pub plan: Option<PathBuf>,

    /// Print the generated document instead of writing it.
    #[arg(long)]
    pub dry_run: bool,
}
