//! Error type shared by expansion, rendering and plan loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or writing a presubmit configuration.
#[derive(Debug, Error)]
pub enum GenError {
    /// A matrix dimension resolves to neither a registered rule nor a task field.
    #[error("unknown matrix dimension `{name}`: no rule registered and no task field by that name")]
    UnknownDimension {
        /// The offending dimension name.
        name: String,
    },

    /// A toggle dimension was given a value it has no flag set for.
    #[error("dimension `{dimension}` has no flags for value `{value}`")]
    UnknownToggleValue {
        /// The toggle dimension.
        dimension: String,
        /// The value that was not found.
        value: String,
    },

    /// Two expanded tasks ended up with the same job name.
    #[error("duplicate job `{name}`: two tasks expand to the same job name")]
    DuplicateJob {
        /// The job name produced twice.
        name: String,
    },

    /// A rule was rejected at registration time.
    #[error("invalid rule for dimension `{name}`: {reason}")]
    InvalidRule {
        /// The dimension the rule was registered under.
        name: String,
        /// Why the rule was rejected.
        reason: String,
    },

    /// A plan section refers to a task that was never defined.
    #[error("plan section refers to unknown task `{name}`")]
    UnknownTask {
        /// The missing task name.
        name: String,
    },

    /// A plan contains no sections to render.
    #[error("plan defines no sections")]
    EmptyPlan,

    /// A plan file could not be parsed.
    #[error("failed to parse plan: {0}")]
    Plan(String),

    /// Reading or writing a file failed.
    #[error("i/o failure on {}: {source}", path.display())]
    Io {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying error from the filesystem port.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
