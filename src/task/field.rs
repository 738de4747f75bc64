//! Scalar task fields addressable by a matrix dimension.

use std::str::FromStr;

use serde::Deserialize;

use super::Task;

/// A scalar [`Task`] field that a dimension may assign directly.
///
/// `job_name` and `display_name` are derived during expansion and cannot be
/// assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskField {
    /// `platform`.
    Platform,
    /// `bazel`, the tool version.
    Bazel,
    /// `working_directory`.
    WorkingDirectory,
}

impl TaskField {
    /// Every assignable field, in rendering order.
    pub const ALL: [Self; 3] = [Self::Platform, Self::Bazel, Self::WorkingDirectory];

    /// Field name as it appears in task definitions and rendered output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::Bazel => "bazel",
            Self::WorkingDirectory => "working_directory",
        }
    }

    /// Overwrites this field on `task` with `value`.
    pub fn assign(self, task: &mut Task, value: &str) {
        let slot = match self {
            Self::Platform => &mut task.platform,
            Self::Bazel => &mut task.bazel,
            Self::WorkingDirectory => &mut task.working_directory,
        };
        value.clone_into(slot);
    }
}

impl FromStr for TaskField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("`{s}` is not a scalar task field"))
    }
}
