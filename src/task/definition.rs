//! Core task type.

use serde::Deserialize;

/// One of the three Bazel actions a task may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `bazel build`.
    Build,
    /// `bazel test`.
    Test,
    /// `bazel coverage`.
    Coverage,
}

impl Action {
    /// All actions, in rendering order.
    pub const ALL: [Self; 3] = [Self::Build, Self::Test, Self::Coverage];
}

/// A BazelCI job template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Task {
    /// Job identifier, the key under `tasks:`.
    pub job_name: String,
    /// Human-readable label rendered as `name:`.
    pub display_name: String,
    /// Target patterns passed to `bazel build`.
    #[serde(default)]
    pub build_targets: Vec<String>,
    /// Target patterns passed to `bazel test`.
    #[serde(default)]
    pub test_targets: Vec<String>,
    /// Target patterns passed to `bazel coverage`.
    #[serde(default)]
    pub coverage_targets: Vec<String>,
    /// Flags for the build action.
    #[serde(default)]
    pub build_flags: Vec<String>,
    /// Flags for the test action.
    #[serde(default)]
    pub test_flags: Vec<String>,
    /// Flags for the coverage action.
    #[serde(default)]
    pub coverage_flags: Vec<String>,
    /// BazelCI platform name.
    #[serde(default)]
    pub platform: String,
    /// Bazel version.
    #[serde(default)]
    pub bazel: String,
    /// Workspace directory relative to the repository root.
    #[serde(default)]
    pub working_directory: String,
}

impl Task {
    /// Creates a task with the given names and every other field empty.
    #[must_use]
    pub fn new(job_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            job_name: job_name.into(),
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    /// Sets the build targets.
    #[must_use]
    pub fn with_build_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_targets = targets.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the test targets.
    #[must_use]
    pub fn with_test_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_targets = targets.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the coverage targets.
    #[must_use]
    pub fn with_coverage_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.coverage_targets = targets.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the base flags for one action.
    #[must_use]
    pub fn with_flags<I, S>(mut self, action: Action, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.flags_mut(action) = flags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the working directory.
    #[must_use]
    pub fn with_working_directory(mut self, dir: impl Into<String>) -> Self {
        self.working_directory = dir.into();
        self
    }

    /// Target patterns for `action`.
    #[must_use]
    pub fn targets(&self, action: Action) -> &[String] {
        match action {
            Action::Build => &self.build_targets,
            Action::Test => &self.test_targets,
            Action::Coverage => &self.coverage_targets,
        }
    }

    /// Flags for `action`.
    #[must_use]
    pub fn flags(&self, action: Action) -> &[String] {
        match action {
            Action::Build => &self.build_flags,
            Action::Test => &self.test_flags,
            Action::Coverage => &self.coverage_flags,
        }
    }

    fn flags_mut(&mut self, action: Action) -> &mut Vec<String> {
        match action {
            Action::Build => &mut self.build_flags,
            Action::Test => &mut self.test_flags,
            Action::Coverage => &mut self.coverage_flags,
        }
    }

    /// Appends `flags` to every action that has targets.
    ///
    /// An action with no targets never receives flags, so a build-only task
    /// does not grow a `test_flags` entry.
    pub fn extend_active_flags(&mut self, flags: &[String]) {
        for action in Action::ALL {
            if !self.targets(action).is_empty() {
                self.flags_mut(action).extend_from_slice(flags);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_active_flags_skips_actions_without_targets() {
        let mut task = Task::new("rules", "Rules")
            .with_build_targets(["//rules/..."]);
        task.extend_active_flags(&["--enable_bzlmod".to_string()]);
        assert_eq!(task.build_flags, vec!["--enable_bzlmod"]);
        assert!(task.test_flags.is_empty());
        assert!(task.coverage_flags.is_empty());
    }

    #[test]
    fn extend_active_flags_preserves_base_flags() {
        let mut task = Task::new("resource_rules", "Resource Rules")
            .with_test_targets(["//test/rules/resources/..."])
            .with_flags(
                Action::Test,
                ["--//rules/flags:manifest_merge_order=legacy"],
            );
        task.extend_active_flags(&["--config=linux".to_string()]);
        assert_eq!(
            task.test_flags,
            vec![
                "--//rules/flags:manifest_merge_order=legacy",
                "--config=linux"
            ]
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let yaml = "job_name: basic_app\ndisplay_name: Basic App\nbuild_targets:\n  - //java/...\n";
        let task: Task = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(task.job_name, "basic_app");
        assert_eq!(task.build_targets, vec!["//java/..."]);
        assert!(task.test_targets.is_empty());
        assert!(task.working_directory.is_empty());
    }
}
