//! Presubmit plans: which base tasks run over which matrix.
//!
//! A plan is an ordered list of sections. The first section creates the
//! output document; every later section is appended to it. The built-in plan
//! covers rules_android; [`Plan::from_yaml`] loads an alternative from disk.

pub mod builtin;
mod file;

use std::path::Path;

use crate::context::ServiceContext;
use crate::error::GenError;
use crate::matrix::Matrix;
use crate::rules::RuleSet;
use crate::task::Task;

/// One group of base tasks expanded over one matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Label used in log output.
    pub name: String,
    /// Base tasks, in output order.
    pub tasks: Vec<Task>,
    /// Matrix the tasks are expanded over.
    pub matrix: Matrix,
}

/// An ordered set of sections sharing one rule registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Dimension rules used for every section.
    pub rules: RuleSet,
    /// Sections, in output order.
    pub sections: Vec<Section>,
}

impl Plan {
    /// The rules_android presubmit plan.
    #[must_use]
    pub fn builtin() -> Self {
        builtin::plan()
    }

    /// Parses a plan from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Plan`] for malformed YAML or a task defined more
    /// than once, [`GenError::UnknownTask`] when a section names an undefined
    /// task, [`GenError::EmptyPlan`] when no sections are given and
    /// [`GenError::InvalidRule`] for a rejected custom dimension.
    pub fn from_yaml(yaml: &str) -> Result<Self, GenError> {
        file::parse(yaml)
    }

    /// Reads and parses a plan file through the filesystem port.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Plan::from_yaml`].
    pub fn load(ctx: &ServiceContext, path: &Path) -> Result<Self, GenError> {
        let yaml = ctx
            .fs
            .read_to_string(path)
            .map_err(|source| GenError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "loaded plan file");
        Self::from_yaml(&yaml)
    }

    /// Total number of tasks the plan expands to.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.tasks.len() * s.matrix.size())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    #[test]
    fn load_reads_through_port() {
        let yaml = "tasks:\n  - job_name: a\n    display_name: A\nsections:\n  - tasks: [a]\n";
        let fs = MemoryFileSystem::with_files([("plan.yaml", yaml)]);
        let ctx = ServiceContext::with_fs(fs);
        let plan = Plan::load(&ctx, Path::new("plan.yaml")).unwrap();
        assert_eq!(plan.sections.len(), 1);
        assert_eq!(plan.task_count(), 1);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let ctx = ServiceContext::in_memory();
        let err = Plan::load(&ctx, Path::new("missing.yaml")).unwrap_err();
        assert!(matches!(err, GenError::Io { .. }));
    }
}
