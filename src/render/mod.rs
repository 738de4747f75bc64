//! Rendering of expanded tasks into the BazelCI presubmit YAML.
//!
//! The output is written by hand rather than through `serde_yaml` so the
//! field order, quoting and indentation stay byte-stable across runs:
//!
//! ```text
//! # DO NOT MODIFY: ...
//! tasks:
//!   <job_name>:
//!     name: "<display_name>"
//!     platform: <platform>
//!     bazel: <bazel>
//!     build_targets:
//!       - "<pattern>"
//! ```

use std::fmt::Write as _;
use std::path::Path;

use crate::context::ServiceContext;
use crate::error::GenError;
use crate::task::{Action, Task};

/// Document header, emitted once by the creating write.
pub const HEADER: &str = concat!(
    "# DO NOT MODIFY: This is autogenerated by rules_android/ci/generate_bazelci_yaml.py.\n",
    "tasks:\n",
);

/// How [`write`] opens the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create or truncate the file.
    Create,
    /// Append to the existing content.
    Append,
}

/// Renders one task block.
#[must_use]
pub fn render_task(task: &Task) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {}:", task.job_name);
    let _ = writeln!(out, "    name: \"{}\"", task.display_name);
    let _ = writeln!(out, "    platform: {}", task.platform);
    let _ = writeln!(out, "    bazel: {}", task.bazel);
    if !task.working_directory.is_empty() {
        let _ = writeln!(out, "    working_directory: {}", task.working_directory);
    }
    for action in Action::ALL {
        let (targets_key, flags_key) = match action {
            Action::Build => ("build_targets", "build_flags"),
            Action::Test => ("test_targets", "test_flags"),
            Action::Coverage => ("coverage_targets", "coverage_flags"),
        };
        write_list(&mut out, targets_key, task.targets(action));
        write_list(&mut out, flags_key, task.flags(action));
    }
    out
}

fn write_list(out: &mut String, key: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "    {key}:");
    for item in items {
        let _ = writeln!(out, "      - \"{item}\"");
    }
}

/// Renders a sequence of task blocks, each followed by a blank line.
#[must_use]
pub fn render(tasks: &[Task]) -> String {
    tasks.iter().fold(String::new(), |mut out, task| {
        out.push_str(&render_task(task));
        out.push('\n');
        out
    })
}

/// Renders `tasks` and writes them to `path` in one filesystem call.
///
/// The header is prepended only when `with_header` is set, so a second
/// matrix can be appended to a document created earlier.
///
/// # Errors
///
/// Returns [`GenError::Io`] if the file cannot be written.
pub fn write(
    ctx: &ServiceContext,
    path: &Path,
    tasks: &[Task],
    mode: WriteMode,
    with_header: bool,
) -> Result<(), GenError> {
    let mut document = String::new();
    if with_header {
        document.push_str(HEADER);
    }
    document.push_str(&render(tasks));

    let result = match mode {
        WriteMode::Create => ctx.fs.write(path, &document),
        WriteMode::Append => ctx.fs.append(path, &document),
    };
    result.map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        tasks = tasks.len(),
        ?mode,
        "wrote tasks"
    );
    Ok(())
}
