//! Built-in rules_android tasks and matrices.

use crate::matrix::Matrix;
use crate::rules::RuleSet;
use crate::task::{Action, Task};

use super::{Plan, Section};

/// Flag resource processor tests need for legacy manifest merging.
const LEGACY_MERGE_ORDER: &str = "--//rules/flags:manifest_merge_order=legacy";

/// Full matrix for Linux and macOS.
#[must_use]
pub fn default_matrix() -> Matrix {
    // TODO: add last_green once the protobuf and grpc dependency issues are resolved.
    Matrix::new()
        .with("bazel", ["7.4.1", "8.2.1"])
        .with("platform", ["ubuntu2004", "macos", "macos_arm64"])
        .with("bzlmod", ["enabled", "disabled"])
}

/// Reduced matrix for Windows, which only builds the basic app.
#[must_use]
pub fn windows_matrix() -> Matrix {
    Matrix::new()
        .with("bazel", ["7.4.1", "8.2.1", "last_green"])
        .with("platform", ["windows"])
        .with("bzlmod", ["enabled", "disabled"])
}

/// Builds and tests the tooling outside `//rules`.
#[must_use]
pub fn tools_task() -> Task {
    Task::new("tools", "Tools")
        .with_build_targets([
            "//android/...",
            "//src/...",
            "-//src/java/com/example/sampleapp/...",
            "//test/...",
            "-//test/rules/...",
            "//toolchains/...",
            "//tools/...",
            "-//tools/android/...",
        ])
        .with_test_targets([
            "//src/...",
            "-//src/java/com/example/sampleapp/...",
            "//test/...",
            "-//test/rules/...",
        ])
}

/// Builds the rules and runs their tests, except resource processing.
#[must_use]
pub fn rules_task() -> Task {
    Task::new("rules", "Rules")
        .with_build_targets(["//rules/..."])
        .with_test_targets(["//test/rules/...", "-//test/rules/resources/..."])
}

/// Resource processing tests, which need the legacy merge order.
///
/// Not part of [`plan`]: these tests are unreliable on macOS workers.
#[must_use]
pub fn resource_rules_task() -> Task {
    Task::new("resource_rules", "Resource Rules")
        .with_build_targets(["//test/rules/resources/..."])
        .with_test_targets(["//test/rules/resources/..."])
        .with_flags(Action::Build, [LEGACY_MERGE_ORDER])
        .with_flags(Action::Test, [LEGACY_MERGE_ORDER])
}

/// Coverage for `android_local_test`.
#[must_use]
pub fn coverage_task() -> Task {
    Task::new("android_local_test_coverage", "Android_Local_Test Coverage")
        .with_coverage_targets(["//test/rules/android_local_test/java/com/..."])
}

/// Builds the example app in its own workspace.
#[must_use]
pub fn basic_app_task() -> Task {
    Task::new("basic_app", "Basic App")
        .with_working_directory("examples/basicapp")
        .with_build_targets(["//java/com/basicapp:basic_app"])
}

/// The full presubmit: every task on Linux and macOS, then the basic app on Windows.
#[must_use]
pub fn plan() -> Plan {
    Plan {
        rules: RuleSet::default(),
        sections: vec![
            Section {
                name: "default".to_string(),
                tasks: vec![
                    tools_task(),
                    rules_task(),
                    coverage_task(),
                    basic_app_task(),
                ],
                matrix: default_matrix(),
            },
            Section {
                name: "windows".to_string(),
                tasks: vec![basic_app_task()],
                matrix: windows_matrix(),
            },
        ],
    }
}
