//! Presubmit generation: expand every plan section and write the document.

use std::path::Path;

use crate::cli::Cli;
use crate::context::ServiceContext;
use crate::error::GenError;
use crate::expand::expand;
use crate::plan::Plan;
use crate::render::{self, WriteMode};

/// Execute the generator for parsed CLI arguments.
///
/// With `--dry-run` the document is rendered into an in-memory filesystem and
/// printed; the plan file, if any, is still read from disk.
///
/// # Errors
///
/// Returns an error string if the plan cannot be loaded, expansion fails or
/// the output cannot be written.
pub fn run(cli: &Cli) -> Result<(), String> {
    execute(cli).map_err(|e| e.to_string())
}

fn execute(cli: &Cli) -> Result<(), GenError> {
    let live = ServiceContext::live();
    let plan = load_plan(&live, cli.plan.as_deref())?;

    if cli.dry_run {
        let ctx = ServiceContext::in_memory();
        let document = render_in(&ctx, &plan, &cli.yml_output)?;
        print!("{document}");
        return Ok(());
    }

    let written = generate(&live, &plan, &cli.yml_output)?;
    println!("Wrote {written} tasks to {}", cli.yml_output.display());
    Ok(())
}

fn load_plan(ctx: &ServiceContext, path: Option<&Path>) -> Result<Plan, GenError> {
    match path {
        Some(path) => Plan::load(ctx, path),
        None => Ok(Plan::builtin()),
    }
}

/// Generates into `ctx` and reads the finished document back.
fn render_in(ctx: &ServiceContext, plan: &Plan, path: &Path) -> Result<String, GenError> {
    generate(ctx, plan, path)?;
    ctx.fs
        .read_to_string(path)
        .map_err(|source| GenError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Expands every section of `plan` and writes the result to `path`.
///
/// All sections are expanded before anything is written, so a configuration
/// error leaves the output untouched. The first section creates the file with
/// the header; later sections are appended without it.
///
/// Returns the number of tasks written.
///
/// # Errors
///
/// Returns the first expansion error, or [`GenError::Io`] if a write fails.
pub fn generate(ctx: &ServiceContext, plan: &Plan, path: &Path) -> Result<usize, GenError> {
    if plan.sections.is_empty() {
        return Err(GenError::EmptyPlan);
    }

    let expanded = plan
        .sections
        .iter()
        .map(|section| {
            tracing::debug!(section = %section.name, "expanding section");
            expand(&section.tasks, &section.matrix, &plan.rules)
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (index, tasks) in expanded.iter().enumerate() {
        let (mode, with_header) = if index == 0 {
            (WriteMode::Create, true)
        } else {
            (WriteMode::Append, false)
        };
        render::write(ctx, path, tasks, mode, with_header)?;
    }

    Ok(expanded.iter().map(Vec::len).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;
    use crate::plan::Section;
    use crate::render::HEADER;
    use crate::rules::RuleSet;
    use crate::task::Task;

    fn two_section_plan() -> Plan {
        let rules = Task::new("rules", "Rules")
            .with_build_targets(["//rules/..."]);
        let app = Task::new("app", "App").with_build_targets(["//app"]);
        Plan {
            rules: RuleSet::default(),
            sections: vec![
                Section {
                    name: "full".to_string(),
                    tasks: vec![rules],
                    matrix: Matrix::new().with("bzlmod", ["enabled", "disabled"]),
                },
                Section {
                    name: "windows".to_string(),
                    tasks: vec![app],
                    matrix: Matrix::new().with("platform", ["windows"]),
                },
            ],
        }
    }

    #[test]
    fn writes_sections_under_one_header() {
        let ctx = ServiceContext::in_memory();
        let path = Path::new("presubmit.yml");
        let written = generate(&ctx, &two_section_plan(), path).unwrap();
        assert_eq!(written, 3);

        let out = ctx.fs.read_to_string(path).unwrap();
        assert!(out.starts_with(HEADER));
        assert_eq!(out.matches("DO NOT MODIFY").count(), 1);
        let disabled = out.find("  rules_bzlmod_disabled:").unwrap();
        let enabled = out.find("  rules_bzlmod_enabled:").unwrap();
        let windows = out.find("  app_platform_windows:").unwrap();
        assert!(disabled < enabled && enabled < windows);
        assert!(out.contains("      - \"--config=windows\""));
    }

    #[test]
    fn configuration_error_writes_nothing() {
        let ctx = ServiceContext::in_memory();
        let path = Path::new("presubmit.yml");
        let mut plan = two_section_plan();
        plan.sections[1].matrix = Matrix::new().with("compiler", ["clang"]);

        let err = generate(&ctx, &plan, path).unwrap_err();
        assert!(matches!(err, GenError::UnknownDimension { .. }));
        assert!(!ctx.fs.exists(path));
    }

    #[test]
    fn output_is_byte_identical_across_runs() {
        let path = Path::new("presubmit.yml");
        let first = ServiceContext::in_memory();
        let second = ServiceContext::in_memory();
        generate(&first, &Plan::builtin(), path).unwrap();
        generate(&second, &Plan::builtin(), path).unwrap();
        let first = first.fs.read_to_string(path).unwrap();
        let second = second.fs.read_to_string(path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn render_in_returns_full_document() {
        let ctx = ServiceContext::in_memory();
        let path = Path::new("out.yml");
        let doc = render_in(&ctx, &two_section_plan(), path).unwrap();
        assert!(doc.starts_with(HEADER));
        assert!(doc.ends_with("      - \"--config=windows\"\n\n"));
    }

    #[test]
    fn load_plan_defaults_to_builtin() {
        let ctx = ServiceContext::in_memory();
        let plan = load_plan(&ctx, None).unwrap();
        assert_eq!(plan, Plan::builtin());
    }

    #[test]
    fn rejects_plan_without_sections() {
        let plan = Plan {
            rules: RuleSet::default(),
            sections: vec![],
        };
        let ctx = ServiceContext::in_memory();
        let result = generate(&ctx, &plan, Path::new("x.yml"));
        assert!(matches!(result, Err(GenError::EmptyPlan)));
    }
}
