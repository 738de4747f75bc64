//! YAML plan files.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::GenError;
use crate::matrix::Matrix;
use crate::rules::{Rule, RuleSet};
use crate::task::Task;

use super::{Plan, Section};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanFile {
    tasks: Vec<Task>,
    sections: Vec<SectionFile>,
    #[serde(default)]
    dimensions: BTreeMap<String, Rule>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SectionFile {
    #[serde(default)]
    name: Option<String>,
    tasks: Vec<String>,
    #[serde(default)]
    matrix: Matrix,
}

pub(super) fn parse(yaml: &str) -> Result<Plan, GenError> {
    let file: PlanFile = serde_yaml::from_str(yaml)
        .map_err(|e| GenError::Plan(e.to_string()))?;
    if file.sections.is_empty() {
        return Err(GenError::EmptyPlan);
    }

    let mut rules = RuleSet::default();
    for (name, rule) in file.dimensions {
        rules.register(name, rule)?;
    }

    let mut by_name: BTreeMap<&str, &Task> = BTreeMap::new();
    for task in &file.tasks {
        let name = task.job_name.as_str();
        if by_name.insert(name, task).is_some() {
            return Err(GenError::Plan(format!(
                "task `{name}` is defined more than once"
            )));
        }
    }

    let mut sections = Vec::with_capacity(file.sections.len());
    for (index, section) in file.sections.into_iter().enumerate() {
        let tasks = section
            .tasks
            .iter()
            .map(|name| {
                by_name
                    .get(name.as_str())
                    .map(|task| (*task).clone())
                    .ok_or_else(|| GenError::UnknownTask { name: name.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let name = section
            .name
            .unwrap_or_else(|| format!("section {}", index + 1));
        sections.push(Section {
            name,
            tasks,
            matrix: section.matrix,
        });
    }

    Ok(Plan { rules, sections })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskField;

    const PLAN: &str = r#"
tasks:
  - job_name: basic_app
    display_name: Basic App
    working_directory: examples/basicapp
    build_targets: ["//java/com/basicapp:basic_app"]
  - job_name: rules
    display_name: Rules
    build_targets: ["//rules/..."]
sections:
  - name: main
    tasks: [rules, basic_app]
    matrix:
      bazel: ["8.2.1", "7.4.1"]
      bzlmod: [enabled, disabled]
  - tasks: [basic_app]
    matrix:
      platform: [windows]
dimensions:
  asan:
    toggle:
      "on": [--config=asan]
      "off": []
  compiler:
    field: bazel
"#;

    #[test]
    fn parses_sections_in_order() {
        let plan = parse(PLAN).unwrap();
        assert_eq!(plan.sections.len(), 2);
        assert_eq!(plan.sections[0].name, "main");
        assert_eq!(plan.sections[1].name, "section 2");
        let names: Vec<_> = plan.sections[0]
            .tasks
            .iter()
            .map(|t| t.job_name.as_str())
            .collect();
        assert_eq!(names, vec!["rules", "basic_app"]);
        assert_eq!(plan.sections[0].matrix.size(), 4);
    }

    #[test]
    fn registers_custom_dimensions() {
        let plan = parse(PLAN).unwrap();
        let asan = plan.rules.resolve("asan").unwrap();
        assert!(matches!(*asan, Rule::Toggle(_)));
        let compiler = plan.rules.resolve("compiler").unwrap();
        assert_eq!(*compiler, Rule::Field(TaskField::Bazel));
        assert!(plan.rules.resolve("bzlmod").is_ok());
    }

    #[test]
    fn unknown_task_reference_is_an_error() {
        let yaml = "tasks: []\nsections:\n  - tasks: [missing]\n";
        let err = parse(yaml).unwrap_err();
        assert!(matches!(
            err,
            GenError::UnknownTask { ref name } if name == "missing"
        ));
    }

    #[test]
    fn task_defined_twice_is_an_error() {
        let yaml = "tasks:
  - job_name: rules
    display_name: Rules
  - job_name: rules
    display_name: Rules again
sections:
  - tasks: [rules]
";
        let err = parse(yaml).unwrap_err();
        assert!(matches!(
            err,
            GenError::Plan(ref message) if message.contains("`rules`")
        ));
    }

    #[test]
    fn plan_without_sections_is_an_error() {
        let result = parse("tasks: []\nsections: []\n");
        assert!(matches!(result, Err(GenError::EmptyPlan)));
    }

    #[test]
    fn malformed_yaml_is_a_plan_error() {
        assert!(matches!(parse("tasks: [\n"), Err(GenError::Plan(_))));
        let result = parse("tasks: []\nsections: []\nextra: 1\n");
        assert!(matches!(result, Err(GenError::Plan(_))));
    }
}
