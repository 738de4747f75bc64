//! Matrix expansion: one specialized task per (base task, combination) pair.

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::error::GenError;
use crate::matrix::{Combination, Matrix};
use crate::rules::{Rule, RuleSet};
use crate::task::Task;

/// Expands every base task over every combination of `matrix`.
///
/// Output is base-task major, combination minor, with combinations in
/// sorted-key/sorted-value order. For each dimension (sorted by name) the
/// copy's `job_name` gains `_<dim>_<value>` (dots become underscores) and its
/// `display_name` gains ` w/ <dim> <value>` before the dimension's rule runs.
///
/// All dimensions are resolved before any task is produced, so an unknown
/// dimension fails the whole expansion. Job names must be unique across the
/// output.
///
/// # Errors
///
/// Returns [`GenError::UnknownDimension`] for a dimension `rules` cannot
/// resolve, [`GenError::UnknownToggleValue`] for a toggle value with no flag
/// set and [`GenError::DuplicateJob`] when two tasks get the same job name
/// (for example `8.2.1` and `8_2_1` both sanitize to `8_2_1`).
pub fn expand(
    base_tasks: &[Task],
    matrix: &Matrix,
    rules: &RuleSet,
) -> Result<Vec<Task>, GenError> {
    let resolved = matrix
        .dimension_names()
        .into_iter()
        .map(|name| rules.resolve(name).map(|rule| (name, rule)))
        .collect::<Result<Vec<_>, _>>()?;

    let combinations = matrix.combinations();
    let mut tasks = Vec::with_capacity(base_tasks.len() * combinations.len());
    let mut seen = BTreeSet::new();

    for base in base_tasks {
        for combination in &combinations {
            let task = specialize(base, combination, &resolved)?;
            if !seen.insert(task.job_name.clone()) {
                return Err(GenError::DuplicateJob { name: task.job_name });
            }
            tracing::debug!(job = %task.job_name, "expanded task");
            tasks.push(task);
        }
    }

    tracing::info!(
        base_tasks = base_tasks.len(),
        combinations = combinations.len(),
        tasks = tasks.len(),
        "matrix expanded"
    );
    Ok(tasks)
}

/// Applies one combination to a fresh copy of `base`.
fn specialize(
    base: &Task,
    combination: &Combination,
    rules: &[(&str, Cow<'_, Rule>)],
) -> Result<Task, GenError> {
    let mut task = base.clone();
    for (dimension, value) in combination.iter() {
        let suffix = value.replace('.', "_");
        task.job_name.push_str(&format!("_{dimension}_{suffix}"));
        task.display_name.push_str(&format!(" w/ {dimension} {value}"));

        // Combinations carry every dimension, so the lookup always succeeds.
        if let Some((_, rule)) = rules.iter().find(|(name, _)| *name == dimension) {
            rule.apply(dimension, &mut task, value)?;
        }
    }
    Ok(task)
}
