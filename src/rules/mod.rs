//! Dimension rules: how one matrix value specializes a task.
//!
//! Every dimension name resolves to a [`Rule`]. Registered rules win; any
//! other name that matches a scalar [`TaskField`] falls back to direct
//! assignment. Names that match neither are rejected instead of being
//! silently dropped.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::GenError;
use crate::task::{Task, TaskField};

/// Dimension that switches between Bzlmod and `WORKSPACE` mode.
pub const BZLMOD_DIMENSION: &str = "bzlmod";

/// Dimension that selects the CI platform.
pub const PLATFORM_DIMENSION: &str = "platform";

/// Expansion behavior attached to a dimension.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Each value maps to a set of flags appended to every action with targets.
    Toggle(BTreeMap<String, Vec<String>>),
    /// Sets `platform` and appends `--config=<alias or value>` to every action with targets.
    Platform(BTreeMap<String, String>),
    /// Assigns the value to a scalar task field.
    Field(TaskField),
}

impl Rule {
    /// The `bzlmod` toggle.
    #[must_use]
    pub fn bzlmod() -> Self {
        fn entry(value: &str, flags: [&str; 2]) -> (String, Vec<String>) {
            (value.to_string(), flags.map(str::to_string).to_vec())
        }
        Self::Toggle(BTreeMap::from([
            entry("enabled", ["--enable_bzlmod", "--noenable_workspace"]),
            entry("disabled", ["--noenable_bzlmod", "--enable_workspace"]),
        ]))
    }

    /// The platform rule with the repository's `.bazelrc` config names.
    #[must_use]
    pub fn platform() -> Self {
        Self::Platform(BTreeMap::from([
            ("ubuntu2004".to_string(), "linux".to_string()),
            ("macos".to_string(), "mac".to_string()),
            ("macos_arm64".to_string(), "mac".to_string()),
        ]))
    }

    /// Applies `value` of `dimension` to `task`.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::UnknownToggleValue`] when a toggle has no flag set
    /// for `value`.
    pub fn apply(&self, dimension: &str, task: &mut Task, value: &str) -> Result<(), GenError> {
        match self {
            Self::Toggle(table) => {
                let Some(flags) = table.get(value) else {
                    return Err(GenError::UnknownToggleValue {
                        dimension: dimension.to_string(),
                        value: value.to_string(),
                    });
                };
                task.extend_active_flags(flags);
            }
            Self::Platform(aliases) => {
                value.clone_into(&mut task.platform);
                let config = aliases.get(value).map_or(value, String::as_str);
                task.extend_active_flags(&[format!("--config={config}")]);
            }
            Self::Field(field) => field.assign(task, value),
        }
        Ok(())
    }

    fn validate(&self, name: &str) -> Result<(), GenError> {
        match self {
            Self::Toggle(table) if table.is_empty() => Err(GenError::InvalidRule {
                name: name.to_string(),
                reason: "toggle defines no values".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Registry of dimension rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: BTreeMap<String, Rule>,
}

impl Default for RuleSet {
    /// Registers `bzlmod` and `platform`; every other dimension resolves by field name.
    fn default() -> Self {
        let rules = BTreeMap::from([
            (BZLMOD_DIMENSION.to_string(), Rule::bzlmod()),
            (PLATFORM_DIMENSION.to_string(), Rule::platform()),
        ]);
        Self { rules }
    }
}

impl RuleSet {
    /// Creates a registry with no rules; only field-name dimensions resolve.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Registers `rule` under `name`, replacing any existing rule.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidRule`] if the name is empty or the rule
    /// could never apply (a toggle with no values).
    pub fn register(&mut self, name: impl Into<String>, rule: Rule) -> Result<(), GenError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GenError::InvalidRule {
                name,
                reason: "empty dimension name".to_string(),
            });
        }
        rule.validate(&name)?;
        tracing::debug!(dimension = %name, "registered dimension rule");
        self.rules.insert(name, rule);
        Ok(())
    }

    /// Resolves the rule for a dimension.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::UnknownDimension`] if `name` is neither registered
    /// nor a scalar task field.
    pub fn resolve(&self, name: &str) -> Result<Cow<'_, Rule>, GenError> {
        if let Some(rule) = self.rules.get(name) {
            return Ok(Cow::Borrowed(rule));
        }
        name.parse::<TaskField>()
            .map(|field| Cow::Owned(Rule::Field(field)))
            .map_err(|_| GenError::UnknownDimension {
                name: name.to_string(),
            })
    }
}
