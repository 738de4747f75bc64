//! Test matrices and their deterministic cartesian product.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

/// A mapping from dimension name to the values that dimension takes.
///
/// The order in which values are supplied does not matter: [`Matrix::combinations`]
/// sorts dimension names and values before taking the product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    dimensions: BTreeMap<String, Vec<String>>,
}

/// One point of a matrix: exactly one value per dimension, in sorted key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Combination {
    entries: Vec<(String, String)>,
}

impl Matrix {
    /// Creates an empty matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a dimension.
    #[must_use]
    pub fn with<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.dimensions.insert(name.into(), values);
        self
    }

    /// Dimension names, sorted.
    #[must_use]
    pub fn dimension_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.dimensions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of combinations the matrix produces.
    #[must_use]
    pub fn size(&self) -> usize {
        self.dimensions
            .values()
            .map(|values| values.iter().collect::<BTreeSet<_>>().len())
            .product()
    }

    /// Computes the cartesian product of all dimensions.
    ///
    /// Dimension names are visited in sorted order with the first name
    /// outermost, and each dimension's values are sorted and deduplicated.
    /// An empty matrix yields a single empty combination; a dimension with no
    /// values yields no combinations at all.
    #[must_use]
    pub fn combinations(&self) -> Vec<Combination> {
        let mut product = vec![Combination::default()];
        for name in self.dimension_names() {
            let mut values: Vec<&str> = self.dimensions[name]
                .iter()
                .map(String::as_str)
                .collect();
            values.sort_unstable();
            values.dedup();

            product = product
                .iter()
                .flat_map(|prefix| {
                    values.iter().map(move |value| {
                        let mut next = prefix.clone();
                        next.entries.push((name.to_string(), (*value).to_string()));
                        next
                    })
                })
                .collect();
        }
        product
    }
}

impl Combination {
    /// `(dimension, value)` pairs in sorted dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
