//! The scenario data model.
//!
//! A [`Scenario`] names one variant of a test definition and carries the
//! attribute overrides that variant binds. Parameter order is declaration
//! order and is preserved through application, so later pairs may overwrite
//! earlier ones deliberately.

use serde::{Deserialize, Serialize};

/// A named set of attribute overrides applied to a test clone.
///
/// `V` is the attribute value type chosen by the collaborating harness.
/// Scenario names are not required to be unique; callers that want distinct
/// clone identities are responsible for distinct names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario<V> {
    name: String,
    parameters: Vec<(String, V)>,
}

impl<V> Scenario<V> {
    /// Create a scenario from a name and its ordered parameter pairs.
    #[must_use]
    pub fn new<N, P, K>(name: N, parameters: P) -> Self
    where
        N: Into<String>,
        P: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        Self {
            name: name.into(),
            parameters: parameters
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }

    /// Create a scenario with no parameters.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Append one parameter pair, preserving declaration order.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: V) -> Self {
        self.parameters.push((key.into(), value));
        self
    }

    /// The scenario name, as it will appear in clone identities.
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// The parameter pairs in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[(String, V)] { &self.parameters }

    /// The suffix appended to a clone's identity: `(name)`.
    #[must_use]
    pub fn id_suffix(&self) -> String { format!("({})", self.name) }
}

impl<V> std::fmt::Display for Scenario<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
