//! A scriptable test double implementing the crate's collaborator traits.

use std::collections::BTreeMap;

use scenarios::{Scenario, ScenarioRunner, TestInstance};
use serde::{Deserialize, Serialize};

use crate::report::{RunEvent, RunLog};

/// Attribute value type used by [`FakeTest`].
///
/// Covers the two shapes scenario fixtures use in practice: numbers and
/// strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    /// Integer attribute.
    Int(i64),
    /// Text attribute.
    Text(String),
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self { Self::Int(value) }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self { Self::Text(value.to_owned()) }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self { Self::Text(value) }
}

/// A test instance double with a scripted outcome.
///
/// Running it records a [`RunEvent::Started`] followed by either
/// [`RunEvent::Passed`] or [`RunEvent::Failed`], depending on
/// [`failing_with`](FakeTest::failing_with).
#[derive(Clone, Debug, PartialEq)]
pub struct FakeTest {
    id: String,
    description: Option<String>,
    attributes: BTreeMap<String, AttrValue>,
    scenarios: Vec<Scenario<AttrValue>>,
    failure: Option<String>,
}

impl FakeTest {
    /// Create a passing test with no scenarios or attributes.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            attributes: BTreeMap::new(),
            scenarios: Vec::new(),
            failure: None,
        }
    }

    /// Set the short description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declare the scenario list.
    #[must_use]
    pub fn with_scenarios(mut self, scenarios: Vec<Scenario<AttrValue>>) -> Self {
        self.scenarios = scenarios;
        self
    }

    /// Pre-bind one attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Script every execution of this test (and its clones) to fail.
    #[must_use]
    pub fn failing_with(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Current value of an attribute, if bound.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> { self.attributes.get(name) }
}

impl TestInstance for FakeTest {
    type Value = AttrValue;

    fn id(&self) -> &str { &self.id }

    fn clone_with_id(&self, id: String) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }

    fn description(&self) -> Option<&str> { self.description.as_deref() }

    fn set_description(&mut self, description: String) { self.description = Some(description); }

    fn set_attribute(&mut self, name: &str, value: AttrValue) {
        self.attributes.insert(name.to_owned(), value);
    }

    fn scenarios(&self) -> &[Scenario<AttrValue>] { &self.scenarios }

    fn clear_scenarios(&mut self) { self.scenarios.clear(); }
}

impl ScenarioRunner for FakeTest {
    type Report = RunLog;

    fn run_single(&mut self, report: &mut RunLog) {
        report.record(RunEvent::Started(self.id.clone()));
        match &self.failure {
            Some(message) => report.record(RunEvent::Failed(self.id.clone(), message.clone())),
            None => report.record(RunEvent::Passed(self.id.clone())),
        }
    }
}
