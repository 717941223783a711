//! The collaborator contract for test instances.
//!
//! [`TestInstance`] abstracts over the harness-owned test type so the
//! expander and runner can clone tests, re-identify them, and bind scenario
//! parameters without knowing the concrete representation. The harness keeps
//! ownership of what a test *is* and how it executes; this trait only asks
//! for the handful of capabilities multiplication needs.

use crate::scenario::Scenario;

/// Capabilities the scenario machinery requires from a harness test type.
///
/// The scenario list is an explicit field of the implementing type, default
/// empty. An empty list is the one and only "no scenarios" state; there is
/// no separate absent-versus-empty distinction.
pub trait TestInstance: Sized {
    /// Attribute value type of the harness's attribute namespace.
    type Value: Clone;

    /// Stable identity of this test.
    fn id(&self) -> &str;

    /// Clone this test under a new identity, preserving execution behaviour.
    ///
    /// The clone must be fully independent: mutating its attributes or
    /// scenario list must not affect `self`.
    #[must_use]
    fn clone_with_id(&self, id: String) -> Self;

    /// Optional human-readable short description.
    fn description(&self) -> Option<&str> { None }

    /// Replace the short description. Harnesses without descriptions may
    /// keep the default no-op.
    fn set_description(&mut self, description: String) { let _ = description; }

    /// Bind `value` to `name` in this test's attribute namespace,
    /// overwriting any existing binding.
    fn set_attribute(&mut self, name: &str, value: Self::Value);

    /// The scenario list this test declares, in declaration order.
    fn scenarios(&self) -> &[Scenario<Self::Value>];

    /// Empty the scenario list so a clone cannot be multiplied again.
    fn clear_scenarios(&mut self);
}
