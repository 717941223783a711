//! Scenario-aware execution for single test instances.
//!
//! [`ScenarioRunner`] lets a test multiply itself at run time, without the
//! harness pre-expanding its collection through
//! [`generate_scenarios`](crate::expand::generate_scenarios). Harness test
//! types implement [`run_single`](ScenarioRunner::run_single) with their
//! ordinary execution path and keep the provided [`run`](ScenarioRunner::run)
//! as their entry point.

use crate::{expand::apply_scenario, instance::TestInstance};

/// Run protocol for tests that may declare scenarios.
///
/// `Report` is the harness's opaque result sink; this trait only threads it
/// through to each executed clone. How outcomes are recorded, and whether a
/// clone's failure is fatal to the wider run, stay the harness's concern.
pub trait ScenarioRunner: TestInstance {
    /// Result sink passed to each execution.
    type Report;

    /// Execute this test exactly once, reporting into `report`.
    ///
    /// This is the harness's ordinary single-test execution; it must ignore
    /// the scenario list entirely.
    fn run_single(&mut self, report: &mut Self::Report);

    /// Execute this test, multiplying by its scenario list if present.
    ///
    /// With an empty scenario list this delegates to
    /// [`run_single`](Self::run_single) exactly once. Otherwise one clone per
    /// scenario is built with the expander's naming rule, its scenario list
    /// cleared, and executed in declaration order. Every clone runs and
    /// reports regardless of earlier clones' outcomes; the unexpanded
    /// original is never executed or reported.
    fn run(&mut self, report: &mut Self::Report) {
        if self.scenarios().is_empty() {
            self.run_single(report);
            return;
        }
        for index in 0..self.scenarios().len() {
            let mut clone = apply_scenario(&self.scenarios()[index], &*self);
            clone.clear_scenarios();
            clone.run_single(report);
        }
    }

    /// Number of test cases one [`run`](Self::run) call will report.
    ///
    /// `1` for an empty scenario list, the scenario count otherwise.
    fn test_count(&self) -> usize { self.scenarios().len().max(1) }
}
