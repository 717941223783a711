#![doc(html_root_url = "https://docs.rs/scenarios/latest")]
//! Public API for the `scenarios` library.
//!
//! This crate lets a test harness declare several named scenarios (sets of
//! attribute overrides) on one test definition and multiply it into one
//! runnable instance per scenario, each with its own identity and attribute
//! bindings. Multiplication happens either ahead of time over a whole
//! collection ([`generate_scenarios`]) or lazily when a single test runs
//! ([`ScenarioRunner`]).
//!
//! The crate never discovers tests, executes test bodies, or aggregates
//! results; the surrounding harness supplies those through the
//! [`TestInstance`] and [`ScenarioRunner`] contracts.

pub mod expand;
pub mod instance;
pub mod prelude;
pub mod runner;
pub mod scenario;
pub mod suite;

pub use expand::{GenerateScenarios, apply_scenario, apply_scenarios, generate_scenarios};
pub use instance::TestInstance;
pub use runner::ScenarioRunner;
pub use scenario::Scenario;
pub use suite::{Leaves, TestTree};
