//! Test doubles for exercising the [`scenarios`] crate.
//!
//! [`FakeTest`] is a scriptable [`TestInstance`](scenarios::TestInstance)
//! and [`ScenarioRunner`](scenarios::ScenarioRunner) implementation, and
//! [`RunLog`] records every execution it reports, so integration tests can
//! assert on identities, ordering, and outcomes.
//!
//! ```rust
//! use scenarios::{ScenarioRunner, Scenario};
//! use scenarios_testing::{FakeTest, RunLog};
//!
//! let mut test = FakeTest::new("suite.case")
//!     .with_scenarios(vec![Scenario::named("a"), Scenario::named("b")]);
//! let mut log = RunLog::default();
//! test.run(&mut log);
//! assert_eq!(log.started_ids(), ["suite.case(a)", "suite.case(b)"]);
//! ```

pub mod fake;
pub mod report;

pub use fake::{AttrValue, FakeTest};
pub use report::{RunEvent, RunLog};
