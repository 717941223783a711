//! Convenience imports for common scenario workflows.
//!
//! This module is intentionally small and focused on high-frequency types.
//! Prefer importing specialised APIs directly from their owning modules.
//!
//! # Examples
//!
//! ```rust,ignore
//! use scenarios::prelude::*;
//!
//! let expanded: Vec<_> = generate_scenarios(TestTree::test(my_test)).collect();
//! ```

pub use crate::{
    expand::{apply_scenario, apply_scenarios, generate_scenarios},
    instance::TestInstance,
    runner::ScenarioRunner,
    scenario::Scenario,
    suite::TestTree,
};
