//! The scenario expander.
//!
//! Turns one scenario-bearing test definition into one clone per scenario.
//! [`apply_scenario`] is the single-clone primitive, [`apply_scenarios`]
//! maps it lazily over a scenario list, and [`generate_scenarios`] walks a
//! whole collection, multiplying scenario-bearing leaves and passing the
//! rest through untouched.

use tracing::debug;

use crate::{instance::TestInstance, scenario::Scenario};

/// Produce one clone of `test` with `scenario` applied.
///
/// The clone's identity is the original identity with `(name)` appended. A
/// non-empty short description gains the same suffix, separated by a space.
/// Every parameter pair is then bound on the clone in declaration order,
/// overwriting any existing binding. `test` itself is never mutated.
#[must_use]
pub fn apply_scenario<T: TestInstance>(scenario: &Scenario<T::Value>, test: &T) -> T {
    let suffix = scenario.id_suffix();
    let mut clone = test.clone_with_id(format!("{}{suffix}", test.id()));
    if let Some(description) = test.description().filter(|text| !text.is_empty()) {
        clone.set_description(format!("{description} {suffix}"));
    }
    for (name, value) in scenario.parameters() {
        clone.set_attribute(name, value.clone());
    }
    debug!(id = %clone.id(), scenario = %scenario, "applied scenario");
    clone
}

/// Lazily produce one clone of `test` per scenario, in declaration order.
///
/// The returned iterator is one-shot and borrows both inputs; each `next()`
/// call applies exactly one scenario, so callers may interleave consumption
/// with execution instead of materialising every clone up front.
pub fn apply_scenarios<'a, T: TestInstance>(
    scenarios: &'a [Scenario<T::Value>],
    test: &'a T,
) -> impl Iterator<Item = T> + 'a {
    scenarios
        .iter()
        .map(move |scenario| apply_scenario(scenario, test))
}

/// Walk `tests` and multiply every scenario-bearing leaf.
///
/// Leaves with an empty scenario list pass through unchanged, identity and
/// attributes untouched. Leaves with scenarios are consumed: one clone per
/// scenario is yielded in its place, each with its own scenario list
/// cleared, so feeding the output through a second pass is the identity.
///
/// Accepts any collection of test instances; pass a [`TestTree`] for a
/// single test or a nested suite.
///
/// [`TestTree`]: crate::suite::TestTree
pub fn generate_scenarios<I>(tests: I) -> GenerateScenarios<I::IntoIter>
where
    I: IntoIterator,
    I::Item: TestInstance,
{
    GenerateScenarios {
        source: tests.into_iter(),
        current: None,
    }
}

/// Lazy iterator returned by [`generate_scenarios`].
///
/// At most one source test is held at a time; its clones are produced one
/// per `next()` call before the next source test is pulled.
#[derive(Debug)]
pub struct GenerateScenarios<I: Iterator> {
    source: I,
    current: Option<Expansion<I::Item>>,
}

#[derive(Debug)]
struct Expansion<T> {
    test: T,
    next_index: usize,
}

impl<I> Iterator for GenerateScenarios<I>
where
    I: Iterator,
    I::Item: TestInstance,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            if let Some(expansion) = self.current.as_mut() {
                let index = expansion.next_index;
                expansion.next_index += 1;
                if let Some(scenario) = expansion.test.scenarios().get(index) {
                    let mut clone = apply_scenario(scenario, &expansion.test);
                    clone.clear_scenarios();
                    return Some(clone);
                }
                self.current = None;
            }

            let test = self.source.next()?;
            if test.scenarios().is_empty() {
                return Some(test);
            }
            self.current = Some(Expansion {
                test,
                next_index: 0,
            });
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.current.is_some());
        (self.source.size_hint().0.saturating_sub(pending), None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rstest::rstest;

    use super::{apply_scenario, apply_scenarios, generate_scenarios};
    use crate::{instance::TestInstance, scenario::Scenario, suite::TestTree};

    #[derive(Clone, Debug, PartialEq)]
    struct Probe {
        id: String,
        description: Option<String>,
        attributes: BTreeMap<String, u32>,
        scenarios: Vec<Scenario<u32>>,
    }

    impl Probe {
        fn new(id: &str) -> Self {
            Self {
                id: id.to_owned(),
                description: None,
                attributes: BTreeMap::new(),
                scenarios: Vec::new(),
            }
        }

        fn with_scenarios(mut self, scenarios: Vec<Scenario<u32>>) -> Self {
            self.scenarios = scenarios;
            self
        }
    }

    impl TestInstance for Probe {
        type Value = u32;

        fn id(&self) -> &str { &self.id }

        fn clone_with_id(&self, id: String) -> Self {
            Self {
                id,
                ..self.clone()
            }
        }

        fn description(&self) -> Option<&str> { self.description.as_deref() }

        fn set_description(&mut self, description: String) {
            self.description = Some(description);
        }

        fn set_attribute(&mut self, name: &str, value: u32) {
            self.attributes.insert(name.to_owned(), value);
        }

        fn scenarios(&self) -> &[Scenario<u32>] { &self.scenarios }

        fn clear_scenarios(&mut self) { self.scenarios.clear(); }
    }

    #[test]
    fn apply_scenario_sets_id_and_attributes() {
        let test = Probe::new("module.case");
        let scenario = Scenario::named("demo").param("foo", 7);

        let clone = apply_scenario(&scenario, &test);

        assert_eq!(clone.id(), "module.case(demo)");
        assert_eq!(clone.attributes.get("foo"), Some(&7));
        assert_eq!(test.id(), "module.case");
        assert!(test.attributes.is_empty());
    }

    #[rstest]
    #[case::suffixed(Some("checks the frobnicator"), Some("checks the frobnicator (demo)"))]
    #[case::empty_kept_unsuffixed(Some(""), Some(""))]
    #[case::absent_left_unset(None, None)]
    fn apply_scenario_suffixes_only_real_descriptions(
        #[case] original: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let mut test = Probe::new("module.case");
        test.description = original.map(str::to_owned);
        let scenario: Scenario<u32> = Scenario::named("demo");

        let clone = apply_scenario(&scenario, &test);

        assert_eq!(clone.description.as_deref(), expected);
        assert_eq!(test.description.as_deref(), original);
    }

    #[test]
    fn apply_scenario_overwrites_existing_attributes() {
        let mut test = Probe::new("module.case");
        test.attributes.insert("foo".to_owned(), 1);
        let scenario = Scenario::named("demo").param("foo", 2);

        let clone = apply_scenario(&scenario, &test);

        assert_eq!(clone.attributes.get("foo"), Some(&2));
        assert_eq!(test.attributes.get("foo"), Some(&1));
    }

    #[test]
    fn apply_scenarios_preserves_declaration_order() {
        let test = Probe::new("t");
        let scenarios = vec![Scenario::named("1"), Scenario::named("2")];

        let ids: Vec<String> = apply_scenarios(&scenarios, &test)
            .map(|clone| clone.id)
            .collect();

        assert_eq!(ids, ["t(1)", "t(2)"]);
    }

    #[test]
    fn apply_scenarios_leaves_scenario_list_on_clones() {
        // Clearing is generate_scenarios' job; the plain mapping keeps the
        // inherited list intact.
        let scenarios = vec![Scenario::named("demo")];
        let test = Probe::new("t").with_scenarios(scenarios.clone());

        let clones: Vec<Probe> = apply_scenarios(&scenarios, &test).collect();

        assert_eq!(clones[0].scenarios, scenarios);
    }

    #[test]
    fn generate_scenarios_passes_plain_tests_through() {
        let test = Probe::new("plain");

        let out: Vec<Probe> = generate_scenarios(TestTree::test(test.clone())).collect();

        assert_eq!(out, [test]);
    }

    #[test]
    fn generate_scenarios_clears_clone_scenario_lists() {
        let test = Probe::new("t").with_scenarios(vec![
            Scenario::named("1").param("foo", 1).param("bar", 2),
            Scenario::named("2").param("foo", 2).param("bar", 4),
        ]);

        let out: Vec<Probe> = generate_scenarios(TestTree::test(test)).collect();

        assert_eq!(out.len(), 2);
        for clone in &out {
            assert!(clone.scenarios.is_empty());
        }
        assert_eq!(out[0].attributes.get("foo"), Some(&1));
        assert_eq!(out[1].attributes.get("bar"), Some(&4));
    }

    #[test]
    fn generate_scenarios_is_lazy() {
        let test = Probe::new("t")
            .with_scenarios(vec![Scenario::named("1"), Scenario::named("2")]);

        let mut stream = generate_scenarios(TestTree::test(test));

        assert_eq!(stream.next().map(|clone| clone.id), Some("t(1)".to_owned()));
        assert_eq!(stream.next().map(|clone| clone.id), Some("t(2)".to_owned()));
        assert_eq!(stream.next(), None);
    }
}
