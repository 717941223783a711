//! Nested test collections and leaf flattening.
//!
//! [`TestTree`] represents what a harness hands the expander: a single test
//! or an arbitrarily nested collection of collections and tests. Its
//! iterator visits leaf tests in depth-first encounter order, which is the
//! order multiplication preserves.

/// A single test or a nested collection of tests.
#[derive(Clone, Debug, PartialEq)]
pub enum TestTree<T> {
    /// One leaf test instance.
    Test(T),
    /// An ordered collection of subtrees.
    Suite(Vec<TestTree<T>>),
}

impl<T> TestTree<T> {
    /// Wrap a single test as a tree.
    pub fn test(test: T) -> Self { Self::Test(test) }

    /// Build a suite from an ordered collection of subtrees.
    pub fn suite(children: impl IntoIterator<Item = TestTree<T>>) -> Self {
        Self::Suite(children.into_iter().collect())
    }

    /// Build a flat suite of leaf tests.
    pub fn flat(tests: impl IntoIterator<Item = T>) -> Self {
        Self::Suite(tests.into_iter().map(Self::Test).collect())
    }
}

impl<T> FromIterator<TestTree<T>> for TestTree<T> {
    fn from_iter<I: IntoIterator<Item = TestTree<T>>>(iter: I) -> Self { Self::suite(iter) }
}

impl<T> IntoIterator for TestTree<T> {
    type Item = T;
    type IntoIter = Leaves<T>;

    fn into_iter(self) -> Leaves<T> { Leaves { stack: vec![self] } }
}

/// Depth-first iterator over the leaf tests of a [`TestTree`].
#[derive(Debug)]
pub struct Leaves<T> {
    stack: Vec<TestTree<T>>,
}

impl<T> Iterator for Leaves<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while let Some(tree) = self.stack.pop() {
            match tree {
                TestTree::Test(test) => return Some(test),
                TestTree::Suite(children) => self.stack.extend(children.into_iter().rev()),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::TestTree;

    #[test]
    fn leaves_visit_nested_suites_in_encounter_order() {
        let tree = TestTree::suite([
            TestTree::test(1),
            TestTree::suite([
                TestTree::test(2),
                TestTree::suite([TestTree::test(3)]),
                TestTree::test(4),
            ]),
            TestTree::test(5),
        ]);
        let leaves: Vec<i32> = tree.into_iter().collect();
        assert_eq!(leaves, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn single_test_yields_itself() {
        let leaves: Vec<&str> = TestTree::test("only").into_iter().collect();
        assert_eq!(leaves, ["only"]);
    }

    #[test]
    fn empty_suite_yields_nothing() {
        let tree: TestTree<u8> = TestTree::suite([]);
        assert_eq!(tree.into_iter().count(), 0);
    }
}
