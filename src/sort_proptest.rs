//! Property-based tests for dependency ordering.
//!
//! These tests use proptest to generate random dependency graphs and verify
//! that the sorter's guarantees hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::error::Error;
    use crate::graph;
    use crate::library::{Fragment, Library, LibrarySet};
    use crate::sort;
    use proptest::prelude::*;

    fn item_name(index: usize) -> String {
        format!("item{:02}", index)
    }

    fn body_for(dependencies: &[usize]) -> String {
        let mut body = String::from("/**\n");
        for &dep in dependencies {
            body.push_str(&format!(" * @depends {}\n", item_name(dep)));
        }
        body.push_str(" */\n");
        body
    }

    fn library_set(fragments: Vec<Fragment>) -> LibrarySet {
        let library = Library::from_fragments("lib", fragments).unwrap();
        LibrarySet::from([("lib".to_string(), library)])
    }

    fn sort_names(libraries: &LibrarySet) -> Result<Vec<String>, Error> {
        let graphs = graph::build(libraries)?;
        Ok(sort::sorted_fragments(&graphs["lib"])?
            .into_iter()
            .map(|f| f.name.clone())
            .collect())
    }

    /// A random DAG: item `i` may depend on item `j` only when `j` ranks lower.
    fn dag() -> impl Strategy<Value = Vec<Vec<usize>>> {
        (1usize..25)
            .prop_flat_map(|n| {
                (
                    prop::collection::vec(0u32..1000, n),
                    prop::collection::vec(prop::collection::vec(any::<bool>(), n), n),
                )
            })
            .prop_map(|(rank, edges)| -> Vec<Vec<usize>> {
                let n = rank.len();
                (0..n)
                    .map(|i| {
                        (0..n)
                            .filter(|&j| edges[i][j] && (rank[j], j) < (rank[i], i))
                            .collect()
                    })
                    .collect()
            })
    }

    /// Item indices of a cycle (length >= 2) and the total item count.
    fn cycle() -> impl Strategy<Value = (Vec<usize>, usize)> {
        (2usize..20)
            .prop_flat_map(|n| {
                let members = Just((0..n).collect::<Vec<_>>()).prop_shuffle();
                (members, 2..=n, Just(n))
            })
            .prop_map(|(members, len, n)| (members[..len].to_vec(), n))
    }

    proptest! {
        /// Property: every item appears exactly once
        #[test]
        fn sort_emits_each_item_once(deps in dag()) {
            let fragments = deps
                .iter()
                .enumerate()
                .map(|(i, d)| Fragment::new(item_name(i), body_for(d)))
                .collect();
            let names = sort_names(&library_set(fragments)).unwrap();

            let mut seen = names.clone();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), deps.len());
            prop_assert_eq!(names.len(), deps.len());
        }

        /// Property: every dependency comes before its dependent
        #[test]
        fn sort_places_dependencies_first(deps in dag()) {
            let fragments = deps
                .iter()
                .enumerate()
                .map(|(i, d)| Fragment::new(item_name(i), body_for(d)))
                .collect();
            let names = sort_names(&library_set(fragments)).unwrap();
            let position = |i: usize| names.iter().position(|n| *n == item_name(i)).unwrap();

            for (item, dependencies) in deps.iter().enumerate() {
                for &dep in dependencies {
                    prop_assert!(
                        position(dep) < position(item),
                        "{} should precede {} in {:?}",
                        item_name(dep),
                        item_name(item),
                        names
                    );
                }
            }
        }

        /// Property: sorting an already sorted sequence keeps its order
        #[test]
        fn sort_is_idempotent(deps in dag()) {
            let fragments: Vec<Fragment> = deps
                .iter()
                .enumerate()
                .map(|(i, d)| Fragment::new(item_name(i), body_for(d)))
                .collect();
            let first = sort_names(&library_set(fragments.clone())).unwrap();

            let resorted_input: Vec<Fragment> = first
                .iter()
                .map(|name| fragments.iter().find(|f| &f.name == name).unwrap().clone())
                .collect();
            let second = sort_names(&library_set(resorted_input)).unwrap();

            prop_assert_eq!(first, second);
        }

        /// Property: any cycle is reported, naming one of its members
        #[test]
        fn sort_detects_cycles((members, n) in cycle()) {
            let mut deps = vec![Vec::new(); n];
            for (k, &member) in members.iter().enumerate() {
                deps[member].push(members[(k + 1) % members.len()]);
            }
            let fragments = deps
                .iter()
                .enumerate()
                .map(|(i, d)| Fragment::new(item_name(i), body_for(d)))
                .collect();

            match sort_names(&library_set(fragments)) {
                Err(Error::CyclicDependency { item, library }) => {
                    prop_assert_eq!(library, "lib");
                    prop_assert!(
                        members.iter().any(|&m| item_name(m) == item),
                        "{} is not part of the cycle {:?}",
                        item,
                        members
                    );
                }
                other => prop_assert!(false, "expected a cycle error, got {:?}", other),
            }
        }
    }
}
