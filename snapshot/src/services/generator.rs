//! Combination sources and the power-set enumeration behind them.

use crate::models::combination::Combination;

/// One declarative source of candidate combinations.
///
/// The production pipeline concatenates several sources before the denylist
/// is applied, which keeps every source independently testable.
#[derive(Debug)]
pub enum CombinationSource<'a> {
    /// Every non-empty subset of `flags`, as subsequences in catalog order.
    PowerSet { flags: &'a [&'a str] },
    /// Hand-authored combinations, taken verbatim.
    Fixed { combinations: &'a [&'a [&'a str]] },
    /// Every non-empty subset of `flags` with `suffix` appended, plus the
    /// suffix on its own.
    SuffixedPowerSet { flags: &'a [&'a str], suffix: &'a str },
}

impl CombinationSource<'_> {
    /// Expands the source into its combinations.
    #[must_use]
    pub fn expand(&self) -> Vec<Combination> {
        match self {
            Self::PowerSet { flags } => power_set(flags),
            Self::Fixed { combinations } => combinations
                .iter()
                .map(|flags| Combination::new(flags.iter().copied()))
                .collect(),
            Self::SuffixedPowerSet { flags, suffix } => {
                let mut combinations: Vec<_> =
                    power_set(flags).iter().map(|base| base.with_flag(suffix)).collect();
                combinations.push(Combination::new([*suffix]));
                combinations
            },
        }
    }
}

/// Expands the sources and concatenates their output in source order.
#[must_use]
pub fn collect(sources: &[CombinationSource<'_>]) -> Vec<Combination> {
    sources.iter().flat_map(CombinationSource::expand).collect()
}

/// Enumerates every non-empty subset of `flags`.
///
/// Each selector in `1..2^N` is read as a bitmask over the flag positions,
/// which makes the enumeration exhaustive, duplicate-free and deterministic
/// while preserving the catalog order inside every combination.
#[must_use]
pub fn power_set(flags: &[&str]) -> Vec<Combination> {
    let mut combinations = Vec::with_capacity((1_usize << flags.len()) - 1);

    for selector in 1..1_usize << flags.len() {
        let picked = flags
            .iter()
            .enumerate()
            .filter(|(position, _)| selector & (1 << position) != 0)
            .map(|(_, flag)| *flag);
        combinations.push(Combination::new(picked));
    }

    combinations
}

#[cfg(test)]
mod tests {
    use super::{CombinationSource, collect, power_set};
    use crate::models::combination::Combination;
    use std::collections::HashSet;

    #[test]
    fn power_set_produces_every_non_empty_subset() {
        for n in 1..=6_usize {
            let flags: Vec<String> = (0..n).map(|i| format!("flag{i}")).collect();
            let borrowed: Vec<&str> = flags.iter().map(String::as_str).collect();

            let combinations = power_set(&borrowed);
            assert_eq!(combinations.len(), (1 << n) - 1);

            let names: HashSet<String> =
                combinations.iter().map(Combination::project_name).collect();
            assert_eq!(names.len(), combinations.len(), "duplicate subsets for n={n}");
        }
    }

    #[test]
    fn power_set_follows_the_binary_index_convention() {
        let combinations = power_set(&["a", "b", "c"]);

        let expected: Vec<Combination> = [
            vec!["a"],
            vec!["b"],
            vec!["a", "b"],
            vec!["c"],
            vec!["a", "c"],
            vec!["b", "c"],
            vec!["a", "b", "c"],
        ]
        .into_iter()
        .map(Combination::new)
        .collect();

        assert_eq!(combinations, expected);
    }

    #[test]
    fn power_set_preserves_catalog_order_within_combinations() {
        let catalog = ["typescript", "jsx", "router", "pinia"];

        for combination in power_set(&catalog) {
            let positions: Vec<usize> = combination
                .flags()
                .iter()
                .map(|flag| catalog.iter().position(|c| *c == flag.as_str()).unwrap())
                .collect();
            assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn fixed_source_passes_combinations_through() {
        let source = CombinationSource::Fixed {
            combinations: &[&["default"], &["bare", "default"]],
        };

        assert_eq!(
            source.expand(),
            vec![Combination::new(["default"]), Combination::new(["bare", "default"])]
        );
    }

    #[test]
    fn suffixed_source_appends_the_suffix_and_adds_it_alone() {
        let source = CombinationSource::SuffixedPowerSet {
            flags: &["typescript", "jsx", "router", "pinia"],
            suffix: "with-tests",
        };
        let combinations = source.expand();

        // 2^4 - 1 suffixed subsets plus the suffix by itself.
        assert_eq!(combinations.len(), 16);
        assert!(combinations.iter().all(|c| c.flags().last().unwrap() == "with-tests"));
        assert_eq!(combinations.last().unwrap(), &Combination::new(["with-tests"]));
    }

    #[test]
    fn collect_concatenates_sources_in_order() {
        let combinations = collect(&[
            CombinationSource::Fixed { combinations: &[&["default"]] },
            CombinationSource::PowerSet { flags: &["a", "b"] },
        ]);

        assert_eq!(
            combinations,
            vec![
                Combination::new(["default"]),
                Combination::new(["a"]),
                Combination::new(["b"]),
                Combination::new(["a", "b"]),
            ]
        );
    }
}
