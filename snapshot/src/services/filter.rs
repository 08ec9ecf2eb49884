//! Denylist filtering of candidate combinations.

use crate::models::combination::Combination;

/// Applies the denylist to `combinations`, preserving their order.
///
/// A combination is dropped when it contains every flag of some rule (it is
/// a superset of the rule, equality included), or when it consists solely of
/// `supplementary_flag` — a flag that only modifies other selections and is
/// invalid on its own.
#[must_use]
pub fn apply_denylist(
    combinations: Vec<Combination>,
    denylist: &[&[&str]],
    supplementary_flag: &str,
) -> Vec<Combination> {
    combinations
        .into_iter()
        .filter(|combination| {
            !denylist.iter().any(|rule| rule.iter().all(|flag| combination.contains(flag)))
        })
        .filter(|combination| !combination.is_only(supplementary_flag))
        .collect()
}
