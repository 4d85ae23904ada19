use std::hash::Hash;

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::warn;

/// Month axes never exceed twelve entries.
pub(crate) type MonthKeys = SmallVec<[u32; 12]>;

/// Sorted, deduplicated month axis from an arbitrary key iterator.
pub(crate) fn sorted_unique_months(months: impl Iterator<Item = u32>) -> MonthKeys {
    let mut keys: MonthKeys = months.collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

/// Sorted, deduplicated year axis from an arbitrary key iterator.
pub(crate) fn sorted_unique_years(years: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut keys: Vec<i32> = years.collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

/// Collects `(key, value)` pairs into a first-wins lookup.
///
/// The raw files occasionally repeat a period row; the first occurrence is
/// authoritative, matching the first-match lookup the datasets were
/// published against.
pub(crate) fn first_by_key<K, I>(pairs: I) -> IndexMap<K, Option<f64>>
where
    K: Eq + Hash + Copy,
    I: Iterator<Item = (K, Option<f64>)>,
{
    let mut lookup = IndexMap::new();
    let mut duplicate_count = 0_usize;
    for (key, value) in pairs {
        if lookup.contains_key(&key) {
            duplicate_count += 1;
            continue;
        }
        lookup.insert(key, value);
    }
    if duplicate_count > 0 {
        warn!(duplicate_count, "dropped duplicate period rows on join");
    }
    lookup
}

/// Outer-joins a lookup onto a category key axis.
///
/// Every axis key yields exactly one slot; keys absent from the lookup (or
/// present with a null value) yield `None`. This is what keeps every value
/// row the same length as the axis regardless of how ragged the underlying
/// records are.
pub(crate) fn join_by_key<K>(keys: &[K], lookup: &IndexMap<K, Option<f64>>) -> Vec<Option<f64>>
where
    K: Eq + Hash + Copy,
{
    keys.iter()
        .map(|key| lookup.get(key).copied().flatten())
        .collect()
}
