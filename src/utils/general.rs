use std::hash::Hash;

use indexmap::IndexMap;

/// Returns the entries of `working` whose values differ from the value stored
/// under the same key in `reference`.
///
/// Only keys of `reference` are examined, in `reference`'s order. Keys missing
/// from `working` are skipped.
pub fn dict_diff<K, V>(reference: &IndexMap<K, V>, working: &IndexMap<K, V>) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: PartialEq + Clone,
{
    reference
        .iter()
        .filter_map(|(key, reference_value)| match working.get(key) {
            Some(working_value) if working_value != reference_value => {
                Some((key.clone(), working_value.clone()))
            }
            _ => None,
        })
        .collect()
}
