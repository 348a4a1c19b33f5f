//! Key-ordered map helpers over `Option<&BTreeMap<K, V>>`.
//!
//! The mutation helpers take `Option<&mut BTreeMap<K, V>>` and answer `None`
//! without doing anything when the map is absent.

use std::collections::BTreeMap;

pub fn is_null_or_empty<K, V>(map: Option<&BTreeMap<K, V>>) -> bool {
    map.map_or(true, BTreeMap::is_empty)
}

pub fn is_not_null_or_empty<K, V>(map: Option<&BTreeMap<K, V>>) -> bool {
    !is_null_or_empty(map)
}

pub fn size_or_zero<K, V>(map: Option<&BTreeMap<K, V>>) -> usize {
    map.map_or(0, BTreeMap::len)
}

pub fn empty_if_null<K: Clone, V: Clone>(map: Option<&BTreeMap<K, V>>) -> BTreeMap<K, V> {
    map.cloned().unwrap_or_default()
}

pub fn null_if_empty<K, V>(map: Option<&BTreeMap<K, V>>) -> Option<&BTreeMap<K, V>> {
    map.filter(|m| !m.is_empty())
}

pub fn get_or_null<'a, K: Ord, V>(map: Option<&'a BTreeMap<K, V>>, key: &K) -> Option<&'a V> {
    map?.get(key)
}

pub fn get_or_default<K: Ord, V: Clone>(map: Option<&BTreeMap<K, V>>, key: &K, default: V) -> V {
    get_or_null(map, key).cloned().unwrap_or(default)
}

pub fn keys_or_empty<K: Clone, V>(map: Option<&BTreeMap<K, V>>) -> Vec<K> {
    map.map(|m| m.keys().cloned().collect()).unwrap_or_default()
}

pub fn values_or_empty<K, V: Clone>(map: Option<&BTreeMap<K, V>>) -> Vec<V> {
    map.map(|m| m.values().cloned().collect()).unwrap_or_default()
}

pub fn entries_or_empty<K: Clone, V: Clone>(map: Option<&BTreeMap<K, V>>) -> Vec<(K, V)> {
    map.map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default()
}

pub fn contains_key<K: Ord, V>(map: Option<&BTreeMap<K, V>>, key: &K) -> bool {
    map.is_some_and(|m| m.contains_key(key))
}

pub fn contains_value<K, V: PartialEq>(map: Option<&BTreeMap<K, V>>, value: &V) -> bool {
    map.is_some_and(|m| m.values().any(|v| v == value))
}

/// Re-key every entry. When two entries map to the same key the later one,
/// in key order, wins.
pub fn map_keys<K, V: Clone, R: Ord, F: FnMut(&K, &V) -> R>(
    map: Option<&BTreeMap<K, V>>,
    mut transform: F,
) -> BTreeMap<R, V> {
    map.into_iter()
        .flatten()
        .map(|(k, v)| (transform(k, v), v.clone()))
        .collect()
}

pub fn map_values<K: Ord + Clone, V, R, F: FnMut(&K, &V) -> R>(
    map: Option<&BTreeMap<K, V>>,
    mut transform: F,
) -> BTreeMap<K, R> {
    map.into_iter()
        .flatten()
        .map(|(k, v)| (k.clone(), transform(k, v)))
        .collect()
}

pub fn filter_keys<K: Ord + Clone, V: Clone, P: FnMut(&K) -> bool>(
    map: Option<&BTreeMap<K, V>>,
    mut predicate: P,
) -> BTreeMap<K, V> {
    filter_entries(map, |k, _| predicate(k))
}

pub fn filter_values<K: Ord + Clone, V: Clone, P: FnMut(&V) -> bool>(
    map: Option<&BTreeMap<K, V>>,
    mut predicate: P,
) -> BTreeMap<K, V> {
    filter_entries(map, |_, v| predicate(v))
}

pub fn filter_entries<K: Ord + Clone, V: Clone, P: FnMut(&K, &V) -> bool>(
    map: Option<&BTreeMap<K, V>>,
    mut predicate: P,
) -> BTreeMap<K, V> {
    map.into_iter()
        .flatten()
        .filter(|(k, v)| predicate(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Build a map from the present pairs; later pairs win.
pub fn map_of_not_null<K: Ord, V, I>(pairs: I) -> BTreeMap<K, V>
where
    I: IntoIterator<Item = Option<(K, V)>>,
{
    pairs.into_iter().flatten().collect()
}

// ============================================================================
// Mutation
// ============================================================================

/// Value for `key`, inserting `default()` first when missing.
pub fn get_or_put<K: Ord, V: Clone, F: FnOnce() -> V>(
    map: Option<&mut BTreeMap<K, V>>,
    key: K,
    default: F,
) -> Option<V> {
    Some(map?.entry(key).or_insert_with(default).clone())
}

/// Insert only when `key` is missing. Returns the value that was already
/// there, or `None` when the insert happened.
pub fn put_if_absent<K: Ord, V: Clone>(map: Option<&mut BTreeMap<K, V>>, key: K, value: V) -> Option<V> {
    let map = map?;
    if let Some(existing) = map.get(&key) {
        return Some(existing.clone());
    }
    map.insert(key, value);
    None
}

pub fn remove_or_null<K: Ord, V>(map: Option<&mut BTreeMap<K, V>>, key: &K) -> Option<V> {
    map?.remove(key)
}

/// Value for `key`, computing and storing it from the key when missing.
pub fn compute_if_absent<K: Ord + Clone, V: Clone, F: FnOnce(&K) -> V>(
    map: Option<&mut BTreeMap<K, V>>,
    key: K,
    mapping: F,
) -> Option<V> {
    let map = map?;
    let value = match map.get(&key) {
        Some(existing) => return Some(existing.clone()),
        None => mapping(&key),
    };
    map.insert(key, value.clone());
    Some(value)
}

/// Replace the value for an existing `key`; `None` when the key is missing.
pub fn compute_if_present<K: Ord, V: Clone, F: FnOnce(&K, &V) -> V>(
    map: Option<&mut BTreeMap<K, V>>,
    key: &K,
    remapping: F,
) -> Option<V> {
    let map = map?;
    let slot = map.get_mut(key)?;
    *slot = remapping(key, slot);
    Some(slot.clone())
}

/// Recompute the value for `key` from the current one. Returning `None`
/// removes the entry.
pub fn compute<K: Ord, V: Clone, F: FnOnce(&K, Option<&V>) -> Option<V>>(
    map: Option<&mut BTreeMap<K, V>>,
    key: K,
    remapping: F,
) -> Option<V> {
    let map = map?;
    match remapping(&key, map.get(&key)) {
        Some(value) => {
            map.insert(key, value.clone());
            Some(value)
        }
        None => {
            map.remove(&key);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BTreeMap<String, i32> {
        BTreeMap::from([("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)])
    }

    #[test]
    fn absent_maps_read_as_empty() {
        assert!(is_null_or_empty::<String, i32>(None));
        assert_eq!(size_or_zero::<String, i32>(None), 0);
        assert!(keys_or_empty::<String, i32>(None).is_empty());
        assert!(!contains_key::<String, i32>(None, &"a".to_string()));
        assert!(null_if_empty(Some(&BTreeMap::<u8, u8>::new())).is_none());
    }

    #[test]
    fn lookups() {
        let m = sample();
        assert_eq!(get_or_null(Some(&m), &"b".to_string()), Some(&2));
        assert_eq!(get_or_default(Some(&m), &"z".to_string(), 0), 0);
        assert!(contains_value(Some(&m), &3));
        assert_eq!(keys_or_empty(Some(&m)), vec!["a", "b", "c"]);
        assert_eq!(values_or_empty(Some(&m)), vec![1, 2, 3]);
    }

    #[test]
    fn transforms() {
        let m = sample();
        let doubled = map_values(Some(&m), |_, v| v * 2);
        assert_eq!(doubled["c"], 6);

        let upper = map_keys(Some(&m), |k, _| k.to_uppercase());
        assert_eq!(upper.get("A"), Some(&1));

        let odd = filter_values(Some(&m), |v| v % 2 == 1);
        assert_eq!(odd.len(), 2);
        assert_eq!(filter_keys(Some(&m), |k| k == "b").len(), 1);
    }

    #[test]
    fn mutation_helpers() {
        let mut m = sample();
        assert_eq!(get_or_put(Some(&mut m), "d".to_string(), || 4), Some(4));
        assert_eq!(put_if_absent(Some(&mut m), "a".to_string(), 9), Some(1));
        assert_eq!(put_if_absent(Some(&mut m), "e".to_string(), 5), None);
        assert_eq!(m["e"], 5);
        assert_eq!(compute_if_absent(Some(&mut m), "f".to_string(), |k| k.len() as i32), Some(1));
        assert_eq!(compute_if_present(Some(&mut m), &"a".to_string(), |_, v| v + 10), Some(11));
        assert_eq!(compute_if_present(Some(&mut m), &"zz".to_string(), |_, v| v + 10), None);
        assert_eq!(compute(Some(&mut m), "b".to_string(), |_, _| None), None);
        assert!(!m.contains_key("b"));
        assert_eq!(remove_or_null(Some(&mut m), &"c".to_string()), Some(3));
        assert_eq!(get_or_put(None, "x".to_string(), || 1), None);
    }

    #[test]
    fn map_of_not_null_skips_absent_pairs() {
        let m = map_of_not_null([Some(("a", 1)), None, Some(("b", 2))]);
        assert_eq!(m.len(), 2);
    }
}
