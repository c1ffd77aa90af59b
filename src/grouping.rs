//! Key → values table backing `group_by_key`.

use std::collections::HashMap;
use std::collections::hash_map;
use std::hash::Hash;

/// Groups values by key, keeping each key's values in the order they were
/// added.
///
/// Nothing is deduplicated or evicted; the table only grows.
#[derive(Clone, Debug)]
pub struct GroupTable<K, V> {
    groups: HashMap<K, Vec<V>>,
}

impl<K, V> Default for GroupTable<K, V> {
    fn default() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> GroupTable<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the group for `key`, creating the group if needed.
    pub fn add(&mut self, key: K, value: V) {
        self.groups.entry(key).or_default().push(value);
    }

    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for GroupTable<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.add(k, v);
        }
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for GroupTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K, V> IntoIterator for GroupTable<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = hash_map::IntoIter<K, Vec<V>>;

    /// Groups come out in no particular order.
    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
