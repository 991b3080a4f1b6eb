// Pattern: Redundant Key Checks
// Checking membership of keys that come from the map itself vs iterating
// the values directly.

use std::collections::HashMap;
use std::hash::Hash;

// Bad: two contains_key probes and an index lookup per key, all of which
// are known to succeed.
pub fn inefficient<K, V>(map: &HashMap<K, V>) -> Vec<V>
where
    K: Hash + Eq,
    V: Clone,
{
    let mut result = Vec::new();
    for key in map.keys() {
        if map.contains_key(key) {
            if map.contains_key(key) {
                result.push(map[key].clone());
            }
        }
    }
    result
}

// Good: no hashing at all.
pub fn optimized<K, V>(map: &HashMap<K, V>) -> Vec<V>
where
    K: Hash + Eq,
    V: Clone,
{
    map.values().cloned().collect()
}
