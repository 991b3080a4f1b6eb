// Pattern: Membership Search
// Tracking seen items in a Vec vs a hash set.

use rustc_hash::FxHashSet;

// Bad: `contains` on a Vec scans every seen item, O(n^2) overall.
pub fn inefficient(items: &[i64], target: i64) -> Vec<i64> {
    let mut seen = Vec::new();
    let mut found = Vec::new();
    for &item in items {
        if seen.contains(&item) {
            continue;
        }
        seen.push(item);
        if item == target {
            found.push(item);
        }
    }
    found
}

// Good: O(1) average lookups.
pub fn optimized(items: &[i64], target: i64) -> Vec<i64> {
    let mut seen = FxHashSet::default();
    seen.reserve(items.len());
    let mut found = Vec::new();
    for &item in items {
        // insert returns false for repeats
        if !seen.insert(item) {
            continue;
        }
        if item == target {
            found.push(item);
        }
    }
    found
}
