// Pattern: Nested Loops
// Recomputing loop-invariant values in the inner loop vs hoisting them.

use itertools::iproduct;

// Bad: both doublings redone for every (i, j), and the output Vec grows
// by reallocation.
pub fn inefficient(data: &[i64]) -> Vec<i64> {
    let mut result = Vec::new();
    for i in 0..data.len() {
        for j in 0..data.len() {
            let value = data[i] * 2 + data[j] * 2;
            result.push(value);
        }
    }
    result
}

// Good: double once, then a single pass over the cartesian product.
pub fn optimized(data: &[i64]) -> Vec<i64> {
    let doubled: Vec<i64> = data.iter().map(|x| x * 2).collect();
    let mut result = Vec::with_capacity(doubled.len() * doubled.len());
    result.extend(iproduct!(doubled.iter(), doubled.iter()).map(|(a, b)| a + b));
    result
}
