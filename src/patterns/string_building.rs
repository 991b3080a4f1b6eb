// Pattern: String Building
// Rebuilding an owned string every iteration vs appending into one buffer.

use std::fmt::Write;

/// Number of decimal digits in `n`.
fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Upper bound on the output length, saturating for huge `n`.
fn capacity_hint(n: usize) -> usize {
    n.saturating_mul(digits(n) + 1)
}

// Bad: every iteration copies everything built so far into a new String.
// O(n^2) bytes copied.
pub fn inefficient(n: usize) -> String {
    let mut result = String::new();
    for i in 0..n {
        result = format!("{}{},", result, i);
    }
    result
}

// Good: one allocation sized up front, formatted in place.
pub fn optimized(n: usize) -> String {
    let mut result = String::with_capacity(capacity_hint(n));
    for i in 0..n {
        // Writing into a String cannot fail.
        let _ = write!(result, "{},", i);
    }
    result
}
