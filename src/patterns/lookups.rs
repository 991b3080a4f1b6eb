// Pattern: Repeated Lookups
// Allocating a fresh String per item vs reusing one buffer across the loop.

use std::fmt::Write;

// Bad: a heap allocation for every `to_string`.
pub fn inefficient(n: usize) -> Vec<usize> {
    let mut result = Vec::new();
    for i in 0..n {
        result.push(i.to_string().len());
    }
    result
}

// Good: buffer and output allocated once, outside the loop.
pub fn optimized(n: usize) -> Vec<usize> {
    let mut result = Vec::with_capacity(n);
    let mut buffer = String::with_capacity(20);
    for i in 0..n {
        buffer.clear();
        // Writing into a String cannot fail.
        let _ = write!(buffer, "{}", i);
        result.push(buffer.len());
    }
    result
}
