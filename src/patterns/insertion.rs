// Pattern: Front Insertion
// Vec::insert(0, _) vs VecDeque::push_front.

use std::collections::VecDeque;

// Bad: every insert shifts the whole Vec right by one.
pub fn inefficient(n: usize) -> Vec<usize> {
    let mut result = Vec::new();
    for i in 0..n {
        result.insert(0, i);
    }
    result
}

// Good: push_front is O(1) on a ring buffer.
pub fn optimized(n: usize) -> Vec<usize> {
    let mut result = VecDeque::with_capacity(n);
    for i in 0..n {
        result.push_front(i);
    }
    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_order() {
        assert_eq!(inefficient(4), vec![3, 2, 1, 0]);
        assert_eq!(optimized(4), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_equivalent() {
        assert_eq!(inefficient(1000), optimized(1000));
    }

    #[test]
    fn test_zero() {
        assert!(inefficient(0).is_empty());
        assert!(optimized(0).is_empty());
    }
}
