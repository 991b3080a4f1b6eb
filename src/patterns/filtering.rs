// Pattern: Multi-Pass Filtering
// Three passes with intermediate Vecs vs one fused iterator chain.

// Bad: each stage walks and materializes the whole previous stage.
pub fn inefficient(numbers: &[i64]) -> Vec<i64> {
    let mut evens = Vec::new();
    for &num in numbers {
        if num % 2 == 0 {
            evens.push(num);
        }
    }

    let mut large_evens = Vec::new();
    for &num in &evens {
        if num > 10 {
            large_evens.push(num);
        }
    }

    let mut result = Vec::new();
    for &num in &large_evens {
        result.push(num.pow(2));
    }

    result
}

// Good: iterator adapters fuse into a single loop.
pub fn optimized(numbers: &[i64]) -> Vec<i64> {
    numbers
        .iter()
        .filter(|&&num| num % 2 == 0 && num > 10)
        .map(|&num| num.pow(2))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_values() {
        let numbers: Vec<i64> = (0..20).collect();
        let expected = vec![144, 196, 256, 324];
        assert_eq!(inefficient(&numbers), expected);
        assert_eq!(optimized(&numbers), expected);
    }

    #[test]
    fn test_boundary_ten_excluded() {
        assert!(optimized(&[10]).is_empty());
        assert_eq!(optimized(&[12]), vec![144]);
    }

    #[test]
    fn test_negative_evens_excluded() {
        assert!(inefficient(&[-12, -4]).is_empty());
        assert!(optimized(&[-12, -4]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_equivalent(numbers in prop::collection::vec(-10_000i64..10_000, 0..500)) {
            prop_assert_eq!(inefficient(&numbers), optimized(&numbers));
        }
    }
}
