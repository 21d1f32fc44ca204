use crate::utils::{UtilsError, count_digits, divisors, pow10, prime_factors};

#[test]
fn test_count_digits() {
    assert_eq!(count_digits(1), Ok(1));
    assert_eq!(count_digits(9), Ok(1));
    assert_eq!(count_digits(10), Ok(2));
    assert_eq!(count_digits(999), Ok(3));
    assert_eq!(count_digits(1000), Ok(4));
    assert_eq!(count_digits(u64::MAX), Ok(20));
}

#[test]
fn test_count_digits_rejects_zero() {
    assert_eq!(count_digits(0), Err(UtilsError::ZeroHasNoDigits));
}

#[test]
fn test_pow10() {
    assert_eq!(pow10(0), Ok(1));
    assert_eq!(pow10(3), Ok(1000));
    assert_eq!(pow10(19), Ok(10_000_000_000_000_000_000));
    assert_eq!(pow10(20), Err(UtilsError::DigitsOutOfRange(20)));
}

#[test]
fn test_prime_factors() {
    assert_eq!(prime_factors(1), Vec::<u64>::new());
    assert_eq!(prime_factors(7), vec![7]);
    assert_eq!(prime_factors(12), vec![2, 2, 3]);
    assert_eq!(prime_factors(360), vec![2, 2, 2, 3, 3, 5]);
}

#[test]
fn test_divisors() {
    assert_eq!(divisors(1), vec![1]);
    assert_eq!(divisors(7), vec![1, 7]);
    assert_eq!(divisors(12), vec![1, 2, 3, 4, 6, 12]);
    assert_eq!(divisors(36), vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
    assert!(divisors(0).is_empty());
}

#[test]
fn test_divisors_multiply_back() {
    let n = 720;
    for d in divisors(n) {
        assert_eq!(n % d, 0);
    }
    assert_eq!(divisors(n).len(), 30);
}
