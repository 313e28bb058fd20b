use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PrimeError {
    /// Primality is only defined for values of at least 2
    #[error("primality is undefined for {0}, expected a value >= 2")]
    InvalidInput(usize),
}

/// Trial division up to `floor(sqrt(x))`, odd divisors only
///
/// # Errors
///
/// Returns [`PrimeError::InvalidInput`] for `x < 2`
pub fn is_prime(x: usize) -> Result<bool, PrimeError> {
    match x {
        0 | 1 => Err(PrimeError::InvalidInput(x)),
        2 | 3 => Ok(true),
        x if x % 2 == 0 => Ok(false),
        x => {
            let mut i = 3;
            // `i <= x / i` is `i * i <= x` without the overflow
            while i <= x / i {
                if x % i == 0 {
                    return Ok(false);
                }
                i += 2;
            }
            Ok(true)
        }
    }
}

/// Returns the smallest prime `>= x` (and never less than 2),
/// or `None` if the scan runs past `usize::MAX`
pub fn next_prime(x: usize) -> Option<usize> {
    let mut candidate = x.max(2);
    while !matches!(is_prime(candidate), Ok(true)) {
        candidate = candidate.checked_add(1)?;
    }
    Some(candidate)
}

#[cfg(test)]
mod test {
    use super::{PrimeError, is_prime, next_prime};

    #[test]
    fn rejects_small_inputs() {
        assert_eq!(is_prime(0), Err(PrimeError::InvalidInput(0)));
        assert_eq!(is_prime(1), Err(PrimeError::InvalidInput(1)));
    }

    #[test]
    fn small_primes() {
        let primes: Vec<usize> = (2..60).filter(|&x| is_prime(x).unwrap()).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]
        );
    }

    #[test]
    fn squares_of_primes_are_composite() {
        for p in [3usize, 5, 7, 11, 13, 97] {
            assert_eq!(is_prime(p * p), Ok(false), "{p}^2");
        }
    }

    #[test]
    fn next() {
        assert_eq!(next_prime(0), Some(2));
        assert_eq!(next_prime(2), Some(2));
        assert_eq!(next_prime(53), Some(53));
        assert_eq!(next_prime(54), Some(59));
        // first growth step of a 53 slot table
        assert_eq!(next_prime(53 + 37), Some(97));
        assert_eq!(next_prime(7919), Some(7919));
        assert_eq!(next_prime(7920), Some(7927));
    }

    #[test]
    fn next_past_usize_max() {
        // usize::MAX - 1 is even and usize::MAX is divisible by 3
        assert_eq!(next_prime(usize::MAX - 1), None);
        assert_eq!(next_prime(usize::MAX), None);
    }
}
