// Random prime generation
// Samples decimal-length candidates until one passes Miller-Rabin

use log::debug;
use num_bigint::{BigInt, RandBigInt};
use num_traits::Pow;
use rand::Rng;

use crate::error::Error;
use crate::primality::{is_prime, DEFAULT_ITERATIONS};

/// Generate a random probable prime with `digits` decimal digits.
///
/// Candidates are drawn uniformly from `[10^(digits-1), 10^digits - 1)`
/// and tested with Miller-Rabin; the loop resamples until a candidate
/// passes. Termination is probabilistic (the expected number of trials
/// grows with `digits` by the prime number theorem) and deliberately
/// has no iteration cap.
pub fn generate_prime<R: Rng + ?Sized>(digits: usize, rng: &mut R) -> Result<BigInt, Error> {
    if digits == 0 {
        return Err(Error::InvalidArgument(
            "prime length must be at least 1 digit".to_string(),
        ));
    }

    let ten = BigInt::from(10u8);
    let lower = (&ten).pow(digits as u32 - 1);
    let upper = (&ten).pow(digits as u32) - 1u8;

    let mut attempts = 0u64;
    loop {
        attempts += 1;
        let candidate = rng.gen_bigint_range(&lower, &upper);
        if is_prime(&candidate, DEFAULT_ITERATIONS, rng) {
            debug!("{}-digit prime found after {} candidates", digits, attempts);
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_prime_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = generate_prime(3, &mut rng).unwrap();
        assert!(p >= BigInt::from(100) && p < BigInt::from(999));
    }

    #[test]
    fn test_generated_prime_passes_primality() {
        let mut rng = StdRng::seed_from_u64(2);
        let p = generate_prime(4, &mut rng).unwrap();
        let mut check_rng = StdRng::seed_from_u64(3);
        assert!(is_prime(&p, DEFAULT_ITERATIONS, &mut check_rng));
    }

    #[test]
    fn test_zero_digits_rejected() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(matches!(
            generate_prime(0, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
    }
}
