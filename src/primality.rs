// Miller-Rabin probabilistic primality test

use num_bigint::{BigInt, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Signed};
use rand::Rng;

/// Default number of Miller-Rabin witness rounds.
pub const DEFAULT_ITERATIONS: u32 = 40;

/// Miller-Rabin primality test.
/// Returns true if `n` is probably prime.
///
/// Follows the classic formulation: 1 and 2 are reported prime (1 is a
/// quirk kept for compatibility with the scheme this implements), and a
/// single witness that fails the strong-probable-prime check is taken
/// as conclusive proof of compositeness. Each passing round lowers the
/// false-positive probability for a composite `n` by a factor of 4.
pub fn is_prime<R: Rng + ?Sized>(n: &BigInt, iterations: u32, rng: &mut R) -> bool {
    let one = BigInt::one();
    let two = BigInt::from(2u8);
    let three = BigInt::from(3u8);

    if n.is_negative() {
        return false;
    }
    if *n == one || *n == two {
        return true;
    }
    if n.is_even() {
        return false;
    }
    // The witness range [2, n-2] is empty for 3.
    if *n == three {
        return true;
    }

    // Write n-1 as m * 2^s with m odd
    let n_minus_one = n - &one;
    let mut m = n_minus_one.clone();
    let mut s = 0u32;
    while m.is_even() {
        m >>= 1;
        s += 1;
    }

    for _ in 0..iterations {
        // Pick random witness a in [2, n-2]
        let a = rng.gen_bigint_range(&two, &n_minus_one);
        let mut x = a.modpow(&m, n);

        if x == one || x == n_minus_one {
            continue;
        }

        let mut strong = false;
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                strong = true;
                break;
            }
        }

        if !strong {
            // Composite witness found
            return false;
        }
    }

    // Probably prime
    true
}
