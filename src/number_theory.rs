// Number-theoretic primitives
// GCD, extended GCD and modular inverse over arbitrary-precision integers

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::Error;

/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// Both inputs must be non-negative; a negative input is rejected with
/// [`Error::InvalidArgument`]. Returns 0 only when both inputs are 0.
pub fn gcd(a: &BigInt, b: &BigInt) -> Result<BigInt, Error> {
    if a.is_negative() || b.is_negative() {
        return Err(Error::InvalidArgument(format!(
            "gcd requires non-negative integers, got {} and {}",
            a, b
        )));
    }

    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    Ok(a)
}

/// Extended Euclidean algorithm.
/// Returns `(g, x, y)` such that `a*x + b*y == g == gcd(a, b)`,
/// for all non-negative inputs including `a == 0`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        return (b.clone(), BigInt::zero(), BigInt::one());
    }

    let (g, x, y) = extended_gcd(&b.mod_floor(a), a);
    let q = b.div_floor(a);
    (g, y - &q * &x, x)
}

/// Modular inverse: the `x` in `[0, n)` with `(b*x) mod n == 1`.
///
/// Fails with [`Error::NoInverseExists`] when `gcd(b, n) != 1`.
pub fn mod_inverse(b: &BigInt, n: &BigInt) -> Result<BigInt, Error> {
    let (g, x, _) = extended_gcd(b, n);

    if !g.is_one() {
        return Err(Error::NoInverseExists {
            value: b.clone(),
            modulus: n.clone(),
        });
    }

    Ok(x.mod_floor(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&big(48), &big(18)).unwrap(), big(6));
        assert_eq!(gcd(&big(17), &big(5)).unwrap(), big(1));
        assert_eq!(gcd(&big(0), &big(7)).unwrap(), big(7));
        assert_eq!(gcd(&big(7), &big(0)).unwrap(), big(7));
        assert_eq!(gcd(&big(0), &big(0)).unwrap(), big(0));
    }

    #[test]
    fn test_gcd_divides_both() {
        let cases = [(252i64, 105i64), (1071, 462), (13, 13), (1, 999)];
        for (a, b) in cases {
            let g = gcd(&big(a), &big(b)).unwrap();
            assert!((big(a) % &g).is_zero());
            assert!((big(b) % &g).is_zero());
        }
    }

    #[test]
    fn test_gcd_rejects_negative() {
        assert!(matches!(
            gcd(&big(-4), &big(6)),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            gcd(&big(4), &big(-6)),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_extended_gcd_identity() {
        let cases = [(240i64, 46i64), (0, 5), (5, 0), (17, 17), (1, 1)];
        for (a, b) in cases {
            let (g, x, y) = extended_gcd(&big(a), &big(b));
            assert_eq!(&big(a) * &x + &big(b) * &y, g.clone());
            assert_eq!(g, gcd(&big(a), &big(b)).unwrap());
        }
    }

    #[test]
    fn test_extended_gcd_zero_base_case() {
        let (g, x, y) = extended_gcd(&big(0), &big(9));
        assert_eq!(g, big(9));
        assert_eq!(x, big(0));
        assert_eq!(y, big(1));
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 ≡ 1 mod 7, so inverse of 3 mod 7 is 5
        let inv = mod_inverse(&big(3), &big(7)).unwrap();
        assert_eq!(inv, big(5));

        let inv = mod_inverse(&big(17), &big(3120)).unwrap();
        assert_eq!((big(17) * inv) % big(3120), big(1));
    }

    #[test]
    fn test_mod_inverse_none_when_not_coprime() {
        // gcd(4, 8) = 4, so no inverse exists
        assert_eq!(
            mod_inverse(&big(4), &big(8)),
            Err(Error::NoInverseExists {
                value: big(4),
                modulus: big(8),
            })
        );
    }
}
