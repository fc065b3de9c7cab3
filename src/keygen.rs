// RSA key generation
// Builds a key pair from two random probable primes

use log::debug;
use num_bigint::{BigInt, RandBigInt};
use num_traits::One;
use rand::Rng;

use crate::error::Error;
use crate::number_theory::{gcd, mod_inverse};
use crate::prime::generate_prime;

/// Default prime length, in decimal digits, for [`Rsa::new`].
pub const DEFAULT_PRIME_LENGTH: usize = 100;

/// Public key view: the exponent `e` and modulus `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub e: BigInt,
    pub n: BigInt,
}

/// Private key view: the exponent `d` and modulus `n`.
///
/// Treat values of this type as sensitive; anyone holding `d` can
/// decrypt everything encrypted under the matching public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub d: BigInt,
    pub n: BigInt,
}

/// An RSA key pair: the two secret primes and the derived exponents.
///
/// All key material stays inside this struct; the public surface is
/// the accessor views plus the cipher operations. The primes `p` and
/// `q` never leave the crate.
#[derive(Debug, Clone)]
pub struct Rsa {
    pub(crate) p: BigInt,
    pub(crate) q: BigInt,
    pub(crate) n: BigInt,
    pub(crate) e: BigInt,
    pub(crate) d: BigInt,
}

impl Rsa {
    /// Generate a key pair from two random primes of `prime_length`
    /// decimal digits each, using the thread-local RNG.
    pub fn new(prime_length: usize) -> Result<Self, Error> {
        Self::with_rng(prime_length, &mut rand::thread_rng())
    }

    /// Generate a key pair using the supplied randomness source.
    ///
    /// The two primes are independent draws; the textbook scheme does
    /// not check `p != q`, and neither does this. `e` is drawn
    /// uniformly from `[1, phi)` and redrawn until it is coprime with
    /// `phi`, then `d` is its inverse mod `phi`.
    ///
    /// Single-digit primes can land on 1 or 2, leaving a totient with
    /// no room for a public exponent; that degenerate draw is reported
    /// as [`Error::InvalidArgument`].
    pub fn with_rng<R: Rng + ?Sized>(prime_length: usize, rng: &mut R) -> Result<Self, Error> {
        let one = BigInt::one();

        let p = generate_prime(prime_length, rng)?;
        let q = generate_prime(prime_length, rng)?;

        let n = &p * &q;
        let phi = (&p - 1u8) * (&q - 1u8);

        // The exponent range [1, phi) is empty when phi < 2
        if phi < BigInt::from(2u8) {
            return Err(Error::InvalidArgument(format!(
                "totient {} is too small to draw a public exponent",
                phi
            )));
        }

        let mut e = rng.gen_bigint_range(&one, &phi);
        while !gcd(&e, &phi)?.is_one() {
            e = rng.gen_bigint_range(&one, &phi);
        }

        let d = mod_inverse(&e, &phi)?;

        debug!(
            "generated key pair with {}-digit primes ({}-bit modulus)",
            prime_length,
            n.bits()
        );

        Ok(Rsa { p, q, n, e, d })
    }

    /// The public key `(e, n)`, safe to share.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            e: self.e.clone(),
            n: self.n.clone(),
        }
    }

    /// The private key `(d, n)`. Sensitive.
    pub fn private_key(&self) -> PrivateKey {
        PrivateKey {
            d: self.d.clone(),
            n: self.n.clone(),
        }
    }
}
