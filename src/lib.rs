//! Textbook RSA over arbitrary-precision integers.
//!
//! Key pairs are built from two random probable primes (Miller-Rabin),
//! and text is encrypted one Unicode code point at a time with plain
//! modular exponentiation. Decryption comes in two flavors: direct
//! (`c^d mod n`) and CRT-accelerated. This is the classroom scheme and
//! keeps its weaknesses: there is no padding, and equal characters
//! encrypt to equal values. Do not use it to protect real data.
//!
//! ```no_run
//! use textbook_rsa::Rsa;
//!
//! let rsa = Rsa::new(100).unwrap();
//! let ciphertext = rsa.encrypt("HELLO");
//! assert_eq!(rsa.crt_decrypt(&ciphertext).unwrap(), "HELLO");
//! ```

pub mod cipher;
pub mod error;
pub mod keygen;
pub mod number_theory;
pub mod primality;
pub mod prime;

pub use error::Error;
pub use keygen::{PrivateKey, PublicKey, Rsa, DEFAULT_PRIME_LENGTH};
pub use primality::{is_prime, DEFAULT_ITERATIONS};
pub use prime::generate_prime;
