// Error types shared across the crate

use num_bigint::BigInt;
use thiserror::Error;

/// Errors produced by key generation and the cipher operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An argument violated a documented precondition, e.g. a negative
    /// input to `gcd` or a zero prime length.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `mod_inverse(value, modulus)` was requested for non-coprime
    /// arguments, so no inverse exists.
    #[error("no modular inverse of {value} modulo {modulus}")]
    NoInverseExists { value: BigInt, modulus: BigInt },

    /// A decrypted value is not a valid Unicode code point. Usually a
    /// sign of mismatched keys and ciphertext.
    #[error("decrypted value {0} is not a valid Unicode code point")]
    DecodingFailure(BigInt),
}
