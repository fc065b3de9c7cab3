// RSA encryption and decryption
// Per-code-point modular exponentiation, with a CRT-accelerated
// decryption path

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::error::Error;
use crate::keygen::Rsa;
use crate::number_theory::mod_inverse;

impl Rsa {
    /// Encrypt a string under the public key.
    ///
    /// Each Unicode scalar value is encrypted independently as
    /// `cp^e mod n`. There is no padding and no randomization, so
    /// equal characters produce equal ciphertext values, and a code
    /// point at or above `n` silently wraps.
    pub fn encrypt(&self, plaintext: &str) -> Vec<BigInt> {
        plaintext
            .chars()
            .map(|ch| BigInt::from(ch as u32).modpow(&self.e, &self.n))
            .collect()
    }

    /// Decrypt a ciphertext sequence with the private exponent:
    /// `m = c^d mod n` per value, decoded back to a character.
    pub fn decrypt(&self, ciphertext: &[BigInt]) -> Result<String, Error> {
        ciphertext
            .iter()
            .map(|c| decode_code_point(c.modpow(&self.d, &self.n)))
            .collect()
    }

    /// Decrypt via the Chinese Remainder Theorem.
    ///
    /// Produces the same output as [`Rsa::decrypt`], but performs two
    /// half-size exponentiations mod `p` and mod `q` instead of one
    /// mod `n`. The CRT exponents are derived from the public exponent
    /// on every call: `dp = e^-1 mod (p-1)`, `dq = e^-1 mod (q-1)`,
    /// `qinv = q^-1 mod p`.
    pub fn crt_decrypt(&self, ciphertext: &[BigInt]) -> Result<String, Error> {
        let p_minus_one = &self.p - 1u8;
        let q_minus_one = &self.q - 1u8;
        let dp = mod_inverse(&self.e, &p_minus_one)?;
        let dq = mod_inverse(&self.e, &q_minus_one)?;
        let q_inv = mod_inverse(&self.q, &self.p)?;

        ciphertext
            .iter()
            .map(|c| {
                let m1 = c.modpow(&dp, &self.p);
                let m2 = c.modpow(&dq, &self.q);
                // h = qinv * (m1 - m2) mod p; m = m2 + h*q
                let h = (&q_inv * (&m1 - &m2)).mod_floor(&self.p);
                let m = &m2 + &h * &self.q;
                decode_code_point(m)
            })
            .collect()
    }
}

fn decode_code_point(m: BigInt) -> Result<char, Error> {
    m.to_u32()
        .and_then(char::from_u32)
        .ok_or(Error::DecodingFailure(m))
}
