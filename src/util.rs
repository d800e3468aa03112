// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{BigUint, ModInverse, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::rngs::StdRng;
use rand::{CryptoRng, Rng, RngCore, SeedableRng};

use crate::{Error, Result};

/// L(x) = (x - 1) / n
///
/// The division must be exact. For a well-formed ciphertext `c`, the value
/// `x = c^λ mod n²` satisfies `x ≡ 1 (mod n)`; anything else means the
/// ciphertext shares a factor with `n` or belongs to another key.
pub fn l_function(x: &BigUint, n: &BigUint) -> Result<BigUint> {
    if x.is_zero() {
        return Err(Error::MalformedCiphertext);
    }

    let (quotient, remainder) = (x - BigUint::one()).div_rem(n);
    if !remainder.is_zero() {
        return Err(Error::MalformedCiphertext);
    }

    Ok(quotient)
}

/// Computes modular inverse a⁻¹ mod m.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    a.mod_inverse(m)
        .ok_or(Error::InverseUndefined)?
        .to_biguint()
        .ok_or(Error::InverseUndefined)
}

/// Returns true if `r` lies in Z*_n, i.e. `0 < r < n` and `gcd(r, n) = 1`.
pub fn is_unit(r: &BigUint, n: &BigUint) -> bool {
    !r.is_zero() && r < n && r.gcd(n).is_one()
}

/// Seeds a per-call CSPRNG from the caller's entropy source.
///
/// A failing source is reported as [`Error::Randomness`] and never retried.
pub fn seeded_rng<R: RngCore + CryptoRng + ?Sized>(source: &mut R) -> Result<StdRng> {
    StdRng::from_rng(source).map_err(|e| Error::Randomness(e.to_string()))
}

/// Draws `r` uniformly from Z*_n.
pub fn random_unit<R: Rng + ?Sized>(n: &BigUint, rng: &mut R) -> BigUint {
    loop {
        let r = rng.gen_biguint_range(&BigUint::one(), n);
        if r.gcd(n).is_one() {
            return r;
        }
    }
}

/// Entropy source that always fails, for exercising [`Error::Randomness`].
#[cfg(test)]
pub(crate) struct FailingRng;

#[cfg(test)]
impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        unreachable!("FailingRng only supports try_fill_bytes")
    }

    fn next_u64(&mut self) -> u64 {
        unreachable!("FailingRng only supports try_fill_bytes")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        unreachable!("FailingRng only supports try_fill_bytes")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        Err(rand::Error::new("entropy source unavailable"))
    }
}

#[cfg(test)]
impl CryptoRng for FailingRng {}
