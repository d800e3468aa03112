// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use tracing::debug;

use crate::{util::l_function, Ciphertext, Error, KeyPair, PrivateKey, Result};

/// A trait that enables decrypting a ciphertext back to its plaintext integer.
pub trait Decrypt {
    /// Recover the plaintext `m` in `[0, n)` from a ciphertext `c`.
    ///
    /// Decryption is strict: a value outside `[0, n²)` fails with
    /// [`Error::InvalidCiphertext`], and one for which `c^λ mod n²` is not
    /// congruent to 1 mod `n` fails with [`Error::MalformedCiphertext`].
    /// A well-formed ciphertext from a different key still decrypts, to a
    /// meaningless value.
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<BigUint>;
}

impl Decrypt for PrivateKey {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<BigUint> {
        let n = self.public_key.n();
        let n_squared = self.public_key.n_squared();

        let c = ciphertext.value();
        if c >= n_squared {
            debug!("rejecting ciphertext outside [0, n²)");
            return Err(Error::InvalidCiphertext);
        }

        // c^λ mod n²
        let clm = c.modpow(&self.lambda, n_squared);

        let l = l_function(&clm, n).map_err(|e| {
            debug!("rejecting ciphertext that is not a unit mod n");
            e
        })?;

        Ok((l * &self.mu) % n)
    }
}

impl Decrypt for KeyPair {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<BigUint> {
        self.private_key().decrypt(ciphertext)
    }
}
