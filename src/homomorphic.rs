// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operations on ciphertexts that act on the hidden plaintexts.
//!
//! All results are reduced mod n² and stay valid ciphertexts under the same
//! public key. Inputs outside `[0, n²)` are rejected with
//! [`Error::InvalidCiphertext`].

use num_bigint_dig::BigUint;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::{util, Ciphertext, Error, PublicKey, Result};

impl PublicKey {
    /// Homomorphic addition: E(m₁) · E(m₂) mod n² = E(m₁ + m₂ mod n)
    pub fn add_ciphertexts(&self, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext> {
        self.check_ciphertext(a)?;
        self.check_ciphertext(b)?;

        Ok(Ciphertext::new((a.value() * b.value()) % &self.n_squared))
    }

    /// Adds a public constant: E(m) · g^k mod n² = E(m + k mod n)
    pub fn add_plaintext(&self, c: &Ciphertext, k: &BigUint) -> Result<Ciphertext> {
        self.check_ciphertext(c)?;

        let gk = self.g.modpow(k, &self.n_squared);
        Ok(Ciphertext::new((c.value() * gk) % &self.n_squared))
    }

    /// Scales by a public constant: E(m)^k mod n² = E(k · m mod n)
    pub fn mul_plaintext(&self, c: &Ciphertext, k: &BigUint) -> Result<Ciphertext> {
        self.check_ciphertext(c)?;

        Ok(Ciphertext::new(c.value().modpow(k, &self.n_squared)))
    }

    /// Multiplies in a fresh `r^n`, producing an unlinkable ciphertext of the
    /// same plaintext.
    pub fn rerandomize(&self, c: &Ciphertext) -> Result<Ciphertext> {
        self.rerandomize_with_rng(c, &mut OsRng)
    }

    /// Like [`rerandomize`](Self::rerandomize), drawing `r` from `rng`.
    pub fn rerandomize_with_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        c: &Ciphertext,
        rng: &mut R,
    ) -> Result<Ciphertext> {
        self.check_ciphertext(c)?;

        let mut rng = util::seeded_rng(rng)?;
        let r = util::random_unit(&self.n, &mut rng);
        let rn = r.modpow(&self.n, &self.n_squared);

        Ok(Ciphertext::new((c.value() * rn) % &self.n_squared))
    }

    fn check_ciphertext(&self, c: &Ciphertext) -> Result<()> {
        if c.value() >= &self.n_squared {
            return Err(Error::InvalidCiphertext);
        }
        Ok(())
    }
}
