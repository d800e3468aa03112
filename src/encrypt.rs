// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{BigInt, BigUint};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::{util, Ciphertext, Error, KeyPair, PublicKey, Result};

/// A trait that enables probabilistic encryption of a plaintext integer.
pub trait Encrypt {
    /// Encrypt `m` with a fresh randomizer drawn from the operating system.
    ///
    /// ## Plaintext Space
    ///
    /// `m` must satisfy `0 <= m < n`. Values `>= n` fail with
    /// [`Error::MessageTooLarge`], negative values with
    /// [`Error::NegativeMessage`].
    fn encrypt(&self, m: &BigInt) -> Result<Ciphertext> {
        self.encrypt_with_rng(m, &mut OsRng)
    }

    /// Encrypt `m`, drawing the randomizer from `rng`.
    fn encrypt_with_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        m: &BigInt,
        rng: &mut R,
    ) -> Result<Ciphertext>;
}

impl Encrypt for PublicKey {
    fn encrypt_with_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        m: &BigInt,
        rng: &mut R,
    ) -> Result<Ciphertext> {
        let m = self.check_message(m)?;

        let mut rng = util::seeded_rng(rng)?;
        let r = util::random_unit(&self.n, &mut rng);

        Ok(self.encrypt_raw(&m, &r))
    }
}

impl Encrypt for KeyPair {
    fn encrypt_with_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        m: &BigInt,
        rng: &mut R,
    ) -> Result<Ciphertext> {
        self.public_key().encrypt_with_rng(m, rng)
    }
}

impl PublicKey {
    /// Encrypt `m` with a caller-chosen randomizer `r`.
    ///
    /// The result is deterministic, which is only useful for known-answer
    /// tests. Reusing `r` across messages breaks semantic security.
    /// `r` must be a unit modulo `n`.
    pub fn encrypt_with_randomizer(&self, m: &BigInt, r: &BigUint) -> Result<Ciphertext> {
        let m = self.check_message(m)?;
        if !util::is_unit(r, &self.n) {
            return Err(Error::InvalidRandomizer);
        }

        Ok(self.encrypt_raw(&m, r))
    }

    /// Checks `0 <= m < n`.
    fn check_message(&self, m: &BigInt) -> Result<BigUint> {
        match m.to_biguint() {
            None => Err(Error::NegativeMessage),
            Some(m) if m >= self.n => Err(Error::MessageTooLarge),
            Some(m) => Ok(m),
        }
    }

    /// c = g^m · r^n mod n²
    pub(crate) fn encrypt_raw(&self, m: &BigUint, r: &BigUint) -> Ciphertext {
        let gm = self.g.modpow(m, &self.n_squared);
        let rn = r.modpow(&self.n, &self.n_squared);

        Ciphertext::new((gm * rn) % &self.n_squared)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::util::FailingRng;
    use crate::Decrypt;

    use num_bigint_dig::RandBigInt;
    use num_traits::{One, Zero};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn create_test_keypair() -> KeyPair {
        KeyPair::generate_with_size(256).unwrap()
    }

    fn small_keypair() -> KeyPair {
        KeyPair::from_primes(&BigUint::from(7u32), &BigUint::from(11u32)).unwrap()
    }

    fn signed(n: &BigUint) -> BigInt {
        BigInt::from_biguint(num_bigint_dig::Sign::Plus, n.clone())
    }

    #[test]
    fn encrypt_decrypt_roundtrip() {
        let keypair = create_test_keypair();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..20 {
            let m = rng.gen_biguint_below(keypair.public_key().n());
            let c = keypair.encrypt(&signed(&m)).unwrap();

            assert!(c.value() < keypair.public_key().n_squared());
            assert_eq!(keypair.decrypt(&c).unwrap(), m);
        }
    }

    #[test]
    fn known_answer_small_modulus() {
        let keypair = small_keypair();
        let pub_key = keypair.public_key();

        // (78^42 mod 5929) · (23^77 mod 5929) mod 5929
        let c = pub_key
            .encrypt_with_randomizer(&BigInt::from(42), &BigUint::from(23u32))
            .unwrap();
        assert_eq!(c.value(), &BigUint::from(3840u32));
        assert_eq!(keypair.decrypt(&c).unwrap(), BigUint::from(42u32));
    }

    #[test]
    fn decryption_is_independent_of_randomizer() {
        let keypair = small_keypair();
        let pub_key = keypair.public_key();
        let m = BigInt::from(42);

        for r in 1u32..77 {
            let r = BigUint::from(r);
            if !util::is_unit(&r, pub_key.n()) {
                continue;
            }
            let c = pub_key.encrypt_with_randomizer(&m, &r).unwrap();
            assert_eq!(keypair.decrypt(&c).unwrap(), BigUint::from(42u32));
        }
    }

    #[test]
    fn every_plaintext_of_small_modulus() {
        let keypair = small_keypair();
        let mut rng = StdRng::seed_from_u64(77);

        for m in 0u32..77 {
            let c = keypair.encrypt_with_rng(&BigInt::from(m), &mut rng).unwrap();
            assert_eq!(keypair.decrypt(&c).unwrap(), BigUint::from(m));
        }
    }

    #[test]
    fn probabilistic_encryption() {
        let keypair = create_test_keypair();
        let m = BigInt::from(123_456_789u64);

        let c1 = keypair.encrypt(&m).unwrap();
        let c2 = keypair.encrypt(&m).unwrap();

        // different random r values MUST produce different ciphertexts
        assert_ne!(c1, c2);
        assert_eq!(keypair.decrypt(&c1).unwrap(), keypair.decrypt(&c2).unwrap());
    }

    #[test]
    fn seeded_encryption_is_reproducible() {
        let keypair = create_test_keypair();
        let m = BigInt::from(99);

        let c1 = keypair.encrypt_with_rng(&m, &mut StdRng::seed_from_u64(5)).unwrap();
        let c2 = keypair.encrypt_with_rng(&m, &mut StdRng::seed_from_u64(5)).unwrap();
        let c3 = keypair.encrypt_with_rng(&m, &mut StdRng::seed_from_u64(6)).unwrap();

        assert_eq!(c1, c2);
        assert_ne!(c1, c3);
    }

    #[test]
    fn zero_and_max_message() {
        let keypair = create_test_keypair();
        let max = keypair.public_key().n() - BigUint::one();

        let c0 = keypair.encrypt(&BigInt::from(0)).unwrap();
        let cmax = keypair.encrypt(&signed(&max)).unwrap();

        assert_eq!(keypair.decrypt(&c0).unwrap(), BigUint::zero());
        assert_eq!(keypair.decrypt(&cmax).unwrap(), max);
    }

    #[test]
    fn message_equal_to_modulus_is_rejected() {
        let keypair = create_test_keypair();
        let n = signed(keypair.public_key().n());

        assert_eq!(keypair.encrypt(&n).err(), Some(Error::MessageTooLarge));
        assert_eq!(keypair.encrypt(&(n + BigInt::from(1))).err(), Some(Error::MessageTooLarge));
    }

    #[test]
    fn negative_message_is_rejected() {
        let keypair = create_test_keypair();

        assert_eq!(keypair.encrypt(&BigInt::from(-1)).err(), Some(Error::NegativeMessage));
        assert_eq!(
            small_keypair()
                .public_key()
                .encrypt_with_randomizer(&BigInt::from(-5), &BigUint::from(2u32))
                .err(),
            Some(Error::NegativeMessage)
        );
    }

    #[test]
    fn invalid_randomizer_is_rejected() {
        let pub_key = small_keypair().public_key().clone();
        let m = BigInt::from(1);

        for r in [0u32, 7, 22, 77, 100] {
            let result = pub_key.encrypt_with_randomizer(&m, &BigUint::from(r));
            assert_eq!(result.err(), Some(Error::InvalidRandomizer));
        }
    }

    #[test]
    fn message_checked_before_randomness() {
        let keypair = small_keypair();
        let result = keypair.encrypt_with_rng(&BigInt::from(77), &mut FailingRng);

        assert_eq!(result.err(), Some(Error::MessageTooLarge));
    }

    #[test]
    fn entropy_failure_is_propagated() {
        let keypair = small_keypair();
        let result = keypair.encrypt_with_rng(&BigInt::from(1), &mut FailingRng);

        assert!(matches!(result, Err(Error::Randomness(_))));
    }
}
