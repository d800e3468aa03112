// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::{BigUint, RandPrime};
use num_integer::Integer;
use num_traits::One;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{util, Error, Result};

/// Public (encryption) key.
///
/// Holds the modulus `n = pq` and the generator `g = n + 1`. The value `n²`
/// is cached since every encryption and homomorphic operation reduces by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) n: BigUint,
    pub(crate) g: BigUint,
    pub(crate) n_squared: BigUint,
}

impl PublicKey {
    /// Rebuild a public key from its modulus.
    ///
    /// The modulus must be odd and at least 3. Whether it is really a product
    /// of two primes cannot be checked without the factorization.
    pub fn new(n: BigUint) -> Result<Self> {
        if n < BigUint::from(3u32) || n.is_even() {
            return Err(Error::InvalidPublicKey);
        }

        let g = &n + BigUint::one();
        let n_squared = &n * &n;

        Ok(Self { n, g, n_squared })
    }

    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    #[inline]
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    #[inline]
    pub fn n_squared(&self) -> &BigUint {
        &self.n_squared
    }

    /// Bit length of the modulus `n`.
    #[inline]
    pub fn bit_length(&self) -> usize {
        self.n.bits()
    }
}

/// Private (decryption) key with automatic secure erasure.
///
/// Embeds the public key it was generated with, so `lambda` and `mu` are
/// never separated from their modulus. Both are wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct PrivateKey {
    #[zeroize(skip)]
    pub(crate) public_key: PublicKey,

    /// λ = (p-1)(q-1)
    pub(crate) lambda: BigUint,

    /// μ = λ⁻¹ mod n
    pub(crate) mu: BigUint,
}

impl PrivateKey {
    fn new(public_key: PublicKey, lambda: BigUint) -> Result<Self> {
        let mu = util::mod_inverse(&lambda, public_key.n())?;

        Ok(Self {
            public_key,
            lambda,
            mu,
        })
    }

    /// Return a reference to the associated public key.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    #[inline]
    pub fn lambda(&self) -> &BigUint {
        &self.lambda
    }

    #[inline]
    pub fn mu(&self) -> &BigUint {
        &self.mu
    }
}

#[cfg(not(feature = "expose-secret"))]
impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

/// A matching public/private key pair.
///
/// Secret material is zeroized when dropped.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    #[zeroize(skip)]
    public: PublicKey,
    secret: PrivateKey,
}

impl KeyPair {
    /// Generate a key pair with default parameters (2048-bit modulus).
    pub fn generate() -> Result<Self> {
        KeyPairBuilder::new().build()
    }

    /// Generate a key pair with a custom modulus size.
    pub fn generate_with_size(bit_length: usize) -> Result<Self> {
        KeyPairBuilder::new().bit_length(bit_length).build()
    }

    /// Build a key pair from two known primes.
    ///
    /// Both factors must be distinct odd primes. Fails with
    /// [`Error::InverseUndefined`] when `gcd(n, (p-1)(q-1)) != 1`.
    pub fn from_primes(p: &BigUint, q: &BigUint) -> Result<Self> {
        let two = BigUint::from(2u32);
        if p == q || *p <= two || *q <= two {
            return Err(Error::InvalidPrivateKey);
        }
        if !probably_prime(p, 20) || !probably_prime(q, 20) {
            return Err(Error::InvalidPrivateKey);
        }

        let n = p * q;
        let lambda = (p - BigUint::one()) * (q - BigUint::one());

        let public = PublicKey::new(n)?;
        let secret = PrivateKey::new(public.clone(), lambda)?;

        Ok(Self { public, secret })
    }

    /// Return the public key.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Return the private key.
    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        &self.secret
    }
}

/// Generate a key pair whose modulus `n` is `bits` long.
///
/// Shorthand for [`KeyPair::generate_with_size`].
pub fn generate(bits: usize) -> Result<KeyPair> {
    KeyPair::generate_with_size(bits)
}

/// Builder for generating key pairs with configurable parameters.
#[derive(Debug, Clone)]
pub struct KeyPairBuilder {
    bit_length: usize,
}

impl KeyPairBuilder {
    /// Modulus size used when none is configured.
    pub const DEFAULT_BITS: usize = 2048;

    /// Minimum recommended for production. Smaller keys are generated but
    /// logged as weak.
    pub const MIN_SECURE_BITS: usize = 2048;

    /// Smallest modulus accepted: each prime factor needs at least 8 bits.
    pub const MIN_BITS: usize = 16;

    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self {
            bit_length: Self::DEFAULT_BITS,
        }
    }

    /// Set the desired modulus bit length. Must be even.
    pub fn bit_length(mut self, bits: usize) -> Self {
        self.bit_length = bits;
        self
    }

    /// Generate the key pair from the operating system's entropy source.
    pub fn build(self) -> Result<KeyPair> {
        self.build_with_rng(&mut OsRng)
    }

    /// Generate the key pair, drawing all randomness from `rng`.
    pub fn build_with_rng<R: RngCore + CryptoRng + ?Sized>(self, rng: &mut R) -> Result<KeyPair> {
        let bits = self.bit_length;
        if bits < Self::MIN_BITS || bits % 2 != 0 {
            return Err(Error::InvalidKeySize {
                min: Self::MIN_BITS,
                actual: bits,
            });
        }

        if bits < Self::MIN_SECURE_BITS {
            warn!(
                bits,
                min_secure = Self::MIN_SECURE_BITS,
                "generating a cryptographically weak Paillier key"
            );
        }
        debug!(bits, "generating Paillier key pair");

        let mut rng = util::seeded_rng(rng)?;

        // Equal-length primes with their top bits set: |n| = bits exactly,
        // and p cannot divide q-1, so gcd(n, λ) = 1 whenever p != q.
        let prime_bits = bits / 2;
        let p = rng.gen_prime(prime_bits);
        let mut q = rng.gen_prime(prime_bits);
        while q == p {
            trace!(prime_bits, "second prime collided with the first, redrawing");
            q = rng.gen_prime(prime_bits);
        }

        let keypair = KeyPair::from_primes(&p, &q)?;
        debug!(bits = keypair.public.bit_length(), "Paillier key pair ready");

        Ok(keypair)
    }
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self::new()
    }
}
