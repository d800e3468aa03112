// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Paillier Cryptosystem
//!
//! Probabilistic public-key encryption with additive homomorphism, based on
//! the decisional composite residuosity assumption over n = pq.
//!
//! The product of two ciphertexts mod n² decrypts to the sum of their
//! plaintexts mod n, see [`PublicKey::add_ciphertexts`].
//!
//! Reference: [Paillier (1999), EUROCRYPT](https://link.springer.com/chapter/10.1007/3-540-48910-X_16)
//!
//! ## Security
//!
//! The private key (λ, μ) is zeroized on drop via the `zeroize` crate.
//! Arithmetic is not constant-time; this crate makes no claim of resistance
//! to timing side channels.
//!
//! ## Example
//!
//! ```rust,no_run
//! use num_bigint_dig::{BigInt, BigUint};
//! use paillier::{Decrypt, Encrypt, KeyPair};
//!
//! let keypair = KeyPair::generate_with_size(2048).expect("key generation failed");
//! let pub_key = keypair.public_key();
//!
//! let a = pub_key.encrypt(&BigInt::from(42)).expect("encryption failed");
//! let b = pub_key.encrypt(&BigInt::from(20)).expect("encryption failed");
//! let sum = pub_key.add_ciphertexts(&a, &b).expect("invalid ciphertext");
//!
//! let m = keypair.private_key().decrypt(&sum).expect("decryption failed");
//! assert_eq!(m, BigUint::from(62u32));
//! ```

mod ciphertext;
mod decrypt;
mod encrypt;
mod error;
mod homomorphic;
mod key;
mod util;

pub use ciphertext::*;
pub use decrypt::*;
pub use encrypt::*;
pub use error::*;
pub use key::*;
