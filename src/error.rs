// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors that can occur during key generation, encryption and decryption.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Secure random source failed: {0}")]
    Randomness(String),

    #[error("Message must be smaller than the public modulus n")]
    MessageTooLarge,

    #[error("Message cannot be less than zero")]
    NegativeMessage,

    #[error("Modular inverse of lambda mod n is undefined")]
    InverseUndefined,

    #[error("Invalid key size: must be an even number of bits, at least {min}, got {actual}")]
    InvalidKeySize { min: usize, actual: usize },

    #[error("Invalid public key")]
    InvalidPublicKey,

    #[error("Invalid private key")]
    InvalidPrivateKey,

    #[error("Randomizer must be a unit modulo n")]
    InvalidRandomizer,

    #[error("Ciphertext is outside the range [0, n²)")]
    InvalidCiphertext,

    #[error("Ciphertext is malformed or was not produced under this key")]
    MalformedCiphertext,
}

pub type Result<T> = std::result::Result<T, Error>;
