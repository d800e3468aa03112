#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::{BigInt, BigUint, Sign};
use paillier::{Decrypt, Encrypt, Error, KeyPair};
use std::sync::OnceLock;

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let key_pair = KEYPAIR.get_or_init(|| KeyPair::generate_with_size(512).unwrap());
    let n = key_pair.public_key().n();

    // first byte selects the sign, the rest is the magnitude
    let sign = if data[0] & 1 == 1 { Sign::Minus } else { Sign::Plus };
    let message = BigInt::from_biguint(sign, BigUint::from_bytes_be(&data[1..]));

    match key_pair.encrypt(&message) {
        Ok(ciphertext) => {
            let decrypted = key_pair.decrypt(&ciphertext).expect("valid ciphertext must decrypt");
            assert_eq!(message.to_biguint(), Some(decrypted));
        }
        Err(Error::NegativeMessage) => assert_eq!(message.sign(), Sign::Minus),
        Err(Error::MessageTooLarge) => assert!(message.to_biguint().is_some_and(|m| &m >= n)),
        Err(e) => panic!("unexpected encryption error: {e}"),
    }
});
