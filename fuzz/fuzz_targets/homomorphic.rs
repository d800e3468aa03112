#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::{BigInt, BigUint, Sign};
use paillier::{Decrypt, Encrypt, KeyPair};

use std::sync::OnceLock;

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let keypair = KEYPAIR.get_or_init(|| KeyPair::generate_with_size(512).unwrap());

    let public_key = keypair.public_key();
    let n = public_key.n();

    let (m1_bytes, m2_bytes) = data.split_at(data.len() / 2);
    let m1 = BigUint::from_bytes_be(m1_bytes) % n;
    let m2 = BigUint::from_bytes_be(m2_bytes) % n;

    let c1 = public_key.encrypt(&BigInt::from_biguint(Sign::Plus, m1.clone())).unwrap();
    let c2 = public_key.encrypt(&BigInt::from_biguint(Sign::Plus, m2.clone())).unwrap();

    let sum = public_key.add_ciphertexts(&c1, &c2).unwrap();
    let decrypted = keypair.decrypt(&sum).unwrap();

    assert_eq!(decrypted, (m1 + m2) % n);
});
