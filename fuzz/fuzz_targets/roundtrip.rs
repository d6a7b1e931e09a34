#![no_main]
use libfuzzer_sys::fuzz_target;
use signedcookie::sign::Signer;

fuzz_target!(|data: &[u8]| {
    // First byte chooses the key length, the rest is split into key and payload.
    let Some((&n, rest)) = data.split_first() else {
        return;
    };
    let key_len = (n as usize % 64) + 1;
    if rest.len() < key_len {
        return;
    }
    let (key, payload) = rest.split_at(key_len);

    let signer = Signer::with_key(key).unwrap();
    let token = signer.sign(payload);
    assert_eq!(signer.verify(&token).unwrap(), payload);

    // Flipping any payload byte must break verification.
    if !payload.is_empty() {
        let mut tampered = token.clone();
        tampered[0] ^= 0x80;
        assert!(signer.verify(&tampered).is_err());
    }
});
