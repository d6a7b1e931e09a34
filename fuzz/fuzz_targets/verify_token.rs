#![no_main]
use libfuzzer_sys::fuzz_target;
use signedcookie::sign::Signer;

fuzz_target!(|data: &[u8]| {
    // Must never panic. Anything accepted must be exactly what sign produces.
    let signer = Signer::with_key(b"fuzz-verify-key").unwrap();
    if let Ok(payload) = signer.verify(data) {
        assert_eq!(signer.sign(payload), data);
    }
});
