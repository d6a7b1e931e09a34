#![no_main]
use libfuzzer_sys::fuzz_target;
use signedcookie::cookie::{find_cookie, verify_cookie_header};
use signedcookie::sign::Signer;

fuzz_target!(|data: &[u8]| {
    // Must never panic, regardless of input.
    let Ok(header) = std::str::from_utf8(data) else {
        return;
    };
    let _ = find_cookie(header, "session");
    let signer = Signer::with_key(b"fuzz-cookie-key").unwrap();
    let _ = verify_cookie_header(&signer, header, "session");
});
