#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
//! Regression tests that verify tokens against stored test vectors.
//! If any test here fails, it means the wire format has changed.

use signedcookie::codec::decode_tag;
use signedcookie::serialize::split_token;
use signedcookie::sign::Signer;
use signedcookie::types::ENCODED_TAG_LEN;

/// Load test vectors from testdata/v0_vectors.json.
fn load_vectors() -> serde_json::Value {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/v0_vectors.json");
    let data = std::fs::read_to_string(path).expect("failed to read test vectors file");
    serde_json::from_str(&data).expect("failed to parse test vectors JSON")
}

fn vectors_of_type(vectors: &serde_json::Value, kind: &str) -> Vec<serde_json::Value> {
    vectors["vectors"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|v| v["type"].as_str().unwrap() == kind)
        .cloned()
        .collect()
}

fn find_vector(vectors: &serde_json::Value, name: &str) -> serde_json::Value {
    vectors["vectors"]
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["name"].as_str().unwrap() == name)
        .unwrap_or_else(|| panic!("test vector '{name}' not found"))
        .clone()
}

fn hex_field(v: &serde_json::Value, field: &str) -> Vec<u8> {
    hex::decode(v[field].as_str().unwrap()).unwrap()
}

fn signer_for(v: &serde_json::Value) -> Signer {
    Signer::with_key(&hex_field(v, "key_hex")).unwrap()
}

#[test]
fn test_vector_sign_exact_tokens() {
    let vectors = load_vectors();
    let sign_vectors = vectors_of_type(&vectors, "sign");
    assert!(!sign_vectors.is_empty());

    for v in sign_vectors {
        let name = v["name"].as_str().unwrap();
        let signer = signer_for(&v);
        let payload = hex_field(&v, "payload_hex");

        let token = signer.sign(&payload);
        assert_eq!(
            hex::encode(&token),
            v["expected_token_hex"].as_str().unwrap(),
            "{name} wire format mismatch"
        );
        assert_eq!(token.len(), v["expected_len"].as_u64().unwrap() as usize);
        assert_eq!(
            hex::encode(signer.compute_tag(&payload)),
            v["tag_hex"].as_str().unwrap(),
            "{name} tag mismatch"
        );
    }
}

#[test]
fn test_vector_sign_tokens_verify() {
    let vectors = load_vectors();
    for v in vectors_of_type(&vectors, "sign") {
        let name = v["name"].as_str().unwrap();
        let signer = signer_for(&v);
        let token = hex_field(&v, "expected_token_hex");
        let payload = hex_field(&v, "payload_hex");

        assert_eq!(
            signer.verify(&token).unwrap(),
            payload.as_slice(),
            "{name} should verify"
        );
    }
}

#[test]
fn test_vector_reject_tokens() {
    let vectors = load_vectors();
    let reject_vectors = vectors_of_type(&vectors, "reject");
    assert!(!reject_vectors.is_empty());

    for v in reject_vectors {
        let name = v["name"].as_str().unwrap();
        let signer = signer_for(&v);
        let token = hex_field(&v, "token_hex");
        assert!(signer.verify(&token).is_err(), "{name} should be rejected");
    }
}

#[test]
fn test_vector_zero_key_hello_layout() {
    let vectors = load_vectors();
    let v = find_vector(&vectors, "zero_key_hello");
    let token = hex_field(&v, "expected_token_hex");

    let parts = split_token(&token).unwrap();
    assert_eq!(parts.payload, b"hello");
    assert_eq!(parts.encoded_tag.len(), ENCODED_TAG_LEN);
    assert_eq!(
        std::str::from_utf8(parts.encoded_tag).unwrap(),
        "cteVWGY-wyC2Is-vZVdx3y6H85B4OISdLBQ0Oj3nVag="
    );
    assert_eq!(
        hex::encode(decode_tag(parts.encoded_tag).unwrap()),
        v["tag_hex"].as_str().unwrap()
    );
}
