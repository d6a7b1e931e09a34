//! Generates test vectors for signedcookie wire format regression testing.
//! Run with: cargo run --bin gen_test_vectors > testdata/v0_vectors.json

#![allow(clippy::indexing_slicing)] // slice bounds follow from the fixed tag width

use sha2::{Digest, Sha256};

use signedcookie::codec::encode_tag;
use signedcookie::serialize::join_token;
use signedcookie::sign::Signer;
use signedcookie::types::{Tag, DEFAULT_KEY_LEN, ENCODED_TAG_LEN};

fn sign_vector(
    name: &str,
    key: &[u8],
    payload: &[u8],
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let signer = Signer::with_key(key)?;
    let token = signer.sign(payload);
    Ok(serde_json::json!({
        "name": name,
        "type": "sign",
        "key_hex": hex::encode(key),
        "payload_hex": hex::encode(payload),
        "tag_hex": hex::encode(signer.compute_tag(payload)),
        "expected_token_hex": hex::encode(&token),
        "expected_len": token.len()
    }))
}

fn reject_vector(name: &str, key: &[u8], token: &[u8]) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "type": "reject",
        "key_hex": hex::encode(key),
        "token_hex": hex::encode(token)
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let zero_key = [0u8; DEFAULT_KEY_LEN];
    let counting_key: Vec<u8> = (0..DEFAULT_KEY_LEN as u8).collect();

    let mut vectors = vec![
        sign_vector("zero_key_hello", &zero_key, b"hello")?,
        sign_vector("short_key_empty_payload", b"secret", b"")?,
        sign_vector("long_key_session", &[0xab; 200], b"user=alice&role=admin")?,
        sign_vector(
            "single_byte_key_binary_payload",
            &[0x01],
            &(0u8..16).collect::<Vec<u8>>(),
        )?,
        sign_vector(
            "payload_resembling_tag",
            &counting_key,
            b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=",
        )?,
    ];

    // === Tokens that must be rejected under the zero key ===

    let signer = Signer::with_key(&zero_key)?;
    let good = signer.sign(b"hello");
    let (payload, tag) = good.split_at(good.len() - ENCODED_TAG_LEN);

    let mut prepended = b"x".to_vec();
    prepended.extend_from_slice(&good);
    vectors.push(reject_vector("prepended_byte", &zero_key, &prepended));

    vectors.push(reject_vector("truncated_to_43", &zero_key, &good[good.len() - 43..]));
    vectors.push(reject_vector("empty_token", &zero_key, b""));

    let unrelated: Tag = Sha256::digest(b"unrelated").into();
    let foreign = join_token(payload, &encode_tag(&unrelated));
    vectors.push(reject_vector("foreign_tag", &zero_key, &foreign));

    let mut standard = payload.to_vec();
    standard.extend(tag.iter().map(|&b| match b {
        b'-' => b'+',
        b'_' => b'/',
        other => other,
    }));
    vectors.push(reject_vector("standard_alphabet_tag", &zero_key, &standard));

    let mut unpadded = payload.to_vec();
    unpadded.extend_from_slice(&tag[..tag.len() - 1]);
    vectors.push(reject_vector("unpadded_tag", &zero_key, &unpadded));

    let output = serde_json::json!({
        "description": "signedcookie v0 token vectors: payload || base64url(SHA-256(payload || key))",
        "vectors": vectors
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
