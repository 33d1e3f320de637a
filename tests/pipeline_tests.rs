//! End-to-end tests for the encrypt/decrypt pipelines.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use proptest::prelude::*;
use sealtoken::token::{decode, encode, PayloadKind};
use sealtoken::{
    decrypt, decrypt_file, decrypt_text, encrypt_file, encrypt_text, Decrypted, PlainFile,
    SealTokenError,
};

const PASSWORD: &str = "Sup3rSecret!";

fn plain_file(bytes: Vec<u8>) -> PlainFile {
    PlainFile {
        name: "holiday.png".into(),
        mime_type: "image/png".into(),
        bytes,
    }
}

// ---------------------------------------------------------------------------
// Concrete scenario
// ---------------------------------------------------------------------------

#[test]
fn hello_world_scenario() {
    let result = encrypt_text("hello world", PASSWORD).unwrap();
    assert_eq!(result.text_length, 11);

    let token = result.token.as_str();
    assert_eq!(decrypt_text(token, PASSWORD).unwrap(), "hello world");
    assert!(matches!(
        decrypt_text(token, "wrongpass"),
        Err(SealTokenError::AuthenticationFailure)
    ));
}

// ---------------------------------------------------------------------------
// Round-trip
// ---------------------------------------------------------------------------

#[test]
fn file_roundtrip_keeps_metadata() {
    let bytes: Vec<u8> = (0..=255u8).cycle().take(70_000).collect();
    let result = encrypt_file(&plain_file(bytes.clone()), PASSWORD).unwrap();
    assert_eq!(result.filename, "holiday.png");
    assert_eq!(result.size, 70_000);

    let decrypted = decrypt_file(result.token.as_str(), PASSWORD).unwrap();
    assert_eq!(decrypted.bytes, bytes);
    assert_eq!(decrypted.filename, "holiday.png");
    assert_eq!(decrypted.mime_type, "image/png");
}

#[test]
fn empty_file_and_empty_text_roundtrip() {
    let file = encrypt_file(&plain_file(Vec::new()), PASSWORD).unwrap();
    assert!(decrypt_file(file.token.as_str(), PASSWORD).unwrap().bytes.is_empty());

    let text = encrypt_text("", PASSWORD).unwrap();
    assert_eq!(text.text_length, 0);
    assert_eq!(decrypt_text(text.token.as_str(), PASSWORD).unwrap(), "");
}

#[test]
fn multibyte_text_roundtrip_counts_characters() {
    let text = "Grüße, 世界! 🔐";
    let result = encrypt_text(text, PASSWORD).unwrap();
    assert_eq!(result.text_length, text.chars().count());
    assert_eq!(decrypt_text(result.token.as_str(), PASSWORD).unwrap(), text);
}

#[test]
fn multi_megabyte_file_roundtrip() {
    let bytes = vec![0x5Au8; 3 * 1024 * 1024];
    let result = encrypt_file(&plain_file(bytes.clone()), PASSWORD).unwrap();
    let decrypted = decrypt_file(result.token.as_str(), PASSWORD).unwrap();
    assert_eq!(decrypted.bytes.len(), bytes.len());
    assert!(decrypted.bytes == bytes);
}

#[test]
fn missing_metadata_uses_defaults() {
    let file = PlainFile {
        name: String::new(),
        mime_type: String::new(),
        bytes: b"abc".to_vec(),
    };
    let result = encrypt_file(&file, PASSWORD).unwrap();
    let decrypted = decrypt_file(result.token.as_str(), PASSWORD).unwrap();
    assert_eq!(decrypted.filename, "decrypted_file");
    assert_eq!(decrypted.mime_type, "application/octet-stream");
}

#[test]
fn mistyped_metadata_uses_defaults() {
    let result = encrypt_file(&plain_file(b"abc".to_vec()), PASSWORD).unwrap();
    let json = BASE64.decode(result.token.as_str()).unwrap();
    let mut body: serde_json::Value = serde_json::from_slice(&json).unwrap();
    body["filename"] = serde_json::json!(42);
    body["mimeType"] = serde_json::json!(null);
    body["isText"] = serde_json::json!("yes");
    let token = BASE64.encode(serde_json::to_vec(&body).unwrap());

    match decrypt(&token, PASSWORD).unwrap() {
        Decrypted::File(file) => {
            assert_eq!(file.bytes, b"abc");
            assert_eq!(file.filename, "decrypted_file");
            assert_eq!(file.mime_type, "application/octet-stream");
        }
        other => panic!("expected a file, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[test]
fn decrypt_dispatches_on_discriminant() {
    let text = encrypt_text("routed", PASSWORD).unwrap();
    assert_eq!(
        decrypt(text.token.as_str(), PASSWORD).unwrap(),
        Decrypted::Text("routed".into())
    );

    let file = encrypt_file(&plain_file(vec![1, 2, 3]), PASSWORD).unwrap();
    match decrypt(file.token.as_str(), PASSWORD).unwrap() {
        Decrypted::File(f) => assert_eq!(f.bytes, vec![1, 2, 3]),
        other => panic!("expected a file, got {other:?}"),
    }

    assert!(matches!(
        decrypt("garbage", PASSWORD),
        Err(SealTokenError::MalformedToken)
    ));
}

// ---------------------------------------------------------------------------
// Failure semantics
// ---------------------------------------------------------------------------

#[test]
fn empty_password_is_invalid_input() {
    assert!(matches!(
        encrypt_text("x", ""),
        Err(SealTokenError::InvalidInput(_))
    ));
    assert!(matches!(
        encrypt_file(&plain_file(vec![1]), ""),
        Err(SealTokenError::InvalidInput(_))
    ));

    let token = encrypt_text("x", PASSWORD).unwrap().token;
    assert!(matches!(
        decrypt_text(token.as_str(), ""),
        Err(SealTokenError::InvalidInput(_))
    ));
}

#[test]
fn malformed_token_fails_before_crypto() {
    let empty_object = BASE64.encode("{}");
    let array = BASE64.encode("[]");
    for bad in ["", "@@@", empty_object.as_str(), array.as_str()] {
        assert!(matches!(
            decrypt_file(bad, PASSWORD),
            Err(SealTokenError::MalformedToken)
        ));
        assert!(matches!(
            decrypt_text(bad, PASSWORD),
            Err(SealTokenError::MalformedToken)
        ));
    }
}

#[test]
fn same_input_twice_gives_different_tokens() {
    let a = encrypt_text("same", PASSWORD).unwrap().token;
    let b = encrypt_text("same", PASSWORD).unwrap().token;
    assert_ne!(a, b);

    let pa = decode(a.as_str()).unwrap();
    let pb = decode(b.as_str()).unwrap();
    assert_ne!(pa.salt, pb.salt);
    assert_ne!(pa.iv, pb.iv);

    assert_eq!(decrypt_text(a.as_str(), PASSWORD).unwrap(), "same");
    assert_eq!(decrypt_text(b.as_str(), PASSWORD).unwrap(), "same");
}

#[test]
fn tampered_fields_are_authentication_failures() {
    let token = encrypt_text("tamper me", PASSWORD).unwrap().token;
    let original = decode(token.as_str()).unwrap();

    let mut flipped_ct = original.clone();
    flipped_ct.ciphertext[3] ^= 0x04;
    let mut flipped_tag = original.clone();
    flipped_tag.tag[15] ^= 0x80;
    let mut flipped_iv = original.clone();
    flipped_iv.iv[0] ^= 0x01;

    for payload in [flipped_ct, flipped_tag, flipped_iv] {
        let retokened = encode(&payload).unwrap();
        assert!(matches!(
            decrypt_text(retokened.as_str(), PASSWORD),
            Err(SealTokenError::AuthenticationFailure)
        ));
    }
}

#[test]
fn flipped_salt_is_also_an_authentication_failure() {
    let token = encrypt_text("salted", PASSWORD).unwrap().token;
    let mut payload = decode(token.as_str()).unwrap();
    payload.salt[0] ^= 0x01;
    let retokened = encode(&payload).unwrap();
    assert!(matches!(
        decrypt_text(retokened.as_str(), PASSWORD),
        Err(SealTokenError::AuthenticationFailure)
    ));
}

#[test]
fn swapping_discriminant_does_not_bypass_authentication() {
    // Metadata is not authenticated, but changing it cannot change what
    // the ciphertext decrypts to.
    let token = encrypt_text("flip kind", PASSWORD).unwrap().token;
    let mut payload = decode(token.as_str()).unwrap();
    payload.kind = PayloadKind::File {
        filename: "x".into(),
        mime_type: "text/plain".into(),
    };
    let retokened = encode(&payload).unwrap();
    assert_eq!(
        decrypt_file(retokened.as_str(), PASSWORD).unwrap().bytes,
        b"flip kind"
    );
}

#[test]
fn concurrent_calls_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("message {i}");
                let token = encrypt_text(&text, PASSWORD).unwrap().token;
                assert_eq!(decrypt_text(token.as_str(), PASSWORD).unwrap(), text);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

// ---------------------------------------------------------------------------
// Properties (few cases: every case runs the KDF several times)
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_file_roundtrip(
        bytes in prop::collection::vec(any::<u8>(), 0..4096),
        password in "[ -~]{1,24}",
    ) {
        let result = encrypt_file(&plain_file(bytes.clone()), &password).unwrap();
        prop_assert_eq!(result.size, bytes.len() as u64);
        prop_assert_eq!(decrypt_file(result.token.as_str(), &password).unwrap().bytes, bytes);
    }

    #[test]
    fn prop_text_roundtrip(text in "\\PC{0,64}", password in "\\PC{1,16}") {
        let result = encrypt_text(&text, &password).unwrap();
        prop_assert_eq!(decrypt_text(result.token.as_str(), &password).unwrap(), text);
    }

    #[test]
    fn prop_wrong_password_fails(text in "\\PC{0,32}", a in "[a-z]{8,12}", b in "[A-Z]{8,12}") {
        let token = encrypt_text(&text, &a).unwrap().token;
        prop_assert!(matches!(
            decrypt_text(token.as_str(), &b),
            Err(SealTokenError::AuthenticationFailure)
        ));
    }
}
