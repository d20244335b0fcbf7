//! Byte-level API tests: keypair/sign/open keyed by variant name.

use mayo_core::{api, Error, MayoParams};

#[test]
fn open_returns_the_message() {
    for params in MayoParams::variants() {
        let (csk, cpk) = api::keypair(params.name).expect("keygen failed");
        assert_eq!(csk.len(), params.csk_bytes());
        assert_eq!(cpk.len(), params.cpk_bytes());

        let msg = b"signed message framing";
        let sig = api::sign(&csk, msg, params.name).expect("signing failed");
        assert_eq!(sig.len(), params.sig_bytes());

        let mut signed = sig.clone();
        signed.extend_from_slice(msg);
        let opened = api::open(&cpk, &signed, params.name).expect("open failed");
        assert_eq!(opened.as_deref(), Some(&msg[..]));
    }
}

#[test]
fn open_rejects_tampered_signature() {
    let (csk, cpk) = api::keypair("mayo1").expect("keygen failed");
    let msg = b"The quick brown fox";
    let sig = api::sign(&csk, msg, "mayo1").expect("signing failed");

    let mut signed = sig;
    signed[0] ^= 0x01; // flip one bit in the signature portion
    signed.extend_from_slice(msg);
    let opened = api::open(&cpk, &signed, "mayo1").expect("open failed");
    assert_eq!(opened, None);
}

#[test]
fn open_round_trips_empty_message() {
    let (csk, cpk) = api::keypair("MAYO1").expect("keygen failed");
    let signed = api::sign(&csk, b"", "MAYO1").expect("signing failed");
    // signed message == bare signature when the message is empty
    let opened = api::open(&cpk, &signed, "MAYO1").expect("open failed");
    assert_eq!(opened.as_deref(), Some(&b""[..]));
}

#[test]
fn unknown_variant_is_reported() {
    assert!(matches!(
        api::keypair("mayo9"),
        Err(Error::UnknownVariant(_))
    ));
    assert!(matches!(
        api::sign(&[0u8; 24], b"m", "nope"),
        Err(Error::UnknownVariant(_))
    ));
    assert!(matches!(
        api::open(&[], &[], ""),
        Err(Error::UnknownVariant(_))
    ));
}

#[test]
fn bad_key_lengths_are_reported() {
    let params = &MayoParams::MAYO1;
    assert!(matches!(
        api::sign(&[0u8; 23], b"m", "mayo1"),
        Err(Error::InvalidKeyLength { expected: 24, .. })
    ));
    assert!(matches!(
        api::open(&vec![0u8; params.cpk_bytes() - 1], &[0u8; 100], "mayo1"),
        Err(Error::InvalidKeyLength { .. })
    ));
}

#[test]
fn short_signed_message_is_reported() {
    let (_, cpk) = api::keypair("mayo1").expect("keygen failed");
    let too_short = vec![0u8; MayoParams::MAYO1.sig_bytes() - 1];
    assert!(matches!(
        api::open(&cpk, &too_short, "mayo1"),
        Err(Error::InvalidMessageLength { .. })
    ));
}
