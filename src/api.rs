// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Byte-oriented entry points, keyed by variant name.
//!
//! These functions mirror the NIST-style API: compact keys, signatures,
//! and "signed messages" (signature followed by the message) are all
//! plain byte strings, and the variant is chosen by case-insensitive
//! name. There is no hidden global state; every call re-expands what it
//! needs and drops it on return.

use crate::error::{Error, Result};
use crate::keygen::{compact_key_gen, expand_pk, expand_sk};
use crate::params::MayoParams;
use crate::sign::sign_message;
use crate::verify::verify_signature;
use rand::rngs::OsRng;

/// Generate a compact keypair `(csk, cpk)` for the named variant.
pub fn keypair(variant: &str) -> Result<(Vec<u8>, Vec<u8>)> {
    let params = MayoParams::from_name(variant)?;
    let (csk, cpk) = compact_key_gen(params, &mut OsRng)?;
    Ok((csk.to_vec(), cpk))
}

/// Sign a message with a compact secret key.
///
/// Returns the detached signature bytes, `ceil(n/2) + salt_bytes` long.
pub fn sign(csk: &[u8], msg: &[u8], variant: &str) -> Result<Vec<u8>> {
    let params = MayoParams::from_name(variant)?;
    if csk.len() != params.csk_bytes() {
        return Err(Error::InvalidKeyLength {
            expected: params.csk_bytes(),
            got: csk.len(),
        });
    }
    let esk = expand_sk(csk, params)?;
    sign_message(&esk, msg, params, &mut OsRng)
}

/// Open a signed message (`signature || message`) with a compact public
/// key.
///
/// Returns the embedded message when the signature verifies, `None`
/// when it is well-formed but invalid.
pub fn open(cpk: &[u8], signed_message: &[u8], variant: &str) -> Result<Option<Vec<u8>>> {
    let params = MayoParams::from_name(variant)?;
    if cpk.len() != params.cpk_bytes() {
        return Err(Error::InvalidKeyLength {
            expected: params.cpk_bytes(),
            got: cpk.len(),
        });
    }
    let sig_len = params.sig_bytes();
    if signed_message.len() < sig_len {
        return Err(Error::InvalidMessageLength {
            needed: sig_len,
            got: signed_message.len(),
        });
    }
    let (sig, msg) = signed_message.split_at(sig_len);

    let epk = expand_pk(cpk, params)?;
    if verify_signature(&epk, msg, sig, params)? {
        Ok(Some(msg.to_vec()))
    } else {
        Ok(None)
    }
}
