// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MAYO signature verification.
//!
//! Evaluates the public map P*(s) and compares it against the target
//! vector in constant time. Cryptographic rejection is reported as
//! `Ok(false)`; only malformed inputs produce errors.

use crate::codec::{
    decode_gf, decode_p1_matrices, decode_p2_matrices, decode_p3_matrices, decode_s_vector,
};
use crate::error::{Error, Result};
use crate::kdf::{derive_target_t, digest_message};
use crate::matrix::{dot, GFMatrix};
use crate::params::MayoParams;
use subtle::ConstantTimeEq;

/// Evaluate the public map at s:
/// `y_i = s_V^T P1_i s_V + s_V^T P2_i s_O + s_O^T P3_i s_O`.
fn eval_public_map(
    s: &[u8],
    p1: &[GFMatrix],
    p2: &[GFMatrix],
    p3: &[GFMatrix],
    params: &MayoParams,
) -> Result<Vec<u8>> {
    let (s_v, s_o) = s.split_at(params.v());

    let mut y = Vec::with_capacity(params.m);
    for i in 0..params.m {
        let vinegar_term = p1[i].quad_form(s_v)?;
        let cross_term = dot(&p2[i].vec_mat(s_v)?, s_o)?;
        let oil_term = p3[i].quad_form(s_o)?;
        y.push(vinegar_term ^ cross_term ^ oil_term);
    }
    Ok(y)
}

/// Verify a signature against a message and an expanded public key.
pub(crate) fn verify_signature(
    epk: &[u8],
    msg: &[u8],
    sig: &[u8],
    params: &MayoParams,
) -> Result<bool> {
    if epk.len() != params.epk_bytes() {
        return Err(Error::InvalidKeyLength {
            expected: params.epk_bytes(),
            got: epk.len(),
        });
    }
    if sig.len() != params.sig_bytes() {
        return Err(Error::InvalidSignatureLength {
            expected: params.sig_bytes(),
            got: sig.len(),
        });
    }

    let p2_start = params.p1_bytes();
    let p3_start = p2_start + params.p2_bytes();
    let p1 = decode_p1_matrices(&epk[..p2_start], params)?;
    let p2 = decode_p2_matrices(&epk[p2_start..p3_start], params)?;
    let p3 = decode_p3_matrices(&epk[p3_start..], params)?;

    let (s_bytes, salt) = sig.split_at(params.s_bytes());
    let s = decode_s_vector(s_bytes, params)?;

    let digest = digest_message(msg, params);
    let t = decode_gf(&derive_target_t(&digest, salt, params), params.m)?;

    let y = eval_public_map(&s, &p1, &p2, &p3, params)?;

    Ok(y.ct_eq(&t).into())
}
