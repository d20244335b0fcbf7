// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MAYO key generation and key expansion.
//!
//! CompactKeyGen samples the secret seed and derives the compact public
//! key; ExpandSK and ExpandPK inflate the compact keys into the dense
//! matrix material consumed by signing and verification.

use crate::codec::{
    decode_o_matrix, decode_p1_matrices_raw, decode_p2_matrices, encode_upper_triangular,
};
use crate::error::{Error, Result};
use crate::kdf::{derive_p1_and_p2, derive_pk_seed_and_o};
use crate::params::MayoParams;
use rand::TryCryptoRng;
use zeroize::{Zeroize, Zeroizing};

/// Generate a compact keypair: `(csk, cpk)`.
///
/// The compact secret key is the seed itself; the compact public key is
/// `seed_pk || P3`.
pub(crate) fn compact_key_gen<R: TryCryptoRng + ?Sized>(
    params: &MayoParams,
    rng: &mut R,
) -> Result<(Zeroizing<Vec<u8>>, Vec<u8>)> {
    let mut seed_sk = Zeroizing::new(vec![0u8; params.sk_seed_bytes]);
    rng.try_fill_bytes(&mut seed_sk)
        .map_err(|_| Error::RandomnessUnavailable)?;

    let cpk = derive_cpk_from_csk(&seed_sk, params)?;
    Ok((seed_sk, cpk))
}

/// Derive the compact public key from a compact secret key.
///
/// P3_i is the upper-triangular fold of `O^T * (P1_i * O + P2_i)`, so
/// the public map vanishes appropriately on the secret oil subspace.
pub(crate) fn derive_cpk_from_csk(csk: &[u8], params: &MayoParams) -> Result<Vec<u8>> {
    let (seed_pk, o_bytes) = derive_pk_seed_and_o(csk, params);
    let o_bytes = Zeroizing::new(o_bytes);
    let (p1_all, p2_all) = derive_p1_and_p2(&seed_pk, params);

    let o_matrix = Zeroizing::new(decode_o_matrix(&o_bytes, params)?);
    let p1 = decode_p1_matrices_raw(&p1_all, params)?;
    let p2 = decode_p2_matrices(&p2_all, params)?;
    let o_t = o_matrix.transpose();

    let mut cpk = Vec::with_capacity(params.cpk_bytes());
    cpk.extend_from_slice(&seed_pk);
    for i in 0..params.m {
        let inner = p1[i].mul(&o_matrix)?.add(&p2[i])?;
        let p3_i = o_t.mul(&inner)?.fold_to_upper()?;
        cpk.extend_from_slice(&encode_upper_triangular(&p3_i));
    }

    debug_assert_eq!(cpk.len(), params.cpk_bytes());
    Ok(cpk)
}

/// Expand a compact secret key into
/// `seed_sk || O_bytes || P1_all || L_all`.
///
/// `L_i = (P1_i + P1_i^T) * O + P2_i`, computed from the raw
/// upper-triangular view of P1 so the diagonal cancels.
pub(crate) fn expand_sk(csk: &[u8], params: &MayoParams) -> Result<Zeroizing<Vec<u8>>> {
    if csk.len() != params.sk_seed_bytes {
        return Err(Error::InvalidKeyLength {
            expected: params.sk_seed_bytes,
            got: csk.len(),
        });
    }

    let (seed_pk, o_bytes) = derive_pk_seed_and_o(csk, params);
    let o_bytes = Zeroizing::new(o_bytes);
    let (p1_all, p2_all) = derive_p1_and_p2(&seed_pk, params);

    let o_matrix = Zeroizing::new(decode_o_matrix(&o_bytes, params)?);
    let p1 = decode_p1_matrices_raw(&p1_all, params)?;
    let p2 = decode_p2_matrices(&p2_all, params)?;

    let mut esk = Zeroizing::new(Vec::with_capacity(params.esk_bytes()));
    esk.extend_from_slice(csk);
    esk.extend_from_slice(&o_bytes);
    esk.extend_from_slice(&p1_all);
    for i in 0..params.m {
        let mut l_i = p1[i].symmetrize()?.mul(&o_matrix)?.add(&p2[i])?;
        esk.extend_from_slice(&crate::codec::encode_gf(l_i.data()));
        l_i.zeroize();
    }

    debug_assert_eq!(esk.len(), params.esk_bytes());
    Ok(esk)
}

/// Expand a compact public key into `P1_all || P2_all || P3_all`.
pub(crate) fn expand_pk(cpk: &[u8], params: &MayoParams) -> Result<Vec<u8>> {
    if cpk.len() != params.cpk_bytes() {
        return Err(Error::InvalidKeyLength {
            expected: params.cpk_bytes(),
            got: cpk.len(),
        });
    }
    let (seed_pk, p3_all) = cpk.split_at(params.pk_seed_bytes);
    let (p1_all, p2_all) = derive_p1_and_p2(seed_pk, params);

    let mut epk = Vec::with_capacity(params.epk_bytes());
    epk.extend_from_slice(&p1_all);
    epk.extend_from_slice(&p2_all);
    epk.extend_from_slice(p3_all);
    Ok(epk)
}
