// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MAYO signature generation.
//!
//! The signer fixes random vinegar variables, which turns the quadratic
//! public map into a linear system in the oil variables. Degenerate
//! systems are handled by resampling salt and vinegar, up to a fixed
//! retry bound.

use crate::codec::{
    decode_gf, decode_l_matrices, decode_o_matrix, decode_p1_matrices, encode_s_vector,
};
use crate::error::{Error, Result};
use crate::kdf::{derive_target_t, digest_message};
use crate::matrix::{vec_sub, GFMatrix};
use crate::params::MayoParams;
use crate::solver::{solve, Solution};
use rand::TryCryptoRng;
use zeroize::Zeroizing;

/// Bound on salt/vinegar resampling before signing gives up.
pub(crate) const MAX_SIGN_RETRIES: usize = 256;

/// Sign a message with an expanded secret key, producing
/// `s_bytes || salt`.
pub(crate) fn sign_message<R: TryCryptoRng + ?Sized>(
    esk: &[u8],
    msg: &[u8],
    params: &MayoParams,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let v = params.v();

    // esk = seed_sk || O_bytes || P1_all || L_all
    if esk.len() != params.esk_bytes() {
        return Err(Error::InvalidKeyLength {
            expected: params.esk_bytes(),
            got: esk.len(),
        });
    }
    let o_start = params.sk_seed_bytes;
    let p1_start = o_start + params.o_bytes();
    let l_start = p1_start + params.p1_bytes();

    let o_matrix = Zeroizing::new(decode_o_matrix(&esk[o_start..p1_start], params)?);
    let p1 = decode_p1_matrices(&esk[p1_start..l_start], params)?;
    let l_mats = Zeroizing::new(decode_l_matrices(&esk[l_start..], params)?);

    let digest = digest_message(msg, params);

    for _ in 0..MAX_SIGN_RETRIES {
        // Fresh salt and vinegar on every attempt.
        let mut salt = vec![0u8; params.salt_bytes];
        rng.try_fill_bytes(&mut salt)
            .map_err(|_| Error::RandomnessUnavailable)?;

        let t = decode_gf(&derive_target_t(&digest, &salt, params), params.m)?;

        let mut vinegar_raw = Zeroizing::new(vec![0u8; v]);
        rng.try_fill_bytes(&mut vinegar_raw)
            .map_err(|_| Error::RandomnessUnavailable)?;
        let s_v: Zeroizing<Vec<u8>> =
            Zeroizing::new(vinegar_raw.iter().map(|&b| b & 0x0f).collect());

        // Linearize: row i of A is s_V^T * L_i, and y'_i is the vinegar
        // part of the public map.
        let mut a_data = Vec::with_capacity(params.m * params.o);
        let mut y_prime = Vec::with_capacity(params.m);
        for i in 0..params.m {
            y_prime.push(p1[i].quad_form(&s_v)?);
            a_data.extend_from_slice(&l_mats[i].vec_mat(&s_v)?);
        }
        let a = GFMatrix::from_data(params.m, params.o, a_data);
        let target = vec_sub(&t, &y_prime)?;

        let x = match solve(&a, &target)? {
            Solution::Unique(x) => Zeroizing::new(x),
            Solution::NotUnique | Solution::NoSolution => continue,
        };

        // s = (s_V + O*x) || x
        let ox = Zeroizing::new(o_matrix.mat_vec(&x)?);
        let mut s = Zeroizing::new(Vec::with_capacity(params.n));
        for j in 0..v {
            s.push(s_v[j] ^ ox[j]);
        }
        s.extend_from_slice(&x);

        let mut sig = encode_s_vector(&s);
        sig.extend_from_slice(&salt);
        debug_assert_eq!(sig.len(), params.sig_bytes());
        return Ok(sig);
    }

    Err(Error::SignRetriesExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::{compact_key_gen, expand_sk};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn signature_has_exact_length() {
        for params in MayoParams::variants() {
            let mut rng = StdRng::from_seed([9; 32]);
            let (csk, _) = compact_key_gen(params, &mut rng).unwrap();
            let esk = expand_sk(&csk, params).unwrap();
            let sig = sign_message(&esk, b"length check", params, &mut rng).unwrap();
            assert_eq!(sig.len(), params.sig_bytes());
        }
    }

    #[test]
    fn fresh_salt_per_signature() {
        let params = &MayoParams::MAYO1;
        let mut rng = StdRng::from_seed([1; 32]);
        let (csk, _) = compact_key_gen(params, &mut rng).unwrap();
        let esk = expand_sk(&csk, params).unwrap();

        let sig_a = sign_message(&esk, b"same message", params, &mut rng).unwrap();
        let sig_b = sign_message(&esk, b"same message", params, &mut rng).unwrap();
        let salt_at = params.s_bytes();
        assert_ne!(sig_a[salt_at..], sig_b[salt_at..]);
    }

    #[test]
    fn truncated_esk_is_rejected() {
        let params = &MayoParams::MAYO1;
        let mut rng = StdRng::from_seed([2; 32]);
        let (csk, _) = compact_key_gen(params, &mut rng).unwrap();
        let esk = expand_sk(&csk, params).unwrap();
        assert!(matches!(
            sign_message(&esk[..esk.len() - 1], b"x", params, &mut rng),
            Err(Error::InvalidKeyLength { .. })
        ));
    }
}
