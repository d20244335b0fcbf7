// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SHAKE256 and AES-128-CTR byte oracles.
//!
//! Every derivation in the scheme flows through the two primitives
//! wrapped here: a SHAKE256 extensible-output function and an
//! AES-128-CTR keystream with an all-zero initial block (the 32-bit
//! big-endian counter occupies the last four bytes).

use crate::params::MayoParams;
use aes::Aes128;
use ctr::cipher::{KeyIvInit, StreamCipher};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

type Aes128Ctr32 = ctr::Ctr32BE<Aes128>;

/// AES block size in bytes.
const AES_BLOCK_BYTES: usize = 16;

/// SHAKE256 with arbitrary output length.
pub(crate) fn shake256(input: &[u8], out_len: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    hasher.update(input);
    let mut reader = hasher.finalize_xof();
    let mut out = vec![0u8; out_len];
    reader.read(&mut out);
    out
}

/// Hash a message to its fixed-size digest.
pub(crate) fn digest_message(msg: &[u8], params: &MayoParams) -> Vec<u8> {
    shake256(msg, params.digest_bytes)
}

/// Derive `seed_pk || O_bytes` from the secret seed in a single SHAKE256
/// stream.
pub(crate) fn derive_pk_seed_and_o(seed_sk: &[u8], params: &MayoParams) -> (Vec<u8>, Vec<u8>) {
    let mut hasher = Shake256::default();
    hasher.update(seed_sk);
    let mut reader = hasher.finalize_xof();

    let mut seed_pk = vec![0u8; params.pk_seed_bytes];
    reader.read(&mut seed_pk);
    let mut o_bytes = vec![0u8; params.o_bytes()];
    reader.read(&mut o_bytes);

    (seed_pk, o_bytes)
}

/// Derive the packed target vector t from `digest || salt`.
pub(crate) fn derive_target_t(digest: &[u8], salt: &[u8], params: &MayoParams) -> Vec<u8> {
    let mut hasher = Shake256::default();
    hasher.update(digest);
    hasher.update(salt);
    let mut reader = hasher.finalize_xof();
    let mut t = vec![0u8; params.t_bytes()];
    reader.read(&mut t);
    t
}

/// AES-128-CTR keystream for a 16-byte key, counting from zero.
pub(crate) fn aes128_ctr_keystream(key: &[u8], out_len: usize) -> Vec<u8> {
    let iv = [0u8; AES_BLOCK_BYTES];
    let mut cipher = Aes128Ctr32::new(key[..AES_BLOCK_BYTES].into(), &iv.into());
    let mut out = vec![0u8; out_len];
    cipher.apply_keystream(&mut out);
    out
}

/// Expand the P1 and P2 byte strings from the public seed.
///
/// Both come from a single keystream; the P2 region begins at the first
/// whole AES block at or after the end of P1.
pub(crate) fn derive_p1_and_p2(seed_pk: &[u8], params: &MayoParams) -> (Vec<u8>, Vec<u8>) {
    let p1_len = params.p1_bytes();
    let p2_offset = p1_len.div_ceil(AES_BLOCK_BYTES) * AES_BLOCK_BYTES;
    let stream = aes128_ctr_keystream(seed_pk, p2_offset + params.p2_bytes());

    let p1 = stream[..p1_len].to_vec();
    let p2 = stream[p2_offset..].to_vec();
    (p1, p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shake256_empty_input_vector() {
        // FIPS-202 test vector: SHAKE256("", 32).
        let out = shake256(b"", 32);
        let expected = [
            0x46, 0xb9, 0xdd, 0x2b, 0x0b, 0xa8, 0x8d, 0x13, 0x23, 0x3b, 0x3f, 0xe1, 0x4f, 0x08,
            0x97, 0x0f, 0xc7, 0x52, 0x6f, 0x8c, 0x82, 0xfd, 0xc2, 0xc7, 0x2f, 0x06, 0x0f, 0x1e,
            0xc3, 0x45, 0x0c, 0x88,
        ];
        assert_eq!(out, expected);
    }

    #[test]
    fn shake256_is_prefix_consistent() {
        // An XOF's shorter output is a prefix of its longer one.
        let short = shake256(b"mayo", 16);
        let long = shake256(b"mayo", 64);
        assert_eq!(short, long[..16]);
    }

    #[test]
    fn seed_derivation_is_deterministic() {
        let params = &MayoParams::MAYO1;
        let seed = [0x42u8; 24];
        let (pk_a, o_a) = derive_pk_seed_and_o(&seed, params);
        let (pk_b, o_b) = derive_pk_seed_and_o(&seed, params);
        assert_eq!(pk_a, pk_b);
        assert_eq!(o_a, o_b);
        assert_eq!(pk_a.len(), params.pk_seed_bytes);
        assert_eq!(o_a.len(), params.o_bytes());

        // The single-stream split means pk_seed || o_bytes is the plain
        // SHAKE256 output of the seed.
        let whole = shake256(&seed, params.pk_seed_bytes + params.o_bytes());
        assert_eq!(&whole[..16], &pk_a[..]);
        assert_eq!(&whole[16..], &o_a[..]);
    }

    #[test]
    fn keystream_is_a_stream() {
        let key = [7u8; 16];
        let a = aes128_ctr_keystream(&key, 40);
        let b = aes128_ctr_keystream(&key, 80);
        assert_eq!(a, b[..40]);
        assert_ne!(a[..16], a[16..32]); // counter advances per block
    }

    #[test]
    fn p2_starts_on_a_block_boundary() {
        for params in MayoParams::variants() {
            let seed_pk = [3u8; 16];
            let (p1, p2) = derive_p1_and_p2(&seed_pk, params);
            assert_eq!(p1.len(), params.p1_bytes());
            assert_eq!(p2.len(), params.p2_bytes());

            let offset = params.p1_bytes().div_ceil(16) * 16;
            let stream = aes128_ctr_keystream(&seed_pk, offset + params.p2_bytes());
            assert_eq!(p2[..], stream[offset..]);
        }
    }

    #[test]
    fn target_depends_on_digest_and_salt() {
        let params = &MayoParams::MAYO1;
        let digest = digest_message(b"hello", params);
        assert_eq!(digest.len(), params.digest_bytes);

        let t1 = derive_target_t(&digest, &[0u8; 24], params);
        let t2 = derive_target_t(&digest, &[1u8; 24], params);
        assert_eq!(t1.len(), params.t_bytes());
        assert_ne!(t1, t2);
    }
}
