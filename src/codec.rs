// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Encoding and decoding of nibble-packed GF(16) elements.
//!
//! Element `2k` occupies the low nibble of byte `k`, element `2k+1` the
//! high nibble. A trailing odd element leaves the final high nibble
//! zero; decoders never read it.

use crate::error::{Error, Result};
use crate::matrix::GFMatrix;
use crate::params::{gf16_bytes, MayoParams};

/// Pack GF(16) elements into bytes, low nibble first.
pub(crate) fn encode_gf(elements: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0u8; gf16_bytes(elements.len())];
    for (i, &el) in elements.iter().enumerate() {
        let nibble = el & 0x0f;
        if i % 2 == 0 {
            bytes[i / 2] = nibble;
        } else {
            bytes[i / 2] |= nibble << 4;
        }
    }
    bytes
}

/// Unpack `count` GF(16) elements from bytes.
///
/// Fails with [`Error::InsufficientBytes`] when the input cannot supply
/// `count` nibbles. Surplus bytes are ignored.
pub(crate) fn decode_gf(bytes: &[u8], count: usize) -> Result<Vec<u8>> {
    let needed = gf16_bytes(count);
    if bytes.len() < needed {
        return Err(Error::InsufficientBytes {
            needed,
            got: bytes.len(),
        });
    }
    let mut elements = Vec::with_capacity(count);
    for i in 0..count {
        let byte = bytes[i / 2];
        if i % 2 == 0 {
            elements.push(byte & 0x0f);
        } else {
            elements.push(byte >> 4);
        }
    }
    Ok(elements)
}

/// Decode a `size x size` symmetric matrix from its upper-triangular
/// element list: entries are consumed row-major for r <= c, stored at
/// `[r,c]` and mirrored to `[c,r]`.
pub(crate) fn decode_upper_triangular(elements: &[u8], size: usize) -> Result<GFMatrix> {
    decode_triangular(elements, size, true)
}

/// Decode a `size x size` matrix from its upper-triangular element list
/// without mirroring; the lower triangle stays zero. This is the view
/// key expansion needs to form P1 + P1^T.
pub(crate) fn decode_upper_triangular_raw(elements: &[u8], size: usize) -> Result<GFMatrix> {
    decode_triangular(elements, size, false)
}

fn decode_triangular(elements: &[u8], size: usize, mirror: bool) -> Result<GFMatrix> {
    let expected = size * (size + 1) / 2;
    if elements.len() != expected {
        return Err(Error::InsufficientBytes {
            needed: expected,
            got: elements.len(),
        });
    }
    let mut matrix = GFMatrix::zero(size, size);
    let mut k = 0;
    for r in 0..size {
        for c in r..size {
            matrix.set(r, c, elements[k]);
            if mirror && r != c {
                matrix.set(c, r, elements[k]);
            }
            k += 1;
        }
    }
    Ok(matrix)
}

/// Pack the upper triangle of a square matrix, row-major for r <= c.
pub(crate) fn encode_upper_triangular(matrix: &GFMatrix) -> Vec<u8> {
    let size = matrix.rows();
    let mut elements = Vec::with_capacity(size * (size + 1) / 2);
    for r in 0..size {
        for c in r..size {
            elements.push(matrix.get(r, c));
        }
    }
    encode_gf(&elements)
}

/// Decode the secret O matrix (v x o, dense row-major).
pub(crate) fn decode_o_matrix(bytes: &[u8], params: &MayoParams) -> Result<GFMatrix> {
    let elements = decode_gf(bytes, params.v() * params.o)?;
    Ok(GFMatrix::from_data(params.v(), params.o, elements))
}

/// Decode the m P1 matrices (upper-triangular v x v, mirrored to
/// symmetric form).
pub(crate) fn decode_p1_matrices(bytes: &[u8], params: &MayoParams) -> Result<Vec<GFMatrix>> {
    decode_triangular_family(bytes, params, params.v(), params.p1_mat_bytes(), true)
}

/// Decode the m P1 matrices keeping the raw upper-triangular view.
pub(crate) fn decode_p1_matrices_raw(bytes: &[u8], params: &MayoParams) -> Result<Vec<GFMatrix>> {
    decode_triangular_family(bytes, params, params.v(), params.p1_mat_bytes(), false)
}

/// Decode the m P3 matrices (upper-triangular o x o, mirrored).
pub(crate) fn decode_p3_matrices(bytes: &[u8], params: &MayoParams) -> Result<Vec<GFMatrix>> {
    decode_triangular_family(bytes, params, params.o, params.p3_mat_bytes(), true)
}

fn decode_triangular_family(
    bytes: &[u8],
    params: &MayoParams,
    size: usize,
    chunk_bytes: usize,
    mirror: bool,
) -> Result<Vec<GFMatrix>> {
    let needed = params.m * chunk_bytes;
    if bytes.len() != needed {
        return Err(Error::InsufficientBytes {
            needed,
            got: bytes.len(),
        });
    }
    let count = size * (size + 1) / 2;
    let mut matrices = Vec::with_capacity(params.m);
    for chunk in bytes.chunks_exact(chunk_bytes) {
        let elements = decode_gf(chunk, count)?;
        let matrix = if mirror {
            decode_upper_triangular(&elements, size)?
        } else {
            decode_upper_triangular_raw(&elements, size)?
        };
        matrices.push(matrix);
    }
    Ok(matrices)
}

/// Decode the m P2 matrices (dense v x o, row-major).
pub(crate) fn decode_p2_matrices(bytes: &[u8], params: &MayoParams) -> Result<Vec<GFMatrix>> {
    decode_dense_family(bytes, params)
}

/// Decode the m L matrices; same dense v x o layout as P2.
pub(crate) fn decode_l_matrices(bytes: &[u8], params: &MayoParams) -> Result<Vec<GFMatrix>> {
    decode_dense_family(bytes, params)
}

fn decode_dense_family(bytes: &[u8], params: &MayoParams) -> Result<Vec<GFMatrix>> {
    let chunk_bytes = params.p2_mat_bytes();
    let needed = params.m * chunk_bytes;
    if bytes.len() != needed {
        return Err(Error::InsufficientBytes {
            needed,
            got: bytes.len(),
        });
    }
    let rows = params.v();
    let cols = params.o;
    let mut matrices = Vec::with_capacity(params.m);
    for chunk in bytes.chunks_exact(chunk_bytes) {
        let elements = decode_gf(chunk, rows * cols)?;
        matrices.push(GFMatrix::from_data(rows, cols, elements));
    }
    Ok(matrices)
}

/// Pack the solution vector s (n elements).
pub(crate) fn encode_s_vector(s: &[u8]) -> Vec<u8> {
    encode_gf(s)
}

/// Unpack the solution vector s. The byte length must be exactly
/// ceil(n/2).
pub(crate) fn decode_s_vector(bytes: &[u8], params: &MayoParams) -> Result<Vec<u8>> {
    if bytes.len() != params.s_bytes() {
        return Err(Error::InsufficientBytes {
            needed: params.s_bytes(),
            got: bytes.len(),
        });
    }
    decode_gf(bytes, params.n)
}
