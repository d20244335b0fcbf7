// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense matrix and vector algebra over GF(16).
//!
//! Matrices are flat row-major `u8` buffers, one element per byte. All
//! operations allocate their outputs; shape mismatches surface as
//! [`Error::DimensionMismatch`].

use crate::error::{Error, Result};
use crate::gf16::{add_f, mul_f, sub_f};
use zeroize::Zeroize;

/// A rectangular matrix over GF(16).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GFMatrix {
    data: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Zeroize for GFMatrix {
    fn zeroize(&mut self) {
        self.data.zeroize();
    }
}

impl GFMatrix {
    /// All-zero matrix of the given shape.
    pub(crate) fn zero(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Build a matrix from a flat row-major element buffer.
    pub(crate) fn from_data(rows: usize, cols: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub(crate) fn get(&self, r: usize, c: usize) -> u8 {
        self.data[r * self.cols + c]
    }

    #[inline]
    pub(crate) fn set(&mut self, r: usize, c: usize, val: u8) {
        self.data[r * self.cols + c] = val;
    }

    /// Element-wise sum.
    pub(crate) fn add(&self, other: &GFMatrix) -> Result<GFMatrix> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::DimensionMismatch { op: "matrix add" });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| add_f(a, b))
            .collect();
        Ok(GFMatrix::from_data(self.rows, self.cols, data))
    }

    /// Element-wise difference. Identical to [`GFMatrix::add`] in
    /// characteristic 2.
    #[allow(dead_code)]
    pub(crate) fn sub(&self, other: &GFMatrix) -> Result<GFMatrix> {
        self.add(other)
    }

    /// Multiply every element by a scalar.
    #[allow(dead_code)]
    pub(crate) fn scalar_mul(&self, scalar: u8) -> GFMatrix {
        let data = self.data.iter().map(|&a| mul_f(scalar, a)).collect();
        GFMatrix::from_data(self.rows, self.cols, data)
    }

    /// Standard matrix product `self * other`.
    pub(crate) fn mul(&self, other: &GFMatrix) -> Result<GFMatrix> {
        if self.cols != other.rows {
            return Err(Error::DimensionMismatch { op: "matrix mul" });
        }
        let mut out = GFMatrix::zero(self.rows, other.cols);
        for r in 0..self.rows {
            for k in 0..self.cols {
                let a = self.get(r, k);
                if a == 0 {
                    continue;
                }
                for c in 0..other.cols {
                    let prod = mul_f(a, other.get(k, c));
                    out.data[r * other.cols + c] ^= prod;
                }
            }
        }
        Ok(out)
    }

    /// Transpose.
    pub(crate) fn transpose(&self) -> GFMatrix {
        let mut out = GFMatrix::zero(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.set(c, r, self.get(r, c));
            }
        }
        out
    }

    /// Matrix times column vector.
    pub(crate) fn mat_vec(&self, v: &[u8]) -> Result<Vec<u8>> {
        if self.cols != v.len() {
            return Err(Error::DimensionMismatch { op: "mat_vec" });
        }
        let mut out = vec![0u8; self.rows];
        for r in 0..self.rows {
            let mut acc = 0u8;
            for c in 0..self.cols {
                acc = add_f(acc, mul_f(self.get(r, c), v[c]));
            }
            out[r] = acc;
        }
        Ok(out)
    }

    /// Row vector times matrix: `v^T * self`.
    pub(crate) fn vec_mat(&self, v: &[u8]) -> Result<Vec<u8>> {
        if self.rows != v.len() {
            return Err(Error::DimensionMismatch { op: "vec_mat" });
        }
        let mut out = vec![0u8; self.cols];
        for (r, &vr) in v.iter().enumerate() {
            if vr == 0 {
                continue;
            }
            for c in 0..self.cols {
                out[c] ^= mul_f(vr, self.get(r, c));
            }
        }
        Ok(out)
    }

    /// `self + self^T`. Requires a square matrix; the diagonal of the
    /// result is zero in characteristic 2.
    pub(crate) fn symmetrize(&self) -> Result<GFMatrix> {
        if self.rows != self.cols {
            return Err(Error::DimensionMismatch { op: "symmetrize" });
        }
        let n = self.rows;
        let mut out = GFMatrix::zero(n, n);
        for r in 0..n {
            for c in 0..n {
                out.set(r, c, add_f(self.get(r, c), self.get(c, r)));
            }
        }
        Ok(out)
    }

    /// Collapse a square matrix to upper-triangular form: diagonal kept,
    /// each pair of symmetric off-diagonal entries summed into the upper
    /// slot, lower triangle zeroed.
    pub(crate) fn fold_to_upper(&self) -> Result<GFMatrix> {
        if self.rows != self.cols {
            return Err(Error::DimensionMismatch { op: "fold_to_upper" });
        }
        let n = self.rows;
        let mut out = GFMatrix::zero(n, n);
        for r in 0..n {
            out.set(r, r, self.get(r, r));
            for c in r + 1..n {
                out.set(r, c, add_f(self.get(r, c), self.get(c, r)));
            }
        }
        Ok(out)
    }

    /// Evaluate the quadratic form encoded by the upper triangle:
    /// sum over r <= c of `self[r,c] * x[r] * x[c]`.
    ///
    /// The lower triangle is ignored, so this gives the same value on an
    /// upper-triangular matrix and on its mirrored symmetric twin.
    pub(crate) fn quad_form(&self, x: &[u8]) -> Result<u8> {
        if self.rows != self.cols || x.len() != self.rows {
            return Err(Error::DimensionMismatch { op: "quad_form" });
        }
        let mut acc = 0u8;
        for r in 0..self.rows {
            if x[r] == 0 {
                continue;
            }
            for c in r..self.cols {
                acc ^= mul_f(self.get(r, c), mul_f(x[r], x[c]));
            }
        }
        Ok(acc)
    }
}

/// Dot product of two equal-length vectors. Empty vectors dot to 0.
pub(crate) fn dot(a: &[u8], b: &[u8]) -> Result<u8> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch { op: "dot" });
    }
    let mut acc = 0u8;
    for (&x, &y) in a.iter().zip(b) {
        acc = add_f(acc, mul_f(x, y));
    }
    Ok(acc)
}

/// Element-wise vector difference (XOR).
pub(crate) fn vec_sub(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch { op: "vec_sub" });
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| sub_f(x, y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_sub_are_xor() {
        let a = GFMatrix::from_data(2, 2, vec![1, 2, 3, 4]);
        let b = GFMatrix::from_data(2, 2, vec![5, 6, 7, 8]);
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.data(), &[4, 4, 4, 12]);
        assert_eq!(a.sub(&b).unwrap().data(), sum.data());

        let c = GFMatrix::zero(1, 2);
        assert!(a.add(&c).is_err());
    }

    #[test]
    fn scalar_multiplication() {
        let m = GFMatrix::from_data(2, 2, vec![1, 2, 3, 8]);
        // x*1=2, x*x=4, x*(x+1)=6, x*x^3=x^4=3
        assert_eq!(m.scalar_mul(0x2).data(), &[2, 4, 6, 3]);
    }

    #[test]
    fn matrix_product() {
        let a = GFMatrix::from_data(2, 2, vec![1, 2, 3, 4]);
        let b = GFMatrix::from_data(2, 2, vec![5, 6, 7, 1]);
        // Worked out by hand over GF(16).
        assert_eq!(a.mul(&b).unwrap().data(), &[0xb, 0x4, 0x0, 0xe]);

        let id = GFMatrix::from_data(2, 2, vec![1, 0, 0, 1]);
        assert_eq!(a.mul(&id).unwrap().data(), a.data());
        assert_eq!(id.mul(&a).unwrap().data(), a.data());

        let c = GFMatrix::zero(3, 2);
        assert!(a.mul(&c).is_err());
    }

    #[test]
    fn transpose_reverses_product() {
        let a = GFMatrix::from_data(1, 2, vec![1, 2]);
        let b = GFMatrix::from_data(2, 1, vec![3, 4]);
        let ab_t = a.mul(&b).unwrap().transpose();
        let bt_at = b.transpose().mul(&a.transpose()).unwrap();
        assert_eq!(ab_t.data(), bt_at.data());
    }

    #[test]
    fn vector_products() {
        let m = GFMatrix::from_data(2, 3, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(m.mat_vec(&[1, 2, 3]).unwrap(), vec![0, 4]);
        assert!(m.mat_vec(&[1, 2]).is_err());

        let m2 = GFMatrix::from_data(3, 2, vec![1, 4, 2, 5, 3, 6]);
        assert_eq!(m2.vec_mat(&[1, 2, 3]).unwrap(), vec![0, 0x4]);
        assert!(m2.vec_mat(&[1, 2]).is_err());
    }

    #[test]
    fn dot_product() {
        assert_eq!(dot(&[1, 2, 3], &[4, 5, 6]).unwrap(), 0x4);
        assert_eq!(dot(&[], &[]).unwrap(), 0);
        assert!(dot(&[1], &[1, 2]).is_err());
    }

    #[test]
    fn symmetrize_zeroes_diagonal() {
        let u = GFMatrix::from_data(3, 3, vec![1, 2, 3, 0, 4, 5, 0, 0, 6]);
        let s = u.symmetrize().unwrap();
        assert_eq!(s.data(), &[0, 2, 3, 2, 0, 5, 3, 5, 0]);
        assert!(GFMatrix::zero(2, 3).symmetrize().is_err());
    }

    #[test]
    fn fold_to_upper_sums_mirror_entries() {
        let m = GFMatrix::from_data(2, 2, vec![7, 3, 5, 9]);
        let u = m.fold_to_upper().unwrap();
        assert_eq!(u.data(), &[7, 3 ^ 5, 0, 9]);
    }

    #[test]
    fn quad_form_matches_upper_triangle_polynomial() {
        // M upper-triangular: f(x) = 1*x0^2 + 2*x0*x1 + 3*x1^2.
        let m = GFMatrix::from_data(2, 2, vec![1, 2, 0, 3]);
        let x = [0x2u8, 0x3];
        // 1*4 + 2*(2*3=6 -> 2*6=c) + 3*(3*3=5 -> 3*5=f)
        let expected = 0x4 ^ 0xc ^ 0xf;
        assert_eq!(m.quad_form(&x).unwrap(), expected);

        // Same value on the mirrored symmetric twin.
        let mirrored = GFMatrix::from_data(2, 2, vec![1, 2, 2, 3]);
        assert_eq!(mirrored.quad_form(&x).unwrap(), expected);
    }

    #[test]
    fn vec_sub_is_elementwise_xor() {
        assert_eq!(vec_sub(&[5, 6, 7], &[1, 2, 3]).unwrap(), vec![4, 4, 4]);
        assert!(vec_sub(&[1], &[1, 2]).is_err());
    }
}
