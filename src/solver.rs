// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear-system solving over GF(16).
//!
//! Gauss-Jordan elimination with column pivoting on the augmented
//! matrix. The outcome is a three-way sum: a unique solution, or one of
//! two degenerate verdicts the signer treats as "retry".

use crate::error::{Error, Result};
use crate::gf16::{inv_f, mul_f};
use crate::matrix::GFMatrix;

/// Outcome of [`solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Solution {
    /// The system has exactly one solution.
    Unique(Vec<u8>),
    /// The system is consistent but underdetermined (rank below the
    /// number of unknowns).
    NotUnique,
    /// The system is inconsistent.
    NoSolution,
}

/// Solve `A x = y` for x, with A an `m x o` matrix over GF(16).
pub(crate) fn solve(a: &GFMatrix, y: &[u8]) -> Result<Solution> {
    let m = a.rows();
    let o = a.cols();
    if y.len() != m {
        return Err(Error::DimensionMismatch { op: "solve" });
    }
    if o == 0 {
        // Nothing to solve for; consistent iff y is all zero.
        return if y.iter().all(|&e| e == 0) {
            Ok(Solution::Unique(Vec::new()))
        } else {
            Ok(Solution::NoSolution)
        };
    }
    if m == 0 {
        return Ok(Solution::NotUnique);
    }

    // Augmented matrix [A | y], flat row-major.
    let cols = o + 1;
    let mut aug = vec![0u8; m * cols];
    for r in 0..m {
        for c in 0..o {
            aug[r * cols + c] = a.get(r, c);
        }
        aug[r * cols + o] = y[r];
    }

    // Gauss-Jordan with column pivoting.
    let mut pr = 0;
    let mut pc = 0;
    while pr < m && pc < o {
        let Some(pivot) = (pr..m).find(|&r| aug[r * cols + pc] != 0) else {
            // Free column.
            pc += 1;
            continue;
        };
        if pivot != pr {
            for c in 0..cols {
                aug.swap(pr * cols + c, pivot * cols + c);
            }
        }

        let inv = inv_f(aug[pr * cols + pc])?;
        for c in pc..cols {
            aug[pr * cols + c] = mul_f(aug[pr * cols + c], inv);
        }

        for q in 0..m {
            if q == pr {
                continue;
            }
            let factor = aug[q * cols + pc];
            if factor == 0 {
                continue;
            }
            for c in pc..cols {
                let scaled = mul_f(factor, aug[pr * cols + c]);
                aug[q * cols + c] ^= scaled;
            }
        }

        pr += 1;
        pc += 1;
    }
    let rank = pr;

    // Any all-zero row with a nonzero augmented entry means the system
    // is inconsistent.
    for r in 0..m {
        let leading_zero = (0..o).all(|c| aug[r * cols + c] == 0);
        if leading_zero && aug[r * cols + o] != 0 {
            return Ok(Solution::NoSolution);
        }
    }

    if rank < o {
        return Ok(Solution::NotUnique);
    }

    // Back-substitute from the last unknown upward.
    let mut x = vec![0u8; o];
    for r in (0..o).rev() {
        let mut val = aug[r * cols + o];
        for c in r + 1..o {
            val ^= mul_f(aug[r * cols + c], x[c]);
        }
        x[r] = val;
    }

    Ok(Solution::Unique(x))
}
