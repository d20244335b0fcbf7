// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the MAYO signature scheme.

/// Errors that can occur during MAYO operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Variant name is not in the parameter table.
    #[error("unknown MAYO variant: {0}")]
    UnknownVariant(String),
    /// Key bytes do not match the variant's compact or expanded key
    /// length.
    #[error("key is {got} bytes, variant requires {expected}")]
    InvalidKeyLength {
        /// Length the variant requires.
        expected: usize,
        /// Length that was supplied.
        got: usize,
    },
    /// Signature bytes do not match ceil(n/2) + salt_bytes.
    #[error("signature is {got} bytes, variant requires {expected}")]
    InvalidSignatureLength {
        /// Length the variant requires.
        expected: usize,
        /// Length that was supplied.
        got: usize,
    },
    /// Seed bytes do not match the variant's seed length.
    #[error("seed is {got} bytes, variant requires {expected}")]
    InvalidSeedLength {
        /// Length the variant requires.
        expected: usize,
        /// Length that was supplied.
        got: usize,
    },
    /// Signed message too short to contain a signature.
    #[error("signed message too short: need at least {needed} bytes, got {got}")]
    InvalidMessageLength {
        /// Minimum length required.
        needed: usize,
        /// Actual length.
        got: usize,
    },
    /// Codec ran out of input mid-decode.
    #[error("insufficient bytes: need {needed}, got {got}")]
    InsufficientBytes {
        /// Bytes required to decode the requested elements.
        needed: usize,
        /// Bytes available.
        got: usize,
    },
    /// Matrix or vector shapes are incompatible for the operation.
    #[error("dimension mismatch in {op}")]
    DimensionMismatch {
        /// Operation that was attempted.
        op: &'static str,
    },
    /// Multiplicative inverse of zero requested.
    #[error("multiplicative inverse of zero in GF(16)")]
    FieldInverseOfZero,
    /// The system random source failed.
    #[error("secure randomness unavailable")]
    RandomnessUnavailable,
    /// The signing retry loop exhausted its bound without a solvable
    /// system.
    #[error("signing failed after maximum retries")]
    SignRetriesExhausted,
    /// Signature verification failed.
    #[error("verification failed")]
    VerificationFailed,
}

impl From<Error> for signature::Error {
    fn from(err: Error) -> Self {
        Self::from_source(err.to_string())
    }
}

/// Crate-wide result type.
pub type Result<T> = core::result::Result<T, Error>;
