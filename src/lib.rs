// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MAYO post-quantum signature scheme.
//!
//! This crate implements the cryptographic core of MAYO, a multivariate
//! signature scheme from the oil-and-vinegar family: the signer knows a
//! secret linear subspace of the solution space of a quadratic map over
//! GF(16) and uses it to turn signing into solving a small linear
//! system.
//!
//! # Supported Parameter Sets
//!
//! - [`MayoParams::MAYO1`] (n=66, m=64, o=8)
//! - [`MayoParams::MAYO2`] (n=78, m=64, o=18)
//!
//! Variants are resolved by case-insensitive name at the API edge.
//!
//! # Example
//!
//! ```
//! use mayo_core::{KeyPair, MayoParams};
//! use signature::{Signer, Verifier};
//!
//! let mut rng = rand::rng();
//! let keypair = KeyPair::generate(&MayoParams::MAYO1, &mut rng).expect("keygen");
//! let msg = b"hello world";
//!
//! let sig = keypair.signing_key().try_sign(msg).expect("sign");
//! keypair.verifying_key().verify(msg, &sig).expect("verify");
//! ```
//!
//! A byte-oriented API keyed by variant name is available in [`api`]:
//!
//! ```
//! let (csk, cpk) = mayo_core::api::keypair("mayo1").expect("keygen");
//! let sig = mayo_core::api::sign(&csk, b"msg", "mayo1").expect("sign");
//!
//! let mut signed = sig.clone();
//! signed.extend_from_slice(b"msg");
//! let opened = mayo_core::api::open(&cpk, &signed, "mayo1").expect("open");
//! assert_eq!(opened.as_deref(), Some(&b"msg"[..]));
//! ```

pub mod api;
pub mod error;
pub mod keypair;
pub mod mayo_signature;
pub mod params;
pub mod signing_key;
pub mod verifying_key;

mod codec;
mod gf16;
mod kdf;
mod keygen;
mod matrix;
mod sign;
mod solver;
mod verify;

pub use error::Error;
pub use keypair::KeyPair;
pub use mayo_signature::Signature;
pub use params::MayoParams;
pub use signing_key::SigningKey;
pub use verifying_key::VerifyingKey;
