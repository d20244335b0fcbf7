// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MAYO signing key.

use crate::error::{Error, Result};
use crate::keygen::expand_sk;
use crate::mayo_signature::Signature;
use crate::params::MayoParams;
use crate::sign::sign_message;
use blake2::{Blake2b512, Digest};
use rand::rngs::OsRng;
use rand::TryCryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A MAYO signing key (compact secret key = seed).
///
/// The seed is wiped from memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey {
    #[zeroize(skip)]
    params: &'static MayoParams,
    bytes: Vec<u8>,
}

impl SigningKey {
    /// Wrap a compact secret key, validating the length for the
    /// variant.
    pub fn from_bytes(params: &'static MayoParams, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != params.csk_bytes() {
            return Err(Error::InvalidKeyLength {
                expected: params.csk_bytes(),
                got: bytes.len(),
            });
        }
        Ok(Self {
            params,
            bytes: bytes.to_vec(),
        })
    }

    /// The variant this key belongs to.
    pub fn params(&self) -> &'static MayoParams {
        self.params
    }

    /// Sign a message using the operating system RNG.
    pub fn sign(&self, msg: &[u8]) -> Result<Signature> {
        self.sign_with_rng(&mut OsRng, msg)
    }

    /// Sign a message with an explicit RNG.
    ///
    /// Every retry draws its salt and vinegar from `rng`, so a seeded
    /// generator makes the whole signing run reproducible.
    pub fn sign_with_rng<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
    ) -> Result<Signature> {
        let esk = expand_sk(&self.bytes, self.params)?;
        let sig = sign_message(&esk, msg, self.params, rng)?;
        Signature::from_bytes(self.params, &sig)
    }

    /// Blake2b-512 fingerprint of the compact secret key.
    pub fn fingerprint(&self) -> [u8; 64] {
        let mut hasher = Blake2b512::new();
        hasher.update(&self.bytes);
        hasher.finalize().into()
    }
}

impl AsRef<[u8]> for SigningKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for SigningKey {
    fn eq(&self, other: &Self) -> bool {
        self.params.name == other.params.name && self.bytes == other.bytes
    }
}

impl Eq for SigningKey {}

impl core::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // The seed never reaches log output.
        f.debug_struct("SigningKey")
            .field("variant", &self.params.name)
            .field("seed", &"<redacted>")
            .finish()
    }
}

impl signature::Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> core::result::Result<Signature, signature::Error> {
        self.sign(msg).map_err(Into::into)
    }
}
