// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MAYO keypair generation.

use crate::error::{Error, Result};
use crate::keygen::compact_key_gen;
use crate::params::MayoParams;
use crate::signing_key::SigningKey;
use crate::verifying_key::VerifyingKey;
use rand::TryCryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A MAYO keypair containing both signing and verifying keys.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl KeyPair {
    /// Generate a new random keypair for the given variant.
    pub fn generate<R: TryCryptoRng + ?Sized>(
        params: &'static MayoParams,
        rng: &mut R,
    ) -> Result<Self> {
        let (csk, cpk) = compact_key_gen(params, rng)?;
        Ok(Self {
            signing_key: SigningKey::from_bytes(params, &csk)?,
            verifying_key: VerifyingKey::from_bytes(params, &cpk)?,
        })
    }

    /// Derive a keypair deterministically from a seed.
    ///
    /// The seed must be exactly `sk_seed_bytes` long; it becomes the
    /// compact secret key.
    pub fn from_seed(params: &'static MayoParams, seed: &[u8]) -> Result<Self> {
        if seed.len() != params.sk_seed_bytes {
            return Err(Error::InvalidSeedLength {
                expected: params.sk_seed_bytes,
                got: seed.len(),
            });
        }
        let signing_key = SigningKey::from_bytes(params, seed)?;
        let verifying_key = VerifyingKey::try_from(&signing_key)?;
        Ok(Self {
            signing_key,
            verifying_key,
        })
    }

    /// Construct a keypair from a signing key, deriving the matching
    /// verifying key.
    pub fn from_signing_key(signing_key: SigningKey) -> Result<Self> {
        let verifying_key = VerifyingKey::try_from(&signing_key)?;
        Ok(Self {
            signing_key,
            verifying_key,
        })
    }

    /// Get a reference to the signing key.
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// Get a reference to the verifying key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl AsRef<VerifyingKey> for KeyPair {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl signature::KeypairRef for KeyPair {
    type VerifyingKey = VerifyingKey;
}

impl core::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyPair")
            .field("variant", &self.signing_key.params().name)
            .field("signing_key", &self.signing_key)
            .field("verifying_key", &self.verifying_key)
            .finish()
    }
}

impl Zeroize for KeyPair {
    fn zeroize(&mut self) {
        self.signing_key.zeroize();
    }
}

impl ZeroizeOnDrop for KeyPair {}
