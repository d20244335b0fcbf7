// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MAYO verifying (public) key.

use crate::error::{Error, Result};
use crate::keygen::{derive_cpk_from_csk, expand_pk};
use crate::mayo_signature::Signature;
use crate::params::MayoParams;
use crate::signing_key::SigningKey;
use crate::verify::verify_signature;

/// A MAYO verifying key (compact public key).
#[derive(Clone)]
pub struct VerifyingKey {
    params: &'static MayoParams,
    bytes: Vec<u8>,
}

impl VerifyingKey {
    /// Wrap a compact public key, validating the length for the
    /// variant.
    pub fn from_bytes(params: &'static MayoParams, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != params.cpk_bytes() {
            return Err(Error::InvalidKeyLength {
                expected: params.cpk_bytes(),
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

    /// Check a signature over a message.
    ///
    /// `Ok(false)` means the signature is well-formed but does not
    /// verify; errors are reserved for malformed inputs.
    pub fn is_valid(&self, msg: &[u8], signature: &Signature) -> Result<bool> {
        let epk = expand_pk(&self.bytes, self.params)?;
        verify_signature(&epk, msg, signature.as_ref(), self.params)
    }
}

impl AsRef<[u8]> for VerifyingKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for VerifyingKey {
    fn eq(&self, other: &Self) -> bool {
        self.params.name == other.params.name && self.bytes == other.bytes
    }
}

impl Eq for VerifyingKey {}

impl core::fmt::Debug for VerifyingKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VerifyingKey")
            .field("variant", &self.params.name)
            .field("bytes", &hex::encode(&self.bytes))
            .finish()
    }
}

impl TryFrom<&SigningKey> for VerifyingKey {
    type Error = Error;

    fn try_from(sk: &SigningKey) -> Result<Self> {
        let cpk = derive_cpk_from_csk(sk.as_ref(), sk.params())?;
        Ok(Self {
            params: sk.params(),
            bytes: cpk,
        })
    }
}

impl signature::Verifier<Signature> for VerifyingKey {
    fn verify(
        &self,
        msg: &[u8],
        signature: &Signature,
    ) -> core::result::Result<(), signature::Error> {
        match self.is_valid(msg, signature) {
            Ok(true) => Ok(()),
            Ok(false) => Err(Error::VerificationFailed.into()),
            Err(e) => Err(e.into()),
        }
    }
}
