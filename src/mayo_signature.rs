// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MAYO signature type.

use crate::error::Error;
use crate::params::MayoParams;

/// A MAYO signature: the packed solution vector followed by the salt.
#[derive(Clone)]
pub struct Signature {
    params: &'static MayoParams,
    bytes: Vec<u8>,
}

impl Signature {
    /// Wrap signature bytes, validating the length for the variant.
    pub fn from_bytes(params: &'static MayoParams, bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != params.sig_bytes() {
            return Err(Error::InvalidSignatureLength {
                expected: params.sig_bytes(),
                got: bytes.len(),
            });
        }
        Ok(Self {
            params,
            bytes: bytes.to_vec(),
        })
    }

    /// The variant this signature belongs to.
    pub fn params(&self) -> &'static MayoParams {
        self.params
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.params.name == other.params.name && self.bytes == other.bytes
    }
}

impl Eq for Signature {}

impl core::fmt::Debug for Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Signature")
            .field("variant", &self.params.name)
            .field("bytes", &hex::encode(&self.bytes))
            .finish()
    }
}

impl From<Signature> for Vec<u8> {
    fn from(sig: Signature) -> Vec<u8> {
        sig.bytes
    }
}
