use std::io::Read;

use serde::{Deserialize, Serialize};

use super::errors::AuthParamError;

/// The raw value of an authentication parameter that is not decoded into a
/// typed value, e.g. an expanded EAP method or a vendor specific parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpaqueAuthParam(pub(super) Vec<u8>);

impl OpaqueAuthParam {
    /// Create a new opaque parameter from its value bytes.
    pub fn new(value: &[u8]) -> Self {
        Self(value.to_vec())
    }

    /// Read exactly `length` value bytes.
    ///
    /// If fewer bytes are left, whatever was left is consumed and
    /// [`AuthParamError::BufferUnderflow`] is returned. The parameter and
    /// anything after it in the same buffer must then be discarded.
    pub(super) fn parse<R: Read>(bytes: &mut R, length: usize) -> Result<Self, AuthParamError> {
        let mut value = vec![0u8; length];
        bytes.read_exact(&mut value)?;
        Ok(Self(value))
    }

    /// Get the value bytes as slice.
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}
