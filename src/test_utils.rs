//! Test utilities for building authentication parameters on the wire.

use crate::auth_params::AuthParamType;

/// Encode a raw authentication parameter with the given ID and value.
///
/// The `Length` field is set to the length of `value`.
pub fn auth_param_bytes(id: u8, value: &[u8]) -> Vec<u8> {
    let length = u8::try_from(value.len()).expect("Value is too long for an auth param.");
    let mut bytes = Vec::with_capacity(2 + value.len());
    bytes.push(id);
    bytes.push(length);
    bytes.extend_from_slice(value);
    bytes
}

/// Encode a Credential Type parameter.
pub fn credential_type_bytes(tunneled: bool, value: u8) -> Vec<u8> {
    let param_type = if tunneled {
        AuthParamType::TunneledEapMethodCredentialType
    } else {
        AuthParamType::CredentialType
    };
    auth_param_bytes(param_type as u8, &[value])
}
