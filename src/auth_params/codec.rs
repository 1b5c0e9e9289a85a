use std::io::Read;

use tls_codec::{Deserialize, Size};

use super::{
    errors::AuthParamError, AuthParam, AuthParamType, AuthParams, CredentialType, OpaqueAuthParam,
};

impl AuthParam {
    /// Decode one authentication parameter, including its `ID` and `Length`
    /// header, and advance `bytes` past it.
    ///
    /// The Credential Type ID yields a standalone [`CredentialType`], the
    /// Tunneled EAP Method Credential Type ID a tunneled one. Other known IDs
    /// yield an [`AuthParam::Opaque`] holding `Length` value bytes.
    pub fn parse<R: Read>(bytes: &mut R) -> Result<Self, AuthParamError> {
        let id = u8::tls_deserialize(bytes)?;
        let length = usize::from(u8::tls_deserialize(bytes)?);
        let param_type = AuthParamType::try_from(id).map_err(|e| {
            log::debug!("Unknown authentication parameter ID {}", id);
            e
        })?;

        let param = match param_type {
            AuthParamType::CredentialType if param_type.is_decoded() => {
                AuthParam::Credential(CredentialType::parse(bytes, length, false)?)
            }
            AuthParamType::TunneledEapMethodCredentialType if param_type.is_decoded() => {
                AuthParam::Credential(CredentialType::parse(bytes, length, true)?)
            }
            _ => AuthParam::Opaque(param_type, OpaqueAuthParam::parse(bytes, length)?),
        };
        log::trace!("Decoded authentication parameter {:?}", param);

        Ok(param)
    }
}

/// Length of the `ID` and `Length` header.
const HEADER_LEN: usize = 2;

impl Size for AuthParam {
    #[inline]
    fn tls_serialized_len(&self) -> usize {
        HEADER_LEN
            + match self {
                AuthParam::Credential(_) => CredentialType::EXPECTED_LENGTH_VALUE,
                AuthParam::Opaque(_, value) => value.as_slice().len(),
            }
    }
}

impl Deserialize for AuthParam {
    fn tls_deserialize<R: Read>(bytes: &mut R) -> Result<Self, tls_codec::Error> {
        AuthParam::parse(bytes).map_err(tls_codec::Error::from)
    }
}

impl AuthParams {
    /// Decode `count` consecutive authentication parameters.
    ///
    /// Fails on the first parameter that can not be decoded or that repeats
    /// the type of an earlier one.
    pub fn parse<R: Read>(bytes: &mut R, count: u8) -> Result<Self, AuthParamError> {
        let mut params = AuthParams::empty();
        for _ in 0..count {
            params.add(AuthParam::parse(bytes)?)?;
        }
        Ok(params)
    }
}
