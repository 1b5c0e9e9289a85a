//! # Authentication parameters
//!
//! Every EAP method listed for a NAI realm in the ANQP NAI Realm element
//! carries a list of authentication parameters. Each parameter is encoded as
//!
//! ```text
//! +----+--------+-----------------+
//! | ID | Length | Value           |
//! +----+--------+-----------------+
//!   1      1      Length bytes
//! ```
//!
//! The [`AuthParam::parse`] dispatcher reads the header and routes the value
//! to the decoder for the parameter ID. Credential types are decoded into a
//! [`CredentialType`]. All other known parameter kinds are kept as an
//! [`OpaqueAuthParam`].
//!
//! The parameters of one EAP method are collected in [`AuthParams`], which
//! holds at most one parameter per [`AuthParamType`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// Private
mod codec;
mod credential_type;
mod opaque;
use errors::*;

// Public
pub mod errors;

// Public re-exports
pub use credential_type::{CredentialMechanism, CredentialType, CredentialTypeKind};
pub use opaque::OpaqueAuthParam;

use crate::config::Config;

#[cfg(test)]
mod tests;

/// Authentication Parameter IDs
///
/// | Value | Name                                 |
/// |:------|:-------------------------------------|
/// | 1     | Expanded EAP Method                  |
/// | 2     | Non-EAP Inner Authentication Type    |
/// | 3     | Inner Authentication EAP Method Type |
/// | 4     | Expanded Inner EAP Method            |
/// | 5     | Credential Type                      |
/// | 6     | Tunneled EAP Method Credential Type  |
/// | 221   | Vendor Specific                      |
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Ord, PartialOrd,
)]
#[repr(u8)]
pub enum AuthParamType {
    ExpandedEapMethod = 1,
    NonEapInnerAuthType = 2,
    InnerAuthEapMethodType = 3,
    ExpandedInnerEapMethod = 4,
    CredentialType = 5,
    TunneledEapMethodCredentialType = 6,
    VendorSpecific = 221,
}

impl TryFrom<u8> for AuthParamType {
    type Error = AuthParamError;

    /// Get the [`AuthParamType`] from a u8.
    /// Returns an [`AuthParamError::UnknownParamType`] if the ID is not known.
    fn try_from(a: u8) -> Result<Self, Self::Error> {
        match a {
            1 => Ok(AuthParamType::ExpandedEapMethod),
            2 => Ok(AuthParamType::NonEapInnerAuthType),
            3 => Ok(AuthParamType::InnerAuthEapMethodType),
            4 => Ok(AuthParamType::ExpandedInnerEapMethod),
            5 => Ok(AuthParamType::CredentialType),
            6 => Ok(AuthParamType::TunneledEapMethodCredentialType),
            221 => Ok(AuthParamType::VendorSpecific),
            _ => Err(AuthParamError::UnknownParamType(a)),
        }
    }
}

impl AuthParamType {
    /// Check whether parameters of this type are decoded into a typed value
    /// rather than kept as an [`OpaqueAuthParam`].
    pub fn is_decoded(&self) -> bool {
        Config::decoded_auth_param_types().contains(self)
    }
}

/// # Authentication parameter
///
/// One authentication parameter of an EAP method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthParam {
    /// A [`CredentialType`], either for the EAP method or for its tunneled
    /// inner method.
    Credential(CredentialType),

    /// A parameter of the given type that is kept as raw value bytes.
    Opaque(AuthParamType, OpaqueAuthParam),
}

impl AuthParam {
    /// Returns the [`AuthParamType`]
    #[inline]
    pub fn param_type(&self) -> AuthParamType {
        match self {
            AuthParam::Credential(c) => c.param_type(),
            AuthParam::Opaque(param_type, _) => *param_type,
        }
    }

    /// Get a reference to this parameter as [`CredentialType`] if it is one.
    pub fn as_credential_type(&self) -> Option<&CredentialType> {
        match self {
            AuthParam::Credential(c) => Some(c),
            AuthParam::Opaque(..) => None,
        }
    }
}

/// The authentication parameters of one EAP method, with unique parameter
/// types.
///
/// Deserializing goes through [`AuthParams::validate`] as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AuthParam>", into = "Vec<AuthParam>")]
pub struct AuthParams {
    inner: Vec<AuthParam>,
}

impl AuthParams {
    /// Create an empty parameter list.
    pub fn empty() -> Self {
        Self { inner: Vec::new() }
    }

    /// Create a parameter list from multiple parameters.
    ///
    /// This function will fail when the list contains duplicate parameter types.
    pub fn multi(params: Vec<AuthParam>) -> Result<Self, AuthParamError> {
        params.try_into()
    }

    /// Add a parameter to the list.
    ///
    /// Returns an error when there already is a parameter with the same type,
    /// or when an opaque parameter has a type that is decoded into a typed value.
    pub fn add(&mut self, param: AuthParam) -> Result<(), AuthParamError> {
        check_opaque(&param)?;
        if self.contains(param.param_type()) {
            log::debug!("Duplicate authentication parameter {:?}", param.param_type());
            return Err(AuthParamError::Duplicate(param.param_type()));
        }
        if self.inner.len() >= Config::max_auth_params() {
            return Err(AuthParamError::TooManyParams(Config::max_auth_params()));
        }
        self.inner.push(param);
        Ok(())
    }

    /// Return true if (and only if) the list contains a parameter with the given type.
    pub fn contains(&self, param_type: AuthParamType) -> bool {
        self.inner.iter().any(|p| p.param_type() == param_type)
    }

    /// Get the parameter with the given type if there is any.
    pub fn get(&self, param_type: AuthParamType) -> Option<&AuthParam> {
        self.inner.iter().find(|p| p.param_type() == param_type)
    }

    /// Get the [`CredentialType`] of the EAP method if there is any.
    pub fn credential_type(&self) -> Option<&CredentialType> {
        self.get(AuthParamType::CredentialType)
            .and_then(AuthParam::as_credential_type)
    }

    /// Get the [`CredentialType`] of the tunneled inner method if there is any.
    pub fn tunneled_credential_type(&self) -> Option<&CredentialType> {
        self.get(AuthParamType::TunneledEapMethodCredentialType)
            .and_then(AuthParam::as_credential_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AuthParam> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Check that the candidate parameter list is valid, i.e. that it has no
    /// duplicate parameter types, no opaque parameter of a decoded type and is
    /// not longer than the maximum.
    pub fn validate(candidate: &[AuthParam]) -> Result<(), AuthParamError> {
        if candidate.len() > Config::max_auth_params() {
            return Err(AuthParamError::TooManyParams(Config::max_auth_params()));
        }

        let mut seen = BTreeSet::new();
        for param in candidate {
            check_opaque(param)?;
            let param_type = param.param_type();
            if !seen.insert(param_type) {
                return Err(AuthParamError::Duplicate(param_type));
            }
        }

        Ok(())
    }
}

impl Default for AuthParams {
    fn default() -> Self {
        Self::empty()
    }
}

// A decoded type must only ever show up as its typed variant.
fn check_opaque(param: &AuthParam) -> Result<(), AuthParamError> {
    match param {
        AuthParam::Opaque(param_type, _) if param_type.is_decoded() => {
            log::debug!("Opaque authentication parameter of decoded type {:?}", param_type);
            Err(AuthParamError::OpaqueDecodedType(*param_type))
        }
        _ => Ok(()),
    }
}

impl From<AuthParams> for Vec<AuthParam> {
    fn from(params: AuthParams) -> Self {
        params.inner
    }
}

impl TryFrom<Vec<AuthParam>> for AuthParams {
    type Error = AuthParamError;

    fn try_from(value: Vec<AuthParam>) -> Result<Self, Self::Error> {
        AuthParams::validate(&value)?;

        Ok(Self { inner: value })
    }
}
