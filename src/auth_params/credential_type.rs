//! # Credential Type authentication parameter
//!
//! The Credential Type parameter names the kind of credential an EAP method
//! expects. It appears with two parameter IDs: `Credential Type` (5) for the
//! EAP method itself and `Tunneled EAP Method Credential Type` (6) for the
//! inner method of a tunneled EAP method such as TTLS or PEAP. The payload is
//! the same in both cases.
//!
//! ```text
//! +-----------------+
//! | Credential Type |
//! +-----------------+
//!        1 byte
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};
use tls_codec::Deserialize as TlsDeserializeTrait;

use super::{errors::AuthParamError, AuthParamType};

/// Whether a [`CredentialType`] belongs to an EAP method or to the inner
/// method of a tunneled EAP method.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CredentialTypeKind {
    /// Carried with parameter ID `Credential Type`.
    Standalone,

    /// Carried with parameter ID `Tunneled EAP Method Credential Type`.
    Tunneled,
}

impl CredentialTypeKind {
    /// Returns the [`AuthParamType`] this kind is carried with on the wire.
    pub const fn param_type(self) -> AuthParamType {
        match self {
            CredentialTypeKind::Standalone => AuthParamType::CredentialType,
            CredentialTypeKind::Tunneled => AuthParamType::TunneledEapMethodCredentialType,
        }
    }
}

/// Credential mechanisms defined by Passpoint.
///
/// | Value | Name                 |
/// |:------|:---------------------|
/// | 1     | SIM                  |
/// | 2     | USIM                 |
/// | 3     | NFC Secure Element   |
/// | 4     | Hardware Token       |
/// | 5     | Softoken             |
/// | 6     | Certificate          |
/// | 7     | Username/Password    |
/// | 8     | None                 |
/// | 9     | Reserved             |
/// | 10    | Vendor Specific      |
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CredentialMechanism {
    Sim = 1,
    Usim = 2,
    NfcSecureElement = 3,
    HardwareToken = 4,
    Softoken = 5,
    Certificate = 6,
    UsernamePassword = 7,
    None = 8,
    Reserved = 9,
    VendorSpecific = 10,
}

impl TryFrom<u8> for CredentialMechanism {
    type Error = u8;

    /// Returns the unnamed value itself as the error.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => CredentialMechanism::Sim,
            2 => CredentialMechanism::Usim,
            3 => CredentialMechanism::NfcSecureElement,
            4 => CredentialMechanism::HardwareToken,
            5 => CredentialMechanism::Softoken,
            6 => CredentialMechanism::Certificate,
            7 => CredentialMechanism::UsernamePassword,
            8 => CredentialMechanism::None,
            9 => CredentialMechanism::Reserved,
            10 => CredentialMechanism::VendorSpecific,
            _ => return Err(value),
        })
    }
}

/// A decoded Credential Type parameter.
///
/// The value is kept as read from the wire. Values without a
/// [`CredentialMechanism`] are not rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CredentialType {
    kind: CredentialTypeKind,
    value: u8,
}

impl CredentialType {
    /// The payload of a Credential Type parameter is always a single byte.
    pub const EXPECTED_LENGTH_VALUE: usize = 1;

    /// Create a credential type for an EAP method.
    pub const fn standalone(value: u8) -> Self {
        Self {
            kind: CredentialTypeKind::Standalone,
            value,
        }
    }

    /// Create a credential type for the inner method of a tunneled EAP method.
    pub const fn tunneled(value: u8) -> Self {
        Self {
            kind: CredentialTypeKind::Tunneled,
            value,
        }
    }

    /// Decode the payload of a Credential Type parameter.
    ///
    /// `length` is the value of the parameter's `Length` field and `tunneled`
    /// tells whether the parameter was found with the tunneled parameter ID.
    ///
    /// The length is checked before anything is read, so a
    /// [`AuthParamError::MalformedLength`] leaves `bytes` untouched. A
    /// [`AuthParamError::BufferUnderflow`] is returned when `bytes` is empty.
    pub fn parse<R: Read>(
        bytes: &mut R,
        length: usize,
        tunneled: bool,
    ) -> Result<Self, AuthParamError> {
        if length != Self::EXPECTED_LENGTH_VALUE {
            log::debug!(
                "Invalid credential type length: expected {}, got {}",
                Self::EXPECTED_LENGTH_VALUE,
                length
            );
            return Err(AuthParamError::MalformedLength {
                expected: Self::EXPECTED_LENGTH_VALUE,
                actual: length,
            });
        }

        let value = u8::tls_deserialize(bytes)?;

        Ok(if tunneled {
            Self::tunneled(value)
        } else {
            Self::standalone(value)
        })
    }

    /// Get the [`CredentialTypeKind`] of this credential type.
    pub fn kind(&self) -> CredentialTypeKind {
        self.kind
    }

    /// Get the raw credential type value.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns the [`AuthParamType`] this credential type is carried with.
    pub fn param_type(&self) -> AuthParamType {
        self.kind.param_type()
    }

    /// Returns the named mechanism, or `None` if the value has no name.
    pub fn mechanism(&self) -> Option<CredentialMechanism> {
        CredentialMechanism::try_from(self.value).ok()
    }
}
