//! This config contains the library-wide settings for decoding authentication
//! parameters.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::auth_params::AuthParamType;

/// The parameter count of an EAP method is a single byte on the wire.
const MAX_AUTH_PARAMS: usize = u8::MAX as usize;

lazy_static! {
    static ref CONFIG: Config = Config {
        decoded_auth_param_types: vec![
            AuthParamType::CredentialType,
            AuthParamType::TunneledEapMethodCredentialType,
        ],
        constants: Constants {
            max_auth_params: MAX_AUTH_PARAMS,
        },
    };
}

/// Constants that are used throughout the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Constants {
    /// The maximum number of authentication parameters of one EAP method.
    max_auth_params: usize,
}

/// # Configuration
///
/// This is the global configuration of the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    decoded_auth_param_types: Vec<AuthParamType>,
    constants: Constants,
}

impl Config {
    /// Get a reference to the global configuration.
    pub fn get() -> &'static Config {
        &CONFIG
    }

    /// The authentication parameter types that are decoded into typed values.
    /// Parameters of any other type are kept as raw bytes.
    pub fn decoded_auth_param_types() -> &'static [AuthParamType] {
        &CONFIG.decoded_auth_param_types
    }

    /// The maximum number of authentication parameters of one EAP method.
    pub fn max_auth_params() -> usize {
        CONFIG.constants.max_auth_params
    }
}
