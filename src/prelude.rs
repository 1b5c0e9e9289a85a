//! Prelude for Passpoint ANQP.
//! Include this to get access to all the public types and functions.

pub use crate::auth_params::{
    errors::AuthParamError, AuthParam, AuthParamType, AuthParams, CredentialMechanism,
    CredentialType, CredentialTypeKind, OpaqueAuthParam,
};
pub use crate::config::Config;
