//! # Authentication parameter errors.
//!
//! An `AuthParamError` is returned when an authentication parameter can not be
//! decoded from raw bytes, or when it can not be added to an [`AuthParams`]
//! collection.
//!
//! Decoding a single Credential Type parameter only ever fails with
//! [`AuthParamError::MalformedLength`] or [`AuthParamError::BufferUnderflow`].
//!
//! [`AuthParams`]: super::AuthParams

use std::io::ErrorKind;

use thiserror::Error;
use tls_codec::Error as TlsCodecError;

use super::AuthParamType;

/// Authentication parameter error
#[derive(Error, Debug, PartialEq, Clone)]
pub enum AuthParamError {
    /// The length announced by the parameter header does not match the fixed
    /// size of the parameter.
    #[error("Malformed length: expected {expected} bytes, got {actual}.")]
    MalformedLength { expected: usize, actual: usize },
    /// The buffer ended before the announced number of bytes could be read.
    #[error("Buffer underflow while reading an authentication parameter.")]
    BufferUnderflow,
    #[error("Unknown authentication parameter ID {0}.")]
    UnknownParamType(u8),
    #[error("Found a duplicate {0:?} authentication parameter.")]
    Duplicate(AuthParamType),
    #[error("{0:?} authentication parameters must not be opaque.")]
    OpaqueDecodedType(AuthParamType),
    #[error("An EAP method can not hold more than {0} authentication parameters.")]
    TooManyParams(usize),
    #[error("Codec error: {0:?}")]
    CodecError(TlsCodecError),
}

impl From<TlsCodecError> for AuthParamError {
    fn from(e: TlsCodecError) -> Self {
        match e {
            TlsCodecError::EndOfStream => AuthParamError::BufferUnderflow,
            e => AuthParamError::CodecError(e),
        }
    }
}

impl From<std::io::Error> for AuthParamError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            ErrorKind::UnexpectedEof => AuthParamError::BufferUnderflow,
            _ => AuthParamError::CodecError(TlsCodecError::DecodingError(format!(
                "io error: {e:?}"
            ))),
        }
    }
}

impl From<AuthParamError> for TlsCodecError {
    fn from(e: AuthParamError) -> Self {
        match e {
            AuthParamError::BufferUnderflow => TlsCodecError::EndOfStream,
            AuthParamError::CodecError(e) => e,
            e => TlsCodecError::DecodingError(e.to_string()),
        }
    }
}
