//! # Passpoint ANQP
//!
//! Decoding of the Authentication Parameters carried in the EAP method
//! descriptions of the Hotspot 2.0 (Passpoint) ANQP NAI Realm element.
//!
//! The entry points are [`AuthParam::parse`](auth_params::AuthParam::parse)
//! for a single parameter including its `ID` and `Length` header, and
//! [`CredentialType::parse`](auth_params::CredentialType::parse) for the
//! payload of a Credential Type parameter whose header was already read.
//!
//! ## Error handling
//!
//! Decoding is panic-free. All functions that can fail return a [Result]
//! carrying an [`AuthParamError`](auth_params::errors::AuthParamError), which
//! tells a malformed length apart from a truncated buffer.
#![forbid(unsafe_code)]

pub mod auth_params;
pub mod config;

#[cfg(any(feature = "test-utils", test))]
pub mod test_utils;

/// Single place, re-exporting the most used public types.
pub mod prelude;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
