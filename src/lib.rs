//! Typed storage credentials for catalog credential vending.
//!
//! A catalog or metadata service vends object-storage credentials to its
//! clients as raw `(credential_type, credential_info, expire_time_in_ms)`
//! triples. This crate turns those triples into validated, immutable Rust
//! values behind one object-safe [`Credential`] trait, so storage SDK
//! integration can configure clients without re-checking the payload.
//!
//! ## Overview
//!
//! - **[`Credential`]**: the capability every vended kind implements —
//!   type string, expiration, and the raw field mapping.
//! - **Concrete kinds**: static key pairs that never expire
//!   ([`OssSecretKeyCredential`], [`S3SecretKeyCredential`],
//!   [`AzureAccountKeyCredential`]) and tokens that always do
//!   ([`OssTokenCredential`], [`S3TokenCredential`],
//!   [`GcsTokenCredential`], [`AdlsTokenCredential`]).
//! - **[`create_credential`]**: string-dispatched factory over all kinds.
//! - **[`CredentialDto`]**: serde model of the vended JSON payload.
//!
//! Acquisition, refresh scheduling, transport, and caching are the
//! caller's concern; this crate only models and validates the values.
//!
//! ## Example
//!
//! ```
//! use credvend::CredentialDto;
//!
//! let payload = r#"{
//!     "credentialType": "oss-secret-key",
//!     "expireTimeInMs": 0,
//!     "credentialInfo": {
//!         "oss-access-key-id": "AKID123",
//!         "oss-secret-access-key": "SECRETXYZ"
//!     }
//! }"#;
//!
//! let credential = CredentialDto::from_json(payload)?.into_credential()?;
//! assert_eq!(credential.credential_type(), "oss-secret-key");
//! assert!(credential.expire_time().is_none());
//! # Ok::<(), credvend::Error>(())
//! ```

#![warn(missing_docs)]

mod credential;
pub use credential::Credential;

mod error;
pub use error::{Error, ErrorKind, Result};

mod factory;
pub use factory::create_credential;

mod dto;
pub use dto::CredentialDto;

pub mod azure;
pub use azure::{AdlsTokenCredential, AzureAccountKeyCredential};

pub mod gcs;
pub use gcs::GcsTokenCredential;

pub mod oss;
pub use oss::{OssSecretKeyCredential, OssTokenCredential};

pub mod s3;
pub use s3::{S3SecretKeyCredential, S3TokenCredential};

pub mod time;

mod utils;
pub use utils::Redact;
