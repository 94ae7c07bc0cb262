//! Credentials for S3-compatible object storage.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use crate::credential::{
    check_not_blank, check_static_expiration, check_token_expiration, require_field,
};
use crate::utils::Redact;
use crate::{Credential, Result};

/// Credential type string for static S3 secret key credentials.
pub const S3_SECRET_KEY_CREDENTIAL_TYPE: &str = "s3-secret-key";
/// Credential type string for temporary S3 token credentials.
pub const S3_TOKEN_CREDENTIAL_TYPE: &str = "s3-token";

/// Credential info key carrying the S3 access key id.
pub const S3_ACCESS_KEY_ID: &str = "s3-access-key-id";
/// Credential info key carrying the S3 secret access key.
pub const S3_SECRET_ACCESS_KEY: &str = "s3-secret-access-key";
/// Credential info key carrying the S3 session token.
pub const S3_SESSION_TOKEN: &str = "s3-session-token";

/// A static S3 access key pair.
///
/// Static keys never expire and need no refresh cycle, so the vended
/// expiration time must always be `0`.
#[derive(Clone, PartialEq, Eq)]
pub struct S3SecretKeyCredential {
    access_key_id: String,
    secret_access_key: String,
}

impl S3SecretKeyCredential {
    /// Build a credential from a vended credential info mapping.
    ///
    /// The mapping must carry [`S3_ACCESS_KEY_ID`] and
    /// [`S3_SECRET_ACCESS_KEY`], both non-empty, and `expire_time_in_ms`
    /// must be `0`.
    pub fn new(credential_info: &HashMap<String, String>, expire_time_in_ms: i64) -> Result<Self> {
        let access_key_id = require_field(credential_info, S3_ACCESS_KEY_ID)?;
        let secret_access_key = require_field(credential_info, S3_SECRET_ACCESS_KEY)?;

        check_not_blank(&access_key_id, "S3 access key id")?;
        check_not_blank(&secret_access_key, "S3 secret access key")?;
        check_static_expiration(expire_time_in_ms, "S3 secret key credential")?;

        Ok(Self {
            access_key_id,
            secret_access_key,
        })
    }

    /// The S3 access key id.
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// The S3 secret access key.
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }
}

impl Debug for S3SecretKeyCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3SecretKeyCredential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .finish()
    }
}

impl Credential for S3SecretKeyCredential {
    fn credential_type(&self) -> &'static str {
        S3_SECRET_KEY_CREDENTIAL_TYPE
    }

    fn expire_time_in_ms(&self) -> i64 {
        0
    }

    fn credential_info(&self) -> HashMap<String, String> {
        HashMap::from([
            (S3_ACCESS_KEY_ID.to_string(), self.access_key_id.clone()),
            (
                S3_SECRET_ACCESS_KEY.to_string(),
                self.secret_access_key.clone(),
            ),
        ])
    }
}

/// A temporary S3 credential: an STS access key pair plus session token.
///
/// Token credentials always expire, so the vended expiration time must be
/// a positive epoch-millisecond timestamp.
#[derive(Clone, PartialEq, Eq)]
pub struct S3TokenCredential {
    access_key_id: String,
    secret_access_key: String,
    session_token: String,
    expire_time_in_ms: i64,
}

impl S3TokenCredential {
    /// Build a credential from a vended credential info mapping.
    ///
    /// The mapping must carry [`S3_ACCESS_KEY_ID`],
    /// [`S3_SECRET_ACCESS_KEY`] and [`S3_SESSION_TOKEN`], all non-empty,
    /// and `expire_time_in_ms` must be greater than `0`.
    pub fn new(credential_info: &HashMap<String, String>, expire_time_in_ms: i64) -> Result<Self> {
        let access_key_id = require_field(credential_info, S3_ACCESS_KEY_ID)?;
        let secret_access_key = require_field(credential_info, S3_SECRET_ACCESS_KEY)?;
        let session_token = require_field(credential_info, S3_SESSION_TOKEN)?;

        check_not_blank(&access_key_id, "S3 access key id")?;
        check_not_blank(&secret_access_key, "S3 secret access key")?;
        check_not_blank(&session_token, "S3 session token")?;
        check_token_expiration(expire_time_in_ms, "S3 token credential")?;

        Ok(Self {
            access_key_id,
            secret_access_key,
            session_token,
            expire_time_in_ms,
        })
    }

    /// The S3 access key id.
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// The S3 secret access key.
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// The S3 session token.
    pub fn session_token(&self) -> &str {
        &self.session_token
    }
}

impl Debug for S3TokenCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3TokenCredential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .field("expire_time_in_ms", &self.expire_time_in_ms)
            .finish()
    }
}

impl Credential for S3TokenCredential {
    fn credential_type(&self) -> &'static str {
        S3_TOKEN_CREDENTIAL_TYPE
    }

    fn expire_time_in_ms(&self) -> i64 {
        self.expire_time_in_ms
    }

    fn credential_info(&self) -> HashMap<String, String> {
        HashMap::from([
            (S3_ACCESS_KEY_ID.to_string(), self.access_key_id.clone()),
            (
                S3_SECRET_ACCESS_KEY.to_string(),
                self.secret_access_key.clone(),
            ),
            (S3_SESSION_TOKEN.to_string(), self.session_token.clone()),
        ])
    }
}
