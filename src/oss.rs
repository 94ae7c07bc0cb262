//! Credentials for Aliyun Object Storage Service (OSS).

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use crate::credential::{
    check_not_blank, check_static_expiration, check_token_expiration, require_field,
};
use crate::utils::Redact;
use crate::{Credential, Result};

/// Credential type string for static OSS secret key credentials.
pub const OSS_SECRET_KEY_CREDENTIAL_TYPE: &str = "oss-secret-key";
/// Credential type string for temporary OSS token credentials.
pub const OSS_TOKEN_CREDENTIAL_TYPE: &str = "oss-token";

/// Credential info key carrying the OSS access key id.
pub const OSS_ACCESS_KEY_ID: &str = "oss-access-key-id";
/// Credential info key carrying the OSS secret access key.
pub const OSS_SECRET_ACCESS_KEY: &str = "oss-secret-access-key";
/// Credential info key carrying the OSS security token.
pub const OSS_SECURITY_TOKEN: &str = "oss-security-token";

/// A static OSS access key pair.
///
/// Static keys never expire and need no refresh cycle, so the vended
/// expiration time must always be `0`.
#[derive(Clone, PartialEq, Eq)]
pub struct OssSecretKeyCredential {
    access_key_id: String,
    secret_access_key: String,
}

impl OssSecretKeyCredential {
    /// Build a credential from a vended credential info mapping.
    ///
    /// The mapping must carry [`OSS_ACCESS_KEY_ID`] and
    /// [`OSS_SECRET_ACCESS_KEY`], both non-empty, and `expire_time_in_ms`
    /// must be `0`.
    ///
    /// # Example
    ///
    /// ```
    /// use credvend::OssSecretKeyCredential;
    /// use std::collections::HashMap;
    ///
    /// let info = HashMap::from([
    ///     ("oss-access-key-id".to_string(), "AKID123".to_string()),
    ///     ("oss-secret-access-key".to_string(), "SECRETXYZ".to_string()),
    /// ]);
    ///
    /// let credential = OssSecretKeyCredential::new(&info, 0)?;
    /// assert_eq!(credential.access_key_id(), "AKID123");
    /// assert_eq!(credential.secret_access_key(), "SECRETXYZ");
    /// # Ok::<(), credvend::Error>(())
    /// ```
    pub fn new(credential_info: &HashMap<String, String>, expire_time_in_ms: i64) -> Result<Self> {
        let access_key_id = require_field(credential_info, OSS_ACCESS_KEY_ID)?;
        let secret_access_key = require_field(credential_info, OSS_SECRET_ACCESS_KEY)?;

        check_not_blank(&access_key_id, "OSS access key id")?;
        check_not_blank(&secret_access_key, "OSS secret access key")?;
        check_static_expiration(expire_time_in_ms, "OSS secret key credential")?;

        Ok(Self {
            access_key_id,
            secret_access_key,
        })
    }

    /// The OSS access key id.
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// The OSS secret access key.
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }
}

impl Debug for OssSecretKeyCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OssSecretKeyCredential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .finish()
    }
}

impl Credential for OssSecretKeyCredential {
    fn credential_type(&self) -> &'static str {
        OSS_SECRET_KEY_CREDENTIAL_TYPE
    }

    fn expire_time_in_ms(&self) -> i64 {
        0
    }

    fn credential_info(&self) -> HashMap<String, String> {
        HashMap::from([
            (OSS_ACCESS_KEY_ID.to_string(), self.access_key_id.clone()),
            (
                OSS_SECRET_ACCESS_KEY.to_string(),
                self.secret_access_key.clone(),
            ),
        ])
    }
}

/// A temporary OSS credential: an STS access key pair plus security token.
///
/// Token credentials always expire, so the vended expiration time must be
/// a positive epoch-millisecond timestamp.
#[derive(Clone, PartialEq, Eq)]
pub struct OssTokenCredential {
    access_key_id: String,
    secret_access_key: String,
    security_token: String,
    expire_time_in_ms: i64,
}

impl OssTokenCredential {
    /// Build a credential from a vended credential info mapping.
    ///
    /// The mapping must carry [`OSS_ACCESS_KEY_ID`],
    /// [`OSS_SECRET_ACCESS_KEY`] and [`OSS_SECURITY_TOKEN`], all
    /// non-empty, and `expire_time_in_ms` must be greater than `0`.
    pub fn new(credential_info: &HashMap<String, String>, expire_time_in_ms: i64) -> Result<Self> {
        let access_key_id = require_field(credential_info, OSS_ACCESS_KEY_ID)?;
        let secret_access_key = require_field(credential_info, OSS_SECRET_ACCESS_KEY)?;
        let security_token = require_field(credential_info, OSS_SECURITY_TOKEN)?;

        check_not_blank(&access_key_id, "OSS access key id")?;
        check_not_blank(&secret_access_key, "OSS secret access key")?;
        check_not_blank(&security_token, "OSS security token")?;
        check_token_expiration(expire_time_in_ms, "OSS token credential")?;

        Ok(Self {
            access_key_id,
            secret_access_key,
            security_token,
            expire_time_in_ms,
        })
    }

    /// The OSS access key id.
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// The OSS secret access key.
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// The OSS security token.
    pub fn security_token(&self) -> &str {
        &self.security_token
    }
}

impl Debug for OssTokenCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OssTokenCredential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("security_token", &Redact::from(&self.security_token))
            .field("expire_time_in_ms", &self.expire_time_in_ms)
            .finish()
    }
}

impl Credential for OssTokenCredential {
    fn credential_type(&self) -> &'static str {
        OSS_TOKEN_CREDENTIAL_TYPE
    }

    fn expire_time_in_ms(&self) -> i64 {
        self.expire_time_in_ms
    }

    fn credential_info(&self) -> HashMap<String, String> {
        HashMap::from([
            (OSS_ACCESS_KEY_ID.to_string(), self.access_key_id.clone()),
            (
                OSS_SECRET_ACCESS_KEY.to_string(),
                self.secret_access_key.clone(),
            ),
            (OSS_SECURITY_TOKEN.to_string(), self.security_token.clone()),
        ])
    }
}
