//! Credentials for Google Cloud Storage (GCS).

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use crate::credential::{check_not_blank, check_token_expiration, require_field};
use crate::utils::Redact;
use crate::{Credential, Result};

/// Credential type string for temporary GCS token credentials.
pub const GCS_TOKEN_CREDENTIAL_TYPE: &str = "gcs-token";

/// Credential info key carrying the GCS OAuth2 access token.
pub const GCS_TOKEN: &str = "token";

/// A temporary GCS OAuth2 access token.
///
/// Token credentials always expire, so the vended expiration time must be
/// a positive epoch-millisecond timestamp.
#[derive(Clone, PartialEq, Eq)]
pub struct GcsTokenCredential {
    token: String,
    expire_time_in_ms: i64,
}

impl GcsTokenCredential {
    /// Build a credential from a vended credential info mapping.
    ///
    /// The mapping must carry a non-empty [`GCS_TOKEN`] entry, and
    /// `expire_time_in_ms` must be greater than `0`.
    pub fn new(credential_info: &HashMap<String, String>, expire_time_in_ms: i64) -> Result<Self> {
        let token = require_field(credential_info, GCS_TOKEN)?;

        check_not_blank(&token, "GCS token")?;
        check_token_expiration(expire_time_in_ms, "GCS token credential")?;

        Ok(Self {
            token,
            expire_time_in_ms,
        })
    }

    /// The GCS OAuth2 access token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Debug for GcsTokenCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GcsTokenCredential")
            .field("token", &Redact::from(&self.token))
            .field("expire_time_in_ms", &self.expire_time_in_ms)
            .finish()
    }
}

impl Credential for GcsTokenCredential {
    fn credential_type(&self) -> &'static str {
        GCS_TOKEN_CREDENTIAL_TYPE
    }

    fn expire_time_in_ms(&self) -> i64 {
        self.expire_time_in_ms
    }

    fn credential_info(&self) -> HashMap<String, String> {
        HashMap::from([(GCS_TOKEN.to_string(), self.token.clone())])
    }
}
