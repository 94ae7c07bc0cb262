//! Serde model of the vended credential payload.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::factory::create_credential;
use crate::{Credential, Result};

/// The JSON shape a catalog service vends credentials in.
///
/// This is the untyped wire form: a type string, an epoch-millisecond
/// expiration (`0` for never-expiring kinds), and the raw credential
/// fields. Convert it into a validated, typed credential with
/// [`into_credential`][CredentialDto::into_credential].
///
/// # Example
///
/// ```
/// use credvend::CredentialDto;
///
/// let payload = r#"{
///     "credentialType": "oss-secret-key",
///     "expireTimeInMs": 0,
///     "credentialInfo": {
///         "oss-access-key-id": "AKID123",
///         "oss-secret-access-key": "SECRETXYZ"
///     }
/// }"#;
///
/// let credential = CredentialDto::from_json(payload)?.into_credential()?;
/// assert_eq!(credential.credential_type(), "oss-secret-key");
/// # Ok::<(), credvend::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDto {
    credential_type: String,
    expire_time_in_ms: i64,
    credential_info: HashMap<String, String>,
}

impl CredentialDto {
    /// Parse a vended JSON payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        let dto: Self = serde_json::from_str(payload)?;
        Ok(dto)
    }

    /// Encode back into the vended JSON shape.
    pub fn to_json(&self) -> Result<String> {
        let payload = serde_json::to_string(self)?;
        Ok(payload)
    }

    /// The vended credential type string.
    pub fn credential_type(&self) -> &str {
        &self.credential_type
    }

    /// The vended expiration in epoch milliseconds.
    pub fn expire_time_in_ms(&self) -> i64 {
        self.expire_time_in_ms
    }

    /// The raw vended credential fields.
    pub fn credential_info(&self) -> &HashMap<String, String> {
        &self.credential_info
    }

    /// Validate the payload into a typed credential.
    pub fn into_credential(self) -> Result<Box<dyn Credential>> {
        debug!(
            "converting vended payload of type {} into a typed credential",
            self.credential_type
        );
        create_credential(
            &self.credential_type,
            &self.credential_info,
            self.expire_time_in_ms,
        )
    }
}

impl From<&dyn Credential> for CredentialDto {
    fn from(credential: &dyn Credential) -> Self {
        Self {
            credential_type: credential.credential_type().to_string(),
            expire_time_in_ms: credential.expire_time_in_ms(),
            credential_info: credential.credential_info(),
        }
    }
}
