//! Credentials for Azure Storage (ADLS / Blob).

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use crate::credential::{
    check_not_blank, check_static_expiration, check_token_expiration, require_field,
};
use crate::utils::Redact;
use crate::{Credential, Result};

/// Credential type string for temporary ADLS SAS token credentials.
pub const ADLS_SAS_TOKEN_CREDENTIAL_TYPE: &str = "adls-sas-token";
/// Credential type string for static Azure account key credentials.
pub const AZURE_ACCOUNT_KEY_CREDENTIAL_TYPE: &str = "azure-account-key";

/// Credential info key carrying the Azure storage account name.
pub const AZURE_STORAGE_ACCOUNT_NAME: &str = "azure-storage-account-name";
/// Credential info key carrying the Azure storage account key.
pub const AZURE_STORAGE_ACCOUNT_KEY: &str = "azure-storage-account-key";
/// Credential info key carrying the ADLS SAS token.
pub const ADLS_SAS_TOKEN: &str = "adls-sas-token";

/// A temporary ADLS shared access signature scoped to one storage account.
///
/// Token credentials always expire, so the vended expiration time must be
/// a positive epoch-millisecond timestamp.
#[derive(Clone, PartialEq, Eq)]
pub struct AdlsTokenCredential {
    account_name: String,
    sas_token: String,
    expire_time_in_ms: i64,
}

impl AdlsTokenCredential {
    /// Build a credential from a vended credential info mapping.
    ///
    /// The mapping must carry [`AZURE_STORAGE_ACCOUNT_NAME`] and
    /// [`ADLS_SAS_TOKEN`], both non-empty, and `expire_time_in_ms` must be
    /// greater than `0`.
    pub fn new(credential_info: &HashMap<String, String>, expire_time_in_ms: i64) -> Result<Self> {
        let account_name = require_field(credential_info, AZURE_STORAGE_ACCOUNT_NAME)?;
        let sas_token = require_field(credential_info, ADLS_SAS_TOKEN)?;

        check_not_blank(&account_name, "Azure storage account name")?;
        check_not_blank(&sas_token, "ADLS SAS token")?;
        check_token_expiration(expire_time_in_ms, "ADLS SAS token credential")?;

        Ok(Self {
            account_name,
            sas_token,
            expire_time_in_ms,
        })
    }

    /// The Azure storage account name.
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// The ADLS SAS token.
    pub fn sas_token(&self) -> &str {
        &self.sas_token
    }
}

impl Debug for AdlsTokenCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdlsTokenCredential")
            .field("account_name", &self.account_name)
            .field("sas_token", &Redact::from(&self.sas_token))
            .field("expire_time_in_ms", &self.expire_time_in_ms)
            .finish()
    }
}

impl Credential for AdlsTokenCredential {
    fn credential_type(&self) -> &'static str {
        ADLS_SAS_TOKEN_CREDENTIAL_TYPE
    }

    fn expire_time_in_ms(&self) -> i64 {
        self.expire_time_in_ms
    }

    fn credential_info(&self) -> HashMap<String, String> {
        HashMap::from([
            (
                AZURE_STORAGE_ACCOUNT_NAME.to_string(),
                self.account_name.clone(),
            ),
            (ADLS_SAS_TOKEN.to_string(), self.sas_token.clone()),
        ])
    }
}

/// A static Azure storage account key scoped to one storage account.
///
/// Account keys never expire and need no refresh cycle, so the vended
/// expiration time must always be `0`.
#[derive(Clone, PartialEq, Eq)]
pub struct AzureAccountKeyCredential {
    account_name: String,
    account_key: String,
}

impl AzureAccountKeyCredential {
    /// Build a credential from a vended credential info mapping.
    ///
    /// The mapping must carry [`AZURE_STORAGE_ACCOUNT_NAME`] and
    /// [`AZURE_STORAGE_ACCOUNT_KEY`], both non-empty, and
    /// `expire_time_in_ms` must be `0`.
    pub fn new(credential_info: &HashMap<String, String>, expire_time_in_ms: i64) -> Result<Self> {
        let account_name = require_field(credential_info, AZURE_STORAGE_ACCOUNT_NAME)?;
        let account_key = require_field(credential_info, AZURE_STORAGE_ACCOUNT_KEY)?;

        check_not_blank(&account_name, "Azure storage account name")?;
        check_not_blank(&account_key, "Azure storage account key")?;
        check_static_expiration(expire_time_in_ms, "Azure account key credential")?;

        Ok(Self {
            account_name,
            account_key,
        })
    }

    /// The Azure storage account name.
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// The Azure storage account key.
    pub fn account_key(&self) -> &str {
        &self.account_key
    }
}

impl Debug for AzureAccountKeyCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureAccountKeyCredential")
            .field("account_name", &self.account_name)
            .field("account_key", &Redact::from(&self.account_key))
            .finish()
    }
}

impl Credential for AzureAccountKeyCredential {
    fn credential_type(&self) -> &'static str {
        AZURE_ACCOUNT_KEY_CREDENTIAL_TYPE
    }

    fn expire_time_in_ms(&self) -> i64 {
        0
    }

    fn credential_info(&self) -> HashMap<String, String> {
        HashMap::from([
            (
                AZURE_STORAGE_ACCOUNT_NAME.to_string(),
                self.account_name.clone(),
            ),
            (
                AZURE_STORAGE_ACCOUNT_KEY.to_string(),
                self.account_key.clone(),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;

    fn sas_token_info() -> HashMap<String, String> {
        HashMap::from([
            (
                AZURE_STORAGE_ACCOUNT_NAME.to_string(),
                "teststorage".to_string(),
            ),
            (
                ADLS_SAS_TOKEN.to_string(),
                "sv=2021-08-06&sig=abc".to_string(),
            ),
        ])
    }

    fn account_key_info() -> HashMap<String, String> {
        HashMap::from([
            (
                AZURE_STORAGE_ACCOUNT_NAME.to_string(),
                "teststorage".to_string(),
            ),
            (
                AZURE_STORAGE_ACCOUNT_KEY.to_string(),
                "dGVzdGtleQ==".to_string(),
            ),
        ])
    }

    #[test]
    fn test_sas_token_credential() {
        let credential = AdlsTokenCredential::new(&sas_token_info(), 1893456000000).unwrap();

        assert_eq!(credential.account_name(), "teststorage");
        assert_eq!(credential.sas_token(), "sv=2021-08-06&sig=abc");
        assert_eq!(credential.credential_type(), "adls-sas-token");
        assert_eq!(credential.expire_time_in_ms(), 1893456000000);
        assert_eq!(credential.credential_info(), sas_token_info());
    }

    #[test]
    fn test_sas_token_credential_missing_fields() {
        let cases = vec![
            ("without account name", AZURE_STORAGE_ACCOUNT_NAME),
            ("without sas token", ADLS_SAS_TOKEN),
        ];

        for (name, removed) in cases {
            let mut info = sas_token_info();
            info.remove(removed);

            let err = AdlsTokenCredential::new(&info, 1893456000000).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingField, "failed on: {name}");
        }
    }

    #[test]
    fn test_sas_token_credential_requires_positive_expiration() {
        for expire_time_in_ms in [0i64, -1] {
            let err = AdlsTokenCredential::new(&sas_token_info(), expire_time_in_ms).unwrap_err();
            assert_eq!(
                err.kind(),
                ErrorKind::InvalidArgument,
                "failed on input: {expire_time_in_ms}"
            );
        }
    }

    #[test]
    fn test_account_key_credential() {
        let credential = AzureAccountKeyCredential::new(&account_key_info(), 0).unwrap();

        assert_eq!(credential.account_name(), "teststorage");
        assert_eq!(credential.account_key(), "dGVzdGtleQ==");
        assert_eq!(credential.credential_type(), "azure-account-key");
        assert_eq!(credential.expire_time_in_ms(), 0);
        assert_eq!(credential.credential_info(), account_key_info());
    }

    #[test]
    fn test_account_key_credential_blank_fields() {
        let cases = vec![
            ("empty account name", AZURE_STORAGE_ACCOUNT_NAME, ""),
            ("whitespace account key", AZURE_STORAGE_ACCOUNT_KEY, " "),
        ];

        for (name, key, value) in cases {
            let mut info = account_key_info();
            info.insert(key.to_string(), value.to_string());

            let err = AzureAccountKeyCredential::new(&info, 0).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "failed on: {name}");
        }
    }

    #[test]
    fn test_account_key_credential_rejects_expiration() {
        for expire_time_in_ms in [1i64, -1] {
            let err =
                AzureAccountKeyCredential::new(&account_key_info(), expire_time_in_ms).unwrap_err();
            assert_eq!(
                err.kind(),
                ErrorKind::InvalidArgument,
                "failed on input: {expire_time_in_ms}"
            );
        }
    }

    #[test]
    fn test_account_key_credential_info_round_trip() {
        let credential = AzureAccountKeyCredential::new(&account_key_info(), 0).unwrap();
        let rebuilt = AzureAccountKeyCredential::new(&credential.credential_info(), 0).unwrap();

        assert_eq!(rebuilt, credential);
    }
}
