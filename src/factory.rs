//! Dispatch from vended credential type strings to typed credentials.

use std::collections::HashMap;

use log::debug;

use crate::azure::{
    AdlsTokenCredential, AzureAccountKeyCredential, ADLS_SAS_TOKEN_CREDENTIAL_TYPE,
    AZURE_ACCOUNT_KEY_CREDENTIAL_TYPE,
};
use crate::gcs::{GcsTokenCredential, GCS_TOKEN_CREDENTIAL_TYPE};
use crate::oss::{
    OssSecretKeyCredential, OssTokenCredential, OSS_SECRET_KEY_CREDENTIAL_TYPE,
    OSS_TOKEN_CREDENTIAL_TYPE,
};
use crate::s3::{
    S3SecretKeyCredential, S3TokenCredential, S3_SECRET_KEY_CREDENTIAL_TYPE,
    S3_TOKEN_CREDENTIAL_TYPE,
};
use crate::{Credential, Error, Result};

/// Build the typed credential named by `credential_type`.
///
/// This is the seam the vending client calls with the raw
/// `(credential_type, credential_info, expire_time_in_ms)` triple a catalog
/// service returned. An unrecognized type string fails with
/// [`ErrorKind::UnsupportedType`]; validation failures from the selected
/// kind propagate unchanged.
///
/// [`ErrorKind::UnsupportedType`]: crate::ErrorKind::UnsupportedType
///
/// # Example
///
/// ```
/// use credvend::create_credential;
/// use std::collections::HashMap;
///
/// let info = HashMap::from([
///     ("oss-access-key-id".to_string(), "AKID123".to_string()),
///     ("oss-secret-access-key".to_string(), "SECRETXYZ".to_string()),
/// ]);
///
/// let credential = create_credential("oss-secret-key", &info, 0)?;
/// assert_eq!(credential.credential_type(), "oss-secret-key");
/// assert_eq!(credential.expire_time_in_ms(), 0);
/// # Ok::<(), credvend::Error>(())
/// ```
pub fn create_credential(
    credential_type: &str,
    credential_info: &HashMap<String, String>,
    expire_time_in_ms: i64,
) -> Result<Box<dyn Credential>> {
    debug!("creating credential of type {credential_type}");

    let credential: Box<dyn Credential> = match credential_type {
        OSS_SECRET_KEY_CREDENTIAL_TYPE => {
            Box::new(OssSecretKeyCredential::new(credential_info, expire_time_in_ms)?)
        }
        OSS_TOKEN_CREDENTIAL_TYPE => {
            Box::new(OssTokenCredential::new(credential_info, expire_time_in_ms)?)
        }
        S3_SECRET_KEY_CREDENTIAL_TYPE => {
            Box::new(S3SecretKeyCredential::new(credential_info, expire_time_in_ms)?)
        }
        S3_TOKEN_CREDENTIAL_TYPE => {
            Box::new(S3TokenCredential::new(credential_info, expire_time_in_ms)?)
        }
        GCS_TOKEN_CREDENTIAL_TYPE => {
            Box::new(GcsTokenCredential::new(credential_info, expire_time_in_ms)?)
        }
        ADLS_SAS_TOKEN_CREDENTIAL_TYPE => {
            Box::new(AdlsTokenCredential::new(credential_info, expire_time_in_ms)?)
        }
        AZURE_ACCOUNT_KEY_CREDENTIAL_TYPE => Box::new(AzureAccountKeyCredential::new(
            credential_info,
            expire_time_in_ms,
        )?),
        _ => {
            return Err(Error::unsupported_type(format!(
                "unknown credential type `{credential_type}`"
            )))
        }
    };

    Ok(credential)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_create_each_type() {
        init_logger();

        let cases: Vec<(&str, Vec<(&str, &str)>, i64)> = vec![
            (
                "oss-secret-key",
                vec![
                    ("oss-access-key-id", "AKID123"),
                    ("oss-secret-access-key", "SECRETXYZ"),
                ],
                0,
            ),
            (
                "oss-token",
                vec![
                    ("oss-access-key-id", "STS.AKID"),
                    ("oss-secret-access-key", "STSSECRET"),
                    ("oss-security-token", "STSTOKEN"),
                ],
                1893456000000,
            ),
            (
                "s3-secret-key",
                vec![
                    ("s3-access-key-id", "AKIAIOSFODNN7"),
                    ("s3-secret-access-key", "wJalrXUtnFEMI"),
                ],
                0,
            ),
            (
                "s3-token",
                vec![
                    ("s3-access-key-id", "ASIAIOSFODNN7"),
                    ("s3-secret-access-key", "wJalrXUtnFEMI"),
                    ("s3-session-token", "FwoGZXIvYXdz"),
                ],
                1893456000000,
            ),
            ("gcs-token", vec![("token", "ya29.a0AfH6SMB")], 1893456000000),
            (
                "adls-sas-token",
                vec![
                    ("azure-storage-account-name", "teststorage"),
                    ("adls-sas-token", "sv=2021-08-06&sig=abc"),
                ],
                1893456000000,
            ),
            (
                "azure-account-key",
                vec![
                    ("azure-storage-account-name", "teststorage"),
                    ("azure-storage-account-key", "dGVzdGtleQ=="),
                ],
                0,
            ),
        ];

        for (credential_type, entries, expire_time_in_ms) in cases {
            let info: HashMap<String, String> = entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();

            let credential =
                create_credential(credential_type, &info, expire_time_in_ms).unwrap();
            assert_eq!(
                credential.credential_type(),
                credential_type,
                "failed on: {credential_type}"
            );
            assert_eq!(credential.expire_time_in_ms(), expire_time_in_ms);
            assert_eq!(credential.credential_info(), info);
        }
    }

    #[test]
    fn test_unknown_type() {
        init_logger();

        for credential_type in ["", "oss", "OSS-SECRET-KEY", "swift-token"] {
            let err = create_credential(credential_type, &HashMap::new(), 0).unwrap_err();
            assert_eq!(
                err.kind(),
                ErrorKind::UnsupportedType,
                "failed on input: {credential_type:?}"
            );
            assert!(!err.is_validation_error());
        }
    }

    #[test]
    fn test_validation_errors_propagate() {
        init_logger();

        // Missing field from the selected kind, not an unsupported type.
        let err = create_credential("oss-secret-key", &HashMap::new(), 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);

        let info = HashMap::from([
            ("oss-access-key-id".to_string(), "AKID123".to_string()),
            ("oss-secret-access-key".to_string(), "SECRETXYZ".to_string()),
        ]);
        let err = create_credential("oss-secret-key", &info, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
