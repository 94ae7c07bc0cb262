use std::collections::HashMap;
use std::fmt::Debug;

use crate::time::{self, DateTime};
use crate::{Error, Result};

/// Credential is the capability shared by every vended credential kind.
///
/// The catalog service identifies each kind by the string returned from
/// [`credential_type`][Credential::credential_type] and ships the raw
/// fields in [`credential_info`][Credential::credential_info], which is
/// what storage SDK integration reads to configure a client. Implementers
/// are immutable once constructed and safe to read from multiple threads.
pub trait Credential: Debug + Send + Sync + 'static {
    /// The fixed type string identifying this credential kind.
    fn credential_type(&self) -> &'static str;

    /// Expiration time in milliseconds since the Unix epoch.
    ///
    /// `0` means the credential never expires.
    fn expire_time_in_ms(&self) -> i64;

    /// The raw credential fields.
    ///
    /// The returned mapping is built fresh on every call and never
    /// aliases the credential's own state, so callers may mutate it
    /// freely.
    fn credential_info(&self) -> HashMap<String, String>;

    /// Expiration as a [`DateTime`], or `None` for credentials that
    /// never expire.
    fn expire_time(&self) -> Option<DateTime> {
        match self.expire_time_in_ms() {
            0 => None,
            ms => time::from_timestamp_millis(ms),
        }
    }

    /// Whether the credential has already expired at `now`.
    ///
    /// Never-expiring credentials report `false`. Early-renewal buffers
    /// are the refresh scheduler's concern, not this type's.
    fn has_expired(&self, now: DateTime) -> bool {
        match self.expire_time() {
            Some(at) => at <= now,
            None => false,
        }
    }
}

/// Extract a required entry from a credential info mapping.
///
/// Lookup failures surface before any value validation so that an absent
/// key is always reported as [`ErrorKind::MissingField`], never as an
/// invalid value.
///
/// [`ErrorKind::MissingField`]: crate::ErrorKind::MissingField
pub(crate) fn require_field(
    credential_info: &HashMap<String, String>,
    key: &str,
) -> Result<String> {
    credential_info
        .get(key)
        .cloned()
        .ok_or_else(|| Error::missing_field(format!("credential info has no `{key}` entry")))
}

/// Reject empty or all-whitespace values for the named field.
pub(crate) fn check_not_blank(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(format!(
            "{what} should not be empty"
        )));
    }
    Ok(())
}

/// Static key credentials never expire; the vended expiration must be 0.
pub(crate) fn check_static_expiration(expire_time_in_ms: i64, what: &str) -> Result<()> {
    if expire_time_in_ms != 0 {
        return Err(Error::invalid_argument(format!(
            "expiration time of {what} should be 0, got {expire_time_in_ms}"
        )));
    }
    Ok(())
}

/// Token credentials always expire; the vended expiration must be in the
/// future, expressed as a positive epoch-millisecond timestamp.
pub(crate) fn check_token_expiration(expire_time_in_ms: i64, what: &str) -> Result<()> {
    if expire_time_in_ms <= 0 {
        return Err(Error::invalid_argument(format!(
            "expiration time of {what} should be greater than 0, got {expire_time_in_ms}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[derive(Debug)]
    struct FakeCredential {
        expire_time_in_ms: i64,
    }

    impl Credential for FakeCredential {
        fn credential_type(&self) -> &'static str {
            "fake"
        }

        fn expire_time_in_ms(&self) -> i64 {
            self.expire_time_in_ms
        }

        fn credential_info(&self) -> HashMap<String, String> {
            HashMap::new()
        }
    }

    #[test]
    fn test_expire_time_zero_means_never() {
        let credential = FakeCredential {
            expire_time_in_ms: 0,
        };
        assert!(credential.expire_time().is_none());
        assert!(!credential.has_expired(time::now()));
    }

    #[test]
    fn test_expire_time_conversion() {
        let credential = FakeCredential {
            expire_time_in_ms: 1609459200000,
        };
        let at = credential.expire_time().expect("expiring credential");
        assert_eq!(time::to_timestamp_millis(at), 1609459200000);
    }

    #[test]
    fn test_has_expired_boundaries() {
        let credential = FakeCredential {
            expire_time_in_ms: 1609459200000,
        };
        let at = time::from_timestamp_millis(1609459200000).unwrap();

        assert!(!credential.has_expired(at - chrono::TimeDelta::milliseconds(1)));
        assert!(credential.has_expired(at));
        assert!(credential.has_expired(at + chrono::TimeDelta::milliseconds(1)));
    }

    #[test]
    fn test_require_field() {
        let info = HashMap::from([("present".to_string(), "value".to_string())]);

        assert_eq!(require_field(&info, "present").unwrap(), "value");

        let err = require_field(&info, "absent").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_check_not_blank() {
        assert!(check_not_blank("value", "field").is_ok());

        for value in ["", " ", "\t", " \n "] {
            let err = check_not_blank(value, "field").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_expiration_checks() {
        assert!(check_static_expiration(0, "credential").is_ok());
        assert!(check_static_expiration(1, "credential").is_err());
        assert!(check_static_expiration(-1, "credential").is_err());

        assert!(check_token_expiration(1, "credential").is_ok());
        assert!(check_token_expiration(0, "credential").is_err());
        assert!(check_token_expiration(-1, "credential").is_err());
    }
}
