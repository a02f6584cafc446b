//! Environment variables holding the R2 endpoint and keys

use crate::{Error, Result};
use secrecy::SecretString;

/// S3-compatible endpoint URL of the R2 account
pub const R2_S3_ENDPOINT: &str = "R2_S3_ENDPOINT";
/// R2 access key id
pub const R2_ACCESS_KEY_ID: &str = "R2_ACCESS_KEY_ID";
/// R2 secret access key
pub const R2_SECRET_ACCESS_KEY: &str = "R2_SECRET_ACCESS_KEY";

/// All variables that must be present, in resolution order
pub const REQUIRED: [&str; 3] = [R2_S3_ENDPOINT, R2_ACCESS_KEY_ID, R2_SECRET_ACCESS_KEY];

/// Values resolved from the environment.
///
/// The secret key is held in a [`SecretString`] so it is redacted from
/// `Debug` output and zeroed on drop.
#[derive(Debug)]
pub struct R2Settings {
    /// Endpoint URL written as `endpoint_url`
    pub endpoint: String,
    /// Written as `aws_access_key_id`
    pub access_key_id: String,
    /// Written as `aws_secret_access_key`
    pub secret_access_key: SecretString,
}

impl R2Settings {
    /// Resolve all settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEnvironmentVariable`] for the first variable that
    /// is unset, empty, or not valid Unicode.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve all settings through `lookup`.
    ///
    /// Every variable is resolved before returning, so callers can rely on a
    /// complete set of values before touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEnvironmentVariable`] for the first variable that
    /// `lookup` reports as absent or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let [endpoint, access_key_id, secret_access_key] =
            REQUIRED.map(|name| require(&lookup, name));
        // Left to right, so the first missing variable in REQUIRED is reported
        let (endpoint, access_key_id, secret_access_key) =
            (endpoint?, access_key_id?, SecretString::from(secret_access_key?));

        tracing::debug!(endpoint = %endpoint, "Resolved R2 settings from environment");

        Ok(Self {
            endpoint,
            access_key_id,
            secret_access_key,
        })
    }
}

fn require<F>(lookup: &F, name: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingEnvironmentVariable { name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup_from(
        pairs: &[(&'static str, &'static str)],
    ) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn full() -> Vec<(&'static str, &'static str)> {
        vec![
            (R2_S3_ENDPOINT, "https://x.r2.cloudflarestorage.com"),
            (R2_ACCESS_KEY_ID, "AKIAEXAMPLE"),
            (R2_SECRET_ACCESS_KEY, "secret"),
        ]
    }

    #[test]
    fn test_resolves_all_values() {
        let settings = R2Settings::from_lookup(lookup_from(&full())).unwrap();

        assert_eq!(settings.endpoint, "https://x.r2.cloudflarestorage.com");
        assert_eq!(settings.access_key_id, "AKIAEXAMPLE");
        assert_eq!(settings.secret_access_key.expose_secret(), "secret");
    }

    #[test]
    fn test_each_missing_variable_is_reported() {
        for missing in REQUIRED {
            let pairs: Vec<_> = full().into_iter().filter(|(k, _)| *k != missing).collect();
            let err = R2Settings::from_lookup(lookup_from(&pairs)).unwrap_err();

            assert!(
                matches!(err, Error::MissingEnvironmentVariable { name } if name == missing),
                "expected {missing} to be reported, got {err:?}"
            );
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let pairs: Vec<_> = full()
            .into_iter()
            .map(|(k, v)| if k == R2_ACCESS_KEY_ID { (k, "") } else { (k, v) })
            .collect();
        let err = R2Settings::from_lookup(lookup_from(&pairs)).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Missing required environment variable: R2_ACCESS_KEY_ID"
        );
    }

    #[test]
    fn test_first_missing_variable_wins() {
        let err = R2Settings::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingEnvironmentVariable {
                name: R2_S3_ENDPOINT
            }
        ));
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let pairs: Vec<_> = full()
            .into_iter()
            .map(|(k, v)| if k == R2_ACCESS_KEY_ID { (k, " padded ") } else { (k, v) })
            .collect();
        let settings = R2Settings::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(settings.access_key_id, " padded ");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let settings = R2Settings::from_lookup(lookup_from(&[
            (R2_S3_ENDPOINT, "https://x.r2.cloudflarestorage.com"),
            (R2_ACCESS_KEY_ID, "AKIAEXAMPLE"),
            (R2_SECRET_ACCESS_KEY, "super-secret-value"),
        ]))
        .unwrap();

        let debug = format!("{settings:?}");
        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains("AKIAEXAMPLE"));
    }

    #[test]
    fn test_from_env() {
        temp_env::with_vars(
            [
                (R2_S3_ENDPOINT, Some("https://env.r2.cloudflarestorage.com")),
                (R2_ACCESS_KEY_ID, Some("env-key-id")),
                (R2_SECRET_ACCESS_KEY, Some("env-secret")),
            ],
            || {
                let settings = R2Settings::from_env().unwrap();
                assert_eq!(settings.endpoint, "https://env.r2.cloudflarestorage.com");
                assert_eq!(settings.access_key_id, "env-key-id");
                assert_eq!(settings.secret_access_key.expose_secret(), "env-secret");
            },
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_from_env_non_unicode_counts_as_missing() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        temp_env::with_vars(
            [
                (R2_S3_ENDPOINT, Some(OsStr::new("https://env.r2.cloudflarestorage.com"))),
                (R2_ACCESS_KEY_ID, Some(OsStr::from_bytes(b"\xff"))),
                (R2_SECRET_ACCESS_KEY, Some(OsStr::new("env-secret"))),
            ],
            || {
                let err = R2Settings::from_env().unwrap_err();
                assert!(matches!(
                    err,
                    Error::MissingEnvironmentVariable {
                        name: R2_ACCESS_KEY_ID
                    }
                ));
            },
        );
    }

    #[test]
    fn test_from_env_unset() {
        temp_env::with_vars(
            [
                (R2_S3_ENDPOINT, Some("https://env.r2.cloudflarestorage.com")),
                (R2_ACCESS_KEY_ID, Some("env-key-id")),
                (R2_SECRET_ACCESS_KEY, None),
            ],
            || {
                let err = R2Settings::from_env().unwrap_err();
                assert!(matches!(
                    err,
                    Error::MissingEnvironmentVariable {
                        name: R2_SECRET_ACCESS_KEY
                    }
                ));
            },
        );
    }
}
