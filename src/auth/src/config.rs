// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! External configuration for the service clients.
//!
//! Applications can configure the credentials and the endpoint of each
//! service outside the code. The configuration is keyed by a service name,
//! for example `zones_settings` or `direct_link`. For a service name such as
//! `my_cis` the properties are named `MY_CIS_APIKEY`, `MY_CIS_URL`, etc.
//!
//! The properties are read from the first source that defines any property
//! for the service:
//!
//! 1. A credentials file, its path is set in the `IBM_CREDENTIALS_FILE`
//!    environment variable. Without this variable the file is
//!    `ibm-credentials.env` in the current directory, if it exists.
//! 2. The environment variables.
//!
//! The credentials file contains `NAME=value` lines. Empty lines and lines
//! starting with `#` are ignored.
//!
//! # Example
//! ```
//! # use ibm_cloud_networking_auth::config::Properties;
//! let contents = r#"
//! # CIS credentials
//! MY_CIS_AUTH_TYPE=iam
//! MY_CIS_APIKEY=my-api-key
//! OTHER_APIKEY=other-api-key
//! "#;
//! let properties = Properties::parse("my_cis", contents);
//! assert_eq!(properties.get("APIKEY"), Some("my-api-key"));
//! assert_eq!(properties.get("URL"), None);
//! ```

use crate::Result;
use crate::errors;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The environment variable with the path of the credentials file.
pub const CREDENTIALS_FILE_VAR: &str = "IBM_CREDENTIALS_FILE";

/// The credentials file name used when [CREDENTIALS_FILE_VAR] is not set.
pub const DEFAULT_CREDENTIALS_FILE: &str = "ibm-credentials.env";

/// The authentication type: `iam`, `bearerToken`, `basic` or `noAuth`.
pub const AUTH_TYPE: &str = "AUTH_TYPE";
/// The API key for IAM authentication.
pub const APIKEY: &str = "APIKEY";
/// The token for bearer token authentication.
pub const BEARER_TOKEN: &str = "BEARER_TOKEN";
/// The username for basic authentication.
pub const USERNAME: &str = "USERNAME";
/// The password for basic authentication.
pub const PASSWORD: &str = "PASSWORD";
/// The IAM token service URL.
pub const AUTH_URL: &str = "AUTH_URL";
/// The service endpoint.
pub const URL: &str = "URL";
/// The client id for the IAM token service.
pub const CLIENT_ID: &str = "CLIENT_ID";
/// The client secret for the IAM token service.
pub const CLIENT_SECRET: &str = "CLIENT_SECRET";
/// The scope requested from the IAM token service.
pub const SCOPE: &str = "SCOPE";
/// Set to `true` to enable automatic retries for the service client.
pub const ENABLE_RETRIES: &str = "ENABLE_RETRIES";
/// The maximum number of retries, used with [ENABLE_RETRIES].
pub const MAX_RETRIES: &str = "MAX_RETRIES";
/// The maximum interval between retries, in seconds, used with
/// [ENABLE_RETRIES].
pub const RETRY_INTERVAL: &str = "RETRY_INTERVAL";

const PROPERTIES: [&str; 13] = [
    AUTH_TYPE,
    APIKEY,
    BEARER_TOKEN,
    USERNAME,
    PASSWORD,
    AUTH_URL,
    URL,
    CLIENT_ID,
    CLIENT_SECRET,
    SCOPE,
    ENABLE_RETRIES,
    MAX_RETRIES,
    RETRY_INTERVAL,
];

/// The configuration properties for one service.
///
/// The property names do not include the service name prefix, for example,
/// `APIKEY` or `URL`.
#[derive(Clone, Default, PartialEq)]
pub struct Properties(HashMap<String, String>);

impl Properties {
    /// Returns the value of a property, `None` if it is missing or empty.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Returns true if no properties are defined.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses the contents of a credentials file, keeping the properties for
    /// `service_name`.
    pub fn parse(service_name: &str, contents: &str) -> Self {
        let prefix = prefix(service_name);
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .filter_map(|(k, v)| {
                k.trim()
                    .strip_prefix(&prefix)
                    .filter(|name| PROPERTIES.contains(name))
                    .map(|name| (name.to_string(), unquote(v.trim()).to_string()))
            })
            .collect()
    }

    fn from_env(service_name: &str) -> Self {
        let prefix = prefix(service_name);
        PROPERTIES
            .iter()
            .filter_map(|name| {
                std::env::var(format!("{prefix}{name}"))
                    .ok()
                    .map(|v| (name.to_string(), v))
            })
            .collect()
    }
}

impl FromIterator<(String, String)> for Properties {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Debug for Properties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in &self.0 {
            match k.as_str() {
                APIKEY | BEARER_TOKEN | PASSWORD | CLIENT_SECRET => map.entry(k, &"[censored]"),
                _ => map.entry(k, v),
            };
        }
        map.finish()
    }
}

/// Loads the properties for `service_name` from the external configuration.
///
/// Returns empty properties if no source configures the service.
///
/// # Errors
///
/// Returns an error if the `IBM_CREDENTIALS_FILE` variable names a file that
/// cannot be read.
pub fn load(service_name: &str) -> Result<Properties> {
    if let Some(path) = credentials_file() {
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            errors::non_retryable_from_str(format!(
                "cannot read the credentials file {}: {e}",
                path.display()
            ))
        })?;
        let properties = Properties::parse(service_name, &contents);
        if !properties.is_empty() {
            tracing::debug!(
                "loaded properties for `{service_name}` from {}",
                path.display()
            );
            return Ok(properties);
        }
    }
    Ok(Properties::from_env(service_name))
}

fn credentials_file() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CREDENTIALS_FILE_VAR) {
        return Some(PathBuf::from(path));
    }
    let path = Path::new(DEFAULT_CREDENTIALS_FILE);
    path.is_file().then(|| path.to_path_buf())
}

fn prefix(service_name: &str) -> String {
    format!("{}_", service_name.to_ascii_uppercase().replace('-', "_"))
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use std::io::Write;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[test_case("zones_settings", "ZONES_SETTINGS_")]
    #[test_case("direct-link", "DIRECT_LINK_")]
    #[test_case("MyCis", "MYCIS_")]
    fn service_prefix(input: &str, want: &str) {
        assert_eq!(prefix(input), want);
    }

    #[test]
    fn parse() {
        let contents = r#"
            # comment
            MY_CIS_AUTH_TYPE = iam
            MY_CIS_APIKEY="quoted-key"
            MY_CIS_URL=https://api.cis.cloud.ibm.com=weird
            MY_CIS_UNKNOWN=ignored
            MY_CISX_APIKEY=other
            not-a-property
        "#;
        let got = Properties::parse("my_cis", contents);
        assert_eq!(got.get(AUTH_TYPE), Some("iam"));
        assert_eq!(got.get(APIKEY), Some("quoted-key"));
        assert_eq!(got.get(URL), Some("https://api.cis.cloud.ibm.com=weird"));
        assert_eq!(got.0.len(), 3, "{got:?}");
    }

    #[test]
    fn empty_values() {
        let got = Properties::parse("my_cis", "MY_CIS_APIKEY=\n");
        assert!(!got.is_empty());
        assert_eq!(got.get(APIKEY), None);
    }

    #[test]
    fn debug_censors_secrets() {
        let got = Properties::parse(
            "s",
            "S_APIKEY=k1\nS_BEARER_TOKEN=k2\nS_PASSWORD=k3\nS_CLIENT_SECRET=k4\nS_USERNAME=user",
        );
        let fmt = format!("{got:?}");
        for secret in ["k1", "k2", "k3", "k4"] {
            assert!(!fmt.contains(secret), "{fmt}");
        }
        assert!(fmt.contains("user"), "{fmt}");
    }

    #[test]
    #[serial_test::serial]
    fn load_from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "MY_CIS_APIKEY=from-file")?;
        writeln!(file, "MY_CIS_URL=https://file.example.com")?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, file.path().to_str().unwrap());
        let _e = ScopedEnv::set("MY_CIS_APIKEY", "from-env");

        let got = load("my_cis")?;
        assert_eq!(got.get(APIKEY), Some("from-file"));
        assert_eq!(got.get(URL), Some("https://file.example.com"));
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn load_falls_back_to_env() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "OTHER_APIKEY=from-file")?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, file.path().to_str().unwrap());
        let _e = ScopedEnv::set("MY_CIS_APIKEY", "from-env");
        let _u = ScopedEnv::remove("MY_CIS_URL");

        let got = load("my_cis")?;
        assert_eq!(got.get(APIKEY), Some("from-env"));
        assert_eq!(got.get(URL), None);
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn load_missing_file() {
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, "/does/not/exist/ibm-credentials.env");
        let err = load("my_cis").unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        assert!(err.to_string().contains("/does/not/exist"), "{err}");
    }

    #[test]
    #[serial_test::serial]
    fn load_nothing() -> TestResult {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("empty.env");
        std::fs::write(&file, "")?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, file.to_str().unwrap());
        let _e = ScopedEnv::remove("NOTHING_HERE_APIKEY");
        let got = load("nothing_here")?;
        assert!(got.is_empty(), "{got:?}");
        Ok(())
    }
}
