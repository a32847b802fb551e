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

//! Resolves the client configuration against the external configuration.
//!
//! Values set in code take precedence. Without them, the service properties
//! loaded by [auth::config::load] are used, and finally the defaults of each
//! service.

pub use auth::credentials::Credentials;
#[cfg(feature = "_internal-http-client")]
use gax::client_builder::Error as BuilderError;
#[cfg(feature = "_internal-http-client")]
use std::time::Duration;

// The client configuration for [crate::http::ReqwestClient].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

pub(crate) const LOGGING_VAR: &str = "IBM_CLOUD_NETWORKING_RUST_LOGGING";

// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// The settings of a service client, after applying the external
/// configuration.
#[cfg(feature = "_internal-http-client")]
#[derive(Debug)]
pub(crate) struct ServiceSettings {
    pub service_name: String,
    pub endpoint: String,
    pub credentials: Credentials,
    /// `Some((max_retries, max_retry_interval))` if the external
    /// configuration enables retries.
    pub retries: Option<(Option<u32>, Option<Duration>)>,
}

#[cfg(feature = "_internal-http-client")]
impl ServiceSettings {
    pub fn resolve(
        config: &ClientConfig,
        default_endpoint: &str,
        default_service_name: &str,
    ) -> gax::client_builder::Result<Self> {
        let service_name = config
            .service_name
            .clone()
            .unwrap_or_else(|| default_service_name.to_string());
        // A broken credentials file only matters when the credentials come
        // from it, the endpoint and retry properties are optional.
        let properties = auth::config::load(&service_name).unwrap_or_default();
        let credentials = match &config.cred {
            Some(c) => c.clone(),
            None => auth::credentials::Builder::from_service_name(&service_name)
                .build()
                .map_err(BuilderError::cred)?,
        };
        let endpoint = config
            .endpoint
            .clone()
            .or_else(|| properties.get(auth::config::URL).map(str::to_string))
            .unwrap_or_else(|| default_endpoint.to_string());
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            retries: retries(&properties),
            service_name,
            credentials,
        })
    }
}

#[cfg(feature = "_internal-http-client")]
fn retries(properties: &auth::config::Properties) -> Option<(Option<u32>, Option<Duration>)> {
    let enabled = properties
        .get(auth::config::ENABLE_RETRIES)
        .is_some_and(|v| v.eq_ignore_ascii_case("true"));
    if !enabled {
        return None;
    }
    let max_retries = properties
        .get(auth::config::MAX_RETRIES)
        .and_then(|v| v.parse::<u32>().ok());
    let interval = properties
        .get(auth::config::RETRY_INTERVAL)
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs);
    Some((max_retries, interval))
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::config::{CREDENTIALS_FILE_VAR, Properties};
    use scoped_env::ScopedEnv;
    use std::io::Write;
    use test_case::test_case;

    // This test must run serially because it manipulates the environment.
    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
        let config = ClientConfig {
            tracing: true,
            ..Default::default()
        };
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::default();
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
    }

    #[test_case("", None; "not configured")]
    #[test_case("SVC_ENABLE_RETRIES=false", None; "disabled")]
    #[test_case("SVC_ENABLE_RETRIES=true", Some((None, None)); "defaults")]
    #[test_case(
        "SVC_ENABLE_RETRIES=TRUE\nSVC_MAX_RETRIES=3\nSVC_RETRY_INTERVAL=20",
        Some((Some(3), Some(Duration::from_secs(20))));
        "limits"
    )]
    #[test_case("SVC_ENABLE_RETRIES=true\nSVC_MAX_RETRIES=many", Some((None, None)); "invalid")]
    fn retry_properties(contents: &str, want: Option<(Option<u32>, Option<Duration>)>) {
        let properties = Properties::parse("svc", contents);
        assert_eq!(retries(&properties), want);
    }

    #[test]
    #[serial_test::serial]
    fn resolve_from_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "MY_SVC_AUTH_TYPE=noAuth")?;
        writeln!(file, "MY_SVC_URL=https://configured.example.com/")?;
        writeln!(file, "MY_SVC_ENABLE_RETRIES=true")?;
        writeln!(file, "MY_SVC_MAX_RETRIES=2")?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, file.path().to_str().unwrap());

        let settings = ServiceSettings::resolve(
            &ClientConfig::default(),
            "https://default.example.com",
            "my_svc",
        )?;
        assert_eq!(settings.service_name, "my_svc");
        assert_eq!(settings.endpoint, "https://configured.example.com");
        assert_eq!(settings.retries, Some((Some(2), None)));
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn resolve_code_takes_precedence() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "OTHER_AUTH_TYPE=basic")?;
        writeln!(file, "OTHER_URL=https://configured.example.com")?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, file.path().to_str().unwrap());

        let config = ClientConfig {
            endpoint: Some("https://code.example.com".to_string()),
            cred: Some(auth::credentials::no_auth::Builder::new().build()),
            service_name: Some("other".to_string()),
            ..Default::default()
        };
        let settings = ServiceSettings::resolve(&config, "https://default.example.com", "svc")?;
        assert_eq!(settings.service_name, "other");
        assert_eq!(settings.endpoint, "https://code.example.com");
        assert_eq!(settings.retries, None);
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn resolve_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let empty = dir.path().join("empty.env");
        std::fs::write(&empty, "")?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, empty.to_str().unwrap());
        let _u = ScopedEnv::remove("SVC_URL");

        let config = ClientConfig {
            cred: Some(auth::credentials::no_auth::Builder::new().build()),
            ..Default::default()
        };
        let settings = ServiceSettings::resolve(&config, "https://default.example.com/", "svc")?;
        assert_eq!(settings.endpoint, "https://default.example.com");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn resolve_missing_credentials() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let empty = dir.path().join("empty.env");
        std::fs::write(&empty, "")?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, empty.to_str().unwrap());
        let _a = ScopedEnv::remove("SVC_AUTH_TYPE");
        let _k = ScopedEnv::remove("SVC_APIKEY");

        let err = ServiceSettings::resolve(
            &ClientConfig::default(),
            "https://default.example.com",
            "svc",
        )
        .unwrap_err();
        assert!(err.is_default_credentials(), "{err:?}");
        Ok(())
    }
}
