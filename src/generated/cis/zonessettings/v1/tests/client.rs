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

#[cfg(test)]
mod tests {
    use auth::config::CREDENTIALS_FILE_VAR;
    use auth::credentials::bearer_token;
    use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    use ibm_cloud_networking_zones_settings_v1::{DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL};
    use scoped_env::ScopedEnv;
    use std::io::Write;
    use test_case::test_case;

    type Result<T> = anyhow::Result<T>;

    #[test]
    fn new_uses_default_service_url() -> Result<()> {
        let credentials = bearer_token::Builder::new("test-token").build()?;
        let client = ZonesSettings::new("test-crn", "test-zone", credentials)?;
        assert_eq!(client.service_url(), DEFAULT_SERVICE_URL);
        assert_eq!(client.service_url(), "https://api.cis.cloud.ibm.com");
        assert_eq!(client.crn(), "test-crn");
        assert_eq!(client.zone_identifier(), "test-zone");
        assert!(!client.retries_enabled());
        Ok(())
    }

    #[test_case("", "", "crn, zone_identifier"; "both missing")]
    #[test_case("", "test-zone", "crn"; "crn missing")]
    #[test_case("test-crn", "", "zone_identifier"; "zone missing")]
    fn new_requires_identity(crn: &str, zone: &str, missing: &str) -> Result<()> {
        let credentials = bearer_token::Builder::new("test-token").build()?;
        let err = ZonesSettings::new(crn, zone, credentials).unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        assert!(
            err.to_string()
                .contains(&format!("Missing required parameters: {missing}")),
            "{err}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn builder_requires_identity() -> Result<()> {
        let err = ZonesSettings::builder("test-crn", "")
            .with_credentials(bearer_token::Builder::new("test-token").build()?)
            .build()
            .await
            .unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        assert!(
            err.to_string()
                .contains("Missing required parameters: zone_identifier"),
            "{err}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn builder_with_endpoint() -> Result<()> {
        let client = ZonesSettings::builder("test-crn", "test-zone")
            .with_endpoint("https://private.api.cis.cloud.ibm.com/")
            .with_credentials(bearer_token::Builder::new("test-token").build()?)
            .build()
            .await?;
        assert_eq!(client.service_url(), "https://private.api.cis.cloud.ibm.com");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn builder_from_configuration() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "ZONES_SETTINGS_AUTH_TYPE=bearerToken")?;
        writeln!(file, "ZONES_SETTINGS_BEARER_TOKEN=file-token")?;
        writeln!(file, "ZONES_SETTINGS_URL=https://configured.example.com")?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, file.path().to_str().unwrap());

        assert_eq!(DEFAULT_SERVICE_NAME, "zones_settings");
        let client = ZonesSettings::builder("test-crn", "test-zone")
            .build()
            .await?;
        assert_eq!(client.service_url(), "https://configured.example.com");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn builder_with_service_name() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "MY_ZONES_AUTH_TYPE=noAuth")?;
        writeln!(file, "MY_ZONES_URL=https://my-zones.example.com")?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, file.path().to_str().unwrap());

        let client = ZonesSettings::builder("test-crn", "test-zone")
            .with_service_name("my_zones")
            .build()
            .await?;
        assert_eq!(client.service_url(), "https://my-zones.example.com");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn builder_without_credentials() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let empty = dir.path().join("empty.env");
        std::fs::write(&empty, "")?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, empty.to_str().unwrap());
        let _a = ScopedEnv::remove("ZONES_SETTINGS_AUTH_TYPE");
        let _k = ScopedEnv::remove("ZONES_SETTINGS_APIKEY");

        let err = ZonesSettings::builder("test-crn", "test-zone")
            .build()
            .await
            .unwrap_err();
        assert!(err.is_default_credentials(), "{err:?}");
        Ok(())
    }
}
