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
    use httptest::{Expectation, Server, all_of, cycle, matchers::*, responders::*};
    use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    use ibm_cloud_networking_transit_gateway_v1::{DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL};
    use scoped_env::ScopedEnv;
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    #[test]
    fn new_uses_default_service_url() -> Result<()> {
        let credentials = bearer_token::Builder::new("test-token").build()?;
        let client = TransitGateway::new("2021-12-30", credentials)?;
        assert_eq!(client.service_url(), DEFAULT_SERVICE_URL);
        assert_eq!(client.version(), "2021-12-30");
        Ok(())
    }

    #[test]
    fn new_requires_version() -> Result<()> {
        let credentials = bearer_token::Builder::new("test-token").build()?;
        let err = TransitGateway::new("", credentials).unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        assert!(err.to_string().contains("version"), "{err}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn builder_from_environment() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let empty = dir.path().join("empty.env");
        std::fs::write(&empty, "")?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, empty.to_str().unwrap());
        let _t = ScopedEnv::set("TRANSIT_GATEWAY_APIS_AUTH_TYPE", "noAuth");
        let _u = ScopedEnv::set("TRANSIT_GATEWAY_APIS_URL", "https://private.transit.cloud.ibm.com/v1");

        assert_eq!(DEFAULT_SERVICE_NAME, "transit_gateway_apis");
        let client = TransitGateway::builder("2021-12-30").build().await?;
        assert_eq!(client.service_url(), "https://private.transit.cloud.ibm.com/v1");
        Ok(())
    }

    #[tokio::test]
    async fn retries_transient_errors() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/locations"),
                request::query(url_decoded(contains(("version", "2021-12-30")))),
            ])
            .times(2)
            .respond_with(cycle![
                status_code(503).body("try again"),
                json_encoded(json!({"locations": [{"name": "us-south", "billing_location": "us", "type": "region"}]})),
            ]),
        );

        let client = TransitGateway::builder("2021-12-30")
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(bearer_token::Builder::new("test-token").build()?)
            .build()
            .await?;
        client.enable_retries(Some(2), Some(Duration::from_millis(10)));
        let got = client.list_gateway_locations().send().await?.into_body();
        assert_eq!(got.locations.len(), 1, "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn no_retries_by_default() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/locations"))
                .times(1)
                .respond_with(status_code(503).body("try again")),
        );

        let client = TransitGateway::builder("2021-12-30")
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(bearer_token::Builder::new("test-token").build()?)
            .build()
            .await?;
        assert!(!client.retries_enabled());
        let err = client.list_gateway_locations().send().await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }
}
