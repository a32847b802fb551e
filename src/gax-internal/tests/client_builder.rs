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

//! Verify the client builder resolves the credentials and the endpoint from
//! the external configuration.
//!
//! These tests change the environment, so they run serially.

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use auth::config::CREDENTIALS_FILE_VAR;
    use gax::options::RequestOptions;
    use gax::response::Response;
    use ibm_cloud_networking_gax_internal::http::{Body, ReqwestClient};
    use scoped_env::ScopedEnv;
    use serde_json::Value;
    use std::io::Write;

    type Result<T> = anyhow::Result<T>;

    // An endpoint that cannot be reached, the tests verify it is not used.
    const UNUSED_ENDPOINT: &str = "http://unused.invalid";

    fn credentials_file(lines: &[String]) -> Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        for line in lines {
            writeln!(file, "{line}")?;
        }
        Ok(file)
    }

    async fn echo(client: &ReqwestClient) -> Result<Response<Value>> {
        let builder = client.builder(reqwest::Method::GET, "/echo".into());
        Ok(client
            .execute(builder, Body::Empty, RequestOptions::default())
            .await?)
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn from_configuration() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await.map_err(anyhow::Error::msg)?;
        let file = credentials_file(&[
            "ECHO_SERVER_AUTH_TYPE=bearerToken".to_string(),
            "ECHO_SERVER_BEARER_TOKEN=file-token".to_string(),
            format!("ECHO_SERVER_URL={endpoint}"),
        ])?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, file.path().to_str().unwrap());

        let client = echo_server::builder(UNUSED_ENDPOINT).build().await?;
        assert_eq!(client.endpoint(), endpoint);
        let response = echo(&client).await?;
        assert_eq!(
            response.body()["headers"]["authorization"],
            "Bearer file-token"
        );
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn explicit_endpoint_wins() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await.map_err(anyhow::Error::msg)?;
        let file = credentials_file(&[
            "ECHO_SERVER_AUTH_TYPE=noAuth".to_string(),
            format!("ECHO_SERVER_URL={UNUSED_ENDPOINT}"),
        ])?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, file.path().to_str().unwrap());

        let client = echo_server::builder(UNUSED_ENDPOINT)
            .with_endpoint(format!("{endpoint}/"))
            .build()
            .await?;
        assert_eq!(client.endpoint(), endpoint);
        let response = echo(&client).await?;
        assert!(response.body()["headers"].get("authorization").is_none());
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_endpoint() -> Result<()> {
        let file = credentials_file(&["ECHO_SERVER_AUTH_TYPE=noAuth".to_string()])?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, file.path().to_str().unwrap());

        let client = echo_server::builder(UNUSED_ENDPOINT).build().await?;
        assert_eq!(client.endpoint(), UNUSED_ENDPOINT);
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn service_name() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await.map_err(anyhow::Error::msg)?;
        let file = credentials_file(&[
            "MY_SERVICE_AUTH_TYPE=basic".to_string(),
            "MY_SERVICE_USERNAME=Aladdin".to_string(),
            "MY_SERVICE_PASSWORD=open sesame".to_string(),
        ])?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, file.path().to_str().unwrap());

        let client = echo_server::builder(endpoint)
            .with_service_name("my-service")
            .build()
            .await?;
        let response = echo(&client).await?;
        assert_eq!(
            response.body()["headers"]["authorization"],
            "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
        );
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn missing_credentials() -> Result<()> {
        let file = credentials_file(&[])?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, file.path().to_str().unwrap());
        let _a = ScopedEnv::remove("ECHO_SERVER_AUTH_TYPE");
        let _k = ScopedEnv::remove("ECHO_SERVER_APIKEY");

        let err = echo_server::builder(UNUSED_ENDPOINT)
            .build()
            .await
            .unwrap_err();
        assert!(err.is_default_credentials(), "{err:?}");
        Ok(())
    }
}
