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

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use gax::options::RequestOptions;
    use gax::retry_policy::{AlwaysRetry, RetryPolicyExt};
    use ibm_cloud_networking_gax_internal::http::{Body, ReqwestClient};
    use serde_json::Value;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    async fn test_client(endpoint: &str) -> Result<ReqwestClient> {
        let client = echo_server::builder(endpoint)
            .with_credentials(auth::credentials::no_auth::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn attempt_timeout() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await.map_err(anyhow::Error::msg)?;
        let client = test_client(&endpoint).await?;

        let builder = client
            .builder(reqwest::Method::GET, "/echo".into())
            .query(&[("delay_ms", "2000")]);
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(50));
        let err = client
            .execute::<Value>(builder, Body::Empty, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn attempt_timeout_not_reached() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await.map_err(anyhow::Error::msg)?;
        let client = test_client(&endpoint).await?;

        let builder = client
            .builder(reqwest::Method::GET, "/echo".into())
            .query(&[("delay_ms", "10")]);
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_secs(10));
        let response = client
            .execute::<Value>(builder, Body::Empty, options)
            .await?;
        assert_eq!(response.body()["query"]["delay_ms"], "10");
        Ok(())
    }

    #[tokio::test]
    async fn retry_loop_time_limit() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await.map_err(anyhow::Error::msg)?;
        let client = test_client(&endpoint).await?;

        let builder = client
            .builder(reqwest::Method::GET, "/echo".into())
            .query(&[("delay_ms", "2000")]);
        let mut options = RequestOptions::default();
        options.set_idempotency(true);
        options.set_retry_policy(AlwaysRetry.with_time_limit(Duration::from_millis(100)));
        let err = client
            .execute::<Value>(builder, Body::Empty, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout() || err.is_exhausted(), "{err:?}");
        Ok(())
    }
}
