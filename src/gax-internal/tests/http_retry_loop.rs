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

//! Verify the HTTP client uses the retry policies as expected.
//!
//! The tests use an HTTP server that returns a sequence of responses. The
//! sequence is specific to each test, intended to drive the retry loop as
//! needed for that test. The policy implementations are tested in the unit
//! tests.

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use gax::backoff_policy::BackoffPolicy;
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::RequestOptions;
    use gax::retry_policy::{AlwaysRetry, NeverRetry, RecommendedRetry, RetryPolicyExt};
    use http::StatusCode;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use ibm_cloud_networking_gax_internal::http::{Body, ReqwestClient};
    use serde_json::{Value, json};
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    #[tokio::test]
    async fn no_retry_by_default() -> Result<()> {
        let server = start(vec![transient()]);
        let client = test_client(&server).await?;

        let err = client
            .execute::<Value>(retry_builder(&client), Body::Empty, idempotent())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }

    #[tokio::test]
    async fn request_policy() -> Result<()> {
        let server = start(vec![transient(), transient(), success()]);
        let client = test_client(&server).await?;

        let mut options = idempotent();
        options.set_retry_policy(RecommendedRetry.with_attempt_limit(3));
        options.set_backoff_policy(test_backoff());
        let response = client
            .execute::<Value>(retry_builder(&client), Body::Empty, options)
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test]
    async fn request_policy_exhausted() -> Result<()> {
        let server = start(vec![transient(), transient()]);
        let client = test_client(&server).await?;

        let mut options = idempotent();
        options.set_retry_policy(RecommendedRetry.with_attempt_limit(2));
        options.set_backoff_policy(test_backoff());
        let err = client
            .execute::<Value>(retry_builder(&client), Body::Empty, options)
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn permanent_error() -> Result<()> {
        let server = start(vec![permanent()]);
        let client = test_client(&server).await?;

        let mut options = idempotent();
        options.set_retry_policy(RecommendedRetry.with_attempt_limit(3));
        options.set_backoff_policy(test_backoff());
        let err = client
            .execute::<Value>(retry_builder(&client), Body::Empty, options)
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        assert!(!err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn not_idempotent() -> Result<()> {
        let server = start(vec![transient()]);
        let client = test_client(&server).await?;

        let mut options = RequestOptions::default();
        options.set_idempotency(false);
        options.set_retry_policy(RecommendedRetry.with_attempt_limit(3));
        options.set_backoff_policy(test_backoff());
        let err = client
            .execute::<Value>(retry_builder(&client), Body::Empty, options)
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }

    #[tokio::test]
    async fn switch_enable() -> Result<()> {
        let server = start(vec![transient(), success()]);
        let client = test_client(&server).await?;

        let clone = client.clone();
        clone
            .retry_switch()
            .enable(Some(2), Some(Duration::from_millis(1)));
        assert!(client.retry_switch().is_enabled());
        let response = client
            .execute::<Value>(retry_builder(&client), Body::Empty, idempotent())
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test]
    async fn switch_disable() -> Result<()> {
        let server = start(vec![transient()]);
        let client = test_client(&server).await?;

        client
            .retry_switch()
            .enable(Some(2), Some(Duration::from_millis(1)));
        client.retry_switch().disable();
        let err = client
            .execute::<Value>(retry_builder(&client), Body::Empty, idempotent())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }

    #[tokio::test]
    async fn request_policy_overrides_switch() -> Result<()> {
        let server = start(vec![transient()]);
        let client = test_client(&server).await?;

        client
            .retry_switch()
            .enable(Some(4), Some(Duration::from_millis(1)));
        let mut options = idempotent();
        options.set_retry_policy(NeverRetry);
        let err = client
            .execute::<Value>(retry_builder(&client), Body::Empty, options)
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }

    #[tokio::test]
    async fn config_policy() -> Result<()> {
        let server = start(vec![transient(), transient(), success()]);
        let endpoint = format!("http://{}", server.addr());
        let client: ReqwestClient = echo_server::builder(endpoint)
            .with_credentials(test_credentials()?)
            .with_retry_policy(AlwaysRetry.with_attempt_limit(3))
            .with_backoff_policy(test_backoff())
            .build()
            .await?;

        let response = client
            .execute::<Value>(retry_builder(&client), Body::Empty, idempotent())
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test]
    async fn retry_resends_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/retry"),
                request::body(json_decoded(eq(json!({"name": "gateway"})))),
            ])
            .times(2)
            .respond_with(cycle(vec![
                to_responder(transient()),
                to_responder(success()),
            ])),
        );
        let client = test_client(&server).await?;

        let builder = client.builder(reqwest::Method::POST, "/retry".into());
        let mut options = RequestOptions::default();
        options.set_idempotency(true);
        options.set_retry_policy(RecommendedRetry.with_attempt_limit(2));
        options.set_backoff_policy(test_backoff());
        let response = client
            .execute::<Value>(builder, Body::json(&json!({"name": "gateway"}))?, options)
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    fn idempotent() -> RequestOptions {
        let mut options = RequestOptions::default();
        options.set_idempotency(true);
        options
    }

    fn retry_builder(client: &ReqwestClient) -> reqwest::RequestBuilder {
        client.builder(reqwest::Method::GET, "/retry".into())
    }

    fn success() -> (StatusCode, String) {
        let response = json!({
            "status": "done"
        });
        (StatusCode::OK, response.to_string())
    }

    fn transient() -> (StatusCode, String) {
        let envelope = json!({
            "success": false,
            "errors": [{"code": 503, "message": "try-again"}],
            "messages": [],
            "result": null,
        });
        (StatusCode::SERVICE_UNAVAILABLE, envelope.to_string())
    }

    fn permanent() -> (StatusCode, String) {
        let envelope = json!({
            "success": false,
            "errors": [{"code": 1001, "message": "uh-oh"}],
            "messages": [],
            "result": null,
        });
        (StatusCode::BAD_REQUEST, envelope.to_string())
    }

    fn test_credentials() -> Result<auth::credentials::Credentials> {
        Ok(auth::credentials::no_auth::Builder::new().build())
    }

    async fn test_client(server: &Server) -> Result<ReqwestClient> {
        let endpoint = format!("http://{}", server.addr());
        let client = echo_server::builder(endpoint)
            .with_credentials(test_credentials()?)
            .build()
            .await?;
        Ok(client)
    }

    fn test_backoff() -> impl BackoffPolicy {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .clamp()
    }

    fn start(responses: Vec<(StatusCode, String)>) -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/retry"))
                .times(responses.len())
                .respond_with(cycle(responses.into_iter().map(to_responder).collect())),
        );
        server
    }

    fn to_responder((status, response): (StatusCode, String)) -> Box<dyn Responder> {
        Box::new(
            status_code(status.as_u16())
                .insert_header("Content-Type", "application/json")
                .body(response),
        )
    }
}
