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

//! [IAM] credentials.
//!
//! These credentials exchange an API key for an access token using the IAM
//! token service. The token is cached and refreshed once 80% of its lifetime
//! has elapsed, so requests rarely wait for a refresh.
//!
//! [IAM]: https://cloud.ibm.com/docs/account?topic=account-iamtoken_from_apikey

use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{CacheableResource, Credentials, Result};
use crate::errors::{self, CredentialsError, is_retryable};
use crate::headers_util::build_cacheable_headers;
use crate::token::{CachedTokenProvider, Scheme, Token, TokenProvider};
use crate::token_cache::TokenCache;
use http::header::ACCEPT;
use http::{Extensions, HeaderMap, HeaderValue};
use std::sync::Arc;
use std::time::Duration;

/// The default IAM token service URL.
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

const OPERATION_PATH: &str = "/identity/token";
const GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
const RESPONSE_TYPE: &str = "cloud_iam";

#[derive(Debug, PartialEq, serde::Deserialize)]
struct IamTokenResponse {
    access_token: String,
    token_type: String,
    expires_in: u64,
}

struct IamTokenProvider {
    apikey: String,
    endpoint: String,
    client_id_and_secret: Option<(String, String)>,
    scope: Option<String>,
    client: reqwest::Client,
}

impl std::fmt::Debug for IamTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamTokenProvider")
            .field("apikey", &"[censored]")
            .field("endpoint", &self.endpoint)
            .field(
                "client_id",
                &self.client_id_and_secret.as_ref().map(|(id, _)| id),
            )
            .field("scope", &self.scope)
            .finish()
    }
}

#[async_trait::async_trait]
impl TokenProvider for IamTokenProvider {
    async fn token(&self) -> Result<Token> {
        let mut form = vec![
            ("grant_type", GRANT_TYPE),
            ("apikey", self.apikey.as_str()),
            ("response_type", RESPONSE_TYPE),
        ];
        if let Some(scope) = &self.scope {
            form.push(("scope", scope.as_str()));
        }
        let mut builder = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .form(&form);
        if let Some((id, secret)) = &self.client_id_and_secret {
            builder = builder.basic_auth(id, Some(secret));
        }
        tracing::debug!("requesting IAM access token from {}", self.endpoint);
        let resp = builder.send().await.map_err(errors::retryable)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| CredentialsError::from_source(is_retryable(status), e))?;
            return Err(CredentialsError::from_msg(
                is_retryable(status),
                format!("failed to fetch IAM token, status {status}: {body}"),
            ));
        }
        let response = resp.json::<IamTokenResponse>().await.map_err(|e| {
            let retryable = !e.is_decode();
            CredentialsError::from_source(retryable, e)
        })?;
        let scheme = Scheme::from_token_type(&response.token_type).ok_or_else(|| {
            errors::non_retryable_from_str(format!(
                "unexpected IAM token type {}",
                response.token_type
            ))
        })?;
        let now = tokio::time::Instant::now().into_std();
        let expires_at = now
            .checked_add(Duration::from_secs(response.expires_in))
            .ok_or_else(|| {
                errors::non_retryable_from_str(format!(
                    "invalid IAM token lifetime {}s",
                    response.expires_in
                ))
            })?;
        Ok(Token::new(scheme, response.access_token).with_expiration(expires_at))
    }
}

#[derive(Debug)]
struct IamCredentials<T>
where
    T: CachedTokenProvider,
{
    token_provider: T,
}

/// A builder for IAM credentials.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_auth::credentials::iam::Builder;
/// let credentials = Builder::new("my-api-key")
///     .with_url("https://iam.test.cloud.ibm.com")
///     .build();
/// assert!(credentials.is_ok());
/// ```
#[derive(Debug)]
pub struct Builder {
    apikey: String,
    url: Option<String>,
    client_id_and_secret: Option<(String, String)>,
    scope: Option<String>,
}

impl Builder {
    /// Creates a new builder with the given API key.
    pub fn new<T: Into<String>>(apikey: T) -> Self {
        Self {
            apikey: apikey.into(),
            url: None,
            client_id_and_secret: None,
            scope: None,
        }
    }

    /// Sets the IAM token service URL.
    ///
    /// The default is [DEFAULT_IAM_URL]. The `/identity/token` path is added
    /// if the URL does not already include it.
    pub fn with_url<T: Into<String>>(mut self, url: T) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the client id and secret sent to the token service using basic
    /// authentication.
    pub fn with_client_id_and_secret<I: Into<String>, S: Into<String>>(
        mut self,
        client_id: I,
        client_secret: S,
    ) -> Self {
        self.client_id_and_secret = Some((client_id.into(), client_secret.into()));
        self
    }

    /// Sets the scope requested from the token service.
    pub fn with_scope<T: Into<String>>(mut self, scope: T) -> Self {
        self.scope = Some(scope.into());
        self
    }

    fn build_token_provider(self) -> IamTokenProvider {
        let url = self.url.unwrap_or_else(|| DEFAULT_IAM_URL.to_string());
        let url = url.trim_end_matches('/');
        let endpoint = if url.ends_with(OPERATION_PATH) {
            url.to_string()
        } else {
            format!("{url}{OPERATION_PATH}")
        };
        IamTokenProvider {
            apikey: self.apikey,
            endpoint,
            client_id_and_secret: self.client_id_and_secret,
            scope: self.scope,
            client: reqwest::Client::new(),
        }
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// No token is requested until the credentials are used.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or contains braces or quotes.
    pub fn build(self) -> Result<Credentials> {
        if self.apikey.is_empty() {
            return Err(errors::non_retryable_from_str("the API key cannot be empty"));
        }
        if self.apikey.contains(['{', '}', '"']) {
            return Err(errors::non_retryable_from_str(
                "the API key cannot contain braces or quotes",
            ));
        }
        Ok(Credentials {
            inner: Arc::new(IamCredentials {
                token_provider: TokenCache::new(self.build_token_provider()),
            }),
        })
    }
}

#[async_trait::async_trait]
impl<T> CredentialsProvider for IamCredentials<T>
where
    T: CachedTokenProvider,
{
    async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        let cached_token = self.token_provider.token(extensions).await?;
        build_cacheable_headers(&cached_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::tests::get_headers_from_cache;
    use http::header::AUTHORIZATION;
    use httptest::matchers::{contains, request, url_decoded};
    use httptest::{Expectation, Server, all_of, cycle, responders::*};
    use serde_json::json;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    fn token_response(token: &str) -> serde_json::Value {
        json!({
            "access_token": token,
            "refresh_token": "not-used",
            "token_type": "Bearer",
            "expires_in": 3600,
            "expiration": 1_700_003_600_u64,
        })
    }

    #[test_case(None, "https://iam.cloud.ibm.com/identity/token")]
    #[test_case(Some("https://iam.test.cloud.ibm.com"), "https://iam.test.cloud.ibm.com/identity/token")]
    #[test_case(Some("https://iam.test.cloud.ibm.com/"), "https://iam.test.cloud.ibm.com/identity/token")]
    #[test_case(Some("http://localhost/identity/token"), "http://localhost/identity/token")]
    fn endpoint(url: Option<&str>, want: &str) {
        let builder = Builder::new("test-api-key");
        let builder = match url {
            Some(u) => builder.with_url(u),
            None => builder,
        };
        assert_eq!(builder.build_token_provider().endpoint, want);
    }

    #[test]
    fn debug() {
        let provider = Builder::new("super-secret-key")
            .with_client_id_and_secret("test-client", "super-secret-secret")
            .build_token_provider();
        let fmt = format!("{provider:?}");
        assert!(!fmt.contains("super-secret"), "{fmt}");
        assert!(fmt.contains("test-client"), "{fmt}");
    }

    #[test_case("")]
    #[test_case("{apikey}")]
    #[test_case("\"apikey\"")]
    fn invalid_apikey(apikey: &str) {
        let err = Builder::new(apikey).build().unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
    }

    #[tokio::test]
    async fn token_success() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/identity/token"),
                request::headers(contains(("accept", "application/json"))),
                request::body(url_decoded(contains(("grant_type", GRANT_TYPE)))),
                request::body(url_decoded(contains(("apikey", "test-api-key")))),
                request::body(url_decoded(contains(("response_type", "cloud_iam")))),
            ])
            .respond_with(json_encoded(token_response("test-access-token"))),
        );

        let provider = Builder::new("test-api-key")
            .with_url(format!("http://{}", server.addr()))
            .build_token_provider();
        let now = std::time::Instant::now();
        let token = provider.token().await?;
        assert_eq!(token.value, "test-access-token");
        assert_eq!(token.scheme, Scheme::Bearer);
        assert!(
            token
                .expires_at
                .is_some_and(|e| e >= now + Duration::from_secs(3600)),
            "{token:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn token_with_client_and_scope() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/identity/token"),
                // base64("bx:bx")
                request::headers(contains(("authorization", "Basic Yng6Yng="))),
                request::body(url_decoded(contains(("scope", "test-scope")))),
            ])
            .respond_with(json_encoded(token_response("test-access-token"))),
        );

        let provider = Builder::new("test-api-key")
            .with_url(format!("http://{}", server.addr()))
            .with_client_id_and_secret("bx", "bx")
            .with_scope("test-scope")
            .build_token_provider();
        let token = provider.token().await?;
        assert_eq!(token.value, "test-access-token");
        Ok(())
    }

    #[tokio::test]
    async fn token_unexpected_type() -> TestResult {
        let server = Server::run();
        let mut response = token_response("test-access-token");
        response["token_type"] = json!("MAC");
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .respond_with(json_encoded(response)),
        );

        let provider = Builder::new("test-api-key")
            .with_url(format!("http://{}", server.addr()))
            .build_token_provider();
        let err = provider.token().await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        assert!(err.to_string().contains("MAC"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn token_lifetime_overflow() -> TestResult {
        let server = Server::run();
        let mut response = token_response("test-access-token");
        response["expires_in"] = json!(u64::MAX);
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .respond_with(json_encoded(response)),
        );

        let provider = Builder::new("test-api-key")
            .with_url(format!("http://{}", server.addr()))
            .build_token_provider();
        let err = provider.token().await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        assert!(err.to_string().contains("lifetime"), "{err}");
        Ok(())
    }

    #[test_case(400, false)]
    #[test_case(401, false)]
    #[test_case(429, true)]
    #[test_case(503, true)]
    #[tokio::test]
    async fn token_error(code: u16, transient: bool) {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .respond_with(status_code(code).body("try again later")),
        );

        let provider = Builder::new("test-api-key")
            .with_url(format!("http://{}", server.addr()))
            .build_token_provider();
        let err = provider.token().await.unwrap_err();
        assert_eq!(err.is_transient(), transient, "{err:?}");
        assert!(err.to_string().contains("try again later"), "{err}");
    }

    #[tokio::test]
    async fn token_bad_response() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .respond_with(json_encoded(json!({"unexpected": "format"}))),
        );

        let provider = Builder::new("test-api-key")
            .with_url(format!("http://{}", server.addr()))
            .build_token_provider();
        let err = provider.token().await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
    }

    #[tokio::test]
    async fn credentials_cache_token() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .times(1)
                .respond_with(cycle![json_encoded(token_response("cached-token"))]),
        );

        let creds = Builder::new("test-api-key")
            .with_url(format!("http://{}", server.addr()))
            .build()?;
        for _ in 0..3 {
            let headers = get_headers_from_cache(creds.headers(Extensions::new()).await?)?;
            let value = headers.get(AUTHORIZATION).unwrap();
            assert_eq!(value, HeaderValue::from_static("Bearer cached-token"));
            assert!(value.is_sensitive());
        }
        Ok(())
    }
}
