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

//! Basic authentication credentials.
//!
//! These credentials send the username and password, base64 encoded, in the
//! `Authorization: Basic` header.

use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{CacheableResource, Credentials, Result};
use crate::errors;
use crate::headers_util::build_cacheable_headers;
use crate::token::{CachedTokenProvider, Scheme, Token, TokenProvider};
use crate::token_cache::TokenCache;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::{Extensions, HeaderMap};
use std::sync::Arc;

struct BasicTokenProvider {
    username: String,
    password: String,
}

impl std::fmt::Debug for BasicTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicTokenProvider")
            .field("username", &self.username)
            .field("password", &"[censored]")
            .finish()
    }
}

#[async_trait::async_trait]
impl TokenProvider for BasicTokenProvider {
    async fn token(&self) -> Result<Token> {
        let value = STANDARD.encode(format!("{}:{}", self.username, self.password));
        Ok(Token::new(Scheme::Basic, value))
    }
}

#[derive(Debug)]
struct BasicCredentials<T>
where
    T: CachedTokenProvider,
{
    token_provider: T,
}

/// A builder for basic authentication credentials.
#[derive(Debug)]
pub struct Builder {
    username: String,
    password: String,
}

impl Builder {
    /// Creates a new builder with the given username and password.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_auth::credentials::basic::Builder;
    /// let credentials = Builder::new("my-user", "my-password").build();
    /// assert!(credentials.is_ok());
    /// ```
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn build_token_provider(self) -> BasicTokenProvider {
        BasicTokenProvider {
            username: self.username,
            password: self.password,
        }
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the username or password are empty, or if they
    /// contain braces or quotes. Such values are typically the result of
    /// copying a template instead of the actual values.
    pub fn build(self) -> Result<Credentials> {
        for (name, value) in [("username", &self.username), ("password", &self.password)] {
            if value.is_empty() {
                return Err(errors::non_retryable_from_str(format!(
                    "the {name} cannot be empty"
                )));
            }
            if value.contains(['{', '}', '"']) {
                return Err(errors::non_retryable_from_str(format!(
                    "the {name} cannot contain braces or quotes"
                )));
            }
        }
        Ok(Credentials {
            inner: Arc::new(BasicCredentials {
                token_provider: TokenCache::new(self.build_token_provider()),
            }),
        })
    }
}

#[async_trait::async_trait]
impl<T> CredentialsProvider for BasicCredentials<T>
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
    use http::HeaderValue;
    use http::header::AUTHORIZATION;
    use test_case::test_case;

    #[test]
    fn debug_token_provider() {
        let provider = Builder::new("test-user", "super-secret").build_token_provider();
        let fmt = format!("{provider:?}");
        assert!(fmt.contains("test-user"), "{fmt}");
        assert!(!fmt.contains("super-secret"), "{fmt}");
    }

    #[test_case("", "password")]
    #[test_case("user", "")]
    #[test_case("{username}", "password")]
    #[test_case("user", "\"password\"")]
    fn invalid(username: &str, password: &str) {
        let err = Builder::new(username, password).build().unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
    }

    #[tokio::test]
    async fn headers() -> anyhow::Result<()> {
        let creds = Builder::new("Aladdin", "open sesame").build()?;
        let headers = get_headers_from_cache(creds.headers(Extensions::new()).await?)?;
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(
            value,
            HeaderValue::from_static("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==")
        );
        assert!(value.is_sensitive());
        Ok(())
    }
}
