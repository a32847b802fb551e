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

//! Bearer token credentials.
//!
//! These credentials send a token obtained by the application in the
//! `Authorization: Bearer` header. The application is responsible for
//! refreshing the token, these credentials never do.

use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{CacheableResource, Credentials, Result};
use crate::errors;
use crate::headers_util::build_cacheable_headers;
use crate::token::{CachedTokenProvider, Scheme, Token, TokenProvider};
use crate::token_cache::TokenCache;
use http::{Extensions, HeaderMap};
use std::sync::Arc;

struct BearerTokenProvider {
    token: String,
}

impl std::fmt::Debug for BearerTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenProvider")
            .field("token", &"[censored]")
            .finish()
    }
}

#[async_trait::async_trait]
impl TokenProvider for BearerTokenProvider {
    async fn token(&self) -> Result<Token> {
        Ok(Token::new(Scheme::Bearer, self.token.clone()))
    }
}

#[derive(Debug)]
struct BearerTokenCredentials<T>
where
    T: CachedTokenProvider,
{
    token_provider: T,
}

/// A builder for credentials using a bearer token.
#[derive(Debug)]
pub struct Builder {
    token: String,
}

impl Builder {
    /// Creates a new builder with the given token.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_auth::credentials::bearer_token::Builder;
    /// let credentials = Builder::new("my-access-token").build();
    /// assert!(credentials.is_ok());
    /// ```
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }

    fn build_token_provider(self) -> BearerTokenProvider {
        BearerTokenProvider { token: self.token }
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty.
    pub fn build(self) -> Result<Credentials> {
        if self.token.is_empty() {
            return Err(errors::non_retryable_from_str(
                "the bearer token cannot be empty",
            ));
        }
        Ok(Credentials {
            inner: Arc::new(BearerTokenCredentials {
                token_provider: TokenCache::new(self.build_token_provider()),
            }),
        })
    }
}

#[async_trait::async_trait]
impl<T> CredentialsProvider for BearerTokenCredentials<T>
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

    type TestResult = anyhow::Result<()>;

    #[test]
    fn debug_token_provider() {
        let provider = Builder::new("super-secret-token").build_token_provider();
        let fmt = format!("{provider:?}");
        assert!(!fmt.contains("super-secret-token"), "{fmt}");
    }

    #[test]
    fn empty_token() {
        let err = Builder::new("").build().unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
    }

    #[tokio::test]
    async fn headers() -> TestResult {
        let creds = Builder::new("test-token").build()?;
        let headers = get_headers_from_cache(creds.headers(Extensions::new()).await?)?;
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(headers.len(), 1, "{headers:?}");
        assert_eq!(value, HeaderValue::from_static("Bearer test-token"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[tokio::test]
    async fn headers_not_modified() -> TestResult {
        let creds = Builder::new("test-token").build()?;
        let mut extensions = Extensions::new();
        let entity_tag = match creds.headers(extensions.clone()).await? {
            CacheableResource::New { entity_tag, .. } => entity_tag,
            CacheableResource::NotModified => unreachable!("expecting new headers"),
        };
        extensions.insert(entity_tag);
        let got = creds.headers(extensions).await?;
        assert!(matches!(got, CacheableResource::NotModified), "{got:?}");
        Ok(())
    }
}
