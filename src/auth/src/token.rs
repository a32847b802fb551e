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

use crate::Result;
use crate::credentials::CacheableResource;
use crate::errors;
use http::Extensions;
use http::header::HeaderValue;
use std::time::Instant;

/// The scheme used in the `Authorization` header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Scheme {
    Bearer,
    Basic,
}

impl Scheme {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Bearer => "Bearer",
            Self::Basic => "Basic",
        }
    }

    /// Parses the `token_type` returned by a token service.
    pub fn from_token_type(token_type: &str) -> Option<Self> {
        [Self::Bearer, Self::Basic]
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(token_type))
    }
}

/// A token for the `Authorization` header.
#[derive(Clone, PartialEq)]
pub(crate) struct Token {
    pub value: String,
    pub scheme: Scheme,
    /// `None` if the token never expires.
    pub expires_at: Option<Instant>,
}

impl Token {
    pub fn new<V: Into<String>>(scheme: Scheme, value: V) -> Self {
        Self {
            value: value.into(),
            scheme,
            expires_at: None,
        }
    }

    pub fn with_expiration(mut self, expires_at: Instant) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Formats the token as an `Authorization` header value.
    ///
    /// The value is marked as sensitive, so it is omitted from `Debug` output
    /// and HTTP/2 header compression.
    pub fn authorization(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("{} {}", self.scheme.as_str(), self.value))
            .map_err(errors::non_retryable)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("value", &"[censored]")
            .field("scheme", &self.scheme)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[async_trait::async_trait]
pub(crate) trait TokenProvider: std::fmt::Debug + Send + Sync {
    async fn token(&self) -> Result<Token>;
}

#[async_trait::async_trait]
pub(crate) trait CachedTokenProvider: std::fmt::Debug + Send + Sync {
    async fn token(&self, extensions: Extensions) -> Result<CacheableResource<Token>>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::error::Error as _;
    use std::time::Duration;
    use test_case::test_case;

    // Used by tests in other modules.
    mockall::mock! {
        #[derive(Debug)]
        pub TokenProvider { }

        #[async_trait::async_trait]
        impl TokenProvider for TokenProvider {
            async fn token(&self) -> Result<Token>;
        }
    }

    #[test]
    fn debug() {
        let expires_at = Instant::now() + Duration::from_secs(3600);
        let token = Token::new(Scheme::Bearer, "token-test-only").with_expiration(expires_at);
        let got = format!("{token:?}");
        assert!(!got.contains("token-test-only"), "{got}");
        assert!(got.contains("value: \"[censored]\""), "{got}");
        assert!(got.contains("scheme: Bearer"), "{got}");
        assert!(
            got.contains(&format!("expires_at: Some({expires_at:?}")),
            "{got}"
        );
    }

    #[test_case("Bearer", Some(Scheme::Bearer))]
    #[test_case("bearer", Some(Scheme::Bearer))]
    #[test_case("Basic", Some(Scheme::Basic))]
    #[test_case("MAC", None)]
    fn scheme(token_type: &str, want: Option<Scheme>) {
        assert_eq!(Scheme::from_token_type(token_type), want);
    }

    #[test_case(Scheme::Bearer, "test-token", "Bearer test-token")]
    #[test_case(Scheme::Basic, "dXNlcjpwYXNz", "Basic dXNlcjpwYXNz")]
    fn authorization(scheme: Scheme, value: &str, want: &str) -> anyhow::Result<()> {
        let got = Token::new(scheme, value).authorization()?;
        assert_eq!(got, HeaderValue::from_str(want)?);
        assert!(got.is_sensitive());
        Ok(())
    }

    #[test]
    fn authorization_invalid() {
        let err = Token::new(Scheme::Bearer, "new\nline")
            .authorization()
            .unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        assert!(err.source().is_some(), "{err:?}");
    }
}
