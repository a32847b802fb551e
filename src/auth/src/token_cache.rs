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
use crate::credentials::{CacheableResource, EntityTag};
use crate::token::{CachedTokenProvider, Token, TokenProvider};
use http::Extensions;
use std::sync::Arc;
use tokio::sync::Mutex;
// Using tokio's wrapper makes the cache testable without relying on clock times.
use tokio::time::Instant;

// Tokens are refreshed once this fraction of their lifetime has elapsed.
const REFRESH_FRACTION: f64 = 0.8;

#[derive(Debug)]
pub(crate) struct TokenCache<T>
where
    T: TokenProvider,
{
    // The cached token. The lock is held during a refresh, concurrent callers
    // wait for its result instead of starting their own refresh.
    current: Arc<Mutex<Option<Entry>>>,

    // The token provider. This thing does the refreshing.
    inner: Arc<T>,
}

#[derive(Clone, Debug)]
struct Entry {
    token: Token,
    entity_tag: EntityTag,
    refresh_at: Option<std::time::Instant>,
}

impl Entry {
    fn new(token: Token, now: std::time::Instant) -> Self {
        let refresh_at = token
            .expires_at
            .map(|e| now + e.saturating_duration_since(now).mul_f64(REFRESH_FRACTION));
        Self {
            token,
            entity_tag: EntityTag::new(),
            refresh_at,
        }
    }

    fn fresh(&self, now: std::time::Instant) -> bool {
        self.refresh_at.is_none_or(|r| now < r)
    }

    fn usable(&self, now: std::time::Instant) -> bool {
        self.token.expires_at.is_none_or(|e| now < e)
    }
}

// We manually implement the `Clone` trait because the Rust compiler will
// squawk if `T` is not `Clone`, even though we only hold an `Arc<T>`.
impl<T: TokenProvider> Clone for TokenCache<T> {
    fn clone(&self) -> TokenCache<T> {
        TokenCache {
            current: self.current.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<T: TokenProvider> TokenCache<T> {
    pub fn new(inner: T) -> TokenCache<T> {
        TokenCache {
            current: Arc::new(Mutex::new(None)),
            inner: Arc::new(inner),
        }
    }

    async fn current(&self) -> Result<Entry> {
        let mut guard = self.current.lock().await;
        let now = Instant::now().into_std();
        if let Some(entry) = guard.as_ref().filter(|e| e.fresh(now)) {
            return Ok(entry.clone());
        }
        match self.inner.token().await {
            Ok(token) => {
                let entry = Entry::new(token, now);
                *guard = Some(entry.clone());
                Ok(entry)
            }
            Err(e) => match guard.as_ref().filter(|entry| entry.usable(now)) {
                Some(entry) => {
                    tracing::warn!("cannot refresh token, using the cached token: {e}");
                    Ok(entry.clone())
                }
                None => Err(e),
            },
        }
    }
}

#[async_trait::async_trait]
impl<T: TokenProvider + 'static> CachedTokenProvider for TokenCache<T> {
    async fn token(&self, extensions: Extensions) -> Result<CacheableResource<Token>> {
        let entry = self.current().await?;
        match extensions.get::<EntityTag>() {
            Some(tag) if entry.entity_tag.eq(tag) => Ok(CacheableResource::NotModified),
            _ => Ok(CacheableResource::New {
                entity_tag: entry.entity_tag,
                data: entry.token,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CredentialsError;
    use crate::token::Scheme;
    use crate::token::tests::MockTokenProvider;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    static TOKEN_VALID_DURATION: Duration = Duration::from_secs(3600);

    fn token(value: &str, expires_at: Option<std::time::Instant>) -> Token {
        let token = Token::new(Scheme::Bearer, value);
        match expires_at {
            Some(e) => token.with_expiration(e),
            None => token,
        }
    }

    fn data(cached: CacheableResource<Token>) -> Token {
        match cached {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => panic!("expected new token"),
        }
    }

    #[tokio::test]
    async fn initial_token_success() -> anyhow::Result<()> {
        let expected = token("test-token", None);
        let expected_clone = expected.clone();

        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .return_once(|| Ok(expected_clone));

        let cache = TokenCache::new(mock);
        let actual = data(cache.token(Extensions::new()).await?);
        assert_eq!(actual, expected);

        // Verify that we use the cached token instead of making a new request
        // to the mock token provider.
        let actual = data(cache.token(Extensions::new()).await?);
        assert_eq!(actual, expected);
        Ok(())
    }

    #[tokio::test]
    async fn initial_token_failure() {
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(2)
            .returning(|| Err(CredentialsError::from_msg(false, "fail")));

        let cache = TokenCache::new(mock);
        assert!(cache.token(Extensions::new()).await.is_err());

        // Errors are not cached.
        assert!(cache.token(Extensions::new()).await.is_err());
    }

    #[tokio::test]
    async fn not_modified() -> anyhow::Result<()> {
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .return_once(|| Ok(token("test-token", None)));

        let cache = TokenCache::new(mock);
        let entity_tag = match cache.token(Extensions::new()).await? {
            CacheableResource::New { entity_tag, .. } => entity_tag,
            CacheableResource::NotModified => panic!("expected new token"),
        };
        let mut extensions = Extensions::new();
        extensions.insert(entity_tag);
        let got = cache.token(extensions).await?;
        assert!(matches!(got, CacheableResource::NotModified), "{got:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_before_expiration() -> anyhow::Result<()> {
        let now = Instant::now();
        let initial = token(
            "initial-token",
            Some((now + TOKEN_VALID_DURATION).into_std()),
        );
        let refresh = token(
            "refresh-token",
            Some((now + 2 * TOKEN_VALID_DURATION).into_std()),
        );
        let initial_clone = initial.clone();
        let refresh_clone = refresh.clone();

        let mut seq = mockall::Sequence::new();
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(initial_clone));
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(refresh_clone));

        let cache = TokenCache::new(mock);
        assert_eq!(data(cache.token(Extensions::new()).await?), initial);

        // Still within the first 80% of the token lifetime.
        tokio::time::advance(TOKEN_VALID_DURATION / 2).await;
        assert_eq!(data(cache.token(Extensions::new()).await?), initial);

        // Past 80% of the lifetime, but before the token expires.
        tokio::time::advance(TOKEN_VALID_DURATION * 2 / 5).await;
        assert_eq!(data(cache.token(Extensions::new()).await?), refresh);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_failure_uses_valid_token() -> anyhow::Result<()> {
        let now = Instant::now();
        let initial = token(
            "initial-token",
            Some((now + TOKEN_VALID_DURATION).into_std()),
        );
        let initial_clone = initial.clone();

        let mut seq = mockall::Sequence::new();
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(initial_clone));
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Err(CredentialsError::from_msg(true, "try-again")));

        let cache = TokenCache::new(mock);
        assert_eq!(data(cache.token(Extensions::new()).await?), initial);

        tokio::time::advance(TOKEN_VALID_DURATION * 9 / 10).await;
        assert_eq!(data(cache.token(Extensions::new()).await?), initial);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn expired_token_failure() -> anyhow::Result<()> {
        let now = Instant::now();
        let initial = token(
            "initial-token",
            Some((now + TOKEN_VALID_DURATION).into_std()),
        );
        let initial_clone = initial.clone();

        let mut seq = mockall::Sequence::new();
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(initial_clone));
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Err(CredentialsError::from_msg(false, "fail")));

        let cache = TokenCache::new(mock);
        assert_eq!(data(cache.token(Extensions::new()).await?), initial);

        // wait long enough for the token to be expired
        tokio::time::advance(TOKEN_VALID_DURATION).await;

        // make sure we return the error, not the expired token
        assert!(cache.token(Extensions::new()).await.is_err());
        Ok(())
    }

    #[derive(Clone, Debug)]
    struct FakeTokenProvider {
        result: Result<Token>,
        calls: Arc<StdMutex<i32>>,
    }

    impl FakeTokenProvider {
        fn new(result: Result<Token>) -> Self {
            FakeTokenProvider {
                result,
                calls: Arc::new(StdMutex::new(0)),
            }
        }

        fn calls(&self) -> i32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl TokenProvider for FakeTokenProvider {
        async fn token(&self) -> Result<Token> {
            // Give enough time for the waiters in a thundering herd to pile up.
            tokio::time::sleep(Duration::from_millis(50)).await;
            *self.calls.lock().unwrap() += 1;
            self.result.clone()
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn thundering_herd_success() {
        let expected = token("initial-token", None);
        let tp = FakeTokenProvider::new(Ok(expected.clone()));
        let cache = TokenCache::new(tp.clone());

        let tasks = (0..100)
            .map(|_| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.token(Extensions::new()).await })
            })
            .collect::<Vec<_>>();

        for task in tasks {
            let actual = task.await.unwrap();
            assert!(actual.is_ok(), "{actual:?}");
            assert_eq!(data(actual.unwrap()), expected);
        }
        assert_eq!(tp.calls(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn thundering_herd_failure_shares_error() {
        let tp = FakeTokenProvider::new(Err(CredentialsError::from_msg(false, "epic fail")));
        let cache = TokenCache::new(tp.clone());

        let tasks = (0..10)
            .map(|_| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.token(Extensions::new()).await })
            })
            .collect::<Vec<_>>();

        for task in tasks {
            let actual = task.await.unwrap();
            let e = actual.expect_err("expected an error");
            assert!(e.to_string().contains("epic fail"), "{e}");
        }
        // Errors are not cached, each caller retries after the previous one.
        assert_eq!(tp.calls(), 10);
    }
}
