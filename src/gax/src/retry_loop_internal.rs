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

use super::Result;
use super::backoff_policy::BackoffPolicy;
use super::error::Error;
use super::retry_policy::RetryPolicy;
use std::sync::Arc;
use std::time::Duration;

/// Runs the retry loop for a given function.
///
/// This functions calls an inner function as long as (1) the retry policy has
/// not expired, and (2) the inner function has not returned a successful
/// request.
///
/// In between calls the function waits the amount of time prescribed by the
/// backoff policy, using `sleep` to implement any sleep.
pub async fn retry_loop<F, S, Response>(
    inner: F,
    sleep: S,
    idempotent: bool,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
{
    retry_loop_with_callback(
        inner,
        sleep,
        idempotent,
        retry_policy,
        backoff_policy,
        |_, _, _| {},
    )
    .await
}

/// Runs the retry loop for a given function with a callback for retries.
///
/// The `on_retry` callback is called before sleeping, with the attempt count,
/// the error, and the delay.
pub async fn retry_loop_with_callback<F, S, OnRetry, Response>(
    mut inner: F,
    sleep: S,
    idempotent: bool,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
    mut on_retry: OnRetry,
) -> Result<Response>
where
    F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
    OnRetry: FnMut(u32, &Error, Duration) + Send,
{
    let loop_start = tokio::time::Instant::now().into_std();
    // The attempt count, backoff delay and error of the last failure.
    let mut previous: Option<(u32, Duration, Error)> = None;
    loop {
        let attempt_count = previous.as_ref().map_or(0, |(count, _, _)| *count);
        let remaining_time = retry_policy.remaining_time(loop_start, attempt_count);
        if let Some((count, delay, error)) = previous.take() {
            if remaining_time.is_some_and(|remaining| remaining < delay) {
                return Err(Error::exhausted(error));
            }
            on_retry(count, &error, delay);
            sleep(delay).await;
        }
        let attempt_count = attempt_count + 1;
        let error = match inner(remaining_time).await {
            Ok(r) => return Ok(r),
            Err(e) => e,
        };
        let flow = retry_policy.on_error(loop_start, attempt_count, idempotent, error);
        if !flow.is_continue() {
            return Err(flow.into_error());
        }
        let delay = backoff_policy.on_failure(loop_start, attempt_count);
        previous = Some((attempt_count, delay, flow.into_error()));
    }
}

/// A helper to compute the time remaining in a retry loop, given the attempt
/// timeout and the overall timeout.
pub fn effective_timeout(
    options: &crate::options::RequestOptions,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    match (options.attempt_timeout(), remaining_time) {
        (None, None) => None,
        (None, Some(t)) => Some(t),
        (Some(t), None) => Some(*t),
        (Some(a), Some(r)) => Some(*std::cmp::min(a, &r)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry_policy::{RecommendedRetry, RetryPolicyExt};
    use http::HeaderMap;
    use std::collections::VecDeque;
    use std::error::Error as _;
    use std::sync::Mutex;
    use test_case::test_case;

    const DELAY: Duration = Duration::from_millis(10);

    #[derive(Debug)]
    struct FixedBackoff(Duration);

    impl BackoffPolicy for FixedBackoff {
        fn on_failure(&self, _loop_start: std::time::Instant, _attempt_count: u32) -> Duration {
            self.0
        }
    }

    fn backoff(delay: Duration) -> Arc<dyn BackoffPolicy> {
        Arc::new(FixedBackoff(delay))
    }

    fn status(code: u16) -> Result<String> {
        Err(Error::http(
            code,
            HeaderMap::new(),
            bytes::Bytes::from_static(b"test-only"),
        ))
    }

    fn success() -> Result<String> {
        Ok("success".to_string())
    }

    fn source_status(err: &Error) -> Option<u16> {
        err.source()
            .and_then(|e| e.downcast_ref::<Error>())
            .and_then(|e| e.http_status_code())
    }

    #[test_case(None, None, None; "no timeouts")]
    #[test_case(Some(4), None, Some(4); "attempt timeout only")]
    #[test_case(None, Some(4), Some(4); "remaining time only")]
    #[test_case(Some(2), Some(4), Some(2); "attempt timeout is shorter")]
    #[test_case(Some(4), Some(2), Some(2); "remaining time is shorter")]
    fn effective_timeouts(attempt: Option<u64>, remaining: Option<u64>, want: Option<u64>) {
        let mut options = crate::options::RequestOptions::default();
        if let Some(t) = attempt {
            options.set_attempt_timeout(Duration::from_secs(t));
        }
        let got = effective_timeout(&options, remaining.map(Duration::from_secs));
        assert_eq!(got, want.map(Duration::from_secs));
    }

    #[tokio::test]
    async fn first_attempt_succeeds() -> anyhow::Result<()> {
        let mut responses = VecDeque::from([success()]);
        let sleeps = Mutex::new(Vec::new());
        let got = retry_loop(
            async |_| responses.pop_front().unwrap_or_else(|| status(500)),
            async |d| sleeps.lock().unwrap().push(d),
            true,
            Arc::new(RecommendedRetry),
            backoff(DELAY),
        )
        .await?;
        assert_eq!(got, "success");
        assert!(responses.is_empty());
        assert!(sleeps.lock().unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn permanent_error_stops() {
        let mut responses = VecDeque::from([status(404), success()]);
        let err = retry_loop(
            async |_| responses.pop_front().unwrap_or_else(success),
            async |_| {},
            true,
            Arc::new(RecommendedRetry),
            backoff(DELAY),
        )
        .await
        .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        assert_eq!(responses.len(), 1);
    }

    #[tokio::test]
    async fn retries_until_success() -> anyhow::Result<()> {
        let mut responses = VecDeque::from([status(503), status(429), success()]);
        let sleeps = Mutex::new(Vec::new());
        let mut retries = Vec::new();
        let got = retry_loop_with_callback(
            async |_| responses.pop_front().unwrap_or_else(|| status(500)),
            async |d| sleeps.lock().unwrap().push(d),
            true,
            Arc::new(RecommendedRetry),
            backoff(DELAY),
            |count, error, delay| retries.push((count, error.http_status_code(), delay)),
        )
        .await?;
        assert_eq!(got, "success");
        assert_eq!(*sleeps.lock().unwrap(), vec![DELAY, DELAY]);
        assert_eq!(retries, vec![(1, Some(503), DELAY), (2, Some(429), DELAY)]);
        Ok(())
    }

    #[tokio::test]
    async fn non_idempotent_not_retried() {
        let mut responses = VecDeque::from([status(503), success()]);
        let err = retry_loop(
            async |_| responses.pop_front().unwrap_or_else(success),
            async |_| {},
            false,
            Arc::new(RecommendedRetry),
            backoff(DELAY),
        )
        .await
        .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        assert_eq!(responses.len(), 1);
    }

    #[tokio::test]
    async fn attempt_limit() {
        let mut calls = 0;
        let err = retry_loop(
            async |_| {
                calls += 1;
                status(429)
            },
            async |_| {},
            true,
            Arc::new(RecommendedRetry.with_attempt_limit(3)),
            backoff(DELAY),
        )
        .await
        .unwrap_err();
        assert_eq!(calls, 3);
        assert!(err.is_exhausted(), "{err:?}");
        assert_eq!(source_status(&err), Some(429), "{err:?}");
    }

    #[tokio::test]
    async fn no_sleep_past_time_limit() {
        // The backoff delay is longer than the time left in the policy.
        let mut timeouts = Vec::new();
        let sleeps = Mutex::new(Vec::new());
        let err = retry_loop(
            async |remaining| {
                timeouts.push(remaining);
                status(503)
            },
            async |d| sleeps.lock().unwrap().push(d),
            true,
            Arc::new(RecommendedRetry.with_time_limit(Duration::from_secs(1))),
            backoff(Duration::from_secs(10)),
        )
        .await
        .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert_eq!(source_status(&err), Some(503), "{err:?}");
        assert_eq!(timeouts.len(), 1, "{timeouts:?}");
        assert!(
            timeouts[0].is_some_and(|t| t <= Duration::from_secs(1)),
            "{timeouts:?}"
        );
        assert!(sleeps.lock().unwrap().is_empty());
    }
}
