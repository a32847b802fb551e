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

//! Defines traits for retry policies and some common implementations.
//!
//! The client libraries do not retry requests by default. Applications turn
//! on automatic retries for a client with `enable_retries()`, or for a single
//! request with [with_retry_policy][crate::options::RequestOptionsBuilder::with_retry_policy].
//!
//! Once enabled, the client libraries retry requests that fail with transient
//! errors and are idempotent, that is, it is safe to perform the request more
//! than once. Applications may override this and retry operations that,
//! while not safe in general, may be safe given how the application manages
//! resources.
//!
//! # Example
//! ```
//! # use ibm_cloud_networking_gax::*;
//! # use ibm_cloud_networking_gax::retry_policy::*;
//! use std::time::Duration;
//! let policy = RecommendedRetry
//!     .with_attempt_limit(5)
//!     .with_time_limit(Duration::from_secs(30));
//! let arg = RetryPolicyArg::from(policy);
//! ```

use crate::backoff_policy::BackoffPolicy;
use crate::error::Error;
use crate::exponential_backoff::ExponentialBackoffBuilder;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This includes the initial
    ///   attempt. This method called after the first attempt, so the value is
    ///   always non-zero.
    /// * `idempotent` - if `true` assume the operation is idempotent. Many more
    ///   errors are retryable on idempotent operations.
    /// * `error` - the last error received from a request. Not all are service
    ///   errors. The client library may have been unable to send the request,
    ///   for example, because the IAM token could not be obtained.
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop can use this value to adjust the next request
    /// timeout. For policies that are not time based this returns `None`.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This method is called before
    ///   the first attempt, so the first value is zero.
    fn remaining_time(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
    ) -> Option<Duration> {
        None
    }
}

/// The decision of a [RetryPolicy] after a failed attempt.
///
/// Each variant carries the error of the attempt. The retry loop returns that
/// error unless the decision is [Continue][RetryResult::Continue].
#[derive(Debug)]
pub enum RetryResult {
    /// The error is not retryable.
    Permanent(Error),

    /// The error is retryable, but the policy limits have been reached.
    Exhausted(Error),

    /// Try again after the backoff delay.
    Continue(Error),
}

impl RetryResult {
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent(_))
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// The error of the failed attempt.
    pub fn into_error(self) -> Error {
        match self {
            Self::Permanent(e) | Self::Exhausted(e) | Self::Continue(e) => e,
        }
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(Arc<dyn RetryPolicy>);

impl<T> std::convert::From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Arc<dyn RetryPolicy> {
        value.0
    }
}

/// Extension trait for [`RetryPolicy`]
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [`RetryPolicy`] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// While the time spent in the retry loop (including time in backoff) is
    /// less than the prescribed duration the `on_error()` method returns the
    /// results of the inner policy. After that time it returns
    /// [Exhausted][RetryResult::Exhausted] if the inner policy returns
    /// [Continue][RetryResult::Continue].
    ///
    /// The `remaining_time()` function returns the remaining time. This is
    /// always [Duration::ZERO] once or after the policy's expiration time is
    /// reached.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::retry_policy::*;
    /// # use ibm_cloud_networking_gax::error::Error;
    /// use std::time::{Duration, Instant};
    /// let policy = AlwaysRetry.with_time_limit(Duration::from_secs(10));
    /// let start = Instant::now() - Duration::from_secs(20);
    /// let error = Error::io("simulated");
    /// assert!(policy.on_error(start, 1, true, error).is_exhausted());
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of retry attempts.
    ///
    /// This policy decorates an inner policy and limits the total number of
    /// attempts. Note that `on_error()` is not called before the initial
    /// (non-retry) attempt. Therefore, setting the maximum number of attempts
    /// to 0 or 1 results in no retry attempts.
    ///
    /// The policy passes through the results from the inner policy as long as
    /// `attempt_count < maximum_attempts`. Once the maximum number of attempts
    /// is reached, the policy replaces any [Continue][RetryResult::Continue]
    /// result with [Exhausted][RetryResult::Exhausted].
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::retry_policy::*;
    /// # use ibm_cloud_networking_gax::error::Error;
    /// use std::time::Instant;
    /// let policy = AlwaysRetry.with_attempt_limit(3);
    /// assert!(policy.on_error(Instant::now(), 0, true, Error::io("transient")).is_continue());
    /// assert!(policy.on_error(Instant::now(), 1, true, Error::io("transient")).is_continue());
    /// assert!(policy.on_error(Instant::now(), 2, true, Error::io("transient")).is_continue());
    /// assert!(policy.on_error(Instant::now(), 3, true, Error::io("transient")).is_exhausted());
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// The retry policy recommended for the IBM Cloud networking services.
///
/// This policy must be decorated to limit the number of retry attempts or the
/// duration of the retry loop.
///
/// The policy retries idempotent requests that fail with:
/// * HTTP status `429 Too Many Requests`.
/// * Any `5xx` HTTP status, except `501 Not Implemented`.
/// * Timeouts and transport problems where no HTTP response was received.
///
/// Requests that failed because the credentials could not produce the
/// authentication headers are retried when the credentials report the problem
/// as transient, regardless of idempotency. Such requests were never sent.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax::retry_policy::*;
/// # use ibm_cloud_networking_gax::error::Error;
/// use std::time::Instant;
/// let policy = RecommendedRetry;
/// let unavailable = Error::http(503, http::HeaderMap::new(), bytes::Bytes::new());
/// assert!(policy.on_error(Instant::now(), 1, true, unavailable).is_continue());
/// let not_found = Error::http(404, http::HeaderMap::new(), bytes::Bytes::new());
/// assert!(policy.on_error(Instant::now(), 1, true, not_found).is_permanent());
/// ```
#[derive(Clone, Debug)]
pub struct RecommendedRetry;

impl RetryPolicy for RecommendedRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if error.is_transient_and_before_rpc() {
            return RetryResult::Continue(error);
        }
        if !idempotent {
            return RetryResult::Permanent(error);
        }
        if error.is_io() || error.is_timeout() {
            return RetryResult::Continue(error);
        }
        match error.http_status_code() {
            Some(429) => RetryResult::Continue(error),
            Some(501) => RetryResult::Permanent(error),
            Some(code) if (500..600).contains(&code) => RetryResult::Continue(error),
            _ => RetryResult::Permanent(error),
        }
    }
}

/// A retry policy that retries all errors.
///
/// This policy must be decorated to limit the number of retry attempts or the
/// duration of the retry loop.
///
/// The policy retries all errors. This may be useful if the service guarantees
/// idempotency, maybe through the use of request ids.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax::retry_policy::*;
/// # use ibm_cloud_networking_gax::error::Error;
/// use std::time::Instant;
/// let policy = AlwaysRetry;
/// assert!(policy.on_error(Instant::now(), 1, false, Error::io("transient")).is_continue());
/// ```
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy that never retries.
///
/// This policy is useful when the client already has (or may already have) a
/// retry policy configured, and you want to avoid retrying a particular
/// request.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax::retry_policy::*;
/// # use ibm_cloud_networking_gax::error::Error;
/// use std::time::Instant;
/// let policy = NeverRetry;
/// assert!(policy.on_error(Instant::now(), 1, true, Error::io("transient")).is_exhausted());
/// ```
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Exhausted(error)
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// This policy decorates an inner policy and limits the duration of retry
/// loops. While the time spent in the retry loop (including time in backoff)
/// is less than the prescribed duration the `on_error()` method returns the
/// results of the inner policy. After that time it returns
/// [Exhausted][RetryResult::Exhausted] if the inner policy returns
/// [Continue][RetryResult::Continue].
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [RecommendedRetry].
#[derive(Debug)]
pub struct LimitedElapsedTime<P = RecommendedRetry>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: RecommendedRetry,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn error_if_exhausted(&self, loop_start: std::time::Instant, error: Error) -> RetryResult {
        let deadline = loop_start + self.maximum_duration;
        let now = std::time::Instant::now();
        if now < deadline {
            RetryResult::Continue(error)
        } else {
            RetryResult::Exhausted(Error::exhausted(error))
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Permanent(e) => RetryResult::Permanent(e),
            RetryResult::Exhausted(e) => RetryResult::Exhausted(e),
            RetryResult::Continue(e) => self.error_if_exhausted(loop_start, e),
        }
    }

    fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration> {
        let deadline = loop_start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(std::time::Instant::now());
        if let Some(inner) = self.inner.remaining_time(loop_start, attempt_count) {
            return Some(std::cmp::min(remaining, inner));
        }
        Some(remaining)
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// This policy decorates an inner policy and limits the total number of
/// attempts. Note that `on_error()` is not called before the initial
/// (non-retry) attempt. Therefore, setting the maximum number of attempts to 0
/// or 1 results in no retry attempts.
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [RecommendedRetry].
#[derive(Debug)]
pub struct LimitedAttemptCount<P = RecommendedRetry>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: RecommendedRetry,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Continue(e) if attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(Error::exhausted(e))
            }
            result => result,
        }
    }

    fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration> {
        self.inner.remaining_time(loop_start, attempt_count)
    }
}

/// The number of retries used by `enable_retries()` when the application
/// does not provide one.
pub const DEFAULT_MAX_RETRIES: u32 = 4;

/// The maximum interval between retries used by `enable_retries()` when the
/// application does not provide one.
pub const DEFAULT_MAX_RETRY_INTERVAL: Duration = Duration::from_secs(30);

// Backoff delays cannot be zero, shorter intervals are raised to this value.
const MIN_RETRY_INTERVAL: Duration = Duration::from_millis(1);

type PolicyPair = (Arc<dyn RetryPolicy>, Arc<dyn BackoffPolicy>);

/// The automatic retry configuration shared by a client and its clones.
///
/// Each client owns one switch. Calling `enable_retries()` or
/// `disable_retries()` on any clone of the client changes the configuration
/// for all the clones.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax::retry_policy::RetrySwitch;
/// use std::time::Duration;
/// let switch = RetrySwitch::default();
/// assert!(!switch.is_enabled());
/// let clone = switch.clone();
/// clone.enable(Some(2), Some(Duration::from_secs(5)));
/// assert!(switch.is_enabled());
/// switch.disable();
/// assert!(!clone.is_enabled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RetrySwitch {
    inner: Arc<RwLock<Option<PolicyPair>>>,
}

impl RetrySwitch {
    /// Turns on automatic retries.
    ///
    /// Requests are retried at most `max_retries` times, defaults to
    /// [DEFAULT_MAX_RETRIES]. The delay between attempts grows exponentially,
    /// but never exceeds `max_retry_interval`, defaults to
    /// [DEFAULT_MAX_RETRY_INTERVAL]. Calling this function again replaces the
    /// previous configuration.
    pub fn enable(&self, max_retries: Option<u32>, max_retry_interval: Option<Duration>) {
        let attempts = max_retries
            .unwrap_or(DEFAULT_MAX_RETRIES)
            .saturating_add(1);
        let interval = max_retry_interval
            .unwrap_or(DEFAULT_MAX_RETRY_INTERVAL)
            .max(MIN_RETRY_INTERVAL);
        let policy: Arc<dyn RetryPolicy> = Arc::new(RecommendedRetry.with_attempt_limit(attempts));
        // The interval is an upper bound, sub-second values are honored.
        let builder = ExponentialBackoffBuilder::new()
            .with_initial_delay(interval.min(Duration::from_secs(1)))
            .with_maximum_delay(interval);
        let backoff: Arc<dyn BackoffPolicy> = match builder.clone().build() {
            Ok(b) => Arc::new(b),
            Err(_) => Arc::new(builder.clamp()),
        };
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some((policy, backoff));
    }

    /// Turns off automatic retries. Calling this function more than once is
    /// harmless.
    pub fn disable(&self) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    /// Returns `true` if automatic retries are enabled.
    pub fn is_enabled(&self) -> bool {
        self.current().is_some()
    }

    /// The retry policy, if automatic retries are enabled.
    pub fn policy(&self) -> Option<Arc<dyn RetryPolicy>> {
        self.current().map(|(p, _)| p)
    }

    /// The backoff policy, if automatic retries are enabled.
    pub fn backoff(&self) -> Option<Arc<dyn BackoffPolicy>> {
        self.current().map(|(_, b)| b)
    }

    fn current(&self) -> Option<PolicyPair> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::CredentialsError;
    use http::HeaderMap;
    use std::time::Instant;
    use test_case::test_case;

    pub(crate) fn http_error(code: u16) -> Error {
        Error::http(code, HeaderMap::new(), bytes::Bytes::from_static(b"test-only"))
    }

    fn transient_auth() -> Error {
        Error::authentication(CredentialsError::from_msg(true, "try-again"))
    }

    fn permanent_auth() -> Error {
        Error::authentication(CredentialsError::from_msg(false, "bad-apikey"))
    }

    #[test]
    fn retry_result() {
        let flow = RetryResult::Permanent(http_error(404));
        assert!(flow.is_permanent() && !flow.is_exhausted() && !flow.is_continue());
        assert_eq!(flow.into_error().http_status_code(), Some(404));

        let flow = RetryResult::Exhausted(http_error(503));
        assert!(!flow.is_permanent() && flow.is_exhausted() && !flow.is_continue());

        let flow = RetryResult::Continue(http_error(429));
        assert!(!flow.is_permanent() && !flow.is_exhausted() && flow.is_continue());
        assert_eq!(flow.into_error().http_status_code(), Some(429));
    }

    // Verify `RetryPolicyArg` can be converted from the desired types.
    #[test]
    fn retry_policy_arg() {
        let policy = LimitedAttemptCount::new(3);
        let _ = RetryPolicyArg::from(policy);

        let policy: Arc<dyn RetryPolicy> = Arc::new(LimitedAttemptCount::new(3));
        let arg = RetryPolicyArg::from(policy);
        let _: Arc<dyn RetryPolicy> = arg.into();
    }

    #[test_case(429, true)]
    #[test_case(500, true)]
    #[test_case(501, false)]
    #[test_case(502, true)]
    #[test_case(503, true)]
    #[test_case(504, true)]
    #[test_case(400, false)]
    #[test_case(401, false)]
    #[test_case(403, false)]
    #[test_case(404, false)]
    #[test_case(409, false)]
    fn recommended_http(code: u16, retryable: bool) {
        let p = RecommendedRetry;
        let now = Instant::now();
        let got = p.on_error(now, 1, true, http_error(code));
        assert_eq!(got.is_continue(), retryable, "{got:?}");
        assert_eq!(got.is_permanent(), !retryable, "{got:?}");

        let got = p.on_error(now, 1, false, http_error(code));
        assert!(got.is_permanent(), "{got:?}");
    }

    #[test]
    fn recommended_other_errors() {
        let p = RecommendedRetry;
        let now = Instant::now();

        assert!(p.on_error(now, 1, true, Error::io("err")).is_continue());
        assert!(p.on_error(now, 1, false, Error::io("err")).is_permanent());

        assert!(p.on_error(now, 1, true, Error::timeout("err")).is_continue());
        assert!(
            p.on_error(now, 1, false, Error::timeout("err"))
                .is_permanent()
        );

        assert!(p.on_error(now, 1, true, transient_auth()).is_continue());
        assert!(p.on_error(now, 1, false, transient_auth()).is_continue());
        assert!(p.on_error(now, 1, true, permanent_auth()).is_permanent());
        assert!(p.on_error(now, 1, false, permanent_auth()).is_permanent());

        assert!(p.on_error(now, 1, true, Error::ser("err")).is_permanent());
        assert!(p.on_error(now, 1, true, Error::deser("err")).is_permanent());
        assert!(p.on_error(now, 1, true, Error::other("err")).is_permanent());

        assert!(p.remaining_time(now, 1).is_none());
    }

    #[test]
    fn always_and_never() {
        let now = Instant::now();
        let got = AlwaysRetry.on_error(now, 1, false, http_error(404));
        assert!(got.is_continue(), "{got:?}");
        assert!(AlwaysRetry.remaining_time(now, 1).is_none());

        let got = NeverRetry.on_error(now, 1, true, http_error(503));
        assert!(got.is_exhausted(), "{got:?}");
        assert!(NeverRetry.remaining_time(now, 1).is_none());
    }

    mockall::mock! {
        #[derive(Debug)]
        Policy {}
        impl RetryPolicy for Policy {
            fn on_error(&self, loop_start: std::time::Instant, attempt_count: u32, idempotent: bool, error: Error) -> RetryResult;
            fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration>;
        }
    }

    #[test]
    fn limited_time_forwards() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, _, _, e| RetryResult::Continue(e));
        mock.expect_remaining_time().times(1).returning(|_, _| None);

        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let rf = policy.on_error(now, 1, true, Error::other("err"));
        assert!(rf.is_continue());

        let rt = policy.remaining_time(now, 1);
        assert!(rt.is_some(), "{rt:?}");
    }

    #[test]
    fn limited_time_inner_continues() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, _, _, e| RetryResult::Continue(e));

        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let rf = policy.on_error(now - Duration::from_secs(10), 1, true, Error::other("err"));
        assert!(rf.is_continue(), "{rf:?}");

        let rf = policy.on_error(now - Duration::from_secs(70), 1, true, Error::other("err"));
        assert!(rf.is_exhausted(), "{rf:?}");
    }

    #[test]
    fn limited_time_inner_permanent() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(2)
            .returning(|_, _, _, e| RetryResult::Permanent(e));

        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let rf = policy.on_error(now - Duration::from_secs(10), 1, false, Error::other("err"));
        assert!(rf.is_permanent(), "{rf:?}");

        let rf = policy.on_error(now - Duration::from_secs(70), 1, false, Error::other("err"));
        assert!(rf.is_permanent(), "{rf:?}");
    }

    #[test]
    fn limited_time_remaining_inner_shorter() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_, _| Some(Duration::from_secs(5)));
        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));

        let remaining = policy.remaining_time(now - Duration::from_secs(10), 1);
        assert_eq!(remaining, Some(Duration::from_secs(5)));
    }

    #[test]
    fn limited_time_remaining_inner_is_none() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time().times(1).returning(|_, _| None);
        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));

        let remaining = policy.remaining_time(now - Duration::from_secs(70), 1);
        assert_eq!(remaining, Some(Duration::ZERO));
    }

    #[test]
    fn limited_attempt_count() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, _, _, e| RetryResult::Continue(e));
        let now = Instant::now();
        let policy = LimitedAttemptCount::custom(mock, 3);
        assert!(policy.on_error(now, 1, true, Error::other("err")).is_continue());
        assert!(policy.on_error(now, 2, true, Error::other("err")).is_continue());
        let rf = policy.on_error(now, 3, true, Error::other("err"));
        assert!(rf.is_exhausted(), "{rf:?}");
        let RetryResult::Exhausted(e) = rf else {
            unreachable!("checked above");
        };
        assert!(e.is_exhausted(), "{e:?}");
    }

    #[test]
    fn limited_attempt_count_permanent() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, _, _, e| RetryResult::Permanent(e));
        let policy = LimitedAttemptCount::custom(mock, 3);
        let rf = policy.on_error(Instant::now(), 5, true, Error::other("err"));
        assert!(rf.is_permanent(), "{rf:?}");
    }

    #[test]
    fn limited_attempt_count_remaining() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_, _| Some(Duration::from_secs(123)));
        let policy = LimitedAttemptCount::custom(mock, 3);
        assert_eq!(
            policy.remaining_time(Instant::now(), 1),
            Some(Duration::from_secs(123))
        );
    }

    #[test]
    fn switch_defaults() {
        let switch = RetrySwitch::default();
        assert!(!switch.is_enabled());
        assert!(switch.policy().is_none());
        assert!(switch.backoff().is_none());

        switch.enable(None, None);
        let policy = switch.policy().expect("enabled switch has a policy");
        assert!(switch.backoff().is_some());
        let now = Instant::now();
        for attempt in 1..=DEFAULT_MAX_RETRIES {
            let got = policy.on_error(now, attempt, true, http_error(503));
            assert!(got.is_continue(), "{attempt} {got:?}");
        }
        let got = policy.on_error(now, DEFAULT_MAX_RETRIES + 1, true, http_error(503));
        assert!(got.is_exhausted(), "{got:?}");
    }

    #[test_case(Duration::from_secs(2); "seconds")]
    #[test_case(Duration::from_millis(100); "sub-second")]
    #[test_case(Duration::from_millis(2); "a few milliseconds")]
    fn switch_custom(interval: Duration) {
        let switch = RetrySwitch::default();
        switch.enable(Some(1), Some(interval));
        let policy = switch.policy().expect("enabled switch has a policy");
        let now = Instant::now();
        assert!(policy.on_error(now, 1, true, http_error(429)).is_continue());
        assert!(policy.on_error(now, 2, true, http_error(429)).is_exhausted());

        let backoff = switch.backoff().expect("enabled switch has a backoff");
        let longest = (0..2000)
            .map(|i| backoff.on_failure(now, 1 + i % 10))
            .max()
            .unwrap_or_default();
        assert!(longest <= interval, "{longest:?} > {interval:?}");
    }

    #[test]
    fn switch_zero_interval() {
        let switch = RetrySwitch::default();
        switch.enable(None, Some(Duration::ZERO));
        let backoff = switch.backoff().expect("enabled switch has a backoff");
        let now = Instant::now();
        for attempt in 1..10 {
            assert!(backoff.on_failure(now, attempt) <= MIN_RETRY_INTERVAL);
        }
    }

    #[test]
    fn switch_is_shared_and_idempotent() {
        let switch = RetrySwitch::default();
        let clone = switch.clone();
        clone.enable(None, None);
        clone.enable(None, None);
        assert!(switch.is_enabled());
        switch.disable();
        switch.disable();
        assert!(!clone.is_enabled());
    }
}
