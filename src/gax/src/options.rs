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

//! Options that change how a single call is sent.
//!
//! Every operation on a client returns a request builder. Besides the
//! operation parameters, those builders accept the options in this module: a
//! per-attempt timeout, retry and backoff overrides, extra headers, and the
//! idempotency used to decide if a failed call may be retried. Mocks receive
//! the resulting [RequestOptions] and can assert on them.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use http::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::sync::Arc;

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters
/// and options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    headers: HeaderMap,
}

impl RequestOptions {
    /// Gets the idempotency
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Treat the request underlying this client as idempotent.
    ///
    /// If a request is known to be idempotent, it can be automatically retried
    /// after a transient failure. The client library infers the idempotency
    /// for each operation from its HTTP method. `GET`, `PUT` and `DELETE` are
    /// idempotent, `POST` and `PATCH` are not. Applications can override this
    /// default.
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    /// Set the idempotency for the underlying request unless it is already set.
    pub(crate) fn set_default_idempotency(&mut self, default: bool) {
        self.idempotent.get_or_insert(default);
    }

    /// Sets the user agent header for the request.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent value.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    ///
    /// When using a retry loop, this affects the timeout for each attempt. The
    /// overall timeout for a request is set by the retry policy.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Get the current retry policy override, if any.
    pub fn retry_policy(&self) -> &Option<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    /// Sets the retry policy configuration.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().into());
    }

    /// Get the current backoff policy override, if any.
    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    /// Sets the backoff policy configuration.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }

    /// The headers set by the application for this request.
    ///
    /// These headers replace any headers with the same name computed by the
    /// client library, including `Accept` and `Content-Type`.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Sets a header for this request, replacing any previous value.
    pub fn set_header<K: IntoHeaderName>(&mut self, name: K, value: HeaderValue) {
        self.headers.insert(name, value);
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client libraries provide a builder for each operation. These builders
/// can be used to set the request parameters, e.g., the zone identifier, and
/// the request options, e.g., the `Accept` header.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// If `v` is `true`, treat the request underlying this builder as
    /// idempotent.
    fn with_idempotency(self, v: bool) -> Self;

    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;

    /// Sets the retry policy configuration.
    ///
    /// This overrides any policy configured with
    /// `enable_retries()` on the client.
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    /// Sets the backoff policy configuration.
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;

    /// Sets a header, the value replaces any default computed by the client.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::options::RequestOptions;
    /// use ibm_cloud_networking_gax::options::RequestOptionsBuilder;
    /// use http::header::{ACCEPT, HeaderValue};
    /// # #[derive(Default)] struct Builder(RequestOptions);
    /// # impl ibm_cloud_networking_gax::options::internal::RequestBuilder for Builder {
    /// #     fn request_options(&mut self) -> &mut RequestOptions { &mut self.0 }
    /// # }
    /// let builder = Builder::default()
    ///     .with_header(ACCEPT, HeaderValue::from_static("text/plain"));
    /// ```
    fn with_header<K: IntoHeaderName>(self, name: K, value: HeaderValue) -> Self;
}

/// Simplify implementation of the [RequestOptionsBuilder] trait in generated
/// code.
///
/// This is an implementation detail, most applications have no need to worry
/// about or use this trait.
#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.set_default_idempotency(default);
        options
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }

    fn with_header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.request_options().set_header(name, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;
    use crate::retry_policy::LimitedAttemptCount;
    use http::header::{ACCEPT, CONTENT_TYPE};
    use std::time::Duration;
    use test_case::test_case;

    #[derive(Debug, Default)]
    struct ListZonesBuilder(RequestOptions);

    impl RequestBuilder for ListZonesBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0
        }
    }

    #[test]
    fn defaults() {
        let opts = RequestOptions::default();
        assert_eq!(opts.idempotent(), None);
        assert_eq!(opts.user_agent(), &None);
        assert_eq!(opts.attempt_timeout(), &None);
        assert!(opts.retry_policy().is_none(), "{opts:?}");
        assert!(opts.backoff_policy().is_none(), "{opts:?}");
        assert!(opts.headers().is_empty(), "{opts:?}");
    }

    #[test_case(None, true, true; "inferred idempotent")]
    #[test_case(None, false, false; "inferred not idempotent")]
    #[test_case(Some(false), true, false; "application override wins")]
    #[test_case(Some(true), false, true; "application forces retries")]
    fn idempotency(explicit: Option<bool>, inferred: bool, want: bool) {
        let mut opts = RequestOptions::default();
        if let Some(v) = explicit {
            opts.set_idempotency(v);
        }
        let opts = set_default_idempotency(opts, inferred);
        assert_eq!(opts.idempotent(), Some(want));
    }

    #[test]
    fn headers_replace() {
        let mut opts = RequestOptions::default();
        opts.set_header(ACCEPT, HeaderValue::from_static("application/json"));
        opts.set_header(ACCEPT, HeaderValue::from_static("application/pdf"));
        assert_eq!(opts.headers().len(), 1, "{opts:?}");
        assert_eq!(
            opts.headers().get(ACCEPT),
            Some(&HeaderValue::from_static("application/pdf"))
        );
    }

    #[test]
    fn builder() {
        let timeout = Duration::from_secs(30);
        let mut builder = ListZonesBuilder::default()
            .with_idempotency(false)
            .with_user_agent("zone-audit/1.0")
            .with_attempt_timeout(timeout)
            .with_retry_policy(LimitedAttemptCount::new(2))
            .with_backoff_policy(ExponentialBackoffBuilder::new().clamp())
            .with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let opts = builder.request_options();
        assert_eq!(opts.idempotent(), Some(false));
        assert_eq!(opts.user_agent().as_deref(), Some("zone-audit/1.0"));
        assert_eq!(opts.attempt_timeout(), &Some(timeout));
        assert!(opts.retry_policy().is_some(), "{opts:?}");
        assert!(opts.backoff_policy().is_some(), "{opts:?}");
        assert_eq!(
            opts.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("text/plain"))
        );
    }
}
