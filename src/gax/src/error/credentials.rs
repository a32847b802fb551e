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

use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Result};
use std::sync::Arc;

/// Represents an error creating or using credentials.
///
/// The client libraries may experience problems creating credentials and/or
/// using them. An example of problems creating credentials may be a missing
/// API key in the external configuration. An example of problems using
/// credentials may be a temporary failure to exchange an API key for an IAM
/// access token. Note that the latter kind of errors may happen even after
/// the credentials are successfully created.
///
/// Applications rarely need to create instances of this error type. The
/// exception might be when testing application code, where the application is
/// mocking a client library behavior.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax::error::CredentialsError;
/// let err = CredentialsError::from_msg(
///     true, "simulated transient error while trying to create credentials");
/// assert!(err.is_transient());
/// assert!(format!("{err}").contains("simulated transient error"));
/// ```
#[derive(Clone, Debug)]
pub struct CredentialsError {
    /// If `true`, the operation that resulted in this error might succeed
    /// upon retry.
    is_transient: bool,

    message: Option<String>,

    source: Option<Arc<dyn Error + Send + Sync>>,
}

impl CredentialsError {
    /// Creates a new `CredentialsError` wrapping `source`.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::error::CredentialsError;
    /// # use ibm_cloud_networking_gax::error::Error;
    /// let err = CredentialsError::from_source(
    ///     false, Error::other("simulated permanent error while trying to create credentials"));
    /// assert!(!err.is_transient());
    /// ```
    pub fn from_source<T: Error + Send + Sync + 'static>(is_transient: bool, source: T) -> Self {
        Self {
            is_transient,
            message: None,
            source: Some(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` from a message.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        Self {
            is_transient,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Creates a new `CredentialsError` with a message and a source.
    pub fn new<M, T>(is_transient: bool, message: M, source: T) -> Self
    where
        M: Into<String>,
        T: Error + Send + Sync + 'static,
    {
        Self {
            is_transient,
            message: Some(message.into()),
            source: Some(Arc::new(source)),
        }
    }

    /// Returns `true` if the error is transient and may succeed in future
    /// attempts.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

const TRANSIENT_MSG: &str = "but future attempts may succeed";
const PERMANENT_MSG: &str = "and future attempts will not succeed";

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let msg = if self.is_transient {
            TRANSIENT_MSG
        } else {
            PERMANENT_MSG
        };
        match (&self.message, &self.source) {
            (Some(m), Some(s)) => write!(f, "{m} {msg}: {s}"),
            (Some(m), None) => write!(f, "{m} {msg}"),
            (None, Some(s)) => write!(f, "cannot create credentials {msg}: {s}"),
            (None, None) => write!(f, "cannot create credentials {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(true)]
    #[test_case(false)]
    fn from_msg(transient: bool) {
        let got = CredentialsError::from_msg(transient, "test-only");
        assert_eq!(got.is_transient(), transient, "{got:?}");
        assert!(got.source().is_none(), "{got:?}");
        assert!(got.to_string().contains("test-only"), "{got}");
    }

    #[test_case(true)]
    #[test_case(false)]
    fn from_source(transient: bool) {
        let source = std::io::Error::other("io-error");
        let got = CredentialsError::from_source(transient, source);
        assert_eq!(got.is_transient(), transient, "{got:?}");
        let source = got
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(source.is_some(), "{got:?}");
        assert!(got.to_string().contains("io-error"), "{got}");
    }

    #[test]
    fn new() {
        let source = std::io::Error::other("io-error");
        let got = CredentialsError::new(false, "reading credentials file", source);
        assert!(!got.is_transient(), "{got:?}");
        let fmt = got.to_string();
        assert!(fmt.contains("reading credentials file"), "{fmt}");
        assert!(fmt.contains(PERMANENT_MSG), "{fmt}");
        assert!(fmt.contains("io-error"), "{fmt}");
    }
}
