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

//! Response types.
//!
//! Every operation returns a [Response], carrying the HTTP status, the
//! headers, and the decoded body.
//!
//! # Examples
//!
//! Inspecting the result of a request
//!
//! ```no_run
//! # use ibm_cloud_networking_gax::Result;
//! # use ibm_cloud_networking_gax::response::Response;
//! // A type representing a service resource, for example, a firewall rule.
//! struct Resource {
//!   // ...
//! }
//!
//! async fn get_firewall_rule(id: &str) -> Result<Response<Resource>> {
//!   // ...
//! # panic!()
//! }
//!
//! # tokio_test::block_on(async {
//! let response = get_firewall_rule("372e67954025e0ba6aaa6d586b9e0b59").await?;
//! println!("status = {}", response.status());
//! if let Some(ray) = response.headers().get("cf-ray") {
//!     // do something with the ray id
//! }
//! let resource = response.body();
//! # Result::<()>::Ok(()) });
//! ```
//!
//! Creating a response for mocks
//!
//! ```
//! # use ibm_cloud_networking_gax::Result;
//! # use ibm_cloud_networking_gax::response::Response;
//! struct Resource {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Resource) -> Result<Response<Resource>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// Represents a service response.
///
/// A response consists of a body (potentially the unit type), the HTTP
/// status code, and the response headers.
///
/// Typically you get a response as the result of making a request via some
/// client in these libraries. You may also create responses directly when
/// mocking clients for your own tests.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body, with a `200 OK` status.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// assert_eq!(response.status(), 200);
    /// ```
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::response::Response;
    /// # use ibm_cloud_networking_gax::response::Parts;
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
    /// let response = Response::from_parts(
    ///     Parts::new().set_status(http::StatusCode::CREATED).set_headers(headers), ());
    /// assert_eq!(response.status(), 201);
    /// assert!(response.headers().get(http::header::CONTENT_TYPE).is_some());
    /// ```
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.parts.status.as_u16()
    }

    /// The canonical reason phrase for the status code.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::response::Response;
    /// let response = Response::from(());
    /// assert_eq!(response.status_text(), "OK");
    /// ```
    pub fn status_text(&self) -> &'static str {
        self.parts.status.canonical_reason().unwrap_or_default()
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// assert_eq!(response.body().as_str(), "test");
    /// ```
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Consumes the response returning the metadata, and body.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// let (parts, body) = response.into_parts();
    /// assert_eq!(body.as_str(), "test");
    /// assert!(parts.headers.is_empty());
    /// ```
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }
}

/// Component parts of a response.
///
/// The response parts, excluding the body, consist of the HTTP status and the
/// headers.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status code.
    pub status: http::StatusCode,

    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance, with a `200 OK` status and no headers.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the status code.
    pub fn set_status(mut self, status: http::StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

impl std::default::Default for Parts {
    fn default() -> Self {
        Self {
            status: http::StatusCode::OK,
            headers: http::HeaderMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue, StatusCode};

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert_eq!(response.status(), 200);
        assert_eq!(response.status_text(), "OK");
        assert!(response.headers().is_empty());
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.into_body().as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = HeaderMap::new();
        headers.insert("x-correlation-id", HeaderValue::from_static("abc"));
        let parts = Parts::new()
            .set_status(StatusCode::ACCEPTED)
            .set_headers(headers.clone());
        let response = Response::from_parts(parts, 42_i64);
        assert_eq!(response.status(), 202);
        assert_eq!(response.status_text(), "Accepted");
        assert_eq!(response.headers(), &headers);

        let (parts, body) = response.into_parts();
        assert_eq!(parts.status, StatusCode::ACCEPTED);
        assert_eq!(parts.headers, headers);
        assert_eq!(body, 42);
    }

    #[test]
    fn no_content() {
        let response = Response::from_parts(Parts::new().set_status(StatusCode::NO_CONTENT), ());
        assert_eq!(response.status(), 204);
        assert_eq!(response.status_text(), "No Content");
    }
}
