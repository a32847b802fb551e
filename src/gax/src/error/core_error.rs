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

use super::CredentialsError;
use crate::envelope::ErrorEnvelope;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error returned by every client in this workspace.
///
/// A call can fail before it is sent (a required path parameter is empty, the
/// credentials cannot produce an `Authorization` header), while it is in
/// flight (the connection resets, the attempt times out), or because the
/// service rejected it. Use the `is_*()` predicates to tell these apart.
///
/// Service errors keep the status code, headers, and payload of the HTTP
/// response. When the payload is the usual JSON error envelope it is also
/// available, parsed, via [envelope][Error::envelope].
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax::error::Error;
/// match example_function() {
///     Err(e) if matches!(e.http_status_code(), Some(404)) => {
///         println!("not found {e}");
///     },
///     Err(e) if e.is_binding() => {
///         println!("the request is missing some parameters: {e}");
///     },
///     Err(e) => {
///         println!("some other error {e}");
///     },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    fn with_source<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Self {
            kind,
            source: Some(source.into()),
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_networking_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Timeout, source)
    }

    /// The request could not be completed before its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// The retry policy stopped a retry loop before a successful attempt.
    ///
    /// The source is the error from the last attempt.
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Exhausted, source)
    }

    /// The request was stopped by the retry policy.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Deserialization, source)
    }

    /// The response could not be deserialized.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Serialization, source)
    }

    /// The request could not be serialized.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.status_code,
            _ => None,
        }
    }

    /// The canonical reason phrase for the HTTP status code.
    ///
    /// For example, `Not Found` for a 404 error.
    pub fn http_status_text(&self) -> Option<&'static str> {
        self.http_status_code()
            .and_then(|c| http::StatusCode::from_u16(c).ok())
            .and_then(|c| c.canonical_reason())
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// The error envelope returned by the service, if the payload contains
    /// one.
    ///
    /// Most services report errors using a JSON object with `errors` and
    /// `messages` arrays. The client library parses such payloads, but the
    /// raw payload remains available via [http_payload][Self::http_payload].
    pub fn envelope(&self) -> Option<&ErrorEnvelope> {
        match &self.kind {
            ErrorKind::Transport(d) => d.envelope.as_ref(),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Some required parameters are missing, the client cannot build the
    /// request.
    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Binding, source)
    }

    /// The request is missing some required parameters.
    ///
    /// The request was never sent.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn authentication(source: CredentialsError) -> Self {
        Self::with_source(ErrorKind::Authentication, source)
    }

    /// Could not create the authentication headers before sending the request.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Creates an error representing an HTTP error response.
    ///
    /// Applications may use this in mocks.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_networking_gax::error::Error;
    /// let payload = bytes::Bytes::from_static(br#"{"success":false,"errors":[[1001,"invalid zone"]],"messages":[]}"#);
    /// let error = Error::http(400, http::HeaderMap::new(), payload);
    /// assert_eq!(error.http_status_code(), Some(400));
    /// assert_eq!(error.http_status_text(), Some("Bad Request"));
    /// assert!(error.envelope().is_some());
    /// ```
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let envelope = serde_json::from_slice::<ErrorEnvelope>(&payload).ok();
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
            envelope,
        };
        let kind = ErrorKind::Transport(Box::new(details));
        Self { kind, source: None }
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails::default();
        Self::with_source(ErrorKind::Transport(Box::new(details)), source)
    }

    /// A problem reported by the transport layer, without any HTTP response.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
            ..
        }))
    }

    /// A problem in the transport layer, or an HTTP error response.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport { .. })
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Other, source)
    }

    pub(crate) fn is_transient_and_before_rpc(&self) -> bool {
        if !matches!(&self.kind, ErrorKind::Authentication) {
            return false;
        }
        self.source
            .as_ref()
            .and_then(|e| e.downcast_ref::<CredentialsError>())
            .map(|e| e.is_transient())
            .unwrap_or(false)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot build the request: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Exhausted, Some(e)) => {
                write!(f, "{e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Other, Some(e)) => {
                write!(f, "an unclassified problem making a request: {e}")
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Exhausted,
    Transport(Box<TransportDetails>),
    Other,
}

#[derive(Debug, Default)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
    envelope: Option<ErrorEnvelope>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                let reason = http::StatusCode::from_u16(*code)
                    .ok()
                    .and_then(|c| c.canonical_reason())
                    .unwrap_or("Unknown");
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(
                        f,
                        "the HTTP transport reports a [{code} {reason}] error: {message}"
                    )
                } else {
                    write!(
                        f,
                        "the HTTP transport reports a [{code} {reason}] error: {p:?}"
                    )
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::binding::MissingParameters;
    use std::error::Error as StdError;

    static_assertions::assert_impl_all!(Error: Send, Sync, StdError);

    #[test]
    fn binding() {
        let error = Error::binding(MissingParameters::new(["crn", "zone_id"]));
        assert!(error.is_binding(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<MissingParameters>());
        assert_eq!(got, Some(&MissingParameters::new(["crn", "zone_id"])));
        assert!(
            error
                .to_string()
                .contains("Missing required parameters: crn, zone_id"),
            "{error}"
        );
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout("simulated timeout");
        assert!(error.is_timeout(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("simulated timeout"), "{error}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");

        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_status_text().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.envelope().is_none(), "{error:?}");
    }

    #[test]
    fn exhausted() {
        let error = Error::exhausted(Error::http(
            503,
            HeaderMap::new(),
            bytes::Bytes::from_static(b"try-again"),
        ));
        assert!(error.is_exhausted(), "{error:?}");
        let got = error.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(got, Some(e) if e.http_status_code() == Some(503)),
            "{error:?}"
        );
        assert!(error.to_string().contains("try-again"), "{error}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser("bad body");
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        assert!(error.to_string().contains("bad body"), "{error}");

        let error = Error::deser("bad response");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
        assert!(error.to_string().contains("bad response"), "{error}");
    }

    #[test]
    fn authentication() {
        let error = Error::authentication(CredentialsError::from_msg(true, "try again"));
        assert!(error.is_authentication(), "{error:?}");
        assert!(error.is_transient_and_before_rpc(), "{error:?}");

        let error = Error::authentication(CredentialsError::from_msg(false, "cannot retry"));
        assert!(error.is_authentication(), "{error:?}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn http_with_envelope() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());
        let payload = serde_json::json!({
            "success": false,
            "errors": [[1003, "invalid zone identifier"]],
            "messages": [],
            "result": null,
        });
        let payload = bytes::Bytes::from_owner(payload.to_string());
        let error = Error::http(400, headers.clone(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(400));
        assert_eq!(error.http_status_text(), Some("Bad Request"));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
        let envelope = error.envelope().unwrap();
        assert_eq!(envelope.success, Some(false));
        assert_eq!(envelope.errors.len(), 1, "{envelope:?}");
        let fmt = error.to_string();
        assert!(fmt.contains("400 Bad Request"), "{fmt}");
        assert!(fmt.contains("invalid zone identifier"), "{fmt}");
    }

    #[test]
    fn http_without_envelope() {
        let error = Error::http(
            502,
            HeaderMap::new(),
            bytes::Bytes::from_static(b"<html>bad gateway</html>"),
        );
        assert_eq!(error.http_status_code(), Some(502));
        assert!(error.envelope().is_none(), "{error:?}");
        assert!(error.to_string().contains("bad gateway"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io(std::io::Error::other("connection reset"));
        assert!(error.is_io(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.to_string().contains("connection reset"), "{error}");
    }

    #[test]
    fn other() {
        let error = Error::other("unclassified");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("unclassified"), "{error}");
    }
}
