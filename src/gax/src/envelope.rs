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

//! Response envelopes.
//!
//! Most Cloud Internet Services (CIS) operations wrap their result in a
//! uniform JSON object:
//!
//! ```json
//! {"success": true, "errors": [], "messages": [], "result": {"id": "dnssec"}}
//! ```
//!
//! The [Envelope] type represents this object, the `result` type varies per
//! operation. Error responses use a similar shape, without a `result`, and
//! are exposed via [Error::envelope][crate::error::Error::envelope].

use serde::{Deserialize, Serialize};

/// The uniform response wrapper used by most CIS operations.
///
/// The client library returns the envelope exactly as the service sent it.
/// In particular, a successful HTTP response with `success == false` is not
/// converted to an error.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax::envelope::Envelope;
/// let envelope: Envelope<String> = serde_json::from_value(serde_json::json!({
///     "success": true, "errors": [], "messages": [], "result": "hello"
/// }))?;
/// assert!(envelope.success);
/// assert_eq!(envelope.result.as_deref(), Some("hello"));
/// # serde_json::Result::Ok(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Envelope<T> {
    /// Operation success flag.
    pub success: bool,

    /// Array of errors encountered.
    ///
    /// The service sends each error as an array of `[code, message]` or as
    /// an object, the client library preserves whatever is received.
    pub errors: Vec<serde_json::Value>,

    /// Array of messages returned.
    pub messages: Vec<serde_json::Value>,

    /// The operation result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,

    /// Pagination information, only returned by some list operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_info: Option<ResultInfo>,
}

impl<T> Envelope<T> {
    /// Creates a successful envelope around `result`.
    ///
    /// Useful to create responses in mocks.
    pub fn from_result(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            ..Default::default()
        }
    }

    /// Sets the [success][Envelope::success] field.
    pub fn set_success(mut self, v: bool) -> Self {
        self.success = v;
        self
    }

    /// Sets the [errors][Envelope::errors] field.
    pub fn set_errors<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<serde_json::Value>,
    {
        self.errors = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the [result_info][Envelope::result_info] field.
    pub fn set_result_info<V: Into<ResultInfo>>(mut self, v: V) -> Self {
        self.result_info = Some(v.into());
        self
    }
}

impl<T> std::default::Default for Envelope<T> {
    fn default() -> Self {
        Self {
            success: false,
            errors: Vec::new(),
            messages: Vec::new(),
            result: None,
            result_info: None,
        }
    }
}

/// Pagination information for page-numbered list operations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResultInfo {
    /// Page number.
    pub page: i64,
    /// Number of results per page.
    pub per_page: i64,
    /// Number of results on this page.
    pub count: i64,
    /// Total number of results.
    pub total_count: i64,
}

impl ResultInfo {
    /// Creates a new, empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [page][ResultInfo::page] field.
    pub fn set_page(mut self, v: i64) -> Self {
        self.page = v;
        self
    }

    /// Sets the [per_page][ResultInfo::per_page] field.
    pub fn set_per_page(mut self, v: i64) -> Self {
        self.per_page = v;
        self
    }

    /// Sets the [count][ResultInfo::count] field.
    pub fn set_count(mut self, v: i64) -> Self {
        self.count = v;
        self
    }

    /// Sets the [total_count][ResultInfo::total_count] field.
    pub fn set_total_count(mut self, v: i64) -> Self {
        self.total_count = v;
        self
    }
}

/// The error payload returned by the services.
///
/// CIS services return `{"success": false, "errors": [...], "messages": [...]}`,
/// other services return `{"errors": [...], "trace": "..."}`. Both are
/// represented by this type. A payload without an `errors` field is not an
/// error envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ErrorEnvelope {
    /// Operation success flag, only present in CIS responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    /// The errors reported by the service.
    pub errors: Vec<serde_json::Value>,

    /// Additional messages reported by the service.
    #[serde(default)]
    pub messages: Vec<serde_json::Value>,

    /// A request trace identifier, useful when contacting support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserialize_full() -> anyhow::Result<()> {
        let input = json!({
            "success": true,
            "errors": [],
            "messages": [["informational"]],
            "result": {"id": "abc"},
            "result_info": {"page": 1, "per_page": 20, "count": 1, "total_count": 1}
        });
        let got: Envelope<serde_json::Value> = serde_json::from_value(input)?;
        assert!(got.success);
        assert!(got.errors.is_empty(), "{got:?}");
        assert_eq!(got.messages, vec![json!(["informational"])]);
        assert_eq!(got.result, Some(json!({"id": "abc"})));
        assert_eq!(
            got.result_info,
            Some(
                ResultInfo::new()
                    .set_page(1)
                    .set_per_page(20)
                    .set_count(1)
                    .set_total_count(1)
            )
        );
        Ok(())
    }

    #[test]
    fn deserialize_unsuccessful() -> anyhow::Result<()> {
        let input = json!({
            "success": false,
            "errors": [[1001, "invalid request"]],
            "messages": [],
            "result": null
        });
        let got: Envelope<serde_json::Value> = serde_json::from_value(input)?;
        assert!(!got.success);
        assert_eq!(got.errors, vec![json!([1001, "invalid request"])]);
        assert_eq!(got.result, None);
        Ok(())
    }

    #[test]
    fn deserialize_sparse() -> anyhow::Result<()> {
        let got: Envelope<String> = serde_json::from_value(json!({"result": "only"}))?;
        assert_eq!(got.result.as_deref(), Some("only"));
        assert!(!got.success);
        Ok(())
    }

    #[test]
    fn from_result() {
        let got = Envelope::from_result(42_i64);
        assert!(got.success);
        assert_eq!(got.result, Some(42));
        let got = got.set_success(false).set_errors([json!([1, "one"])]);
        assert!(!got.success);
        assert_eq!(got.errors.len(), 1);
    }

    #[test]
    fn error_envelope() -> anyhow::Result<()> {
        let got: ErrorEnvelope = serde_json::from_value(json!({
            "errors": [{"code": "not_found", "message": "Gateway not found"}],
            "trace": "abc-123"
        }))?;
        assert_eq!(got.success, None);
        assert_eq!(got.trace.as_deref(), Some("abc-123"));
        assert_eq!(got.errors.len(), 1);

        let got = serde_json::from_value::<ErrorEnvelope>(json!({"message": "no errors field"}));
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }
}
