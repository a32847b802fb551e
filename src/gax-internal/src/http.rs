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

use crate::api_header::ClientInfo;
use crate::options::ServiceSettings;
use auth::credentials::{CacheableResource, Credentials};
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::error::{CredentialsError, Error};
use gax::exponential_backoff::ExponentialBackoff;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use gax::retry_policy::{RetryPolicy, RetrySwitch};
use http::Extensions;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use std::sync::Arc;

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// The request-execution primitive used by all the service clients.
///
/// The generated code creates a [reqwest::RequestBuilder] with the URL, the
/// query parameters, and any operation-specific headers via [Self::builder].
/// This client adds the default headers, the authentication headers, the
/// headers in the request options, and then runs the retry loop.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    user_agent: HeaderValue,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    retry_switch: RetrySwitch,
}

impl ReqwestClient {
    /// Creates a new client.
    ///
    /// Explicit credentials in `config` take precedence, otherwise the
    /// credentials are loaded from the external configuration for the service
    /// name. Likewise, the endpoint in `config` takes precedence over the
    /// `URL` property in the external configuration, and both take
    /// precedence over `default_endpoint`.
    pub fn new(
        config: crate::options::ClientConfig,
        info: &ClientInfo,
        default_endpoint: &str,
        default_service_name: &str,
    ) -> gax::client_builder::Result<Self> {
        let settings = ServiceSettings::resolve(&config, default_endpoint, default_service_name)?;
        let user_agent =
            HeaderValue::from_str(&info.header_value()).map_err(BuilderError::configuration)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let retry_switch = RetrySwitch::default();
        if let Some((max_retries, max_retry_interval)) = settings.retries {
            tracing::debug!(
                "retries enabled by the `{}` configuration",
                settings.service_name
            );
            retry_switch.enable(max_retries, max_retry_interval);
        }
        Ok(Self {
            inner,
            cred: settings.credentials,
            endpoint: settings.endpoint,
            user_agent,
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
            retry_switch,
        })
    }

    /// The base URL for all requests.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The retry configuration changed by `enable_retries()` and
    /// `disable_retries()` on the clients. The switch is shared by all clones.
    pub fn retry_switch(&self) -> &RetrySwitch {
        &self.retry_switch
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    /// Sends a request and parses the response body as JSON.
    pub async fn execute<O: serde::de::DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Body,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        let response = self
            .send(builder, body, HeaderValue::from_static(JSON_MEDIA_TYPE), options)
            .await?;
        to_http_response(response).await
    }

    /// Sends a request and returns the response body as a stream.
    ///
    /// Only receiving the response headers is retried. Errors while reading
    /// the body are returned by the stream.
    #[cfg(feature = "_internal-http-stream")]
    pub async fn execute_stream(
        &self,
        builder: reqwest::RequestBuilder,
        body: Body,
        accept: &'static str,
        options: RequestOptions,
    ) -> Result<Response<gax::streaming::ByteStream>> {
        use futures::TryStreamExt;
        let response = self
            .send(builder, body, HeaderValue::from_static(accept), options)
            .await?;
        let parts = Parts::new()
            .set_status(response.status())
            .set_headers(response.headers().clone());
        let stream = response.bytes_stream().map_err(Self::map_send_error);
        Ok(Response::from_parts(
            parts,
            gax::streaming::ByteStream::new(stream),
        ))
    }

    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        body: Body,
        accept: HeaderValue,
        options: RequestOptions,
    ) -> Result<reqwest::Response> {
        let headers = self.request_headers(accept, &body, &options)?;
        let Some((policy, backoff)) = self.get_retry_policy(&options) else {
            return self
                .request_attempt(builder, &body, &headers, &options, None)
                .await;
        };
        let idempotent = options.idempotent().unwrap_or(false);
        let this = self.clone();
        let inner = async move |d| {
            let builder = builder
                .try_clone()
                .ok_or_else(|| Error::other("the request cannot be cloned for a retry"))?;
            this.request_attempt(builder, &body, &headers, &options, d)
                .await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        let on_retry = |attempt: u32, error: &Error, delay: std::time::Duration| {
            tracing::warn!(attempt, ?delay, %error, "retrying request");
        };
        gax::retry_loop_internal::retry_loop_with_callback(
            inner, sleep, idempotent, policy, backoff, on_retry,
        )
        .await
    }

    // Defaults first, then the application headers. The authentication
    // headers are added on each attempt because tokens may be refreshed.
    fn request_headers(
        &self,
        accept: HeaderValue,
        body: &Body,
        options: &RequestOptions,
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, accept);
        if let Some(content_type) = body.content_type() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        let user_agent = match options.user_agent() {
            None => self.user_agent.clone(),
            Some(prefix) => {
                let value = format!("{prefix} {}", self.user_agent.to_str().unwrap_or_default());
                HeaderValue::from_str(&value).map_err(Error::ser)?
            }
        };
        headers.insert(USER_AGENT, user_agent);
        Ok(headers)
    }

    async fn request_attempt(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: &Body,
        headers: &HeaderMap,
        options: &RequestOptions,
        remaining_time: Option<std::time::Duration>,
    ) -> Result<reqwest::Response> {
        builder = gax::retry_loop_internal::effective_timeout(options, remaining_time)
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));
        builder = body.apply(builder)?;

        let mut headers = headers.clone();
        for (key, value) in self.auth_headers().await?.iter() {
            headers.insert(key.clone(), value.clone());
        }
        for (key, value) in options.headers().iter() {
            headers.insert(key.clone(), value.clone());
        }
        let request = builder.headers(headers).build().map_err(Error::ser)?;
        tracing::debug!(method = %request.method(), path = request.url().path(), "sending request");
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        tracing::debug!(status = response.status().as_u16(), "received response");
        if !response.status().is_success() {
            return to_http_error(response).await;
        }
        Ok(response)
    }

    async fn auth_headers(&self) -> Result<HeaderMap> {
        let cached = self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?;
        match cached {
            CacheableResource::New { data, .. } => Ok(data),
            CacheableResource::NotModified => Err(Error::authentication(
                CredentialsError::from_msg(false, "the credentials returned no headers"),
            )),
        }
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }

    // The request options take precedence, then `enable_retries()`, then the
    // client configuration. Without any of them requests are not retried.
    fn get_retry_policy(
        &self,
        options: &RequestOptions,
    ) -> Option<(Arc<dyn RetryPolicy>, Arc<dyn BackoffPolicy>)> {
        let policy = options
            .retry_policy()
            .clone()
            .or_else(|| self.retry_switch.policy())
            .or_else(|| self.retry_policy.clone())?;
        Some((policy, self.get_backoff_policy(options)))
    }

    pub(crate) fn get_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| self.retry_switch.backoff())
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

/// `GET`, `PUT` and `DELETE` requests can be retried safely.
pub fn default_idempotency(method: &reqwest::Method) -> bool {
    matches!(
        *method,
        reqwest::Method::GET | reqwest::Method::PUT | reqwest::Method::DELETE
    )
}

/// The payload of a request.
#[derive(Clone, Debug, Default)]
pub enum Body {
    #[default]
    Empty,
    /// A payload sent as-is, JSON bodies are serialized before the first
    /// attempt.
    Bytes {
        content_type: &'static str,
        payload: bytes::Bytes,
    },
    /// A `multipart/form-data` payload. The form is created on each attempt.
    #[cfg(feature = "_internal-http-multipart")]
    Multipart(Vec<FormPart>),
}

impl Body {
    pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Self> {
        let payload = serde_json::to_vec(value).map_err(Error::ser)?;
        Ok(Self::Bytes {
            content_type: JSON_MEDIA_TYPE,
            payload: payload.into(),
        })
    }

    pub fn raw<T: Into<bytes::Bytes>>(content_type: &'static str, payload: T) -> Self {
        Self::Bytes {
            content_type,
            payload: payload.into(),
        }
    }

    // `reqwest` computes the multipart content type, it includes the boundary.
    fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Bytes { content_type, .. } => Some(content_type),
            #[cfg(feature = "_internal-http-multipart")]
            Self::Multipart(_) => None,
        }
    }

    fn apply(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder> {
        match self {
            Self::Empty => Ok(builder),
            Self::Bytes { payload, .. } => Ok(builder.body(payload.clone())),
            #[cfg(feature = "_internal-http-multipart")]
            Self::Multipart(parts) => {
                let form = parts
                    .iter()
                    .try_fold(reqwest::multipart::Form::new(), |form, p| {
                        p.to_part().map(|part| form.part(p.name, part))
                    })?;
                Ok(builder.multipart(form))
            }
        }
    }
}

/// A part in a `multipart/form-data` request.
#[cfg(feature = "_internal-http-multipart")]
#[derive(Clone, Debug)]
pub struct FormPart {
    pub name: &'static str,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub payload: bytes::Bytes,
}

#[cfg(feature = "_internal-http-multipart")]
impl FormPart {
    fn to_part(&self) -> Result<reqwest::multipart::Part> {
        let part = reqwest::multipart::Part::bytes(self.payload.to_vec());
        let part = match &self.file_name {
            Some(f) => part.file_name(f.clone()),
            None => part,
        };
        match &self.content_type {
            Some(c) => part.mime_str(c).map_err(Error::ser),
            None => Ok(part),
        }
    }
}

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    Err(Error::http(status_code, parts.headers, body))
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    // 204 No Content has no body and throws EOF error if we try to parse with serde::json
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?;

    let response = match body.to_bytes() {
        content if (content.is_empty() && no_content_status) => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new()
            .set_status(parts.status)
            .set_headers(parts.headers),
        response,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderMap;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(400)
            .body(r#"{"error": "bad request"}"#)?;
        let response: reqwest::Response = http_resp.into();
        let err = to_http_error::<()>(response).await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"error": "bad request"}"#)).as_ref()
        );
        assert!(err.envelope().is_none(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_envelope() -> TestResult {
        let body = serde_json::json!({
            "success": false,
            "errors": [{"code": 1003, "message": "Invalid or missing zone id."}],
            "messages": [],
            "result": null,
        });
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let err = to_http_error::<()>(response).await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(err.http_status_text(), Some("Not Found"));
        assert!(err.envelope().is_some(), "{err:?}");
        Ok(())
    }

    #[test_case(reqwest::StatusCode::OK, "{}")]
    #[test_case(reqwest::StatusCode::OK, r#"{"name": "abc"}"#)]
    #[test_case(reqwest::StatusCode::NO_CONTENT, "")]
    #[tokio::test]
    async fn client_response(status: reqwest::StatusCode, body: &'static str) -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(status)
            .body(body)?;
        let response: reqwest::Response = http_resp.into();
        let response = to_http_response::<serde_json::Value>(response).await?;
        assert_eq!(response.status(), status.as_u16());
        let want = if body.is_empty() {
            serde_json::Value::default()
        } else {
            serde_json::from_str(body)?
        };
        assert_eq!(response.body(), &want);
        Ok(())
    }

    #[tokio::test]
    async fn client_response_bad_json() -> TestResult {
        let http_resp = http::Response::builder().status(200).body("not json")?;
        let response: reqwest::Response = http_resp.into();
        let err = to_http_response::<serde_json::Value>(response)
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[test_case(reqwest::Method::GET, true)]
    #[test_case(reqwest::Method::PUT, true)]
    #[test_case(reqwest::Method::DELETE, true)]
    #[test_case(reqwest::Method::POST, false)]
    #[test_case(reqwest::Method::PATCH, false)]
    fn idempotency(method: reqwest::Method, want: bool) {
        assert_eq!(default_idempotency(&method), want);
    }

    #[test]
    fn body_content_type() -> TestResult {
        assert_eq!(Body::Empty.content_type(), None);
        let body = Body::json(&serde_json::json!({"a": 1}))?;
        assert_eq!(body.content_type(), Some(JSON_MEDIA_TYPE));
        let body = Body::raw("application/javascript", "addEventListener()");
        assert_eq!(body.content_type(), Some("application/javascript"));
        let body = Body::Multipart(Vec::new());
        assert_eq!(body.content_type(), None);
        Ok(())
    }

    #[test]
    fn body_apply() -> TestResult {
        let client = reqwest::Client::new();
        let builder = client.post("https://api.cis.cloud.ibm.com/v1/test");
        let body = Body::raw("application/javascript", "addEventListener()");
        let request = body.apply(builder)?.build()?;
        let got = request.body().and_then(|b| b.as_bytes());
        assert_eq!(got, Some("addEventListener()".as_bytes()));
        Ok(())
    }
}
