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

//! Verify the HTTP client composes requests as expected.
//!
//! These tests use the echo server, which returns the request method, path,
//! query, headers, and body in the response.

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use auth::credentials::Credentials;
    use gax::options::RequestOptions;
    use gax::response::Response;
    use http::HeaderValue;
    use ibm_cloud_networking_gax_internal::http::{Body, ReqwestClient};
    use serde_json::{Value, json};

    type Result<T> = anyhow::Result<T>;

    fn test_credentials() -> Result<Credentials> {
        Ok(auth::credentials::bearer_token::Builder::new("test-token").build()?)
    }

    async fn test_client(endpoint: &str) -> Result<ReqwestClient> {
        let client = echo_server::builder(endpoint)
            .with_credentials(test_credentials()?)
            .build()
            .await?;
        Ok(client)
    }

    fn header<'a>(response: &'a Response<Value>, name: &str) -> Option<&'a str> {
        response.body()["headers"][name].as_str()
    }

    #[tokio::test]
    async fn get_defaults() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await.map_err(anyhow::Error::msg)?;
        let client = test_client(&endpoint).await?;

        let builder = client
            .builder(reqwest::Method::GET, "/echo".into())
            .query(&[("start", "abc"), ("limit", "10")]);
        let response: Response<Value> = client
            .execute(builder, Body::Empty, RequestOptions::default())
            .await?;
        assert_eq!(response.status(), 200);
        let body = response.body();
        assert_eq!(body["method"], "GET");
        assert_eq!(body["path"], "/echo");
        assert_eq!(body["query"], json!({"start": "abc", "limit": "10"}));
        assert_eq!(header(&response, "accept"), Some("application/json"));
        assert_eq!(header(&response, "authorization"), Some("Bearer test-token"));
        assert_eq!(header(&response, "content-type"), None);
        let user_agent = header(&response, "user-agent").unwrap_or_default();
        assert!(
            user_agent.starts_with("ibm-cloud-networking-rust/"),
            "{user_agent}"
        );
        assert!(user_agent.ends_with(" echo-server/0.0.0"), "{user_agent}");
        Ok(())
    }

    #[tokio::test]
    async fn post_json() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await.map_err(anyhow::Error::msg)?;
        let client = test_client(&endpoint).await?;

        let builder = client.builder(reqwest::Method::POST, "/echo".into());
        let payload = json!({"destination_conf": "cos://bucket", "enabled": true});
        let response: Response<Value> = client
            .execute(builder, Body::json(&payload)?, RequestOptions::default())
            .await?;
        assert_eq!(response.body()["method"], "POST");
        assert_eq!(header(&response, "content-type"), Some("application/json"));
        let body = response.body()["body"].as_str().unwrap_or_default();
        let got = serde_json::from_str::<Value>(body)?;
        assert_eq!(got, payload);
        Ok(())
    }

    #[tokio::test]
    async fn raw_body() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await.map_err(anyhow::Error::msg)?;
        let client = test_client(&endpoint).await?;

        let builder = client.builder(reqwest::Method::PUT, "/echo".into());
        let script = "addEventListener('fetch', e => {})";
        let response: Response<Value> = client
            .execute(
                builder,
                Body::raw("application/javascript", script),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(
            header(&response, "content-type"),
            Some("application/javascript")
        );
        assert_eq!(response.body()["body"], script);
        Ok(())
    }

    #[tokio::test]
    async fn application_headers_win() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await.map_err(anyhow::Error::msg)?;
        let client = test_client(&endpoint).await?;

        let builder = client
            .builder(reqwest::Method::POST, "/echo".into())
            .header("x-correlation-id", "from-parameter");
        let mut options = RequestOptions::default();
        options.set_header(http::header::ACCEPT, HeaderValue::from_static("text/plain"));
        options.set_header(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/merge-patch+json"),
        );
        options.set_header(
            http::header::AUTHORIZATION,
            HeaderValue::from_static("Bearer override"),
        );
        options.set_header("x-correlation-id", HeaderValue::from_static("override"));
        options.set_user_agent("my-app/1.0");
        let response: Response<Value> = client
            .execute(builder, Body::json(&json!({}))?, options)
            .await?;
        assert_eq!(header(&response, "accept"), Some("text/plain"));
        assert_eq!(
            header(&response, "content-type"),
            Some("application/merge-patch+json")
        );
        assert_eq!(header(&response, "authorization"), Some("Bearer override"));
        assert_eq!(header(&response, "x-correlation-id"), Some("override"));
        let user_agent = header(&response, "user-agent").unwrap_or_default();
        assert!(
            user_agent.starts_with("my-app/1.0 ibm-cloud-networking-rust/"),
            "{user_agent}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn no_content() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await.map_err(anyhow::Error::msg)?;
        let client = test_client(&endpoint).await?;

        let builder = client.builder(reqwest::Method::DELETE, "/no-content".into());
        let response: Response<()> = client
            .execute(builder, Body::Empty, RequestOptions::default())
            .await?;
        assert_eq!(response.status(), 204);
        assert_eq!(response.status_text(), "No Content");
        Ok(())
    }

    #[tokio::test]
    async fn error_envelope() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await.map_err(anyhow::Error::msg)?;
        let client = test_client(&endpoint).await?;

        let builder = client.builder(reqwest::Method::GET, "/error".into());
        let err = client
            .execute::<Value>(builder, Body::Empty, RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        assert_eq!(err.http_status_text(), Some("Bad Request"));
        let payload = err.http_payload().cloned().unwrap_or_default();
        let got = serde_json::from_slice::<Value>(&payload)?;
        assert_eq!(got, echo_server::error_envelope());
        let envelope = err.envelope();
        assert!(envelope.is_some(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn download_stream() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await.map_err(anyhow::Error::msg)?;
        let client = test_client(&endpoint).await?;

        let builder = client.builder(reqwest::Method::GET, "/download".into());
        let response = client
            .execute_stream(
                builder,
                Body::Empty,
                "application/pdf",
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get(http::header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/pdf"))
        );
        let contents = response.into_body().collect().await?;
        assert_eq!(contents.as_ref(), echo_server::DOCUMENT);
        Ok(())
    }

    #[tokio::test]
    async fn multipart_upload() -> Result<()> {
        use ibm_cloud_networking_gax_internal::http::FormPart;
        let (endpoint, _server) = echo_server::start().await.map_err(anyhow::Error::msg)?;
        let client = test_client(&endpoint).await?;

        let builder = client.builder(reqwest::Method::PUT, "/upload".into());
        let body = Body::Multipart(vec![
            FormPart {
                name: "gateway_completion_notice",
                file_name: Some("notice.pdf".to_string()),
                content_type: Some("application/pdf".to_string()),
                payload: bytes::Bytes::from_static(echo_server::DOCUMENT),
            },
            FormPart {
                name: "comment",
                file_name: None,
                content_type: None,
                payload: bytes::Bytes::from_static(b"hello"),
            },
        ]);
        let response: Response<Value> = client
            .execute(builder, body, RequestOptions::default())
            .await?;
        let content_type = response.body()["headers"]["content-type"]
            .as_str()
            .unwrap_or_default();
        assert!(
            content_type.starts_with("multipart/form-data; boundary="),
            "{content_type}"
        );
        assert_eq!(
            response.body()["parts"],
            json!([
                {
                    "name": "gateway_completion_notice",
                    "file_name": "notice.pdf",
                    "content_type": "application/pdf",
                    "size": echo_server::DOCUMENT.len(),
                },
                {
                    "name": "comment",
                    "file_name": null,
                    "content_type": null,
                    "size": 5,
                },
            ])
        );
        Ok(())
    }
}
