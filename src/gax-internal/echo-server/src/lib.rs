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

//! Defines helpers functions to run ReqwestClient integration tests.
//!
//! Setting up integration tests is a bit complicated. So we refactor that code
//! to some helper functions.

use auth::credentials::Credentials;
use axum::{
    body::Bytes,
    extract::{Multipart, Query},
    http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE},
};
use gaxi::api_header::ClientInfo;
use serde_json::json;
use std::collections::HashMap;
use tokio::task::JoinHandle;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// The service name used to find the external configuration in tests.
pub const SERVICE_NAME: &str = "echo_server";

/// The client information used in the `User-Agent` header.
pub static INFO: ClientInfo = ClientInfo {
    name: "echo-server",
    version: "0.0.0",
};

/// The document returned by `/download`.
pub const DOCUMENT: &[u8] = b"%PDF-1.4\n% test document\n";

pub async fn start() -> Result<(String, JoinHandle<()>)> {
    let app = axum::Router::new()
        .route("/echo", axum::routing::any(echo))
        .route("/error", axum::routing::any(error))
        .route("/no-content", axum::routing::delete(no_content))
        .route("/download", axum::routing::get(download))
        .route("/upload", axum::routing::put(upload));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server = tokio::spawn(async {
        if let Err(e) = axum::serve(listener, app).await {
            panic!("echo server failed: {e}");
        }
    });

    Ok((format!("http://{}:{}", addr.ip(), addr.port()), server))
}

pub fn builder(
    endpoint: impl Into<String>,
) -> gax::client_builder::ClientBuilder<Factory, Credentials> {
    gax::client_builder::internal::new_builder(Factory(endpoint.into()))
}

pub struct Factory(String);
impl gax::client_builder::internal::ClientFactory for Factory {
    type Client = gaxi::http::ReqwestClient;
    type Credentials = Credentials;
    async fn build(
        self,
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self::Client> {
        Self::Client::new(config, &INFO, &self.0, SERVICE_NAME)
    }
}

/// The error envelope returned by `/error`.
pub fn error_envelope() -> serde_json::Value {
    json!({
        "success": false,
        "errors": [{"code": 1001, "message": "this path always returns an error"}],
        "messages": [],
        "result": null,
    })
}

async fn echo(
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let response = echo_impl(method, uri, query, headers, body).await;
    match response {
        Err(e) => internal_error(e),
        Ok(s) => (StatusCode::OK, s),
    }
}

async fn echo_impl(
    method: Method,
    uri: Uri,
    query: HashMap<String, String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<String> {
    if let Some(delay) = query
        .get("delay_ms")
        .map(|s| s.parse::<u64>())
        .transpose()?
        .map(tokio::time::Duration::from_millis)
    {
        tokio::time::sleep(delay).await;
    }
    let query = serde_json::Value::Object(
        query
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect(),
    );
    let headers = headers_to_json(headers)?;
    let object = json!({
        "method": method.as_str(),
        "path": uri.path(),
        "headers": headers,
        "query": query,
        "body": String::from_utf8(body.to_vec())?,
    });
    let body = serde_json::to_string(&object)?;
    Ok(body)
}

async fn error() -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, error_envelope().to_string())
}

async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn download(headers: HeaderMap) -> (StatusCode, HeaderMap, Bytes) {
    let mut response = HeaderMap::new();
    if let Some(accept) = headers.get("accept") {
        response.insert(CONTENT_TYPE, accept.clone());
    }
    (StatusCode::OK, response, Bytes::from_static(DOCUMENT))
}

async fn upload(headers: HeaderMap, multipart: Multipart) -> (StatusCode, String) {
    match upload_impl(headers, multipart).await {
        Err(e) => internal_error(e),
        Ok(s) => (StatusCode::OK, s),
    }
}

async fn upload_impl(headers: HeaderMap, mut multipart: Multipart) -> Result<String> {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let contents = field.bytes().await?;
        parts.push(json!({
            "name": name,
            "file_name": file_name,
            "content_type": content_type,
            "size": contents.len(),
        }));
    }
    let object = json!({
        "headers": headers_to_json(headers)?,
        "parts": parts,
    });
    Ok(serde_json::to_string(&object)?)
}

fn headers_to_json(headers: HeaderMap) -> Result<serde_json::Value> {
    let mut object = serde_json::Map::new();
    for (name, value) in headers.iter() {
        object.insert(
            name.to_string(),
            serde_json::Value::String(value.to_str()?.to_string()),
        );
    }
    Ok(serde_json::Value::Object(object))
}

fn internal_error(e: Box<dyn std::error::Error + Send + Sync>) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}"))
}
