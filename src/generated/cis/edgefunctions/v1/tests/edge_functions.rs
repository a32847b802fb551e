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

//! Verify the edge functions operations send the expected requests.

#[cfg(test)]
mod tests {
    use auth::credentials::bearer_token;
    use gax::options::RequestOptionsBuilder;
    use http::HeaderValue;
    use http::header::CONTENT_TYPE;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use ibm_cloud_networking_edge_functions_v1::client::EdgeFunctions;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    const SCRIPTS: &str = "/v1/test-crn/workers/scripts";
    const ROUTES: &str = "/v1/test-crn/zones/test-zone/workers/routes";
    const SCRIPT: &str = "addEventListener('fetch', (event) => { event.respondWith(new Response('hello')); });";

    async fn test_client(server: &Server) -> Result<EdgeFunctions> {
        let client = EdgeFunctions::builder("test-crn", "test-zone")
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(bearer_token::Builder::new("test-token").build()?)
            .build()
            .await?;
        Ok(client)
    }

    fn envelope(result: serde_json::Value) -> serde_json::Value {
        json!({"success": true, "errors": [], "messages": [], "result": result})
    }

    #[tokio::test]
    async fn upload_action() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", format!("{SCRIPTS}/my-action")),
                request::headers(contains(("content-type", "application/javascript"))),
                request::headers(contains(("accept", "application/json"))),
                request::headers(contains(("x-correlation-id", "corr-1"))),
                request::body(SCRIPT),
            ])
            .respond_with(json_encoded(envelope(json!({
                "script": "my-action",
                "etag": "etag-1",
                "handlers": ["fetch"],
                "routes": [{"id": "route-1", "pattern": "example.com/*", "script": "my-action"}],
                "modified_on": "2025-01-01T00:00:00Z"
            })))),
        );

        let client = test_client(&server).await?;
        let action = client
            .update_edge_functions_action("my-action")
            .set_edge_functions_action(SCRIPT)
            .set_x_correlation_id("corr-1")
            .send()
            .await?
            .into_body()
            .result
            .unwrap_or_default();
        assert_eq!(action.handlers, vec!["fetch"]);
        assert_eq!(action.routes[0].pattern, "example.com/*");
        Ok(())
    }

    #[tokio::test]
    async fn upload_requires_script() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .update_edge_functions_action("my-action")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(
            err.to_string()
                .contains("Missing required parameters: edge_functions_action"),
            "{err}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn download_action() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("{SCRIPTS}/my-action")),
                request::headers(contains(("accept", "application/javascript"))),
                request::headers(not(contains(key("x-correlation-id")))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("content-type", "application/javascript")
                    .body(SCRIPT),
            ),
        );

        let client = test_client(&server).await?;
        let response = client.get_edge_functions_action("my-action").send().await?;
        assert_eq!(
            response.headers().get("content-type"),
            Some(&HeaderValue::from_static("application/javascript"))
        );
        let contents = response.into_body().collect().await?;
        assert_eq!(contents, bytes::Bytes::from_static(SCRIPT.as_bytes()));
        Ok(())
    }

    #[tokio::test]
    async fn download_chunks() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", format!("{SCRIPTS}/my-action")))
                .respond_with(status_code(200).body(SCRIPT)),
        );

        let client = test_client(&server).await?;
        let mut stream = client
            .get_edge_functions_action("my-action")
            .send()
            .await?
            .into_body();
        let mut contents = Vec::new();
        while let Some(chunk) = stream.next().await {
            contents.extend_from_slice(&chunk?);
        }
        assert_eq!(String::from_utf8(contents)?, SCRIPT);
        Ok(())
    }

    #[tokio::test]
    async fn download_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", format!("{SCRIPTS}/missing")))
                .respond_with(status_code(404).body("not found")),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_edge_functions_action("missing")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from_static(b"not found"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn actions() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", SCRIPTS),
                request::headers(contains(("x-correlation-id", "corr-2"))),
            ])
            .respond_with(json_encoded(envelope(json!([{"script": "a"}, {"script": "b"}])))),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", format!("{SCRIPTS}/a")))
                .respond_with(json_encoded(envelope(json!({"id": "a"})))),
        );

        let client = test_client(&server).await?;
        let names = client
            .list_edge_functions_actions()
            .set_x_correlation_id("corr-2")
            .send()
            .await?
            .into_body()
            .result
            .unwrap_or_default()
            .into_iter()
            .map(|a| a.script)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a", "b"]);
        let deleted = client.delete_edge_functions_action("a").send().await?;
        assert_eq!(deleted.into_body().result.map(|r| r.id), Some("a".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn triggers() -> Result<()> {
        let route = format!("{ROUTES}/route-1");
        let trigger = json!({
            "id": "route-1",
            "pattern": "example.com/images/*",
            "script": "my-action",
            "request_limit_fail_open": true
        });
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", ROUTES),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "pattern": "example.com/images/*",
                    "script": "my-action"
                })))),
            ])
            .respond_with(json_encoded(envelope(json!({"id": "route-1"})))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", ROUTES))
                .respond_with(json_encoded(envelope(json!([trigger.clone()])))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", route.clone()))
                .respond_with(json_encoded(envelope(trigger.clone()))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", route.clone()),
                request::body(json_decoded(eq(json!({"script": "other-action"})))),
            ])
            .respond_with(json_encoded(envelope(trigger))),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", route))
                .respond_with(json_encoded(envelope(json!({"id": "route-1"})))),
        );

        let client = test_client(&server).await?;
        let created = client
            .create_edge_functions_trigger()
            .set_pattern("example.com/images/*")
            .set_script("my-action")
            .send()
            .await?
            .into_body();
        assert_eq!(created.result.map(|r| r.id), Some("route-1".to_string()));

        let list = client.list_edge_functions_triggers().send().await?.into_body();
        let list = list.result.unwrap_or_default();
        assert!(list[0].request_limit_fail_open);

        let response = client.get_edge_functions_trigger("route-1").send().await?;
        assert_eq!(response.status(), 200);
        let response = client
            .update_edge_functions_trigger("route-1")
            .set_script("other-action")
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        let response = client.delete_edge_functions_trigger("route-1").send().await?;
        assert_eq!(response.status(), 200);
        Ok(())
    }

    #[tokio::test]
    async fn content_type_override() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", format!("{SCRIPTS}/my-action")),
                request::headers(contains(("content-type", "text/javascript"))),
            ])
            .respond_with(json_encoded(envelope(json!({"script": "my-action"})))),
        );

        let client = test_client(&server).await?;
        let response = client
            .update_edge_functions_action("my-action")
            .set_edge_functions_action(SCRIPT)
            .with_header(CONTENT_TYPE, HeaderValue::from_static("text/javascript"))
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        Ok(())
    }
}
