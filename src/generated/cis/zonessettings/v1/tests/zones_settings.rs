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

//! Verify the zones settings operations send the expected requests.

#[cfg(test)]
mod tests {
    use auth::credentials::bearer_token;
    use gax::options::RequestOptionsBuilder;
    use http::HeaderValue;
    use http::header::{ACCEPT, CONTENT_TYPE};
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    use ibm_cloud_networking_zones_settings_v1::model::{
        MinifyValue, SecurityHeaderValue, StrictTransportSecurity, dnssec_status, min_tls_version,
        toggle,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    const CRN: &str = "test-crn";
    const ZONE: &str = "test-zone";

    async fn test_client(server: &Server) -> Result<ZonesSettings> {
        let client = ZonesSettings::builder(CRN, ZONE)
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(bearer_token::Builder::new("test-token").build()?)
            .build()
            .await?;
        Ok(client)
    }

    fn setting(id: &str, value: serde_json::Value) -> serde_json::Value {
        json!({
            "success": true,
            "errors": [],
            "messages": [],
            "result": {"id": id, "value": value, "editable": true, "modified_on": "2025-01-01T00:00:00Z"}
        })
    }

    #[tokio::test]
    async fn get_zone_dnssec() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/test-crn/zones/test-zone/dnssec"),
                request::headers(contains(("accept", "application/json"))),
                request::headers(contains(("authorization", "Bearer test-token"))),
            ])
            .respond_with(json_encoded(json!({
                "success": true,
                "errors": [],
                "messages": [],
                "result": {"status": "active", "flags": 257, "algorithm": "13", "key_tag": 42}
            }))),
        );

        let client = test_client(&server).await?;
        let response = client.get_zone_dnssec().send().await?;
        assert_eq!(response.status(), 200);
        assert_eq!(response.status_text(), "OK");
        let envelope = response.into_body();
        assert!(envelope.success);
        let result = envelope.result.unwrap_or_default();
        assert_eq!(result.status, dnssec_status::ACTIVE);
        assert_eq!(result.flags, 257);
        assert_eq!(result.key_tag, 42);
        Ok(())
    }

    #[tokio::test]
    async fn update_zone_dnssec() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/v1/test-crn/zones/test-zone/dnssec"),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({"status": "disabled"})))),
            ])
            .respond_with(json_encoded(json!({
                "success": true, "errors": [], "messages": [],
                "result": {"status": "disabled"}
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .update_zone_dnssec()
            .set_status(dnssec_status::DISABLED)
            .send()
            .await?;
        let result = response.into_body().result.unwrap_or_default();
        assert_eq!(result.status, "disabled");
        Ok(())
    }

    #[tokio::test]
    async fn unset_fields_are_omitted() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/v1/test-crn/zones/test-zone/dnssec"),
                request::body(json_decoded(eq(json!({})))),
            ])
            .respond_with(json_encoded(json!({"success": true, "result": {}}))),
        );

        let client = test_client(&server).await?;
        let response = client.update_zone_dnssec().send().await?;
        assert_eq!(response.status(), 200);
        Ok(())
    }

    #[tokio::test]
    async fn string_settings() -> Result<()> {
        let server = Server::run();
        for (path, value) in [
            ("cname_flattening", "flatten_all"),
            ("opportunistic_encryption", "off"),
            ("automatic_https_rewrites", "on"),
            ("min_tls_version", "1.3"),
        ] {
            let full = format!("/v1/test-crn/zones/test-zone/settings/{path}");
            server.expect(
                Expectation::matching(request::method_path("GET", full.clone()))
                    .respond_with(json_encoded(setting(path, json!("off")))),
            );
            server.expect(
                Expectation::matching(all_of![
                    request::method_path("PATCH", full),
                    request::body(json_decoded(eq(json!({"value": value})))),
                ])
                .respond_with(json_encoded(setting(path, json!(value)))),
            );
        }

        let client = test_client(&server).await?;
        let got = client.get_zone_cname_flattening().send().await?.into_body();
        assert_eq!(got.result.map(|s| s.id), Some("cname_flattening".to_string()));
        let got = client
            .update_zone_cname_flattening()
            .set_value("flatten_all")
            .send()
            .await?
            .into_body();
        assert_eq!(got.result.map(|s| s.value), Some("flatten_all".to_string()));

        let response = client.get_opportunistic_encryption().send().await?;
        assert_eq!(response.status(), 200);
        let response = client
            .update_opportunistic_encryption()
            .set_value(toggle::OFF)
            .send()
            .await?;
        assert_eq!(response.status(), 200);

        let response = client.get_automatic_https_rewrites().send().await?;
        assert_eq!(response.status(), 200);
        let response = client
            .update_automatic_https_rewrites()
            .set_value(toggle::ON)
            .send()
            .await?;
        assert_eq!(response.status(), 200);

        let response = client.get_min_tls_version().send().await?;
        assert_eq!(response.status(), 200);
        let got = client
            .update_min_tls_version()
            .set_value(min_tls_version::TLS_1_3)
            .send()
            .await?
            .into_body();
        assert_eq!(got.result.map(|s| s.value), Some("1.3".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn challenge_ttl() -> Result<()> {
        let server = Server::run();
        let path = "/v1/test-crn/zones/test-zone/settings/challenge_ttl";
        server.expect(
            Expectation::matching(request::method_path("GET", path))
                .respond_with(json_encoded(setting("challenge_ttl", json!(1800)))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", path),
                request::body(json_decoded(eq(json!({"value": 3600})))),
            ])
            .respond_with(json_encoded(setting("challenge_ttl", json!(3600)))),
        );

        let client = test_client(&server).await?;
        let got = client.get_challenge_ttl().send().await?.into_body();
        assert_eq!(got.result.map(|s| s.value), Some(1800));
        let got = client
            .update_challenge_ttl()
            .set_value(3600)
            .send()
            .await?
            .into_body();
        assert_eq!(got.result.map(|s| s.value), Some(3600));
        Ok(())
    }

    #[tokio::test]
    async fn ciphers() -> Result<()> {
        let server = Server::run();
        let path = "/v1/test-crn/zones/test-zone/settings/ciphers";
        let ciphers = ["ECDHE-RSA-AES128-GCM-SHA256", "AES128-SHA"];
        server.expect(
            Expectation::matching(request::method_path("GET", path))
                .respond_with(json_encoded(setting("ciphers", json!([])))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", path),
                request::body(json_decoded(eq(json!({"value": ciphers})))),
            ])
            .respond_with(json_encoded(setting("ciphers", json!(ciphers)))),
        );

        let client = test_client(&server).await?;
        let got = client.get_ciphers().send().await?.into_body();
        assert_eq!(got.result.map(|s| s.value), Some(Vec::new()));
        let got = client
            .update_ciphers()
            .set_value(ciphers)
            .send()
            .await?
            .into_body();
        assert_eq!(
            got.result.map(|s| s.value),
            Some(ciphers.map(str::to_string).to_vec())
        );
        Ok(())
    }

    #[tokio::test]
    async fn security_header() -> Result<()> {
        let server = Server::run();
        let path = "/v1/test-crn/zones/test-zone/settings/security_header";
        let value = json!({"strict_transport_security": {
            "enabled": true, "max_age": 86400, "include_subdomains": true, "nosniff": true
        }});
        server.expect(
            Expectation::matching(request::method_path("GET", path))
                .respond_with(json_encoded(setting("security_header", value.clone()))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", path),
                request::body(json_decoded(eq(json!({"value": value})))),
            ])
            .respond_with(json_encoded(setting("security_header", value.clone()))),
        );

        let client = test_client(&server).await?;
        let got = client.get_security_header().send().await?.into_body();
        let hsts = got
            .result
            .and_then(|s| s.value.strict_transport_security)
            .unwrap_or_default();
        assert_eq!(hsts.max_age, Some(86400));

        let hsts = StrictTransportSecurity::new()
            .set_enabled(true)
            .set_max_age(86400)
            .set_include_subdomains(true)
            .set_nosniff(true);
        let response = client
            .update_security_header()
            .set_value(SecurityHeaderValue::new().set_strict_transport_security(hsts))
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        Ok(())
    }

    #[tokio::test]
    async fn minify() -> Result<()> {
        let server = Server::run();
        let path = "/v1/test-crn/zones/test-zone/settings/minify";
        server.expect(
            Expectation::matching(request::method_path("GET", path)).respond_with(json_encoded(
                setting("minify", json!({"css": "on", "html": "off", "js": "off"})),
            )),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", path),
                request::body(json_decoded(eq(json!({"value": {"css": "off", "js": "on"}})))),
            ])
            .respond_with(json_encoded(setting(
                "minify",
                json!({"css": "off", "html": "off", "js": "on"}),
            ))),
        );

        let client = test_client(&server).await?;
        let got = client.get_minify().send().await?.into_body();
        let value = got.result.map(|s| s.value).unwrap_or_default();
        assert_eq!(value.css.as_deref(), Some("on"));
        let response = client
            .update_minify()
            .set_value(MinifyValue::new().set_css(toggle::OFF).set_js(toggle::ON))
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        Ok(())
    }

    #[tokio::test]
    async fn identity_is_encoded() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/crn%3Av1%3Abluemix%3Apublic%3Ainternet-svcs%3Aglobal%3Aa%2F123%3A%3A/zones/zone%201/settings/minify",
            ))
            .respond_with(json_encoded(setting("minify", json!({})))),
        );
        let client = ZonesSettings::builder(
            "crn:v1:bluemix:public:internet-svcs:global:a/123::",
            "zone 1",
        )
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(bearer_token::Builder::new("test-token").build()?)
        .build()
        .await?;
        let got = client.get_minify().send().await?.into_body();
        assert_eq!(got.result.map(|s| s.id), Some("minify".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn header_overrides() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/v1/test-crn/zones/test-zone/settings/min_tls_version"),
                request::headers(contains(("accept", "application/vnd.test+json"))),
                request::headers(contains(("content-type", "application/merge-patch+json"))),
                request::headers(contains(("x-correlation-id", "abc-123"))),
            ])
            .respond_with(json_encoded(setting("min_tls_version", json!("1.2")))),
        );

        let client = test_client(&server).await?;
        let response = client
            .update_min_tls_version()
            .set_value(min_tls_version::TLS_1_2)
            .with_header(ACCEPT, HeaderValue::from_static("application/vnd.test+json"))
            .with_header(
                CONTENT_TYPE,
                HeaderValue::from_static("application/merge-patch+json"),
            )
            .with_header("x-correlation-id", HeaderValue::from_static("abc-123"))
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        let got = response.into_body();
        assert!(got.success, "{got:?}");
        assert_eq!(got.result.map(|s| s.value), Some("1.2".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/test-crn/zones/test-zone/dnssec",
            ))
            .respond_with(
                status_code(403)
                    .insert_header("content-type", "application/json")
                    .body(
                        json!({
                            "success": false,
                            "errors": [{"code": 10000, "message": "Authentication error"}],
                            "messages": [],
                            "result": null
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let err = client.get_zone_dnssec().send().await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(403), "{err:?}");
        assert_eq!(err.http_status_text(), Some("Forbidden"), "{err:?}");
        let envelope = err.envelope().expect("error envelope");
        assert_eq!(envelope.success, Some(false));
        assert_eq!(envelope.errors.len(), 1, "{envelope:?}");
        Ok(())
    }

    #[tokio::test]
    async fn unsuccessful_envelope_is_returned() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/test-crn/zones/test-zone/settings/ciphers",
            ))
            .respond_with(json_encoded(json!({
                "success": false,
                "errors": [[1001, "partial failure"]],
                "messages": []
            }))),
        );

        let client = test_client(&server).await?;
        let envelope = client.get_ciphers().send().await?.into_body();
        assert!(!envelope.success);
        assert_eq!(envelope.errors, vec![json!([1001, "partial failure"])]);
        assert_eq!(envelope.result, None);
        Ok(())
    }

    #[tokio::test]
    async fn retry_toggle_does_not_change_requests() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/v1/test-crn/zones/test-zone/settings/min_tls_version"),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({"value": "1.2"})))),
            ])
            .times(2)
            .respond_with(json_encoded(setting("min_tls_version", json!("1.2")))),
        );

        let client = test_client(&server).await?;
        let first = client
            .update_min_tls_version()
            .set_value("1.2")
            .send()
            .await?
            .into_body();
        client.enable_retries(None, None);
        assert!(client.retries_enabled());
        client.disable_retries();
        assert!(!client.retries_enabled());
        let second = client
            .update_min_tls_version()
            .set_value("1.2")
            .send()
            .await?
            .into_body();
        assert_eq!(first, second);
        Ok(())
    }

    #[tokio::test]
    async fn enabled_retries() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/test-crn/zones/test-zone/settings/minify",
            ))
            .times(2)
            .respond_with(cycle(vec![
                Box::new(status_code(503)),
                Box::new(json_encoded(setting("minify", json!({"css": "on"})))),
            ])),
        );

        let client = test_client(&server).await?;
        let clone = client.clone();
        clone.enable_retries(Some(2), Some(Duration::from_millis(10)));
        assert!(client.retries_enabled());
        let got = client.get_minify().send().await?.into_body();
        assert!(got.success);
        Ok(())
    }

    #[tokio::test]
    async fn with_tracing() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/test-crn/zones/test-zone/settings/ciphers",
            ))
            .respond_with(json_encoded(setting("ciphers", json!(["AES128-SHA"])))),
        );

        let client = ZonesSettings::builder(CRN, ZONE)
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(bearer_token::Builder::new("test-token").build()?)
            .with_tracing()
            .build()
            .await?;
        let got = client.get_ciphers().send().await?.into_body();
        assert_eq!(got.result.map(|s| s.value), Some(vec!["AES128-SHA".to_string()]));
        Ok(())
    }
}
