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

//! Verify the mTLS operations send the expected requests.

#[cfg(test)]
mod tests {
    use auth::credentials::bearer_token;
    use gax::options::RequestOptionsBuilder;
    use http::HeaderValue;
    use http::header::{ACCEPT, CONTENT_TYPE};
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use ibm_cloud_networking_mtls_v1::client::Mtls;
    use ibm_cloud_networking_mtls_v1::model::{
        AccessCertSettingsInput, PolicyCnRule, PolicyRule, decision,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    const ACCESS: &str = "/v1/test-crn/zones/test-zone/access";

    async fn test_client(server: &Server) -> Result<Mtls> {
        let client = Mtls::builder("test-crn")
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
    async fn certificates() -> Result<()> {
        let certs = format!("{ACCESS}/certificates");
        let cert = format!("{certs}/cert-1");
        let body = json!({
            "id": "cert-1",
            "name": "my-ca",
            "fingerprint": "MD5 Fingerprint=FF:FF",
            "associated_hostnames": ["app.example.com"],
            "expires_on": "2030-01-01T00:00:00Z"
        });
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", certs.clone()))
                .respond_with(json_encoded(envelope(json!([body.clone()])))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", certs),
                request::body(json_decoded(eq(json!({
                    "name": "my-ca",
                    "certificate": "-----BEGIN CERTIFICATE-----",
                    "associated_hostnames": ["app.example.com"]
                })))),
            ])
            .respond_with(json_encoded(envelope(body.clone()))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", cert.clone()))
                .respond_with(json_encoded(envelope(body.clone()))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", cert.clone()),
                request::body(json_decoded(eq(json!({"name": "renamed"})))),
            ])
            .respond_with(json_encoded(envelope(body))),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", cert))
                .respond_with(json_encoded(envelope(json!({"id": "cert-1"})))),
        );

        let client = test_client(&server).await?;
        let list = client.list_access_certificates("test-zone").send().await?;
        assert_eq!(list.into_body().result.map(|v| v.len()), Some(1));

        let created = client
            .create_access_certificate("test-zone")
            .set_name("my-ca")
            .set_certificate("-----BEGIN CERTIFICATE-----")
            .set_associated_hostnames(["app.example.com"])
            .send()
            .await?
            .into_body()
            .result
            .unwrap_or_default();
        assert_eq!(created.associated_hostnames, vec!["app.example.com"]);
        assert_eq!(created.expires_on.as_deref(), Some("2030-01-01T00:00:00Z"));

        let response = client
            .get_access_certificate("test-zone", "cert-1")
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        let response = client
            .update_access_certificate("test-zone", "cert-1")
            .set_name("renamed")
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        let deleted = client
            .delete_access_certificate("test-zone", "cert-1")
            .send()
            .await?
            .into_body();
        assert_eq!(deleted.result.map(|d| d.id), Some("cert-1".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn certificate_settings() -> Result<()> {
        let path = format!("{ACCESS}/certificates/settings");
        let settings = json!([{
            "hostname": "app.example.com",
            "china_network": false,
            "client_certificate_forwarding": true
        }]);
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", path.clone()))
                .respond_with(json_encoded(envelope(settings.clone()))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", path),
                request::body(json_decoded(eq(json!({
                    "settings": [{"hostname": "app.example.com", "client_certificate_forwarding": true}]
                })))),
            ])
            .respond_with(json_encoded(envelope(settings))),
        );

        let client = test_client(&server).await?;
        let got = client
            .list_access_certificates_settings("test-zone")
            .send()
            .await?
            .into_body()
            .result
            .unwrap_or_default();
        assert!(got[0].client_certificate_forwarding);
        let response = client
            .update_access_certificates_settings("test-zone")
            .set_settings([AccessCertSettingsInput::new()
                .set_hostname("app.example.com")
                .set_client_certificate_forwarding(true)])
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        Ok(())
    }

    #[tokio::test]
    async fn applications() -> Result<()> {
        let apps = format!("{ACCESS}/apps");
        let app = format!("{apps}/app-1");
        let body = json!({
            "id": "app-1",
            "name": "my-app",
            "domain": "app.example.com",
            "aud": "aud-tag",
            "session_duration": "24h",
            "type": "self_hosted"
        });
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", apps.clone()),
                request::body(json_decoded(eq(json!({
                    "name": "my-app",
                    "domain": "app.example.com",
                    "session_duration": "24h"
                })))),
            ])
            .respond_with(json_encoded(envelope(body.clone()))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", apps))
                .respond_with(json_encoded(envelope(json!([body.clone()])))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", app.clone()))
                .respond_with(json_encoded(envelope(body.clone()))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", app.clone()),
                request::body(json_decoded(eq(json!({"session_duration": "12h"})))),
            ])
            .respond_with(json_encoded(envelope(body))),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", app))
                .respond_with(json_encoded(envelope(json!({"id": "app-1"})))),
        );

        let client = test_client(&server).await?;
        let created = client
            .create_access_application("test-zone")
            .set_name("my-app")
            .set_domain("app.example.com")
            .set_session_duration("24h")
            .send()
            .await?
            .into_body()
            .result
            .unwrap_or_default();
        assert_eq!(created.r#type, "self_hosted");
        assert_eq!(created.aud, "aud-tag");

        let list = client.list_access_applications("test-zone").send().await?;
        assert_eq!(list.into_body().result.map(|v| v.len()), Some(1));
        let response = client
            .get_access_application("test-zone", "app-1")
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        let response = client
            .update_access_application("test-zone", "app-1")
            .set_session_duration("12h")
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        let response = client
            .delete_access_application("test-zone", "app-1")
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        Ok(())
    }

    #[tokio::test]
    async fn policies() -> Result<()> {
        let policies = format!("{ACCESS}/apps/app-1/policies");
        let policy = format!("{policies}/policy-1");
        let body = json!({
            "id": "policy-1",
            "name": "my-policy",
            "decision": "non_identity",
            "include": [{"common_name": {"common_name": "client.example.com"}}],
            "precedence": 1
        });
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", policies.clone()),
                request::body(json_decoded(eq(json!({
                    "name": "my-policy",
                    "decision": "non_identity",
                    "include": [{"common_name": {"common_name": "client.example.com"}}]
                })))),
            ])
            .respond_with(json_encoded(envelope(body.clone()))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", policies))
                .respond_with(json_encoded(envelope(json!([body.clone()])))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", policy.clone()))
                .respond_with(json_encoded(envelope(body.clone()))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", policy.clone()),
                request::body(json_decoded(eq(json!({
                    "decision": "allow",
                    "include": [{"certificate": {}}]
                })))),
            ])
            .respond_with(json_encoded(envelope(body))),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", policy))
                .respond_with(json_encoded(envelope(json!({"id": "policy-1"})))),
        );

        let client = test_client(&server).await?;
        let created = client
            .create_access_policy("test-zone", "app-1")
            .set_name("my-policy")
            .set_decision(decision::NON_IDENTITY)
            .set_include([PolicyRule::new()
                .set_common_name(PolicyCnRule::new().set_common_name("client.example.com"))])
            .send()
            .await?
            .into_body()
            .result
            .unwrap_or_default();
        assert_eq!(created.precedence, 1);
        assert_eq!(
            created.include[0].common_name.as_ref().map(|c| c.common_name.as_str()),
            Some("client.example.com")
        );

        let response = client
            .list_access_policies("test-zone", "app-1")
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        let response = client
            .get_access_policy("test-zone", "app-1", "policy-1")
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        let response = client
            .update_access_policy("test-zone", "app-1", "policy-1")
            .set_decision(decision::ALLOW)
            .set_include([PolicyRule::new().set_certificate(json!({}))])
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        let response = client
            .delete_access_policy("test-zone", "app-1", "policy-1")
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        Ok(())
    }

    #[tokio::test]
    async fn missing_parameters() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;

        let err = client
            .get_access_policy("", "app-1", "")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(
            err.to_string()
                .contains("Missing required parameters: zone_id, policy_id"),
            "{err}"
        );

        let err = client
            .update_access_certificates_settings("test-zone")
            .send()
            .await
            .unwrap_err();
        assert!(
            err.to_string()
                .contains("Missing required parameters: settings"),
            "{err}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn header_overrides() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("{ACCESS}/apps")),
                request::headers(contains(("accept", "application/vnd.test+json"))),
                request::headers(contains(("content-type", "application/vnd.test+json"))),
            ])
            .respond_with(json_encoded(envelope(json!({"id": "app-1"})))),
        );

        let client = test_client(&server).await?;
        let response = client
            .create_access_application("test-zone")
            .set_name("my-app")
            .with_header(ACCEPT, HeaderValue::from_static("application/vnd.test+json"))
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/vnd.test+json"))
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        Ok(())
    }

    #[tokio::test]
    async fn zone_is_encoded() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/test-crn/zones/zone%2F1/access/apps",
            ))
            .respond_with(json_encoded(envelope(json!([])))),
        );

        let client = test_client(&server).await?;
        let response = client.list_access_applications("zone/1").send().await?;
        assert_eq!(response.status(), 200);
        Ok(())
    }
}
