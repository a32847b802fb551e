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

//! Verify the firewall rules operations send the expected requests.

#[cfg(test)]
mod tests {
    use auth::credentials::bearer_token;
    use gax::options::RequestOptionsBuilder;
    use http::HeaderValue;
    use http::header::ACCEPT;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use ibm_cloud_networking_firewall_rules_v1::client::FirewallRules;
    use ibm_cloud_networking_firewall_rules_v1::model::{
        FilterReference, FirewallRuleInput, FirewallRuleUpdate, action, direction,
    };
    use ibm_cloud_networking_firewall_rules_v1::{DEFAULT_SERVICE_URL, model};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    const CRN: &str = "test-crn";
    const ZONE: &str = "test-zone";
    const RULES: &str = "/v1/test-crn/zones/test-zone/firewall/rules";
    const TOKEN: &str = "user-token";

    async fn test_client(server: &Server) -> Result<FirewallRules> {
        let client = FirewallRules::builder(CRN, ZONE)
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(bearer_token::Builder::new("test-token").build()?)
            .build()
            .await?;
        Ok(client)
    }

    fn rule(id: &str, action: &str) -> serde_json::Value {
        json!({
            "id": id,
            "paused": false,
            "description": "test rule",
            "action": action,
            "filter": {
                "id": "filter-1",
                "paused": false,
                "description": "test filter",
                "expression": "ip.src eq 93.184.216.0"
            },
            "created_on": "2025-01-01T00:00:00Z",
            "modified_on": "2025-01-01T00:00:00Z"
        })
    }

    fn envelope(result: serde_json::Value) -> serde_json::Value {
        json!({"success": true, "errors": [], "messages": [], "result": result})
    }

    #[tokio::test]
    async fn list_all_firewall_rules() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", RULES),
                request::headers(contains(("x-auth-user-token", TOKEN))),
                request::headers(contains(("accept", "application/json"))),
                request::query(url_decoded(contains(("action", "block")))),
                request::query(url_decoded(contains(("page", "2")))),
                request::query(url_decoded(contains(("per_page", "5")))),
                request::query(url_decoded(contains(("direction", "desc")))),
                request::query(url_decoded(contains(("match", "any")))),
                request::query(url_decoded(not(contains(key("description"))))),
                request::query(url_decoded(not(contains(key("order"))))),
            ])
            .respond_with(json_encoded(json!({
                "success": true,
                "errors": [],
                "messages": [],
                "result": [rule("rule-1", "block")],
                "result_info": {"page": 2, "per_page": 5, "count": 1, "total_count": 6}
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .list_all_firewall_rules()
            .set_x_auth_user_token(TOKEN)
            .set_action(action::BLOCK)
            .set_page(2)
            .set_per_page(5)
            .set_direction(direction::DESC)
            .set_match(model::r#match::ANY)
            .send()
            .await?;
        assert_eq!(response.status(), http::StatusCode::OK);
        let envelope = response.into_body();
        let rules = envelope.result.unwrap_or_default();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].id, "rule-1");
        assert_eq!(
            rules[0].filter.as_ref().map(|f| f.expression.as_str()),
            Some("ip.src eq 93.184.216.0")
        );
        assert!(envelope.result_info.is_some(), "{:?}", envelope.result_info);
        Ok(())
    }

    #[tokio::test]
    async fn create_firewall_rules() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", RULES),
                request::headers(contains(("x-auth-user-token", TOKEN))),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!([
                    {"filter": {"id": "filter-1"}, "action": "block", "description": "test rule"},
                    {"filter": {"id": "filter-2"}, "action": "log", "paused": true, "priority": 10}
                ])))),
            ])
            .respond_with(json_encoded(envelope(json!([
                rule("rule-1", "block"),
                rule("rule-2", "log")
            ])))),
        );

        let client = test_client(&server).await?;
        let rules = client
            .create_firewall_rules()
            .set_x_auth_user_token(TOKEN)
            .set_firewall_rules([
                FirewallRuleInput::new()
                    .set_filter(FilterReference::new().set_id("filter-1"))
                    .set_action(action::BLOCK)
                    .set_description("test rule"),
                FirewallRuleInput::new()
                    .set_filter(FilterReference::new().set_id("filter-2"))
                    .set_action(action::LOG)
                    .set_paused(true)
                    .set_priority(10),
            ])
            .send()
            .await?
            .into_body()
            .result
            .unwrap_or_default();
        let ids = rules.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["rule-1", "rule-2"]);
        Ok(())
    }

    #[tokio::test]
    async fn update_firewall_rules() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", RULES),
                request::body(json_decoded(eq(json!([
                    {"id": "rule-1", "paused": true},
                    {"id": "rule-2", "action": "challenge", "filter": {"id": "filter-2"}}
                ])))),
            ])
            .respond_with(json_encoded(envelope(json!([
                rule("rule-1", "block"),
                rule("rule-2", "challenge")
            ])))),
        );

        let client = test_client(&server).await?;
        let response = client
            .update_firewall_rules()
            .set_x_auth_user_token(TOKEN)
            .set_firewall_rules([
                FirewallRuleUpdate::new().set_id("rule-1").set_paused(true),
                FirewallRuleUpdate::new()
                    .set_id("rule-2")
                    .set_action(action::CHALLENGE)
                    .set_filter(FilterReference::new().set_id("filter-2")),
            ])
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        Ok(())
    }

    #[tokio::test]
    async fn delete_firewall_rules() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", RULES),
                request::query(url_decoded(contains(("id", "rule-1,rule-2")))),
                request::headers(contains(("x-auth-user-token", TOKEN))),
            ])
            .respond_with(json_encoded(envelope(json!([{"id": "rule-1"}, {"id": "rule-2"}])))),
        );

        let client = test_client(&server).await?;
        let deleted = client
            .delete_firewall_rules()
            .set_x_auth_user_token(TOKEN)
            .set_id("rule-1,rule-2")
            .send()
            .await?
            .into_body()
            .result
            .unwrap_or_default();
        assert_eq!(deleted.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn single_rule() -> Result<()> {
        let path = format!("{RULES}/rule-1");
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", path.clone()),
                request::headers(contains(("x-auth-user-token", TOKEN))),
            ])
            .respond_with(json_encoded(envelope(rule("rule-1", "block")))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", path.clone()),
                request::body(json_decoded(eq(json!({
                    "action": "js_challenge",
                    "description": "updated",
                    "filter": {"id": "filter-1"}
                })))),
            ])
            .respond_with(json_encoded(envelope(rule("rule-1", "js_challenge")))),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", path))
                .respond_with(json_encoded(envelope(json!({"id": "rule-1"})))),
        );

        let client = test_client(&server).await?;
        let got = client
            .get_firewall_rule("rule-1")
            .set_x_auth_user_token(TOKEN)
            .send()
            .await?
            .into_body();
        assert_eq!(got.result.map(|r| r.action), Some("block".to_string()));

        let got = client
            .update_firewall_rule("rule-1")
            .set_x_auth_user_token(TOKEN)
            .set_action(action::JS_CHALLENGE)
            .set_description("updated")
            .set_filter(FilterReference::new().set_id("filter-1"))
            .send()
            .await?
            .into_body();
        assert_eq!(got.result.map(|r| r.action), Some("js_challenge".to_string()));

        let got = client
            .delete_firewall_rule("rule-1")
            .set_x_auth_user_token(TOKEN)
            .send()
            .await?
            .into_body();
        assert_eq!(got.result.map(|r| r.id), Some("rule-1".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn missing_parameters() -> Result<()> {
        // No expectations, any request fails the test.
        let server = Server::run();
        let client = test_client(&server).await?;

        let err = client.get_firewall_rule("").send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(
            err.to_string().contains(
                "Missing required parameters: x_auth_user_token, firewall_rule_identifier"
            ),
            "{err}"
        );

        let err = client
            .create_firewall_rules()
            .set_x_auth_user_token(TOKEN)
            .send()
            .await
            .unwrap_err();
        assert!(
            err.to_string()
                .contains("Missing required parameters: firewall_rules"),
            "{err}"
        );

        let err = client
            .delete_firewall_rules()
            .set_x_auth_user_token(TOKEN)
            .send()
            .await
            .unwrap_err();
        assert!(
            err.to_string().contains("Missing required parameters: id"),
            "{err}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn header_overrides() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", RULES),
                request::headers(contains(("accept", "text/plain"))),
                request::headers(contains(("x-auth-user-token", "override-token"))),
            ])
            .respond_with(json_encoded(envelope(json!([])))),
        );

        let client = test_client(&server).await?;
        let response = client
            .list_all_firewall_rules()
            .set_x_auth_user_token(TOKEN)
            .with_header(ACCEPT, HeaderValue::from_static("text/plain"))
            .with_header("x-auth-user-token", HeaderValue::from_static("override-token"))
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        Ok(())
    }

    #[test]
    fn token_is_censored() {
        let request = model::GetFirewallRuleRequest::new()
            .set_x_auth_user_token("super-secret")
            .set_firewall_rule_identifier("rule-1");
        let got = format!("{request:?}");
        assert!(!got.contains("super-secret"), "{got}");
        assert!(got.contains("rule-1"), "{got}");
    }

    #[tokio::test]
    async fn service_url() -> Result<()> {
        let credentials = bearer_token::Builder::new("test-token").build()?;
        let client = FirewallRules::new(CRN, ZONE, credentials)?;
        assert_eq!(client.service_url(), DEFAULT_SERVICE_URL);

        let server = Server::run();
        let client = test_client(&server).await?;
        assert_eq!(client.service_url(), format!("http://{}", server.addr()));
        Ok(())
    }

    #[tokio::test]
    async fn retry_toggle_does_not_change_requests() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", RULES),
                request::query(url_decoded(contains(("id", "rule-1")))),
                request::headers(contains(("x-auth-user-token", TOKEN))),
            ])
            .times(3)
            .respond_with(json_encoded(envelope(json!([{"id": "rule-1"}])))),
        );

        let client = test_client(&server).await?;
        let send = || {
            client
                .delete_firewall_rules()
                .set_x_auth_user_token(TOKEN)
                .set_id("rule-1")
                .send()
        };
        let before = send().await?.into_body();
        client.enable_retries(Some(1), None);
        let enabled = send().await?.into_body();
        client.disable_retries();
        let after = send().await?.into_body();
        assert_eq!(before, enabled);
        assert_eq!(before, after);
        Ok(())
    }
}
