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

use crate::Result;
use gaxi::http::{Body, ReqwestClient};
use reqwest::Method;

/// Implements [FirewallRules](super::stub::FirewallRules) using a [ReqwestClient].
#[derive(Clone)]
pub struct FirewallRules {
    inner: ReqwestClient,
    identity: crate::client::Identity,
}

impl std::fmt::Debug for FirewallRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("FirewallRules")
            .field("inner", &self.inner)
            .field("identity", &self.identity)
            .finish()
    }
}

impl FirewallRules {
    pub fn new(
        config: gaxi::options::ClientConfig,
        identity: crate::client::Identity,
    ) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(
            config,
            &crate::info::CLIENT_INFO,
            crate::DEFAULT_SERVICE_URL,
            crate::DEFAULT_SERVICE_NAME,
        )?;
        Ok(Self { inner, identity })
    }

    pub(crate) fn service_url(&self) -> &str {
        self.inner.endpoint()
    }

    pub(crate) fn retry_switch(&self) -> gax::retry_policy::RetrySwitch {
        self.inner.retry_switch().clone()
    }
}

impl super::stub::FirewallRules for FirewallRules {
    async fn list_all_firewall_rules(
        &self,
        req: crate::model::ListAllFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("x_auth_user_token", &req.x_auth_user_token)])?;
        let path = format!(
            "/v1/{}/zones/{}/firewall/rules",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = req.description.add(builder, "description");
        let builder = req.action.add(builder, "action");
        let builder = req.page.add(builder, "page");
        let builder = req.per_page.add(builder, "per_page");
        let builder = req.order.add(builder, "order");
        let builder = req.direction.add(builder, "direction");
        let builder = req.r#match.add(builder, "match");
        let builder = builder.header("X-Auth-User-Token", &req.x_auth_user_token);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn create_firewall_rules(
        &self,
        req: crate::model::CreateFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        gax::path_parameter::validate(&[
            ("x_auth_user_token", &req.x_auth_user_token),
            ("firewall_rules", &req.firewall_rules),
        ])?;
        let body = Body::json(&req.firewall_rules)?;
        let path = format!(
            "/v1/{}/zones/{}/firewall/rules",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::POST, path);
        let builder = builder.header("X-Auth-User-Token", &req.x_auth_user_token);
        self.inner.execute(builder, body, options).await
    }

    async fn update_firewall_rules(
        &self,
        req: crate::model::UpdateFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PUT),
        );
        gax::path_parameter::validate(&[
            ("x_auth_user_token", &req.x_auth_user_token),
            ("firewall_rules", &req.firewall_rules),
        ])?;
        let body = Body::json(&req.firewall_rules)?;
        let path = format!(
            "/v1/{}/zones/{}/firewall/rules",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::PUT, path);
        let builder = builder.header("X-Auth-User-Token", &req.x_auth_user_token);
        self.inner.execute(builder, body, options).await
    }

    async fn delete_firewall_rules(
        &self,
        req: crate::model::DeleteFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::DeletedFirewallRule>>>,
    > {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::DELETE),
        );
        gax::path_parameter::validate(&[
            ("x_auth_user_token", &req.x_auth_user_token),
            ("id", &req.id),
        ])?;
        let path = format!(
            "/v1/{}/zones/{}/firewall/rules",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = req.id.add(builder, "id");
        let builder = builder.header("X-Auth-User-Token", &req.x_auth_user_token);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn get_firewall_rule(
        &self,
        req: crate::model::GetFirewallRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::FirewallRule>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[
            ("x_auth_user_token", &req.x_auth_user_token),
            ("firewall_rule_identifier", &req.firewall_rule_identifier),
        ])?;
        let path = format!(
            "/v1/{}/zones/{}/firewall/rules/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
            gaxi::path_parameter::encode(&req.firewall_rule_identifier),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = builder.header("X-Auth-User-Token", &req.x_auth_user_token);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_firewall_rule(
        &self,
        req: crate::model::UpdateFirewallRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::FirewallRule>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PUT),
        );
        gax::path_parameter::validate(&[
            ("x_auth_user_token", &req.x_auth_user_token),
            ("firewall_rule_identifier", &req.firewall_rule_identifier),
        ])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/firewall/rules/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
            gaxi::path_parameter::encode(&req.firewall_rule_identifier),
        );
        let builder = self.inner.builder(Method::PUT, path);
        let builder = builder.header("X-Auth-User-Token", &req.x_auth_user_token);
        self.inner.execute(builder, body, options).await
    }

    async fn delete_firewall_rule(
        &self,
        req: crate::model::DeleteFirewallRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::DeletedFirewallRule>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::DELETE),
        );
        gax::path_parameter::validate(&[
            ("x_auth_user_token", &req.x_auth_user_token),
            ("firewall_rule_identifier", &req.firewall_rule_identifier),
        ])?;
        let path = format!(
            "/v1/{}/zones/{}/firewall/rules/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
            gaxi::path_parameter::encode(&req.firewall_rule_identifier),
        );
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = builder.header("X-Auth-User-Token", &req.x_auth_user_token);
        self.inner.execute(builder, Body::Empty, options).await
    }
}
