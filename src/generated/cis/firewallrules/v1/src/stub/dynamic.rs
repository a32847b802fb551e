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

/// A dyn-compatible, crate-private version of [super::FirewallRules].
#[async_trait::async_trait]
pub trait FirewallRules: std::fmt::Debug + Send + Sync {
    async fn list_all_firewall_rules(
        &self,
        req: crate::model::ListAllFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>>;

    async fn create_firewall_rules(
        &self,
        req: crate::model::CreateFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>>;

    async fn update_firewall_rules(
        &self,
        req: crate::model::UpdateFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>>;

    async fn delete_firewall_rules(
        &self,
        req: crate::model::DeleteFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::DeletedFirewallRule>>>>;

    async fn get_firewall_rule(
        &self,
        req: crate::model::GetFirewallRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::FirewallRule>>>;

    async fn update_firewall_rule(
        &self,
        req: crate::model::UpdateFirewallRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::FirewallRule>>>;

    async fn delete_firewall_rule(
        &self,
        req: crate::model::DeleteFirewallRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::DeletedFirewallRule>>>;
}

/// All implementations of [super::FirewallRules] also implement [FirewallRules].
#[async_trait::async_trait]
impl<T: super::FirewallRules> FirewallRules for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_all_firewall_rules(
        &self,
        req: crate::model::ListAllFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>,
    > {
        T::list_all_firewall_rules(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_firewall_rules(
        &self,
        req: crate::model::CreateFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>,
    > {
        T::create_firewall_rules(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_firewall_rules(
        &self,
        req: crate::model::UpdateFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>,
    > {
        T::update_firewall_rules(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_firewall_rules(
        &self,
        req: crate::model::DeleteFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::DeletedFirewallRule>>>,
    > {
        T::delete_firewall_rules(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_firewall_rule(
        &self,
        req: crate::model::GetFirewallRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::FirewallRule>>,
    > {
        T::get_firewall_rule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_firewall_rule(
        &self,
        req: crate::model::UpdateFirewallRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::FirewallRule>>,
    > {
        T::update_firewall_rule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_firewall_rule(
        &self,
        req: crate::model::DeleteFirewallRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::DeletedFirewallRule>>,
    > {
        T::delete_firewall_rule(self, req, options).await
    }
}
