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

/// Implements a [FirewallRules](super::stub::FirewallRules) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct FirewallRules<T>
where
    T: super::stub::FirewallRules + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> FirewallRules<T>
where
    T: super::stub::FirewallRules + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::FirewallRules for FirewallRules<T>
where
    T: super::stub::FirewallRules + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "debug", ret)]
    async fn list_all_firewall_rules(
        &self,
        req: crate::model::ListAllFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>> {
        self.inner.list_all_firewall_rules(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_firewall_rules(
        &self,
        req: crate::model::CreateFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>> {
        self.inner.create_firewall_rules(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_firewall_rules(
        &self,
        req: crate::model::UpdateFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>> {
        self.inner.update_firewall_rules(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_firewall_rules(
        &self,
        req: crate::model::DeleteFirewallRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::DeletedFirewallRule>>>,
    > {
        self.inner.delete_firewall_rules(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_firewall_rule(
        &self,
        req: crate::model::GetFirewallRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::FirewallRule>>> {
        self.inner.get_firewall_rule(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_firewall_rule(
        &self,
        req: crate::model::UpdateFirewallRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::FirewallRule>>> {
        self.inner.update_firewall_rule(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_firewall_rule(
        &self,
        req: crate::model::DeleteFirewallRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::DeletedFirewallRule>>,
    > {
        self.inner.delete_firewall_rule(req, options).await
    }
}
