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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::FirewallRules].
///
/// Application developers may need to implement this trait to mock
/// `client::FirewallRules`.  In other use-cases, application developers only
/// use `client::FirewallRules` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait FirewallRules: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::FirewallRules::list_all_firewall_rules].
    fn list_all_firewall_rules(
        &self,
        _req: crate::model::ListAllFirewallRulesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::FirewallRules::create_firewall_rules].
    fn create_firewall_rules(
        &self,
        _req: crate::model::CreateFirewallRulesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::FirewallRules::update_firewall_rules].
    fn update_firewall_rules(
        &self,
        _req: crate::model::UpdateFirewallRulesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::FirewallRules::delete_firewall_rules].
    fn delete_firewall_rules(
        &self,
        _req: crate::model::DeleteFirewallRulesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::DeletedFirewallRule>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::FirewallRules::get_firewall_rule].
    fn get_firewall_rule(
        &self,
        _req: crate::model::GetFirewallRuleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::FirewallRule>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::FirewallRules::update_firewall_rule].
    fn update_firewall_rule(
        &self,
        _req: crate::model::UpdateFirewallRuleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::FirewallRule>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::FirewallRules::delete_firewall_rule].
    fn delete_firewall_rule(
        &self,
        _req: crate::model::DeleteFirewallRuleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::DeletedFirewallRule>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
