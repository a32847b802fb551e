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

//! The types used by the firewall rules operations.

/// The values for [FirewallRule::action] and the request fields naming an
/// action.
pub mod action {
    pub const LOG: &str = "log";
    pub const ALLOW: &str = "allow";
    pub const CHALLENGE: &str = "challenge";
    pub const JS_CHALLENGE: &str = "js_challenge";
    pub const BLOCK: &str = "block";
}

/// The values for [ListAllFirewallRulesRequest::order].
pub mod order {
    pub const ACTION: &str = "action";
    pub const DESCRIPTION: &str = "description";
}

/// The values for [ListAllFirewallRulesRequest::direction].
pub mod direction {
    pub const ASC: &str = "asc";
    pub const DESC: &str = "desc";
}

/// The values for [match][ListAllFirewallRulesRequest::r#match].
pub mod r#match {
    /// All the filters must match.
    pub const ALL: &str = "all";
    /// Any of the filters may match.
    pub const ANY: &str = "any";
}

/// A firewall rule.
///
/// Rules combine a filter, identified by its id, with the action taken on the
/// requests matching the filter.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FirewallRule {
    /// The firewall rule identifier.
    pub id: String,

    /// Whether the rule is paused.
    pub paused: bool,

    /// A description of the rule.
    pub description: String,

    /// One of the values in [action].
    pub action: String,

    /// The rule priority, lower values take precedence.
    pub priority: Option<i64>,

    /// The filter used by the rule.
    pub filter: Option<FirewallRuleFilter>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<String>,

    /// When the rule was created, in RFC 3339 format.
    pub created_on: Option<String>,

    /// When the rule was last changed, in RFC 3339 format.
    pub modified_on: Option<String>,
}

impl FirewallRule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][FirewallRule::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [paused][FirewallRule::paused].
    pub fn set_paused<T: Into<bool>>(mut self, v: T) -> Self {
        self.paused = v.into();
        self
    }

    /// Sets the value of [description][FirewallRule::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [action][FirewallRule::action].
    pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
        self.action = v.into();
        self
    }

    /// Sets the value of [priority][FirewallRule::priority].
    pub fn set_priority<T: Into<i64>>(mut self, v: T) -> Self {
        self.priority = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [priority][FirewallRule::priority].
    pub fn set_or_clear_priority<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.priority = v.map(|x| x.into());
        self
    }

    /// Sets the value of [filter][FirewallRule::filter].
    pub fn set_filter<T: Into<FirewallRuleFilter>>(mut self, v: T) -> Self {
        self.filter = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][FirewallRule::filter].
    pub fn set_or_clear_filter<T: Into<FirewallRuleFilter>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [products][FirewallRule::products].
    pub fn set_products<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.products = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [created_on][FirewallRule::created_on].
    pub fn set_created_on<T: Into<String>>(mut self, v: T) -> Self {
        self.created_on = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_on][FirewallRule::created_on].
    pub fn set_or_clear_created_on<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.created_on = v.map(|x| x.into());
        self
    }

    /// Sets the value of [modified_on][FirewallRule::modified_on].
    pub fn set_modified_on<T: Into<String>>(mut self, v: T) -> Self {
        self.modified_on = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [modified_on][FirewallRule::modified_on].
    pub fn set_or_clear_modified_on<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.modified_on = v.map(|x| x.into());
        self
    }
}

/// The filter of a [FirewallRule].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FirewallRuleFilter {
    /// The filter identifier.
    pub id: String,

    pub paused: bool,

    pub description: String,

    /// The filter expression, for example `ip.src eq 93.184.216.0`.
    pub expression: String,
}

impl FirewallRuleFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][FirewallRuleFilter::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [paused][FirewallRuleFilter::paused].
    pub fn set_paused<T: Into<bool>>(mut self, v: T) -> Self {
        self.paused = v.into();
        self
    }

    /// Sets the value of [description][FirewallRuleFilter::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [expression][FirewallRuleFilter::expression].
    pub fn set_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.expression = v.into();
        self
    }
}

/// A reference to an existing filter.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FilterReference {
    /// The filter identifier.
    pub id: String,
}

impl FilterReference {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][FilterReference::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// A firewall rule to create.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FirewallRuleInput {
    /// The filter used by the rule.
    pub filter: Option<FilterReference>,

    /// One of the values in [action].
    pub action: Option<String>,

    pub description: Option<String>,

    pub paused: Option<bool>,

    pub priority: Option<i64>,

    /// Products to bypass with the `bypass` action.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<String>,
}

impl FirewallRuleInput {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [filter][FirewallRuleInput::filter].
    pub fn set_filter<T: Into<FilterReference>>(mut self, v: T) -> Self {
        self.filter = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][FirewallRuleInput::filter].
    pub fn set_or_clear_filter<T: Into<FilterReference>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [action][FirewallRuleInput::action].
    pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
        self.action = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [action][FirewallRuleInput::action].
    pub fn set_or_clear_action<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.action = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][FirewallRuleInput::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][FirewallRuleInput::description].
    pub fn set_or_clear_description<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [paused][FirewallRuleInput::paused].
    pub fn set_paused<T: Into<bool>>(mut self, v: T) -> Self {
        self.paused = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [paused][FirewallRuleInput::paused].
    pub fn set_or_clear_paused<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.paused = v.map(|x| x.into());
        self
    }

    /// Sets the value of [priority][FirewallRuleInput::priority].
    pub fn set_priority<T: Into<i64>>(mut self, v: T) -> Self {
        self.priority = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [priority][FirewallRuleInput::priority].
    pub fn set_or_clear_priority<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.priority = v.map(|x| x.into());
        self
    }

    /// Sets the value of [products][FirewallRuleInput::products].
    pub fn set_products<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.products = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A change to an existing firewall rule, used by batch updates.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FirewallRuleUpdate {
    /// The identifier of the rule to change.
    pub id: String,

    pub filter: Option<FilterReference>,

    /// One of the values in [action].
    pub action: Option<String>,

    pub description: Option<String>,

    pub paused: Option<bool>,

    pub priority: Option<i64>,
}

impl FirewallRuleUpdate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][FirewallRuleUpdate::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [filter][FirewallRuleUpdate::filter].
    pub fn set_filter<T: Into<FilterReference>>(mut self, v: T) -> Self {
        self.filter = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][FirewallRuleUpdate::filter].
    pub fn set_or_clear_filter<T: Into<FilterReference>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [action][FirewallRuleUpdate::action].
    pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
        self.action = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [action][FirewallRuleUpdate::action].
    pub fn set_or_clear_action<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.action = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][FirewallRuleUpdate::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][FirewallRuleUpdate::description].
    pub fn set_or_clear_description<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [paused][FirewallRuleUpdate::paused].
    pub fn set_paused<T: Into<bool>>(mut self, v: T) -> Self {
        self.paused = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [paused][FirewallRuleUpdate::paused].
    pub fn set_or_clear_paused<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.paused = v.map(|x| x.into());
        self
    }

    /// Sets the value of [priority][FirewallRuleUpdate::priority].
    pub fn set_priority<T: Into<i64>>(mut self, v: T) -> Self {
        self.priority = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [priority][FirewallRuleUpdate::priority].
    pub fn set_or_clear_priority<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.priority = v.map(|x| x.into());
        self
    }
}

/// The identifier of a deleted firewall rule.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeletedFirewallRule {
    pub id: String,
}

impl DeletedFirewallRule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][DeletedFirewallRule::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [list_all_firewall_rules][crate::client::FirewallRules::list_all_firewall_rules].
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAllFirewallRulesRequest {
    /// The IBM Cloud user access token, sent in the `X-Auth-User-Token` header.
    ///
    /// This is a **required** field for requests.
    pub x_auth_user_token: String,

    /// Only return rules whose description contains this value.
    pub description: Option<String>,

    /// Only return rules with this action, one of the values in [action][crate::model::action].
    pub action: Option<String>,

    /// The page number, starting at 1.
    pub page: Option<i64>,

    /// The number of rules per page.
    pub per_page: Option<i64>,

    /// The field used to sort the rules, one of the values in [order][crate::model::order].
    pub order: Option<String>,

    /// The sort direction, one of the values in [direction][crate::model::direction].
    pub direction: Option<String>,

    /// Whether all or any of the filters must match, one of the values in [match][crate::model::r#match].
    pub r#match: Option<String>,
}

impl ListAllFirewallRulesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [x_auth_user_token][ListAllFirewallRulesRequest::x_auth_user_token].
    pub fn set_x_auth_user_token<T: Into<String>>(mut self, v: T) -> Self {
        self.x_auth_user_token = v.into();
        self
    }

    /// Sets the value of [description][ListAllFirewallRulesRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][ListAllFirewallRulesRequest::description].
    pub fn set_or_clear_description<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [action][ListAllFirewallRulesRequest::action].
    pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
        self.action = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [action][ListAllFirewallRulesRequest::action].
    pub fn set_or_clear_action<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.action = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][ListAllFirewallRulesRequest::page].
    pub fn set_page<T: Into<i64>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][ListAllFirewallRulesRequest::page].
    pub fn set_or_clear_page<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [per_page][ListAllFirewallRulesRequest::per_page].
    pub fn set_per_page<T: Into<i64>>(mut self, v: T) -> Self {
        self.per_page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [per_page][ListAllFirewallRulesRequest::per_page].
    pub fn set_or_clear_per_page<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.per_page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [order][ListAllFirewallRulesRequest::order].
    pub fn set_order<T: Into<String>>(mut self, v: T) -> Self {
        self.order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [order][ListAllFirewallRulesRequest::order].
    pub fn set_or_clear_order<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [direction][ListAllFirewallRulesRequest::direction].
    pub fn set_direction<T: Into<String>>(mut self, v: T) -> Self {
        self.direction = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [direction][ListAllFirewallRulesRequest::direction].
    pub fn set_or_clear_direction<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.direction = v.map(|x| x.into());
        self
    }

    /// Sets the value of [match][ListAllFirewallRulesRequest::r#match].
    pub fn set_match<T: Into<String>>(mut self, v: T) -> Self {
        self.r#match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [match][ListAllFirewallRulesRequest::r#match].
    pub fn set_or_clear_match<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.r#match = v.map(|x| x.into());
        self
    }
}

impl std::fmt::Debug for ListAllFirewallRulesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListAllFirewallRulesRequest")
            .field("x_auth_user_token", &"[censored]")
            .field("description", &self.description)
            .field("action", &self.action)
            .field("page", &self.page)
            .field("per_page", &self.per_page)
            .field("order", &self.order)
            .field("direction", &self.direction)
            .field("match", &self.r#match)
            .finish()
    }
}

/// The request for [create_firewall_rules][crate::client::FirewallRules::create_firewall_rules].
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateFirewallRulesRequest {
    /// The IBM Cloud user access token, sent in the `X-Auth-User-Token` header.
    ///
    /// This is a **required** field for requests.
    pub x_auth_user_token: String,

    /// The rules to create. They are sent as the request body.
    ///
    /// This is a **required** field for requests.
    pub firewall_rules: Vec<FirewallRuleInput>,
}

impl CreateFirewallRulesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [x_auth_user_token][CreateFirewallRulesRequest::x_auth_user_token].
    pub fn set_x_auth_user_token<T: Into<String>>(mut self, v: T) -> Self {
        self.x_auth_user_token = v.into();
        self
    }

    /// Sets the value of [firewall_rules][CreateFirewallRulesRequest::firewall_rules].
    pub fn set_firewall_rules<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<FirewallRuleInput>,
    {
        self.firewall_rules = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl std::fmt::Debug for CreateFirewallRulesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateFirewallRulesRequest")
            .field("x_auth_user_token", &"[censored]")
            .field("firewall_rules", &self.firewall_rules)
            .finish()
    }
}

/// The request for [update_firewall_rules][crate::client::FirewallRules::update_firewall_rules].
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateFirewallRulesRequest {
    /// The IBM Cloud user access token, sent in the `X-Auth-User-Token` header.
    ///
    /// This is a **required** field for requests.
    pub x_auth_user_token: String,

    /// The changes. They are sent as the request body.
    ///
    /// This is a **required** field for requests.
    pub firewall_rules: Vec<FirewallRuleUpdate>,
}

impl UpdateFirewallRulesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [x_auth_user_token][UpdateFirewallRulesRequest::x_auth_user_token].
    pub fn set_x_auth_user_token<T: Into<String>>(mut self, v: T) -> Self {
        self.x_auth_user_token = v.into();
        self
    }

    /// Sets the value of [firewall_rules][UpdateFirewallRulesRequest::firewall_rules].
    pub fn set_firewall_rules<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<FirewallRuleUpdate>,
    {
        self.firewall_rules = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl std::fmt::Debug for UpdateFirewallRulesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateFirewallRulesRequest")
            .field("x_auth_user_token", &"[censored]")
            .field("firewall_rules", &self.firewall_rules)
            .finish()
    }
}

/// The request for [delete_firewall_rules][crate::client::FirewallRules::delete_firewall_rules].
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteFirewallRulesRequest {
    /// The IBM Cloud user access token, sent in the `X-Auth-User-Token` header.
    ///
    /// This is a **required** field for requests.
    pub x_auth_user_token: String,

    /// The identifiers of the rules to delete, separated by commas.
    ///
    /// This is a **required** field for requests.
    pub id: String,
}

impl DeleteFirewallRulesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [x_auth_user_token][DeleteFirewallRulesRequest::x_auth_user_token].
    pub fn set_x_auth_user_token<T: Into<String>>(mut self, v: T) -> Self {
        self.x_auth_user_token = v.into();
        self
    }

    /// Sets the value of [id][DeleteFirewallRulesRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

impl std::fmt::Debug for DeleteFirewallRulesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeleteFirewallRulesRequest")
            .field("x_auth_user_token", &"[censored]")
            .field("id", &self.id)
            .finish()
    }
}

/// The request for [get_firewall_rule][crate::client::FirewallRules::get_firewall_rule].
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct GetFirewallRuleRequest {
    /// The IBM Cloud user access token, sent in the `X-Auth-User-Token` header.
    ///
    /// This is a **required** field for requests.
    pub x_auth_user_token: String,

    /// The firewall rule identifier.
    ///
    /// This is a **required** field for requests.
    pub firewall_rule_identifier: String,
}

impl GetFirewallRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [x_auth_user_token][GetFirewallRuleRequest::x_auth_user_token].
    pub fn set_x_auth_user_token<T: Into<String>>(mut self, v: T) -> Self {
        self.x_auth_user_token = v.into();
        self
    }

    /// Sets the value of [firewall_rule_identifier][GetFirewallRuleRequest::firewall_rule_identifier].
    pub fn set_firewall_rule_identifier<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_rule_identifier = v.into();
        self
    }
}

impl std::fmt::Debug for GetFirewallRuleRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetFirewallRuleRequest")
            .field("x_auth_user_token", &"[censored]")
            .field("firewall_rule_identifier", &self.firewall_rule_identifier)
            .finish()
    }
}

/// The request for [update_firewall_rule][crate::client::FirewallRules::update_firewall_rule].
#[serde_with::skip_serializing_none]
#[derive(Clone, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateFirewallRuleRequest {
    /// The IBM Cloud user access token, sent in the `X-Auth-User-Token` header.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub x_auth_user_token: String,

    /// The firewall rule identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub firewall_rule_identifier: String,

    /// The new action, one of the values in [action][crate::model::action].
    pub action: Option<String>,

    /// Pauses or resumes the rule.
    pub paused: Option<bool>,

    /// The new description.
    pub description: Option<String>,

    /// The new filter.
    pub filter: Option<FilterReference>,

    /// The new priority.
    pub priority: Option<i64>,
}

impl UpdateFirewallRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [x_auth_user_token][UpdateFirewallRuleRequest::x_auth_user_token].
    pub fn set_x_auth_user_token<T: Into<String>>(mut self, v: T) -> Self {
        self.x_auth_user_token = v.into();
        self
    }

    /// Sets the value of [firewall_rule_identifier][UpdateFirewallRuleRequest::firewall_rule_identifier].
    pub fn set_firewall_rule_identifier<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_rule_identifier = v.into();
        self
    }

    /// Sets the value of [action][UpdateFirewallRuleRequest::action].
    pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
        self.action = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [action][UpdateFirewallRuleRequest::action].
    pub fn set_or_clear_action<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.action = v.map(|x| x.into());
        self
    }

    /// Sets the value of [paused][UpdateFirewallRuleRequest::paused].
    pub fn set_paused<T: Into<bool>>(mut self, v: T) -> Self {
        self.paused = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [paused][UpdateFirewallRuleRequest::paused].
    pub fn set_or_clear_paused<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.paused = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][UpdateFirewallRuleRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][UpdateFirewallRuleRequest::description].
    pub fn set_or_clear_description<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [filter][UpdateFirewallRuleRequest::filter].
    pub fn set_filter<T: Into<FilterReference>>(mut self, v: T) -> Self {
        self.filter = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][UpdateFirewallRuleRequest::filter].
    pub fn set_or_clear_filter<T: Into<FilterReference>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [priority][UpdateFirewallRuleRequest::priority].
    pub fn set_priority<T: Into<i64>>(mut self, v: T) -> Self {
        self.priority = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [priority][UpdateFirewallRuleRequest::priority].
    pub fn set_or_clear_priority<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.priority = v.map(|x| x.into());
        self
    }
}

impl std::fmt::Debug for UpdateFirewallRuleRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateFirewallRuleRequest")
            .field("x_auth_user_token", &"[censored]")
            .field("firewall_rule_identifier", &self.firewall_rule_identifier)
            .field("action", &self.action)
            .field("paused", &self.paused)
            .field("description", &self.description)
            .field("filter", &self.filter)
            .field("priority", &self.priority)
            .finish()
    }
}

/// The request for [delete_firewall_rule][crate::client::FirewallRules::delete_firewall_rule].
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteFirewallRuleRequest {
    /// The IBM Cloud user access token, sent in the `X-Auth-User-Token` header.
    ///
    /// This is a **required** field for requests.
    pub x_auth_user_token: String,

    /// The firewall rule identifier.
    ///
    /// This is a **required** field for requests.
    pub firewall_rule_identifier: String,
}

impl DeleteFirewallRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [x_auth_user_token][DeleteFirewallRuleRequest::x_auth_user_token].
    pub fn set_x_auth_user_token<T: Into<String>>(mut self, v: T) -> Self {
        self.x_auth_user_token = v.into();
        self
    }

    /// Sets the value of [firewall_rule_identifier][DeleteFirewallRuleRequest::firewall_rule_identifier].
    pub fn set_firewall_rule_identifier<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_rule_identifier = v.into();
        self
    }
}

impl std::fmt::Debug for DeleteFirewallRuleRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeleteFirewallRuleRequest")
            .field("x_auth_user_token", &"[censored]")
            .field("firewall_rule_identifier", &self.firewall_rule_identifier)
            .finish()
    }
}
