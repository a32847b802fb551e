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

//! The types used by the transit gateway operations.

/// The values for the `network_type` fields.
pub mod network_type {
    pub const CLASSIC: &str = "classic";
    pub const DIRECTLINK: &str = "directlink";
    /// A GRE tunnel over a `classic` connection.
    pub const GRE_TUNNEL: &str = "gre_tunnel";
    /// A GRE tunnel not bound to a single zone.
    pub const UNBOUND_GRE_TUNNEL: &str = "unbound_gre_tunnel";
    pub const POWER_VIRTUAL_SERVER: &str = "power_virtual_server";
    pub const VPC: &str = "vpc";
}

/// The values for [CreateTransitGatewayConnectionActionsRequest::action].
pub mod connection_action {
    pub const APPROVE: &str = "approve";
    pub const REJECT: &str = "reject";
}

/// The values for the `prefix_filters_default` fields.
pub mod prefix_filter_action {
    pub const PERMIT: &str = "permit";
    pub const DENY: &str = "deny";
}

/// A transit gateway.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TransitGateway {
    /// The transit gateway identifier.
    pub id: String,

    pub crn: String,

    pub name: String,

    /// The location of the transit gateway, for example `us-south`.
    pub location: String,

    /// Whether the gateway routes traffic between regions.
    pub global: bool,

    pub status: String,

    pub resource_group: Option<ResourceGroupReference>,

    pub created_at: String,

    pub updated_at: Option<String>,
}

impl TransitGateway {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][TransitGateway::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [crn][TransitGateway::crn].
    pub fn set_crn<T: Into<String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [name][TransitGateway::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [location][TransitGateway::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = v.into();
        self
    }

    /// Sets the value of [global][TransitGateway::global].
    pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
        self.global = v.into();
        self
    }

    /// Sets the value of [status][TransitGateway::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [resource_group][TransitGateway::resource_group].
    pub fn set_resource_group<T: Into<ResourceGroupReference>>(mut self, v: T) -> Self {
        self.resource_group = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_group][TransitGateway::resource_group].
    pub fn set_or_clear_resource_group<T: Into<ResourceGroupReference>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.resource_group = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_at][TransitGateway::created_at].
    pub fn set_created_at<T: Into<String>>(mut self, v: T) -> Self {
        self.created_at = v.into();
        self
    }

    /// Sets the value of [updated_at][TransitGateway::updated_at].
    pub fn set_updated_at<T: Into<String>>(mut self, v: T) -> Self {
        self.updated_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [updated_at][TransitGateway::updated_at].
    pub fn set_or_clear_updated_at<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.updated_at = v.map(|x| x.into());
        self
    }
}

/// A page of transit gateways.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TransitGatewayCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transit_gateways: Vec<TransitGateway>,

    /// A link to the first page.
    pub first: Option<PaginationLink>,

    /// A link to the next page, absent in the last page.
    pub next: Option<PaginationNext>,

    pub limit: i64,
}

impl TransitGatewayCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [transit_gateways][TransitGatewayCollection::transit_gateways].
    pub fn set_transit_gateways<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<TransitGateway>,
    {
        self.transit_gateways = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [first][TransitGatewayCollection::first].
    pub fn set_first<T: Into<PaginationLink>>(mut self, v: T) -> Self {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][TransitGatewayCollection::first].
    pub fn set_or_clear_first<T: Into<PaginationLink>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][TransitGatewayCollection::next].
    pub fn set_next<T: Into<PaginationNext>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][TransitGatewayCollection::next].
    pub fn set_or_clear_next<T: Into<PaginationNext>>(mut self, v: std::option::Option<T>) -> Self {
        self.next = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][TransitGatewayCollection::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = v.into();
        self
    }
}

/// A reference to a resource group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResourceGroupReference {
    pub id: String,

    pub href: Option<String>,
}

impl ResourceGroupReference {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][ResourceGroupReference::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [href][ResourceGroupReference::href].
    pub fn set_href<T: Into<String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][ResourceGroupReference::href].
    pub fn set_or_clear_href<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.href = v.map(|x| x.into());
        self
    }
}

/// Identifies a resource group in requests.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResourceGroupIdentity {
    pub id: String,
}

impl ResourceGroupIdentity {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][ResourceGroupIdentity::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// A reference to an availability zone.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ZoneReference {
    /// The zone name, for example `us-south-1`.
    pub name: String,
}

impl ZoneReference {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][ZoneReference::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// A reference to a transit gateway.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TransitGatewayReference {
    pub id: String,

    pub crn: String,

    pub name: String,
}

impl TransitGatewayReference {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][TransitGatewayReference::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [crn][TransitGatewayReference::crn].
    pub fn set_crn<T: Into<String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [name][TransitGatewayReference::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// A connection of a transit gateway, as returned when listing the
/// connections in the account.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TransitConnection {
    /// The connection identifier.
    pub id: String,

    pub name: String,

    /// One of the values in [network_type].
    pub network_type: String,

    /// The CRN of the connected network, absent for some network types.
    pub network_id: Option<String>,

    /// The account of the connected network, for cross account connections.
    pub network_account_id: Option<String>,

    pub status: String,

    /// The status of a cross account connection request.
    pub request_status: Option<String>,

    /// One of the values in [prefix_filter_action].
    pub prefix_filters_default: Option<String>,

    /// The underlying connection of `gre_tunnel` connections.
    pub base_connection_id: Option<String>,

    pub base_network_type: Option<String>,

    pub local_tunnel_ip: Option<String>,

    pub remote_tunnel_ip: Option<String>,

    pub remote_gateway_ip: Option<String>,

    pub remote_bgp_asn: Option<i64>,

    pub mtu: Option<i64>,

    /// The location of `gre_tunnel` connections.
    pub zone: Option<ZoneReference>,

    pub created_at: String,

    pub updated_at: Option<String>,

    /// The transit gateway of the connection.
    pub transit_gateway: Option<TransitGatewayReference>,
}

impl TransitConnection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][TransitConnection::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][TransitConnection::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [network_type][TransitConnection::network_type].
    pub fn set_network_type<T: Into<String>>(mut self, v: T) -> Self {
        self.network_type = v.into();
        self
    }

    /// Sets the value of [network_id][TransitConnection::network_id].
    pub fn set_network_id<T: Into<String>>(mut self, v: T) -> Self {
        self.network_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_id][TransitConnection::network_id].
    pub fn set_or_clear_network_id<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.network_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_account_id][TransitConnection::network_account_id].
    pub fn set_network_account_id<T: Into<String>>(mut self, v: T) -> Self {
        self.network_account_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_account_id][TransitConnection::network_account_id].
    pub fn set_or_clear_network_account_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.network_account_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][TransitConnection::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [request_status][TransitConnection::request_status].
    pub fn set_request_status<T: Into<String>>(mut self, v: T) -> Self {
        self.request_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_status][TransitConnection::request_status].
    pub fn set_or_clear_request_status<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.request_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [prefix_filters_default][TransitConnection::prefix_filters_default].
    pub fn set_prefix_filters_default<T: Into<String>>(mut self, v: T) -> Self {
        self.prefix_filters_default = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [prefix_filters_default][TransitConnection::prefix_filters_default].
    pub fn set_or_clear_prefix_filters_default<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.prefix_filters_default = v.map(|x| x.into());
        self
    }

    /// Sets the value of [base_connection_id][TransitConnection::base_connection_id].
    pub fn set_base_connection_id<T: Into<String>>(mut self, v: T) -> Self {
        self.base_connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [base_connection_id][TransitConnection::base_connection_id].
    pub fn set_or_clear_base_connection_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.base_connection_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [base_network_type][TransitConnection::base_network_type].
    pub fn set_base_network_type<T: Into<String>>(mut self, v: T) -> Self {
        self.base_network_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [base_network_type][TransitConnection::base_network_type].
    pub fn set_or_clear_base_network_type<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.base_network_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [local_tunnel_ip][TransitConnection::local_tunnel_ip].
    pub fn set_local_tunnel_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.local_tunnel_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [local_tunnel_ip][TransitConnection::local_tunnel_ip].
    pub fn set_or_clear_local_tunnel_ip<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.local_tunnel_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [remote_tunnel_ip][TransitConnection::remote_tunnel_ip].
    pub fn set_remote_tunnel_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.remote_tunnel_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [remote_tunnel_ip][TransitConnection::remote_tunnel_ip].
    pub fn set_or_clear_remote_tunnel_ip<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.remote_tunnel_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [remote_gateway_ip][TransitConnection::remote_gateway_ip].
    pub fn set_remote_gateway_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.remote_gateway_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [remote_gateway_ip][TransitConnection::remote_gateway_ip].
    pub fn set_or_clear_remote_gateway_ip<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.remote_gateway_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [remote_bgp_asn][TransitConnection::remote_bgp_asn].
    pub fn set_remote_bgp_asn<T: Into<i64>>(mut self, v: T) -> Self {
        self.remote_bgp_asn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [remote_bgp_asn][TransitConnection::remote_bgp_asn].
    pub fn set_or_clear_remote_bgp_asn<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.remote_bgp_asn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [mtu][TransitConnection::mtu].
    pub fn set_mtu<T: Into<i64>>(mut self, v: T) -> Self {
        self.mtu = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [mtu][TransitConnection::mtu].
    pub fn set_or_clear_mtu<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.mtu = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zone][TransitConnection::zone].
    pub fn set_zone<T: Into<ZoneReference>>(mut self, v: T) -> Self {
        self.zone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [zone][TransitConnection::zone].
    pub fn set_or_clear_zone<T: Into<ZoneReference>>(mut self, v: std::option::Option<T>) -> Self {
        self.zone = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_at][TransitConnection::created_at].
    pub fn set_created_at<T: Into<String>>(mut self, v: T) -> Self {
        self.created_at = v.into();
        self
    }

    /// Sets the value of [updated_at][TransitConnection::updated_at].
    pub fn set_updated_at<T: Into<String>>(mut self, v: T) -> Self {
        self.updated_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [updated_at][TransitConnection::updated_at].
    pub fn set_or_clear_updated_at<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.updated_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [transit_gateway][TransitConnection::transit_gateway].
    pub fn set_transit_gateway<T: Into<TransitGatewayReference>>(mut self, v: T) -> Self {
        self.transit_gateway = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [transit_gateway][TransitConnection::transit_gateway].
    pub fn set_or_clear_transit_gateway<T: Into<TransitGatewayReference>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.transit_gateway = v.map(|x| x.into());
        self
    }
}

/// A page of connections in the account.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TransitConnectionCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<TransitConnection>,

    pub first: Option<PaginationLink>,

    pub next: Option<PaginationNext>,

    pub limit: i64,
}

impl TransitConnectionCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [connections][TransitConnectionCollection::connections].
    pub fn set_connections<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<TransitConnection>,
    {
        self.connections = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [first][TransitConnectionCollection::first].
    pub fn set_first<T: Into<PaginationLink>>(mut self, v: T) -> Self {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][TransitConnectionCollection::first].
    pub fn set_or_clear_first<T: Into<PaginationLink>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][TransitConnectionCollection::next].
    pub fn set_next<T: Into<PaginationNext>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][TransitConnectionCollection::next].
    pub fn set_or_clear_next<T: Into<PaginationNext>>(mut self, v: std::option::Option<T>) -> Self {
        self.next = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][TransitConnectionCollection::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = v.into();
        self
    }
}

/// A connection of a transit gateway.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TransitGatewayConnection {
    /// The connection identifier.
    pub id: String,

    pub name: String,

    /// One of the values in [network_type].
    pub network_type: String,

    /// The CRN of the connected network, absent for some network types.
    pub network_id: Option<String>,

    /// The account of the connected network, for cross account connections.
    pub network_account_id: Option<String>,

    pub status: String,

    /// The status of a cross account connection request.
    pub request_status: Option<String>,

    /// One of the values in [prefix_filter_action].
    pub prefix_filters_default: Option<String>,

    /// The underlying connection of `gre_tunnel` connections.
    pub base_connection_id: Option<String>,

    pub base_network_type: Option<String>,

    pub local_tunnel_ip: Option<String>,

    pub remote_tunnel_ip: Option<String>,

    pub remote_gateway_ip: Option<String>,

    pub remote_bgp_asn: Option<i64>,

    pub mtu: Option<i64>,

    /// The location of `gre_tunnel` connections.
    pub zone: Option<ZoneReference>,

    pub created_at: String,

    pub updated_at: Option<String>,

    /// The prefix filters, applied in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prefix_filters: Vec<serde_json::Value>,
}

impl TransitGatewayConnection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][TransitGatewayConnection::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][TransitGatewayConnection::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [network_type][TransitGatewayConnection::network_type].
    pub fn set_network_type<T: Into<String>>(mut self, v: T) -> Self {
        self.network_type = v.into();
        self
    }

    /// Sets the value of [network_id][TransitGatewayConnection::network_id].
    pub fn set_network_id<T: Into<String>>(mut self, v: T) -> Self {
        self.network_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_id][TransitGatewayConnection::network_id].
    pub fn set_or_clear_network_id<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.network_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_account_id][TransitGatewayConnection::network_account_id].
    pub fn set_network_account_id<T: Into<String>>(mut self, v: T) -> Self {
        self.network_account_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_account_id][TransitGatewayConnection::network_account_id].
    pub fn set_or_clear_network_account_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.network_account_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][TransitGatewayConnection::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [request_status][TransitGatewayConnection::request_status].
    pub fn set_request_status<T: Into<String>>(mut self, v: T) -> Self {
        self.request_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_status][TransitGatewayConnection::request_status].
    pub fn set_or_clear_request_status<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.request_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [prefix_filters_default][TransitGatewayConnection::prefix_filters_default].
    pub fn set_prefix_filters_default<T: Into<String>>(mut self, v: T) -> Self {
        self.prefix_filters_default = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [prefix_filters_default][TransitGatewayConnection::prefix_filters_default].
    pub fn set_or_clear_prefix_filters_default<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.prefix_filters_default = v.map(|x| x.into());
        self
    }

    /// Sets the value of [base_connection_id][TransitGatewayConnection::base_connection_id].
    pub fn set_base_connection_id<T: Into<String>>(mut self, v: T) -> Self {
        self.base_connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [base_connection_id][TransitGatewayConnection::base_connection_id].
    pub fn set_or_clear_base_connection_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.base_connection_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [base_network_type][TransitGatewayConnection::base_network_type].
    pub fn set_base_network_type<T: Into<String>>(mut self, v: T) -> Self {
        self.base_network_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [base_network_type][TransitGatewayConnection::base_network_type].
    pub fn set_or_clear_base_network_type<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.base_network_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [local_tunnel_ip][TransitGatewayConnection::local_tunnel_ip].
    pub fn set_local_tunnel_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.local_tunnel_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [local_tunnel_ip][TransitGatewayConnection::local_tunnel_ip].
    pub fn set_or_clear_local_tunnel_ip<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.local_tunnel_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [remote_tunnel_ip][TransitGatewayConnection::remote_tunnel_ip].
    pub fn set_remote_tunnel_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.remote_tunnel_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [remote_tunnel_ip][TransitGatewayConnection::remote_tunnel_ip].
    pub fn set_or_clear_remote_tunnel_ip<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.remote_tunnel_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [remote_gateway_ip][TransitGatewayConnection::remote_gateway_ip].
    pub fn set_remote_gateway_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.remote_gateway_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [remote_gateway_ip][TransitGatewayConnection::remote_gateway_ip].
    pub fn set_or_clear_remote_gateway_ip<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.remote_gateway_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [remote_bgp_asn][TransitGatewayConnection::remote_bgp_asn].
    pub fn set_remote_bgp_asn<T: Into<i64>>(mut self, v: T) -> Self {
        self.remote_bgp_asn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [remote_bgp_asn][TransitGatewayConnection::remote_bgp_asn].
    pub fn set_or_clear_remote_bgp_asn<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.remote_bgp_asn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [mtu][TransitGatewayConnection::mtu].
    pub fn set_mtu<T: Into<i64>>(mut self, v: T) -> Self {
        self.mtu = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [mtu][TransitGatewayConnection::mtu].
    pub fn set_or_clear_mtu<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.mtu = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zone][TransitGatewayConnection::zone].
    pub fn set_zone<T: Into<ZoneReference>>(mut self, v: T) -> Self {
        self.zone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [zone][TransitGatewayConnection::zone].
    pub fn set_or_clear_zone<T: Into<ZoneReference>>(mut self, v: std::option::Option<T>) -> Self {
        self.zone = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_at][TransitGatewayConnection::created_at].
    pub fn set_created_at<T: Into<String>>(mut self, v: T) -> Self {
        self.created_at = v.into();
        self
    }

    /// Sets the value of [updated_at][TransitGatewayConnection::updated_at].
    pub fn set_updated_at<T: Into<String>>(mut self, v: T) -> Self {
        self.updated_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [updated_at][TransitGatewayConnection::updated_at].
    pub fn set_or_clear_updated_at<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.updated_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [prefix_filters][TransitGatewayConnection::prefix_filters].
    pub fn set_prefix_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.prefix_filters = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A page of connections of a transit gateway.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TransitGatewayConnectionCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<TransitGatewayConnection>,

    pub first: Option<PaginationLink>,

    pub next: Option<PaginationNext>,

    pub limit: i64,
}

impl TransitGatewayConnectionCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [connections][TransitGatewayConnectionCollection::connections].
    pub fn set_connections<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<TransitGatewayConnection>,
    {
        self.connections = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [first][TransitGatewayConnectionCollection::first].
    pub fn set_first<T: Into<PaginationLink>>(mut self, v: T) -> Self {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][TransitGatewayConnectionCollection::first].
    pub fn set_or_clear_first<T: Into<PaginationLink>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][TransitGatewayConnectionCollection::next].
    pub fn set_next<T: Into<PaginationNext>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][TransitGatewayConnectionCollection::next].
    pub fn set_or_clear_next<T: Into<PaginationNext>>(mut self, v: std::option::Option<T>) -> Self {
        self.next = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][TransitGatewayConnectionCollection::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = v.into();
        self
    }
}

/// A link to a page in a collection.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PaginationLink {
    pub href: String,
}

impl PaginationLink {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [href][PaginationLink::href].
    pub fn set_href<T: Into<String>>(mut self, v: T) -> Self {
        self.href = v.into();
        self
    }
}

/// A link to the next page in a collection.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PaginationNext {
    pub href: String,

    /// The cursor for the next page.
    pub start: Option<String>,
}

impl PaginationNext {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [href][PaginationNext::href].
    pub fn set_href<T: Into<String>>(mut self, v: T) -> Self {
        self.href = v.into();
        self
    }

    /// Sets the value of [start][PaginationNext::start].
    pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][PaginationNext::start].
    pub fn set_or_clear_start<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.start = v.map(|x| x.into());
        self
    }
}

/// A location where transit gateways can be created.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TsLocationBasic {
    pub name: String,

    /// The geographical area used for billing.
    pub billing_location: String,

    /// The location type, for example `region`.
    pub r#type: String,
}

impl TsLocationBasic {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][TsLocationBasic::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [billing_location][TsLocationBasic::billing_location].
    pub fn set_billing_location<T: Into<String>>(mut self, v: T) -> Self {
        self.billing_location = v.into();
        self
    }

    /// Sets the value of [type][TsLocationBasic::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }
}

/// The locations where transit gateways can be created.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TsCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<TsLocationBasic>,
}

impl TsCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [locations][TsCollection::locations].
    pub fn set_locations<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<TsLocationBasic>,
    {
        self.locations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A location reachable by a local transit gateway.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TsLocalLocation {
    pub name: String,

    pub display_name: String,

    pub r#type: String,
}

impl TsLocalLocation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][TsLocalLocation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][TsLocalLocation::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [type][TsLocalLocation::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }
}

/// A location where transit gateways can be created, with its local connection locations.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TsLocation {
    pub name: String,

    pub billing_location: String,

    pub r#type: String,

    /// The locations a local gateway in this location can connect to.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub local_connection_locations: Vec<TsLocalLocation>,
}

impl TsLocation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][TsLocation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [billing_location][TsLocation::billing_location].
    pub fn set_billing_location<T: Into<String>>(mut self, v: T) -> Self {
        self.billing_location = v.into();
        self
    }

    /// Sets the value of [type][TsLocation::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [local_connection_locations][TsLocation::local_connection_locations].
    pub fn set_local_connection_locations<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<TsLocalLocation>,
    {
        self.local_connection_locations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [list_connections][crate::client::TransitGateway::list_connections].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListConnectionsRequest {
    /// The cursor of the page to return.
    pub start: Option<String>,

    /// The number of resources per page.
    pub limit: Option<i64>,

    /// Only return the connections to this network.
    pub network_id: Option<String>,
}

impl ListConnectionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [start][ListConnectionsRequest::start].
    pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][ListConnectionsRequest::start].
    pub fn set_or_clear_start<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.start = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][ListConnectionsRequest::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][ListConnectionsRequest::limit].
    pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_id][ListConnectionsRequest::network_id].
    pub fn set_network_id<T: Into<String>>(mut self, v: T) -> Self {
        self.network_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_id][ListConnectionsRequest::network_id].
    pub fn set_or_clear_network_id<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.network_id = v.map(|x| x.into());
        self
    }
}

/// The request for [list_transit_gateways][crate::client::TransitGateway::list_transit_gateways].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListTransitGatewaysRequest {
    /// The cursor of the page to return.
    pub start: Option<String>,

    /// The number of resources per page.
    pub limit: Option<i64>,
}

impl ListTransitGatewaysRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [start][ListTransitGatewaysRequest::start].
    pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][ListTransitGatewaysRequest::start].
    pub fn set_or_clear_start<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.start = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][ListTransitGatewaysRequest::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][ListTransitGatewaysRequest::limit].
    pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.limit = v.map(|x| x.into());
        self
    }
}

/// The request for [create_transit_gateway][crate::client::TransitGateway::create_transit_gateway].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateTransitGatewayRequest {
    /// The location of the transit gateway.
    ///
    /// This is a **required** field for requests.
    pub location: Option<String>,

    /// The transit gateway name.
    ///
    /// This is a **required** field for requests.
    pub name: Option<String>,

    /// Whether the gateway routes traffic between regions, `false` when not set.
    pub global: Option<bool>,

    /// The resource group, the default group when not set.
    pub resource_group: Option<ResourceGroupIdentity>,
}

impl CreateTransitGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [location][CreateTransitGatewayRequest::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location][CreateTransitGatewayRequest::location].
    pub fn set_or_clear_location<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][CreateTransitGatewayRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][CreateTransitGatewayRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [global][CreateTransitGatewayRequest::global].
    pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
        self.global = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [global][CreateTransitGatewayRequest::global].
    pub fn set_or_clear_global<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.global = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_group][CreateTransitGatewayRequest::resource_group].
    pub fn set_resource_group<T: Into<ResourceGroupIdentity>>(mut self, v: T) -> Self {
        self.resource_group = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_group][CreateTransitGatewayRequest::resource_group].
    pub fn set_or_clear_resource_group<T: Into<ResourceGroupIdentity>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.resource_group = v.map(|x| x.into());
        self
    }
}

/// The request for [delete_transit_gateway][crate::client::TransitGateway::delete_transit_gateway].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteTransitGatewayRequest {
    /// The transit gateway identifier.
    ///
    /// This is a **required** field for requests.
    pub id: String,
}

impl DeleteTransitGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][DeleteTransitGatewayRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [get_transit_gateway][crate::client::TransitGateway::get_transit_gateway].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetTransitGatewayRequest {
    /// The transit gateway identifier.
    ///
    /// This is a **required** field for requests.
    pub id: String,
}

impl GetTransitGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][GetTransitGatewayRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [update_transit_gateway][crate::client::TransitGateway::update_transit_gateway].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateTransitGatewayRequest {
    /// The transit gateway identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub id: String,

    /// Whether the gateway routes traffic between regions.
    pub global: Option<bool>,

    /// The new name.
    pub name: Option<String>,
}

impl UpdateTransitGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][UpdateTransitGatewayRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [global][UpdateTransitGatewayRequest::global].
    pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
        self.global = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [global][UpdateTransitGatewayRequest::global].
    pub fn set_or_clear_global<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.global = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][UpdateTransitGatewayRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][UpdateTransitGatewayRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }
}

/// The request for [list_transit_gateway_connections][crate::client::TransitGateway::list_transit_gateway_connections].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListTransitGatewayConnectionsRequest {
    /// The transit gateway identifier.
    ///
    /// This is a **required** field for requests.
    pub transit_gateway_id: String,

    /// The cursor of the page to return.
    pub start: Option<String>,

    /// The number of resources per page.
    pub limit: Option<i64>,

    /// Only return the connections with this name.
    pub name: Option<String>,
}

impl ListTransitGatewayConnectionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [transit_gateway_id][ListTransitGatewayConnectionsRequest::transit_gateway_id].
    pub fn set_transit_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transit_gateway_id = v.into();
        self
    }

    /// Sets the value of [start][ListTransitGatewayConnectionsRequest::start].
    pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][ListTransitGatewayConnectionsRequest::start].
    pub fn set_or_clear_start<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.start = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][ListTransitGatewayConnectionsRequest::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][ListTransitGatewayConnectionsRequest::limit].
    pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][ListTransitGatewayConnectionsRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][ListTransitGatewayConnectionsRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }
}

/// The request for [create_transit_gateway_connection][crate::client::TransitGateway::create_transit_gateway_connection].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateTransitGatewayConnectionRequest {
    /// The transit gateway identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub transit_gateway_id: String,

    /// One of the values in [network_type][crate::model::network_type].
    ///
    /// This is a **required** field for requests.
    pub network_type: Option<String>,

    /// The connection name.
    pub name: Option<String>,

    /// The CRN of the network.
    pub network_id: Option<String>,

    /// The account of the network, for cross account connections.
    pub network_account_id: Option<String>,

    /// The underlying connection of `gre_tunnel` connections.
    pub base_connection_id: Option<String>,

    /// The local tunnel address, for `gre_tunnel` connections.
    pub local_tunnel_ip: Option<String>,

    /// The remote tunnel address, for `gre_tunnel` connections.
    pub remote_tunnel_ip: Option<String>,

    /// The remote gateway address, for `gre_tunnel` connections.
    pub remote_gateway_ip: Option<String>,

    /// The remote BGP ASN, for `gre_tunnel` connections.
    pub remote_bgp_asn: Option<i64>,

    /// The zone, for `gre_tunnel` connections.
    pub zone: Option<ZoneReference>,

    /// One of the values in [prefix_filter_action][crate::model::prefix_filter_action].
    pub prefix_filters_default: Option<String>,

    /// The prefix filters, applied in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prefix_filters: Vec<serde_json::Value>,

    /// Uniquely identifies the request, forwarded in the `X-Correlation-ID` header.
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
}

impl CreateTransitGatewayConnectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [transit_gateway_id][CreateTransitGatewayConnectionRequest::transit_gateway_id].
    pub fn set_transit_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transit_gateway_id = v.into();
        self
    }

    /// Sets the value of [network_type][CreateTransitGatewayConnectionRequest::network_type].
    pub fn set_network_type<T: Into<String>>(mut self, v: T) -> Self {
        self.network_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_type][CreateTransitGatewayConnectionRequest::network_type].
    pub fn set_or_clear_network_type<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.network_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][CreateTransitGatewayConnectionRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][CreateTransitGatewayConnectionRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_id][CreateTransitGatewayConnectionRequest::network_id].
    pub fn set_network_id<T: Into<String>>(mut self, v: T) -> Self {
        self.network_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_id][CreateTransitGatewayConnectionRequest::network_id].
    pub fn set_or_clear_network_id<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.network_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_account_id][CreateTransitGatewayConnectionRequest::network_account_id].
    pub fn set_network_account_id<T: Into<String>>(mut self, v: T) -> Self {
        self.network_account_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_account_id][CreateTransitGatewayConnectionRequest::network_account_id].
    pub fn set_or_clear_network_account_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.network_account_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [base_connection_id][CreateTransitGatewayConnectionRequest::base_connection_id].
    pub fn set_base_connection_id<T: Into<String>>(mut self, v: T) -> Self {
        self.base_connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [base_connection_id][CreateTransitGatewayConnectionRequest::base_connection_id].
    pub fn set_or_clear_base_connection_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.base_connection_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [local_tunnel_ip][CreateTransitGatewayConnectionRequest::local_tunnel_ip].
    pub fn set_local_tunnel_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.local_tunnel_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [local_tunnel_ip][CreateTransitGatewayConnectionRequest::local_tunnel_ip].
    pub fn set_or_clear_local_tunnel_ip<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.local_tunnel_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [remote_tunnel_ip][CreateTransitGatewayConnectionRequest::remote_tunnel_ip].
    pub fn set_remote_tunnel_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.remote_tunnel_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [remote_tunnel_ip][CreateTransitGatewayConnectionRequest::remote_tunnel_ip].
    pub fn set_or_clear_remote_tunnel_ip<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.remote_tunnel_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [remote_gateway_ip][CreateTransitGatewayConnectionRequest::remote_gateway_ip].
    pub fn set_remote_gateway_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.remote_gateway_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [remote_gateway_ip][CreateTransitGatewayConnectionRequest::remote_gateway_ip].
    pub fn set_or_clear_remote_gateway_ip<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.remote_gateway_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [remote_bgp_asn][CreateTransitGatewayConnectionRequest::remote_bgp_asn].
    pub fn set_remote_bgp_asn<T: Into<i64>>(mut self, v: T) -> Self {
        self.remote_bgp_asn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [remote_bgp_asn][CreateTransitGatewayConnectionRequest::remote_bgp_asn].
    pub fn set_or_clear_remote_bgp_asn<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.remote_bgp_asn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zone][CreateTransitGatewayConnectionRequest::zone].
    pub fn set_zone<T: Into<ZoneReference>>(mut self, v: T) -> Self {
        self.zone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [zone][CreateTransitGatewayConnectionRequest::zone].
    pub fn set_or_clear_zone<T: Into<ZoneReference>>(mut self, v: std::option::Option<T>) -> Self {
        self.zone = v.map(|x| x.into());
        self
    }

    /// Sets the value of [prefix_filters_default][CreateTransitGatewayConnectionRequest::prefix_filters_default].
    pub fn set_prefix_filters_default<T: Into<String>>(mut self, v: T) -> Self {
        self.prefix_filters_default = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [prefix_filters_default][CreateTransitGatewayConnectionRequest::prefix_filters_default].
    pub fn set_or_clear_prefix_filters_default<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.prefix_filters_default = v.map(|x| x.into());
        self
    }

    /// Sets the value of [prefix_filters][CreateTransitGatewayConnectionRequest::prefix_filters].
    pub fn set_prefix_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.prefix_filters = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [x_correlation_id][CreateTransitGatewayConnectionRequest::x_correlation_id].
    pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][CreateTransitGatewayConnectionRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request for [delete_transit_gateway_connection][crate::client::TransitGateway::delete_transit_gateway_connection].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteTransitGatewayConnectionRequest {
    /// The transit gateway identifier.
    ///
    /// This is a **required** field for requests.
    pub transit_gateway_id: String,

    /// The connection identifier.
    ///
    /// This is a **required** field for requests.
    pub id: String,

    /// Uniquely identifies the request, forwarded in the `X-Correlation-ID` header.
    pub x_correlation_id: Option<String>,
}

impl DeleteTransitGatewayConnectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [transit_gateway_id][DeleteTransitGatewayConnectionRequest::transit_gateway_id].
    pub fn set_transit_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transit_gateway_id = v.into();
        self
    }

    /// Sets the value of [id][DeleteTransitGatewayConnectionRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][DeleteTransitGatewayConnectionRequest::x_correlation_id].
    pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][DeleteTransitGatewayConnectionRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request for [get_transit_gateway_connection][crate::client::TransitGateway::get_transit_gateway_connection].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetTransitGatewayConnectionRequest {
    /// The transit gateway identifier.
    ///
    /// This is a **required** field for requests.
    pub transit_gateway_id: String,

    /// The connection identifier.
    ///
    /// This is a **required** field for requests.
    pub id: String,

    /// Uniquely identifies the request, forwarded in the `X-Correlation-ID` header.
    pub x_correlation_id: Option<String>,
}

impl GetTransitGatewayConnectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [transit_gateway_id][GetTransitGatewayConnectionRequest::transit_gateway_id].
    pub fn set_transit_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transit_gateway_id = v.into();
        self
    }

    /// Sets the value of [id][GetTransitGatewayConnectionRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][GetTransitGatewayConnectionRequest::x_correlation_id].
    pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][GetTransitGatewayConnectionRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request for [update_transit_gateway_connection][crate::client::TransitGateway::update_transit_gateway_connection].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateTransitGatewayConnectionRequest {
    /// The transit gateway identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub transit_gateway_id: String,

    /// The connection identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub id: String,

    /// The new name.
    pub name: Option<String>,

    /// One of the values in [prefix_filter_action][crate::model::prefix_filter_action].
    pub prefix_filters_default: Option<String>,

    /// Uniquely identifies the request, forwarded in the `X-Correlation-ID` header.
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
}

impl UpdateTransitGatewayConnectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [transit_gateway_id][UpdateTransitGatewayConnectionRequest::transit_gateway_id].
    pub fn set_transit_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transit_gateway_id = v.into();
        self
    }

    /// Sets the value of [id][UpdateTransitGatewayConnectionRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][UpdateTransitGatewayConnectionRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][UpdateTransitGatewayConnectionRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [prefix_filters_default][UpdateTransitGatewayConnectionRequest::prefix_filters_default].
    pub fn set_prefix_filters_default<T: Into<String>>(mut self, v: T) -> Self {
        self.prefix_filters_default = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [prefix_filters_default][UpdateTransitGatewayConnectionRequest::prefix_filters_default].
    pub fn set_or_clear_prefix_filters_default<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.prefix_filters_default = v.map(|x| x.into());
        self
    }

    /// Sets the value of [x_correlation_id][UpdateTransitGatewayConnectionRequest::x_correlation_id].
    pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][UpdateTransitGatewayConnectionRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request for [create_transit_gateway_connection_actions][crate::client::TransitGateway::create_transit_gateway_connection_actions].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateTransitGatewayConnectionActionsRequest {
    /// The transit gateway identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub transit_gateway_id: String,

    /// The connection identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub id: String,

    /// One of the values in [connection_action][crate::model::connection_action].
    ///
    /// This is a **required** field for requests.
    pub action: Option<String>,

    /// Uniquely identifies the request, forwarded in the `X-Correlation-ID` header.
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
}

impl CreateTransitGatewayConnectionActionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [transit_gateway_id][CreateTransitGatewayConnectionActionsRequest::transit_gateway_id].
    pub fn set_transit_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transit_gateway_id = v.into();
        self
    }

    /// Sets the value of [id][CreateTransitGatewayConnectionActionsRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [action][CreateTransitGatewayConnectionActionsRequest::action].
    pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
        self.action = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [action][CreateTransitGatewayConnectionActionsRequest::action].
    pub fn set_or_clear_action<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.action = v.map(|x| x.into());
        self
    }

    /// Sets the value of [x_correlation_id][CreateTransitGatewayConnectionActionsRequest::x_correlation_id].
    pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][CreateTransitGatewayConnectionActionsRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request for [list_gateway_locations][crate::client::TransitGateway::list_gateway_locations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListGatewayLocationsRequest {
}

impl ListGatewayLocationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// The request for [get_gateway_location][crate::client::TransitGateway::get_gateway_location].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetGatewayLocationRequest {
    /// The location name, for example `us-south`.
    ///
    /// This is a **required** field for requests.
    pub name: String,
}

impl GetGatewayLocationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][GetGatewayLocationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for TransitConnectionCollection {
    type PageItem = TransitConnection;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.connections
    }

    fn next_start(&self) -> std::option::Option<std::string::String> {
        self.next.as_ref().and_then(|n| n.start.clone())
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for TransitGatewayCollection {
    type PageItem = TransitGateway;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.transit_gateways
    }

    fn next_start(&self) -> std::option::Option<std::string::String> {
        self.next.as_ref().and_then(|n| n.start.clone())
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for TransitGatewayConnectionCollection {
    type PageItem = TransitGatewayConnection;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.connections
    }

    fn next_start(&self) -> std::option::Option<std::string::String> {
        self.next.as_ref().and_then(|n| n.start.clone())
    }
}
