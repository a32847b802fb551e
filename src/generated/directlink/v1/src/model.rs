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

//! The types used by the direct link operations.

/// The values for the gateway `type` fields.
pub mod gateway_type {
    /// A gateway using a connection provided by a partner.
    pub const CONNECT: &str = "connect";
    /// A gateway using a dedicated cross connect.
    pub const DEDICATED: &str = "dedicated";
}

/// The values for the `offering_type` parameters.
pub mod offering_type {
    pub const CONNECT: &str = "connect";
    pub const DEDICATED: &str = "dedicated";
}

/// The values for [CreateGatewayActionRequest::action].
pub mod gateway_action {
    pub const CREATE_GATEWAY_APPROVE: &str = "create_gateway_approve";
    pub const CREATE_GATEWAY_REJECT: &str = "create_gateway_reject";
    pub const DELETE_GATEWAY_APPROVE: &str = "delete_gateway_approve";
    pub const DELETE_GATEWAY_REJECT: &str = "delete_gateway_reject";
    pub const UPDATE_ATTRIBUTES_APPROVE: &str = "update_attributes_approve";
    pub const UPDATE_ATTRIBUTES_REJECT: &str = "update_attributes_reject";
}

/// The values for [GetGatewayStatisticsRequest::type].
pub mod statistic_type {
    pub const MACSEC_MKA: &str = "macsec_mka";
    pub const MACSEC_SECURITY: &str = "macsec_security";
}

/// The values for the virtual connection `type` fields.
pub mod virtual_connection_type {
    pub const CLASSIC: &str = "classic";
    pub const VPC: &str = "vpc";
}

/// A direct link gateway.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Gateway {
    /// The gateway identifier.
    pub id: String,

    pub name: String,

    /// One of the values in [gateway_type].
    pub r#type: String,

    pub crn: String,

    /// The gateway speed, in megabits per second.
    pub speed_mbps: i64,

    /// Whether the gateway connects to networks outside its region.
    pub global: bool,

    pub metered: bool,

    /// The customer BGP ASN.
    pub bgp_asn: i64,

    pub bgp_base_cidr: Option<String>,

    pub bgp_cer_cidr: Option<String>,

    pub bgp_ibm_cidr: Option<String>,

    pub bgp_ibm_asn: Option<i64>,

    pub bgp_status: Option<String>,

    pub location_name: String,

    pub location_display_name: String,

    pub operational_status: String,

    pub link_status: Option<String>,

    pub completion_notice_reject_reason: Option<String>,

    pub carrier_name: Option<String>,

    pub cross_connect_router: Option<String>,

    pub customer_name: Option<String>,

    pub provider_api_managed: Option<bool>,

    pub vlan: Option<i64>,

    /// The port used by `connect` gateways.
    pub port: Option<ResourceReference>,

    pub resource_group: Option<ResourceReference>,

    /// A pending change, for gateways managed by a provider.
    pub change_request: Option<serde_json::Value>,

    pub created_at: String,
}

impl Gateway {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Gateway::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][Gateway::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [type][Gateway::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [crn][Gateway::crn].
    pub fn set_crn<T: Into<String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [speed_mbps][Gateway::speed_mbps].
    pub fn set_speed_mbps<T: Into<i64>>(mut self, v: T) -> Self {
        self.speed_mbps = v.into();
        self
    }

    /// Sets the value of [global][Gateway::global].
    pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
        self.global = v.into();
        self
    }

    /// Sets the value of [metered][Gateway::metered].
    pub fn set_metered<T: Into<bool>>(mut self, v: T) -> Self {
        self.metered = v.into();
        self
    }

    /// Sets the value of [bgp_asn][Gateway::bgp_asn].
    pub fn set_bgp_asn<T: Into<i64>>(mut self, v: T) -> Self {
        self.bgp_asn = v.into();
        self
    }

    /// Sets the value of [bgp_base_cidr][Gateway::bgp_base_cidr].
    pub fn set_bgp_base_cidr<T: Into<String>>(mut self, v: T) -> Self {
        self.bgp_base_cidr = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_base_cidr][Gateway::bgp_base_cidr].
    pub fn set_or_clear_bgp_base_cidr<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.bgp_base_cidr = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bgp_cer_cidr][Gateway::bgp_cer_cidr].
    pub fn set_bgp_cer_cidr<T: Into<String>>(mut self, v: T) -> Self {
        self.bgp_cer_cidr = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_cer_cidr][Gateway::bgp_cer_cidr].
    pub fn set_or_clear_bgp_cer_cidr<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.bgp_cer_cidr = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bgp_ibm_cidr][Gateway::bgp_ibm_cidr].
    pub fn set_bgp_ibm_cidr<T: Into<String>>(mut self, v: T) -> Self {
        self.bgp_ibm_cidr = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_ibm_cidr][Gateway::bgp_ibm_cidr].
    pub fn set_or_clear_bgp_ibm_cidr<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.bgp_ibm_cidr = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bgp_ibm_asn][Gateway::bgp_ibm_asn].
    pub fn set_bgp_ibm_asn<T: Into<i64>>(mut self, v: T) -> Self {
        self.bgp_ibm_asn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_ibm_asn][Gateway::bgp_ibm_asn].
    pub fn set_or_clear_bgp_ibm_asn<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.bgp_ibm_asn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bgp_status][Gateway::bgp_status].
    pub fn set_bgp_status<T: Into<String>>(mut self, v: T) -> Self {
        self.bgp_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_status][Gateway::bgp_status].
    pub fn set_or_clear_bgp_status<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.bgp_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location_name][Gateway::location_name].
    pub fn set_location_name<T: Into<String>>(mut self, v: T) -> Self {
        self.location_name = v.into();
        self
    }

    /// Sets the value of [location_display_name][Gateway::location_display_name].
    pub fn set_location_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.location_display_name = v.into();
        self
    }

    /// Sets the value of [operational_status][Gateway::operational_status].
    pub fn set_operational_status<T: Into<String>>(mut self, v: T) -> Self {
        self.operational_status = v.into();
        self
    }

    /// Sets the value of [link_status][Gateway::link_status].
    pub fn set_link_status<T: Into<String>>(mut self, v: T) -> Self {
        self.link_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [link_status][Gateway::link_status].
    pub fn set_or_clear_link_status<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.link_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [completion_notice_reject_reason][Gateway::completion_notice_reject_reason].
    pub fn set_completion_notice_reject_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.completion_notice_reject_reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [completion_notice_reject_reason][Gateway::completion_notice_reject_reason].
    pub fn set_or_clear_completion_notice_reject_reason<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.completion_notice_reject_reason = v.map(|x| x.into());
        self
    }

    /// Sets the value of [carrier_name][Gateway::carrier_name].
    pub fn set_carrier_name<T: Into<String>>(mut self, v: T) -> Self {
        self.carrier_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [carrier_name][Gateway::carrier_name].
    pub fn set_or_clear_carrier_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.carrier_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cross_connect_router][Gateway::cross_connect_router].
    pub fn set_cross_connect_router<T: Into<String>>(mut self, v: T) -> Self {
        self.cross_connect_router = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cross_connect_router][Gateway::cross_connect_router].
    pub fn set_or_clear_cross_connect_router<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.cross_connect_router = v.map(|x| x.into());
        self
    }

    /// Sets the value of [customer_name][Gateway::customer_name].
    pub fn set_customer_name<T: Into<String>>(mut self, v: T) -> Self {
        self.customer_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [customer_name][Gateway::customer_name].
    pub fn set_or_clear_customer_name<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.customer_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [provider_api_managed][Gateway::provider_api_managed].
    pub fn set_provider_api_managed<T: Into<bool>>(mut self, v: T) -> Self {
        self.provider_api_managed = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [provider_api_managed][Gateway::provider_api_managed].
    pub fn set_or_clear_provider_api_managed<T: Into<bool>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.provider_api_managed = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vlan][Gateway::vlan].
    pub fn set_vlan<T: Into<i64>>(mut self, v: T) -> Self {
        self.vlan = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vlan][Gateway::vlan].
    pub fn set_or_clear_vlan<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.vlan = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port][Gateway::port].
    pub fn set_port<T: Into<ResourceReference>>(mut self, v: T) -> Self {
        self.port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port][Gateway::port].
    pub fn set_or_clear_port<T: Into<ResourceReference>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_group][Gateway::resource_group].
    pub fn set_resource_group<T: Into<ResourceReference>>(mut self, v: T) -> Self {
        self.resource_group = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_group][Gateway::resource_group].
    pub fn set_or_clear_resource_group<T: Into<ResourceReference>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.resource_group = v.map(|x| x.into());
        self
    }

    /// Sets the value of [change_request][Gateway::change_request].
    pub fn set_change_request<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.change_request = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [change_request][Gateway::change_request].
    pub fn set_or_clear_change_request<T: Into<serde_json::Value>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.change_request = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_at][Gateway::created_at].
    pub fn set_created_at<T: Into<String>>(mut self, v: T) -> Self {
        self.created_at = v.into();
        self
    }
}

/// The gateways returned by [list_gateways][crate::client::DirectLink::list_gateways].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gateways: Vec<Gateway>,
}

impl GatewayCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateways][GatewayCollection::gateways].
    pub fn set_gateways<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<Gateway>,
    {
        self.gateways = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A reference to another resource, by its identifier.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResourceReference {
    pub id: String,
}

impl ResourceReference {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][ResourceReference::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// A statistic of a gateway.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayStatistic {
    /// One of the values in [statistic_type].
    pub r#type: String,

    /// The statistic, as reported by the router.
    pub data: String,

    pub created_at: String,
}

impl GatewayStatistic {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [type][GatewayStatistic::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [data][GatewayStatistic::data].
    pub fn set_data<T: Into<String>>(mut self, v: T) -> Self {
        self.data = v.into();
        self
    }

    /// Sets the value of [created_at][GatewayStatistic::created_at].
    pub fn set_created_at<T: Into<String>>(mut self, v: T) -> Self {
        self.created_at = v.into();
        self
    }
}

/// The statistics of a gateway.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayStatisticCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub statistics: Vec<GatewayStatistic>,
}

impl GatewayStatisticCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [statistics][GatewayStatisticCollection::statistics].
    pub fn set_statistics<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<GatewayStatistic>,
    {
        self.statistics = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A location where direct link gateways can be provisioned.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LocationOutput {
    pub name: String,

    pub display_name: String,

    pub location_type: String,

    pub market: String,

    pub market_geography: String,

    /// Whether the location is a multi-zone region.
    pub mzr: bool,

    pub offering_type: String,

    pub provision_enabled: bool,

    pub billing_location: Option<String>,

    pub building_colocation_owner: Option<String>,

    pub vpc_region: Option<String>,
}

impl LocationOutput {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][LocationOutput::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][LocationOutput::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [location_type][LocationOutput::location_type].
    pub fn set_location_type<T: Into<String>>(mut self, v: T) -> Self {
        self.location_type = v.into();
        self
    }

    /// Sets the value of [market][LocationOutput::market].
    pub fn set_market<T: Into<String>>(mut self, v: T) -> Self {
        self.market = v.into();
        self
    }

    /// Sets the value of [market_geography][LocationOutput::market_geography].
    pub fn set_market_geography<T: Into<String>>(mut self, v: T) -> Self {
        self.market_geography = v.into();
        self
    }

    /// Sets the value of [mzr][LocationOutput::mzr].
    pub fn set_mzr<T: Into<bool>>(mut self, v: T) -> Self {
        self.mzr = v.into();
        self
    }

    /// Sets the value of [offering_type][LocationOutput::offering_type].
    pub fn set_offering_type<T: Into<String>>(mut self, v: T) -> Self {
        self.offering_type = v.into();
        self
    }

    /// Sets the value of [provision_enabled][LocationOutput::provision_enabled].
    pub fn set_provision_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.provision_enabled = v.into();
        self
    }

    /// Sets the value of [billing_location][LocationOutput::billing_location].
    pub fn set_billing_location<T: Into<String>>(mut self, v: T) -> Self {
        self.billing_location = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [billing_location][LocationOutput::billing_location].
    pub fn set_or_clear_billing_location<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.billing_location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [building_colocation_owner][LocationOutput::building_colocation_owner].
    pub fn set_building_colocation_owner<T: Into<String>>(mut self, v: T) -> Self {
        self.building_colocation_owner = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [building_colocation_owner][LocationOutput::building_colocation_owner].
    pub fn set_or_clear_building_colocation_owner<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.building_colocation_owner = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vpc_region][LocationOutput::vpc_region].
    pub fn set_vpc_region<T: Into<String>>(mut self, v: T) -> Self {
        self.vpc_region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc_region][LocationOutput::vpc_region].
    pub fn set_or_clear_vpc_region<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.vpc_region = v.map(|x| x.into());
        self
    }
}

/// The locations of an offering type.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LocationCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<LocationOutput>,
}

impl LocationCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [locations][LocationCollection::locations].
    pub fn set_locations<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LocationOutput>,
    {
        self.locations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A cross connect router in a location.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CrossConnectRouter {
    pub router_name: String,

    pub total_connections: i64,
}

impl CrossConnectRouter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [router_name][CrossConnectRouter::router_name].
    pub fn set_router_name<T: Into<String>>(mut self, v: T) -> Self {
        self.router_name = v.into();
        self
    }

    /// Sets the value of [total_connections][CrossConnectRouter::total_connections].
    pub fn set_total_connections<T: Into<i64>>(mut self, v: T) -> Self {
        self.total_connections = v.into();
        self
    }
}

/// The cross connect routers of a location.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LocationCrossConnectRouterCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cross_connect_routers: Vec<CrossConnectRouter>,
}

impl LocationCrossConnectRouterCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cross_connect_routers][LocationCrossConnectRouterCollection::cross_connect_routers].
    pub fn set_cross_connect_routers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<CrossConnectRouter>,
    {
        self.cross_connect_routers = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A link speed available for an offering type.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct OfferingSpeed {
    /// The link speed, in megabits per second.
    pub link_speed: i64,
}

impl OfferingSpeed {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [link_speed][OfferingSpeed::link_speed].
    pub fn set_link_speed<T: Into<i64>>(mut self, v: T) -> Self {
        self.link_speed = v.into();
        self
    }
}

/// The speeds of an offering type.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct OfferingSpeedCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub speeds: Vec<OfferingSpeed>,
}

impl OfferingSpeedCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [speeds][OfferingSpeedCollection::speeds].
    pub fn set_speeds<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<OfferingSpeed>,
    {
        self.speeds = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A provider port, used by `connect` gateways.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Port {
    pub id: String,

    /// The number of gateways using the port.
    pub direct_link_count: i64,

    pub label: String,

    pub location_display_name: String,

    pub location_name: String,

    pub provider_name: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supported_link_speeds: Vec<i64>,
}

impl Port {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Port::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [direct_link_count][Port::direct_link_count].
    pub fn set_direct_link_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.direct_link_count = v.into();
        self
    }

    /// Sets the value of [label][Port::label].
    pub fn set_label<T: Into<String>>(mut self, v: T) -> Self {
        self.label = v.into();
        self
    }

    /// Sets the value of [location_display_name][Port::location_display_name].
    pub fn set_location_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.location_display_name = v.into();
        self
    }

    /// Sets the value of [location_name][Port::location_name].
    pub fn set_location_name<T: Into<String>>(mut self, v: T) -> Self {
        self.location_name = v.into();
        self
    }

    /// Sets the value of [provider_name][Port::provider_name].
    pub fn set_provider_name<T: Into<String>>(mut self, v: T) -> Self {
        self.provider_name = v.into();
        self
    }

    /// Sets the value of [supported_link_speeds][Port::supported_link_speeds].
    pub fn set_supported_link_speeds<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<i64>,
    {
        self.supported_link_speeds = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A page of ports.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PortCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<Port>,

    /// A link to the first page.
    pub first: Option<PaginationLink>,

    /// A link to the next page, absent in the last page.
    pub next: Option<PaginationNext>,

    pub limit: i64,

    pub total_count: Option<i64>,
}

impl PortCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ports][PortCollection::ports].
    pub fn set_ports<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<Port>,
    {
        self.ports = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [first][PortCollection::first].
    pub fn set_first<T: Into<PaginationLink>>(mut self, v: T) -> Self {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][PortCollection::first].
    pub fn set_or_clear_first<T: Into<PaginationLink>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][PortCollection::next].
    pub fn set_next<T: Into<PaginationNext>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][PortCollection::next].
    pub fn set_or_clear_next<T: Into<PaginationNext>>(mut self, v: std::option::Option<T>) -> Self {
        self.next = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][PortCollection::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = v.into();
        self
    }

    /// Sets the value of [total_count][PortCollection::total_count].
    pub fn set_total_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [total_count][PortCollection::total_count].
    pub fn set_or_clear_total_count<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.total_count = v.map(|x| x.into());
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

/// A virtual connection between a gateway and a network.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayVirtualConnection {
    pub id: String,

    pub name: String,

    /// One of the values in [virtual_connection_type].
    pub r#type: String,

    /// The CRN of the connected VPC, absent for `classic` connections.
    pub network_id: Option<String>,

    pub network_account: Option<String>,

    pub status: String,

    pub created_at: String,
}

impl GatewayVirtualConnection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][GatewayVirtualConnection::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][GatewayVirtualConnection::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [type][GatewayVirtualConnection::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [network_id][GatewayVirtualConnection::network_id].
    pub fn set_network_id<T: Into<String>>(mut self, v: T) -> Self {
        self.network_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_id][GatewayVirtualConnection::network_id].
    pub fn set_or_clear_network_id<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.network_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_account][GatewayVirtualConnection::network_account].
    pub fn set_network_account<T: Into<String>>(mut self, v: T) -> Self {
        self.network_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_account][GatewayVirtualConnection::network_account].
    pub fn set_or_clear_network_account<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.network_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][GatewayVirtualConnection::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [created_at][GatewayVirtualConnection::created_at].
    pub fn set_created_at<T: Into<String>>(mut self, v: T) -> Self {
        self.created_at = v.into();
        self
    }
}

/// The virtual connections of a gateway.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayVirtualConnectionCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub virtual_connections: Vec<GatewayVirtualConnection>,
}

impl GatewayVirtualConnectionCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_connections][GatewayVirtualConnectionCollection::virtual_connections].
    pub fn set_virtual_connections<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<GatewayVirtualConnection>,
    {
        self.virtual_connections = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [list_gateways][crate::client::DirectLink::list_gateways].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListGatewaysRequest {
}

impl ListGatewaysRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// The request for [create_gateway][crate::client::DirectLink::create_gateway].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateGatewayRequest {
    /// The gateway name.
    pub name: Option<String>,

    /// One of the values in [gateway_type][crate::model::gateway_type].
    #[serde(rename = "type")]
    pub r#type: Option<String>,

    /// The gateway speed, in megabits per second.
    pub speed_mbps: Option<i64>,

    /// Whether the gateway connects to networks outside its region.
    pub global: Option<bool>,

    /// Whether the gateway is billed by usage.
    pub metered: Option<bool>,

    /// The customer BGP ASN.
    pub bgp_asn: Option<i64>,

    /// The BGP customer edge router CIDR.
    pub bgp_cer_cidr: Option<String>,

    /// The BGP IBM CIDR.
    pub bgp_ibm_cidr: Option<String>,

    /// The gateway location, for `dedicated` gateways.
    pub location_name: Option<String>,

    /// The cross connect router, for `dedicated` gateways.
    pub cross_connect_router: Option<String>,

    /// The carrier, for `dedicated` gateways.
    pub carrier_name: Option<String>,

    /// The customer, for `dedicated` gateways.
    pub customer_name: Option<String>,

    /// The port, for `connect` gateways.
    pub port: Option<ResourceReference>,

    /// The resource group, the default group when not set.
    pub resource_group: Option<ResourceReference>,
}

impl CreateGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][CreateGatewayRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][CreateGatewayRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][CreateGatewayRequest::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [type][CreateGatewayRequest::r#type].
    pub fn set_or_clear_type<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [speed_mbps][CreateGatewayRequest::speed_mbps].
    pub fn set_speed_mbps<T: Into<i64>>(mut self, v: T) -> Self {
        self.speed_mbps = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [speed_mbps][CreateGatewayRequest::speed_mbps].
    pub fn set_or_clear_speed_mbps<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.speed_mbps = v.map(|x| x.into());
        self
    }

    /// Sets the value of [global][CreateGatewayRequest::global].
    pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
        self.global = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [global][CreateGatewayRequest::global].
    pub fn set_or_clear_global<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.global = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metered][CreateGatewayRequest::metered].
    pub fn set_metered<T: Into<bool>>(mut self, v: T) -> Self {
        self.metered = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [metered][CreateGatewayRequest::metered].
    pub fn set_or_clear_metered<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.metered = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bgp_asn][CreateGatewayRequest::bgp_asn].
    pub fn set_bgp_asn<T: Into<i64>>(mut self, v: T) -> Self {
        self.bgp_asn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_asn][CreateGatewayRequest::bgp_asn].
    pub fn set_or_clear_bgp_asn<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.bgp_asn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bgp_cer_cidr][CreateGatewayRequest::bgp_cer_cidr].
    pub fn set_bgp_cer_cidr<T: Into<String>>(mut self, v: T) -> Self {
        self.bgp_cer_cidr = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_cer_cidr][CreateGatewayRequest::bgp_cer_cidr].
    pub fn set_or_clear_bgp_cer_cidr<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.bgp_cer_cidr = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bgp_ibm_cidr][CreateGatewayRequest::bgp_ibm_cidr].
    pub fn set_bgp_ibm_cidr<T: Into<String>>(mut self, v: T) -> Self {
        self.bgp_ibm_cidr = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_ibm_cidr][CreateGatewayRequest::bgp_ibm_cidr].
    pub fn set_or_clear_bgp_ibm_cidr<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.bgp_ibm_cidr = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location_name][CreateGatewayRequest::location_name].
    pub fn set_location_name<T: Into<String>>(mut self, v: T) -> Self {
        self.location_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location_name][CreateGatewayRequest::location_name].
    pub fn set_or_clear_location_name<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.location_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cross_connect_router][CreateGatewayRequest::cross_connect_router].
    pub fn set_cross_connect_router<T: Into<String>>(mut self, v: T) -> Self {
        self.cross_connect_router = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cross_connect_router][CreateGatewayRequest::cross_connect_router].
    pub fn set_or_clear_cross_connect_router<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.cross_connect_router = v.map(|x| x.into());
        self
    }

    /// Sets the value of [carrier_name][CreateGatewayRequest::carrier_name].
    pub fn set_carrier_name<T: Into<String>>(mut self, v: T) -> Self {
        self.carrier_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [carrier_name][CreateGatewayRequest::carrier_name].
    pub fn set_or_clear_carrier_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.carrier_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [customer_name][CreateGatewayRequest::customer_name].
    pub fn set_customer_name<T: Into<String>>(mut self, v: T) -> Self {
        self.customer_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [customer_name][CreateGatewayRequest::customer_name].
    pub fn set_or_clear_customer_name<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.customer_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port][CreateGatewayRequest::port].
    pub fn set_port<T: Into<ResourceReference>>(mut self, v: T) -> Self {
        self.port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port][CreateGatewayRequest::port].
    pub fn set_or_clear_port<T: Into<ResourceReference>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_group][CreateGatewayRequest::resource_group].
    pub fn set_resource_group<T: Into<ResourceReference>>(mut self, v: T) -> Self {
        self.resource_group = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_group][CreateGatewayRequest::resource_group].
    pub fn set_or_clear_resource_group<T: Into<ResourceReference>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.resource_group = v.map(|x| x.into());
        self
    }
}

/// The request for [delete_gateway][crate::client::DirectLink::delete_gateway].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteGatewayRequest {
    /// The gateway identifier.
    ///
    /// This is a **required** field for requests.
    pub id: String,
}

impl DeleteGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][DeleteGatewayRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [get_gateway][crate::client::DirectLink::get_gateway].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetGatewayRequest {
    /// The gateway identifier.
    ///
    /// This is a **required** field for requests.
    pub id: String,
}

impl GetGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][GetGatewayRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [update_gateway][crate::client::DirectLink::update_gateway].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateGatewayRequest {
    /// The gateway identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub id: String,

    /// The new name.
    pub name: Option<String>,

    /// Whether the gateway connects to networks outside its region.
    pub global: Option<bool>,

    /// Whether the gateway is billed by usage.
    pub metered: Option<bool>,

    /// The new speed, in megabits per second.
    pub speed_mbps: Option<i64>,

    /// Why the letter of authorization was rejected.
    pub loa_reject_reason: Option<String>,

    /// Used to reject a letter of authorization, with `loa_rejected`.
    pub operational_status: Option<String>,
}

impl UpdateGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][UpdateGatewayRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][UpdateGatewayRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][UpdateGatewayRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [global][UpdateGatewayRequest::global].
    pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
        self.global = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [global][UpdateGatewayRequest::global].
    pub fn set_or_clear_global<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.global = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metered][UpdateGatewayRequest::metered].
    pub fn set_metered<T: Into<bool>>(mut self, v: T) -> Self {
        self.metered = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [metered][UpdateGatewayRequest::metered].
    pub fn set_or_clear_metered<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.metered = v.map(|x| x.into());
        self
    }

    /// Sets the value of [speed_mbps][UpdateGatewayRequest::speed_mbps].
    pub fn set_speed_mbps<T: Into<i64>>(mut self, v: T) -> Self {
        self.speed_mbps = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [speed_mbps][UpdateGatewayRequest::speed_mbps].
    pub fn set_or_clear_speed_mbps<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.speed_mbps = v.map(|x| x.into());
        self
    }

    /// Sets the value of [loa_reject_reason][UpdateGatewayRequest::loa_reject_reason].
    pub fn set_loa_reject_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.loa_reject_reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [loa_reject_reason][UpdateGatewayRequest::loa_reject_reason].
    pub fn set_or_clear_loa_reject_reason<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.loa_reject_reason = v.map(|x| x.into());
        self
    }

    /// Sets the value of [operational_status][UpdateGatewayRequest::operational_status].
    pub fn set_operational_status<T: Into<String>>(mut self, v: T) -> Self {
        self.operational_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [operational_status][UpdateGatewayRequest::operational_status].
    pub fn set_or_clear_operational_status<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.operational_status = v.map(|x| x.into());
        self
    }
}

/// The request for [create_gateway_action][crate::client::DirectLink::create_gateway_action].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateGatewayActionRequest {
    /// The gateway identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub id: String,

    /// One of the values in [gateway_action][crate::model::gateway_action].
    ///
    /// This is a **required** field for requests.
    pub action: Option<String>,

    /// Required when approving a gateway creation.
    pub global: Option<bool>,

    /// Required when approving a gateway creation.
    pub metered: Option<bool>,

    /// Used when approving a gateway creation.
    pub resource_group: Option<ResourceReference>,

    /// The changes being approved or rejected.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<serde_json::Value>,
}

impl CreateGatewayActionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][CreateGatewayActionRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [action][CreateGatewayActionRequest::action].
    pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
        self.action = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [action][CreateGatewayActionRequest::action].
    pub fn set_or_clear_action<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.action = v.map(|x| x.into());
        self
    }

    /// Sets the value of [global][CreateGatewayActionRequest::global].
    pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
        self.global = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [global][CreateGatewayActionRequest::global].
    pub fn set_or_clear_global<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.global = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metered][CreateGatewayActionRequest::metered].
    pub fn set_metered<T: Into<bool>>(mut self, v: T) -> Self {
        self.metered = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [metered][CreateGatewayActionRequest::metered].
    pub fn set_or_clear_metered<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.metered = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_group][CreateGatewayActionRequest::resource_group].
    pub fn set_resource_group<T: Into<ResourceReference>>(mut self, v: T) -> Self {
        self.resource_group = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_group][CreateGatewayActionRequest::resource_group].
    pub fn set_or_clear_resource_group<T: Into<ResourceReference>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.resource_group = v.map(|x| x.into());
        self
    }

    /// Sets the value of [updates][CreateGatewayActionRequest::updates].
    pub fn set_updates<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.updates = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [list_gateway_completion_notice][crate::client::DirectLink::list_gateway_completion_notice].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListGatewayCompletionNoticeRequest {
    /// The gateway identifier.
    ///
    /// This is a **required** field for requests.
    pub id: String,
}

impl ListGatewayCompletionNoticeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][ListGatewayCompletionNoticeRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [create_gateway_completion_notice][crate::client::DirectLink::create_gateway_completion_notice].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateGatewayCompletionNoticeRequest {
    /// The gateway identifier.
    ///
    /// This is a **required** field for requests.
    pub id: String,

    /// The completion notice, a PDF file.
    ///
    /// This is a **required** field for requests.
    pub upload: bytes::Bytes,
}

impl CreateGatewayCompletionNoticeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][CreateGatewayCompletionNoticeRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [upload][CreateGatewayCompletionNoticeRequest::upload].
    pub fn set_upload<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.upload = v.into();
        self
    }
}

/// The request for [list_gateway_letter_of_authorization][crate::client::DirectLink::list_gateway_letter_of_authorization].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListGatewayLetterOfAuthorizationRequest {
    /// The gateway identifier.
    ///
    /// This is a **required** field for requests.
    pub id: String,
}

impl ListGatewayLetterOfAuthorizationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][ListGatewayLetterOfAuthorizationRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [get_gateway_statistics][crate::client::DirectLink::get_gateway_statistics].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetGatewayStatisticsRequest {
    /// The gateway identifier.
    ///
    /// This is a **required** field for requests.
    pub id: String,

    /// One of the values in [statistic_type][crate::model::statistic_type].
    ///
    /// This is a **required** field for requests.
    pub r#type: String,
}

impl GetGatewayStatisticsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][GetGatewayStatisticsRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [type][GetGatewayStatisticsRequest::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }
}

/// The request for [list_offering_type_locations][crate::client::DirectLink::list_offering_type_locations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListOfferingTypeLocationsRequest {
    /// One of the values in [offering_type][crate::model::offering_type].
    ///
    /// This is a **required** field for requests.
    pub offering_type: String,
}

impl ListOfferingTypeLocationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [offering_type][ListOfferingTypeLocationsRequest::offering_type].
    pub fn set_offering_type<T: Into<String>>(mut self, v: T) -> Self {
        self.offering_type = v.into();
        self
    }
}

/// The request for [list_offering_type_location_cross_connect_routers][crate::client::DirectLink::list_offering_type_location_cross_connect_routers].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListOfferingTypeLocationCrossConnectRoutersRequest {
    /// One of the values in [offering_type][crate::model::offering_type].
    ///
    /// This is a **required** field for requests.
    pub offering_type: String,

    /// The location name, for example `dal03`.
    ///
    /// This is a **required** field for requests.
    pub location_name: String,
}

impl ListOfferingTypeLocationCrossConnectRoutersRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [offering_type][ListOfferingTypeLocationCrossConnectRoutersRequest::offering_type].
    pub fn set_offering_type<T: Into<String>>(mut self, v: T) -> Self {
        self.offering_type = v.into();
        self
    }

    /// Sets the value of [location_name][ListOfferingTypeLocationCrossConnectRoutersRequest::location_name].
    pub fn set_location_name<T: Into<String>>(mut self, v: T) -> Self {
        self.location_name = v.into();
        self
    }
}

/// The request for [list_offering_type_speeds][crate::client::DirectLink::list_offering_type_speeds].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListOfferingTypeSpeedsRequest {
    /// One of the values in [offering_type][crate::model::offering_type].
    ///
    /// This is a **required** field for requests.
    pub offering_type: String,
}

impl ListOfferingTypeSpeedsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [offering_type][ListOfferingTypeSpeedsRequest::offering_type].
    pub fn set_offering_type<T: Into<String>>(mut self, v: T) -> Self {
        self.offering_type = v.into();
        self
    }
}

/// The request for [list_ports][crate::client::DirectLink::list_ports].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListPortsRequest {
    /// The cursor of the page to return.
    pub start: Option<String>,

    /// The number of ports per page.
    pub limit: Option<i64>,

    /// Only return the ports in this location.
    pub location_name: Option<String>,
}

impl ListPortsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [start][ListPortsRequest::start].
    pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][ListPortsRequest::start].
    pub fn set_or_clear_start<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.start = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][ListPortsRequest::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][ListPortsRequest::limit].
    pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location_name][ListPortsRequest::location_name].
    pub fn set_location_name<T: Into<String>>(mut self, v: T) -> Self {
        self.location_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location_name][ListPortsRequest::location_name].
    pub fn set_or_clear_location_name<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.location_name = v.map(|x| x.into());
        self
    }
}

/// The request for [get_port][crate::client::DirectLink::get_port].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetPortRequest {
    /// The port identifier.
    ///
    /// This is a **required** field for requests.
    pub id: String,
}

impl GetPortRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][GetPortRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [list_gateway_virtual_connections][crate::client::DirectLink::list_gateway_virtual_connections].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListGatewayVirtualConnectionsRequest {
    /// The gateway identifier.
    ///
    /// This is a **required** field for requests.
    pub gateway_id: String,
}

impl ListGatewayVirtualConnectionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_id][ListGatewayVirtualConnectionsRequest::gateway_id].
    pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.gateway_id = v.into();
        self
    }
}

/// The request for [create_gateway_virtual_connection][crate::client::DirectLink::create_gateway_virtual_connection].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateGatewayVirtualConnectionRequest {
    /// The gateway identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub gateway_id: String,

    /// The virtual connection name.
    ///
    /// This is a **required** field for requests.
    pub name: Option<String>,

    /// One of the values in [virtual_connection_type][crate::model::virtual_connection_type].
    ///
    /// This is a **required** field for requests.
    #[serde(rename = "type")]
    pub r#type: Option<String>,

    /// The CRN of the VPC, required for `vpc` connections.
    pub network_id: Option<String>,
}

impl CreateGatewayVirtualConnectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_id][CreateGatewayVirtualConnectionRequest::gateway_id].
    pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.gateway_id = v.into();
        self
    }

    /// Sets the value of [name][CreateGatewayVirtualConnectionRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][CreateGatewayVirtualConnectionRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][CreateGatewayVirtualConnectionRequest::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [type][CreateGatewayVirtualConnectionRequest::r#type].
    pub fn set_or_clear_type<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_id][CreateGatewayVirtualConnectionRequest::network_id].
    pub fn set_network_id<T: Into<String>>(mut self, v: T) -> Self {
        self.network_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_id][CreateGatewayVirtualConnectionRequest::network_id].
    pub fn set_or_clear_network_id<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.network_id = v.map(|x| x.into());
        self
    }
}

/// The request for [delete_gateway_virtual_connection][crate::client::DirectLink::delete_gateway_virtual_connection].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteGatewayVirtualConnectionRequest {
    /// The gateway identifier.
    ///
    /// This is a **required** field for requests.
    pub gateway_id: String,

    /// The virtual connection identifier.
    ///
    /// This is a **required** field for requests.
    pub id: String,
}

impl DeleteGatewayVirtualConnectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_id][DeleteGatewayVirtualConnectionRequest::gateway_id].
    pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.gateway_id = v.into();
        self
    }

    /// Sets the value of [id][DeleteGatewayVirtualConnectionRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [get_gateway_virtual_connection][crate::client::DirectLink::get_gateway_virtual_connection].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetGatewayVirtualConnectionRequest {
    /// The gateway identifier.
    ///
    /// This is a **required** field for requests.
    pub gateway_id: String,

    /// The virtual connection identifier.
    ///
    /// This is a **required** field for requests.
    pub id: String,
}

impl GetGatewayVirtualConnectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_id][GetGatewayVirtualConnectionRequest::gateway_id].
    pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.gateway_id = v.into();
        self
    }

    /// Sets the value of [id][GetGatewayVirtualConnectionRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [update_gateway_virtual_connection][crate::client::DirectLink::update_gateway_virtual_connection].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateGatewayVirtualConnectionRequest {
    /// The gateway identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub gateway_id: String,

    /// The virtual connection identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub id: String,

    /// The new name.
    pub name: Option<String>,

    /// Used by the network owner to approve or reject the connection.
    pub status: Option<String>,
}

impl UpdateGatewayVirtualConnectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_id][UpdateGatewayVirtualConnectionRequest::gateway_id].
    pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.gateway_id = v.into();
        self
    }

    /// Sets the value of [id][UpdateGatewayVirtualConnectionRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][UpdateGatewayVirtualConnectionRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][UpdateGatewayVirtualConnectionRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][UpdateGatewayVirtualConnectionRequest::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][UpdateGatewayVirtualConnectionRequest::status].
    pub fn set_or_clear_status<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.status = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for PortCollection {
    type PageItem = Port;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.ports
    }

    fn next_start(&self) -> std::option::Option<std::string::String> {
        self.next.as_ref().and_then(|n| n.start.clone())
    }
}
