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

/// A dyn-compatible, crate-private version of [super::DirectLink].
#[async_trait::async_trait]
pub trait DirectLink: std::fmt::Debug + Send + Sync {
    async fn list_gateways(
        &self,
        req: crate::model::ListGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GatewayCollection>>;

    async fn create_gateway(
        &self,
        req: crate::model::CreateGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Gateway>>;

    async fn delete_gateway(
        &self,
        req: crate::model::DeleteGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn get_gateway(
        &self,
        req: crate::model::GetGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Gateway>>;

    async fn update_gateway(
        &self,
        req: crate::model::UpdateGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Gateway>>;

    async fn create_gateway_action(
        &self,
        req: crate::model::CreateGatewayActionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Gateway>>;

    async fn list_gateway_completion_notice(
        &self,
        req: crate::model::ListGatewayCompletionNoticeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::streaming::ByteStream>>;

    async fn create_gateway_completion_notice(
        &self,
        req: crate::model::CreateGatewayCompletionNoticeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn list_gateway_letter_of_authorization(
        &self,
        req: crate::model::ListGatewayLetterOfAuthorizationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::streaming::ByteStream>>;

    async fn get_gateway_statistics(
        &self,
        req: crate::model::GetGatewayStatisticsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GatewayStatisticCollection>>;

    async fn list_offering_type_locations(
        &self,
        req: crate::model::ListOfferingTypeLocationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LocationCollection>>;

    async fn list_offering_type_location_cross_connect_routers(
        &self,
        req: crate::model::ListOfferingTypeLocationCrossConnectRoutersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LocationCrossConnectRouterCollection>>;

    async fn list_offering_type_speeds(
        &self,
        req: crate::model::ListOfferingTypeSpeedsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::OfferingSpeedCollection>>;

    async fn list_ports(
        &self,
        req: crate::model::ListPortsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::PortCollection>>;

    async fn get_port(
        &self,
        req: crate::model::GetPortRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Port>>;

    async fn list_gateway_virtual_connections(
        &self,
        req: crate::model::ListGatewayVirtualConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GatewayVirtualConnectionCollection>>;

    async fn create_gateway_virtual_connection(
        &self,
        req: crate::model::CreateGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GatewayVirtualConnection>>;

    async fn delete_gateway_virtual_connection(
        &self,
        req: crate::model::DeleteGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn get_gateway_virtual_connection(
        &self,
        req: crate::model::GetGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GatewayVirtualConnection>>;

    async fn update_gateway_virtual_connection(
        &self,
        req: crate::model::UpdateGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GatewayVirtualConnection>>;
}

/// All implementations of [super::DirectLink] also implement [DirectLink].
#[async_trait::async_trait]
impl<T: super::DirectLink> DirectLink for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_gateways(
        &self,
        req: crate::model::ListGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GatewayCollection>> {
        T::list_gateways(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_gateway(
        &self,
        req: crate::model::CreateGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Gateway>> {
        T::create_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_gateway(
        &self,
        req: crate::model::DeleteGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_gateway(
        &self,
        req: crate::model::GetGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Gateway>> {
        T::get_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_gateway(
        &self,
        req: crate::model::UpdateGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Gateway>> {
        T::update_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_gateway_action(
        &self,
        req: crate::model::CreateGatewayActionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Gateway>> {
        T::create_gateway_action(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_gateway_completion_notice(
        &self,
        req: crate::model::ListGatewayCompletionNoticeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::streaming::ByteStream>> {
        T::list_gateway_completion_notice(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_gateway_completion_notice(
        &self,
        req: crate::model::CreateGatewayCompletionNoticeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::create_gateway_completion_notice(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_gateway_letter_of_authorization(
        &self,
        req: crate::model::ListGatewayLetterOfAuthorizationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::streaming::ByteStream>> {
        T::list_gateway_letter_of_authorization(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_gateway_statistics(
        &self,
        req: crate::model::GetGatewayStatisticsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GatewayStatisticCollection>> {
        T::get_gateway_statistics(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_offering_type_locations(
        &self,
        req: crate::model::ListOfferingTypeLocationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LocationCollection>> {
        T::list_offering_type_locations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_offering_type_location_cross_connect_routers(
        &self,
        req: crate::model::ListOfferingTypeLocationCrossConnectRoutersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::LocationCrossConnectRouterCollection>,
    > {
        T::list_offering_type_location_cross_connect_routers(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_offering_type_speeds(
        &self,
        req: crate::model::ListOfferingTypeSpeedsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::OfferingSpeedCollection>> {
        T::list_offering_type_speeds(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_ports(
        &self,
        req: crate::model::ListPortsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::PortCollection>> {
        T::list_ports(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_port(
        &self,
        req: crate::model::GetPortRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Port>> {
        T::get_port(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_gateway_virtual_connections(
        &self,
        req: crate::model::ListGatewayVirtualConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GatewayVirtualConnectionCollection>> {
        T::list_gateway_virtual_connections(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_gateway_virtual_connection(
        &self,
        req: crate::model::CreateGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GatewayVirtualConnection>> {
        T::create_gateway_virtual_connection(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_gateway_virtual_connection(
        &self,
        req: crate::model::DeleteGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_gateway_virtual_connection(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_gateway_virtual_connection(
        &self,
        req: crate::model::GetGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GatewayVirtualConnection>> {
        T::get_gateway_virtual_connection(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_gateway_virtual_connection(
        &self,
        req: crate::model::UpdateGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GatewayVirtualConnection>> {
        T::update_gateway_virtual_connection(self, req, options).await
    }
}
