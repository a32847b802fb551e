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

/// Implements a [DirectLink](super::stub::DirectLink) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct DirectLink<T>
where
    T: super::stub::DirectLink + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> DirectLink<T>
where
    T: super::stub::DirectLink + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::DirectLink for DirectLink<T>
where
    T: super::stub::DirectLink + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "debug", ret)]
    async fn list_gateways(
        &self,
        req: crate::model::ListGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GatewayCollection>> {
        self.inner.list_gateways(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_gateway(
        &self,
        req: crate::model::CreateGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Gateway>> {
        self.inner.create_gateway(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_gateway(
        &self,
        req: crate::model::DeleteGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_gateway(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_gateway(
        &self,
        req: crate::model::GetGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Gateway>> {
        self.inner.get_gateway(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_gateway(
        &self,
        req: crate::model::UpdateGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Gateway>> {
        self.inner.update_gateway(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_gateway_action(
        &self,
        req: crate::model::CreateGatewayActionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Gateway>> {
        self.inner.create_gateway_action(req, options).await
    }

    #[tracing::instrument(level = "debug")]
    async fn list_gateway_completion_notice(
        &self,
        req: crate::model::ListGatewayCompletionNoticeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::streaming::ByteStream>> {
        self.inner.list_gateway_completion_notice(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_gateway_completion_notice(
        &self,
        req: crate::model::CreateGatewayCompletionNoticeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.create_gateway_completion_notice(req, options).await
    }

    #[tracing::instrument(level = "debug")]
    async fn list_gateway_letter_of_authorization(
        &self,
        req: crate::model::ListGatewayLetterOfAuthorizationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::streaming::ByteStream>> {
        self.inner.list_gateway_letter_of_authorization(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_gateway_statistics(
        &self,
        req: crate::model::GetGatewayStatisticsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GatewayStatisticCollection>> {
        self.inner.get_gateway_statistics(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_offering_type_locations(
        &self,
        req: crate::model::ListOfferingTypeLocationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LocationCollection>> {
        self.inner.list_offering_type_locations(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_offering_type_location_cross_connect_routers(
        &self,
        req: crate::model::ListOfferingTypeLocationCrossConnectRoutersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LocationCrossConnectRouterCollection>> {
        self.inner.list_offering_type_location_cross_connect_routers(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_offering_type_speeds(
        &self,
        req: crate::model::ListOfferingTypeSpeedsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::OfferingSpeedCollection>> {
        self.inner.list_offering_type_speeds(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_ports(
        &self,
        req: crate::model::ListPortsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::PortCollection>> {
        self.inner.list_ports(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_port(
        &self,
        req: crate::model::GetPortRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Port>> {
        self.inner.get_port(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_gateway_virtual_connections(
        &self,
        req: crate::model::ListGatewayVirtualConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GatewayVirtualConnectionCollection>> {
        self.inner.list_gateway_virtual_connections(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_gateway_virtual_connection(
        &self,
        req: crate::model::CreateGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GatewayVirtualConnection>> {
        self.inner.create_gateway_virtual_connection(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_gateway_virtual_connection(
        &self,
        req: crate::model::DeleteGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_gateway_virtual_connection(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_gateway_virtual_connection(
        &self,
        req: crate::model::GetGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GatewayVirtualConnection>> {
        self.inner.get_gateway_virtual_connection(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_gateway_virtual_connection(
        &self,
        req: crate::model::UpdateGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GatewayVirtualConnection>> {
        self.inner.update_gateway_virtual_connection(req, options).await
    }
}
