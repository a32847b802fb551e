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

/// Implements a [TransitGateway](super::stub::TransitGateway) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct TransitGateway<T>
where
    T: super::stub::TransitGateway + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> TransitGateway<T>
where
    T: super::stub::TransitGateway + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::TransitGateway for TransitGateway<T>
where
    T: super::stub::TransitGateway + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "debug", ret)]
    async fn list_connections(
        &self,
        req: crate::model::ListConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitConnectionCollection>> {
        self.inner.list_connections(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_transit_gateways(
        &self,
        req: crate::model::ListTransitGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGatewayCollection>> {
        self.inner.list_transit_gateways(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_transit_gateway(
        &self,
        req: crate::model::CreateTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGateway>> {
        self.inner.create_transit_gateway(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_transit_gateway(
        &self,
        req: crate::model::DeleteTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_transit_gateway(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_transit_gateway(
        &self,
        req: crate::model::GetTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGateway>> {
        self.inner.get_transit_gateway(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_transit_gateway(
        &self,
        req: crate::model::UpdateTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGateway>> {
        self.inner.update_transit_gateway(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_transit_gateway_connections(
        &self,
        req: crate::model::ListTransitGatewayConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGatewayConnectionCollection>> {
        self.inner.list_transit_gateway_connections(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_transit_gateway_connection(
        &self,
        req: crate::model::CreateTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGatewayConnection>> {
        self.inner.create_transit_gateway_connection(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_transit_gateway_connection(
        &self,
        req: crate::model::DeleteTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_transit_gateway_connection(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_transit_gateway_connection(
        &self,
        req: crate::model::GetTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGatewayConnection>> {
        self.inner.get_transit_gateway_connection(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_transit_gateway_connection(
        &self,
        req: crate::model::UpdateTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGatewayConnection>> {
        self.inner.update_transit_gateway_connection(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_transit_gateway_connection_actions(
        &self,
        req: crate::model::CreateTransitGatewayConnectionActionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.create_transit_gateway_connection_actions(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_gateway_locations(
        &self,
        req: crate::model::ListGatewayLocationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TsCollection>> {
        self.inner.list_gateway_locations(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_gateway_location(
        &self,
        req: crate::model::GetGatewayLocationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TsLocation>> {
        self.inner.get_gateway_location(req, options).await
    }
}
