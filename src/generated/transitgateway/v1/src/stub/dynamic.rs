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

/// A dyn-compatible, crate-private version of [super::TransitGateway].
#[async_trait::async_trait]
pub trait TransitGateway: std::fmt::Debug + Send + Sync {
    async fn list_connections(
        &self,
        req: crate::model::ListConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitConnectionCollection>>;

    async fn list_transit_gateways(
        &self,
        req: crate::model::ListTransitGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGatewayCollection>>;

    async fn create_transit_gateway(
        &self,
        req: crate::model::CreateTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGateway>>;

    async fn delete_transit_gateway(
        &self,
        req: crate::model::DeleteTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn get_transit_gateway(
        &self,
        req: crate::model::GetTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGateway>>;

    async fn update_transit_gateway(
        &self,
        req: crate::model::UpdateTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGateway>>;

    async fn list_transit_gateway_connections(
        &self,
        req: crate::model::ListTransitGatewayConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGatewayConnectionCollection>>;

    async fn create_transit_gateway_connection(
        &self,
        req: crate::model::CreateTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGatewayConnection>>;

    async fn delete_transit_gateway_connection(
        &self,
        req: crate::model::DeleteTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn get_transit_gateway_connection(
        &self,
        req: crate::model::GetTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGatewayConnection>>;

    async fn update_transit_gateway_connection(
        &self,
        req: crate::model::UpdateTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGatewayConnection>>;

    async fn create_transit_gateway_connection_actions(
        &self,
        req: crate::model::CreateTransitGatewayConnectionActionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn list_gateway_locations(
        &self,
        req: crate::model::ListGatewayLocationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TsCollection>>;

    async fn get_gateway_location(
        &self,
        req: crate::model::GetGatewayLocationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TsLocation>>;
}

/// All implementations of [super::TransitGateway] also implement [TransitGateway].
#[async_trait::async_trait]
impl<T: super::TransitGateway> TransitGateway for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_connections(
        &self,
        req: crate::model::ListConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitConnectionCollection>> {
        T::list_connections(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_transit_gateways(
        &self,
        req: crate::model::ListTransitGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGatewayCollection>> {
        T::list_transit_gateways(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_transit_gateway(
        &self,
        req: crate::model::CreateTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGateway>> {
        T::create_transit_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_transit_gateway(
        &self,
        req: crate::model::DeleteTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_transit_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_transit_gateway(
        &self,
        req: crate::model::GetTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGateway>> {
        T::get_transit_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_transit_gateway(
        &self,
        req: crate::model::UpdateTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGateway>> {
        T::update_transit_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_transit_gateway_connections(
        &self,
        req: crate::model::ListTransitGatewayConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGatewayConnectionCollection>> {
        T::list_transit_gateway_connections(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_transit_gateway_connection(
        &self,
        req: crate::model::CreateTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGatewayConnection>> {
        T::create_transit_gateway_connection(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_transit_gateway_connection(
        &self,
        req: crate::model::DeleteTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_transit_gateway_connection(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_transit_gateway_connection(
        &self,
        req: crate::model::GetTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGatewayConnection>> {
        T::get_transit_gateway_connection(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_transit_gateway_connection(
        &self,
        req: crate::model::UpdateTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TransitGatewayConnection>> {
        T::update_transit_gateway_connection(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_transit_gateway_connection_actions(
        &self,
        req: crate::model::CreateTransitGatewayConnectionActionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::create_transit_gateway_connection_actions(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_gateway_locations(
        &self,
        req: crate::model::ListGatewayLocationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TsCollection>> {
        T::list_gateway_locations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_gateway_location(
        &self,
        req: crate::model::GetGatewayLocationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TsLocation>> {
        T::get_gateway_location(self, req, options).await
    }
}
