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
use gaxi::http::{Body, ReqwestClient};
use reqwest::Method;

/// Implements [TransitGateway](super::stub::TransitGateway) using a [ReqwestClient].
#[derive(Clone)]
pub struct TransitGateway {
    inner: ReqwestClient,
    identity: crate::client::Identity,
}

impl std::fmt::Debug for TransitGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("TransitGateway")
            .field("inner", &self.inner)
            .field("identity", &self.identity)
            .finish()
    }
}

impl TransitGateway {
    pub fn new(
        config: gaxi::options::ClientConfig,
        identity: crate::client::Identity,
    ) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(
            config,
            &crate::info::CLIENT_INFO,
            crate::DEFAULT_SERVICE_URL,
            crate::DEFAULT_SERVICE_NAME,
        )?;
        Ok(Self { inner, identity })
    }

    pub(crate) fn service_url(&self) -> &str {
        self.inner.endpoint()
    }

    pub(crate) fn retry_switch(&self) -> gax::retry_policy::RetrySwitch {
        self.inner.retry_switch().clone()
    }
}

impl super::stub::TransitGateway for TransitGateway {
    async fn list_connections(
        &self,
        req: crate::model::ListConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitConnectionCollection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = "/connections".to_string();
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        let builder = req.start.add(builder, "start");
        let builder = req.limit.add(builder, "limit");
        let builder = req.network_id.add(builder, "network_id");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn list_transit_gateways(
        &self,
        req: crate::model::ListTransitGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGatewayCollection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = "/transit_gateways".to_string();
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        let builder = req.start.add(builder, "start");
        let builder = req.limit.add(builder, "limit");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn create_transit_gateway(
        &self,
        req: crate::model::CreateTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGateway>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        gax::path_parameter::validate(&[("location", &req.location), ("name", &req.name)])?;
        let body = Body::json(&req)?;
        let path = "/transit_gateways".to_string();
        let builder = self.inner.builder(Method::POST, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, body, options).await
    }

    async fn delete_transit_gateway(
        &self,
        req: crate::model::DeleteTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::DELETE),
        );
        gax::path_parameter::validate(&[("id", &req.id)])?;
        let path = format!(
            "/transit_gateways/{}",
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn get_transit_gateway(
        &self,
        req: crate::model::GetTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGateway>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("id", &req.id)])?;
        let path = format!(
            "/transit_gateways/{}",
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_transit_gateway(
        &self,
        req: crate::model::UpdateTransitGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGateway>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PATCH),
        );
        gax::path_parameter::validate(&[("id", &req.id)])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/transit_gateways/{}",
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::PATCH, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, body, options).await
    }

    async fn list_transit_gateway_connections(
        &self,
        req: crate::model::ListTransitGatewayConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGatewayConnectionCollection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("transit_gateway_id", &req.transit_gateway_id)])?;
        let path = format!(
            "/transit_gateways/{}/connections",
            gaxi::path_parameter::encode(&req.transit_gateway_id),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        let builder = req.start.add(builder, "start");
        let builder = req.limit.add(builder, "limit");
        let builder = req.name.add(builder, "name");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn create_transit_gateway_connection(
        &self,
        req: crate::model::CreateTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGatewayConnection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        gax::path_parameter::validate(&[
            ("transit_gateway_id", &req.transit_gateway_id),
            ("network_type", &req.network_type),
        ])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/transit_gateways/{}/connections",
            gaxi::path_parameter::encode(&req.transit_gateway_id),
        );
        let builder = self.inner.builder(Method::POST, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        let builder = req
            .x_correlation_id
            .iter()
            .fold(builder, |builder, v| builder.header("X-Correlation-ID", v));
        self.inner.execute(builder, body, options).await
    }

    async fn delete_transit_gateway_connection(
        &self,
        req: crate::model::DeleteTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::DELETE),
        );
        gax::path_parameter::validate(&[
            ("transit_gateway_id", &req.transit_gateway_id),
            ("id", &req.id),
        ])?;
        let path = format!(
            "/transit_gateways/{}/connections/{}",
            gaxi::path_parameter::encode(&req.transit_gateway_id),
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        let builder = req
            .x_correlation_id
            .iter()
            .fold(builder, |builder, v| builder.header("X-Correlation-ID", v));
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn get_transit_gateway_connection(
        &self,
        req: crate::model::GetTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGatewayConnection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[
            ("transit_gateway_id", &req.transit_gateway_id),
            ("id", &req.id),
        ])?;
        let path = format!(
            "/transit_gateways/{}/connections/{}",
            gaxi::path_parameter::encode(&req.transit_gateway_id),
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        let builder = req
            .x_correlation_id
            .iter()
            .fold(builder, |builder, v| builder.header("X-Correlation-ID", v));
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_transit_gateway_connection(
        &self,
        req: crate::model::UpdateTransitGatewayConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TransitGatewayConnection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PATCH),
        );
        gax::path_parameter::validate(&[
            ("transit_gateway_id", &req.transit_gateway_id),
            ("id", &req.id),
        ])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/transit_gateways/{}/connections/{}",
            gaxi::path_parameter::encode(&req.transit_gateway_id),
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::PATCH, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        let builder = req
            .x_correlation_id
            .iter()
            .fold(builder, |builder, v| builder.header("X-Correlation-ID", v));
        self.inner.execute(builder, body, options).await
    }

    async fn create_transit_gateway_connection_actions(
        &self,
        req: crate::model::CreateTransitGatewayConnectionActionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        gax::path_parameter::validate(&[
            ("transit_gateway_id", &req.transit_gateway_id),
            ("id", &req.id),
            ("action", &req.action),
        ])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/transit_gateways/{}/connections/{}/actions",
            gaxi::path_parameter::encode(&req.transit_gateway_id),
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::POST, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        let builder = req
            .x_correlation_id
            .iter()
            .fold(builder, |builder, v| builder.header("X-Correlation-ID", v));
        self.inner.execute(builder, body, options).await
    }

    async fn list_gateway_locations(
        &self,
        _req: crate::model::ListGatewayLocationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TsCollection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = "/locations".to_string();
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn get_gateway_location(
        &self,
        req: crate::model::GetGatewayLocationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TsLocation>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("name", &req.name)])?;
        let path = format!(
            "/locations/{}",
            gaxi::path_parameter::encode(&req.name),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, Body::Empty, options).await
    }
}
