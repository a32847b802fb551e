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

/// Implements [DirectLink](super::stub::DirectLink) using a [ReqwestClient].
#[derive(Clone)]
pub struct DirectLink {
    inner: ReqwestClient,
    identity: crate::client::Identity,
}

impl std::fmt::Debug for DirectLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("DirectLink")
            .field("inner", &self.inner)
            .field("identity", &self.identity)
            .finish()
    }
}

impl DirectLink {
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

impl super::stub::DirectLink for DirectLink {
    async fn list_gateways(
        &self,
        _req: crate::model::ListGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GatewayCollection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = "/gateways".to_string();
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn create_gateway(
        &self,
        req: crate::model::CreateGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Gateway>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        let body = Body::json(&req)?;
        let path = "/gateways".to_string();
        let builder = self.inner.builder(Method::POST, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, body, options).await
    }

    async fn delete_gateway(
        &self,
        req: crate::model::DeleteGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::DELETE),
        );
        gax::path_parameter::validate(&[("id", &req.id)])?;
        let path = format!(
            "/gateways/{}",
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn get_gateway(
        &self,
        req: crate::model::GetGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Gateway>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("id", &req.id)])?;
        let path = format!(
            "/gateways/{}",
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_gateway(
        &self,
        req: crate::model::UpdateGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Gateway>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PATCH),
        );
        gax::path_parameter::validate(&[("id", &req.id)])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/gateways/{}",
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::PATCH, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, body, options).await
    }

    async fn create_gateway_action(
        &self,
        req: crate::model::CreateGatewayActionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Gateway>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        gax::path_parameter::validate(&[("id", &req.id), ("action", &req.action)])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/gateways/{}/actions",
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::POST, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, body, options).await
    }

    async fn list_gateway_completion_notice(
        &self,
        req: crate::model::ListGatewayCompletionNoticeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::streaming::ByteStream>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("id", &req.id)])?;
        let path = format!(
            "/gateways/{}/completion_notice",
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner
            .execute_stream(builder, Body::Empty, "application/pdf", options)
            .await
    }

    async fn create_gateway_completion_notice(
        &self,
        req: crate::model::CreateGatewayCompletionNoticeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PUT),
        );
        gax::path_parameter::validate(&[("id", &req.id), ("upload", &req.upload)])?;
        let path = format!(
            "/gateways/{}/completion_notice",
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::PUT, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        let body = Body::Multipart(vec![gaxi::http::FormPart {
            name: "upload",
            file_name: Some("completion_notice.pdf".to_string()),
            content_type: Some("application/pdf".to_string()),
            payload: req.upload,
        }]);
        self.inner.execute(builder, body, options).await
    }

    async fn list_gateway_letter_of_authorization(
        &self,
        req: crate::model::ListGatewayLetterOfAuthorizationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::streaming::ByteStream>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("id", &req.id)])?;
        let path = format!(
            "/gateways/{}/letter_of_authorization",
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner
            .execute_stream(builder, Body::Empty, "application/pdf", options)
            .await
    }

    async fn get_gateway_statistics(
        &self,
        req: crate::model::GetGatewayStatisticsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GatewayStatisticCollection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("id", &req.id), ("type", &req.r#type)])?;
        let path = format!(
            "/gateways/{}/statistics",
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        let builder = req.r#type.add(builder, "type");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn list_offering_type_locations(
        &self,
        req: crate::model::ListOfferingTypeLocationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LocationCollection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("offering_type", &req.offering_type)])?;
        let path = format!(
            "/offering_types/{}/locations",
            gaxi::path_parameter::encode(&req.offering_type),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn list_offering_type_location_cross_connect_routers(
        &self,
        req: crate::model::ListOfferingTypeLocationCrossConnectRoutersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LocationCrossConnectRouterCollection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[
            ("offering_type", &req.offering_type),
            ("location_name", &req.location_name),
        ])?;
        let path = format!(
            "/offering_types/{}/locations/{}/cross_connect_routers",
            gaxi::path_parameter::encode(&req.offering_type),
            gaxi::path_parameter::encode(&req.location_name),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn list_offering_type_speeds(
        &self,
        req: crate::model::ListOfferingTypeSpeedsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::OfferingSpeedCollection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("offering_type", &req.offering_type)])?;
        let path = format!(
            "/offering_types/{}/speeds",
            gaxi::path_parameter::encode(&req.offering_type),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn list_ports(
        &self,
        req: crate::model::ListPortsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::PortCollection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = "/ports".to_string();
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        let builder = req.start.add(builder, "start");
        let builder = req.limit.add(builder, "limit");
        let builder = req.location_name.add(builder, "location_name");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn get_port(
        &self,
        req: crate::model::GetPortRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Port>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("id", &req.id)])?;
        let path = format!(
            "/ports/{}",
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn list_gateway_virtual_connections(
        &self,
        req: crate::model::ListGatewayVirtualConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GatewayVirtualConnectionCollection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("gateway_id", &req.gateway_id)])?;
        let path = format!(
            "/gateways/{}/virtual_connections",
            gaxi::path_parameter::encode(&req.gateway_id),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn create_gateway_virtual_connection(
        &self,
        req: crate::model::CreateGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GatewayVirtualConnection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        gax::path_parameter::validate(&[
            ("gateway_id", &req.gateway_id),
            ("name", &req.name),
            ("type", &req.r#type),
        ])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/gateways/{}/virtual_connections",
            gaxi::path_parameter::encode(&req.gateway_id),
        );
        let builder = self.inner.builder(Method::POST, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, body, options).await
    }

    async fn delete_gateway_virtual_connection(
        &self,
        req: crate::model::DeleteGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::DELETE),
        );
        gax::path_parameter::validate(&[("gateway_id", &req.gateway_id), ("id", &req.id)])?;
        let path = format!(
            "/gateways/{}/virtual_connections/{}",
            gaxi::path_parameter::encode(&req.gateway_id),
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn get_gateway_virtual_connection(
        &self,
        req: crate::model::GetGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GatewayVirtualConnection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("gateway_id", &req.gateway_id), ("id", &req.id)])?;
        let path = format!(
            "/gateways/{}/virtual_connections/{}",
            gaxi::path_parameter::encode(&req.gateway_id),
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_gateway_virtual_connection(
        &self,
        req: crate::model::UpdateGatewayVirtualConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GatewayVirtualConnection>> {
        use gaxi::query_parameter::QueryParameter;
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PATCH),
        );
        gax::path_parameter::validate(&[("gateway_id", &req.gateway_id), ("id", &req.id)])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/gateways/{}/virtual_connections/{}",
            gaxi::path_parameter::encode(&req.gateway_id),
            gaxi::path_parameter::encode(&req.id),
        );
        let builder = self.inner.builder(Method::PATCH, path);
        let builder = self.identity.version.as_str().add(builder, "version");
        self.inner.execute(builder, body, options).await
    }
}
