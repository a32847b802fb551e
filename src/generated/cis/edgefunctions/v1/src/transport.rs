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

/// Implements [EdgeFunctions](super::stub::EdgeFunctions) using a [ReqwestClient].
#[derive(Clone)]
pub struct EdgeFunctions {
    inner: ReqwestClient,
    identity: crate::client::Identity,
}

impl std::fmt::Debug for EdgeFunctions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("EdgeFunctions")
            .field("inner", &self.inner)
            .field("identity", &self.identity)
            .finish()
    }
}

impl EdgeFunctions {
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

impl super::stub::EdgeFunctions for EdgeFunctions {
    async fn list_edge_functions_actions(
        &self,
        req: crate::model::ListEdgeFunctionsActionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::EdgeFunctionsAction>>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v1/{}/workers/scripts",
            gaxi::path_parameter::encode(&self.identity.crn),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = req
            .x_correlation_id
            .iter()
            .fold(builder, |builder, v| builder.header("X-Correlation-ID", v));
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_edge_functions_action(
        &self,
        req: crate::model::UpdateEdgeFunctionsActionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsAction>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PUT),
        );
        gax::path_parameter::validate(&[
            ("script_name", &req.script_name),
            ("edge_functions_action", &req.edge_functions_action),
        ])?;
        let path = format!(
            "/v1/{}/workers/scripts/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.script_name),
        );
        let builder = self.inner.builder(Method::PUT, path);
        let builder = req
            .x_correlation_id
            .iter()
            .fold(builder, |builder, v| builder.header("X-Correlation-ID", v));
        let body = Body::raw("application/javascript", req.edge_functions_action);
        self.inner.execute(builder, body, options).await
    }

    async fn get_edge_functions_action(
        &self,
        req: crate::model::GetEdgeFunctionsActionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::streaming::ByteStream>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("script_name", &req.script_name)])?;
        let path = format!(
            "/v1/{}/workers/scripts/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.script_name),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = req
            .x_correlation_id
            .iter()
            .fold(builder, |builder, v| builder.header("X-Correlation-ID", v));
        self.inner
            .execute_stream(builder, Body::Empty, "application/javascript", options)
            .await
    }

    async fn delete_edge_functions_action(
        &self,
        req: crate::model::DeleteEdgeFunctionsActionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::DELETE),
        );
        gax::path_parameter::validate(&[("script_name", &req.script_name)])?;
        let path = format!(
            "/v1/{}/workers/scripts/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.script_name),
        );
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = req
            .x_correlation_id
            .iter()
            .fold(builder, |builder, v| builder.header("X-Correlation-ID", v));
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn create_edge_functions_trigger(
        &self,
        req: crate::model::CreateEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/workers/routes",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::POST, path);
        let builder = req
            .x_correlation_id
            .iter()
            .fold(builder, |builder, v| builder.header("X-Correlation-ID", v));
        self.inner.execute(builder, body, options).await
    }

    async fn list_edge_functions_triggers(
        &self,
        req: crate::model::ListEdgeFunctionsTriggersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::EdgeFunctionsTrigger>>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v1/{}/zones/{}/workers/routes",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = req
            .x_correlation_id
            .iter()
            .fold(builder, |builder, v| builder.header("X-Correlation-ID", v));
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn get_edge_functions_trigger(
        &self,
        req: crate::model::GetEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsTrigger>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("route_id", &req.route_id)])?;
        let path = format!(
            "/v1/{}/zones/{}/workers/routes/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
            gaxi::path_parameter::encode(&req.route_id),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = req
            .x_correlation_id
            .iter()
            .fold(builder, |builder, v| builder.header("X-Correlation-ID", v));
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_edge_functions_trigger(
        &self,
        req: crate::model::UpdateEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsTrigger>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PUT),
        );
        gax::path_parameter::validate(&[("route_id", &req.route_id)])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/workers/routes/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
            gaxi::path_parameter::encode(&req.route_id),
        );
        let builder = self.inner.builder(Method::PUT, path);
        let builder = req
            .x_correlation_id
            .iter()
            .fold(builder, |builder, v| builder.header("X-Correlation-ID", v));
        self.inner.execute(builder, body, options).await
    }

    async fn delete_edge_functions_trigger(
        &self,
        req: crate::model::DeleteEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::DELETE),
        );
        gax::path_parameter::validate(&[("route_id", &req.route_id)])?;
        let path = format!(
            "/v1/{}/zones/{}/workers/routes/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
            gaxi::path_parameter::encode(&req.route_id),
        );
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = req
            .x_correlation_id
            .iter()
            .fold(builder, |builder, v| builder.header("X-Correlation-ID", v));
        self.inner.execute(builder, Body::Empty, options).await
    }
}
