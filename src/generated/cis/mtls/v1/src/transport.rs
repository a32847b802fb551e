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

/// Implements [Mtls](super::stub::Mtls) using a [ReqwestClient].
#[derive(Clone)]
pub struct Mtls {
    inner: ReqwestClient,
    identity: crate::client::Identity,
}

impl std::fmt::Debug for Mtls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Mtls")
            .field("inner", &self.inner)
            .field("identity", &self.identity)
            .finish()
    }
}

impl Mtls {
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

impl super::stub::Mtls for Mtls {
    async fn list_access_certificates(
        &self,
        req: crate::model::ListAccessCertificatesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertificate>>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("zone_id", &req.zone_id)])?;
        let path = format!(
            "/v1/{}/zones/{}/access/certificates",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn create_access_certificate(
        &self,
        req: crate::model::CreateAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        gax::path_parameter::validate(&[("zone_id", &req.zone_id)])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/access/certificates",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
        );
        let builder = self.inner.builder(Method::POST, path);
        self.inner.execute(builder, body, options).await
    }

    async fn get_access_certificate(
        &self,
        req: crate::model::GetAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("zone_id", &req.zone_id), ("cert_id", &req.cert_id)])?;
        let path = format!(
            "/v1/{}/zones/{}/access/certificates/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
            gaxi::path_parameter::encode(&req.cert_id),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_access_certificate(
        &self,
        req: crate::model::UpdateAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PUT),
        );
        gax::path_parameter::validate(&[("zone_id", &req.zone_id), ("cert_id", &req.cert_id)])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/access/certificates/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
            gaxi::path_parameter::encode(&req.cert_id),
        );
        let builder = self.inner.builder(Method::PUT, path);
        self.inner.execute(builder, body, options).await
    }

    async fn delete_access_certificate(
        &self,
        req: crate::model::DeleteAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::DELETE),
        );
        gax::path_parameter::validate(&[("zone_id", &req.zone_id), ("cert_id", &req.cert_id)])?;
        let path = format!(
            "/v1/{}/zones/{}/access/certificates/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
            gaxi::path_parameter::encode(&req.cert_id),
        );
        let builder = self.inner.builder(Method::DELETE, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn list_access_certificates_settings(
        &self,
        req: crate::model::ListAccessCertificatesSettingsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertSettings>>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("zone_id", &req.zone_id)])?;
        let path = format!(
            "/v1/{}/zones/{}/access/certificates/settings",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_access_certificates_settings(
        &self,
        req: crate::model::UpdateAccessCertificatesSettingsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertSettings>>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PUT),
        );
        gax::path_parameter::validate(&[("zone_id", &req.zone_id), ("settings", &req.settings)])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/access/certificates/settings",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
        );
        let builder = self.inner.builder(Method::PUT, path);
        self.inner.execute(builder, body, options).await
    }

    async fn create_access_application(
        &self,
        req: crate::model::CreateAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        gax::path_parameter::validate(&[("zone_id", &req.zone_id)])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/access/apps",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
        );
        let builder = self.inner.builder(Method::POST, path);
        self.inner.execute(builder, body, options).await
    }

    async fn list_access_applications(
        &self,
        req: crate::model::ListAccessApplicationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessApplication>>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("zone_id", &req.zone_id)])?;
        let path = format!(
            "/v1/{}/zones/{}/access/apps",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn get_access_application(
        &self,
        req: crate::model::GetAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("zone_id", &req.zone_id), ("app_id", &req.app_id)])?;
        let path = format!(
            "/v1/{}/zones/{}/access/apps/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
            gaxi::path_parameter::encode(&req.app_id),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_access_application(
        &self,
        req: crate::model::UpdateAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PUT),
        );
        gax::path_parameter::validate(&[("zone_id", &req.zone_id), ("app_id", &req.app_id)])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/access/apps/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
            gaxi::path_parameter::encode(&req.app_id),
        );
        let builder = self.inner.builder(Method::PUT, path);
        self.inner.execute(builder, body, options).await
    }

    async fn delete_access_application(
        &self,
        req: crate::model::DeleteAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::DELETE),
        );
        gax::path_parameter::validate(&[("zone_id", &req.zone_id), ("app_id", &req.app_id)])?;
        let path = format!(
            "/v1/{}/zones/{}/access/apps/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
            gaxi::path_parameter::encode(&req.app_id),
        );
        let builder = self.inner.builder(Method::DELETE, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn create_access_policy(
        &self,
        req: crate::model::CreateAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        gax::path_parameter::validate(&[("zone_id", &req.zone_id), ("app_id", &req.app_id)])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/access/apps/{}/policies",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
            gaxi::path_parameter::encode(&req.app_id),
        );
        let builder = self.inner.builder(Method::POST, path);
        self.inner.execute(builder, body, options).await
    }

    async fn list_access_policies(
        &self,
        req: crate::model::ListAccessPoliciesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessPolicy>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("zone_id", &req.zone_id), ("app_id", &req.app_id)])?;
        let path = format!(
            "/v1/{}/zones/{}/access/apps/{}/policies",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
            gaxi::path_parameter::encode(&req.app_id),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn get_access_policy(
        &self,
        req: crate::model::GetAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[
            ("zone_id", &req.zone_id),
            ("app_id", &req.app_id),
            ("policy_id", &req.policy_id),
        ])?;
        let path = format!(
            "/v1/{}/zones/{}/access/apps/{}/policies/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
            gaxi::path_parameter::encode(&req.app_id),
            gaxi::path_parameter::encode(&req.policy_id),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_access_policy(
        &self,
        req: crate::model::UpdateAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PUT),
        );
        gax::path_parameter::validate(&[
            ("zone_id", &req.zone_id),
            ("app_id", &req.app_id),
            ("policy_id", &req.policy_id),
        ])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/access/apps/{}/policies/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
            gaxi::path_parameter::encode(&req.app_id),
            gaxi::path_parameter::encode(&req.policy_id),
        );
        let builder = self.inner.builder(Method::PUT, path);
        self.inner.execute(builder, body, options).await
    }

    async fn delete_access_policy(
        &self,
        req: crate::model::DeleteAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::DELETE),
        );
        gax::path_parameter::validate(&[
            ("zone_id", &req.zone_id),
            ("app_id", &req.app_id),
            ("policy_id", &req.policy_id),
        ])?;
        let path = format!(
            "/v1/{}/zones/{}/access/apps/{}/policies/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&req.zone_id),
            gaxi::path_parameter::encode(&req.app_id),
            gaxi::path_parameter::encode(&req.policy_id),
        );
        let builder = self.inner.builder(Method::DELETE, path);
        self.inner.execute(builder, Body::Empty, options).await
    }
}
