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

/// Implements [ZonesSettings](super::stub::ZonesSettings) using a [ReqwestClient].
#[derive(Clone)]
pub struct ZonesSettings {
    inner: ReqwestClient,
    identity: crate::client::Identity,
}

impl std::fmt::Debug for ZonesSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("ZonesSettings")
            .field("inner", &self.inner)
            .field("identity", &self.identity)
            .finish()
    }
}

impl ZonesSettings {
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

impl super::stub::ZonesSettings for ZonesSettings {
    async fn get_zone_dnssec(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::DnssecSettings>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v1/{}/zones/{}/dnssec",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_zone_dnssec(
        &self,
        req: crate::model::UpdateZoneDnssecRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::DnssecSettings>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PATCH),
        );
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/dnssec",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::PATCH, path);
        self.inner.execute(builder, body, options).await
    }

    async fn get_zone_cname_flattening(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v1/{}/zones/{}/settings/cname_flattening",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_zone_cname_flattening(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PATCH),
        );
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/settings/cname_flattening",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::PATCH, path);
        self.inner.execute(builder, body, options).await
    }

    async fn get_opportunistic_encryption(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v1/{}/zones/{}/settings/opportunistic_encryption",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_opportunistic_encryption(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PATCH),
        );
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/settings/opportunistic_encryption",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::PATCH, path);
        self.inner.execute(builder, body, options).await
    }

    async fn get_challenge_ttl(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<i64>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v1/{}/zones/{}/settings/challenge_ttl",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_challenge_ttl(
        &self,
        req: crate::model::UpdateChallengeTtlRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<i64>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PATCH),
        );
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/settings/challenge_ttl",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::PATCH, path);
        self.inner.execute(builder, body, options).await
    }

    async fn get_automatic_https_rewrites(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v1/{}/zones/{}/settings/automatic_https_rewrites",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_automatic_https_rewrites(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PATCH),
        );
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/settings/automatic_https_rewrites",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::PATCH, path);
        self.inner.execute(builder, body, options).await
    }

    async fn get_min_tls_version(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v1/{}/zones/{}/settings/min_tls_version",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_min_tls_version(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PATCH),
        );
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/settings/min_tls_version",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::PATCH, path);
        self.inner.execute(builder, body, options).await
    }

    async fn get_ciphers(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<Vec<String>>>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v1/{}/zones/{}/settings/ciphers",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_ciphers(
        &self,
        req: crate::model::UpdateCiphersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<Vec<String>>>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PATCH),
        );
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/settings/ciphers",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::PATCH, path);
        self.inner.execute(builder, body, options).await
    }

    async fn get_security_header(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::SecurityHeaderValue>>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v1/{}/zones/{}/settings/security_header",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_security_header(
        &self,
        req: crate::model::UpdateSecurityHeaderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::SecurityHeaderValue>>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PATCH),
        );
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/settings/security_header",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::PATCH, path);
        self.inner.execute(builder, body, options).await
    }

    async fn get_minify(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::MinifyValue>>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v1/{}/zones/{}/settings/minify",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_minify(
        &self,
        req: crate::model::UpdateMinifyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::MinifyValue>>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PATCH),
        );
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/settings/minify",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_identifier),
        );
        let builder = self.inner.builder(Method::PATCH, path);
        self.inner.execute(builder, body, options).await
    }
}
