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

/// Implements a [ZonesSettings](super::stub::ZonesSettings) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct ZonesSettings<T>
where
    T: super::stub::ZonesSettings + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> ZonesSettings<T>
where
    T: super::stub::ZonesSettings + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::ZonesSettings for ZonesSettings<T>
where
    T: super::stub::ZonesSettings + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "debug", ret)]
    async fn get_zone_dnssec(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::DnssecSettings>>> {
        self.inner.get_zone_dnssec(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_zone_dnssec(
        &self,
        req: crate::model::UpdateZoneDnssecRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::DnssecSettings>>> {
        self.inner.update_zone_dnssec(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_zone_cname_flattening(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        self.inner.get_zone_cname_flattening(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_zone_cname_flattening(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        self.inner.update_zone_cname_flattening(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_opportunistic_encryption(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        self.inner.get_opportunistic_encryption(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_opportunistic_encryption(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        self.inner.update_opportunistic_encryption(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_challenge_ttl(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<i64>>>> {
        self.inner.get_challenge_ttl(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_challenge_ttl(
        &self,
        req: crate::model::UpdateChallengeTtlRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<i64>>>> {
        self.inner.update_challenge_ttl(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_automatic_https_rewrites(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        self.inner.get_automatic_https_rewrites(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_automatic_https_rewrites(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        self.inner.update_automatic_https_rewrites(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_min_tls_version(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        self.inner.get_min_tls_version(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_min_tls_version(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>> {
        self.inner.update_min_tls_version(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_ciphers(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<Vec<String>>>>,
    > {
        self.inner.get_ciphers(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_ciphers(
        &self,
        req: crate::model::UpdateCiphersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<Vec<String>>>>,
    > {
        self.inner.update_ciphers(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_security_header(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::SecurityHeaderValue>>>,
    > {
        self.inner.get_security_header(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_security_header(
        &self,
        req: crate::model::UpdateSecurityHeaderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::SecurityHeaderValue>>>,
    > {
        self.inner.update_security_header(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_minify(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::MinifyValue>>>,
    > {
        self.inner.get_minify(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_minify(
        &self,
        req: crate::model::UpdateMinifyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::MinifyValue>>>,
    > {
        self.inner.update_minify(req, options).await
    }
}
