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

/// A dyn-compatible, crate-private version of [super::ZonesSettings].
#[async_trait::async_trait]
pub trait ZonesSettings: std::fmt::Debug + Send + Sync {
    async fn get_zone_dnssec(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::DnssecSettings>>>;

    async fn update_zone_dnssec(
        &self,
        req: crate::model::UpdateZoneDnssecRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::DnssecSettings>>>;

    async fn get_zone_cname_flattening(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>;

    async fn update_zone_cname_flattening(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>;

    async fn get_opportunistic_encryption(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>;

    async fn update_opportunistic_encryption(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>;

    async fn get_challenge_ttl(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<i64>>>>;

    async fn update_challenge_ttl(
        &self,
        req: crate::model::UpdateChallengeTtlRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<i64>>>>;

    async fn get_automatic_https_rewrites(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>;

    async fn update_automatic_https_rewrites(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>;

    async fn get_min_tls_version(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>;

    async fn update_min_tls_version(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>;

    async fn get_ciphers(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<Vec<String>>>>>;

    async fn update_ciphers(
        &self,
        req: crate::model::UpdateCiphersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<Vec<String>>>>>;

    async fn get_security_header(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::SecurityHeaderValue>>>>;

    async fn update_security_header(
        &self,
        req: crate::model::UpdateSecurityHeaderRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::SecurityHeaderValue>>>>;

    async fn get_minify(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::MinifyValue>>>>;

    async fn update_minify(
        &self,
        req: crate::model::UpdateMinifyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::MinifyValue>>>>;
}

/// All implementations of [super::ZonesSettings] also implement [ZonesSettings].
#[async_trait::async_trait]
impl<T: super::ZonesSettings> ZonesSettings for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_zone_dnssec(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::DnssecSettings>>,
    > {
        T::get_zone_dnssec(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_zone_dnssec(
        &self,
        req: crate::model::UpdateZoneDnssecRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::DnssecSettings>>,
    > {
        T::update_zone_dnssec(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_zone_cname_flattening(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
    > {
        T::get_zone_cname_flattening(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_zone_cname_flattening(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
    > {
        T::update_zone_cname_flattening(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_opportunistic_encryption(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
    > {
        T::get_opportunistic_encryption(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_opportunistic_encryption(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
    > {
        T::update_opportunistic_encryption(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_challenge_ttl(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<i64>>>,
    > {
        T::get_challenge_ttl(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_challenge_ttl(
        &self,
        req: crate::model::UpdateChallengeTtlRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<i64>>>,
    > {
        T::update_challenge_ttl(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_automatic_https_rewrites(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
    > {
        T::get_automatic_https_rewrites(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_automatic_https_rewrites(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
    > {
        T::update_automatic_https_rewrites(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_min_tls_version(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
    > {
        T::get_min_tls_version(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_min_tls_version(
        &self,
        req: crate::model::UpdateStringSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
    > {
        T::update_min_tls_version(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_ciphers(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<Vec<String>>>>,
    > {
        T::get_ciphers(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_ciphers(
        &self,
        req: crate::model::UpdateCiphersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<Vec<String>>>>,
    > {
        T::update_ciphers(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_security_header(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::SecurityHeaderValue>>>,
    > {
        T::get_security_header(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_security_header(
        &self,
        req: crate::model::UpdateSecurityHeaderRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::SecurityHeaderValue>>>,
    > {
        T::update_security_header(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_minify(
        &self,
        req: crate::model::GetZoneSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::MinifyValue>>>,
    > {
        T::get_minify(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_minify(
        &self,
        req: crate::model::UpdateMinifyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::MinifyValue>>>,
    > {
        T::update_minify(self, req, options).await
    }
}
