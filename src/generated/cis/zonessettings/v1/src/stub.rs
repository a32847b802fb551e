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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::ZonesSettings].
///
/// Application developers may need to implement this trait to mock
/// `client::ZonesSettings`.  In other use-cases, application developers only
/// use `client::ZonesSettings` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait ZonesSettings: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::ZonesSettings::get_zone_dnssec].
    fn get_zone_dnssec(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::DnssecSettings>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::update_zone_dnssec].
    fn update_zone_dnssec(
        &self,
        _req: crate::model::UpdateZoneDnssecRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::DnssecSettings>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::get_zone_cname_flattening].
    fn get_zone_cname_flattening(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::update_zone_cname_flattening].
    fn update_zone_cname_flattening(
        &self,
        _req: crate::model::UpdateStringSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::get_opportunistic_encryption].
    fn get_opportunistic_encryption(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::update_opportunistic_encryption].
    fn update_opportunistic_encryption(
        &self,
        _req: crate::model::UpdateStringSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::get_challenge_ttl].
    fn get_challenge_ttl(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<i64>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::update_challenge_ttl].
    fn update_challenge_ttl(
        &self,
        _req: crate::model::UpdateChallengeTtlRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<i64>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::get_automatic_https_rewrites].
    fn get_automatic_https_rewrites(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::update_automatic_https_rewrites].
    fn update_automatic_https_rewrites(
        &self,
        _req: crate::model::UpdateStringSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::get_min_tls_version].
    fn get_min_tls_version(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::update_min_tls_version].
    fn update_min_tls_version(
        &self,
        _req: crate::model::UpdateStringSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::get_ciphers].
    fn get_ciphers(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<Vec<String>>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::update_ciphers].
    fn update_ciphers(
        &self,
        _req: crate::model::UpdateCiphersRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<Vec<String>>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::get_security_header].
    fn get_security_header(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::SecurityHeaderValue>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::update_security_header].
    fn update_security_header(
        &self,
        _req: crate::model::UpdateSecurityHeaderRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::SecurityHeaderValue>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::get_minify].
    fn get_minify(
        &self,
        _req: crate::model::GetZoneSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::MinifyValue>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZonesSettings::update_minify].
    fn update_minify(
        &self,
        _req: crate::model::UpdateMinifyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::MinifyValue>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
