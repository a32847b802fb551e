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

//! The types used by the mTLS operations.
//!
//! Access applications protect a domain of a zone, their policies decide
//! which client certificates are accepted.

/// The values for [AccessPolicy::decision].
pub mod decision {
    pub const ALLOW: &str = "allow";
    pub const DENY: &str = "deny";
    pub const NON_IDENTITY: &str = "non_identity";
    pub const BYPASS: &str = "bypass";
}

/// A root certificate authority used to validate client certificates.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AccessCertificate {
    /// The access certificate identifier.
    pub id: String,

    pub name: String,

    /// The certificate fingerprint.
    pub fingerprint: String,

    /// The hostnames using this certificate.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub associated_hostnames: Vec<String>,

    pub created_at: Option<String>,

    pub updated_at: Option<String>,

    /// When the certificate expires, in RFC 3339 format.
    pub expires_on: Option<String>,
}

impl AccessCertificate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][AccessCertificate::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][AccessCertificate::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [fingerprint][AccessCertificate::fingerprint].
    pub fn set_fingerprint<T: Into<String>>(mut self, v: T) -> Self {
        self.fingerprint = v.into();
        self
    }

    /// Sets the value of [associated_hostnames][AccessCertificate::associated_hostnames].
    pub fn set_associated_hostnames<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.associated_hostnames = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [created_at][AccessCertificate::created_at].
    pub fn set_created_at<T: Into<String>>(mut self, v: T) -> Self {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][AccessCertificate::created_at].
    pub fn set_or_clear_created_at<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [updated_at][AccessCertificate::updated_at].
    pub fn set_updated_at<T: Into<String>>(mut self, v: T) -> Self {
        self.updated_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [updated_at][AccessCertificate::updated_at].
    pub fn set_or_clear_updated_at<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.updated_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [expires_on][AccessCertificate::expires_on].
    pub fn set_expires_on<T: Into<String>>(mut self, v: T) -> Self {
        self.expires_on = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [expires_on][AccessCertificate::expires_on].
    pub fn set_or_clear_expires_on<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.expires_on = v.map(|x| x.into());
        self
    }
}

/// The mTLS settings of a hostname.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AccessCertSettings {
    pub hostname: String,

    /// Whether the hostname is served by the China network.
    pub china_network: bool,

    /// Whether the client certificate is forwarded to the origin.
    pub client_certificate_forwarding: bool,
}

impl AccessCertSettings {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [hostname][AccessCertSettings::hostname].
    pub fn set_hostname<T: Into<String>>(mut self, v: T) -> Self {
        self.hostname = v.into();
        self
    }

    /// Sets the value of [china_network][AccessCertSettings::china_network].
    pub fn set_china_network<T: Into<bool>>(mut self, v: T) -> Self {
        self.china_network = v.into();
        self
    }

    /// Sets the value of [client_certificate_forwarding][AccessCertSettings::client_certificate_forwarding].
    pub fn set_client_certificate_forwarding<T: Into<bool>>(mut self, v: T) -> Self {
        self.client_certificate_forwarding = v.into();
        self
    }
}

/// An access application.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AccessApplication {
    /// The access application identifier.
    pub id: String,

    pub name: String,

    /// The protected domain, for example `app.example.com`.
    pub domain: String,

    /// The audience tag of the application.
    pub aud: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<AccessPolicy>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_idps: Vec<String>,

    pub auto_redirect_to_identity: bool,

    /// How long a session lasts, for example `24h`.
    pub session_duration: String,

    /// The application type, for example `self_hosted`.
    pub r#type: String,

    pub uid: String,

    pub created_at: Option<String>,

    pub updated_at: Option<String>,
}

impl AccessApplication {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][AccessApplication::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][AccessApplication::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [domain][AccessApplication::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = v.into();
        self
    }

    /// Sets the value of [aud][AccessApplication::aud].
    pub fn set_aud<T: Into<String>>(mut self, v: T) -> Self {
        self.aud = v.into();
        self
    }

    /// Sets the value of [policies][AccessApplication::policies].
    pub fn set_policies<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<AccessPolicy>,
    {
        self.policies = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [allowed_idps][AccessApplication::allowed_idps].
    pub fn set_allowed_idps<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.allowed_idps = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [auto_redirect_to_identity][AccessApplication::auto_redirect_to_identity].
    pub fn set_auto_redirect_to_identity<T: Into<bool>>(mut self, v: T) -> Self {
        self.auto_redirect_to_identity = v.into();
        self
    }

    /// Sets the value of [session_duration][AccessApplication::session_duration].
    pub fn set_session_duration<T: Into<String>>(mut self, v: T) -> Self {
        self.session_duration = v.into();
        self
    }

    /// Sets the value of [type][AccessApplication::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [uid][AccessApplication::uid].
    pub fn set_uid<T: Into<String>>(mut self, v: T) -> Self {
        self.uid = v.into();
        self
    }

    /// Sets the value of [created_at][AccessApplication::created_at].
    pub fn set_created_at<T: Into<String>>(mut self, v: T) -> Self {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][AccessApplication::created_at].
    pub fn set_or_clear_created_at<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [updated_at][AccessApplication::updated_at].
    pub fn set_updated_at<T: Into<String>>(mut self, v: T) -> Self {
        self.updated_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [updated_at][AccessApplication::updated_at].
    pub fn set_or_clear_updated_at<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.updated_at = v.map(|x| x.into());
        self
    }
}

/// A policy of an access application.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AccessPolicy {
    /// The access policy identifier.
    pub id: String,

    pub name: String,

    /// One of the values in [decision].
    pub decision: String,

    /// The rules a request must match.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<PolicyRule>,

    /// The rules a request must not match.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<PolicyRule>,

    pub precedence: i64,

    pub uid: String,

    pub created_at: Option<String>,

    pub updated_at: Option<String>,
}

impl AccessPolicy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][AccessPolicy::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][AccessPolicy::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [decision][AccessPolicy::decision].
    pub fn set_decision<T: Into<String>>(mut self, v: T) -> Self {
        self.decision = v.into();
        self
    }

    /// Sets the value of [include][AccessPolicy::include].
    pub fn set_include<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<PolicyRule>,
    {
        self.include = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [exclude][AccessPolicy::exclude].
    pub fn set_exclude<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<PolicyRule>,
    {
        self.exclude = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [precedence][AccessPolicy::precedence].
    pub fn set_precedence<T: Into<i64>>(mut self, v: T) -> Self {
        self.precedence = v.into();
        self
    }

    /// Sets the value of [uid][AccessPolicy::uid].
    pub fn set_uid<T: Into<String>>(mut self, v: T) -> Self {
        self.uid = v.into();
        self
    }

    /// Sets the value of [created_at][AccessPolicy::created_at].
    pub fn set_created_at<T: Into<String>>(mut self, v: T) -> Self {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][AccessPolicy::created_at].
    pub fn set_or_clear_created_at<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [updated_at][AccessPolicy::updated_at].
    pub fn set_updated_at<T: Into<String>>(mut self, v: T) -> Self {
        self.updated_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [updated_at][AccessPolicy::updated_at].
    pub fn set_or_clear_updated_at<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.updated_at = v.map(|x| x.into());
        self
    }
}

/// A rule of an access policy.
///
/// Set only one of the fields. `certificate` matches any valid client
/// certificate, `common_name` matches the certificate common name.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PolicyRule {
    /// Set to an empty object to match any valid client certificate.
    pub certificate: Option<serde_json::Value>,

    pub common_name: Option<PolicyCnRule>,
}

impl PolicyRule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [certificate][PolicyRule::certificate].
    pub fn set_certificate<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.certificate = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [certificate][PolicyRule::certificate].
    pub fn set_or_clear_certificate<T: Into<serde_json::Value>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.certificate = v.map(|x| x.into());
        self
    }

    /// Sets the value of [common_name][PolicyRule::common_name].
    pub fn set_common_name<T: Into<PolicyCnRule>>(mut self, v: T) -> Self {
        self.common_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [common_name][PolicyRule::common_name].
    pub fn set_or_clear_common_name<T: Into<PolicyCnRule>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.common_name = v.map(|x| x.into());
        self
    }
}

/// Matches client certificates by their common name.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PolicyCnRule {
    pub common_name: String,
}

impl PolicyCnRule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [common_name][PolicyCnRule::common_name].
    pub fn set_common_name<T: Into<String>>(mut self, v: T) -> Self {
        self.common_name = v.into();
        self
    }
}

/// The mTLS settings of a hostname, used in updates.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AccessCertSettingsInput {
    pub hostname: String,

    pub client_certificate_forwarding: bool,
}

impl AccessCertSettingsInput {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [hostname][AccessCertSettingsInput::hostname].
    pub fn set_hostname<T: Into<String>>(mut self, v: T) -> Self {
        self.hostname = v.into();
        self
    }

    /// Sets the value of [client_certificate_forwarding][AccessCertSettingsInput::client_certificate_forwarding].
    pub fn set_client_certificate_forwarding<T: Into<bool>>(mut self, v: T) -> Self {
        self.client_certificate_forwarding = v.into();
        self
    }
}

/// The identifier of a deleted resource.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeletedResource {
    pub id: String,
}

impl DeletedResource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][DeletedResource::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [list_access_certificates][crate::client::Mtls::list_access_certificates].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAccessCertificatesRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    pub zone_id: String,
}

impl ListAccessCertificatesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][ListAccessCertificatesRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }
}

/// The request for [create_access_certificate][crate::client::Mtls::create_access_certificate].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateAccessCertificateRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub zone_id: String,

    /// The certificate name.
    pub name: Option<String>,

    /// The certificate, in PEM format.
    pub certificate: Option<String>,

    /// The hostnames using the certificate.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub associated_hostnames: Vec<String>,
}

impl CreateAccessCertificateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][CreateAccessCertificateRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [name][CreateAccessCertificateRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][CreateAccessCertificateRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [certificate][CreateAccessCertificateRequest::certificate].
    pub fn set_certificate<T: Into<String>>(mut self, v: T) -> Self {
        self.certificate = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [certificate][CreateAccessCertificateRequest::certificate].
    pub fn set_or_clear_certificate<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.certificate = v.map(|x| x.into());
        self
    }

    /// Sets the value of [associated_hostnames][CreateAccessCertificateRequest::associated_hostnames].
    pub fn set_associated_hostnames<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.associated_hostnames = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [get_access_certificate][crate::client::Mtls::get_access_certificate].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetAccessCertificateRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    pub zone_id: String,

    /// The access certificate identifier.
    ///
    /// This is a **required** field for requests.
    pub cert_id: String,
}

impl GetAccessCertificateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][GetAccessCertificateRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [cert_id][GetAccessCertificateRequest::cert_id].
    pub fn set_cert_id<T: Into<String>>(mut self, v: T) -> Self {
        self.cert_id = v.into();
        self
    }
}

/// The request for [update_access_certificate][crate::client::Mtls::update_access_certificate].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateAccessCertificateRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub zone_id: String,

    /// The access certificate identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub cert_id: String,

    /// The new name.
    pub name: Option<String>,

    /// The new hostnames.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub associated_hostnames: Vec<String>,
}

impl UpdateAccessCertificateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][UpdateAccessCertificateRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [cert_id][UpdateAccessCertificateRequest::cert_id].
    pub fn set_cert_id<T: Into<String>>(mut self, v: T) -> Self {
        self.cert_id = v.into();
        self
    }

    /// Sets the value of [name][UpdateAccessCertificateRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][UpdateAccessCertificateRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [associated_hostnames][UpdateAccessCertificateRequest::associated_hostnames].
    pub fn set_associated_hostnames<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.associated_hostnames = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [delete_access_certificate][crate::client::Mtls::delete_access_certificate].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteAccessCertificateRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    pub zone_id: String,

    /// The access certificate identifier.
    ///
    /// This is a **required** field for requests.
    pub cert_id: String,
}

impl DeleteAccessCertificateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][DeleteAccessCertificateRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [cert_id][DeleteAccessCertificateRequest::cert_id].
    pub fn set_cert_id<T: Into<String>>(mut self, v: T) -> Self {
        self.cert_id = v.into();
        self
    }
}

/// The request for [list_access_certificates_settings][crate::client::Mtls::list_access_certificates_settings].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAccessCertificatesSettingsRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    pub zone_id: String,
}

impl ListAccessCertificatesSettingsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][ListAccessCertificatesSettingsRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }
}

/// The request for [update_access_certificates_settings][crate::client::Mtls::update_access_certificates_settings].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateAccessCertificatesSettingsRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub zone_id: String,

    /// The new settings.
    ///
    /// This is a **required** field for requests.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub settings: Vec<AccessCertSettingsInput>,
}

impl UpdateAccessCertificatesSettingsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][UpdateAccessCertificatesSettingsRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [settings][UpdateAccessCertificatesSettingsRequest::settings].
    pub fn set_settings<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<AccessCertSettingsInput>,
    {
        self.settings = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [create_access_application][crate::client::Mtls::create_access_application].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateAccessApplicationRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub zone_id: String,

    /// The application name.
    pub name: Option<String>,

    /// The protected domain.
    pub domain: Option<String>,

    /// How long a session lasts, for example `24h`.
    pub session_duration: Option<String>,
}

impl CreateAccessApplicationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][CreateAccessApplicationRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [name][CreateAccessApplicationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][CreateAccessApplicationRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [domain][CreateAccessApplicationRequest::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [domain][CreateAccessApplicationRequest::domain].
    pub fn set_or_clear_domain<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.domain = v.map(|x| x.into());
        self
    }

    /// Sets the value of [session_duration][CreateAccessApplicationRequest::session_duration].
    pub fn set_session_duration<T: Into<String>>(mut self, v: T) -> Self {
        self.session_duration = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [session_duration][CreateAccessApplicationRequest::session_duration].
    pub fn set_or_clear_session_duration<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.session_duration = v.map(|x| x.into());
        self
    }
}

/// The request for [list_access_applications][crate::client::Mtls::list_access_applications].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAccessApplicationsRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    pub zone_id: String,
}

impl ListAccessApplicationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][ListAccessApplicationsRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }
}

/// The request for [get_access_application][crate::client::Mtls::get_access_application].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetAccessApplicationRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    pub zone_id: String,

    /// The access application identifier.
    ///
    /// This is a **required** field for requests.
    pub app_id: String,
}

impl GetAccessApplicationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][GetAccessApplicationRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [app_id][GetAccessApplicationRequest::app_id].
    pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
        self.app_id = v.into();
        self
    }
}

/// The request for [update_access_application][crate::client::Mtls::update_access_application].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateAccessApplicationRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub zone_id: String,

    /// The access application identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub app_id: String,

    /// The application name.
    pub name: Option<String>,

    /// The protected domain.
    pub domain: Option<String>,

    /// How long a session lasts, for example `24h`.
    pub session_duration: Option<String>,
}

impl UpdateAccessApplicationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][UpdateAccessApplicationRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [app_id][UpdateAccessApplicationRequest::app_id].
    pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
        self.app_id = v.into();
        self
    }

    /// Sets the value of [name][UpdateAccessApplicationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][UpdateAccessApplicationRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [domain][UpdateAccessApplicationRequest::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [domain][UpdateAccessApplicationRequest::domain].
    pub fn set_or_clear_domain<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.domain = v.map(|x| x.into());
        self
    }

    /// Sets the value of [session_duration][UpdateAccessApplicationRequest::session_duration].
    pub fn set_session_duration<T: Into<String>>(mut self, v: T) -> Self {
        self.session_duration = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [session_duration][UpdateAccessApplicationRequest::session_duration].
    pub fn set_or_clear_session_duration<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.session_duration = v.map(|x| x.into());
        self
    }
}

/// The request for [delete_access_application][crate::client::Mtls::delete_access_application].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteAccessApplicationRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    pub zone_id: String,

    /// The access application identifier.
    ///
    /// This is a **required** field for requests.
    pub app_id: String,
}

impl DeleteAccessApplicationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][DeleteAccessApplicationRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [app_id][DeleteAccessApplicationRequest::app_id].
    pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
        self.app_id = v.into();
        self
    }
}

/// The request for [create_access_policy][crate::client::Mtls::create_access_policy].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateAccessPolicyRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub zone_id: String,

    /// The access application identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub app_id: String,

    /// The policy name.
    pub name: Option<String>,

    /// One of the values in [decision][crate::model::decision].
    pub decision: Option<String>,

    /// The rules a request must match.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<PolicyRule>,
}

impl CreateAccessPolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][CreateAccessPolicyRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [app_id][CreateAccessPolicyRequest::app_id].
    pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
        self.app_id = v.into();
        self
    }

    /// Sets the value of [name][CreateAccessPolicyRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][CreateAccessPolicyRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [decision][CreateAccessPolicyRequest::decision].
    pub fn set_decision<T: Into<String>>(mut self, v: T) -> Self {
        self.decision = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [decision][CreateAccessPolicyRequest::decision].
    pub fn set_or_clear_decision<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.decision = v.map(|x| x.into());
        self
    }

    /// Sets the value of [include][CreateAccessPolicyRequest::include].
    pub fn set_include<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<PolicyRule>,
    {
        self.include = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [list_access_policies][crate::client::Mtls::list_access_policies].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAccessPoliciesRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    pub zone_id: String,

    /// The access application identifier.
    ///
    /// This is a **required** field for requests.
    pub app_id: String,
}

impl ListAccessPoliciesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][ListAccessPoliciesRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [app_id][ListAccessPoliciesRequest::app_id].
    pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
        self.app_id = v.into();
        self
    }
}

/// The request for [get_access_policy][crate::client::Mtls::get_access_policy].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetAccessPolicyRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    pub zone_id: String,

    /// The access application identifier.
    ///
    /// This is a **required** field for requests.
    pub app_id: String,

    /// The access policy identifier.
    ///
    /// This is a **required** field for requests.
    pub policy_id: String,
}

impl GetAccessPolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][GetAccessPolicyRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [app_id][GetAccessPolicyRequest::app_id].
    pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
        self.app_id = v.into();
        self
    }

    /// Sets the value of [policy_id][GetAccessPolicyRequest::policy_id].
    pub fn set_policy_id<T: Into<String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }
}

/// The request for [update_access_policy][crate::client::Mtls::update_access_policy].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateAccessPolicyRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub zone_id: String,

    /// The access application identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub app_id: String,

    /// The access policy identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub policy_id: String,

    /// The policy name.
    pub name: Option<String>,

    /// One of the values in [decision][crate::model::decision].
    pub decision: Option<String>,

    /// The rules a request must match.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<PolicyRule>,
}

impl UpdateAccessPolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][UpdateAccessPolicyRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [app_id][UpdateAccessPolicyRequest::app_id].
    pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
        self.app_id = v.into();
        self
    }

    /// Sets the value of [policy_id][UpdateAccessPolicyRequest::policy_id].
    pub fn set_policy_id<T: Into<String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [name][UpdateAccessPolicyRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][UpdateAccessPolicyRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [decision][UpdateAccessPolicyRequest::decision].
    pub fn set_decision<T: Into<String>>(mut self, v: T) -> Self {
        self.decision = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [decision][UpdateAccessPolicyRequest::decision].
    pub fn set_or_clear_decision<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.decision = v.map(|x| x.into());
        self
    }

    /// Sets the value of [include][UpdateAccessPolicyRequest::include].
    pub fn set_include<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<PolicyRule>,
    {
        self.include = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [delete_access_policy][crate::client::Mtls::delete_access_policy].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteAccessPolicyRequest {
    /// The zone identifier.
    ///
    /// This is a **required** field for requests.
    pub zone_id: String,

    /// The access application identifier.
    ///
    /// This is a **required** field for requests.
    pub app_id: String,

    /// The access policy identifier.
    ///
    /// This is a **required** field for requests.
    pub policy_id: String,
}

impl DeleteAccessPolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][DeleteAccessPolicyRequest::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [app_id][DeleteAccessPolicyRequest::app_id].
    pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
        self.app_id = v.into();
        self
    }

    /// Sets the value of [policy_id][DeleteAccessPolicyRequest::policy_id].
    pub fn set_policy_id<T: Into<String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }
}
