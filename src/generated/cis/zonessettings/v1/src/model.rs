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

//! The types used by the zones settings operations.
//!
//! All operations return a [gax::envelope::Envelope]. Zone settings share the
//! same shape, a [Setting] with a typed `value`.

/// A zone setting as returned by the service.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_zones_settings_v1::model::Setting;
/// let setting: Setting<String> = serde_json::from_value(serde_json::json!({
///     "id": "min_tls_version", "value": "1.2", "editable": true,
///     "modified_on": "2020-01-28T18:40:40.123456Z"
/// }))?;
/// assert_eq!(setting.value, "1.2");
/// # serde_json::Result::Ok(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Setting<T> {
    /// The setting identifier, e.g. `min_tls_version`.
    pub id: String,

    /// The setting value.
    pub value: T,

    /// If false the setting cannot be changed in the zone's plan.
    pub editable: bool,

    /// When the setting was last changed, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<String>,
}

impl<T> Setting<T> {
    /// Creates a new setting with the given identifier and value.
    pub fn new<I: Into<String>>(id: I, value: T) -> Self {
        Self {
            id: id.into(),
            value,
            editable: true,
            modified_on: None,
        }
    }

    /// Sets the value of [editable][Setting::editable].
    pub fn set_editable(mut self, v: bool) -> Self {
        self.editable = v;
        self
    }

    /// Sets the value of [modified_on][Setting::modified_on].
    pub fn set_modified_on<V: Into<String>>(mut self, v: V) -> Self {
        self.modified_on = Some(v.into());
        self
    }
}

/// The values for [UpdateZoneDnssecRequest::status].
pub mod dnssec_status {
    pub const ACTIVE: &str = "active";
    pub const DISABLED: &str = "disabled";
}

/// The values for the cname flattening setting.
pub mod cname_flattening {
    /// Flatten CNAME records at the zone apex only.
    pub const FLATTEN_AT_ROOT: &str = "flatten_at_root";
    /// Flatten all CNAME records.
    pub const FLATTEN_ALL: &str = "flatten_all";
}

/// The values for the minimum TLS version setting.
pub mod min_tls_version {
    pub const TLS_1_0: &str = "1.0";
    pub const TLS_1_1: &str = "1.1";
    pub const TLS_1_2: &str = "1.2";
    pub const TLS_1_3: &str = "1.3";
}

/// The values for settings that are turned on or off, for example
/// opportunistic encryption or the minify settings.
pub mod toggle {
    pub const ON: &str = "on";
    pub const OFF: &str = "off";
}

/// The DNSSEC configuration of a zone.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DnssecSettings {
    /// One of the values in [dnssec_status].
    pub status: String,

    pub flags: i64,

    pub algorithm: String,

    pub key_type: String,

    pub digest_type: String,

    pub digest_algorithm: String,

    pub digest: String,

    /// The DS record to add at the registrar.
    pub ds: String,

    pub key_tag: i64,

    pub public_key: String,
}

impl DnssecSettings {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [status][DnssecSettings::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [flags][DnssecSettings::flags].
    pub fn set_flags<T: Into<i64>>(mut self, v: T) -> Self {
        self.flags = v.into();
        self
    }

    /// Sets the value of [algorithm][DnssecSettings::algorithm].
    pub fn set_algorithm<T: Into<String>>(mut self, v: T) -> Self {
        self.algorithm = v.into();
        self
    }

    /// Sets the value of [key_type][DnssecSettings::key_type].
    pub fn set_key_type<T: Into<String>>(mut self, v: T) -> Self {
        self.key_type = v.into();
        self
    }

    /// Sets the value of [digest_type][DnssecSettings::digest_type].
    pub fn set_digest_type<T: Into<String>>(mut self, v: T) -> Self {
        self.digest_type = v.into();
        self
    }

    /// Sets the value of [digest_algorithm][DnssecSettings::digest_algorithm].
    pub fn set_digest_algorithm<T: Into<String>>(mut self, v: T) -> Self {
        self.digest_algorithm = v.into();
        self
    }

    /// Sets the value of [digest][DnssecSettings::digest].
    pub fn set_digest<T: Into<String>>(mut self, v: T) -> Self {
        self.digest = v.into();
        self
    }

    /// Sets the value of [ds][DnssecSettings::ds].
    pub fn set_ds<T: Into<String>>(mut self, v: T) -> Self {
        self.ds = v.into();
        self
    }

    /// Sets the value of [key_tag][DnssecSettings::key_tag].
    pub fn set_key_tag<T: Into<i64>>(mut self, v: T) -> Self {
        self.key_tag = v.into();
        self
    }

    /// Sets the value of [public_key][DnssecSettings::public_key].
    pub fn set_public_key<T: Into<String>>(mut self, v: T) -> Self {
        self.public_key = v.into();
        self
    }
}

/// The value of the security header setting.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SecurityHeaderValue {
    /// HTTP Strict Transport Security (HSTS) configuration.
    pub strict_transport_security: Option<StrictTransportSecurity>,
}

impl SecurityHeaderValue {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [strict_transport_security][SecurityHeaderValue::strict_transport_security].
    pub fn set_strict_transport_security<T: Into<StrictTransportSecurity>>(mut self, v: T) -> Self {
        self.strict_transport_security = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [strict_transport_security][SecurityHeaderValue::strict_transport_security].
    pub fn set_or_clear_strict_transport_security<T: Into<StrictTransportSecurity>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.strict_transport_security = v.map(|x| x.into());
        self
    }
}

/// HTTP Strict Transport Security (HSTS) configuration.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct StrictTransportSecurity {
    /// Whether HSTS is enabled.
    pub enabled: Option<bool>,

    /// The `max-age` directive, in seconds.
    pub max_age: Option<i64>,

    /// Include all subdomains.
    pub include_subdomains: Option<bool>,

    /// Send the `X-Content-Type-Options: nosniff` header.
    pub nosniff: Option<bool>,
}

impl StrictTransportSecurity {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enabled][StrictTransportSecurity::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][StrictTransportSecurity::enabled].
    pub fn set_or_clear_enabled<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [max_age][StrictTransportSecurity::max_age].
    pub fn set_max_age<T: Into<i64>>(mut self, v: T) -> Self {
        self.max_age = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [max_age][StrictTransportSecurity::max_age].
    pub fn set_or_clear_max_age<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.max_age = v.map(|x| x.into());
        self
    }

    /// Sets the value of [include_subdomains][StrictTransportSecurity::include_subdomains].
    pub fn set_include_subdomains<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_subdomains = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [include_subdomains][StrictTransportSecurity::include_subdomains].
    pub fn set_or_clear_include_subdomains<T: Into<bool>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.include_subdomains = v.map(|x| x.into());
        self
    }

    /// Sets the value of [nosniff][StrictTransportSecurity::nosniff].
    pub fn set_nosniff<T: Into<bool>>(mut self, v: T) -> Self {
        self.nosniff = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [nosniff][StrictTransportSecurity::nosniff].
    pub fn set_or_clear_nosniff<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.nosniff = v.map(|x| x.into());
        self
    }
}

/// The value of the minify setting.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct MinifyValue {
    /// One of the values in [toggle].
    pub css: Option<String>,

    /// One of the values in [toggle].
    pub html: Option<String>,

    /// One of the values in [toggle].
    pub js: Option<String>,
}

impl MinifyValue {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [css][MinifyValue::css].
    pub fn set_css<T: Into<String>>(mut self, v: T) -> Self {
        self.css = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [css][MinifyValue::css].
    pub fn set_or_clear_css<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.css = v.map(|x| x.into());
        self
    }

    /// Sets the value of [html][MinifyValue::html].
    pub fn set_html<T: Into<String>>(mut self, v: T) -> Self {
        self.html = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [html][MinifyValue::html].
    pub fn set_or_clear_html<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.html = v.map(|x| x.into());
        self
    }

    /// Sets the value of [js][MinifyValue::js].
    pub fn set_js<T: Into<String>>(mut self, v: T) -> Self {
        self.js = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [js][MinifyValue::js].
    pub fn set_or_clear_js<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.js = v.map(|x| x.into());
        self
    }
}

/// The request for the operations reading a zone setting.
///
/// These operations have no parameters besides the client identity.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetZoneSettingRequest {
}

impl GetZoneSettingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// The request for [update_zone_dnssec][crate::client::ZonesSettings::update_zone_dnssec].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateZoneDnssecRequest {
    /// The new status, one of the values in [dnssec_status][crate::model::dnssec_status].
    pub status: Option<String>,
}

impl UpdateZoneDnssecRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [status][UpdateZoneDnssecRequest::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][UpdateZoneDnssecRequest::status].
    pub fn set_or_clear_status<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.status = v.map(|x| x.into());
        self
    }
}

/// The request for the operations changing a zone setting with a string value.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateStringSettingRequest {
    /// The new value.
    pub value: Option<String>,
}

impl UpdateStringSettingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [value][UpdateStringSettingRequest::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [value][UpdateStringSettingRequest::value].
    pub fn set_or_clear_value<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.value = v.map(|x| x.into());
        self
    }
}

/// The request for [update_challenge_ttl][crate::client::ZonesSettings::update_challenge_ttl].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateChallengeTtlRequest {
    /// The new value, in seconds.
    pub value: Option<i64>,
}

impl UpdateChallengeTtlRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [value][UpdateChallengeTtlRequest::value].
    pub fn set_value<T: Into<i64>>(mut self, v: T) -> Self {
        self.value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [value][UpdateChallengeTtlRequest::value].
    pub fn set_or_clear_value<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.value = v.map(|x| x.into());
        self
    }
}

/// The request for [update_ciphers][crate::client::ZonesSettings::update_ciphers].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateCiphersRequest {
    /// The allowed cipher suites.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<String>,
}

impl UpdateCiphersRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [value][UpdateCiphersRequest::value].
    pub fn set_value<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.value = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [update_security_header][crate::client::ZonesSettings::update_security_header].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateSecurityHeaderRequest {
    /// The new value.
    pub value: Option<SecurityHeaderValue>,
}

impl UpdateSecurityHeaderRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [value][UpdateSecurityHeaderRequest::value].
    pub fn set_value<T: Into<SecurityHeaderValue>>(mut self, v: T) -> Self {
        self.value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [value][UpdateSecurityHeaderRequest::value].
    pub fn set_or_clear_value<T: Into<SecurityHeaderValue>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.value = v.map(|x| x.into());
        self
    }
}

/// The request for [update_minify][crate::client::ZonesSettings::update_minify].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateMinifyRequest {
    /// The new value.
    pub value: Option<MinifyValue>,
}

impl UpdateMinifyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [value][UpdateMinifyRequest::value].
    pub fn set_value<T: Into<MinifyValue>>(mut self, v: T) -> Self {
        self.value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [value][UpdateMinifyRequest::value].
    pub fn set_or_clear_value<T: Into<MinifyValue>>(mut self, v: std::option::Option<T>) -> Self {
        self.value = v.map(|x| x.into());
        self
    }
}
