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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use crate::Result;
use std::time::Duration;

/// The identity of a [ZonesSettings] client.
///
/// These values are set when the client is created and are used in the
/// path or query of every request. They cannot be changed afterwards, create
/// a new client to use different values.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Identity {
    /// Full URL-encoded CRN of the service instance.
    pub crn: String,

    /// Zone identifier.
    pub zone_identifier: String,
}

impl Identity {
    /// Creates a new identity.
    pub fn new(crn: impl Into<String>, zone_identifier: impl Into<String>) -> Self {
        Self {
            crn: crn.into(),
            zone_identifier: zone_identifier.into(),
        }
    }

    /// Sets the value of [crn][Identity::crn].
    pub fn set_crn<T: Into<String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][Identity::zone_identifier].
    pub fn set_zone_identifier<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        gax::path_parameter::validate(&[
            ("crn", &self.crn),
            ("zone_identifier", &self.zone_identifier),
        ])
    }
}

/// Implements a client for the Zones Settings API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
/// let client = ZonesSettings::builder("my-crn", "my-zone-id").build().await?;
/// // use `client` to make requests to the Zones Settings API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Reads and changes the settings of a zone in IBM Cloud Internet Services.
/// Each setting has a `get_*` and an `update_*` operation. The update
/// operations only change the value sent in the request.
///
/// # Configuration
///
/// To configure `ZonesSettings` use the `with_*` methods in the type returned
/// by [builder()][ZonesSettings::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://api.cis.cloud.ibm.com`). Applications using private endpoints may want to
///   override this default.
/// * [with_credentials()]: by default this client loads the credentials from
///   the external configuration, using `zones_settings` as the service
///   name. Applications using custom authentication may need to override this
///   default.
///
/// [with_endpoint()]: super::builder::zones_settings::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::zones_settings::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `ZonesSettings` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `ZonesSettings` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally. Clones share the retry configuration
/// changed by [enable_retries()][ZonesSettings::enable_retries].
#[derive(Clone, Debug)]
pub struct ZonesSettings {
    inner: std::sync::Arc<dyn super::stub::dynamic::ZonesSettings>,
    identity: Identity,
    service_url: String,
    retry_switch: gax::retry_policy::RetrySwitch,
}

impl ZonesSettings {
    /// Returns a builder for [ZonesSettings].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// let client = ZonesSettings::builder("my-crn", "my-zone-id").build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder(
        crn: impl Into<String>,
        zone_identifier: impl Into<String>,
    ) -> super::builder::zones_settings::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::zones_settings::client::Factory {
            identity: Identity::new(crn, zone_identifier),
        })
    }

    /// Creates a new client using the default service URL and the given
    /// credentials.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// use auth::credentials::bearer_token;
    /// # fn sample() -> anyhow::Result<()> {
    /// let credentials = bearer_token::Builder::new("my-access-token").build()?;
    /// let client = ZonesSettings::new("my-crn", "my-zone-id", credentials)?;
    /// # Ok(()) }
    /// ```
    pub fn new(
        crn: impl Into<String>,
        zone_identifier: impl Into<String>,
        credentials: gaxi::options::Credentials,
    ) -> gax::client_builder::Result<Self> {
        let mut config = gaxi::options::ClientConfig::default();
        config.cred = Some(credentials);
        config.endpoint = Some(crate::DEFAULT_SERVICE_URL.to_string());
        Self::with_config(Identity::new(crn, zone_identifier), config)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(identity: Identity, stub: T) -> Self
    where
        T: super::stub::ZonesSettings + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
            identity,
            service_url: crate::DEFAULT_SERVICE_URL.to_string(),
            retry_switch: gax::retry_policy::RetrySwitch::default(),
        }
    }

    pub(crate) fn with_config(
        identity: Identity,
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        identity
            .validate()
            .map_err(gax::client_builder::Error::configuration)?;
        let tracing = gaxi::options::tracing_enabled(&config);
        let transport = super::transport::ZonesSettings::new(config, identity.clone())?;
        let service_url = transport.service_url().to_string();
        let retry_switch = transport.retry_switch();
        let inner: std::sync::Arc<dyn super::stub::dynamic::ZonesSettings> = if tracing {
            std::sync::Arc::new(super::tracing::ZonesSettings::new(transport))
        } else {
            std::sync::Arc::new(transport)
        };
        Ok(Self {
            inner,
            identity,
            service_url,
            retry_switch,
        })
    }

    /// The base URL used by all the requests.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// The identity of this client.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Full URL-encoded CRN of the service instance.
    pub fn crn(&self) -> &str {
        &self.identity.crn
    }

    /// Zone identifier.
    pub fn zone_identifier(&self) -> &str {
        &self.identity.zone_identifier
    }

    /// Enables automatic retries for all the requests made by this client and
    /// its clones.
    ///
    /// `max_retries` defaults to 4 and `max_retry_interval` to 30 seconds.
    /// Retry policies set on a request take precedence.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// # use std::time::Duration;
    /// fn configure(client: &ZonesSettings) {
    ///     client.enable_retries(Some(3), Some(Duration::from_secs(10)));
    ///     assert!(client.retries_enabled());
    /// }
    /// ```
    pub fn enable_retries(&self, max_retries: Option<u32>, max_retry_interval: Option<Duration>) {
        self.retry_switch.enable(max_retries, max_retry_interval);
    }

    /// Disables automatic retries for all the requests made by this client and
    /// its clones.
    pub fn disable_retries(&self) {
        self.retry_switch.disable();
    }

    /// Returns true if [enable_retries()][ZonesSettings::enable_retries] is in
    /// effect.
    pub fn retries_enabled(&self) -> bool {
        self.retry_switch.is_enabled()
    }

    /// Gets the DNSSEC configuration of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client.get_zone_dnssec().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_zone_dnssec(&self) -> super::builder::zones_settings::GetZoneDnssec {
        super::builder::zones_settings::GetZoneDnssec::new(self.inner.clone())
    }

    /// Enables or disables DNSSEC for the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     use ibm_cloud_networking_zones_settings_v1::model::dnssec_status;
    ///     let response = client
    ///         .update_zone_dnssec()
    ///         .set_status(dnssec_status::ACTIVE)
    ///         .send()
    ///         .await?;
    ///     println!("dnssec {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn update_zone_dnssec(&self) -> super::builder::zones_settings::UpdateZoneDnssec {
        super::builder::zones_settings::UpdateZoneDnssec::new(self.inner.clone())
    }

    /// Gets the CNAME flattening setting of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client.get_zone_cname_flattening().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_zone_cname_flattening(
        &self,
    ) -> super::builder::zones_settings::GetZoneCnameFlattening {
        super::builder::zones_settings::GetZoneCnameFlattening::new(self.inner.clone())
    }

    /// Changes the CNAME flattening setting of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client
    ///         .update_zone_cname_flattening()
    ///         .set_value("flatten_all")
    ///         .send()
    ///         .await?;
    ///     println!("setting {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn update_zone_cname_flattening(
        &self,
    ) -> super::builder::zones_settings::UpdateZoneCnameFlattening {
        super::builder::zones_settings::UpdateZoneCnameFlattening::new(self.inner.clone())
    }

    /// Gets the opportunistic encryption setting of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client.get_opportunistic_encryption().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_opportunistic_encryption(
        &self,
    ) -> super::builder::zones_settings::GetOpportunisticEncryption {
        super::builder::zones_settings::GetOpportunisticEncryption::new(self.inner.clone())
    }

    /// Changes the opportunistic encryption setting of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client
    ///         .update_opportunistic_encryption()
    ///         .set_value("on")
    ///         .send()
    ///         .await?;
    ///     println!("setting {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn update_opportunistic_encryption(
        &self,
    ) -> super::builder::zones_settings::UpdateOpportunisticEncryption {
        super::builder::zones_settings::UpdateOpportunisticEncryption::new(self.inner.clone())
    }

    /// Gets the challenge TTL setting of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client.get_challenge_ttl().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_challenge_ttl(&self) -> super::builder::zones_settings::GetChallengeTtl {
        super::builder::zones_settings::GetChallengeTtl::new(self.inner.clone())
    }

    /// Changes the challenge TTL setting of the zone.
    ///
    /// The value is the number of seconds a visitor is allowed access after
    /// completing a challenge.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client.update_challenge_ttl().set_value(1800).send().await?;
    ///     println!("setting {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn update_challenge_ttl(&self) -> super::builder::zones_settings::UpdateChallengeTtl {
        super::builder::zones_settings::UpdateChallengeTtl::new(self.inner.clone())
    }

    /// Gets the automatic HTTPS rewrites setting of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client.get_automatic_https_rewrites().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_automatic_https_rewrites(
        &self,
    ) -> super::builder::zones_settings::GetAutomaticHttpsRewrites {
        super::builder::zones_settings::GetAutomaticHttpsRewrites::new(self.inner.clone())
    }

    /// Changes the automatic HTTPS rewrites setting of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client
    ///         .update_automatic_https_rewrites()
    ///         .set_value("on")
    ///         .send()
    ///         .await?;
    ///     println!("setting {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn update_automatic_https_rewrites(
        &self,
    ) -> super::builder::zones_settings::UpdateAutomaticHttpsRewrites {
        super::builder::zones_settings::UpdateAutomaticHttpsRewrites::new(self.inner.clone())
    }

    /// Gets the minimum TLS version setting of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client.get_min_tls_version().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_min_tls_version(&self) -> super::builder::zones_settings::GetMinTlsVersion {
        super::builder::zones_settings::GetMinTlsVersion::new(self.inner.clone())
    }

    /// Changes the minimum TLS version setting of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client
    ///         .update_min_tls_version()
    ///         .set_value("1.2")
    ///         .send()
    ///         .await?;
    ///     println!("setting {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn update_min_tls_version(&self) -> super::builder::zones_settings::UpdateMinTlsVersion {
        super::builder::zones_settings::UpdateMinTlsVersion::new(self.inner.clone())
    }

    /// Gets the cipher suites allowed in the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client.get_ciphers().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_ciphers(&self) -> super::builder::zones_settings::GetCiphers {
        super::builder::zones_settings::GetCiphers::new(self.inner.clone())
    }

    /// Changes the cipher suites allowed in the zone.
    ///
    /// An empty list restores the default cipher suites.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client
    ///         .update_ciphers()
    ///         .set_value(["ECDHE-RSA-AES128-GCM-SHA256", "AES128-SHA"])
    ///         .send()
    ///         .await?;
    ///     println!("setting {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn update_ciphers(&self) -> super::builder::zones_settings::UpdateCiphers {
        super::builder::zones_settings::UpdateCiphers::new(self.inner.clone())
    }

    /// Gets the security header (HSTS) setting of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client.get_security_header().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_security_header(&self) -> super::builder::zones_settings::GetSecurityHeader {
        super::builder::zones_settings::GetSecurityHeader::new(self.inner.clone())
    }

    /// Changes the security header (HSTS) setting of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     use ibm_cloud_networking_zones_settings_v1::model::{SecurityHeaderValue, StrictTransportSecurity};
    ///     let hsts = StrictTransportSecurity::new()
    ///         .set_enabled(true)
    ///         .set_max_age(86400);
    ///     let response = client
    ///         .update_security_header()
    ///         .set_value(SecurityHeaderValue::new().set_strict_transport_security(hsts))
    ///         .send()
    ///         .await?;
    ///     println!("setting {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn update_security_header(&self) -> super::builder::zones_settings::UpdateSecurityHeader {
        super::builder::zones_settings::UpdateSecurityHeader::new(self.inner.clone())
    }

    /// Gets the minify setting of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client.get_minify().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_minify(&self) -> super::builder::zones_settings::GetMinify {
        super::builder::zones_settings::GetMinify::new(self.inner.clone())
    }

    /// Changes the minify setting of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_zones_settings_v1::client::ZonesSettings;
    /// async fn sample(client: &ZonesSettings) -> gax::Result<()> {
    ///     let response = client.update_minify().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn update_minify(&self) -> super::builder::zones_settings::UpdateMinify {
        super::builder::zones_settings::UpdateMinify::new(self.inner.clone())
    }
}
