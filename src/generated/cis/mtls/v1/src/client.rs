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

/// The identity of a [Mtls] client.
///
/// These values are set when the client is created and are used in the
/// path or query of every request. They cannot be changed afterwards, create
/// a new client to use different values.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Identity {
    /// Full URL-encoded CRN of the service instance.
    pub crn: String,
}

impl Identity {
    /// Creates a new identity.
    pub fn new(crn: impl Into<String>) -> Self {
        Self {
            crn: crn.into(),
        }
    }

    /// Sets the value of [crn][Identity::crn].
    pub fn set_crn<T: Into<String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        gax::path_parameter::validate(&[("crn", &self.crn)])
    }
}

/// Implements a client for the mTLS API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use ibm_cloud_networking_mtls_v1::client::Mtls;
/// let client = Mtls::builder("my-crn").build().await?;
/// // use `client` to make requests to the mTLS API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Manages the root certificate authorities, the per-hostname settings, the
/// access applications and the access policies used by mTLS. The zone is a
/// parameter of each operation.
///
/// # Configuration
///
/// To configure `Mtls` use the `with_*` methods in the type returned
/// by [builder()][Mtls::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://api.cis.cloud.ibm.com`). Applications using private endpoints may want to
///   override this default.
/// * [with_credentials()]: by default this client loads the credentials from
///   the external configuration, using `mtls` as the service
///   name. Applications using custom authentication may need to override this
///   default.
///
/// [with_endpoint()]: super::builder::mtls::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::mtls::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `Mtls` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `Mtls` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally. Clones share the retry configuration
/// changed by [enable_retries()][Mtls::enable_retries].
#[derive(Clone, Debug)]
pub struct Mtls {
    inner: std::sync::Arc<dyn super::stub::dynamic::Mtls>,
    identity: Identity,
    service_url: String,
    retry_switch: gax::retry_policy::RetrySwitch,
}

impl Mtls {
    /// Returns a builder for [Mtls].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// let client = Mtls::builder("my-crn").build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder(crn: impl Into<String>) -> super::builder::mtls::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::mtls::client::Factory {
            identity: Identity::new(crn),
        })
    }

    /// Creates a new client using the default service URL and the given
    /// credentials.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// use auth::credentials::bearer_token;
    /// # fn sample() -> anyhow::Result<()> {
    /// let credentials = bearer_token::Builder::new("my-access-token").build()?;
    /// let client = Mtls::new("my-crn", credentials)?;
    /// # Ok(()) }
    /// ```
    pub fn new(
        crn: impl Into<String>,
        credentials: gaxi::options::Credentials,
    ) -> gax::client_builder::Result<Self> {
        let mut config = gaxi::options::ClientConfig::default();
        config.cred = Some(credentials);
        config.endpoint = Some(crate::DEFAULT_SERVICE_URL.to_string());
        Self::with_config(Identity::new(crn), config)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(identity: Identity, stub: T) -> Self
    where
        T: super::stub::Mtls + 'static,
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
        let transport = super::transport::Mtls::new(config, identity.clone())?;
        let service_url = transport.service_url().to_string();
        let retry_switch = transport.retry_switch();
        let inner: std::sync::Arc<dyn super::stub::dynamic::Mtls> = if tracing {
            std::sync::Arc::new(super::tracing::Mtls::new(transport))
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

    /// Enables automatic retries for all the requests made by this client and
    /// its clones.
    ///
    /// `max_retries` defaults to 4 and `max_retry_interval` to 30 seconds.
    /// Retry policies set on a request take precedence.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// # use std::time::Duration;
    /// fn configure(client: &Mtls) {
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

    /// Returns true if [enable_retries()][Mtls::enable_retries] is in
    /// effect.
    pub fn retries_enabled(&self) -> bool {
        self.retry_switch.is_enabled()
    }

    /// Lists the access certificates of a zone.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     let response = client.list_access_certificates("my-zone-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_access_certificates(
        &self,
        zone_id: impl Into<String>,
    ) -> super::builder::mtls::ListAccessCertificates {
        super::builder::mtls::ListAccessCertificates::new(self.inner.clone()).set_zone_id(zone_id)
    }

    /// Uploads a root certificate authority.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     let response = client
    ///         .create_access_certificate("my-zone-id")
    ///         .set_name("my-ca")
    ///         .set_certificate("-----BEGIN CERTIFICATE-----\n...\n-----END CERTIFICATE-----")
    ///         .set_associated_hostnames(["app.example.com"])
    ///         .send()
    ///         .await?;
    ///     println!("certificate {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn create_access_certificate(
        &self,
        zone_id: impl Into<String>,
    ) -> super::builder::mtls::CreateAccessCertificate {
        super::builder::mtls::CreateAccessCertificate::new(self.inner.clone()).set_zone_id(zone_id)
    }

    /// Gets an access certificate.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    /// * `cert_id` - the access certificate identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     let response = client.get_access_certificate("my-zone-id", "my-cert-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_access_certificate(
        &self,
        zone_id: impl Into<String>,
        cert_id: impl Into<String>,
    ) -> super::builder::mtls::GetAccessCertificate {
        super::builder::mtls::GetAccessCertificate::new(self.inner.clone())
            .set_zone_id(zone_id)
            .set_cert_id(cert_id)
    }

    /// Changes the name or the hostnames of an access certificate.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    /// * `cert_id` - the access certificate identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     let response = client.update_access_certificate("my-zone-id", "my-cert-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn update_access_certificate(
        &self,
        zone_id: impl Into<String>,
        cert_id: impl Into<String>,
    ) -> super::builder::mtls::UpdateAccessCertificate {
        super::builder::mtls::UpdateAccessCertificate::new(self.inner.clone())
            .set_zone_id(zone_id)
            .set_cert_id(cert_id)
    }

    /// Deletes an access certificate.
    ///
    /// The certificate must not have associated hostnames.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    /// * `cert_id` - the access certificate identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     let response = client.delete_access_certificate("my-zone-id", "my-cert-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_access_certificate(
        &self,
        zone_id: impl Into<String>,
        cert_id: impl Into<String>,
    ) -> super::builder::mtls::DeleteAccessCertificate {
        super::builder::mtls::DeleteAccessCertificate::new(self.inner.clone())
            .set_zone_id(zone_id)
            .set_cert_id(cert_id)
    }

    /// Lists the mTLS settings of the hostnames in a zone.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     let response = client.list_access_certificates_settings("my-zone-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_access_certificates_settings(
        &self,
        zone_id: impl Into<String>,
    ) -> super::builder::mtls::ListAccessCertificatesSettings {
        super::builder::mtls::ListAccessCertificatesSettings::new(self.inner.clone())
            .set_zone_id(zone_id)
    }

    /// Changes the mTLS settings of one or more hostnames.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     use ibm_cloud_networking_mtls_v1::model::AccessCertSettingsInput;
    ///     let setting = AccessCertSettingsInput::new()
    ///         .set_hostname("app.example.com")
    ///         .set_client_certificate_forwarding(true);
    ///     let response = client
    ///         .update_access_certificates_settings("my-zone-id")
    ///         .set_settings([setting])
    ///         .send()
    ///         .await?;
    ///     println!("settings {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn update_access_certificates_settings(
        &self,
        zone_id: impl Into<String>,
    ) -> super::builder::mtls::UpdateAccessCertificatesSettings {
        super::builder::mtls::UpdateAccessCertificatesSettings::new(self.inner.clone())
            .set_zone_id(zone_id)
    }

    /// Creates an access application.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     let response = client
    ///         .create_access_application("my-zone-id")
    ///         .set_name("my-app")
    ///         .set_domain("app.example.com")
    ///         .set_session_duration("24h")
    ///         .send()
    ///         .await?;
    ///     println!("application {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn create_access_application(
        &self,
        zone_id: impl Into<String>,
    ) -> super::builder::mtls::CreateAccessApplication {
        super::builder::mtls::CreateAccessApplication::new(self.inner.clone()).set_zone_id(zone_id)
    }

    /// Lists the access applications of a zone.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     let response = client.list_access_applications("my-zone-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_access_applications(
        &self,
        zone_id: impl Into<String>,
    ) -> super::builder::mtls::ListAccessApplications {
        super::builder::mtls::ListAccessApplications::new(self.inner.clone()).set_zone_id(zone_id)
    }

    /// Gets an access application.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    /// * `app_id` - the access application identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     let response = client.get_access_application("my-zone-id", "my-app-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_access_application(
        &self,
        zone_id: impl Into<String>,
        app_id: impl Into<String>,
    ) -> super::builder::mtls::GetAccessApplication {
        super::builder::mtls::GetAccessApplication::new(self.inner.clone())
            .set_zone_id(zone_id)
            .set_app_id(app_id)
    }

    /// Changes an access application.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    /// * `app_id` - the access application identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     let response = client.update_access_application("my-zone-id", "my-app-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn update_access_application(
        &self,
        zone_id: impl Into<String>,
        app_id: impl Into<String>,
    ) -> super::builder::mtls::UpdateAccessApplication {
        super::builder::mtls::UpdateAccessApplication::new(self.inner.clone())
            .set_zone_id(zone_id)
            .set_app_id(app_id)
    }

    /// Deletes an access application and its policies.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    /// * `app_id` - the access application identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     let response = client.delete_access_application("my-zone-id", "my-app-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_access_application(
        &self,
        zone_id: impl Into<String>,
        app_id: impl Into<String>,
    ) -> super::builder::mtls::DeleteAccessApplication {
        super::builder::mtls::DeleteAccessApplication::new(self.inner.clone())
            .set_zone_id(zone_id)
            .set_app_id(app_id)
    }

    /// Creates a policy in an access application.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    /// * `app_id` - the access application identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     use ibm_cloud_networking_mtls_v1::model::{decision, PolicyCnRule, PolicyRule};
    ///     let rule = PolicyRule::new().set_common_name(PolicyCnRule::new().set_common_name("client.example.com"));
    ///     let response = client
    ///         .create_access_policy("my-zone-id", "my-app-id")
    ///         .set_name("my-policy")
    ///         .set_decision(decision::NON_IDENTITY)
    ///         .set_include([rule])
    ///         .send()
    ///         .await?;
    ///     println!("policy {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn create_access_policy(
        &self,
        zone_id: impl Into<String>,
        app_id: impl Into<String>,
    ) -> super::builder::mtls::CreateAccessPolicy {
        super::builder::mtls::CreateAccessPolicy::new(self.inner.clone())
            .set_zone_id(zone_id)
            .set_app_id(app_id)
    }

    /// Lists the policies of an access application.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    /// * `app_id` - the access application identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     let response = client.list_access_policies("my-zone-id", "my-app-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_access_policies(
        &self,
        zone_id: impl Into<String>,
        app_id: impl Into<String>,
    ) -> super::builder::mtls::ListAccessPolicies {
        super::builder::mtls::ListAccessPolicies::new(self.inner.clone())
            .set_zone_id(zone_id)
            .set_app_id(app_id)
    }

    /// Gets a policy of an access application.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    /// * `app_id` - the access application identifier.
    /// * `policy_id` - the access policy identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     let response = client.get_access_policy("my-zone-id", "my-app-id", "my-policy-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_access_policy(
        &self,
        zone_id: impl Into<String>,
        app_id: impl Into<String>,
        policy_id: impl Into<String>,
    ) -> super::builder::mtls::GetAccessPolicy {
        super::builder::mtls::GetAccessPolicy::new(self.inner.clone())
            .set_zone_id(zone_id)
            .set_app_id(app_id)
            .set_policy_id(policy_id)
    }

    /// Changes a policy of an access application.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    /// * `app_id` - the access application identifier.
    /// * `policy_id` - the access policy identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     let response = client.update_access_policy("my-zone-id", "my-app-id", "my-policy-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn update_access_policy(
        &self,
        zone_id: impl Into<String>,
        app_id: impl Into<String>,
        policy_id: impl Into<String>,
    ) -> super::builder::mtls::UpdateAccessPolicy {
        super::builder::mtls::UpdateAccessPolicy::new(self.inner.clone())
            .set_zone_id(zone_id)
            .set_app_id(app_id)
            .set_policy_id(policy_id)
    }

    /// Deletes a policy of an access application.
    ///
    /// # Parameters
    /// * `zone_id` - the zone identifier.
    /// * `app_id` - the access application identifier.
    /// * `policy_id` - the access policy identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_mtls_v1::client::Mtls;
    /// async fn sample(client: &Mtls) -> gax::Result<()> {
    ///     let response = client.delete_access_policy("my-zone-id", "my-app-id", "my-policy-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_access_policy(
        &self,
        zone_id: impl Into<String>,
        app_id: impl Into<String>,
        policy_id: impl Into<String>,
    ) -> super::builder::mtls::DeleteAccessPolicy {
        super::builder::mtls::DeleteAccessPolicy::new(self.inner.clone())
            .set_zone_id(zone_id)
            .set_app_id(app_id)
            .set_policy_id(policy_id)
    }
}
