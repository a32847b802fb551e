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

/// The identity of a [DirectLink] client.
///
/// These values are set when the client is created and are used in the
/// path or query of every request. They cannot be changed afterwards, create
/// a new client to use different values.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Identity {
    /// The API version, a date in `YYYY-MM-DD` format.
    pub version: String,
}

impl Identity {
    /// Creates a new identity.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Sets the value of [version][Identity::version].
    pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        gax::path_parameter::validate(&[("version", &self.version)])
    }
}

/// Implements a client for the Direct Link API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
/// let client = DirectLink::builder("2019-12-13").build().await?;
/// // use `client` to make requests to the Direct Link API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Manages direct link gateways, their virtual connections and their
/// documents, and lists the locations, routers, speeds and ports available to
/// create new gateways.
///
/// Every request includes the API `version` given when the client is created.
///
/// # Configuration
///
/// To configure `DirectLink` use the `with_*` methods in the type returned
/// by [builder()][DirectLink::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://directlink.cloud.ibm.com/v1`). Applications using private endpoints may want to
///   override this default.
/// * [with_credentials()]: by default this client loads the credentials from
///   the external configuration, using `direct_link` as the service
///   name. Applications using custom authentication may need to override this
///   default.
///
/// [with_endpoint()]: super::builder::direct_link::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::direct_link::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `DirectLink` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `DirectLink` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally. Clones share the retry configuration
/// changed by [enable_retries()][DirectLink::enable_retries].
#[derive(Clone, Debug)]
pub struct DirectLink {
    inner: std::sync::Arc<dyn super::stub::dynamic::DirectLink>,
    identity: Identity,
    service_url: String,
    retry_switch: gax::retry_policy::RetrySwitch,
}

impl DirectLink {
    /// Returns a builder for [DirectLink].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// let client = DirectLink::builder("2019-12-13").build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder(version: impl Into<String>) -> super::builder::direct_link::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::direct_link::client::Factory {
            identity: Identity::new(version),
        })
    }

    /// Creates a new client using the default service URL and the given
    /// credentials.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// use auth::credentials::bearer_token;
    /// # fn sample() -> anyhow::Result<()> {
    /// let credentials = bearer_token::Builder::new("my-access-token").build()?;
    /// let client = DirectLink::new("2019-12-13", credentials)?;
    /// # Ok(()) }
    /// ```
    pub fn new(
        version: impl Into<String>,
        credentials: gaxi::options::Credentials,
    ) -> gax::client_builder::Result<Self> {
        let mut config = gaxi::options::ClientConfig::default();
        config.cred = Some(credentials);
        config.endpoint = Some(crate::DEFAULT_SERVICE_URL.to_string());
        Self::with_config(Identity::new(version), config)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(identity: Identity, stub: T) -> Self
    where
        T: super::stub::DirectLink + 'static,
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
        let transport = super::transport::DirectLink::new(config, identity.clone())?;
        let service_url = transport.service_url().to_string();
        let retry_switch = transport.retry_switch();
        let inner: std::sync::Arc<dyn super::stub::dynamic::DirectLink> = if tracing {
            std::sync::Arc::new(super::tracing::DirectLink::new(transport))
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

    /// The API version, a date in `YYYY-MM-DD` format.
    pub fn version(&self) -> &str {
        &self.identity.version
    }

    /// Enables automatic retries for all the requests made by this client and
    /// its clones.
    ///
    /// `max_retries` defaults to 4 and `max_retry_interval` to 30 seconds.
    /// Retry policies set on a request take precedence.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// # use std::time::Duration;
    /// fn configure(client: &DirectLink) {
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

    /// Returns true if [enable_retries()][DirectLink::enable_retries] is in
    /// effect.
    pub fn retries_enabled(&self) -> bool {
        self.retry_switch.is_enabled()
    }

    /// Lists the direct link gateways in the account.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let response = client.list_gateways().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_gateways(&self) -> super::builder::direct_link::ListGateways {
        super::builder::direct_link::ListGateways::new(self.inner.clone())
    }

    /// Creates a direct link gateway.
    ///
    /// `dedicated` gateways need a `location_name`, `cross_connect_router`,
    /// `carrier_name` and `customer_name`. `connect` gateways need a `port`.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     use ibm_cloud_networking_direct_link_v1::model::gateway_type;
    ///     let response = client
    ///         .create_gateway()
    ///         .set_name("my-gateway")
    ///         .set_type(gateway_type::DEDICATED)
    ///         .set_speed_mbps(1000)
    ///         .set_global(true)
    ///         .set_metered(false)
    ///         .set_bgp_asn(64999)
    ///         .set_location_name("dal03")
    ///         .set_cross_connect_router("LAB-xcr01.dal09")
    ///         .set_carrier_name("my-carrier")
    ///         .set_customer_name("my-customer")
    ///         .send()
    ///         .await?;
    ///     println!("gateway {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn create_gateway(&self) -> super::builder::direct_link::CreateGateway {
        super::builder::direct_link::CreateGateway::new(self.inner.clone())
    }

    /// Deletes a direct link gateway.
    ///
    /// # Parameters
    /// * `id` - the gateway identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let response = client.delete_gateway("my-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_gateway(
        &self,
        id: impl Into<String>,
    ) -> super::builder::direct_link::DeleteGateway {
        super::builder::direct_link::DeleteGateway::new(self.inner.clone()).set_id(id)
    }

    /// Gets a direct link gateway.
    ///
    /// # Parameters
    /// * `id` - the gateway identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let response = client.get_gateway("my-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_gateway(&self, id: impl Into<String>) -> super::builder::direct_link::GetGateway {
        super::builder::direct_link::GetGateway::new(self.inner.clone()).set_id(id)
    }

    /// Changes a direct link gateway.
    ///
    /// # Parameters
    /// * `id` - the gateway identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let response = client
    ///         .update_gateway("my-gateway-id")
    ///         .set_name("new-name")
    ///         .set_speed_mbps(2000)
    ///         .send()
    ///         .await?;
    ///     println!("gateway {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn update_gateway(
        &self,
        id: impl Into<String>,
    ) -> super::builder::direct_link::UpdateGateway {
        super::builder::direct_link::UpdateGateway::new(self.inner.clone()).set_id(id)
    }

    /// Approves or rejects a change requested by the provider of a `connect`
    /// gateway.
    ///
    /// # Parameters
    /// * `id` - the gateway identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     use ibm_cloud_networking_direct_link_v1::model::gateway_action;
    ///     let response = client
    ///         .create_gateway_action("my-gateway-id")
    ///         .set_action(gateway_action::CREATE_GATEWAY_APPROVE)
    ///         .set_global(false)
    ///         .set_metered(true)
    ///         .send()
    ///         .await?;
    ///     println!("gateway {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn create_gateway_action(
        &self,
        id: impl Into<String>,
    ) -> super::builder::direct_link::CreateGatewayAction {
        super::builder::direct_link::CreateGatewayAction::new(self.inner.clone()).set_id(id)
    }

    /// Downloads the completion notice of a `dedicated` gateway, a PDF file.
    ///
    /// # Parameters
    /// * `id` - the gateway identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let response = client
    ///         .list_gateway_completion_notice("my-gateway-id")
    ///         .send()
    ///         .await?;
    ///     let pdf = response.into_body().collect().await?;
    ///     println!("{} bytes", pdf.len());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_gateway_completion_notice(
        &self,
        id: impl Into<String>,
    ) -> super::builder::direct_link::ListGatewayCompletionNotice {
        super::builder::direct_link::ListGatewayCompletionNotice::new(self.inner.clone()).set_id(id)
    }

    /// Uploads the completion notice of a `dedicated` gateway.
    ///
    /// The notice is a PDF file, sent as a `multipart/form-data` request.
    ///
    /// # Parameters
    /// * `id` - the gateway identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let pdf = std::fs::read("completion_notice.pdf").expect("cannot read the file");
    ///     client
    ///         .create_gateway_completion_notice("my-gateway-id")
    ///         .set_upload(pdf)
    ///         .send()
    ///         .await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn create_gateway_completion_notice(
        &self,
        id: impl Into<String>,
    ) -> super::builder::direct_link::CreateGatewayCompletionNotice {
        super::builder::direct_link::CreateGatewayCompletionNotice::new(self.inner.clone())
            .set_id(id)
    }

    /// Downloads the letter of authorization of a `dedicated` gateway, a PDF file.
    ///
    /// # Parameters
    /// * `id` - the gateway identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let response = client.list_gateway_letter_of_authorization("my-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_gateway_letter_of_authorization(
        &self,
        id: impl Into<String>,
    ) -> super::builder::direct_link::ListGatewayLetterOfAuthorization {
        super::builder::direct_link::ListGatewayLetterOfAuthorization::new(self.inner.clone())
            .set_id(id)
    }

    /// Gets the MACsec statistics of a gateway.
    ///
    /// # Parameters
    /// * `id` - the gateway identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     use ibm_cloud_networking_direct_link_v1::model::statistic_type;
    ///     let response = client
    ///         .get_gateway_statistics("my-gateway-id")
    ///         .set_type(statistic_type::MACSEC_MKA)
    ///         .send()
    ///         .await?;
    ///     println!("statistics {:?}", response.body().statistics);
    ///     Ok(())
    /// }
    /// ```
    pub fn get_gateway_statistics(
        &self,
        id: impl Into<String>,
    ) -> super::builder::direct_link::GetGatewayStatistics {
        super::builder::direct_link::GetGatewayStatistics::new(self.inner.clone()).set_id(id)
    }

    /// Lists the locations where gateways of an offering type can be provisioned.
    ///
    /// # Parameters
    /// * `offering_type` - one of the values in [offering_type][crate::model::offering_type].
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let response = client.list_offering_type_locations("my-offering-type").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_offering_type_locations(
        &self,
        offering_type: impl Into<String>,
    ) -> super::builder::direct_link::ListOfferingTypeLocations {
        super::builder::direct_link::ListOfferingTypeLocations::new(self.inner.clone())
            .set_offering_type(offering_type)
    }

    /// Lists the cross connect routers in a location.
    ///
    /// # Parameters
    /// * `offering_type` - one of the values in [offering_type][crate::model::offering_type].
    /// * `location_name` - the location name, for example `dal03`.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let response = client.list_offering_type_location_cross_connect_routers("my-offering-type", "my-location-name").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_offering_type_location_cross_connect_routers(
        &self,
        offering_type: impl Into<String>,
        location_name: impl Into<String>,
    ) -> super::builder::direct_link::ListOfferingTypeLocationCrossConnectRouters {
        super::builder::direct_link::ListOfferingTypeLocationCrossConnectRouters::new(self.inner.clone())
            .set_offering_type(offering_type)
            .set_location_name(location_name)
    }

    /// Lists the link speeds available for an offering type.
    ///
    /// # Parameters
    /// * `offering_type` - one of the values in [offering_type][crate::model::offering_type].
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let response = client.list_offering_type_speeds("my-offering-type").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_offering_type_speeds(
        &self,
        offering_type: impl Into<String>,
    ) -> super::builder::direct_link::ListOfferingTypeSpeeds {
        super::builder::direct_link::ListOfferingTypeSpeeds::new(self.inner.clone())
            .set_offering_type(offering_type)
    }

    /// Lists the provider ports available for `connect` gateways.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let mut items = client.list_ports().by_item();
    ///     while let Some(item) = items.next().await {
    ///         println!("item {:?}", item?);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_ports(&self) -> super::builder::direct_link::ListPorts {
        super::builder::direct_link::ListPorts::new(self.inner.clone())
    }

    /// Gets a provider port.
    ///
    /// # Parameters
    /// * `id` - the port identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let response = client.get_port("my-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_port(&self, id: impl Into<String>) -> super::builder::direct_link::GetPort {
        super::builder::direct_link::GetPort::new(self.inner.clone()).set_id(id)
    }

    /// Lists the virtual connections of a gateway.
    ///
    /// # Parameters
    /// * `gateway_id` - the gateway identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let response = client.list_gateway_virtual_connections("my-gateway-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_gateway_virtual_connections(
        &self,
        gateway_id: impl Into<String>,
    ) -> super::builder::direct_link::ListGatewayVirtualConnections {
        super::builder::direct_link::ListGatewayVirtualConnections::new(self.inner.clone())
            .set_gateway_id(gateway_id)
    }

    /// Connects a gateway to a network.
    ///
    /// # Parameters
    /// * `gateway_id` - the gateway identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     use ibm_cloud_networking_direct_link_v1::model::virtual_connection_type;
    ///     let response = client
    ///         .create_gateway_virtual_connection("my-gateway-id")
    ///         .set_name("my-connection")
    ///         .set_type(virtual_connection_type::VPC)
    ///         .set_network_id("crn:v1:bluemix:public:is:us-east:a/my-account::vpc:my-vpc")
    ///         .send()
    ///         .await?;
    ///     println!("connection {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn create_gateway_virtual_connection(
        &self,
        gateway_id: impl Into<String>,
    ) -> super::builder::direct_link::CreateGatewayVirtualConnection {
        super::builder::direct_link::CreateGatewayVirtualConnection::new(self.inner.clone())
            .set_gateway_id(gateway_id)
    }

    /// Deletes a virtual connection.
    ///
    /// # Parameters
    /// * `gateway_id` - the gateway identifier.
    /// * `id` - the virtual connection identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let response = client.delete_gateway_virtual_connection("my-gateway-id", "my-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_gateway_virtual_connection(
        &self,
        gateway_id: impl Into<String>,
        id: impl Into<String>,
    ) -> super::builder::direct_link::DeleteGatewayVirtualConnection {
        super::builder::direct_link::DeleteGatewayVirtualConnection::new(self.inner.clone())
            .set_gateway_id(gateway_id)
            .set_id(id)
    }

    /// Gets a virtual connection.
    ///
    /// # Parameters
    /// * `gateway_id` - the gateway identifier.
    /// * `id` - the virtual connection identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let response = client.get_gateway_virtual_connection("my-gateway-id", "my-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_gateway_virtual_connection(
        &self,
        gateway_id: impl Into<String>,
        id: impl Into<String>,
    ) -> super::builder::direct_link::GetGatewayVirtualConnection {
        super::builder::direct_link::GetGatewayVirtualConnection::new(self.inner.clone())
            .set_gateway_id(gateway_id)
            .set_id(id)
    }

    /// Changes a virtual connection.
    ///
    /// # Parameters
    /// * `gateway_id` - the gateway identifier.
    /// * `id` - the virtual connection identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    /// async fn sample(client: &DirectLink) -> gax::Result<()> {
    ///     let response = client.update_gateway_virtual_connection("my-gateway-id", "my-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn update_gateway_virtual_connection(
        &self,
        gateway_id: impl Into<String>,
        id: impl Into<String>,
    ) -> super::builder::direct_link::UpdateGatewayVirtualConnection {
        super::builder::direct_link::UpdateGatewayVirtualConnection::new(self.inner.clone())
            .set_gateway_id(gateway_id)
            .set_id(id)
    }
}
