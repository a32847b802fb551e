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

/// The identity of a [TransitGateway] client.
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

/// Implements a client for the Transit Gateway API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
/// let client = TransitGateway::builder("2021-12-30").build().await?;
/// // use `client` to make requests to the Transit Gateway API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Manages transit gateways, their connections, and lists the locations
/// where transit gateways can be created.
///
/// Every request includes the API `version` given when the client is created.
///
/// # Configuration
///
/// To configure `TransitGateway` use the `with_*` methods in the type returned
/// by [builder()][TransitGateway::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://transit.cloud.ibm.com/v1`). Applications using private endpoints may want to
///   override this default.
/// * [with_credentials()]: by default this client loads the credentials from
///   the external configuration, using `transit_gateway_apis` as the service
///   name. Applications using custom authentication may need to override this
///   default.
///
/// [with_endpoint()]: super::builder::transit_gateway::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::transit_gateway::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `TransitGateway` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `TransitGateway` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally. Clones share the retry configuration
/// changed by [enable_retries()][TransitGateway::enable_retries].
#[derive(Clone, Debug)]
pub struct TransitGateway {
    inner: std::sync::Arc<dyn super::stub::dynamic::TransitGateway>,
    identity: Identity,
    service_url: String,
    retry_switch: gax::retry_policy::RetrySwitch,
}

impl TransitGateway {
    /// Returns a builder for [TransitGateway].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// let client = TransitGateway::builder("2021-12-30").build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder(version: impl Into<String>) -> super::builder::transit_gateway::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::transit_gateway::client::Factory {
            identity: Identity::new(version),
        })
    }

    /// Creates a new client using the default service URL and the given
    /// credentials.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// use auth::credentials::bearer_token;
    /// # fn sample() -> anyhow::Result<()> {
    /// let credentials = bearer_token::Builder::new("my-access-token").build()?;
    /// let client = TransitGateway::new("2021-12-30", credentials)?;
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
        T: super::stub::TransitGateway + 'static,
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
        let transport = super::transport::TransitGateway::new(config, identity.clone())?;
        let service_url = transport.service_url().to_string();
        let retry_switch = transport.retry_switch();
        let inner: std::sync::Arc<dyn super::stub::dynamic::TransitGateway> = if tracing {
            std::sync::Arc::new(super::tracing::TransitGateway::new(transport))
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
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// # use std::time::Duration;
    /// fn configure(client: &TransitGateway) {
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

    /// Returns true if [enable_retries()][TransitGateway::enable_retries] is in
    /// effect.
    pub fn retries_enabled(&self) -> bool {
        self.retry_switch.is_enabled()
    }

    /// Lists the connections of all the transit gateways in the account.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// async fn sample(client: &TransitGateway) -> gax::Result<()> {
    ///     let mut items = client.list_connections().by_item();
    ///     while let Some(item) = items.next().await {
    ///         println!("item {:?}", item?);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_connections(&self) -> super::builder::transit_gateway::ListConnections {
        super::builder::transit_gateway::ListConnections::new(self.inner.clone())
    }

    /// Lists the transit gateways in the account.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// async fn sample(client: &TransitGateway) -> gax::Result<()> {
    ///     let gateways = client.list_transit_gateways().by_item().all().await?;
    ///     for gateway in gateways {
    ///         println!("{} in {}", gateway.name, gateway.location);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_transit_gateways(&self) -> super::builder::transit_gateway::ListTransitGateways {
        super::builder::transit_gateway::ListTransitGateways::new(self.inner.clone())
    }

    /// Creates a transit gateway.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// async fn sample(client: &TransitGateway) -> gax::Result<()> {
    ///     let response = client
    ///         .create_transit_gateway()
    ///         .set_location("us-south")
    ///         .set_name("my-transit-gateway")
    ///         .set_global(true)
    ///         .send()
    ///         .await?;
    ///     println!("transit gateway {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn create_transit_gateway(&self) -> super::builder::transit_gateway::CreateTransitGateway {
        super::builder::transit_gateway::CreateTransitGateway::new(self.inner.clone())
    }

    /// Deletes a transit gateway.
    ///
    /// The transit gateway must not have any connections.
    ///
    /// # Parameters
    /// * `id` - the transit gateway identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// async fn sample(client: &TransitGateway) -> gax::Result<()> {
    ///     let response = client.delete_transit_gateway("my-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_transit_gateway(
        &self,
        id: impl Into<String>,
    ) -> super::builder::transit_gateway::DeleteTransitGateway {
        super::builder::transit_gateway::DeleteTransitGateway::new(self.inner.clone()).set_id(id)
    }

    /// Gets a transit gateway.
    ///
    /// # Parameters
    /// * `id` - the transit gateway identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// async fn sample(client: &TransitGateway) -> gax::Result<()> {
    ///     let response = client.get_transit_gateway("my-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_transit_gateway(
        &self,
        id: impl Into<String>,
    ) -> super::builder::transit_gateway::GetTransitGateway {
        super::builder::transit_gateway::GetTransitGateway::new(self.inner.clone()).set_id(id)
    }

    /// Changes a transit gateway.
    ///
    /// # Parameters
    /// * `id` - the transit gateway identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// async fn sample(client: &TransitGateway) -> gax::Result<()> {
    ///     let response = client.update_transit_gateway("my-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn update_transit_gateway(
        &self,
        id: impl Into<String>,
    ) -> super::builder::transit_gateway::UpdateTransitGateway {
        super::builder::transit_gateway::UpdateTransitGateway::new(self.inner.clone()).set_id(id)
    }

    /// Lists the connections of a transit gateway.
    ///
    /// # Parameters
    /// * `transit_gateway_id` - the transit gateway identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// async fn sample(client: &TransitGateway) -> gax::Result<()> {
    ///     let mut items = client.list_transit_gateway_connections("my-transit-gateway-id").by_item();
    ///     while let Some(item) = items.next().await {
    ///         println!("item {:?}", item?);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_transit_gateway_connections(
        &self,
        transit_gateway_id: impl Into<String>,
    ) -> super::builder::transit_gateway::ListTransitGatewayConnections {
        super::builder::transit_gateway::ListTransitGatewayConnections::new(self.inner.clone())
            .set_transit_gateway_id(transit_gateway_id)
    }

    /// Connects a network to a transit gateway.
    ///
    /// `gre_tunnel` connections need a `base_connection_id`, a `zone` and the
    /// tunnel addresses. Most other network types need a `network_id`.
    ///
    /// # Parameters
    /// * `transit_gateway_id` - the transit gateway identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// async fn sample(client: &TransitGateway) -> gax::Result<()> {
    ///     use ibm_cloud_networking_transit_gateway_v1::model::network_type;
    ///     let response = client
    ///         .create_transit_gateway_connection("my-gateway-id")
    ///         .set_network_type(network_type::VPC)
    ///         .set_name("my-vpc-connection")
    ///         .set_network_id("crn:v1:bluemix:public:is:us-south:a/my-account::vpc:my-vpc")
    ///         .send()
    ///         .await?;
    ///     println!("connection {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn create_transit_gateway_connection(
        &self,
        transit_gateway_id: impl Into<String>,
    ) -> super::builder::transit_gateway::CreateTransitGatewayConnection {
        super::builder::transit_gateway::CreateTransitGatewayConnection::new(self.inner.clone())
            .set_transit_gateway_id(transit_gateway_id)
    }

    /// Removes a connection from a transit gateway.
    ///
    /// # Parameters
    /// * `transit_gateway_id` - the transit gateway identifier.
    /// * `id` - the connection identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// async fn sample(client: &TransitGateway) -> gax::Result<()> {
    ///     let response = client.delete_transit_gateway_connection("my-transit-gateway-id", "my-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_transit_gateway_connection(
        &self,
        transit_gateway_id: impl Into<String>,
        id: impl Into<String>,
    ) -> super::builder::transit_gateway::DeleteTransitGatewayConnection {
        super::builder::transit_gateway::DeleteTransitGatewayConnection::new(self.inner.clone())
            .set_transit_gateway_id(transit_gateway_id)
            .set_id(id)
    }

    /// Gets a connection of a transit gateway.
    ///
    /// # Parameters
    /// * `transit_gateway_id` - the transit gateway identifier.
    /// * `id` - the connection identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// async fn sample(client: &TransitGateway) -> gax::Result<()> {
    ///     let response = client.get_transit_gateway_connection("my-transit-gateway-id", "my-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_transit_gateway_connection(
        &self,
        transit_gateway_id: impl Into<String>,
        id: impl Into<String>,
    ) -> super::builder::transit_gateway::GetTransitGatewayConnection {
        super::builder::transit_gateway::GetTransitGatewayConnection::new(self.inner.clone())
            .set_transit_gateway_id(transit_gateway_id)
            .set_id(id)
    }

    /// Changes a connection of a transit gateway.
    ///
    /// # Parameters
    /// * `transit_gateway_id` - the transit gateway identifier.
    /// * `id` - the connection identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// async fn sample(client: &TransitGateway) -> gax::Result<()> {
    ///     let response = client.update_transit_gateway_connection("my-transit-gateway-id", "my-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn update_transit_gateway_connection(
        &self,
        transit_gateway_id: impl Into<String>,
        id: impl Into<String>,
    ) -> super::builder::transit_gateway::UpdateTransitGatewayConnection {
        super::builder::transit_gateway::UpdateTransitGatewayConnection::new(self.inner.clone())
            .set_transit_gateway_id(transit_gateway_id)
            .set_id(id)
    }

    /// Approves or rejects a cross account connection request.
    ///
    /// Only the owner of the connected network can perform these actions.
    ///
    /// # Parameters
    /// * `transit_gateway_id` - the transit gateway identifier.
    /// * `id` - the connection identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// async fn sample(client: &TransitGateway) -> gax::Result<()> {
    ///     use ibm_cloud_networking_transit_gateway_v1::model::connection_action;
    ///     client
    ///         .create_transit_gateway_connection_actions("my-gateway-id", "my-connection-id")
    ///         .set_action(connection_action::APPROVE)
    ///         .send()
    ///         .await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn create_transit_gateway_connection_actions(
        &self,
        transit_gateway_id: impl Into<String>,
        id: impl Into<String>,
    ) -> super::builder::transit_gateway::CreateTransitGatewayConnectionActions {
        super::builder::transit_gateway::CreateTransitGatewayConnectionActions::new(self.inner.clone())
            .set_transit_gateway_id(transit_gateway_id)
            .set_id(id)
    }

    /// Lists the locations where transit gateways can be created.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// async fn sample(client: &TransitGateway) -> gax::Result<()> {
    ///     let response = client.list_gateway_locations().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_gateway_locations(&self) -> super::builder::transit_gateway::ListGatewayLocations {
        super::builder::transit_gateway::ListGatewayLocations::new(self.inner.clone())
    }

    /// Gets a location where transit gateways can be created.
    ///
    /// # Parameters
    /// * `name` - the location name, for example `us-south`.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    /// async fn sample(client: &TransitGateway) -> gax::Result<()> {
    ///     let response = client.get_gateway_location("my-name").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_gateway_location(
        &self,
        name: impl Into<String>,
    ) -> super::builder::transit_gateway::GetGatewayLocation {
        super::builder::transit_gateway::GetGatewayLocation::new(self.inner.clone()).set_name(name)
    }
}
