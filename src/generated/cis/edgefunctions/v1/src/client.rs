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

/// The identity of a [EdgeFunctions] client.
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

/// Implements a client for the Edge Functions API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use ibm_cloud_networking_edge_functions_v1::client::EdgeFunctions;
/// let client = EdgeFunctions::builder("my-crn", "my-zone-id").build().await?;
/// // use `client` to make requests to the Edge Functions API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Uploads, downloads and deletes edge functions actions, and manages the
/// triggers routing the requests of a zone to them. Actions belong to the
/// instance, triggers belong to the client's zone.
///
/// # Configuration
///
/// To configure `EdgeFunctions` use the `with_*` methods in the type returned
/// by [builder()][EdgeFunctions::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://api.cis.cloud.ibm.com`). Applications using private endpoints may want to
///   override this default.
/// * [with_credentials()]: by default this client loads the credentials from
///   the external configuration, using `edge_functions_api` as the service
///   name. Applications using custom authentication may need to override this
///   default.
///
/// [with_endpoint()]: super::builder::edge_functions::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::edge_functions::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `EdgeFunctions` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `EdgeFunctions` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally. Clones share the retry configuration
/// changed by [enable_retries()][EdgeFunctions::enable_retries].
#[derive(Clone, Debug)]
pub struct EdgeFunctions {
    inner: std::sync::Arc<dyn super::stub::dynamic::EdgeFunctions>,
    identity: Identity,
    service_url: String,
    retry_switch: gax::retry_policy::RetrySwitch,
}

impl EdgeFunctions {
    /// Returns a builder for [EdgeFunctions].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_edge_functions_v1::client::EdgeFunctions;
    /// let client = EdgeFunctions::builder("my-crn", "my-zone-id").build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder(
        crn: impl Into<String>,
        zone_identifier: impl Into<String>,
    ) -> super::builder::edge_functions::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::edge_functions::client::Factory {
            identity: Identity::new(crn, zone_identifier),
        })
    }

    /// Creates a new client using the default service URL and the given
    /// credentials.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_edge_functions_v1::client::EdgeFunctions;
    /// use auth::credentials::bearer_token;
    /// # fn sample() -> anyhow::Result<()> {
    /// let credentials = bearer_token::Builder::new("my-access-token").build()?;
    /// let client = EdgeFunctions::new("my-crn", "my-zone-id", credentials)?;
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
        T: super::stub::EdgeFunctions + 'static,
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
        let transport = super::transport::EdgeFunctions::new(config, identity.clone())?;
        let service_url = transport.service_url().to_string();
        let retry_switch = transport.retry_switch();
        let inner: std::sync::Arc<dyn super::stub::dynamic::EdgeFunctions> = if tracing {
            std::sync::Arc::new(super::tracing::EdgeFunctions::new(transport))
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
    /// # use ibm_cloud_networking_edge_functions_v1::client::EdgeFunctions;
    /// # use std::time::Duration;
    /// fn configure(client: &EdgeFunctions) {
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

    /// Returns true if [enable_retries()][EdgeFunctions::enable_retries] is in
    /// effect.
    pub fn retries_enabled(&self) -> bool {
        self.retry_switch.is_enabled()
    }

    /// Lists the edge functions actions of the instance.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_edge_functions_v1::client::EdgeFunctions;
    /// async fn sample(client: &EdgeFunctions) -> gax::Result<()> {
    ///     let response = client.list_edge_functions_actions().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_edge_functions_actions(
        &self,
    ) -> super::builder::edge_functions::ListEdgeFunctionsActions {
        super::builder::edge_functions::ListEdgeFunctionsActions::new(self.inner.clone())
    }

    /// Uploads an action, creating it if needed.
    ///
    /// The script is sent as-is, with the `application/javascript` content type.
    ///
    /// # Parameters
    /// * `script_name` - the action name.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_edge_functions_v1::client::EdgeFunctions;
    /// async fn sample(client: &EdgeFunctions) -> gax::Result<()> {
    ///     const SCRIPT: &str = r#"addEventListener('fetch', (event) => {
    ///         event.respondWith(new Response('hello'));
    ///     });"#;
    ///     let response = client
    ///         .update_edge_functions_action("my-action")
    ///         .set_edge_functions_action(SCRIPT)
    ///         .send()
    ///         .await?;
    ///     println!("action {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn update_edge_functions_action(
        &self,
        script_name: impl Into<String>,
    ) -> super::builder::edge_functions::UpdateEdgeFunctionsAction {
        super::builder::edge_functions::UpdateEdgeFunctionsAction::new(self.inner.clone())
            .set_script_name(script_name)
    }

    /// Downloads the JavaScript source of an action.
    ///
    /// The response body is streamed.
    ///
    /// # Parameters
    /// * `script_name` - the action name.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_edge_functions_v1::client::EdgeFunctions;
    /// async fn sample(client: &EdgeFunctions) -> gax::Result<()> {
    ///     let response = client.get_edge_functions_action("my-action").send().await?;
    ///     let mut stream = response.into_body();
    ///     while let Some(chunk) = stream.next().await {
    ///         println!("{} bytes", chunk?.len());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn get_edge_functions_action(
        &self,
        script_name: impl Into<String>,
    ) -> super::builder::edge_functions::GetEdgeFunctionsAction {
        super::builder::edge_functions::GetEdgeFunctionsAction::new(self.inner.clone())
            .set_script_name(script_name)
    }

    /// Deletes an action.
    ///
    /// # Parameters
    /// * `script_name` - the action name.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_edge_functions_v1::client::EdgeFunctions;
    /// async fn sample(client: &EdgeFunctions) -> gax::Result<()> {
    ///     let response = client.delete_edge_functions_action("my-script-name").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_edge_functions_action(
        &self,
        script_name: impl Into<String>,
    ) -> super::builder::edge_functions::DeleteEdgeFunctionsAction {
        super::builder::edge_functions::DeleteEdgeFunctionsAction::new(self.inner.clone())
            .set_script_name(script_name)
    }

    /// Creates a trigger in the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_edge_functions_v1::client::EdgeFunctions;
    /// async fn sample(client: &EdgeFunctions) -> gax::Result<()> {
    ///     let response = client
    ///         .create_edge_functions_trigger()
    ///         .set_pattern("example.com/images/*")
    ///         .set_script("my-action")
    ///         .send()
    ///         .await?;
    ///     println!("trigger {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn create_edge_functions_trigger(
        &self,
    ) -> super::builder::edge_functions::CreateEdgeFunctionsTrigger {
        super::builder::edge_functions::CreateEdgeFunctionsTrigger::new(self.inner.clone())
    }

    /// Lists the triggers of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_edge_functions_v1::client::EdgeFunctions;
    /// async fn sample(client: &EdgeFunctions) -> gax::Result<()> {
    ///     let response = client.list_edge_functions_triggers().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_edge_functions_triggers(
        &self,
    ) -> super::builder::edge_functions::ListEdgeFunctionsTriggers {
        super::builder::edge_functions::ListEdgeFunctionsTriggers::new(self.inner.clone())
    }

    /// Gets a trigger.
    ///
    /// # Parameters
    /// * `route_id` - the trigger identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_edge_functions_v1::client::EdgeFunctions;
    /// async fn sample(client: &EdgeFunctions) -> gax::Result<()> {
    ///     let response = client.get_edge_functions_trigger("my-route-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_edge_functions_trigger(
        &self,
        route_id: impl Into<String>,
    ) -> super::builder::edge_functions::GetEdgeFunctionsTrigger {
        super::builder::edge_functions::GetEdgeFunctionsTrigger::new(self.inner.clone())
            .set_route_id(route_id)
    }

    /// Changes a trigger.
    ///
    /// # Parameters
    /// * `route_id` - the trigger identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_edge_functions_v1::client::EdgeFunctions;
    /// async fn sample(client: &EdgeFunctions) -> gax::Result<()> {
    ///     let response = client.update_edge_functions_trigger("my-route-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn update_edge_functions_trigger(
        &self,
        route_id: impl Into<String>,
    ) -> super::builder::edge_functions::UpdateEdgeFunctionsTrigger {
        super::builder::edge_functions::UpdateEdgeFunctionsTrigger::new(self.inner.clone())
            .set_route_id(route_id)
    }

    /// Deletes a trigger.
    ///
    /// # Parameters
    /// * `route_id` - the trigger identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_edge_functions_v1::client::EdgeFunctions;
    /// async fn sample(client: &EdgeFunctions) -> gax::Result<()> {
    ///     let response = client.delete_edge_functions_trigger("my-route-id").send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_edge_functions_trigger(
        &self,
        route_id: impl Into<String>,
    ) -> super::builder::edge_functions::DeleteEdgeFunctionsTrigger {
        super::builder::edge_functions::DeleteEdgeFunctionsTrigger::new(self.inner.clone())
            .set_route_id(route_id)
    }
}
