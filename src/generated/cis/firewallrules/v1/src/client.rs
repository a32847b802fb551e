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

/// The identity of a [FirewallRules] client.
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

/// Implements a client for the Firewall Rules API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use ibm_cloud_networking_firewall_rules_v1::client::FirewallRules;
/// let client = FirewallRules::builder("my-crn", "my-zone-id").build().await?;
/// // use `client` to make requests to the Firewall Rules API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Creates, reads, changes and deletes the firewall rules of a zone. The
/// batch operations change many rules in a single request.
///
/// All the operations require the user access token, see
/// [set_x_auth_user_token()][super::builder::firewall_rules::GetFirewallRule::set_x_auth_user_token].
///
/// # Configuration
///
/// To configure `FirewallRules` use the `with_*` methods in the type returned
/// by [builder()][FirewallRules::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://api.cis.cloud.ibm.com`). Applications using private endpoints may want to
///   override this default.
/// * [with_credentials()]: by default this client loads the credentials from
///   the external configuration, using `firewall_rules` as the service
///   name. Applications using custom authentication may need to override this
///   default.
///
/// [with_endpoint()]: super::builder::firewall_rules::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::firewall_rules::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `FirewallRules` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `FirewallRules` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally. Clones share the retry configuration
/// changed by [enable_retries()][FirewallRules::enable_retries].
#[derive(Clone, Debug)]
pub struct FirewallRules {
    inner: std::sync::Arc<dyn super::stub::dynamic::FirewallRules>,
    identity: Identity,
    service_url: String,
    retry_switch: gax::retry_policy::RetrySwitch,
}

impl FirewallRules {
    /// Returns a builder for [FirewallRules].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_firewall_rules_v1::client::FirewallRules;
    /// let client = FirewallRules::builder("my-crn", "my-zone-id").build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder(
        crn: impl Into<String>,
        zone_identifier: impl Into<String>,
    ) -> super::builder::firewall_rules::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::firewall_rules::client::Factory {
            identity: Identity::new(crn, zone_identifier),
        })
    }

    /// Creates a new client using the default service URL and the given
    /// credentials.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_firewall_rules_v1::client::FirewallRules;
    /// use auth::credentials::bearer_token;
    /// # fn sample() -> anyhow::Result<()> {
    /// let credentials = bearer_token::Builder::new("my-access-token").build()?;
    /// let client = FirewallRules::new("my-crn", "my-zone-id", credentials)?;
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
        T: super::stub::FirewallRules + 'static,
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
        let transport = super::transport::FirewallRules::new(config, identity.clone())?;
        let service_url = transport.service_url().to_string();
        let retry_switch = transport.retry_switch();
        let inner: std::sync::Arc<dyn super::stub::dynamic::FirewallRules> = if tracing {
            std::sync::Arc::new(super::tracing::FirewallRules::new(transport))
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
    /// # use ibm_cloud_networking_firewall_rules_v1::client::FirewallRules;
    /// # use std::time::Duration;
    /// fn configure(client: &FirewallRules) {
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

    /// Returns true if [enable_retries()][FirewallRules::enable_retries] is in
    /// effect.
    pub fn retries_enabled(&self) -> bool {
        self.retry_switch.is_enabled()
    }

    /// Lists the firewall rules of the zone.
    ///
    /// The results are paged by `page` and `per_page`, the envelope `result_info`
    /// reports the totals.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_firewall_rules_v1::client::FirewallRules;
    /// async fn sample(client: &FirewallRules) -> gax::Result<()> {
    ///     let response = client
    ///         .list_all_firewall_rules()
    ///         .set_x_auth_user_token("my-access-token")
    ///         .set_per_page(20)
    ///         .send()
    ///         .await?;
    ///     for rule in response.into_body().result.unwrap_or_default() {
    ///         println!("rule {rule:?}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_all_firewall_rules(&self) -> super::builder::firewall_rules::ListAllFirewallRules {
        super::builder::firewall_rules::ListAllFirewallRules::new(self.inner.clone())
    }

    /// Creates one or more firewall rules.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_firewall_rules_v1::client::FirewallRules;
    /// async fn sample(client: &FirewallRules) -> gax::Result<()> {
    ///     use ibm_cloud_networking_firewall_rules_v1::model::{action, FilterReference, FirewallRuleInput};
    ///     let rule = FirewallRuleInput::new()
    ///         .set_filter(FilterReference::new().set_id("my-filter-id"))
    ///         .set_action(action::BLOCK)
    ///         .set_description("block the bad actors");
    ///     let response = client
    ///         .create_firewall_rules()
    ///         .set_x_auth_user_token("my-access-token")
    ///         .set_firewall_rules([rule])
    ///         .send()
    ///         .await?;
    ///     println!("created {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn create_firewall_rules(&self) -> super::builder::firewall_rules::CreateFirewallRules {
        super::builder::firewall_rules::CreateFirewallRules::new(self.inner.clone())
    }

    /// Changes one or more firewall rules.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_firewall_rules_v1::client::FirewallRules;
    /// async fn sample(client: &FirewallRules) -> gax::Result<()> {
    ///     use ibm_cloud_networking_firewall_rules_v1::model::FirewallRuleUpdate;
    ///     let change = FirewallRuleUpdate::new()
    ///         .set_id("my-rule-id")
    ///         .set_paused(true);
    ///     let response = client
    ///         .update_firewall_rules()
    ///         .set_x_auth_user_token("my-access-token")
    ///         .set_firewall_rules([change])
    ///         .send()
    ///         .await?;
    ///     println!("updated {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn update_firewall_rules(&self) -> super::builder::firewall_rules::UpdateFirewallRules {
        super::builder::firewall_rules::UpdateFirewallRules::new(self.inner.clone())
    }

    /// Deletes one or more firewall rules.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_firewall_rules_v1::client::FirewallRules;
    /// async fn sample(client: &FirewallRules) -> gax::Result<()> {
    ///     let response = client
    ///         .delete_firewall_rules()
    ///         .set_x_auth_user_token("my-access-token")
    ///         .set_id("rule-1,rule-2")
    ///         .send()
    ///         .await?;
    ///     println!("deleted {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_firewall_rules(&self) -> super::builder::firewall_rules::DeleteFirewallRules {
        super::builder::firewall_rules::DeleteFirewallRules::new(self.inner.clone())
    }

    /// Gets a firewall rule.
    ///
    /// # Parameters
    /// * `firewall_rule_identifier` - the firewall rule identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_firewall_rules_v1::client::FirewallRules;
    /// async fn sample(client: &FirewallRules) -> gax::Result<()> {
    ///     let response = client
    ///         .get_firewall_rule("my-rule-id")
    ///         .set_x_auth_user_token("my-access-token")
    ///         .send()
    ///         .await?;
    ///     println!("rule {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn get_firewall_rule(
        &self,
        firewall_rule_identifier: impl Into<String>,
    ) -> super::builder::firewall_rules::GetFirewallRule {
        super::builder::firewall_rules::GetFirewallRule::new(self.inner.clone())
            .set_firewall_rule_identifier(firewall_rule_identifier)
    }

    /// Changes a firewall rule.
    ///
    /// # Parameters
    /// * `firewall_rule_identifier` - the firewall rule identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_firewall_rules_v1::client::FirewallRules;
    /// async fn sample(client: &FirewallRules) -> gax::Result<()> {
    ///     use ibm_cloud_networking_firewall_rules_v1::model::action;
    ///     let response = client
    ///         .update_firewall_rule("my-rule-id")
    ///         .set_x_auth_user_token("my-access-token")
    ///         .set_action(action::CHALLENGE)
    ///         .send()
    ///         .await?;
    ///     println!("rule {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn update_firewall_rule(
        &self,
        firewall_rule_identifier: impl Into<String>,
    ) -> super::builder::firewall_rules::UpdateFirewallRule {
        super::builder::firewall_rules::UpdateFirewallRule::new(self.inner.clone())
            .set_firewall_rule_identifier(firewall_rule_identifier)
    }

    /// Deletes a firewall rule.
    ///
    /// # Parameters
    /// * `firewall_rule_identifier` - the firewall rule identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_firewall_rules_v1::client::FirewallRules;
    /// async fn sample(client: &FirewallRules) -> gax::Result<()> {
    ///     let response = client
    ///         .delete_firewall_rule("my-rule-id")
    ///         .set_x_auth_user_token("my-access-token")
    ///         .send()
    ///         .await?;
    ///     println!("deleted {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_firewall_rule(
        &self,
        firewall_rule_identifier: impl Into<String>,
    ) -> super::builder::firewall_rules::DeleteFirewallRule {
        super::builder::firewall_rules::DeleteFirewallRule::new(self.inner.clone())
            .set_firewall_rule_identifier(firewall_rule_identifier)
    }
}
