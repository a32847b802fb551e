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

pub mod firewall_rules {
    use crate::Result;

    /// A builder for [FirewallRules][crate::client::FirewallRules].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_firewall_rules_v1::*;
    /// # use builder::firewall_rules::ClientBuilder;
    /// # use client::FirewallRules;
    /// let builder : ClientBuilder = FirewallRules::builder("my-crn", "my-zone-id");
    /// let client = builder
    ///     .with_endpoint("https://api.cis.cloud.ibm.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::FirewallRules;
        pub struct Factory {
            pub(crate) identity: crate::client::Identity,
        }
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = FirewallRules;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::with_config(self.identity, config)
            }
        }
    }

    /// Common implementation for [crate::client::FirewallRules] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::FirewallRules>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirewallRules>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [FirewallRules::list_all_firewall_rules][crate::client::FirewallRules::list_all_firewall_rules] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_firewall_rules_v1::builder;
    /// use builder::firewall_rules::ListAllFirewallRules;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListAllFirewallRules {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListAllFirewallRules(RequestBuilder<crate::model::ListAllFirewallRulesRequest>);

    impl ListAllFirewallRules {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirewallRules>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAllFirewallRulesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<
            gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>,
        > {
            (*self.0.stub)
                .list_all_firewall_rules(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [x_auth_user_token][crate::model::ListAllFirewallRulesRequest::x_auth_user_token].
        ///
        /// This is a **required** field for requests.
        pub fn set_x_auth_user_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_auth_user_token = v.into();
            self
        }

        /// Sets the value of [description][crate::model::ListAllFirewallRulesRequest::description].
        pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.description = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [description][crate::model::ListAllFirewallRulesRequest::description].
        pub fn set_or_clear_description<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.description = v.map(|x| x.into());
            self
        }

        /// Sets the value of [action][crate::model::ListAllFirewallRulesRequest::action].
        pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.action = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [action][crate::model::ListAllFirewallRulesRequest::action].
        pub fn set_or_clear_action<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.action = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListAllFirewallRulesRequest::page].
        pub fn set_page<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListAllFirewallRulesRequest::page].
        pub fn set_or_clear_page<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [per_page][crate::model::ListAllFirewallRulesRequest::per_page].
        pub fn set_per_page<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.per_page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [per_page][crate::model::ListAllFirewallRulesRequest::per_page].
        pub fn set_or_clear_per_page<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.per_page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order][crate::model::ListAllFirewallRulesRequest::order].
        pub fn set_order<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order][crate::model::ListAllFirewallRulesRequest::order].
        pub fn set_or_clear_order<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [direction][crate::model::ListAllFirewallRulesRequest::direction].
        pub fn set_direction<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.direction = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [direction][crate::model::ListAllFirewallRulesRequest::direction].
        pub fn set_or_clear_direction<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.direction = v.map(|x| x.into());
            self
        }

        /// Sets the value of [match][crate::model::ListAllFirewallRulesRequest::r#match].
        pub fn set_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.r#match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [match][crate::model::ListAllFirewallRulesRequest::r#match].
        pub fn set_or_clear_match<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.r#match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListAllFirewallRules {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallRules::create_firewall_rules][crate::client::FirewallRules::create_firewall_rules] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_firewall_rules_v1::builder;
    /// use builder::firewall_rules::CreateFirewallRules;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateFirewallRules {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateFirewallRules(RequestBuilder<crate::model::CreateFirewallRulesRequest>);

    impl CreateFirewallRules {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirewallRules>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateFirewallRulesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<
            gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>,
        > {
            (*self.0.stub)
                .create_firewall_rules(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [x_auth_user_token][crate::model::CreateFirewallRulesRequest::x_auth_user_token].
        ///
        /// This is a **required** field for requests.
        pub fn set_x_auth_user_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_auth_user_token = v.into();
            self
        }

        /// Sets the value of [firewall_rules][crate::model::CreateFirewallRulesRequest::firewall_rules].
        ///
        /// This is a **required** field for requests.
        pub fn set_firewall_rules<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::FirewallRuleInput>,
        {
            self.0.request.firewall_rules = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateFirewallRules {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallRules::update_firewall_rules][crate::client::FirewallRules::update_firewall_rules] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_firewall_rules_v1::builder;
    /// use builder::firewall_rules::UpdateFirewallRules;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateFirewallRules {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateFirewallRules(RequestBuilder<crate::model::UpdateFirewallRulesRequest>);

    impl UpdateFirewallRules {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirewallRules>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateFirewallRulesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<
            gax::response::Response<gax::envelope::Envelope<Vec<crate::model::FirewallRule>>>,
        > {
            (*self.0.stub)
                .update_firewall_rules(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [x_auth_user_token][crate::model::UpdateFirewallRulesRequest::x_auth_user_token].
        ///
        /// This is a **required** field for requests.
        pub fn set_x_auth_user_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_auth_user_token = v.into();
            self
        }

        /// Sets the value of [firewall_rules][crate::model::UpdateFirewallRulesRequest::firewall_rules].
        ///
        /// This is a **required** field for requests.
        pub fn set_firewall_rules<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::FirewallRuleUpdate>,
        {
            self.0.request.firewall_rules = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateFirewallRules {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallRules::delete_firewall_rules][crate::client::FirewallRules::delete_firewall_rules] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_firewall_rules_v1::builder;
    /// use builder::firewall_rules::DeleteFirewallRules;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteFirewallRules {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteFirewallRules(RequestBuilder<crate::model::DeleteFirewallRulesRequest>);

    impl DeleteFirewallRules {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirewallRules>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteFirewallRulesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<
            gax::response::Response<gax::envelope::Envelope<Vec<crate::model::DeletedFirewallRule>>>,
        > {
            (*self.0.stub)
                .delete_firewall_rules(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [x_auth_user_token][crate::model::DeleteFirewallRulesRequest::x_auth_user_token].
        ///
        /// This is a **required** field for requests.
        pub fn set_x_auth_user_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_auth_user_token = v.into();
            self
        }

        /// Sets the value of [id][crate::model::DeleteFirewallRulesRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteFirewallRules {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallRules::get_firewall_rule][crate::client::FirewallRules::get_firewall_rule] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_firewall_rules_v1::builder;
    /// use builder::firewall_rules::GetFirewallRule;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetFirewallRule {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetFirewallRule(RequestBuilder<crate::model::GetFirewallRuleRequest>);

    impl GetFirewallRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirewallRules>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetFirewallRuleRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::FirewallRule>>> {
            (*self.0.stub)
                .get_firewall_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [x_auth_user_token][crate::model::GetFirewallRuleRequest::x_auth_user_token].
        ///
        /// This is a **required** field for requests.
        pub fn set_x_auth_user_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_auth_user_token = v.into();
            self
        }

        /// Sets the value of [firewall_rule_identifier][crate::model::GetFirewallRuleRequest::firewall_rule_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_firewall_rule_identifier<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.firewall_rule_identifier = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetFirewallRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallRules::update_firewall_rule][crate::client::FirewallRules::update_firewall_rule] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_firewall_rules_v1::builder;
    /// use builder::firewall_rules::UpdateFirewallRule;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateFirewallRule {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateFirewallRule(RequestBuilder<crate::model::UpdateFirewallRuleRequest>);

    impl UpdateFirewallRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirewallRules>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateFirewallRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::FirewallRule>>> {
            (*self.0.stub)
                .update_firewall_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [x_auth_user_token][crate::model::UpdateFirewallRuleRequest::x_auth_user_token].
        ///
        /// This is a **required** field for requests.
        pub fn set_x_auth_user_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_auth_user_token = v.into();
            self
        }

        /// Sets the value of [firewall_rule_identifier][crate::model::UpdateFirewallRuleRequest::firewall_rule_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_firewall_rule_identifier<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.firewall_rule_identifier = v.into();
            self
        }

        /// Sets the value of [action][crate::model::UpdateFirewallRuleRequest::action].
        pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.action = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [action][crate::model::UpdateFirewallRuleRequest::action].
        pub fn set_or_clear_action<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.action = v.map(|x| x.into());
            self
        }

        /// Sets the value of [paused][crate::model::UpdateFirewallRuleRequest::paused].
        pub fn set_paused<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.paused = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [paused][crate::model::UpdateFirewallRuleRequest::paused].
        pub fn set_or_clear_paused<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.paused = v.map(|x| x.into());
            self
        }

        /// Sets the value of [description][crate::model::UpdateFirewallRuleRequest::description].
        pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.description = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [description][crate::model::UpdateFirewallRuleRequest::description].
        pub fn set_or_clear_description<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.description = v.map(|x| x.into());
            self
        }

        /// Sets the value of [filter][crate::model::UpdateFirewallRuleRequest::filter].
        pub fn set_filter<T: Into<crate::model::FilterReference>>(mut self, v: T) -> Self {
            self.0.request.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::UpdateFirewallRuleRequest::filter].
        pub fn set_or_clear_filter<T: Into<crate::model::FilterReference>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [priority][crate::model::UpdateFirewallRuleRequest::priority].
        pub fn set_priority<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.priority = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [priority][crate::model::UpdateFirewallRuleRequest::priority].
        pub fn set_or_clear_priority<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.priority = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateFirewallRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallRules::delete_firewall_rule][crate::client::FirewallRules::delete_firewall_rule] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_firewall_rules_v1::builder;
    /// use builder::firewall_rules::DeleteFirewallRule;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteFirewallRule {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteFirewallRule(RequestBuilder<crate::model::DeleteFirewallRuleRequest>);

    impl DeleteFirewallRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirewallRules>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteFirewallRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<
            gax::response::Response<gax::envelope::Envelope<crate::model::DeletedFirewallRule>>,
        > {
            (*self.0.stub)
                .delete_firewall_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [x_auth_user_token][crate::model::DeleteFirewallRuleRequest::x_auth_user_token].
        ///
        /// This is a **required** field for requests.
        pub fn set_x_auth_user_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_auth_user_token = v.into();
            self
        }

        /// Sets the value of [firewall_rule_identifier][crate::model::DeleteFirewallRuleRequest::firewall_rule_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_firewall_rule_identifier<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.firewall_rule_identifier = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteFirewallRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
