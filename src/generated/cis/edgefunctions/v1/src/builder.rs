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

pub mod edge_functions {
    use crate::Result;

    /// A builder for [EdgeFunctions][crate::client::EdgeFunctions].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_edge_functions_v1::*;
    /// # use builder::edge_functions::ClientBuilder;
    /// # use client::EdgeFunctions;
    /// let builder : ClientBuilder = EdgeFunctions::builder("my-crn", "my-zone-id");
    /// let client = builder
    ///     .with_endpoint("https://api.cis.cloud.ibm.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::EdgeFunctions;
        pub struct Factory {
            pub(crate) identity: crate::client::Identity,
        }
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = EdgeFunctions;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::with_config(self.identity, config)
            }
        }
    }

    /// Common implementation for [crate::client::EdgeFunctions] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::EdgeFunctions>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::EdgeFunctions>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [EdgeFunctions::list_edge_functions_actions][crate::client::EdgeFunctions::list_edge_functions_actions] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_edge_functions_v1::builder;
    /// use builder::edge_functions::ListEdgeFunctionsActions;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListEdgeFunctionsActions {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListEdgeFunctionsActions(
        RequestBuilder<crate::model::ListEdgeFunctionsActionsRequest>,
    );

    impl ListEdgeFunctionsActions {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::EdgeFunctions>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListEdgeFunctionsActionsRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<Vec<crate::model::EdgeFunctionsAction>>>,
        > {
            (*self.0.stub)
                .list_edge_functions_actions(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [x_correlation_id][crate::model::ListEdgeFunctionsActionsRequest::x_correlation_id].
        pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::ListEdgeFunctionsActionsRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListEdgeFunctionsActions {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [EdgeFunctions::update_edge_functions_action][crate::client::EdgeFunctions::update_edge_functions_action] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_edge_functions_v1::builder;
    /// use builder::edge_functions::UpdateEdgeFunctionsAction;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateEdgeFunctionsAction {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateEdgeFunctionsAction(
        RequestBuilder<crate::model::UpdateEdgeFunctionsActionRequest>,
    );

    impl UpdateEdgeFunctionsAction {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::EdgeFunctions>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateEdgeFunctionsActionRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsAction>>,
        > {
            (*self.0.stub)
                .update_edge_functions_action(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [script_name][crate::model::UpdateEdgeFunctionsActionRequest::script_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_script_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.script_name = v.into();
            self
        }

        /// Sets the value of [edge_functions_action][crate::model::UpdateEdgeFunctionsActionRequest::edge_functions_action].
        ///
        /// This is a **required** field for requests.
        pub fn set_edge_functions_action<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.edge_functions_action = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::UpdateEdgeFunctionsActionRequest::x_correlation_id].
        pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::UpdateEdgeFunctionsActionRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateEdgeFunctionsAction {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [EdgeFunctions::get_edge_functions_action][crate::client::EdgeFunctions::get_edge_functions_action] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_edge_functions_v1::builder;
    /// use builder::edge_functions::GetEdgeFunctionsAction;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetEdgeFunctionsAction {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetEdgeFunctionsAction(RequestBuilder<crate::model::GetEdgeFunctionsActionRequest>);

    impl GetEdgeFunctionsAction {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::EdgeFunctions>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetEdgeFunctionsActionRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<gax::streaming::ByteStream>> {
            (*self.0.stub)
                .get_edge_functions_action(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [script_name][crate::model::GetEdgeFunctionsActionRequest::script_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_script_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.script_name = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::GetEdgeFunctionsActionRequest::x_correlation_id].
        pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::GetEdgeFunctionsActionRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetEdgeFunctionsAction {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [EdgeFunctions::delete_edge_functions_action][crate::client::EdgeFunctions::delete_edge_functions_action] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_edge_functions_v1::builder;
    /// use builder::edge_functions::DeleteEdgeFunctionsAction;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteEdgeFunctionsAction {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteEdgeFunctionsAction(
        RequestBuilder<crate::model::DeleteEdgeFunctionsActionRequest>,
    );

    impl DeleteEdgeFunctionsAction {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::EdgeFunctions>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteEdgeFunctionsActionRequest>>(
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>> {
            (*self.0.stub)
                .delete_edge_functions_action(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [script_name][crate::model::DeleteEdgeFunctionsActionRequest::script_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_script_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.script_name = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::DeleteEdgeFunctionsActionRequest::x_correlation_id].
        pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::DeleteEdgeFunctionsActionRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteEdgeFunctionsAction {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [EdgeFunctions::create_edge_functions_trigger][crate::client::EdgeFunctions::create_edge_functions_trigger] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_edge_functions_v1::builder;
    /// use builder::edge_functions::CreateEdgeFunctionsTrigger;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateEdgeFunctionsTrigger {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateEdgeFunctionsTrigger(
        RequestBuilder<crate::model::CreateEdgeFunctionsTriggerRequest>,
    );

    impl CreateEdgeFunctionsTrigger {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::EdgeFunctions>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateEdgeFunctionsTriggerRequest>>(
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>> {
            (*self.0.stub)
                .create_edge_functions_trigger(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [pattern][crate::model::CreateEdgeFunctionsTriggerRequest::pattern].
        pub fn set_pattern<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.pattern = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [pattern][crate::model::CreateEdgeFunctionsTriggerRequest::pattern].
        pub fn set_or_clear_pattern<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.pattern = v.map(|x| x.into());
            self
        }

        /// Sets the value of [script][crate::model::CreateEdgeFunctionsTriggerRequest::script].
        pub fn set_script<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.script = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [script][crate::model::CreateEdgeFunctionsTriggerRequest::script].
        pub fn set_or_clear_script<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.script = v.map(|x| x.into());
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::CreateEdgeFunctionsTriggerRequest::x_correlation_id].
        pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::CreateEdgeFunctionsTriggerRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateEdgeFunctionsTrigger {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [EdgeFunctions::list_edge_functions_triggers][crate::client::EdgeFunctions::list_edge_functions_triggers] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_edge_functions_v1::builder;
    /// use builder::edge_functions::ListEdgeFunctionsTriggers;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListEdgeFunctionsTriggers {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListEdgeFunctionsTriggers(
        RequestBuilder<crate::model::ListEdgeFunctionsTriggersRequest>,
    );

    impl ListEdgeFunctionsTriggers {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::EdgeFunctions>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListEdgeFunctionsTriggersRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<Vec<crate::model::EdgeFunctionsTrigger>>>,
        > {
            (*self.0.stub)
                .list_edge_functions_triggers(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [x_correlation_id][crate::model::ListEdgeFunctionsTriggersRequest::x_correlation_id].
        pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::ListEdgeFunctionsTriggersRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListEdgeFunctionsTriggers {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [EdgeFunctions::get_edge_functions_trigger][crate::client::EdgeFunctions::get_edge_functions_trigger] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_edge_functions_v1::builder;
    /// use builder::edge_functions::GetEdgeFunctionsTrigger;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetEdgeFunctionsTrigger {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetEdgeFunctionsTrigger(
        RequestBuilder<crate::model::GetEdgeFunctionsTriggerRequest>,
    );

    impl GetEdgeFunctionsTrigger {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::EdgeFunctions>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetEdgeFunctionsTriggerRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsTrigger>>,
        > {
            (*self.0.stub)
                .get_edge_functions_trigger(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [route_id][crate::model::GetEdgeFunctionsTriggerRequest::route_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_route_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.route_id = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::GetEdgeFunctionsTriggerRequest::x_correlation_id].
        pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::GetEdgeFunctionsTriggerRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetEdgeFunctionsTrigger {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [EdgeFunctions::update_edge_functions_trigger][crate::client::EdgeFunctions::update_edge_functions_trigger] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_edge_functions_v1::builder;
    /// use builder::edge_functions::UpdateEdgeFunctionsTrigger;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateEdgeFunctionsTrigger {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateEdgeFunctionsTrigger(
        RequestBuilder<crate::model::UpdateEdgeFunctionsTriggerRequest>,
    );

    impl UpdateEdgeFunctionsTrigger {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::EdgeFunctions>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateEdgeFunctionsTriggerRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsTrigger>>,
        > {
            (*self.0.stub)
                .update_edge_functions_trigger(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [route_id][crate::model::UpdateEdgeFunctionsTriggerRequest::route_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_route_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.route_id = v.into();
            self
        }

        /// Sets the value of [pattern][crate::model::UpdateEdgeFunctionsTriggerRequest::pattern].
        pub fn set_pattern<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.pattern = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [pattern][crate::model::UpdateEdgeFunctionsTriggerRequest::pattern].
        pub fn set_or_clear_pattern<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.pattern = v.map(|x| x.into());
            self
        }

        /// Sets the value of [script][crate::model::UpdateEdgeFunctionsTriggerRequest::script].
        pub fn set_script<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.script = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [script][crate::model::UpdateEdgeFunctionsTriggerRequest::script].
        pub fn set_or_clear_script<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.script = v.map(|x| x.into());
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::UpdateEdgeFunctionsTriggerRequest::x_correlation_id].
        pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::UpdateEdgeFunctionsTriggerRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateEdgeFunctionsTrigger {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [EdgeFunctions::delete_edge_functions_trigger][crate::client::EdgeFunctions::delete_edge_functions_trigger] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_edge_functions_v1::builder;
    /// use builder::edge_functions::DeleteEdgeFunctionsTrigger;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteEdgeFunctionsTrigger {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteEdgeFunctionsTrigger(
        RequestBuilder<crate::model::DeleteEdgeFunctionsTriggerRequest>,
    );

    impl DeleteEdgeFunctionsTrigger {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::EdgeFunctions>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteEdgeFunctionsTriggerRequest>>(
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>> {
            (*self.0.stub)
                .delete_edge_functions_trigger(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [route_id][crate::model::DeleteEdgeFunctionsTriggerRequest::route_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_route_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.route_id = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::DeleteEdgeFunctionsTriggerRequest::x_correlation_id].
        pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::DeleteEdgeFunctionsTriggerRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteEdgeFunctionsTrigger {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
