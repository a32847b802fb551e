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

pub mod transit_gateway {
    use crate::Result;

    /// A builder for [TransitGateway][crate::client::TransitGateway].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_transit_gateway_v1::*;
    /// # use builder::transit_gateway::ClientBuilder;
    /// # use client::TransitGateway;
    /// let builder : ClientBuilder = TransitGateway::builder("2021-12-30");
    /// let client = builder
    ///     .with_endpoint("https://transit.cloud.ibm.com/v1")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::TransitGateway;
        pub struct Factory {
            pub(crate) identity: crate::client::Identity,
        }
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = TransitGateway;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::with_config(self.identity, config)
            }
        }
    }

    /// Common implementation for [crate::client::TransitGateway] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [TransitGateway::list_connections][crate::client::TransitGateway::list_connections] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_transit_gateway_v1::builder;
    /// use builder::transit_gateway::ListConnections;
    /// # tokio_test::block_on(async {
    /// use gax::paginator::ItemPaginator;
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListConnections {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListConnections(RequestBuilder<crate::model::ListConnectionsRequest>);

    impl ListConnections {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListConnectionsRequest>>(mut self, v: V) -> Self {
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
        ) -> Result<gax::response::Response<crate::model::TransitConnectionCollection>> {
            (*self.0.stub)
                .list_connections(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::TransitConnectionCollection, gax::error::Error,
        > {
            let seed = self.0.request.start.clone();
            let execute = move |start: std::option::Option<String>| {
                let builder = self.clone().set_or_clear_start(start);
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::internal::new_paginator(seed, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::TransitConnectionCollection, gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [start][crate::model::ListConnectionsRequest::start].
        pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.start = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListConnectionsRequest::start].
        pub fn set_or_clear_start<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListConnectionsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListConnectionsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [network_id][crate::model::ListConnectionsRequest::network_id].
        pub fn set_network_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.network_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [network_id][crate::model::ListConnectionsRequest::network_id].
        pub fn set_or_clear_network_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.network_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListConnections {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [TransitGateway::list_transit_gateways][crate::client::TransitGateway::list_transit_gateways] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_transit_gateway_v1::builder;
    /// use builder::transit_gateway::ListTransitGateways;
    /// # tokio_test::block_on(async {
    /// use gax::paginator::ItemPaginator;
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListTransitGateways {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListTransitGateways(RequestBuilder<crate::model::ListTransitGatewaysRequest>);

    impl ListTransitGateways {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListTransitGatewaysRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::TransitGatewayCollection>> {
            (*self.0.stub)
                .list_transit_gateways(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::TransitGatewayCollection, gax::error::Error> {
            let seed = self.0.request.start.clone();
            let execute = move |start: std::option::Option<String>| {
                let builder = self.clone().set_or_clear_start(start);
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::internal::new_paginator(seed, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::TransitGatewayCollection, gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [start][crate::model::ListTransitGatewaysRequest::start].
        pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.start = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListTransitGatewaysRequest::start].
        pub fn set_or_clear_start<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListTransitGatewaysRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListTransitGatewaysRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListTransitGateways {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [TransitGateway::create_transit_gateway][crate::client::TransitGateway::create_transit_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_transit_gateway_v1::builder;
    /// use builder::transit_gateway::CreateTransitGateway;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateTransitGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateTransitGateway(RequestBuilder<crate::model::CreateTransitGatewayRequest>);

    impl CreateTransitGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateTransitGatewayRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::TransitGateway>> {
            (*self.0.stub)
                .create_transit_gateway(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [location][crate::model::CreateTransitGatewayRequest::location].
        ///
        /// This is a **required** field for requests.
        pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.location = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [location][crate::model::CreateTransitGatewayRequest::location].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_location<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.location = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::CreateTransitGatewayRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::CreateTransitGatewayRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [global][crate::model::CreateTransitGatewayRequest::global].
        pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.global = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [global][crate::model::CreateTransitGatewayRequest::global].
        pub fn set_or_clear_global<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.global = v.map(|x| x.into());
            self
        }

        /// Sets the value of [resource_group][crate::model::CreateTransitGatewayRequest::resource_group].
        pub fn set_resource_group<T: Into<crate::model::ResourceGroupIdentity>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.resource_group = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_group][crate::model::CreateTransitGatewayRequest::resource_group].
        pub fn set_or_clear_resource_group<T: Into<crate::model::ResourceGroupIdentity>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.resource_group = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateTransitGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [TransitGateway::delete_transit_gateway][crate::client::TransitGateway::delete_transit_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_transit_gateway_v1::builder;
    /// use builder::transit_gateway::DeleteTransitGateway;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteTransitGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteTransitGateway(RequestBuilder<crate::model::DeleteTransitGatewayRequest>);

    impl DeleteTransitGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteTransitGatewayRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_transit_gateway(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::DeleteTransitGatewayRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteTransitGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [TransitGateway::get_transit_gateway][crate::client::TransitGateway::get_transit_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_transit_gateway_v1::builder;
    /// use builder::transit_gateway::GetTransitGateway;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetTransitGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetTransitGateway(RequestBuilder<crate::model::GetTransitGatewayRequest>);

    impl GetTransitGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetTransitGatewayRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::TransitGateway>> {
            (*self.0.stub)
                .get_transit_gateway(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::GetTransitGatewayRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetTransitGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [TransitGateway::update_transit_gateway][crate::client::TransitGateway::update_transit_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_transit_gateway_v1::builder;
    /// use builder::transit_gateway::UpdateTransitGateway;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateTransitGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateTransitGateway(RequestBuilder<crate::model::UpdateTransitGatewayRequest>);

    impl UpdateTransitGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateTransitGatewayRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::TransitGateway>> {
            (*self.0.stub)
                .update_transit_gateway(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::UpdateTransitGatewayRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [global][crate::model::UpdateTransitGatewayRequest::global].
        pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.global = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [global][crate::model::UpdateTransitGatewayRequest::global].
        pub fn set_or_clear_global<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.global = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::UpdateTransitGatewayRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::UpdateTransitGatewayRequest::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateTransitGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [TransitGateway::list_transit_gateway_connections][crate::client::TransitGateway::list_transit_gateway_connections] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_transit_gateway_v1::builder;
    /// use builder::transit_gateway::ListTransitGatewayConnections;
    /// # tokio_test::block_on(async {
    /// use gax::paginator::ItemPaginator;
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListTransitGatewayConnections {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListTransitGatewayConnections(
        RequestBuilder<crate::model::ListTransitGatewayConnectionsRequest>,
    );

    impl ListTransitGatewayConnections {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListTransitGatewayConnectionsRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::TransitGatewayConnectionCollection>> {
            (*self.0.stub)
                .list_transit_gateway_connections(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::TransitGatewayConnectionCollection, gax::error::Error,
        > {
            let seed = self.0.request.start.clone();
            let execute = move |start: std::option::Option<String>| {
                let builder = self.clone().set_or_clear_start(start);
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::internal::new_paginator(seed, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::TransitGatewayConnectionCollection, gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [transit_gateway_id][crate::model::ListTransitGatewayConnectionsRequest::transit_gateway_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_transit_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.transit_gateway_id = v.into();
            self
        }

        /// Sets the value of [start][crate::model::ListTransitGatewayConnectionsRequest::start].
        pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.start = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListTransitGatewayConnectionsRequest::start].
        pub fn set_or_clear_start<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListTransitGatewayConnectionsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListTransitGatewayConnectionsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::ListTransitGatewayConnectionsRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::ListTransitGatewayConnectionsRequest::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListTransitGatewayConnections {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [TransitGateway::create_transit_gateway_connection][crate::client::TransitGateway::create_transit_gateway_connection] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_transit_gateway_v1::builder;
    /// use builder::transit_gateway::CreateTransitGatewayConnection;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateTransitGatewayConnection {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateTransitGatewayConnection(
        RequestBuilder<crate::model::CreateTransitGatewayConnectionRequest>,
    );

    impl CreateTransitGatewayConnection {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateTransitGatewayConnectionRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::TransitGatewayConnection>> {
            (*self.0.stub)
                .create_transit_gateway_connection(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [transit_gateway_id][crate::model::CreateTransitGatewayConnectionRequest::transit_gateway_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_transit_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.transit_gateway_id = v.into();
            self
        }

        /// Sets the value of [network_type][crate::model::CreateTransitGatewayConnectionRequest::network_type].
        ///
        /// This is a **required** field for requests.
        pub fn set_network_type<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.network_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [network_type][crate::model::CreateTransitGatewayConnectionRequest::network_type].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_network_type<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.network_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::CreateTransitGatewayConnectionRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::CreateTransitGatewayConnectionRequest::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [network_id][crate::model::CreateTransitGatewayConnectionRequest::network_id].
        pub fn set_network_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.network_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [network_id][crate::model::CreateTransitGatewayConnectionRequest::network_id].
        pub fn set_or_clear_network_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.network_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [network_account_id][crate::model::CreateTransitGatewayConnectionRequest::network_account_id].
        pub fn set_network_account_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.network_account_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [network_account_id][crate::model::CreateTransitGatewayConnectionRequest::network_account_id].
        pub fn set_or_clear_network_account_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.network_account_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [base_connection_id][crate::model::CreateTransitGatewayConnectionRequest::base_connection_id].
        pub fn set_base_connection_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.base_connection_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [base_connection_id][crate::model::CreateTransitGatewayConnectionRequest::base_connection_id].
        pub fn set_or_clear_base_connection_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.base_connection_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [local_tunnel_ip][crate::model::CreateTransitGatewayConnectionRequest::local_tunnel_ip].
        pub fn set_local_tunnel_ip<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.local_tunnel_ip = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [local_tunnel_ip][crate::model::CreateTransitGatewayConnectionRequest::local_tunnel_ip].
        pub fn set_or_clear_local_tunnel_ip<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.local_tunnel_ip = v.map(|x| x.into());
            self
        }

        /// Sets the value of [remote_tunnel_ip][crate::model::CreateTransitGatewayConnectionRequest::remote_tunnel_ip].
        pub fn set_remote_tunnel_ip<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.remote_tunnel_ip = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [remote_tunnel_ip][crate::model::CreateTransitGatewayConnectionRequest::remote_tunnel_ip].
        pub fn set_or_clear_remote_tunnel_ip<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.remote_tunnel_ip = v.map(|x| x.into());
            self
        }

        /// Sets the value of [remote_gateway_ip][crate::model::CreateTransitGatewayConnectionRequest::remote_gateway_ip].
        pub fn set_remote_gateway_ip<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.remote_gateway_ip = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [remote_gateway_ip][crate::model::CreateTransitGatewayConnectionRequest::remote_gateway_ip].
        pub fn set_or_clear_remote_gateway_ip<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.remote_gateway_ip = v.map(|x| x.into());
            self
        }

        /// Sets the value of [remote_bgp_asn][crate::model::CreateTransitGatewayConnectionRequest::remote_bgp_asn].
        pub fn set_remote_bgp_asn<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.remote_bgp_asn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [remote_bgp_asn][crate::model::CreateTransitGatewayConnectionRequest::remote_bgp_asn].
        pub fn set_or_clear_remote_bgp_asn<T: Into<i64>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.remote_bgp_asn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::CreateTransitGatewayConnectionRequest::zone].
        pub fn set_zone<T: Into<crate::model::ZoneReference>>(mut self, v: T) -> Self {
            self.0.request.zone = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [zone][crate::model::CreateTransitGatewayConnectionRequest::zone].
        pub fn set_or_clear_zone<T: Into<crate::model::ZoneReference>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.zone = v.map(|x| x.into());
            self
        }

        /// Sets the value of [prefix_filters_default][crate::model::CreateTransitGatewayConnectionRequest::prefix_filters_default].
        pub fn set_prefix_filters_default<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.prefix_filters_default = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [prefix_filters_default][crate::model::CreateTransitGatewayConnectionRequest::prefix_filters_default].
        pub fn set_or_clear_prefix_filters_default<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.prefix_filters_default = v.map(|x| x.into());
            self
        }

        /// Sets the value of [prefix_filters][crate::model::CreateTransitGatewayConnectionRequest::prefix_filters].
        pub fn set_prefix_filters<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<serde_json::Value>,
        {
            self.0.request.prefix_filters = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::CreateTransitGatewayConnectionRequest::x_correlation_id].
        pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::CreateTransitGatewayConnectionRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateTransitGatewayConnection {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [TransitGateway::delete_transit_gateway_connection][crate::client::TransitGateway::delete_transit_gateway_connection] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_transit_gateway_v1::builder;
    /// use builder::transit_gateway::DeleteTransitGatewayConnection;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteTransitGatewayConnection {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteTransitGatewayConnection(
        RequestBuilder<crate::model::DeleteTransitGatewayConnectionRequest>,
    );

    impl DeleteTransitGatewayConnection {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteTransitGatewayConnectionRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_transit_gateway_connection(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [transit_gateway_id][crate::model::DeleteTransitGatewayConnectionRequest::transit_gateway_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_transit_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.transit_gateway_id = v.into();
            self
        }

        /// Sets the value of [id][crate::model::DeleteTransitGatewayConnectionRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::DeleteTransitGatewayConnectionRequest::x_correlation_id].
        pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::DeleteTransitGatewayConnectionRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteTransitGatewayConnection {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [TransitGateway::get_transit_gateway_connection][crate::client::TransitGateway::get_transit_gateway_connection] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_transit_gateway_v1::builder;
    /// use builder::transit_gateway::GetTransitGatewayConnection;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetTransitGatewayConnection {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetTransitGatewayConnection(
        RequestBuilder<crate::model::GetTransitGatewayConnectionRequest>,
    );

    impl GetTransitGatewayConnection {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetTransitGatewayConnectionRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::TransitGatewayConnection>> {
            (*self.0.stub)
                .get_transit_gateway_connection(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [transit_gateway_id][crate::model::GetTransitGatewayConnectionRequest::transit_gateway_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_transit_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.transit_gateway_id = v.into();
            self
        }

        /// Sets the value of [id][crate::model::GetTransitGatewayConnectionRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::GetTransitGatewayConnectionRequest::x_correlation_id].
        pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::GetTransitGatewayConnectionRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetTransitGatewayConnection {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [TransitGateway::update_transit_gateway_connection][crate::client::TransitGateway::update_transit_gateway_connection] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_transit_gateway_v1::builder;
    /// use builder::transit_gateway::UpdateTransitGatewayConnection;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateTransitGatewayConnection {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateTransitGatewayConnection(
        RequestBuilder<crate::model::UpdateTransitGatewayConnectionRequest>,
    );

    impl UpdateTransitGatewayConnection {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateTransitGatewayConnectionRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::TransitGatewayConnection>> {
            (*self.0.stub)
                .update_transit_gateway_connection(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [transit_gateway_id][crate::model::UpdateTransitGatewayConnectionRequest::transit_gateway_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_transit_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.transit_gateway_id = v.into();
            self
        }

        /// Sets the value of [id][crate::model::UpdateTransitGatewayConnectionRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::UpdateTransitGatewayConnectionRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::UpdateTransitGatewayConnectionRequest::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [prefix_filters_default][crate::model::UpdateTransitGatewayConnectionRequest::prefix_filters_default].
        pub fn set_prefix_filters_default<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.prefix_filters_default = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [prefix_filters_default][crate::model::UpdateTransitGatewayConnectionRequest::prefix_filters_default].
        pub fn set_or_clear_prefix_filters_default<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.prefix_filters_default = v.map(|x| x.into());
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::UpdateTransitGatewayConnectionRequest::x_correlation_id].
        pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::UpdateTransitGatewayConnectionRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateTransitGatewayConnection {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [TransitGateway::create_transit_gateway_connection_actions][crate::client::TransitGateway::create_transit_gateway_connection_actions] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_transit_gateway_v1::builder;
    /// use builder::transit_gateway::CreateTransitGatewayConnectionActions;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateTransitGatewayConnectionActions {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateTransitGatewayConnectionActions(
        RequestBuilder<crate::model::CreateTransitGatewayConnectionActionsRequest>,
    );

    impl CreateTransitGatewayConnectionActions {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateTransitGatewayConnectionActionsRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .create_transit_gateway_connection_actions(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [transit_gateway_id][crate::model::CreateTransitGatewayConnectionActionsRequest::transit_gateway_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_transit_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.transit_gateway_id = v.into();
            self
        }

        /// Sets the value of [id][crate::model::CreateTransitGatewayConnectionActionsRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [action][crate::model::CreateTransitGatewayConnectionActionsRequest::action].
        ///
        /// This is a **required** field for requests.
        pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.action = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [action][crate::model::CreateTransitGatewayConnectionActionsRequest::action].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_action<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.action = v.map(|x| x.into());
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::CreateTransitGatewayConnectionActionsRequest::x_correlation_id].
        pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::CreateTransitGatewayConnectionActionsRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateTransitGatewayConnectionActions {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [TransitGateway::list_gateway_locations][crate::client::TransitGateway::list_gateway_locations] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_transit_gateway_v1::builder;
    /// use builder::transit_gateway::ListGatewayLocations;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListGatewayLocations {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListGatewayLocations(RequestBuilder<crate::model::ListGatewayLocationsRequest>);

    impl ListGatewayLocations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListGatewayLocationsRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::TsCollection>> {
            (*self.0.stub)
                .list_gateway_locations(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListGatewayLocations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [TransitGateway::get_gateway_location][crate::client::TransitGateway::get_gateway_location] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_transit_gateway_v1::builder;
    /// use builder::transit_gateway::GetGatewayLocation;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetGatewayLocation {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetGatewayLocation(RequestBuilder<crate::model::GetGatewayLocationRequest>);

    impl GetGatewayLocation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TransitGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetGatewayLocationRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::TsLocation>> {
            (*self.0.stub)
                .get_gateway_location(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::GetGatewayLocationRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetGatewayLocation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
