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

pub mod direct_link {
    use crate::Result;

    /// A builder for [DirectLink][crate::client::DirectLink].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_direct_link_v1::*;
    /// # use builder::direct_link::ClientBuilder;
    /// # use client::DirectLink;
    /// let builder : ClientBuilder = DirectLink::builder("2019-12-13");
    /// let client = builder
    ///     .with_endpoint("https://directlink.cloud.ibm.com/v1")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::DirectLink;
        pub struct Factory {
            pub(crate) identity: crate::client::Identity,
        }
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = DirectLink;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::with_config(self.identity, config)
            }
        }
    }

    /// Common implementation for [crate::client::DirectLink] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [DirectLink::list_gateways][crate::client::DirectLink::list_gateways] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::ListGateways;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListGateways {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListGateways(RequestBuilder<crate::model::ListGatewaysRequest>);

    impl ListGateways {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListGatewaysRequest>>(mut self, v: V) -> Self {
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
        ) -> Result<gax::response::Response<crate::model::GatewayCollection>> {
            (*self.0.stub)
                .list_gateways(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListGateways {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::create_gateway][crate::client::DirectLink::create_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::CreateGateway;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateGateway(RequestBuilder<crate::model::CreateGatewayRequest>);

    impl CreateGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateGatewayRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Gateway>> {
            (*self.0.stub)
                .create_gateway(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::CreateGatewayRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::CreateGatewayRequest::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [type][crate::model::CreateGatewayRequest::r#type].
        pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.r#type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [type][crate::model::CreateGatewayRequest::r#type].
        pub fn set_or_clear_type<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.r#type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [speed_mbps][crate::model::CreateGatewayRequest::speed_mbps].
        pub fn set_speed_mbps<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.speed_mbps = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [speed_mbps][crate::model::CreateGatewayRequest::speed_mbps].
        pub fn set_or_clear_speed_mbps<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.speed_mbps = v.map(|x| x.into());
            self
        }

        /// Sets the value of [global][crate::model::CreateGatewayRequest::global].
        pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.global = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [global][crate::model::CreateGatewayRequest::global].
        pub fn set_or_clear_global<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.global = v.map(|x| x.into());
            self
        }

        /// Sets the value of [metered][crate::model::CreateGatewayRequest::metered].
        pub fn set_metered<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.metered = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [metered][crate::model::CreateGatewayRequest::metered].
        pub fn set_or_clear_metered<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.metered = v.map(|x| x.into());
            self
        }

        /// Sets the value of [bgp_asn][crate::model::CreateGatewayRequest::bgp_asn].
        pub fn set_bgp_asn<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.bgp_asn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [bgp_asn][crate::model::CreateGatewayRequest::bgp_asn].
        pub fn set_or_clear_bgp_asn<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.bgp_asn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [bgp_cer_cidr][crate::model::CreateGatewayRequest::bgp_cer_cidr].
        pub fn set_bgp_cer_cidr<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bgp_cer_cidr = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [bgp_cer_cidr][crate::model::CreateGatewayRequest::bgp_cer_cidr].
        pub fn set_or_clear_bgp_cer_cidr<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.bgp_cer_cidr = v.map(|x| x.into());
            self
        }

        /// Sets the value of [bgp_ibm_cidr][crate::model::CreateGatewayRequest::bgp_ibm_cidr].
        pub fn set_bgp_ibm_cidr<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bgp_ibm_cidr = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [bgp_ibm_cidr][crate::model::CreateGatewayRequest::bgp_ibm_cidr].
        pub fn set_or_clear_bgp_ibm_cidr<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.bgp_ibm_cidr = v.map(|x| x.into());
            self
        }

        /// Sets the value of [location_name][crate::model::CreateGatewayRequest::location_name].
        pub fn set_location_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.location_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [location_name][crate::model::CreateGatewayRequest::location_name].
        pub fn set_or_clear_location_name<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.location_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [cross_connect_router][crate::model::CreateGatewayRequest::cross_connect_router].
        pub fn set_cross_connect_router<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cross_connect_router = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [cross_connect_router][crate::model::CreateGatewayRequest::cross_connect_router].
        pub fn set_or_clear_cross_connect_router<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.cross_connect_router = v.map(|x| x.into());
            self
        }

        /// Sets the value of [carrier_name][crate::model::CreateGatewayRequest::carrier_name].
        pub fn set_carrier_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.carrier_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [carrier_name][crate::model::CreateGatewayRequest::carrier_name].
        pub fn set_or_clear_carrier_name<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.carrier_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [customer_name][crate::model::CreateGatewayRequest::customer_name].
        pub fn set_customer_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.customer_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [customer_name][crate::model::CreateGatewayRequest::customer_name].
        pub fn set_or_clear_customer_name<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.customer_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [port][crate::model::CreateGatewayRequest::port].
        pub fn set_port<T: Into<crate::model::ResourceReference>>(mut self, v: T) -> Self {
            self.0.request.port = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [port][crate::model::CreateGatewayRequest::port].
        pub fn set_or_clear_port<T: Into<crate::model::ResourceReference>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.port = v.map(|x| x.into());
            self
        }

        /// Sets the value of [resource_group][crate::model::CreateGatewayRequest::resource_group].
        pub fn set_resource_group<T: Into<crate::model::ResourceReference>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.resource_group = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_group][crate::model::CreateGatewayRequest::resource_group].
        pub fn set_or_clear_resource_group<T: Into<crate::model::ResourceReference>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.resource_group = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::delete_gateway][crate::client::DirectLink::delete_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::DeleteGateway;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteGateway(RequestBuilder<crate::model::DeleteGatewayRequest>);

    impl DeleteGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteGatewayRequest>>(mut self, v: V) -> Self {
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
                .delete_gateway(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::DeleteGatewayRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::get_gateway][crate::client::DirectLink::get_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::GetGateway;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetGateway(RequestBuilder<crate::model::GetGatewayRequest>);

    impl GetGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetGatewayRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Gateway>> {
            (*self.0.stub)
                .get_gateway(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::GetGatewayRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::update_gateway][crate::client::DirectLink::update_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::UpdateGateway;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateGateway(RequestBuilder<crate::model::UpdateGatewayRequest>);

    impl UpdateGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateGatewayRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Gateway>> {
            (*self.0.stub)
                .update_gateway(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::UpdateGatewayRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::UpdateGatewayRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::UpdateGatewayRequest::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [global][crate::model::UpdateGatewayRequest::global].
        pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.global = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [global][crate::model::UpdateGatewayRequest::global].
        pub fn set_or_clear_global<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.global = v.map(|x| x.into());
            self
        }

        /// Sets the value of [metered][crate::model::UpdateGatewayRequest::metered].
        pub fn set_metered<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.metered = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [metered][crate::model::UpdateGatewayRequest::metered].
        pub fn set_or_clear_metered<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.metered = v.map(|x| x.into());
            self
        }

        /// Sets the value of [speed_mbps][crate::model::UpdateGatewayRequest::speed_mbps].
        pub fn set_speed_mbps<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.speed_mbps = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [speed_mbps][crate::model::UpdateGatewayRequest::speed_mbps].
        pub fn set_or_clear_speed_mbps<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.speed_mbps = v.map(|x| x.into());
            self
        }

        /// Sets the value of [loa_reject_reason][crate::model::UpdateGatewayRequest::loa_reject_reason].
        pub fn set_loa_reject_reason<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.loa_reject_reason = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [loa_reject_reason][crate::model::UpdateGatewayRequest::loa_reject_reason].
        pub fn set_or_clear_loa_reject_reason<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.loa_reject_reason = v.map(|x| x.into());
            self
        }

        /// Sets the value of [operational_status][crate::model::UpdateGatewayRequest::operational_status].
        pub fn set_operational_status<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.operational_status = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [operational_status][crate::model::UpdateGatewayRequest::operational_status].
        pub fn set_or_clear_operational_status<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.operational_status = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::create_gateway_action][crate::client::DirectLink::create_gateway_action] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::CreateGatewayAction;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateGatewayAction {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateGatewayAction(RequestBuilder<crate::model::CreateGatewayActionRequest>);

    impl CreateGatewayAction {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateGatewayActionRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Gateway>> {
            (*self.0.stub)
                .create_gateway_action(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::CreateGatewayActionRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [action][crate::model::CreateGatewayActionRequest::action].
        ///
        /// This is a **required** field for requests.
        pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.action = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [action][crate::model::CreateGatewayActionRequest::action].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_action<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.action = v.map(|x| x.into());
            self
        }

        /// Sets the value of [global][crate::model::CreateGatewayActionRequest::global].
        pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.global = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [global][crate::model::CreateGatewayActionRequest::global].
        pub fn set_or_clear_global<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.global = v.map(|x| x.into());
            self
        }

        /// Sets the value of [metered][crate::model::CreateGatewayActionRequest::metered].
        pub fn set_metered<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.metered = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [metered][crate::model::CreateGatewayActionRequest::metered].
        pub fn set_or_clear_metered<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.metered = v.map(|x| x.into());
            self
        }

        /// Sets the value of [resource_group][crate::model::CreateGatewayActionRequest::resource_group].
        pub fn set_resource_group<T: Into<crate::model::ResourceReference>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.resource_group = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_group][crate::model::CreateGatewayActionRequest::resource_group].
        pub fn set_or_clear_resource_group<T: Into<crate::model::ResourceReference>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.resource_group = v.map(|x| x.into());
            self
        }

        /// Sets the value of [updates][crate::model::CreateGatewayActionRequest::updates].
        pub fn set_updates<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<serde_json::Value>,
        {
            self.0.request.updates = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateGatewayAction {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::list_gateway_completion_notice][crate::client::DirectLink::list_gateway_completion_notice] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::ListGatewayCompletionNotice;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListGatewayCompletionNotice {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListGatewayCompletionNotice(
        RequestBuilder<crate::model::ListGatewayCompletionNoticeRequest>,
    );

    impl ListGatewayCompletionNotice {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListGatewayCompletionNoticeRequest>>(
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
                .list_gateway_completion_notice(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::ListGatewayCompletionNoticeRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListGatewayCompletionNotice {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::create_gateway_completion_notice][crate::client::DirectLink::create_gateway_completion_notice] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::CreateGatewayCompletionNotice;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateGatewayCompletionNotice {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateGatewayCompletionNotice(
        RequestBuilder<crate::model::CreateGatewayCompletionNoticeRequest>,
    );

    impl CreateGatewayCompletionNotice {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateGatewayCompletionNoticeRequest>>(
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
                .create_gateway_completion_notice(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::CreateGatewayCompletionNoticeRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [upload][crate::model::CreateGatewayCompletionNoticeRequest::upload].
        ///
        /// This is a **required** field for requests.
        pub fn set_upload<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.upload = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateGatewayCompletionNotice {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::list_gateway_letter_of_authorization][crate::client::DirectLink::list_gateway_letter_of_authorization] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::ListGatewayLetterOfAuthorization;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListGatewayLetterOfAuthorization {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListGatewayLetterOfAuthorization(
        RequestBuilder<crate::model::ListGatewayLetterOfAuthorizationRequest>,
    );

    impl ListGatewayLetterOfAuthorization {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListGatewayLetterOfAuthorizationRequest>>(
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
                .list_gateway_letter_of_authorization(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::ListGatewayLetterOfAuthorizationRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListGatewayLetterOfAuthorization {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::get_gateway_statistics][crate::client::DirectLink::get_gateway_statistics] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::GetGatewayStatistics;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetGatewayStatistics {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetGatewayStatistics(RequestBuilder<crate::model::GetGatewayStatisticsRequest>);

    impl GetGatewayStatistics {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetGatewayStatisticsRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::GatewayStatisticCollection>> {
            (*self.0.stub)
                .get_gateway_statistics(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::GetGatewayStatisticsRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [type][crate::model::GetGatewayStatisticsRequest::r#type].
        ///
        /// This is a **required** field for requests.
        pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.r#type = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetGatewayStatistics {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::list_offering_type_locations][crate::client::DirectLink::list_offering_type_locations] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::ListOfferingTypeLocations;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListOfferingTypeLocations {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListOfferingTypeLocations(
        RequestBuilder<crate::model::ListOfferingTypeLocationsRequest>,
    );

    impl ListOfferingTypeLocations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListOfferingTypeLocationsRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::LocationCollection>> {
            (*self.0.stub)
                .list_offering_type_locations(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [offering_type][crate::model::ListOfferingTypeLocationsRequest::offering_type].
        ///
        /// This is a **required** field for requests.
        pub fn set_offering_type<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.offering_type = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListOfferingTypeLocations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::list_offering_type_location_cross_connect_routers][crate::client::DirectLink::list_offering_type_location_cross_connect_routers] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::ListOfferingTypeLocationCrossConnectRouters;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListOfferingTypeLocationCrossConnectRouters {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListOfferingTypeLocationCrossConnectRouters(
        RequestBuilder<crate::model::ListOfferingTypeLocationCrossConnectRoutersRequest>,
    );

    impl ListOfferingTypeLocationCrossConnectRouters {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListOfferingTypeLocationCrossConnectRoutersRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::LocationCrossConnectRouterCollection>> {
            (*self.0.stub)
                .list_offering_type_location_cross_connect_routers(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [offering_type][crate::model::ListOfferingTypeLocationCrossConnectRoutersRequest::offering_type].
        ///
        /// This is a **required** field for requests.
        pub fn set_offering_type<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.offering_type = v.into();
            self
        }

        /// Sets the value of [location_name][crate::model::ListOfferingTypeLocationCrossConnectRoutersRequest::location_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_location_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.location_name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListOfferingTypeLocationCrossConnectRouters {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::list_offering_type_speeds][crate::client::DirectLink::list_offering_type_speeds] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::ListOfferingTypeSpeeds;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListOfferingTypeSpeeds {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListOfferingTypeSpeeds(RequestBuilder<crate::model::ListOfferingTypeSpeedsRequest>);

    impl ListOfferingTypeSpeeds {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListOfferingTypeSpeedsRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::OfferingSpeedCollection>> {
            (*self.0.stub)
                .list_offering_type_speeds(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [offering_type][crate::model::ListOfferingTypeSpeedsRequest::offering_type].
        ///
        /// This is a **required** field for requests.
        pub fn set_offering_type<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.offering_type = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListOfferingTypeSpeeds {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::list_ports][crate::client::DirectLink::list_ports] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::ListPorts;
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
    /// fn prepare_request_builder() -> ListPorts {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListPorts(RequestBuilder<crate::model::ListPortsRequest>);

    impl ListPorts {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListPortsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::PortCollection>> {
            (*self.0.stub)
                .list_ports(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::PortCollection, gax::error::Error> {
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
        ) -> gax::paginator::ItemPaginator<crate::model::PortCollection, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [start][crate::model::ListPortsRequest::start].
        pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.start = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListPortsRequest::start].
        pub fn set_or_clear_start<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListPortsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListPortsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [location_name][crate::model::ListPortsRequest::location_name].
        pub fn set_location_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.location_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [location_name][crate::model::ListPortsRequest::location_name].
        pub fn set_or_clear_location_name<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.location_name = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListPorts {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::get_port][crate::client::DirectLink::get_port] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::GetPort;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetPort {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetPort(RequestBuilder<crate::model::GetPortRequest>);

    impl GetPort {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetPortRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Port>> {
            (*self.0.stub)
                .get_port(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::GetPortRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetPort {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::list_gateway_virtual_connections][crate::client::DirectLink::list_gateway_virtual_connections] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::ListGatewayVirtualConnections;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListGatewayVirtualConnections {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListGatewayVirtualConnections(
        RequestBuilder<crate::model::ListGatewayVirtualConnectionsRequest>,
    );

    impl ListGatewayVirtualConnections {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListGatewayVirtualConnectionsRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::GatewayVirtualConnectionCollection>> {
            (*self.0.stub)
                .list_gateway_virtual_connections(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [gateway_id][crate::model::ListGatewayVirtualConnectionsRequest::gateway_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.gateway_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListGatewayVirtualConnections {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::create_gateway_virtual_connection][crate::client::DirectLink::create_gateway_virtual_connection] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::CreateGatewayVirtualConnection;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateGatewayVirtualConnection {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateGatewayVirtualConnection(
        RequestBuilder<crate::model::CreateGatewayVirtualConnectionRequest>,
    );

    impl CreateGatewayVirtualConnection {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateGatewayVirtualConnectionRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::GatewayVirtualConnection>> {
            (*self.0.stub)
                .create_gateway_virtual_connection(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [gateway_id][crate::model::CreateGatewayVirtualConnectionRequest::gateway_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.gateway_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::CreateGatewayVirtualConnectionRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::CreateGatewayVirtualConnectionRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [type][crate::model::CreateGatewayVirtualConnectionRequest::r#type].
        ///
        /// This is a **required** field for requests.
        pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.r#type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [type][crate::model::CreateGatewayVirtualConnectionRequest::r#type].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_type<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.r#type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [network_id][crate::model::CreateGatewayVirtualConnectionRequest::network_id].
        pub fn set_network_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.network_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [network_id][crate::model::CreateGatewayVirtualConnectionRequest::network_id].
        pub fn set_or_clear_network_id<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.network_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateGatewayVirtualConnection {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::delete_gateway_virtual_connection][crate::client::DirectLink::delete_gateway_virtual_connection] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::DeleteGatewayVirtualConnection;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteGatewayVirtualConnection {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteGatewayVirtualConnection(
        RequestBuilder<crate::model::DeleteGatewayVirtualConnectionRequest>,
    );

    impl DeleteGatewayVirtualConnection {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteGatewayVirtualConnectionRequest>>(
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
                .delete_gateway_virtual_connection(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [gateway_id][crate::model::DeleteGatewayVirtualConnectionRequest::gateway_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.gateway_id = v.into();
            self
        }

        /// Sets the value of [id][crate::model::DeleteGatewayVirtualConnectionRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteGatewayVirtualConnection {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::get_gateway_virtual_connection][crate::client::DirectLink::get_gateway_virtual_connection] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::GetGatewayVirtualConnection;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetGatewayVirtualConnection {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetGatewayVirtualConnection(
        RequestBuilder<crate::model::GetGatewayVirtualConnectionRequest>,
    );

    impl GetGatewayVirtualConnection {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetGatewayVirtualConnectionRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::GatewayVirtualConnection>> {
            (*self.0.stub)
                .get_gateway_virtual_connection(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [gateway_id][crate::model::GetGatewayVirtualConnectionRequest::gateway_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.gateway_id = v.into();
            self
        }

        /// Sets the value of [id][crate::model::GetGatewayVirtualConnectionRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetGatewayVirtualConnection {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLink::update_gateway_virtual_connection][crate::client::DirectLink::update_gateway_virtual_connection] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_direct_link_v1::builder;
    /// use builder::direct_link::UpdateGatewayVirtualConnection;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateGatewayVirtualConnection {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateGatewayVirtualConnection(
        RequestBuilder<crate::model::UpdateGatewayVirtualConnectionRequest>,
    );

    impl UpdateGatewayVirtualConnection {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLink>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateGatewayVirtualConnectionRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::GatewayVirtualConnection>> {
            (*self.0.stub)
                .update_gateway_virtual_connection(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [gateway_id][crate::model::UpdateGatewayVirtualConnectionRequest::gateway_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.gateway_id = v.into();
            self
        }

        /// Sets the value of [id][crate::model::UpdateGatewayVirtualConnectionRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::UpdateGatewayVirtualConnectionRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::UpdateGatewayVirtualConnectionRequest::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [status][crate::model::UpdateGatewayVirtualConnectionRequest::status].
        pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.status = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [status][crate::model::UpdateGatewayVirtualConnectionRequest::status].
        pub fn set_or_clear_status<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.status = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateGatewayVirtualConnection {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
