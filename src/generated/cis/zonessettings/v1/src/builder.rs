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

pub mod zones_settings {
    use crate::Result;

    /// A builder for [ZonesSettings][crate::client::ZonesSettings].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_zones_settings_v1::*;
    /// # use builder::zones_settings::ClientBuilder;
    /// # use client::ZonesSettings;
    /// let builder : ClientBuilder = ZonesSettings::builder("my-crn", "my-zone-id");
    /// let client = builder
    ///     .with_endpoint("https://api.cis.cloud.ibm.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::ZonesSettings;
        pub struct Factory {
            pub(crate) identity: crate::client::Identity,
        }
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ZonesSettings;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::with_config(self.identity, config)
            }
        }
    }

    /// Common implementation for [crate::client::ZonesSettings] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [ZonesSettings::get_zone_dnssec][crate::client::ZonesSettings::get_zone_dnssec] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::GetZoneDnssec;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetZoneDnssec {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetZoneDnssec(RequestBuilder<crate::model::GetZoneSettingRequest>);

    impl GetZoneDnssec {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetZoneSettingRequest>>(mut self, v: V) -> Self {
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
            gax::response::Response<gax::envelope::Envelope<crate::model::DnssecSettings>>,
        > {
            (*self.0.stub)
                .get_zone_dnssec(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetZoneDnssec {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::update_zone_dnssec][crate::client::ZonesSettings::update_zone_dnssec] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::UpdateZoneDnssec;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateZoneDnssec {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateZoneDnssec(RequestBuilder<crate::model::UpdateZoneDnssecRequest>);

    impl UpdateZoneDnssec {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateZoneDnssecRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::DnssecSettings>>,
        > {
            (*self.0.stub)
                .update_zone_dnssec(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [status][crate::model::UpdateZoneDnssecRequest::status].
        pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.status = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [status][crate::model::UpdateZoneDnssecRequest::status].
        pub fn set_or_clear_status<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.status = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateZoneDnssec {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::get_zone_cname_flattening][crate::client::ZonesSettings::get_zone_cname_flattening] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::GetZoneCnameFlattening;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetZoneCnameFlattening {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetZoneCnameFlattening(RequestBuilder<crate::model::GetZoneSettingRequest>);

    impl GetZoneCnameFlattening {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetZoneSettingRequest>>(mut self, v: V) -> Self {
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
            gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
        > {
            (*self.0.stub)
                .get_zone_cname_flattening(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetZoneCnameFlattening {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::update_zone_cname_flattening][crate::client::ZonesSettings::update_zone_cname_flattening] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::UpdateZoneCnameFlattening;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateZoneCnameFlattening {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateZoneCnameFlattening(RequestBuilder<crate::model::UpdateStringSettingRequest>);

    impl UpdateZoneCnameFlattening {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateStringSettingRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
        > {
            (*self.0.stub)
                .update_zone_cname_flattening(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [value][crate::model::UpdateStringSettingRequest::value].
        pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.value = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [value][crate::model::UpdateStringSettingRequest::value].
        pub fn set_or_clear_value<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.value = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateZoneCnameFlattening {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::get_opportunistic_encryption][crate::client::ZonesSettings::get_opportunistic_encryption] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::GetOpportunisticEncryption;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetOpportunisticEncryption {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetOpportunisticEncryption(RequestBuilder<crate::model::GetZoneSettingRequest>);

    impl GetOpportunisticEncryption {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetZoneSettingRequest>>(mut self, v: V) -> Self {
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
            gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
        > {
            (*self.0.stub)
                .get_opportunistic_encryption(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetOpportunisticEncryption {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::update_opportunistic_encryption][crate::client::ZonesSettings::update_opportunistic_encryption] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::UpdateOpportunisticEncryption;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateOpportunisticEncryption {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateOpportunisticEncryption(
        RequestBuilder<crate::model::UpdateStringSettingRequest>,
    );

    impl UpdateOpportunisticEncryption {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateStringSettingRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
        > {
            (*self.0.stub)
                .update_opportunistic_encryption(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [value][crate::model::UpdateStringSettingRequest::value].
        pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.value = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [value][crate::model::UpdateStringSettingRequest::value].
        pub fn set_or_clear_value<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.value = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateOpportunisticEncryption {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::get_challenge_ttl][crate::client::ZonesSettings::get_challenge_ttl] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::GetChallengeTtl;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetChallengeTtl {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetChallengeTtl(RequestBuilder<crate::model::GetZoneSettingRequest>);

    impl GetChallengeTtl {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetZoneSettingRequest>>(mut self, v: V) -> Self {
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<i64>>>> {
            (*self.0.stub)
                .get_challenge_ttl(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetChallengeTtl {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::update_challenge_ttl][crate::client::ZonesSettings::update_challenge_ttl] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::UpdateChallengeTtl;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateChallengeTtl {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateChallengeTtl(RequestBuilder<crate::model::UpdateChallengeTtlRequest>);

    impl UpdateChallengeTtl {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateChallengeTtlRequest>>(
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::Setting<i64>>>> {
            (*self.0.stub)
                .update_challenge_ttl(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [value][crate::model::UpdateChallengeTtlRequest::value].
        pub fn set_value<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.value = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [value][crate::model::UpdateChallengeTtlRequest::value].
        pub fn set_or_clear_value<T: Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.value = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateChallengeTtl {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::get_automatic_https_rewrites][crate::client::ZonesSettings::get_automatic_https_rewrites] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::GetAutomaticHttpsRewrites;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetAutomaticHttpsRewrites {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetAutomaticHttpsRewrites(RequestBuilder<crate::model::GetZoneSettingRequest>);

    impl GetAutomaticHttpsRewrites {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetZoneSettingRequest>>(mut self, v: V) -> Self {
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
            gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
        > {
            (*self.0.stub)
                .get_automatic_https_rewrites(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetAutomaticHttpsRewrites {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::update_automatic_https_rewrites][crate::client::ZonesSettings::update_automatic_https_rewrites] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::UpdateAutomaticHttpsRewrites;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateAutomaticHttpsRewrites {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateAutomaticHttpsRewrites(
        RequestBuilder<crate::model::UpdateStringSettingRequest>,
    );

    impl UpdateAutomaticHttpsRewrites {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateStringSettingRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
        > {
            (*self.0.stub)
                .update_automatic_https_rewrites(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [value][crate::model::UpdateStringSettingRequest::value].
        pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.value = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [value][crate::model::UpdateStringSettingRequest::value].
        pub fn set_or_clear_value<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.value = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateAutomaticHttpsRewrites {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::get_min_tls_version][crate::client::ZonesSettings::get_min_tls_version] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::GetMinTlsVersion;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetMinTlsVersion {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetMinTlsVersion(RequestBuilder<crate::model::GetZoneSettingRequest>);

    impl GetMinTlsVersion {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetZoneSettingRequest>>(mut self, v: V) -> Self {
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
            gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
        > {
            (*self.0.stub)
                .get_min_tls_version(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetMinTlsVersion {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::update_min_tls_version][crate::client::ZonesSettings::update_min_tls_version] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::UpdateMinTlsVersion;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateMinTlsVersion {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateMinTlsVersion(RequestBuilder<crate::model::UpdateStringSettingRequest>);

    impl UpdateMinTlsVersion {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateStringSettingRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::Setting<String>>>,
        > {
            (*self.0.stub)
                .update_min_tls_version(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [value][crate::model::UpdateStringSettingRequest::value].
        pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.value = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [value][crate::model::UpdateStringSettingRequest::value].
        pub fn set_or_clear_value<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.value = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateMinTlsVersion {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::get_ciphers][crate::client::ZonesSettings::get_ciphers] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::GetCiphers;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetCiphers {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetCiphers(RequestBuilder<crate::model::GetZoneSettingRequest>);

    impl GetCiphers {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetZoneSettingRequest>>(mut self, v: V) -> Self {
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
            gax::response::Response<gax::envelope::Envelope<crate::model::Setting<Vec<String>>>>,
        > {
            (*self.0.stub)
                .get_ciphers(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetCiphers {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::update_ciphers][crate::client::ZonesSettings::update_ciphers] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::UpdateCiphers;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateCiphers {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateCiphers(RequestBuilder<crate::model::UpdateCiphersRequest>);

    impl UpdateCiphers {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateCiphersRequest>>(mut self, v: V) -> Self {
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
            gax::response::Response<gax::envelope::Envelope<crate::model::Setting<Vec<String>>>>,
        > {
            (*self.0.stub)
                .update_ciphers(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [value][crate::model::UpdateCiphersRequest::value].
        pub fn set_value<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            self.0.request.value = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateCiphers {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::get_security_header][crate::client::ZonesSettings::get_security_header] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::GetSecurityHeader;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetSecurityHeader {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetSecurityHeader(RequestBuilder<crate::model::GetZoneSettingRequest>);

    impl GetSecurityHeader {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetZoneSettingRequest>>(mut self, v: V) -> Self {
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
            gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::SecurityHeaderValue>>>,
        > {
            (*self.0.stub)
                .get_security_header(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetSecurityHeader {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::update_security_header][crate::client::ZonesSettings::update_security_header] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::UpdateSecurityHeader;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateSecurityHeader {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateSecurityHeader(RequestBuilder<crate::model::UpdateSecurityHeaderRequest>);

    impl UpdateSecurityHeader {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateSecurityHeaderRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::SecurityHeaderValue>>>,
        > {
            (*self.0.stub)
                .update_security_header(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [value][crate::model::UpdateSecurityHeaderRequest::value].
        pub fn set_value<T: Into<crate::model::SecurityHeaderValue>>(mut self, v: T) -> Self {
            self.0.request.value = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [value][crate::model::UpdateSecurityHeaderRequest::value].
        pub fn set_or_clear_value<T: Into<crate::model::SecurityHeaderValue>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.value = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateSecurityHeader {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::get_minify][crate::client::ZonesSettings::get_minify] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::GetMinify;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetMinify {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetMinify(RequestBuilder<crate::model::GetZoneSettingRequest>);

    impl GetMinify {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetZoneSettingRequest>>(mut self, v: V) -> Self {
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
            gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::MinifyValue>>>,
        > {
            (*self.0.stub)
                .get_minify(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetMinify {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ZonesSettings::update_minify][crate::client::ZonesSettings::update_minify] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_zones_settings_v1::builder;
    /// use builder::zones_settings::UpdateMinify;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateMinify {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateMinify(RequestBuilder<crate::model::UpdateMinifyRequest>);

    impl UpdateMinify {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZonesSettings>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateMinifyRequest>>(mut self, v: V) -> Self {
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
            gax::response::Response<gax::envelope::Envelope<crate::model::Setting<crate::model::MinifyValue>>>,
        > {
            (*self.0.stub)
                .update_minify(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [value][crate::model::UpdateMinifyRequest::value].
        pub fn set_value<T: Into<crate::model::MinifyValue>>(mut self, v: T) -> Self {
            self.0.request.value = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [value][crate::model::UpdateMinifyRequest::value].
        pub fn set_or_clear_value<T: Into<crate::model::MinifyValue>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.value = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateMinify {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
