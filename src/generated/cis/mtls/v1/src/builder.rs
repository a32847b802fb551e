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

pub mod mtls {
    use crate::Result;

    /// A builder for [Mtls][crate::client::Mtls].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_mtls_v1::*;
    /// # use builder::mtls::ClientBuilder;
    /// # use client::Mtls;
    /// let builder : ClientBuilder = Mtls::builder("my-crn");
    /// let client = builder
    ///     .with_endpoint("https://api.cis.cloud.ibm.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Mtls;
        pub struct Factory {
            pub(crate) identity: crate::client::Identity,
        }
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Mtls;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::with_config(self.identity, config)
            }
        }
    }

    /// Common implementation for [crate::client::Mtls] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Mtls::list_access_certificates][crate::client::Mtls::list_access_certificates] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::ListAccessCertificates;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListAccessCertificates {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListAccessCertificates(RequestBuilder<crate::model::ListAccessCertificatesRequest>);

    impl ListAccessCertificates {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAccessCertificatesRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertificate>>>,
        > {
            (*self.0.stub)
                .list_access_certificates(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::ListAccessCertificatesRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListAccessCertificates {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::create_access_certificate][crate::client::Mtls::create_access_certificate] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::CreateAccessCertificate;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateAccessCertificate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateAccessCertificate(
        RequestBuilder<crate::model::CreateAccessCertificateRequest>,
    );

    impl CreateAccessCertificate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateAccessCertificateRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>,
        > {
            (*self.0.stub)
                .create_access_certificate(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::CreateAccessCertificateRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::CreateAccessCertificateRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::CreateAccessCertificateRequest::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [certificate][crate::model::CreateAccessCertificateRequest::certificate].
        pub fn set_certificate<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.certificate = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [certificate][crate::model::CreateAccessCertificateRequest::certificate].
        pub fn set_or_clear_certificate<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.certificate = v.map(|x| x.into());
            self
        }

        /// Sets the value of [associated_hostnames][crate::model::CreateAccessCertificateRequest::associated_hostnames].
        pub fn set_associated_hostnames<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            self.0.request.associated_hostnames = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateAccessCertificate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::get_access_certificate][crate::client::Mtls::get_access_certificate] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::GetAccessCertificate;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetAccessCertificate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetAccessCertificate(RequestBuilder<crate::model::GetAccessCertificateRequest>);

    impl GetAccessCertificate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAccessCertificateRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>,
        > {
            (*self.0.stub)
                .get_access_certificate(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::GetAccessCertificateRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [cert_id][crate::model::GetAccessCertificateRequest::cert_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_cert_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cert_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetAccessCertificate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::update_access_certificate][crate::client::Mtls::update_access_certificate] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::UpdateAccessCertificate;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateAccessCertificate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateAccessCertificate(
        RequestBuilder<crate::model::UpdateAccessCertificateRequest>,
    );

    impl UpdateAccessCertificate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateAccessCertificateRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>,
        > {
            (*self.0.stub)
                .update_access_certificate(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::UpdateAccessCertificateRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [cert_id][crate::model::UpdateAccessCertificateRequest::cert_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_cert_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cert_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::UpdateAccessCertificateRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::UpdateAccessCertificateRequest::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [associated_hostnames][crate::model::UpdateAccessCertificateRequest::associated_hostnames].
        pub fn set_associated_hostnames<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            self.0.request.associated_hostnames = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateAccessCertificate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::delete_access_certificate][crate::client::Mtls::delete_access_certificate] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::DeleteAccessCertificate;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteAccessCertificate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteAccessCertificate(
        RequestBuilder<crate::model::DeleteAccessCertificateRequest>,
    );

    impl DeleteAccessCertificate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteAccessCertificateRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>,
        > {
            (*self.0.stub)
                .delete_access_certificate(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::DeleteAccessCertificateRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [cert_id][crate::model::DeleteAccessCertificateRequest::cert_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_cert_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cert_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteAccessCertificate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::list_access_certificates_settings][crate::client::Mtls::list_access_certificates_settings] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::ListAccessCertificatesSettings;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListAccessCertificatesSettings {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListAccessCertificatesSettings(
        RequestBuilder<crate::model::ListAccessCertificatesSettingsRequest>,
    );

    impl ListAccessCertificatesSettings {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAccessCertificatesSettingsRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertSettings>>>,
        > {
            (*self.0.stub)
                .list_access_certificates_settings(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::ListAccessCertificatesSettingsRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListAccessCertificatesSettings {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::update_access_certificates_settings][crate::client::Mtls::update_access_certificates_settings] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::UpdateAccessCertificatesSettings;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateAccessCertificatesSettings {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateAccessCertificatesSettings(
        RequestBuilder<crate::model::UpdateAccessCertificatesSettingsRequest>,
    );

    impl UpdateAccessCertificatesSettings {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateAccessCertificatesSettingsRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertSettings>>>,
        > {
            (*self.0.stub)
                .update_access_certificates_settings(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::UpdateAccessCertificatesSettingsRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [settings][crate::model::UpdateAccessCertificatesSettingsRequest::settings].
        ///
        /// This is a **required** field for requests.
        pub fn set_settings<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::AccessCertSettingsInput>,
        {
            self.0.request.settings = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateAccessCertificatesSettings {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::create_access_application][crate::client::Mtls::create_access_application] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::CreateAccessApplication;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateAccessApplication {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateAccessApplication(
        RequestBuilder<crate::model::CreateAccessApplicationRequest>,
    );

    impl CreateAccessApplication {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateAccessApplicationRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>,
        > {
            (*self.0.stub)
                .create_access_application(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::CreateAccessApplicationRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::CreateAccessApplicationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::CreateAccessApplicationRequest::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [domain][crate::model::CreateAccessApplicationRequest::domain].
        pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.domain = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [domain][crate::model::CreateAccessApplicationRequest::domain].
        pub fn set_or_clear_domain<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.domain = v.map(|x| x.into());
            self
        }

        /// Sets the value of [session_duration][crate::model::CreateAccessApplicationRequest::session_duration].
        pub fn set_session_duration<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.session_duration = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [session_duration][crate::model::CreateAccessApplicationRequest::session_duration].
        pub fn set_or_clear_session_duration<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.session_duration = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateAccessApplication {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::list_access_applications][crate::client::Mtls::list_access_applications] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::ListAccessApplications;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListAccessApplications {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListAccessApplications(RequestBuilder<crate::model::ListAccessApplicationsRequest>);

    impl ListAccessApplications {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAccessApplicationsRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessApplication>>>,
        > {
            (*self.0.stub)
                .list_access_applications(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::ListAccessApplicationsRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListAccessApplications {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::get_access_application][crate::client::Mtls::get_access_application] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::GetAccessApplication;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetAccessApplication {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetAccessApplication(RequestBuilder<crate::model::GetAccessApplicationRequest>);

    impl GetAccessApplication {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAccessApplicationRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>,
        > {
            (*self.0.stub)
                .get_access_application(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::GetAccessApplicationRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [app_id][crate::model::GetAccessApplicationRequest::app_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.app_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetAccessApplication {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::update_access_application][crate::client::Mtls::update_access_application] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::UpdateAccessApplication;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateAccessApplication {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateAccessApplication(
        RequestBuilder<crate::model::UpdateAccessApplicationRequest>,
    );

    impl UpdateAccessApplication {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateAccessApplicationRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>,
        > {
            (*self.0.stub)
                .update_access_application(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::UpdateAccessApplicationRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [app_id][crate::model::UpdateAccessApplicationRequest::app_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.app_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::UpdateAccessApplicationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::UpdateAccessApplicationRequest::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [domain][crate::model::UpdateAccessApplicationRequest::domain].
        pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.domain = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [domain][crate::model::UpdateAccessApplicationRequest::domain].
        pub fn set_or_clear_domain<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.domain = v.map(|x| x.into());
            self
        }

        /// Sets the value of [session_duration][crate::model::UpdateAccessApplicationRequest::session_duration].
        pub fn set_session_duration<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.session_duration = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [session_duration][crate::model::UpdateAccessApplicationRequest::session_duration].
        pub fn set_or_clear_session_duration<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.session_duration = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateAccessApplication {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::delete_access_application][crate::client::Mtls::delete_access_application] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::DeleteAccessApplication;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteAccessApplication {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteAccessApplication(
        RequestBuilder<crate::model::DeleteAccessApplicationRequest>,
    );

    impl DeleteAccessApplication {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteAccessApplicationRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>,
        > {
            (*self.0.stub)
                .delete_access_application(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::DeleteAccessApplicationRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [app_id][crate::model::DeleteAccessApplicationRequest::app_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.app_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteAccessApplication {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::create_access_policy][crate::client::Mtls::create_access_policy] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::CreateAccessPolicy;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateAccessPolicy {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateAccessPolicy(RequestBuilder<crate::model::CreateAccessPolicyRequest>);

    impl CreateAccessPolicy {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateAccessPolicyRequest>>(
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>> {
            (*self.0.stub)
                .create_access_policy(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::CreateAccessPolicyRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [app_id][crate::model::CreateAccessPolicyRequest::app_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.app_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::CreateAccessPolicyRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::CreateAccessPolicyRequest::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [decision][crate::model::CreateAccessPolicyRequest::decision].
        pub fn set_decision<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.decision = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [decision][crate::model::CreateAccessPolicyRequest::decision].
        pub fn set_or_clear_decision<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.decision = v.map(|x| x.into());
            self
        }

        /// Sets the value of [include][crate::model::CreateAccessPolicyRequest::include].
        pub fn set_include<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::PolicyRule>,
        {
            self.0.request.include = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateAccessPolicy {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::list_access_policies][crate::client::Mtls::list_access_policies] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::ListAccessPolicies;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListAccessPolicies {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListAccessPolicies(RequestBuilder<crate::model::ListAccessPoliciesRequest>);

    impl ListAccessPolicies {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAccessPoliciesRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessPolicy>>>,
        > {
            (*self.0.stub)
                .list_access_policies(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::ListAccessPoliciesRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [app_id][crate::model::ListAccessPoliciesRequest::app_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.app_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListAccessPolicies {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::get_access_policy][crate::client::Mtls::get_access_policy] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::GetAccessPolicy;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetAccessPolicy {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetAccessPolicy(RequestBuilder<crate::model::GetAccessPolicyRequest>);

    impl GetAccessPolicy {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAccessPolicyRequest>>(mut self, v: V) -> Self {
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>> {
            (*self.0.stub)
                .get_access_policy(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::GetAccessPolicyRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [app_id][crate::model::GetAccessPolicyRequest::app_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.app_id = v.into();
            self
        }

        /// Sets the value of [policy_id][crate::model::GetAccessPolicyRequest::policy_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_policy_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.policy_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetAccessPolicy {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::update_access_policy][crate::client::Mtls::update_access_policy] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::UpdateAccessPolicy;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateAccessPolicy {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateAccessPolicy(RequestBuilder<crate::model::UpdateAccessPolicyRequest>);

    impl UpdateAccessPolicy {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateAccessPolicyRequest>>(
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>> {
            (*self.0.stub)
                .update_access_policy(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::UpdateAccessPolicyRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [app_id][crate::model::UpdateAccessPolicyRequest::app_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.app_id = v.into();
            self
        }

        /// Sets the value of [policy_id][crate::model::UpdateAccessPolicyRequest::policy_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_policy_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.policy_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::UpdateAccessPolicyRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::UpdateAccessPolicyRequest::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [decision][crate::model::UpdateAccessPolicyRequest::decision].
        pub fn set_decision<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.decision = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [decision][crate::model::UpdateAccessPolicyRequest::decision].
        pub fn set_or_clear_decision<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.decision = v.map(|x| x.into());
            self
        }

        /// Sets the value of [include][crate::model::UpdateAccessPolicyRequest::include].
        pub fn set_include<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::PolicyRule>,
        {
            self.0.request.include = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateAccessPolicy {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Mtls::delete_access_policy][crate::client::Mtls::delete_access_policy] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_mtls_v1::builder;
    /// use builder::mtls::DeleteAccessPolicy;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteAccessPolicy {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteAccessPolicy(RequestBuilder<crate::model::DeleteAccessPolicyRequest>);

    impl DeleteAccessPolicy {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Mtls>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteAccessPolicyRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>,
        > {
            (*self.0.stub)
                .delete_access_policy(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_id][crate::model::DeleteAccessPolicyRequest::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [app_id][crate::model::DeleteAccessPolicyRequest::app_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_app_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.app_id = v.into();
            self
        }

        /// Sets the value of [policy_id][crate::model::DeleteAccessPolicyRequest::policy_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_policy_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.policy_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteAccessPolicy {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
