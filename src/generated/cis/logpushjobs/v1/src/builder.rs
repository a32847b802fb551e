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

pub mod logpush_jobs {
    use crate::Result;

    /// A builder for [LogpushJobs][crate::client::LogpushJobs].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_logpush_jobs_v1::*;
    /// # use builder::logpush_jobs::ClientBuilder;
    /// # use client::LogpushJobs;
    /// let builder : ClientBuilder = LogpushJobs::builder("my-crn", "my-zone-id", "http_requests");
    /// let client = builder
    ///     .with_endpoint("https://api.cis.cloud.ibm.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::LogpushJobs;
        pub struct Factory {
            pub(crate) identity: crate::client::Identity,
        }
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = LogpushJobs;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::with_config(self.identity, config)
            }
        }
    }

    /// Common implementation for [crate::client::LogpushJobs] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [LogpushJobs::get_logpush_jobs][crate::client::LogpushJobs::get_logpush_jobs] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::GetLogpushJobs;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetLogpushJobs {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetLogpushJobs(RequestBuilder<crate::model::ListLogpushJobsRequest>);

    impl GetLogpushJobs {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogpushJobsRequest>>(mut self, v: V) -> Self {
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
            gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJob>>>,
        > {
            (*self.0.stub)
                .get_logpush_jobs(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogpushJobs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::create_logpush_job][crate::client::LogpushJobs::create_logpush_job] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::CreateLogpushJob;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateLogpushJob {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateLogpushJob(RequestBuilder<crate::model::CreateLogpushJobRequest>);

    impl CreateLogpushJob {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLogpushJobRequest>>(
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>> {
            (*self.0.stub)
                .create_logpush_job(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::CreateLogpushJobRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::CreateLogpushJobRequest::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [enabled][crate::model::CreateLogpushJobRequest::enabled].
        pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.enabled = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [enabled][crate::model::CreateLogpushJobRequest::enabled].
        pub fn set_or_clear_enabled<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.enabled = v.map(|x| x.into());
            self
        }

        /// Sets the value of [logpull_options][crate::model::CreateLogpushJobRequest::logpull_options].
        pub fn set_logpull_options<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.logpull_options = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [logpull_options][crate::model::CreateLogpushJobRequest::logpull_options].
        pub fn set_or_clear_logpull_options<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.logpull_options = v.map(|x| x.into());
            self
        }

        /// Sets the value of [destination_conf][crate::model::CreateLogpushJobRequest::destination_conf].
        pub fn set_destination_conf<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.destination_conf = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [destination_conf][crate::model::CreateLogpushJobRequest::destination_conf].
        pub fn set_or_clear_destination_conf<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.destination_conf = v.map(|x| x.into());
            self
        }

        /// Sets the value of [ownership_challenge][crate::model::CreateLogpushJobRequest::ownership_challenge].
        pub fn set_ownership_challenge<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.ownership_challenge = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [ownership_challenge][crate::model::CreateLogpushJobRequest::ownership_challenge].
        pub fn set_or_clear_ownership_challenge<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.ownership_challenge = v.map(|x| x.into());
            self
        }

        /// Sets the value of [dataset][crate::model::CreateLogpushJobRequest::dataset].
        pub fn set_dataset<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.dataset = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [dataset][crate::model::CreateLogpushJobRequest::dataset].
        pub fn set_or_clear_dataset<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.dataset = v.map(|x| x.into());
            self
        }

        /// Sets the value of [frequency][crate::model::CreateLogpushJobRequest::frequency].
        pub fn set_frequency<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.frequency = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [frequency][crate::model::CreateLogpushJobRequest::frequency].
        pub fn set_or_clear_frequency<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.frequency = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLogpushJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::get_logpush_job][crate::client::LogpushJobs::get_logpush_job] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::GetLogpushJob;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetLogpushJob {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetLogpushJob(RequestBuilder<crate::model::GetLogpushJobRequest>);

    impl GetLogpushJob {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogpushJobRequest>>(mut self, v: V) -> Self {
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>> {
            (*self.0.stub)
                .get_logpush_job(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [job_id][crate::model::GetLogpushJobRequest::job_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_job_id<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogpushJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::update_logpush_job][crate::client::LogpushJobs::update_logpush_job] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::UpdateLogpushJob;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateLogpushJob {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateLogpushJob(RequestBuilder<crate::model::UpdateLogpushJobRequest>);

    impl UpdateLogpushJob {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLogpushJobRequest>>(
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>> {
            (*self.0.stub)
                .update_logpush_job(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [job_id][crate::model::UpdateLogpushJobRequest::job_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_job_id<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }

        /// Sets the value of [enabled][crate::model::UpdateLogpushJobRequest::enabled].
        pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.enabled = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [enabled][crate::model::UpdateLogpushJobRequest::enabled].
        pub fn set_or_clear_enabled<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.enabled = v.map(|x| x.into());
            self
        }

        /// Sets the value of [logpull_options][crate::model::UpdateLogpushJobRequest::logpull_options].
        pub fn set_logpull_options<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.logpull_options = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [logpull_options][crate::model::UpdateLogpushJobRequest::logpull_options].
        pub fn set_or_clear_logpull_options<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.logpull_options = v.map(|x| x.into());
            self
        }

        /// Sets the value of [destination_conf][crate::model::UpdateLogpushJobRequest::destination_conf].
        pub fn set_destination_conf<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.destination_conf = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [destination_conf][crate::model::UpdateLogpushJobRequest::destination_conf].
        pub fn set_or_clear_destination_conf<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.destination_conf = v.map(|x| x.into());
            self
        }

        /// Sets the value of [ownership_challenge][crate::model::UpdateLogpushJobRequest::ownership_challenge].
        pub fn set_ownership_challenge<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.ownership_challenge = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [ownership_challenge][crate::model::UpdateLogpushJobRequest::ownership_challenge].
        pub fn set_or_clear_ownership_challenge<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.ownership_challenge = v.map(|x| x.into());
            self
        }

        /// Sets the value of [frequency][crate::model::UpdateLogpushJobRequest::frequency].
        pub fn set_frequency<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.frequency = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [frequency][crate::model::UpdateLogpushJobRequest::frequency].
        pub fn set_or_clear_frequency<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.frequency = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLogpushJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::delete_logpush_job][crate::client::LogpushJobs::delete_logpush_job] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::DeleteLogpushJob;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteLogpushJob {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteLogpushJob(RequestBuilder<crate::model::DeleteLogpushJobRequest>);

    impl DeleteLogpushJob {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLogpushJobRequest>>(
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<serde_json::Value>>> {
            (*self.0.stub)
                .delete_logpush_job(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [job_id][crate::model::DeleteLogpushJobRequest::job_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_job_id<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLogpushJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::list_fields_for_dataset][crate::client::LogpushJobs::list_fields_for_dataset] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::ListFieldsForDataset;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListFieldsForDataset {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListFieldsForDataset(RequestBuilder<crate::model::ListFieldsForDatasetRequest>);

    impl ListFieldsForDataset {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFieldsForDatasetRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<std::collections::HashMap<String, String>>>,
        > {
            (*self.0.stub)
                .list_fields_for_dataset(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListFieldsForDataset {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::list_logpush_jobs_for_dataset][crate::client::LogpushJobs::list_logpush_jobs_for_dataset] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::ListLogpushJobsForDataset;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListLogpushJobsForDataset {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListLogpushJobsForDataset(
        RequestBuilder<crate::model::ListLogpushJobsForDatasetRequest>,
    );

    impl ListLogpushJobsForDataset {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogpushJobsForDatasetRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJob>>>,
        > {
            (*self.0.stub)
                .list_logpush_jobs_for_dataset(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogpushJobsForDataset {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::get_logpush_ownership][crate::client::LogpushJobs::get_logpush_ownership] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::GetLogpushOwnership;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetLogpushOwnership {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetLogpushOwnership(RequestBuilder<crate::model::GetLogpushOwnershipRequest>);

    impl GetLogpushOwnership {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogpushOwnershipRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipChallenge>>,
        > {
            (*self.0.stub)
                .get_logpush_ownership(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [destination_conf][crate::model::GetLogpushOwnershipRequest::destination_conf].
        ///
        /// This is a **required** field for requests.
        pub fn set_destination_conf<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.destination_conf = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [destination_conf][crate::model::GetLogpushOwnershipRequest::destination_conf].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_destination_conf<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.destination_conf = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogpushOwnership {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::validate_logpush_ownership_challenge][crate::client::LogpushJobs::validate_logpush_ownership_challenge] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::ValidateLogpushOwnershipChallenge;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ValidateLogpushOwnershipChallenge {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ValidateLogpushOwnershipChallenge(
        RequestBuilder<crate::model::ValidateLogpushOwnershipChallengeRequest>,
    );

    impl ValidateLogpushOwnershipChallenge {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ValidateLogpushOwnershipChallengeRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipValidation>>,
        > {
            (*self.0.stub)
                .validate_logpush_ownership_challenge(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [destination_conf][crate::model::ValidateLogpushOwnershipChallengeRequest::destination_conf].
        ///
        /// This is a **required** field for requests.
        pub fn set_destination_conf<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.destination_conf = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [destination_conf][crate::model::ValidateLogpushOwnershipChallengeRequest::destination_conf].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_destination_conf<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.destination_conf = v.map(|x| x.into());
            self
        }

        /// Sets the value of [ownership_challenge][crate::model::ValidateLogpushOwnershipChallengeRequest::ownership_challenge].
        ///
        /// This is a **required** field for requests.
        pub fn set_ownership_challenge<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.ownership_challenge = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [ownership_challenge][crate::model::ValidateLogpushOwnershipChallengeRequest::ownership_challenge].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_ownership_challenge<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.ownership_challenge = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ValidateLogpushOwnershipChallenge {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::get_logpush_jobs_v2][crate::client::LogpushJobs::get_logpush_jobs_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::GetLogpushJobsV2;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetLogpushJobsV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetLogpushJobsV2(RequestBuilder<crate::model::ListLogpushJobsRequest>);

    impl GetLogpushJobsV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogpushJobsRequest>>(mut self, v: V) -> Self {
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
            gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJobV2>>>,
        > {
            (*self.0.stub)
                .get_logpush_jobs_v2(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogpushJobsV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::create_logpush_job_v2][crate::client::LogpushJobs::create_logpush_job_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::CreateLogpushJobV2;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateLogpushJobV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateLogpushJobV2(RequestBuilder<crate::model::CreateLogpushJobV2Request>);

    impl CreateLogpushJobV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLogpushJobV2Request>>(
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>> {
            (*self.0.stub)
                .create_logpush_job_v2(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::CreateLogpushJobV2Request::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::CreateLogpushJobV2Request::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [enabled][crate::model::CreateLogpushJobV2Request::enabled].
        pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.enabled = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [enabled][crate::model::CreateLogpushJobV2Request::enabled].
        pub fn set_or_clear_enabled<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.enabled = v.map(|x| x.into());
            self
        }

        /// Sets the value of [logpull_options][crate::model::CreateLogpushJobV2Request::logpull_options].
        pub fn set_logpull_options<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.logpull_options = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [logpull_options][crate::model::CreateLogpushJobV2Request::logpull_options].
        pub fn set_or_clear_logpull_options<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.logpull_options = v.map(|x| x.into());
            self
        }

        /// Sets the value of [cos][crate::model::CreateLogpushJobV2Request::cos].
        pub fn set_cos<T: Into<crate::model::LogpushJobCos>>(mut self, v: T) -> Self {
            self.0.request.cos = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [cos][crate::model::CreateLogpushJobV2Request::cos].
        pub fn set_or_clear_cos<T: Into<crate::model::LogpushJobCos>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.cos = v.map(|x| x.into());
            self
        }

        /// Sets the value of [logdna][crate::model::CreateLogpushJobV2Request::logdna].
        pub fn set_logdna<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
            self.0.request.logdna = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [logdna][crate::model::CreateLogpushJobV2Request::logdna].
        pub fn set_or_clear_logdna<T: Into<serde_json::Value>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.logdna = v.map(|x| x.into());
            self
        }

        /// Sets the value of [ibmcl][crate::model::CreateLogpushJobV2Request::ibmcl].
        pub fn set_ibmcl<T: Into<crate::model::LogpushJobIbmcl>>(mut self, v: T) -> Self {
            self.0.request.ibmcl = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [ibmcl][crate::model::CreateLogpushJobV2Request::ibmcl].
        pub fn set_or_clear_ibmcl<T: Into<crate::model::LogpushJobIbmcl>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.ibmcl = v.map(|x| x.into());
            self
        }

        /// Sets the value of [ownership_challenge][crate::model::CreateLogpushJobV2Request::ownership_challenge].
        pub fn set_ownership_challenge<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.ownership_challenge = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [ownership_challenge][crate::model::CreateLogpushJobV2Request::ownership_challenge].
        pub fn set_or_clear_ownership_challenge<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.ownership_challenge = v.map(|x| x.into());
            self
        }

        /// Sets the value of [dataset][crate::model::CreateLogpushJobV2Request::dataset].
        pub fn set_dataset<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.dataset = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [dataset][crate::model::CreateLogpushJobV2Request::dataset].
        pub fn set_or_clear_dataset<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.dataset = v.map(|x| x.into());
            self
        }

        /// Sets the value of [frequency][crate::model::CreateLogpushJobV2Request::frequency].
        pub fn set_frequency<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.frequency = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [frequency][crate::model::CreateLogpushJobV2Request::frequency].
        pub fn set_or_clear_frequency<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.frequency = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLogpushJobV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::get_logpush_job_v2][crate::client::LogpushJobs::get_logpush_job_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::GetLogpushJobV2;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetLogpushJobV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetLogpushJobV2(RequestBuilder<crate::model::GetLogpushJobRequest>);

    impl GetLogpushJobV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogpushJobRequest>>(mut self, v: V) -> Self {
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>> {
            (*self.0.stub)
                .get_logpush_job_v2(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [job_id][crate::model::GetLogpushJobRequest::job_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_job_id<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogpushJobV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::update_logpush_job_v2][crate::client::LogpushJobs::update_logpush_job_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::UpdateLogpushJobV2;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateLogpushJobV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateLogpushJobV2(RequestBuilder<crate::model::UpdateLogpushJobV2Request>);

    impl UpdateLogpushJobV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLogpushJobV2Request>>(
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>> {
            (*self.0.stub)
                .update_logpush_job_v2(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [job_id][crate::model::UpdateLogpushJobV2Request::job_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_job_id<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }

        /// Sets the value of [enabled][crate::model::UpdateLogpushJobV2Request::enabled].
        pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.enabled = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [enabled][crate::model::UpdateLogpushJobV2Request::enabled].
        pub fn set_or_clear_enabled<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.enabled = v.map(|x| x.into());
            self
        }

        /// Sets the value of [logpull_options][crate::model::UpdateLogpushJobV2Request::logpull_options].
        pub fn set_logpull_options<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.logpull_options = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [logpull_options][crate::model::UpdateLogpushJobV2Request::logpull_options].
        pub fn set_or_clear_logpull_options<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.logpull_options = v.map(|x| x.into());
            self
        }

        /// Sets the value of [cos][crate::model::UpdateLogpushJobV2Request::cos].
        pub fn set_cos<T: Into<crate::model::LogpushJobCos>>(mut self, v: T) -> Self {
            self.0.request.cos = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [cos][crate::model::UpdateLogpushJobV2Request::cos].
        pub fn set_or_clear_cos<T: Into<crate::model::LogpushJobCos>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.cos = v.map(|x| x.into());
            self
        }

        /// Sets the value of [logdna][crate::model::UpdateLogpushJobV2Request::logdna].
        pub fn set_logdna<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
            self.0.request.logdna = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [logdna][crate::model::UpdateLogpushJobV2Request::logdna].
        pub fn set_or_clear_logdna<T: Into<serde_json::Value>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.logdna = v.map(|x| x.into());
            self
        }

        /// Sets the value of [ibmcl][crate::model::UpdateLogpushJobV2Request::ibmcl].
        pub fn set_ibmcl<T: Into<crate::model::LogpushJobIbmcl>>(mut self, v: T) -> Self {
            self.0.request.ibmcl = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [ibmcl][crate::model::UpdateLogpushJobV2Request::ibmcl].
        pub fn set_or_clear_ibmcl<T: Into<crate::model::LogpushJobIbmcl>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.ibmcl = v.map(|x| x.into());
            self
        }

        /// Sets the value of [ownership_challenge][crate::model::UpdateLogpushJobV2Request::ownership_challenge].
        pub fn set_ownership_challenge<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.ownership_challenge = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [ownership_challenge][crate::model::UpdateLogpushJobV2Request::ownership_challenge].
        pub fn set_or_clear_ownership_challenge<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.ownership_challenge = v.map(|x| x.into());
            self
        }

        /// Sets the value of [frequency][crate::model::UpdateLogpushJobV2Request::frequency].
        pub fn set_frequency<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.frequency = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [frequency][crate::model::UpdateLogpushJobV2Request::frequency].
        pub fn set_or_clear_frequency<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.frequency = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLogpushJobV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::delete_logpush_job_v2][crate::client::LogpushJobs::delete_logpush_job_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::DeleteLogpushJobV2;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteLogpushJobV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteLogpushJobV2(RequestBuilder<crate::model::DeleteLogpushJobRequest>);

    impl DeleteLogpushJobV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLogpushJobRequest>>(
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
        ) -> Result<gax::response::Response<gax::envelope::Envelope<serde_json::Value>>> {
            (*self.0.stub)
                .delete_logpush_job_v2(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [job_id][crate::model::DeleteLogpushJobRequest::job_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_job_id<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLogpushJobV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::get_logpush_ownership_v2][crate::client::LogpushJobs::get_logpush_ownership_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::GetLogpushOwnershipV2;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetLogpushOwnershipV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetLogpushOwnershipV2(RequestBuilder<crate::model::GetLogpushOwnershipV2Request>);

    impl GetLogpushOwnershipV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogpushOwnershipV2Request>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipChallenge>>,
        > {
            (*self.0.stub)
                .get_logpush_ownership_v2(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [cos][crate::model::GetLogpushOwnershipV2Request::cos].
        pub fn set_cos<T: Into<crate::model::LogpushJobCos>>(mut self, v: T) -> Self {
            self.0.request.cos = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [cos][crate::model::GetLogpushOwnershipV2Request::cos].
        pub fn set_or_clear_cos<T: Into<crate::model::LogpushJobCos>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.cos = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogpushOwnershipV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::validate_logpush_ownership_challenge_v2][crate::client::LogpushJobs::validate_logpush_ownership_challenge_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::ValidateLogpushOwnershipChallengeV2;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ValidateLogpushOwnershipChallengeV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ValidateLogpushOwnershipChallengeV2(
        RequestBuilder<crate::model::ValidateLogpushOwnershipChallengeV2Request>,
    );

    impl ValidateLogpushOwnershipChallengeV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ValidateLogpushOwnershipChallengeV2Request>>(
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
            gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipValidation>>,
        > {
            (*self.0.stub)
                .validate_logpush_ownership_challenge_v2(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [cos][crate::model::ValidateLogpushOwnershipChallengeV2Request::cos].
        pub fn set_cos<T: Into<crate::model::LogpushJobCos>>(mut self, v: T) -> Self {
            self.0.request.cos = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [cos][crate::model::ValidateLogpushOwnershipChallengeV2Request::cos].
        pub fn set_or_clear_cos<T: Into<crate::model::LogpushJobCos>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.cos = v.map(|x| x.into());
            self
        }

        /// Sets the value of [ownership_challenge][crate::model::ValidateLogpushOwnershipChallengeV2Request::ownership_challenge].
        ///
        /// This is a **required** field for requests.
        pub fn set_ownership_challenge<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.ownership_challenge = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [ownership_challenge][crate::model::ValidateLogpushOwnershipChallengeV2Request::ownership_challenge].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_ownership_challenge<T: Into<String>>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self {
            self.0.request.ownership_challenge = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ValidateLogpushOwnershipChallengeV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::list_fields_for_dataset_v2][crate::client::LogpushJobs::list_fields_for_dataset_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::ListFieldsForDatasetV2;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListFieldsForDatasetV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListFieldsForDatasetV2(RequestBuilder<crate::model::ListFieldsForDatasetRequest>);

    impl ListFieldsForDatasetV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFieldsForDatasetRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<std::collections::HashMap<String, String>>>,
        > {
            (*self.0.stub)
                .list_fields_for_dataset_v2(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListFieldsForDatasetV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::list_logpush_jobs_for_dataset_v2][crate::client::LogpushJobs::list_logpush_jobs_for_dataset_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v1::builder;
    /// use builder::logpush_jobs::ListLogpushJobsForDatasetV2;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListLogpushJobsForDatasetV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListLogpushJobsForDatasetV2(
        RequestBuilder<crate::model::ListLogpushJobsForDatasetRequest>,
    );

    impl ListLogpushJobsForDatasetV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogpushJobsForDatasetRequest>>(
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
            gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJobV2>>>,
        > {
            (*self.0.stub)
                .list_logpush_jobs_for_dataset_v2(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogpushJobsForDatasetV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
