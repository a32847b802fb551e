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

/// The identity of a [LogpushJobs] client.
///
/// These values are set when the client is created and are used in the
/// path or query of every request. They cannot be changed afterwards, create
/// a new client to use different values.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Identity {
    /// Full URL-encoded CRN of the service instance.
    pub crn: String,

    /// The zone identifier.
    pub zone_id: String,

    /// The dataset used by the per-dataset operations, see [dataset][crate::model::dataset].
    pub dataset: String,
}

impl Identity {
    /// Creates a new identity.
    pub fn new(
        crn: impl Into<String>,
        zone_id: impl Into<String>,
        dataset: impl Into<String>,
    ) -> Self {
        Self {
            crn: crn.into(),
            zone_id: zone_id.into(),
            dataset: dataset.into(),
        }
    }

    /// Sets the value of [crn][Identity::crn].
    pub fn set_crn<T: Into<String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_id][Identity::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [dataset][Identity::dataset].
    pub fn set_dataset<T: Into<String>>(mut self, v: T) -> Self {
        self.dataset = v.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        gax::path_parameter::validate(&[
            ("crn", &self.crn),
            ("zone_id", &self.zone_id),
            ("dataset", &self.dataset),
        ])
    }
}

/// Implements a client for the Logpush Jobs API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
/// let client = LogpushJobs::builder("my-crn", "my-zone-id", "http_requests").build().await?;
/// // use `client` to make requests to the Logpush Jobs API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Creates and manages the logpush jobs of a zone, and validates the
/// ownership of their destinations. The client identity includes the dataset
/// used by the per-dataset operations.
///
/// # Configuration
///
/// To configure `LogpushJobs` use the `with_*` methods in the type returned
/// by [builder()][LogpushJobs::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://api.cis.cloud.ibm.com`). Applications using private endpoints may want to
///   override this default.
/// * [with_credentials()]: by default this client loads the credentials from
///   the external configuration, using `logpush_jobs_api` as the service
///   name. Applications using custom authentication may need to override this
///   default.
///
/// [with_endpoint()]: super::builder::logpush_jobs::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::logpush_jobs::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `LogpushJobs` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `LogpushJobs` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally. Clones share the retry configuration
/// changed by [enable_retries()][LogpushJobs::enable_retries].
#[derive(Clone, Debug)]
pub struct LogpushJobs {
    inner: std::sync::Arc<dyn super::stub::dynamic::LogpushJobs>,
    identity: Identity,
    service_url: String,
    retry_switch: gax::retry_policy::RetrySwitch,
}

impl LogpushJobs {
    /// Returns a builder for [LogpushJobs].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// let client = LogpushJobs::builder("my-crn", "my-zone-id", "http_requests").build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder(
        crn: impl Into<String>,
        zone_id: impl Into<String>,
        dataset: impl Into<String>,
    ) -> super::builder::logpush_jobs::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::logpush_jobs::client::Factory {
            identity: Identity::new(crn, zone_id, dataset),
        })
    }

    /// Creates a new client using the default service URL and the given
    /// credentials.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// use auth::credentials::bearer_token;
    /// # fn sample() -> anyhow::Result<()> {
    /// let credentials = bearer_token::Builder::new("my-access-token").build()?;
    /// let client = LogpushJobs::new("my-crn", "my-zone-id", "http_requests", credentials)?;
    /// # Ok(()) }
    /// ```
    pub fn new(
        crn: impl Into<String>,
        zone_id: impl Into<String>,
        dataset: impl Into<String>,
        credentials: gaxi::options::Credentials,
    ) -> gax::client_builder::Result<Self> {
        let mut config = gaxi::options::ClientConfig::default();
        config.cred = Some(credentials);
        config.endpoint = Some(crate::DEFAULT_SERVICE_URL.to_string());
        Self::with_config(Identity::new(crn, zone_id, dataset), config)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(identity: Identity, stub: T) -> Self
    where
        T: super::stub::LogpushJobs + 'static,
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
        let transport = super::transport::LogpushJobs::new(config, identity.clone())?;
        let service_url = transport.service_url().to_string();
        let retry_switch = transport.retry_switch();
        let inner: std::sync::Arc<dyn super::stub::dynamic::LogpushJobs> = if tracing {
            std::sync::Arc::new(super::tracing::LogpushJobs::new(transport))
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

    /// The zone identifier.
    pub fn zone_id(&self) -> &str {
        &self.identity.zone_id
    }

    /// The dataset used by the per-dataset operations, see [dataset][crate::model::dataset].
    pub fn dataset(&self) -> &str {
        &self.identity.dataset
    }

    /// Enables automatic retries for all the requests made by this client and
    /// its clones.
    ///
    /// `max_retries` defaults to 4 and `max_retry_interval` to 30 seconds.
    /// Retry policies set on a request take precedence.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// # use std::time::Duration;
    /// fn configure(client: &LogpushJobs) {
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

    /// Returns true if [enable_retries()][LogpushJobs::enable_retries] is in
    /// effect.
    pub fn retries_enabled(&self) -> bool {
        self.retry_switch.is_enabled()
    }

    /// Lists the logpush jobs of the zone.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     let response = client.get_logpush_jobs().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_logpush_jobs(&self) -> super::builder::logpush_jobs::GetLogpushJobs {
        super::builder::logpush_jobs::GetLogpushJobs::new(self.inner.clone())
    }

    /// Creates a logpush job.
    ///
    /// The destination must be validated first, see
    /// [get_logpush_ownership()][Self::get_logpush_ownership].
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     use ibm_cloud_networking_logpush_jobs_v1::model::{dataset, frequency};
    ///     let response = client
    ///         .create_logpush_job()
    ///         .set_name("my-job")
    ///         .set_enabled(true)
    ///         .set_destination_conf("cos://my-bucket/logs?region=us-south&instance-id=my-instance")
    ///         .set_ownership_challenge("my-challenge")
    ///         .set_dataset(dataset::HTTP_REQUESTS)
    ///         .set_frequency(frequency::LOW)
    ///         .send()
    ///         .await?;
    ///     println!("job {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn create_logpush_job(&self) -> super::builder::logpush_jobs::CreateLogpushJob {
        super::builder::logpush_jobs::CreateLogpushJob::new(self.inner.clone())
    }

    /// Gets a logpush job.
    ///
    /// # Parameters
    /// * `job_id` - the logpush job identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     let response = client.get_logpush_job(42).send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_logpush_job(&self, job_id: i64) -> super::builder::logpush_jobs::GetLogpushJob {
        super::builder::logpush_jobs::GetLogpushJob::new(self.inner.clone()).set_job_id(job_id)
    }

    /// Changes a logpush job.
    ///
    /// # Parameters
    /// * `job_id` - the logpush job identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     let response = client
    ///         .update_logpush_job(42)
    ///         .set_enabled(false)
    ///         .send()
    ///         .await?;
    ///     println!("job {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn update_logpush_job(
        &self,
        job_id: i64,
    ) -> super::builder::logpush_jobs::UpdateLogpushJob {
        super::builder::logpush_jobs::UpdateLogpushJob::new(self.inner.clone()).set_job_id(job_id)
    }

    /// Deletes a logpush job.
    ///
    /// # Parameters
    /// * `job_id` - the logpush job identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     let response = client.delete_logpush_job(42).send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_logpush_job(
        &self,
        job_id: i64,
    ) -> super::builder::logpush_jobs::DeleteLogpushJob {
        super::builder::logpush_jobs::DeleteLogpushJob::new(self.inner.clone()).set_job_id(job_id)
    }

    /// Lists the fields available in the client's dataset.
    ///
    /// The result maps each field name to its description.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     let response = client.list_fields_for_dataset().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_fields_for_dataset(&self) -> super::builder::logpush_jobs::ListFieldsForDataset {
        super::builder::logpush_jobs::ListFieldsForDataset::new(self.inner.clone())
    }

    /// Lists the logpush jobs pushing the client's dataset.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     let response = client.list_logpush_jobs_for_dataset().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_logpush_jobs_for_dataset(
        &self,
    ) -> super::builder::logpush_jobs::ListLogpushJobsForDataset {
        super::builder::logpush_jobs::ListLogpushJobsForDataset::new(self.inner.clone())
    }

    /// Requests an ownership challenge for a destination.
    ///
    /// The service writes the challenge to a file in the destination.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     let response = client
    ///         .get_logpush_ownership()
    ///         .set_destination_conf("cos://my-bucket/logs?region=us-south&instance-id=my-instance")
    ///         .send()
    ///         .await?;
    ///     println!("challenge {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn get_logpush_ownership(&self) -> super::builder::logpush_jobs::GetLogpushOwnership {
        super::builder::logpush_jobs::GetLogpushOwnership::new(self.inner.clone())
    }

    /// Validates the ownership challenge of a destination.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     let response = client
    ///         .validate_logpush_ownership_challenge()
    ///         .set_destination_conf("cos://my-bucket/logs?region=us-south&instance-id=my-instance")
    ///         .set_ownership_challenge("my-challenge")
    ///         .send()
    ///         .await?;
    ///     println!("validation {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn validate_logpush_ownership_challenge(
        &self,
    ) -> super::builder::logpush_jobs::ValidateLogpushOwnershipChallenge {
        super::builder::logpush_jobs::ValidateLogpushOwnershipChallenge::new(self.inner.clone())
    }

    /// Lists the logpush jobs of the zone, with any destination.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     let response = client.get_logpush_jobs_v2().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_logpush_jobs_v2(&self) -> super::builder::logpush_jobs::GetLogpushJobsV2 {
        super::builder::logpush_jobs::GetLogpushJobsV2::new(self.inner.clone())
    }

    /// Creates a logpush job with any destination.
    ///
    /// Set exactly one of `cos`, `logdna` or `ibmcl`.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     use ibm_cloud_networking_logpush_jobs_v1::model::{dataset, LogpushJobIbmcl};
    ///     let ibmcl = LogpushJobIbmcl::new()
    ///         .set_instance_id("my-logs-instance")
    ///         .set_region("us-south")
    ///         .set_api_key("my-api-key");
    ///     let response = client
    ///         .create_logpush_job_v2()
    ///         .set_name("my-job")
    ///         .set_ibmcl(ibmcl)
    ///         .set_dataset(dataset::FIREWALL_EVENTS)
    ///         .send()
    ///         .await?;
    ///     println!("job {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn create_logpush_job_v2(&self) -> super::builder::logpush_jobs::CreateLogpushJobV2 {
        super::builder::logpush_jobs::CreateLogpushJobV2::new(self.inner.clone())
    }

    /// Gets a logpush job with any destination.
    ///
    /// # Parameters
    /// * `job_id` - the logpush job identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     let response = client.get_logpush_job_v2(42).send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_logpush_job_v2(&self, job_id: i64) -> super::builder::logpush_jobs::GetLogpushJobV2 {
        super::builder::logpush_jobs::GetLogpushJobV2::new(self.inner.clone()).set_job_id(job_id)
    }

    /// Changes a logpush job with any destination.
    ///
    /// # Parameters
    /// * `job_id` - the logpush job identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     let response = client.update_logpush_job_v2(42).send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn update_logpush_job_v2(
        &self,
        job_id: i64,
    ) -> super::builder::logpush_jobs::UpdateLogpushJobV2 {
        super::builder::logpush_jobs::UpdateLogpushJobV2::new(self.inner.clone()).set_job_id(job_id)
    }

    /// Deletes a logpush job.
    ///
    /// # Parameters
    /// * `job_id` - the logpush job identifier.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     let response = client.delete_logpush_job_v2(42).send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_logpush_job_v2(
        &self,
        job_id: i64,
    ) -> super::builder::logpush_jobs::DeleteLogpushJobV2 {
        super::builder::logpush_jobs::DeleteLogpushJobV2::new(self.inner.clone()).set_job_id(job_id)
    }

    /// Requests an ownership challenge for a Cloud Object Storage destination.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     use ibm_cloud_networking_logpush_jobs_v1::model::LogpushJobCos;
    ///     let cos = LogpushJobCos::new()
    ///         .set_bucket_name("my-bucket")
    ///         .set_id("my-cos-instance")
    ///         .set_region("us-south");
    ///     let response = client.get_logpush_ownership_v2().set_cos(cos).send().await?;
    ///     println!("challenge {:?}", response.body().result);
    ///     Ok(())
    /// }
    /// ```
    pub fn get_logpush_ownership_v2(&self) -> super::builder::logpush_jobs::GetLogpushOwnershipV2 {
        super::builder::logpush_jobs::GetLogpushOwnershipV2::new(self.inner.clone())
    }

    /// Validates the ownership challenge of a Cloud Object Storage destination.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     let response = client.validate_logpush_ownership_challenge_v2().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn validate_logpush_ownership_challenge_v2(
        &self,
    ) -> super::builder::logpush_jobs::ValidateLogpushOwnershipChallengeV2 {
        super::builder::logpush_jobs::ValidateLogpushOwnershipChallengeV2::new(self.inner.clone())
    }

    /// Lists the fields available in the client's dataset.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     let response = client.list_fields_for_dataset_v2().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_fields_for_dataset_v2(
        &self,
    ) -> super::builder::logpush_jobs::ListFieldsForDatasetV2 {
        super::builder::logpush_jobs::ListFieldsForDatasetV2::new(self.inner.clone())
    }

    /// Lists the logpush jobs pushing the client's dataset, with any destination.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    /// async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    ///     let response = client.list_logpush_jobs_for_dataset_v2().send().await?;
    ///     println!("response {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_logpush_jobs_for_dataset_v2(
        &self,
    ) -> super::builder::logpush_jobs::ListLogpushJobsForDatasetV2 {
        super::builder::logpush_jobs::ListLogpushJobsForDatasetV2::new(self.inner.clone())
    }
}
