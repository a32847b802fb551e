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

//! The types used by the logpush jobs operations.
//!
//! The service has two versions of most operations. The `*_v2` operations
//! accept destinations other than Cloud Object Storage, such as IBM Log
//! Analysis (`logdna`) or IBM Cloud Logs (`ibmcl`).

/// The values for the logpush datasets.
pub mod dataset {
    pub const HTTP_REQUESTS: &str = "http_requests";
    pub const RANGE_EVENTS: &str = "range_events";
    pub const FIREWALL_EVENTS: &str = "firewall_events";
}

/// The values for the `frequency` of a logpush job.
pub mod frequency {
    /// Push logs in small batches, frequently.
    pub const HIGH: &str = "high";
    /// Push logs in large batches, less frequently.
    pub const LOW: &str = "low";
}

/// A logpush job pushing logs to Cloud Object Storage.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LogpushJob {
    /// The logpush job identifier.
    pub id: i64,

    /// The logpush job name.
    pub name: String,

    /// Whether the job is enabled.
    pub enabled: bool,

    /// The dataset pushed by this job, see [dataset].
    pub dataset: String,

    /// How often logs are pushed, see [frequency].
    pub frequency: String,

    /// The fields and timestamp format, as a URL query string.
    pub logpull_options: String,

    /// The destination, for example `cos://my-bucket/logs?region=us-south&instance-id=my-instance`.
    pub destination_conf: String,

    /// When the last push completed, in RFC 3339 format.
    pub last_complete: Option<String>,

    /// When the last push failed, in RFC 3339 format.
    pub last_error: Option<String>,

    /// The details of the last failure.
    pub error_message: Option<String>,
}

impl LogpushJob {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][LogpushJob::id].
    pub fn set_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][LogpushJob::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [enabled][LogpushJob::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = v.into();
        self
    }

    /// Sets the value of [dataset][LogpushJob::dataset].
    pub fn set_dataset<T: Into<String>>(mut self, v: T) -> Self {
        self.dataset = v.into();
        self
    }

    /// Sets the value of [frequency][LogpushJob::frequency].
    pub fn set_frequency<T: Into<String>>(mut self, v: T) -> Self {
        self.frequency = v.into();
        self
    }

    /// Sets the value of [logpull_options][LogpushJob::logpull_options].
    pub fn set_logpull_options<T: Into<String>>(mut self, v: T) -> Self {
        self.logpull_options = v.into();
        self
    }

    /// Sets the value of [destination_conf][LogpushJob::destination_conf].
    pub fn set_destination_conf<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_conf = v.into();
        self
    }

    /// Sets the value of [last_complete][LogpushJob::last_complete].
    pub fn set_last_complete<T: Into<String>>(mut self, v: T) -> Self {
        self.last_complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_complete][LogpushJob::last_complete].
    pub fn set_or_clear_last_complete<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.last_complete = v.map(|x| x.into());
        self
    }

    /// Sets the value of [last_error][LogpushJob::last_error].
    pub fn set_last_error<T: Into<String>>(mut self, v: T) -> Self {
        self.last_error = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_error][LogpushJob::last_error].
    pub fn set_or_clear_last_error<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.last_error = v.map(|x| x.into());
        self
    }

    /// Sets the value of [error_message][LogpushJob::error_message].
    pub fn set_error_message<T: Into<String>>(mut self, v: T) -> Self {
        self.error_message = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [error_message][LogpushJob::error_message].
    pub fn set_or_clear_error_message<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.error_message = v.map(|x| x.into());
        self
    }
}

/// A logpush job, as returned by the `*_v2` operations.
///
/// Exactly one of the destinations is set.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LogpushJobV2 {
    /// The logpush job identifier.
    pub id: i64,

    /// The logpush job name.
    pub name: String,

    /// Whether the job is enabled.
    pub enabled: bool,

    /// The dataset pushed by this job, see [dataset].
    pub dataset: String,

    /// How often logs are pushed, see [frequency].
    pub frequency: String,

    /// The fields and timestamp format, as a URL query string.
    pub logpull_options: String,

    /// The Cloud Object Storage destination.
    pub cos: Option<serde_json::Value>,

    /// The IBM Log Analysis destination.
    pub logdna: Option<serde_json::Value>,

    /// The IBM Cloud Logs destination.
    pub ibmcl: Option<serde_json::Value>,

    /// When the last push completed, in RFC 3339 format.
    pub last_complete: Option<String>,

    /// When the last push failed, in RFC 3339 format.
    pub last_error: Option<String>,

    /// The details of the last failure.
    pub error_message: Option<String>,
}

impl LogpushJobV2 {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][LogpushJobV2::id].
    pub fn set_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][LogpushJobV2::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [enabled][LogpushJobV2::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = v.into();
        self
    }

    /// Sets the value of [dataset][LogpushJobV2::dataset].
    pub fn set_dataset<T: Into<String>>(mut self, v: T) -> Self {
        self.dataset = v.into();
        self
    }

    /// Sets the value of [frequency][LogpushJobV2::frequency].
    pub fn set_frequency<T: Into<String>>(mut self, v: T) -> Self {
        self.frequency = v.into();
        self
    }

    /// Sets the value of [logpull_options][LogpushJobV2::logpull_options].
    pub fn set_logpull_options<T: Into<String>>(mut self, v: T) -> Self {
        self.logpull_options = v.into();
        self
    }

    /// Sets the value of [cos][LogpushJobV2::cos].
    pub fn set_cos<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.cos = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cos][LogpushJobV2::cos].
    pub fn set_or_clear_cos<T: Into<serde_json::Value>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.cos = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logdna][LogpushJobV2::logdna].
    pub fn set_logdna<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.logdna = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logdna][LogpushJobV2::logdna].
    pub fn set_or_clear_logdna<T: Into<serde_json::Value>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.logdna = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ibmcl][LogpushJobV2::ibmcl].
    pub fn set_ibmcl<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.ibmcl = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ibmcl][LogpushJobV2::ibmcl].
    pub fn set_or_clear_ibmcl<T: Into<serde_json::Value>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.ibmcl = v.map(|x| x.into());
        self
    }

    /// Sets the value of [last_complete][LogpushJobV2::last_complete].
    pub fn set_last_complete<T: Into<String>>(mut self, v: T) -> Self {
        self.last_complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_complete][LogpushJobV2::last_complete].
    pub fn set_or_clear_last_complete<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.last_complete = v.map(|x| x.into());
        self
    }

    /// Sets the value of [last_error][LogpushJobV2::last_error].
    pub fn set_last_error<T: Into<String>>(mut self, v: T) -> Self {
        self.last_error = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_error][LogpushJobV2::last_error].
    pub fn set_or_clear_last_error<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.last_error = v.map(|x| x.into());
        self
    }

    /// Sets the value of [error_message][LogpushJobV2::error_message].
    pub fn set_error_message<T: Into<String>>(mut self, v: T) -> Self {
        self.error_message = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [error_message][LogpushJobV2::error_message].
    pub fn set_or_clear_error_message<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.error_message = v.map(|x| x.into());
        self
    }
}

/// A Cloud Object Storage destination.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LogpushJobCos {
    pub bucket_name: Option<String>,

    /// The Cloud Object Storage instance identifier.
    pub id: Option<String>,

    pub region: Option<String>,

    /// The prefix of the objects created by the job.
    pub path: Option<String>,
}

impl LogpushJobCos {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bucket_name][LogpushJobCos::bucket_name].
    pub fn set_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bucket_name][LogpushJobCos::bucket_name].
    pub fn set_or_clear_bucket_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.bucket_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][LogpushJobCos::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][LogpushJobCos::id].
    pub fn set_or_clear_id<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [region][LogpushJobCos::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][LogpushJobCos::region].
    pub fn set_or_clear_region<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path][LogpushJobCos::path].
    pub fn set_path<T: Into<String>>(mut self, v: T) -> Self {
        self.path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path][LogpushJobCos::path].
    pub fn set_or_clear_path<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.path = v.map(|x| x.into());
        self
    }
}

/// An IBM Cloud Logs destination.
#[serde_with::skip_serializing_none]
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LogpushJobIbmcl {
    /// The IBM Cloud Logs instance identifier.
    pub instance_id: Option<String>,

    pub region: Option<String>,

    /// The API key used to write the logs.
    pub api_key: Option<String>,
}

impl LogpushJobIbmcl {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_id][LogpushJobIbmcl::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [instance_id][LogpushJobIbmcl::instance_id].
    pub fn set_or_clear_instance_id<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.instance_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [region][LogpushJobIbmcl::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][LogpushJobIbmcl::region].
    pub fn set_or_clear_region<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [api_key][LogpushJobIbmcl::api_key].
    pub fn set_api_key<T: Into<String>>(mut self, v: T) -> Self {
        self.api_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [api_key][LogpushJobIbmcl::api_key].
    pub fn set_or_clear_api_key<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.api_key = v.map(|x| x.into());
        self
    }
}

impl std::fmt::Debug for LogpushJobIbmcl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogpushJobIbmcl")
            .field("instance_id", &self.instance_id)
            .field("region", &self.region)
            .field("api_key", &self.api_key.as_ref().map(|_| "[censored]"))
            .finish()
    }
}

/// The result of requesting an ownership challenge.
///
/// The service writes the challenge to a file in the destination, the
/// application reads it and passes its contents in the
/// `ownership_challenge` field when creating the job.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct OwnershipChallenge {
    /// The name of the file containing the challenge.
    pub filename: String,

    pub valid: bool,

    pub message: String,
}

impl OwnershipChallenge {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [filename][OwnershipChallenge::filename].
    pub fn set_filename<T: Into<String>>(mut self, v: T) -> Self {
        self.filename = v.into();
        self
    }

    /// Sets the value of [valid][OwnershipChallenge::valid].
    pub fn set_valid<T: Into<bool>>(mut self, v: T) -> Self {
        self.valid = v.into();
        self
    }

    /// Sets the value of [message][OwnershipChallenge::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }
}

/// The result of validating an ownership challenge.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct OwnershipValidation {
    /// Whether the challenge is valid.
    pub valid: bool,
}

impl OwnershipValidation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [valid][OwnershipValidation::valid].
    pub fn set_valid<T: Into<bool>>(mut self, v: T) -> Self {
        self.valid = v.into();
        self
    }
}

/// The request for [get_logpush_jobs][crate::client::LogpushJobs::get_logpush_jobs] and its v2 version.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogpushJobsRequest {
}

impl ListLogpushJobsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// The request for [create_logpush_job][crate::client::LogpushJobs::create_logpush_job].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateLogpushJobRequest {
    /// The job name.
    pub name: Option<String>,

    /// Whether the job is enabled.
    pub enabled: Option<bool>,

    /// The fields and timestamp format, as a URL query string.
    pub logpull_options: Option<String>,

    /// The Cloud Object Storage destination.
    pub destination_conf: Option<String>,

    /// The ownership challenge for the destination.
    pub ownership_challenge: Option<String>,

    /// The dataset, one of the values in [dataset][crate::model::dataset].
    pub dataset: Option<String>,

    /// One of the values in [frequency][crate::model::frequency].
    pub frequency: Option<String>,
}

impl CreateLogpushJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][CreateLogpushJobRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][CreateLogpushJobRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled][CreateLogpushJobRequest::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][CreateLogpushJobRequest::enabled].
    pub fn set_or_clear_enabled<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logpull_options][CreateLogpushJobRequest::logpull_options].
    pub fn set_logpull_options<T: Into<String>>(mut self, v: T) -> Self {
        self.logpull_options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logpull_options][CreateLogpushJobRequest::logpull_options].
    pub fn set_or_clear_logpull_options<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.logpull_options = v.map(|x| x.into());
        self
    }

    /// Sets the value of [destination_conf][CreateLogpushJobRequest::destination_conf].
    pub fn set_destination_conf<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_conf = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [destination_conf][CreateLogpushJobRequest::destination_conf].
    pub fn set_or_clear_destination_conf<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.destination_conf = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ownership_challenge][CreateLogpushJobRequest::ownership_challenge].
    pub fn set_ownership_challenge<T: Into<String>>(mut self, v: T) -> Self {
        self.ownership_challenge = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ownership_challenge][CreateLogpushJobRequest::ownership_challenge].
    pub fn set_or_clear_ownership_challenge<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.ownership_challenge = v.map(|x| x.into());
        self
    }

    /// Sets the value of [dataset][CreateLogpushJobRequest::dataset].
    pub fn set_dataset<T: Into<String>>(mut self, v: T) -> Self {
        self.dataset = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [dataset][CreateLogpushJobRequest::dataset].
    pub fn set_or_clear_dataset<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.dataset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [frequency][CreateLogpushJobRequest::frequency].
    pub fn set_frequency<T: Into<String>>(mut self, v: T) -> Self {
        self.frequency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [frequency][CreateLogpushJobRequest::frequency].
    pub fn set_or_clear_frequency<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.frequency = v.map(|x| x.into());
        self
    }
}

/// The request for [get_logpush_job][crate::client::LogpushJobs::get_logpush_job] and its v2 version.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogpushJobRequest {
    /// The logpush job identifier.
    ///
    /// This is a **required** field for requests.
    pub job_id: i64,
}

impl GetLogpushJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [job_id][GetLogpushJobRequest::job_id].
    pub fn set_job_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.job_id = v.into();
        self
    }
}

/// The request for [update_logpush_job][crate::client::LogpushJobs::update_logpush_job].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateLogpushJobRequest {
    /// The logpush job identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub job_id: i64,

    /// Whether the job is enabled.
    pub enabled: Option<bool>,

    /// The fields and timestamp format, as a URL query string.
    pub logpull_options: Option<String>,

    /// The Cloud Object Storage destination.
    pub destination_conf: Option<String>,

    /// The ownership challenge for the destination.
    pub ownership_challenge: Option<String>,

    /// One of the values in [frequency][crate::model::frequency].
    pub frequency: Option<String>,
}

impl UpdateLogpushJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [job_id][UpdateLogpushJobRequest::job_id].
    pub fn set_job_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.job_id = v.into();
        self
    }

    /// Sets the value of [enabled][UpdateLogpushJobRequest::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][UpdateLogpushJobRequest::enabled].
    pub fn set_or_clear_enabled<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logpull_options][UpdateLogpushJobRequest::logpull_options].
    pub fn set_logpull_options<T: Into<String>>(mut self, v: T) -> Self {
        self.logpull_options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logpull_options][UpdateLogpushJobRequest::logpull_options].
    pub fn set_or_clear_logpull_options<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.logpull_options = v.map(|x| x.into());
        self
    }

    /// Sets the value of [destination_conf][UpdateLogpushJobRequest::destination_conf].
    pub fn set_destination_conf<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_conf = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [destination_conf][UpdateLogpushJobRequest::destination_conf].
    pub fn set_or_clear_destination_conf<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.destination_conf = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ownership_challenge][UpdateLogpushJobRequest::ownership_challenge].
    pub fn set_ownership_challenge<T: Into<String>>(mut self, v: T) -> Self {
        self.ownership_challenge = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ownership_challenge][UpdateLogpushJobRequest::ownership_challenge].
    pub fn set_or_clear_ownership_challenge<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.ownership_challenge = v.map(|x| x.into());
        self
    }

    /// Sets the value of [frequency][UpdateLogpushJobRequest::frequency].
    pub fn set_frequency<T: Into<String>>(mut self, v: T) -> Self {
        self.frequency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [frequency][UpdateLogpushJobRequest::frequency].
    pub fn set_or_clear_frequency<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.frequency = v.map(|x| x.into());
        self
    }
}

/// The request for [delete_logpush_job][crate::client::LogpushJobs::delete_logpush_job] and its v2 version.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLogpushJobRequest {
    /// The logpush job identifier.
    ///
    /// This is a **required** field for requests.
    pub job_id: i64,
}

impl DeleteLogpushJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [job_id][DeleteLogpushJobRequest::job_id].
    pub fn set_job_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.job_id = v.into();
        self
    }
}

/// The request for [list_fields_for_dataset][crate::client::LogpushJobs::list_fields_for_dataset] and its v2 version.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListFieldsForDatasetRequest {
}

impl ListFieldsForDatasetRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// The request for [list_logpush_jobs_for_dataset][crate::client::LogpushJobs::list_logpush_jobs_for_dataset] and its v2 version.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogpushJobsForDatasetRequest {
}

impl ListLogpushJobsForDatasetRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// The request for [get_logpush_ownership][crate::client::LogpushJobs::get_logpush_ownership].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct GetLogpushOwnershipRequest {
    /// The Cloud Object Storage destination.
    ///
    /// This is a **required** field for requests.
    pub destination_conf: Option<String>,
}

impl GetLogpushOwnershipRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [destination_conf][GetLogpushOwnershipRequest::destination_conf].
    pub fn set_destination_conf<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_conf = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [destination_conf][GetLogpushOwnershipRequest::destination_conf].
    pub fn set_or_clear_destination_conf<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.destination_conf = v.map(|x| x.into());
        self
    }
}

/// The request for [validate_logpush_ownership_challenge][crate::client::LogpushJobs::validate_logpush_ownership_challenge].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct ValidateLogpushOwnershipChallengeRequest {
    /// The Cloud Object Storage destination.
    ///
    /// This is a **required** field for requests.
    pub destination_conf: Option<String>,

    /// The contents of the challenge file.
    ///
    /// This is a **required** field for requests.
    pub ownership_challenge: Option<String>,
}

impl ValidateLogpushOwnershipChallengeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [destination_conf][ValidateLogpushOwnershipChallengeRequest::destination_conf].
    pub fn set_destination_conf<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_conf = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [destination_conf][ValidateLogpushOwnershipChallengeRequest::destination_conf].
    pub fn set_or_clear_destination_conf<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.destination_conf = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ownership_challenge][ValidateLogpushOwnershipChallengeRequest::ownership_challenge].
    pub fn set_ownership_challenge<T: Into<String>>(mut self, v: T) -> Self {
        self.ownership_challenge = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ownership_challenge][ValidateLogpushOwnershipChallengeRequest::ownership_challenge].
    pub fn set_or_clear_ownership_challenge<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.ownership_challenge = v.map(|x| x.into());
        self
    }
}

/// The request for [create_logpush_job_v2][crate::client::LogpushJobs::create_logpush_job_v2].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateLogpushJobV2Request {
    /// The job name.
    pub name: Option<String>,

    /// Whether the job is enabled.
    pub enabled: Option<bool>,

    /// The fields and timestamp format, as a URL query string.
    pub logpull_options: Option<String>,

    /// The Cloud Object Storage destination.
    pub cos: Option<LogpushJobCos>,

    /// The IBM Log Analysis destination.
    pub logdna: Option<serde_json::Value>,

    /// The IBM Cloud Logs destination.
    pub ibmcl: Option<LogpushJobIbmcl>,

    /// The ownership challenge for the destination.
    pub ownership_challenge: Option<String>,

    /// The dataset, one of the values in [dataset][crate::model::dataset].
    pub dataset: Option<String>,

    /// One of the values in [frequency][crate::model::frequency].
    pub frequency: Option<String>,
}

impl CreateLogpushJobV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][CreateLogpushJobV2Request::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][CreateLogpushJobV2Request::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled][CreateLogpushJobV2Request::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][CreateLogpushJobV2Request::enabled].
    pub fn set_or_clear_enabled<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logpull_options][CreateLogpushJobV2Request::logpull_options].
    pub fn set_logpull_options<T: Into<String>>(mut self, v: T) -> Self {
        self.logpull_options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logpull_options][CreateLogpushJobV2Request::logpull_options].
    pub fn set_or_clear_logpull_options<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.logpull_options = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cos][CreateLogpushJobV2Request::cos].
    pub fn set_cos<T: Into<LogpushJobCos>>(mut self, v: T) -> Self {
        self.cos = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cos][CreateLogpushJobV2Request::cos].
    pub fn set_or_clear_cos<T: Into<LogpushJobCos>>(mut self, v: std::option::Option<T>) -> Self {
        self.cos = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logdna][CreateLogpushJobV2Request::logdna].
    pub fn set_logdna<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.logdna = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logdna][CreateLogpushJobV2Request::logdna].
    pub fn set_or_clear_logdna<T: Into<serde_json::Value>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.logdna = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ibmcl][CreateLogpushJobV2Request::ibmcl].
    pub fn set_ibmcl<T: Into<LogpushJobIbmcl>>(mut self, v: T) -> Self {
        self.ibmcl = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ibmcl][CreateLogpushJobV2Request::ibmcl].
    pub fn set_or_clear_ibmcl<T: Into<LogpushJobIbmcl>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.ibmcl = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ownership_challenge][CreateLogpushJobV2Request::ownership_challenge].
    pub fn set_ownership_challenge<T: Into<String>>(mut self, v: T) -> Self {
        self.ownership_challenge = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ownership_challenge][CreateLogpushJobV2Request::ownership_challenge].
    pub fn set_or_clear_ownership_challenge<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.ownership_challenge = v.map(|x| x.into());
        self
    }

    /// Sets the value of [dataset][CreateLogpushJobV2Request::dataset].
    pub fn set_dataset<T: Into<String>>(mut self, v: T) -> Self {
        self.dataset = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [dataset][CreateLogpushJobV2Request::dataset].
    pub fn set_or_clear_dataset<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.dataset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [frequency][CreateLogpushJobV2Request::frequency].
    pub fn set_frequency<T: Into<String>>(mut self, v: T) -> Self {
        self.frequency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [frequency][CreateLogpushJobV2Request::frequency].
    pub fn set_or_clear_frequency<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.frequency = v.map(|x| x.into());
        self
    }
}

/// The request for [update_logpush_job_v2][crate::client::LogpushJobs::update_logpush_job_v2].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateLogpushJobV2Request {
    /// The logpush job identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub job_id: i64,

    /// Whether the job is enabled.
    pub enabled: Option<bool>,

    /// The fields and timestamp format, as a URL query string.
    pub logpull_options: Option<String>,

    /// The Cloud Object Storage destination.
    pub cos: Option<LogpushJobCos>,

    /// The IBM Log Analysis destination.
    pub logdna: Option<serde_json::Value>,

    /// The IBM Cloud Logs destination.
    pub ibmcl: Option<LogpushJobIbmcl>,

    /// The ownership challenge for the destination.
    pub ownership_challenge: Option<String>,

    /// One of the values in [frequency][crate::model::frequency].
    pub frequency: Option<String>,
}

impl UpdateLogpushJobV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [job_id][UpdateLogpushJobV2Request::job_id].
    pub fn set_job_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.job_id = v.into();
        self
    }

    /// Sets the value of [enabled][UpdateLogpushJobV2Request::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][UpdateLogpushJobV2Request::enabled].
    pub fn set_or_clear_enabled<T: Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logpull_options][UpdateLogpushJobV2Request::logpull_options].
    pub fn set_logpull_options<T: Into<String>>(mut self, v: T) -> Self {
        self.logpull_options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logpull_options][UpdateLogpushJobV2Request::logpull_options].
    pub fn set_or_clear_logpull_options<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.logpull_options = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cos][UpdateLogpushJobV2Request::cos].
    pub fn set_cos<T: Into<LogpushJobCos>>(mut self, v: T) -> Self {
        self.cos = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cos][UpdateLogpushJobV2Request::cos].
    pub fn set_or_clear_cos<T: Into<LogpushJobCos>>(mut self, v: std::option::Option<T>) -> Self {
        self.cos = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logdna][UpdateLogpushJobV2Request::logdna].
    pub fn set_logdna<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.logdna = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logdna][UpdateLogpushJobV2Request::logdna].
    pub fn set_or_clear_logdna<T: Into<serde_json::Value>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.logdna = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ibmcl][UpdateLogpushJobV2Request::ibmcl].
    pub fn set_ibmcl<T: Into<LogpushJobIbmcl>>(mut self, v: T) -> Self {
        self.ibmcl = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ibmcl][UpdateLogpushJobV2Request::ibmcl].
    pub fn set_or_clear_ibmcl<T: Into<LogpushJobIbmcl>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.ibmcl = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ownership_challenge][UpdateLogpushJobV2Request::ownership_challenge].
    pub fn set_ownership_challenge<T: Into<String>>(mut self, v: T) -> Self {
        self.ownership_challenge = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ownership_challenge][UpdateLogpushJobV2Request::ownership_challenge].
    pub fn set_or_clear_ownership_challenge<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.ownership_challenge = v.map(|x| x.into());
        self
    }

    /// Sets the value of [frequency][UpdateLogpushJobV2Request::frequency].
    pub fn set_frequency<T: Into<String>>(mut self, v: T) -> Self {
        self.frequency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [frequency][UpdateLogpushJobV2Request::frequency].
    pub fn set_or_clear_frequency<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.frequency = v.map(|x| x.into());
        self
    }
}

/// The request for [get_logpush_ownership_v2][crate::client::LogpushJobs::get_logpush_ownership_v2].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct GetLogpushOwnershipV2Request {
    /// The Cloud Object Storage destination.
    pub cos: Option<LogpushJobCos>,
}

impl GetLogpushOwnershipV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cos][GetLogpushOwnershipV2Request::cos].
    pub fn set_cos<T: Into<LogpushJobCos>>(mut self, v: T) -> Self {
        self.cos = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cos][GetLogpushOwnershipV2Request::cos].
    pub fn set_or_clear_cos<T: Into<LogpushJobCos>>(mut self, v: std::option::Option<T>) -> Self {
        self.cos = v.map(|x| x.into());
        self
    }
}

/// The request for [validate_logpush_ownership_challenge_v2][crate::client::LogpushJobs::validate_logpush_ownership_challenge_v2].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct ValidateLogpushOwnershipChallengeV2Request {
    /// The Cloud Object Storage destination.
    pub cos: Option<LogpushJobCos>,

    /// The contents of the challenge file.
    ///
    /// This is a **required** field for requests.
    pub ownership_challenge: Option<String>,
}

impl ValidateLogpushOwnershipChallengeV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cos][ValidateLogpushOwnershipChallengeV2Request::cos].
    pub fn set_cos<T: Into<LogpushJobCos>>(mut self, v: T) -> Self {
        self.cos = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cos][ValidateLogpushOwnershipChallengeV2Request::cos].
    pub fn set_or_clear_cos<T: Into<LogpushJobCos>>(mut self, v: std::option::Option<T>) -> Self {
        self.cos = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ownership_challenge][ValidateLogpushOwnershipChallengeV2Request::ownership_challenge].
    pub fn set_ownership_challenge<T: Into<String>>(mut self, v: T) -> Self {
        self.ownership_challenge = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ownership_challenge][ValidateLogpushOwnershipChallengeV2Request::ownership_challenge].
    pub fn set_or_clear_ownership_challenge<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.ownership_challenge = v.map(|x| x.into());
        self
    }
}
