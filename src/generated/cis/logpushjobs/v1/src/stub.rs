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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::LogpushJobs].
///
/// Application developers may need to implement this trait to mock
/// `client::LogpushJobs`.  In other use-cases, application developers only
/// use `client::LogpushJobs` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait LogpushJobs: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::LogpushJobs::get_logpush_jobs].
    fn get_logpush_jobs(
        &self,
        _req: crate::model::ListLogpushJobsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJob>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::create_logpush_job].
    fn create_logpush_job(
        &self,
        _req: crate::model::CreateLogpushJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::get_logpush_job].
    fn get_logpush_job(
        &self,
        _req: crate::model::GetLogpushJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::update_logpush_job].
    fn update_logpush_job(
        &self,
        _req: crate::model::UpdateLogpushJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::delete_logpush_job].
    fn delete_logpush_job(
        &self,
        _req: crate::model::DeleteLogpushJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<serde_json::Value>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::list_fields_for_dataset].
    fn list_fields_for_dataset(
        &self,
        _req: crate::model::ListFieldsForDatasetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<std::collections::HashMap<String, String>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::list_logpush_jobs_for_dataset].
    fn list_logpush_jobs_for_dataset(
        &self,
        _req: crate::model::ListLogpushJobsForDatasetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJob>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::get_logpush_ownership].
    fn get_logpush_ownership(
        &self,
        _req: crate::model::GetLogpushOwnershipRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipChallenge>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::validate_logpush_ownership_challenge].
    fn validate_logpush_ownership_challenge(
        &self,
        _req: crate::model::ValidateLogpushOwnershipChallengeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipValidation>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::get_logpush_jobs_v2].
    fn get_logpush_jobs_v2(
        &self,
        _req: crate::model::ListLogpushJobsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJobV2>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::create_logpush_job_v2].
    fn create_logpush_job_v2(
        &self,
        _req: crate::model::CreateLogpushJobV2Request,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::get_logpush_job_v2].
    fn get_logpush_job_v2(
        &self,
        _req: crate::model::GetLogpushJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::update_logpush_job_v2].
    fn update_logpush_job_v2(
        &self,
        _req: crate::model::UpdateLogpushJobV2Request,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::delete_logpush_job_v2].
    fn delete_logpush_job_v2(
        &self,
        _req: crate::model::DeleteLogpushJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<serde_json::Value>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::get_logpush_ownership_v2].
    fn get_logpush_ownership_v2(
        &self,
        _req: crate::model::GetLogpushOwnershipV2Request,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipChallenge>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::validate_logpush_ownership_challenge_v2].
    fn validate_logpush_ownership_challenge_v2(
        &self,
        _req: crate::model::ValidateLogpushOwnershipChallengeV2Request,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipValidation>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::list_fields_for_dataset_v2].
    fn list_fields_for_dataset_v2(
        &self,
        _req: crate::model::ListFieldsForDatasetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<std::collections::HashMap<String, String>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogpushJobs::list_logpush_jobs_for_dataset_v2].
    fn list_logpush_jobs_for_dataset_v2(
        &self,
        _req: crate::model::ListLogpushJobsForDatasetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJobV2>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
