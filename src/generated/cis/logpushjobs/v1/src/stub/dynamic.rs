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

/// A dyn-compatible, crate-private version of [super::LogpushJobs].
#[async_trait::async_trait]
pub trait LogpushJobs: std::fmt::Debug + Send + Sync {
    async fn get_logpush_jobs(
        &self,
        req: crate::model::ListLogpushJobsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJob>>>>;

    async fn create_logpush_job(
        &self,
        req: crate::model::CreateLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>>;

    async fn get_logpush_job(
        &self,
        req: crate::model::GetLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>>;

    async fn update_logpush_job(
        &self,
        req: crate::model::UpdateLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>>;

    async fn delete_logpush_job(
        &self,
        req: crate::model::DeleteLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<serde_json::Value>>>;

    async fn list_fields_for_dataset(
        &self,
        req: crate::model::ListFieldsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<std::collections::HashMap<String, String>>>>;

    async fn list_logpush_jobs_for_dataset(
        &self,
        req: crate::model::ListLogpushJobsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJob>>>>;

    async fn get_logpush_ownership(
        &self,
        req: crate::model::GetLogpushOwnershipRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipChallenge>>>;

    async fn validate_logpush_ownership_challenge(
        &self,
        req: crate::model::ValidateLogpushOwnershipChallengeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipValidation>>>;

    async fn get_logpush_jobs_v2(
        &self,
        req: crate::model::ListLogpushJobsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJobV2>>>>;

    async fn create_logpush_job_v2(
        &self,
        req: crate::model::CreateLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>>;

    async fn get_logpush_job_v2(
        &self,
        req: crate::model::GetLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>>;

    async fn update_logpush_job_v2(
        &self,
        req: crate::model::UpdateLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>>;

    async fn delete_logpush_job_v2(
        &self,
        req: crate::model::DeleteLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<serde_json::Value>>>;

    async fn get_logpush_ownership_v2(
        &self,
        req: crate::model::GetLogpushOwnershipV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipChallenge>>>;

    async fn validate_logpush_ownership_challenge_v2(
        &self,
        req: crate::model::ValidateLogpushOwnershipChallengeV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipValidation>>>;

    async fn list_fields_for_dataset_v2(
        &self,
        req: crate::model::ListFieldsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<std::collections::HashMap<String, String>>>>;

    async fn list_logpush_jobs_for_dataset_v2(
        &self,
        req: crate::model::ListLogpushJobsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJobV2>>>>;
}

/// All implementations of [super::LogpushJobs] also implement [LogpushJobs].
#[async_trait::async_trait]
impl<T: super::LogpushJobs> LogpushJobs for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_logpush_jobs(
        &self,
        req: crate::model::ListLogpushJobsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJob>>>,
    > {
        T::get_logpush_jobs(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_logpush_job(
        &self,
        req: crate::model::CreateLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>> {
        T::create_logpush_job(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_logpush_job(
        &self,
        req: crate::model::GetLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>> {
        T::get_logpush_job(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_logpush_job(
        &self,
        req: crate::model::UpdateLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>> {
        T::update_logpush_job(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_logpush_job(
        &self,
        req: crate::model::DeleteLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<serde_json::Value>>> {
        T::delete_logpush_job(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_fields_for_dataset(
        &self,
        req: crate::model::ListFieldsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<std::collections::HashMap<String, String>>>,
    > {
        T::list_fields_for_dataset(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_logpush_jobs_for_dataset(
        &self,
        req: crate::model::ListLogpushJobsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJob>>>,
    > {
        T::list_logpush_jobs_for_dataset(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_logpush_ownership(
        &self,
        req: crate::model::GetLogpushOwnershipRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipChallenge>>,
    > {
        T::get_logpush_ownership(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn validate_logpush_ownership_challenge(
        &self,
        req: crate::model::ValidateLogpushOwnershipChallengeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipValidation>>,
    > {
        T::validate_logpush_ownership_challenge(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_logpush_jobs_v2(
        &self,
        req: crate::model::ListLogpushJobsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJobV2>>>,
    > {
        T::get_logpush_jobs_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_logpush_job_v2(
        &self,
        req: crate::model::CreateLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>,
    > {
        T::create_logpush_job_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_logpush_job_v2(
        &self,
        req: crate::model::GetLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>,
    > {
        T::get_logpush_job_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_logpush_job_v2(
        &self,
        req: crate::model::UpdateLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>,
    > {
        T::update_logpush_job_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_logpush_job_v2(
        &self,
        req: crate::model::DeleteLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<serde_json::Value>>> {
        T::delete_logpush_job_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_logpush_ownership_v2(
        &self,
        req: crate::model::GetLogpushOwnershipV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipChallenge>>,
    > {
        T::get_logpush_ownership_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn validate_logpush_ownership_challenge_v2(
        &self,
        req: crate::model::ValidateLogpushOwnershipChallengeV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipValidation>>,
    > {
        T::validate_logpush_ownership_challenge_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_fields_for_dataset_v2(
        &self,
        req: crate::model::ListFieldsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<std::collections::HashMap<String, String>>>,
    > {
        T::list_fields_for_dataset_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_logpush_jobs_for_dataset_v2(
        &self,
        req: crate::model::ListLogpushJobsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJobV2>>>,
    > {
        T::list_logpush_jobs_for_dataset_v2(self, req, options).await
    }
}
