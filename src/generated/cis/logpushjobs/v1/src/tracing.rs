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

use crate::Result;

/// Implements a [LogpushJobs](super::stub::LogpushJobs) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct LogpushJobs<T>
where
    T: super::stub::LogpushJobs + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> LogpushJobs<T>
where
    T: super::stub::LogpushJobs + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::LogpushJobs for LogpushJobs<T>
where
    T: super::stub::LogpushJobs + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "debug", ret)]
    async fn get_logpush_jobs(
        &self,
        req: crate::model::ListLogpushJobsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJob>>>> {
        self.inner.get_logpush_jobs(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_logpush_job(
        &self,
        req: crate::model::CreateLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>> {
        self.inner.create_logpush_job(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_logpush_job(
        &self,
        req: crate::model::GetLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>> {
        self.inner.get_logpush_job(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_logpush_job(
        &self,
        req: crate::model::UpdateLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>> {
        self.inner.update_logpush_job(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_logpush_job(
        &self,
        req: crate::model::DeleteLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<serde_json::Value>>> {
        self.inner.delete_logpush_job(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_fields_for_dataset(
        &self,
        req: crate::model::ListFieldsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<std::collections::HashMap<String, String>>>,
    > {
        self.inner.list_fields_for_dataset(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_logpush_jobs_for_dataset(
        &self,
        req: crate::model::ListLogpushJobsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJob>>>> {
        self.inner.list_logpush_jobs_for_dataset(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_logpush_ownership(
        &self,
        req: crate::model::GetLogpushOwnershipRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipChallenge>>,
    > {
        self.inner.get_logpush_ownership(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn validate_logpush_ownership_challenge(
        &self,
        req: crate::model::ValidateLogpushOwnershipChallengeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipValidation>>,
    > {
        self.inner.validate_logpush_ownership_challenge(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_logpush_jobs_v2(
        &self,
        req: crate::model::ListLogpushJobsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJobV2>>>> {
        self.inner.get_logpush_jobs_v2(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_logpush_job_v2(
        &self,
        req: crate::model::CreateLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>> {
        self.inner.create_logpush_job_v2(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_logpush_job_v2(
        &self,
        req: crate::model::GetLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>> {
        self.inner.get_logpush_job_v2(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_logpush_job_v2(
        &self,
        req: crate::model::UpdateLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>> {
        self.inner.update_logpush_job_v2(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_logpush_job_v2(
        &self,
        req: crate::model::DeleteLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<serde_json::Value>>> {
        self.inner.delete_logpush_job_v2(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_logpush_ownership_v2(
        &self,
        req: crate::model::GetLogpushOwnershipV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipChallenge>>,
    > {
        self.inner.get_logpush_ownership_v2(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn validate_logpush_ownership_challenge_v2(
        &self,
        req: crate::model::ValidateLogpushOwnershipChallengeV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipValidation>>,
    > {
        self.inner.validate_logpush_ownership_challenge_v2(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_fields_for_dataset_v2(
        &self,
        req: crate::model::ListFieldsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<std::collections::HashMap<String, String>>>,
    > {
        self.inner.list_fields_for_dataset_v2(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_logpush_jobs_for_dataset_v2(
        &self,
        req: crate::model::ListLogpushJobsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJobV2>>>> {
        self.inner.list_logpush_jobs_for_dataset_v2(req, options).await
    }
}
