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
use gaxi::http::{Body, ReqwestClient};
use reqwest::Method;

/// Implements [LogpushJobs](super::stub::LogpushJobs) using a [ReqwestClient].
#[derive(Clone)]
pub struct LogpushJobs {
    inner: ReqwestClient,
    identity: crate::client::Identity,
}

impl std::fmt::Debug for LogpushJobs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("LogpushJobs")
            .field("inner", &self.inner)
            .field("identity", &self.identity)
            .finish()
    }
}

impl LogpushJobs {
    pub fn new(
        config: gaxi::options::ClientConfig,
        identity: crate::client::Identity,
    ) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(
            config,
            &crate::info::CLIENT_INFO,
            crate::DEFAULT_SERVICE_URL,
            crate::DEFAULT_SERVICE_NAME,
        )?;
        Ok(Self { inner, identity })
    }

    pub(crate) fn service_url(&self) -> &str {
        self.inner.endpoint()
    }

    pub(crate) fn retry_switch(&self) -> gax::retry_policy::RetrySwitch {
        self.inner.retry_switch().clone()
    }
}

impl super::stub::LogpushJobs for LogpushJobs {
    async fn get_logpush_jobs(
        &self,
        _req: crate::model::ListLogpushJobsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJob>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v1/{}/zones/{}/logpush/jobs",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn create_logpush_job(
        &self,
        req: crate::model::CreateLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/logpush/jobs",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
        );
        let builder = self.inner.builder(Method::POST, path);
        self.inner.execute(builder, body, options).await
    }

    async fn get_logpush_job(
        &self,
        req: crate::model::GetLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("job_id", &req.job_id)])?;
        let path = format!(
            "/v1/{}/zones/{}/logpush/jobs/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
            gaxi::path_parameter::encode(&req.job_id.to_string()),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_logpush_job(
        &self,
        req: crate::model::UpdateLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJob>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PUT),
        );
        gax::path_parameter::validate(&[("job_id", &req.job_id)])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/logpush/jobs/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
            gaxi::path_parameter::encode(&req.job_id.to_string()),
        );
        let builder = self.inner.builder(Method::PUT, path);
        self.inner.execute(builder, body, options).await
    }

    async fn delete_logpush_job(
        &self,
        req: crate::model::DeleteLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<serde_json::Value>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::DELETE),
        );
        gax::path_parameter::validate(&[("job_id", &req.job_id)])?;
        let path = format!(
            "/v1/{}/zones/{}/logpush/jobs/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
            gaxi::path_parameter::encode(&req.job_id.to_string()),
        );
        let builder = self.inner.builder(Method::DELETE, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn list_fields_for_dataset(
        &self,
        _req: crate::model::ListFieldsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<std::collections::HashMap<String, String>>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v1/{}/zones/{}/logpush/datasets/{}/fields",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
            gaxi::path_parameter::encode(&self.identity.dataset),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn list_logpush_jobs_for_dataset(
        &self,
        _req: crate::model::ListLogpushJobsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJob>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v1/{}/zones/{}/logpush/datasets/{}/jobs",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
            gaxi::path_parameter::encode(&self.identity.dataset),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn get_logpush_ownership(
        &self,
        req: crate::model::GetLogpushOwnershipRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipChallenge>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        gax::path_parameter::validate(&[("destination_conf", &req.destination_conf)])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/logpush/ownership",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
        );
        let builder = self.inner.builder(Method::POST, path);
        self.inner.execute(builder, body, options).await
    }

    async fn validate_logpush_ownership_challenge(
        &self,
        req: crate::model::ValidateLogpushOwnershipChallengeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipValidation>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        gax::path_parameter::validate(&[
            ("destination_conf", &req.destination_conf),
            ("ownership_challenge", &req.ownership_challenge),
        ])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/v1/{}/zones/{}/logpush/ownership/validate",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
        );
        let builder = self.inner.builder(Method::POST, path);
        self.inner.execute(builder, body, options).await
    }

    async fn get_logpush_jobs_v2(
        &self,
        _req: crate::model::ListLogpushJobsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJobV2>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v2/{}/zones/{}/logpush/jobs",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn create_logpush_job_v2(
        &self,
        req: crate::model::CreateLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        let body = Body::json(&req)?;
        let path = format!(
            "/v2/{}/zones/{}/logpush/jobs",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
        );
        let builder = self.inner.builder(Method::POST, path);
        self.inner.execute(builder, body, options).await
    }

    async fn get_logpush_job_v2(
        &self,
        req: crate::model::GetLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        gax::path_parameter::validate(&[("job_id", &req.job_id)])?;
        let path = format!(
            "/v2/{}/zones/{}/logpush/jobs/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
            gaxi::path_parameter::encode(&req.job_id.to_string()),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn update_logpush_job_v2(
        &self,
        req: crate::model::UpdateLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::LogpushJobV2>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::PUT),
        );
        gax::path_parameter::validate(&[("job_id", &req.job_id)])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/v2/{}/zones/{}/logpush/jobs/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
            gaxi::path_parameter::encode(&req.job_id.to_string()),
        );
        let builder = self.inner.builder(Method::PUT, path);
        self.inner.execute(builder, body, options).await
    }

    async fn delete_logpush_job_v2(
        &self,
        req: crate::model::DeleteLogpushJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<serde_json::Value>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::DELETE),
        );
        gax::path_parameter::validate(&[("job_id", &req.job_id)])?;
        let path = format!(
            "/v2/{}/zones/{}/logpush/jobs/{}",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
            gaxi::path_parameter::encode(&req.job_id.to_string()),
        );
        let builder = self.inner.builder(Method::DELETE, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn get_logpush_ownership_v2(
        &self,
        req: crate::model::GetLogpushOwnershipV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipChallenge>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        let body = Body::json(&req)?;
        let path = format!(
            "/v2/{}/zones/{}/logpush/ownership",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
        );
        let builder = self.inner.builder(Method::POST, path);
        self.inner.execute(builder, body, options).await
    }

    async fn validate_logpush_ownership_challenge_v2(
        &self,
        req: crate::model::ValidateLogpushOwnershipChallengeV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::OwnershipValidation>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::POST),
        );
        gax::path_parameter::validate(&[("ownership_challenge", &req.ownership_challenge)])?;
        let body = Body::json(&req)?;
        let path = format!(
            "/v2/{}/zones/{}/logpush/ownership/validate",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
        );
        let builder = self.inner.builder(Method::POST, path);
        self.inner.execute(builder, body, options).await
    }

    async fn list_fields_for_dataset_v2(
        &self,
        _req: crate::model::ListFieldsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<std::collections::HashMap<String, String>>>,
    > {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v2/{}/zones/{}/logpush/datasets/{}/fields",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
            gaxi::path_parameter::encode(&self.identity.dataset),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }

    async fn list_logpush_jobs_for_dataset_v2(
        &self,
        _req: crate::model::ListLogpushJobsForDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::LogpushJobV2>>>> {
        let options = gax::options::internal::set_default_idempotency(
            options,
            gaxi::http::default_idempotency(&Method::GET),
        );
        let path = format!(
            "/v2/{}/zones/{}/logpush/datasets/{}/jobs",
            gaxi::path_parameter::encode(&self.identity.crn),
            gaxi::path_parameter::encode(&self.identity.zone_id),
            gaxi::path_parameter::encode(&self.identity.dataset),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, Body::Empty, options).await
    }
}
