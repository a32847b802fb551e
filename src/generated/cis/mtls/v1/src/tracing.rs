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

/// Implements a [Mtls](super::stub::Mtls) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Mtls<T>
where
    T: super::stub::Mtls + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Mtls<T>
where
    T: super::stub::Mtls + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::Mtls for Mtls<T>
where
    T: super::stub::Mtls + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "debug", ret)]
    async fn list_access_certificates(
        &self,
        req: crate::model::ListAccessCertificatesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertificate>>>,
    > {
        self.inner.list_access_certificates(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_access_certificate(
        &self,
        req: crate::model::CreateAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>> {
        self.inner.create_access_certificate(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_access_certificate(
        &self,
        req: crate::model::GetAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>> {
        self.inner.get_access_certificate(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_access_certificate(
        &self,
        req: crate::model::UpdateAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>> {
        self.inner.update_access_certificate(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_access_certificate(
        &self,
        req: crate::model::DeleteAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>> {
        self.inner.delete_access_certificate(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_access_certificates_settings(
        &self,
        req: crate::model::ListAccessCertificatesSettingsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertSettings>>>,
    > {
        self.inner.list_access_certificates_settings(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_access_certificates_settings(
        &self,
        req: crate::model::UpdateAccessCertificatesSettingsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertSettings>>>,
    > {
        self.inner.update_access_certificates_settings(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_access_application(
        &self,
        req: crate::model::CreateAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>> {
        self.inner.create_access_application(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_access_applications(
        &self,
        req: crate::model::ListAccessApplicationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessApplication>>>,
    > {
        self.inner.list_access_applications(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_access_application(
        &self,
        req: crate::model::GetAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>> {
        self.inner.get_access_application(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_access_application(
        &self,
        req: crate::model::UpdateAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>> {
        self.inner.update_access_application(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_access_application(
        &self,
        req: crate::model::DeleteAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>> {
        self.inner.delete_access_application(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_access_policy(
        &self,
        req: crate::model::CreateAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>> {
        self.inner.create_access_policy(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_access_policies(
        &self,
        req: crate::model::ListAccessPoliciesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessPolicy>>>> {
        self.inner.list_access_policies(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_access_policy(
        &self,
        req: crate::model::GetAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>> {
        self.inner.get_access_policy(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_access_policy(
        &self,
        req: crate::model::UpdateAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>> {
        self.inner.update_access_policy(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_access_policy(
        &self,
        req: crate::model::DeleteAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>> {
        self.inner.delete_access_policy(req, options).await
    }
}
