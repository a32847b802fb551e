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

/// A dyn-compatible, crate-private version of [super::Mtls].
#[async_trait::async_trait]
pub trait Mtls: std::fmt::Debug + Send + Sync {
    async fn list_access_certificates(
        &self,
        req: crate::model::ListAccessCertificatesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertificate>>>>;

    async fn create_access_certificate(
        &self,
        req: crate::model::CreateAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>>;

    async fn get_access_certificate(
        &self,
        req: crate::model::GetAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>>;

    async fn update_access_certificate(
        &self,
        req: crate::model::UpdateAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>>;

    async fn delete_access_certificate(
        &self,
        req: crate::model::DeleteAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>>;

    async fn list_access_certificates_settings(
        &self,
        req: crate::model::ListAccessCertificatesSettingsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertSettings>>>>;

    async fn update_access_certificates_settings(
        &self,
        req: crate::model::UpdateAccessCertificatesSettingsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertSettings>>>>;

    async fn create_access_application(
        &self,
        req: crate::model::CreateAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>>;

    async fn list_access_applications(
        &self,
        req: crate::model::ListAccessApplicationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessApplication>>>>;

    async fn get_access_application(
        &self,
        req: crate::model::GetAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>>;

    async fn update_access_application(
        &self,
        req: crate::model::UpdateAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>>;

    async fn delete_access_application(
        &self,
        req: crate::model::DeleteAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>>;

    async fn create_access_policy(
        &self,
        req: crate::model::CreateAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>>;

    async fn list_access_policies(
        &self,
        req: crate::model::ListAccessPoliciesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessPolicy>>>>;

    async fn get_access_policy(
        &self,
        req: crate::model::GetAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>>;

    async fn update_access_policy(
        &self,
        req: crate::model::UpdateAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>>;

    async fn delete_access_policy(
        &self,
        req: crate::model::DeleteAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>>;
}

/// All implementations of [super::Mtls] also implement [Mtls].
#[async_trait::async_trait]
impl<T: super::Mtls> Mtls for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_access_certificates(
        &self,
        req: crate::model::ListAccessCertificatesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertificate>>>,
    > {
        T::list_access_certificates(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_access_certificate(
        &self,
        req: crate::model::CreateAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>,
    > {
        T::create_access_certificate(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_access_certificate(
        &self,
        req: crate::model::GetAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>,
    > {
        T::get_access_certificate(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_access_certificate(
        &self,
        req: crate::model::UpdateAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>,
    > {
        T::update_access_certificate(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_access_certificate(
        &self,
        req: crate::model::DeleteAccessCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>,
    > {
        T::delete_access_certificate(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_access_certificates_settings(
        &self,
        req: crate::model::ListAccessCertificatesSettingsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertSettings>>>,
    > {
        T::list_access_certificates_settings(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_access_certificates_settings(
        &self,
        req: crate::model::UpdateAccessCertificatesSettingsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertSettings>>>,
    > {
        T::update_access_certificates_settings(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_access_application(
        &self,
        req: crate::model::CreateAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>,
    > {
        T::create_access_application(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_access_applications(
        &self,
        req: crate::model::ListAccessApplicationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessApplication>>>,
    > {
        T::list_access_applications(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_access_application(
        &self,
        req: crate::model::GetAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>,
    > {
        T::get_access_application(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_access_application(
        &self,
        req: crate::model::UpdateAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>,
    > {
        T::update_access_application(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_access_application(
        &self,
        req: crate::model::DeleteAccessApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>,
    > {
        T::delete_access_application(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_access_policy(
        &self,
        req: crate::model::CreateAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>,
    > {
        T::create_access_policy(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_access_policies(
        &self,
        req: crate::model::ListAccessPoliciesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessPolicy>>>,
    > {
        T::list_access_policies(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_access_policy(
        &self,
        req: crate::model::GetAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>,
    > {
        T::get_access_policy(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_access_policy(
        &self,
        req: crate::model::UpdateAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>,
    > {
        T::update_access_policy(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_access_policy(
        &self,
        req: crate::model::DeleteAccessPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>,
    > {
        T::delete_access_policy(self, req, options).await
    }
}
