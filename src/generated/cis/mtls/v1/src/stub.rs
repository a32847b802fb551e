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

/// Defines the trait used to implement [super::client::Mtls].
///
/// Application developers may need to implement this trait to mock
/// `client::Mtls`.  In other use-cases, application developers only
/// use `client::Mtls` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait Mtls: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Mtls::list_access_certificates].
    fn list_access_certificates(
        &self,
        _req: crate::model::ListAccessCertificatesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertificate>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::create_access_certificate].
    fn create_access_certificate(
        &self,
        _req: crate::model::CreateAccessCertificateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::get_access_certificate].
    fn get_access_certificate(
        &self,
        _req: crate::model::GetAccessCertificateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::update_access_certificate].
    fn update_access_certificate(
        &self,
        _req: crate::model::UpdateAccessCertificateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessCertificate>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::delete_access_certificate].
    fn delete_access_certificate(
        &self,
        _req: crate::model::DeleteAccessCertificateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::list_access_certificates_settings].
    fn list_access_certificates_settings(
        &self,
        _req: crate::model::ListAccessCertificatesSettingsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertSettings>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::update_access_certificates_settings].
    fn update_access_certificates_settings(
        &self,
        _req: crate::model::UpdateAccessCertificatesSettingsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessCertSettings>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::create_access_application].
    fn create_access_application(
        &self,
        _req: crate::model::CreateAccessApplicationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::list_access_applications].
    fn list_access_applications(
        &self,
        _req: crate::model::ListAccessApplicationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessApplication>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::get_access_application].
    fn get_access_application(
        &self,
        _req: crate::model::GetAccessApplicationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::update_access_application].
    fn update_access_application(
        &self,
        _req: crate::model::UpdateAccessApplicationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessApplication>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::delete_access_application].
    fn delete_access_application(
        &self,
        _req: crate::model::DeleteAccessApplicationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::create_access_policy].
    fn create_access_policy(
        &self,
        _req: crate::model::CreateAccessPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::list_access_policies].
    fn list_access_policies(
        &self,
        _req: crate::model::ListAccessPoliciesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::AccessPolicy>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::get_access_policy].
    fn get_access_policy(
        &self,
        _req: crate::model::GetAccessPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::update_access_policy].
    fn update_access_policy(
        &self,
        _req: crate::model::UpdateAccessPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::AccessPolicy>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Mtls::delete_access_policy].
    fn delete_access_policy(
        &self,
        _req: crate::model::DeleteAccessPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::DeletedResource>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
