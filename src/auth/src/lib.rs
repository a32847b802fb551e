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

//! IBM Cloud Networking Client Libraries for Rust - Authentication Components
//!
//! This crate contains types and functions used to authenticate requests to
//! the IBM Cloud networking services. The service clients consume an
//! implementation of [credentials::Credentials] and use these credentials to
//! add the authentication headers to each request.
//!
//! Most applications use [IAM] credentials: the application provides an API
//! key and the credentials exchange it for an access token, refreshing the
//! token as needed. Bearer tokens, basic authentication and unauthenticated
//! access are also supported.
//!
//! Credentials are either created explicitly, or loaded from the external
//! configuration (a credentials file or environment variables) keyed by a
//! service name. See [config] for details.
//!
//! [IAM]: https://cloud.ibm.com/docs/account?topic=account-iamoverview

pub mod errors;

/// Types and functions to work with authentication credentials.
pub mod credentials;

/// Auth tokens and the providers that fetch them.
pub(crate) mod token;

pub mod config;

/// The token cache
pub(crate) mod token_cache;

/// A `Result` alias where the `Err` case is
/// `ibm_cloud_networking_auth::errors::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;

/// Utility functions to build the authentication headers.
pub(crate) mod headers_util;
