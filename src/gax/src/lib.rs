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

//! IBM Cloud Networking API helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the IBM Cloud Networking Client Libraries for Rust.
//! Applications use the error, response, options and retry types defined
//! here. The remaining types are used by the generated clients and change
//! with them.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping REST calls.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Validates required parameters before a request is sent.
///
/// Every operation names the parameters it requires. If any of them is
/// missing the client fails the request locally, without any network
/// activity, and reports all the missing names at once.
#[doc(hidden)]
pub mod path_parameter;

pub mod backoff_policy;
pub mod client_builder;
pub mod envelope;
pub mod exponential_backoff;
pub mod options;
pub mod paginator;
pub mod response;
pub mod retry_policy;
pub mod streaming;

#[doc(hidden)]
pub mod retry_loop_internal;
