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

//! IBM Cloud Networking Client Libraries for Rust - mTLS
//!
//! Mutual TLS (mTLS) lets IBM Cloud Internet Services (CIS) verify the client
//! certificates presented to the hostnames of a zone.
//!
//! This crate contains traits, types, and functions to interact with the
//! mTLS service. Most applications will use the structs defined in the
//! [client] module. More specifically:
//!
//! * [Mtls](client/struct.Mtls.html)

/// The error type and result alias used by all the operations.
pub use gax::Result;
pub use gax::error::Error;

/// The request, response and resource types for this service.
#[allow(rustdoc::invalid_html_tags)]
#[allow(rustdoc::redundant_explicit_links)]
pub mod model;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

/// Traits to mock the clients in this library.
pub mod stub;

#[allow(rustdoc::invalid_html_tags)]
#[allow(rustdoc::redundant_explicit_links)]
pub(crate) mod tracing;

#[allow(rustdoc::invalid_html_tags)]
#[allow(rustdoc::redundant_explicit_links)]
pub(crate) mod transport;

/// The default URL for this service, used when neither the application nor
/// the external configuration sets one.
pub const DEFAULT_SERVICE_URL: &str = "https://api.cis.cloud.ibm.com";

/// The default name used to look up credentials and settings in the external
/// configuration.
pub const DEFAULT_SERVICE_NAME: &str = "mtls";

pub(crate) mod info {
    pub(crate) static CLIENT_INFO: gaxi::api_header::ClientInfo = gaxi::api_header::ClientInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    };
}
