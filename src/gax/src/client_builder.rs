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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or the authentication
//! credentials. The IBM Cloud networking client libraries for Rust use a
//! generic builder type to provide such functionality. The types in this
//! module implement the client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder. The
//! function receives the identity of the service instance, for example, the
//! CRN and zone identifier.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use ibm_cloud_networking_gax::client_builder::examples;
//! # use ibm_cloud_networking_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder("crn:v1:bluemix:public:internet-svcs:global:a/123::").build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use ibm_cloud_networking_gax::client_builder::examples;
//! # use ibm_cloud_networking_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder("crn:v1:bluemix:public:internet-svcs:global:a/123::")
//!     .with_endpoint("https://api.private.cis.cloud.ibm.com")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use ibm_cloud_networking_gax::client_builder::examples;
/// use ibm_cloud_networking_gax::client_builder::Error as Error;
/// use examples::Client; // Placeholder for examples
/// # tokio_test::block_on(async {
/// let client = match Client::builder("crn:v1:test").build().await {
///     Ok(c) => c,
///     Err(e) if e.is_default_credentials() => {
///         println!("cannot find credentials for the service: {e}");
///         println!("set the SERVICE_NAME_APIKEY environment variable");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the credentials from the
    /// external configuration.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// If true, the client configuration is invalid, for example, some
    /// identity fields are missing.
    pub fn is_configuration(&self) -> bool {
        matches!(&self.0, ErrorKind::Configuration(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn configuration<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Configuration(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create the credentials from the external configuration")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
    #[error("invalid client configuration: {0}")]
    Configuration(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the IBM Cloud networking client libraries for Rust a "client"
/// represents a connection to a specific service instance. All the clients
/// are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use ibm_cloud_networking_gax::client_builder::examples;
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder("crn:v1:test");
/// ```
///
/// As usual, the builder offers several methods to configure the client, and
/// a `.build()` method to construct the client:
/// ```
/// # use ibm_cloud_networking_gax::client_builder::examples;
/// # use ibm_cloud_networking_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder("crn:v1:test")
///     .with_endpoint("https://api.cis.cloud.ibm.com")
///     .with_service_name("my_cis")
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    ///
    /// Fails if the identity of the service instance is incomplete, or if
    /// no credentials are configured and none can be found in the external
    /// configuration.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// Without this setting the client uses the `URL` property from the
    /// external configuration, and then the service default URL.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// Without this setting the client loads the credentials from the
    /// external configuration, keyed by the service name.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Configure the service name.
    ///
    /// The service name is the key used to find the credentials and the
    /// endpoint in the external configuration. For example, with the
    /// `my_cis` service name the client reads the `MY_CIS_APIKEY` and
    /// `MY_CIS_URL` properties.
    ///
    /// ```
    /// # use ibm_cloud_networking_gax::client_builder::examples;
    /// # use ibm_cloud_networking_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder("crn:v1:test")
    ///     .with_service_name("my_cis")
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_service_name<V: Into<String>>(mut self, v: V) -> Self {
        self.config.service_name = Some(v.into());
        self
    }

    /// Configure the retry policy.
    ///
    /// The client libraries can automatically retry operations that fail. The
    /// retry policy controls what errors are considered retryable, sets limits
    /// on the number of attempts or the time trying to make attempts.
    ///
    /// ```
    /// # use ibm_cloud_networking_gax::client_builder::examples;
    /// # use ibm_cloud_networking_gax as gax;
    /// # use ibm_cloud_networking_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use gax::retry_policy::{RecommendedRetry, RetryPolicyExt};
    /// let client = Client::builder("crn:v1:test")
    ///     .with_retry_policy(RecommendedRetry.with_attempt_limit(3))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Configure the retry backoff policy.
    ///
    /// The backoff policy controls how long to wait in between retry
    /// attempts.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: internal::ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// The default configuration should work for most applications. Some
    /// applications may need to override the default endpoint, the
    /// credentials, or the retry policies.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub service_name: Option<String>,
        pub tracing: bool,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                service_name: None,
                tracing: false,
                retry_policy: None,
                backoff_policy: None,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig<Credentials>;
    use super::Result;

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[allow(dead_code)]
    pub struct Client {
        crn: String,
        config: Config,
    }
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder<V: Into<String>>(crn: V) -> client::Builder {
            super::internal::new_builder(client::Factory { crn: crn.into() })
        }

        async fn new(crn: String, config: Config) -> Result<Self> {
            crate::path_parameter::validate(&[("crn", &crn)])
                .map_err(super::Error::configuration)?;
            Ok(Self { crn, config })
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Credentials>;
        pub struct Factory {
            pub crn: String,
        }
        impl super::super::internal::ClientFactory for Factory {
            type Credentials = super::Credentials;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::Credentials>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(self.crn, config).await
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Credentials {
        pub apikey: String,
    }

    // We use the examples as scaffolding for the tests.
    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::error::binding::MissingParameters;
        use std::error::Error as _;

        #[tokio::test]
        async fn build_default() -> anyhow::Result<()> {
            let client = Client::builder("crn:v1:test").build().await?;
            assert_eq!(client.crn, "crn:v1:test");
            let config = client.config;
            assert_eq!(config.endpoint, None);
            assert_eq!(config.cred, None);
            assert_eq!(config.service_name, None);
            assert!(!config.tracing);
            assert!(config.retry_policy.is_none(), "{config:?}");
            assert!(config.backoff_policy.is_none(), "{config:?}");
            Ok(())
        }

        #[tokio::test]
        async fn missing_identity() {
            let err = Client::builder("")
                .build()
                .await
                .err()
                .expect("empty CRN should fail");
            assert!(err.is_configuration(), "{err:?}");
            assert!(
                err.to_string()
                    .contains("Missing required parameters: crn"),
                "{err}"
            );
            let got = err
                .source()
                .and_then(|e| e.downcast_ref::<crate::error::Error>())
                .and_then(|e| e.source())
                .and_then(|e| e.downcast_ref::<MissingParameters>());
            assert!(got.is_some(), "{err:?}");
        }

        #[tokio::test]
        async fn endpoint_and_service_name() -> anyhow::Result<()> {
            let client = Client::builder("crn:v1:test")
                .with_endpoint("http://example.com")
                .with_service_name("my_cis")
                .with_tracing()
                .build()
                .await?;
            let config = client.config;
            assert_eq!(config.endpoint.as_deref(), Some("http://example.com"));
            assert_eq!(config.service_name.as_deref(), Some("my_cis"));
            assert!(config.tracing);
            Ok(())
        }

        #[tokio::test]
        async fn credentials() -> anyhow::Result<()> {
            let client = Client::builder("crn:v1:test")
                .with_credentials(Credentials {
                    apikey: "test-only".to_string(),
                })
                .build()
                .await?;
            let cred = client.config.cred.expect("credentials were configured");
            assert_eq!(cred.apikey, "test-only");
            Ok(())
        }

        #[tokio::test]
        async fn policies() -> anyhow::Result<()> {
            use crate::retry_policy::RetryPolicyExt;
            let client = Client::builder("crn:v1:test")
                .with_retry_policy(crate::retry_policy::AlwaysRetry.with_attempt_limit(3))
                .with_backoff_policy(crate::exponential_backoff::ExponentialBackoff::default())
                .build()
                .await?;
            let config = client.config;
            assert!(config.retry_policy.is_some(), "{config:?}");
            assert!(config.backoff_policy.is_some(), "{config:?}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn error_credentials() {
        let source = std::io::Error::other("no apikey");
        let error = Error::cred(source);
        assert!(error.is_default_credentials(), "{error:?}");
        assert!(!error.is_configuration(), "{error:?}");
        assert!(
            error.to_string().contains("external configuration"),
            "{error}"
        );
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(got.is_some(), "{error:?}");
    }

    #[test]
    fn transport() {
        let error = Error::transport(std::io::Error::other("tls"));
        assert!(error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("transport client"), "{error}");
    }

    #[test]
    fn configuration() {
        let error = Error::configuration("bad endpoint");
        assert!(error.is_configuration(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("bad endpoint"), "{error}");
    }
}
