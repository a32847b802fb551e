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

use crate::config::{self, Properties};
use crate::errors::{self, CredentialsError};
use http::{Extensions, HeaderMap};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub mod basic;
pub mod bearer_token;
pub mod iam;
pub mod no_auth;

/// The `Result` type for this module.
pub type Result<T> = std::result::Result<T, CredentialsError>;

/// An implementation of [crate::credentials::CredentialsProvider].
///
/// Represents a [Credentials] used to obtain the auth request headers.
///
/// In general, [Credentials][credentials-link] are "digital object that
/// provide proof of identity", the archetype may be a username and password
/// combination, but an API key exchanged for an access token is more common
/// in IBM Cloud.
///
/// Applications rarely need to use these headers directly: the service
/// clients add them to each request.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_auth::credentials::bearer_token;
/// # use http::Extensions;
/// # tokio_test::block_on(async {
/// let credentials = bearer_token::Builder::new("my-access-token").build()?;
/// let headers = credentials.headers(Extensions::new()).await?;
/// println!("Headers: {headers:?}");
/// # Ok::<(), anyhow::Error>(())
/// # });
/// ```
///
/// [credentials-link]: https://cloud.ibm.com/docs/account?topic=account-iamoverview
#[derive(Clone, Debug)]
pub struct Credentials {
    // We use an `Arc` to hold the inner implementation.
    //
    // Credentials may be shared across threads (`Send + Sync`), so an `Rc`
    // will not do.
    //
    // They also need to derive `Clone`, as the service clients need multiple
    // copies of the credentials.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: crate::credentials::CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Asynchronously constructs the auth headers.
    ///
    /// Different credentials use different headers. The credentials compute
    /// the headers, refreshing any tokens as needed. If the `extensions`
    /// contain the [EntityTag] returned by a previous call, and the headers
    /// have not changed, the result is [CacheableResource::NotModified].
    pub async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        self.inner.headers(extensions).await
    }
}

/// Represents an entity tag for a [CacheableResource].
///
/// An `EntityTag` is an opaque token used to determine if a cached resource
/// has changed. Two tags are equal only if they identify the same version of
/// the resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityTag(u64);

static ENTITY_TAG_GENERATOR: AtomicU64 = AtomicU64::new(0);

impl EntityTag {
    /// Creates a new, unique tag.
    pub fn new() -> Self {
        Self(ENTITY_TAG_GENERATOR.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::default::Default for EntityTag {
    fn default() -> Self {
        Self::new()
    }
}

/// Represents a resource that can be cached, along with its [EntityTag].
#[derive(Clone, PartialEq, Debug)]
pub enum CacheableResource<T> {
    /// The resource has not changed since the tag provided by the caller.
    NotModified,
    /// A new version of the resource.
    New { entity_tag: EntityTag, data: T },
}

/// Represents a [Credentials] used to obtain the auth request headers.
///
/// Applications use this trait to mock the credentials in their tests, or to
/// provide their own authentication scheme.
///
/// # Notes
///
/// Application developers who directly use the Auth SDK can use this trait to
/// mock the credentials. Application developers who use the service clients
/// can mock the credentials, but it is often simpler to mock the clients
/// themselves.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the auth headers.
    fn headers(
        &self,
        extensions: Extensions,
    ) -> impl Future<Output = Result<CacheableResource<HeaderMap>>> + Send;
}

pub(crate) mod dynamic {
    use super::Result;
    use super::{CacheableResource, Extensions, HeaderMap};

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        /// Asynchronously constructs the auth headers.
        async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>>;
    }

    /// The public CredentialsProvider implements the dyn-compatible CredentialsProvider.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
            T::headers(self, extensions).await
        }
    }
}

/// The authentication schemes supported in the external configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
enum AuthType {
    Iam,
    BearerToken,
    Basic,
    NoAuth,
}

impl AuthType {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "iam" => Some(Self::Iam),
            "bearertoken" => Some(Self::BearerToken),
            "basic" => Some(Self::Basic),
            "noauth" => Some(Self::NoAuth),
            _ => None,
        }
    }
}

/// A builder for credentials loaded from the external configuration.
///
/// The builder reads the properties for a service name, as described in
/// [config][crate::config], and creates the credentials selected by the
/// `AUTH_TYPE` property. If `AUTH_TYPE` is not set, the builder uses IAM
/// credentials when an `APIKEY` is configured.
///
/// # Example
/// ```no_run
/// # use ibm_cloud_networking_auth::credentials::Builder;
/// // Uses the `ZONES_SETTINGS_APIKEY` and `ZONES_SETTINGS_AUTH_URL` properties.
/// let credentials = Builder::from_service_name("zones_settings").build()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug)]
pub struct Builder {
    service_name: String,
}

impl Builder {
    /// Creates a builder for the given service name.
    pub fn from_service_name<V: Into<String>>(service_name: V) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }

    /// Returns a [Credentials] instance created from the external
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns a [CredentialsError] if no source configures the service, if
    /// the authentication type is unknown, or if the properties required by
    /// the authentication type are missing.
    pub fn build(self) -> Result<Credentials> {
        let properties = config::load(&self.service_name)?;
        from_properties(&self.service_name, &properties)
    }
}

pub(crate) fn from_properties(service_name: &str, properties: &Properties) -> Result<Credentials> {
    let auth_type = match properties.get(config::AUTH_TYPE) {
        Some(v) => AuthType::parse(v).ok_or_else(|| {
            errors::non_retryable_from_str(format!(
                "unsupported authentication type `{v}` for service `{service_name}`"
            ))
        })?,
        None if properties.get(config::APIKEY).is_some() => AuthType::Iam,
        None => {
            return Err(errors::non_retryable_from_str(format!(
                "no credentials configured for service `{service_name}`"
            )));
        }
    };
    let required = |name: &str| {
        properties.get(name).ok_or_else(|| {
            errors::non_retryable_from_str(format!(
                "missing `{name}` property for service `{service_name}`"
            ))
        })
    };
    tracing::debug!("creating {auth_type:?} credentials for service `{service_name}`");
    match auth_type {
        AuthType::Iam => {
            let mut builder = iam::Builder::new(required(config::APIKEY)?);
            if let Some(url) = properties.get(config::AUTH_URL) {
                builder = builder.with_url(url);
            }
            if let (Some(id), Some(secret)) = (
                properties.get(config::CLIENT_ID),
                properties.get(config::CLIENT_SECRET),
            ) {
                builder = builder.with_client_id_and_secret(id, secret);
            }
            if let Some(scope) = properties.get(config::SCOPE) {
                builder = builder.with_scope(scope);
            }
            builder.build()
        }
        AuthType::BearerToken => bearer_token::Builder::new(required(config::BEARER_TOKEN)?).build(),
        AuthType::Basic => basic::Builder::new(
            required(config::USERNAME)?,
            required(config::PASSWORD)?,
        )
        .build(),
        AuthType::NoAuth => Ok(no_auth::Builder::new().build()),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use http::header::AUTHORIZATION;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    // Used by tests in other modules.
    mockall::mock! {
        #[derive(Debug)]
        pub Credentials {}

        impl CredentialsProvider for Credentials {
            async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>>;
        }
    }

    pub(crate) fn get_headers_from_cache(
        headers: CacheableResource<HeaderMap>,
    ) -> Result<HeaderMap> {
        match headers {
            CacheableResource::New { data, .. } => Ok(data),
            CacheableResource::NotModified => Err(CredentialsError::from_msg(
                false,
                "Expecting headers to be present",
            )),
        }
    }

    fn properties<const N: usize>(values: [(&str, &str); N]) -> Properties {
        Properties::from_iter(values.map(|(k, v)| (k.to_string(), v.to_string())))
    }

    #[test_case("iam", Some(AuthType::Iam))]
    #[test_case("IAM", Some(AuthType::Iam))]
    #[test_case("bearerToken", Some(AuthType::BearerToken))]
    #[test_case("BEARERTOKEN", Some(AuthType::BearerToken))]
    #[test_case("basic", Some(AuthType::Basic))]
    #[test_case("noAuth", Some(AuthType::NoAuth))]
    #[test_case("cp4d", None)]
    fn auth_type(input: &str, want: Option<AuthType>) {
        assert_eq!(AuthType::parse(input), want);
    }

    #[test]
    fn entity_tags_are_unique() {
        let a = EntityTag::new();
        let b = EntityTag::default();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[tokio::test]
    async fn mocked_provider() -> TestResult {
        let mut mock = MockCredentials::new();
        mock.expect_headers().times(1).returning(|_| {
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, "Bearer test-only".parse().unwrap());
            Ok(CacheableResource::New {
                entity_tag: EntityTag::new(),
                data: headers,
            })
        });
        let credentials = Credentials::from(mock);
        let headers = get_headers_from_cache(credentials.headers(Extensions::new()).await?)?;
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer test-only")
        );
        Ok(())
    }

    #[tokio::test]
    async fn from_properties_bearer() -> TestResult {
        let props = properties([("AUTH_TYPE", "bearerToken"), ("BEARER_TOKEN", "abc123")]);
        let credentials = from_properties("test", &props)?;
        let headers = get_headers_from_cache(credentials.headers(Extensions::new()).await?)?;
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer abc123")
        );
        Ok(())
    }

    #[tokio::test]
    async fn from_properties_basic() -> TestResult {
        let props = properties([
            ("AUTH_TYPE", "basic"),
            ("USERNAME", "user"),
            ("PASSWORD", "pass"),
        ]);
        let credentials = from_properties("test", &props)?;
        let headers = get_headers_from_cache(credentials.headers(Extensions::new()).await?)?;
        // base64("user:pass")
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Basic dXNlcjpwYXNz")
        );
        Ok(())
    }

    #[tokio::test]
    async fn from_properties_no_auth() -> TestResult {
        let props = properties([("AUTH_TYPE", "noauth")]);
        let credentials = from_properties("test", &props)?;
        let headers = get_headers_from_cache(credentials.headers(Extensions::new()).await?)?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[test]
    fn from_properties_defaults_to_iam() -> TestResult {
        let props = properties([("APIKEY", "test-api-key")]);
        let credentials = from_properties("test", &props)?;
        let fmt = format!("{credentials:?}");
        assert!(fmt.contains("IamTokenProvider"), "{fmt}");
        assert!(!fmt.contains("test-api-key"), "{fmt}");
        Ok(())
    }

    #[test]
    fn from_properties_errors() {
        let err = from_properties("test", &properties([])).unwrap_err();
        assert!(err.to_string().contains("no credentials configured"), "{err}");
        assert!(!err.is_transient(), "{err:?}");

        let err = from_properties("test", &properties([("AUTH_TYPE", "cp4d")])).unwrap_err();
        assert!(err.to_string().contains("unsupported authentication type"), "{err}");

        let err = from_properties("test", &properties([("AUTH_TYPE", "iam")])).unwrap_err();
        assert!(err.to_string().contains("missing `APIKEY`"), "{err}");

        let err = from_properties(
            "test",
            &properties([("AUTH_TYPE", "basic"), ("USERNAME", "user")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing `PASSWORD`"), "{err}");
    }
}
