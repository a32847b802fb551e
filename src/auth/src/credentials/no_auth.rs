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

//! Credentials for services that do not need authentication.
//!
//! Requests sent with these credentials carry no `Authorization` header.
//! Select them with `<SERVICE>_AUTH_TYPE=noAuth`, typically to talk to a
//! local test server.

use crate::credentials::{CacheableResource, Credentials, CredentialsProvider, EntityTag, Result};
use http::{Extensions, HeaderMap};

// The headers never change, a single tag lets callers skip recomputing them.
#[derive(Debug)]
struct NoAuth(EntityTag);

/// Creates credentials that add no headers.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_auth::credentials::no_auth;
/// let credentials = no_auth::Builder::new().build();
/// ```
#[derive(Debug, Default)]
pub struct Builder;

impl Builder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self
    }

    /// Returns the [Credentials].
    pub fn build(self) -> Credentials {
        Credentials::from(NoAuth(EntityTag::new()))
    }
}

impl CredentialsProvider for NoAuth {
    fn headers(
        &self,
        extensions: Extensions,
    ) -> impl Future<Output = Result<CacheableResource<HeaderMap>>> + Send {
        let headers = if extensions.get::<EntityTag>() == Some(&self.0) {
            CacheableResource::NotModified
        } else {
            CacheableResource::New {
                entity_tag: self.0.clone(),
                data: HeaderMap::new(),
            }
        };
        std::future::ready(Ok(headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_headers() -> anyhow::Result<()> {
        let credentials = Builder::new().build();
        let CacheableResource::New { entity_tag, data } =
            credentials.headers(Extensions::new()).await?
        else {
            panic!("the first call returns new headers");
        };
        assert!(data.is_empty(), "{data:?}");

        let mut extensions = Extensions::new();
        extensions.insert(entity_tag);
        let cached = credentials.headers(extensions).await?;
        assert!(matches!(cached, CacheableResource::NotModified), "{cached:?}");

        let mut extensions = Extensions::new();
        extensions.insert(EntityTag::new());
        let other = credentials.headers(extensions).await?;
        assert!(matches!(other, CacheableResource::New { .. }), "{other:?}");
        Ok(())
    }
}
