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
use crate::credentials::CacheableResource;
use crate::token::Token;
use http::HeaderMap;
use http::header::AUTHORIZATION;

/// Maps a cached token to the cached `Authorization` header.
///
/// The entity tag is preserved, callers holding headers for the same tag do
/// not need to rebuild them.
pub(crate) fn build_cacheable_headers(
    cached_token: &CacheableResource<Token>,
) -> Result<CacheableResource<HeaderMap>> {
    match cached_token {
        CacheableResource::NotModified => Ok(CacheableResource::NotModified),
        CacheableResource::New { entity_tag, data } => {
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, data.authorization()?);
            Ok(CacheableResource::New {
                entity_tag: entity_tag.clone(),
                data: headers,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::EntityTag;
    use crate::token::Scheme;
    use http::HeaderValue;

    #[test]
    fn new_token() -> anyhow::Result<()> {
        let entity_tag = EntityTag::new();
        let cached = CacheableResource::New {
            entity_tag: entity_tag.clone(),
            data: Token::new(Scheme::Bearer, "test-token"),
        };
        let (headers, tag) = match build_cacheable_headers(&cached)? {
            CacheableResource::New { data, entity_tag } => (data, entity_tag),
            CacheableResource::NotModified => panic!("expected new headers"),
        };
        assert_eq!(tag, entity_tag);
        assert_eq!(headers.len(), 1, "{headers:?}");
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer test-token"))
        );
        Ok(())
    }

    #[test]
    fn not_modified() -> anyhow::Result<()> {
        let result = build_cacheable_headers(&CacheableResource::NotModified)?;
        assert!(matches!(result, CacheableResource::NotModified), "{result:?}");
        Ok(())
    }

    #[test]
    fn invalid_token() {
        let cached = CacheableResource::New {
            entity_tag: EntityTag::new(),
            data: Token::new(Scheme::Basic, "bad\rvalue"),
        };
        let err = build_cacheable_headers(&cached).unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
    }
}
