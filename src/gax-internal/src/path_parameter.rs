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

//! Format path parameters.
//!
//! Path parameters (the CRN, zone identifiers, resource ids) are substituted
//! into the URL template as single path segments. Their values are opaque
//! and may contain characters that are not valid in a path segment, CRNs
//! use `:` and may contain `/`. The generated code encodes all of them with
//! [encode] before formatting the path.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// The characters that must be escaped in a path segment. This is the set
// defined in RFC 3986 for `pchar`, with `:` and `@` also escaped because
// some of the services reject them unescaped.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encodes a value used as a single path segment.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax_internal::path_parameter::encode;
/// assert_eq!(encode("crn:v1:bluemix:public:internet-svcs:global:a/123::"),
///     "crn%3Av1%3Abluemix%3Apublic%3Ainternet-svcs%3Aglobal%3Aa%2F123%3A%3A");
/// assert_eq!(encode("zone-id"), "zone-id");
/// ```
pub fn encode<T: AsRef<str> + ?Sized>(value: &T) -> String {
    utf8_percent_encode(value.as_ref(), SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("abc-123_x.y~z", "abc-123_x.y~z")]
    #[test_case("a b", "a%20b")]
    #[test_case("a/b", "a%2Fb")]
    #[test_case("a?b#c", "a%3Fb%23c")]
    #[test_case("100%", "100%25")]
    #[test_case("ñ", "%C3%B1")]
    #[test_case("", "")]
    fn segment(input: &str, want: &str) {
        assert_eq!(encode(input), want);
    }

    #[test]
    fn string_types() {
        let owned = String::from("crn:a");
        assert_eq!(encode(&owned), "crn%3Aa");
        assert_eq!(encode("crn:a"), "crn%3Aa");
    }
}
