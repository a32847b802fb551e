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

use crate::error::Error;
use crate::error::binding::MissingParameters;

/// Determines if a request field holds a value.
///
/// Generated code only calls [validate], but it needs the fields to
/// implement this trait.
pub trait Required {
    fn is_set(&self) -> bool;
}

impl Required for String {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl Required for str {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

// Resource identifiers assigned by the services start at 1.
impl Required for i64 {
    fn is_set(&self) -> bool {
        *self != 0
    }
}

impl Required for bytes::Bytes {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Required for Option<T>
where
    T: Required,
{
    fn is_set(&self) -> bool {
        self.as_ref().is_some_and(Required::is_set)
    }
}

impl<T> Required for Vec<T> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Required for &T
where
    T: Required + ?Sized,
{
    fn is_set(&self) -> bool {
        (**self).is_set()
    }
}

/// Verifies all the required parameters are set.
///
/// Returns a [binding][Error::is_binding] error naming every missing
/// parameter, in the order given.
pub fn validate(fields: &[(&str, &dyn Required)]) -> crate::Result<()> {
    let missing = fields
        .iter()
        .filter(|(_, v)| !v.is_set())
        .map(|(name, _)| *name)
        .collect::<Vec<_>>();
    if missing.is_empty() {
        return Ok(());
    }
    Err(Error::binding(MissingParameters::new(missing)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case(String::new(), false)]
    #[test_case("abc".to_string(), true)]
    fn string(input: String, want: bool) {
        assert_eq!(input.is_set(), want);
    }

    #[test_case(None, false)]
    #[test_case(Some(String::new()), false)]
    #[test_case(Some("abc".to_string()), true)]
    fn option(input: Option<String>, want: bool) {
        assert_eq!(input.is_set(), want);
    }

    #[test_case(0, false)]
    #[test_case(42, true)]
    fn integer(input: i64, want: bool) {
        assert_eq!(input.is_set(), want);
    }

    #[test]
    fn vector() {
        assert!(!Vec::<String>::new().is_set());
        assert!(vec![1, 2, 3].is_set());
    }

    #[test]
    fn validate_success() {
        let crn = "crn:v1:test".to_string();
        let zone = Some("zone-id".to_string());
        assert!(validate(&[("crn", &crn), ("zone_id", &zone)]).is_ok());
        assert!(validate(&[]).is_ok());
    }

    #[test]
    fn validate_reports_all_missing() {
        let crn = String::new();
        let zone = "zone-id".to_string();
        let job_id = 0_i64;
        let err = validate(&[("crn", &crn), ("zone_id", &zone), ("job_id", &job_id)])
            .expect_err("missing parameters should fail");
        assert!(err.is_binding(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<MissingParameters>())
            .expect("source should be MissingParameters");
        assert_eq!(source.names(), &["crn".to_string(), "job_id".to_string()]);
        assert!(
            err.to_string()
                .contains("Missing required parameters: crn, job_id"),
            "{err}"
        );
    }
}
