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

/// A failure to build a request because some required parameters are unset.
///
/// Operations substitute their required parameters into the request path,
/// query, or headers. The client cannot build such a request if any of them
/// are missing. All the missing parameters are reported, in the order the
/// operation declares them.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax::error::binding::MissingParameters;
/// let e = MissingParameters::new(["crn", "zone_id"]);
/// assert_eq!(e.to_string(), "Missing required parameters: crn, zone_id");
/// ```
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub struct MissingParameters {
    names: Vec<String>,
}

impl MissingParameters {
    /// Creates a new error listing `names` as the missing parameters.
    pub fn new<I, V>(names: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The names of the missing parameters.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl std::fmt::Display for MissingParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing required parameters: {}", self.names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_single() {
        let e = MissingParameters::new(["job_id"]);
        assert_eq!(e.to_string(), "Missing required parameters: job_id");
        assert_eq!(e.names(), &["job_id".to_string()]);
    }

    #[test]
    fn fmt_multiple() {
        let e = MissingParameters::new(vec!["crn".to_string(), "zone_identifier".to_string()]);
        assert_eq!(
            e.to_string(),
            "Missing required parameters: crn, zone_identifier"
        );
    }
}
