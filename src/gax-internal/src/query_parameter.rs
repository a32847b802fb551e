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

//! Serialize query parameters.
//!
//! Optional query parameters appear as `Option<T>` fields in the request
//! types. The generated code treats all of them uniformly: it calls
//! [QueryParameter::add] on each field, and this module omits the unset ones.
//!
//! The types are not intended for application developers to use. They are
//! public because every service crate uses them.

/// A type that can be used as a query parameter.
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl QueryParameter for String {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for &str {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for i64 {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for bool {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl<T> QueryParameter for Option<T>
where
    T: QueryParameter,
{
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            None => builder,
            Some(v) => v.add(builder, name),
        }
    }
}

// Repeated parameters are sent once per value, e.g. `?name=a&name=b`.
impl<T> QueryParameter for Vec<T>
where
    T: QueryParameter,
{
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        self.into_iter().fold(builder, |b, v| v.add(b, name))
    }
}

impl QueryParameter for serde_json::Value {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            Self::Object(object) => object.into_iter().fold(builder, |builder, (k, v)| {
                v.add(builder, format!("{name}.{k}").as_str())
            }),
            Self::Array(array) => array
                .into_iter()
                .fold(builder, |builder, v| v.add(builder, name)),
            Self::Null => builder,
            Self::String(s) => builder.query(&[(name, s)]),
            Self::Number(n) => builder.query(&[(name, format!("{n}"))]),
            Self::Bool(b) => builder.query(&[(name, b)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    type TestResult = anyhow::Result<()>;

    fn split_query(r: &reqwest::Request) -> Vec<&str> {
        r.url()
            .query()
            .unwrap_or_default()
            .split("&")
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn builder() -> anyhow::Result<reqwest::RequestBuilder> {
        Ok(reqwest::Client::builder()
            .build()?
            .get("https://directlink.cloud.ibm.com/v1/ports"))
    }

    #[test]
    fn scalars() -> TestResult {
        let builder = "abc 123".add(builder()?, "start");
        let builder = 50_i64.add(builder, "limit");
        let builder = true.add(builder, "include_deleted");
        let builder = "2023-12-01".to_string().add(builder, "version");
        let request = builder.build()?;
        assert_eq!(
            split_query(&request),
            vec![
                "start=abc+123",
                "limit=50",
                "include_deleted=true",
                "version=2023-12-01"
            ]
        );
        Ok(())
    }

    #[test]
    fn option() -> TestResult {
        let builder = Some(10_i64).add(builder()?, "limit");
        let builder = None::<String>.add(builder, "start");
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["limit=10"]);
        Ok(())
    }

    #[test]
    fn repeated() -> TestResult {
        let values = vec!["a".to_string(), "b".to_string()];
        let request = values.add(builder()?, "name").build()?;
        assert_eq!(split_query(&request), vec!["name=a", "name=b"]);

        let request = Vec::<String>::new().add(builder()?, "name").build()?;
        assert_eq!(split_query(&request), Vec::<&str>::new());
        Ok(())
    }

    #[test]
    fn object() -> TestResult {
        let value = json!({
            "a": 123,
            "b": [123, 456],
            "c": "123",
            "d": {"e": false},
        });
        let request = value.add(builder()?, "filter").build()?;
        assert_eq!(
            split_query(&request),
            vec![
                "filter.a=123",
                "filter.b=123",
                "filter.b=456",
                "filter.c=123",
                "filter.d.e=false",
            ]
        );
        Ok(())
    }

    #[test]
    fn null() -> TestResult {
        let request = json!(null).add(builder()?, "name").build()?;
        assert_eq!(split_query(&request), Vec::<&str>::new());
        Ok(())
    }
}
