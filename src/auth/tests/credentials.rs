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

#[cfg(test)]
mod tests {
    use http::Extensions;
    use http::header::AUTHORIZATION;
    use httptest::matchers::{contains, request, url_decoded};
    use httptest::{Expectation, Server, all_of, responders::*};
    use ibm_cloud_networking_auth::config::CREDENTIALS_FILE_VAR;
    use ibm_cloud_networking_auth::credentials::{Builder, CacheableResource};
    use scoped_env::ScopedEnv;
    use serde_json::json;
    use std::io::Write;

    type TestResult = anyhow::Result<()>;

    async fn authorization(builder: Builder) -> anyhow::Result<String> {
        let credentials = builder.build()?;
        let headers = match credentials.headers(Extensions::new()).await? {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => anyhow::bail!("expected new headers"),
        };
        let value = headers
            .get(AUTHORIZATION)
            .ok_or_else(|| anyhow::anyhow!("missing authorization header in {headers:?}"))?;
        Ok(value.to_str()?.to_string())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn iam_from_file() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/identity/token"),
                request::body(url_decoded(contains(("apikey", "file-api-key")))),
            ])
            .respond_with(json_encoded(json!({
                "access_token": "file-access-token",
                "token_type": "Bearer",
                "expires_in": 3600,
            }))),
        );

        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "# test configuration")?;
        writeln!(file, "ZONES_SETTINGS_AUTH_TYPE=iam")?;
        writeln!(file, "ZONES_SETTINGS_APIKEY=file-api-key")?;
        writeln!(file, "ZONES_SETTINGS_AUTH_URL=http://{}", server.addr())?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, file.path().to_str().unwrap());

        let got = authorization(Builder::from_service_name("zones_settings")).await?;
        assert_eq!(got, "Bearer file-access-token");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn bearer_from_env() -> TestResult {
        let dir = tempfile::tempdir()?;
        let empty = dir.path().join("empty.env");
        std::fs::write(&empty, "")?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, empty.to_str().unwrap());
        let _t = ScopedEnv::set("DIRECT_LINK_AUTH_TYPE", "bearerToken");
        let _b = ScopedEnv::set("DIRECT_LINK_BEARER_TOKEN", "env-token");

        let got = authorization(Builder::from_service_name("direct_link")).await?;
        assert_eq!(got, "Bearer env-token");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn missing_configuration() -> TestResult {
        let dir = tempfile::tempdir()?;
        let empty = dir.path().join("empty.env");
        std::fs::write(&empty, "")?;
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, empty.to_str().unwrap());
        let _a = ScopedEnv::remove("TRANSIT_GATEWAY_APIS_AUTH_TYPE");
        let _k = ScopedEnv::remove("TRANSIT_GATEWAY_APIS_APIKEY");

        let err = Builder::from_service_name("transit_gateway_apis")
            .build()
            .unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        assert!(err.to_string().contains("transit_gateway_apis"), "{err}");
        Ok(())
    }
}
