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
    use gax::envelope::Envelope;
    use gax::options::RequestOptions;
    use gax::response::Response;
    use ibm_cloud_networking_zones_settings_v1 as zs;
    use zs::client::{Identity, ZonesSettings};
    use zs::model::{DnssecSettings, Setting};

    mockall::mock! {
        #[derive(Debug)]
        ZonesSettings {}
        impl zs::stub::ZonesSettings for ZonesSettings {
            async fn get_zone_dnssec(&self, _req: zs::model::GetZoneSettingRequest, _options: RequestOptions) -> gax::Result<Response<Envelope<DnssecSettings>>>;
            async fn update_min_tls_version(&self, _req: zs::model::UpdateStringSettingRequest, _options: RequestOptions) -> gax::Result<Response<Envelope<Setting<String>>>>;
        }
    }

    #[tokio::test]
    async fn mocking() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockZonesSettings::new();
        mock.expect_get_zone_dnssec()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Response::from(Envelope::from_result(
                    DnssecSettings::new().set_status("active"),
                )))
            });
        mock.expect_update_min_tls_version()
            .withf(|req, _| req.value.as_deref() == Some("1.2"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Err(gax::error::Error::http(
                    404,
                    http::HeaderMap::new(),
                    bytes::Bytes::from_static(b"not found"),
                ))
            });

        let client = ZonesSettings::from_stub(Identity::new("test-crn", "test-zone"), mock);
        assert_eq!(client.crn(), "test-crn");
        let response = client.get_zone_dnssec().send().await?;
        assert_eq!(
            response.into_body().result.map(|r| r.status),
            Some("active".to_string())
        );
        let err = client
            .update_min_tls_version()
            .set_value("1.2")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        Ok(())
    }
}
