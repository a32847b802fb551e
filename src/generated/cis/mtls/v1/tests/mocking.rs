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
    use ibm_cloud_networking_mtls_v1 as mtls;
    use mtls::client::{Identity, Mtls};
    use mtls::model::{AccessApplication, DeletedResource};

    mockall::mock! {
        #[derive(Debug)]
        Mtls {}
        impl mtls::stub::Mtls for Mtls {
            async fn list_access_applications(&self, _req: mtls::model::ListAccessApplicationsRequest, _options: RequestOptions) -> gax::Result<Response<Envelope<Vec<AccessApplication>>>>;
            async fn delete_access_application(&self, _req: mtls::model::DeleteAccessApplicationRequest, _options: RequestOptions) -> gax::Result<Response<Envelope<DeletedResource>>>;
        }
    }

    // Deletes all the applications for a domain, the kind of function an
    // application may want to test with a mock.
    async fn delete_domain(client: &Mtls, zone: &str, domain: &str) -> gax::Result<usize> {
        let apps = client
            .list_access_applications(zone)
            .send()
            .await?
            .into_body()
            .result
            .unwrap_or_default();
        let mut count = 0;
        for app in apps.into_iter().filter(|a| a.domain == domain) {
            client.delete_access_application(zone, app.id).send().await?;
            count += 1;
        }
        Ok(count)
    }

    #[tokio::test]
    async fn mocking() -> anyhow::Result<()> {
        let mut mock = MockMtls::new();
        mock.expect_list_access_applications()
            .withf(|req, _| req.zone_id == "test-zone")
            .return_once(|_, _| {
                Ok(Response::from(Envelope::from_result(vec![
                    AccessApplication::new().set_id("app-1").set_domain("a.example.com"),
                    AccessApplication::new().set_id("app-2").set_domain("b.example.com"),
                    AccessApplication::new().set_id("app-3").set_domain("a.example.com"),
                ])))
            });
        mock.expect_delete_access_application()
            .withf(|req, _| req.app_id == "app-1" || req.app_id == "app-3")
            .times(2)
            .returning(|req, _| {
                Ok(Response::from(Envelope::from_result(
                    DeletedResource::new().set_id(req.app_id),
                )))
            });

        let client = Mtls::from_stub(Identity::new("test-crn"), mock);
        let count = delete_domain(&client, "test-zone", "a.example.com").await?;
        assert_eq!(count, 2);
        Ok(())
    }
}
