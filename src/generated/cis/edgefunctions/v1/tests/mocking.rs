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
    use gax::options::RequestOptions;
    use gax::response::Response;
    use gax::streaming::ByteStream;
    use ibm_cloud_networking_edge_functions_v1 as ef;
    use ef::client::{EdgeFunctions, Identity};

    mockall::mock! {
        #[derive(Debug)]
        EdgeFunctions {}
        impl ef::stub::EdgeFunctions for EdgeFunctions {
            async fn get_edge_functions_action(&self, _req: ef::model::GetEdgeFunctionsActionRequest, _options: RequestOptions) -> gax::Result<Response<ByteStream>>;
        }
    }

    #[tokio::test]
    async fn mocking() -> anyhow::Result<()> {
        let mut mock = MockEdgeFunctions::new();
        mock.expect_get_edge_functions_action()
            .withf(|req, _| req.script_name == "my-action")
            .return_once(|_, _| Ok(Response::from(ByteStream::from_bytes("export default {}"))));

        let client = EdgeFunctions::from_stub(Identity::new("test-crn", "test-zone"), mock);
        let contents = client
            .get_edge_functions_action("my-action")
            .send()
            .await?
            .into_body()
            .collect()
            .await?;
        assert_eq!(contents, bytes::Bytes::from_static(b"export default {}"));
        Ok(())
    }
}
