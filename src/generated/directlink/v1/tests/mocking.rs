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
    use ibm_cloud_networking_direct_link_v1 as dl;
    use dl::client::{DirectLink, Identity};
    use dl::model::{PaginationNext, Port, PortCollection};

    mockall::mock! {
        #[derive(Debug)]
        DirectLink {}
        impl dl::stub::DirectLink for DirectLink {
            async fn list_ports(&self, _req: dl::model::ListPortsRequest, _options: RequestOptions) -> gax::Result<Response<PortCollection>>;
            async fn delete_gateway(&self, _req: dl::model::DeleteGatewayRequest, _options: RequestOptions) -> gax::Result<Response<()>>;
        }
    }

    #[tokio::test]
    async fn paginate_with_stub() -> anyhow::Result<()> {
        let mut mock = MockDirectLink::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_ports()
            .once()
            .in_sequence(&mut seq)
            .withf(|req, _| req.start.is_none() && req.location_name.as_deref() == Some("fra03"))
            .return_once(|_, _| {
                Ok(Response::from(
                    PortCollection::new()
                        .set_ports([Port::new().set_id("p-1")])
                        .set_next(PaginationNext::new().set_start("abc")),
                ))
            });
        mock.expect_list_ports()
            .once()
            .in_sequence(&mut seq)
            .withf(|req, _| req.start.as_deref() == Some("abc"))
            .return_once(|_, _| {
                Ok(Response::from(
                    PortCollection::new().set_ports([Port::new().set_id("p-2")]),
                ))
            });

        let client = DirectLink::from_stub(Identity::new("2019-12-13"), mock);
        let mut pages = client.list_ports().set_location_name("fra03").by_page();
        let mut ids = Vec::new();
        while let Some(page) = pages.next().await {
            ids.extend(page?.ports.into_iter().map(|p| p.id));
        }
        assert_eq!(ids, vec!["p-1", "p-2"]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_with_stub() -> anyhow::Result<()> {
        let mut mock = MockDirectLink::new();
        mock.expect_delete_gateway()
            .withf(|req, _| req.id == "gw-1")
            .return_once(|_, _| Ok(Response::from(())));

        let client = DirectLink::from_stub(Identity::new("2019-12-13"), mock);
        client.delete_gateway("gw-1").send().await?;
        Ok(())
    }
}
