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
    use ibm_cloud_networking_transit_gateway_v1 as tg;
    use tg::client::{Identity, TransitGateway};
    use tg::model::connection_action;

    mockall::mock! {
        #[derive(Debug)]
        TransitGateway {}
        impl tg::stub::TransitGateway for TransitGateway {
            async fn create_transit_gateway_connection_actions(&self, _req: tg::model::CreateTransitGatewayConnectionActionsRequest, _options: RequestOptions) -> gax::Result<Response<()>>;
            async fn get_gateway_location(&self, _req: tg::model::GetGatewayLocationRequest, _options: RequestOptions) -> gax::Result<Response<tg::model::TsLocation>>;
        }
    }

    #[tokio::test]
    async fn approve_with_stub() -> anyhow::Result<()> {
        let mut mock = MockTransitGateway::new();
        mock.expect_create_transit_gateway_connection_actions()
            .withf(|req, _| {
                req.transit_gateway_id == "tg-1"
                    && req.id == "c-1"
                    && req.action.as_deref() == Some(connection_action::REJECT)
                    && req.x_correlation_id.as_deref() == Some("corr-1")
            })
            .return_once(|_, _| Ok(Response::from(())));
        mock.expect_get_gateway_location().never();

        let client = TransitGateway::from_stub(Identity::new("2021-12-30"), mock);
        client
            .create_transit_gateway_connection_actions("tg-1", "c-1")
            .set_action(connection_action::REJECT)
            .set_x_correlation_id("corr-1")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn location_with_stub() -> anyhow::Result<()> {
        let mut mock = MockTransitGateway::new();
        mock.expect_get_gateway_location()
            .withf(|req, _| req.name == "eu-de")
            .return_once(|_, _| {
                Ok(Response::from(
                    tg::model::TsLocation::new()
                        .set_name("eu-de")
                        .set_billing_location("eu"),
                ))
            });

        let client = TransitGateway::from_stub(Identity::new("2021-12-30"), mock);
        let location = client.get_gateway_location("eu-de").send().await?.into_body();
        assert_eq!(location.billing_location, "eu");
        Ok(())
    }
}
