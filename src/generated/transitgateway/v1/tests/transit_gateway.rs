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
    use auth::credentials::bearer_token;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use ibm_cloud_networking_transit_gateway_v1::client::TransitGateway;
    use ibm_cloud_networking_transit_gateway_v1::model::{
        ZoneReference, connection_action, network_type, prefix_filter_action,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    const VERSION: &str = "2021-12-30";

    async fn test_client(server: &Server) -> Result<TransitGateway> {
        let client = TransitGateway::builder(VERSION)
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(bearer_token::Builder::new("test-token").build()?)
            .build()
            .await?;
        Ok(client)
    }

    fn gateway(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "crn": format!("crn:v1:bluemix:public:transit:us-south:a/acct::gateway:{id}"),
            "name": format!("gateway-{id}"),
            "location": "us-south",
            "global": false,
            "status": "available",
            "resource_group": {"id": "rg-1", "href": "https://resource-controller.cloud.ibm.com/v2/resource_groups/rg-1"},
            "created_at": "2025-01-01T00:00:00Z"
        })
    }

    // Serves two pages of transit gateways, `tg-1, tg-2` and `tg-3`.
    fn expect_two_pages(server: &Server) {
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/transit_gateways"),
                request::query(url_decoded(contains(("version", VERSION)))),
                request::query(url_decoded(contains(("limit", "2")))),
                request::query(url_decoded(not(contains(key("start"))))),
            ])
            .respond_with(json_encoded(json!({
                "transit_gateways": [gateway("tg-1"), gateway("tg-2")],
                "first": {"href": "https://transit.cloud.ibm.com/v1/transit_gateways?limit=2"},
                "next": {"href": "https://transit.cloud.ibm.com/v1/transit_gateways?start=1&limit=2", "start": "1"},
                "limit": 2
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/transit_gateways"),
                request::query(url_decoded(contains(("version", VERSION)))),
                request::query(url_decoded(contains(("start", "1")))),
            ])
            .respond_with(json_encoded(json!({
                "transit_gateways": [gateway("tg-3")],
                "first": {"href": "https://transit.cloud.ibm.com/v1/transit_gateways?limit=2"},
                "limit": 2
            }))),
        );
    }

    #[tokio::test]
    async fn list_by_page() -> Result<()> {
        let server = Server::run();
        expect_two_pages(&server);

        let client = test_client(&server).await?;
        let mut pages = client.list_transit_gateways().set_limit(2).by_page();
        let mut sizes = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page?;
            sizes.push(page.transit_gateways.len());
        }
        assert_eq!(sizes, vec![2, 1]);
        assert!(!pages.has_next());
        Ok(())
    }

    #[tokio::test]
    async fn list_by_item() -> Result<()> {
        let server = Server::run();
        expect_two_pages(&server);

        let client = test_client(&server).await?;
        let mut items = client.list_transit_gateways().set_limit(2).by_item();
        let mut names = Vec::new();
        while let Some(item) = items.next().await {
            names.push(item?.name);
        }
        assert_eq!(names, vec!["gateway-tg-1", "gateway-tg-2", "gateway-tg-3"]);
        Ok(())
    }

    #[tokio::test]
    async fn list_all() -> Result<()> {
        let server = Server::run();
        expect_two_pages(&server);

        let client = test_client(&server).await?;
        let gateways = client.list_transit_gateways().set_limit(2).by_item().all().await?;
        let ids = gateways.iter().map(|g| g.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["tg-1", "tg-2", "tg-3"]);
        assert_eq!(
            gateways[0].resource_group.as_ref().map(|g| g.id.as_str()),
            Some("rg-1")
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_page_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/transit_gateways")).respond_with(
                status_code(401).body(
                    json!({"errors": [{"code": "not_authorized", "message": "Unauthorized"}], "trace": "t-1"})
                        .to_string(),
                ),
            ),
        );

        let client = test_client(&server).await?;
        let err = client
            .list_transit_gateways()
            .by_item()
            .all()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(401), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn gateway_lifecycle() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/transit_gateways"),
                request::body(json_decoded(eq(json!({
                    "location": "us-south",
                    "name": "gateway-tg-1",
                    "global": false,
                    "resource_group": {"id": "rg-1"}
                })))),
            ])
            .respond_with(status_code(201).body(gateway("tg-1").to_string())),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/transit_gateways/tg-1"))
                .respond_with(json_encoded(gateway("tg-1"))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/transit_gateways/tg-1"),
                request::body(json_decoded(eq(json!({"global": true})))),
            ])
            .respond_with(json_encoded(gateway("tg-1"))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/transit_gateways/tg-1"),
                request::query(url_decoded(contains(("version", VERSION)))),
            ])
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let created = client
            .create_transit_gateway()
            .set_location("us-south")
            .set_name("gateway-tg-1")
            .set_global(false)
            .set_resource_group(
                ibm_cloud_networking_transit_gateway_v1::model::ResourceGroupIdentity::new()
                    .set_id("rg-1"),
            )
            .send()
            .await?
            .into_body();
        assert_eq!(created.status, "available");
        let got = client.get_transit_gateway("tg-1").send().await?.into_body();
        assert_eq!(got, created);
        client
            .update_transit_gateway("tg-1")
            .set_global(true)
            .send()
            .await?;
        client.delete_transit_gateway("tg-1").send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn create_gateway_requires_location_and_name() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .create_transit_gateway()
            .set_name("only-name")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("location"), "{err}");
        Ok(())
    }

    fn connection(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": format!("connection-{id}"),
            "network_type": "gre_tunnel",
            "base_connection_id": "base-1",
            "local_tunnel_ip": "192.168.100.20",
            "remote_tunnel_ip": "192.168.101.20",
            "remote_gateway_ip": "10.242.63.12",
            "remote_bgp_asn": 65010,
            "zone": {"name": "us-south-1"},
            "status": "attached",
            "prefix_filters_default": "permit",
            "prefix_filters": [{"action": "deny", "prefix": "10.10.0.0/16"}],
            "created_at": "2025-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn connections() -> Result<()> {
        let server = Server::run();
        let base = "/transit_gateways/tg-1/connections";
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", base),
                request::query(url_decoded(contains(("name", "connection-c-1")))),
            ])
            .respond_with(json_encoded(json!({
                "connections": [connection("c-1")],
                "first": {"href": "https://transit.cloud.ibm.com/v1/transit_gateways/tg-1/connections"},
                "limit": 50
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", base),
                request::headers(contains(("x-correlation-id", "corr-1"))),
                request::body(json_decoded(eq(json!({
                    "network_type": "gre_tunnel",
                    "name": "connection-c-1",
                    "base_connection_id": "base-1",
                    "local_tunnel_ip": "192.168.100.20",
                    "remote_tunnel_ip": "192.168.101.20",
                    "remote_gateway_ip": "10.242.63.12",
                    "remote_bgp_asn": 65010,
                    "zone": {"name": "us-south-1"}
                })))),
            ])
            .respond_with(status_code(201).body(connection("c-1").to_string())),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", format!("{base}/c-1")))
                .respond_with(json_encoded(connection("c-1"))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", format!("{base}/c-1")),
                request::body(json_decoded(eq(json!({"prefix_filters_default": "deny"})))),
            ])
            .respond_with(json_encoded(connection("c-1"))),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", format!("{base}/c-1")))
                .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let list = client
            .list_transit_gateway_connections("tg-1")
            .set_name("connection-c-1")
            .by_item()
            .all()
            .await?;
        assert_eq!(list.len(), 1, "{list:?}");
        assert_eq!(list[0].prefix_filters.len(), 1);

        let created = client
            .create_transit_gateway_connection("tg-1")
            .set_network_type(network_type::GRE_TUNNEL)
            .set_name("connection-c-1")
            .set_base_connection_id("base-1")
            .set_local_tunnel_ip("192.168.100.20")
            .set_remote_tunnel_ip("192.168.101.20")
            .set_remote_gateway_ip("10.242.63.12")
            .set_remote_bgp_asn(65010)
            .set_zone(ZoneReference::new().set_name("us-south-1"))
            .set_x_correlation_id("corr-1")
            .send()
            .await?
            .into_body();
        assert_eq!(created.zone, Some(ZoneReference::new().set_name("us-south-1")));

        let got = client
            .get_transit_gateway_connection("tg-1", "c-1")
            .send()
            .await?
            .into_body();
        assert_eq!(got.remote_bgp_asn, Some(65010));
        client
            .update_transit_gateway_connection("tg-1", "c-1")
            .set_prefix_filters_default(prefix_filter_action::DENY)
            .send()
            .await?;
        client
            .delete_transit_gateway_connection("tg-1", "c-1")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn connection_actions() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/transit_gateways/tg-1/connections/c-1/actions"),
                request::query(url_decoded(contains(("version", VERSION)))),
                request::body(json_decoded(eq(json!({"action": "approve"})))),
            ])
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let response = client
            .create_transit_gateway_connection_actions("tg-1", "c-1")
            .set_action(connection_action::APPROVE)
            .send()
            .await?;
        assert_eq!(response.status(), http::StatusCode::NO_CONTENT);

        let err = client
            .create_transit_gateway_connection_actions("tg-1", "c-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn account_connections() -> Result<()> {
        let server = Server::run();
        let mut c = connection("c-9");
        c["transit_gateway"] = json!({"id": "tg-1", "crn": "crn:tg-1", "name": "gateway-tg-1"});
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/connections"),
                request::query(url_decoded(contains(("network_id", "crn:vpc-1")))),
            ])
            .respond_with(json_encoded(json!({
                "connections": [c],
                "first": {"href": "https://transit.cloud.ibm.com/v1/connections"},
                "limit": 50
            }))),
        );

        let client = test_client(&server).await?;
        let connections = client
            .list_connections()
            .set_network_id("crn:vpc-1")
            .by_item()
            .all()
            .await?;
        let gateway = connections[0].transit_gateway.as_ref().map(|g| g.id.as_str());
        assert_eq!(gateway, Some("tg-1"));
        Ok(())
    }

    #[tokio::test]
    async fn locations() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/locations")).respond_with(
                json_encoded(json!({"locations": [
                    {"name": "us-south", "billing_location": "us", "type": "region"},
                    {"name": "eu-de", "billing_location": "eu", "type": "region"}
                ]})),
            ),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/locations/us-south")).respond_with(
                json_encoded(json!({
                    "name": "us-south",
                    "billing_location": "us",
                    "type": "region",
                    "local_connection_locations": [
                        {"name": "us-south", "display_name": "Dallas", "type": "region"}
                    ]
                })),
            ),
        );

        let client = test_client(&server).await?;
        let all = client.list_gateway_locations().send().await?.into_body();
        let names = all.locations.iter().map(|l| l.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["us-south", "eu-de"]);
        let location = client.get_gateway_location("us-south").send().await?.into_body();
        assert_eq!(location.local_connection_locations[0].display_name, "Dallas");
        assert_eq!(location.r#type, "region");
        Ok(())
    }
}
