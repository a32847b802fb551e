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
    use ibm_cloud_networking_direct_link_v1::client::DirectLink;
    use ibm_cloud_networking_direct_link_v1::model::{
        ResourceReference, gateway_action, gateway_type, statistic_type, virtual_connection_type,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    const VERSION: &str = "2019-12-13";
    const PDF: &[u8] = b"%PDF-1.4 test document";

    async fn test_client(server: &Server) -> Result<DirectLink> {
        let client = DirectLink::builder(VERSION)
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(bearer_token::Builder::new("test-token").build()?)
            .build()
            .await?;
        Ok(client)
    }

    fn gateway(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": "my-gateway",
            "type": "dedicated",
            "crn": format!("crn:v1:bluemix:public:directlink:dal03:a/acct::dedicated:{id}"),
            "speed_mbps": 1000,
            "global": true,
            "metered": false,
            "bgp_asn": 64999,
            "bgp_ibm_asn": 13884,
            "location_name": "dal03",
            "location_display_name": "Dallas 3",
            "operational_status": "awaiting_completion_notice",
            "resource_group": {"id": "rg-1"},
            "created_at": "2025-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn list_gateways() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/gateways"),
                request::query(url_decoded(contains(("version", VERSION)))),
                request::headers(contains(("authorization", "Bearer test-token"))),
            ])
            .respond_with(json_encoded(json!({"gateways": [gateway("gw-1"), gateway("gw-2")]}))),
        );

        let client = test_client(&server).await?;
        let gateways = client.list_gateways().send().await?.into_body().gateways;
        let ids = gateways.iter().map(|g| g.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["gw-1", "gw-2"]);
        assert_eq!(gateways[0].r#type, gateway_type::DEDICATED);
        assert_eq!(gateways[0].bgp_ibm_asn, Some(13884));
        assert_eq!(
            gateways[0].resource_group,
            Some(ResourceReference::new().set_id("rg-1"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_gateway() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/gateways"),
                request::query(url_decoded(contains(("version", VERSION)))),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "name": "my-gateway",
                    "type": "connect",
                    "speed_mbps": 1000,
                    "global": true,
                    "metered": false,
                    "bgp_asn": 64999,
                    "port": {"id": "port-1"}
                })))),
            ])
            .respond_with(status_code(201).body(gateway("gw-1").to_string())),
        );

        let client = test_client(&server).await?;
        let created = client
            .create_gateway()
            .set_name("my-gateway")
            .set_type(gateway_type::CONNECT)
            .set_speed_mbps(1000)
            .set_global(true)
            .set_metered(false)
            .set_bgp_asn(64999)
            .set_port(ResourceReference::new().set_id("port-1"))
            .send()
            .await?
            .into_body();
        assert_eq!(created.id, "gw-1");
        assert_eq!(created.operational_status, "awaiting_completion_notice");
        Ok(())
    }

    #[tokio::test]
    async fn gateway_lifecycle() -> Result<()> {
        let server = Server::run();
        let path = "/gateways/gw-1";
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", path),
                request::query(url_decoded(contains(("version", VERSION)))),
            ])
            .respond_with(json_encoded(gateway("gw-1"))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", path),
                request::body(json_decoded(eq(json!({"name": "new-name", "speed_mbps": 2000})))),
            ])
            .respond_with(json_encoded(gateway("gw-1"))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", path),
                request::query(url_decoded(contains(("version", VERSION)))),
            ])
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let got = client.get_gateway("gw-1").send().await?.into_body();
        assert_eq!(got.location_name, "dal03");
        let updated = client
            .update_gateway("gw-1")
            .set_name("new-name")
            .set_speed_mbps(2000)
            .send()
            .await?;
        assert_eq!(updated.status(), http::StatusCode::OK);
        let deleted = client.delete_gateway("gw-1").send().await?;
        assert_eq!(deleted.status(), http::StatusCode::NO_CONTENT);
        Ok(())
    }

    #[tokio::test]
    async fn gateway_action() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/gateways/gw-1/actions"),
                request::body(json_decoded(eq(json!({
                    "action": "create_gateway_approve",
                    "global": false,
                    "metered": true
                })))),
            ])
            .respond_with(json_encoded(gateway("gw-1"))),
        );

        let client = test_client(&server).await?;
        let got = client
            .create_gateway_action("gw-1")
            .set_action(gateway_action::CREATE_GATEWAY_APPROVE)
            .set_global(false)
            .set_metered(true)
            .send()
            .await?
            .into_body();
        assert_eq!(got.id, "gw-1");
        Ok(())
    }

    #[tokio::test]
    async fn gateway_action_requires_action() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client.create_gateway_action("gw-1").send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("action"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn upload_completion_notice() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/gateways/gw-1/completion_notice"),
                request::query(url_decoded(contains(("version", VERSION)))),
                request::headers(contains(key("content-type"))),
            ])
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let response = client
            .create_gateway_completion_notice("gw-1")
            .set_upload(PDF)
            .send()
            .await?;
        assert_eq!(response.status(), http::StatusCode::NO_CONTENT);
        Ok(())
    }

    #[tokio::test]
    async fn upload_completion_notice_requires_file() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .create_gateway_completion_notice("gw-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("upload"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn download_documents() -> Result<()> {
        let server = Server::run();
        for document in ["completion_notice", "letter_of_authorization"] {
            server.expect(
                Expectation::matching(all_of![
                    request::method_path("GET", format!("/gateways/gw-1/{document}")),
                    request::headers(contains(("accept", "application/pdf"))),
                ])
                .respond_with(
                    status_code(200)
                        .insert_header("content-type", "application/pdf")
                        .body(PDF),
                ),
            );
        }

        let client = test_client(&server).await?;
        let notice = client
            .list_gateway_completion_notice("gw-1")
            .send()
            .await?
            .into_body()
            .collect()
            .await?;
        assert_eq!(notice.as_ref(), PDF);
        let loa = client
            .list_gateway_letter_of_authorization("gw-1")
            .send()
            .await?
            .into_body()
            .collect()
            .await?;
        assert_eq!(loa.as_ref(), PDF);
        Ok(())
    }

    #[tokio::test]
    async fn statistics() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/gateways/gw-1/statistics"),
                request::query(url_decoded(contains(("type", "macsec_mka")))),
                request::query(url_decoded(contains(("version", VERSION)))),
            ])
            .respond_with(json_encoded(json!({"statistics": [{
                "type": "macsec_mka",
                "data": "MKA statistics",
                "created_at": "2025-01-01T00:00:00Z"
            }]}))),
        );

        let client = test_client(&server).await?;
        let got = client
            .get_gateway_statistics("gw-1")
            .set_type(statistic_type::MACSEC_MKA)
            .send()
            .await?
            .into_body();
        assert_eq!(got.statistics.len(), 1, "{got:?}");
        assert_eq!(got.statistics[0].data, "MKA statistics");

        let err = client
            .get_gateway_statistics("gw-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn offerings() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/offering_types/dedicated/locations",
            ))
            .respond_with(json_encoded(json!({"locations": [{
                "name": "dal03",
                "display_name": "Dallas 3",
                "location_type": "PoP",
                "market": "Dallas",
                "market_geography": "N/S America",
                "mzr": true,
                "offering_type": "dedicated",
                "provision_enabled": true,
                "vpc_region": "us-south"
            }]}))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/offering_types/dedicated/locations/dal03/cross_connect_routers",
            ))
            .respond_with(json_encoded(json!({"cross_connect_routers": [
                {"router_name": "xcr01.dal03", "total_connections": 3}
            ]}))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/offering_types/connect/speeds",
            ))
            .respond_with(json_encoded(json!({"speeds": [
                {"link_speed": 1000}, {"link_speed": 2000}
            ]}))),
        );

        let client = test_client(&server).await?;
        let locations = client
            .list_offering_type_locations("dedicated")
            .send()
            .await?
            .into_body()
            .locations;
        assert_eq!(locations[0].vpc_region.as_deref(), Some("us-south"));
        assert!(locations[0].mzr);

        let routers = client
            .list_offering_type_location_cross_connect_routers("dedicated", "dal03")
            .send()
            .await?
            .into_body()
            .cross_connect_routers;
        assert_eq!(routers[0].total_connections, 3);

        let speeds = client
            .list_offering_type_speeds("connect")
            .send()
            .await?
            .into_body()
            .speeds;
        let speeds = speeds.iter().map(|s| s.link_speed).collect::<Vec<_>>();
        assert_eq!(speeds, vec![1000, 2000]);
        Ok(())
    }

    fn port(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "direct_link_count": 1,
            "label": "XCR-FRK-CS-SEC-01",
            "location_display_name": "Frankfurt 3",
            "location_name": "fra03",
            "provider_name": "provider_1",
            "supported_link_speeds": [1000, 2000]
        })
    }

    #[tokio::test]
    async fn list_ports_by_item() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/ports"),
                request::query(url_decoded(contains(("limit", "2")))),
                request::query(url_decoded(not(contains(key("start"))))),
            ])
            .respond_with(json_encoded(json!({
                "ports": [port("p-1"), port("p-2")],
                "first": {"href": "https://directlink.cloud.ibm.com/v1/ports?limit=2"},
                "next": {"href": "https://directlink.cloud.ibm.com/v1/ports?start=abc&limit=2", "start": "abc"},
                "limit": 2,
                "total_count": 3
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/ports"),
                request::query(url_decoded(contains(("start", "abc")))),
                request::query(url_decoded(contains(("limit", "2")))),
            ])
            .respond_with(json_encoded(json!({
                "ports": [port("p-3")],
                "first": {"href": "https://directlink.cloud.ibm.com/v1/ports?limit=2"},
                "limit": 2,
                "total_count": 3
            }))),
        );

        let client = test_client(&server).await?;
        let ports = client.list_ports().set_limit(2).by_item().all().await?;
        let ids = ports.iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["p-1", "p-2", "p-3"]);
        Ok(())
    }

    #[tokio::test]
    async fn get_port() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/ports/p-1"))
                .respond_with(json_encoded(port("p-1"))),
        );

        let client = test_client(&server).await?;
        let got = client.get_port("p-1").send().await?.into_body();
        assert_eq!(got.supported_link_speeds, vec![1000, 2000]);
        Ok(())
    }

    fn virtual_connection(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": "my-connection",
            "type": "vpc",
            "network_id": "crn:v1:bluemix:public:is:us-east:a/acct::vpc:my-vpc",
            "status": "pending",
            "created_at": "2025-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn virtual_connections() -> Result<()> {
        let server = Server::run();
        let base = "/gateways/gw-1/virtual_connections";
        server.expect(
            Expectation::matching(request::method_path("GET", base))
                .respond_with(json_encoded(json!({"virtual_connections": [virtual_connection("vc-1")]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", base),
                request::body(json_decoded(eq(json!({
                    "name": "my-connection",
                    "type": "vpc",
                    "network_id": "crn:v1:bluemix:public:is:us-east:a/acct::vpc:my-vpc"
                })))),
            ])
            .respond_with(status_code(201).body(virtual_connection("vc-1").to_string())),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", format!("{base}/vc-1")))
                .respond_with(json_encoded(virtual_connection("vc-1"))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", format!("{base}/vc-1")),
                request::body(json_decoded(eq(json!({"status": "approved"})))),
            ])
            .respond_with(json_encoded(virtual_connection("vc-1"))),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", format!("{base}/vc-1")))
                .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let list = client
            .list_gateway_virtual_connections("gw-1")
            .send()
            .await?
            .into_body();
        assert_eq!(list.virtual_connections.len(), 1, "{list:?}");
        let created = client
            .create_gateway_virtual_connection("gw-1")
            .set_name("my-connection")
            .set_type(virtual_connection_type::VPC)
            .set_network_id("crn:v1:bluemix:public:is:us-east:a/acct::vpc:my-vpc")
            .send()
            .await?
            .into_body();
        assert_eq!(created.status, "pending");
        let got = client
            .get_gateway_virtual_connection("gw-1", "vc-1")
            .send()
            .await?
            .into_body();
        assert_eq!(got.r#type, virtual_connection_type::VPC);
        client
            .update_gateway_virtual_connection("gw-1", "vc-1")
            .set_status("approved")
            .send()
            .await?;
        client
            .delete_gateway_virtual_connection("gw-1", "vc-1")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn create_virtual_connection_requires_name_and_type() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .create_gateway_virtual_connection("gw-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let msg = err.to_string();
        assert!(msg.contains("name") && msg.contains("type"), "{msg}");
        Ok(())
    }

    #[tokio::test]
    async fn empty_path_parameter() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client.get_gateway("").send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/gateways/missing")).respond_with(
                status_code(404)
                    .insert_header("content-type", "application/json")
                    .body(
                        json!({
                            "errors": [{"code": "not_found", "message": "Gateway not found"}],
                            "trace": "trace-1"
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let err = client.get_gateway("missing").send().await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        let envelope = err.envelope().expect("error envelope");
        assert_eq!(envelope.success, None);
        assert_eq!(envelope.trace.as_deref(), Some("trace-1"));
        assert_eq!(envelope.errors[0]["code"], "not_found");
        Ok(())
    }
}
