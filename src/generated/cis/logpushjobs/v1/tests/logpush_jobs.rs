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

//! Verify the logpush jobs operations send the expected requests.

#[cfg(test)]
mod tests {
    use auth::credentials::bearer_token;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use ibm_cloud_networking_logpush_jobs_v1::client::LogpushJobs;
    use ibm_cloud_networking_logpush_jobs_v1::model::{
        LogpushJobCos, LogpushJobIbmcl, dataset, frequency,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    const CRN: &str = "test-crn";
    const ZONE: &str = "test-zone";
    const COS: &str = "cos://my-bucket/logs?region=us-south&instance-id=my-instance";

    async fn test_client(server: &Server) -> Result<LogpushJobs> {
        let client = LogpushJobs::builder(CRN, ZONE, dataset::HTTP_REQUESTS)
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(bearer_token::Builder::new("test-token").build()?)
            .build()
            .await?;
        Ok(client)
    }

    fn envelope(result: serde_json::Value) -> serde_json::Value {
        json!({"success": true, "errors": [], "messages": [], "result": result})
    }

    fn job(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "name": "my-job",
            "enabled": true,
            "dataset": "http_requests",
            "frequency": "high",
            "logpull_options": "timestamps=rfc3339",
            "destination_conf": COS,
            "last_complete": "2025-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn jobs_v1() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/test-crn/zones/test-zone/logpush/jobs",
            ))
            .respond_with(json_encoded(envelope(json!([job(1), job(2)])))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/test-crn/zones/test-zone/logpush/jobs"),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "name": "my-job",
                    "enabled": true,
                    "logpull_options": "timestamps=rfc3339",
                    "destination_conf": COS,
                    "ownership_challenge": "challenge",
                    "dataset": "http_requests",
                    "frequency": "high"
                })))),
            ])
            .respond_with(json_encoded(envelope(job(42)))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/test-crn/zones/test-zone/logpush/jobs/42",
            ))
            .respond_with(json_encoded(envelope(job(42)))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/v1/test-crn/zones/test-zone/logpush/jobs/42"),
                request::body(json_decoded(eq(json!({"enabled": false, "frequency": "low"})))),
            ])
            .respond_with(json_encoded(envelope(job(42)))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "DELETE",
                "/v1/test-crn/zones/test-zone/logpush/jobs/42",
            ))
            .respond_with(json_encoded(envelope(json!({})))),
        );

        let client = test_client(&server).await?;
        let jobs = client
            .get_logpush_jobs()
            .send()
            .await?
            .into_body()
            .result
            .unwrap_or_default();
        assert_eq!(jobs.iter().map(|j| j.id).collect::<Vec<_>>(), vec![1, 2]);

        let created = client
            .create_logpush_job()
            .set_name("my-job")
            .set_enabled(true)
            .set_logpull_options("timestamps=rfc3339")
            .set_destination_conf(COS)
            .set_ownership_challenge("challenge")
            .set_dataset(dataset::HTTP_REQUESTS)
            .set_frequency(frequency::HIGH)
            .send()
            .await?
            .into_body();
        let created = created.result.unwrap_or_default();
        assert_eq!(created.id, 42);
        assert_eq!(created.destination_conf, COS);
        assert_eq!(created.last_complete.as_deref(), Some("2025-01-01T00:00:00Z"));

        let got = client.get_logpush_job(42).send().await?.into_body();
        assert_eq!(got.result.map(|j| j.name), Some("my-job".to_string()));

        let response = client
            .update_logpush_job(42)
            .set_enabled(false)
            .set_frequency(frequency::LOW)
            .send()
            .await?;
        assert_eq!(response.status(), 200);

        let deleted = client.delete_logpush_job(42).send().await?.into_body();
        assert!(deleted.success);
        Ok(())
    }

    #[tokio::test]
    async fn datasets() -> Result<()> {
        let server = Server::run();
        for version in ["v1", "v2"] {
            server.expect(
                Expectation::matching(request::method_path(
                    "GET",
                    format!("/{version}/test-crn/zones/test-zone/logpush/datasets/http_requests/fields"),
                ))
                .respond_with(json_encoded(envelope(json!({
                    "ClientIP": "IP address of the client",
                    "EdgeStartTimestamp": "Timestamp at which the edge received request"
                })))),
            );
            server.expect(
                Expectation::matching(request::method_path(
                    "GET",
                    format!("/{version}/test-crn/zones/test-zone/logpush/datasets/http_requests/jobs"),
                ))
                .respond_with(json_encoded(envelope(json!([job(7)])))),
            );
        }

        let client = test_client(&server).await?;
        let fields = client
            .list_fields_for_dataset()
            .send()
            .await?
            .into_body()
            .result
            .unwrap_or_default();
        assert_eq!(
            fields.get("ClientIP").map(String::as_str),
            Some("IP address of the client")
        );
        let fields = client
            .list_fields_for_dataset_v2()
            .send()
            .await?
            .into_body()
            .result
            .unwrap_or_default();
        assert_eq!(fields.len(), 2);

        let jobs = client.list_logpush_jobs_for_dataset().send().await?.into_body();
        assert_eq!(jobs.result.map(|v| v.len()), Some(1));
        let jobs = client.list_logpush_jobs_for_dataset_v2().send().await?.into_body();
        assert_eq!(jobs.result.map(|v| v.len()), Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn ownership_v1() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/test-crn/zones/test-zone/logpush/ownership"),
                request::body(json_decoded(eq(json!({"destination_conf": COS})))),
            ])
            .respond_with(json_encoded(envelope(json!({
                "filename": "logs/challenge-filename.txt",
                "valid": true,
                "message": ""
            })))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/v1/test-crn/zones/test-zone/logpush/ownership/validate"
                ),
                request::body(json_decoded(eq(json!({
                    "destination_conf": COS,
                    "ownership_challenge": "challenge"
                })))),
            ])
            .respond_with(json_encoded(envelope(json!({"valid": true})))),
        );

        let client = test_client(&server).await?;
        let challenge = client
            .get_logpush_ownership()
            .set_destination_conf(COS)
            .send()
            .await?
            .into_body();
        assert_eq!(
            challenge.result.map(|c| c.filename),
            Some("logs/challenge-filename.txt".to_string())
        );
        let validation = client
            .validate_logpush_ownership_challenge()
            .set_destination_conf(COS)
            .set_ownership_challenge("challenge")
            .send()
            .await?
            .into_body();
        assert_eq!(validation.result.map(|v| v.valid), Some(true));
        Ok(())
    }

    #[tokio::test]
    async fn jobs_v2() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/test-crn/zones/test-zone/logpush/jobs"),
                request::body(json_decoded(eq(json!({
                    "name": "my-job",
                    "ibmcl": {
                        "instance_id": "logs-instance",
                        "region": "us-south",
                        "api_key": "secret-key"
                    },
                    "dataset": "firewall_events"
                })))),
            ])
            .respond_with(json_encoded(envelope(json!({
                "id": 5,
                "name": "my-job",
                "enabled": false,
                "dataset": "firewall_events",
                "ibmcl": {"instance_id": "logs-instance", "region": "us-south"}
            })))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/v2/test-crn/zones/test-zone/logpush/jobs/5"),
                request::body(json_decoded(eq(json!({
                    "enabled": true,
                    "logdna": {"hostname": "my-host", "ingress_key": "key", "region": "us-south"}
                })))),
            ])
            .respond_with(json_encoded(envelope(json!({"id": 5, "enabled": true})))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v2/test-crn/zones/test-zone/logpush/jobs",
            ))
            .respond_with(json_encoded(envelope(json!([{"id": 5}])))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v2/test-crn/zones/test-zone/logpush/jobs/5",
            ))
            .respond_with(json_encoded(envelope(json!({"id": 5})))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "DELETE",
                "/v2/test-crn/zones/test-zone/logpush/jobs/5",
            ))
            .respond_with(json_encoded(envelope(json!({})))),
        );

        let client = test_client(&server).await?;
        let created = client
            .create_logpush_job_v2()
            .set_name("my-job")
            .set_ibmcl(
                LogpushJobIbmcl::new()
                    .set_instance_id("logs-instance")
                    .set_region("us-south")
                    .set_api_key("secret-key"),
            )
            .set_dataset(dataset::FIREWALL_EVENTS)
            .send()
            .await?
            .into_body()
            .result
            .unwrap_or_default();
        assert_eq!(created.id, 5);
        assert_eq!(
            created.ibmcl,
            Some(json!({"instance_id": "logs-instance", "region": "us-south"}))
        );

        let response = client
            .update_logpush_job_v2(5)
            .set_enabled(true)
            .set_logdna(json!({"hostname": "my-host", "ingress_key": "key", "region": "us-south"}))
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        let jobs = client.get_logpush_jobs_v2().send().await?.into_body();
        assert_eq!(jobs.result.map(|v| v.len()), Some(1));
        let response = client.get_logpush_job_v2(5).send().await?;
        assert_eq!(response.status(), 200);
        let response = client.delete_logpush_job_v2(5).send().await?;
        assert_eq!(response.status(), 200);
        Ok(())
    }

    #[tokio::test]
    async fn ownership_v2() -> Result<()> {
        let cos = json!({"bucket_name": "my-bucket", "id": "cos-instance", "region": "us-south"});
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/test-crn/zones/test-zone/logpush/ownership"),
                request::body(json_decoded(eq(json!({"cos": cos.clone()})))),
            ])
            .respond_with(json_encoded(envelope(json!({"filename": "challenge.txt"})))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/v2/test-crn/zones/test-zone/logpush/ownership/validate"
                ),
                request::body(json_decoded(eq(json!({
                    "cos": cos,
                    "ownership_challenge": "challenge"
                })))),
            ])
            .respond_with(json_encoded(envelope(json!({"valid": false})))),
        );

        let destination = LogpushJobCos::new()
            .set_bucket_name("my-bucket")
            .set_id("cos-instance")
            .set_region("us-south");
        let client = test_client(&server).await?;
        let challenge = client
            .get_logpush_ownership_v2()
            .set_cos(destination.clone())
            .send()
            .await?
            .into_body();
        assert_eq!(
            challenge.result.map(|c| c.filename),
            Some("challenge.txt".to_string())
        );
        let validation = client
            .validate_logpush_ownership_challenge_v2()
            .set_cos(destination)
            .set_ownership_challenge("challenge")
            .send()
            .await?
            .into_body();
        assert_eq!(validation.result.map(|v| v.valid), Some(false));
        Ok(())
    }

    #[tokio::test]
    async fn missing_parameters() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;

        let err = client.get_logpush_job(0).send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(
            err.to_string().contains("Missing required parameters: job_id"),
            "{err}"
        );

        let err = client
            .validate_logpush_ownership_challenge()
            .send()
            .await
            .unwrap_err();
        assert!(
            err.to_string().contains(
                "Missing required parameters: destination_conf, ownership_challenge"
            ),
            "{err}"
        );

        let err = client
            .validate_logpush_ownership_challenge()
            .set_destination_conf("")
            .set_ownership_challenge("challenge")
            .send()
            .await
            .unwrap_err();
        assert!(
            err.to_string()
                .contains("Missing required parameters: destination_conf"),
            "{err}"
        );
        Ok(())
    }

    #[test]
    fn api_key_is_censored() {
        let destination = LogpushJobIbmcl::new()
            .set_instance_id("logs-instance")
            .set_api_key("super-secret");
        let got = format!("{destination:?}");
        assert!(!got.contains("super-secret"), "{got}");
        assert!(got.contains("logs-instance"), "{got}");
    }

    #[tokio::test]
    async fn identity() -> Result<()> {
        let credentials = bearer_token::Builder::new("test-token").build()?;
        let client = LogpushJobs::new(CRN, ZONE, dataset::RANGE_EVENTS, credentials)?;
        assert_eq!(client.dataset(), "range_events");
        assert_eq!(client.zone_id(), ZONE);
        assert_eq!(
            client.service_url(),
            ibm_cloud_networking_logpush_jobs_v1::DEFAULT_SERVICE_URL
        );

        let credentials = bearer_token::Builder::new("test-token").build()?;
        let err = LogpushJobs::new(CRN, ZONE, "", credentials).unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        assert!(
            err.to_string()
                .contains("Missing required parameters: dataset"),
            "{err}"
        );
        Ok(())
    }
}
