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
    use ibm_cloud_networking_logpush_jobs_v1 as lp;
    use lp::client::{Identity, LogpushJobs};
    use lp::model::LogpushJob;

    mockall::mock! {
        #[derive(Debug)]
        LogpushJobs {}
        impl lp::stub::LogpushJobs for LogpushJobs {
            async fn get_logpush_jobs(&self, _req: lp::model::ListLogpushJobsRequest, _options: RequestOptions) -> gax::Result<Response<Envelope<Vec<LogpushJob>>>>;
        }
    }

    #[tokio::test]
    async fn mocking() -> anyhow::Result<()> {
        let mut mock = MockLogpushJobs::new();
        mock.expect_get_logpush_jobs().times(2).returning(|_, _| {
            Ok(Response::from(Envelope::from_result(vec![
                LogpushJob::new().set_id(1).set_enabled(true),
                LogpushJob::new().set_id(2),
            ])))
        });

        let identity = Identity::new("test-crn", "test-zone", "http_requests");
        let client = LogpushJobs::from_stub(identity, mock);
        assert_eq!(client.dataset(), "http_requests");
        for _ in 0..2 {
            let jobs = client
                .get_logpush_jobs()
                .send()
                .await?
                .into_body()
                .result
                .unwrap_or_default();
            let enabled = jobs.iter().filter(|j| j.enabled).count();
            assert_eq!(enabled, 1);
        }
        Ok(())
    }
}
