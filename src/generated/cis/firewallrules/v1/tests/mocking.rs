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
    use ibm_cloud_networking_firewall_rules_v1 as fw;
    use fw::client::{FirewallRules, Identity};
    use fw::model::{DeletedFirewallRule, FirewallRule};

    mockall::mock! {
        #[derive(Debug)]
        FirewallRules {}
        impl fw::stub::FirewallRules for FirewallRules {
            async fn get_firewall_rule(&self, _req: fw::model::GetFirewallRuleRequest, _options: RequestOptions) -> gax::Result<Response<Envelope<FirewallRule>>>;
            async fn delete_firewall_rule(&self, _req: fw::model::DeleteFirewallRuleRequest, _options: RequestOptions) -> gax::Result<Response<Envelope<DeletedFirewallRule>>>;
        }
    }

    // Applications can test their code with a mocked client.
    async fn pause_check(client: &FirewallRules, id: &str) -> gax::Result<bool> {
        let rule = client
            .get_firewall_rule(id)
            .set_x_auth_user_token("token")
            .send()
            .await?
            .into_body()
            .result
            .unwrap_or_default();
        Ok(rule.paused)
    }

    #[tokio::test]
    async fn mocking() -> anyhow::Result<()> {
        let mut mock = MockFirewallRules::new();
        mock.expect_get_firewall_rule()
            .withf(|req, _| req.firewall_rule_identifier == "rule-1" && req.x_auth_user_token == "token")
            .return_once(|_, _| {
                Ok(Response::from(Envelope::from_result(
                    FirewallRule::new().set_id("rule-1").set_paused(true),
                )))
            });
        mock.expect_delete_firewall_rule().never();

        let client = FirewallRules::from_stub(Identity::new("test-crn", "test-zone"), mock);
        assert!(pause_check(&client, "rule-1").await?);
        Ok(())
    }
}
