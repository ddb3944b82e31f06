use super::{ProviderTestConfig, ProviderTestSetup};
use platformed_completions::ProviderType;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct AI21TestSetup;

#[async_trait::async_trait]
impl ProviderTestSetup for AI21TestSetup {
    fn get_config() -> ProviderTestConfig {
        ProviderTestConfig {
            name: "AI21",
            provider_type: ProviderType::AI21,
            api_key: "ai21-test",
            expected_text: " likes to fetch",
        }
    }

    fn canned_response() -> Value {
        json!({
            "id": "7921a78e",
            "prompt": {"text": "hey i'm a dog who", "tokens": []},
            "completions": [
                {
                    "data": {"text": " likes to fetch", "tokens": []},
                    "finishReason": {"reason": "length", "length": 10}
                }
            ]
        })
    }

    async fn mount_completion_mocks(
        mock_server: &MockServer,
        prompt: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let request_payload = json!({
            "prompt": prompt,
            "engine": "j1-large",
            "temperature": 1.0,
            "maxTokens": 10,
            "topKReturn": 0,
            "numResults": 1,
            "topP": 1.0,
            "stopSequences": []
        });

        Mock::given(method("POST"))
            .and(path("/j1-large/complete"))
            .and(header("authorization", "Bearer ai21-test"))
            .and(body_json(request_payload))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::canned_response()))
            .expect(1)
            .mount(mock_server)
            .await;

        Ok(())
    }
}
