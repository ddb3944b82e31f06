use super::{ProviderTestConfig, ProviderTestSetup};
use platformed_completions::ProviderType;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct OpenAITestSetup;

#[async_trait::async_trait]
impl ProviderTestSetup for OpenAITestSetup {
    fn get_config() -> ProviderTestConfig {
        ProviderTestConfig {
            name: "OpenAI",
            provider_type: ProviderType::OpenAI,
            api_key: "sk-test",
            expected_text: " a robot who dreams",
        }
    }

    fn canned_response() -> Value {
        json!({
            "id": "cmpl-6Xa",
            "object": "text_completion",
            "model": "text-davinci-002",
            "choices": [
                {"text": " a robot who dreams", "index": 0, "logprobs": null, "finish_reason": "length"}
            ],
            "usage": {"prompt_tokens": 6, "completion_tokens": 10, "total_tokens": 16}
        })
    }

    async fn mount_completion_mocks(
        mock_server: &MockServer,
        prompt: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let request_payload = json!({
            "prompt": prompt,
            "model": "text-davinci-002",
            "temperature": 1.0,
            "max_tokens": 10,
            "n": 1,
            "top_p": 1.0,
            "logprobs": null,
            "best_of": 1,
            "stop": null,
            "presence_penalty": 0.0,
            "frequency_penalty": 0.0
        });

        Mock::given(method("POST"))
            .and(path("/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_json(request_payload))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::canned_response()))
            .expect(1)
            .mount(mock_server)
            .await;

        Ok(())
    }
}
