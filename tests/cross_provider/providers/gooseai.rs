use super::{ProviderTestConfig, ProviderTestSetup};
use platformed_completions::ProviderType;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct GooseAITestSetup;

#[async_trait::async_trait]
impl ProviderTestSetup for GooseAITestSetup {
    fn get_config() -> ProviderTestConfig {
        ProviderTestConfig {
            name: "GooseAI",
            provider_type: ProviderType::GooseAI,
            api_key: "goose-test",
            expected_text: " beeps at night",
        }
    }

    fn canned_response() -> Value {
        json!({
            "id": "4f2c",
            "object": "text_completion",
            "choices": [{"text": " beeps at night", "index": 0, "finish_reason": "length"}]
        })
    }

    async fn mount_completion_mocks(
        mock_server: &MockServer,
        prompt: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let request_payload = json!({
            "prompt": prompt,
            "model": "gpt-neo-20b",
            "max_tokens": 16,
            "min_tokens": 1,
            "temperature": 1.0,
            "n": 1,
            "top_p": 1.0,
            "top_k": 0,
            "tfs": 1.0,
            "top_a": 1.0,
            "typical_p": 1.0,
            "stop": null,
            "logit_bias": null,
            "logprobs": null,
            "presence_penalty": 0.0,
            "frequency_penalty": 0.0,
            "repetition_penalty": 1.0,
            "repetition_penalty_slope": 0,
            "repetition_penalty_range": 0
        });

        Mock::given(method("POST"))
            .and(path("/engines/gpt-neo-20b/completions"))
            .and(header("authorization", "Bearer goose-test"))
            .and(body_json(request_payload))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::canned_response()))
            .expect(1)
            .mount(mock_server)
            .await;

        Ok(())
    }
}
