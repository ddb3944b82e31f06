use super::{ProviderTestConfig, ProviderTestSetup};
use platformed_completions::ProviderType;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct CohereTestSetup;

#[async_trait::async_trait]
impl ProviderTestSetup for CohereTestSetup {
    fn get_config() -> ProviderTestConfig {
        ProviderTestConfig {
            name: "Cohere",
            provider_type: ProviderType::Cohere,
            api_key: "co-test",
            expected_text: " chases cars",
        }
    }

    fn canned_response() -> Value {
        json!({
            "id": "b8c4f1d2",
            "generations": [{"id": "g-0", "text": " chases cars"}],
            "prompt": "hey i'm a dog who"
        })
    }

    async fn mount_completion_mocks(
        mock_server: &MockServer,
        prompt: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let request_payload = json!({
            "prompt": prompt,
            "model": "xlarge",
            "max_tokens": 20,
            "temperature": 0.75,
            "num_generations": 1,
            "k": 0,
            "p": 0.75,
            "frequency_penalty": 0.0,
            "presence_penalty": 0.0,
            "stop_sequences": [],
            "return_likelihoods": "",
            "logit_bias": {}
        });

        Mock::given(method("POST"))
            .and(path("/generate"))
            .and(header("authorization", "Bearer co-test"))
            .and(header("cohere-version", "2021-11-08"))
            .and(body_json(request_payload))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::canned_response()))
            .expect(1)
            .mount(mock_server)
            .await;

        Ok(())
    }
}
