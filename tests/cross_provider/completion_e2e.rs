use platformed_completions::{CompletionClient, Overrides, ProviderConfig, ProviderFactory};
use wiremock::MockServer;

use super::providers::{
    ai21::AI21TestSetup, cohere::CohereTestSetup, gooseai::GooseAITestSetup,
    openai::OpenAITestSetup, ProviderTestSetup,
};

/// Run the completion e2e test for a specific provider
async fn run_completion_test<T: ProviderTestSetup>() -> Result<(), Box<dyn std::error::Error>> {
    let config = T::get_config();
    let prompt = "hey i'm a robot who";

    // Start mock server
    let mock_server = MockServer::start().await;

    // Let the provider setup mount its required mocks
    T::mount_completion_mocks(&mock_server, prompt).await?;

    // Create provider instance through the registry
    let provider = ProviderFactory::create(
        &ProviderConfig::new(config.provider_type)
            .with_api_key(config.api_key.to_string())
            .with_base_url(mock_server.uri()),
    )?;
    let client = CompletionClient::from_boxed(provider);

    let completion = client.complete(prompt, &Overrides::new()).await?;

    // If we get here, wiremock matched the exact path, headers and payload
    assert_eq!(completion.prompt, prompt, "{} prompt", config.name);
    assert_eq!(
        completion.completion_text, config.expected_text,
        "{} completion text",
        config.name
    );
    assert_eq!(completion.raw_response, T::canned_response());
    assert_eq!(completion.request_params["prompt"], prompt);

    Ok(())
}

#[tokio::test]
async fn test_openai_completion() {
    run_completion_test::<OpenAITestSetup>()
        .await
        .expect("OpenAI completion test failed");
}

#[tokio::test]
async fn test_ai21_completion() {
    run_completion_test::<AI21TestSetup>()
        .await
        .expect("AI21 completion test failed");
}

#[tokio::test]
async fn test_cohere_completion() {
    run_completion_test::<CohereTestSetup>()
        .await
        .expect("Cohere completion test failed");
}

#[tokio::test]
async fn test_gooseai_completion() {
    run_completion_test::<GooseAITestSetup>()
        .await
        .expect("GooseAI completion test failed");
}
