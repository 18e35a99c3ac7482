use diet_recipe::model::DietType;
use diet_recipe::providers::OpenAIProvider;
use diet_recipe::{generate_recipe, generate_recipe_text};

fn completion_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{
            "message": { "content": content }
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_generate_recipe_structures_the_reply() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            "Ingredients:\n- Tofu\n- Broccoli\nInstructions:\n1. Stir-fry the tofu\n2. Add the broccoli",
        ))
        .create();

    let provider = OpenAIProvider::with_base_url(
        "fake_api_key".to_string(),
        server.url(),
        "gpt-4".to_string(),
    );

    let parsed = generate_recipe(DietType::Vegan, &provider).await.unwrap();

    assert_eq!(parsed.ingredients, vec!["Tofu", "Broccoli"]);
    assert_eq!(
        parsed.instructions,
        vec!["Stir-fry the tofu", "Add the broccoli"]
    );
    mock.assert();
}

#[tokio::test]
async fn test_generate_recipe_text_returns_raw_reply() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("A one-line recipe."))
        .create();

    let provider = OpenAIProvider::with_base_url(
        "fake_api_key".to_string(),
        server.url(),
        "gpt-4".to_string(),
    );

    let raw = generate_recipe_text(DietType::None, &provider).await.unwrap();
    assert_eq!(raw, "A one-line recipe.");
}

#[tokio::test]
async fn test_generate_recipe_wraps_provider_errors() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/v1/chat/completions")
        .with_status(503)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "overloaded"}"#)
        .create();

    let provider = OpenAIProvider::with_base_url(
        "fake_api_key".to_string(),
        server.url(),
        "gpt-4".to_string(),
    );

    let result = generate_recipe(DietType::Vegetarian, &provider).await;
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .starts_with("Recipe generation failed:"));
}
