use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use log::error;
use serde_json::{json, Value};

use crate::model::{ParsedRecipe, RecipeRequest, RecipeResponse};
use crate::providers::build_recipe_prompt;
use crate::structurer;

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/recipe", post(create_recipe))
}

async fn index() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Diet Recipe App!",
        "endpoints": {
            "/recipe": "POST - Get a dinner recipe based on your diet",
            "/health": "GET - Service health check"
        }
    }))
}

async fn create_recipe(
    State(state): State<AppState>,
    Json(req): Json<RecipeRequest>,
) -> Result<Json<RecipeResponse>, (StatusCode, Json<Value>)> {
    let prompt = build_recipe_prompt(req.diet_type);

    let raw_text = state.provider.generate(&prompt).await.map_err(|e| {
        error!("recipe generation failed: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": format!("Error generating recipe: {e}") })),
        )
    })?;

    let ParsedRecipe {
        raw_text,
        ingredients,
        instructions,
    } = structurer::parse(&raw_text);

    Ok(Json(RecipeResponse {
        diet_type: req.diet_type,
        recipe: raw_text,
        ingredients,
        instructions,
    }))
}
