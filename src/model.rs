use serde::{Deserialize, Serialize};

/// Dietary preference accepted by the service.
///
/// Unrecognized values deserialize to `None`, so a request with a diet the
/// service does not know about still gets a recipe, just without dietary
/// constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    Vegetarian,
    Vegan,
    #[default]
    #[serde(other)]
    None,
}

impl DietType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Vegetarian => "vegetarian",
            DietType::Vegan => "vegan",
            DietType::None => "none",
        }
    }
}

impl std::fmt::Display for DietType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recipe reply split into rough ingredient and instruction lists.
///
/// Built once from the completion text and immutable afterwards. When no
/// section markers are found, `ingredients` holds a single placeholder and
/// `instructions` holds the trimmed raw text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedRecipe {
    pub raw_text: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// Body of `POST /recipe`.
#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    pub diet_type: DietType,
}

/// Reply of `POST /recipe`.
#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub diet_type: DietType,
    pub recipe: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_type_deserializes_known_values() {
        let diet: DietType = serde_json::from_str("\"vegetarian\"").unwrap();
        assert_eq!(diet, DietType::Vegetarian);

        let diet: DietType = serde_json::from_str("\"vegan\"").unwrap();
        assert_eq!(diet, DietType::Vegan);

        let diet: DietType = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(diet, DietType::None);
    }

    #[test]
    fn test_diet_type_unknown_value_falls_back_to_none() {
        let diet: DietType = serde_json::from_str("\"keto\"").unwrap();
        assert_eq!(diet, DietType::None);
    }

    #[test]
    fn test_diet_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DietType::Vegan).unwrap(), "\"vegan\"");
        assert_eq!(serde_json::to_string(&DietType::None).unwrap(), "\"none\"");
    }

    #[test]
    fn test_recipe_request_round_trip() {
        let req: RecipeRequest = serde_json::from_str(r#"{"diet_type": "vegan"}"#).unwrap();
        assert_eq!(req.diet_type, DietType::Vegan);
    }
}
