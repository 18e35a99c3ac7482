use crate::model::DietType;

/// The system prompt sent with every recipe request.
///
/// It fixes the reply layout (Name / Description / Ingredients /
/// Instructions) so the downstream structurer has sections to find.
///
/// The prompt is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
pub const CHEF_SYSTEM_PROMPT: &str = include_str!("prompt.txt");

/// Dietary constraint sentence for the given preference.
pub fn dietary_instructions(diet: DietType) -> &'static str {
    match diet {
        DietType::Vegetarian => "The recipe must be vegetarian: no meat, poultry, or fish.",
        DietType::Vegan => {
            "The recipe must be vegan: no meat, dairy, eggs, or any other animal products."
        }
        DietType::None => "There are no dietary restrictions.",
    }
}

/// Build the user prompt for a dinner recipe request.
pub fn build_recipe_prompt(diet: DietType) -> String {
    let descriptor = match diet {
        DietType::Vegetarian => "vegetarian ",
        DietType::Vegan => "vegan ",
        DietType::None => "",
    };

    format!(
        "Generate a simple {descriptor}dinner recipe.\n\
         Include:\n\
         - Recipe name\n\
         - Cooking time\n\
         - Ingredients list\n\
         - Step-by-step instructions\n\n\
         {}\n\
         Keep it simple and easy to follow. Make it delicious and healthy.",
        dietary_instructions(diet)
    )
}
