//! Best-effort structuring of free-text recipe replies.
//!
//! Completion models return recipes as prose. This pass splits the text into
//! ingredient and instruction lists by scanning for section headers and list
//! markers. It never fails: a reply with no recognizable structure comes back
//! as a one-element fallback pair wrapping the raw text.

use crate::model::ParsedRecipe;

/// Placeholder ingredient entry used when no sections are detected.
const FALLBACK_INGREDIENTS: &str = "See recipe text below";

/// List markers accepted at the start of a section line.
const BULLETS: [char; 3] = ['•', '-', '*'];

/// Split a recipe reply into ingredient and instruction lists.
///
/// Header lines ("Ingredients:", "Instructions:") switch the active section
/// and are dropped; metadata lines ("Name:", "Description:") close it.
/// Bulleted lines inside a section become entries with the marker stripped;
/// numbered lines inside the instructions section keep the text after the
/// first period. Anything else inside a section is dropped.
pub fn parse(raw_text: &str) -> ParsedRecipe {
    let mut ingredients = Vec::new();
    let mut instructions = Vec::new();

    let mut in_ingredients = false;
    let mut in_instructions = false;

    for line in raw_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let lower = line.to_lowercase();

        if lower.contains("ingredient") && lower.contains(':') {
            in_ingredients = true;
            in_instructions = false;
            continue;
        }
        if lower.contains("instruction") && lower.contains(':') {
            in_instructions = true;
            in_ingredients = false;
            continue;
        }
        if lower.starts_with("name:")
            || lower.starts_with("description:")
            || lower.starts_with("recipe name:")
        {
            in_ingredients = false;
            in_instructions = false;
            continue;
        }

        if in_ingredients {
            if let Some(item) = strip_bullet(line) {
                ingredients.push(item.to_string());
            }
        } else if in_instructions {
            if let Some(step) = strip_bullet(line) {
                instructions.push(step.to_string());
            } else if line.starts_with(|c: char| c.is_ascii_digit()) {
                // "1. Mix" keeps "Mix"; a digit line without a period has
                // no step text after the number and is dropped.
                if let Some((_, rest)) = line.split_once('.') {
                    let rest = rest.trim();
                    if !rest.is_empty() {
                        instructions.push(rest.to_string());
                    }
                }
            }
        }
    }

    if ingredients.is_empty() && instructions.is_empty() {
        ingredients.push(FALLBACK_INGREDIENTS.to_string());
        instructions.push(raw_text.trim().to_string());
    }

    ParsedRecipe {
        raw_text: raw_text.to_string(),
        ingredients,
        instructions,
    }
}

/// Strip a single leading bullet glyph, returning the trimmed remainder.
fn strip_bullet(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    match chars.next() {
        Some(c) if BULLETS.contains(&c) => Some(chars.as_str().trim()),
        _ => None,
    }
}
