//! Skill text tokenizer.
//!
//! Skill text is a comma-delimited list such as `"Python, SQL,react"`. Each token is
//! trimmed and lowercased, and empty tokens (from `",,"`, trailing commas or an
//! empty string) are dropped. So `"Python"` and `" python"` are the same skill.

pub const SKILL_DELIMITER: char = ',';

/// Splits skill text into normalized tokens, keeping duplicates and their order.
pub fn tokenize_skills(text: &str) -> Vec<String> {
    text.split(SKILL_DELIMITER)
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}
