use std::path::Path;

const MAX_KEY_WORDS: usize = 3;

/// Suggest a translation key for a hardcoded literal.
///
/// The namespace is the file's base name with its first letter lower-cased;
/// the leaf is up to three words of the literal, camel-cased. Two literals
/// in one file can get the same suggestion.
///
/// ```
/// use lingua_guard::rules::hardcoded::generate_key;
///
/// assert_eq!(generate_key("Sign Up Now, it's free!", "src/Pricing.tsx"), "pricing.signUpNow");
/// assert_eq!(generate_key("¡¿!?", "src/Hero.tsx"), "hero.text");
/// ```
pub fn generate_key(text: &str, file_path: &str) -> String {
    let namespace = Path::new(file_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(lower_first)
        .unwrap_or_default();

    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    let key_part: String = cleaned
        .split_whitespace()
        .take(MAX_KEY_WORDS)
        .enumerate()
        .map(|(i, word)| if i == 0 { word.to_string() } else { upper_first(word) })
        .collect();

    if key_part.is_empty() {
        format!("{}.text", namespace)
    } else {
        format!("{}.{}", namespace, key_part)
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
