//! Shared string utilities for symbol generation.

/// Split a name into words.
///
/// Any character that is not ASCII alphanumeric separates words. A capital
/// letter starts a new word after a lowercase letter or digit, and before the
/// last capital of an acronym run (`"HTTPServer"` -> `["HTTP", "Server"]`).
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_ascii_uppercase() {
            if let Some(prev) = current.chars().last() {
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
                let boundary = prev.is_ascii_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_ascii_uppercase() && next_is_lower);
                if boundary {
                    words.push(std::mem::take(&mut current));
                }
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Convert a string to PascalCase (e.g., "login_screen" -> "LoginScreen").
///
/// Only the first letter of each word is changed, so acronyms survive
/// (`"HTTPServer"` stays `"HTTPServer"`).
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect()
}

/// Convert a string to SCREAMING_SNAKE_CASE (e.g., "usernameField" -> "USERNAME_FIELD").
pub fn to_screaming_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| word.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}
