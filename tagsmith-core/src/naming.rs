//! Sanitizers mapping arbitrary logical names to valid Rust symbols.
//!
//! Both functions are total and deterministic. They are not injective: two
//! different inputs may sanitize to the same symbol, and callers that care
//! must detect the collision themselves.

use crate::utils::{to_pascal_case, to_screaming_snake_case};

/// Type names that are keywords in type position.
const RESERVED_TYPE_NAMES: &[&str] = &["Self"];

/// Sanitize an identifier into an associated constant name.
pub fn sanitize_const_name(identifier: &str) -> String {
    let name = to_screaming_snake_case(identifier);
    if name.is_empty() {
        return "UNNAMED".to_string();
    }
    prefix_leading_digit(name)
}

/// Sanitize a namespace into a type name.
pub fn sanitize_type_name(parent: &str) -> String {
    let name = to_pascal_case(parent);
    if name.is_empty() {
        return "Unnamed".to_string();
    }
    if RESERVED_TYPE_NAMES.contains(&name.as_str()) {
        return format!("{}_", name);
    }
    prefix_leading_digit(name)
}

fn prefix_leading_digit(name: String) -> String {
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", name)
    } else {
        name
    }
}
