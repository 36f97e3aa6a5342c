//! Display text helpers.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Upper-case the first character of `raw`, leaving the rest untouched.
///
/// An empty input yields an empty string.
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
