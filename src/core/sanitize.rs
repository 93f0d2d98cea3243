// src/core/sanitize.rs

/// "as Vikram" → "Vikram". Only a leading "as " is removed.
pub fn strip_role_prefix(s: &str) -> String {
    let t = s.trim();
    t.strip_prefix("as ").unwrap_or(t).trim().to_string()
}

/// Keep ASCII letters, digits and whitespace; drop the rest.
/// "Nawazuddin Siddiqui (Jr.)" → "Nawazuddin Siddiqui Jr"
pub fn search_safe(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    kept.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_prefix_only_leading() {
        assert_eq!(strip_role_prefix("as Rocky"), "Rocky");
        assert_eq!(strip_role_prefix("  as   Rocky "), "Rocky");
        assert_eq!(strip_role_prefix("Thomas as Shelby"), "Thomas as Shelby");
        assert_eq!(strip_role_prefix("Ash"), "Ash");
    }

    #[test]
    fn search_safe_keeps_ascii_alnum() {
        assert_eq!(search_safe("Nawazuddin Siddiqui (Jr.)"), "Nawazuddin Siddiqui Jr");
        assert_eq!(search_safe("  Rajinikanth! "), "Rajinikanth");
        assert_eq!(search_safe("Zoë"), "Zo");
    }
}
