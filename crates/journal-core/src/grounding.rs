//! Advisory check that a reply draws on the user's own reflections.

use crate::reflection::Reflection;

/// Number of leading characters of a reflection looked for in the reply.
pub const GROUNDING_PREFIX_CHARS: usize = 10;

/// Whether `reply` quotes, case-insensitively, the opening characters of any
/// reflection. Reflections shorter than the prefix are matched whole.
///
/// Only drives a UI hint; it never blocks or alters the reply.
pub fn is_grounded(reply: &str, reflections: &[Reflection]) -> bool {
    let reply = reply.to_lowercase();
    reflections.iter().any(|reflection| {
        let prefix: String = reflection
            .content
            .trim()
            .chars()
            .take(GROUNDING_PREFIX_CHARS)
            .collect::<String>()
            .to_lowercase();
        !prefix.is_empty() && reply.contains(&prefix)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflection::Categories;

    fn reflection(content: &str) -> Reflection {
        Reflection {
            id: "r".to_string(),
            owner_email: "a@example.com".to_string(),
            content: content.to_string(),
            mood: None,
            categories: Categories::new(),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        let reflections = vec![reflection("Had a productive team meeting today")];
        assert!(is_grounded(
            "You mentioned you HAD A PRODUCTIVE week.",
            &reflections
        ));
    }

    #[test]
    fn test_no_match() {
        let reflections = vec![reflection("Had a productive team meeting today")];
        assert!(!is_grounded("Try drinking more water.", &reflections));
        assert!(!is_grounded("anything", &[]));
    }

    #[test]
    fn test_short_reflection_matched_whole() {
        let reflections = vec![reflection("Tired")];
        assert!(is_grounded("You said you felt tired.", &reflections));
    }

    #[test]
    fn test_blank_reflection_never_matches() {
        let reflections = vec![reflection("   ")];
        assert!(!is_grounded("anything at all", &reflections));
    }
}
