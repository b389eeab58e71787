//! System prompt composition from a user's journal history.

use std::fmt::Write;

use sha2::{Digest, Sha256};

use crate::reflection::Reflection;

/// Compose the system instruction for the assistant.
///
/// `reflections` is expected most-recent-first and is rendered in the order
/// received, one bullet per entry. Content is passed through verbatim, so an
/// entry containing newlines spans several lines of the prompt. The preamble
/// is emitted even when there are no reflections.
pub fn compose_system_prompt(
    assistant_name: &str,
    assistant_tone: &str,
    current_mood: Option<&str>,
    reflections: &[Reflection],
) -> String {
    let mood = current_mood
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or("unknown");

    let mut prompt = format!(
        "You are {}, a {} AI assistant helping the user make sense of their personal journal. \
         The user's current mood is {}. \
         The user has the following reflections:",
        assistant_name, assistant_tone, mood
    );

    for reflection in reflections {
        let entry_mood = reflection
            .mood
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or("No mood");
        let _ = write!(prompt, "\n- ({}) {}", entry_mood, reflection.content);
    }

    prompt
}

/// Compute a stable SHA-256 fingerprint for a prompt string.
///
/// Logged in place of the prompt text, which contains journal content.
pub fn hash_prompt(prompt: &str) -> String {
    let digest = Sha256::digest(prompt.as_bytes());
    digest.iter().fold(String::with_capacity(64), |mut hex, byte| {
        let _ = write!(hex, "{:02x}", byte);
        hex
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflection::Categories;

    fn reflection(mood: Option<&str>, content: &str) -> Reflection {
        Reflection {
            id: content.to_string(),
            owner_email: "a@example.com".to_string(),
            content: content.to_string(),
            mood: mood.map(str::to_string),
            categories: Categories::new(),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
        }
    }

    fn bullet_lines(prompt: &str) -> Vec<&str> {
        prompt.lines().filter(|line| line.starts_with("- ")).collect()
    }

    #[test]
    fn test_empty_reflections_keeps_preamble() {
        let prompt = compose_system_prompt("Nova", "friendly", Some("Happy"), &[]);

        assert!(prompt.contains("Nova"));
        assert!(prompt.contains("friendly"));
        assert!(prompt.contains("Happy"));
        assert!(bullet_lines(&prompt).is_empty());
    }

    #[test]
    fn test_bullets_preserve_input_order() {
        let reflections = vec![reflection(Some("Sad"), "X"), reflection(None, "Y")];
        let prompt = compose_system_prompt("Nova", "friendly", None, &reflections);

        assert_eq!(bullet_lines(&prompt), vec!["- (Sad) X", "- (No mood) Y"]);
    }

    #[test]
    fn test_missing_mood_is_unknown() {
        let prompt = compose_system_prompt("Nova", "calm", None, &[]);
        assert!(prompt.contains("current mood is unknown"));

        let blank = compose_system_prompt("Nova", "calm", Some("  "), &[]);
        assert!(blank.contains("current mood is unknown"));
    }

    #[test]
    fn test_multiline_content_passed_verbatim() {
        let reflections = vec![reflection(None, "line one\nline two")];
        let prompt = compose_system_prompt("Nova", "calm", None, &reflections);
        assert!(prompt.ends_with("- (No mood) line one\nline two"));
    }

    #[test]
    fn test_hash_prompt_stable() {
        let first = hash_prompt("test prompt");
        let second = hash_prompt("test prompt");
        let different = hash_prompt("another prompt");

        assert_eq!(first, second);
        assert_ne!(first, different);
        assert_eq!(first.len(), 64);
    }
}
