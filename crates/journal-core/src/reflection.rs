//! Journal entries and their category tags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category name to ordered tags, e.g. `"Physical" -> ["Physical activity"]`.
pub type Categories = BTreeMap<String, Vec<String>>;

/// A single user-authored journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    /// Server-assigned identifier.
    pub id: String,
    /// Email of the owning user. Never changes.
    pub owner_email: String,
    /// Entry text, never empty.
    pub content: String,
    /// Optional mood label (e.g. "Happy").
    #[serde(default)]
    pub mood: Option<String>,
    /// Category tags. Empty sequences are never stored.
    #[serde(default)]
    pub categories: Categories,
    /// RFC 3339 creation timestamp.
    #[serde(alias = "timestamp")]
    pub created_at: String,
}

/// Keyword rules: category, tag, trigger substrings.
const CATEGORY_RULES: &[(&str, &str, &[&str])] = &[
    ("Professional", "Work insights", &["work", "meeting"]),
    ("Physical", "Physical activity", &["exercise", "run"]),
    ("Mental", "Emotional state", &["think", "feel"]),
    ("Social", "Social interaction", &["friend", "social"]),
];

/// Derive category tags from the text by case-insensitive substring match.
///
/// This is a rough heuristic: "run" also matches "brunch".
pub fn categorize(content: &str) -> Categories {
    let lower = content.to_lowercase();
    CATEGORY_RULES
        .iter()
        .filter(|(_, _, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, tag, _)| (category.to_string(), vec![tag.to_string()]))
        .collect()
}

/// Drop categories whose tag list is empty (or only blank tags).
pub fn normalize_categories(categories: Categories) -> Categories {
    categories
        .into_iter()
        .filter_map(|(name, tags)| {
            let tags: Vec<String> = tags
                .into_iter()
                .filter(|tag| !tag.trim().is_empty())
                .collect();
            if name.trim().is_empty() || tags.is_empty() {
                None
            } else {
                Some((name, tags))
            }
        })
        .collect()
}
