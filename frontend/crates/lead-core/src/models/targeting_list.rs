//! Normalization for targeting criteria.
//!
//! The backend sends each targeting field either as a list of strings or as
//! one comma-separated string. Both collapse to a list of trimmed, non-empty
//! entries here, so nothing past deserialization sees the string form.
//! Order is kept and duplicates are not removed.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrText {
    List(Vec<Option<String>>),
    Text(String),
}

/// Normalize one targeting field from its wire form.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let wire = Option::<ListOrText>::deserialize(deserializer)?;

    Ok(match wire {
        Some(ListOrText::List(items)) => items
            .into_iter()
            .flatten()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
        Some(ListOrText::Text(text)) => split(&text),
        None => Vec::new(),
    })
}

/// Split free text on commas, trimming and dropping empties.
pub fn split(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Comma-join for the free-text mirrors.
pub fn join(items: &[String]) -> String {
    items.join(", ")
}
