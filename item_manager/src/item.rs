use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier.
///
/// Endpoints disagree on whether ids are JSON strings or numbers, so both are
/// accepted and kept in their textual form.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(from = "RawId")]
pub struct ItemId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for ItemId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        }
    }
}

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
}

/// Body of create and update requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
}

impl ItemDraft {
    /// Trims both fields; `None` if either is empty afterwards.
    pub fn new(name: &str, description: &str) -> Option<Self> {
        let name = name.trim();
        let description = description.trim();
        if name.is_empty() || description.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            description: description.to_string(),
        })
    }
}
