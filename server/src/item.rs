use serde::{Serialize, Deserialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Request body accepted by create and update.
#[derive(Clone, Deserialize, Debug)]
pub struct ItemPayload {
    pub name: String,
    pub description: String,
}

impl ItemPayload {
    /// Trims both fields and returns `None` if either ends up empty.
    pub fn normalized(&self) -> Option<(String, String)> {
        let name = self.name.trim();
        let description = self.description.trim();
        if name.is_empty() || description.is_empty() {
            return None;
        }
        Some((name.to_string(), description.to_string()))
    }
}
