use serde::{Deserialize, Serialize};

/// Emotion - a category a visitor can pick to receive a matching quote
///
/// `id` is the stable key quotes refer to; `name` is used for lookups and
/// equals `id` in the shipped dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emotion {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub display_name: String,
}

/// Insert payload for an Emotion
///
/// Unlike quotes, emotions carry a caller-supplied id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmotion {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub display_name: String,
}

impl NewEmotion {
    /// Build an emotion whose name equals its id
    pub fn keyed(id: &str, icon: &str, display_name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            icon: icon.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

impl From<NewEmotion> for Emotion {
    fn from(new: NewEmotion) -> Self {
        Self {
            id: new.id,
            name: new.name,
            icon: new.icon,
            display_name: new.display_name,
        }
    }
}
