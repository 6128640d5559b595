use serde::{Deserialize, Serialize};

/// Quote - a text/author pair filed under one emotion
///
/// `emotion` holds the id of the Emotion this quote belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Generated at insert time (UUID v4, or v5 for the built-in dataset)
    pub id: String,
    pub text: String,
    pub author: String,
    pub emotion: String,
}

impl Quote {
    /// Check whether this quote is filed under the given emotion key
    pub fn is_for(&self, emotion_key: &str) -> bool {
        self.emotion == emotion_key
    }
}

/// Insert payload for a Quote; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    pub text: String,
    pub author: String,
    pub emotion: String,
}

impl NewQuote {
    pub fn new(text: &str, author: &str, emotion: &str) -> Self {
        Self {
            text: text.to_string(),
            author: author.to_string(),
            emotion: emotion.to_string(),
        }
    }

    /// Attach an id, producing the stored record
    pub fn with_id(self, id: String) -> Quote {
        Quote {
            id,
            text: self.text,
            author: self.author,
            emotion: self.emotion,
        }
    }
}
