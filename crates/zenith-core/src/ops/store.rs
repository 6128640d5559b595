use std::collections::HashMap;

use uuid::Uuid;

use crate::errors::{Result, ZenithError};
use crate::model::{Emotion, NewEmotion, NewQuote, Quote};

/// Namespace for quote ids derived from emotion and text
const QUOTE_ID_NAMESPACE: Uuid = Uuid::from_u128(0x5a3e_9c1d_7b42_4f08_a6e1_2d9b_c0f4_8e73);

/// In-memory catalog of emotions and quotes
///
/// Records are kept in insertion order with an id index on the side, so
/// listings come back in the order the seed data declares them.
/// Written during seeding, then shared read-only (typically behind an `Arc`);
/// there is no update or delete path.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    emotions: Vec<Emotion>,
    emotion_index: HashMap<String, usize>,
    quotes: Vec<Quote>,
    quote_index: HashMap<String, usize>,
}

impl CatalogStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the built-in dataset
    ///
    /// # Errors
    ///
    /// Only fails if the built-in dataset breaks a catalog invariant.
    pub fn seeded() -> Result<Self> {
        let mut store = Self::new();
        super::seed::seed_catalog(&mut store)?;
        Ok(store)
    }

    /// Insert an emotion under its caller-supplied id
    ///
    /// # Errors
    ///
    /// * `InvalidEmotion` - if the id is blank
    /// * `EmotionAlreadyExists` - if the id is already present
    pub fn add_emotion(&mut self, new: NewEmotion) -> Result<&Emotion> {
        if new.id.trim().is_empty() {
            return Err(ZenithError::InvalidEmotion {
                reason: "id cannot be empty".to_string(),
            });
        }
        if self.emotion_index.contains_key(&new.id) {
            return Err(ZenithError::EmotionAlreadyExists { emotion_id: new.id });
        }

        let idx = self.emotions.len();
        self.emotion_index.insert(new.id.clone(), idx);
        self.emotions.push(new.into());
        Ok(&self.emotions[idx])
    }

    /// Insert a quote, assigning it a fresh UUID v4 id
    ///
    /// # Errors
    ///
    /// * `InvalidQuote` - if text or author is blank
    /// * `UnknownEmotion` - if the emotion reference is not in the store
    pub fn add_quote(&mut self, new: NewQuote) -> Result<&Quote> {
        self.validate_quote(&new)?;

        let mut id = Uuid::new_v4().to_string();
        while self.quote_index.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }
        Ok(self.insert_quote(new, id))
    }

    /// Insert a quote under a UUID v5 id derived from its emotion and text
    ///
    /// The same record gets the same id in every process, so ids handed out
    /// by one run still resolve in the next.
    ///
    /// # Errors
    ///
    /// * `InvalidQuote` - if text or author is blank
    /// * `UnknownEmotion` - if the emotion reference is not in the store
    /// * `QuoteAlreadyExists` - if the same text is already filed under the emotion
    pub fn add_quote_keyed(&mut self, new: NewQuote) -> Result<&Quote> {
        self.validate_quote(&new)?;

        let name = format!("{}\n{}", new.emotion, new.text);
        let id = Uuid::new_v5(&QUOTE_ID_NAMESPACE, name.as_bytes()).to_string();
        if self.quote_index.contains_key(&id) {
            return Err(ZenithError::QuoteAlreadyExists { quote_id: id });
        }
        Ok(self.insert_quote(new, id))
    }

    fn validate_quote(&self, new: &NewQuote) -> Result<()> {
        if new.text.trim().is_empty() {
            return Err(ZenithError::InvalidQuote {
                reason: "text cannot be empty".to_string(),
            });
        }
        if new.author.trim().is_empty() {
            return Err(ZenithError::InvalidQuote {
                reason: "author cannot be empty".to_string(),
            });
        }
        if !self.emotion_index.contains_key(&new.emotion) {
            return Err(ZenithError::UnknownEmotion {
                emotion: new.emotion.clone(),
            });
        }
        Ok(())
    }

    fn insert_quote(&mut self, new: NewQuote, id: String) -> &Quote {
        let idx = self.quotes.len();
        self.quote_index.insert(id.clone(), idx);
        self.quotes.push(new.with_id(id));
        &self.quotes[idx]
    }

    /// All emotions, in insertion order
    pub fn list_emotions(&self) -> &[Emotion] {
        &self.emotions
    }

    /// All quotes, in insertion order
    pub fn list_quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Quotes filed under `emotion_key`, in insertion order
    ///
    /// Returns an empty vector when nothing matches; callers decide whether
    /// that is an error.
    pub fn list_quotes_by_emotion(&self, emotion_key: &str) -> Vec<&Quote> {
        self.quotes.iter().filter(|q| q.is_for(emotion_key)).collect()
    }

    /// Get an emotion by id
    ///
    /// # Errors
    ///
    /// Returns `EmotionNotFound` if no emotion has this id.
    pub fn get_emotion(&self, id: &str) -> Result<&Emotion> {
        self.emotion_index
            .get(id)
            .map(|&idx| &self.emotions[idx])
            .ok_or_else(|| ZenithError::EmotionNotFound {
                emotion_id: id.to_string(),
            })
    }

    /// Get a quote by id
    ///
    /// # Errors
    ///
    /// Returns `QuoteNotFound` if no quote has this id.
    pub fn get_quote(&self, id: &str) -> Result<&Quote> {
        self.quote_index
            .get(id)
            .map(|&idx| &self.quotes[idx])
            .ok_or_else(|| ZenithError::QuoteNotFound {
                quote_id: id.to_string(),
            })
    }

    pub fn emotion_count(&self) -> usize {
        self.emotions.len()
    }

    pub fn quote_count(&self) -> usize {
        self.quotes.len()
    }

    /// True while the store holds neither emotions nor quotes
    pub fn is_empty(&self) -> bool {
        self.emotions.is_empty() && self.quotes.is_empty()
    }
}
