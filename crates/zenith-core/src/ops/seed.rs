//! Built-in catalog dataset
//!
//! Ten emotions with five quotes each, loaded into a fresh `CatalogStore`
//! at process start. Emotion ids are fixed and quote ids are derived from
//! each quote's emotion and text, so both are the same in every process.

use std::time::Instant;

use super::store::CatalogStore;
use crate::errors::Result;
use crate::model::{NewEmotion, NewQuote};
use crate::{log_op_end, log_op_error, log_op_start};

/// Quotes per emotion in the built-in dataset
pub const QUOTES_PER_EMOTION: usize = 5;

/// (id, icon, display name)
pub const SEED_EMOTIONS: &[(&str, &str, &str)] = &[
    ("happy", "😊", "Happy"),
    ("sad", "😢", "Sad"),
    ("anxious", "😰", "Anxious"),
    ("motivated", "💪", "Motivated"),
    ("stressed", "😫", "Stressed"),
    ("grateful", "🙏", "Grateful"),
    ("confident", "✨", "Confident"),
    ("overwhelmed", "🌪️", "Overwhelmed"),
    ("hopeful", "🌅", "Hopeful"),
    ("peaceful", "🕊️", "Peaceful"),
];

/// (emotion id, text, author)
pub const SEED_QUOTES: &[(&str, &str, &str)] = &[
    ("happy", "Happiness is not something ready-made. It comes from your own actions.", "Dalai Lama"),
    ("happy", "The purpose of our lives is to be happy.", "Dalai Lama"),
    ("happy", "Happiness is when what you think, what you say, and what you do are in harmony.", "Mahatma Gandhi"),
    ("happy", "Very little is needed to make a happy life; it is all within yourself, in your way of thinking.", "Marcus Aurelius"),
    ("happy", "Count your age by friends, not years. Count your life by smiles, not tears.", "John Lennon"),
    ("sad", "The wound is the place where the Light enters you.", "Rumi"),
    ("sad", "Sadness flies away on the wings of time.", "Jean de La Fontaine"),
    ("sad", "The way sadness works is one of the strange riddles of the world.", "Lemony Snicket"),
    ("sad", "Tears are words that need to be written.", "Paulo Coelho"),
    ("sad", "Heavy hearts, like heavy clouds in the sky, are best relieved by the letting of a little water.", "Christopher Morley"),
    ("anxious", "You have been assigned this mountain to show others it can be moved.", "Mel Robbins"),
    ("anxious", "Anxiety is the dizziness of freedom.", "Søren Kierkegaard"),
    ("anxious", "Nothing diminishes anxiety faster than action.", "Walter Anderson"),
    ("anxious", "Worry does not empty tomorrow of its sorrow, it empties today of its strength.", "Corrie Ten Boom"),
    ("anxious", "You are braver than you believe, stronger than you seem, and smarter than you think.", "A.A. Milne"),
    ("motivated", "The only way to do great work is to love what you do.", "Steve Jobs"),
    ("motivated", "Success is not final, failure is not fatal: it is the courage to continue that counts.", "Winston Churchill"),
    ("motivated", "The future belongs to those who believe in the beauty of their dreams.", "Eleanor Roosevelt"),
    ("motivated", "It is during our darkest moments that we must focus to see the light.", "Aristotle"),
    ("motivated", "Don't watch the clock; do what it does. Keep going.", "Sam Levenson"),
    ("stressed", "You have power over your mind - not outside events. Realize this, and you will find strength.", "Marcus Aurelius"),
    ("stressed", "Stress is caused by being 'here' but wanting to be 'there'.", "Eckhart Tolle"),
    ("stressed", "The greatest weapon against stress is our ability to choose one thought over another.", "William James"),
    ("stressed", "Take time to make your soul happy.", "Unknown"),
    ("stressed", "Sometimes the most productive thing you can do is relax.", "Mark Black"),
    ("grateful", "Gratitude is not only the greatest of virtues but the parent of all others.", "Cicero"),
    ("grateful", "Be thankful for what you have; you'll end up having more.", "Oprah Winfrey"),
    ("grateful", "Gratitude makes sense of our past, brings peace for today, and creates a vision for tomorrow.", "Melody Beattie"),
    ("grateful", "The unthankful heart discovers no mercies; but the thankful heart will find, in every hour, some heavenly blessings.", "Henry Ward Beecher"),
    ("grateful", "Reflect upon your present blessings, of which every man has many - not on your past misfortunes, of which all men have some.", "Charles Dickens"),
    ("confident", "Believe you can and you're halfway there.", "Theodore Roosevelt"),
    ("confident", "Confidence is not 'they will like me'. Confidence is 'I'll be fine if they don't'.", "Christina Grimmie"),
    ("confident", "You are braver than you believe, stronger than you seem, and smarter than you think.", "A.A. Milne"),
    ("confident", "With confidence, you have won before you have started.", "Marcus Garvey"),
    ("confident", "The most beautiful thing you can wear is confidence.", "Blake Lively"),
    ("overwhelmed", "You don't have to see the whole staircase, just take the first step.", "Martin Luther King Jr."),
    ("overwhelmed", "One day at a time—this is enough. Do not look back and grieve over the past for it is gone.", "John Newton"),
    ("overwhelmed", "Sometimes the most important thing in a whole day is the rest we take between two deep breaths.", "Etty Hillesum"),
    ("overwhelmed", "Progress, not perfection.", "Unknown"),
    ("overwhelmed", "You have survived 100% of your worst days. You're doing great.", "Unknown"),
    ("hopeful", "Hope is the thing with feathers that perches in the soul.", "Emily Dickinson"),
    ("hopeful", "Everything you need is inside you – you just need to access it.", "Buddha"),
    ("hopeful", "The darkest hour has only sixty minutes.", "Morris Mandel"),
    ("hopeful", "Hope is being able to see that there is light despite all of the darkness.", "Desmond Tutu"),
    ("hopeful", "Once you choose hope, anything's possible.", "Christopher Reeve"),
    ("peaceful", "Peace comes from within. Do not seek it without.", "Buddha"),
    ("peaceful", "The quieter you become, the more able you are to hear.", "Rumi"),
    ("peaceful", "In the midst of winter, I found there was, within me, an invincible summer.", "Albert Camus"),
    ("peaceful", "Serenity is not freedom from the storm, but peace amid the storm.", "Unknown"),
    ("peaceful", "Peace is not absence of conflict, it is the ability to handle conflict by peaceful means.", "Ronald Reagan"),
];

/// Load the built-in dataset into `store`
///
/// Emotions go in first so every quote's emotion reference resolves.
///
/// # Errors
///
/// Fails with `EmotionAlreadyExists` when run against a store that was
/// already seeded.
pub fn seed_catalog(store: &mut CatalogStore) -> Result<()> {
    let start = Instant::now();
    log_op_start!("seed_catalog");

    let result = load(store);
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(()) => {
            log_op_end!(
                "seed_catalog",
                duration_ms = duration_ms,
                emotions = store.emotion_count() as u64,
                quotes = store.quote_count() as u64
            );
        }
        Err(err) => {
            log_op_error!("seed_catalog", err, duration_ms = duration_ms);
        }
    }

    result
}

fn load(store: &mut CatalogStore) -> Result<()> {
    for (id, icon, display_name) in SEED_EMOTIONS {
        store.add_emotion(NewEmotion::keyed(id, icon, display_name))?;
    }
    for (emotion, text, author) in SEED_QUOTES {
        store.add_quote_keyed(NewQuote::new(text, author, emotion))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dataset_shape() {
        assert_eq!(SEED_EMOTIONS.len(), 10);
        assert_eq!(SEED_QUOTES.len(), SEED_EMOTIONS.len() * QUOTES_PER_EMOTION);
    }

    #[test]
    fn test_every_quote_references_a_seeded_emotion() {
        let ids: HashSet<&str> = SEED_EMOTIONS.iter().map(|(id, _, _)| *id).collect();
        for (emotion, _, _) in SEED_QUOTES {
            assert!(ids.contains(emotion), "orphan quote for {}", emotion);
        }
    }

    #[test]
    fn test_seeding_twice_fails() {
        let mut store = CatalogStore::new();
        seed_catalog(&mut store).unwrap();
        assert!(seed_catalog(&mut store).is_err());
    }
}
