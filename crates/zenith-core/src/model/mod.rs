pub mod emotion;
pub mod quote;
pub mod user;

pub use emotion::{Emotion, NewEmotion};
pub use quote::{NewQuote, Quote};
pub use user::User;
