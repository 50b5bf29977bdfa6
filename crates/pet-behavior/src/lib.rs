//! `pet-behavior` — what pets say, and when.
//!
//! # Crate layout
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`phrases`] | `PhraseKind`, `PhraseBook`, default cat/dog books   |
//! | [`emitter`] | `MessageEmitter`, `ActiveMessage`                   |
//! | [`loader`]  | `load_phrase_book_csv`, `load_phrase_book_reader`   |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                |
//!
//! # Message model (summary)
//!
//! A pet shows at most one speech bubble at a time:
//!
//! ```text
//! {idle} --emit--> {showing, expires_at = now + duration}
//!                  --tick past expires_at--> {idle}
//!                  --emit--> {showing, fresh expires_at}
//! ```
//!
//! Expiry is data on the message itself, evaluated against the tick clock, so
//! replacing a message can never be undone early by a stale timeout.

pub mod emitter;
pub mod error;
pub mod loader;
pub mod phrases;

#[cfg(test)]
mod tests;

pub use emitter::{ActiveMessage, MessageEmitter};
pub use error::{BehaviorError, BehaviorResult};
pub use loader::{load_phrase_book_csv, load_phrase_book_reader};
pub use phrases::{PhraseBook, PhraseKind};
