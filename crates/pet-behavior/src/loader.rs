//! CSV phrase-book loader.
//!
//! # CSV format
//!
//! One row per phrase:
//!
//! ```csv
//! kind,text
//! chatter,Meow! Need coffee?
//! chatter,Coding time!
//! falling,Meow?! Whoa!
//! landed,Cats always land on their feet.
//! ```
//!
//! **`kind`** must be `chatter`, `falling`, or `landed`; rows are appended to
//! the matching list in file order.  An unrecognized kind is a parse error
//! rather than a silent skip, so a typo can't quietly mute a pet.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::phrases::{PhraseBook, PhraseKind};
use crate::BehaviorError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PhraseRecord {
    kind: String,
    text: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`PhraseBook`] from a CSV file.
pub fn load_phrase_book_csv(path: &Path) -> Result<PhraseBook, BehaviorError> {
    let file = std::fs::File::open(path).map_err(BehaviorError::Io)?;
    load_phrase_book_reader(file)
}

/// Like [`load_phrase_book_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded phrase data.
pub fn load_phrase_book_reader<R: Read>(reader: R) -> Result<PhraseBook, BehaviorError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut book = PhraseBook::default();

    for result in csv_reader.deserialize::<PhraseRecord>() {
        let row = result.map_err(|e| BehaviorError::Parse(e.to_string()))?;
        match parse_kind(&row.kind)? {
            PhraseKind::Chatter => book.chatter.push(row.text),
            PhraseKind::Falling => book.falling.push(row.text),
            PhraseKind::Landed  => book.landed.push(row.text),
        }
    }

    Ok(book)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_kind(s: &str) -> Result<PhraseKind, BehaviorError> {
    match s.trim() {
        "chatter" => Ok(PhraseKind::Chatter),
        "falling" => Ok(PhraseKind::Falling),
        "landed" => Ok(PhraseKind::Landed),
        other => Err(BehaviorError::Parse(format!(
            "invalid phrase kind {other:?}: expected \"chatter\", \"falling\", or \"landed\""
        ))),
    }
}
