//! Fixed phrase lists, grouped by the situation that triggers them.

use pet_core::PetRng;

/// Which list a phrase is drawn from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PhraseKind {
    /// Idle chatter: clicks and the periodic chatter timer.
    Chatter,
    /// Emitted when the pet is released high above the resting surface.
    Falling,
    /// Emitted when a falling pet touches down on the taskbar line.
    Landed,
}

/// A pet's complete phrase inventory.
///
/// Phrases are data, not behavior: two pets with the same steering code feel
/// entirely different because their books differ.  Applications can replace a
/// book wholesale or load one from CSV via [`crate::load_phrase_book_csv`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhraseBook {
    pub chatter: Vec<String>,
    pub falling: Vec<String>,
    pub landed:  Vec<String>,
}

impl PhraseBook {
    pub fn new(chatter: Vec<String>, falling: Vec<String>, landed: Vec<String>) -> Self {
        Self { chatter, falling, landed }
    }

    /// Pick a phrase of `kind` uniformly at random.
    /// Returns `None` when that list is empty.
    pub fn choose(&self, kind: PhraseKind, rng: &mut PetRng) -> Option<&str> {
        rng.choose(self.list(kind)).map(String::as_str)
    }

    /// The backing list for `kind`.
    pub fn list(&self, kind: PhraseKind) -> &[String] {
        match kind {
            PhraseKind::Chatter => &self.chatter,
            PhraseKind::Falling => &self.falling,
            PhraseKind::Landed  => &self.landed,
        }
    }

    /// Total phrase count across all lists.
    pub fn len(&self) -> usize {
        self.chatter.len() + self.falling.len() + self.landed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ── Reference books ───────────────────────────────────────────────────

    /// The cat's phrases.
    pub fn cat() -> Self {
        Self::new(
            to_strings(&[
                "Meow! Need coffee?",
                "Coding time!",
                "Seoul is beautiful!",
                "I love jazz too!",
                "K-pop is life!",
                "Click on some folders!",
                "안녕하세요!",
                "こんにちは!",
                "مرحبا!",
                "Pet me!",
            ]),
            to_strings(&["Meow?! Whoa!"]),
            to_strings(&["Cats always land on their feet."]),
        )
    }

    /// The dog's phrases.
    pub fn dog() -> Self {
        Self::new(
            to_strings(&[
                "Woof! Let's play!",
                "I love walks!",
                "Got treats?",
                "Squirrel!",
                "Ball! Ball! Ball!",
                "Pet me please!",
                "안녕하세요!",
                "こんにちは!",
                "مرحبا!",
                "Ruff ruff!",
                "Drag me around!",
                "Ouch! That hurt!",
                "The taskbar is comfy!",
                "Digital bones please!",
                "I'm a good boy!",
            ]),
            to_strings(&["Woof! I like it down here!"]),
            to_strings(&["Woof! The taskbar is fun!"]),
        )
    }
}

fn to_strings(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|s| s.to_string()).collect()
}
