//! `PetDescriptor` and its small supporting enums.

use std::fmt;

use pet_behavior::PhraseBook;
use pet_core::{SpeedProfile, Vec2};

/// Which animal a descriptor renders as.  Purely cosmetic — behavior comes
/// from the descriptor's numbers and phrase book.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    Cat,
    Dog,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Species::Cat => "cat",
            Species::Dog => "dog",
        })
    }
}

/// Decorative theme selecting a face glyph.  Received from the enclosing
/// application's customization settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorScheme {
    #[default]
    Classic,
    Neon,
    Pastel,
    Monochrome,
}

/// Everything that makes one pet different from another.
///
/// `scale_percent` and `sprite_size` are render-only: they scale the drawn
/// sprite and never enter motion math.  Timer periods are in ticks; convert
/// wall-clock intervals with [`pet_core::SimClock::ticks_for_ms`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetDescriptor {
    pub name: String,
    pub species: Species,
    pub color_scheme: ColorScheme,

    /// Render scale as a percentage (100 = native sprite size).
    pub scale_percent: u32,

    /// Native sprite dimensions in pixels, for the rendering layer.
    pub sprite_size: Vec2,

    /// Where the pet appears on mount.
    pub spawn: Vec2,

    /// Movement speed profile.
    pub speed: SpeedProfile,

    /// Ticks between roam-target changes.
    pub retarget_interval_ticks: u64,

    /// Ticks between chatter-timer evaluations.
    pub chatter_interval_ticks: u64,

    /// Probability that a chatter-timer firing actually emits a phrase.
    pub chatter_probability: f64,

    /// Ticks a speech bubble stays visible.
    pub message_duration_ticks: u64,

    pub phrases: PhraseBook,
}

impl PetDescriptor {
    /// The face glyph for this pet's species and color scheme.
    pub fn face(&self) -> &'static str {
        match self.species {
            Species::Cat => "^•ﻌ•^",
            Species::Dog => match self.color_scheme {
                ColorScheme::Pastel     => "U・ᴥ・U",
                ColorScheme::Monochrome => "ʕ•_•ʔ",
                ColorScheme::Classic | ColorScheme::Neon => "ʕ•ᴥ•ʔ",
            },
        }
    }

    // ── Reference pets (50 ms tick) ───────────────────────────────────────

    /// The reference cat: spawns at (100, 300), retargets every 5 s, chats
    /// every 8 s.
    pub fn cat() -> Self {
        Self {
            name:                    "cat".to_string(),
            species:                 Species::Cat,
            color_scheme:            ColorScheme::Classic,
            scale_percent:           100,
            sprite_size:             Vec2::new(48.0, 48.0),
            spawn:                   Vec2::new(100.0, 300.0),
            speed:                   SpeedProfile::Normal,
            retarget_interval_ticks: 100,
            chatter_interval_ticks:  160,
            chatter_probability:     0.3,
            message_duration_ticks:  60,
            phrases:                 PhraseBook::cat(),
        }
    }

    /// The reference dog: spawns at (200, 350), retargets every 6 s, chats
    /// every 10 s.
    pub fn dog() -> Self {
        Self {
            name:                    "dog".to_string(),
            species:                 Species::Dog,
            color_scheme:            ColorScheme::Classic,
            scale_percent:           100,
            sprite_size:             Vec2::new(56.0, 48.0),
            spawn:                   Vec2::new(200.0, 350.0),
            speed:                   SpeedProfile::Normal,
            retarget_interval_ticks: 120,
            chatter_interval_ticks:  200,
            chatter_probability:     0.3,
            message_duration_ticks:  60,
            phrases:                 PhraseBook::dog(),
        }
    }
}
