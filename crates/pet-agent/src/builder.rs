//! Fluent builder for [`PetDescriptor`].
//!
//! # Usage
//!
//! ```rust
//! use pet_agent::{PetDescriptorBuilder, Species};
//! use pet_core::SpeedProfile;
//!
//! let descriptor = PetDescriptorBuilder::new("momo", Species::Dog)
//!     .speed(SpeedProfile::Fast)
//!     .chatter_probability(0.5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(descriptor.name, "momo");
//! ```

use pet_behavior::PhraseBook;
use pet_core::{SpeedProfile, Vec2};

use crate::descriptor::{ColorScheme, PetDescriptor, Species};
use crate::error::{DescriptorError, DescriptorResult};

/// Fluent builder for [`PetDescriptor`].
///
/// Starts from the species' reference descriptor ([`PetDescriptor::cat`] /
/// [`PetDescriptor::dog`]), so only the fields an application cares about
/// need to be set.  [`build`](Self::build) validates the result.
pub struct PetDescriptorBuilder {
    descriptor: PetDescriptor,
}

impl PetDescriptorBuilder {
    pub fn new(name: impl Into<String>, species: Species) -> Self {
        let mut descriptor = match species {
            Species::Cat => PetDescriptor::cat(),
            Species::Dog => PetDescriptor::dog(),
        };
        descriptor.name = name.into();
        Self { descriptor }
    }

    pub fn color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.descriptor.color_scheme = scheme;
        self
    }

    /// Render scale percentage; does not change motion math.
    pub fn scale_percent(mut self, percent: u32) -> Self {
        self.descriptor.scale_percent = percent;
        self
    }

    pub fn spawn(mut self, spawn: Vec2) -> Self {
        self.descriptor.spawn = spawn;
        self
    }

    pub fn speed(mut self, speed: SpeedProfile) -> Self {
        self.descriptor.speed = speed;
        self
    }

    pub fn retarget_interval_ticks(mut self, ticks: u64) -> Self {
        self.descriptor.retarget_interval_ticks = ticks;
        self
    }

    pub fn chatter_interval_ticks(mut self, ticks: u64) -> Self {
        self.descriptor.chatter_interval_ticks = ticks;
        self
    }

    pub fn chatter_probability(mut self, p: f64) -> Self {
        self.descriptor.chatter_probability = p;
        self
    }

    pub fn message_duration_ticks(mut self, ticks: u64) -> Self {
        self.descriptor.message_duration_ticks = ticks;
        self
    }

    /// Replace the species' default phrase book.
    pub fn phrases(mut self, phrases: PhraseBook) -> Self {
        self.descriptor.phrases = phrases;
        self
    }

    /// Validate and return the descriptor.
    pub fn build(self) -> DescriptorResult<PetDescriptor> {
        let d = self.descriptor;

        if !(0.0..=1.0).contains(&d.chatter_probability) {
            return Err(DescriptorError::ProbabilityOutOfRange {
                name: d.name,
                got:  d.chatter_probability,
            });
        }
        for (ticks, what) in [
            (d.retarget_interval_ticks, "retarget interval"),
            (d.chatter_interval_ticks, "chatter interval"),
            (d.message_duration_ticks, "message duration"),
        ] {
            if ticks == 0 {
                return Err(DescriptorError::ZeroInterval { name: d.name.clone(), what });
            }
        }
        if d.phrases.chatter.is_empty() {
            return Err(DescriptorError::NoChatterPhrases { name: d.name });
        }

        Ok(d)
    }
}
