//! Fluent construction of a [`Desktop`].

use pet_agent::PetDescriptor;
use pet_core::{PetId, SimConfig, Tick};
use pet_motion::DesktopBounds;

use crate::desktop::Desktop;
use crate::error::{SimError, SimResult};
use crate::pet::Pet;

/// Assembles a [`Desktop`] from a config, optional geometry, and descriptors.
///
/// Pets receive sequential [`PetId`]s in the order they are added, which also
/// fixes their per-pet RNG streams for the run.
pub struct DesktopBuilder {
    config:      SimConfig,
    bounds:      Option<DesktopBounds>,
    descriptors: Vec<PetDescriptor>,
}

impl DesktopBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            bounds:      None,
            descriptors: Vec::new(),
        }
    }

    /// Set the initial container geometry.  Omitting this models a desktop
    /// that has not been measured yet; pets chatter but do not move until
    /// [`Desktop::resize`] supplies geometry.
    pub fn bounds(mut self, bounds: DesktopBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Add a pet.  Descriptors are validated by
    /// [`pet_agent::PetDescriptorBuilder`]; the presets are always valid.
    pub fn pet(mut self, descriptor: PetDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    pub fn build(self) -> SimResult<Desktop> {
        if self.config.tick_duration_ms == 0 {
            return Err(SimError::Config("tick_duration_ms must be non-zero".into()));
        }

        let seed = self.config.seed;
        let pets = self
            .descriptors
            .into_iter()
            .enumerate()
            .map(|(i, d)| Pet::new(PetId(i as u32), d, seed, Tick::ZERO))
            .collect();

        Ok(Desktop::new(self.config, self.bounds, pets))
    }
}
