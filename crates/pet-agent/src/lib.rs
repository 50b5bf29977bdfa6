//! `pet-agent` — per-pet configuration.
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`descriptor`] | `PetDescriptor`, `Species`, `ColorScheme`, presets  |
//! | [`builder`]    | `PetDescriptorBuilder` (fluent construction)        |
//! | [`error`]      | `DescriptorError`, `DescriptorResult<T>`            |
//!
//! # Design note
//!
//! The cat and the dog run identical steering, gravity, drag, and message
//! code; everything that distinguishes them — spawn point, speed, timer
//! periods, phrases, face glyphs — lives in a [`PetDescriptor`].  New pet
//! kinds are new descriptors, not new types.

pub mod builder;
pub mod descriptor;
pub mod error;

#[cfg(test)]
mod tests;

pub use builder::PetDescriptorBuilder;
pub use descriptor::{ColorScheme, PetDescriptor, Species};
pub use error::{DescriptorError, DescriptorResult};
