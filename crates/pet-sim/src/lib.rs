//! `pet-sim` — tick loop orchestrator for the pixel_pets framework.
//!
//! # Tick anatomy (per pet, in order)
//!
//! ```text
//! ① Expiry    — clear the speech bubble if its lifetime elapsed.
//! ② Held gate — if the user is dragging the pet, stop here; the drag
//!               handler is the sole writer of position until release.
//! ③ Chatter   — periodic timer; on fire, emit a phrase with the
//!               descriptor's probability (no geometry required).
//! ④ Retarget  — periodic timer; on fire, pick a fresh roam target
//!               within the container's margin-bounded region.
//! ⑤ Motion    — one steering or gravity step toward the target.
//! ```
//!
//! Steps ④–⑤ short-circuit while the container is unmeasured; worst case is
//! a visually static pet until geometry arrives.
//!
//! Everything runs on the single driving thread.  There is no locking —
//! the held gate in step ② is the whole synchronization story, exactly
//! because callbacks are serialized.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pet_agent::PetDescriptor;
//! use pet_core::SimConfig;
//! use pet_motion::DesktopBounds;
//! use pet_sim::{DesktopBuilder, NoopObserver};
//!
//! let mut desktop = DesktopBuilder::new(SimConfig::default())
//!     .bounds(DesktopBounds::new(800.0, 448.0))
//!     .pet(PetDescriptor::cat())
//!     .pet(PetDescriptor::dog())
//!     .build()?;
//! desktop.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod desktop;
pub mod error;
pub mod event;
pub mod observer;
pub mod pet;

#[cfg(test)]
mod tests;

pub use builder::DesktopBuilder;
pub use desktop::Desktop;
pub use error::{SimError, SimResult};
pub use event::PetEvent;
pub use observer::{DesktopObserver, NoopObserver, PetFrame};
pub use pet::Pet;
