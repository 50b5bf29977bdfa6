//! Events a pet produces as it acts.
//!
//! The tick and interaction methods return these instead of invoking
//! callbacks, so the caller (the desktop loop, or a test) decides what to do
//! with them.  Nothing in the motion system depends on an event being
//! observed.

use pet_core::Vec2;

/// Something observable a pet did during a tick or interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum PetEvent {
    /// The retarget timer chose a new roam destination.
    Retargeted { target: Vec2 },

    /// A phrase appeared in the speech bubble (click, chatter, falling, or
    /// landing).
    MessageShown { text: String },

    /// The user started dragging the pet.
    PickedUp,

    /// The user released the pet.  `falling` is `true` when the drop point
    /// was high enough above the resting surface to arm gravity.
    Dropped { falling: bool },

    /// A falling pet touched down on the resting surface.
    Landed,
}
