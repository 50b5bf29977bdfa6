//! `pet-motion` — desktop geometry and the per-tick steering/gravity step.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`bounds`]   | `DesktopBounds` — container geometry, roam region, clamp |
//! | [`state`]    | `MotionState`, `MotionMode`                              |
//! | [`steering`] | `step` — one tick of movement, `StepOutcome`             |
//!
//! # Motion model (summary)
//!
//! Exactly one mode is active per tick, selected by
//! [`MotionState::mode`]:
//!
//! - **Held** — the user is dragging the pet; nothing moves autonomously.
//! - **Falling** — the target is pinned to the resting surface (the taskbar
//!   line) and the pet is above it; `y` descends with an accelerating,
//!   capped, non-overshooting step while `x` stays put.
//! - **Steering** — advance toward the target at the speed profile's per-tick
//!   distance, snapping exactly onto targets closer than the snap threshold.
//!
//! Gravity engages only through a surface-pinned target, which drag release
//! produces; free roaming resumes at the next retarget.

pub mod bounds;
pub mod state;
pub mod steering;


pub use bounds::DesktopBounds;
pub use state::{MotionMode, MotionState};
pub use steering::{step, StepOutcome, SNAP_THRESHOLD_PX};
