//! `pet-core` — foundational types for the `pixel_pets` desktop-pet framework.
//!
//! This crate is a dependency of every other `pet-*` crate.  It intentionally
//! has no `pet-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `PetId`                                           |
//! | [`vec2`]    | `Vec2` — screen-space pixel coordinates           |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`                   |
//! | [`timer`]   | `PeriodicTimer`                                   |
//! | [`rng`]     | `PetRng` (per-pet deterministic RNG)              |
//! | [`speed`]   | `SpeedProfile` enum                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod ids;
pub mod rng;
pub mod speed;
pub mod time;
pub mod timer;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::PetId;
pub use rng::PetRng;
pub use speed::SpeedProfile;
pub use time::{SimClock, SimConfig, Tick};
pub use timer::PeriodicTimer;
pub use vec2::Vec2;
