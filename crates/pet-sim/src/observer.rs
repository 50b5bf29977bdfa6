//! Observer hooks for rendering, logging, and tests.

use pet_core::{PetId, Tick, Vec2};

use crate::event::PetEvent;

/// Everything a renderer needs to draw one pet for one tick.
///
/// Frames are value snapshots: the rendering layer holds no references into
/// the simulation and cannot observe a half-updated tick.
#[derive(Clone, Debug, PartialEq)]
pub struct PetFrame {
    pub id: PetId,
    pub name: String,

    /// On-screen coordinate of the sprite anchor.
    pub position: Vec2,

    /// Mirror the sprite horizontally.
    pub facing_left: bool,

    /// `true` while the user is dragging this pet.
    pub held: bool,

    /// Face glyph for the pet's species and color scheme.
    pub face: &'static str,

    /// Render scale as a percentage (100 = native size).
    pub scale_percent: u32,

    /// Speech-bubble text, if a message is showing.
    pub message: Option<String>,

    /// `true` when the pet sits on (or within the band above) the taskbar.
    pub on_surface: bool,
}

/// Callbacks invoked by [`Desktop::run`](crate::Desktop::run).
///
/// All methods default to no-ops so implementors override only the hooks
/// they care about.  Callbacks run on the driving thread, between ticks.
pub trait DesktopObserver {
    /// Called before any pet is ticked.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per event a pet produced this tick, in per-pet order.
    fn on_event(&mut self, _tick: Tick, _pet: PetId, _event: &PetEvent) {}

    /// Called with the full frame set every `frame_interval_ticks` ticks.
    fn on_frames(&mut self, _tick: Tick, _frames: &[PetFrame]) {}

    /// Called after every pet has been ticked.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called once when the run completes.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// Observer that ignores everything.  Useful for benchmarks and for runs
/// driven purely through the interaction API.
pub struct NoopObserver;

impl DesktopObserver for NoopObserver {}
