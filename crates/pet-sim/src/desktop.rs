//! The desktop: clock, geometry, pets, and the driving loop.

use pet_core::{PetId, SimClock, SimConfig, Tick, Vec2};
use pet_motion::DesktopBounds;

use crate::error::{SimError, SimResult};
use crate::event::PetEvent;
use crate::observer::{DesktopObserver, PetFrame};
use crate::pet::Pet;

/// The whole simulation: a shared clock, optional container geometry, and a
/// set of pets ticked in insertion order.
///
/// Construct via [`DesktopBuilder`](crate::DesktopBuilder).  Interactions
/// (click, drag, resize) are routed by [`PetId`] and may be interleaved with
/// [`run_ticks`](Desktop::run_ticks) to script scenarios.
#[derive(Debug)]
pub struct Desktop {
    config: SimConfig,
    clock:  SimClock,
    bounds: Option<DesktopBounds>,
    pets:   Vec<Pet>,
}

impl Desktop {
    pub(crate) fn new(config: SimConfig, bounds: Option<DesktopBounds>, pets: Vec<Pet>) -> Self {
        Self {
            clock: config.make_clock(),
            config,
            bounds,
            pets,
        }
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Run until the configured end tick, reporting to `observer`.
    pub fn run<O: DesktopObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step_tick(observer);
        }
        observer.on_run_end(self.clock.current_tick);
        Ok(())
    }

    /// Advance exactly `n` ticks.  Unlike [`run`](Desktop::run) this ignores
    /// the configured end tick, so scripted scenarios can interleave
    /// interactions at precise points.
    pub fn run_ticks<O: DesktopObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step_tick(observer);
        }
    }

    fn step_tick<O: DesktopObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let bounds = self.bounds;
        for pet in &mut self.pets {
            for event in pet.tick(now, bounds.as_ref()) {
                observer.on_event(now, pet.id, &event);
            }
        }

        let interval = self.config.frame_interval_ticks;
        if interval > 0 && now.0 % interval == 0 {
            let frames = self.frames();
            observer.on_frames(now, &frames);
        }

        observer.on_tick_end(now);
        self.clock.advance();
    }

    // ── Interactions ──────────────────────────────────────────────────────

    /// Click on a pet: shows a chatter phrase.
    pub fn click(&mut self, id: PetId) -> SimResult<Vec<PetEvent>> {
        let now = self.clock.current_tick;
        Ok(self.pet_mut(id)?.click(now))
    }

    /// Begin dragging a pet.
    pub fn drag_start(&mut self, id: PetId) -> SimResult<Vec<PetEvent>> {
        Ok(self.pet_mut(id)?.drag_start())
    }

    /// Move a held pet by the pointer delta.
    pub fn drag_move(&mut self, id: PetId, delta: Vec2) -> SimResult<()> {
        self.pet_mut(id)?.drag_move(delta);
        Ok(())
    }

    /// Release a held pet.
    pub fn drag_end(&mut self, id: PetId) -> SimResult<Vec<PetEvent>> {
        let now = self.clock.current_tick;
        let bounds = self.bounds;
        Ok(self.pet_mut(id)?.drag_end(now, bounds.as_ref()))
    }

    /// The container was (re-)measured.  Every pet is clamped into the new
    /// geometry immediately.
    pub fn resize(&mut self, bounds: DesktopBounds) {
        let now = self.clock.current_tick;
        self.bounds = Some(bounds);
        for pet in &mut self.pets {
            pet.resize(&bounds, now);
        }
    }

    // ── Inspection ────────────────────────────────────────────────────────

    pub fn pet(&self, id: PetId) -> SimResult<&Pet> {
        self.pets
            .iter()
            .find(|p| p.id == id)
            .ok_or(SimError::UnknownPet(id))
    }

    fn pet_mut(&mut self, id: PetId) -> SimResult<&mut Pet> {
        self.pets
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(SimError::UnknownPet(id))
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Frame snapshots for every pet, in insertion order.
    pub fn frames(&self) -> Vec<PetFrame> {
        let bounds = self.bounds;
        self.pets.iter().map(|p| p.frame(bounds.as_ref())).collect()
    }

    pub fn bounds(&self) -> Option<DesktopBounds> {
        self.bounds
    }

    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
