//! A single simulated pet: descriptor, motion state, timers, speech.

use pet_agent::PetDescriptor;
use pet_behavior::{ActiveMessage, MessageEmitter, PhraseKind};
use pet_core::{PeriodicTimer, PetId, PetRng, Tick, Vec2};
use pet_motion::{DesktopBounds, MotionState, StepOutcome, step};

use crate::event::PetEvent;
use crate::observer::PetFrame;

/// One pet's complete simulation state.
///
/// `motion` is public so renderers and tests can inspect position and facing
/// directly; mutation should go through [`tick`](Pet::tick) and the drag
/// methods, which keep the timers and the held flag consistent.
#[derive(Debug)]
pub struct Pet {
    pub id: PetId,
    pub descriptor: PetDescriptor,
    pub motion: MotionState,

    emitter:  MessageEmitter,
    retarget: PeriodicTimer,
    chatter:  PeriodicTimer,
    rng:      PetRng,
}

impl Pet {
    /// Spawn a pet from its descriptor at tick `now`.
    ///
    /// The RNG is derived from `global_seed` and the pet's id, so two pets in
    /// the same run wander independently and a rerun with the same seed
    /// replays both exactly.
    pub fn new(id: PetId, descriptor: PetDescriptor, global_seed: u64, now: Tick) -> Self {
        Self {
            motion:   MotionState::at(descriptor.spawn),
            emitter:  MessageEmitter::new(descriptor.message_duration_ticks),
            retarget: PeriodicTimer::new(descriptor.retarget_interval_ticks, now),
            chatter:  PeriodicTimer::new(descriptor.chatter_interval_ticks, now),
            rng:      PetRng::new(global_seed, id),
            id,
            descriptor,
        }
    }

    /// The message currently in the speech bubble, if any.
    pub fn message(&self) -> Option<&ActiveMessage> {
        self.emitter.current()
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance this pet by one tick.
    ///
    /// Order within the tick: message expiry, held gate, chatter timer,
    /// retarget timer, motion step.  The held gate suspends everything except
    /// expiry; the retarget timer and the motion step additionally require
    /// measured container geometry, while chatter runs without it.
    pub fn tick(&mut self, now: Tick, bounds: Option<&DesktopBounds>) -> Vec<PetEvent> {
        let mut events = Vec::new();

        self.emitter.tick(now);

        if self.motion.held {
            return events;
        }

        if self.chatter.fire(now) && self.rng.gen_bool(self.descriptor.chatter_probability) {
            if let Some(event) = self.say(PhraseKind::Chatter, now) {
                events.push(event);
            }
        }

        let Some(bounds) = bounds else {
            return events;
        };

        if self.retarget.fire(now) {
            let target = bounds.sample_roam_target(&mut self.rng);
            self.motion.retarget(target);
            events.push(PetEvent::Retargeted { target });
        }

        let outcome = step(&mut self.motion, bounds, self.descriptor.speed.pixels_per_tick());
        if outcome == StepOutcome::Landed {
            events.push(PetEvent::Landed);
            if let Some(event) = self.say(PhraseKind::Landed, now) {
                events.push(event);
            }
        }

        events
    }

    // ── Interactions ──────────────────────────────────────────────────────

    /// A click on the pet: show a chatter phrase immediately (no probability
    /// gate).
    ///
    /// Clicks are ignored for the whole time the pet is held.  A drag ends
    /// with a pointer-up that the host also reports as a click; honoring it
    /// would double-fire on every release and clobber the falling phrase.
    pub fn click(&mut self, now: Tick) -> Vec<PetEvent> {
        if self.motion.held {
            return Vec::new();
        }
        self.say(PhraseKind::Chatter, now).into_iter().collect()
    }

    /// Begin a drag.  No-op if already held.
    pub fn drag_start(&mut self) -> Vec<PetEvent> {
        if self.motion.held {
            return Vec::new();
        }
        self.motion.held = true;
        vec![PetEvent::PickedUp]
    }

    /// Move the pet by the pointer delta.  Unclamped — the release clamps.
    pub fn drag_move(&mut self, delta: Vec2) {
        if self.motion.held {
            self.motion.position += delta;
        }
    }

    /// Release the pet.
    ///
    /// The position is clamped into the container; if the drop point is above
    /// the surface band, the target is pinned to the resting surface (arming
    /// gravity) and a falling phrase shows.  Otherwise the pet snaps onto the
    /// surface line.  Both timers restart so a period that elapsed mid-drag
    /// does not fire on the very next tick and override the drop target.
    pub fn drag_end(&mut self, now: Tick, bounds: Option<&DesktopBounds>) -> Vec<PetEvent> {
        if !self.motion.held {
            return Vec::new();
        }
        self.motion.held = false;

        let mut events = Vec::new();
        let mut falling = false;

        if let Some(bounds) = bounds {
            self.motion.position = bounds.clamp(self.motion.position);
            if bounds.on_surface(self.motion.position.y) {
                let surface = bounds.resting_surface_y();
                self.motion.position.y = surface;
                self.motion.target = Vec2::new(self.motion.position.x, surface);
            } else {
                self.motion.arm_gravity(bounds);
                falling = true;
            }
        }

        events.push(PetEvent::Dropped { falling });
        if falling {
            if let Some(event) = self.say(PhraseKind::Falling, now) {
                events.push(event);
            }
        }

        self.retarget.reset(now);
        self.chatter.reset(now);
        events
    }

    /// The container was re-measured: clamp position and target into the new
    /// geometry and restart the retarget timer against it.
    ///
    /// A stale roam target that is merely clamped (not resampled) is
    /// corrected by the next retarget firing.
    pub fn resize(&mut self, bounds: &DesktopBounds, now: Tick) {
        self.motion.position = bounds.clamp(self.motion.position);
        self.motion.target = bounds.clamp(self.motion.target);
        self.retarget.reset(now);
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    /// Snapshot this pet for the rendering layer.
    pub fn frame(&self, bounds: Option<&DesktopBounds>) -> PetFrame {
        PetFrame {
            id:            self.id,
            name:          self.descriptor.name.clone(),
            position:      self.motion.position,
            facing_left:   self.motion.facing_left,
            held:          self.motion.held,
            face:          self.descriptor.face(),
            scale_percent: self.descriptor.scale_percent,
            message:       self.emitter.current().map(|m| m.text.clone()),
            on_surface:    bounds.is_some_and(|b| b.on_surface(self.motion.position.y)),
        }
    }

    /// Pick a phrase of `kind` and put it in the speech bubble.
    /// Returns `None` when the descriptor has no phrases of that kind.
    fn say(&mut self, kind: PhraseKind, now: Tick) -> Option<PetEvent> {
        let text = self
            .descriptor
            .phrases
            .choose(kind, &mut self.rng)?
            .to_string();
        self.emitter.emit(text.clone(), now);
        Some(PetEvent::MessageShown { text })
    }
}
