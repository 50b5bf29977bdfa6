//! Integration-style tests for the orchestrator: tick ordering, drag
//! scenarios, message lifecycle, and determinism.

use pet_agent::{PetDescriptor, PetDescriptorBuilder, Species};
use pet_core::{PetId, SimConfig, Tick, Vec2};
use pet_motion::DesktopBounds;

use crate::builder::DesktopBuilder;
use crate::desktop::Desktop;
use crate::error::SimError;
use crate::event::PetEvent;
use crate::observer::{DesktopObserver, NoopObserver, PetFrame};

/// 800×448 container with the default 48 px taskbar: surface at y = 400.
fn bounds() -> DesktopBounds {
    DesktopBounds::new(800.0, 448.0)
}

fn config(seed: u64) -> SimConfig {
    SimConfig {
        seed,
        ..SimConfig::default()
    }
}

fn cat_desktop(seed: u64) -> Desktop {
    DesktopBuilder::new(config(seed))
        .bounds(bounds())
        .pet(PetDescriptor::cat())
        .build()
        .unwrap()
}

const CAT: PetId = PetId(0);

/// Records every event and frame callback for later assertions.
#[derive(Default)]
struct Recorder {
    events: Vec<(Tick, PetId, PetEvent)>,
    frame_calls: usize,
    last_frames: Vec<PetFrame>,
    run_end: Option<Tick>,
}

impl DesktopObserver for Recorder {
    fn on_event(&mut self, tick: Tick, pet: PetId, event: &PetEvent) {
        self.events.push((tick, pet, event.clone()));
    }

    fn on_frames(&mut self, _tick: Tick, frames: &[PetFrame]) {
        self.frame_calls += 1;
        self.last_frames = frames.to_vec();
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        self.run_end = Some(final_tick);
    }
}

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn assigns_sequential_ids() {
        let desktop = DesktopBuilder::new(config(0))
            .bounds(bounds())
            .pet(PetDescriptor::cat())
            .pet(PetDescriptor::dog())
            .build()
            .unwrap();

        let ids: Vec<PetId> = desktop.pets().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PetId(0), PetId(1)]);
        assert_eq!(desktop.pets()[0].motion.position, Vec2::new(100.0, 300.0));
        assert_eq!(desktop.pets()[1].motion.position, Vec2::new(200.0, 350.0));
    }

    #[test]
    fn rejects_zero_tick_duration() {
        let cfg = SimConfig {
            tick_duration_ms: 0,
            ..SimConfig::default()
        };
        let err = DesktopBuilder::new(cfg).build().unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn unknown_pet_is_an_error() {
        let mut desktop = cat_desktop(0);
        let err = desktop.click(PetId(7)).unwrap_err();
        assert!(matches!(err, SimError::UnknownPet(PetId(7))));
    }
}

#[cfg(test)]
mod ticking {
    use super::*;

    #[test]
    fn static_until_first_retarget() {
        let mut desktop = cat_desktop(1);
        let mut rec = Recorder::default();

        // The retarget timer first fires at T100 (the cat's 5 s interval).
        desktop.run_ticks(100, &mut rec);
        assert_eq!(
            desktop.pet(CAT).unwrap().motion.position,
            Vec2::new(100.0, 300.0)
        );
        assert!(rec.events.iter().all(|(_, _, e)| !matches!(e, PetEvent::Retargeted { .. })));

        desktop.run_ticks(1, &mut rec);
        let (tick, _, event) = rec
            .events
            .iter()
            .find(|(_, _, e)| matches!(e, PetEvent::Retargeted { .. }))
            .unwrap();
        assert_eq!(*tick, Tick(100));
        if let PetEvent::Retargeted { target } = event {
            assert!(bounds().in_roam_region(*target));
        }
    }

    #[test]
    fn steers_toward_the_roam_target() {
        let mut desktop = cat_desktop(2);
        desktop.run_ticks(101, &mut NoopObserver);

        let pet = desktop.pet(CAT).unwrap();
        let target = pet.motion.target;
        let before = pet.motion.position.distance(target);
        // The retarget at T100 already stepped the pet off its spawn.
        assert_ne!(pet.motion.position, Vec2::new(100.0, 300.0));

        desktop.run_ticks(5, &mut NoopObserver);
        let after = desktop.pet(CAT).unwrap().motion.position.distance(target);
        assert!(after <= before);
        assert!(before == 0.0 || after < before);
    }

    #[test]
    fn unmeasured_desktop_keeps_pets_at_spawn() {
        let mut desktop = DesktopBuilder::new(config(3))
            .pet(PetDescriptor::cat())
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        desktop.run_ticks(500, &mut rec);

        assert_eq!(
            desktop.pet(CAT).unwrap().motion.position,
            Vec2::new(100.0, 300.0)
        );
        assert!(rec.events.iter().all(|(_, _, e)| !matches!(e, PetEvent::Retargeted { .. })));
    }

    #[test]
    fn identical_seeds_replay_identically() {
        let mut a = cat_desktop(42);
        let mut b = cat_desktop(42);
        let mut rec_a = Recorder::default();
        let mut rec_b = Recorder::default();

        a.run_ticks(300, &mut rec_a);
        b.run_ticks(300, &mut rec_b);

        assert_eq!(a.pet(CAT).unwrap().motion.position, b.pet(CAT).unwrap().motion.position);
        assert_eq!(rec_a.events, rec_b.events);
    }

    #[test]
    fn pets_wander_independently() {
        let mut desktop = DesktopBuilder::new(config(42))
            .bounds(bounds())
            .pet(PetDescriptor::cat())
            .pet(PetDescriptor::cat())
            .build()
            .unwrap();
        desktop.run_ticks(300, &mut NoopObserver);

        // Same descriptor, different per-pet RNG streams.
        let p0 = desktop.pet(PetId(0)).unwrap().motion.target;
        let p1 = desktop.pet(PetId(1)).unwrap().motion.target;
        assert_ne!(p0, p1);
    }
}

#[cfg(test)]
mod messages {
    use super::*;

    fn chatty_cat(probability: f64) -> PetDescriptor {
        PetDescriptorBuilder::new("test-cat", Species::Cat)
            .chatter_interval_ticks(10)
            .chatter_probability(probability)
            .message_duration_ticks(5)
            .build()
            .unwrap()
    }

    #[test]
    fn certain_chatter_fires_on_the_interval_and_expires() {
        let mut desktop = DesktopBuilder::new(config(0))
            .bounds(bounds())
            .pet(chatty_cat(1.0))
            .build()
            .unwrap();
        let mut rec = Recorder::default();

        // First firing at T10; the bubble stays up for 5 ticks.
        desktop.run_ticks(11, &mut rec);
        let shown: Vec<&Tick> = rec
            .events
            .iter()
            .filter(|(_, _, e)| matches!(e, PetEvent::MessageShown { .. }))
            .map(|(t, _, _)| t)
            .collect();
        assert_eq!(shown, vec![&Tick(10)]);
        assert!(desktop.pet(CAT).unwrap().message().is_some());

        desktop.run_ticks(5, &mut NoopObserver);
        assert!(desktop.pet(CAT).unwrap().message().is_none());
    }

    #[test]
    fn zero_probability_chatter_never_speaks() {
        let mut desktop = DesktopBuilder::new(config(0))
            .bounds(bounds())
            .pet(chatty_cat(0.0))
            .build()
            .unwrap();
        let mut rec = Recorder::default();

        desktop.run_ticks(200, &mut rec);
        assert!(rec.events.iter().all(|(_, _, e)| !matches!(e, PetEvent::MessageShown { .. })));
    }

    #[test]
    fn chatter_runs_without_geometry() {
        let mut desktop = DesktopBuilder::new(config(0))
            .pet(chatty_cat(1.0))
            .build()
            .unwrap();
        let mut rec = Recorder::default();

        desktop.run_ticks(11, &mut rec);
        assert!(rec.events.iter().any(|(_, _, e)| matches!(e, PetEvent::MessageShown { .. })));
    }

    #[test]
    fn click_speaks_immediately() {
        let mut desktop = cat_desktop(0);
        let events = desktop.click(CAT).unwrap();

        assert_eq!(events.len(), 1);
        let PetEvent::MessageShown { text } = &events[0] else {
            panic!("expected a message event, got {events:?}");
        };
        assert!(PetDescriptor::cat().phrases.chatter.contains(text));

        let frames = desktop.frames();
        assert_eq!(frames[0].message.as_ref(), Some(text));
    }

    #[test]
    fn re_click_replaces_and_extends_the_bubble() {
        let mut desktop = cat_desktop(0);
        desktop.click(CAT).unwrap();
        desktop.run_ticks(30, &mut NoopObserver);

        // Halfway through the 60-tick lifetime; a second click restarts it.
        desktop.click(CAT).unwrap();
        desktop.run_ticks(59, &mut NoopObserver);
        assert!(desktop.pet(CAT).unwrap().message().is_some());

        // The expiry tick itself clears the bubble.
        desktop.run_ticks(2, &mut NoopObserver);
        assert!(desktop.pet(CAT).unwrap().message().is_none());
    }
}

#[cfg(test)]
mod dragging {
    use super::*;

    #[test]
    fn held_pet_ignores_timers_and_motion() {
        let mut desktop = cat_desktop(5);
        let events = desktop.drag_start(CAT).unwrap();
        assert_eq!(events, vec![PetEvent::PickedUp]);

        let mut rec = Recorder::default();
        desktop.run_ticks(400, &mut rec); // past both timer intervals

        assert!(rec.events.is_empty());
        assert_eq!(
            desktop.pet(CAT).unwrap().motion.position,
            Vec2::new(100.0, 300.0)
        );
    }

    #[test]
    fn bubble_still_expires_while_held() {
        let mut desktop = cat_desktop(0);
        desktop.click(CAT).unwrap();
        desktop.drag_start(CAT).unwrap();

        desktop.run_ticks(61, &mut NoopObserver);
        assert!(desktop.pet(CAT).unwrap().message().is_none());
    }

    #[test]
    fn click_while_held_is_suppressed() {
        let mut desktop = cat_desktop(0);
        desktop.drag_start(CAT).unwrap();
        assert!(desktop.click(CAT).unwrap().is_empty());
    }

    #[test]
    fn high_drop_falls_to_the_surface() {
        let mut desktop = cat_desktop(7);

        desktop.drag_start(CAT).unwrap();
        desktop.drag_move(CAT, Vec2::new(50.0, -20.0)).unwrap();
        assert_eq!(
            desktop.pet(CAT).unwrap().motion.position,
            Vec2::new(150.0, 280.0)
        );

        let events = desktop.drag_end(CAT).unwrap();
        assert_eq!(events[0], PetEvent::Dropped { falling: true });
        let PetEvent::MessageShown { text } = &events[1] else {
            panic!("expected a falling phrase, got {events:?}");
        };
        assert_eq!(text, "Meow?! Whoa!");

        // Descent is monotone in y, x is untouched, and the pet lands
        // exactly on the surface line.
        let mut rec = Recorder::default();
        let mut last_y = 280.0;
        for _ in 0..40 {
            desktop.run_ticks(1, &mut rec);
            let p = desktop.pet(CAT).unwrap().motion.position;
            assert!(p.y >= last_y);
            assert!(p.y <= 400.0);
            assert_eq!(p.x, 150.0);
            last_y = p.y;
        }
        assert_eq!(last_y, 400.0);

        let landed: Vec<&PetEvent> = rec
            .events
            .iter()
            .filter(|(_, _, e)| matches!(e, PetEvent::Landed))
            .map(|(_, _, e)| e)
            .collect();
        assert_eq!(landed.len(), 1);
        assert_eq!(
            desktop.pet(CAT).unwrap().message().unwrap().text,
            "Cats always land on their feet."
        );
    }

    #[test]
    fn low_drop_snaps_onto_the_surface() {
        let mut desktop = cat_desktop(0);
        desktop.drag_start(CAT).unwrap();
        desktop.drag_move(CAT, Vec2::new(0.0, 95.0)).unwrap(); // y = 395, within the 20 px band

        let events = desktop.drag_end(CAT).unwrap();
        assert_eq!(events, vec![PetEvent::Dropped { falling: false }]);

        let motion = &desktop.pet(CAT).unwrap().motion;
        assert_eq!(motion.position.y, 400.0);
        assert_eq!(motion.target, motion.position);
    }

    #[test]
    fn release_clamps_out_of_range_positions() {
        let mut desktop = cat_desktop(0);
        desktop.drag_start(CAT).unwrap();
        desktop.drag_move(CAT, Vec2::new(-500.0, 1_000.0)).unwrap();

        desktop.drag_end(CAT).unwrap();
        let p = desktop.pet(CAT).unwrap().motion.position;
        assert_eq!(p, Vec2::new(0.0, 400.0));
    }

    #[test]
    fn release_restarts_the_timers() {
        let mut desktop = cat_desktop(9);
        // Hold across both timer deadlines, then release above the surface.
        desktop.drag_start(CAT).unwrap();
        desktop.run_ticks(250, &mut NoopObserver);
        desktop.drag_end(CAT).unwrap();

        // The next tick must not retarget, or the elapsed period would
        // override the gravity target armed at release.
        let mut rec = Recorder::default();
        desktop.run_ticks(1, &mut rec);
        assert!(rec.events.iter().all(|(_, _, e)| !matches!(e, PetEvent::Retargeted { .. })));
        assert_eq!(desktop.pet(CAT).unwrap().motion.target.y, 400.0);
    }

    #[test]
    fn unmeasured_release_is_a_plain_drop() {
        let mut desktop = DesktopBuilder::new(config(0))
            .pet(PetDescriptor::cat())
            .build()
            .unwrap();

        desktop.drag_start(CAT).unwrap();
        desktop.drag_move(CAT, Vec2::new(10.0, -400.0)).unwrap();
        let events = desktop.drag_end(CAT).unwrap();
        assert_eq!(events, vec![PetEvent::Dropped { falling: false }]);
    }
}

#[cfg(test)]
mod geometry {
    use super::*;

    #[test]
    fn resize_clamps_immediately() {
        let mut desktop = cat_desktop(0);
        desktop.run_ticks(1, &mut NoopObserver);

        // Shrink to 120×140: surface drops to y = 92.
        desktop.resize(DesktopBounds::new(120.0, 140.0));
        let motion = &desktop.pet(CAT).unwrap().motion;
        assert_eq!(motion.position, Vec2::new(100.0, 92.0));
        assert!(motion.target.y <= 92.0);
    }

    #[test]
    fn late_measurement_unfreezes_the_pets() {
        let mut desktop = DesktopBuilder::new(config(11))
            .pet(PetDescriptor::cat())
            .build()
            .unwrap();
        desktop.run_ticks(200, &mut NoopObserver);
        assert_eq!(desktop.pet(CAT).unwrap().motion.position, Vec2::new(100.0, 300.0));

        desktop.resize(bounds());
        let mut rec = Recorder::default();
        desktop.run_ticks(101, &mut rec);
        assert!(rec.events.iter().any(|(_, _, e)| matches!(e, PetEvent::Retargeted { .. })));
    }
}

#[cfg(test)]
mod observer {
    use super::*;

    #[test]
    fn run_reports_frames_and_completion() {
        let cfg = SimConfig {
            total_ticks: 50,
            ..config(0)
        };
        let mut desktop = DesktopBuilder::new(cfg)
            .bounds(bounds())
            .pet(PetDescriptor::cat())
            .pet(PetDescriptor::dog())
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        desktop.run(&mut rec).unwrap();

        assert_eq!(rec.frame_calls, 50);
        assert_eq!(rec.run_end, Some(Tick(50)));
        assert_eq!(rec.last_frames.len(), 2);
        assert_eq!(rec.last_frames[0].face, "^•ﻌ•^");
        assert_eq!(rec.last_frames[1].face, "ʕ•ᴥ•ʔ");
    }

    #[test]
    fn frame_interval_thins_snapshots() {
        let cfg = SimConfig {
            total_ticks: 100,
            frame_interval_ticks: 10,
            ..config(0)
        };
        let mut desktop = DesktopBuilder::new(cfg)
            .bounds(bounds())
            .pet(PetDescriptor::cat())
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        desktop.run(&mut rec).unwrap();
        assert_eq!(rec.frame_calls, 10);
    }

    #[test]
    fn frames_snapshot_surface_contact() {
        let mut desktop = cat_desktop(0);
        desktop.drag_start(CAT).unwrap();
        desktop.drag_move(CAT, Vec2::new(0.0, 95.0)).unwrap();
        desktop.drag_end(CAT).unwrap();

        let frames = desktop.frames();
        assert!(frames[0].on_surface);
        assert!(!frames[0].held);
    }
}
