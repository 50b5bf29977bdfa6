//! desktop — headless demo run of the pixel_pets framework.
//!
//! Simulates one minute of a 1280×720 desktop with three pets (the reference
//! cat and dog plus a customized fast dog), scripts a click and a drag halfway
//! through, and prints an event tally plus the final frame table.  An embedding
//! application would drive the same API from its render loop instead.

use std::io::Cursor;
use std::time::Instant;

use anyhow::Result;

use pet_agent::{ColorScheme, PetDescriptor, PetDescriptorBuilder, Species};
use pet_behavior::load_phrase_book_reader;
use pet_core::{PetId, SimConfig, SpeedProfile, Tick, Vec2};
use pet_motion::DesktopBounds;
use pet_sim::{DesktopBuilder, DesktopObserver, NoopObserver, PetEvent, PetFrame};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:             u64 = 42;
const TICK_MS:          u32 = 50;
const TOTAL_TICKS:      u64 = 1_200; // one minute of desktop time
const DESKTOP_WIDTH:    f32 = 1_280.0;
const DESKTOP_HEIGHT:   f32 = 720.0;

/// Tick at which the scripted interactions run.
const SCRIPT_AT_TICK: u64 = 600;

// ── Custom phrase book ────────────────────────────────────────────────────────

// The third pet loads its phrases from CSV instead of using a species default,
// the same way an embedding application would supply its own.
const ZOOMY_PHRASES_CSV: &str = "\
kind,text\n\
chatter,Zoom zoom!\n\
chatter,Can't catch me!\n\
chatter,Neon speed!\n\
falling,Wheee!\n\
landed,Stuck the landing!\n\
";

// ── Event tally ───────────────────────────────────────────────────────────────

#[derive(Default)]
struct TallyObserver {
    retargets: usize,
    messages:  usize,
    landings:  usize,
}

impl DesktopObserver for TallyObserver {
    fn on_event(&mut self, tick: Tick, pet: PetId, event: &PetEvent) {
        match event {
            PetEvent::Retargeted { .. } => self.retargets += 1,
            PetEvent::MessageShown { text } => {
                self.messages += 1;
                println!("  [{tick}] {pet} says: {text}");
            }
            PetEvent::Landed => self.landings += 1,
            PetEvent::PickedUp | PetEvent::Dropped { .. } => {}
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== desktop — pixel_pets demo ===");
    println!("Pets: 3  |  Ticks: {TOTAL_TICKS} ({TICK_MS} ms each)  |  Seed: {SEED}");
    println!();

    // 1. Desktop geometry (48 px taskbar by default).
    let bounds = DesktopBounds::new(DESKTOP_WIDTH, DESKTOP_HEIGHT);
    println!(
        "Desktop: {DESKTOP_WIDTH}×{DESKTOP_HEIGHT}, resting surface at y = {}",
        bounds.resting_surface_y()
    );

    // 2. Pet roster: the two reference pets plus a customized one with a
    //    CSV-loaded phrase book.
    let zoomy_phrases = load_phrase_book_reader(Cursor::new(ZOOMY_PHRASES_CSV))?;
    println!("Loaded {} custom phrases for zoomy", zoomy_phrases.len());
    let zoomy = PetDescriptorBuilder::new("zoomy", Species::Dog)
        .color_scheme(ColorScheme::Neon)
        .speed(SpeedProfile::Fast)
        .spawn(Vec2::new(640.0, 200.0))
        .phrases(zoomy_phrases)
        .build()?;

    let config = SimConfig {
        tick_duration_ms: TICK_MS,
        total_ticks:      TOTAL_TICKS,
        seed:             SEED,
        ..SimConfig::default()
    };
    let mut desktop = DesktopBuilder::new(config)
        .bounds(bounds)
        .pet(PetDescriptor::cat())
        .pet(PetDescriptor::dog())
        .pet(zoomy)
        .build()?;

    let cat = PetId(0);
    let dog = PetId(1);

    // 3. First half: autonomous roaming.
    let t0 = Instant::now();
    let mut tally = TallyObserver::default();
    desktop.run_ticks(SCRIPT_AT_TICK, &mut tally);

    // 4. Scripted interactions: click the cat, then pick the dog up, carry it
    //    toward the top of the screen, and let it go.
    println!();
    println!("-- scripted interactions at {} --", desktop.current_tick());
    for event in desktop.click(cat)? {
        if let PetEvent::MessageShown { text } = event {
            println!("  click: cat says: {text}");
        }
    }
    desktop.drag_start(dog)?;
    for _ in 0..10 {
        desktop.drag_move(dog, Vec2::new(8.0, -20.0))?;
        desktop.run_ticks(1, &mut NoopObserver);
    }
    for event in desktop.drag_end(dog)? {
        match event {
            PetEvent::Dropped { falling } => println!("  drop: falling = {falling}"),
            PetEvent::MessageShown { text } => println!("  drop: dog says: {text}"),
            _ => {}
        }
    }
    println!();

    // 5. Second half: the dog falls back to the taskbar, everyone roams on.
    let remaining = TOTAL_TICKS - desktop.current_tick().0;
    desktop.run_ticks(remaining, &mut tally);
    let elapsed = t0.elapsed();

    // 6. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  retargets: {}", tally.retargets);
    println!("  messages:  {}", tally.messages);
    println!("  landings:  {}", tally.landings);
    println!();

    // 7. Final frame table.
    println!(
        "{:<8} {:<8} {:<16} {:<8} {:<8} {}",
        "Pet", "Face", "Position", "Facing", "Surface", "Message"
    );
    println!("{}", "-".repeat(72));
    for frame in desktop.frames() {
        print_frame(&frame);
    }

    Ok(())
}

fn print_frame(frame: &PetFrame) {
    println!(
        "{:<8} {:<8} {:<16} {:<8} {:<8} {}",
        frame.name,
        frame.face,
        frame.position.to_string(),
        if frame.facing_left { "left" } else { "right" },
        if frame.on_surface { "yes" } else { "no" },
        frame.message.as_deref().unwrap_or("-"),
    );
}
