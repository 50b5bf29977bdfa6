//! Unit tests for pet-behavior.

use pet_core::{PetId, PetRng, Tick};

use crate::emitter::MessageEmitter;
use crate::phrases::{PhraseBook, PhraseKind};

fn rng() -> PetRng {
    PetRng::new(7, PetId(0))
}

// ── MessageEmitter ────────────────────────────────────────────────────────────

#[cfg(test)]
mod emitter {
    use super::*;

    #[test]
    fn starts_idle() {
        let e = MessageEmitter::new(60);
        assert!(e.current().is_none());
    }

    #[test]
    fn visible_for_exactly_the_duration() {
        let mut e = MessageEmitter::new(60);
        e.emit("Pet me!", Tick(100));

        for t in 100..160 {
            assert!(!e.tick(Tick(t)), "expired early at tick {t}");
            assert_eq!(e.current().unwrap().text, "Pet me!");
        }
        assert!(e.tick(Tick(160)));
        assert!(e.current().is_none());
    }

    #[test]
    fn re_emit_extends_expiry() {
        let mut e = MessageEmitter::new(60);
        e.emit("first", Tick(0));
        // Second emit at t=30, before the first would expire.
        e.tick(Tick(30));
        e.emit("second", Tick(30));

        // The bubble never flickers empty and the expiry comes from the
        // second emit: still showing at the first message's old deadline.
        assert!(!e.tick(Tick(60)));
        assert_eq!(e.current().unwrap().text, "second");
        assert!(e.tick(Tick(90)));
        assert!(e.current().is_none());
    }

    #[test]
    fn tokens_distinguish_identical_texts() {
        let mut e = MessageEmitter::new(60);
        let t0 = e.emit("Squirrel!", Tick(0));
        let t1 = e.emit("Squirrel!", Tick(1));
        assert_ne!(t0, t1);
        assert_eq!(e.current().unwrap().token, t1);
    }

    #[test]
    fn zero_duration_clamped() {
        let mut e = MessageEmitter::new(0);
        e.emit("blip", Tick(5));
        assert!(!e.tick(Tick(5)), "message must outlive its emit tick");
        assert!(e.tick(Tick(6)));
    }
}

// ── PhraseBook ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod phrases {
    use super::*;

    #[test]
    fn choose_draws_from_the_right_list() {
        let book = PhraseBook::dog();
        let mut rng = rng();
        for _ in 0..100 {
            let phrase = book.choose(PhraseKind::Chatter, &mut rng).unwrap();
            assert!(book.chatter.iter().any(|p| p == phrase));
        }
        assert_eq!(
            book.choose(PhraseKind::Landed, &mut rng).unwrap(),
            "Woof! The taskbar is fun!"
        );
    }

    #[test]
    fn empty_list_yields_none() {
        let book = PhraseBook::new(vec!["hi".into()], vec![], vec![]);
        let mut rng = rng();
        assert!(book.choose(PhraseKind::Falling, &mut rng).is_none());
        assert!(book.choose(PhraseKind::Chatter, &mut rng).is_some());
    }

    #[test]
    fn reference_books_are_complete() {
        for book in [PhraseBook::cat(), PhraseBook::dog()] {
            assert!(!book.chatter.is_empty());
            assert!(!book.falling.is_empty());
            assert!(!book.landed.is_empty());
        }
        assert_eq!(PhraseBook::cat().chatter.len(), 10);
        assert_eq!(PhraseBook::dog().chatter.len(), 15);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::loader::load_phrase_book_reader;
    use crate::BehaviorError;

    const GOOD_CSV: &str = "\
kind,text\n\
chatter,Meow! Need coffee?\n\
chatter,Coding time!\n\
falling,Meow?! Whoa!\n\
landed,Cats always land on their feet.\n\
";

    #[test]
    fn loads_rows_into_matching_lists() {
        let book = load_phrase_book_reader(Cursor::new(GOOD_CSV)).unwrap();
        assert_eq!(book.chatter.len(), 2);
        assert_eq!(book.falling, vec!["Meow?! Whoa!"]);
        assert_eq!(book.landed.len(), 1);
        assert_eq!(book.len(), 4);
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let csv = "kind,text\nbark,Woof!\n";
        let err = load_phrase_book_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, BehaviorError::Parse(_)));
        assert!(err.to_string().contains("bark"));
    }

    #[test]
    fn empty_input_yields_empty_book() {
        let book = load_phrase_book_reader(Cursor::new("kind,text\n")).unwrap();
        assert!(book.is_empty());
    }
}
