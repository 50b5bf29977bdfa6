//! Unit tests for pet-agent.

use pet_behavior::PhraseBook;
use pet_core::{SpeedProfile, Vec2};

use crate::builder::PetDescriptorBuilder;
use crate::descriptor::{ColorScheme, PetDescriptor, Species};
use crate::error::DescriptorError;

#[cfg(test)]
mod presets {
    use super::*;

    #[test]
    fn cat_and_dog_are_parameterizations_not_types() {
        let cat = PetDescriptor::cat();
        let dog = PetDescriptor::dog();

        assert_eq!(cat.spawn, Vec2::new(100.0, 300.0));
        assert_eq!(dog.spawn, Vec2::new(200.0, 350.0));
        assert_eq!(cat.retarget_interval_ticks, 100); // 5 s at 50 ms ticks
        assert_eq!(dog.retarget_interval_ticks, 120); // 6 s
        assert_eq!(cat.chatter_interval_ticks, 160);  // 8 s
        assert_eq!(dog.chatter_interval_ticks, 200);  // 10 s
        assert_eq!(cat.message_duration_ticks, 60);   // 3 s
        assert_eq!(cat.chatter_probability, 0.3);
        assert_ne!(cat.phrases, dog.phrases);
    }

    #[test]
    fn faces_follow_species_and_scheme() {
        let cat = PetDescriptor::cat();
        assert_eq!(cat.face(), "^•ﻌ•^");

        let mut dog = PetDescriptor::dog();
        assert_eq!(dog.face(), "ʕ•ᴥ•ʔ");
        dog.color_scheme = ColorScheme::Pastel;
        assert_eq!(dog.face(), "U・ᴥ・U");
        dog.color_scheme = ColorScheme::Monochrome;
        assert_eq!(dog.face(), "ʕ•_•ʔ");
        dog.color_scheme = ColorScheme::Neon;
        assert_eq!(dog.face(), "ʕ•ᴥ•ʔ");
    }
}

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn starts_from_species_defaults() {
        let d = PetDescriptorBuilder::new("momo", Species::Dog)
            .speed(SpeedProfile::Fast)
            .scale_percent(150)
            .build()
            .unwrap();

        assert_eq!(d.name, "momo");
        assert_eq!(d.speed, SpeedProfile::Fast);
        assert_eq!(d.scale_percent, 150);
        // Untouched fields keep the dog defaults.
        assert_eq!(d.retarget_interval_ticks, 120);
        assert_eq!(d.phrases, PhraseBook::dog());
    }

    #[test]
    fn rejects_probability_outside_unit_interval() {
        let err = PetDescriptorBuilder::new("p", Species::Cat)
            .chatter_probability(1.5)
            .build()
            .unwrap_err();
        assert!(matches!(err, DescriptorError::ProbabilityOutOfRange { got, .. } if got == 1.5));
    }

    #[test]
    fn rejects_zero_intervals() {
        let err = PetDescriptorBuilder::new("t", Species::Cat)
            .retarget_interval_ticks(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, DescriptorError::ZeroInterval { what: "retarget interval", .. }));
    }

    #[test]
    fn rejects_empty_chatter_list() {
        let err = PetDescriptorBuilder::new("quiet", Species::Cat)
            .phrases(PhraseBook::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, DescriptorError::NoChatterPhrases { .. }));
    }
}
