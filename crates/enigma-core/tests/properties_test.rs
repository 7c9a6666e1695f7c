//! Property tests over randomly configured machines.

use enigma_core::{
    Letter, Machine, MachineSettings, PlugPair, Plugboard, Reflector, ReflectorKind, RotorKind,
    RotorSettings, Slot, Variant,
};
use proptest::prelude::*;

fn letter() -> impl Strategy<Value = Letter> {
    (0u8..26).prop_map(|index| Letter::from_index(index).unwrap())
}

fn plug_pairs() -> impl Strategy<Value = Vec<PlugPair>> {
    (Just(Letter::all().collect::<Vec<_>>()).prop_shuffle(), 0usize..=13).prop_map(
        |(alphabet, count)| {
            alphabet
                .chunks(2)
                .take(count)
                .map(|pair| PlugPair::new(pair[0], pair[1]).unwrap())
                .collect()
        },
    )
}

/// Valid settings for any variant.
fn settings() -> impl Strategy<Value = MachineSettings> {
    prop_oneof![Just(Variant::EnigmaI), Just(Variant::M3), Just(Variant::M4)].prop_flat_map(
        |variant| {
            (
                Just(variant),
                Just(variant.rotor_catalog(Slot::Right).to_vec()).prop_shuffle(),
                prop::sample::select(vec![RotorKind::Beta, RotorKind::Gamma]),
                prop::collection::vec(letter(), 4),
                prop::collection::vec(letter(), 4),
                plug_pairs(),
                prop::sample::select(variant.reflector_catalog().to_vec()),
            )
        },
    )
    .prop_map(|(variant, wheels, greek, positions, rings, plugboard, reflector)| {
        let greek = variant.has_slot(Slot::Greek).then_some(greek);
        let kinds = greek.into_iter().chain(wheels);
        let rotors = variant
            .slots()
            .iter()
            .zip(kinds)
            .zip(positions.into_iter().zip(rings))
            .map(|((&slot, rotor), (position, ring_setting))| RotorSettings {
                slot,
                rotor,
                position,
                ring_setting,
            })
            .collect();
        MachineSettings { variant, rotors, plugboard, reflector }
    })
}

fn build(settings: &MachineSettings) -> Machine {
    settings.builder().build().unwrap()
}

proptest! {
    #[test]
    fn prop_receiver_recovers_plaintext(
        settings in settings(),
        message in prop::collection::vec(letter(), 0..200),
    ) {
        let mut sender = build(&settings);
        let mut receiver = build(&settings);
        for &plain in &message {
            let cipher = sender.encode(plain);
            prop_assert_eq!(receiver.encode(cipher), plain);
        }
    }

    #[test]
    fn prop_each_state_is_a_derangement(
        settings in settings(),
        presses in 0usize..700,
    ) {
        let mut machine = build(&settings);
        for _ in 0..presses {
            machine.encode(Letter::A);
        }

        let mut seen = [false; 26];
        for input in Letter::all() {
            let output = machine.clone().encode(input);
            prop_assert_ne!(output, input);
            prop_assert!(!seen[output.index() as usize], "{} hit twice", output);
            seen[output.index() as usize] = true;
        }
    }

    #[test]
    fn prop_plugboard_is_self_inverse(pairs in plug_pairs()) {
        let board = Plugboard::from_pairs(&pairs).unwrap();
        for l in Letter::all() {
            prop_assert_eq!(board.apply(board.apply(l)), l);
        }
        prop_assert_eq!(board.pairs(), &pairs[..]);
    }

    #[test]
    fn prop_build_is_idempotent(
        settings in settings(),
        message in prop::collection::vec(letter(), 0..100),
    ) {
        let builder = settings.builder();
        let mut first = builder.build().unwrap();
        let mut second = builder.build().unwrap();
        for &l in &message {
            prop_assert_eq!(first.encode(l), second.encode(l));
        }
    }

    #[test]
    fn prop_snapshot_resumes_mid_message(
        settings in settings(),
        head in prop::collection::vec(letter(), 0..100),
        tail in prop::collection::vec(letter(), 1..50),
    ) {
        let mut machine = build(&settings);
        for &l in &head {
            machine.encode(l);
        }
        let mut resumed = build(&machine.settings());
        for &l in &tail {
            prop_assert_eq!(resumed.encode(l), machine.encode(l));
        }
    }

    #[test]
    fn prop_text_policy_ignores_non_letters(
        settings in settings(),
        text in "[a-zA-Z0-9 ,.!?]{0,80}",
    ) {
        let mut spaced = build(&settings);
        let mut packed = build(&settings);
        let letters: String = text.chars().filter(char::is_ascii_alphabetic).collect();

        let out = spaced.encode_message(&text);
        prop_assert_eq!(out.chars().count(), text.chars().count());
        let out_letters: String = out.chars().filter(char::is_ascii_alphabetic).collect();
        prop_assert_eq!(out_letters, packed.encode_message(&letters));
        prop_assert_eq!(spaced.window(), packed.window());
    }
}

#[test]
fn reflectors_never_fix_a_letter() {
    for kind in ReflectorKind::ALL {
        let reflector = Reflector::new(kind);
        assert!(Letter::all().all(|l| reflector.reflect(l) != l));
    }
}
