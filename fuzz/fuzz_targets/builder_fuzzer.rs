//! Fuzz target for [`MachineBuilder`] validation
//!
//! Any draft, however wrong, must end in a machine or a list of problems
//!
//! # Strategy
//!
//! - Variant switches: drafts filled for one variant and built as another
//! - Slot coverage: rotors, positions and rings set or left out per slot,
//!   including the Greek slot on three-rotor machines
//! - Ordinals: rotor and reflector ordinals over the whole `u8` range
//! - Plugboard text: arbitrary strings fed to the connection parser
//!
//! # Invariants
//!
//! - `build()` NEVER panics
//! - A rejected draft reports at least one issue
//! - An accepted machine's settings build an identical machine
//! - An accepted machine never encodes a letter to itself

#![no_main]

use arbitrary::Arbitrary;
use enigma_core::{Letter, MachineBuilder, Slot, Variant};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SlotInput {
    rotor: Option<u8>,
    position: Option<u8>,
    ring: Option<u8>,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    variant: u8,
    build_as: Option<u8>,
    slots: [SlotInput; 4],
    plugboard: Vec<String>,
    reflector: Option<u8>,
    probe: u8,
}

fn letter(x: u8) -> Letter {
    Letter::from_index(x % 26).unwrap()
}

fuzz_target!(|input: FuzzInput| {
    let variant = Variant::from_ordinal(input.variant % 4).unwrap_or_default();
    let mut builder = MachineBuilder::new(variant);

    for (slot, draft) in Slot::ALL.into_iter().zip(&input.slots) {
        if let Some(ordinal) = draft.rotor {
            let _ = builder.set_rotor_ordinal(slot, ordinal);
        }
        if let Some(position) = draft.position {
            builder.set_rotor_initial_position(slot, letter(position));
        }
        if let Some(ring) = draft.ring {
            builder.set_rotor_ring_setting(slot, letter(ring));
        }
    }

    for pair in input.plugboard.iter().take(16) {
        let _ = builder.add_plugboard_connection(pair);
    }

    if let Some(ordinal) = input.reflector {
        builder.set_reflector(ordinal);
    }

    if let Some(Ok(other)) = input.build_as.map(|v| Variant::from_ordinal(v % 4)) {
        builder.set_variant(other);
    }

    match builder.build() {
        Ok(mut machine) => {
            let again = machine.settings().builder().build();
            assert_eq!(again.as_ref().ok(), Some(&machine), "settings did not rebuild");

            let key = letter(input.probe);
            assert_ne!(machine.encode(key), key, "letter encoded to itself");
        },
        Err(err) => {
            assert!(!err.issues().is_empty(), "rejected draft with no issues");
        },
    }
});
