//! Seeded generators for settings and messages.
//!
//! Every generated [`MachineSettings`] is one the builder accepts: slots get
//! distinct wheels from their catalog, plugboard letters are distinct and the
//! reflector exists on the variant.

use enigma_core::{Letter, MachineSettings, PlugPair, RotorKind, RotorSettings, Variant};
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

fn random_letter<R: Rng>(rng: &mut R) -> Letter {
    Letter::all().nth(rng.gen_range(0..26)).unwrap_or(Letter::A)
}

/// Valid settings drawn from `rng`.
pub fn random_settings<R: Rng>(rng: &mut R) -> MachineSettings {
    let variant = Variant::ALL[rng.gen_range(0..Variant::ALL.len())];

    let mut used: Vec<RotorKind> = Vec::new();
    let mut rotors = Vec::new();
    for &slot in variant.slots() {
        let mut catalog = variant.rotor_catalog(slot).to_vec();
        catalog.shuffle(rng);
        let Some(rotor) = catalog.into_iter().find(|kind| !used.contains(kind)) else {
            continue;
        };
        used.push(rotor);
        rotors.push(RotorSettings {
            slot,
            rotor,
            position: random_letter(rng),
            ring_setting: random_letter(rng),
        });
    }

    let mut alphabet: Vec<Letter> = Letter::all().collect();
    alphabet.shuffle(rng);
    let pairs = rng.gen_range(0..=13);
    let plugboard = alphabet
        .chunks_exact(2)
        .take(pairs)
        .filter_map(|pair| PlugPair::new(pair[0], pair[1]).ok())
        .collect();

    let catalog = variant.reflector_catalog();
    let reflector = catalog[rng.gen_range(0..catalog.len())];

    MachineSettings { variant, rotors, plugboard, reflector }
}

/// Valid settings for a given seed. The same seed always gives the same
/// settings.
pub fn seeded_settings(seed: u64) -> MachineSettings {
    random_settings(&mut ChaCha8Rng::seed_from_u64(seed))
}

/// Uppercase message of `len` letters.
pub fn random_message<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| random_letter(rng).to_char()).collect()
}
