//! An assembled machine.
//!
//! A key press runs plugboard, rotor bank, reflector, rotor bank in reverse
//! and plugboard again. The only state that changes after assembly is the
//! rotor positions.
//!
//! # Message policy
//!
//! [`Machine::encode_message`] folds ASCII letters to uppercase and encodes
//! them. Every other character (spaces, digits, punctuation, non-ASCII) is
//! copied to the output unchanged and does not move the rotors, so the
//! receiver stays in step as long as the letters arrive in order.

use crate::{
    bank::RotorBank,
    letter::Letter,
    plugboard::Plugboard,
    reflector::Reflector,
    settings::{MachineSettings, RotorSettings},
    variant::Variant,
};

/// A validated machine, ready to encode.
///
/// Cloning yields an independent machine in the same state, which is how a
/// sender and a receiver are set up from one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    variant: Variant,
    plugboard: Plugboard,
    bank: RotorBank,
    reflector: Reflector,
}

impl Machine {
    pub(crate) fn new(
        variant: Variant,
        plugboard: Plugboard,
        bank: RotorBank,
        reflector: Reflector,
    ) -> Self {
        Self { variant, plugboard, bank, reflector }
    }

    /// Press one key and return the lamp that lights.
    pub fn encode(&mut self, letter: Letter) -> Letter {
        let entry = self.plugboard.apply(letter);
        let exit = self.bank.encode(entry, self.reflector);
        self.plugboard.apply(exit)
    }

    /// Encode `c` if it is an ASCII letter; otherwise return it unchanged
    /// without stepping.
    pub fn encode_char(&mut self, c: char) -> char {
        match Letter::from_char(c) {
            Ok(letter) => self.encode(letter).to_char(),
            Err(_) => c,
        }
    }

    /// Encode a whole message, keeping non-letters in place.
    pub fn encode_message(&mut self, text: &str) -> String {
        text.chars().map(|c| self.encode_char(c)).collect()
    }

    /// Window letters, leftmost first.
    pub fn positions(&self) -> Vec<Letter> {
        self.bank.positions()
    }

    /// Window letters as text, e.g. `"VJNA"`.
    pub fn window(&self) -> String {
        self.bank.positions().into_iter().map(Letter::to_char).collect()
    }

    /// Machine model.
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Plugboard wiring.
    pub const fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Fitted reflector.
    pub const fn reflector(&self) -> Reflector {
        self.reflector
    }

    /// Snapshot of the configuration with the *current* positions as start
    /// positions. A machine built from it continues exactly where this one
    /// stands.
    pub fn settings(&self) -> MachineSettings {
        MachineSettings {
            variant: self.variant,
            rotors: self
                .bank
                .rotors()
                .map(|(slot, rotor)| RotorSettings {
                    slot,
                    rotor: rotor.kind(),
                    position: rotor.position(),
                    ring_setting: rotor.ring_setting(),
                })
                .collect(),
            plugboard: self.plugboard.pairs().to_vec(),
            reflector: self.reflector.kind(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{builder::MachineBuilder, rotor::RotorKind, variant::Slot};

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn army_machine(start: &str) -> Machine {
        let mut builder = MachineBuilder::new(Variant::EnigmaI);
        for ((slot, kind), c) in [Slot::Left, Slot::Middle, Slot::Right]
            .into_iter()
            .zip([RotorKind::I, RotorKind::II, RotorKind::III])
            .zip(start.chars())
        {
            builder
                .set_rotor_at(slot, kind)
                .set_rotor_initial_position(slot, letter(c))
                .set_rotor_ring_setting(slot, Letter::A);
        }
        builder.set_reflector(2);
        builder.build().unwrap()
    }

    #[test]
    fn non_letters_pass_through_without_stepping() {
        let mut machine = army_machine("AAA");
        assert_eq!(machine.encode_message("12 -?"), "12 -?");
        assert_eq!(machine.window(), "AAA");

        let mut plain = army_machine("AAA");
        let spaced = machine.encode_message("hello world");
        let packed = plain.encode_message("HELLOWORLD");
        assert_eq!(spaced.replace(' ', ""), packed);
        assert_eq!(spaced.chars().nth(5), Some(' '));
    }

    #[test]
    fn message_round_trip() {
        let mut sender = army_machine("QEV");
        let mut receiver = sender.clone();
        let cipher = sender.encode_message("Attack at dawn, 0600!");
        assert_eq!(receiver.encode_message(&cipher), "ATTACK AT DAWN, 0600!");
    }

    #[test]
    fn clones_are_independent() {
        let mut original = army_machine("AAA");
        let copy = original.clone();
        original.encode(Letter::A);
        assert_eq!(original.window(), "AAB");
        assert_eq!(copy.window(), "AAA");
    }

    #[test]
    fn settings_resume_from_current_position() {
        let mut machine = army_machine("ADU");
        machine.encode_message("ABC");
        assert_eq!(machine.window(), "BFX");

        let mut resumed = machine.settings().builder().build().unwrap();
        assert_eq!(resumed.window(), "BFX");
        assert_eq!(resumed.encode_message("XYZ"), machine.encode_message("XYZ"));
    }
}
