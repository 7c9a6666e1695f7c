//! Rotor bank and the stepping mechanism.
//!
//! On every key press the bank advances *before* the signal passes through
//! it. Which wheels move is decided from the positions showing before the
//! press, then all moves are applied together:
//!
//! 1. The rightmost wheel always steps.
//! 2. A wheel steps if the wheel to its right shows a turnover letter.
//! 3. A middle wheel showing its own turnover letter steps as well (the
//!    double step), since its pawl engages its own notch.
//! 4. The Greek wheel never steps.
//!
//! Deciding first keeps a wheel from seeing a neighbour that has already
//! moved during the same press.

use thiserror::Error;
use tracing::trace;

use crate::{
    letter::Letter,
    reflector::Reflector,
    rotor::Rotor,
    variant::Slot,
};

/// Why a list of wheels does not form a bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BankError {
    /// No wheel that steps sits in the rightmost position.
    #[error("the rightmost wheel of a bank must be a stepping wheel")]
    NoSteppingWheel,

    /// Slots out of left-to-right order, or one slot used twice.
    #[error("the {slot} slot cannot follow the {previous} slot")]
    SlotOrder {
        /// Slot of the wheel to the left.
        previous: Slot,
        /// Slot of the offending wheel.
        slot: Slot,
    },
}

/// The wheels of a machine, leftmost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorBank {
    rotors: Vec<(Slot, Rotor)>,
}

impl RotorBank {
    /// Bank from `(slot, rotor)` pairs ordered leftmost to rightmost.
    ///
    /// Slots must strictly increase from left to right, so each slot holds at
    /// most one wheel and the Greek wheel can only come first. The rightmost
    /// wheel must not be the Greek wheel.
    pub fn new(rotors: Vec<(Slot, Rotor)>) -> Result<Self, BankError> {
        for pair in rotors.windows(2) {
            let (previous, slot) = (pair[0].0, pair[1].0);
            if previous >= slot {
                return Err(BankError::SlotOrder { previous, slot });
            }
        }
        match rotors.last() {
            Some((slot, _)) if *slot != Slot::Greek => Ok(Self { rotors }),
            _ => Err(BankError::NoSteppingWheel),
        }
    }

    /// Wheels with their slots, leftmost first.
    pub fn rotors(&self) -> impl ExactSizeIterator<Item = (Slot, &Rotor)> + '_ {
        self.rotors.iter().map(|(slot, rotor)| (*slot, rotor))
    }

    /// Window letters, leftmost first.
    pub fn positions(&self) -> Vec<Letter> {
        self.rotors.iter().map(|(_, rotor)| rotor.position()).collect()
    }

    /// Which wheels move on the next key press, leftmost first.
    fn step_decisions(&self) -> [bool; Slot::COUNT] {
        let mut decisions = [false; Slot::COUNT];
        let last = self.rotors.len().saturating_sub(1);
        for (i, (slot, rotor)) in self.rotors.iter().enumerate() {
            if *slot == Slot::Greek {
                continue;
            }
            decisions[i] = if i == last {
                true
            } else {
                let carried = self.rotors[i + 1].1.is_at_notch();
                let has_stepping_left = i > 0 && self.rotors[i - 1].0 != Slot::Greek;
                carried || (has_stepping_left && rotor.is_at_notch())
            };
        }
        decisions
    }

    /// Advance the wheels for one key press.
    pub fn step(&mut self) {
        let decisions = self.step_decisions();
        for ((_, rotor), step) in self.rotors.iter_mut().zip(decisions) {
            if step {
                rotor.step();
            }
        }
        trace!(positions = ?self.positions(), "rotors stepped");
    }

    /// Step, then pass `letter` right to left through the wheels, off the
    /// reflector and back left to right.
    pub fn encode(&mut self, letter: Letter, reflector: Reflector) -> Letter {
        self.step();
        let inward = self
            .rotors
            .iter()
            .rev()
            .fold(letter, |signal, (_, rotor)| rotor.encode_forward(signal));
        let reflected = reflector.reflect(inward);
        self.rotors.iter().fold(reflected, |signal, (_, rotor)| rotor.encode_backward(signal))
    }
}
