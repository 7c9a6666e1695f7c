//! Rotor catalog and rotor instances.
//!
//! A [`RotorKind`] is a physical wheel from the catalog: a fixed core wiring
//! and the notch letters on its alphabet ring. A [`Rotor`] is one wheel
//! fitted in a machine, with a ring setting fixed at assembly and a position
//! that advances while typing.
//!
//! # Offsets
//!
//! The ring setting rotates the core wiring relative to the alphabet ring;
//! the position rotates the whole wheel relative to the machine. A signal
//! therefore meets the core shifted by `position - ring_setting`. The notch
//! sits on the alphabet ring, so turnover depends on the position alone.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::InputError,
    letter::{ALPHABET_LEN, Letter},
    wiring::Wiring,
};

/// Core wirings, indexed by `RotorKind as usize`.
static ROTOR_WIRINGS: [Wiring; 10] = [
    Wiring::from_table(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ"),
    Wiring::from_table(b"AJDKSIRUXBLHWTMCQGZNPYFVOE"),
    Wiring::from_table(b"BDFHJLCPRTXVZNYEAIUWGMKQSO"),
    Wiring::from_table(b"ESOVPZJAYQUIRHXLNFTGKDCMWB"),
    Wiring::from_table(b"VZBRGITYUPSDNHLMXAWOEKQFCJ"),
    Wiring::from_table(b"JPGVOUMFYQBENHZRDKASXLICTW"),
    Wiring::from_table(b"NZJHGRCXMYSWBOUFAIVLPEKQDT"),
    Wiring::from_table(b"FKQHTLXOCBJSPDZRAMEWNIUYGV"),
    Wiring::from_table(b"LEYJVCNIXWPBQMDRTAKZGFUHOS"),
    Wiring::from_table(b"FSOKANUERHMBTIXCWLQPZYDJGV"),
];

const fn notch(c: u8) -> Letter {
    match Letter::from_index(c - b'A') {
        Some(letter) => letter,
        None => Letter::A,
    }
}

/// A wheel from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RotorKind {
    /// Rotor I, turnover at Q.
    I,
    /// Rotor II, turnover at E.
    II,
    /// Rotor III, turnover at V.
    III,
    /// Rotor IV, turnover at J.
    IV,
    /// Rotor V, turnover at Z.
    V,
    /// Rotor VI, turnover at Z and M.
    VI,
    /// Rotor VII, turnover at Z and M.
    VII,
    /// Rotor VIII, turnover at Z and M.
    VIII,
    /// Thin Greek wheel Beta (M4 only, never steps).
    Beta,
    /// Thin Greek wheel Gamma (M4 only, never steps).
    Gamma,
}

impl RotorKind {
    /// The full catalog in ordinal order.
    pub const ALL: [Self; 10] = [
        Self::I,
        Self::II,
        Self::III,
        Self::IV,
        Self::V,
        Self::VI,
        Self::VII,
        Self::VIII,
        Self::Beta,
        Self::Gamma,
    ];

    /// 1-based catalog ordinal: I..VIII are 1..8, Beta 9, Gamma 10.
    pub const fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    /// Look up a rotor by its 1-based catalog ordinal.
    pub fn from_ordinal(ordinal: u8) -> Result<Self, InputError> {
        ordinal
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize))
            .copied()
            .ok_or(InputError::UnknownRotorOrdinal(ordinal))
    }

    /// Conventional name (`"I"` .. `"VIII"`, `"Beta"`, `"Gamma"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::V => "V",
            Self::VI => "VI",
            Self::VII => "VII",
            Self::VIII => "VIII",
            Self::Beta => "Beta",
            Self::Gamma => "Gamma",
        }
    }

    /// Core wiring of the wheel.
    pub fn wiring(self) -> &'static Wiring {
        &ROTOR_WIRINGS[self as usize]
    }

    /// Positions at which this wheel carries the wheel to its left.
    pub const fn notches(self) -> &'static [Letter] {
        const Q: [Letter; 1] = [notch(b'Q')];
        const E: [Letter; 1] = [notch(b'E')];
        const V: [Letter; 1] = [notch(b'V')];
        const J: [Letter; 1] = [notch(b'J')];
        const Z: [Letter; 1] = [notch(b'Z')];
        const ZM: [Letter; 2] = [notch(b'Z'), notch(b'M')];
        match self {
            Self::I => &Q,
            Self::II => &E,
            Self::III => &V,
            Self::IV => &J,
            Self::V => &Z,
            Self::VI | Self::VII | Self::VIII => &ZM,
            Self::Beta | Self::Gamma => &[],
        }
    }

    /// True for the thin wheels that only fit the M4's leftmost slot.
    pub const fn is_greek(self) -> bool {
        matches!(self, Self::Beta | Self::Gamma)
    }
}

impl FromStr for RotorKind {
    type Err = InputError;

    /// Accepts catalog names in any case, or the 1-based ordinal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if let Ok(ordinal) = name.parse::<u8>() {
            return Self::from_ordinal(ordinal);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| InputError::UnknownRotor(s.to_string()))
    }
}

impl fmt::Display for RotorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A wheel fitted in a machine.
///
/// Only the position changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    kind: RotorKind,
    ring_setting: Letter,
    position: Letter,
}

impl Rotor {
    /// Fit `kind` with the given ring setting, turned to `position`.
    pub fn new(kind: RotorKind, ring_setting: Letter, position: Letter) -> Self {
        Self { kind, ring_setting, position }
    }

    /// Catalog entry of this wheel.
    pub const fn kind(&self) -> RotorKind {
        self.kind
    }

    /// Ring setting fixed at assembly.
    pub const fn ring_setting(&self) -> Letter {
        self.ring_setting
    }

    /// Letter currently showing in the window.
    pub const fn position(&self) -> Letter {
        self.position
    }

    /// Advance one place.
    pub fn step(&mut self) {
        self.position = self.position.rotate_forward(1);
    }

    /// True if the window shows one of the wheel's turnover letters.
    pub fn is_at_notch(&self) -> bool {
        self.kind.notches().contains(&self.position)
    }

    /// Signal travelling from the right-hand contacts towards the reflector.
    pub fn encode_forward(&self, letter: Letter) -> Letter {
        let shift = self.shift();
        self.kind.wiring().apply(letter.rotate_forward(shift)).rotate_back(shift)
    }

    /// Signal returning from the reflector towards the plugboard.
    pub fn encode_backward(&self, letter: Letter) -> Letter {
        let shift = self.shift();
        self.kind.wiring().apply_inverse(letter.rotate_forward(shift)).rotate_back(shift)
    }

    fn shift(&self) -> u8 {
        (self.position.index() + ALPHABET_LEN as u8 - self.ring_setting.index())
            % ALPHABET_LEN as u8
    }
}
