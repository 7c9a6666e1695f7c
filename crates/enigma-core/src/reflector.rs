//! Reflector (Umkehrwalze) catalog.
//!
//! Every reflector is a fixed-point-free involution. That is checked while
//! the catalog is evaluated at compile time, which is what guarantees a
//! letter never encrypts to itself.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::InputError, letter::Letter, wiring::Wiring};

/// Reflector wirings, indexed by `ReflectorKind as usize`.
static REFLECTOR_WIRINGS: [Wiring; 5] = [
    Wiring::reflecting(b"EJMZALYXVBWFCRQUONTSPIKHGD"),
    Wiring::reflecting(b"YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    Wiring::reflecting(b"FVPJIAOYEDRZXWGCTKUQSBNMHL"),
    Wiring::reflecting(b"ENKQAUYWJICOPBLMDXZVFTHRGS"),
    Wiring::reflecting(b"RDOBJNTKVEHMLFCWZAXGYIPSUQ"),
];

/// A reflector from the catalog.
///
/// Declaration order is the shared ordinal table that each variant indexes
/// into with its own offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReflectorKind {
    /// UKW-A.
    A,
    /// UKW-B.
    B,
    /// UKW-C.
    C,
    /// Thin UKW-B, paired with a Greek wheel on the M4.
    BThin,
    /// Thin UKW-C, paired with a Greek wheel on the M4.
    CThin,
}

impl ReflectorKind {
    /// The shared reflector table.
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::BThin, Self::CThin];

    /// Conventional name, e.g. `"UKW-B"` or `"UKW-C thin"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "UKW-A",
            Self::B => "UKW-B",
            Self::C => "UKW-C",
            Self::BThin => "UKW-B thin",
            Self::CThin => "UKW-C thin",
        }
    }

    /// Reflector wiring.
    pub fn wiring(self) -> &'static Wiring {
        &REFLECTOR_WIRINGS[self as usize]
    }
}

impl FromStr for ReflectorKind {
    type Err = InputError;

    /// Accepts `B`, `UKW-B`, `b thin`, `thin-b`, `BThin` and similar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String =
            s.chars().filter(char::is_ascii_alphanumeric).map(|c| c.to_ascii_lowercase()).collect();
        let key = key.strip_prefix("ukw").unwrap_or(&key);
        match key {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "c" => Ok(Self::C),
            "bthin" | "thinb" => Ok(Self::BThin),
            "cthin" | "thinc" => Ok(Self::CThin),
            _ => Err(InputError::UnknownReflector(s.to_string())),
        }
    }
}

impl fmt::Display for ReflectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The reflector fitted in a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflector {
    kind: ReflectorKind,
}

impl Reflector {
    /// Fit a reflector from the catalog.
    pub const fn new(kind: ReflectorKind) -> Self {
        Self { kind }
    }

    /// Catalog entry.
    pub const fn kind(self) -> ReflectorKind {
        self.kind
    }

    /// Turn the signal back towards the rotors.
    pub fn reflect(self, letter: Letter) -> Letter {
        self.kind.wiring().apply(letter)
    }
}

/// How a reflector was chosen for a draft configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorSelection {
    /// 1-based index into the variant's reflector catalog.
    Ordinal(u8),
    /// A specific catalog entry.
    Kind(ReflectorKind),
}

impl fmt::Display for ReflectorSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordinal(ordinal) => write!(f, "#{ordinal}"),
            Self::Kind(kind) => write!(f, "{kind}"),
        }
    }
}
