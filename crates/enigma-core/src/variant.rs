//! Machine variants and rotor slots.
//!
//! A [`Variant`] fixes which [`Slot`]s exist, which wheels each slot accepts
//! and which reflectors can be fitted. Reflectors are chosen by a 1-based
//! ordinal into the shared [`ReflectorKind::ALL`] table, shifted by a
//! per-variant offset:
//!
//! ```text
//! ALL:       A  B  C  B-thin  C-thin
//! Enigma I:  1  2  3
//! M3:           1  2
//! M4:                 1       2
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::InputError, reflector::ReflectorKind, rotor::RotorKind};

/// A rotor position in the machine, named rather than indexed so changing
/// variant cannot silently shift settings to a neighbouring wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    /// Leftmost thin slot of the M4. Never steps.
    Greek,
    /// Slowest stepping wheel.
    Left,
    /// Middle wheel; the one that double-steps.
    Middle,
    /// Fastest wheel, steps on every key press.
    Right,
}

impl Slot {
    /// Number of distinct slots across all variants.
    pub const COUNT: usize = 4;

    /// Every slot, leftmost first.
    pub const ALL: [Self; Self::COUNT] = [Self::Greek, Self::Left, Self::Middle, Self::Right];

    /// Position in [`Slot::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Greek => "greek",
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const THREE_SLOTS: [Slot; 3] = [Slot::Left, Slot::Middle, Slot::Right];
const FOUR_SLOTS: [Slot; 4] = Slot::ALL;

const ARMY_ROTORS: [RotorKind; 5] =
    [RotorKind::I, RotorKind::II, RotorKind::III, RotorKind::IV, RotorKind::V];
const NAVAL_ROTORS: [RotorKind; 8] = [
    RotorKind::I,
    RotorKind::II,
    RotorKind::III,
    RotorKind::IV,
    RotorKind::V,
    RotorKind::VI,
    RotorKind::VII,
    RotorKind::VIII,
];
const GREEK_ROTORS: [RotorKind; 2] = [RotorKind::Beta, RotorKind::Gamma];

static REFLECTORS: [ReflectorKind; 5] = ReflectorKind::ALL;

/// Supported machine models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Variant {
    /// Army and air force Enigma I: three wheels from I-V, reflectors A, B, C.
    #[default]
    EnigmaI,
    /// Naval M3: three wheels from I-VIII, reflectors B, C.
    M3,
    /// Naval M4: Greek wheel plus three from I-VIII, thin reflectors.
    M4,
}

impl Variant {
    /// Every variant in ordinal order.
    pub const ALL: [Self; 3] = [Self::EnigmaI, Self::M3, Self::M4];

    /// 1-based ordinal: Enigma I 1, M3 2, M4 3.
    pub const fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    /// Look up a variant by ordinal.
    pub fn from_ordinal(ordinal: u8) -> Result<Self, InputError> {
        ordinal
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize))
            .copied()
            .ok_or(InputError::UnknownVariantOrdinal(ordinal))
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::EnigmaI => "Enigma I",
            Self::M3 => "Enigma M3",
            Self::M4 => "Enigma M4",
        }
    }

    /// Slots present on this variant, leftmost first.
    pub const fn slots(self) -> &'static [Slot] {
        match self {
            Self::EnigmaI | Self::M3 => &THREE_SLOTS,
            Self::M4 => &FOUR_SLOTS,
        }
    }

    /// True if the variant has `slot`.
    pub fn has_slot(self, slot: Slot) -> bool {
        self.slots().contains(&slot)
    }

    /// Wheels that fit `slot`; empty if the variant lacks the slot.
    pub fn rotor_catalog(self, slot: Slot) -> &'static [RotorKind] {
        match (self, slot) {
            (Self::EnigmaI | Self::M3, Slot::Greek) => &[],
            (Self::EnigmaI, _) => &ARMY_ROTORS,
            (Self::M3, _) | (Self::M4, Slot::Left | Slot::Middle | Slot::Right) => &NAVAL_ROTORS,
            (Self::M4, Slot::Greek) => &GREEK_ROTORS,
        }
    }

    const fn reflector_offset(self) -> usize {
        match self {
            Self::EnigmaI => 0,
            Self::M3 => 1,
            Self::M4 => 3,
        }
    }

    const fn reflector_count(self) -> usize {
        match self {
            Self::EnigmaI => 3,
            Self::M3 | Self::M4 => 2,
        }
    }

    /// Reflectors this variant accepts, in ordinal order.
    pub fn reflector_catalog(self) -> &'static [ReflectorKind] {
        let start = self.reflector_offset();
        &REFLECTORS[start..start + self.reflector_count()]
    }

    /// Reflector at the 1-based `ordinal` of this variant's catalog.
    pub fn reflector(self, ordinal: u8) -> Option<ReflectorKind> {
        let index = usize::from(ordinal.checked_sub(1)?);
        self.reflector_catalog().get(index).copied()
    }

    /// 1-based ordinal of `kind` in this variant's catalog.
    pub fn reflector_ordinal(self, kind: ReflectorKind) -> Option<u8> {
        self.reflector_catalog()
            .iter()
            .position(|&candidate| candidate == kind)
            .and_then(|index| u8::try_from(index + 1).ok())
    }
}

impl FromStr for Variant {
    type Err = InputError;

    /// Accepts the ordinal, `I`, `M3`, `M4`, optionally prefixed with
    /// `Enigma`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String =
            s.chars().filter(char::is_ascii_alphanumeric).map(|c| c.to_ascii_lowercase()).collect();
        let key = key.strip_prefix("enigma").unwrap_or(&key);
        match key {
            "1" | "i" => Ok(Self::EnigmaI),
            "2" | "m3" => Ok(Self::M3),
            "3" | "m4" => Ok(Self::M4),
            _ => Err(InputError::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
