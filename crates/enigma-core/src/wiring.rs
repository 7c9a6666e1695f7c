//! Fixed-size bijective letter mappings.
//!
//! [`Wiring`] is the permutation primitive beneath the plugboard, every rotor
//! core and every reflector. It keeps both directions as lookup tables so the
//! return path through a rotor costs the same as the forward path.
//!
//! # Invariants
//!
//! - Bijection: `apply_inverse(apply(x)) == x` for every letter
//! - Reflecting wirings are involutions without fixed points:
//!   `apply(apply(x)) == x` and `apply(x) != x`
//!
//! Catalog wirings are built through the `const` constructors inside
//! `static` items, so a defective table stops compilation instead of
//! surfacing at runtime.

use thiserror::Error;

use crate::letter::{ALPHABET_LEN, Letter};

/// Why a table is not a usable wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WiringError {
    /// The table does not list exactly one entry per letter.
    #[error("wiring must list {ALPHABET_LEN} letters, got {0}")]
    Length(usize),

    /// The table contains something other than an uppercase letter.
    #[error("wiring contains {0:?}, which is not a letter")]
    NotALetter(char),

    /// A computed table holds an index past the end of the alphabet.
    #[error("wiring index {0} is outside the alphabet")]
    IndexOutOfRange(u8),

    /// A letter is the image of two inputs.
    #[error("letter {0} appears twice in the wiring")]
    Repeated(Letter),

    /// Reflecting wiring that is not self-inverse.
    #[error("{0} is wired to {1}, but {1} is not wired back to {0}")]
    NotInvolution(Letter, Letter),

    /// Reflecting wiring that maps a letter to itself.
    #[error("{0} is wired to itself")]
    FixedPoint(Letter),
}

/// A bijection over the alphabet with a precomputed inverse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wiring {
    forward: [Letter; ALPHABET_LEN],
    inverse: [Letter; ALPHABET_LEN],
}

impl Wiring {
    /// The identity mapping.
    pub const fn identity() -> Self {
        let mut forward = [Letter::A; ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            forward[i] = Letter::A.rotate_forward(i as u8);
            i += 1;
        }
        Self { forward, inverse: forward }
    }

    /// Build from a table of uppercase ASCII letters, where `table[i]` is the
    /// image of the `i`-th letter.
    pub const fn try_from_table(table: &[u8; ALPHABET_LEN]) -> Result<Self, WiringError> {
        let mut indices = [0u8; ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            if !table[i].is_ascii_uppercase() {
                return Err(WiringError::NotALetter(table[i] as char));
            }
            indices[i] = table[i] - b'A';
            i += 1;
        }
        Self::try_from_indices(&indices)
    }

    /// Like [`Wiring::try_from_table`], additionally requiring an involution
    /// without fixed points, as a physical reflector demands.
    pub const fn try_reflecting(table: &[u8; ALPHABET_LEN]) -> Result<Self, WiringError> {
        let wiring = match Self::try_from_table(table) {
            Ok(wiring) => wiring,
            Err(err) => return Err(err),
        };
        let mut i = 0;
        while i < ALPHABET_LEN {
            let image = wiring.forward[i];
            if image.index() as usize == i {
                return Err(WiringError::FixedPoint(image));
            }
            if wiring.forward[image.index() as usize].index() as usize != i {
                let partner = wiring.inverse[image.index() as usize];
                return Err(WiringError::NotInvolution(partner, image));
            }
            i += 1;
        }
        Ok(wiring)
    }

    /// Catalog constructor: a table that is not a bijection fails constant
    /// evaluation, so defective catalog data never compiles.
    #[allow(clippy::panic)]
    pub const fn from_table(table: &[u8; ALPHABET_LEN]) -> Self {
        match Self::try_from_table(table) {
            Ok(wiring) => wiring,
            Err(_) => panic!("catalog wiring is not a permutation of the alphabet"),
        }
    }

    /// Catalog constructor for reflectors; see [`Wiring::from_table`].
    #[allow(clippy::panic)]
    pub const fn reflecting(table: &[u8; ALPHABET_LEN]) -> Self {
        match Self::try_reflecting(table) {
            Ok(wiring) => wiring,
            Err(_) => panic!("catalog reflector is not a fixed-point-free involution"),
        }
    }

    /// Parse a wiring written as 26 letters, e.g. `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`.
    /// Case is ignored.
    pub fn parse(text: &str) -> Result<Self, WiringError> {
        let count = text.chars().count();
        if count != ALPHABET_LEN {
            return Err(WiringError::Length(count));
        }
        let mut table = [0u8; ALPHABET_LEN];
        for (slot, c) in table.iter_mut().zip(text.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(WiringError::NotALetter(c));
            }
            *slot = c.to_ascii_uppercase() as u8;
        }
        Self::try_from_table(&table)
    }

    /// Build from an explicit letter-to-letter mapping.
    pub fn from_mapping(mapping: &[Letter; ALPHABET_LEN]) -> Result<Self, WiringError> {
        Self::try_from_indices(&mapping.map(Letter::index))
    }

    const fn try_from_indices(indices: &[u8; ALPHABET_LEN]) -> Result<Self, WiringError> {
        let mut forward = [Letter::A; ALPHABET_LEN];
        let mut inverse = [Letter::A; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            let Some(image) = Letter::from_index(indices[i]) else {
                return Err(WiringError::IndexOutOfRange(indices[i]));
            };
            let j = image.index() as usize;
            if seen[j] {
                return Err(WiringError::Repeated(image));
            }
            seen[j] = true;
            forward[i] = image;
            inverse[j] = Letter::A.rotate_forward(i as u8);
            i += 1;
        }
        // 26 distinct images out of 26 letters: every letter is hit once.
        Ok(Self { forward, inverse })
    }

    /// Image of `letter`.
    pub fn apply(&self, letter: Letter) -> Letter {
        self.forward[letter.index() as usize]
    }

    /// Preimage of `letter`.
    pub fn apply_inverse(&self, letter: Letter) -> Letter {
        self.inverse[letter.index() as usize]
    }

    /// True if the wiring is its own inverse.
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }

    /// Letters the wiring leaves in place.
    pub fn fixed_points(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::all().filter(|&letter| self.apply(letter) == letter)
    }
}

impl Default for Wiring {
    fn default() -> Self {
        Self::identity()
    }
}
