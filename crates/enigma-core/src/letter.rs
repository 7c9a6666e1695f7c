//! Letters of the machine alphabet.
//!
//! Every wheel, the plugboard, the keyboard and the lampboard share one
//! alphabet of [`ALPHABET_LEN`] letters. A [`Letter`] is stored as its index
//! in that alphabet, so all wiring arithmetic is modular index arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Number of letters on the keyboard, the lampboard and every wheel.
pub const ALPHABET_LEN: usize = 26;

/// `ALPHABET_LEN` as the index type.
const LEN: u8 = 26;

/// One letter of the A-Z alphabet.
///
/// Construction is the only place where characters are validated; once a
/// `Letter` exists every substitution over it is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// The letter `A` (index 0), the neutral ring setting and start position.
    pub const A: Self = Self(0);

    /// Letter at `index` in the alphabet, or `None` if `index >= 26`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < LEN { Some(Self(index)) } else { None }
    }

    /// Index of this letter in the alphabet (`A` = 0).
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Parse an ASCII letter, ignoring case.
    pub fn from_char(c: char) -> Result<Self, InputError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            Err(InputError::NotALetter(c))
        }
    }

    /// The uppercase character for this letter.
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Advance `by` places around the alphabet, wrapping after `Z`.
    pub const fn rotate_forward(self, by: u8) -> Self {
        Self((self.0 + by % LEN) % LEN)
    }

    /// Move back `by` places around the alphabet, wrapping before `A`.
    pub const fn rotate_back(self, by: u8) -> Self {
        self.rotate_forward(LEN - by % LEN)
    }

    /// All letters in alphabetical order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator + Clone {
        (0..LEN).map(Self)
    }
}

impl TryFrom<char> for Letter {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
