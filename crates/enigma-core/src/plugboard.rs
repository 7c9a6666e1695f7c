//! Plugboard (Steckerbrett).
//!
//! A set of disjoint letter swaps applied before the signal enters the rotor
//! bank and again after it leaves. Unplugged letters pass straight through.
//!
//! # Invariants
//!
//! - Each letter is part of at most one connection
//! - Self-inverse: `apply(apply(x)) == x`

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    error::InputError,
    letter::{ALPHABET_LEN, Letter},
    wiring::Wiring,
};

/// One patch cable joining two distinct letters.
///
/// Kept in the order it was entered so conflicts can be reported back in the
/// user's own terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlugPair {
    first: Letter,
    second: Letter,
}

impl PlugPair {
    /// Join two letters.
    pub fn new(first: Letter, second: Letter) -> Result<Self, InputError> {
        if first == second {
            return Err(InputError::SelfConnection(first));
        }
        Ok(Self { first, second })
    }

    /// Both ends of the cable, in entry order.
    pub const fn letters(self) -> (Letter, Letter) {
        (self.first, self.second)
    }

    /// True if either end is `letter`.
    pub fn contains(self, letter: Letter) -> bool {
        self.first == letter || self.second == letter
    }
}

impl FromStr for PlugPair {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Self::new(Letter::from_char(a)?, Letter::from_char(b)?)
            },
            _ => Err(InputError::MalformedPair(s.to_string())),
        }
    }
}

impl TryFrom<String> for PlugPair {
    type Error = InputError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PlugPair> for String {
    fn from(pair: PlugPair) -> Self {
        pair.to_string()
    }
}

impl fmt::Display for PlugPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// A letter wired by more than one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterConflict {
    /// The over-used letter.
    pub letter: Letter,
    /// Every connection containing it, in entry order.
    pub pairs: Vec<PlugPair>,
}

/// Every letter that appears in more than one connection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("plugboard letters used more than once: {}", letter_list(.conflicts))]
pub struct DuplicateLetters {
    /// One entry per reused letter, alphabetically.
    pub conflicts: Vec<LetterConflict>,
}

impl DuplicateLetters {
    /// The reused letters, alphabetically.
    pub fn letters(&self) -> Vec<Letter> {
        self.conflicts.iter().map(|conflict| conflict.letter).collect()
    }
}

fn letter_list(conflicts: &[LetterConflict]) -> String {
    conflicts.iter().map(|conflict| conflict.letter.to_string()).collect::<Vec<_>>().join(", ")
}

/// Failure to build a plugboard from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlugboardError {
    /// A connection is not two distinct letters.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Connections overlap.
    #[error(transparent)]
    Duplicates(#[from] DuplicateLetters),
}

/// Validated plugboard wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    wiring: Wiring,
    pairs: Vec<PlugPair>,
}

impl Plugboard {
    /// A plugboard with no cables.
    pub fn empty() -> Self {
        Self { wiring: Wiring::identity(), pairs: Vec::new() }
    }

    /// Wire the given connections.
    ///
    /// Checks every pair before failing, so the error names all reused
    /// letters rather than the first one found.
    pub fn from_pairs(pairs: &[PlugPair]) -> Result<Self, DuplicateLetters> {
        let mut uses = [0usize; ALPHABET_LEN];
        for pair in pairs {
            let (a, b) = pair.letters();
            uses[a.index() as usize] += 1;
            uses[b.index() as usize] += 1;
        }

        let conflicts: Vec<LetterConflict> = Letter::all()
            .filter(|letter| uses[letter.index() as usize] > 1)
            .map(|letter| LetterConflict {
                letter,
                pairs: pairs.iter().copied().filter(|pair| pair.contains(letter)).collect(),
            })
            .collect();
        if !conflicts.is_empty() {
            return Err(DuplicateLetters { conflicts });
        }

        let mut mapping: [Letter; ALPHABET_LEN] = std::array::from_fn(|i| {
            Letter::from_index(i as u8).unwrap_or(Letter::A)
        });
        for pair in pairs {
            let (a, b) = pair.letters();
            mapping[a.index() as usize] = b;
            mapping[b.index() as usize] = a;
        }

        // Disjoint swaps over the identity are always a bijection.
        let wiring = Wiring::from_mapping(&mapping).unwrap_or_else(|_| Wiring::identity());
        Ok(Self { wiring, pairs: pairs.to_vec() })
    }

    /// Parse and wire connections given as two-letter strings, e.g.
    /// `["AV", "BS", "CG"]`.
    pub fn parse<I, S>(pairs: I) -> Result<Self, PlugboardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pairs = pairs
            .into_iter()
            .map(|pair| pair.as_ref().parse::<PlugPair>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_pairs(&pairs)?)
    }

    /// Swap `letter` with its partner, if it has one.
    pub fn apply(&self, letter: Letter) -> Letter {
        self.wiring.apply(letter)
    }

    /// Connections in entry order.
    pub fn pairs(&self) -> &[PlugPair] {
        &self.pairs
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn pair(s: &str) -> PlugPair {
        s.parse().unwrap()
    }

    #[test]
    fn parse_pair() {
        let p = pair(" av ");
        assert_eq!(p.letters(), (letter('A'), letter('V')));
        assert_eq!(p.to_string(), "AV");
    }

    #[test]
    fn reject_malformed_pairs() {
        for bad in ["", "A", "ABC", "A1", "A-", "  "] {
            assert_eq!(
                bad.parse::<PlugPair>(),
                Err(InputError::MalformedPair(bad.to_string())),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn reject_self_connection() {
        assert_eq!("QQ".parse::<PlugPair>(), Err(InputError::SelfConnection(letter('Q'))));
    }

    #[test]
    fn swaps_both_directions() {
        let board = Plugboard::parse(["AV", "BS"]).unwrap();
        assert_eq!(board.apply(letter('A')), letter('V'));
        assert_eq!(board.apply(letter('V')), letter('A'));
        assert_eq!(board.apply(letter('S')), letter('B'));
        assert_eq!(board.apply(letter('C')), letter('C'));
    }

    #[test]
    fn empty_board_is_identity() {
        let board = Plugboard::empty();
        for l in Letter::all() {
            assert_eq!(board.apply(l), l);
        }
    }

    #[test]
    fn full_board_is_self_inverse() {
        let board = Plugboard::parse([
            "AB", "CD", "EF", "GH", "IJ", "KL", "MN", "OP", "QR", "ST", "UV", "WX", "YZ",
        ])
        .unwrap();
        for l in Letter::all() {
            assert_ne!(board.apply(l), l);
            assert_eq!(board.apply(board.apply(l)), l);
        }
    }

    #[test]
    fn reports_every_duplicate_letter() {
        let err = Plugboard::parse(["AB", "AC", "DE", "FD", "GH"]).unwrap_err();
        let PlugboardError::Duplicates(dups) = err else {
            panic!("expected duplicate letters, got {err:?}");
        };

        assert_eq!(dups.letters(), vec![letter('A'), letter('D')]);
        assert_eq!(dups.conflicts[0].pairs, vec![pair("AB"), pair("AC")]);
        assert_eq!(dups.conflicts[1].pairs, vec![pair("DE"), pair("FD")]);
        assert_eq!(dups.to_string(), "plugboard letters used more than once: A, D");
    }

    #[test]
    fn repeated_pair_reuses_both_letters() {
        let err = Plugboard::from_pairs(&[pair("XY"), pair("YX")]).unwrap_err();
        assert_eq!(err.letters(), vec![letter('X'), letter('Y')]);
    }

    #[test]
    fn malformed_entry_wins_over_duplicates() {
        let err = Plugboard::parse(["AB", "AB", "A"]).unwrap_err();
        assert_eq!(err, PlugboardError::Input(InputError::MalformedPair("A".to_string())));
    }

    #[test]
    fn pair_serializes_as_text() {
        let mut bytes = Vec::new();
        ciborium::ser::into_writer(&pair("KM"), &mut bytes).unwrap();
        let text: String = ciborium::de::from_reader(&bytes[..]).unwrap();
        assert_eq!(text, "KM");

        let decoded: PlugPair = ciborium::de::from_reader(&bytes[..]).unwrap();
        assert_eq!(decoded, pair("KM"));
    }
}
