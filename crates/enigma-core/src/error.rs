//! Error types for machine configuration.
//!
//! Two families of failure exist:
//!
//! - [`InputError`]: a single value handed to the core is malformed (not a
//!   letter, not a two-letter pair, unknown catalog name). Rejected at the
//!   point of entry.
//! - [`ValidationError`]: the accumulated configuration is inconsistent or
//!   incomplete. Carries every [`Issue`] found by one `build()` so a caller
//!   can present a complete correction list.
//!
//! Encoding itself never fails.

use std::fmt;

use thiserror::Error;

use crate::{
    letter::Letter,
    plugboard::PlugPair,
    reflector::ReflectorSelection,
    rotor::RotorKind,
    variant::{Slot, Variant},
};

/// A malformed value rejected where it enters the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Character outside the A-Z alphabet.
    #[error("{0:?} is not a letter of the alphabet")]
    NotALetter(char),

    /// Plugboard connection that is not exactly two letters.
    #[error("plugboard connection {0:?} must be exactly two letters")]
    MalformedPair(String),

    /// Plugboard connection from a letter to itself.
    #[error("plugboard connection {0}{0} joins a letter to itself")]
    SelfConnection(Letter),

    /// Rotor ordinal outside the catalog.
    #[error("rotor ordinal {0} is not in the catalog")]
    UnknownRotorOrdinal(u8),

    /// Rotor name outside the catalog.
    #[error("unknown rotor {0:?}")]
    UnknownRotor(String),

    /// Reflector name outside the catalog.
    #[error("unknown reflector {0:?}")]
    UnknownReflector(String),

    /// Variant ordinal outside the supported machines.
    #[error("machine ordinal {0} is not a supported variant")]
    UnknownVariantOrdinal(u8),

    /// Variant name outside the supported machines.
    #[error("unknown machine variant {0:?}")]
    UnknownVariant(String),
}

/// Per-slot value a rotor slot needs before the machine can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotSetting {
    /// Which rotor sits in the slot.
    Rotor,
    /// Letter showing in the window at the start of the message.
    InitialPosition,
    /// Ring (alphabet tyre) offset.
    RingSetting,
}

impl fmt::Display for SlotSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rotor => "rotor",
            Self::InitialPosition => "initial position",
            Self::RingSetting => "ring setting",
        })
    }
}

/// How an [`Issue`] should be remedied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCategory {
    /// Two choices collide; one of them has to change.
    Conflict,
    /// A required choice was never made.
    Incomplete,
    /// A choice does not exist on the selected variant.
    Incompatible,
}

/// One problem found while validating a configuration draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
    /// The same rotor was assigned to two slots.
    ///
    /// Reported once per duplicate assignment, against the first slot that
    /// claimed the rotor.
    #[error("rotor {rotor} is assigned to both the {first} and {duplicate} slots")]
    RotorReused {
        /// Rotor chosen more than once.
        rotor: RotorKind,
        /// Slot that claimed the rotor first.
        first: Slot,
        /// Later slot claiming the same rotor.
        duplicate: Slot,
    },

    /// A plugboard letter appears in more than one connection.
    #[error(
        "plugboard letter {letter} is used by more than one connection: {}",
        join_pairs(.pairs)
    )]
    LetterReused {
        /// Letter wired more than once.
        letter: Letter,
        /// Every connection that uses the letter, in entry order.
        pairs: Vec<PlugPair>,
    },

    /// A slot required by the variant lacks a value.
    #[error("the {slot} slot has no {setting}")]
    MissingSlotSetting {
        /// Slot with the gap.
        slot: Slot,
        /// Which value is missing.
        setting: SlotSetting,
    },

    /// No reflector was selected.
    #[error("no reflector selected")]
    MissingReflector,

    /// The rotor cannot be fitted in that slot of this variant.
    #[error("rotor {rotor} cannot be fitted in the {slot} slot of the {variant}")]
    RotorUnavailable {
        /// Slot the rotor was assigned to.
        slot: Slot,
        /// Rotor outside the slot's catalog.
        rotor: RotorKind,
        /// Selected variant.
        variant: Variant,
    },

    /// A value was set for a slot the variant does not have.
    #[error("the {variant} has no {slot} slot")]
    SlotUnavailable {
        /// Slot absent from the variant.
        slot: Slot,
        /// Selected variant.
        variant: Variant,
    },

    /// The reflector selection is outside the variant's catalog.
    #[error("reflector {selection} is not available on the {variant}")]
    ReflectorUnavailable {
        /// Ordinal or reflector that was selected.
        selection: ReflectorSelection,
        /// Selected variant.
        variant: Variant,
    },
}

impl Issue {
    /// Classify the issue by its remedy.
    pub fn category(&self) -> IssueCategory {
        match self {
            Self::RotorReused { .. } | Self::LetterReused { .. } => IssueCategory::Conflict,
            Self::MissingSlotSetting { .. } | Self::MissingReflector => IssueCategory::Incomplete,
            Self::RotorUnavailable { .. }
            | Self::SlotUnavailable { .. }
            | Self::ReflectorUnavailable { .. } => IssueCategory::Incompatible,
        }
    }
}

fn join_pairs(pairs: &[PlugPair]) -> String {
    pairs.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Every problem found by one `build()` attempt.
///
/// Never empty: a draft with no issues builds a machine instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<Issue>,
}

impl ValidationError {
    pub(crate) fn new(issues: Vec<Issue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }

    /// All issues in report order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Issues in the given category.
    pub fn in_category(&self, category: IssueCategory) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |issue| issue.category() == category)
    }

    /// Collisions between choices (rotor reuse, plugboard letter reuse).
    pub fn conflicts(&self) -> impl Iterator<Item = &Issue> {
        self.in_category(IssueCategory::Conflict)
    }

    /// True if any required choice is missing.
    pub fn is_incomplete(&self) -> bool {
        self.in_category(IssueCategory::Incomplete).next().is_some()
    }

    /// Plugboard letters wired more than once, alphabetically.
    pub fn conflicting_letters(&self) -> Vec<Letter> {
        self.issues
            .iter()
            .filter_map(|issue| match issue {
                Issue::LetterReused { letter, .. } => Some(*letter),
                _ => None,
            })
            .collect()
    }

    /// Slot pairs holding the same rotor, as `(first, duplicate)`.
    pub fn conflicting_slots(&self) -> Vec<(Slot, Slot)> {
        self.issues
            .iter()
            .filter_map(|issue| match issue {
                Issue::RotorReused { first, duplicate, .. } => Some((*first, *duplicate)),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.issues.len();
        write!(
            f,
            "machine configuration rejected ({count} problem{})",
            if count == 1 { "" } else { "s" }
        )?;
        for issue in &self.issues {
            write!(f, "\n  - {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_categories() {
        let reuse =
            Issue::RotorReused { rotor: RotorKind::I, first: Slot::Left, duplicate: Slot::Right };
        let missing = Issue::MissingReflector;
        let unavailable = Issue::SlotUnavailable { slot: Slot::Greek, variant: Variant::M3 };

        assert_eq!(reuse.category(), IssueCategory::Conflict);
        assert_eq!(missing.category(), IssueCategory::Incomplete);
        assert_eq!(unavailable.category(), IssueCategory::Incompatible);
    }

    #[test]
    fn error_display() {
        let err = InputError::MalformedPair("ABC".to_string());
        assert_eq!(err.to_string(), "plugboard connection \"ABC\" must be exactly two letters");

        let issue =
            Issue::MissingSlotSetting { slot: Slot::Middle, setting: SlotSetting::RingSetting };
        assert_eq!(issue.to_string(), "the middle slot has no ring setting");
    }

    #[test]
    fn single_issue_message_is_singular() {
        let err = ValidationError::new(vec![Issue::MissingReflector]);
        assert_eq!(
            err.to_string(),
            "machine configuration rejected (1 problem)\n  - no reflector selected"
        );
        assert!(err.is_incomplete());
        assert_eq!(err.conflicts().count(), 0);
    }
}
