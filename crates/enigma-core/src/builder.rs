//! Configuration draft and validation.
//!
//! [`MachineBuilder`] accumulates choices one at a time in any order. Only
//! single malformed values are rejected on entry; everything that depends on
//! the combination of choices (reused rotors, reused plugboard letters,
//! missing values, options the variant does not offer) is checked by
//! [`MachineBuilder::build`], which reports every problem at once.
//!
//! # Validation
//!
//! Each check is a pure function over the draft returning its own issues.
//! `build` concatenates them in a fixed order:
//!
//! 1. slots, in slot order: missing values, wheels the slot cannot take,
//!    values set for slots the variant lacks
//! 2. rotor reuse
//! 3. plugboard letter reuse
//! 4. reflector

use tracing::debug;

use crate::{
    bank::RotorBank,
    error::{InputError, Issue, SlotSetting, ValidationError},
    letter::Letter,
    machine::Machine,
    plugboard::{DuplicateLetters, PlugPair, Plugboard},
    reflector::{Reflector, ReflectorKind, ReflectorSelection},
    rotor::{Rotor, RotorKind},
    variant::{Slot, Variant},
};

/// Values chosen for one slot so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SlotDraft {
    rotor: Option<RotorKind>,
    position: Option<Letter>,
    ring_setting: Option<Letter>,
}

impl SlotDraft {
    fn is_blank(self) -> bool {
        self == Self::default()
    }
}

/// Staged machine configuration.
///
/// Building borrows the draft, so the same draft can be built repeatedly;
/// each machine owns its own rotor state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineBuilder {
    variant: Variant,
    slots: [SlotDraft; Slot::COUNT],
    plugboard: Vec<PlugPair>,
    reflector: Option<ReflectorSelection>,
}

impl MachineBuilder {
    /// Empty draft for `variant`.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            slots: [SlotDraft::default(); Slot::COUNT],
            plugboard: Vec::new(),
            reflector: None,
        }
    }

    /// Variant the draft will be validated against.
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Change the machine model. Values already set are kept; those the new
    /// variant cannot use are reported by `build`.
    pub fn set_variant(&mut self, variant: Variant) -> &mut Self {
        self.variant = variant;
        self
    }

    /// Put `rotor` in `slot`.
    pub fn set_rotor_at(&mut self, slot: Slot, rotor: RotorKind) -> &mut Self {
        self.slots[slot.index()].rotor = Some(rotor);
        self
    }

    /// Put the rotor with catalog ordinal `ordinal` in `slot`.
    pub fn set_rotor_ordinal(&mut self, slot: Slot, ordinal: u8) -> Result<&mut Self, InputError> {
        let rotor = RotorKind::from_ordinal(ordinal)?;
        Ok(self.set_rotor_at(slot, rotor))
    }

    /// Window letter of `slot` at the start of the message.
    pub fn set_rotor_initial_position(&mut self, slot: Slot, position: Letter) -> &mut Self {
        self.slots[slot.index()].position = Some(position);
        self
    }

    /// Ring setting of the wheel in `slot`.
    pub fn set_rotor_ring_setting(&mut self, slot: Slot, ring_setting: Letter) -> &mut Self {
        self.slots[slot.index()].ring_setting = Some(ring_setting);
        self
    }

    /// Add a plugboard connection written as two letters, e.g. `"AV"`.
    ///
    /// Malformed text is rejected here. A letter already used by another
    /// connection is accepted and reported by `build`.
    pub fn add_plugboard_connection(&mut self, pair: &str) -> Result<&mut Self, InputError> {
        let pair = pair.parse()?;
        Ok(self.add_plug_pair(pair))
    }

    /// Add a parsed plugboard connection.
    pub fn add_plug_pair(&mut self, pair: PlugPair) -> &mut Self {
        self.plugboard.push(pair);
        self
    }

    /// Remove every plugboard connection.
    pub fn clear_plugboard(&mut self) -> &mut Self {
        self.plugboard.clear();
        self
    }

    /// Choose the reflector by its 1-based ordinal in the variant's catalog.
    pub fn set_reflector(&mut self, ordinal: u8) -> &mut Self {
        self.reflector = Some(ReflectorSelection::Ordinal(ordinal));
        self
    }

    /// Choose a specific reflector.
    pub fn set_reflector_kind(&mut self, kind: ReflectorKind) -> &mut Self {
        self.reflector = Some(ReflectorSelection::Kind(kind));
        self
    }

    /// Validate the draft and assemble a machine.
    ///
    /// Either every check passes and a machine is returned, or the error
    /// lists every issue found.
    pub fn build(&self) -> Result<Machine, ValidationError> {
        let plugboard = Plugboard::from_pairs(&self.plugboard);
        let reflector = self.reflector.and_then(|selection| resolve(self.variant, selection));

        let mut issues = check_slots(self.variant, &self.slots);
        issues.extend(check_rotor_reuse(self.variant, &self.slots));
        if let Err(duplicates) = &plugboard {
            issues.extend(check_plugboard(duplicates));
        }
        issues.extend(check_reflector(self.variant, self.reflector));

        // With no issues every slot of the variant is complete, and variant
        // slots are listed in bank order.
        let bank = RotorBank::new(self.assemble_rotors());

        match (plugboard, reflector, bank) {
            (Ok(plugboard), Some(reflector), Ok(bank)) if issues.is_empty() => {
                let machine =
                    Machine::new(self.variant, plugboard, bank, Reflector::new(reflector));
                debug!(settings = %machine.settings(), "machine assembled");
                Ok(machine)
            },
            _ => {
                debug!(variant = %self.variant, issues = issues.len(), "configuration rejected");
                Err(ValidationError::new(issues))
            },
        }
    }

    fn assemble_rotors(&self) -> Vec<(Slot, Rotor)> {
        self.variant
            .slots()
            .iter()
            .filter_map(|&slot| {
                let draft = self.slots[slot.index()];
                let rotor = Rotor::new(draft.rotor?, draft.ring_setting?, draft.position?);
                Some((slot, rotor))
            })
            .collect()
    }
}

fn resolve(variant: Variant, selection: ReflectorSelection) -> Option<ReflectorKind> {
    match selection {
        ReflectorSelection::Ordinal(ordinal) => variant.reflector(ordinal),
        ReflectorSelection::Kind(kind) => variant.reflector_ordinal(kind).map(|_| kind),
    }
}

fn check_slots(variant: Variant, slots: &[SlotDraft; Slot::COUNT]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for slot in Slot::ALL {
        let draft = slots[slot.index()];
        if !variant.has_slot(slot) {
            if !draft.is_blank() {
                issues.push(Issue::SlotUnavailable { slot, variant });
            }
            continue;
        }

        match draft.rotor {
            None => issues.push(Issue::MissingSlotSetting { slot, setting: SlotSetting::Rotor }),
            Some(rotor) if !variant.rotor_catalog(slot).contains(&rotor) => {
                issues.push(Issue::RotorUnavailable { slot, rotor, variant });
            },
            Some(_) => {},
        }
        if draft.position.is_none() {
            issues.push(Issue::MissingSlotSetting { slot, setting: SlotSetting::InitialPosition });
        }
        if draft.ring_setting.is_none() {
            issues.push(Issue::MissingSlotSetting { slot, setting: SlotSetting::RingSetting });
        }
    }
    issues
}

fn check_rotor_reuse(variant: Variant, slots: &[SlotDraft; Slot::COUNT]) -> Vec<Issue> {
    let assigned: Vec<(Slot, RotorKind)> = variant
        .slots()
        .iter()
        .filter_map(|&slot| slots[slot.index()].rotor.map(|rotor| (slot, rotor)))
        .collect();

    assigned
        .iter()
        .enumerate()
        .filter_map(|(i, &(duplicate, rotor))| {
            assigned[..i]
                .iter()
                .find(|&&(_, earlier)| earlier == rotor)
                .map(|&(first, _)| Issue::RotorReused { rotor, first, duplicate })
        })
        .collect()
}

fn check_plugboard(duplicates: &DuplicateLetters) -> Vec<Issue> {
    duplicates
        .conflicts
        .iter()
        .map(|conflict| Issue::LetterReused {
            letter: conflict.letter,
            pairs: conflict.pairs.clone(),
        })
        .collect()
}

fn check_reflector(variant: Variant, selection: Option<ReflectorSelection>) -> Vec<Issue> {
    match selection {
        None => vec![Issue::MissingReflector],
        Some(selection) if resolve(variant, selection).is_none() => {
            vec![Issue::ReflectorUnavailable { selection, variant }]
        },
        Some(_) => Vec::new(),
    }
}
