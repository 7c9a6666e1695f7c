//! Machine configuration from the command line.

use enigma_core::{Letter, MachineBuilder, ReflectorKind, RotorKind, Variant};

use crate::error::CliError;

/// Settings given as arguments, before validation.
///
/// Lists are leftmost first, Greek wheel first on the M4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Machine model.
    pub variant: Variant,
    /// Wheel order.
    pub rotors: Vec<RotorKind>,
    /// Start positions.
    pub positions: Vec<Letter>,
    /// Ring settings.
    pub rings: Vec<Letter>,
    /// Plugboard connections as typed, validated by the builder.
    pub plugboard: Vec<String>,
    /// Reflector.
    pub reflector: ReflectorKind,
}

impl CliConfig {
    /// Sensible starting point for `variant`: the lowest wheels in order,
    /// everything at A, no plugs and the first B-type reflector.
    pub fn for_variant(variant: Variant) -> Self {
        let (rotors, reflector) = match variant {
            Variant::EnigmaI | Variant::M3 => {
                (vec![RotorKind::I, RotorKind::II, RotorKind::III], ReflectorKind::B)
            },
            Variant::M4 => (
                vec![RotorKind::Beta, RotorKind::I, RotorKind::II, RotorKind::III],
                ReflectorKind::BThin,
            ),
        };
        let slots = variant.slots().len();
        Self {
            variant,
            rotors,
            positions: vec![Letter::A; slots],
            rings: vec![Letter::A; slots],
            plugboard: Vec::new(),
            reflector,
        }
    }

    /// Replace the wheel order, e.g. `"II IV I"` or `"beta,2,4,1"`.
    pub fn with_rotors(mut self, list: &str) -> Result<Self, CliError> {
        self.rotors = split_list(list).map(str::parse).collect::<Result<_, _>>()?;
        Ok(self)
    }

    /// Replace the start positions, e.g. `"VJNA"`.
    pub fn with_positions(mut self, letters: &str) -> Result<Self, CliError> {
        self.positions = parse_letters(letters)?;
        Ok(self)
    }

    /// Replace the ring settings, e.g. `"AAAV"`.
    pub fn with_rings(mut self, letters: &str) -> Result<Self, CliError> {
        self.rings = parse_letters(letters)?;
        Ok(self)
    }

    /// Replace the plugboard, e.g. `"AT BL DF"`.
    pub fn with_plugboard(mut self, list: &str) -> Self {
        self.plugboard = split_list(list).map(str::to_string).collect();
        self
    }

    /// Replace the reflector.
    pub fn with_reflector(mut self, reflector: ReflectorKind) -> Self {
        self.reflector = reflector;
        self
    }

    /// Fill a builder. Lists of the wrong length are rejected here; every
    /// other problem is left to the builder's validation.
    pub fn builder(&self) -> Result<MachineBuilder, CliError> {
        let slots = self.variant.slots();
        let lengths = [
            ("rotors", self.rotors.len()),
            ("positions", self.positions.len()),
            ("rings", self.rings.len()),
        ];
        for (what, len) in lengths {
            if len != slots.len() {
                return Err(CliError::Argument {
                    reason: format!("the {} takes {} {what}, got {len}", self.variant, slots.len()),
                });
            }
        }

        let mut builder = MachineBuilder::new(self.variant);
        for (i, &slot) in slots.iter().enumerate() {
            builder
                .set_rotor_at(slot, self.rotors[i])
                .set_rotor_initial_position(slot, self.positions[i])
                .set_rotor_ring_setting(slot, self.rings[i]);
        }
        for pair in &self.plugboard {
            builder.add_plugboard_connection(pair)?;
        }
        builder.set_reflector_kind(self.reflector);
        Ok(builder)
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::for_variant(Variant::EnigmaI)
    }
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(|c: char| c == ',' || c.is_whitespace()).filter(|item| !item.is_empty())
}

fn parse_letters(letters: &str) -> Result<Vec<Letter>, CliError> {
    letters
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| Letter::from_char(c).map_err(CliError::from))
        .collect()
}
