//! Complete machine settings as plain data.
//!
//! [`MachineSettings`] is what a key sheet lists for one message: the model,
//! the wheel order with ring settings and start positions, the plugboard and
//! the reflector. It serializes with serde so callers can store it however
//! they like; restoring goes back through the builder and its validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    builder::MachineBuilder,
    letter::Letter,
    plugboard::PlugPair,
    reflector::ReflectorKind,
    rotor::RotorKind,
    variant::{Slot, Variant},
};

/// Settings of one wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotorSettings {
    /// Slot the wheel sits in.
    pub slot: Slot,
    /// Which wheel.
    pub rotor: RotorKind,
    /// Window letter at the start of the message.
    pub position: Letter,
    /// Ring setting.
    pub ring_setting: Letter,
}

/// Settings of a whole machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSettings {
    /// Machine model.
    pub variant: Variant,
    /// Wheels, leftmost first.
    pub rotors: Vec<RotorSettings>,
    /// Plugboard connections in entry order.
    pub plugboard: Vec<PlugPair>,
    /// Reflector.
    pub reflector: ReflectorKind,
}

impl MachineSettings {
    /// A builder holding exactly these settings.
    ///
    /// Settings are not trusted: `build()` validates them like any other
    /// draft.
    pub fn builder(&self) -> MachineBuilder {
        let mut builder = MachineBuilder::new(self.variant);
        for rotor in &self.rotors {
            builder
                .set_rotor_at(rotor.slot, rotor.rotor)
                .set_rotor_initial_position(rotor.slot, rotor.position)
                .set_rotor_ring_setting(rotor.slot, rotor.ring_setting);
        }
        for &pair in &self.plugboard {
            builder.add_plug_pair(pair);
        }
        builder.set_reflector_kind(self.reflector);
        builder
    }
}

impl fmt::Display for MachineSettings {
    /// One line in key-sheet order, e.g.
    /// `Enigma M4 Beta II IV I rings AAAV start VJNA UKW-B thin plugs AT BL`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.variant)?;
        for rotor in &self.rotors {
            write!(f, " {}", rotor.rotor)?;
        }
        let rings: String = self.rotors.iter().map(|r| r.ring_setting.to_char()).collect();
        let start: String = self.rotors.iter().map(|r| r.position.to_char()).collect();
        write!(f, " rings {rings} start {start} {}", self.reflector)?;
        if self.plugboard.is_empty() {
            f.write_str(" plugs -")
        } else {
            f.write_str(" plugs")?;
            for pair in &self.plugboard {
                write!(f, " {pair}")?;
            }
            Ok(())
        }
    }
}
