//! Interactive configuration dialogue.
//!
//! Asks for the variant, then per slot the rotor, start position and ring
//! setting, then the plugboard and the reflector. A malformed answer is
//! reported and the question asked again. If the finished draft fails
//! validation, every problem is listed and the dialogue starts over. Once a
//! machine exists, each line typed is encoded until a blank line or end of
//! input.

use enigma_core::{Letter, Machine, MachineBuilder, PlugPair, Slot, Variant};
use tracing::{debug, info, warn};

use crate::{communicator::Communicator, error::CliError, format_groups};

/// One interactive run over a [`Communicator`].
pub struct Session<'a, C> {
    io: &'a mut C,
    group: Option<usize>,
}

impl<'a, C: Communicator> Session<'a, C> {
    /// Session over `io`; output is grouped when `group` is set.
    pub fn new(io: &'a mut C, group: Option<usize>) -> Self {
        Self { io, group }
    }

    /// Configure a machine, then encode lines until the user stops.
    pub fn run(&mut self) -> Result<(), CliError> {
        let mut machine = self.configure()?;
        self.io.send(&format!("Machine ready: {}", machine.settings()))?;
        self.io.send("Type text to encode; a blank line ends the session.")?;

        loop {
            let line = match self.io.next_line() {
                Ok(line) if line.trim().is_empty() => break,
                Ok(line) => line,
                Err(CliError::Closed) => break,
                Err(err) => return Err(err),
            };
            let output = machine.encode_message(&line);
            self.io.send(&format_groups(&output, self.group))?;
        }

        info!(window = %machine.window(), "session finished");
        Ok(())
    }

    /// Repeat the dialogue until it yields a valid machine.
    pub fn configure(&mut self) -> Result<Machine, CliError> {
        loop {
            let draft = self.draft()?;
            match draft.build() {
                Ok(machine) => return Ok(machine),
                Err(err) => {
                    warn!(problems = err.issues().len(), "configuration rejected, starting over");
                    for line in err.to_string().lines() {
                        self.io.send(line)?;
                    }
                    self.io.send("Let's start again.")?;
                },
            }
        }
    }

    fn draft(&mut self) -> Result<MachineBuilder, CliError> {
        let variant = self.ask_variant()?;
        let mut builder = MachineBuilder::new(variant);

        for &slot in variant.slots() {
            self.ask_rotor(&mut builder, variant, slot)?;
            let position =
                self.ask_letter(&format!("Start position of the {slot} rotor (A-Z):"))?;
            let ring = self.ask_letter(&format!("Ring setting of the {slot} rotor (A-Z):"))?;
            builder.set_rotor_initial_position(slot, position).set_rotor_ring_setting(slot, ring);
        }

        for pair in self.ask_plugboard()? {
            builder.add_plug_pair(pair);
        }

        self.io.send("Reflector:")?;
        for (i, kind) in variant.reflector_catalog().iter().enumerate() {
            self.io.send(&format!("  {}) {kind}", i + 1))?;
        }
        let ordinal = self.ask_number()?;
        builder.set_reflector(ordinal);

        debug!(%variant, "dialogue complete");
        Ok(builder)
    }

    fn ask_variant(&mut self) -> Result<Variant, CliError> {
        self.io.send("Machine variant:")?;
        for variant in Variant::ALL {
            self.io.send(&format!("  {}) {variant}", variant.ordinal()))?;
        }
        loop {
            let answer = self.ask_number()?;
            match Variant::from_ordinal(answer) {
                Ok(variant) => return Ok(variant),
                Err(err) => self.io.send(&format!("{err}, try again."))?,
            }
        }
    }

    fn ask_rotor(
        &mut self,
        builder: &mut MachineBuilder,
        variant: Variant,
        slot: Slot,
    ) -> Result<(), CliError> {
        self.io.send(&format!("Rotor for the {slot} slot:"))?;
        for kind in variant.rotor_catalog(slot) {
            self.io.send(&format!("  {}) {kind}", kind.ordinal()))?;
        }
        loop {
            let answer = self.ask_number()?;
            match builder.set_rotor_ordinal(slot, answer) {
                Ok(_) => return Ok(()),
                Err(err) => self.io.send(&format!("{err}, try again."))?,
            }
        }
    }

    fn ask_letter(&mut self, prompt: &str) -> Result<Letter, CliError> {
        self.io.send(prompt)?;
        loop {
            let line = self.io.next_line()?;
            let mut chars = line.trim().chars();
            match (chars.next().map(Letter::from_char), chars.next()) {
                (Some(Ok(letter)), None) => return Ok(letter),
                _ => self.io.send("Please enter a single letter A-Z.")?,
            }
        }
    }

    fn ask_plugboard(&mut self) -> Result<Vec<PlugPair>, CliError> {
        self.io.send("Plugboard connections, e.g. AT BL DF (blank for none):")?;
        loop {
            let line = self.io.next_line()?;
            let pairs: Result<Vec<PlugPair>, _> = line.split_whitespace().map(str::parse).collect();
            match pairs {
                Ok(pairs) => return Ok(pairs),
                Err(err) => self.io.send(&format!("{err}, enter all connections again."))?,
            }
        }
    }

    /// Small positive integer, re-asked until one is given.
    fn ask_number(&mut self) -> Result<u8, CliError> {
        loop {
            match self.io.next_int() {
                Ok(n) => match u8::try_from(n) {
                    Ok(n) => return Ok(n),
                    Err(_) => self.io.send(&format!("{n} is out of range, try again."))?,
                },
                Err(err) if err.is_retryable() => self.io.send(&format!("{err}, try again."))?,
                Err(err) => return Err(err),
            }
        }
    }
}
