//! Test support for the rotor cipher engine.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference machine. Operations are applied
//! to both the model and a real [`enigma_core::Machine`] and their
//! observable output is compared.
//!
//! # Generators
//!
//! The `generate` module draws valid machine settings and messages from a
//! seeded RNG, so a failing case can be replayed from its seed.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod generate;
pub mod model;

pub use generate::{random_message, random_settings, seeded_settings};
pub use model::{ModelMachine, Operation, OperationResult, SmallText};
