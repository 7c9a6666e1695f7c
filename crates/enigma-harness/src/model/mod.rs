//! Reference model for model-based testing.
//!
//! The model is a second, deliberately naive rendition of the machine: flat
//! lookup tables, pawl-based stepping and no validation. It is the oracle the
//! engine is checked against.
//!
//! # Design Principles
//!
//! - Simplicity: the model should be obviously correct
//! - Independence: stepping and the signal path share no code with the engine
//! - Deterministic: same settings and operations produce same output

mod machine;
pub mod operation;

pub use machine::ModelMachine;
pub use operation::{Operation, OperationResult, SmallText};
