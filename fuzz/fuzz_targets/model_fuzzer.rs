//! Fuzz target comparing the engine against the reference model
//!
//! # Strategy
//!
//! - Settings: drawn from a seed
//! - Operations: arbitrary sequences of key presses, typed text and resumes
//!
//! # Invariants
//!
//! - Every lamp, every encoded text and every window matches the model
//! - Resuming from a settings snapshot loses no state

#![no_main]

use arbitrary::Arbitrary;
use enigma_core::Letter;
use enigma_harness::{ModelMachine, Operation, OperationResult, seeded_settings};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    seed: u64,
    ops: Vec<Operation>,
}

fuzz_target!(|input: FuzzInput| {
    let settings = seeded_settings(input.seed);
    let mut model = ModelMachine::new(&settings);
    let mut machine = settings.builder().build().unwrap();

    for op in input.ops.iter().take(256) {
        let expected = model.apply(op);
        let actual = match op {
            Operation::Press { key } => {
                let letter = Letter::from_index(key % 26).unwrap();
                OperationResult::Lamp(machine.encode(letter).to_char())
            },
            Operation::Type { text } => {
                OperationResult::Text(machine.encode_message(&text.to_text()))
            },
            Operation::Resume => {
                machine = machine.settings().builder().build().unwrap();
                OperationResult::Resumed { window: machine.window() }
            },
        };
        assert_eq!(expected, actual, "divergence on {op:?} with {settings}");
    }
});
