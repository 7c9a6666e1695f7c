//! Rotor cipher machine engine.
//!
//! Sans-IO model of the Enigma family (Enigma I, M3, M4): the letter
//! permutations, the stepping mechanism with its double step, and a
//! validating builder that turns discrete configuration choices into a
//! machine. There is no I/O here; callers feed letters and read letters.
//!
//! # Architecture
//!
//! ```text
//! MachineBuilder ──build()──> Machine
//!   (draft, every issue       │
//!    reported at once)        │  key press
//!                             v
//!   Plugboard -> RotorBank (right to left) -> Reflector
//!       ^                                         │
//!       └──── Plugboard <- RotorBank (left to right) <┘
//! ```
//!
//! The rotor bank steps before the signal passes through it, deciding every
//! wheel's movement from the positions showing before the key press.
//!
//! # Example
//!
//! ```
//! use enigma_core::{Letter, MachineBuilder, RotorKind, Slot, Variant};
//!
//! let mut builder = MachineBuilder::new(Variant::EnigmaI);
//! let wheels = [
//!     (Slot::Left, RotorKind::I),
//!     (Slot::Middle, RotorKind::II),
//!     (Slot::Right, RotorKind::III),
//! ];
//! for (slot, rotor) in wheels {
//!     builder
//!         .set_rotor_at(slot, rotor)
//!         .set_rotor_initial_position(slot, Letter::A)
//!         .set_rotor_ring_setting(slot, Letter::A);
//! }
//! builder.set_reflector(2);
//!
//! let mut sender = builder.build()?;
//! let mut receiver = builder.build()?;
//! let cipher = sender.encode_message("Hello, world");
//! assert_eq!(receiver.encode_message(&cipher), "HELLO, WORLD");
//! # Ok::<(), enigma_core::ValidationError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bank;
pub mod builder;
pub mod error;
pub mod letter;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod settings;
pub mod variant;
pub mod wiring;

pub use bank::{BankError, RotorBank};
pub use builder::MachineBuilder;
pub use error::{InputError, Issue, IssueCategory, SlotSetting, ValidationError};
pub use letter::{ALPHABET_LEN, Letter};
pub use machine::Machine;
pub use plugboard::{DuplicateLetters, LetterConflict, PlugPair, Plugboard, PlugboardError};
pub use reflector::{Reflector, ReflectorKind, ReflectorSelection};
pub use rotor::{Rotor, RotorKind};
pub use settings::{MachineSettings, RotorSettings};
pub use variant::{Slot, Variant};
pub use wiring::{Wiring, WiringError};
