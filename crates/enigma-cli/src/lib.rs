//! Command-line front end for the rotor cipher engine.
//!
//! Two modes share one [`Communicator`]:
//!
//! - batch: a machine from [`CliConfig`] encodes the message given on the
//!   command line, or every line read from input, carrying rotor state from
//!   one line to the next
//! - interactive: a [`Session`] asks for the configuration question by
//!   question, then encodes what is typed

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod communicator;
pub mod config;
pub mod error;
pub mod session;

use enigma_core::Machine;
use tracing::info;

pub use communicator::{Communicator, LineCommunicator};
pub use config::CliConfig;
pub use error::CliError;
pub use session::Session;

/// Split `text` into space-separated groups of `size` characters, ignoring
/// existing whitespace. `None` or `Some(0)` leaves the text as it is.
pub fn format_groups(text: &str, size: Option<usize>) -> String {
    let Some(size) = size.filter(|&size| size > 0) else {
        return text.to_string();
    };
    let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    chars.chunks(size).map(|group| group.iter().collect::<String>()).collect::<Vec<_>>().join(" ")
}

/// Encode `message`, or every input line if there is none, on one machine.
pub fn run_batch<C: Communicator>(
    machine: &mut Machine,
    message: Option<&str>,
    group: Option<usize>,
    io: &mut C,
) -> Result<(), CliError> {
    info!(settings = %machine.settings(), "batch start");

    if let Some(message) = message {
        io.send(&format_groups(&machine.encode_message(message), group))?;
    } else {
        loop {
            match io.next_line() {
                Ok(line) => io.send(&format_groups(&machine.encode_message(&line), group))?,
                Err(CliError::Closed) => break,
                Err(err) => return Err(err),
            }
        }
    }

    info!(window = %machine.window(), "batch done");
    Ok(())
}

/// Run the interactive dialogue.
pub fn run_interactive<C: Communicator>(io: &mut C, group: Option<usize>) -> Result<(), CliError> {
    Session::new(io, group).run()
}
