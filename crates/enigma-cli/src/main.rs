//! Enigma command-line binary.
//!
//! # Usage
//!
//! ```bash
//! # Encode with the defaults (Enigma I, I II III, AAA, AAA, UKW-B)
//! enigma HELLO WORLD
//!
//! # Decode the U-534 signal, five-letter groups
//! enigma --variant m4 --rotors "beta II IV I" --rings AAAV --positions VJNA \
//!     --plugboard "AT BL DF GJ HM NW OP QY RZ VX" --group 5 NCZWV USXPN YMINH
//!
//! # Ask for every setting
//! enigma --interactive
//! ```

use std::io;

use clap::Parser;
use enigma_cli::{CliConfig, LineCommunicator, run_batch, run_interactive};
use enigma_core::{ReflectorKind, Variant};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Rotor cipher machine
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(about = "Encode and decode with an Enigma I, M3 or M4")]
#[command(version)]
struct Args {
    /// Machine variant (I, M3, M4)
    #[arg(short, long, default_value = "I")]
    variant: Variant,

    /// Rotors left to right, Greek wheel first on the M4 (e.g. "II IV I")
    #[arg(short, long)]
    rotors: Option<String>,

    /// Start positions left to right (e.g. "VJNA")
    #[arg(short, long)]
    positions: Option<String>,

    /// Ring settings left to right (e.g. "AAAV")
    #[arg(long)]
    rings: Option<String>,

    /// Plugboard connections (e.g. "AT BL DF")
    #[arg(long)]
    plugboard: Option<String>,

    /// Reflector (A, B, C, "B thin", "C thin")
    #[arg(long)]
    reflector: Option<ReflectorKind>,

    /// Print output in groups of N letters (5 if N is omitted)
    #[arg(short, long, num_args = 0..=1, default_missing_value = "5")]
    group: Option<usize>,

    /// Configure the machine question by question
    #[arg(short, long)]
    interactive: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Message to encode; lines are read from standard input when omitted
    message: Vec<String>,
}

fn config(args: &Args) -> Result<CliConfig, enigma_cli::CliError> {
    let mut config = CliConfig::for_variant(args.variant);
    if let Some(rotors) = &args.rotors {
        config = config.with_rotors(rotors)?;
    }
    if let Some(positions) = &args.positions {
        config = config.with_positions(positions)?;
    }
    if let Some(rings) = &args.rings {
        config = config.with_rings(rings)?;
    }
    if let Some(plugboard) = &args.plugboard {
        config = config.with_plugboard(plugboard);
    }
    if let Some(reflector) = args.reflector {
        config = config.with_reflector(reflector);
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // Ciphertext goes to stdout; keep logs out of it.
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let mut channel = LineCommunicator::new(io::stdin().lock(), io::stdout().lock());

    if args.interactive {
        run_interactive(&mut channel, args.group)?;
        return Ok(());
    }

    let mut machine = config(&args)?.builder()?.build()?;
    let message = (!args.message.is_empty()).then(|| args.message.join(" "));
    run_batch(&mut machine, message.as_deref(), args.group, &mut channel)?;

    Ok(())
}
