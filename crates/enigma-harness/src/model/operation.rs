//! Operations for model-based testing.
//!
//! Operations are generated by proptest (or `arbitrary` in the fuzzer) and
//! applied to both the model and the engine.

use arbitrary::Arbitrary;

/// Something a machine operator can do.
#[derive(Debug, Clone, Arbitrary)]
pub enum Operation {
    /// Press one key.
    Press {
        /// Key index, taken modulo 26.
        key: u8,
    },

    /// Type a run of text, letters and punctuation mixed.
    Type {
        /// Text to type.
        text: SmallText,
    },

    /// Write the settings down and set up a fresh machine from them.
    ///
    /// The model has nothing to write down and carries on unchanged, so any
    /// state lost in the round trip shows up as a divergence.
    Resume,
}

/// Compact, deterministic text.
#[derive(Debug, Clone, Arbitrary)]
pub struct SmallText {
    /// Seed the characters are derived from.
    pub seed: u8,
    /// Length, taken modulo 64.
    pub len: u8,
}

impl SmallText {
    /// Expand to the text it stands for.
    ///
    /// Roughly one character in eight is a space, digit or punctuation mark,
    /// and lowercase and uppercase letters alternate in runs.
    pub fn to_text(&self) -> String {
        const FILLER: &[u8] = b" ,.-0123456789";

        (0..self.len % 64)
            .map(|i| {
                let x = self.seed.wrapping_mul(31).wrapping_add(i.wrapping_mul(17));
                if x % 8 == 0 {
                    char::from(FILLER[(x as usize / 8) % FILLER.len()])
                } else if (x / 8) % 2 == 0 {
                    char::from(b'A' + x % 26)
                } else {
                    char::from(b'a' + x % 26)
                }
            })
            .collect()
    }
}

/// What an observer sees after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Lamp lit by a key press.
    Lamp(char),

    /// Encoded text.
    Text(String),

    /// Window letters after a resume.
    Resumed {
        /// Window letters, leftmost first.
        window: String,
    },
}
