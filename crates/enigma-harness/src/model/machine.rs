//! Reference machine.
//!
//! Plain index arithmetic over `u8`, no validation and no shared code with
//! the engine beyond the catalog tables. Stepping is modelled the way the
//! hardware does it, with pawls: one pawl drives the rightmost wheel, and
//! one sits between each pair of stepping wheels. A pawl that drops into the
//! notch of the wheel on its right pushes both wheels. A wheel pushed by two
//! pawls still moves only once.
//!
//! Each key press composes the whole signal path into one 26-entry table and
//! looks the key up in it, so the model can also hand out the permutation of
//! a single keystroke for inspection.

use enigma_core::{Letter, MachineSettings, Slot, Wiring};

use super::operation::{Operation, OperationResult};

const N: u8 = 26;

fn table(wiring: &Wiring) -> [u8; 26] {
    let mut table = [0u8; 26];
    for letter in Letter::all() {
        table[letter.index() as usize] = wiring.apply(letter).index();
    }
    table
}

fn invert(table: &[u8; 26]) -> [u8; 26] {
    let mut inverse = [0u8; 26];
    for (i, &image) in table.iter().enumerate() {
        inverse[image as usize] = i as u8;
    }
    inverse
}

#[derive(Debug, Clone)]
struct ModelWheel {
    forward: [u8; 26],
    backward: [u8; 26],
    notches: Vec<u8>,
    ring: u8,
    position: u8,
    has_pawl: bool,
}

impl ModelWheel {
    fn offset(&self) -> u8 {
        (self.position + N - self.ring) % N
    }

    fn forward(&self, x: u8) -> u8 {
        let s = self.offset();
        (self.forward[((x + s) % N) as usize] + N - s) % N
    }

    fn backward(&self, x: u8) -> u8 {
        let s = self.offset();
        (self.backward[((x + s) % N) as usize] + N - s) % N
    }

    fn notch_engaged(&self) -> bool {
        self.notches.contains(&self.position)
    }
}

/// Reference model of one machine.
#[derive(Debug, Clone)]
pub struct ModelMachine {
    plugboard: [u8; 26],
    /// Leftmost first.
    wheels: Vec<ModelWheel>,
    reflector: [u8; 26],
}

impl ModelMachine {
    /// Model of a machine with `settings`. The settings are taken as given.
    pub fn new(settings: &MachineSettings) -> Self {
        let mut plugboard: [u8; 26] = std::array::from_fn(|i| i as u8);
        for pair in &settings.plugboard {
            let (a, b) = pair.letters();
            plugboard[a.index() as usize] = b.index();
            plugboard[b.index() as usize] = a.index();
        }

        let wheels = settings
            .rotors
            .iter()
            .map(|rotor| {
                let forward = table(rotor.rotor.wiring());
                ModelWheel {
                    backward: invert(&forward),
                    forward,
                    notches: rotor.rotor.notches().iter().map(|l| l.index()).collect(),
                    ring: rotor.ring_setting.index(),
                    position: rotor.position.index(),
                    has_pawl: rotor.slot != Slot::Greek,
                }
            })
            .collect();

        Self { plugboard, wheels, reflector: table(settings.reflector.wiring()) }
    }

    /// Window letters as indices, leftmost first.
    pub fn positions(&self) -> Vec<u8> {
        self.wheels.iter().map(|wheel| wheel.position).collect()
    }

    /// Window letters as text.
    pub fn window(&self) -> String {
        self.wheels.iter().map(|wheel| char::from(b'A' + wheel.position)).collect()
    }

    fn advance(&mut self) {
        let driven: Vec<usize> =
            (0..self.wheels.len()).filter(|&i| self.wheels[i].has_pawl).collect();
        let mut moves = vec![false; self.wheels.len()];

        if let Some(&rightmost) = driven.last() {
            moves[rightmost] = true;
        }
        for pair in driven.windows(2) {
            if self.wheels[pair[1]].notch_engaged() {
                moves[pair[0]] = true;
                moves[pair[1]] = true;
            }
        }

        for (wheel, moved) in self.wheels.iter_mut().zip(moves) {
            if moved {
                wheel.position = (wheel.position + 1) % N;
            }
        }
    }

    /// The substitution the machine performs at its current positions,
    /// without stepping.
    pub fn keystroke_permutation(&self) -> [u8; 26] {
        let mut path = self.plugboard;
        for wheel in self.wheels.iter().rev() {
            path = path.map(|x| wheel.forward(x));
        }
        path = path.map(|x| self.reflector[x as usize]);
        for wheel in &self.wheels {
            path = path.map(|x| wheel.backward(x));
        }
        path.map(|x| self.plugboard[x as usize])
    }

    /// Press key `key` (0 = A) and return the lamp index.
    pub fn press(&mut self, key: u8) -> u8 {
        self.advance();
        self.keystroke_permutation()[(key % N) as usize]
    }

    /// Encode text, folding ASCII letters to uppercase and passing everything
    /// else through without stepping.
    pub fn type_text(&mut self, text: &str) -> String {
        text.chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    let key = c.to_ascii_uppercase() as u8 - b'A';
                    char::from(b'A' + self.press(key))
                } else {
                    c
                }
            })
            .collect()
    }

    /// Apply an operation and return what an observer would see.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match op {
            Operation::Press { key } => {
                OperationResult::Lamp(char::from(b'A' + self.press(*key)))
            },
            Operation::Type { text } => OperationResult::Text(self.type_text(&text.to_text())),
            Operation::Resume => {
                // The model has no settings round trip; its state simply
                // carries on.
                OperationResult::Resumed { window: self.window() }
            },
        }
    }
}
