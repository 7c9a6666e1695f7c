//! Regression tests against historical traffic and documented mechanics.

use enigma_core::{Letter, Machine, MachineBuilder, RotorKind, Slot, Variant};

fn letter(c: char) -> Letter {
    Letter::from_char(c).unwrap()
}

struct Wheel {
    slot: Slot,
    rotor: RotorKind,
    ring: char,
    start: char,
}

fn machine(variant: Variant, wheels: &[Wheel], plugs: &[&str], reflector: u8) -> Machine {
    let mut builder = MachineBuilder::new(variant);
    for wheel in wheels {
        builder
            .set_rotor_at(wheel.slot, wheel.rotor)
            .set_rotor_ring_setting(wheel.slot, letter(wheel.ring))
            .set_rotor_initial_position(wheel.slot, letter(wheel.start));
    }
    for plug in plugs {
        builder.add_plugboard_connection(plug).unwrap();
    }
    builder.set_reflector(reflector);
    builder.build().unwrap()
}

/// U-534 signal, M4 with Beta II IV I, thin UKW-B, rings AAAV, start VJNA.
fn u534() -> Machine {
    machine(
        Variant::M4,
        &[
            Wheel { slot: Slot::Greek, rotor: RotorKind::Beta, ring: 'A', start: 'V' },
            Wheel { slot: Slot::Left, rotor: RotorKind::II, ring: 'A', start: 'J' },
            Wheel { slot: Slot::Middle, rotor: RotorKind::IV, ring: 'A', start: 'N' },
            Wheel { slot: Slot::Right, rotor: RotorKind::I, ring: 'V', start: 'A' },
        ],
        &["AT", "BL", "DF", "GJ", "HM", "NW", "OP", "QY", "RZ", "VX"],
        1,
    )
}

const U534_CIPHER: &str = concat!(
    "NCZWVUSXPNYMINHZXMQXSFWXWLKJAHSHNMCOCCAKUQPMKCSMHKSEINJUSBLK",
    "IOSXCKUBHMLLXCSJUSRRDVKOHULXWCCBGVLIYXEOAHXRHKKFVDREWEZLXOBA",
    "FGYUJQUKGRTVUKAMEURBVEKSUHHVOYHABCJWMAKLFKLMYFVNRIZRVVRTKOFD",
    "ANJMOLBGFFLEOPRGTFLVRHOWOPBEKVWMUQFMPWPARMFHAGKXIIBG",
);

const U534_PLAIN: &str = concat!(
    "VONVONJLOOKSJHFFTTTEINSEINSDREIZWOYYQNNSNEUNINHALTXXBEIANGRI",
    "FFUNTERWASSERGEDRUECKTYWABOSXLETZTERGEGNERSTANDNULACHTDREINU",
    "LUHRMARQUANTONJOTANEUNACHTSEYHSDREIYZWOZWONULGRADYACHTSMYSTO",
    "SSENACHXEKNSVIERMBFAELLTYNNNNNNOOOVIERYSICHTEINSNULL",
);

#[test]
fn m4_message_decrypts() {
    let mut receiver = u534();
    assert_eq!(receiver.encode_message(U534_CIPHER), U534_PLAIN);
}

#[test]
fn m4_message_encrypts() {
    let mut sender = u534();
    assert_eq!(sender.encode_message(U534_PLAIN), U534_CIPHER);
}

#[test]
fn m4_middle_wheel_turns_over_after_q() {
    let mut receiver = u534();
    let mut windows = Vec::new();
    for c in U534_CIPHER.chars().take(17) {
        receiver.encode_char(c);
        windows.push(receiver.window());
    }
    assert_eq!(windows.first().map(String::as_str), Some("VJNB"));
    assert_eq!(windows[15], "VJNQ");
    assert_eq!(windows[16], "VJOR");
}

fn army(start: &str) -> Machine {
    let order = [
        (Slot::Left, RotorKind::I),
        (Slot::Middle, RotorKind::II),
        (Slot::Right, RotorKind::III),
    ];
    let wheels: Vec<Wheel> = order
        .into_iter()
        .zip(start.chars())
        .map(|((slot, rotor), start)| Wheel { slot, rotor, ring: 'A', start })
        .collect();
    machine(Variant::EnigmaI, &wheels, &[], 2)
}

#[test]
fn double_step_sequence() {
    let mut machine = army("ADU");
    let windows: Vec<String> = "AAAAA"
        .chars()
        .map(|c| {
            machine.encode_char(c);
            machine.window()
        })
        .collect();

    // Left wheel moves on the third press and the middle wheel moves on both
    // the second and third.
    assert_eq!(windows, ["ADV", "AEW", "BFX", "BFY", "BFZ"]);
}

#[test]
fn double_step_ciphertext() {
    let mut machine = army("ADU");
    assert_eq!(machine.encode_message("HELLO"), "ICZXT");
}

#[test]
fn beta_with_thin_b_matches_ukw_b() {
    // Beta at A with ring A in front of thin UKW-B wires up exactly as UKW-B,
    // which is what let the M4 talk to three-wheel machines.
    let plugs = ["AB", "CD"];
    let mut m3 = machine(
        Variant::M3,
        &[
            Wheel { slot: Slot::Left, rotor: RotorKind::I, ring: 'C', start: 'X' },
            Wheel { slot: Slot::Middle, rotor: RotorKind::II, ring: 'D', start: 'Y' },
            Wheel { slot: Slot::Right, rotor: RotorKind::III, ring: 'E', start: 'Z' },
        ],
        &plugs,
        1,
    );
    let mut m4 = machine(
        Variant::M4,
        &[
            Wheel { slot: Slot::Greek, rotor: RotorKind::Beta, ring: 'A', start: 'A' },
            Wheel { slot: Slot::Left, rotor: RotorKind::I, ring: 'C', start: 'X' },
            Wheel { slot: Slot::Middle, rotor: RotorKind::II, ring: 'D', start: 'Y' },
            Wheel { slot: Slot::Right, rotor: RotorKind::III, ring: 'E', start: 'Z' },
        ],
        &plugs,
        1,
    );

    let text: String = Letter::all().map(Letter::to_char).cycle().take(300).collect();
    assert_eq!(m3.encode_message(&text), m4.encode_message(&text));
}
