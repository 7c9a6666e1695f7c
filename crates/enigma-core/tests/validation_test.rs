//! Builder validation and settings persistence.

use enigma_core::{
    Issue, IssueCategory, Letter, MachineBuilder, MachineSettings, RotorKind, SlotSetting, Slot,
    Variant,
};

fn letter(c: char) -> Letter {
    Letter::from_char(c).unwrap()
}

fn draft(variant: Variant, rotors: &[RotorKind]) -> MachineBuilder {
    let mut builder = MachineBuilder::new(variant);
    for (&slot, &rotor) in variant.slots().iter().zip(rotors) {
        builder
            .set_rotor_at(slot, rotor)
            .set_rotor_initial_position(slot, Letter::A)
            .set_rotor_ring_setting(slot, Letter::A);
    }
    builder.set_reflector(2);
    builder
}

#[test]
fn every_conflict_reported_in_one_build() {
    let mut builder = draft(Variant::EnigmaI, &[RotorKind::I, RotorKind::I, RotorKind::I]);
    for pair in ["AB", "AC", "DE", "DF"] {
        builder.add_plugboard_connection(pair).unwrap();
    }

    let err = builder.build().unwrap_err();
    assert_eq!(err.issues().len(), 4);
    assert_eq!(err.conflicts().count(), 4);
    assert!(!err.is_incomplete());
    assert_eq!(err.conflicting_letters(), vec![letter('A'), letter('D')]);
    assert_eq!(
        err.conflicting_slots(),
        vec![(Slot::Left, Slot::Middle), (Slot::Left, Slot::Right)]
    );

    insta::assert_snapshot!(err.to_string(), @r"
    machine configuration rejected (4 problems)
      - rotor I is assigned to both the left and middle slots
      - rotor I is assigned to both the left and right slots
      - plugboard letter A is used by more than one connection: AB, AC
      - plugboard letter D is used by more than one connection: DE, DF
    ");
}

#[test]
fn incomplete_and_conflicting_are_distinguished() {
    let mut builder = MachineBuilder::new(Variant::M3);
    builder
        .set_rotor_at(Slot::Left, RotorKind::V)
        .set_rotor_at(Slot::Right, RotorKind::V)
        .set_rotor_initial_position(Slot::Left, Letter::A)
        .set_rotor_ring_setting(Slot::Left, Letter::A)
        .set_rotor_initial_position(Slot::Right, Letter::A)
        .set_rotor_ring_setting(Slot::Right, Letter::A);

    let err = builder.build().unwrap_err();
    assert!(err.is_incomplete());
    assert_eq!(err.conflicting_slots(), vec![(Slot::Left, Slot::Right)]);

    let missing: Vec<&Issue> = err.in_category(IssueCategory::Incomplete).collect();
    assert_eq!(
        missing,
        [
            &Issue::MissingSlotSetting { slot: Slot::Middle, setting: SlotSetting::Rotor },
            &Issue::MissingSlotSetting {
                slot: Slot::Middle,
                setting: SlotSetting::InitialPosition
            },
            &Issue::MissingSlotSetting { slot: Slot::Middle, setting: SlotSetting::RingSetting },
            &Issue::MissingReflector,
        ]
    );
}

#[test]
fn issues_follow_check_order() {
    let mut builder = draft(Variant::M4, &[RotorKind::Gamma, RotorKind::II, RotorKind::II]);
    builder.add_plugboard_connection("QW").unwrap();
    builder.add_plugboard_connection("WE").unwrap();
    builder.set_reflector(5);

    let err = builder.build().unwrap_err();
    let categories: Vec<IssueCategory> = err.issues().iter().map(Issue::category).collect();
    assert_eq!(
        categories,
        [
            // right slot left empty
            IssueCategory::Incomplete,
            IssueCategory::Incomplete,
            IssueCategory::Incomplete,
            IssueCategory::Conflict,
            IssueCategory::Conflict,
            IssueCategory::Incompatible,
        ]
    );
    insta::assert_snapshot!(err.to_string(), @r"
    machine configuration rejected (6 problems)
      - the right slot has no rotor
      - the right slot has no initial position
      - the right slot has no ring setting
      - rotor II is assigned to both the left and middle slots
      - plugboard letter W is used by more than one connection: QW, WE
      - reflector #5 is not available on the Enigma M4
    ");
}

#[test]
fn settings_survive_cbor() {
    let mut builder =
        draft(Variant::M4, &[RotorKind::Beta, RotorKind::VI, RotorKind::VII, RotorKind::VIII]);
    builder.set_rotor_ring_setting(Slot::Middle, letter('Q'));
    builder.add_plugboard_connection("KM").unwrap();
    builder.set_reflector(2);
    let mut machine = builder.build().unwrap();
    machine.encode_message("WETTERBERICHT");

    let settings = machine.settings();
    let mut bytes = Vec::new();
    ciborium::ser::into_writer(&settings, &mut bytes).unwrap();
    let restored: MachineSettings = ciborium::de::from_reader(&bytes[..]).unwrap();
    assert_eq!(restored, settings);

    let mut resumed = restored.builder().build().unwrap();
    assert_eq!(resumed.window(), machine.window());
    let tail = "KEINEBESONDERENEREIGNISSE";
    assert_eq!(resumed.encode_message(tail), machine.encode_message(tail));
}

#[test]
fn tampered_settings_fail_validation() {
    let machine =
        draft(Variant::M3, &[RotorKind::I, RotorKind::II, RotorKind::III]).build().unwrap();
    let mut settings = machine.settings();
    settings.variant = Variant::EnigmaI;
    settings.rotors[0].rotor = RotorKind::VIII;
    settings.reflector = enigma_core::ReflectorKind::BThin;

    let err = settings.builder().build().unwrap_err();
    assert_eq!(err.in_category(IssueCategory::Incompatible).count(), 2);
}
