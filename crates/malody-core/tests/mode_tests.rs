//! Tests for mode bit values
//!
//! Bits combine by OR and decode back to the same set of modes.

use std::collections::BTreeSet;

use malody_core::{Mode, ModeRef};
use strum::IntoEnumIterator;

fn all_modes() -> Vec<Mode> {
    Mode::iter().collect()
}

#[test]
fn test_every_mode_has_a_bit() {
    for mode in Mode::iter() {
        assert_eq!(Mode::bit_for(mode.name()), Some(1 << mode.id()));
        assert_eq!(Mode::bit_for(mode.id()), Some(1 << mode.id()));
    }
}

#[test]
fn test_round_trip_singletons() {
    for mode in Mode::iter() {
        let bits = Mode::combined_bits([mode.name()]).unwrap();
        assert_eq!(Mode::modes_from_bits(bits), vec![mode]);
    }
}

#[test]
fn test_round_trip_all_modes() {
    let names: Vec<&str> = Mode::iter().map(|m| m.name()).collect();
    let bits = Mode::combined_bits(names).unwrap();
    assert_eq!(Mode::modes_from_bits(bits), all_modes());
}

#[test]
fn test_round_trip_subsets() {
    // every subset of the seven modes
    let modes = all_modes();
    for mask in 1u32..(1 << modes.len()) {
        let subset: BTreeSet<Mode> = modes
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, m)| *m)
            .collect();

        // alternate names and IDs so both spellings are exercised
        let refs: Vec<ModeRef> = subset
            .iter()
            .enumerate()
            .map(|(i, m)| {
                if i % 2 == 0 {
                    ModeRef::Name(m.name())
                } else {
                    ModeRef::Id(m.id())
                }
            })
            .collect();

        let bits = Mode::combined_bits(refs).unwrap();
        let decoded: BTreeSet<Mode> = Mode::modes_from_bits(bits).into_iter().collect();
        assert_eq!(decoded, subset);
    }
}

#[test]
fn test_combined_bits_sum() {
    let value = Mode::combined_bits(["Key", "Pad", "Live"]).unwrap();
    assert_eq!(value, 1 + (1 << 4) + (1 << 8));
}

#[test]
fn test_undefined_inputs() {
    assert_eq!(Mode::combined_bits(Vec::<&str>::new()), None);
    assert_eq!(Mode::bit_for("Drums"), None);
    assert_eq!(Mode::bit_for(2i64), None);
}

#[test]
fn test_all_bits_set_decodes_every_mode() {
    assert_eq!(Mode::modes_from_bits(u32::MAX), all_modes());
}
