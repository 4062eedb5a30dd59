use super::*;
use proptest::prelude::*;
use std::collections::HashSet;

fn d6_seed7() -> Die {
    Die::new(DieConfig::new(1, vec![1, 2, 3, 4, 5, 6], 7).unwrap())
}

#[test]
fn first_roll_hand_traced() {
    // spin = 1*7; face = (0 + 7) % 6 = 1 -> value 2
    // pulse = ((7 + 7) % 7) + 1 + 1 + 7 = 9
    let mut die = d6_seed7();
    assert_eq!(die.roll(), 2);
    assert_eq!(
        die.fingerprint(),
        Fingerprint {
            pulse: 9,
            face: 1,
            roll_number: 2
        }
    );
}

#[test]
fn roll_sequence_matches_transition() {
    let mut die = d6_seed7();
    let rolls: Vec<i64> = (0..6).map(|_| die.roll()).collect();
    assert_eq!(rolls, vec![2, 2, 2, 2, 4, 4]);
    assert_eq!(
        die.fingerprint(),
        Fingerprint {
            pulse: 14,
            face: 3,
            roll_number: 7
        }
    );
}

#[test]
fn negative_and_repeated_faces() {
    let cfg = DieConfig::new(2, vec![-1, 1, -1, 3, 7, -9], 13).unwrap();
    let mut die = Die::new(cfg);
    let rolls: Vec<i64> = (0..8).map(|_| die.roll()).collect();
    assert_eq!(rolls, vec![1, 1, 1, 1, -1, -1, -9, 3]);
}

#[test]
fn fingerprint_is_read_only() {
    let mut die = d6_seed7();
    die.roll();
    let a = die.fingerprint();
    let b = die.fingerprint();
    assert_eq!(a, b);
    assert_eq!(die.rolls_made(), 1);
}

#[test]
fn fresh_state_starts_at_seed() {
    let st = DieState::new(42);
    assert_eq!(
        st.fingerprint(),
        Fingerprint {
            pulse: 42,
            face: 0,
            roll_number: 1
        }
    );
    assert_eq!(st.rolls_made(), 0);
}

#[test]
fn rejects_degenerate_configs() {
    assert_eq!(
        DieConfig::new(3, vec![], 5),
        Err(DieError::EmptyFaces { id: 3 })
    );
    assert_eq!(
        DieConfig::new(4, vec![1], 0),
        Err(DieError::ZeroSeed { id: 4 })
    );
}

#[test]
fn large_seed_does_not_overflow() {
    let cfg = DieConfig::new(9, vec![1, 2, 3], u32::MAX).unwrap();
    let mut die = Die::new(cfg);
    for _ in 0..10_000 {
        let v = die.roll();
        assert!((1..=3).contains(&v));
    }
    assert_eq!(die.rolls_made(), 10_000);
}

proptest! {
    #[test]
    fn rolls_are_deterministic(
        faces in prop::collection::vec(-50i64..50, 1..10),
        seed in 1u32..10_000,
    ) {
        let cfg = DieConfig::new(0, faces, seed).unwrap();
        let mut a = Die::new(cfg.clone());
        let mut b = Die::new(cfg);
        for _ in 0..200 {
            prop_assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn fingerprints_pairwise_distinct(
        num_faces in 1usize..12,
        seed in 1u32..10_000,
    ) {
        let mut st = DieState::new(seed);
        let mut seen = HashSet::new();
        prop_assert!(seen.insert(st.fingerprint()));
        for _ in 0..300 {
            let idx = st.advance(seed, num_faces);
            prop_assert!(idx < num_faces);
            prop_assert!(seen.insert(st.fingerprint()));
        }
    }

    #[test]
    fn pulse_carries_offset_after_reduction(seed in 1u32..1_000) {
        let mut st = DieState::new(seed);
        for _ in 0..100 {
            let rn = st.fingerprint().roll_number;
            st.advance(seed, 6);
            let p = st.fingerprint().pulse;
            // reduced part lies in [0, seed)
            let reduced = p - 1 - rn - u64::from(seed);
            prop_assert!(reduced < u64::from(seed));
        }
    }
}
