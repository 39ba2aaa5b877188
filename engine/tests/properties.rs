use engine::{simulate, summarize, Dice, RollSpec};
use proptest::prelude::*;

proptest! {
    #[test]
    fn outcomes_stay_within_spec_bounds(
        die_count in 1u32..=6,
        die_faces in 1u32..=20,
        per_die in -3i32..=3,
        total in -10i32..=10,
        seed: u64,
    ) {
        let spec = RollSpec {
            die_count,
            die_faces,
            per_die_modifier: per_die,
            total_modifier: total,
            trial_count: 200,
        };
        let mut dice = Dice::from_seed(seed);
        let outcomes = simulate(&mut dice, &spec).unwrap();
        prop_assert_eq!(outcomes.len(), 200);
        for &o in &outcomes {
            prop_assert!(spec.min_outcome() <= o && o <= spec.max_outcome());
        }
    }

    #[test]
    fn summary_is_consistent_with_its_sample(
        die_faces in 1u32..=12,
        seed: u64,
    ) {
        let spec = RollSpec {
            trial_count: 300,
            ..RollSpec::new(2, die_faces)
        };
        let mut dice = Dice::from_seed(seed);
        let outcomes = simulate(&mut dice, &spec).unwrap();
        let stats = summarize(&outcomes).unwrap();
        prop_assert!(stats.min as f64 <= stats.mean && stats.mean <= stats.max as f64);
        prop_assert!(stats.min as f64 <= stats.median && stats.median <= stats.max as f64);
        prop_assert!(stats.frequency.contains_key(&stats.mode));
        prop_assert_eq!(stats.frequency.values().sum::<u64>(), 300u64);
    }
}
