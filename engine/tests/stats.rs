use engine::{summarize, SimError};

#[test]
fn identical_values_collapse_to_that_value() {
    let stats = summarize(&[7, 7, 7, 7]).unwrap();
    assert_eq!(stats.mean, 7.0);
    assert_eq!(stats.median, 7.0);
    assert_eq!(stats.mode, 7);
    assert_eq!(stats.min, 7);
    assert_eq!(stats.max, 7);
    assert_eq!(stats.frequency.len(), 1);
    assert_eq!(stats.frequency[&7], 4);
}

#[test]
fn empty_sample_is_rejected() {
    assert_eq!(summarize(&[]), Err(SimError::EmptySample));
}

#[test]
fn median_averages_the_two_middle_values() {
    assert_eq!(summarize(&[4, 1, 3, 2]).unwrap().median, 2.5);
    assert_eq!(summarize(&[3, 1, 2]).unwrap().median, 2.0);
}

#[test]
fn mean_is_fractional_when_it_should_be() {
    assert_eq!(summarize(&[1, 2]).unwrap().mean, 1.5);
}

#[test]
fn mode_ties_break_to_the_smallest_value() {
    // 5 and 9 both occur twice; the smaller wins regardless of arrival order
    assert_eq!(summarize(&[9, 9, 5, 5, 1]).unwrap().mode, 5);
    assert_eq!(summarize(&[5, 5, 9, 9, 1]).unwrap().mode, 5);
}

#[test]
fn frequency_keys_keep_first_seen_order() {
    let stats = summarize(&[3, 1, 3, 2]).unwrap();
    let keys: Vec<i64> = stats.frequency.keys().copied().collect();
    assert_eq!(keys, vec![3, 1, 2]);
    assert_eq!(stats.frequency[&3], 2);
}

#[test]
fn summarize_is_idempotent() {
    let sample = [2, 4, 4, 6, 8];
    assert_eq!(summarize(&sample).unwrap(), summarize(&sample).unwrap());
}

#[test]
fn negative_outcomes_are_handled() {
    let stats = summarize(&[-3, -1, -1, 0]).unwrap();
    assert_eq!(stats.mean, -1.25);
    assert_eq!(stats.median, -1.0);
    assert_eq!(stats.mode, -1);
    assert_eq!(stats.min, -3);
    assert_eq!(stats.max, 0);
}
