use engine::summarize;

#[test]
fn fixed_sample_summary() {
    let stats = summarize(&[3, 1, 4, 1, 5, 9, 2, 6]).unwrap();
    insta::assert_debug_snapshot!("fixed_sample_summary", stats);
}
