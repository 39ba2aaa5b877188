use std::path::Path;

use engine::api::{load_spec, resolve_spec, run, RunConfig};
use engine::content::builtin_specs;
use engine::RollSpec;

#[test]
fn builtin_specs_parse_and_validate() {
    for (id, text) in builtin_specs() {
        let spec: RollSpec =
            serde_json::from_str(text).unwrap_or_else(|e| panic!("{}: {}", id, e));
        spec.validate().unwrap();
    }
}

#[test]
fn inline_spec_wins_over_builtin_id() {
    let inline = RollSpec {
        trial_count: 50,
        ..RollSpec::new(2, 8)
    };
    let cfg = RunConfig {
        spec_id: Some("fireball".into()),
        spec: Some(inline),
        ..Default::default()
    };
    assert_eq!(resolve_spec(&cfg).unwrap(), inline);
}

#[test]
fn run_with_builtin_smoke_spec() {
    let cfg = RunConfig {
        spec_id: Some("smoke".into()),
        seed: Some(7),
        ..Default::default()
    };
    let report = run(cfg).unwrap();
    assert_eq!(report.outcomes.len(), report.spec.trial_count as usize);
    assert_eq!(report.stats.samples, report.outcomes.len());
    // smoke is 4d4, +1 per die, +2 on the total
    assert!(report.outcomes.iter().all(|&o| (10..=22).contains(&o)));
}

#[test]
fn spec_loads_from_engine_content_json() {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    let spec = load_spec(&manifest.join("content/specs/three_d_six.json")).unwrap();
    assert_eq!(spec.die_count, 3);
    assert_eq!(spec.die_faces, 6);
}

#[test]
fn spec_loads_from_yaml() {
    let path = std::env::temp_dir().join("dicelab_spec_test.yaml");
    std::fs::write(&path, "die_count: 2\ndie_faces: 10\ntotal_modifier: -1\n").unwrap();
    let spec = load_spec(&path).unwrap();
    assert_eq!(spec.die_count, 2);
    assert_eq!(spec.die_faces, 10);
    assert_eq!(spec.total_modifier, -1);
    assert_eq!(spec.trial_count, 1_000_000);
    std::fs::remove_file(&path).ok();
}

#[test]
fn unknown_builtin_id_is_an_error() {
    let cfg = RunConfig {
        spec_id: Some("nope".into()),
        ..Default::default()
    };
    assert!(resolve_spec(&cfg).is_err());
}

#[test]
fn empty_config_is_an_error() {
    assert!(resolve_spec(&RunConfig::default()).is_err());
}
