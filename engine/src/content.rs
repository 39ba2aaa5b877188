use std::collections::HashMap;

pub fn builtin_specs() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("three_d_six", include_str!("../content/specs/three_d_six.json")),
        ("fireball", include_str!("../content/specs/fireball.json")),
        ("smoke", include_str!("../content/specs/smoke.json")),
    ])
}
