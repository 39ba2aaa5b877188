use engine::api::{run, RunConfig};
use engine::{summarize, Dice};
use jni::objects::{JClass, JString};
use jni::sys::{jint, jlong, jstring};
use jni::JNIEnv;
use serde_json::json;

fn ok(env: &JNIEnv, value: serde_json::Value) -> jstring {
    let payload = json!({ "ok": true, "result": value });
    env.new_string(serde_json::to_string(&payload).unwrap())
        .unwrap()
        .into_raw()
}

fn err(env: &JNIEnv, e: impl std::fmt::Display) -> jstring {
    env.new_string(format!(r#"{{"ok":false,"error":"{}"}}"#, e))
        .unwrap()
        .into_raw()
}

#[no_mangle]
pub extern "system" fn Java_com_dicelab_Ffi_version<'local>(
    env: JNIEnv<'local>,
    _class: JClass<'local>,
) -> JString<'local> {
    env.new_string("dicelab-ffi 0.1.0")
        .expect("new_string failed")
}

/// Deterministic roller: one trial total of `n` dice with `sides` faces.
/// Handles edge cases: n<=0 → 0, sides<=0 → treated as 1.
#[no_mangle]
pub extern "system" fn Java_com_dicelab_Ffi_roll(
    _env: JNIEnv<'_>,
    _class: JClass<'_>,
    seed: jlong,
    n: jint,
    sides: jint,
) -> jint {
    roll_internal(seed, n, sides) as jint
}

#[no_mangle]
pub extern "system" fn Java_com_dicelab_Ffi_simulateJson(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
) -> jstring {
    let input: String = match env.get_string(&json) {
        Ok(s) => s.into(),
        Err(e) => return err(&env, e),
    };
    let cfg: RunConfig = match serde_json::from_str(&input) {
        Ok(c) => c,
        Err(e) => return err(&env, format!("invalid_config: {}", e)),
    };
    match run(cfg) {
        Ok(report) => ok(&env, serde_json::to_value(report).unwrap()),
        Err(e) => err(&env, e),
    }
}

#[no_mangle]
pub extern "system" fn Java_com_dicelab_Ffi_summarizeJson(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
) -> jstring {
    let input: String = match env.get_string(&json) {
        Ok(s) => s.into(),
        Err(e) => return err(&env, e),
    };
    let sample: Vec<i64> = match serde_json::from_str(&input) {
        Ok(v) => v,
        Err(e) => return err(&env, format!("invalid_sample: {}", e)),
    };
    match summarize(&sample) {
        Ok(stats) => ok(&env, serde_json::to_value(stats).unwrap()),
        Err(e) => err(&env, e),
    }
}

// Internal functions for testing without JNI overhead
pub fn roll_internal(seed: i64, n: i32, sides: i32) -> i64 {
    let mut dice = Dice::from_seed(seed as u64);
    let faces = sides.max(1) as u32;
    let mut total = 0i64;
    for _ in 0..n.max(0) {
        total += dice.die(faces) as i64;
    }
    total
}
