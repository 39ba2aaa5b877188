use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::content::builtin_specs;
use crate::stats::{summarize, SummaryStats};
use crate::{simulate, Dice, RollSpec, SimError};

/// How a run gets its spec and its randomness. Mirrors what an embedding UI
/// collects from its controls: inline wins over `spec_path` wins over
/// `spec_id`; no seed means fresh entropy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunConfig {
    /// Builtin spec id (see `content::builtin_specs`).
    #[serde(default)]
    pub spec_id: Option<String>,
    /// Path to a JSON or YAML spec file.
    #[serde(default)]
    pub spec_path: Option<String>,
    /// Inline spec.
    #[serde(default)]
    pub spec: Option<RollSpec>,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// The outcome sample plus its summary, ready for textual display and for
/// handing to a chart renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RollReport {
    pub spec: RollSpec,
    pub outcomes: Vec<i64>,
    pub stats: SummaryStats,
}

/// Resolve, simulate, summarize.
pub fn run(cfg: RunConfig) -> Result<RollReport> {
    let spec = resolve_spec(&cfg)?;
    let mut dice = match cfg.seed {
        Some(seed) => Dice::from_seed(seed),
        None => Dice::from_entropy(),
    };
    let report = run_spec(&mut dice, &spec)?;
    info!(
        spec = %report.spec,
        mean = report.stats.mean,
        median = report.stats.median,
        mode = report.stats.mode,
        "simulation complete"
    );
    Ok(report)
}

/// Typed core of `run`: simulate `spec` with `dice` and summarize the sample.
pub fn run_spec(dice: &mut Dice, spec: &RollSpec) -> Result<RollReport, SimError> {
    let outcomes = simulate(dice, spec)?;
    let stats = summarize(&outcomes)?;
    Ok(RollReport {
        spec: *spec,
        outcomes,
        stats,
    })
}

pub fn resolve_spec(cfg: &RunConfig) -> Result<RollSpec> {
    if let Some(spec) = cfg.spec {
        return Ok(spec);
    }
    if let Some(path) = cfg.spec_path.as_deref() {
        return load_spec(Path::new(path));
    }
    if let Some(id) = cfg.spec_id.as_deref() {
        let text = builtin_specs()
            .get(id)
            .copied()
            .with_context(|| format!("unknown builtin spec: {}", id))?;
        return serde_json::from_str(text)
            .with_context(|| format!("failed to parse builtin spec: {}", id));
    }
    bail!("no spec provided (expected spec, spec_path, or spec_id)");
}

/// Load a `RollSpec` from a JSON or YAML file, chosen by extension.
pub fn load_spec(path: &Path) -> Result<RollSpec> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read spec file: {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    parse_spec(&text, ext).with_context(|| format!("failed to parse spec file: {}", path.display()))
}

/// Parse spec text by format extension (`json`, `yaml`, `yml`).
pub fn parse_spec(text: &str, ext: &str) -> Result<RollSpec> {
    match ext.to_lowercase().as_str() {
        "json" => Ok(serde_json::from_str(text)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(text)?),
        other => bail!("unsupported spec format: {:?} (expected json or yaml)", other),
    }
}
