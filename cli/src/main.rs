use clap::{Parser, Subcommand};
use encoding_rs::Encoding;
use engine::api::{self, RollReport, RunConfig};
use engine::{roll_trial, Dice, RollSpec};
use std::{fs, path::PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Subcommand)]
enum Cmd {
    /// Roll a spec a few times, printing each trial total
    Roll {
        /// Roll spec (NdF, e.g. 3d6)
        #[arg(long)]
        spec: String,
        /// Modifier added to each individual die
        #[arg(long, default_value_t = 0)]
        each: i32,
        /// Modifier added once to the trial total
        #[arg(long, default_value_t = 0)]
        total: i32,
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Number of rolls
        #[arg(long, default_value_t = 5)]
        rolls: u32,
    },
    /// Monte Carlo run: simulate many trials and report the distribution
    Simulate {
        /// Roll spec (NdF, e.g. 3d6)
        #[arg(long)]
        spec: String,
        /// Modifier added to each individual die
        #[arg(long, default_value_t = 0)]
        each: i32,
        /// Modifier added once to the trial total
        #[arg(long, default_value_t = 0)]
        total: i32,
        /// Number of trials
        #[arg(long, default_value_t = 1_000_000)]
        trials: u32,
        /// RNG seed (omit for fresh entropy)
        #[arg(long)]
        seed: Option<u64>,
        /// Emit the summary as JSON instead of the text block
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Serialize a builtin spec to JSON (stdout)
    SpecDump {
        /// Builtin spec id
        #[arg(long, default_value = "smoke")]
        id: String,
        /// Pretty-print JSON
        #[arg(long, default_value_t = true)]
        pretty: bool,
    },
    /// Load a spec from a JSON/YAML file and simulate it
    SpecLoad {
        /// Path to the spec file
        #[arg(long)]
        file: PathBuf,
        /// RNG seed (omit for fresh entropy)
        #[arg(long)]
        seed: Option<u64>,
        /// Override the file's trial count
        #[arg(long)]
        trials: Option<u32>,
        /// Emit the summary as JSON instead of the text block
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Scripted smoke run over the builtin smoke spec
    Demo {
        /// Override the smoke spec's trial count
        #[arg(long)]
        trials: Option<u32>,
        /// RNG seed (omit for fresh entropy)
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Parser)]
#[command(name = "dicelab-cli")]
#[command(about = "Dicelab CLI harness")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

fn parse_roll(s: &str) -> anyhow::Result<(u32, u32)> {
    let lowered = s.to_lowercase();
    let parts: Vec<_> = lowered.split('d').collect();
    if parts.len() != 2 {
        anyhow::bail!("invalid roll spec (expected NdF), got: {}", s);
    }
    let count: u32 = parts[0].parse()?;
    let faces: u32 = parts[1].parse()?;
    Ok((count, faces))
}

// Range checks stay in the engine so InvalidParameter surfaces uniformly.
fn build_spec(roll: &str, each: i32, total: i32, trials: u32) -> anyhow::Result<RollSpec> {
    let (die_count, die_faces) = parse_roll(roll)?;
    Ok(RollSpec {
        die_count,
        die_faces,
        per_die_modifier: each,
        total_modifier: total,
        trial_count: trials,
    })
}

fn read_text_auto(path: &std::path::Path) -> anyhow::Result<String> {
    let bytes = fs::read(path)?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        Ok(String::from_utf8(bytes)?)
    }
}

fn print_report(report: &RollReport, seed: Option<u64>) {
    let stats = &report.stats;
    println!("dicelab results");
    println!("---------------");
    println!("spec:               {}", report.spec);
    println!("trials:             {}", report.spec.trial_count);
    match seed {
        Some(s) => println!("seed:               {}", s),
        None => println!("seed:               (entropy)"),
    }
    println!();
    println!("mean:               {:.2}", stats.mean);
    println!("median:             {:.2}", stats.median);
    println!("mode:               {}", stats.mode);
    println!("range:              {}..={}", stats.min, stats.max);
    println!("distinct outcomes:  {}", stats.frequency.len());
}

fn simulate_and_print(spec: RollSpec, seed: Option<u64>, json: bool) -> anyhow::Result<()> {
    let report = api::run(RunConfig {
        spec: Some(spec),
        seed,
        ..Default::default()
    })?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report.stats)?);
    } else {
        print_report(&report, seed);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Roll {
            spec,
            each,
            total,
            seed,
            rolls,
        } => {
            let spec = build_spec(&spec, each, total, 1)?;
            let mut dice = Dice::from_seed(seed);
            for _ in 0..rolls {
                println!("{}", roll_trial(&mut dice, &spec)?);
            }
        }
        Cmd::Simulate {
            spec,
            each,
            total,
            trials,
            seed,
            json,
        } => {
            let spec = build_spec(&spec, each, total, trials)?;
            simulate_and_print(spec, seed, json)?;
        }
        Cmd::SpecDump { id, pretty } => {
            let specs = engine::content::builtin_specs();
            let text = specs
                .get(id.as_str())
                .copied()
                .ok_or_else(|| anyhow::anyhow!("unknown builtin spec '{}'", id))?;
            let spec: RollSpec = serde_json::from_str(text)?;
            if pretty {
                println!("{}", serde_json::to_string_pretty(&spec)?);
            } else {
                println!("{}", serde_json::to_string(&spec)?);
            }
        }
        Cmd::SpecLoad {
            file,
            seed,
            trials,
            json,
        } => {
            let text = read_text_auto(&file)?;
            let ext = file.extension().and_then(|e| e.to_str()).unwrap_or_default();
            let mut spec = api::parse_spec(&text, ext)?;
            if let Some(t) = trials {
                spec.trial_count = t;
            }
            simulate_and_print(spec, seed, json)?;
        }
        Cmd::Demo { trials, seed } => {
            // Explicit stand-in for an auto-triggered debug run: fixed smoke
            // parameters through the real pipeline, invoked only on request.
            let mut spec = api::resolve_spec(&RunConfig {
                spec_id: Some("smoke".into()),
                ..Default::default()
            })?;
            if let Some(t) = trials {
                spec.trial_count = t;
            }
            simulate_and_print(spec, seed, false)?;
        }
    }
    Ok(())
}
