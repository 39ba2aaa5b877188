use clap::Parser;
use engine::api::{self, RunConfig};
use engine::RollSpec;

#[derive(Parser)]
#[command(name = "histogram")]
#[command(about = "Monte Carlo roll: render the outcome distribution as a bar chart")]
struct Args {
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
    #[arg(long, default_value_t = 100_000)]
    trials: u32,

    /// RNG seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Maximum bar width in characters
    #[arg(long, default_value_t = 60)]
    width: usize,
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

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (die_count, die_faces) = parse_roll(&args.spec)?;
    let spec = RollSpec {
        die_count,
        die_faces,
        per_die_modifier: args.each,
        total_modifier: args.total,
        trial_count: args.trials,
    };
    let report = api::run(RunConfig {
        spec: Some(spec),
        seed: Some(args.seed),
        ..Default::default()
    })?;
    let stats = &report.stats;

    let mut rows: Vec<(i64, u64)> = stats.frequency.iter().map(|(&v, &c)| (v, c)).collect();
    rows.sort_unstable_by_key(|&(v, _)| v);
    let peak = rows.iter().map(|&(_, c)| c).max().unwrap_or(1);

    println!(
        "{} over {} trials (seed {})",
        report.spec, args.trials, args.seed
    );
    println!();
    for (value, count) in rows {
        let bar = (count as usize * args.width + peak as usize / 2) / peak as usize;
        println!("{:>6} {:>8} {}", value, count, "#".repeat(bar));
    }
    println!();
    println!(
        "mean={:.2} median={:.2} mode={}",
        stats.mean, stats.median, stats.mode
    );
    Ok(())
}
