//! Command-line driver for the Q16 reciprocal square root kernel.
//!
//! Runs the golden verification set (or user-supplied inputs) through the
//! measuring runner and reports each input, its Q16 output, and the elapsed
//! cycle count. `--verify` checks the run against the golden outputs and
//! exits non-zero on any mismatch.

use anyhow::{Context, bail};
use clap::Parser;

use rsqrt_core::Q16_ONE;
use rsqrt_harness::{GOLDEN_VECTORS, LogSink, Runner, SampleRecord, WallClock, verify};

#[derive(Parser)]
#[command(about = "Run the Q16 reciprocal square root kernel over test vectors")]
struct Args {
    /// Input value to evaluate (repeatable). Defaults to the golden set.
    #[arg(long = "input", value_name = "X")]
    inputs: Vec<u32>,

    /// Emit records as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Check outputs against the golden verification set.
    /// Only valid when running the default (golden) inputs.
    #[arg(long)]
    verify: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.verify && !args.inputs.is_empty() {
        bail!("--verify only applies to the golden input set");
    }

    let inputs: Vec<u32> = if args.inputs.is_empty() {
        GOLDEN_VECTORS.iter().map(|&(x, _)| x).collect()
    } else {
        args.inputs.clone()
    };

    let mut runner = Runner::new(WallClock::new(), LogSink);
    let records = runner.run(&inputs);

    if args.json {
        let json = serde_json::to_string_pretty(&records).context("serializing records")?;
        println!("{json}");
    } else {
        print_table(&records);
    }

    if args.verify {
        verify(&records).context("golden verification failed")?;
        println!("all {} golden vectors verified", records.len());
    }

    Ok(())
}

fn print_table(records: &[SampleRecord]) {
    println!("{:>12} {:>12} {:>12} {:>12}", "input", "q16", "value", "cycles");
    for record in records {
        println!(
            "{:>12} {:>12} {:>12.5} {:>12}",
            record.input,
            record.output,
            record.output as f64 / Q16_ONE as f64,
            record.cycles
        );
    }
}
