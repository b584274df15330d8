// Simulator binary - runs the MLQ driver over a set of input files.
//
// The binary parses command-line options, hands the input set to the batch
// driver (one scheduler instance per file), and echoes the dispatch-order
// sequence per input to the console. Reports land in the output directory as
// `output_<stem>.txt`.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use mlq_sim::driver::{self, DriverConfig};

/// Command-line options parsed from program arguments.
struct CliOptions {
    /// Input files; defaults to the classic three-batch set.
    inputs: Vec<PathBuf>,
    /// Quanta and output tuning for the driver.
    config: DriverConfig,
    /// Directory receiving the generated reports.
    output_dir: PathBuf,
}

/// Parse command-line arguments into `CliOptions`.
///
/// Supports two argument formats for every flag:
/// - `--quantum1=<n>` or `--quantum1 <n>`: Round-robin quantum for queue 1
/// - `--quantum2=<n>` or `--quantum2 <n>`: Round-robin quantum for queue 2
/// - `--output-dir=<path>` or `--output-dir <path>`: Report directory
/// - `--json-summaries`: Also write a JSON summary per input
///
/// Remaining arguments are input files. With none given, the driver runs the
/// default set `mlq001.txt mlq002.txt mlq003.txt`.
fn parse_cli_options() -> Result<CliOptions> {
    let mut inputs: Vec<PathBuf> = Vec::new();
    let mut config = DriverConfig::default();
    let mut output_dir = PathBuf::from(".");

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if let Some((key, value)) = arg.split_once('=') {
            match key {
                "--quantum1" => config.quantum_level1 = parse_quantum(key, value)?,
                "--quantum2" => config.quantum_level2 = parse_quantum(key, value)?,
                "--output-dir" => output_dir = PathBuf::from(value),
                _ => bail!("unknown option {arg}"),
            }
        } else if arg == "--quantum1" || arg == "--quantum2" {
            let value = args
                .next()
                .with_context(|| format!("missing value for {arg}"))?;
            if arg == "--quantum1" {
                config.quantum_level1 = parse_quantum(&arg, &value)?;
            } else {
                config.quantum_level2 = parse_quantum(&arg, &value)?;
            }
        } else if arg == "--output-dir" {
            let value = args
                .next()
                .with_context(|| format!("missing value for {arg}"))?;
            output_dir = PathBuf::from(value);
        } else if arg == "--json-summaries" {
            config.json_summaries = true;
        } else if arg.starts_with("--") {
            bail!("unknown option {arg}");
        } else {
            inputs.push(PathBuf::from(arg));
        }
    }

    if inputs.is_empty() {
        inputs = vec![
            PathBuf::from("mlq001.txt"),
            PathBuf::from("mlq002.txt"),
            PathBuf::from("mlq003.txt"),
        ];
    }

    Ok(CliOptions {
        inputs,
        config,
        output_dir,
    })
}

fn parse_quantum(key: &str, value: &str) -> Result<u64> {
    let quantum: u64 = value
        .parse()
        .with_context(|| format!("invalid value for {key}: {value:?}"))?;
    if quantum == 0 {
        bail!("{key} must be positive");
    }
    Ok(quantum)
}

fn main() -> Result<()> {
    env_logger::init();

    let options = parse_cli_options()?;
    let outcomes = driver::run_files(&options.inputs, &options.config, &options.output_dir)?;

    for outcome in &outcomes {
        println!(
            "Dispatch order for {}: {}",
            outcome.name,
            outcome.dispatch_order.join(", ")
        );
    }

    Ok(())
}
