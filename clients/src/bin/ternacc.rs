//! `ternacc`: command-line client for the ternary popcount accumulator model.
//!
//! ```text
//! USAGE:
//!   ternacc conformance [--json]            Run the conformance suite
//!   ternacc eval --code <c> --mask <m>      Load one code uniformly and read back
//!   ternacc popcount <word> [--width W]     Count set bits with one strategy
//!   ternacc config                          Print the effective configuration
//! ```
//!
//! Every subcommand that builds a core accepts `--config <file>` plus flag
//! overrides. `RUST_LOG` controls log output (default `warn`).
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ternacc::parse::{parse_code, parse_mask, parse_word};
use ternacc::popcount::Strategy;
use ternacc::{CoreConfig, Latency, LoadPath, ProtocolDriver, ResultWidth};
use ternacc_conformance::run_all;

/// Ternary popcount accumulator model.
#[derive(Parser)]
#[command(
    name = "ternacc",
    about = "Bit-exact ternary popcount accumulator model",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run the conformance suite against one configuration.
    Conformance {
        #[command(flatten)]
        core: CoreArgs,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Reset, load one code into every weight, select lanes and read back.
    Eval {
        #[command(flatten)]
        core: CoreArgs,
        /// Weight code: 00, 01, 10, 11 (or 0..=3).
        #[arg(long, value_parser = parse_code)]
        code: u8,
        /// Lane mask (0x.., 0b.. or decimal).
        #[arg(long, value_parser = parse_mask)]
        mask: u8,
    },
    /// Count the set bits of a word.
    Popcount {
        /// Word to count (0x.., 0b.. or decimal).
        word: String,
        /// Word width in bits.
        #[arg(long, default_value_t = 128)]
        width: u32,
        /// Reduction strategy.
        #[arg(long, default_value_t = Strategy::Native)]
        strategy: Strategy,
    },
    /// Print the effective configuration as TOML.
    Config {
        #[command(flatten)]
        core: CoreArgs,
    },
}

/// Core configuration: a TOML file plus per-field overrides.
#[derive(Args)]
struct CoreArgs {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Result register width (8 or 16).
    #[arg(long)]
    width: Option<u32>,
    /// Pipeline depth in edges (1..=8).
    #[arg(long)]
    depth: Option<u32>,
    /// Load path (narrow, wide or serial).
    #[arg(long)]
    load_path: Option<LoadPath>,
    /// Lane reduction strategy (native, lut or tree).
    #[arg(long)]
    strategy: Option<Strategy>,
}

impl CoreArgs {
    fn resolve(&self) -> Result<CoreConfig> {
        let mut config = match &self.config {
            Some(path) => CoreConfig::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => CoreConfig::default(),
        };
        if let Some(bits) = self.width {
            config = config.with_result_width(ResultWidth::try_from(bits)?);
        }
        if let Some(depth) = self.depth {
            config = config.with_latency(Latency::new(depth)?);
        }
        if let Some(path) = self.load_path {
            config = config.with_load_path(path);
        }
        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy);
        }
        debug!(?config, "resolved configuration");
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Cmd::Conformance { core, json } => cmd_conformance(&core.resolve()?, json)?,
        Cmd::Eval { core, code, mask } => cmd_eval(&core.resolve()?, code, mask),
        Cmd::Popcount {
            word,
            width,
            strategy,
        } => cmd_popcount(&word, width, strategy)?,
        Cmd::Config { core } => print!("{}", core.resolve()?.to_toml_string()?),
    }

    Ok(())
}

fn cmd_conformance(config: &CoreConfig, json: bool) -> Result<()> {
    let report = run_all(config);

    if json {
        let doc = serde_json::json!({ "config": config, "report": report });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("ternacc Conformance Report");
        println!("==========================");
        println!(
            "width={} depth={} load_path={} strategy={}",
            config.result_width.bits(),
            config.latency,
            config.load_path,
            config.strategy
        );
        println!();

        for result in &report.results {
            println!(
                "[{}] {} — {}",
                result.severity.tag(),
                result.suite,
                result.message
            );
            for detail in &result.details {
                println!("       {}", detail);
            }
        }

        println!();
        println!(
            "Summary: {} passed, {} warnings, {} failed",
            report.pass_count(),
            report.warning_count(),
            report.failure_count()
        );
    }

    let failed = report.failure_count();
    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    if !json {
        println!("Conformance PASSED.");
    }
    Ok(())
}

fn cmd_eval(config: &CoreConfig, code: u8, mask: u8) {
    let mut driver = ProtocolDriver::new(*config);
    driver.reset();
    let r = driver.measure(mask, code);

    println!("code   {code:02b}");
    println!("mask   {mask:#010b}");
    println!("result {}", r.signed());
    println!("low    {:#04x}", r.low);
    if config.result_width == ResultWidth::W16 {
        println!("high   {:#04x}", r.high);
    }
    println!("ticks  {}", driver.core().ticks());
}

fn cmd_popcount(text: &str, width: u32, strategy: Strategy) -> Result<()> {
    if !matches!(width, 32 | 64 | 128) {
        bail!("unsupported popcount width {width} (expected 32, 64 or 128)");
    }
    let word = parse_word(text, width)?;
    let count = match width {
        32 => strategy.count(word as u32),
        64 => strategy.count(word as u64),
        _ => strategy.count(word),
    };
    println!("{count}");
    Ok(())
}
