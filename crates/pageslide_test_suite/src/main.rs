//! Scenario Runner
//!
//! Command-line tool for running the pageslide scenarios against the
//! headless host.
//!
//! Usage:
//!   pageslide-scenarios              # Run all scenarios
//!   pageslide-scenarios --filter foo # Run scenarios matching "foo"
//!   pageslide-scenarios --list       # List all scenarios

use anyhow::Result;
use clap::Parser;
use pageslide_test_suite::{runner::TestRunner, tests};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pageslide-scenarios")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run pageslide scenarios on a headless page", long_about = None)]
struct Cli {
    /// List scenarios without running them
    #[arg(long)]
    list: bool,

    /// Only run scenarios whose name or suite contains this pattern
    #[arg(short, long)]
    filter: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if cli.list {
        println!("Available scenario suites:");
        for suite in tests::all_suites() {
            println!("\n  {}:", suite.name);
            for case in &suite.cases {
                println!("    - {}", case.name);
            }
        }
        return Ok(());
    }

    println!("╔══════════════════════════════════════════╗");
    println!("║           PAGESLIDE SCENARIOS            ║");
    println!("╚══════════════════════════════════════════╝\n");

    let mut runner = TestRunner::new();

    for suite in tests::all_suites() {
        runner.add_suite(suite);
    }

    if let Some(ref pattern) = cli.filter {
        println!("Running scenarios matching: {}\n", pattern);
        runner.filter(pattern);
    }

    let result = runner.run();
    result.print_summary();

    if result.all_passed() {
        println!("\nAll scenarios passed!");
        Ok(())
    } else {
        std::process::exit(1);
    }
}
