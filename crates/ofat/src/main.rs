use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{WrapErr, bail};
use ofat::{OutputFormat, Scenario, init_logging, render};
use ofat_core::RowOrder;

#[derive(Parser, Debug)]
#[command(name = "ofat")]
#[command(about = "One-factor-at-a-time sensitivity analysis of built-in calculations")]
struct Args {
    /// Path to a YAML scenario file
    scenario: PathBuf,

    /// Perturbation fraction (overrides the scenario's delta), e.g. 0.1 for ±10%
    #[arg(short, long)]
    delta: Option<f64>,

    /// Row order of the report
    #[arg(short, long, value_enum, default_value_t = SortArg::Name)]
    sort: SortArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Name,
    Swing,
}

impl From<SortArg> for RowOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => RowOrder::ByName,
            SortArg::Swing => RowOrder::BySwing,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let scenario = Scenario::load(&args.scenario)
        .wrap_err_with(|| format!("could not load {}", args.scenario.display()))?;

    let missing = scenario.missing_parameters();
    if !missing.is_empty() {
        bail!(
            "{} requires parameters: {}",
            scenario.calculation.name(),
            missing.join(", ")
        );
    }

    let engine = scenario.engine(args.delta)?;
    tracing::info!(
        calculation = scenario.calculation.name(),
        parameters = engine.parameters().len(),
        delta = engine.delta(),
        "Running sensitivity analysis"
    );

    let results = engine.run().wrap_err("sensitivity run failed")?;
    let output = render(&engine, &results, args.sort.into(), args.format.into())?;
    println!("{output}");

    Ok(())
}
