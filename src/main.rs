//! Solar ROI CLI
//!
//! Command-line interface for single calculations and batch scenario runs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use solar_roi::{
    input::load_scenarios,
    scenario::write_summary_csv,
    CalculationInput, CalculationReport, CalculationResponse, CalculatorConfig, EnergyUnit,
    Payback, Projection, ProjectionMode, ScenarioRunner,
};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "solar_roi")]
#[command(author, version, about = "Solar panel return-on-investment calculator")]
struct Cli {
    /// JSON file overriding currency label and horizon rules
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project one set of inputs
    Calculate(CalculateArgs),

    /// Project every scenario in a CSV file
    Batch(BatchArgs),
}

#[derive(Parser)]
struct CalculateArgs {
    /// Price of one panel
    #[arg(long, allow_negative_numbers = true)]
    panel_cost: f64,

    /// Rated output of one panel, in watts
    #[arg(long, allow_negative_numbers = true)]
    panel_wattage: f64,

    /// Grid electricity price per kWh
    #[arg(long, allow_negative_numbers = true)]
    current_cost: f64,

    /// Daily energy use, in --energy-unit
    #[arg(long, allow_negative_numbers = true)]
    daily_energy: f64,

    /// Peak load the system must supply, in watts
    #[arg(long, allow_negative_numbers = true)]
    peak_power: f64,

    #[arg(long, value_enum, default_value_t = ProjectionMode::Annual)]
    mode: ProjectionMode,

    #[arg(long, value_enum, default_value_t = EnergyUnit::KilowattHours)]
    energy_unit: EnergyUnit,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Also write the period series to this CSV file
    #[arg(long)]
    csv_path: Option<PathBuf>,
}

#[derive(Parser)]
struct BatchArgs {
    /// Scenario CSV (scenario_id, panel_cost, panel_wattage,
    /// current_cost_per_kwh, daily_energy, peak_power_w[, mode, energy_unit])
    #[arg(long)]
    input: PathBuf,

    #[arg(long, default_value = "scenario_summary.csv")]
    output: PathBuf,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = CalculatorConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load calculator config")?;
    let runner = ScenarioRunner::new(config);

    match cli.command {
        Commands::Calculate(args) => calculate(&runner, args),
        Commands::Batch(args) => batch(&runner, args),
    }
}

fn calculate(runner: &ScenarioRunner, args: CalculateArgs) -> Result<()> {
    let input = CalculationInput::new(
        args.panel_cost,
        args.panel_wattage,
        args.current_cost,
        args.daily_energy,
        args.peak_power,
        args.mode,
    )
    .with_energy_unit(args.energy_unit);

    if args.format == OutputFormat::Json {
        let config = runner.calculator().config();
        let response = match runner.run(&input) {
            Ok(projection) => {
                if let Some(path) = &args.csv_path {
                    write_series(&projection, path)?;
                }
                CalculationResponse::Success(Box::new(CalculationReport::from_projection(
                    &projection,
                    config,
                )))
            }
            Err(e) => CalculationResponse::failure(e.to_string()),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let projection = runner.run(&input)?;
    print_summary(&projection, &runner.calculator().config().currency_symbol);

    if let Some(path) = &args.csv_path {
        write_series(&projection, path)?;
        println!("\nFull series written to: {}", path.display());
    }
    Ok(())
}

fn print_summary(projection: &Projection, currency: &str) {
    let r = &projection.result;
    let series = &projection.series;

    println!("Solar ROI ({} projection)", series.mode);
    println!("======================\n");
    println!("  Required capacity: {:.1} W", r.required_capacity_w);
    println!("  Cost per watt:     {}{:.2}", currency, r.cost_per_watt);
    println!("  Total solar cost:  {}{:.2}", currency, r.total_solar_cost);
    println!("  Annual energy:     {:.2} kWh", r.annual_energy_kwh);
    println!("  Annual savings:    {}{:.2}", currency, r.annual_grid_cost);
    match r.payback {
        Payback::Finite(years) => println!("  Payback period:    {:.2} years", years),
        Payback::Never => println!("  Payback period:    Never"),
    }
    if let Some(be) = projection.break_even {
        println!("  Break-even at:     {} {:.1}", series.mode.axis_label(), be.period);
    }

    println!("\n{:>6} {:>16} {:>16}", series.mode.axis_label(), "Grid (cum.)", "Solar (cum.)");
    println!("{}", "-".repeat(40));
    for row in series.rows() {
        println!("{:>6} {:>16.2} {:>16.2}", row.period, row.grid_cumulative, row.solar_cumulative);
    }
}

fn write_series(projection: &Projection, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Unable to create {}", path.display()))?;
    projection.series.write_csv(file)?;
    Ok(())
}

fn batch(runner: &ScenarioRunner, args: BatchArgs) -> Result<()> {
    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("Failed to load scenarios from {}", args.input.display()))?;
    println!("Loaded {} scenarios", scenarios.len());

    let outcomes = runner.run_batch(&scenarios);
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();

    let file = File::create(&args.output)
        .with_context(|| format!("Unable to create {}", args.output.display()))?;
    write_summary_csv(&outcomes, file)?;

    println!("{} ok, {} failed", outcomes.len() - failed, failed);
    println!("Output written to {}", args.output.display());
    Ok(())
}
