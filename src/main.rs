mod logging;

use anyhow::Context;
use barbell_rs::{
    Calculation, LiftMode, Loadout, Plate, Unit, convert, decompose, format_weight,
    plate_count::PlateCount, summarize,
};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about = "Barbell plate calculator")]
struct Args {
    /// Unit for weights and plates (lbs or kg)
    #[arg(short, long, global = true, env = "BARBELL_UNIT", default_value_t = Unit::Imperial)]
    unit: Unit,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Plates to load on each side for a total weight
    Load {
        #[arg(allow_negative_numbers = true)]
        weight: f64,
        /// generic or bench
        #[arg(short, long, default_value_t = LiftMode::Generic)]
        mode: LiftMode,
    },
    /// Total weight for the plates on one side, e.g. `45x2 10 2.5x2`
    Count {
        #[arg(required = true, value_parser = clap::value_parser!(PlateCount))]
        plates: Vec<PlateCount>,
        #[arg(short, long, default_value_t = LiftMode::Generic)]
        mode: LiftMode,
    },
    /// Convert a weight typed in the other unit into `--to`
    Convert {
        weight: f64,
        #[arg(long)]
        to: Unit,
    },
    /// List the available plates
    Plates,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::setup_logging(args.verbose);

    match args.command {
        Command::Load { weight, mode } => {
            tracing::debug!(weight, %mode, unit = %args.unit, "decomposing target weight");
            let calculation = decompose(weight, mode, args.unit)
                .with_context(|| format!("Cannot load {}", format_weight(weight, args.unit)))?;
            print_calculation(&calculation, args.json)?;
        }
        Command::Count { plates, mode } => {
            let loadout = plates.into_iter().collect::<Loadout>();
            tracing::debug!(?loadout, %mode, unit = %args.unit, "summing loadout");
            let calculation = summarize(&loadout, mode, args.unit).context("Cannot count plates")?;
            print_calculation(&calculation, args.json)?;
        }
        Command::Convert { weight, to } => {
            let converted = to.switch_input(weight);
            tracing::debug!(
                weight,
                exact = convert(weight, to.direction()),
                converted,
                "converted input"
            );
            match args.json {
                true => println!("{}", serde_json::json!({ "weight": converted, "unit": to.label() })),
                false => println!("{}", format_weight(converted, to)),
            }
        }
        Command::Plates => {
            let labels = Plate::ALL
                .iter()
                .map(|plate| plate.label(args.unit))
                .collect::<Vec<_>>();
            match args.json {
                true => println!("{}", serde_json::to_string(&labels)?),
                false => {
                    println!("Available plates:");
                    for label in labels {
                        println!("  - {label}");
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_calculation(calculation: &Calculation, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(calculation)?);
        return Ok(());
    }

    println!("{} ({})", calculation.mode, calculation.unit);
    println!("  Plates per side: {}", calculation.plate_summary());
    println!(
        "  Weight per side: {}",
        format_weight(calculation.weight_per_side, calculation.unit)
    );
    println!(
        "  Total weight:    {}",
        format_weight(calculation.total_weight, calculation.unit)
    );
    if calculation.is_bench_press() {
        println!(
            "  Bar weight:      {}",
            format_weight(calculation.bar_weight, calculation.unit)
        );
    }

    Ok(())
}
