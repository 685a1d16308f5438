use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use kinematics::{
    compare_to_main_sequence, positions_for_plot, BatchPolicy, DerivedResult,
    MainSequenceComparison, RawObservation,
};
use stellar::sorted_reference_sequence;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod export;
mod input;
mod plot;
mod report;

#[cfg(test)]
mod export_test;

use export::ExportFormat;

#[derive(Parser)]
#[command(name = "starchar")]
#[command(about = "Stellar kinematics from two-epoch astrometry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Star records as a JSON array or a CSV file with a header row
    input: PathBuf,

    /// JSON catalog used to fill missing parallax, radial velocity and magnitudes
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Leave out invalid stars instead of stopping at the first one
    #[arg(long, default_value_t = false)]
    skip_invalid: bool,
}

impl InputArgs {
    fn policy(&self) -> BatchPolicy {
        if self.skip_invalid {
            BatchPolicy::Skip
        } else {
            BatchPolicy::Abort
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute derived quantities and print them
    Compute {
        #[command(flatten)]
        input: InputArgs,

        /// Print results as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Write the input and result tables to files
    Export {
        #[command(flatten)]
        input: InputArgs,

        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Draw the HR diagram with the analyzed stars over the main sequence
    Plot {
        #[command(flatten)]
        input: InputArgs,

        /// Output image, .svg or .png (default images/hr_diagram_<timestamp>.svg)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the reference main sequence
    Reference,
}

fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Loads, completes, validates and computes every star in `args.input`.
fn load_and_compute(args: &InputArgs) -> Result<(Vec<RawObservation>, Vec<DerivedResult>)> {
    let policy = args.policy();
    let drafts = input::load_drafts(&args.input)?;
    let catalog = args
        .catalog
        .as_deref()
        .map(input::load_catalog)
        .transpose()?;
    let prepared = input::prepare(drafts, catalog.as_ref(), policy)?;

    let computed = input::compute_prepared(prepared, policy)?;
    for failure in &computed.skipped {
        warn!("skipped {failure}");
    }

    info!(
        computed = computed.results.len(),
        skipped = computed.skipped.len(),
        "batch finished"
    );
    Ok((computed.observations, computed.results))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compute { input, json } => {
            let (observations, results) = load_and_compute(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                let comparisons: Vec<MainSequenceComparison> =
                    results.iter().map(compare_to_main_sequence).collect();
                print!("{}", report::full_report(&observations, &results, &comparisons));
            }
        }

        Commands::Export {
            input,
            format,
            out_dir,
        } => {
            let (observations, results) = load_and_compute(&input)?;
            let written =
                export::export_tables(&observations, &results, format, &out_dir, &timestamp())?;
            for path in written {
                println!("Wrote {}", path.display());
            }
        }

        Commands::Plot { input, output } => {
            let (_, results) = load_and_compute(&input)?;
            let output = output.unwrap_or_else(|| {
                PathBuf::from("images").join(format!("hr_diagram_{}.svg", timestamp()))
            });
            plot::render_hr_diagram(
                &output,
                sorted_reference_sequence(),
                &positions_for_plot(&results),
            )
            .with_context(|| format!("failed to plot {}", output.display()))?;
            println!("Wrote {}", output.display());
        }

        Commands::Reference => {
            print!("{}", report::reference_table(sorted_reference_sequence()));
        }
    }

    Ok(())
}
