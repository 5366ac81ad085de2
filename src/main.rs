use anyhow::Context;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use physique_sim::compounds::KnowledgeBase;
use physique_sim::config::SimulationInput;
use physique_sim::output;
use physique_sim::simulation::{validate_simulation, Simulator};

#[derive(Parser)]
#[command(name = "physique_sim")]
#[command(about = "Week-by-week physique and blood-marker projection for compound regimens")]
struct Cli {
    /// Input bundle (JSON). Repeat to compare several protocols side by side
    #[arg(short, long, required = true)]
    input: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Replacement compound table (JSON array)
    #[arg(short, long)]
    compounds: Option<PathBuf>,

    /// Also write a Markdown report
    #[arg(short, long)]
    report: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env().filter_level(level).init();

    let knowledge_base = match &cli.compounds {
        Some(path) => KnowledgeBase::from_file(path)
            .with_context(|| format!("failed to load compound table {:?}", path))?,
        None => KnowledgeBase::standard(),
    };
    info!("Compound knowledge base holds {} entries", knowledge_base.len());

    let inputs = cli
        .input
        .iter()
        .map(|path| {
            let input = SimulationInput::from_file(path)
                .with_context(|| format!("failed to load input bundle {:?}", path))?;
            info!("Loaded input bundle from {:?}", path);
            Ok(input)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let simulator = Simulator::new(&knowledge_base);
    let results = simulator.run_all(&inputs);
    info!("Completed {} simulation(s)", results.len());

    for result in &results {
        let report = validate_simulation(result);
        for message in &report.errors {
            error!("{}: {}", result.id, message);
        }
        for message in &report.warnings {
            warn!("{}: {}", result.id, message);
        }
        for message in &report.suggestions {
            info!("{}: {}", result.id, message);
        }
    }

    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create output directory {:?}", cli.output))?;

    output::save_results(&results, &cli.output).context("failed to save results")?;
    if cli.report {
        output::generate_report(&results, &cli.output).context("failed to write report")?;
    }
    info!("Results saved to {:?}", cli.output);

    Ok(())
}
