use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::cli::Command;
use subset_sum::subset::{ScanMode, Solver};

mod cli;
mod display;
mod file;
mod report;
mod repl;

fn main() -> anyhow::Result<()> {
    let cli = cli::parse();

    init_logging(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configure worker threads")?;
    }

    let mode = if cli.sequential {
        ScanMode::Sequential
    } else {
        ScanMode::Parallel
    };

    match &cli.command {
        Command::Solve {
            sequence,
            targets,
            batch,
            show_table,
            report: report_path,
        } => {
            let sequence = file::load_sequence(sequence)?;
            let targets = file::load_targets(targets)?;
            let mut solver = Solver::new(sequence, mode).context("prepare solver")?;

            let batch_report = report::run_batch(&mut solver, &targets, *batch, |solver, _| {
                if *show_table {
                    print!("{}", display::render_table(solver.sequence(), solver.table()));
                }
            });

            for outcome in &batch_report.outcomes {
                println!("{}  [{:.3?}]", outcome.describe(), outcome.elapsed);
            }
            println!("Time to run: {:.6}s", batch_report.elapsed_secs);

            if let Some(path) = report_path {
                file::save(&batch_report, path)
                    .with_context(|| format!("save report {}", path.display()))?;
            }
        }
        Command::Range { sequence } => {
            let sequence = file::load_sequence(sequence)?;
            let solver = Solver::new(sequence, mode).context("prepare solver")?;
            let range = solver.range();
            println!(
                "Offset: {}, Columns: {}, Last sum: {}",
                range.offset,
                range.columns,
                range.last()
            );
            println!(
                "Table: {} x {}",
                solver.table().rows(),
                solver.table().columns()
            );
        }
        Command::Repl { sequence } => {
            let sequence = file::load_sequence(sequence)?;
            let solver = Solver::new(sequence, mode).context("prepare solver")?;

            repl::start(solver)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
