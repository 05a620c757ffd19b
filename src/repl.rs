use std::io::{BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use subset_sum::subset::Solver;

use crate::{display, report};

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check whether a subset sums to the target and show it
    Check {
        #[arg(allow_negative_numbers = true)]
        target: i64,
    },
    /// Print the table left by the last check
    Table,
    /// Print the sum range of the sequence
    Range,
    /// Check several targets and report the total time
    Batch {
        #[arg(required = true, allow_negative_numbers = true)]
        targets: Vec<i64>,
    },
    Exit,
    Quit,
}

pub fn start(solver: Solver) -> Result<()> {
    let stdin = std::io::stdin();
    let mut repl = Repl {
        solver,
        out: std::io::stdout(),
    };

    loop {
        let Some(line) = repl.readline(&mut stdin.lock())? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match repl.respond(line) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                if err.downcast_ref::<clap::Error>().is_some() {
                    writeln!(repl.out, "  {err:?}")?;
                } else {
                    writeln!(repl.out, "  error: {err:?}")?;
                }
                repl.out.flush()?;
            }
        }
    }

    Ok(())
}

struct Repl<W: Write> {
    solver: Solver,
    out: W,
}

impl<W: Write> Repl<W> {
    fn respond(&mut self, line: &str) -> Result<bool> {
        let args = line.split_whitespace();
        let cli = Cli::try_parse_from(args)?;

        match cli.command {
            Command::Check { target } => {
                let outcome = match self.solver.query(target) {
                    Some(witness) => {
                        let values = witness
                            .iter()
                            .map(|v| v.to_string())
                            .collect::<Vec<_>>()
                            .join(" ");
                        format!("  Subset: {}", values)
                    }
                    None => "  No solution exists".to_string(),
                };
                writeln!(self.out, "{}", outcome)?;
            }
            Command::Table => {
                let table = display::render_table(self.solver.sequence(), self.solver.table());
                write!(self.out, "{}", table)?;
            }
            Command::Range => {
                let range = self.solver.range();
                writeln!(
                    self.out,
                    "  Offset: {}, Columns: {}, Last sum: {}",
                    range.offset,
                    range.columns,
                    range.last()
                )?;
            }
            Command::Batch { targets } => {
                let batch = report::run_batch(&mut self.solver, &targets, targets.len(), |_, _| {});
                for outcome in &batch.outcomes {
                    writeln!(self.out, "  {}", outcome.describe())?;
                }
                writeln!(self.out, "  Time to run: {:.6}s", batch.elapsed_secs)?;
            }
            Command::Exit | Command::Quit => {
                return Ok(true);
            }
        }
        self.out.flush()?;
        Ok(false)
    }

    /// `None` once input is exhausted
    fn readline(&mut self, input: &mut impl BufRead) -> Result<Option<String>> {
        write!(self.out, "subset> ")?;
        self.out.flush()?;
        let mut buffer = String::new();
        if input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(buffer))
    }
}
