use bitype::programs::{self, Goal, Program};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

/// Run the bidirectional type checker over its example programs
#[derive(Parser)]
#[command(name = "bitype", version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the example programs
    List,

    /// Type check example programs (all of them when no name is given)
    Run {
        /// Program names, as shown by `list`
        names: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::List => {
            for program in programs::catalogue() {
                println!("{:<28} {}", program.name, program.description);
            }
        }

        Command::Run { names } => {
            let selected = if names.is_empty() {
                programs::catalogue()
            } else {
                names
                    .iter()
                    .map(|name| programs::find(name))
                    .collect::<Result<Vec<_>, _>>()?
            };

            let mut failures = 0;
            for program in &selected {
                if !run_program(program) {
                    failures += 1;
                }
            }

            if failures > 0 {
                eprintln!("{} of {} programs failed", failures, selected.len());
                std::process::exit(1);
            }
        }

        Command::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "bitype", &mut io::stdout());
        }
    }

    Ok(())
}

/// Print one program and its result, returning whether it passed
fn run_program(program: &Program) -> bool {
    println!("{}: {}", program.name, program.description);
    println!("  environment: {}", program.environment);
    println!("  expression:  {}", program.expr);
    match &program.goal {
        Goal::Check(ty) => println!("  check:       {}", ty),
        Goal::Synthesize => println!("  synthesize"),
    }

    let report = program.run();
    println!("  result:      {}", report.outcome);
    println!("{}", if report.passed { "PASSED" } else { "FAILED" });
    println!();

    report.passed
}
