use anyhow::Result;
use clap::{Parser, Subcommand};

use harness::{cli, exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "harness",
    version,
    about = "Example-table harness for the exercise functions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print built-in suite ids, one per line.
    List,
    /// Run suites and report mismatches (all suites when none are named).
    Run {
        suite_ids: Vec<String>,
        /// Print the structured report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::List => {
            cli::list_suites()?;
            Ok(exit_codes::OK)
        }
        Command::Run { suite_ids, json } => {
            let report = cli::run_suites(&suite_ids, json)?;
            if report.all_passed() {
                Ok(exit_codes::OK)
            } else {
                Ok(exit_codes::MISMATCH)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list() {
        let cli = Cli::parse_from(["harness", "list"]);
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn parse_run_with_no_suites() {
        let cli = Cli::parse_from(["harness", "run"]);
        match cli.command {
            Command::Run { suite_ids, json } => {
                assert!(suite_ids.is_empty());
                assert!(!json);
            }
            Command::List => panic!("expected run"),
        }
    }

    #[test]
    fn parse_run_with_suites_and_json() {
        let cli = Cli::parse_from(["harness", "run", "is-triangle", "is-isoceles", "--json"]);
        match cli.command {
            Command::Run { suite_ids, json } => {
                assert_eq!(suite_ids, vec!["is-triangle", "is-isoceles"]);
                assert!(json);
            }
            Command::List => panic!("expected run"),
        }
    }
}
