//! Command-line argument parsing for exacto-cli
//!
//! Uses clap derive macros for type-safe argument parsing.
//! All argument structures are unit-testable.

use clap::{Parser, Subcommand};

/// exacto-cli: bit-exact conformance runner for quantized kernels
#[derive(Parser, Debug, Clone)]
#[command(name = "exacto-cli")]
#[command(version)]
#[command(about = "Bit-exact conformance testing for int8 quantized kernels", long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output (show per-case detail even on pass)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as JSON (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List registered case names
    List,

    /// Run conformance cases (all of them by default)
    Run(RunArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Case names to run (default: every registered case)
    pub cases: Vec<String>,

    /// Number of worker threads (default: one per logical CPU)
    #[arg(long)]
    pub threads: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_command_factory_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_list() {
        let args = Args::try_parse_from(["exacto-cli", "list"]).expect("parses");
        assert!(matches!(args.command, Command::List));
        assert!(!args.json);
    }

    #[test]
    fn test_parse_run_all() {
        let args = Args::try_parse_from(["exacto-cli", "run"]).expect("parses");
        match args.command {
            Command::Run(r) => {
                assert!(r.cases.is_empty());
                assert_eq!(r.threads, None);
            }
            Command::List => panic!("expected Run command"),
        }
    }

    #[test]
    fn test_parse_run_named_cases() {
        let args = Args::try_parse_from(["exacto-cli", "run", "conv_4", "svdf_2"])
            .expect("parses");
        match args.command {
            Command::Run(r) => assert_eq!(r.cases, vec!["conv_4", "svdf_2"]),
            Command::List => panic!("expected Run command"),
        }
    }

    #[test]
    fn test_parse_run_threads() {
        let args =
            Args::try_parse_from(["exacto-cli", "run", "--threads", "4"]).expect("parses");
        match args.command {
            Command::Run(r) => assert_eq!(r.threads, Some(4)),
            Command::List => panic!("expected Run command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let args = Args::try_parse_from(["exacto-cli", "--json", "-v", "run"]).expect("parses");
        assert!(args.json);
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_parse_invalid_command() {
        assert!(Args::try_parse_from(["exacto-cli", "frobnicate"]).is_err());
    }

    #[test]
    fn test_parse_invalid_threads() {
        assert!(Args::try_parse_from(["exacto-cli", "run", "--threads", "many"]).is_err());
    }
}
