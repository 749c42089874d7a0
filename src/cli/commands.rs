//! Command implementations for exacto-cli
//!
//! Each command is a pure function over the registry so it can be tested
//! without a process boundary; the binary only parses and dispatches.

use tracing::info;

use crate::error::{ExactoError, ExactoResult};
use crate::harness::{configure_thread_pool, run_case, CaseReport, Registry};

use super::args::{Args, Command, RunArgs};
use super::output::{format_json, format_text};

/// Command execution result
#[derive(Debug)]
pub struct CommandResult {
    /// Whether every executed case passed (always true for `list`)
    pub success: bool,
    /// Rendered output for stdout
    pub message: String,
}

/// Run the CLI with parsed arguments
///
/// # Errors
///
/// Configuration and fixture errors propagate; comparison mismatches are
/// reported in the result, not as errors.
pub fn run(args: Args) -> ExactoResult<CommandResult> {
    let registry = Registry::builtin()?;
    match &args.command {
        Command::List => run_list(&registry),
        Command::Run(run_args) => run_cases(&registry, run_args, &args),
    }
}

fn run_list(registry: &Registry) -> ExactoResult<CommandResult> {
    let names: Vec<&str> = registry.names().collect();
    Ok(CommandResult {
        success: true,
        message: names.join("\n"),
    })
}

fn run_cases(registry: &Registry, run_args: &RunArgs, global: &Args) -> ExactoResult<CommandResult> {
    let threads = configure_thread_pool(run_args.threads);
    info!(threads, "worker pool configured");

    let selected: Vec<&crate::harness::TestCase> = if run_args.cases.is_empty() {
        registry.cases().collect()
    } else {
        run_args
            .cases
            .iter()
            .map(|name| {
                registry
                    .get(name)
                    .ok_or_else(|| ExactoError::Fixture(format!("no case named {name}")))
            })
            .collect::<ExactoResult<Vec<_>>>()?
    };

    let reports = run_selected(&selected)?;
    let success = reports.iter().all(|r| r.pass);
    let message = if global.json {
        format_json(&reports).map_err(|e| ExactoError::Fixture(e.to_string()))?
    } else if global.quiet {
        let failed = reports.iter().filter(|r| !r.pass).count();
        format!("{} case(s), {} failed", reports.len(), failed)
    } else {
        format_text(&reports, global.verbose)
    };
    Ok(CommandResult { success, message })
}

fn run_selected(cases: &[&crate::harness::TestCase]) -> ExactoResult<Vec<CaseReport>> {
    use rayon::prelude::*;
    cases.par_iter().map(|case| run_case(case)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("test argv parses")
    }

    #[test]
    fn test_list_names_all_cases() {
        let result = run(parse(&["exacto-cli", "list"])).expect("list runs");
        assert!(result.success);
        assert!(result.message.contains("conv_4"));
        assert!(result.message.contains("svdf_2"));
        assert!(result.message.contains("depthwise_out_activation"));
    }

    #[test]
    fn test_run_all_builtin_cases_pass() {
        let result = run(parse(&["exacto-cli", "run"])).expect("run completes");
        assert!(result.success, "builtin cases must pass:\n{}", result.message);
        assert!(result.message.contains("0 failed"));
    }

    #[test]
    fn test_run_single_case() {
        let result = run(parse(&["exacto-cli", "run", "conv_4"])).expect("run completes");
        assert!(result.success);
        assert!(result.message.contains("PASS conv_4"));
        assert!(result.message.contains("1 case(s), 1 passed, 0 failed"));
    }

    #[test]
    fn test_run_unknown_case_is_error() {
        let err = run(parse(&["exacto-cli", "run", "conv_99"]));
        assert!(err.is_err());
    }

    #[test]
    fn test_run_json_output() {
        let result = run(parse(&["exacto-cli", "--json", "run", "maxpool_1"]))
            .expect("run completes");
        let parsed: serde_json::Value =
            serde_json::from_str(&result.message).expect("valid JSON");
        assert_eq!(parsed[0]["name"], "maxpool_1");
    }

    #[test]
    fn test_run_quiet_output() {
        let result = run(parse(&["exacto-cli", "-q", "run", "avgpool_1"]))
            .expect("run completes");
        assert_eq!(result.message, "1 case(s), 0 failed");
    }
}
