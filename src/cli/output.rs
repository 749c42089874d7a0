//! Output formatting for exacto-cli
//!
//! Human-readable text by default; one JSON document with `--json`.

use std::fmt::Write;

use crate::harness::CaseReport;

/// Render one report as a text line
#[must_use]
pub fn format_report_line(report: &CaseReport, verbose: bool) -> String {
    if report.pass {
        if verbose {
            format!("PASS {} ({} elements)", report.name, report.elements)
        } else {
            format!("PASS {}", report.name)
        }
    } else {
        let index = report
            .first_mismatch
            .map_or_else(|| "length".to_string(), |i| i.to_string());
        format!(
            "FAIL {} (first mismatch at {}, max abs diff {})",
            report.name, index, report.max_abs_diff
        )
    }
}

/// Render a whole run as text, one line per case plus a summary
#[must_use]
pub fn format_text(reports: &[CaseReport], verbose: bool) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(out, "{}", format_report_line(report, verbose));
    }
    let failed = reports.iter().filter(|r| !r.pass).count();
    let _ = writeln!(
        out,
        "{} case(s), {} passed, {} failed",
        reports.len(),
        reports.len() - failed,
        failed
    );
    out
}

/// Render a whole run as a JSON array of reports
///
/// # Errors
///
/// Propagates serialization failures (they do not occur for well-formed
/// reports).
pub fn format_json(reports: &[CaseReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing() -> CaseReport {
        CaseReport {
            name: "conv_4".into(),
            pass: true,
            first_mismatch: None,
            max_abs_diff: 0,
            elements: 36,
        }
    }

    fn failing() -> CaseReport {
        CaseReport {
            name: "svdf_2".into(),
            pass: false,
            first_mismatch: Some(7),
            max_abs_diff: 12,
            elements: 18,
        }
    }

    #[test]
    fn test_pass_line() {
        assert_eq!(format_report_line(&passing(), false), "PASS conv_4");
        assert_eq!(
            format_report_line(&passing(), true),
            "PASS conv_4 (36 elements)"
        );
    }

    #[test]
    fn test_fail_line_carries_diagnostics() {
        assert_eq!(
            format_report_line(&failing(), false),
            "FAIL svdf_2 (first mismatch at 7, max abs diff 12)"
        );
    }

    #[test]
    fn test_text_summary() {
        let text = format_text(&[passing(), failing()], false);
        assert!(text.contains("2 case(s), 1 passed, 1 failed"));
    }

    #[test]
    fn test_json_roundtrips() {
        let json = format_json(&[passing()]).expect("serializes");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("parses");
        assert_eq!(parsed[0]["name"], "conv_4");
        assert_eq!(parsed[0]["pass"], true);
    }
}
