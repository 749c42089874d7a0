//! End-to-end conformance tests over the builtin registry
//!
//! Every compiled-in case must pass bit-exactly; the pinned scenarios are
//! additionally checked against their published literals.

use exacto::harness::{run_all, run_case, KernelSpec, Registry};
use exacto::kernels::convolve;

/// Published reference output for the `conv_4` fixture, row-major.
const CONV_4_EXPECTED: [i8; 36] = [
    -2, 2, 2, 8, 0, 1, 1, 3, 7, -2, 11, 0, 8, 4, 4, 1, -1, -5, 4, 5, 14, 2, 5, 7, -1, -2, 2, 5,
    -4, 11, -1, -2, 8, 4, 2, 0,
];

#[test]
fn every_builtin_case_passes() {
    let registry = Registry::builtin().expect("fixtures load");
    let reports = run_all(&registry).expect("all cases run");
    assert_eq!(reports.len(), registry.len());
    for report in &reports {
        assert!(
            report.pass,
            "case {} failed: first mismatch {:?}, max abs diff {}",
            report.name, report.first_mismatch, report.max_abs_diff
        );
        assert_eq!(report.max_abs_diff, 0);
    }
}

#[test]
fn conv_4_reproduces_published_reference() {
    let registry = Registry::builtin().expect("fixtures load");
    let case = registry.get("conv_4").expect("conv_4 registered");
    assert_eq!(case.reference(), CONV_4_EXPECTED);

    // Run the kernel directly and compare element for element.
    match case.kernel() {
        KernelSpec::Conv {
            params,
            scales,
            input,
            weights,
            bias,
        } => {
            assert_eq!(input.len(), 225);
            let out = convolve(params, scales, input, weights, bias).expect("kernel runs");
            assert_eq!(out.data(), CONV_4_EXPECTED);
        }
        other => panic!("conv_4 should be a Conv case, got {other:?}"),
    }
}

#[test]
fn depthwise_out_activation_respects_clamp() {
    let registry = Registry::builtin().expect("fixtures load");
    let case = registry
        .get("depthwise_out_activation")
        .expect("case registered");
    let report = run_case(case).expect("case runs");
    assert!(report.pass);
    // Every element of the produced (and therefore reference) tensor must
    // lie inside the configured activation window.
    for &v in case.reference() {
        assert!((-45..=103).contains(&i32::from(v)), "element {v} outside clamp");
    }
}

#[test]
fn svdf_sequence_case_passes_and_is_repeatable() {
    let registry = Registry::builtin().expect("fixtures load");
    let case = registry.get("svdf_2").expect("svdf_2 registered");
    // The harness owns a fresh state per run, so reruns are bit-identical.
    let first = run_case(case).expect("first run");
    let second = run_case(case).expect("second run");
    assert!(first.pass);
    assert_eq!(first, second);
}

#[test]
fn registry_enumerates_expected_cases() {
    let registry = Registry::builtin().expect("fixtures load");
    let names: Vec<&str> = registry.names().collect();
    for expected in [
        "avgpool_1",
        "conv_2",
        "conv_4",
        "conv_kernel1x1",
        "depthwise_mult",
        "depthwise_out_activation",
        "fully_connected",
        "maxpool_1",
        "svdf_1",
        "svdf_2",
    ] {
        assert!(names.contains(&expected), "missing case {expected}");
    }
}

#[test]
fn reports_are_deterministic_across_runs() {
    let registry = Registry::builtin().expect("fixtures load");
    let a = run_all(&registry).expect("first run");
    let b = run_all(&registry).expect("second run");
    assert_eq!(a, b);
}
