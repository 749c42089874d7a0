//! Benchmarks for the reference kernels and harness
//!
//! Run with: `cargo bench --bench kernels`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use exacto::harness::{run_case, Registry};
use exacto::kernels::{convolve, ConvParams};
use exacto::{ChannelScales, QuantizedTensor, RequantScale, Shape};

/// Build a synthetic conv workload with deterministic pseudo-random data
fn conv_workload(
    side: usize,
    in_ch: usize,
    out_ch: usize,
) -> (ConvParams, ChannelScales, QuantizedTensor, QuantizedTensor, Vec<i32>) {
    let params = ConvParams {
        stride_h: 1,
        stride_w: 1,
        pad_h: 1,
        pad_w: 1,
        output_offset: -4,
        act_min: -128,
        act_max: 127,
    };
    let scale = RequantScale::new(1_518_500_250, -10).expect("valid pair");
    let input: Vec<i8> = (0..side * side * in_ch)
        .map(|i| ((i * 31 + 7) % 255) as i8)
        .collect();
    let weights: Vec<i8> = (0..out_ch * 9 * in_ch)
        .map(|i| ((i * 17 + 3) % 251) as i8)
        .collect();
    let bias: Vec<i32> = (0..out_ch).map(|i| (i as i32 * 37) - 200).collect();
    (
        params,
        ChannelScales::PerTensor(scale),
        QuantizedTensor::new(input, Shape::new(1, side, side, in_ch), 12).expect("sized"),
        QuantizedTensor::new(weights, Shape::new(out_ch, 3, 3, in_ch), 0).expect("sized"),
        bias,
    )
}

fn bench_convolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("convolve");
    for side in [8usize, 16, 32] {
        let (params, scales, input, weights, bias) = conv_workload(side, 8, 16);
        group.throughput(Throughput::Elements((side * side * 16) as u64));
        group.bench_with_input(BenchmarkId::new("3x3", side), &side, |b, _| {
            b.iter(|| {
                convolve(
                    black_box(&params),
                    black_box(&scales),
                    black_box(&input),
                    black_box(&weights),
                    &bias,
                )
                .expect("kernel runs")
            });
        });
    }
    group.finish();
}

fn bench_builtin_cases(c: &mut Criterion) {
    let registry = Registry::builtin().expect("fixtures load");
    let mut group = c.benchmark_group("builtin_cases");
    for name in ["conv_4", "depthwise_out_activation", "svdf_2"] {
        let case = registry.get(name).expect("case registered");
        group.bench_function(name, |b| {
            b.iter(|| run_case(black_box(case)).expect("case runs"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_convolve, bench_builtin_cases);
criterion_main!(benches);
