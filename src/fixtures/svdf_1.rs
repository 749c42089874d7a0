//! Case `svdf_1`: rank-1 SVDF, 3-wide frames, 4 time steps, memory 3.
//!
//! Generated by scripts/generate_fixtures.py; do not edit by hand.

pub const UNITS: usize = 2;

pub const RANK: usize = 1;

pub const MEMORY_SIZE: usize = 3;

pub const INPUT_SIZE: usize = 3;

pub const TIME_STEPS: usize = 4;

pub const INPUT_OFFSET: i32 = 4;

pub const OUTPUT_OFFSET: i32 = -11;

pub const ACT_MIN: i32 = -128;

pub const ACT_MAX: i32 = 127;

pub const STATE_MULT: i32 = 1474901329;

pub const STATE_SHIFT: i32 = -5;

pub const OUTPUT_MULT: i32 = 1181660678;

pub const OUTPUT_SHIFT: i32 = -6;

pub const INPUT_SEQUENCE: [i8; 12] = [
    44, 57, 48, -9, -15, -102, -19, -74, -97, -56, -10, 56,
];

pub const FEATURE_WEIGHTS: [i8; 6] = [
    -42, -11, 42, 82, -32, -16,
];

pub const TIME_WEIGHTS: [i8; 6] = [
    -35, -24, 73, -15, 77, -70,
];

pub const BIAS: [i32; 2] = [
    54, -193,
];

pub const OUTPUT_REF: [i8; 8] = [
    -17, -28, -59, -15, -24, -27, 89, 84,
];
