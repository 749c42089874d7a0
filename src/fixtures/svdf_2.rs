//! Case `svdf_2`: rank-2 SVDF, 7-wide frames, 6 time steps, memory 4.
//!
//! Generated by scripts/generate_fixtures.py; do not edit by hand.

pub const UNITS: usize = 3;

pub const RANK: usize = 2;

pub const MEMORY_SIZE: usize = 4;

pub const INPUT_SIZE: usize = 7;

pub const TIME_STEPS: usize = 6;

pub const INPUT_OFFSET: i32 = 0;

pub const OUTPUT_OFFSET: i32 = 0;

pub const ACT_MIN: i32 = -128;

pub const ACT_MAX: i32 = 127;

pub const STATE_MULT: i32 = 1817263342;

pub const STATE_SHIFT: i32 = -8;

pub const OUTPUT_MULT: i32 = 1836972647;

pub const OUTPUT_SHIFT: i32 = -6;

pub const INPUT_SEQUENCE: [i8; 42] = [
    -51, 0, -26, 76, -102, -102, -76, 0, -51, -26, -51, -26, 51, 0,
    51, -102, 51, -102, -76, 51, 76, -26, 26, -51, -76, -26, -102, -76,
    -26, 26, 0, 51, 76, 0, 0, 26, -26, 76, -26, 76, 76, 26,
];

pub const FEATURE_WEIGHTS: [i8; 42] = [
    -3, -42, -50, 75, 75, -9, 73, 33, 41, -6, -58, -54, -49, -56,
    -36, -53, 27, -1, -69, -15, -22, 33, -47, 2, 47, 6, 41, 60,
    -76, -86, -22, 14, -67, 90, 10, -18, -35, 71, -73, -84, -49, 30,
];

pub const TIME_WEIGHTS: [i8; 12] = [
    26, 33, -42, -90, -83, 59, 69, -41, 60, 13, 9, -62,
];

pub const BIAS: [i32; 3] = [
    253, -322, 471,
];

pub const OUTPUT_REF: [i8; 18] = [
    -11, -11, -14, 7, -1, -29, 39, -8, -74, -4, 63, 52, -24, -7,
    103, 26, -110, 89,
];
