//! Case `depthwise_out_activation`: 5x6x3 input, 4x3 filter, stride 2, output clamp [-45, 103].
//!
//! Generated by scripts/generate_fixtures.py; do not edit by hand.

pub const INPUT_SHAPE: [usize; 4] = [
    1, 5, 6, 3,
];

pub const CH_MULT: usize = 1;

pub const FILTER: [usize; 2] = [
    4, 3,
];

pub const STRIDE: [usize; 2] = [
    2, 2,
];

pub const PAD: [usize; 2] = [
    0, 0,
];

pub const INPUT_OFFSET: i32 = 128;

pub const OUTPUT_OFFSET: i32 = 127;

pub const ACT_MIN: i32 = -45;

pub const ACT_MAX: i32 = 103;

pub const INPUT: [i8; 90] = [
    24, -104, -112, 14, -56, -46, 81, -14, 93, 56, -109, -52, 74, -125,
    -127, -46, 113, -49, 79, -111, -72, -105, 94, 5, -21, 82, -100, 33,
    -8, 23, -6, -34, -114, 40, 61, -64, -50, 113, -114, -121, -55, -29,
    99, -37, 85, 63, 41, -64, -38, 77, 70, -13, -7, 71, -35, -73,
    69, -119, 59, 6, 56, 46, -50, 102, -127, -15, 29, -44, -14, -1,
    109, -85, -53, -127, -32, 47, -105, -50, -92, -34, -90, 11, -103, 30,
    -57, 19, -68, -50, -52, 26,
];

pub const WEIGHTS: [i8; 36] = [
    2, -14, 38, -17, 4, -80, 1, -45, -37, -78, 16, -41, -39, 80,
    75, -51, -74, 59, -25, 64, 20, 48, -17, -6, 75, 45, -23, 18,
    14, 41, -71, -26, 15, 37, 49, -76,
];

pub const BIAS: [i32; 3] = [
    3289, -24888, -12590,
];

pub const OUTPUT_MULT: [i32; 3] = [
    1648636659, 1999112051, 1235238092,
];

pub const OUTPUT_SHIFT: [i32; 3] = [
    -6, -5, -6,
];

pub const OUTPUT_REF: [i8; 6] = [
    103, -14, -39, -45, 74, 93,
];
