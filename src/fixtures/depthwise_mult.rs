//! Case `depthwise_mult`: 4x4x2 input, channel multiplier 2.
//!
//! Generated by scripts/generate_fixtures.py; do not edit by hand.

pub const INPUT_SHAPE: [usize; 4] = [
    1, 4, 4, 2,
];

pub const CH_MULT: usize = 2;

pub const FILTER: [usize; 2] = [
    2, 2,
];

pub const STRIDE: [usize; 2] = [
    1, 1,
];

pub const PAD: [usize; 2] = [
    0, 0,
];

pub const INPUT_OFFSET: i32 = 7;

pub const OUTPUT_OFFSET: i32 = 0;

pub const ACT_MIN: i32 = -128;

pub const ACT_MAX: i32 = 127;

pub const INPUT: [i8; 32] = [
    -66, 30, -19, 106, 23, 105, -88, 94, -14, -111, -22, -82, -20, -2,
    21, 117, 70, 126, 88, -2, -97, 53, -105, 69, -86, 125, -79, -49,
    37, -9, -3, 29,
];

pub const WEIGHTS: [i8; 16] = [
    26, -42, 78, 90, -41, -43, -18, 87, 97, 16, 3, 80, 26, -1,
    60, 88,
];

pub const BIAS: [i32; 4] = [
    1073, -257, -4076, -12886,
];

pub const OUTPUT_MULT: [i32; 4] = [
    1293155836, 1724256944, 1468222286, 1709149837,
];

pub const OUTPUT_SHIFT: [i32; 4] = [
    -6, -6, -6, -7,
];

pub const OUTPUT_REF: [i8; 36] = [
    -10, 33, -86, -91, -21, -16, 30, 9, 44, 22, 110, 108, 108, 23,
    -108, -110, 76, 32, -68, -84, -110, -28, -13, 61, -97, -110, 44, 40,
    13, -20, -54, -67, 67, 106, 15, 13,
];
