//! Case `fully_connected`: 3 batches, accumulation depth 20, 6 units, asymmetric input and weight offsets.
//!
//! Generated by scripts/generate_fixtures.py; do not edit by hand.

pub const BATCHES: usize = 3;

pub const ACCUM_DEPTH: usize = 20;

pub const OUT_CH: usize = 6;

pub const INPUT_OFFSET: i32 = 50;

pub const WEIGHT_OFFSET: i32 = 22;

pub const OUTPUT_OFFSET: i32 = -2;

pub const ACT_MIN: i32 = -128;

pub const ACT_MAX: i32 = 127;

pub const OUTPUT_MULT: i32 = 1936100771;

pub const OUTPUT_SHIFT: i32 = -9;

pub const INPUT: [i8; 60] = [
    -127, 77, -63, 108, 115, 3, -21, 122, 44, -9, 7, -30, -105, -106,
    -122, -109, 56, 8, 59, 64, 46, 66, 40, 18, 95, 99, 18, 90,
    22, 30, -10, -69, 63, 11, -21, -124, -127, -20, 7, 69, -126, 107,
    85, 109, 47, 77, 115, 102, -117, 37, -108, 8, -49, 81, -61, -29,
    -106, 16, 25, 94,
];

pub const WEIGHTS: [i8; 120] = [
    10, 38, -20, 72, 97, -18, 88, -64, -4, 83, 62, -24, -93, 39,
    93, -34, 47, -10, -1, -91, -45, -13, 99, 32, -91, -83, 28, 50,
    -23, 97, -41, 62, 100, 93, 79, -93, -68, -89, -42, -3, 4, 0,
    13, 27, -11, 42, 8, 20, 11, -45, -79, -94, 58, 24, -28, 16,
    30, -71, -69, -22, -44, -4, -4, -47, 79, 5, 6, 34, 66, -46,
    -45, -70, 22, -27, -19, -91, 91, -30, 73, -55, 28, 53, 48, 44,
    -76, 36, 25, -3, -29, -64, 90, 90, 79, -63, 17, 56, -36, -13,
    64, -83, -58, 75, -15, -18, 54, 44, 37, -15, -90, 48, -31, 5,
    43, -20, 79, 60, 69, 80, -86, -10,
];

pub const BIAS: [i32; 6] = [
    -390, 1264, 1496, -556, 642, -1403,
];

pub const OUTPUT_REF: [i8; 18] = [
    71, -18, 14, 91, 19, 40, 63, 82, 55, 59, 57, 53, 75, 108,
    48, 20, 56, 98,
];
