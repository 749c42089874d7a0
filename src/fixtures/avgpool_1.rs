//! Case `avgpool_1`: full-frame average pool over a 5x9x3 input.
//!
//! Generated by scripts/generate_fixtures.py; do not edit by hand.

pub const INPUT_SHAPE: [usize; 4] = [
    1, 5, 9, 3,
];

pub const FILTER: [usize; 2] = [
    5, 9,
];

pub const STRIDE: [usize; 2] = [
    2, 1,
];

pub const PAD: [usize; 2] = [
    0, 0,
];

pub const INPUT_OFFSET: i32 = 0;

pub const ACT_MIN: i32 = -128;

pub const ACT_MAX: i32 = 127;

pub const INPUT: [i8; 135] = [
    -78, 88, -13, -32, 69, 58, 90, -9, -89, -64, -89, 84, -12, 83,
    101, -120, -20, 76, 6, 9, -88, -123, -8, -34, -27, -84, 13, -117,
    -41, -78, 49, -47, 121, 12, 24, -83, -93, 117, -7, 7, -3, -49,
    52, 28, 100, 74, -100, 11, -104, 14, 113, 116, 84, 71, -120, -76,
    13, -20, 99, -116, -74, -29, -120, -73, -46, -27, 39, -55, -15, -6,
    122, 124, -94, 29, 14, 13, -110, 112, -39, -14, 28, -87, -21, 66,
    -100, 36, 21, -55, -75, -32, 85, -52, -101, 55, 26, 76, -23, -52,
    28, 103, 9, 103, 110, -99, -107, 80, -72, -12, -45, -62, 62, 74,
    -52, 76, 61, -85, 111, -95, 89, 36, -68, -88, -89, 49, 59, -120,
    -47, 127, -104, -67, -86, 87, 48, 25, -50,
];

pub const OUTPUT_REF: [i8; 3] = [
    -15, -8, 8,
];
