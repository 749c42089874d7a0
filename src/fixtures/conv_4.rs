//! Case `conv_4`: 3-batch 5x5x3 input, 3x2 filter, stride 2, valid padding.
//!
//! Generated by scripts/generate_fixtures.py; do not edit by hand.

pub const INPUT_SHAPE: [usize; 4] = [
    3, 5, 5, 3,
];

pub const OUT_CH: usize = 3;

pub const FILTER: [usize; 2] = [
    3, 2,
];

pub const STRIDE: [usize; 2] = [
    2, 2,
];

pub const PAD: [usize; 2] = [
    0, 0,
];

pub const INPUT_OFFSET: i32 = 0;

pub const OUTPUT_OFFSET: i32 = 0;

pub const ACT_MIN: i32 = -128;

pub const ACT_MAX: i32 = 127;

pub const INPUT: [i8; 225] = [
    90, -77, 100, 1, -55, 42, 111, 10, -66, -26, 84, -56, 94, 53,
    47, 27, -85, -27, 36, 40, 0, 54, 38, -10, 20, 0, -43, 73,
    25, -30, -59, 71, -24, 0, 71, 20, 64, 20, -68, 113, -65, -12,
    35, 34, 36, 67, 122, 61, -6, 95, -97, -60, -21, 54, -22, -64,
    50, -91, -89, -110, -79, -88, 103, -118, -13, -92, -96, -85, -39, -51,
    -18, 1, 63, -43, -34, -41, -42, -23, 47, -110, -96, -98, 12, -74,
    -79, 64, 115, 125, -103, 73, 61, 16, -37, -59, 7, -128, 105, 120,
    27, -121, 83, 33, -31, 59, -85, 59, -91, 41, -88, -90, -73, -61,
    98, 68, 47, -10, 115, -81, 74, 58, 124, 113, -118, -10, 74, -7,
    86, -53, -60, 36, -70, 42, -62, -121, -89, 106, 60, 114, -123, -42,
    -114, 10, 92, -86, 26, 95, -23, 121, -109, -120, 121, -62, 74, 102,
    -57, -6, -110, -75, 40, -64, 74, 12, 3, -72, -117, 16, 112, 114,
    51, -59, 75, -95, -98, -124, 53, -23, -119, -81, -95, -100, -43, -80,
    -77, -112, 52, 66, 22, -127, 20, 27, -19, 85, 42, -7, -99, 52,
    -107, 125, 44, -67, 29, 68, 64, -103, 43, 66, -97, 53, -97, -115,
    -105, -75, 48, -56, 93, 6, 19, -9, -3, -41, 90, -84, -35, 18,
    39,
];

pub const WEIGHTS: [i8; 54] = [
    -10, -6, -6, 0, 3, -9, 18, 5, 0, -1, -9, -20, 26, -6,
    -13, 12, -6, -1, 11, 22, -26, 17, -17, 6, -24, -8, -28, -11,
    2, 22, -17, 10, 11, -8, -5, -34, -9, 26, 28, -36, 15, -20,
    -9, -10, -16, 32, -21, 26, 17, -8, 24, -31, -4, -17,
];

pub const BIAS: [i32; 3] = [
    1926, 3260, 5232,
];

pub const OUTPUT_MULT: [i32; 3] = [
    1073741824, 1073741824, 1073741824,
];

pub const OUTPUT_SHIFT: [i32; 3] = [
    -9, -9, -9,
];

pub const OUTPUT_REF: [i8; 36] = [
    -2, 2, 2, 8, 0, 1, 1, 3, 7, -2, 11, 0, 8, 4,
    4, 1, -1, -5, 4, 5, 14, 2, 5, 7, -1, -2, 2, 5,
    -4, 11, -1, -2, 8, 4, 2, 0,
];
