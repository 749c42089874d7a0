//! Case `conv_2`: 3x6x2 input, 3x3 filter, stride 1, SAME padding.
//!
//! Generated by scripts/generate_fixtures.py; do not edit by hand.

pub const INPUT_SHAPE: [usize; 4] = [
    1, 3, 6, 2,
];

pub const OUT_CH: usize = 4;

pub const FILTER: [usize; 2] = [
    3, 3,
];

pub const STRIDE: [usize; 2] = [
    1, 1,
];

pub const PAD: [usize; 2] = [
    1, 1,
];

pub const INPUT_OFFSET: i32 = 128;

pub const OUTPUT_OFFSET: i32 = -3;

pub const ACT_MIN: i32 = -126;

pub const ACT_MAX: i32 = 127;

pub const INPUT: [i8; 36] = [
    -33, 8, -11, -45, -16, -27, -46, -83, -104, -28, -14, 91, 100, 7,
    87, -102, 60, -21, 118, -69, 28, 107, 119, -7, -70, 108, 32, 29,
    -42, -29, 114, -55, -16, 5, -17, 49,
];

pub const WEIGHTS: [i8; 72] = [
    55, -8, 40, -3, -62, -36, -5, -52, -4, -25, -28, 15, -32, 13,
    -55, 47, 39, -15, -58, 18, 49, 4, 12, -48, 55, -32, -7, 10,
    16, 49, 14, -12, -63, -29, 5, -10, 9, 15, -38, -6, 27, 42,
    -63, 10, -54, -9, -30, 14, -22, 12, 48, 59, 44, -33, -29, 36,
    -61, -4, 59, 2, -59, -38, 47, -16, -21, 31, 49, 46, 52, -29,
    -18, -52,
];

pub const BIAS: [i32; 4] = [
    13166, -2856, -572, -1382,
];

pub const OUTPUT_MULT: [i32; 4] = [
    1688816452, 1311781768, 1585723189, 1312066382,
];

pub const OUTPUT_SHIFT: [i32; 4] = [
    -7, -7, -7, -7,
];

pub const OUTPUT_REF: [i8; 72] = [
    53, -68, 102, 15, -58, -42, -9, 53, 0, -36, 19, 10, -40, -61,
    1, 17, 65, -4, 87, 3, -52, -113, 50, 107, 47, -37, 0, -54,
    -6, -29, -34, 3, 57, 29, -80, -29, -17, -32, -42, 22, -113, -9,
    -71, -29, 3, -39, -69, -15, -7, 104, -67, -16, -6, -20, -48, -56,
    -21, 28, -102, -97, 26, -3, -75, -29, 15, 53, -93, -64, 102, 34,
    -113, -109,
];
