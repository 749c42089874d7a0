//! Case `maxpool_1`: 2x2 max pool with an asymmetric activation clamp.
//!
//! Generated by scripts/generate_fixtures.py; do not edit by hand.

pub const INPUT_SHAPE: [usize; 4] = [
    1, 4, 4, 4,
];

pub const FILTER: [usize; 2] = [
    2, 2,
];

pub const STRIDE: [usize; 2] = [
    2, 2,
];

pub const PAD: [usize; 2] = [
    0, 0,
];

pub const INPUT_OFFSET: i32 = 0;

pub const ACT_MIN: i32 = -112;

pub const ACT_MAX: i32 = 107;

pub const INPUT: [i8; 64] = [
    -20, 19, 65, 112, -113, 108, -86, -39, 113, -50, -39, 81, -80, -119,
    2, 58, 98, 80, 70, -90, 92, 82, 79, -34, 54, 112, -83, 62,
    120, 17, 38, -92, 13, 121, -25, 49, 100, 35, -126, 65, 112, 18,
    -32, 76, -114, 95, -71, 35, 73, -126, 115, -99, -97, -65, -36, -43,
    -50, 103, 91, -101, -80, 14, -59, 8,
];

pub const OUTPUT_REF: [i8; 16] = [
    98, 107, 79, 107, 107, 107, 38, 81, 100, 107, 107, 65, 107, 103,
    91, 76,
];
