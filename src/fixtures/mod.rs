//! Compiled-in conformance fixtures
//!
//! Each submodule holds the literal configuration and buffer data for one
//! case; this module turns that data into strongly-typed [`TestCase`]
//! values. Shape-vs-config consistency is validated during construction,
//! so a mismatched fixture is a configuration error at load time rather
//! than an out-of-bounds read inside a kernel.
//!
//! The data modules are produced by `scripts/generate_fixtures.py`, which
//! simulates the same integer pipeline the kernels implement.

mod avgpool_1;
mod conv_2;
mod conv_4;
mod conv_kernel1x1;
mod depthwise_mult;
mod depthwise_out_activation;
mod fully_connected;
mod maxpool_1;
mod svdf_1;
mod svdf_2;

use crate::error::ExactoResult;
use crate::harness::{KernelSpec, TestCase};
use crate::kernels::{ConvParams, FullyConnectedParams, PoolParams, SvdfParams};
use crate::quant::{ChannelScales, RequantScale};
use crate::tensor::{QuantizedTensor, Shape};

/// Build one conv or depthwise case from a data module's constants.
macro_rules! conv_like_case {
    ($name:literal, $data:ident, $variant:ident, $weight_shape:expr) => {{
        let input_shape = Shape::from_array($data::INPUT_SHAPE);
        let input =
            QuantizedTensor::new($data::INPUT.to_vec(), input_shape, $data::INPUT_OFFSET)?;
        let weights = QuantizedTensor::new($data::WEIGHTS.to_vec(), $weight_shape, 0)?;
        TestCase::new(
            $name,
            KernelSpec::$variant {
                params: ConvParams {
                    stride_h: $data::STRIDE[0],
                    stride_w: $data::STRIDE[1],
                    pad_h: $data::PAD[0],
                    pad_w: $data::PAD[1],
                    output_offset: $data::OUTPUT_OFFSET,
                    act_min: $data::ACT_MIN,
                    act_max: $data::ACT_MAX,
                },
                scales: ChannelScales::per_channel(&$data::OUTPUT_MULT, &$data::OUTPUT_SHIFT)?,
                input,
                weights,
                bias: $data::BIAS.to_vec(),
            },
            $data::OUTPUT_REF.to_vec(),
        )
    }};
}

/// Build one SVDF sequence case from a data module's constants.
macro_rules! svdf_case {
    ($name:literal, $data:ident) => {
        TestCase::new(
            $name,
            KernelSpec::Svdf {
                params: SvdfParams {
                    rank: $data::RANK,
                    input_size: $data::INPUT_SIZE,
                    units: $data::UNITS,
                    memory_size: $data::MEMORY_SIZE,
                    input_offset: $data::INPUT_OFFSET,
                    output_offset: $data::OUTPUT_OFFSET,
                    state_scale: RequantScale::new($data::STATE_MULT, $data::STATE_SHIFT)?,
                    output_scale: RequantScale::new($data::OUTPUT_MULT, $data::OUTPUT_SHIFT)?,
                    act_min: $data::ACT_MIN,
                    act_max: $data::ACT_MAX,
                },
                frames: $data::INPUT_SEQUENCE.to_vec(),
                time_steps: $data::TIME_STEPS,
                feature_weights: $data::FEATURE_WEIGHTS.to_vec(),
                time_weights: $data::TIME_WEIGHTS.to_vec(),
                bias: $data::BIAS.to_vec(),
            },
            $data::OUTPUT_REF.to_vec(),
        )
    };
}

/// Build one pooling case from a data module's constants.
macro_rules! pool_case {
    ($name:literal, $data:ident, $variant:ident) => {{
        let input_shape = Shape::from_array($data::INPUT_SHAPE);
        let input =
            QuantizedTensor::new($data::INPUT.to_vec(), input_shape, $data::INPUT_OFFSET)?;
        TestCase::new(
            $name,
            KernelSpec::$variant {
                params: PoolParams {
                    filter_h: $data::FILTER[0],
                    filter_w: $data::FILTER[1],
                    stride_h: $data::STRIDE[0],
                    stride_w: $data::STRIDE[1],
                    pad_h: $data::PAD[0],
                    pad_w: $data::PAD[1],
                    act_min: $data::ACT_MIN,
                    act_max: $data::ACT_MAX,
                },
                input,
            },
            $data::OUTPUT_REF.to_vec(),
        )
    }};
}

/// All compiled-in cases, in registration order
///
/// # Errors
///
/// Any self-inconsistent fixture fails the whole load; the registry is
/// either fully valid or not built.
pub(crate) fn all_cases() -> ExactoResult<Vec<TestCase>> {
    Ok(vec![
        conv_like_case!(
            "conv_4",
            conv_4,
            Conv,
            Shape::new(
                conv_4::OUT_CH,
                conv_4::FILTER[0],
                conv_4::FILTER[1],
                conv_4::INPUT_SHAPE[3]
            )
        )?,
        conv_like_case!(
            "conv_kernel1x1",
            conv_kernel1x1,
            Conv,
            Shape::new(
                conv_kernel1x1::OUT_CH,
                conv_kernel1x1::FILTER[0],
                conv_kernel1x1::FILTER[1],
                conv_kernel1x1::INPUT_SHAPE[3]
            )
        )?,
        conv_like_case!(
            "conv_2",
            conv_2,
            Conv,
            Shape::new(
                conv_2::OUT_CH,
                conv_2::FILTER[0],
                conv_2::FILTER[1],
                conv_2::INPUT_SHAPE[3]
            )
        )?,
        conv_like_case!(
            "depthwise_out_activation",
            depthwise_out_activation,
            Depthwise,
            Shape::new(
                1,
                depthwise_out_activation::FILTER[0],
                depthwise_out_activation::FILTER[1],
                depthwise_out_activation::INPUT_SHAPE[3] * depthwise_out_activation::CH_MULT
            )
        )?,
        conv_like_case!(
            "depthwise_mult",
            depthwise_mult,
            Depthwise,
            Shape::new(
                1,
                depthwise_mult::FILTER[0],
                depthwise_mult::FILTER[1],
                depthwise_mult::INPUT_SHAPE[3] * depthwise_mult::CH_MULT
            )
        )?,
        fully_connected_case()?,
        pool_case!("avgpool_1", avgpool_1, AvgPool)?,
        pool_case!("maxpool_1", maxpool_1, MaxPool)?,
        svdf_case!("svdf_1", svdf_1)?,
        svdf_case!("svdf_2", svdf_2)?,
    ])
}

fn fully_connected_case() -> ExactoResult<TestCase> {
    use fully_connected as d;
    let input = QuantizedTensor::new(
        d::INPUT.to_vec(),
        Shape::new(d::BATCHES, 1, 1, d::ACCUM_DEPTH),
        d::INPUT_OFFSET,
    )?;
    let weights = QuantizedTensor::new(
        d::WEIGHTS.to_vec(),
        Shape::new(d::OUT_CH, 1, 1, d::ACCUM_DEPTH),
        d::WEIGHT_OFFSET,
    )?;
    TestCase::new(
        "fully_connected",
        KernelSpec::FullyConnected {
            params: FullyConnectedParams {
                output_offset: d::OUTPUT_OFFSET,
                act_min: d::ACT_MIN,
                act_max: d::ACT_MAX,
            },
            scale: RequantScale::new(d::OUTPUT_MULT, d::OUTPUT_SHIFT)?,
            input,
            weights,
            bias: d::BIAS.to_vec(),
        },
        d::OUTPUT_REF.to_vec(),
    )
}
