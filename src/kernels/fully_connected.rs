//! Fully connected reference kernel
//!
//! A batched vector-matrix product over the flattened input with per-tensor
//! requantization. Unlike the convolution kernels, the weight zero-point is
//! commonly nonzero here (asymmetric weight quantization), which the weight
//! tensor's offset carries.

use crate::error::{ExactoError, ExactoResult};
use crate::kernels::{clamp_to_output, validate_activation};
use crate::quant::RequantScale;
use crate::tensor::{QuantizedTensor, Shape};

/// Output-side parameters for the fully connected kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullyConnectedParams {
    /// Zero-point offset added after requantization
    pub output_offset: i32,
    /// Inclusive lower activation bound
    pub act_min: i32,
    /// Inclusive upper activation bound
    pub act_max: i32,
}

/// Run the fully connected kernel
///
/// The input is `[batches, accum_depth]` (stored as a `[b, 1, 1, depth]`
/// tensor) and weights are `[out_ch, accum_depth]` (stored
/// `[out_ch, 1, 1, depth]`). Output is `[batches, out_ch]`.
///
/// # Errors
///
/// Depth or bias length mismatches and an empty activation range are
/// configuration errors.
pub fn fully_connected(
    params: &FullyConnectedParams,
    scale: &RequantScale,
    input: &QuantizedTensor,
    weights: &QuantizedTensor,
    bias: &[i32],
) -> ExactoResult<QuantizedTensor> {
    validate_activation(params.act_min, params.act_max)?;
    let in_shape = input.shape();
    let w_shape = weights.shape();
    let depth = in_shape.height * in_shape.width * in_shape.channels;
    let w_depth = w_shape.height * w_shape.width * w_shape.channels;
    let out_ch = w_shape.batches;
    if depth != w_depth {
        return Err(ExactoError::config(format!(
            "input accumulation depth {depth} does not match weight depth {w_depth}"
        )));
    }
    if bias.len() != out_ch {
        return Err(ExactoError::config(format!(
            "bias holds {} values for {} output channels",
            bias.len(),
            out_ch
        )));
    }

    let in_data = input.data();
    let w_data = weights.data();
    let mut out = Vec::with_capacity(in_shape.batches * out_ch);
    for b in 0..in_shape.batches {
        for oc in 0..out_ch {
            let mut acc = bias[oc];
            for d in 0..depth {
                let x = i32::from(in_data[b * depth + d]) + input.offset();
                let w = i32::from(w_data[oc * depth + d]) + weights.offset();
                acc += x * w;
            }
            let v = scale.requantize(acc) + params.output_offset;
            out.push(clamp_to_output(v, params.act_min, params.act_max));
        }
    }
    QuantizedTensor::new(
        out,
        Shape::new(in_shape.batches, 1, 1, out_ch),
        params.output_offset,
    )
}
