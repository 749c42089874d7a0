//! Depthwise 2D convolution reference kernel
//!
//! Same accumulation and requantization contract as the full convolution,
//! but each output channel reads exactly one input channel: output channel
//! `oc` maps to input channel `oc / channel_multiplier`, where the channel
//! multiplier is `out_ch / in_ch`. Weights are laid out
//! `[1, filter_h, filter_w, out_ch]`.

use crate::error::{ExactoError, ExactoResult};
use crate::kernels::{clamp_to_output, output_extent, ConvParams};
use crate::quant::ChannelScales;
use crate::tensor::{QuantizedTensor, Shape};

/// Run the depthwise convolution kernel
///
/// The post-activation clamp in `params` is applied after the output
/// offset is added; the tighter of that clamp and int8 saturation governs
/// the visible output range.
///
/// # Errors
///
/// An output channel count that is not a whole multiple of the input
/// channel count is a configuration error, as are the shape and length
/// mismatches shared with [`convolve`](crate::kernels::convolve).
pub fn depthwise_convolve(
    params: &ConvParams,
    scales: &ChannelScales,
    input: &QuantizedTensor,
    weights: &QuantizedTensor,
    bias: &[i32],
) -> ExactoResult<QuantizedTensor> {
    params.validate()?;
    let in_shape = input.shape();
    let w_shape = weights.shape();
    let out_ch = w_shape.channels;
    if w_shape.batches != 1 {
        return Err(ExactoError::config(format!(
            "depthwise weights must have a single leading extent, got {}",
            w_shape.batches
        )));
    }
    if in_shape.channels == 0 || out_ch % in_shape.channels != 0 {
        return Err(ExactoError::config(format!(
            "{} output channels is not a multiple of {} input channels",
            out_ch, in_shape.channels
        )));
    }
    let ch_mult = out_ch / in_shape.channels;
    if bias.len() != out_ch {
        return Err(ExactoError::config(format!(
            "bias holds {} values for {} output channels",
            bias.len(),
            out_ch
        )));
    }
    scales.validate_channels(out_ch)?;
    let out_h = output_extent(in_shape.height, params.pad_h, w_shape.height, params.stride_h)?;
    let out_w = output_extent(in_shape.width, params.pad_w, w_shape.width, params.stride_w)?;
    let out_shape = Shape::new(in_shape.batches, out_h, out_w, out_ch);

    let mut out = Vec::with_capacity(out_shape.len());
    for b in 0..in_shape.batches {
        for oy in 0..out_h {
            for ox in 0..out_w {
                for ic in 0..in_shape.channels {
                    for m in 0..ch_mult {
                        let oc = ic * ch_mult + m;
                        let mut acc = bias[oc];
                        for ky in 0..w_shape.height {
                            let iy =
                                (oy * params.stride_h + ky) as isize - params.pad_h as isize;
                            if iy < 0 || iy >= in_shape.height as isize {
                                continue;
                            }
                            for kx in 0..w_shape.width {
                                let ix =
                                    (ox * params.stride_w + kx) as isize - params.pad_w as isize;
                                if ix < 0 || ix >= in_shape.width as isize {
                                    continue;
                                }
                                let x = input.value_at(b, iy as usize, ix as usize, ic);
                                let w = weights.value_at(0, ky, kx, oc);
                                acc += x * w;
                            }
                        }
                        let v =
                            scales.for_channel(oc).requantize(acc) + params.output_offset;
                        out.push(clamp_to_output(v, params.act_min, params.act_max));
                    }
                }
            }
        }
    }
    QuantizedTensor::new(out, out_shape, params.output_offset)
}
