//! 2D convolution reference kernel
//!
//! Computes, for every output element:
//!
//! ```text
//! out[b, oy, ox, oc] = clamp(
//!     requantize(sum over ky, kx, ic of
//!         (input[b, iy, ix, ic] + input_offset)
//!         * (weight[oc, ky, kx, ic] + weight_offset)
//!         + bias[oc],
//!       scale[oc])
//!     + output_offset)
//! ```
//!
//! with `iy = oy*stride_h - pad_h + ky` (and `ix` analogously); taps whose
//! `iy`/`ix` fall outside the input contribute zero (implicit zero
//! padding). Requantization parameters are selected by output channel.

use crate::error::{ExactoError, ExactoResult};
use crate::kernels::{clamp_to_output, output_extent, ConvParams};
use crate::quant::ChannelScales;
use crate::tensor::{QuantizedTensor, Shape};

/// Run the convolution kernel
///
/// Weights are laid out `[out_ch, filter_h, filter_w, in_ch]`; the weight
/// tensor's `batches` extent is the output channel count. Bias is one i32
/// per output channel.
///
/// # Errors
///
/// Any shape, length, or scale inconsistency is a configuration error
/// raised before arithmetic starts.
pub fn convolve(
    params: &ConvParams,
    scales: &ChannelScales,
    input: &QuantizedTensor,
    weights: &QuantizedTensor,
    bias: &[i32],
) -> ExactoResult<QuantizedTensor> {
    params.validate()?;
    let in_shape = input.shape();
    let w_shape = weights.shape();
    let out_ch = w_shape.batches;
    if w_shape.channels != in_shape.channels {
        return Err(ExactoError::config(format!(
            "weight tensor expects {} input channels, input has {}",
            w_shape.channels, in_shape.channels
        )));
    }
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
                for oc in 0..out_ch {
                    let mut acc = bias[oc];
                    for ky in 0..w_shape.height {
                        let iy = (oy * params.stride_h + ky) as isize - params.pad_h as isize;
                        if iy < 0 || iy >= in_shape.height as isize {
                            continue;
                        }
                        for kx in 0..w_shape.width {
                            let ix = (ox * params.stride_w + kx) as isize - params.pad_w as isize;
                            if ix < 0 || ix >= in_shape.width as isize {
                                continue;
                            }
                            for ic in 0..in_shape.channels {
                                let x = input.value_at(b, iy as usize, ix as usize, ic);
                                let w = weights.value_at(oc, ky, kx, ic);
                                acc += x * w;
                            }
                        }
                    }
                    let v = scales.for_channel(oc).requantize(acc) + params.output_offset;
                    out.push(clamp_to_output(v, params.act_min, params.act_max));
                }
            }
        }
    }
    QuantizedTensor::new(out, out_shape, params.output_offset)
}
