//! Average and max pooling reference kernels
//!
//! Pooling stays in the input's quantized domain, so there is no
//! requantization and the output keeps the input's zero-point. Padding
//! positions are excluded: the average divides by the count of in-bounds
//! elements and the max ignores out-of-bounds taps entirely.

use crate::error::{ExactoError, ExactoResult};
use crate::kernels::{clamp_to_output, output_extent, validate_activation};
use crate::tensor::{QuantizedTensor, Shape};

/// Window, stride, padding, and activation parameters for pooling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolParams {
    /// Window height
    pub filter_h: usize,
    /// Window width
    pub filter_w: usize,
    /// Vertical stride
    pub stride_h: usize,
    /// Horizontal stride
    pub stride_w: usize,
    /// Implicit padding above and below
    pub pad_h: usize,
    /// Implicit padding left and right
    pub pad_w: usize,
    /// Inclusive lower activation bound
    pub act_min: i32,
    /// Inclusive upper activation bound
    pub act_max: i32,
}

impl PoolParams {
    fn validate(&self) -> ExactoResult<()> {
        if self.stride_h == 0 || self.stride_w == 0 {
            return Err(ExactoError::config("stride must be positive"));
        }
        validate_activation(self.act_min, self.act_max)
    }
}

/// Average pooling; the window sum is divided by the in-bounds element
/// count, rounding half away from zero
///
/// # Errors
///
/// Invalid window or stride configurations are configuration errors.
pub fn avg_pool(params: &PoolParams, input: &QuantizedTensor) -> ExactoResult<QuantizedTensor> {
    pool(params, input, false)
}

/// Max pooling over in-bounds window elements
///
/// # Errors
///
/// Invalid window or stride configurations are configuration errors.
pub fn max_pool(params: &PoolParams, input: &QuantizedTensor) -> ExactoResult<QuantizedTensor> {
    pool(params, input, true)
}

fn pool(
    params: &PoolParams,
    input: &QuantizedTensor,
    take_max: bool,
) -> ExactoResult<QuantizedTensor> {
    params.validate()?;
    let in_shape = input.shape();
    let out_h = output_extent(in_shape.height, params.pad_h, params.filter_h, params.stride_h)?;
    let out_w = output_extent(in_shape.width, params.pad_w, params.filter_w, params.stride_w)?;
    let out_shape = Shape::new(in_shape.batches, out_h, out_w, in_shape.channels);
    let data = input.data();

    let mut out = Vec::with_capacity(out_shape.len());
    for b in 0..in_shape.batches {
        for oy in 0..out_h {
            for ox in 0..out_w {
                for c in 0..in_shape.channels {
                    let mut sum: i32 = 0;
                    let mut max: i32 = i32::MIN;
                    let mut count: i32 = 0;
                    for ky in 0..params.filter_h {
                        let iy = (oy * params.stride_h + ky) as isize - params.pad_h as isize;
                        if iy < 0 || iy >= in_shape.height as isize {
                            continue;
                        }
                        for kx in 0..params.filter_w {
                            let ix =
                                (ox * params.stride_w + kx) as isize - params.pad_w as isize;
                            if ix < 0 || ix >= in_shape.width as isize {
                                continue;
                            }
                            let idx = in_shape.index(b, iy as usize, ix as usize, c);
                            let x = i32::from(data[idx]);
                            sum += x;
                            max = max.max(x);
                            count += 1;
                        }
                    }
                    if count == 0 {
                        return Err(ExactoError::config(
                            "pooling window has no in-bounds elements",
                        ));
                    }
                    let v = if take_max {
                        max
                    } else if sum > 0 {
                        (sum + count / 2) / count
                    } else {
                        (sum - count / 2) / count
                    };
                    out.push(clamp_to_output(v, params.act_min, params.act_max));
                }
            }
        }
    }
    QuantizedTensor::new(out, out_shape, input.offset())
}
