//! Reference kernels for int8 quantized inference
//!
//! Every kernel is a pure function over immutable inputs producing a
//! freshly-owned output tensor (the SVDF state buffer being the one
//! documented exception). All arithmetic is exact integer math: no kernel
//! has a floating intermediate, so results are bit-identical across loop
//! orders, tilings, and vectorization strategies.
//!
//! Saturation to the 8-bit output range is defined, correct behavior,
//! never an error. Configuration problems (zero-sized filter, mismatched
//! buffer lengths, invalid activation range) are rejected before any
//! arithmetic executes.

pub mod conv;
pub mod depthwise;
pub mod fully_connected;
pub mod pooling;
pub mod svdf;

pub use conv::convolve;
pub use depthwise::depthwise_convolve;
pub use fully_connected::{fully_connected, FullyConnectedParams};
pub use pooling::{avg_pool, max_pool, PoolParams};
pub use svdf::{svdf_step, SvdfParams, SvdfState};

use crate::error::{ExactoError, ExactoResult};

/// Stride, padding, and output-side parameters shared by the convolution
/// and depthwise convolution kernels
///
/// Filter extents and channel counts come from the weight tensor's shape;
/// zero-point offsets come from the input and weight tensors themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvParams {
    /// Vertical stride
    pub stride_h: usize,
    /// Horizontal stride
    pub stride_w: usize,
    /// Implicit zero padding above and below
    pub pad_h: usize,
    /// Implicit zero padding left and right
    pub pad_w: usize,
    /// Zero-point offset added after requantization
    pub output_offset: i32,
    /// Inclusive lower activation bound
    pub act_min: i32,
    /// Inclusive upper activation bound
    pub act_max: i32,
}

impl ConvParams {
    pub(crate) fn validate(&self) -> ExactoResult<()> {
        if self.stride_h == 0 || self.stride_w == 0 {
            return Err(ExactoError::config("stride must be positive"));
        }
        validate_activation(self.act_min, self.act_max)
    }
}

/// Check an activation range: non-empty and intersecting the int8 range
pub(crate) fn validate_activation(act_min: i32, act_max: i32) -> ExactoResult<()> {
    if act_min > act_max {
        return Err(ExactoError::config(format!(
            "activation range [{act_min}, {act_max}] is empty"
        )));
    }
    if act_min > i32::from(i8::MAX) || act_max < i32::from(i8::MIN) {
        return Err(ExactoError::config(format!(
            "activation range [{act_min}, {act_max}] does not intersect the int8 range"
        )));
    }
    Ok(())
}

/// Output spatial extent: `floor((input + 2*pad - filter) / stride) + 1`
///
/// # Errors
///
/// Zero-sized filters and filters larger than the padded input are
/// configuration errors.
pub(crate) fn output_extent(
    input: usize,
    pad: usize,
    filter: usize,
    stride: usize,
) -> ExactoResult<usize> {
    if filter == 0 {
        return Err(ExactoError::config("filter extent must be positive"));
    }
    let padded = input + 2 * pad;
    if filter > padded {
        return Err(ExactoError::config(format!(
            "filter extent {filter} exceeds padded input extent {padded}"
        )));
    }
    Ok((padded - filter) / stride + 1)
}

/// Clamp a requantized value to the activation range intersected with the
/// int8 range; the tighter bound governs
pub(crate) fn clamp_to_output(value: i32, act_min: i32, act_max: i32) -> i8 {
    value.clamp(act_min.max(i32::from(i8::MIN)), act_max.min(i32::from(i8::MAX))) as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_extent_shape_law() {
        // floor((5 + 0 - 3) / 2) + 1 = 2
        assert_eq!(output_extent(5, 0, 3, 2).expect("valid"), 2);
        // floor((6 + 2 - 3) / 1) + 1 = 6 (SAME padding)
        assert_eq!(output_extent(6, 1, 3, 1).expect("valid"), 6);
        assert_eq!(output_extent(1, 0, 1, 1).expect("valid"), 1);
    }

    #[test]
    fn test_output_extent_rejects_zero_filter() {
        assert!(output_extent(5, 0, 0, 1).is_err());
    }

    #[test]
    fn test_output_extent_rejects_oversized_filter() {
        assert!(output_extent(3, 0, 5, 1).is_err());
        // Padding can make an otherwise oversized filter fit
        assert!(output_extent(3, 1, 5, 1).is_ok());
    }

    #[test]
    fn test_conv_params_validation() {
        let good = ConvParams {
            stride_h: 1,
            stride_w: 1,
            pad_h: 0,
            pad_w: 0,
            output_offset: 0,
            act_min: -128,
            act_max: 127,
        };
        assert!(good.validate().is_ok());
        assert!(ConvParams { stride_w: 0, ..good }.validate().is_err());
        assert!(ConvParams {
            act_min: 10,
            act_max: -10,
            ..good
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_clamp_tighter_bound_governs() {
        assert_eq!(clamp_to_output(500, -45, 103), 103);
        assert_eq!(clamp_to_output(-500, -45, 103), -45);
        assert_eq!(clamp_to_output(50, -45, 103), 50);
        // Int8 saturation governs when the activation range is wider
        assert_eq!(clamp_to_output(500, -1000, 1000), 127);
        assert_eq!(clamp_to_output(-500, -1000, 1000), -128);
    }
}
