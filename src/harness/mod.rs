//! Conformance harness
//!
//! A [`TestCase`] binds one kernel configuration to its input, weight, and
//! bias buffers plus one reference output buffer. [`run_case`] invokes the
//! kernel and compares the produced tensor element-wise against the
//! reference using exact equality: the kernels are defined to be bit-exact,
//! so there is no tolerance window. A mismatch is reported with the first
//! differing index and the maximum absolute difference, and never aborts
//! the remaining cases.
//!
//! Cases own their buffers (and, for SVDF, their own state), so independent
//! cases run in parallel without locking.

mod registry;

pub use registry::Registry;

use serde::Serialize;
use tracing::debug;

use crate::error::{ExactoError, ExactoResult};
use crate::kernels::{
    avg_pool, convolve, depthwise_convolve, fully_connected, max_pool, output_extent, svdf_step,
    ConvParams, FullyConnectedParams, PoolParams, SvdfParams, SvdfState,
};
use crate::quant::{ChannelScales, RequantScale};
use crate::tensor::QuantizedTensor;

/// The kernel invocation a test case exercises
#[derive(Debug, Clone)]
pub enum KernelSpec {
    /// 2D convolution
    Conv {
        /// Stride/padding/output parameters
        params: ConvParams,
        /// Per-channel or per-tensor requantization
        scales: ChannelScales,
        /// Input tensor
        input: QuantizedTensor,
        /// Weights `[out_ch, fh, fw, in_ch]`
        weights: QuantizedTensor,
        /// One i32 bias per output channel
        bias: Vec<i32>,
    },
    /// Depthwise 2D convolution
    Depthwise {
        /// Stride/padding/output parameters
        params: ConvParams,
        /// Per-channel or per-tensor requantization
        scales: ChannelScales,
        /// Input tensor
        input: QuantizedTensor,
        /// Weights `[1, fh, fw, out_ch]`
        weights: QuantizedTensor,
        /// One i32 bias per output channel
        bias: Vec<i32>,
    },
    /// Fully connected layer
    FullyConnected {
        /// Output-side parameters
        params: FullyConnectedParams,
        /// Per-tensor requantization
        scale: RequantScale,
        /// Input `[batches, depth]`
        input: QuantizedTensor,
        /// Weights `[out_ch, depth]`
        weights: QuantizedTensor,
        /// One i32 bias per output channel
        bias: Vec<i32>,
    },
    /// Average pooling
    AvgPool {
        /// Window/stride/activation parameters
        params: PoolParams,
        /// Input tensor
        input: QuantizedTensor,
    },
    /// Max pooling
    MaxPool {
        /// Window/stride/activation parameters
        params: PoolParams,
        /// Input tensor
        input: QuantizedTensor,
    },
    /// SVDF driven over a whole frame sequence
    Svdf {
        /// Kernel configuration
        params: SvdfParams,
        /// Concatenated input frames, `time_steps * input_size` values
        frames: Vec<i8>,
        /// Number of frames in the sequence
        time_steps: usize,
        /// Feature weights `[units * rank, input_size]`
        feature_weights: Vec<i8>,
        /// Time weights `[units, memory_size]`
        time_weights: Vec<i8>,
        /// One i32 bias per unit
        bias: Vec<i32>,
    },
}

impl KernelSpec {
    /// Output element count implied by the configuration
    ///
    /// # Errors
    ///
    /// Propagates the shape-law validation of the underlying kernel.
    pub fn output_len(&self) -> ExactoResult<usize> {
        match self {
            Self::Conv {
                params,
                input,
                weights,
                ..
            } => {
                let out_h = output_extent(
                    input.shape().height,
                    params.pad_h,
                    weights.shape().height,
                    params.stride_h,
                )?;
                let out_w = output_extent(
                    input.shape().width,
                    params.pad_w,
                    weights.shape().width,
                    params.stride_w,
                )?;
                Ok(input.shape().batches * out_h * out_w * weights.shape().batches)
            }
            Self::Depthwise {
                params,
                input,
                weights,
                ..
            } => {
                let out_h = output_extent(
                    input.shape().height,
                    params.pad_h,
                    weights.shape().height,
                    params.stride_h,
                )?;
                let out_w = output_extent(
                    input.shape().width,
                    params.pad_w,
                    weights.shape().width,
                    params.stride_w,
                )?;
                Ok(input.shape().batches * out_h * out_w * weights.shape().channels)
            }
            Self::FullyConnected { input, weights, .. } => {
                Ok(input.shape().batches * weights.shape().batches)
            }
            Self::AvgPool { params, input } | Self::MaxPool { params, input } => {
                let out_h = output_extent(
                    input.shape().height,
                    params.pad_h,
                    params.filter_h,
                    params.stride_h,
                )?;
                let out_w = output_extent(
                    input.shape().width,
                    params.pad_w,
                    params.filter_w,
                    params.stride_w,
                )?;
                Ok(input.shape().batches * out_h * out_w * input.shape().channels)
            }
            Self::Svdf {
                params, time_steps, ..
            } => Ok(time_steps * params.units),
        }
    }
}

/// One immutable conformance case, used exactly once per comparison run
#[derive(Debug, Clone)]
pub struct TestCase {
    name: String,
    kernel: KernelSpec,
    reference: Vec<i8>,
}

impl TestCase {
    /// Bind a kernel invocation to its reference output
    ///
    /// # Errors
    ///
    /// A reference buffer whose length disagrees with the configured
    /// output size is a configuration error at construction, not an
    /// out-of-bounds read later.
    pub fn new(
        name: impl Into<String>,
        kernel: KernelSpec,
        reference: Vec<i8>,
    ) -> ExactoResult<Self> {
        let name = name.into();
        let expected = kernel.output_len()?;
        if reference.len() != expected {
            return Err(ExactoError::config(format!(
                "case {name}: reference holds {} values, configuration implies {expected}",
                reference.len()
            )));
        }
        if let KernelSpec::Svdf {
            params,
            frames,
            time_steps,
            ..
        } = &kernel
        {
            if frames.len() != time_steps * params.input_size {
                return Err(ExactoError::config(format!(
                    "case {name}: {} frame values for {} steps of size {}",
                    frames.len(),
                    time_steps,
                    params.input_size
                )));
            }
        }
        Ok(Self {
            name,
            kernel,
            reference,
        })
    }

    /// The case name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kernel invocation under test
    #[must_use]
    pub const fn kernel(&self) -> &KernelSpec {
        &self.kernel
    }

    /// The reference output buffer
    #[must_use]
    pub fn reference(&self) -> &[i8] {
        &self.reference
    }
}

/// Outcome of one conformance run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    /// Case name
    pub name: String,
    /// Whether every element matched exactly
    pub pass: bool,
    /// Index of the first differing element, if any
    pub first_mismatch: Option<usize>,
    /// Largest absolute difference observed across the whole tensor
    pub max_abs_diff: u32,
    /// Number of elements compared
    pub elements: usize,
}

/// Run one case: invoke its kernel and diff against the reference
///
/// # Errors
///
/// Configuration errors from the kernel propagate; a comparison mismatch
/// is a reported failure, not an error.
pub fn run_case(case: &TestCase) -> ExactoResult<CaseReport> {
    debug!(case = case.name(), "running conformance case");
    let produced = match case.kernel() {
        KernelSpec::Conv {
            params,
            scales,
            input,
            weights,
            bias,
        } => convolve(params, scales, input, weights, bias)?.data().to_vec(),
        KernelSpec::Depthwise {
            params,
            scales,
            input,
            weights,
            bias,
        } => depthwise_convolve(params, scales, input, weights, bias)?
            .data()
            .to_vec(),
        KernelSpec::FullyConnected {
            params,
            scale,
            input,
            weights,
            bias,
        } => fully_connected(params, scale, input, weights, bias)?
            .data()
            .to_vec(),
        KernelSpec::AvgPool { params, input } => avg_pool(params, input)?.data().to_vec(),
        KernelSpec::MaxPool { params, input } => max_pool(params, input)?.data().to_vec(),
        KernelSpec::Svdf {
            params,
            frames,
            time_steps: _,
            feature_weights,
            time_weights,
            bias,
        } => {
            let mut state = SvdfState::new(params.units, params.memory_size);
            let mut produced = Vec::with_capacity(case.reference().len());
            for frame in frames.chunks_exact(params.input_size) {
                let out =
                    svdf_step(params, &mut state, frame, feature_weights, time_weights, bias)?;
                produced.extend_from_slice(&out);
            }
            produced
        }
    };
    Ok(compare(case.name(), &produced, case.reference()))
}

/// Run every case in the registry, independent cases in parallel
///
/// # Errors
///
/// Propagates the first configuration error; mismatches are reported per
/// case and never abort the run.
pub fn run_all(registry: &Registry) -> ExactoResult<Vec<CaseReport>> {
    use rayon::prelude::*;
    let cases: Vec<&TestCase> = registry.cases().collect();
    cases.par_iter().map(|case| run_case(case)).collect()
}

/// Configure the global rayon pool before the first parallel run
///
/// If the pool is already initialized the call is a no-op and the current
/// thread count is returned.
pub fn configure_thread_pool(num_threads: Option<usize>) -> usize {
    let builder = rayon::ThreadPoolBuilder::new();
    let builder = match num_threads {
        Some(n) => builder.num_threads(n),
        None => builder,
    };
    match builder.build_global() {
        Ok(()) | Err(_) => rayon::current_num_threads(),
    }
}

fn compare(name: &str, produced: &[i8], reference: &[i8]) -> CaseReport {
    let mut first_mismatch = None;
    let mut max_abs_diff = 0u32;
    for (i, (&got, &want)) in produced.iter().zip(reference).enumerate() {
        if got != want {
            if first_mismatch.is_none() {
                first_mismatch = Some(i);
            }
            max_abs_diff = max_abs_diff.max((i32::from(got) - i32::from(want)).unsigned_abs());
        }
    }
    let pass = first_mismatch.is_none() && produced.len() == reference.len();
    CaseReport {
        name: name.to_string(),
        pass,
        first_mismatch,
        max_abs_diff,
        elements: reference.len(),
    }
}
