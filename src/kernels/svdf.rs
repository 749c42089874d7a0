//! SVDF reference kernel
//!
//! A singular value decomposition filter combines a rank-factored feature
//! transform with a sliding time-history buffer. Each frame:
//!
//! 1. The input frame is projected through the feature weights; the
//!    per-rank accumulators for a unit are summed into one value.
//! 2. That value is requantized into the unit's state row, evicting the
//!    oldest retained frame (exactly `memory_size` frames are kept).
//! 3. The retained history is projected through the time weights, biased,
//!    requantized, and clamped into the output frame.
//!
//! The state buffer is owned by the caller for the duration of one
//! inference sequence and must be reset between sequences.

use crate::error::{ExactoError, ExactoResult};
use crate::kernels::{clamp_to_output, validate_activation};
use crate::quant::RequantScale;

/// SVDF kernel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvdfParams {
    /// Rank of the feature factorization
    pub rank: usize,
    /// Input frame width
    pub input_size: usize,
    /// Output unit count
    pub units: usize,
    /// Retained time steps per unit
    pub memory_size: usize,
    /// Zero-point offset added to input frame values
    pub input_offset: i32,
    /// Zero-point offset added after output requantization
    pub output_offset: i32,
    /// Requantization of the rank-reduced feature accumulator into state
    pub state_scale: RequantScale,
    /// Requantization of the time-projection accumulator into the output
    pub output_scale: RequantScale,
    /// Inclusive lower activation bound
    pub act_min: i32,
    /// Inclusive upper activation bound
    pub act_max: i32,
}

impl SvdfParams {
    fn validate(&self) -> ExactoResult<()> {
        if self.rank == 0 || self.input_size == 0 || self.units == 0 || self.memory_size == 0 {
            return Err(ExactoError::config(
                "rank, input size, units, and memory size must all be positive",
            ));
        }
        validate_activation(self.act_min, self.act_max)
    }
}

/// Caller-owned recurrent state: one `memory_size` ring row per unit
///
/// Mutated in place by [`svdf_step`]; reset between sequences. Never share
/// one state across concurrent sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvdfState {
    units: usize,
    memory_size: usize,
    data: Vec<i8>,
}

impl SvdfState {
    /// A zeroed state for `units` rows of `memory_size` steps
    #[must_use]
    pub fn new(units: usize, memory_size: usize) -> Self {
        Self {
            units,
            memory_size,
            data: vec![0; units * memory_size],
        }
    }

    /// Clear all retained history (the per-sequence flush)
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    /// Retained values, row-major `[unit, step]`, oldest step first
    #[must_use]
    pub fn as_slice(&self) -> &[i8] {
        &self.data
    }

    fn check(&self, params: &SvdfParams) -> ExactoResult<()> {
        if self.units != params.units || self.memory_size != params.memory_size {
            return Err(ExactoError::config(format!(
                "state buffer is {}x{} but params declare {}x{}",
                self.units, self.memory_size, params.units, params.memory_size
            )));
        }
        Ok(())
    }

    fn push(&mut self, unit: usize, value: i8) {
        let row = unit * self.memory_size;
        self.data.copy_within(row + 1..row + self.memory_size, row);
        self.data[row + self.memory_size - 1] = value;
    }
}

/// Process one input frame, mutating the state and producing one output
/// frame of `units` values
///
/// Feature weights are `[units * rank, input_size]` row-major; time
/// weights are `[units, memory_size]` row-major; bias is one i32 per unit.
///
/// # Errors
///
/// A state buffer whose size disagrees with the configured units and
/// memory size is a configuration error, never a silent truncation; so are
/// frame, weight, and bias length mismatches.
pub fn svdf_step(
    params: &SvdfParams,
    state: &mut SvdfState,
    frame: &[i8],
    feature_weights: &[i8],
    time_weights: &[i8],
    bias: &[i32],
) -> ExactoResult<Vec<i8>> {
    params.validate()?;
    state.check(params)?;
    if frame.len() != params.input_size {
        return Err(ExactoError::config(format!(
            "frame holds {} values, input size is {}",
            frame.len(),
            params.input_size
        )));
    }
    let feature_len = params.units * params.rank * params.input_size;
    if feature_weights.len() != feature_len {
        return Err(ExactoError::config(format!(
            "feature weights hold {} values, expected {feature_len}",
            feature_weights.len()
        )));
    }
    let time_len = params.units * params.memory_size;
    if time_weights.len() != time_len {
        return Err(ExactoError::config(format!(
            "time weights hold {} values, expected {time_len}",
            time_weights.len()
        )));
    }
    if bias.len() != params.units {
        return Err(ExactoError::config(format!(
            "bias holds {} values for {} units",
            bias.len(),
            params.units
        )));
    }

    // Feature stage: rank-reduced projection into the state ring.
    for u in 0..params.units {
        let mut total: i32 = 0;
        for r in 0..params.rank {
            let row = (u * params.rank + r) * params.input_size;
            let mut acc: i32 = 0;
            for (i, &x) in frame.iter().enumerate() {
                acc += (i32::from(x) + params.input_offset)
                    * i32::from(feature_weights[row + i]);
            }
            total += acc;
        }
        let s = params
            .state_scale
            .requantize(total)
            .clamp(i32::from(i8::MIN), i32::from(i8::MAX)) as i8;
        state.push(u, s);
    }

    // Time stage: project the retained history into the output frame.
    let mut out = Vec::with_capacity(params.units);
    for u in 0..params.units {
        let row = u * params.memory_size;
        let mut acc = bias[u];
        for m in 0..params.memory_size {
            acc += i32::from(state.as_slice()[row + m]) * i32::from(time_weights[row + m]);
        }
        let v = params.output_scale.requantize(acc) + params.output_offset;
        out.push(clamp_to_output(v, params.act_min, params.act_max));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_scale() -> RequantScale {
        RequantScale::new(1 << 30, 1).expect("valid pair")
    }

    fn params() -> SvdfParams {
        SvdfParams {
            rank: 1,
            input_size: 2,
            units: 1,
            memory_size: 3,
            input_offset: 0,
            output_offset: 0,
            state_scale: unit_scale(),
            output_scale: unit_scale(),
            act_min: -128,
            act_max: 127,
        }
    }

    #[test]
    fn test_state_shifts_and_inserts() {
        let p = params();
        let mut state = SvdfState::new(1, 3);
        let feature = [1i8, 0];
        let time = [0i8, 0, 0];
        // Frame value lands in the newest slot; history shifts left
        svdf_step(&p, &mut state, &[5, 9], &feature, &time, &[0]).expect("step");
        assert_eq!(state.as_slice(), &[0, 0, 5]);
        svdf_step(&p, &mut state, &[7, 9], &feature, &time, &[0]).expect("step");
        assert_eq!(state.as_slice(), &[0, 5, 7]);
        svdf_step(&p, &mut state, &[2, 9], &feature, &time, &[0]).expect("step");
        assert_eq!(state.as_slice(), &[5, 7, 2]);
        // A fourth frame evicts the first entirely
        svdf_step(&p, &mut state, &[3, 9], &feature, &time, &[0]).expect("step");
        assert_eq!(state.as_slice(), &[7, 2, 3]);
    }

    #[test]
    fn test_time_projection_and_bias() {
        let p = params();
        let mut state = SvdfState::new(1, 3);
        let feature = [1i8, 1];
        let time = [1i8, 2, 3];
        // After one frame state is [0, 0, 4]; output = 4*3 + bias
        let out = svdf_step(&p, &mut state, &[1, 3], &feature, &time, &[10]).expect("step");
        assert_eq!(out, vec![22]);
    }

    #[test]
    fn test_reset_clears_history() {
        let p = params();
        let mut state = SvdfState::new(1, 3);
        svdf_step(&p, &mut state, &[5, 5], &[1, 1], &[0, 0, 0], &[0]).expect("step");
        assert_ne!(state.as_slice(), &[0, 0, 0]);
        state.reset();
        assert_eq!(state.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn test_rejects_state_size_mismatch() {
        let p = params();
        let mut state = SvdfState::new(2, 3);
        let err = svdf_step(&p, &mut state, &[0, 0], &[1, 1], &[0, 0, 0], &[0]);
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_zero_rank() {
        let p = SvdfParams { rank: 0, ..params() };
        let mut state = SvdfState::new(1, 3);
        assert!(svdf_step(&p, &mut state, &[0, 0], &[], &[0, 0, 0], &[0]).is_err());
    }

    #[test]
    fn test_rank_accumulators_sum() {
        let p = SvdfParams { rank: 2, ..params() };
        let mut state = SvdfState::new(1, 3);
        // Two rank rows [1, 0] and [0, 1]: reduced value is 5 + 9
        let feature = [1i8, 0, 0, 1];
        let time = [0i8, 0, 1];
        let out = svdf_step(&p, &mut state, &[5, 9], &feature, &time, &[0]).expect("step");
        assert_eq!(state.as_slice(), &[0, 0, 14]);
        assert_eq!(out, vec![14]);
    }
}
