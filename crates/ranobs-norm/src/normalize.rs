//! The bounds-based observation normalizer.

use ranobs_core::{BoundsTable, NormalizeError};

use crate::layout::{VectorLayout, NETWORK_OFFSET};
use crate::view::ObsView;

/// Construction parameters for a [`Normalizer`].
///
/// # Examples
///
/// ```
/// use ranobs_norm::NormalizerConfig;
///
/// let config = NormalizerConfig::default();
/// assert_eq!(config.n_cells, 10);
/// assert_eq!(config.epsilon, 1e-8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizerConfig {
    /// Observation dimensionality reported by the producer. Advisory
    /// metadata only; never enforced against input length.
    pub state_dim: usize,
    /// Reserved for future variance-based normalization. The
    /// bounds-based transform does not read it.
    pub epsilon: f64,
    /// Number of simulated cells; drives the cell-feature stride.
    pub n_cells: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            state_dim: VectorLayout::new(10).total_len(),
            epsilon: 1e-8,
            n_cells: 10,
        }
    }
}

/// Bounds-based min-max normalizer for the flat observation vector.
///
/// Maps each position of the input to `[0, 1]` using the static
/// per-field bounds, following the positional layout contract. The
/// transform is a pure function of the immutable bounds table and the
/// input: no interior mutability, no I/O, safe to call concurrently on
/// distinct vectors from multiple threads.
///
/// The default path is deliberately permissive so that minor
/// observation-vector drift never crashes the calling control loop:
/// short vectors skip their unfilled tail, out-of-range values
/// saturate, and positions past the last bound slot stay zero. Callers
/// that want shape errors surfaced use
/// [`normalize_checked`](Self::normalize_checked).
#[derive(Clone, Debug)]
pub struct Normalizer {
    config: NormalizerConfig,
    bounds: BoundsTable,
    layout: VectorLayout,
}

impl Normalizer {
    /// Build a normalizer with the fixed domain bounds table.
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            config,
            bounds: BoundsTable::new(),
            layout: VectorLayout::new(config.n_cells),
        }
    }

    /// Advisory observation dimensionality from the config.
    pub fn state_dim(&self) -> usize {
        self.config.state_dim
    }

    /// Reserved numeric-stability constant from the config.
    pub fn epsilon(&self) -> f64 {
        self.config.epsilon
    }

    /// Number of simulated cells.
    pub fn n_cells(&self) -> usize {
        self.layout.n_cells()
    }

    /// Vector length implied by the layout: `17 + 14 + 12 * n_cells`.
    pub fn expected_len(&self) -> usize {
        self.layout.total_len()
    }

    /// The static bounds table.
    pub fn bounds(&self) -> &BoundsTable {
        &self.bounds
    }

    /// The positional layout.
    pub fn layout(&self) -> VectorLayout {
        self.layout
    }

    /// Typed view over a flat vector using this normalizer's layout.
    pub fn view<'a>(&self, data: &'a [f32]) -> ObsView<'a> {
        ObsView::new(data, self.layout)
    }

    /// Normalize an observation vector into `[0, 1]`, field by field.
    ///
    /// The output has the same length as the input. Each position
    /// covered by both the input and the bounds layout is written with
    /// the scaled value; positions beyond the last bound slot
    /// (`index >= 31 + 12 * n_cells`) keep their zero-initialized
    /// default, and bound slots beyond the input length are skipped
    /// without error. Never reads past the input.
    ///
    /// NaN inputs propagate as NaN; infinities saturate like any other
    /// out-of-range value (see [`ranobs_core::FieldSpec::scale`]).
    pub fn normalize(&self, observation: &[f32]) -> Vec<f32> {
        let mut output = vec![0.0f32; observation.len()];
        self.normalize_into(observation, &mut output);
        output
    }

    /// Normalize into a caller-allocated buffer.
    ///
    /// Zeroes `output`, then fills the positions covered by the first
    /// `min(observation.len(), output.len())` slots. The allocating
    /// [`normalize`](Self::normalize) delegates here; reuse a buffer
    /// across steps to keep the per-tick path allocation-free.
    pub fn normalize_into(&self, observation: &[f32], output: &mut [f32]) {
        output.fill(0.0);
        let len = observation.len().min(output.len());

        for (i, spec) in self.bounds.simulation().iter().enumerate() {
            if i >= len {
                return;
            }
            output[i] = spec.scale(observation[i]);
        }

        for (i, spec) in self.bounds.network().iter().enumerate() {
            let pos = NETWORK_OFFSET + i;
            if pos >= len {
                return;
            }
            output[pos] = spec.scale(observation[pos]);
        }

        // Feature-major cell block: positions grow monotonically, so
        // the first out-of-range slot ends the pass.
        for (feature, spec) in self.bounds.cell().iter().enumerate() {
            for cell in 0..self.layout.n_cells() {
                let pos = self.layout.cell_position(feature, cell);
                if pos >= len {
                    return;
                }
                output[pos] = spec.scale(observation[pos]);
            }
        }
    }

    /// Strict variant of [`normalize`](Self::normalize): rejects any
    /// input whose length is not exactly
    /// [`expected_len`](Self::expected_len).
    ///
    /// Opt-in safety net for integrations that would rather fail fast
    /// on a producer/consumer layout drift than normalize misaligned
    /// data. The permissive default stays the compatibility contract.
    ///
    /// # Errors
    ///
    /// [`NormalizeError::LengthMismatch`] when the length is wrong.
    pub fn normalize_checked(&self, observation: &[f32]) -> Result<Vec<f32>, NormalizeError> {
        let expected = self.layout.total_len();
        if observation.len() != expected {
            return Err(NormalizeError::LengthMismatch {
                expected,
                actual: observation.len(),
            });
        }
        Ok(self.normalize(observation))
    }

    /// Reserved seam for learned normalization.
    ///
    /// Deliberately a no-op: the current transform is purely
    /// bounds-based. The method exists so a future online
    /// mean/variance variant (which is what `epsilon` is reserved
    /// for) can slot in without an API break, and takes `&mut self`
    /// because that variant will mutate running statistics.
    pub fn update_stats(&mut self, _observation: &[f32]) {}
}
