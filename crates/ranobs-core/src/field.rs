//! Field descriptors and the scalar min-max transform.

use std::fmt;

/// Which section of the observation vector a field belongs to.
///
/// The three groups are laid out back to back: simulation fields first,
/// then network fields, then the per-cell block (see `ranobs-norm`'s
/// layout module for the exact positional contract).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    /// Scalar simulation/config parameters.
    Simulation,
    /// Scalar aggregate network metrics.
    Network,
    /// Per-cell metrics, each replicated across all simulated cells.
    Cell,
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simulation => write!(f, "simulation"),
            Self::Network => write!(f, "network"),
            Self::Cell => write!(f, "cell"),
        }
    }
}

/// A single observation field: a debugging identity plus its domain range.
///
/// `lower <= upper` is expected but not enforced. A degenerate pair
/// (`lower == upper`) marks a field that is constant in that deployment;
/// [`scale`](Self::scale) maps every reading of such a field to the
/// neutral midpoint 0.5.
///
/// # Examples
///
/// ```
/// use ranobs_core::FieldSpec;
///
/// let cpu = FieldSpec::new("cpuUsage", 0.0, 100.0);
/// assert_eq!(cpu.scale(0.0), 0.0);
/// assert_eq!(cpu.scale(100.0), 1.0);
/// assert_eq!(cpu.scale(250.0), 1.0); // saturates
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    /// Identifier as used by the producing simulation (for debugging
    /// and name-based lookup; addressing is positional).
    pub name: &'static str,
    /// Lower bound of the field's domain range.
    pub lower: f32,
    /// Upper bound of the field's domain range.
    pub upper: f32,
}

impl FieldSpec {
    /// Create a field descriptor.
    pub const fn new(name: &'static str, lower: f32, upper: f32) -> Self {
        Self { name, lower, upper }
    }

    /// Whether the bounds are degenerate (`lower == upper`).
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }

    /// Min-max scale `raw` from `[lower, upper]` into `[0, 1]`.
    ///
    /// Out-of-range values saturate at the nearest boundary rather than
    /// erroring, so minor observation drift never crashes the calling
    /// control loop. Degenerate bounds return the fixed midpoint 0.5.
    ///
    /// NaN propagates: the subtraction/division produce NaN and
    /// `f32::clamp` passes a NaN input through unchanged. `+inf`
    /// saturates to 1.0 and `-inf` to 0.0, like any other
    /// out-of-range value.
    pub fn scale(&self, raw: f32) -> f32 {
        if self.lower == self.upper {
            return 0.5;
        }
        ((raw - self.lower) / (self.upper - self.lower)).clamp(0.0, 1.0)
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {}]", self.name, self.lower, self.upper)
    }
}
