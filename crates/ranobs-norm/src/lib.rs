//! Bounds-based observation normalization for a cellular-network
//! energy-management RL agent.
//!
//! The simulation emits a flat `f32` observation vector with a fixed
//! positional layout: 17 simulation fields, 14 network fields, then 12
//! per-cell features replicated across `n_cells` cells (feature-major).
//! [`Normalizer`] rescales every position into `[0, 1]` using the static
//! per-field bounds from `ranobs-core`, saturating out-of-range values
//! instead of rejecting them.
//!
//! # Quick start
//!
//! ```
//! use ranobs_norm::{Normalizer, NormalizerConfig};
//!
//! let norm = Normalizer::new(NormalizerConfig::default());
//! let raw = vec![25.5f32; norm.expected_len()];
//! let scaled = norm.normalize(&raw);
//!
//! assert_eq!(scaled.len(), raw.len());
//! assert!(scaled.iter().all(|v| (0.0..=1.0).contains(v)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod layout;
pub mod normalize;
pub mod view;

pub use layout::VectorLayout;
pub use normalize::{Normalizer, NormalizerConfig};
pub use view::ObsView;

pub use ranobs_core::{BoundsTable, FieldGroup, FieldSpec, NormalizeError};
