//! Shared fixtures for the ranobs benchmark suite.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ranobs_norm::{Normalizer, NormalizerConfig};

/// A normalizer configured like the reference deployment (10 cells).
pub fn reference_normalizer() -> Normalizer {
    Normalizer::new(NormalizerConfig::default())
}

/// A full-length raw vector with every slot at its field's mid-range.
///
/// Mid-range values exercise the real scale path (no saturation
/// shortcut) for every field.
pub fn reference_vector(norm: &Normalizer) -> Vec<f32> {
    let layout = norm.layout();
    (0..layout.total_len())
        .map(|pos| {
            let spec = layout
                .spec_at(norm.bounds(), pos)
                .expect("position within layout");
            (spec.lower + spec.upper) / 2.0
        })
        .collect()
}
