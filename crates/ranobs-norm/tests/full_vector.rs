//! End-to-end tests over complete observation vectors.
//!
//! These exercise the normalizer through its public surface the way the
//! RL training loop does: build a full-length raw vector, normalize it,
//! and read the result back through the typed views.

use ranobs_norm::{Normalizer, NormalizerConfig, ObsView};

fn default_normalizer() -> Normalizer {
    Normalizer::new(NormalizerConfig::default())
}

/// Fill a full-length vector with each slot's own bound.
fn bound_vector(norm: &Normalizer, pick: impl Fn(f32, f32) -> f32) -> Vec<f32> {
    let layout = norm.layout();
    (0..layout.total_len())
        .map(|pos| {
            let spec = layout.spec_at(norm.bounds(), pos).unwrap();
            pick(spec.lower, spec.upper)
        })
        .collect()
}

#[test]
fn lower_bound_vector_normalizes_to_all_zeros() {
    let norm = default_normalizer();
    let raw = bound_vector(&norm, |lower, _| lower);
    assert_eq!(raw.len(), 171);

    let out = norm.normalize(&raw);
    assert_eq!(out, vec![0.0f32; 171]);
}

#[test]
fn upper_bound_vector_normalizes_to_all_ones() {
    let norm = default_normalizer();
    let raw = bound_vector(&norm, |_, upper| upper);
    let out = norm.normalize(&raw);
    assert_eq!(out, vec![1.0f32; 171]);
}

#[test]
fn midrange_vector_reads_back_through_views() {
    let norm = default_normalizer();
    let raw = bound_vector(&norm, |lower, upper| (lower + upper) / 2.0);
    let out = norm.normalize(&raw);

    let view = norm.view(&out);
    let sim = view.simulation().unwrap();
    let net = view.network().unwrap();
    assert_eq!(sim.len(), 17);
    assert_eq!(net.len(), 14);
    for &v in sim.iter().chain(net) {
        assert!((v - 0.5).abs() < 1e-5, "midrange scaled to {v}");
    }

    for feature in 0..12 {
        let cells = view.cell_feature(feature).unwrap();
        assert_eq!(cells.len(), 10);
        for &v in cells {
            assert!((v - 0.5).abs() < 1e-5, "feature {feature} scaled to {v}");
        }
    }
}

#[test]
fn truncated_vector_is_normalized_without_error() {
    let norm = default_normalizer();
    let raw: Vec<f32> = bound_vector(&norm, |_, upper| upper)[..31].to_vec();

    let out = norm.normalize(&raw);
    assert_eq!(out, vec![1.0f32; 31]);

    // The strict path rejects the same vector.
    let err = norm.normalize_checked(&raw).unwrap_err();
    assert!(err.to_string().contains("171"), "{err}");
}

#[test]
fn per_cell_readings_keep_their_cell_identity() {
    let norm = Normalizer::new(NormalizerConfig {
        n_cells: 3,
        state_dim: 67,
        ..NormalizerConfig::default()
    });
    let mut raw = vec![0.0f32; norm.expected_len()];

    // Give each cell a distinct cpuUsage: 0%, 50%, 100%.
    let layout = norm.layout();
    raw[layout.cell_position(0, 0)] = 0.0;
    raw[layout.cell_position(0, 1)] = 50.0;
    raw[layout.cell_position(0, 2)] = 100.0;

    let out = norm.normalize(&raw);
    let view = ObsView::new(&out, layout);
    assert_eq!(view.cell_feature(0).unwrap(), &[0.0, 0.5, 1.0]);

    // The same values read per cell, across the stride.
    let cell2: Vec<f32> = view.cell(2).unwrap().collect();
    assert_eq!(cell2[0], 1.0);
}

#[test]
fn normalizer_is_shareable_across_threads() {
    let norm = std::sync::Arc::new(default_normalizer());
    let raw: Vec<f32> = (0..171).map(|i| i as f32).collect();
    let expected = norm.normalize(&raw);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let norm = norm.clone();
            let raw = raw.clone();
            let expected = expected.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(norm.normalize(&raw), expected);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}
