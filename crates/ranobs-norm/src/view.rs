//! Typed read-only views over a flat observation vector.
//!
//! The external contract stays purely positional; [`ObsView`] is a
//! convenience layer for consumers that want named group access
//! without re-deriving index arithmetic. It works on raw and
//! normalized vectors alike.

use ranobs_core::bounds;

use crate::layout::{VectorLayout, CELL_OFFSET, NETWORK_OFFSET};

/// Read-only typed view over a flat observation vector.
///
/// Short vectors are legal input to the normalizer, so every accessor
/// returns `Option`: `None` means the underlying vector is too short to
/// cover the requested span (or the index is out of range), never a
/// panic.
///
/// # Examples
///
/// ```
/// use ranobs_norm::{ObsView, VectorLayout};
///
/// let data: Vec<f32> = (0..67).map(|i| i as f32).collect();
/// let view = ObsView::new(&data, VectorLayout::new(3));
///
/// assert_eq!(view.simulation().unwrap().len(), 17);
/// assert_eq!(view.network().unwrap().len(), 14);
/// // cpuUsage (feature 0) across the 3 cells is contiguous:
/// assert_eq!(view.cell_feature(0).unwrap(), &[31.0, 32.0, 33.0]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ObsView<'a> {
    data: &'a [f32],
    layout: VectorLayout,
}

impl<'a> ObsView<'a> {
    /// Wrap a flat vector with the given layout.
    pub fn new(data: &'a [f32], layout: VectorLayout) -> Self {
        Self { data, layout }
    }

    /// The underlying flat vector.
    pub fn data(&self) -> &'a [f32] {
        self.data
    }

    /// The layout this view addresses with.
    pub fn layout(&self) -> VectorLayout {
        self.layout
    }

    /// The 17 simulation fields, in table order.
    pub fn simulation(&self) -> Option<&'a [f32]> {
        self.data.get(..NETWORK_OFFSET)
    }

    /// The 14 network fields, in table order.
    pub fn network(&self) -> Option<&'a [f32]> {
        self.data.get(NETWORK_OFFSET..CELL_OFFSET)
    }

    /// All cells' values for one feature, in cell order.
    ///
    /// The cell block is feature-major, so this is a contiguous slice.
    pub fn cell_feature(&self, feature: usize) -> Option<&'a [f32]> {
        if feature >= bounds::CELL_FIELDS {
            return None;
        }
        let n = self.layout.n_cells();
        let start = CELL_OFFSET + feature * n;
        self.data.get(start..start + n)
    }

    /// The 12 feature values of one cell, in table order.
    ///
    /// One cell's features are strided across the cell block, so this
    /// yields an iterator rather than a slice. Requires the full cell
    /// block to be present.
    pub fn cell(&self, cell: usize) -> Option<impl Iterator<Item = f32> + 'a> {
        let n = self.layout.n_cells();
        if cell >= n || self.data.len() < self.layout.total_len() {
            return None;
        }
        let data = self.data;
        Some((0..bounds::CELL_FIELDS).map(move |f| data[CELL_OFFSET + f * n + cell]))
    }
}
