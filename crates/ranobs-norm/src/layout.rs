//! Positional layout of the flat observation vector.
//!
//! The layout is the sole addressing contract between the producing
//! simulation and the normalizer. It is purely positional: position
//! `0..17` holds the simulation fields in table order, `17..31` the
//! network fields, and `31..` the cell block, feature-major — for
//! feature `f` and cell `c`, the global position is
//! `31 + f * n_cells + c`.
//!
//! A mismatch in `n_cells` or field count between producer and consumer
//! silently misaligns every cell-group read; nothing here can detect
//! that. The opt-in strict path in [`crate::Normalizer`] at least
//! rejects vectors whose total length is wrong.

use ranobs_core::bounds;
use ranobs_core::{BoundsTable, FieldGroup, FieldSpec};

/// Position of the first simulation field (the vector start).
pub const SIMULATION_OFFSET: usize = 0;

/// Position of the first network field.
pub const NETWORK_OFFSET: usize = bounds::SIMULATION_FIELDS;

/// Position of the first cell feature.
pub const CELL_OFFSET: usize = NETWORK_OFFSET + bounds::NETWORK_FIELDS;

/// Index arithmetic for the positional observation contract.
///
/// # Examples
///
/// ```
/// use ranobs_norm::VectorLayout;
///
/// let layout = VectorLayout::new(3);
/// assert_eq!(layout.total_len(), 17 + 14 + 12 * 3);
/// // cpuUsage (feature 0) for cells 0..3:
/// assert_eq!(layout.cell_position(0, 0), 31);
/// assert_eq!(layout.cell_position(0, 2), 33);
/// // prbUsage (feature 1) starts right after:
/// assert_eq!(layout.cell_position(1, 0), 34);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VectorLayout {
    n_cells: usize,
}

impl VectorLayout {
    /// Create a layout for `n_cells` simulated cells.
    pub fn new(n_cells: usize) -> Self {
        Self { n_cells }
    }

    /// Number of simulated cells driving the cell-feature stride.
    pub fn n_cells(&self) -> usize {
        self.n_cells
    }

    /// Nominal vector length: `17 + 14 + 12 * n_cells`.
    pub fn total_len(&self) -> usize {
        CELL_OFFSET + bounds::CELL_FIELDS * self.n_cells
    }

    /// Global position of cell feature `feature` for cell `cell`.
    ///
    /// Feature-major: all cells of feature 0, then all cells of
    /// feature 1, and so on.
    pub fn cell_position(&self, feature: usize, cell: usize) -> usize {
        debug_assert!(feature < bounds::CELL_FIELDS, "feature {feature} out of range");
        debug_assert!(cell < self.n_cells, "cell {cell} out of range");
        CELL_OFFSET + feature * self.n_cells + cell
    }

    /// The group a position falls into, or `None` past the last slot.
    pub fn group_at(&self, position: usize) -> Option<FieldGroup> {
        if position < NETWORK_OFFSET {
            Some(FieldGroup::Simulation)
        } else if position < CELL_OFFSET {
            Some(FieldGroup::Network)
        } else if position < self.total_len() {
            Some(FieldGroup::Cell)
        } else {
            None
        }
    }

    /// The bounds entry governing `position`, or `None` for positions
    /// beyond the last defined slot (`>= 17 + 14 + 12 * n_cells`).
    pub fn spec_at<'a>(&self, table: &'a BoundsTable, position: usize) -> Option<&'a FieldSpec> {
        match self.group_at(position)? {
            FieldGroup::Simulation => table.simulation().get(position),
            FieldGroup::Network => table.network().get(position - NETWORK_OFFSET),
            FieldGroup::Cell => {
                let feature = (position - CELL_OFFSET) / self.n_cells;
                table.cell().get(feature)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_positions_are_feature_major() {
        let layout = VectorLayout::new(3);
        // cpuUsage for cells 0, 1, 2.
        assert_eq!(layout.cell_position(0, 0), 31);
        assert_eq!(layout.cell_position(0, 1), 32);
        assert_eq!(layout.cell_position(0, 2), 33);
        // prbUsage for cells 0, 1, 2.
        assert_eq!(layout.cell_position(1, 0), 34);
        assert_eq!(layout.cell_position(1, 1), 35);
        assert_eq!(layout.cell_position(1, 2), 36);
    }

    #[test]
    fn total_len_matches_the_contract() {
        assert_eq!(VectorLayout::new(10).total_len(), 171);
        assert_eq!(VectorLayout::new(3).total_len(), 67);
        assert_eq!(VectorLayout::new(0).total_len(), 31);
    }

    #[test]
    fn group_boundaries() {
        let layout = VectorLayout::new(10);
        assert_eq!(layout.group_at(0), Some(FieldGroup::Simulation));
        assert_eq!(layout.group_at(16), Some(FieldGroup::Simulation));
        assert_eq!(layout.group_at(17), Some(FieldGroup::Network));
        assert_eq!(layout.group_at(30), Some(FieldGroup::Network));
        assert_eq!(layout.group_at(31), Some(FieldGroup::Cell));
        assert_eq!(layout.group_at(170), Some(FieldGroup::Cell));
        assert_eq!(layout.group_at(171), None);
    }

    #[test]
    fn spec_at_resolves_each_group() {
        let table = BoundsTable::new();
        let layout = VectorLayout::new(10);
        assert_eq!(layout.spec_at(&table, 0).unwrap().name, "totalCells");
        assert_eq!(
            layout.spec_at(&table, 16).unwrap().name,
            "peakHourMultiplier"
        );
        assert_eq!(layout.spec_at(&table, 17).unwrap().name, "totalEnergy");
        assert_eq!(layout.spec_at(&table, 30).unwrap().name, "avgPowerRatio");
        assert_eq!(layout.spec_at(&table, 31).unwrap().name, "cpuUsage");
        // Last slot of the last feature block.
        assert_eq!(layout.spec_at(&table, 170).unwrap().name, "loadRatio");
        assert!(layout.spec_at(&table, 171).is_none());
    }

    #[test]
    fn spec_at_with_zero_cells_ends_after_network() {
        let table = BoundsTable::new();
        let layout = VectorLayout::new(0);
        assert_eq!(layout.spec_at(&table, 30).unwrap().name, "avgPowerRatio");
        assert!(layout.spec_at(&table, 31).is_none());
    }

    #[test]
    fn every_cell_slot_resolves_to_its_feature() {
        let table = BoundsTable::new();
        let layout = VectorLayout::new(4);
        for (feature, spec) in table.cell().iter().enumerate() {
            for cell in 0..4 {
                let pos = layout.cell_position(feature, cell);
                assert_eq!(layout.spec_at(&table, pos).unwrap().name, spec.name);
            }
        }
    }
}
