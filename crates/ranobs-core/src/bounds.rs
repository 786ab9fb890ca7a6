//! Hard-coded domain bounds for the energy-management observation vector.
//!
//! The three tables below are the addressing contract shared with the
//! producing simulation: declaration order defines the positional
//! layout of the flat vector, so reordering an entry is a breaking
//! change even though the bounds themselves stay intact.

use indexmap::IndexMap;

use crate::field::{FieldGroup, FieldSpec};

/// Number of simulation fields (vector positions `0..17`).
pub const SIMULATION_FIELDS: usize = 17;

/// Number of network fields (vector positions `17..31`).
pub const NETWORK_FIELDS: usize = 14;

/// Number of per-cell features (positions `31..`, replicated per cell).
pub const CELL_FIELDS: usize = 12;

/// Scalar simulation/config parameters, in layout order.
pub const SIMULATION_BOUNDS: [FieldSpec; SIMULATION_FIELDS] = [
    FieldSpec::new("totalCells", 1.0, 50.0),           // number of cells
    FieldSpec::new("totalUEs", 1.0, 500.0),            // number of UEs
    FieldSpec::new("simTime", 600.0, 3600.0),          // simulation time, s
    FieldSpec::new("timeStep", 1.0, 10.0),             // step size, s
    FieldSpec::new("timeProgress", 0.0, 1.0),          // progress ratio
    FieldSpec::new("carrierFrequency", 700e6, 6e9),    // Hz
    FieldSpec::new("isd", 100.0, 2000.0),              // inter-site distance, m
    FieldSpec::new("minTxPower", 0.0, 46.0),           // dBm
    FieldSpec::new("maxTxPower", 0.0, 46.0),           // dBm
    FieldSpec::new("basePower", 100.0, 100_000.0),     // watts
    FieldSpec::new("idlePower", 50.0, 50_000.0),       // watts
    FieldSpec::new("dropCallThreshold", 1.0, 10.0),    // percent
    FieldSpec::new("latencyThreshold", 10.0, 100.0),   // ms
    FieldSpec::new("cpuThreshold", 70.0, 95.0),        // percent
    FieldSpec::new("prbThreshold", 70.0, 95.0),        // percent
    FieldSpec::new("trafficLambda", 0.1, 10.0),        // arrival rate
    FieldSpec::new("peakHourMultiplier", 1.0, 5.0),    // multiplier
];

/// Scalar aggregate network metrics, in layout order.
pub const NETWORK_BOUNDS: [FieldSpec; NETWORK_FIELDS] = [
    FieldSpec::new("totalEnergy", 0.0, 10_000.0),      // kWh
    FieldSpec::new("activeCells", 0.0, 50.0),          // number of cells
    FieldSpec::new("avgDropRate", 0.0, 20.0),          // percent
    FieldSpec::new("avgLatency", 0.0, 200.0),          // ms
    FieldSpec::new("totalTraffic", 0.0, 5000.0),       // traffic units
    FieldSpec::new("connectedUEs", 0.0, 500.0),        // number of UEs
    FieldSpec::new("connectionRate", 0.0, 100.0),      // percent
    FieldSpec::new("cpuViolations", 0.0, 10_000.0),    // violation count
    FieldSpec::new("prbViolations", 0.0, 10_000.0),    // violation count
    FieldSpec::new("maxCpuUsage", 0.0, 100.0),         // percent
    FieldSpec::new("maxPrbUsage", 0.0, 100.0),         // percent
    FieldSpec::new("kpiViolations", 0.0, 10_000.0),    // violation count
    FieldSpec::new("totalTxPower", 0.0, 1000.0),       // total power
    FieldSpec::new("avgPowerRatio", 0.0, 1.0),         // ratio
];

/// Per-cell metrics, in layout order; each entry is replicated once
/// per simulated cell (feature-major).
pub const CELL_BOUNDS: [FieldSpec; CELL_FIELDS] = [
    FieldSpec::new("cpuUsage", 0.0, 100.0),            // percent
    FieldSpec::new("prbUsage", 0.0, 100.0),            // percent
    FieldSpec::new("currentLoad", 0.0, 1000.0),        // load units
    FieldSpec::new("maxCapacity", 0.0, 1000.0),        // capacity units
    FieldSpec::new("numConnectedUEs", 0.0, 50.0),      // number of UEs
    FieldSpec::new("txPower", 0.0, 46.0),              // dBm
    FieldSpec::new("energyConsumption", 0.0, 5000.0),  // watts
    FieldSpec::new("avgRSRP", -140.0, -70.0),          // dBm
    FieldSpec::new("avgRSRQ", -20.0, 0.0),             // dB
    FieldSpec::new("avgSINR", -10.0, 30.0),            // dB
    FieldSpec::new("totalTrafficDemand", 0.0, 500.0),  // traffic units
    FieldSpec::new("loadRatio", 0.0, 1.0),             // ratio
];

/// The static bounds table: three ordered field groups plus an ordered
/// name index for lookup by identifier.
///
/// Immutable after construction and identical across all calls for a
/// given normalizer. Field names are unique across the three groups.
///
/// # Examples
///
/// ```
/// use ranobs_core::{BoundsTable, FieldGroup};
///
/// let table = BoundsTable::new();
/// assert_eq!(table.simulation().len(), 17);
/// assert_eq!(table.network().len(), 14);
/// assert_eq!(table.cell().len(), 12);
///
/// let sinr = table.get("avgSINR").unwrap();
/// assert_eq!((sinr.lower, sinr.upper), (-10.0, 30.0));
/// assert_eq!(table.locate("avgSINR"), Some((FieldGroup::Cell, 9)));
/// ```
#[derive(Clone, Debug)]
pub struct BoundsTable {
    by_name: IndexMap<&'static str, (FieldGroup, usize)>,
}

impl BoundsTable {
    /// Build the table, indexing every field name in layout order.
    pub fn new() -> Self {
        let mut by_name = IndexMap::with_capacity(SIMULATION_FIELDS + NETWORK_FIELDS + CELL_FIELDS);
        for (i, spec) in SIMULATION_BOUNDS.iter().enumerate() {
            by_name.insert(spec.name, (FieldGroup::Simulation, i));
        }
        for (i, spec) in NETWORK_BOUNDS.iter().enumerate() {
            by_name.insert(spec.name, (FieldGroup::Network, i));
        }
        for (i, spec) in CELL_BOUNDS.iter().enumerate() {
            by_name.insert(spec.name, (FieldGroup::Cell, i));
        }
        Self { by_name }
    }

    /// The simulation group, in layout order.
    pub fn simulation(&self) -> &'static [FieldSpec] {
        &SIMULATION_BOUNDS
    }

    /// The network group, in layout order.
    pub fn network(&self) -> &'static [FieldSpec] {
        &NETWORK_BOUNDS
    }

    /// The cell group, in layout order (one entry per feature, not per cell).
    pub fn cell(&self) -> &'static [FieldSpec] {
        &CELL_BOUNDS
    }

    /// The entries of one group, in layout order.
    pub fn group(&self, group: FieldGroup) -> &'static [FieldSpec] {
        match group {
            FieldGroup::Simulation => self.simulation(),
            FieldGroup::Network => self.network(),
            FieldGroup::Cell => self.cell(),
        }
    }

    /// Look up a field descriptor by identifier.
    pub fn get(&self, name: &str) -> Option<&'static FieldSpec> {
        let (group, idx) = *self.by_name.get(name)?;
        Some(&self.group(group)[idx])
    }

    /// Locate a field by identifier: its group and index within the group.
    pub fn locate(&self, name: &str) -> Option<(FieldGroup, usize)> {
        self.by_name.get(name).copied()
    }

    /// Number of distinct field descriptors (cell entries counted once).
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the table is empty (never, for the built-in domain table).
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterate all field descriptors in layout order, tagged with their
    /// group and index within the group.
    pub fn iter(&self) -> impl Iterator<Item = (FieldGroup, usize, &'static FieldSpec)> + '_ {
        self.by_name
            .values()
            .map(|&(group, idx)| (group, idx, &self.group(group)[idx]))
    }
}

impl Default for BoundsTable {
    fn default() -> Self {
        Self::new()
    }
}
