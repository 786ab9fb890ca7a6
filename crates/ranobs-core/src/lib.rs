//! Core types for bounded observation normalization.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the field descriptor ([`FieldSpec`]) with its scalar min-max
//! transform, the hard-coded domain bounds for the cellular-network
//! energy-management observation vector ([`BoundsTable`]), and the
//! error types shared across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod field;

pub use bounds::BoundsTable;
pub use error::NormalizeError;
pub use field::{FieldGroup, FieldSpec};
