//! Facet selection and projection logic
//!
//! Everything here is pure: the state machine deciding which facet filters
//! the dataset, the shaping of count replies into displayable collections,
//! and the mapping from active facet to result tables.

pub mod projection;
pub mod selection;
pub mod tables;

pub use projection::*;
pub use selection::*;
pub use tables::*;
