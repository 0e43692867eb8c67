//! Filtering capabilities for metric records
//!
//! This module provides the predicate framework (`generic`) and the concrete
//! record filters the views use (`region`).

pub mod generic;
pub mod region;

pub use generic::{AndFilter, Filter, IncludeAllFilter, NotFilter};
pub use region::{ExcludeEntityFilter, RegionFilter, filter_by_region, filter_records};
