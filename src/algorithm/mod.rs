//! Aggregation algorithms over the metric tables
//!
//! Every function here is a pure transformation of borrowed records: rankings,
//! summary statistics, the cross-dataset join, entity profiles, and the
//! comparison selection.

pub mod comparison;
pub mod join;
pub mod profile;
pub mod ranking;
pub mod statistics;

pub use comparison::{ComparisonLeader, ComparisonSelection, ToggleOutcome};
pub use join::{JoinedRecord, JoinedView, MissingEntity, inner_join};
pub use profile::{EntityProfile, RegionalAverages};
pub use ranking::{
    LabelPolicy, PeerGap, RankedEntry, ShareSlice, laggard, leader, nearest_peers,
    percent_of_max, rank_descending, rank_of, region_totals, share_breakdown, top_n,
    top_n_labelled,
};
pub use statistics::{MetricSummary, MissingPolicy, SummaryStats, median, summarize};
