//! Placement lifecycle domain module.
//!
//! A placement tracks one refugee through one job or training opportunity:
//! `applied → shortlisted → offered → active → completed`, with `dropped`
//! as a terminal side branch. This crate orders the statuses, checks and
//! advances records, and builds the views the dashboard renders. Pure
//! domain logic: no IO, no HTTP, no storage.

pub mod record;
pub mod stats;
pub mod status;
pub mod timeline;

pub use record::{PlacementRecord, StageEntry};
pub use stats::{PlacementFilter, PlacementStats};
pub use status::{FORWARD_STAGES, PlacementStatus, STATUS_ORDER, Tone, is_terminal, status_order};
pub use timeline::{CompactBadge, StageView, TimelineSummary, build_timeline, compact_badge, summarize};
