use serde::Serialize;

use crate::record::PlacementRecord;
use crate::status::PlacementStatus;

/// Counters for the placements overview header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlacementStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    /// Applied, shortlisted or offered.
    pub pending: usize,
    pub dropped: usize,
}

impl PlacementStats {
    /// Records with an unrecognized status count toward `total` only.
    pub fn from_records(records: &[PlacementRecord]) -> Self {
        records.iter().fold(Self::default(), |mut stats, record| {
            stats.total += 1;
            match record.status() {
                Some(PlacementStatus::Applied | PlacementStatus::Shortlisted | PlacementStatus::Offered) => {
                    stats.pending += 1
                }
                Some(PlacementStatus::Active) => stats.active += 1,
                Some(PlacementStatus::Completed) => stats.completed += 1,
                Some(PlacementStatus::Dropped) => stats.dropped += 1,
                None => {}
            }
            stats
        })
    }
}

/// Tab filter over a placement list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementFilter {
    #[default]
    All,
    Status(PlacementStatus),
}

impl PlacementFilter {
    /// `all` or a status name, any case. Tab values are trimmed first.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        PlacementStatus::parse(raw).map(Self::Status)
    }

    pub fn matches(self, record: &PlacementRecord) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => record.status() == Some(status),
        }
    }

    pub fn apply(self, records: &[PlacementRecord]) -> Vec<&PlacementRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
