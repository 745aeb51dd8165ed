//! Views over a placement record: full timeline, summary footer, and the
//! compact single-badge form.

use serde::Serialize;

use sheltra_core::{display_date, parse_timestamp};

use crate::record::PlacementRecord;
use crate::status::{FORWARD_STAGES, PlacementStatus, Tone};

/// One row of the rendered timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageView {
    pub stage: PlacementStatus,
    pub label: &'static str,
    pub icon: &'static str,
    pub is_completed: bool,
    pub is_current: bool,
    /// Raw `{stage}At` value.
    pub timestamp: Option<String>,
    /// `timestamp` formatted for display, when it parses as a date.
    pub display_date: Option<String>,
    pub notes: Option<String>,
}

impl StageView {
    fn new(record: &PlacementRecord, stage: PlacementStatus, is_completed: bool, is_current: bool) -> Self {
        let entry = record.stage(stage);
        Self {
            stage,
            label: stage.label(),
            icon: stage.icon(),
            is_completed,
            is_current,
            timestamp: entry.at.map(str::to_owned),
            display_date: entry.at.and_then(parse_timestamp).map(display_date),
            notes: entry.notes.map(str::to_owned),
        }
    }
}

/// Timeline rows in forward order.
///
/// A forward stage is completed when it is at or before the stage the
/// placement reached. For a dropped placement that is where it stood before
/// dropping, never "past completed"; a final current `dropped` row follows
/// the five forward rows. Missing or unrecognized statuses render as
/// `applied`.
pub fn build_timeline(record: &PlacementRecord) -> Vec<StageView> {
    let status = record.effective_status();
    let reached = record.reached_stage();

    let mut rows: Vec<StageView> = FORWARD_STAGES
        .into_iter()
        .map(|stage| StageView::new(record, stage, stage.order() <= reached.order(), stage == status))
        .collect();

    if status == PlacementStatus::Dropped {
        rows.push(StageView::new(record, PlacementStatus::Dropped, true, true));
    }

    rows
}

/// Footer shown under a full timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSummary {
    pub status: PlacementStatus,
    pub label: &'static str,
    pub icon: &'static str,
    pub is_terminal: bool,
    pub message: &'static str,
}

pub fn summarize(record: &PlacementRecord) -> TimelineSummary {
    let status = record.effective_status();
    TimelineSummary {
        status,
        label: status.label(),
        icon: status.icon(),
        is_terminal: status.is_terminal(),
        message: if status.is_terminal() {
            "This placement has reached a terminal status"
        } else {
            "Awaiting next stage update"
        },
    }
}

/// Single current-stage badge for list rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactBadge {
    pub status: PlacementStatus,
    pub label: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
    pub is_terminal: bool,
    pub updated_at: Option<String>,
}

pub fn compact_badge(record: &PlacementRecord) -> CompactBadge {
    let status = record.effective_status();
    CompactBadge {
        status,
        label: status.label(),
        icon: status.icon(),
        tone: status.tone(),
        is_terminal: status.is_terminal(),
        updated_at: record
            .updated_at
            .as_deref()
            .and_then(parse_timestamp)
            .map(display_date),
    }
}
