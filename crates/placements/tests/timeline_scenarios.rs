use proptest::prelude::*;
use serde_json::json;

use sheltra_core::PlacementId;
use sheltra_placements::{
    FORWARD_STAGES, PlacementFilter, PlacementRecord, PlacementStats, PlacementStatus, build_timeline, compact_badge,
    summarize,
};

fn placement_feed() -> Vec<PlacementRecord> {
    serde_json::from_value(json!([
        {
            "id": 1,
            "jobTitle": "Administrative Assistant",
            "company": "Tech Solutions Inc.",
            "status": "active",
            "appliedAt": "2025-01-15",
            "shortlistedAt": "2025-01-22",
            "offeredAt": "2025-02-05",
            "activeAt": "2025-02-20",
            "activeNotes": "Started employment"
        },
        {
            "id": 5,
            "jobTitle": "Healthcare Assistant",
            "status": "completed",
            "appliedAt": "2024-11-10",
            "shortlistedAt": "2024-11-20",
            "offeredAt": "2024-12-01",
            "activeAt": "2024-12-10",
            "completedAt": "2025-02-10",
            "completedNotes": "Contract completed successfully"
        },
        {
            "id": 6,
            "jobTitle": "Marketing Coordinator",
            "status": "dropped",
            "appliedAt": "2025-01-20",
            "shortlistedAt": "2025-02-01",
            "droppedAt": "2025-02-15",
            "droppedNotes": "Withdrew application - accepted another offer"
        }
    ]))
    .expect("feed should deserialize")
}

#[test]
fn feed_records_are_consistent_and_render() {
    let feed = placement_feed();
    for record in &feed {
        record.check_consistency().unwrap();
        assert!(!build_timeline(record).is_empty());
    }

    let stats = PlacementStats::from_records(&feed);
    assert_eq!((stats.total, stats.active, stats.completed, stats.dropped), (3, 1, 1, 1));

    let dropped = PlacementFilter::Status(PlacementStatus::Dropped).apply(&feed);
    let rows = build_timeline(dropped[0]);
    let last = rows.last().unwrap();
    assert!(last.is_current);
    assert_eq!(last.notes.as_deref(), Some("Withdrew application - accepted another offer"));
    assert!(summarize(dropped[0]).is_terminal);
}

#[test]
fn advancing_a_placement_moves_the_current_row() {
    let mut record = PlacementRecord::applied(PlacementId::from(9), "2025-03-01", None);
    assert_eq!(compact_badge(&record).label, "Applied");

    record
        .advance(PlacementStatus::Shortlisted, "2025-03-05", Some("Phone screen booked".into()))
        .unwrap();

    let rows = build_timeline(&record);
    let current: Vec<_> = rows.iter().filter(|r| r.is_current).map(|r| r.stage).collect();
    assert_eq!(current, vec![PlacementStatus::Shortlisted]);
    assert_eq!(rows[1].notes.as_deref(), Some("Phone screen booked"));
    assert_eq!(compact_badge(&record).updated_at.as_deref(), Some("Wed, Mar 5, 2025"));
}

proptest! {
    /// Walking a placement forward to any stage marks exactly the stages up
    /// to it as completed, and only that stage as current.
    #[test]
    fn forward_walk_completes_a_prefix(target in 0usize..5) {
        let mut record = PlacementRecord::applied(PlacementId::from(1), "2025-01-01", None);
        for stage in &FORWARD_STAGES[1..=target] {
            record.advance(*stage, "2025-01-02", None).unwrap();
        }
        prop_assert!(record.check_consistency().is_ok());

        let rows = build_timeline(&record);
        prop_assert_eq!(rows.len(), 5);
        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.is_completed, i <= target);
            prop_assert_eq!(row.is_current, i == target);
        }
    }

    /// Dropping at any non-terminal stage keeps progress up to that stage.
    #[test]
    fn drop_preserves_progress(target in 0usize..4) {
        let mut record = PlacementRecord::applied(PlacementId::from(1), "2025-01-01", None);
        for stage in &FORWARD_STAGES[1..=target] {
            record.advance(*stage, "2025-01-02", None).unwrap();
        }
        record.advance(PlacementStatus::Dropped, "2025-01-03", None).unwrap();

        let rows = build_timeline(&record);
        prop_assert_eq!(rows.len(), 6);
        for row in &rows[..5] {
            prop_assert_eq!(row.is_completed, row.stage.order() <= target);
            prop_assert!(!row.is_current);
        }
        prop_assert!(rows[5].is_current);
    }
}
