use serde::{Deserialize, Serialize};

/// Placement status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementStatus {
    Applied,
    Shortlisted,
    Offered,
    Active,
    Completed,
    /// Terminal side branch, reachable from any non-terminal stage.
    Dropped,
}

/// Ordinal table. `Dropped` sits last but is not "further along" than
/// `Completed`; timeline completion never compares against it.
pub const STATUS_ORDER: [PlacementStatus; 6] = [
    PlacementStatus::Applied,
    PlacementStatus::Shortlisted,
    PlacementStatus::Offered,
    PlacementStatus::Active,
    PlacementStatus::Completed,
    PlacementStatus::Dropped,
];

/// The stages shown on a timeline, in order.
pub const FORWARD_STAGES: [PlacementStatus; 5] = [
    PlacementStatus::Applied,
    PlacementStatus::Shortlisted,
    PlacementStatus::Offered,
    PlacementStatus::Active,
    PlacementStatus::Completed,
];

/// Display colour family for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Purple,
    Green,
    Emerald,
    Red,
}

impl PlacementStatus {
    /// Case-insensitive parse. Whitespace is significant: `" dropped "` is
    /// not a status.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.to_lowercase();
        STATUS_ORDER.into_iter().find(|s| s.as_str() == raw)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlacementStatus::Applied => "applied",
            PlacementStatus::Shortlisted => "shortlisted",
            PlacementStatus::Offered => "offered",
            PlacementStatus::Active => "active",
            PlacementStatus::Completed => "completed",
            PlacementStatus::Dropped => "dropped",
        }
    }

    /// Index in [`STATUS_ORDER`].
    pub fn order(self) -> usize {
        self as usize
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PlacementStatus::Completed | PlacementStatus::Dropped)
    }

    /// Next forward stage. `None` for terminal statuses.
    pub fn next(self) -> Option<Self> {
        match self {
            PlacementStatus::Applied => Some(PlacementStatus::Shortlisted),
            PlacementStatus::Shortlisted => Some(PlacementStatus::Offered),
            PlacementStatus::Offered => Some(PlacementStatus::Active),
            PlacementStatus::Active => Some(PlacementStatus::Completed),
            PlacementStatus::Completed | PlacementStatus::Dropped => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlacementStatus::Applied => "Applied",
            PlacementStatus::Shortlisted => "Shortlisted",
            PlacementStatus::Offered => "Offered",
            PlacementStatus::Active => "Active",
            PlacementStatus::Completed => "Completed",
            PlacementStatus::Dropped => "Dropped",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PlacementStatus::Applied => "📝",
            PlacementStatus::Shortlisted => "✓",
            PlacementStatus::Offered => "🎉",
            PlacementStatus::Active => "⚡",
            PlacementStatus::Completed => "🏆",
            PlacementStatus::Dropped => "✕",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            PlacementStatus::Applied => Tone::Blue,
            PlacementStatus::Shortlisted => Tone::Purple,
            PlacementStatus::Offered | PlacementStatus::Active => Tone::Green,
            PlacementStatus::Completed => Tone::Emerald,
            PlacementStatus::Dropped => Tone::Red,
        }
    }
}

impl core::fmt::Display for PlacementStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a raw status string in [`STATUS_ORDER`], or `-1` when the
/// value is not a placement status.
///
/// `-1` means "nothing completed"; record-level views apply the `applied`
/// fallback instead (see [`crate::PlacementRecord::effective_status`]).
pub fn status_order(status: &str) -> i32 {
    PlacementStatus::parse(status).map_or(-1, |s| s.order() as i32)
}

/// `true` for `completed` and `dropped`, in any case.
pub fn is_terminal(status: &str) -> bool {
    PlacementStatus::parse(status).is_some_and(PlacementStatus::is_terminal)
}
