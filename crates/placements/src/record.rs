use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use sheltra_core::{DomainError, DomainResult, PlacementId};

use crate::status::{FORWARD_STAGES, PlacementStatus};

/// Timestamp and notes recorded when a placement reached a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageEntry<'a> {
    pub at: Option<&'a str>,
    pub notes: Option<&'a str>,
}

/// One refugee's progress through a single opportunity.
///
/// The wire shape is flat: `status` plus `{stage}At` / `{stage}Notes` pairs
/// filled in as the record advances. Fields this crate does not interpret
/// (job title, company, salary, ...) are kept in `details`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRecord {
    /// `None` when absent or unusable (empty, negative, fractional).
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<PlacementId>,

    /// Raw status as received; see [`PlacementRecord::status`]. A non-string
    /// status is kept as its JSON text and reads as unrecognized.
    #[serde(default, deserialize_with = "lenient_status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortlisted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortlisted_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offered_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offered_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropped_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropped_notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(flatten)]
    pub details: Map<String, Value>,
}

// One bad field must not reject the record: the timeline still renders.
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<PlacementId>, D::Error> {
    let Some(raw) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match PlacementId::deserialize(raw.clone()) {
        Ok(id) => Ok(Some(id)),
        Err(err) => {
            tracing::warn!(id = %raw, error = %err, "ignoring unusable placement id");
            Ok(None)
        }
    }
}

fn lenient_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None => None,
        Some(Value::String(status)) => Some(status),
        Some(other) => {
            tracing::warn!(status = %other, "placement status is not a string; treating as unrecognized");
            Some(other.to_string())
        }
    })
}

impl PlacementRecord {
    /// A freshly created placement in `applied`.
    pub fn applied(id: PlacementId, at: impl Into<String>, notes: Option<String>) -> Self {
        let at = at.into();
        Self {
            id: Some(id),
            status: Some(PlacementStatus::Applied.as_str().to_string()),
            applied_at: Some(at.clone()),
            applied_notes: notes,
            updated_at: Some(at),
            ..Default::default()
        }
    }

    /// Parsed status; `None` when missing or not a placement status.
    pub fn status(&self) -> Option<PlacementStatus> {
        self.status.as_deref().and_then(PlacementStatus::parse)
    }

    /// Status used for ordering and rendering.
    ///
    /// Missing or unrecognized statuses are read as `applied`, the earliest
    /// stage. This is the documented convention for bad input, not an error.
    pub fn effective_status(&self) -> PlacementStatus {
        self.status().unwrap_or(PlacementStatus::Applied)
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_some_and(PlacementStatus::is_terminal)
    }

    /// Recorded timestamp and notes for a stage.
    pub fn stage(&self, stage: PlacementStatus) -> StageEntry<'_> {
        let (at, notes) = match stage {
            PlacementStatus::Applied => (&self.applied_at, &self.applied_notes),
            PlacementStatus::Shortlisted => (&self.shortlisted_at, &self.shortlisted_notes),
            PlacementStatus::Offered => (&self.offered_at, &self.offered_notes),
            PlacementStatus::Active => (&self.active_at, &self.active_notes),
            PlacementStatus::Completed => (&self.completed_at, &self.completed_notes),
            PlacementStatus::Dropped => (&self.dropped_at, &self.dropped_notes),
        };
        StageEntry {
            at: at.as_deref().filter(|s| !s.is_empty()),
            notes: notes.as_deref().filter(|s| !s.is_empty()),
        }
    }

    fn stage_mut(&mut self, stage: PlacementStatus) -> (&mut Option<String>, &mut Option<String>) {
        match stage {
            PlacementStatus::Applied => (&mut self.applied_at, &mut self.applied_notes),
            PlacementStatus::Shortlisted => (&mut self.shortlisted_at, &mut self.shortlisted_notes),
            PlacementStatus::Offered => (&mut self.offered_at, &mut self.offered_notes),
            PlacementStatus::Active => (&mut self.active_at, &mut self.active_notes),
            PlacementStatus::Completed => (&mut self.completed_at, &mut self.completed_notes),
            PlacementStatus::Dropped => (&mut self.dropped_at, &mut self.dropped_notes),
        }
    }

    /// Furthest forward stage with a recorded timestamp.
    pub fn last_recorded_stage(&self) -> Option<PlacementStatus> {
        FORWARD_STAGES
            .into_iter()
            .rev()
            .find(|stage| self.stage(*stage).at.is_some())
    }

    /// Furthest forward stage the placement got to.
    ///
    /// For a dropped placement this is where it was before dropping (the
    /// last stage with a timestamp, `applied` if none was recorded).
    pub fn reached_stage(&self) -> PlacementStatus {
        match self.effective_status() {
            PlacementStatus::Dropped => self.last_recorded_stage().unwrap_or(PlacementStatus::Applied),
            status => status,
        }
    }

    /// Move to `to`, recording when and why.
    ///
    /// Allowed moves: the next forward stage, or `dropped` from any
    /// non-terminal stage. Terminal placements are never modified.
    pub fn advance(&mut self, to: PlacementStatus, at: impl Into<String>, notes: Option<String>) -> DomainResult<()> {
        let Some(current) = self.status() else {
            return Err(DomainError::validation(format!(
                "cannot advance placement with unrecognized status {:?}",
                self.status
            )));
        };

        if current.is_terminal() {
            return Err(DomainError::lifecycle(format!("placement is already {current}")));
        }

        let allowed = to == PlacementStatus::Dropped || current.next() == Some(to);
        if !allowed {
            return Err(DomainError::lifecycle(format!(
                "cannot move placement from {current} to {to}"
            )));
        }

        let at = at.into();
        let (stage_at, stage_notes) = self.stage_mut(to);
        *stage_at = Some(at.clone());
        *stage_notes = notes;
        self.status = Some(to.as_str().to_string());
        self.updated_at = Some(at);

        tracing::debug!(placement = ?self.id, from = %current, to = %to, "placement advanced");
        Ok(())
    }

    /// Check the stage-field invariant.
    ///
    /// - `status` is a placement status
    /// - recorded forward stages form a prefix of the forward order
    /// - no forward stage past `status` is recorded (unless dropped)
    /// - `droppedAt` is present iff the placement is dropped
    pub fn check_consistency(&self) -> DomainResult<()> {
        let status = self.status().ok_or_else(|| {
            DomainError::validation(format!("unrecognized placement status {:?}", self.status))
        })?;

        let mut gap = None;
        for stage in FORWARD_STAGES {
            let recorded = self.stage(stage).at.is_some();
            match (recorded, gap) {
                (true, Some(missing)) => {
                    return Err(DomainError::lifecycle(format!(
                        "{stage} is recorded but earlier stage {missing} is not"
                    )));
                }
                (false, None) => gap = Some(stage),
                _ => {}
            }
        }

        if status != PlacementStatus::Dropped
            && let Some(last) = self.last_recorded_stage().filter(|last| *last > status)
        {
            return Err(DomainError::lifecycle(format!(
                "{last} is recorded but placement is only {status}"
            )));
        }

        let dropped_recorded = self.stage(PlacementStatus::Dropped).at.is_some();
        match (status == PlacementStatus::Dropped, dropped_recorded) {
            (true, false) => Err(DomainError::lifecycle("dropped placement has no droppedAt")),
            (false, true) => Err(DomainError::lifecycle(format!(
                "droppedAt is recorded but placement is {status}"
            ))),
            _ => Ok(()),
        }
    }
}
