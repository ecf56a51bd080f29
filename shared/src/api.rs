use serde::{Deserialize, Serialize};

use crate::models::DaySection;

// ============================================================================
// Meetings API Types
// ============================================================================

/// Body of `GET /meetings?user_id=<id>`: the user's upcoming meetings,
/// grouped by day. A missing `meetings` field is a decode error, not an
/// empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingsResponse {
    pub meetings: Vec<DaySection>,
}
