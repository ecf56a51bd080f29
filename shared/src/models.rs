use serde::{Deserialize, Serialize};

/// One meeting as delivered by the backend. Times arrive pre-formatted as
/// display strings for each timezone; the frontend never parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub title: String,
    pub start_ua: String,
    pub end_ua: String,
    pub start_th: String,
    pub end_th: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendants: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "hangoutLink", default, skip_serializing_if = "Option::is_none")]
    pub hangout_link: Option<String>,
}

impl Meeting {
    /// Attendants line, if the backend sent a non-blank one.
    pub fn attendants(&self) -> Option<&str> {
        present(&self.attendants)
    }

    /// Location line, if the backend sent a non-blank one.
    pub fn location(&self) -> Option<&str> {
        present(&self.location)
    }

    /// Join link URL, if the backend sent a non-blank one.
    pub fn hangout_link(&self) -> Option<&str> {
        present(&self.hangout_link)
    }
}

// An empty or whitespace-only string renders the same as an absent field.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

/// A server-grouped bucket of meetings for one calendar day. Order within
/// `meetings` and across sections is server-determined and kept as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySection {
    pub day_name: String,
    pub date: String,
    pub meetings: Vec<Meeting>,
}
