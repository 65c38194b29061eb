//! Session identification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Session within a race weekend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionKind {
    #[serde(rename = "FP1")]
    Practice1,
    #[serde(rename = "FP2")]
    Practice2,
    #[serde(rename = "FP3")]
    Practice3,
    #[serde(rename = "Q")]
    Qualifying,
    #[serde(rename = "SQ")]
    SprintQualifying,
    #[serde(rename = "S")]
    Sprint,
    #[default]
    #[serde(rename = "R")]
    Race,
}

impl SessionKind {
    /// Short code used in archive paths
    pub fn code(self) -> &'static str {
        match self {
            SessionKind::Practice1 => "FP1",
            SessionKind::Practice2 => "FP2",
            SessionKind::Practice3 => "FP3",
            SessionKind::Qualifying => "Q",
            SessionKind::SprintQualifying => "SQ",
            SessionKind::Sprint => "S",
            SessionKind::Race => "R",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Identifies one session: season, event and session kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId {
    pub year: i32,
    pub event: String,
    pub kind: SessionKind,
}

impl SessionId {
    pub fn new(year: i32, event: impl Into<String>, kind: SessionKind) -> Self {
        Self { year, event: event.into(), kind }
    }

    /// Same event and session one season earlier
    pub fn previous_season(&self) -> Self {
        Self { year: self.year - 1, event: self.event.clone(), kind: self.kind }
    }

    /// Directory-safe form of the event name
    ///
    /// Lowercase ASCII alphanumerics, every other run collapsed to a single `-`.
    pub fn event_slug(&self) -> String {
        let mut slug = String::with_capacity(self.event.len());
        let mut pending_dash = false;

        for ch in self.event.chars() {
            if ch.is_ascii_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(ch.to_ascii_lowercase());
            } else {
                pending_dash = true;
            }
        }

        slug
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.event, self.kind)
    }
}
