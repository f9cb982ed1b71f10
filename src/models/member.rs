use serde::Serialize;

pub const UNKNOWN: &str = "Unknown";

/// A roster entry keyed by application ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRecord {
    pub app_id: String,
    pub name: String,
    pub year: String,
    pub role: String,
}

impl MemberRecord {
    /// Sentinel returned for IDs missing from the roster.
    pub fn unknown(app_id: &str) -> Self {
        Self {
            app_id: app_id.to_string(),
            name: UNKNOWN.to_string(),
            year: UNKNOWN.to_string(),
            role: UNKNOWN.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN && self.year == UNKNOWN && self.role == UNKNOWN
    }
}
