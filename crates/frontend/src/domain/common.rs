//! Backend-assigned fields shared by the reference entity models.

use chrono::{DateTime, Utc};
use contracts::domain::common::AuditDto;
use serde::{Deserialize, Serialize};

/// Owner and timestamps, serialized flat as `userId`, `createdAt`, `updatedAt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Audit {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        self.updated_at.as_deref().and_then(parse_timestamp)
    }
}

impl From<AuditDto> for Audit {
    fn from(dto: AuditDto) -> Self {
        Self {
            user_id: dto.user_id,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

impl From<Audit> for AuditDto {
    fn from(audit: Audit) -> Self {
        Self {
            user_id: audit.user_id,
            created_at: audit.created_at,
            updated_at: audit.updated_at,
        }
    }
}

/// Parse an ISO-8601 timestamp. Naive values (no offset) are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timestamp() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-01-01T00:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-01T03:00:00+03:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-01T00:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-01T00:00:00.250").map(|d| d.timestamp_subsec_millis()), Some(250));
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_absent_timestamps_are_omitted() {
        let audit = Audit {
            user_id: "u1".into(),
            created_at: Some("2024-01-01T00:00:00Z".into()),
            updated_at: None,
        };
        let value = serde_json::to_value(&audit).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "userId": "u1", "createdAt": "2024-01-01T00:00:00Z" })
        );
        assert!(audit.updated_at_utc().is_none());
        assert!(audit.created_at_utc().is_some());
    }
}
