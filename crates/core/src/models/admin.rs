//! Admin-only, read-only records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub total_units: u64,
    #[serde(default)]
    pub consumed_units: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_from_api_payload() {
        let license: License = serde_json::from_str(
            r#"{"id":"l1","name":"Meeting - WebEx Meeting Center","totalUnits":50,"consumedUnits":8}"#,
        )
        .unwrap();

        assert_eq!(license.name, "Meeting - WebEx Meeting Center");
        assert_eq!(license.total_units, 50);
        assert_eq!(license.consumed_units, 8);
    }

    #[test]
    fn test_license_units_default_to_zero() {
        let license: License = serde_json::from_str(r#"{"id":"l1"}"#).unwrap();

        assert_eq!(license.total_units, 0);
        assert_eq!(license.consumed_units, 0);
        assert_eq!(license.name, "");
    }
}
