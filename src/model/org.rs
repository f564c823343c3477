//! Organization records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::{GuidRef, OrgType, StatusType};

/// An organizational unit: a school, or a local, statewide, or national
/// entity above one.
///
/// Orgs typically have a parent (up to the national level) and children,
/// forming a hierarchy. The school-specific endpoints return this same shape
/// restricted to `type == school`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Org {
    pub sourced_id: String,
    pub status: StatusType,
    pub date_last_modified: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
    /// For example: IMS High
    pub name: String,
    #[serde(rename = "type")]
    pub org_type: OrgType,
    /// Human-readable identifier, e.g. an NCES ID
    #[serde(default)]
    pub identifier: Option<String>,
    /// The parent org
    #[serde(default)]
    pub parent: Option<GuidRef>,
    /// Child orgs
    #[serde(default)]
    pub children: Option<Vec<GuidRef>>,
}
