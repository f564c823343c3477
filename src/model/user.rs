//! User records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::{GuidRef, RoleType, StatusType, stringy_bool};

/// A person teaching or studying: one shape serves users, teachers, and
/// students, distinguished by `role`.
///
/// Relationships between people (a student's parents, a parent's students)
/// travel in `agents`; organization membership in `orgs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub sourced_id: String,
    pub status: StatusType,
    pub date_last_modified: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
    /// For example: pjn@imsglobal.org
    pub username: String,
    /// External identifiers to use when the sourcedId cannot be
    #[serde(default)]
    pub user_ids: Vec<UserId>,
    /// `false` means the record is active but system access is curtailed.
    /// Arrives as a native boolean or a `"true"`/`"false"` string.
    #[serde(deserialize_with = "stringy_bool")]
    pub enabled_user: bool,
    pub given_name: String,
    pub family_name: String,
    /// Separate multiple middle names with spaces
    #[serde(default)]
    pub middle_name: Option<String>,
    pub role: RoleType,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub sms: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Links to related people, e.g. a student's parents
    #[serde(default)]
    pub agents: Vec<GuidRef>,
    /// Links to orgs, usually a single school
    #[serde(default)]
    pub orgs: Vec<GuidRef>,
    /// Grade codes for users with role `student`
    #[serde(default)]
    pub grades: Vec<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// An external identifier for a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserId {
    /// For example: LDAP
    #[serde(rename = "type")]
    pub id_type: String,
    /// For example: 9877728989-ABF-0001
    pub identifier: String,
}
