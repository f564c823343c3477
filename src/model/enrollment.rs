//! Enrollment records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::{GuidRef, RoleType, StatusType, stringy_bool_opt};

/// One user taking part in a class.
///
/// Most enrollments are students learning in a class or teachers teaching
/// it, but any [`RoleType`] is permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub sourced_id: String,
    pub status: StatusType,
    pub date_last_modified: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
    /// The enrolled user
    pub user: GuidRef,
    /// The class the user is enrolled on
    pub class: GuidRef,
    /// The school at which the class is provided
    pub school: GuidRef,
    pub role: RoleType,
    /// Teachers only: at most one primary teacher per class within the
    /// begin/end window
    #[serde(default, deserialize_with = "stringy_bool_opt")]
    pub primary: Option<bool>,
    /// First day of the enrollment (inclusive), e.g. 2012-04-23.
    /// Must fall within the class's academic session.
    #[serde(default)]
    pub begin_date: Option<NaiveDate>,
    /// Last day of the enrollment (exclusive), e.g. 2013-03-31
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}
