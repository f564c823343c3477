//! Shared vocabulary types

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Lifecycle status carried by every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
    /// Currently active
    Active,
    /// Safe to delete
    Tobedeleted,
    /// Maps to `tobedeleted` in v1.1
    Inactive,
}

/// The permitted organization kinds.
///
/// The explicit hierarchy is national → state → local → district → school,
/// with `department` insertable below anything but national.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgType {
    Department,
    School,
    District,
    /// v1.0 instances use this value for districts
    Local,
    State,
    National,
}

/// A user's primary role within an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    Administrator,
    Aide,
    Guardian,
    Parent,
    Proctor,
    Relative,
    Student,
    Teacher,
}

/// The kind of record a [`GuidRef`] points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GuidType {
    AcademicSession,
    Category,
    Class,
    Course,
    Demographics,
    Enrollment,
    GradingPeriod,
    LineItem,
    Org,
    Resource,
    Result,
    Student,
    Teacher,
    Term,
    User,
}

/// A reference to another record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidRef {
    /// Link to the referenced record
    pub href: String,
    /// The referenced record's sourcedId
    pub sourced_id: String,
    /// What kind of record it is
    #[serde(rename = "type")]
    pub guid_type: GuidType,
}

/// The permitted gender tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// A student's public-school residence status.
///
/// The wire values are CEDS option codes
/// (<https://ceds.ed.gov/CEDSElementDetails.aspx?TermxTopicId=20863>).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidenceStatus {
    /// Resident of the administrative unit and usual school attendance area
    #[serde(rename = "01652")]
    UsualSchoolAttendanceArea,
    /// Resident of the administrative unit, but of another school attendance
    /// area
    #[serde(rename = "01653")]
    OtherSchoolAttendanceArea,
    /// Resident of this state, but not of this administrative unit
    #[serde(rename = "01654")]
    StateResidentOutsideAdminUnit,
    /// Resident of an administrative unit that crosses state boundaries
    #[serde(rename = "01655")]
    CrossesStateBoundaries,
    /// Resident of another state
    #[serde(rename = "01656")]
    OtherStateResident,
}

// ============================================================================
// Wire Booleans
// ============================================================================

// Providers disagree on whether boolean fields are JSON booleans or the
// strings "true"/"false" (some abbreviate to "t"/"f"). Both spellings decode.

#[derive(Deserialize)]
#[serde(untagged)]
enum WireBool {
    Native(bool),
    Text(String),
}

fn parse_wire_bool(text: &str) -> Result<bool, String> {
    match text.to_ascii_lowercase().as_str() {
        "t" | "true" => Ok(true),
        "f" | "false" => Ok(false),
        other => Err(format!("expected a boolean, got {other:?}")),
    }
}

pub(crate) fn stringy_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match WireBool::deserialize(deserializer)? {
        WireBool::Native(value) => Ok(value),
        WireBool::Text(text) => parse_wire_bool(&text).map_err(de::Error::custom),
    }
}

pub(crate) fn stringy_bool_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<WireBool>::deserialize(deserializer)? {
        None => Ok(None),
        Some(WireBool::Native(value)) => Ok(Some(value)),
        Some(WireBool::Text(text)) => parse_wire_bool(&text).map(Some).map_err(de::Error::custom),
    }
}
