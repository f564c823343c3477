//! Demographic records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::{Gender, ResidenceStatus, StatusType, stringy_bool_opt};

/// Demographic data for one user.
///
/// The `sourcedId` is the same as the sourcedId of the user the record
/// describes. Field vocabulary follows the US Common Educational Data
/// Standards (<https://ceds.ed.gov>). Providers treat this collection as
/// privileged, so not every consumer key can read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographic {
    pub sourced_id: String,
    pub status: StatusType,
    pub date_last_modified: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
    /// For example: 1908-04-01
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub sex: Option<Gender>,
    #[serde(default, deserialize_with = "stringy_bool_opt")]
    pub american_indian_or_alaska_native: Option<bool>,
    #[serde(default, deserialize_with = "stringy_bool_opt")]
    pub asian: Option<bool>,
    #[serde(default, deserialize_with = "stringy_bool_opt")]
    pub black_or_african_american: Option<bool>,
    #[serde(default, deserialize_with = "stringy_bool_opt")]
    pub native_hawaiian_or_other_pacific_islander: Option<bool>,
    #[serde(default, deserialize_with = "stringy_bool_opt")]
    pub white: Option<bool>,
    #[serde(default, deserialize_with = "stringy_bool_opt")]
    pub demographic_race_two_or_more_races: Option<bool>,
    #[serde(default, deserialize_with = "stringy_bool_opt")]
    pub hispanic_or_latino_ethnicity: Option<bool>,
    /// CEDS country code
    #[serde(default)]
    pub country_of_birth_code: Option<String>,
    /// Two-letter state code, e.g. IL
    #[serde(default)]
    pub state_of_birth_abbreviation: Option<String>,
    /// For example: Chicago
    #[serde(default)]
    pub city_of_birth: Option<String>,
    #[serde(default)]
    pub public_school_residence_status: Option<ResidenceStatus>,
}
