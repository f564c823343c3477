//! Response wrappers
//!
//! Every OneRoster response nests its payload under a top-level key that
//! varies by endpoint. Each wrapper here fixes that key in its serde shape
//! and, for collections, implements [`Collection`] so the fetch engine can
//! take the items out.

use serde::{Deserialize, Serialize};

use super::demographic::Demographic;
use super::enrollment::Enrollment;
use super::org::Org;
use super::user::User;
use crate::decode::Collection;

// ============================================================================
// Collection Responses
// ============================================================================

/// Payload of `/orgs`.
///
/// The upstream service keys this one as `"Org"`, capitalized and singular,
/// unlike every other collection. Kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgsResponse {
    #[serde(rename = "Org")]
    pub orgs: Vec<Org>,
}

impl Collection for OrgsResponse {
    type Item = Org;

    fn into_items(self) -> Vec<Org> {
        self.orgs
    }
}

/// Payload of `/schools`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolsResponse {
    pub schools: Vec<Org>,
}

impl Collection for SchoolsResponse {
    type Item = Org;

    fn into_items(self) -> Vec<Org> {
        self.schools
    }
}

/// Payload of `/users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

impl Collection for UsersResponse {
    type Item = User;

    fn into_items(self) -> Vec<User> {
        self.users
    }
}

/// Payload of `/students` and `/schools/{id}/students`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentsResponse {
    pub users: Vec<User>,
}

impl Collection for StudentsResponse {
    type Item = User;

    fn into_items(self) -> Vec<User> {
        self.users
    }
}

/// Payload of `/teachers` and `/schools/{id}/teachers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeachersResponse {
    pub users: Vec<User>,
}

impl Collection for TeachersResponse {
    type Item = User;

    fn into_items(self) -> Vec<User> {
        self.users
    }
}

/// Payload of `/enrollments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentsResponse {
    pub enrollments: Vec<Enrollment>,
}

impl Collection for EnrollmentsResponse {
    type Item = Enrollment;

    fn into_items(self) -> Vec<Enrollment> {
        self.enrollments
    }
}

/// Payload of `/demographics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicsResponse {
    pub demographics: Vec<Demographic>,
}

impl Collection for DemographicsResponse {
    type Item = Demographic;

    fn into_items(self) -> Vec<Demographic> {
        self.demographics
    }
}

// ============================================================================
// Single-Record Responses
// ============================================================================

/// Payload of `/orgs/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgResponse {
    pub org: Org,
}

/// Payload of `/schools/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolResponse {
    pub school: Org,
}

/// Payload of `/users/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

/// Payload of `/students/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentResponse {
    pub user: User,
}

/// Payload of `/teachers/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherResponse {
    pub user: User,
}

/// Payload of `/enrollments/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentResponse {
    pub enrollment: Enrollment,
}

/// Payload of `/demographics/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicResponse {
    pub demographic: Demographic,
}

// ============================================================================
// Error Payload
// ============================================================================

/// Structured error body some providers attach to non-success statuses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub errors: Vec<ErrorDescription>,
}

/// One entry in an [`ErrorPayload`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescription {
    pub description: String,
}
