//! Record types for the OneRoster v1.1 wire format
//!
//! The published schema defines dozens of record types; this module ships the
//! shared vocabulary plus the records behind the rostered endpoints: orgs and
//! schools (one shape), users, students, and teachers (one shape),
//! enrollments, and demographic data. Response wrappers bind each endpoint
//! to its top-level JSON key. Callers talking to providers with extension
//! fields can swap in their own record types through the
//! [`Collection`](crate::decode::Collection) trait.

mod demographic;
mod enrollment;
mod org;
mod response;
mod types;
mod user;

pub use demographic::Demographic;
pub use enrollment::Enrollment;
pub use org::Org;
pub use response::{
    DemographicResponse, DemographicsResponse, EnrollmentResponse, EnrollmentsResponse,
    ErrorDescription, ErrorPayload, OrgResponse, OrgsResponse, SchoolResponse, SchoolsResponse,
    StudentResponse, StudentsResponse, TeacherResponse, TeachersResponse, UserResponse,
    UsersResponse,
};
pub use types::{Gender, GuidRef, GuidType, OrgType, ResidenceStatus, RoleType, StatusType};
pub use user::{User, UserId};
