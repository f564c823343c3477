//! OneRoster API endpoints and request URL construction
//!
//! An [`Endpoint`] names one operation of the OneRoster v1.1 roster surface.
//! [`Endpoint::request_url`] turns it into a concrete request URL: the
//! three-segment API version prefix is appended unless the base URL already
//! carries it, then the operation's path, then any list parameters.

use crate::config::ListOptions;
use crate::error::{Error, Result};
use crate::oauth::oauth_encode;
use url::Url;

/// Path suffix that marks a base URL as already pointing at the RESTful root.
const API_PREFIX: [&str; 3] = ["ims", "oneroster", "v1p1"];

// ============================================================================
// Endpoint Catalog
// ============================================================================

/// A OneRoster v1.1 roster operation.
///
/// Collection endpoints accept [`ListOptions`]; single-resource endpoints
/// address one record by its sourcedId.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// The collection of demographics records.
    AllDemographics,
    /// One demographics record.
    Demographics { sourced_id: String },
    /// The collection of enrollments.
    AllEnrollments,
    /// One enrollment.
    Enrollment { sourced_id: String },
    /// The collection of orgs.
    AllOrgs,
    /// One org.
    Org { sourced_id: String },
    /// The collection of schools. A school is an org of type `school`.
    AllSchools,
    /// One school.
    School { sourced_id: String },
    /// The collection of students. A student is a user with the student role.
    AllStudents,
    /// One student.
    Student { sourced_id: String },
    /// The collection of teachers. A teacher is a user with the teacher role.
    AllTeachers,
    /// One teacher.
    Teacher { sourced_id: String },
    /// The collection of users.
    AllUsers,
    /// One user.
    User { sourced_id: String },
    /// The students attending one school.
    StudentsForSchool { school_sourced_id: String },
    /// The teachers teaching at one school.
    TeachersForSchool { school_sourced_id: String },
}

impl Endpoint {
    /// Relative path of this operation under the API root.
    pub fn path_segments(&self) -> Vec<&str> {
        match self {
            Self::AllDemographics => vec!["demographics"],
            Self::Demographics { sourced_id } => vec!["demographics", sourced_id],
            Self::AllEnrollments => vec!["enrollments"],
            Self::Enrollment { sourced_id } => vec!["enrollments", sourced_id],
            Self::AllOrgs => vec!["orgs"],
            Self::Org { sourced_id } => vec!["orgs", sourced_id],
            Self::AllSchools => vec!["schools"],
            Self::School { sourced_id } => vec!["schools", sourced_id],
            Self::AllStudents => vec!["students"],
            Self::Student { sourced_id } => vec!["students", sourced_id],
            Self::AllTeachers => vec!["teachers"],
            Self::Teacher { sourced_id } => vec!["teachers", sourced_id],
            Self::AllUsers => vec!["users"],
            Self::User { sourced_id } => vec!["users", sourced_id],
            Self::StudentsForSchool { school_sourced_id } => {
                vec!["schools", school_sourced_id, "students"]
            }
            Self::TeachersForSchool { school_sourced_id } => {
                vec!["schools", school_sourced_id, "teachers"]
            }
        }
    }

    /// Build the full request URL for this operation.
    ///
    /// The base URL may be a true root (`https://example.com/oneroster`) or
    /// already end in `/ims/oneroster/v1p1`; the prefix is appended only when
    /// absent. Query parameters are emitted in `limit`, `offset`, `filter`
    /// order, the filter percent-encoded; no query string is emitted when no
    /// parameter is set.
    pub fn request_url(&self, base: &Url, options: &ListOptions) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::url_components("base URL cannot have a path appended"))?;
            segments.pop_if_empty();
            if !has_api_prefix(base) {
                segments.extend(API_PREFIX);
            }
            segments.extend(self.path_segments());
        }
        url.set_query(query_string(options).as_deref());
        Ok(url)
    }
}

/// Check whether the base URL path already ends in the API version prefix.
///
/// A trailing slash is tolerated.
fn has_api_prefix(base: &Url) -> bool {
    let Some(segments) = base.path_segments() else {
        return false;
    };
    let segments: Vec<&str> = segments.filter(|segment| !segment.is_empty()).collect();
    segments.len() >= API_PREFIX.len()
        && segments[segments.len() - API_PREFIX.len()..] == API_PREFIX
}

/// Render the list parameters as an already-encoded query string.
///
/// Built by hand: the form serializer in the url crate would encode spaces in
/// the filter as `+`, which OneRoster servers reject when verifying the OAuth
/// signature.
fn query_string(options: &ListOptions) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(limit) = options.limit {
        parts.push(format!("limit={limit}"));
    }
    if let Some(offset) = options.offset {
        parts.push(format!("offset={offset}"));
    }
    if let Some(filter) = &options.filter {
        parts.push(format!("filter={}", oauth_encode(filter)));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("&"))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn url(input: &str) -> Url {
        Url::parse(input).unwrap()
    }

    #[test]
    fn test_prefix_appended_to_bare_domain() {
        let built = Endpoint::AllOrgs
            .request_url(&url("https://test.com"), &ListOptions::default())
            .unwrap();
        assert_eq!(built.as_str(), "https://test.com/ims/oneroster/v1p1/orgs");
    }

    #[test]
    fn test_prefix_appended_after_existing_path() {
        let built = Endpoint::AllOrgs
            .request_url(&url("https://test.com/ims/"), &ListOptions::default())
            .unwrap();
        assert_eq!(
            built.as_str(),
            "https://test.com/ims/ims/oneroster/v1p1/orgs"
        );
    }

    #[test]
    fn test_prefix_not_duplicated() {
        let built = Endpoint::AllOrgs
            .request_url(
                &url("https://test.com/ims/oneroster/v1p1"),
                &ListOptions::default(),
            )
            .unwrap();
        assert_eq!(built.as_str(), "https://test.com/ims/oneroster/v1p1/orgs");
    }

    #[test]
    fn test_prefix_not_duplicated_with_trailing_slash() {
        let built = Endpoint::AllOrgs
            .request_url(
                &url("https://test.com/ims/oneroster/v1p1/"),
                &ListOptions::default(),
            )
            .unwrap();
        assert_eq!(built.as_str(), "https://test.com/ims/oneroster/v1p1/orgs");
    }

    #[test]
    fn test_prefix_detected_under_longer_path() {
        let built = Endpoint::AllUsers
            .request_url(
                &url("https://district.example.com/oneroster/ims/oneroster/v1p1"),
                &ListOptions::default(),
            )
            .unwrap();
        assert_eq!(
            built.as_str(),
            "https://district.example.com/oneroster/ims/oneroster/v1p1/users"
        );
    }

    #[test]
    fn test_limit_offset_and_filter_query() {
        let options = ListOptions::new()
            .limit(100)
            .offset(1515)
            .filter("role='administrator' OR role='student' OR role='teacher'");
        let built = Endpoint::AllOrgs
            .request_url(&url("https://test.com"), &options)
            .unwrap();
        assert_eq!(
            built.as_str(),
            "https://test.com/ims/oneroster/v1p1/orgs?limit=100&offset=1515&filter=role%3D%27administrator%27%20OR%20role%3D%27student%27%20OR%20role%3D%27teacher%27"
        );
    }

    #[test]
    fn test_limit_only_query() {
        let built = Endpoint::AllOrgs
            .request_url(&url("https://test.com"), &ListOptions::new().limit(50))
            .unwrap();
        assert_eq!(
            built.as_str(),
            "https://test.com/ims/oneroster/v1p1/orgs?limit=50"
        );
    }

    #[test]
    fn test_no_options_means_no_query_string() {
        let built = Endpoint::AllOrgs
            .request_url(&url("https://test.com"), &ListOptions::default())
            .unwrap();
        assert!(!built.as_str().contains('?'));
    }

    #[test]
    fn test_single_resource_path() {
        let built = Endpoint::Org {
            sourced_id: "org-123".to_string(),
        }
        .request_url(&url("https://test.com"), &ListOptions::default())
        .unwrap();
        assert_eq!(
            built.as_str(),
            "https://test.com/ims/oneroster/v1p1/orgs/org-123"
        );
    }

    #[test]
    fn test_nested_collection_path() {
        let built = Endpoint::StudentsForSchool {
            school_sourced_id: "sch-9".to_string(),
        }
        .request_url(&url("https://test.com"), &ListOptions::new().limit(100))
        .unwrap();
        assert_eq!(
            built.as_str(),
            "https://test.com/ims/oneroster/v1p1/schools/sch-9/students?limit=100"
        );
    }

    #[test]
    fn test_sourced_id_is_percent_encoded() {
        let built = Endpoint::User {
            sourced_id: "user one/two".to_string(),
        }
        .request_url(&url("https://test.com"), &ListOptions::default())
        .unwrap();
        assert_eq!(
            built.as_str(),
            "https://test.com/ims/oneroster/v1p1/users/user%20one%2Ftwo"
        );
    }

    #[test]
    fn test_cannot_be_a_base_url_rejected() {
        let result = Endpoint::AllOrgs.request_url(
            &url("mailto:admin@test.com"),
            &ListOptions::default(),
        );
        assert!(matches!(result, Err(Error::UrlComponents { .. })));
    }

    #[test]
    fn test_all_collection_paths() {
        for (endpoint, path) in [
            (Endpoint::AllDemographics, "demographics"),
            (Endpoint::AllEnrollments, "enrollments"),
            (Endpoint::AllOrgs, "orgs"),
            (Endpoint::AllSchools, "schools"),
            (Endpoint::AllStudents, "students"),
            (Endpoint::AllTeachers, "teachers"),
            (Endpoint::AllUsers, "users"),
        ] {
            assert_eq!(endpoint.path_segments(), vec![path]);
        }
    }
}
