use serde::{Deserialize, Serialize};

/// One completed-course entry as the remote API reports it. Field values are
/// taken verbatim; a record missing a field renders with an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(default)]
    pub title: String,
    /// Badge image URL.
    #[serde(default)]
    pub badge: String,
    /// Course page URL.
    #[serde(default)]
    pub url: String,
}

/// A payload without `courses` or `courses.completed` is malformed and fails
/// deserialization; these fields are deliberately not defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedCourses {
    pub completed: Vec<CourseRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedCoursesResponse {
    pub courses: CompletedCourses,
}
