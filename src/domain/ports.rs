use crate::domain::model::CompletedCoursesResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Base URL of the course API, without the `/users/...` suffix.
    fn endpoint_base(&self) -> &str;
    /// User whose completed courses are fetched; part of the endpoint path.
    fn user(&self) -> &str;
    /// JSONP callback name the server is asked to wrap the payload in.
    fn callback(&self) -> &str;
    fn output_path(&self) -> &str;
}

/// The one suspension point in the system: a single fetch of the user's
/// completed-course list.
#[async_trait]
pub trait CourseSource: Send + Sync {
    async fn completed_courses(&self) -> Result<CompletedCoursesResponse>;
}
