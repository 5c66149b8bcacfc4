use crate::core::jsonp;
use crate::domain::model::CompletedCoursesResponse;
use crate::domain::ports::{ConfigProvider, CourseSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the completed-course list over the padded-JSON transport.
///
/// Issues exactly one GET per invocation: no retry, no caching, no
/// cancellation beyond dropping the future.
pub struct JsonpClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> JsonpClient<C> {
    pub fn new(config: C) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { config, client }
    }

    fn user_url(&self) -> String {
        format!(
            "{}/users/{}.json",
            self.config.endpoint_base().trim_end_matches('/'),
            self.config.user()
        )
    }
}

#[async_trait]
impl<C: ConfigProvider> CourseSource for JsonpClient<C> {
    async fn completed_courses(&self) -> Result<CompletedCoursesResponse> {
        let url = self.user_url();
        let callback = self.config.callback();

        tracing::debug!("Requesting completed courses from: {}", url);
        let response = self
            .client
            .get(&url)
            .query(&[("callback", callback)])
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Course API response status: {}", response.status());
        let body = response.text().await?;

        let json = jsonp::strip_padding(&body, callback)?;
        let parsed: CompletedCoursesResponse = serde_json::from_str(json)?;

        tracing::debug!(
            "Parsed {} completed courses",
            parsed.courses.completed.len()
        );
        Ok(parsed)
    }
}
