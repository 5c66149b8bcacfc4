use crate::core::render;
use crate::domain::ports::{ConfigProvider, CourseSource, Storage};
use crate::utils::error::Result;

pub const OUTPUT_FILE: &str = "badges.html";

/// One-shot driver: fetch the completed-course list, render the badge
/// container, write the page. Runs exactly once per process.
pub struct BadgeEngine<S: CourseSource, T: Storage, C: ConfigProvider> {
    source: S,
    storage: T,
    config: C,
}

impl<S: CourseSource, T: Storage, C: ConfigProvider> BadgeEngine<S, T, C> {
    pub fn new(source: S, storage: T, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!(
            "Fetching completed courses for user '{}'",
            self.config.user()
        );
        let response = self.source.completed_courses().await?;
        let courses = response.courses.completed;
        tracing::info!("Fetched {} completed courses", courses.len());

        let mut container = render::badges_container();
        render::render_courses(&mut container, &courses);
        tracing::debug!("Rendered {} course fragments", container.child_count());

        let page = render::render_page(&container, self.config.user());
        self.storage.write_file(OUTPUT_FILE, page.as_bytes()).await?;

        let output_path = format!("{}/{}", self.config.output_path(), OUTPUT_FILE);
        tracing::debug!("Badge page saved to {}", output_path);
        Ok(output_path)
    }
}
