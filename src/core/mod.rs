pub mod client;
pub mod dom;
pub mod engine;
pub mod jsonp;
pub mod render;

pub use crate::domain::model::{CompletedCoursesResponse, CourseRecord};
pub use crate::domain::ports::{ConfigProvider, CourseSource, Storage};
pub use crate::utils::error::Result;
