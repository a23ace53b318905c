use crate::routes::{health, lesson};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(health::health, lesson::get_lessons),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Lessons", description = "Lesson related endpoints"),
    ),
    info(
        title = "Lessons API",
        version = "1.0.0",
        description = "Lesson listing with teachers, students and attendance",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
