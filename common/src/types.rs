use serde::{Deserialize, Serialize};

/// Trigger element that starts a submission.
pub const GENERATE_MINDMAP_ID: &str = "generate-mindmap";
pub const COURSE_TITLE_ID: &str = "course-title";
pub const COURSE_DESCRIPTION_ID: &str = "course-description";
pub const TEACHING_OBJECTIVES_ID: &str = "teaching-objectives";

/// Endpoint path the payload is posted to.
pub const GENERATE_MINDMAP_PATH: &str = "/generate-mindmap";

/// Course description sent to the mindmap server.
///
/// Every field is always serialized, empty or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindmapRequest {
    pub course_title: String,
    pub course_description: String,
    pub teaching_objectives: String,
}

impl MindmapRequest {
    pub fn new(
        course_title: impl Into<String>,
        course_description: impl Into<String>,
        teaching_objectives: impl Into<String>,
    ) -> Self {
        Self {
            course_title: course_title.into(),
            course_description: course_description.into(),
            teaching_objectives: teaching_objectives.into(),
        }
    }
}

/// Whatever JSON the server answers with. Shape is owned by the server.
pub type MindmapResult = serde_json::Value;
