use std::collections::HashMap;
use std::sync::RwLock;

use mindmap_common::{
    MindmapRequest, COURSE_DESCRIPTION_ID, COURSE_TITLE_ID, GENERATE_MINDMAP_ID,
    TEACHING_OBJECTIVES_ID,
};

use crate::error::{FormError, Result};

/// Read access to named form elements.
pub trait FormSource: Send + Sync {
    fn contains(&self, id: &str) -> bool;

    /// Current value of an input element, `None` if the element is absent.
    fn value(&self, id: &str) -> Option<String>;
}

/// Snapshot the three course fields into a fresh payload.
pub fn read_request(form: &dyn FormSource) -> Result<MindmapRequest> {
    let field = |id: &str| {
        form.value(id).ok_or_else(|| FormError::MissingElement { id: id.to_string() })
    };

    Ok(MindmapRequest {
        course_title: field(COURSE_TITLE_ID)?,
        course_description: field(COURSE_DESCRIPTION_ID)?,
        teaching_objectives: field(TEACHING_OBJECTIVES_ID)?,
    })
}

/// In-memory form. Values can be edited through a shared reference while
/// submissions are in flight.
#[derive(Debug, Default)]
pub struct Form {
    elements: RwLock<HashMap<String, String>>,
}

impl Form {
    /// A form with no elements at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// The course page: trigger plus the three inputs, all empty.
    pub fn course() -> Self {
        let form = Self::new();
        for id in [
            GENERATE_MINDMAP_ID,
            COURSE_TITLE_ID,
            COURSE_DESCRIPTION_ID,
            TEACHING_OBJECTIVES_ID,
        ] {
            form.set_value(id, "");
        }
        form
    }

    /// Set an element's value, adding the element if needed.
    pub fn set_value(&self, id: &str, value: impl Into<String>) {
        let mut elements = self.elements.write().unwrap_or_else(|e| e.into_inner());
        elements.insert(id.to_string(), value.into());
    }

    pub fn remove(&self, id: &str) {
        let mut elements = self.elements.write().unwrap_or_else(|e| e.into_inner());
        elements.remove(id);
    }

    pub fn fill(&self, request: &MindmapRequest) {
        self.set_value(COURSE_TITLE_ID, request.course_title.as_str());
        self.set_value(COURSE_DESCRIPTION_ID, request.course_description.as_str());
        self.set_value(TEACHING_OBJECTIVES_ID, request.teaching_objectives.as_str());
    }
}

impl FormSource for Form {
    fn contains(&self, id: &str) -> bool {
        let elements = self.elements.read().unwrap_or_else(|e| e.into_inner());
        elements.contains_key(id)
    }

    fn value(&self, id: &str) -> Option<String> {
        let elements = self.elements.read().unwrap_or_else(|e| e.into_inner());
        elements.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_form_reads_empty_strings() {
        let form = Form::course();
        assert!(form.contains(GENERATE_MINDMAP_ID));
        assert_eq!(read_request(&form).unwrap(), MindmapRequest::default());
    }

    #[test]
    fn test_read_current_values() {
        let form = Form::course();
        form.fill(&MindmapRequest::new("Intro", "Basics", "Understand X"));
        assert_eq!(
            read_request(&form).unwrap(),
            MindmapRequest::new("Intro", "Basics", "Understand X")
        );

        form.set_value(COURSE_TITLE_ID, "Intro II");
        assert_eq!(read_request(&form).unwrap().course_title, "Intro II");
    }

    #[test]
    fn test_missing_input_element() {
        let form = Form::course();
        form.remove(COURSE_DESCRIPTION_ID);
        assert_eq!(
            read_request(&form).unwrap_err(),
            FormError::MissingElement {
                id: COURSE_DESCRIPTION_ID.to_string()
            }
        );
    }
}
