use serde::Serialize;
use serde_json::Value;

use crate::form::FormDataSource;

/// One backend endpoint: where to POST, which response field to show, and
/// what to show instead when anything goes wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub response_field: &'static str,
    pub error_message: &'static str,
}

pub const COVER_LETTER: Endpoint = Endpoint {
    path: "/generate_cover_letter",
    response_field: "cover_letter",
    error_message: "Error generating cover letter. Please try again.",
};

pub const RESIZE_RESUME: Endpoint = Endpoint {
    path: "/resize_resume",
    response_field: "resume_resizing_guidance",
    error_message: "Error getting resume resizing guidance. Please try again.",
};

/// Body of `POST /generate_cover_letter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverLetterRequest {
    pub resume_text: String,
    pub job_description: String,
}

impl CoverLetterRequest {
    pub fn from_form(form: &dyn FormDataSource) -> Self {
        Self {
            resume_text: form.resume(),
            job_description: form.job_description(),
        }
    }
}

/// Body of `POST /resize_resume`. The page length stays a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResizeResumeRequest {
    pub resume_text: String,
    pub target_page_length: String,
}

impl ResizeResumeRequest {
    pub fn from_form(form: &dyn FormDataSource) -> Self {
        Self {
            resume_text: form.resume(),
            target_page_length: form.page_length(),
        }
    }
}

/// Renders `field` of a response body as display text.
///
/// Strings are shown verbatim. A missing field or `null` renders as the
/// empty string. Any other JSON value is shown as its JSON text, so
/// `{"a":1}` stays `{"a":1}` and `[1,2]` stays `[1,2]`; a browser text node
/// would instead show `[object Object]` and `1,2`.
///
/// The flag is false when the field was absent or null, so the caller can
/// log it.
pub fn render_field(body: &Value, field: &str) -> (String, bool) {
    match body.get(field) {
        Some(Value::String(text)) => (text.clone(), true),
        Some(Value::Null) | None => (String::new(), false),
        Some(other) => (other.to_string(), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormFields;
    use serde_json::json;

    fn form() -> FormFields {
        FormFields::new()
            .with_resume("my resume")
            .with_job_description("the job")
            .with_page_length("1")
    }

    #[test]
    fn test_cover_letter_payload_keys() {
        let body = serde_json::to_value(CoverLetterRequest::from_form(&form())).unwrap();
        assert_eq!(
            body,
            json!({ "resume_text": "my resume", "job_description": "the job" })
        );
    }

    #[test]
    fn test_resize_payload_keys() {
        let body = serde_json::to_value(ResizeResumeRequest::from_form(&form())).unwrap();
        assert_eq!(
            body,
            json!({ "resume_text": "my resume", "target_page_length": "1" })
        );
    }

    #[test]
    fn test_page_length_stays_a_string() {
        let form = FormFields::new().with_page_length("1.5 pages");
        let body = serde_json::to_value(ResizeResumeRequest::from_form(&form)).unwrap();
        assert_eq!(body["target_page_length"], json!("1.5 pages"));
    }

    #[test]
    fn test_render_string_field() {
        let (text, present) = render_field(&json!({ "cover_letter": "Dear Hiring Manager..." }), "cover_letter");
        assert_eq!(text, "Dear Hiring Manager...");
        assert!(present);
    }

    #[test]
    fn test_render_missing_and_null_fields_as_empty() {
        assert_eq!(render_field(&json!({}), "cover_letter"), (String::new(), false));
        assert_eq!(
            render_field(&json!({ "cover_letter": null }), "cover_letter"),
            (String::new(), false)
        );
        assert_eq!(render_field(&json!([1, 2]), "cover_letter"), (String::new(), false));
    }

    #[test]
    fn test_render_non_string_as_json_text() {
        let (text, present) = render_field(&json!({ "resume_resizing_guidance": 2 }), "resume_resizing_guidance");
        assert_eq!(text, "2");
        assert!(present);
    }

    #[test]
    fn test_endpoints_do_not_share_fields() {
        assert_ne!(COVER_LETTER.path, RESIZE_RESUME.path);
        assert_ne!(COVER_LETTER.response_field, RESIZE_RESUME.response_field);
        assert_ne!(COVER_LETTER.error_message, RESIZE_RESUME.error_message);
    }
}
