//! Form Submission Bridge: posts form fields to the backend and shows the reply.
//!
//! Both operations share one shape: read the inputs, build a JSON body, POST
//! it, pull one string field out of the reply, and write it to the output.
//! Any failure along the way is logged and replaced by the endpoint's fixed
//! error message. Nothing is retried and errors never reach the caller.
//!
//! Operations take `&self` and hold no locks, so overlapping submissions run
//! independently; when they share an output, the last one to settle wins.

pub mod payloads;

#[cfg(test)]
mod test_backend;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn, Instrument};
use uuid::Uuid;

use crate::errors::SubmitError;
use crate::form::{FormDataSource, OutputSink};

pub use payloads::{
    render_field, CoverLetterRequest, Endpoint, ResizeResumeRequest, COVER_LETTER, RESIZE_RESUME,
};

/// How a submission ended. Exactly one output write happened either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// The response field was written to the output.
    Displayed,
    /// The endpoint's error message was written to the output.
    Failed,
}

/// HTTP bridge to the resume backend.
#[derive(Clone)]
pub struct FormBridge {
    client: Client,
    base_url: String,
}

impl FormBridge {
    /// `base_url` is the backend origin; endpoint paths are appended to it.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SubmitError> {
        // No request timeout: a submission runs until the backend answers
        // or the connection fails.
        let client = Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Reads `resume` and `job-description`, POSTs them to
    /// `/generate_cover_letter`, and shows the `cover_letter` field.
    pub async fn submit_cover_letter_request(
        &self,
        form: &dyn FormDataSource,
        output: &dyn OutputSink,
    ) -> Settled {
        self.submit_form(&COVER_LETTER, form, CoverLetterRequest::from_form, output)
            .await
    }

    /// Reads `resume` and `page-length`, POSTs them to `/resize_resume`,
    /// and shows the `resume_resizing_guidance` field.
    pub async fn submit_resume_resize_request(
        &self,
        form: &dyn FormDataSource,
        output: &dyn OutputSink,
    ) -> Settled {
        self.submit_form(&RESIZE_RESUME, form, ResizeResumeRequest::from_form, output)
            .await
    }

    /// Generic submission: builds the payload from the form, sends it to
    /// `endpoint`, and writes either the response field or the endpoint's
    /// error message to `output`, exactly once.
    pub async fn submit_form<P, B>(
        &self,
        endpoint: &Endpoint,
        form: &dyn FormDataSource,
        build_payload: B,
        output: &dyn OutputSink,
    ) -> Settled
    where
        P: Serialize,
        B: FnOnce(&dyn FormDataSource) -> P,
    {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("submit_form", endpoint = endpoint.path, %request_id);

        async move {
            let payload = build_payload(form);

            match self.fetch_field(endpoint, &payload).await {
                Ok(text) => {
                    info!("Submission succeeded ({} chars)", text.len());
                    output.set_text(&text);
                    Settled::Displayed
                }
                Err(e) => {
                    error!(code = e.code(), "Submission failed: {e}");
                    output.set_text(endpoint.error_message);
                    Settled::Failed
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn fetch_field<P: Serialize>(
        &self,
        endpoint: &Endpoint,
        payload: &P,
    ) -> Result<String, SubmitError> {
        let url = format!("{}{}", self.base_url, endpoint.path);
        let body = serde_json::to_vec(payload)?;
        debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        if body.is_null() {
            return Err(SubmitError::NullBody);
        }

        let (text, present) = render_field(&body, endpoint.response_field);
        if !present {
            warn!(
                "Response has no '{}' field; displaying empty text",
                endpoint.response_field
            );
        }

        Ok(text)
    }
}
