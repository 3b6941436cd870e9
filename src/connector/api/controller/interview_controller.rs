use axum::Json;

use crate::domain::{InterviewReply, InterviewRequest};

use super::super::{ApiError, Container};

pub struct InterviewController<'a> {
    container: &'a Container,
}

impl<'a> InterviewController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Relay a raw JSON request body and shape the outcome for HTTP.
    pub async fn relay(&self, body: &[u8]) -> Result<Json<InterviewReply>, ApiError> {
        let request = InterviewRequest::from_json(body)?;
        let reply = self.container.interview_use_case().execute(request).await?;
        Ok(Json(reply))
    }
}
