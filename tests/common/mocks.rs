use aicode_client::{
    Error, Result,
    transport::{RequestOptions, Transport},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// One observed transport call, captured verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub path: String,
    pub body: String,
    pub options: Option<RequestOptions>,
}

/// Recording transport fake. Hands out canned responses in order and keeps
/// every call it received for later inspection.
#[derive(Debug)]
pub struct RecordingTransport {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub status_error: Option<(u16, String)>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            status_error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<String>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_status_error(mut self, status: u16, body: impl Into<String>) -> Self {
        self.status_error = Some((status, body.into()));
        self
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post(
        &self,
        path: &str,
        body: String,
        options: Option<&RequestOptions>,
    ) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            path: path.to_string(),
            body,
            options: options.cloned(),
        });

        if let Some((status, body)) = &self.status_error {
            return Err(Error::Status {
                status: *status,
                body: body.clone(),
            });
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::internal("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}
