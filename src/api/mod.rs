use crate::{
    Result,
    transport::{RequestOptions, Transport},
};
use std::sync::Arc;
use tracing::debug;

pub const GENERATE_PATH: &str = "/ai/code/generate";

/// Client for the AI code-generation endpoints. A thin passthrough: it adds
/// the path and method to whatever the shared transport already does, and
/// owns no state beyond the transport handle.
#[derive(Clone)]
pub struct CodeGeneratorClient {
    transport: Arc<dyn Transport>,
}

impl CodeGeneratorClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Forwards `body` to the generate endpoint and returns the raw
    /// response. The body is opaque at this layer: not parsed, not
    /// validated, transmitted byte-for-byte. Transport failures surface
    /// unchanged.
    pub async fn generate_code(
        &self,
        body: String,
        options: Option<RequestOptions>,
    ) -> Result<String> {
        debug!("Requesting code generation ({} byte body)", body.len());
        self.transport
            .post(GENERATE_PATH, body, options.as_ref())
            .await
    }
}
