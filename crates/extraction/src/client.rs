use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::error::ExtractionError;
use crate::parse::parse_extraction;
use crate::types::InvoiceExtraction;

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// The provider call is a single bounded request/response; no retries.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_COMPLETION_TOKENS: u32 = 500;

/// Instruction sent alongside the invoice image. The JSON shape named here
/// is the contract [`parse_extraction`] validates against.
const EXTRACTION_PROMPT: &str = "Extract only the inventory items with their quantities and unit \
prices from this invoice. Return in this exact JSON format: { items: [{ name: string, quantity: \
number, unit: string, costPerUnit: number }], invoiceNumber: string, date: string, supplier: string }";

/// Opaque external collaborator that reads an invoice image.
///
/// Implementations take the image payload (a base64 data URL) and return
/// candidate line items plus invoice metadata. The one genuinely async,
/// cancellable-on-timeout boundary in the system.
#[async_trait]
pub trait ExtractionClient: Send + Sync {
    async fn extract(&self, image_data_url: &str) -> Result<InvoiceExtraction, ExtractionError>;
}

/// OpenAI vision-model implementation of [`ExtractionClient`].
pub struct OpenAiVisionClient {
    api_key: Option<String>,
    model: String,
    http: reqwest::Client,
}

impl OpenAiVisionClient {
    /// Create a client with the default model.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL.to_string())
    }

    pub fn with_model(api_key: Option<String>, model: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("failed to build http client");
        Self { api_key, model, http }
    }

    /// Build from `OPENAI_API_KEY` / `OPENAI_MODEL`.
    ///
    /// A missing key is tolerated at startup so the catalog routes keep
    /// serving; extraction requests then fail with
    /// [`ExtractionError::NotConfigured`].
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").ok();
        if api_key.is_none() {
            warn!("OPENAI_API_KEY not set; invoice extraction is disabled");
        }
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::with_model(api_key, model)
    }
}

#[async_trait]
impl ExtractionClient for OpenAiVisionClient {
    #[instrument(skip(self, image_data_url), fields(model = %self.model))]
    async fn extract(&self, image_data_url: &str) -> Result<InvoiceExtraction, ExtractionError> {
        let api_key = self.api_key.as_deref().ok_or(ExtractionError::NotConfigured)?;
        let request_id = Uuid::now_v7();

        let request = ChatRequest {
            model: &self.model,
            messages: vec![Message {
                role: "user",
                content: vec![
                    ContentPart::Text { text: EXTRACTION_PROMPT },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: image_data_url },
                    },
                ],
            }],
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        info!(%request_id, model = %self.model, "sending invoice to extraction provider");

        let response = self
            .http
            .post(OPENAI_CHAT_URL)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(%request_id, status = status.as_u16(), "extraction provider rejected request");
            return Err(ExtractionError::Provider {
                status: status.as_u16(),
                detail: detail.chars().take(512).collect(),
            });
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ExtractionError::MissingContent)?;

        debug!(%request_id, content_len = content.len(), "provider content received");

        let extraction = parse_extraction(&content)?;
        info!(%request_id, items = extraction.items.len(), "invoice extracted");
        Ok(extraction)
    }
}

// Wire shapes for the chat-completions call. Only the fields this client
// reads or writes are modeled.

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Debug, Serialize)]
struct ImageUrl<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}
