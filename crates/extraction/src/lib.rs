//! `larder-extraction`
//!
//! **Responsibility:** the external vision/LLM provider boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on catalog state.
//! - It must not mutate domain state.
//! - It turns an invoice image into **candidate line items**, nothing more.
//!
//! The provider is treated as an opaque collaborator: one request, one
//! response, a bounded timeout, no retries. Its output is run through a
//! strict schema-validated parse before anything downstream sees it.

pub mod client;
pub mod error;
pub mod parse;
pub mod types;

pub use client::{ExtractionClient, OpenAiVisionClient};
pub use error::ExtractionError;
pub use parse::parse_extraction;
pub use types::{ExtractedLine, InvoiceExtraction};
