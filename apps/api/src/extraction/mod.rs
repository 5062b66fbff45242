// Document text extraction.
// Implements: PDF, plain-text, and Markdown extraction behind the upload endpoint.
// CPU-bound PDF parsing must run inside tokio::task::spawn_blocking.

pub mod extractor;
pub mod handlers;
