pub mod client;
pub mod prompt;
pub mod summarizer;

pub use client::OllamaClient;
pub use summarizer::{analyze, SummaryMode};
