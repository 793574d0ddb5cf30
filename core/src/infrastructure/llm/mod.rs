pub mod gemini_client;

pub use gemini_client::{API_KEY_HEADER, GeminiLLMClient};
