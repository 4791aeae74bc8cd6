pub mod provider;
pub mod gemini;
pub mod types;

pub use provider::LLMProvider;
pub use gemini::GeminiProvider;
pub use types::LLMResponse;
