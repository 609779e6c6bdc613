// HTTP client for the Stack Exchange questions API
pub mod retry;
pub mod stackexchange;

// Re-export common types
pub use retry::RetryConfig;
pub use stackexchange::{ApiQuestion, StackExchangeClient, StackExchangeError};
