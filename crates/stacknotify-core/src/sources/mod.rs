// Question source implementations
pub mod stackexchange;

pub use stackexchange::StackExchangeSource;
