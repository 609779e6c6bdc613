// Core tracking-and-diffing engine - the brain of the operation
pub mod config;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod models;
pub mod sinks;
pub mod sources;
pub mod tracker;
pub mod watch;

pub use config::Config;
pub use error::Error;
pub use filter::TagFilter;
pub use models::Question;
pub use sinks::{MenuHandle, MenuSink, Notifier};
pub use tracker::{QuestionTracker, Reconciliation, TrackedEntry};
pub use watch::{QuestionSource, Watcher};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
