// Repository module structure
pub mod errors;
mod in_memory;
mod log_sink;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use in_memory::InMemoryLogSink;
pub use log_sink::LogSink;
