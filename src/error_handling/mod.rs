//! Error handling and analysis statistics.
//!
//! Error types are categorized into:
//! - **Fatal**: invalid input URL or a failed page fetch (`AnalysisError`)
//! - **Recoverable**: performance-scoring failures (`PerformanceError`), absorbed
//!   by the orchestrator
//! - **Setup**: logger and HTTP client initialization (`InitializationError`)

mod stats;
mod types;

// Re-export public API
pub use stats::AnalysisStats;
pub use types::{AnalysisError, AnalysisEvent, InitializationError, PerformanceError};
