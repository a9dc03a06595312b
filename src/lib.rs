#![deny(warnings)]

pub mod checks;
pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod requests;
pub mod responses;
pub mod session;
pub mod telemetry;
pub mod token;

// Testing utilities (always available for integration tests)
pub mod testing;

// Re-export commonly used types for convenience
pub use checks::{Account, Run, Runner};
pub use client::Client;
pub use error::{Error, Result};
pub use report::{Failure, Report, Step};
pub use session::Session;
