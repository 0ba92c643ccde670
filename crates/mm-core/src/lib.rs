pub mod config;
pub mod error;
pub mod events;
pub mod types;

pub use config::IndexerConfig;
pub use error::{IndexerError, Result};
