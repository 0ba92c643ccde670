mod handlers;
pub mod metrics;
mod pipeline;

pub use pipeline::EventProcessor;
