pub mod market_maker;

pub use market_maker::*;
