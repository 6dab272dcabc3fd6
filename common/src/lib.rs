pub mod config;
pub mod error;
pub mod results;
pub mod util;

pub const NS_TO_US: f64 = 1_000.0;
