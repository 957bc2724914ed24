pub mod args;
pub mod config;
pub mod logging;
pub mod op;
pub mod ops;

pub use ops::{Check, Derive, Generate, Inspect, Version};
