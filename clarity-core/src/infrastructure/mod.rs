// clarity-core/src/infrastructure/mod.rs

pub mod config;
pub mod error;
pub mod fixtures;
pub mod fs;
