pub mod types;
pub mod error;
pub mod digit;
pub mod identifier;
pub mod checksum;
pub mod pattern;
pub mod render;
pub mod asset;
pub mod pipeline;
pub mod config;
