pub mod config;
pub mod preset;
