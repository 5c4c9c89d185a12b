pub mod catalog;
pub mod commands;
pub mod config;
pub mod constants;
pub mod diff;
pub mod export;
pub mod render;
pub mod snapshot;
pub mod substitution;
