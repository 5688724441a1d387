//! Shared automation runtime services.

pub mod config;
pub mod context;
pub mod error;
pub mod process;
