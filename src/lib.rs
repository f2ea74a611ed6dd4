pub mod cli;
pub mod command;
pub mod config;
pub mod env;
mod error;
pub mod logger;
pub mod style;
pub mod tools;

pub use error::{Context, HelperError, Result, anyhow};

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
