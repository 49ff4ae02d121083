pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod transport;

pub use error::{Error, Result};
