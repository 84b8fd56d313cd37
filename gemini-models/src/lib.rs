//! List Gemini models that support content generation.

pub mod app;
pub mod client;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod models;
pub mod source;

#[cfg(test)]
mod test_support;

pub use gemini_models_types as types;

pub use app::{run, Outcome};
pub use client::{Client, ClientBuilder, HttpOptions};
pub use error::{Error, Result};
pub use source::ModelSource;
