//! Shared types for the Gemini model listing tool.

pub mod models;
